// Generated by tools/gen_tables.py. Do not edit by hand.

pub static EUC_KR: [(u16, u16); 17048] = [
    (0x0000, 0xac02), (0x0001, 0xac03), (0x0002, 0xac05), (0x0003, 0xac06), (0x0004, 0xac0b), (0x0005, 0xac0c),
    (0x0006, 0xac0d), (0x0007, 0xac0e), (0x0008, 0xac0f), (0x0009, 0xac18), (0x000a, 0xac1e), (0x000b, 0xac1f),
    (0x000c, 0xac21), (0x000d, 0xac22), (0x000e, 0xac23), (0x000f, 0xac25), (0x0010, 0xac26), (0x0011, 0xac27),
    (0x0012, 0xac28), (0x0013, 0xac29), (0x0014, 0xac2a), (0x0015, 0xac2b), (0x0016, 0xac2e), (0x0017, 0xac32),
    (0x0018, 0xac33), (0x0019, 0xac34), (0x0020, 0xac35), (0x0021, 0xac36), (0x0022, 0xac37), (0x0023, 0xac3a),
    (0x0024, 0xac3b), (0x0025, 0xac3d), (0x0026, 0xac3e), (0x0027, 0xac3f), (0x0028, 0xac41), (0x0029, 0xac42),
    (0x002a, 0xac43), (0x002b, 0xac44), (0x002c, 0xac45), (0x002d, 0xac46), (0x002e, 0xac47), (0x002f, 0xac48),
    (0x0030, 0xac49), (0x0031, 0xac4a), (0x0032, 0xac4c), (0x0033, 0xac4e), (0x0034, 0xac4f), (0x0035, 0xac50),
    (0x0036, 0xac51), (0x0037, 0xac52), (0x0038, 0xac53), (0x0039, 0xac55), (0x0040, 0xac56), (0x0041, 0xac57),
    (0x0042, 0xac59), (0x0043, 0xac5a), (0x0044, 0xac5b), (0x0045, 0xac5d), (0x0046, 0xac5e), (0x0047, 0xac5f),
    (0x0048, 0xac60), (0x0049, 0xac61), (0x004a, 0xac62), (0x004b, 0xac63), (0x004c, 0xac64), (0x004d, 0xac65),
    (0x004e, 0xac66), (0x004f, 0xac67), (0x0050, 0xac68), (0x0051, 0xac69), (0x0052, 0xac6a), (0x0053, 0xac6b),
    (0x0054, 0xac6c), (0x0055, 0xac6d), (0x0056, 0xac6e), (0x0057, 0xac6f), (0x0058, 0xac72), (0x0059, 0xac73),
    (0x005a, 0xac75), (0x005b, 0xac76), (0x005c, 0xac79), (0x005d, 0xac7b), (0x005e, 0xac7c), (0x005f, 0xac7d),
    (0x0060, 0xac7e), (0x0061, 0xac7f), (0x0062, 0xac82), (0x0063, 0xac87), (0x0064, 0xac88), (0x0065, 0xac8d),
    (0x0066, 0xac8e), (0x0067, 0xac8f), (0x0068, 0xac91), (0x0069, 0xac92), (0x006a, 0xac93), (0x006b, 0xac95),
    (0x006c, 0xac96), (0x006d, 0xac97), (0x006e, 0xac98), (0x006f, 0xac99), (0x0070, 0xac9a), (0x0071, 0xac9b),
    (0x0072, 0xac9e), (0x0073, 0xaca2), (0x0074, 0xaca3), (0x0075, 0xaca4), (0x0076, 0xaca5), (0x0077, 0xaca6),
    (0x0078, 0xaca7), (0x0079, 0xacab), (0x007a, 0xacad), (0x007b, 0xacae), (0x007c, 0xacb1), (0x007d, 0xacb2),
    (0x007e, 0xacb3), (0x007f, 0xacb4), (0x0080, 0xacb5), (0x0081, 0xacb6), (0x0082, 0xacb7), (0x0083, 0xacba),
    (0x0084, 0xacbe), (0x0085, 0xacbf), (0x0086, 0xacc0), (0x0087, 0xacc2), (0x0088, 0xacc3), (0x0089, 0xacc5),
    (0x008a, 0xacc6), (0x008b, 0xacc7), (0x008c, 0xacc9), (0x008d, 0xacca), (0x008e, 0xaccb), (0x008f, 0xaccd),
    (0x0090, 0xacce), (0x0091, 0xaccf), (0x0092, 0xacd0), (0x0093, 0xacd1), (0x0094, 0xacd2), (0x0095, 0xacd3),
    (0x0096, 0xacd4), (0x0097, 0xacd6), (0x0098, 0xacd8), (0x0099, 0xacd9), (0x009a, 0xacda), (0x009b, 0xacdb),
    (0x009c, 0xacdc), (0x009d, 0xacdd), (0x009e, 0xacde), (0x009f, 0xacdf), (0x00a0, 0xace2), (0x00a1, 0xace3),
    (0x00a2, 0xace5), (0x00a3, 0xace6), (0x00a4, 0xace9), (0x00a5, 0xaceb), (0x00a6, 0xaced), (0x00a7, 0xacee),
    (0x00a8, 0xacf2), (0x00a9, 0xacf4), (0x00aa, 0xacf7), (0x00ab, 0xacf8), (0x00ac, 0xacf9), (0x00ad, 0xacfa),
    (0x00ae, 0xacfb), (0x00af, 0xacfe), (0x00b0, 0xacff), (0x00b1, 0xad01), (0x00b2, 0xad02), (0x00b3, 0xad03),
    (0x00b4, 0xad05), (0x00b5, 0xad07), (0x00b6, 0xad08), (0x00b7, 0xad09), (0x00b8, 0xad0a), (0x00b9, 0xad0b),
    (0x00ba, 0xad0e), (0x00bb, 0xad10), (0x00bc, 0xad12), (0x00bd, 0xad13), (0x00be, 0xad14), (0x00bf, 0xad15),
    (0x00c0, 0xad16), (0x00c1, 0xad17), (0x00c2, 0xad19), (0x00c3, 0xad1a), (0x00c4, 0xad1b), (0x00c5, 0xad1d),
    (0x00c6, 0xad1e), (0x00c7, 0xad1f), (0x00c8, 0xad21), (0x00c9, 0xad22), (0x00ca, 0xad23), (0x00cb, 0xad24),
    (0x00cc, 0xad25), (0x00cd, 0xad26), (0x00ce, 0xad27), (0x00cf, 0xad28), (0x00d0, 0xad2a), (0x00d1, 0xad2b),
    (0x00d2, 0xad2e), (0x00d3, 0xad2f), (0x00d4, 0xad30), (0x00d5, 0xad31), (0x00d6, 0xad32), (0x00d7, 0xad33),
    (0x00de, 0xad36), (0x00df, 0xad37), (0x00e0, 0xad39), (0x00e1, 0xad3a), (0x00e2, 0xad3b), (0x00e3, 0xad3d),
    (0x00e4, 0xad3e), (0x00e5, 0xad3f), (0x00e6, 0xad40), (0x00e7, 0xad41), (0x00e8, 0xad42), (0x00e9, 0xad43),
    (0x00ea, 0xad46), (0x00eb, 0xad48), (0x00ec, 0xad4a), (0x00ed, 0xad4b), (0x00ee, 0xad4c), (0x00ef, 0xad4d),
    (0x00f0, 0xad4e), (0x00f1, 0xad4f), (0x00f2, 0xad51), (0x00f3, 0xad52), (0x00f4, 0xad53), (0x00f5, 0xad55),
    (0x00f6, 0xad56), (0x00f7, 0xad57), (0x00fe, 0xad59), (0x00ff, 0xad5a), (0x0100, 0xad5b), (0x0101, 0xad5c),
    (0x0102, 0xad5d), (0x0103, 0xad5e), (0x0104, 0xad5f), (0x0105, 0xad60), (0x0106, 0xad62), (0x0107, 0xad64),
    (0x0108, 0xad65), (0x0109, 0xad66), (0x010a, 0xad67), (0x010b, 0xad68), (0x010c, 0xad69), (0x010d, 0xad6a),
    (0x010e, 0xad6b), (0x010f, 0xad6e), (0x0110, 0xad6f), (0x0111, 0xad71), (0x0112, 0xad72), (0x0113, 0xad77),
    (0x0114, 0xad78), (0x0115, 0xad79), (0x0116, 0xad7a), (0x0117, 0xad7e), (0x0118, 0xad80), (0x0119, 0xad83),
    (0x011a, 0xad84), (0x011b, 0xad85), (0x011c, 0xad86), (0x011d, 0xad87), (0x011e, 0xad8a), (0x011f, 0xad8b),
    (0x0120, 0xad8d), (0x0121, 0xad8e), (0x0122, 0xad8f), (0x0123, 0xad91), (0x0124, 0xad92), (0x0125, 0xad93),
    (0x0126, 0xad94), (0x0127, 0xad95), (0x0128, 0xad96), (0x0129, 0xad97), (0x012a, 0xad98), (0x012b, 0xad99),
    (0x012c, 0xad9a), (0x012d, 0xad9b), (0x012e, 0xad9e), (0x012f, 0xad9f), (0x0130, 0xada0), (0x0131, 0xada1),
    (0x0132, 0xada2), (0x0133, 0xada3), (0x0134, 0xada5), (0x0135, 0xada6), (0x0136, 0xada7), (0x0137, 0xada8),
    (0x0138, 0xada9), (0x0139, 0xadaa), (0x013a, 0xadab), (0x013b, 0xadac), (0x013c, 0xadad), (0x013d, 0xadae),
    (0x013e, 0xadaf), (0x013f, 0xadb0), (0x0140, 0xadb1), (0x0141, 0xadb2), (0x0142, 0xadb3), (0x0143, 0xadb4),
    (0x0144, 0xadb5), (0x0145, 0xadb6), (0x0146, 0xadb8), (0x0147, 0xadb9), (0x0148, 0xadba), (0x0149, 0xadbb),
    (0x014a, 0xadbc), (0x014b, 0xadbd), (0x014c, 0xadbe), (0x014d, 0xadbf), (0x014e, 0xadc2), (0x014f, 0xadc3),
    (0x0150, 0xadc5), (0x0151, 0xadc6), (0x0152, 0xadc7), (0x0153, 0xadc9), (0x0154, 0xadca), (0x0155, 0xadcb),
    (0x0156, 0xadcc), (0x0157, 0xadcd), (0x0158, 0xadce), (0x0159, 0xadcf), (0x015a, 0xadd2), (0x015b, 0xadd4),
    (0x015c, 0xadd5), (0x015d, 0xadd6), (0x015e, 0xadd7), (0x015f, 0xadd8), (0x0160, 0xadd9), (0x0161, 0xadda),
    (0x0162, 0xaddb), (0x0163, 0xaddd), (0x0164, 0xadde), (0x0165, 0xaddf), (0x0166, 0xade1), (0x0167, 0xade2),
    (0x0168, 0xade3), (0x0169, 0xade5), (0x016a, 0xade6), (0x016b, 0xade7), (0x016c, 0xade8), (0x016d, 0xade9),
    (0x016e, 0xadea), (0x016f, 0xadeb), (0x0170, 0xadec), (0x0171, 0xaded), (0x0172, 0xadee), (0x0173, 0xadef),
    (0x0174, 0xadf0), (0x0175, 0xadf1), (0x0176, 0xadf2), (0x0177, 0xadf3), (0x0178, 0xadf4), (0x0179, 0xadf5),
    (0x017a, 0xadf6), (0x017b, 0xadf7), (0x017c, 0xadfa), (0x017d, 0xadfb), (0x017e, 0xadfd), (0x017f, 0xadfe),
    (0x0180, 0xae02), (0x0181, 0xae03), (0x0182, 0xae04), (0x0183, 0xae05), (0x0184, 0xae06), (0x0185, 0xae07),
    (0x0186, 0xae0a), (0x0187, 0xae0c), (0x0188, 0xae0e), (0x0189, 0xae0f), (0x018a, 0xae10), (0x018b, 0xae11),
    (0x018c, 0xae12), (0x018d, 0xae13), (0x018e, 0xae15), (0x018f, 0xae16), (0x0190, 0xae17), (0x0191, 0xae18),
    (0x0192, 0xae19), (0x0193, 0xae1a), (0x0194, 0xae1b), (0x0195, 0xae1c), (0x019c, 0xae1d), (0x019d, 0xae1e),
    (0x019e, 0xae1f), (0x019f, 0xae20), (0x01a0, 0xae21), (0x01a1, 0xae22), (0x01a2, 0xae23), (0x01a3, 0xae24),
    (0x01a4, 0xae25), (0x01a5, 0xae26), (0x01a6, 0xae27), (0x01a7, 0xae28), (0x01a8, 0xae29), (0x01a9, 0xae2a),
    (0x01aa, 0xae2b), (0x01ab, 0xae2c), (0x01ac, 0xae2d), (0x01ad, 0xae2e), (0x01ae, 0xae2f), (0x01af, 0xae32),
    (0x01b0, 0xae33), (0x01b1, 0xae35), (0x01b2, 0xae36), (0x01b3, 0xae39), (0x01b4, 0xae3b), (0x01b5, 0xae3c),
    (0x01bc, 0xae3d), (0x01bd, 0xae3e), (0x01be, 0xae3f), (0x01bf, 0xae42), (0x01c0, 0xae44), (0x01c1, 0xae47),
    (0x01c2, 0xae48), (0x01c3, 0xae49), (0x01c4, 0xae4b), (0x01c5, 0xae4f), (0x01c6, 0xae51), (0x01c7, 0xae52),
    (0x01c8, 0xae53), (0x01c9, 0xae55), (0x01ca, 0xae57), (0x01cb, 0xae58), (0x01cc, 0xae59), (0x01cd, 0xae5a),
    (0x01ce, 0xae5b), (0x01cf, 0xae5e), (0x01d0, 0xae62), (0x01d1, 0xae63), (0x01d2, 0xae64), (0x01d3, 0xae66),
    (0x01d4, 0xae67), (0x01d5, 0xae6a), (0x01d6, 0xae6b), (0x01d7, 0xae6d), (0x01d8, 0xae6e), (0x01d9, 0xae6f),
    (0x01da, 0xae71), (0x01db, 0xae72), (0x01dc, 0xae73), (0x01dd, 0xae74), (0x01de, 0xae75), (0x01df, 0xae76),
    (0x01e0, 0xae77), (0x01e1, 0xae7a), (0x01e2, 0xae7e), (0x01e3, 0xae7f), (0x01e4, 0xae80), (0x01e5, 0xae81),
    (0x01e6, 0xae82), (0x01e7, 0xae83), (0x01e8, 0xae86), (0x01e9, 0xae87), (0x01ea, 0xae88), (0x01eb, 0xae89),
    (0x01ec, 0xae8a), (0x01ed, 0xae8b), (0x01ee, 0xae8d), (0x01ef, 0xae8e), (0x01f0, 0xae8f), (0x01f1, 0xae90),
    (0x01f2, 0xae91), (0x01f3, 0xae92), (0x01f4, 0xae93), (0x01f5, 0xae94), (0x01f6, 0xae95), (0x01f7, 0xae96),
    (0x01f8, 0xae97), (0x01f9, 0xae98), (0x01fa, 0xae99), (0x01fb, 0xae9a), (0x01fc, 0xae9b), (0x01fd, 0xae9c),
    (0x01fe, 0xae9d), (0x01ff, 0xae9e), (0x0200, 0xae9f), (0x0201, 0xaea0), (0x0202, 0xaea1), (0x0203, 0xaea2),
    (0x0204, 0xaea3), (0x0205, 0xaea4), (0x0206, 0xaea5), (0x0207, 0xaea6), (0x0208, 0xaea7), (0x0209, 0xaea8),
    (0x020a, 0xaea9), (0x020b, 0xaeaa), (0x020c, 0xaeab), (0x020d, 0xaeac), (0x020e, 0xaead), (0x020f, 0xaeae),
    (0x0210, 0xaeaf), (0x0211, 0xaeb0), (0x0212, 0xaeb1), (0x0213, 0xaeb2), (0x0214, 0xaeb3), (0x0215, 0xaeb4),
    (0x0216, 0xaeb5), (0x0217, 0xaeb6), (0x0218, 0xaeb7), (0x0219, 0xaeb8), (0x021a, 0xaeb9), (0x021b, 0xaeba),
    (0x021c, 0xaebb), (0x021d, 0xaebf), (0x021e, 0xaec1), (0x021f, 0xaec2), (0x0220, 0xaec3), (0x0221, 0xaec5),
    (0x0222, 0xaec6), (0x0223, 0xaec7), (0x0224, 0xaec8), (0x0225, 0xaec9), (0x0226, 0xaeca), (0x0227, 0xaecb),
    (0x0228, 0xaece), (0x0229, 0xaed2), (0x022a, 0xaed3), (0x022b, 0xaed4), (0x022c, 0xaed5), (0x022d, 0xaed6),
    (0x022e, 0xaed7), (0x022f, 0xaeda), (0x0230, 0xaedb), (0x0231, 0xaedd), (0x0232, 0xaede), (0x0233, 0xaedf),
    (0x0234, 0xaee0), (0x0235, 0xaee1), (0x0236, 0xaee2), (0x0237, 0xaee3), (0x0238, 0xaee4), (0x0239, 0xaee5),
    (0x023a, 0xaee6), (0x023b, 0xaee7), (0x023c, 0xaee9), (0x023d, 0xaeea), (0x023e, 0xaeec), (0x023f, 0xaeee),
    (0x0240, 0xaeef), (0x0241, 0xaef0), (0x0242, 0xaef1), (0x0243, 0xaef2), (0x0244, 0xaef3), (0x0245, 0xaef5),
    (0x0246, 0xaef6), (0x0247, 0xaef7), (0x0248, 0xaef9), (0x0249, 0xaefa), (0x024a, 0xaefb), (0x024b, 0xaefd),
    (0x024c, 0xaefe), (0x024d, 0xaeff), (0x024e, 0xaf00), (0x024f, 0xaf01), (0x0250, 0xaf02), (0x0251, 0xaf03),
    (0x0252, 0xaf04), (0x0253, 0xaf05), (0x025a, 0xaf06), (0x025b, 0xaf09), (0x025c, 0xaf0a), (0x025d, 0xaf0b),
    (0x025e, 0xaf0c), (0x025f, 0xaf0e), (0x0260, 0xaf0f), (0x0261, 0xaf11), (0x0262, 0xaf12), (0x0263, 0xaf13),
    (0x0264, 0xaf14), (0x0265, 0xaf15), (0x0266, 0xaf16), (0x0267, 0xaf17), (0x0268, 0xaf18), (0x0269, 0xaf19),
    (0x026a, 0xaf1a), (0x026b, 0xaf1b), (0x026c, 0xaf1c), (0x026d, 0xaf1d), (0x026e, 0xaf1e), (0x026f, 0xaf1f),
    (0x0270, 0xaf20), (0x0271, 0xaf21), (0x0272, 0xaf22), (0x0273, 0xaf23), (0x027a, 0xaf24), (0x027b, 0xaf25),
    (0x027c, 0xaf26), (0x027d, 0xaf27), (0x027e, 0xaf28), (0x027f, 0xaf29), (0x0280, 0xaf2a), (0x0281, 0xaf2b),
    (0x0282, 0xaf2e), (0x0283, 0xaf2f), (0x0284, 0xaf31), (0x0285, 0xaf33), (0x0286, 0xaf35), (0x0287, 0xaf36),
    (0x0288, 0xaf37), (0x0289, 0xaf38), (0x028a, 0xaf39), (0x028b, 0xaf3a), (0x028c, 0xaf3b), (0x028d, 0xaf3e),
    (0x028e, 0xaf40), (0x028f, 0xaf44), (0x0290, 0xaf45), (0x0291, 0xaf46), (0x0292, 0xaf47), (0x0293, 0xaf4a),
    (0x0294, 0xaf4b), (0x0295, 0xaf4c), (0x0296, 0xaf4d), (0x0297, 0xaf4e), (0x0298, 0xaf4f), (0x0299, 0xaf51),
    (0x029a, 0xaf52), (0x029b, 0xaf53), (0x029c, 0xaf54), (0x029d, 0xaf55), (0x029e, 0xaf56), (0x029f, 0xaf57),
    (0x02a0, 0xaf58), (0x02a1, 0xaf59), (0x02a2, 0xaf5a), (0x02a3, 0xaf5b), (0x02a4, 0xaf5e), (0x02a5, 0xaf5f),
    (0x02a6, 0xaf60), (0x02a7, 0xaf61), (0x02a8, 0xaf62), (0x02a9, 0xaf63), (0x02aa, 0xaf66), (0x02ab, 0xaf67),
    (0x02ac, 0xaf68), (0x02ad, 0xaf69), (0x02ae, 0xaf6a), (0x02af, 0xaf6b), (0x02b0, 0xaf6c), (0x02b1, 0xaf6d),
    (0x02b2, 0xaf6e), (0x02b3, 0xaf6f), (0x02b4, 0xaf70), (0x02b5, 0xaf71), (0x02b6, 0xaf72), (0x02b7, 0xaf73),
    (0x02b8, 0xaf74), (0x02b9, 0xaf75), (0x02ba, 0xaf76), (0x02bb, 0xaf77), (0x02bc, 0xaf78), (0x02bd, 0xaf7a),
    (0x02be, 0xaf7b), (0x02bf, 0xaf7c), (0x02c0, 0xaf7d), (0x02c1, 0xaf7e), (0x02c2, 0xaf7f), (0x02c3, 0xaf81),
    (0x02c4, 0xaf82), (0x02c5, 0xaf83), (0x02c6, 0xaf85), (0x02c7, 0xaf86), (0x02c8, 0xaf87), (0x02c9, 0xaf89),
    (0x02ca, 0xaf8a), (0x02cb, 0xaf8b), (0x02cc, 0xaf8c), (0x02cd, 0xaf8d), (0x02ce, 0xaf8e), (0x02cf, 0xaf8f),
    (0x02d0, 0xaf92), (0x02d1, 0xaf93), (0x02d2, 0xaf94), (0x02d3, 0xaf96), (0x02d4, 0xaf97), (0x02d5, 0xaf98),
    (0x02d6, 0xaf99), (0x02d7, 0xaf9a), (0x02d8, 0xaf9b), (0x02d9, 0xaf9d), (0x02da, 0xaf9e), (0x02db, 0xaf9f),
    (0x02dc, 0xafa0), (0x02dd, 0xafa1), (0x02de, 0xafa2), (0x02df, 0xafa3), (0x02e0, 0xafa4), (0x02e1, 0xafa5),
    (0x02e2, 0xafa6), (0x02e3, 0xafa7), (0x02e4, 0xafa8), (0x02e5, 0xafa9), (0x02e6, 0xafaa), (0x02e7, 0xafab),
    (0x02e8, 0xafac), (0x02e9, 0xafad), (0x02ea, 0xafae), (0x02eb, 0xafaf), (0x02ec, 0xafb0), (0x02ed, 0xafb1),
    (0x02ee, 0xafb2), (0x02ef, 0xafb3), (0x02f0, 0xafb4), (0x02f1, 0xafb5), (0x02f2, 0xafb6), (0x02f3, 0xafb7),
    (0x02f4, 0xafba), (0x02f5, 0xafbb), (0x02f6, 0xafbd), (0x02f7, 0xafbe), (0x02f8, 0xafbf), (0x02f9, 0xafc1),
    (0x02fa, 0xafc2), (0x02fb, 0xafc3), (0x02fc, 0xafc4), (0x02fd, 0xafc5), (0x02fe, 0xafc6), (0x02ff, 0xafca),
    (0x0300, 0xafcc), (0x0301, 0xafcf), (0x0302, 0xafd0), (0x0303, 0xafd1), (0x0304, 0xafd2), (0x0305, 0xafd3),
    (0x0306, 0xafd5), (0x0307, 0xafd6), (0x0308, 0xafd7), (0x0309, 0xafd8), (0x030a, 0xafd9), (0x030b, 0xafda),
    (0x030c, 0xafdb), (0x030d, 0xafdd), (0x030e, 0xafde), (0x030f, 0xafdf), (0x0310, 0xafe0), (0x0311, 0xafe1),
    (0x0318, 0xafe2), (0x0319, 0xafe3), (0x031a, 0xafe4), (0x031b, 0xafe5), (0x031c, 0xafe6), (0x031d, 0xafe7),
    (0x031e, 0xafea), (0x031f, 0xafeb), (0x0320, 0xafec), (0x0321, 0xafed), (0x0322, 0xafee), (0x0323, 0xafef),
    (0x0324, 0xaff2), (0x0325, 0xaff3), (0x0326, 0xaff5), (0x0327, 0xaff6), (0x0328, 0xaff7), (0x0329, 0xaff9),
    (0x032a, 0xaffa), (0x032b, 0xaffb), (0x032c, 0xaffc), (0x032d, 0xaffd), (0x032e, 0xaffe), (0x032f, 0xafff),
    (0x0330, 0xb002), (0x0331, 0xb003), (0x0338, 0xb005), (0x0339, 0xb006), (0x033a, 0xb007), (0x033b, 0xb008),
    (0x033c, 0xb009), (0x033d, 0xb00a), (0x033e, 0xb00b), (0x033f, 0xb00d), (0x0340, 0xb00e), (0x0341, 0xb00f),
    (0x0342, 0xb011), (0x0343, 0xb012), (0x0344, 0xb013), (0x0345, 0xb015), (0x0346, 0xb016), (0x0347, 0xb017),
    (0x0348, 0xb018), (0x0349, 0xb019), (0x034a, 0xb01a), (0x034b, 0xb01b), (0x034c, 0xb01e), (0x034d, 0xb01f),
    (0x034e, 0xb020), (0x034f, 0xb021), (0x0350, 0xb022), (0x0351, 0xb023), (0x0352, 0xb024), (0x0353, 0xb025),
    (0x0354, 0xb026), (0x0355, 0xb027), (0x0356, 0xb029), (0x0357, 0xb02a), (0x0358, 0xb02b), (0x0359, 0xb02c),
    (0x035a, 0xb02d), (0x035b, 0xb02e), (0x035c, 0xb02f), (0x035d, 0xb030), (0x035e, 0xb031), (0x035f, 0xb032),
    (0x0360, 0xb033), (0x0361, 0xb034), (0x0362, 0xb035), (0x0363, 0xb036), (0x0364, 0xb037), (0x0365, 0xb038),
    (0x0366, 0xb039), (0x0367, 0xb03a), (0x0368, 0xb03b), (0x0369, 0xb03c), (0x036a, 0xb03d), (0x036b, 0xb03e),
    (0x036c, 0xb03f), (0x036d, 0xb040), (0x036e, 0xb041), (0x036f, 0xb042), (0x0370, 0xb043), (0x0371, 0xb046),
    (0x0372, 0xb047), (0x0373, 0xb049), (0x0374, 0xb04b), (0x0375, 0xb04d), (0x0376, 0xb04f), (0x0377, 0xb050),
    (0x0378, 0xb051), (0x0379, 0xb052), (0x037a, 0xb056), (0x037b, 0xb058), (0x037c, 0xb05a), (0x037d, 0xb05b),
    (0x037e, 0xb05c), (0x037f, 0xb05e), (0x0380, 0xb05f), (0x0381, 0xb060), (0x0382, 0xb061), (0x0383, 0xb062),
    (0x0384, 0xb063), (0x0385, 0xb064), (0x0386, 0xb065), (0x0387, 0xb066), (0x0388, 0xb067), (0x0389, 0xb068),
    (0x038a, 0xb069), (0x038b, 0xb06a), (0x038c, 0xb06b), (0x038d, 0xb06c), (0x038e, 0xb06d), (0x038f, 0xb06e),
    (0x0390, 0xb06f), (0x0391, 0xb070), (0x0392, 0xb071), (0x0393, 0xb072), (0x0394, 0xb073), (0x0395, 0xb074),
    (0x0396, 0xb075), (0x0397, 0xb076), (0x0398, 0xb077), (0x0399, 0xb078), (0x039a, 0xb079), (0x039b, 0xb07a),
    (0x039c, 0xb07b), (0x039d, 0xb07e), (0x039e, 0xb07f), (0x039f, 0xb081), (0x03a0, 0xb082), (0x03a1, 0xb083),
    (0x03a2, 0xb085), (0x03a3, 0xb086), (0x03a4, 0xb087), (0x03a5, 0xb088), (0x03a6, 0xb089), (0x03a7, 0xb08a),
    (0x03a8, 0xb08b), (0x03a9, 0xb08e), (0x03aa, 0xb090), (0x03ab, 0xb092), (0x03ac, 0xb093), (0x03ad, 0xb094),
    (0x03ae, 0xb095), (0x03af, 0xb096), (0x03b0, 0xb097), (0x03b1, 0xb09b), (0x03b2, 0xb09d), (0x03b3, 0xb09e),
    (0x03b4, 0xb0a3), (0x03b5, 0xb0a4), (0x03b6, 0xb0a5), (0x03b7, 0xb0a6), (0x03b8, 0xb0a7), (0x03b9, 0xb0aa),
    (0x03ba, 0xb0b0), (0x03bb, 0xb0b2), (0x03bc, 0xb0b6), (0x03bd, 0xb0b7), (0x03be, 0xb0b9), (0x03bf, 0xb0ba),
    (0x03c0, 0xb0bb), (0x03c1, 0xb0bd), (0x03c2, 0xb0be), (0x03c3, 0xb0bf), (0x03c4, 0xb0c0), (0x03c5, 0xb0c1),
    (0x03c6, 0xb0c2), (0x03c7, 0xb0c3), (0x03c8, 0xb0c6), (0x03c9, 0xb0ca), (0x03ca, 0xb0cb), (0x03cb, 0xb0cc),
    (0x03cc, 0xb0cd), (0x03cd, 0xb0ce), (0x03ce, 0xb0cf), (0x03cf, 0xb0d2), (0x03d6, 0xb0d3), (0x03d7, 0xb0d5),
    (0x03d8, 0xb0d6), (0x03d9, 0xb0d7), (0x03da, 0xb0d9), (0x03db, 0xb0da), (0x03dc, 0xb0db), (0x03dd, 0xb0dc),
    (0x03de, 0xb0dd), (0x03df, 0xb0de), (0x03e0, 0xb0df), (0x03e1, 0xb0e1), (0x03e2, 0xb0e2), (0x03e3, 0xb0e3),
    (0x03e4, 0xb0e4), (0x03e5, 0xb0e6), (0x03e6, 0xb0e7), (0x03e7, 0xb0e8), (0x03e8, 0xb0e9), (0x03e9, 0xb0ea),
    (0x03ea, 0xb0eb), (0x03eb, 0xb0ec), (0x03ec, 0xb0ed), (0x03ed, 0xb0ee), (0x03ee, 0xb0ef), (0x03ef, 0xb0f0),
    (0x03f6, 0xb0f1), (0x03f7, 0xb0f2), (0x03f8, 0xb0f3), (0x03f9, 0xb0f4), (0x03fa, 0xb0f5), (0x03fb, 0xb0f6),
    (0x03fc, 0xb0f7), (0x03fd, 0xb0f8), (0x03fe, 0xb0f9), (0x03ff, 0xb0fa), (0x0400, 0xb0fb), (0x0401, 0xb0fc),
    (0x0402, 0xb0fd), (0x0403, 0xb0fe), (0x0404, 0xb0ff), (0x0405, 0xb100), (0x0406, 0xb101), (0x0407, 0xb102),
    (0x0408, 0xb103), (0x0409, 0xb104), (0x040a, 0xb105), (0x040b, 0xb106), (0x040c, 0xb107), (0x040d, 0xb10a),
    (0x040e, 0xb10d), (0x040f, 0xb10e), (0x0410, 0xb10f), (0x0411, 0xb111), (0x0412, 0xb114), (0x0413, 0xb115),
    (0x0414, 0xb116), (0x0415, 0xb117), (0x0416, 0xb11a), (0x0417, 0xb11e), (0x0418, 0xb11f), (0x0419, 0xb120),
    (0x041a, 0xb121), (0x041b, 0xb122), (0x041c, 0xb126), (0x041d, 0xb127), (0x041e, 0xb129), (0x041f, 0xb12a),
    (0x0420, 0xb12b), (0x0421, 0xb12d), (0x0422, 0xb12e), (0x0423, 0xb12f), (0x0424, 0xb130), (0x0425, 0xb131),
    (0x0426, 0xb132), (0x0427, 0xb133), (0x0428, 0xb136), (0x0429, 0xb13a), (0x042a, 0xb13b), (0x042b, 0xb13c),
    (0x042c, 0xb13d), (0x042d, 0xb13e), (0x042e, 0xb13f), (0x042f, 0xb142), (0x0430, 0xb143), (0x0431, 0xb145),
    (0x0432, 0xb146), (0x0433, 0xb147), (0x0434, 0xb149), (0x0435, 0xb14a), (0x0436, 0xb14b), (0x0437, 0xb14c),
    (0x0438, 0xb14d), (0x0439, 0xb14e), (0x043a, 0xb14f), (0x043b, 0xb152), (0x043c, 0xb153), (0x043d, 0xb156),
    (0x043e, 0xb157), (0x043f, 0xb159), (0x0440, 0xb15a), (0x0441, 0xb15b), (0x0442, 0xb15d), (0x0443, 0xb15e),
    (0x0444, 0xb15f), (0x0445, 0xb161), (0x0446, 0xb162), (0x0447, 0xb163), (0x0448, 0xb164), (0x0449, 0xb165),
    (0x044a, 0xb166), (0x044b, 0xb167), (0x044c, 0xb168), (0x044d, 0xb169), (0x044e, 0xb16a), (0x044f, 0xb16b),
    (0x0450, 0xb16c), (0x0451, 0xb16d), (0x0452, 0xb16e), (0x0453, 0xb16f), (0x0454, 0xb170), (0x0455, 0xb171),
    (0x0456, 0xb172), (0x0457, 0xb173), (0x0458, 0xb174), (0x0459, 0xb175), (0x045a, 0xb176), (0x045b, 0xb177),
    (0x045c, 0xb17a), (0x045d, 0xb17b), (0x045e, 0xb17d), (0x045f, 0xb17e), (0x0460, 0xb17f), (0x0461, 0xb181),
    (0x0462, 0xb183), (0x0463, 0xb184), (0x0464, 0xb185), (0x0465, 0xb186), (0x0466, 0xb187), (0x0467, 0xb18a),
    (0x0468, 0xb18c), (0x0469, 0xb18e), (0x046a, 0xb18f), (0x046b, 0xb190), (0x046c, 0xb191), (0x046d, 0xb195),
    (0x046e, 0xb196), (0x046f, 0xb197), (0x0470, 0xb199), (0x0471, 0xb19a), (0x0472, 0xb19b), (0x0473, 0xb19d),
    (0x0474, 0xb19e), (0x0475, 0xb19f), (0x0476, 0xb1a0), (0x0477, 0xb1a1), (0x0478, 0xb1a2), (0x0479, 0xb1a3),
    (0x047a, 0xb1a4), (0x047b, 0xb1a5), (0x047c, 0xb1a6), (0x047d, 0xb1a7), (0x047e, 0xb1a9), (0x047f, 0xb1aa),
    (0x0480, 0xb1ab), (0x0481, 0xb1ac), (0x0482, 0xb1ad), (0x0483, 0xb1ae), (0x0484, 0xb1af), (0x0485, 0xb1b0),
    (0x0486, 0xb1b1), (0x0487, 0xb1b2), (0x0488, 0xb1b3), (0x0489, 0xb1b4), (0x048a, 0xb1b5), (0x048b, 0xb1b6),
    (0x048c, 0xb1b7), (0x048d, 0xb1b8), (0x0494, 0xb1b9), (0x0495, 0xb1ba), (0x0496, 0xb1bb), (0x0497, 0xb1bc),
    (0x0498, 0xb1bd), (0x0499, 0xb1be), (0x049a, 0xb1bf), (0x049b, 0xb1c0), (0x049c, 0xb1c1), (0x049d, 0xb1c2),
    (0x049e, 0xb1c3), (0x049f, 0xb1c4), (0x04a0, 0xb1c5), (0x04a1, 0xb1c6), (0x04a2, 0xb1c7), (0x04a3, 0xb1c8),
    (0x04a4, 0xb1c9), (0x04a5, 0xb1ca), (0x04a6, 0xb1cb), (0x04a7, 0xb1cd), (0x04a8, 0xb1ce), (0x04a9, 0xb1cf),
    (0x04aa, 0xb1d1), (0x04ab, 0xb1d2), (0x04ac, 0xb1d3), (0x04ad, 0xb1d5), (0x04b4, 0xb1d6), (0x04b5, 0xb1d7),
    (0x04b6, 0xb1d8), (0x04b7, 0xb1d9), (0x04b8, 0xb1da), (0x04b9, 0xb1db), (0x04ba, 0xb1de), (0x04bb, 0xb1e0),
    (0x04bc, 0xb1e1), (0x04bd, 0xb1e2), (0x04be, 0xb1e3), (0x04bf, 0xb1e4), (0x04c0, 0xb1e5), (0x04c1, 0xb1e6),
    (0x04c2, 0xb1e7), (0x04c3, 0xb1ea), (0x04c4, 0xb1eb), (0x04c5, 0xb1ed), (0x04c6, 0xb1ee), (0x04c7, 0xb1ef),
    (0x04c8, 0xb1f1), (0x04c9, 0xb1f2), (0x04ca, 0xb1f3), (0x04cb, 0xb1f4), (0x04cc, 0xb1f5), (0x04cd, 0xb1f6),
    (0x04ce, 0xb1f7), (0x04cf, 0xb1f8), (0x04d0, 0xb1fa), (0x04d1, 0xb1fc), (0x04d2, 0xb1fe), (0x04d3, 0xb1ff),
    (0x04d4, 0xb200), (0x04d5, 0xb201), (0x04d6, 0xb202), (0x04d7, 0xb203), (0x04d8, 0xb206), (0x04d9, 0xb207),
    (0x04da, 0xb209), (0x04db, 0xb20a), (0x04dc, 0xb20d), (0x04dd, 0xb20e), (0x04de, 0xb20f), (0x04df, 0xb210),
    (0x04e0, 0xb211), (0x04e1, 0xb212), (0x04e2, 0xb213), (0x04e3, 0xb216), (0x04e4, 0xb218), (0x04e5, 0xb21a),
    (0x04e6, 0xb21b), (0x04e7, 0xb21c), (0x04e8, 0xb21d), (0x04e9, 0xb21e), (0x04ea, 0xb21f), (0x04eb, 0xb221),
    (0x04ec, 0xb222), (0x04ed, 0xb223), (0x04ee, 0xb224), (0x04ef, 0xb225), (0x04f0, 0xb226), (0x04f1, 0xb227),
    (0x04f2, 0xb228), (0x04f3, 0xb229), (0x04f4, 0xb22a), (0x04f5, 0xb22b), (0x04f6, 0xb22c), (0x04f7, 0xb22d),
    (0x04f8, 0xb22e), (0x04f9, 0xb22f), (0x04fa, 0xb230), (0x04fb, 0xb231), (0x04fc, 0xb232), (0x04fd, 0xb233),
    (0x04fe, 0xb235), (0x04ff, 0xb236), (0x0500, 0xb237), (0x0501, 0xb238), (0x0502, 0xb239), (0x0503, 0xb23a),
    (0x0504, 0xb23b), (0x0505, 0xb23d), (0x0506, 0xb23e), (0x0507, 0xb23f), (0x0508, 0xb240), (0x0509, 0xb241),
    (0x050a, 0xb242), (0x050b, 0xb243), (0x050c, 0xb244), (0x050d, 0xb245), (0x050e, 0xb246), (0x050f, 0xb247),
    (0x0510, 0xb248), (0x0511, 0xb249), (0x0512, 0xb24a), (0x0513, 0xb24b), (0x0514, 0xb24c), (0x0515, 0xb24d),
    (0x0516, 0xb24e), (0x0517, 0xb24f), (0x0518, 0xb250), (0x0519, 0xb251), (0x051a, 0xb252), (0x051b, 0xb253),
    (0x051c, 0xb254), (0x051d, 0xb255), (0x051e, 0xb256), (0x051f, 0xb257), (0x0520, 0xb259), (0x0521, 0xb25a),
    (0x0522, 0xb25b), (0x0523, 0xb25d), (0x0524, 0xb25e), (0x0525, 0xb25f), (0x0526, 0xb261), (0x0527, 0xb262),
    (0x0528, 0xb263), (0x0529, 0xb264), (0x052a, 0xb265), (0x052b, 0xb266), (0x052c, 0xb267), (0x052d, 0xb26a),
    (0x052e, 0xb26b), (0x052f, 0xb26c), (0x0530, 0xb26d), (0x0531, 0xb26e), (0x0532, 0xb26f), (0x0533, 0xb270),
    (0x0534, 0xb271), (0x0535, 0xb272), (0x0536, 0xb273), (0x0537, 0xb276), (0x0538, 0xb277), (0x0539, 0xb278),
    (0x053a, 0xb279), (0x053b, 0xb27a), (0x053c, 0xb27b), (0x053d, 0xb27d), (0x053e, 0xb27e), (0x053f, 0xb27f),
    (0x0540, 0xb280), (0x0541, 0xb281), (0x0542, 0xb282), (0x0543, 0xb283), (0x0544, 0xb286), (0x0545, 0xb287),
    (0x0546, 0xb288), (0x0547, 0xb28a), (0x0548, 0xb28b), (0x0549, 0xb28c), (0x054a, 0xb28d), (0x054b, 0xb28e),
    (0x0552, 0xb28f), (0x0553, 0xb292), (0x0554, 0xb293), (0x0555, 0xb295), (0x0556, 0xb296), (0x0557, 0xb297),
    (0x0558, 0xb29b), (0x0559, 0xb29c), (0x055a, 0xb29d), (0x055b, 0xb29e), (0x055c, 0xb29f), (0x055d, 0xb2a2),
    (0x055e, 0xb2a4), (0x055f, 0xb2a7), (0x0560, 0xb2a8), (0x0561, 0xb2a9), (0x0562, 0xb2ab), (0x0563, 0xb2ad),
    (0x0564, 0xb2ae), (0x0565, 0xb2af), (0x0566, 0xb2b1), (0x0567, 0xb2b2), (0x0568, 0xb2b3), (0x0569, 0xb2b5),
    (0x056a, 0xb2b6), (0x056b, 0xb2b7), (0x0572, 0xb2b8), (0x0573, 0xb2b9), (0x0574, 0xb2ba), (0x0575, 0xb2bb),
    (0x0576, 0xb2bc), (0x0577, 0xb2bd), (0x0578, 0xb2be), (0x0579, 0xb2bf), (0x057a, 0xb2c0), (0x057b, 0xb2c1),
    (0x057c, 0xb2c2), (0x057d, 0xb2c3), (0x057e, 0xb2c4), (0x057f, 0xb2c5), (0x0580, 0xb2c6), (0x0581, 0xb2c7),
    (0x0582, 0xb2ca), (0x0583, 0xb2cb), (0x0584, 0xb2cd), (0x0585, 0xb2ce), (0x0586, 0xb2cf), (0x0587, 0xb2d1),
    (0x0588, 0xb2d3), (0x0589, 0xb2d4), (0x058a, 0xb2d5), (0x058b, 0xb2d6), (0x058c, 0xb2d7), (0x058d, 0xb2da),
    (0x058e, 0xb2dc), (0x058f, 0xb2de), (0x0590, 0xb2df), (0x0591, 0xb2e0), (0x0592, 0xb2e1), (0x0593, 0xb2e3),
    (0x0594, 0xb2e7), (0x0595, 0xb2e9), (0x0596, 0xb2ea), (0x0597, 0xb2f0), (0x0598, 0xb2f1), (0x0599, 0xb2f2),
    (0x059a, 0xb2f6), (0x059b, 0xb2fc), (0x059c, 0xb2fd), (0x059d, 0xb2fe), (0x059e, 0xb302), (0x059f, 0xb303),
    (0x05a0, 0xb305), (0x05a1, 0xb306), (0x05a2, 0xb307), (0x05a3, 0xb309), (0x05a4, 0xb30a), (0x05a5, 0xb30b),
    (0x05a6, 0xb30c), (0x05a7, 0xb30d), (0x05a8, 0xb30e), (0x05a9, 0xb30f), (0x05aa, 0xb312), (0x05ab, 0xb316),
    (0x05ac, 0xb317), (0x05ad, 0xb318), (0x05ae, 0xb319), (0x05af, 0xb31a), (0x05b0, 0xb31b), (0x05b1, 0xb31d),
    (0x05b2, 0xb31e), (0x05b3, 0xb31f), (0x05b4, 0xb320), (0x05b5, 0xb321), (0x05b6, 0xb322), (0x05b7, 0xb323),
    (0x05b8, 0xb324), (0x05b9, 0xb325), (0x05ba, 0xb326), (0x05bb, 0xb327), (0x05bc, 0xb328), (0x05bd, 0xb329),
    (0x05be, 0xb32a), (0x05bf, 0xb32b), (0x05c0, 0xb32c), (0x05c1, 0xb32d), (0x05c2, 0xb32e), (0x05c3, 0xb32f),
    (0x05c4, 0xb330), (0x05c5, 0xb331), (0x05c6, 0xb332), (0x05c7, 0xb333), (0x05c8, 0xb334), (0x05c9, 0xb335),
    (0x05ca, 0xb336), (0x05cb, 0xb337), (0x05cc, 0xb338), (0x05cd, 0xb339), (0x05ce, 0xb33a), (0x05cf, 0xb33b),
    (0x05d0, 0xb33c), (0x05d1, 0xb33d), (0x05d2, 0xb33e), (0x05d3, 0xb33f), (0x05d4, 0xb340), (0x05d5, 0xb341),
    (0x05d6, 0xb342), (0x05d7, 0xb343), (0x05d8, 0xb344), (0x05d9, 0xb345), (0x05da, 0xb346), (0x05db, 0xb347),
    (0x05dc, 0xb348), (0x05dd, 0xb349), (0x05de, 0xb34a), (0x05df, 0xb34b), (0x05e0, 0xb34c), (0x05e1, 0xb34d),
    (0x05e2, 0xb34e), (0x05e3, 0xb34f), (0x05e4, 0xb350), (0x05e5, 0xb351), (0x05e6, 0xb352), (0x05e7, 0xb353),
    (0x05e8, 0xb357), (0x05e9, 0xb359), (0x05ea, 0xb35a), (0x05eb, 0xb35d), (0x05ec, 0xb360), (0x05ed, 0xb361),
    (0x05ee, 0xb362), (0x05ef, 0xb363), (0x05f0, 0xb366), (0x05f1, 0xb368), (0x05f2, 0xb36a), (0x05f3, 0xb36c),
    (0x05f4, 0xb36d), (0x05f5, 0xb36f), (0x05f6, 0xb372), (0x05f7, 0xb373), (0x05f8, 0xb375), (0x05f9, 0xb376),
    (0x05fa, 0xb377), (0x05fb, 0xb379), (0x05fc, 0xb37a), (0x05fd, 0xb37b), (0x05fe, 0xb37c), (0x05ff, 0xb37d),
    (0x0600, 0xb37e), (0x0601, 0xb37f), (0x0602, 0xb382), (0x0603, 0xb386), (0x0604, 0xb387), (0x0605, 0xb388),
    (0x0606, 0xb389), (0x0607, 0xb38a), (0x0608, 0xb38b), (0x0609, 0xb38d), (0x0610, 0xb38e), (0x0611, 0xb38f),
    (0x0612, 0xb391), (0x0613, 0xb392), (0x0614, 0xb393), (0x0615, 0xb395), (0x0616, 0xb396), (0x0617, 0xb397),
    (0x0618, 0xb398), (0x0619, 0xb399), (0x061a, 0xb39a), (0x061b, 0xb39b), (0x061c, 0xb39c), (0x061d, 0xb39d),
    (0x061e, 0xb39e), (0x061f, 0xb39f), (0x0620, 0xb3a2), (0x0621, 0xb3a3), (0x0622, 0xb3a4), (0x0623, 0xb3a5),
    (0x0624, 0xb3a6), (0x0625, 0xb3a7), (0x0626, 0xb3a9), (0x0627, 0xb3aa), (0x0628, 0xb3ab), (0x0629, 0xb3ad),
    (0x0630, 0xb3ae), (0x0631, 0xb3af), (0x0632, 0xb3b0), (0x0633, 0xb3b1), (0x0634, 0xb3b2), (0x0635, 0xb3b3),
    (0x0636, 0xb3b4), (0x0637, 0xb3b5), (0x0638, 0xb3b6), (0x0639, 0xb3b7), (0x063a, 0xb3b8), (0x063b, 0xb3b9),
    (0x063c, 0xb3ba), (0x063d, 0xb3bb), (0x063e, 0xb3bc), (0x063f, 0xb3bd), (0x0640, 0xb3be), (0x0641, 0xb3bf),
    (0x0642, 0xb3c0), (0x0643, 0xb3c1), (0x0644, 0xb3c2), (0x0645, 0xb3c3), (0x0646, 0xb3c6), (0x0647, 0xb3c7),
    (0x0648, 0xb3c9), (0x0649, 0xb3ca), (0x064a, 0xb3cd), (0x064b, 0xb3cf), (0x064c, 0xb3d1), (0x064d, 0xb3d2),
    (0x064e, 0xb3d3), (0x064f, 0xb3d6), (0x0650, 0xb3d8), (0x0651, 0xb3da), (0x0652, 0xb3dc), (0x0653, 0xb3de),
    (0x0654, 0xb3df), (0x0655, 0xb3e1), (0x0656, 0xb3e2), (0x0657, 0xb3e3), (0x0658, 0xb3e5), (0x0659, 0xb3e6),
    (0x065a, 0xb3e7), (0x065b, 0xb3e9), (0x065c, 0xb3ea), (0x065d, 0xb3eb), (0x065e, 0xb3ec), (0x065f, 0xb3ed),
    (0x0660, 0xb3ee), (0x0661, 0xb3ef), (0x0662, 0xb3f0), (0x0663, 0xb3f1), (0x0664, 0xb3f2), (0x0665, 0xb3f3),
    (0x0666, 0xb3f4), (0x0667, 0xb3f5), (0x0668, 0xb3f6), (0x0669, 0xb3f7), (0x066a, 0xb3f8), (0x066b, 0xb3f9),
    (0x066c, 0xb3fa), (0x066d, 0xb3fb), (0x066e, 0xb3fd), (0x066f, 0xb3fe), (0x0670, 0xb3ff), (0x0671, 0xb400),
    (0x0672, 0xb401), (0x0673, 0xb402), (0x0674, 0xb403), (0x0675, 0xb404), (0x0676, 0xb405), (0x0677, 0xb406),
    (0x0678, 0xb407), (0x0679, 0xb408), (0x067a, 0xb409), (0x067b, 0xb40a), (0x067c, 0xb40b), (0x067d, 0xb40c),
    (0x067e, 0xb40d), (0x067f, 0xb40e), (0x0680, 0xb40f), (0x0681, 0xb411), (0x0682, 0xb412), (0x0683, 0xb413),
    (0x0684, 0xb414), (0x0685, 0xb415), (0x0686, 0xb416), (0x0687, 0xb417), (0x0688, 0xb419), (0x0689, 0xb41a),
    (0x068a, 0xb41b), (0x068b, 0xb41d), (0x068c, 0xb41e), (0x068d, 0xb41f), (0x068e, 0xb421), (0x068f, 0xb422),
    (0x0690, 0xb423), (0x0691, 0xb424), (0x0692, 0xb425), (0x0693, 0xb426), (0x0694, 0xb427), (0x0695, 0xb42a),
    (0x0696, 0xb42c), (0x0697, 0xb42d), (0x0698, 0xb42e), (0x0699, 0xb42f), (0x069a, 0xb430), (0x069b, 0xb431),
    (0x069c, 0xb432), (0x069d, 0xb433), (0x069e, 0xb435), (0x069f, 0xb436), (0x06a0, 0xb437), (0x06a1, 0xb438),
    (0x06a2, 0xb439), (0x06a3, 0xb43a), (0x06a4, 0xb43b), (0x06a5, 0xb43c), (0x06a6, 0xb43d), (0x06a7, 0xb43e),
    (0x06a8, 0xb43f), (0x06a9, 0xb440), (0x06aa, 0xb441), (0x06ab, 0xb442), (0x06ac, 0xb443), (0x06ad, 0xb444),
    (0x06ae, 0xb445), (0x06af, 0xb446), (0x06b0, 0xb447), (0x06b1, 0xb448), (0x06b2, 0xb449), (0x06b3, 0xb44a),
    (0x06b4, 0xb44b), (0x06b5, 0xb44c), (0x06b6, 0xb44d), (0x06b7, 0xb44e), (0x06b8, 0xb44f), (0x06b9, 0xb452),
    (0x06ba, 0xb453), (0x06bb, 0xb455), (0x06bc, 0xb456), (0x06bd, 0xb457), (0x06be, 0xb459), (0x06bf, 0xb45a),
    (0x06c0, 0xb45b), (0x06c1, 0xb45c), (0x06c2, 0xb45d), (0x06c3, 0xb45e), (0x06c4, 0xb45f), (0x06c5, 0xb462),
    (0x06c6, 0xb464), (0x06c7, 0xb466), (0x06ce, 0xb467), (0x06cf, 0xb468), (0x06d0, 0xb469), (0x06d1, 0xb46a),
    (0x06d2, 0xb46b), (0x06d3, 0xb46d), (0x06d4, 0xb46e), (0x06d5, 0xb46f), (0x06d6, 0xb470), (0x06d7, 0xb471),
    (0x06d8, 0xb472), (0x06d9, 0xb473), (0x06da, 0xb474), (0x06db, 0xb475), (0x06dc, 0xb476), (0x06dd, 0xb477),
    (0x06de, 0xb478), (0x06df, 0xb479), (0x06e0, 0xb47a), (0x06e1, 0xb47b), (0x06e2, 0xb47c), (0x06e3, 0xb47d),
    (0x06e4, 0xb47e), (0x06e5, 0xb47f), (0x06e6, 0xb481), (0x06e7, 0xb482), (0x06ee, 0xb483), (0x06ef, 0xb484),
    (0x06f0, 0xb485), (0x06f1, 0xb486), (0x06f2, 0xb487), (0x06f3, 0xb489), (0x06f4, 0xb48a), (0x06f5, 0xb48b),
    (0x06f6, 0xb48c), (0x06f7, 0xb48d), (0x06f8, 0xb48e), (0x06f9, 0xb48f), (0x06fa, 0xb490), (0x06fb, 0xb491),
    (0x06fc, 0xb492), (0x06fd, 0xb493), (0x06fe, 0xb494), (0x06ff, 0xb495), (0x0700, 0xb496), (0x0701, 0xb497),
    (0x0702, 0xb498), (0x0703, 0xb499), (0x0704, 0xb49a), (0x0705, 0xb49b), (0x0706, 0xb49c), (0x0707, 0xb49e),
    (0x0708, 0xb49f), (0x0709, 0xb4a0), (0x070a, 0xb4a1), (0x070b, 0xb4a2), (0x070c, 0xb4a3), (0x070d, 0xb4a5),
    (0x070e, 0xb4a6), (0x070f, 0xb4a7), (0x0710, 0xb4a9), (0x0711, 0xb4aa), (0x0712, 0xb4ab), (0x0713, 0xb4ad),
    (0x0714, 0xb4ae), (0x0715, 0xb4af), (0x0716, 0xb4b0), (0x0717, 0xb4b1), (0x0718, 0xb4b2), (0x0719, 0xb4b3),
    (0x071a, 0xb4b4), (0x071b, 0xb4b6), (0x071c, 0xb4b8), (0x071d, 0xb4ba), (0x071e, 0xb4bb), (0x071f, 0xb4bc),
    (0x0720, 0xb4bd), (0x0721, 0xb4be), (0x0722, 0xb4bf), (0x0723, 0xb4c1), (0x0724, 0xb4c2), (0x0725, 0xb4c3),
    (0x0726, 0xb4c5), (0x0727, 0xb4c6), (0x0728, 0xb4c7), (0x0729, 0xb4c9), (0x072a, 0xb4ca), (0x072b, 0xb4cb),
    (0x072c, 0xb4cc), (0x072d, 0xb4cd), (0x072e, 0xb4ce), (0x072f, 0xb4cf), (0x0730, 0xb4d1), (0x0731, 0xb4d2),
    (0x0732, 0xb4d3), (0x0733, 0xb4d4), (0x0734, 0xb4d6), (0x0735, 0xb4d7), (0x0736, 0xb4d8), (0x0737, 0xb4d9),
    (0x0738, 0xb4da), (0x0739, 0xb4db), (0x073a, 0xb4de), (0x073b, 0xb4df), (0x073c, 0xb4e1), (0x073d, 0xb4e2),
    (0x073e, 0xb4e5), (0x073f, 0xb4e7), (0x0740, 0xb4e8), (0x0741, 0xb4e9), (0x0742, 0xb4ea), (0x0743, 0xb4eb),
    (0x0744, 0xb4ee), (0x0745, 0xb4f0), (0x0746, 0xb4f2), (0x0747, 0xb4f3), (0x0748, 0xb4f4), (0x0749, 0xb4f5),
    (0x074a, 0xb4f6), (0x074b, 0xb4f7), (0x074c, 0xb4f9), (0x074d, 0xb4fa), (0x074e, 0xb4fb), (0x074f, 0xb4fc),
    (0x0750, 0xb4fd), (0x0751, 0xb4fe), (0x0752, 0xb4ff), (0x0753, 0xb500), (0x0754, 0xb501), (0x0755, 0xb502),
    (0x0756, 0xb503), (0x0757, 0xb504), (0x0758, 0xb505), (0x0759, 0xb506), (0x075a, 0xb507), (0x075b, 0xb508),
    (0x075c, 0xb509), (0x075d, 0xb50a), (0x075e, 0xb50b), (0x075f, 0xb50c), (0x0760, 0xb50d), (0x0761, 0xb50e),
    (0x0762, 0xb50f), (0x0763, 0xb510), (0x0764, 0xb511), (0x0765, 0xb512), (0x0766, 0xb513), (0x0767, 0xb516),
    (0x0768, 0xb517), (0x0769, 0xb519), (0x076a, 0xb51a), (0x076b, 0xb51d), (0x076c, 0xb51e), (0x076d, 0xb51f),
    (0x076e, 0xb520), (0x076f, 0xb521), (0x0770, 0xb522), (0x0771, 0xb523), (0x0772, 0xb526), (0x0773, 0xb52b),
    (0x0774, 0xb52c), (0x0775, 0xb52d), (0x0776, 0xb52e), (0x0777, 0xb52f), (0x0778, 0xb532), (0x0779, 0xb533),
    (0x077a, 0xb535), (0x077b, 0xb536), (0x077c, 0xb537), (0x077d, 0xb539), (0x077e, 0xb53a), (0x077f, 0xb53b),
    (0x0780, 0xb53c), (0x0781, 0xb53d), (0x0782, 0xb53e), (0x0783, 0xb53f), (0x0784, 0xb542), (0x0785, 0xb546),
    (0x078c, 0xb547), (0x078d, 0xb548), (0x078e, 0xb549), (0x078f, 0xb54a), (0x0790, 0xb54e), (0x0791, 0xb54f),
    (0x0792, 0xb551), (0x0793, 0xb552), (0x0794, 0xb553), (0x0795, 0xb555), (0x0796, 0xb556), (0x0797, 0xb557),
    (0x0798, 0xb558), (0x0799, 0xb559), (0x079a, 0xb55a), (0x079b, 0xb55b), (0x079c, 0xb55e), (0x079d, 0xb562),
    (0x079e, 0xb563), (0x079f, 0xb564), (0x07a0, 0xb565), (0x07a1, 0xb566), (0x07a2, 0xb567), (0x07a3, 0xb568),
    (0x07a4, 0xb569), (0x07a5, 0xb56a), (0x07ac, 0xb56b), (0x07ad, 0xb56c), (0x07ae, 0xb56d), (0x07af, 0xb56e),
    (0x07b0, 0xb56f), (0x07b1, 0xb570), (0x07b2, 0xb571), (0x07b3, 0xb572), (0x07b4, 0xb573), (0x07b5, 0xb574),
    (0x07b6, 0xb575), (0x07b7, 0xb576), (0x07b8, 0xb577), (0x07b9, 0xb578), (0x07ba, 0xb579), (0x07bb, 0xb57a),
    (0x07bc, 0xb57b), (0x07bd, 0xb57c), (0x07be, 0xb57d), (0x07bf, 0xb57e), (0x07c0, 0xb57f), (0x07c1, 0xb580),
    (0x07c2, 0xb581), (0x07c3, 0xb582), (0x07c4, 0xb583), (0x07c5, 0xb584), (0x07c6, 0xb585), (0x07c7, 0xb586),
    (0x07c8, 0xb587), (0x07c9, 0xb588), (0x07ca, 0xb589), (0x07cb, 0xb58a), (0x07cc, 0xb58b), (0x07cd, 0xb58c),
    (0x07ce, 0xb58d), (0x07cf, 0xb58e), (0x07d0, 0xb58f), (0x07d1, 0xb590), (0x07d2, 0xb591), (0x07d3, 0xb592),
    (0x07d4, 0xb593), (0x07d5, 0xb594), (0x07d6, 0xb595), (0x07d7, 0xb596), (0x07d8, 0xb597), (0x07d9, 0xb598),
    (0x07da, 0xb599), (0x07db, 0xb59a), (0x07dc, 0xb59b), (0x07dd, 0xb59c), (0x07de, 0xb59d), (0x07df, 0xb59e),
    (0x07e0, 0xb59f), (0x07e1, 0xb5a2), (0x07e2, 0xb5a3), (0x07e3, 0xb5a5), (0x07e4, 0xb5a6), (0x07e5, 0xb5a7),
    (0x07e6, 0xb5a9), (0x07e7, 0xb5ac), (0x07e8, 0xb5ad), (0x07e9, 0xb5ae), (0x07ea, 0xb5af), (0x07eb, 0xb5b2),
    (0x07ec, 0xb5b6), (0x07ed, 0xb5b7), (0x07ee, 0xb5b8), (0x07ef, 0xb5b9), (0x07f0, 0xb5ba), (0x07f1, 0xb5be),
    (0x07f2, 0xb5bf), (0x07f3, 0xb5c1), (0x07f4, 0xb5c2), (0x07f5, 0xb5c3), (0x07f6, 0xb5c5), (0x07f7, 0xb5c6),
    (0x07f8, 0xb5c7), (0x07f9, 0xb5c8), (0x07fa, 0xb5c9), (0x07fb, 0xb5ca), (0x07fc, 0xb5cb), (0x07fd, 0xb5ce),
    (0x07fe, 0xb5d2), (0x07ff, 0xb5d3), (0x0800, 0xb5d4), (0x0801, 0xb5d5), (0x0802, 0xb5d6), (0x0803, 0xb5d7),
    (0x0804, 0xb5d9), (0x0805, 0xb5da), (0x0806, 0xb5db), (0x0807, 0xb5dc), (0x0808, 0xb5dd), (0x0809, 0xb5de),
    (0x080a, 0xb5df), (0x080b, 0xb5e0), (0x080c, 0xb5e1), (0x080d, 0xb5e2), (0x080e, 0xb5e3), (0x080f, 0xb5e4),
    (0x0810, 0xb5e5), (0x0811, 0xb5e6), (0x0812, 0xb5e7), (0x0813, 0xb5e8), (0x0814, 0xb5e9), (0x0815, 0xb5ea),
    (0x0816, 0xb5eb), (0x0817, 0xb5ed), (0x0818, 0xb5ee), (0x0819, 0xb5ef), (0x081a, 0xb5f0), (0x081b, 0xb5f1),
    (0x081c, 0xb5f2), (0x081d, 0xb5f3), (0x081e, 0xb5f4), (0x081f, 0xb5f5), (0x0820, 0xb5f6), (0x0821, 0xb5f7),
    (0x0822, 0xb5f8), (0x0823, 0xb5f9), (0x0824, 0xb5fa), (0x0825, 0xb5fb), (0x0826, 0xb5fc), (0x0827, 0xb5fd),
    (0x0828, 0xb5fe), (0x0829, 0xb5ff), (0x082a, 0xb600), (0x082b, 0xb601), (0x082c, 0xb602), (0x082d, 0xb603),
    (0x082e, 0xb604), (0x082f, 0xb605), (0x0830, 0xb606), (0x0831, 0xb607), (0x0832, 0xb608), (0x0833, 0xb609),
    (0x0834, 0xb60a), (0x0835, 0xb60b), (0x0836, 0xb60c), (0x0837, 0xb60d), (0x0838, 0xb60e), (0x0839, 0xb60f),
    (0x083a, 0xb612), (0x083b, 0xb613), (0x083c, 0xb615), (0x083d, 0xb616), (0x083e, 0xb617), (0x083f, 0xb619),
    (0x0840, 0xb61a), (0x0841, 0xb61b), (0x0842, 0xb61c), (0x0843, 0xb61d), (0x084a, 0xb61e), (0x084b, 0xb61f),
    (0x084c, 0xb620), (0x084d, 0xb621), (0x084e, 0xb622), (0x084f, 0xb623), (0x0850, 0xb624), (0x0851, 0xb626),
    (0x0852, 0xb627), (0x0853, 0xb628), (0x0854, 0xb629), (0x0855, 0xb62a), (0x0856, 0xb62b), (0x0857, 0xb62d),
    (0x0858, 0xb62e), (0x0859, 0xb62f), (0x085a, 0xb630), (0x085b, 0xb631), (0x085c, 0xb632), (0x085d, 0xb633),
    (0x085e, 0xb635), (0x085f, 0xb636), (0x0860, 0xb637), (0x0861, 0xb638), (0x0862, 0xb639), (0x0863, 0xb63a),
    (0x086a, 0xb63b), (0x086b, 0xb63c), (0x086c, 0xb63d), (0x086d, 0xb63e), (0x086e, 0xb63f), (0x086f, 0xb640),
    (0x0870, 0xb641), (0x0871, 0xb642), (0x0872, 0xb643), (0x0873, 0xb644), (0x0874, 0xb645), (0x0875, 0xb646),
    (0x0876, 0xb647), (0x0877, 0xb649), (0x0878, 0xb64a), (0x0879, 0xb64b), (0x087a, 0xb64c), (0x087b, 0xb64d),
    (0x087c, 0xb64e), (0x087d, 0xb64f), (0x087e, 0xb650), (0x087f, 0xb651), (0x0880, 0xb652), (0x0881, 0xb653),
    (0x0882, 0xb654), (0x0883, 0xb655), (0x0884, 0xb656), (0x0885, 0xb657), (0x0886, 0xb658), (0x0887, 0xb659),
    (0x0888, 0xb65a), (0x0889, 0xb65b), (0x088a, 0xb65c), (0x088b, 0xb65d), (0x088c, 0xb65e), (0x088d, 0xb65f),
    (0x088e, 0xb660), (0x088f, 0xb661), (0x0890, 0xb662), (0x0891, 0xb663), (0x0892, 0xb665), (0x0893, 0xb666),
    (0x0894, 0xb667), (0x0895, 0xb669), (0x0896, 0xb66a), (0x0897, 0xb66b), (0x0898, 0xb66c), (0x0899, 0xb66d),
    (0x089a, 0xb66e), (0x089b, 0xb66f), (0x089c, 0xb670), (0x089d, 0xb671), (0x089e, 0xb672), (0x089f, 0xb673),
    (0x08a0, 0xb674), (0x08a1, 0xb675), (0x08a2, 0xb676), (0x08a3, 0xb677), (0x08a4, 0xb678), (0x08a5, 0xb679),
    (0x08a6, 0xb67a), (0x08a7, 0xb67b), (0x08a8, 0xb67c), (0x08a9, 0xb67d), (0x08aa, 0xb67e), (0x08ab, 0xb67f),
    (0x08ac, 0xb680), (0x08ad, 0xb681), (0x08ae, 0xb682), (0x08af, 0xb683), (0x08b0, 0xb684), (0x08b1, 0xb685),
    (0x08b2, 0xb686), (0x08b3, 0xb687), (0x08b4, 0xb688), (0x08b5, 0xb689), (0x08b6, 0xb68a), (0x08b7, 0xb68b),
    (0x08b8, 0xb68c), (0x08b9, 0xb68d), (0x08ba, 0xb68e), (0x08bb, 0xb68f), (0x08bc, 0xb690), (0x08bd, 0xb691),
    (0x08be, 0xb692), (0x08bf, 0xb693), (0x08c0, 0xb694), (0x08c1, 0xb695), (0x08c2, 0xb696), (0x08c3, 0xb697),
    (0x08c4, 0xb698), (0x08c5, 0xb699), (0x08c6, 0xb69a), (0x08c7, 0xb69b), (0x08c8, 0xb69e), (0x08c9, 0xb69f),
    (0x08ca, 0xb6a1), (0x08cb, 0xb6a2), (0x08cc, 0xb6a3), (0x08cd, 0xb6a5), (0x08ce, 0xb6a6), (0x08cf, 0xb6a7),
    (0x08d0, 0xb6a8), (0x08d1, 0xb6a9), (0x08d2, 0xb6aa), (0x08d3, 0xb6ad), (0x08d4, 0xb6ae), (0x08d5, 0xb6af),
    (0x08d6, 0xb6b0), (0x08d7, 0xb6b2), (0x08d8, 0xb6b3), (0x08d9, 0xb6b4), (0x08da, 0xb6b5), (0x08db, 0xb6b6),
    (0x08dc, 0xb6b7), (0x08dd, 0xb6b8), (0x08de, 0xb6b9), (0x08df, 0xb6ba), (0x08e0, 0xb6bb), (0x08e1, 0xb6bc),
    (0x08e2, 0xb6bd), (0x08e3, 0xb6be), (0x08e4, 0xb6bf), (0x08e5, 0xb6c0), (0x08e6, 0xb6c1), (0x08e7, 0xb6c2),
    (0x08e8, 0xb6c3), (0x08e9, 0xb6c4), (0x08ea, 0xb6c5), (0x08eb, 0xb6c6), (0x08ec, 0xb6c7), (0x08ed, 0xb6c8),
    (0x08ee, 0xb6c9), (0x08ef, 0xb6ca), (0x08f0, 0xb6cb), (0x08f1, 0xb6cc), (0x08f2, 0xb6cd), (0x08f3, 0xb6ce),
    (0x08f4, 0xb6cf), (0x08f5, 0xb6d0), (0x08f6, 0xb6d1), (0x08f7, 0xb6d2), (0x08f8, 0xb6d3), (0x08f9, 0xb6d5),
    (0x08fa, 0xb6d6), (0x08fb, 0xb6d7), (0x08fc, 0xb6d8), (0x08fd, 0xb6d9), (0x08fe, 0xb6da), (0x08ff, 0xb6db),
    (0x0900, 0xb6dc), (0x0901, 0xb6dd), (0x0908, 0xb6de), (0x0909, 0xb6df), (0x090a, 0xb6e0), (0x090b, 0xb6e1),
    (0x090c, 0xb6e2), (0x090d, 0xb6e3), (0x090e, 0xb6e4), (0x090f, 0xb6e5), (0x0910, 0xb6e6), (0x0911, 0xb6e7),
    (0x0912, 0xb6e8), (0x0913, 0xb6e9), (0x0914, 0xb6ea), (0x0915, 0xb6eb), (0x0916, 0xb6ec), (0x0917, 0xb6ed),
    (0x0918, 0xb6ee), (0x0919, 0xb6ef), (0x091a, 0xb6f1), (0x091b, 0xb6f2), (0x091c, 0xb6f3), (0x091d, 0xb6f5),
    (0x091e, 0xb6f6), (0x091f, 0xb6f7), (0x0920, 0xb6f9), (0x0921, 0xb6fa), (0x0928, 0xb6fb), (0x0929, 0xb6fc),
    (0x092a, 0xb6fd), (0x092b, 0xb6fe), (0x092c, 0xb6ff), (0x092d, 0xb702), (0x092e, 0xb703), (0x092f, 0xb704),
    (0x0930, 0xb706), (0x0931, 0xb707), (0x0932, 0xb708), (0x0933, 0xb709), (0x0934, 0xb70a), (0x0935, 0xb70b),
    (0x0936, 0xb70c), (0x0937, 0xb70d), (0x0938, 0xb70e), (0x0939, 0xb70f), (0x093a, 0xb710), (0x093b, 0xb711),
    (0x093c, 0xb712), (0x093d, 0xb713), (0x093e, 0xb714), (0x093f, 0xb715), (0x0940, 0xb716), (0x0941, 0xb717),
    (0x0942, 0xb718), (0x0943, 0xb719), (0x0944, 0xb71a), (0x0945, 0xb71b), (0x0946, 0xb71c), (0x0947, 0xb71d),
    (0x0948, 0xb71e), (0x0949, 0xb71f), (0x094a, 0xb720), (0x094b, 0xb721), (0x094c, 0xb722), (0x094d, 0xb723),
    (0x094e, 0xb724), (0x094f, 0xb725), (0x0950, 0xb726), (0x0951, 0xb727), (0x0952, 0xb72a), (0x0953, 0xb72b),
    (0x0954, 0xb72d), (0x0955, 0xb72e), (0x0956, 0xb731), (0x0957, 0xb732), (0x0958, 0xb733), (0x0959, 0xb734),
    (0x095a, 0xb735), (0x095b, 0xb736), (0x095c, 0xb737), (0x095d, 0xb73a), (0x095e, 0xb73c), (0x095f, 0xb73d),
    (0x0960, 0xb73e), (0x0961, 0xb73f), (0x0962, 0xb740), (0x0963, 0xb741), (0x0964, 0xb742), (0x0965, 0xb743),
    (0x0966, 0xb745), (0x0967, 0xb746), (0x0968, 0xb747), (0x0969, 0xb749), (0x096a, 0xb74a), (0x096b, 0xb74b),
    (0x096c, 0xb74d), (0x096d, 0xb74e), (0x096e, 0xb74f), (0x096f, 0xb750), (0x0970, 0xb751), (0x0971, 0xb752),
    (0x0972, 0xb753), (0x0973, 0xb756), (0x0974, 0xb757), (0x0975, 0xb758), (0x0976, 0xb759), (0x0977, 0xb75a),
    (0x0978, 0xb75b), (0x0979, 0xb75c), (0x097a, 0xb75d), (0x097b, 0xb75e), (0x097c, 0xb75f), (0x097d, 0xb761),
    (0x097e, 0xb762), (0x097f, 0xb763), (0x0980, 0xb765), (0x0981, 0xb766), (0x0982, 0xb767), (0x0983, 0xb769),
    (0x0984, 0xb76a), (0x0985, 0xb76b), (0x0986, 0xb76c), (0x0987, 0xb76d), (0x0988, 0xb76e), (0x0989, 0xb76f),
    (0x098a, 0xb772), (0x098b, 0xb774), (0x098c, 0xb776), (0x098d, 0xb777), (0x098e, 0xb778), (0x098f, 0xb779),
    (0x0990, 0xb77a), (0x0991, 0xb77b), (0x0992, 0xb77e), (0x0993, 0xb77f), (0x0994, 0xb781), (0x0995, 0xb782),
    (0x0996, 0xb783), (0x0997, 0xb785), (0x0998, 0xb786), (0x0999, 0xb787), (0x099a, 0xb788), (0x099b, 0xb789),
    (0x099c, 0xb78a), (0x099d, 0xb78b), (0x099e, 0xb78e), (0x099f, 0xb793), (0x09a0, 0xb794), (0x09a1, 0xb795),
    (0x09a2, 0xb79a), (0x09a3, 0xb79b), (0x09a4, 0xb79d), (0x09a5, 0xb79e), (0x09a6, 0xb79f), (0x09a7, 0xb7a1),
    (0x09a8, 0xb7a2), (0x09a9, 0xb7a3), (0x09aa, 0xb7a4), (0x09ab, 0xb7a5), (0x09ac, 0xb7a6), (0x09ad, 0xb7a7),
    (0x09ae, 0xb7aa), (0x09af, 0xb7ae), (0x09b0, 0xb7af), (0x09b1, 0xb7b0), (0x09b2, 0xb7b1), (0x09b3, 0xb7b2),
    (0x09b4, 0xb7b3), (0x09b5, 0xb7b6), (0x09b6, 0xb7b7), (0x09b7, 0xb7b9), (0x09b8, 0xb7ba), (0x09b9, 0xb7bb),
    (0x09ba, 0xb7bc), (0x09bb, 0xb7bd), (0x09bc, 0xb7be), (0x09bd, 0xb7bf), (0x09be, 0xb7c0), (0x09bf, 0xb7c1),
    (0x09c6, 0xb7c2), (0x09c7, 0xb7c3), (0x09c8, 0xb7c4), (0x09c9, 0xb7c5), (0x09ca, 0xb7c6), (0x09cb, 0xb7c8),
    (0x09cc, 0xb7ca), (0x09cd, 0xb7cb), (0x09ce, 0xb7cc), (0x09cf, 0xb7cd), (0x09d0, 0xb7ce), (0x09d1, 0xb7cf),
    (0x09d2, 0xb7d0), (0x09d3, 0xb7d1), (0x09d4, 0xb7d2), (0x09d5, 0xb7d3), (0x09d6, 0xb7d4), (0x09d7, 0xb7d5),
    (0x09d8, 0xb7d6), (0x09d9, 0xb7d7), (0x09da, 0xb7d8), (0x09db, 0xb7d9), (0x09dc, 0xb7da), (0x09dd, 0xb7db),
    (0x09de, 0xb7dc), (0x09df, 0xb7dd), (0x09e6, 0xb7de), (0x09e7, 0xb7df), (0x09e8, 0xb7e0), (0x09e9, 0xb7e1),
    (0x09ea, 0xb7e2), (0x09eb, 0xb7e3), (0x09ec, 0xb7e4), (0x09ed, 0xb7e5), (0x09ee, 0xb7e6), (0x09ef, 0xb7e7),
    (0x09f0, 0xb7e8), (0x09f1, 0xb7e9), (0x09f2, 0xb7ea), (0x09f3, 0xb7eb), (0x09f4, 0xb7ee), (0x09f5, 0xb7ef),
    (0x09f6, 0xb7f1), (0x09f7, 0xb7f2), (0x09f8, 0xb7f3), (0x09f9, 0xb7f5), (0x09fa, 0xb7f6), (0x09fb, 0xb7f7),
    (0x09fc, 0xb7f8), (0x09fd, 0xb7f9), (0x09fe, 0xb7fa), (0x09ff, 0xb7fb), (0x0a00, 0xb7fe), (0x0a01, 0xb802),
    (0x0a02, 0xb803), (0x0a03, 0xb804), (0x0a04, 0xb805), (0x0a05, 0xb806), (0x0a06, 0xb80a), (0x0a07, 0xb80b),
    (0x0a08, 0xb80d), (0x0a09, 0xb80e), (0x0a0a, 0xb80f), (0x0a0b, 0xb811), (0x0a0c, 0xb812), (0x0a0d, 0xb813),
    (0x0a0e, 0xb814), (0x0a0f, 0xb815), (0x0a10, 0xb816), (0x0a11, 0xb817), (0x0a12, 0xb81a), (0x0a13, 0xb81c),
    (0x0a14, 0xb81e), (0x0a15, 0xb81f), (0x0a16, 0xb820), (0x0a17, 0xb821), (0x0a18, 0xb822), (0x0a19, 0xb823),
    (0x0a1a, 0xb826), (0x0a1b, 0xb827), (0x0a1c, 0xb829), (0x0a1d, 0xb82a), (0x0a1e, 0xb82b), (0x0a1f, 0xb82d),
    (0x0a20, 0xb82e), (0x0a21, 0xb82f), (0x0a22, 0xb830), (0x0a23, 0xb831), (0x0a24, 0xb832), (0x0a25, 0xb833),
    (0x0a26, 0xb836), (0x0a27, 0xb83a), (0x0a28, 0xb83b), (0x0a29, 0xb83c), (0x0a2a, 0xb83d), (0x0a2b, 0xb83e),
    (0x0a2c, 0xb83f), (0x0a2d, 0xb841), (0x0a2e, 0xb842), (0x0a2f, 0xb843), (0x0a30, 0xb845), (0x0a31, 0xb846),
    (0x0a32, 0xb847), (0x0a33, 0xb848), (0x0a34, 0xb849), (0x0a35, 0xb84a), (0x0a36, 0xb84b), (0x0a37, 0xb84c),
    (0x0a38, 0xb84d), (0x0a39, 0xb84e), (0x0a3a, 0xb84f), (0x0a3b, 0xb850), (0x0a3c, 0xb852), (0x0a3d, 0xb854),
    (0x0a3e, 0xb855), (0x0a3f, 0xb856), (0x0a40, 0xb857), (0x0a41, 0xb858), (0x0a42, 0xb859), (0x0a43, 0xb85a),
    (0x0a44, 0xb85b), (0x0a45, 0xb85e), (0x0a46, 0xb85f), (0x0a47, 0xb861), (0x0a48, 0xb862), (0x0a49, 0xb863),
    (0x0a4a, 0xb865), (0x0a4b, 0xb866), (0x0a4c, 0xb867), (0x0a4d, 0xb868), (0x0a4e, 0xb869), (0x0a4f, 0xb86a),
    (0x0a50, 0xb86b), (0x0a51, 0xb86e), (0x0a52, 0xb870), (0x0a53, 0xb872), (0x0a54, 0xb873), (0x0a55, 0xb874),
    (0x0a56, 0xb875), (0x0a57, 0xb876), (0x0a58, 0xb877), (0x0a59, 0xb879), (0x0a5a, 0xb87a), (0x0a5b, 0xb87b),
    (0x0a5c, 0xb87d), (0x0a5d, 0xb87e), (0x0a5e, 0xb87f), (0x0a5f, 0xb880), (0x0a60, 0xb881), (0x0a61, 0xb882),
    (0x0a62, 0xb883), (0x0a63, 0xb884), (0x0a64, 0xb885), (0x0a65, 0xb886), (0x0a66, 0xb887), (0x0a67, 0xb888),
    (0x0a68, 0xb889), (0x0a69, 0xb88a), (0x0a6a, 0xb88b), (0x0a6b, 0xb88c), (0x0a6c, 0xb88e), (0x0a6d, 0xb88f),
    (0x0a6e, 0xb890), (0x0a6f, 0xb891), (0x0a70, 0xb892), (0x0a71, 0xb893), (0x0a72, 0xb894), (0x0a73, 0xb895),
    (0x0a74, 0xb896), (0x0a75, 0xb897), (0x0a76, 0xb898), (0x0a77, 0xb899), (0x0a78, 0xb89a), (0x0a79, 0xb89b),
    (0x0a7a, 0xb89c), (0x0a7b, 0xb89d), (0x0a7c, 0xb89e), (0x0a7d, 0xb89f), (0x0a84, 0xb8a0), (0x0a85, 0xb8a1),
    (0x0a86, 0xb8a2), (0x0a87, 0xb8a3), (0x0a88, 0xb8a4), (0x0a89, 0xb8a5), (0x0a8a, 0xb8a6), (0x0a8b, 0xb8a7),
    (0x0a8c, 0xb8a9), (0x0a8d, 0xb8aa), (0x0a8e, 0xb8ab), (0x0a8f, 0xb8ac), (0x0a90, 0xb8ad), (0x0a91, 0xb8ae),
    (0x0a92, 0xb8af), (0x0a93, 0xb8b1), (0x0a94, 0xb8b2), (0x0a95, 0xb8b3), (0x0a96, 0xb8b5), (0x0a97, 0xb8b6),
    (0x0a98, 0xb8b7), (0x0a99, 0xb8b9), (0x0a9a, 0xb8ba), (0x0a9b, 0xb8bb), (0x0a9c, 0xb8bc), (0x0a9d, 0xb8bd),
    (0x0aa4, 0xb8be), (0x0aa5, 0xb8bf), (0x0aa6, 0xb8c2), (0x0aa7, 0xb8c4), (0x0aa8, 0xb8c6), (0x0aa9, 0xb8c7),
    (0x0aaa, 0xb8c8), (0x0aab, 0xb8c9), (0x0aac, 0xb8ca), (0x0aad, 0xb8cb), (0x0aae, 0xb8cd), (0x0aaf, 0xb8ce),
    (0x0ab0, 0xb8cf), (0x0ab1, 0xb8d1), (0x0ab2, 0xb8d2), (0x0ab3, 0xb8d3), (0x0ab4, 0xb8d5), (0x0ab5, 0xb8d6),
    (0x0ab6, 0xb8d7), (0x0ab7, 0xb8d8), (0x0ab8, 0xb8d9), (0x0ab9, 0xb8da), (0x0aba, 0xb8db), (0x0abb, 0xb8dc),
    (0x0abc, 0xb8de), (0x0abd, 0xb8e0), (0x0abe, 0xb8e2), (0x0abf, 0xb8e3), (0x0ac0, 0xb8e4), (0x0ac1, 0xb8e5),
    (0x0ac2, 0xb8e6), (0x0ac3, 0xb8e7), (0x0ac4, 0xb8ea), (0x0ac5, 0xb8eb), (0x0ac6, 0xb8ed), (0x0ac7, 0xb8ee),
    (0x0ac8, 0xb8ef), (0x0ac9, 0xb8f1), (0x0aca, 0xb8f2), (0x0acb, 0xb8f3), (0x0acc, 0xb8f4), (0x0acd, 0xb8f5),
    (0x0ace, 0xb8f6), (0x0acf, 0xb8f7), (0x0ad0, 0xb8fa), (0x0ad1, 0xb8fc), (0x0ad2, 0xb8fe), (0x0ad3, 0xb8ff),
    (0x0ad4, 0xb900), (0x0ad5, 0xb901), (0x0ad6, 0xb902), (0x0ad7, 0xb903), (0x0ad8, 0xb905), (0x0ad9, 0xb906),
    (0x0ada, 0xb907), (0x0adb, 0xb908), (0x0adc, 0xb909), (0x0add, 0xb90a), (0x0ade, 0xb90b), (0x0adf, 0xb90c),
    (0x0ae0, 0xb90d), (0x0ae1, 0xb90e), (0x0ae2, 0xb90f), (0x0ae3, 0xb910), (0x0ae4, 0xb911), (0x0ae5, 0xb912),
    (0x0ae6, 0xb913), (0x0ae7, 0xb914), (0x0ae8, 0xb915), (0x0ae9, 0xb916), (0x0aea, 0xb917), (0x0aeb, 0xb919),
    (0x0aec, 0xb91a), (0x0aed, 0xb91b), (0x0aee, 0xb91c), (0x0aef, 0xb91d), (0x0af0, 0xb91e), (0x0af1, 0xb91f),
    (0x0af2, 0xb921), (0x0af3, 0xb922), (0x0af4, 0xb923), (0x0af5, 0xb924), (0x0af6, 0xb925), (0x0af7, 0xb926),
    (0x0af8, 0xb927), (0x0af9, 0xb928), (0x0afa, 0xb929), (0x0afb, 0xb92a), (0x0afc, 0xb92b), (0x0afd, 0xb92c),
    (0x0afe, 0xb92d), (0x0aff, 0xb92e), (0x0b00, 0xb92f), (0x0b01, 0xb930), (0x0b02, 0xb931), (0x0b03, 0xb932),
    (0x0b04, 0xb933), (0x0b05, 0xb934), (0x0b06, 0xb935), (0x0b07, 0xb936), (0x0b08, 0xb937), (0x0b09, 0xb938),
    (0x0b0a, 0xb939), (0x0b0b, 0xb93a), (0x0b0c, 0xb93b), (0x0b0d, 0xb93e), (0x0b0e, 0xb93f), (0x0b0f, 0xb941),
    (0x0b10, 0xb942), (0x0b11, 0xb943), (0x0b12, 0xb945), (0x0b13, 0xb946), (0x0b14, 0xb947), (0x0b15, 0xb948),
    (0x0b16, 0xb949), (0x0b17, 0xb94a), (0x0b18, 0xb94b), (0x0b19, 0xb94d), (0x0b1a, 0xb94e), (0x0b1b, 0xb950),
    (0x0b1c, 0xb952), (0x0b1d, 0xb953), (0x0b1e, 0xb954), (0x0b1f, 0xb955), (0x0b20, 0xb956), (0x0b21, 0xb957),
    (0x0b22, 0xb95a), (0x0b23, 0xb95b), (0x0b24, 0xb95d), (0x0b25, 0xb95e), (0x0b26, 0xb95f), (0x0b27, 0xb961),
    (0x0b28, 0xb962), (0x0b29, 0xb963), (0x0b2a, 0xb964), (0x0b2b, 0xb965), (0x0b2c, 0xb966), (0x0b2d, 0xb967),
    (0x0b2e, 0xb96a), (0x0b2f, 0xb96c), (0x0b30, 0xb96e), (0x0b31, 0xb96f), (0x0b32, 0xb970), (0x0b33, 0xb971),
    (0x0b34, 0xb972), (0x0b35, 0xb973), (0x0b36, 0xb976), (0x0b37, 0xb977), (0x0b38, 0xb979), (0x0b39, 0xb97a),
    (0x0b3a, 0xb97b), (0x0b3b, 0xb97d), (0x0b42, 0xb97e), (0x0b43, 0xb97f), (0x0b44, 0xb980), (0x0b45, 0xb981),
    (0x0b46, 0xb982), (0x0b47, 0xb983), (0x0b48, 0xb986), (0x0b49, 0xb988), (0x0b4a, 0xb98b), (0x0b4b, 0xb98c),
    (0x0b4c, 0xb98f), (0x0b4d, 0xb990), (0x0b4e, 0xb991), (0x0b4f, 0xb992), (0x0b50, 0xb993), (0x0b51, 0xb994),
    (0x0b52, 0xb995), (0x0b53, 0xb996), (0x0b54, 0xb997), (0x0b55, 0xb998), (0x0b56, 0xb999), (0x0b57, 0xb99a),
    (0x0b58, 0xb99b), (0x0b59, 0xb99c), (0x0b5a, 0xb99d), (0x0b5b, 0xb99e), (0x0b62, 0xb99f), (0x0b63, 0xb9a0),
    (0x0b64, 0xb9a1), (0x0b65, 0xb9a2), (0x0b66, 0xb9a3), (0x0b67, 0xb9a4), (0x0b68, 0xb9a5), (0x0b69, 0xb9a6),
    (0x0b6a, 0xb9a7), (0x0b6b, 0xb9a8), (0x0b6c, 0xb9a9), (0x0b6d, 0xb9aa), (0x0b6e, 0xb9ab), (0x0b6f, 0xb9ae),
    (0x0b70, 0xb9af), (0x0b71, 0xb9b1), (0x0b72, 0xb9b2), (0x0b73, 0xb9b3), (0x0b74, 0xb9b5), (0x0b75, 0xb9b6),
    (0x0b76, 0xb9b7), (0x0b77, 0xb9b8), (0x0b78, 0xb9b9), (0x0b79, 0xb9ba), (0x0b7a, 0xb9bb), (0x0b7b, 0xb9be),
    (0x0b7c, 0xb9c0), (0x0b7d, 0xb9c2), (0x0b7e, 0xb9c3), (0x0b7f, 0xb9c4), (0x0b80, 0xb9c5), (0x0b81, 0xb9c6),
    (0x0b82, 0xb9c7), (0x0b83, 0xb9ca), (0x0b84, 0xb9cb), (0x0b85, 0xb9cd), (0x0b86, 0xb9d3), (0x0b87, 0xb9d4),
    (0x0b88, 0xb9d5), (0x0b89, 0xb9d6), (0x0b8a, 0xb9d7), (0x0b8b, 0xb9da), (0x0b8c, 0xb9dc), (0x0b8d, 0xb9df),
    (0x0b8e, 0xb9e0), (0x0b8f, 0xb9e2), (0x0b90, 0xb9e6), (0x0b91, 0xb9e7), (0x0b92, 0xb9e9), (0x0b93, 0xb9ea),
    (0x0b94, 0xb9eb), (0x0b95, 0xb9ed), (0x0b96, 0xb9ee), (0x0b97, 0xb9ef), (0x0b98, 0xb9f0), (0x0b99, 0xb9f1),
    (0x0b9a, 0xb9f2), (0x0b9b, 0xb9f3), (0x0b9c, 0xb9f6), (0x0b9d, 0xb9fb), (0x0b9e, 0xb9fc), (0x0b9f, 0xb9fd),
    (0x0ba0, 0xb9fe), (0x0ba1, 0xb9ff), (0x0ba2, 0xba02), (0x0ba3, 0xba03), (0x0ba4, 0xba04), (0x0ba5, 0xba05),
    (0x0ba6, 0xba06), (0x0ba7, 0xba07), (0x0ba8, 0xba09), (0x0ba9, 0xba0a), (0x0baa, 0xba0b), (0x0bab, 0xba0c),
    (0x0bac, 0xba0d), (0x0bad, 0xba0e), (0x0bae, 0xba0f), (0x0baf, 0xba10), (0x0bb0, 0xba11), (0x0bb1, 0xba12),
    (0x0bb2, 0xba13), (0x0bb3, 0xba14), (0x0bb4, 0xba16), (0x0bb5, 0xba17), (0x0bb6, 0xba18), (0x0bb7, 0xba19),
    (0x0bb8, 0xba1a), (0x0bb9, 0xba1b), (0x0bba, 0xba1c), (0x0bbb, 0xba1d), (0x0bbc, 0xba1e), (0x0bbd, 0xba1f),
    (0x0bbe, 0xba20), (0x0bbf, 0xba21), (0x0bc0, 0xba22), (0x0bc1, 0xba23), (0x0bc2, 0xba24), (0x0bc3, 0xba25),
    (0x0bc4, 0xba26), (0x0bc5, 0xba27), (0x0bc6, 0xba28), (0x0bc7, 0xba29), (0x0bc8, 0xba2a), (0x0bc9, 0xba2b),
    (0x0bca, 0xba2c), (0x0bcb, 0xba2d), (0x0bcc, 0xba2e), (0x0bcd, 0xba2f), (0x0bce, 0xba30), (0x0bcf, 0xba31),
    (0x0bd0, 0xba32), (0x0bd1, 0xba33), (0x0bd2, 0xba34), (0x0bd3, 0xba35), (0x0bd4, 0xba36), (0x0bd5, 0xba37),
    (0x0bd6, 0xba3a), (0x0bd7, 0xba3b), (0x0bd8, 0xba3d), (0x0bd9, 0xba3e), (0x0bda, 0xba3f), (0x0bdb, 0xba41),
    (0x0bdc, 0xba43), (0x0bdd, 0xba44), (0x0bde, 0xba45), (0x0bdf, 0xba46), (0x0be0, 0xba47), (0x0be1, 0xba4a),
    (0x0be2, 0xba4c), (0x0be3, 0xba4f), (0x0be4, 0xba50), (0x0be5, 0xba51), (0x0be6, 0xba52), (0x0be7, 0xba56),
    (0x0be8, 0xba57), (0x0be9, 0xba59), (0x0bea, 0xba5a), (0x0beb, 0xba5b), (0x0bec, 0xba5d), (0x0bed, 0xba5e),
    (0x0bee, 0xba5f), (0x0bef, 0xba60), (0x0bf0, 0xba61), (0x0bf1, 0xba62), (0x0bf2, 0xba63), (0x0bf3, 0xba66),
    (0x0bf4, 0xba6a), (0x0bf5, 0xba6b), (0x0bf6, 0xba6c), (0x0bf7, 0xba6d), (0x0bf8, 0xba6e), (0x0bf9, 0xba6f),
    (0x0c00, 0xba72), (0x0c01, 0xba73), (0x0c02, 0xba75), (0x0c03, 0xba76), (0x0c04, 0xba77), (0x0c05, 0xba79),
    (0x0c06, 0xba7a), (0x0c07, 0xba7b), (0x0c08, 0xba7c), (0x0c09, 0xba7d), (0x0c0a, 0xba7e), (0x0c0b, 0xba7f),
    (0x0c0c, 0xba80), (0x0c0d, 0xba81), (0x0c0e, 0xba82), (0x0c0f, 0xba86), (0x0c10, 0xba88), (0x0c11, 0xba89),
    (0x0c12, 0xba8a), (0x0c13, 0xba8b), (0x0c14, 0xba8d), (0x0c15, 0xba8e), (0x0c16, 0xba8f), (0x0c17, 0xba90),
    (0x0c18, 0xba91), (0x0c19, 0xba92), (0x0c20, 0xba93), (0x0c21, 0xba94), (0x0c22, 0xba95), (0x0c23, 0xba96),
    (0x0c24, 0xba97), (0x0c25, 0xba98), (0x0c26, 0xba99), (0x0c27, 0xba9a), (0x0c28, 0xba9b), (0x0c29, 0xba9c),
    (0x0c2a, 0xba9d), (0x0c2b, 0xba9e), (0x0c2c, 0xba9f), (0x0c2d, 0xbaa0), (0x0c2e, 0xbaa1), (0x0c2f, 0xbaa2),
    (0x0c30, 0xbaa3), (0x0c31, 0xbaa4), (0x0c32, 0xbaa5), (0x0c33, 0xbaa6), (0x0c34, 0xbaa7), (0x0c35, 0xbaaa),
    (0x0c36, 0xbaad), (0x0c37, 0xbaae), (0x0c38, 0xbaaf), (0x0c39, 0xbab1), (0x0c3a, 0xbab3), (0x0c3b, 0xbab4),
    (0x0c3c, 0xbab5), (0x0c3d, 0xbab6), (0x0c3e, 0xbab7), (0x0c3f, 0xbaba), (0x0c40, 0xbabc), (0x0c41, 0xbabe),
    (0x0c42, 0xbabf), (0x0c43, 0xbac0), (0x0c44, 0xbac1), (0x0c45, 0xbac2), (0x0c46, 0xbac3), (0x0c47, 0xbac5),
    (0x0c48, 0xbac6), (0x0c49, 0xbac7), (0x0c4a, 0xbac9), (0x0c4b, 0xbaca), (0x0c4c, 0xbacb), (0x0c4d, 0xbacc),
    (0x0c4e, 0xbacd), (0x0c4f, 0xbace), (0x0c50, 0xbacf), (0x0c51, 0xbad0), (0x0c52, 0xbad1), (0x0c53, 0xbad2),
    (0x0c54, 0xbad3), (0x0c55, 0xbad4), (0x0c56, 0xbad5), (0x0c57, 0xbad6), (0x0c58, 0xbad7), (0x0c59, 0xbada),
    (0x0c5a, 0xbadb), (0x0c5b, 0xbadc), (0x0c5c, 0xbadd), (0x0c5d, 0xbade), (0x0c5e, 0xbadf), (0x0c5f, 0xbae0),
    (0x0c60, 0xbae1), (0x0c61, 0xbae2), (0x0c62, 0xbae3), (0x0c63, 0xbae4), (0x0c64, 0xbae5), (0x0c65, 0xbae6),
    (0x0c66, 0xbae7), (0x0c67, 0xbae8), (0x0c68, 0xbae9), (0x0c69, 0xbaea), (0x0c6a, 0xbaeb), (0x0c6b, 0xbaec),
    (0x0c6c, 0xbaed), (0x0c6d, 0xbaee), (0x0c6e, 0xbaef), (0x0c6f, 0xbaf0), (0x0c70, 0xbaf1), (0x0c71, 0xbaf2),
    (0x0c72, 0xbaf3), (0x0c73, 0xbaf4), (0x0c74, 0xbaf5), (0x0c75, 0xbaf6), (0x0c76, 0xbaf7), (0x0c77, 0xbaf8),
    (0x0c78, 0xbaf9), (0x0c79, 0xbafa), (0x0c7a, 0xbafb), (0x0c7b, 0xbafd), (0x0c7c, 0xbafe), (0x0c7d, 0xbaff),
    (0x0c7e, 0xbb01), (0x0c7f, 0xbb02), (0x0c80, 0xbb03), (0x0c81, 0xbb05), (0x0c82, 0xbb06), (0x0c83, 0xbb07),
    (0x0c84, 0xbb08), (0x0c85, 0xbb09), (0x0c86, 0xbb0a), (0x0c87, 0xbb0b), (0x0c88, 0xbb0c), (0x0c89, 0xbb0e),
    (0x0c8a, 0xbb10), (0x0c8b, 0xbb12), (0x0c8c, 0xbb13), (0x0c8d, 0xbb14), (0x0c8e, 0xbb15), (0x0c8f, 0xbb16),
    (0x0c90, 0xbb17), (0x0c91, 0xbb19), (0x0c92, 0xbb1a), (0x0c93, 0xbb1b), (0x0c94, 0xbb1d), (0x0c95, 0xbb1e),
    (0x0c96, 0xbb1f), (0x0c97, 0xbb21), (0x0c98, 0xbb22), (0x0c99, 0xbb23), (0x0c9a, 0xbb24), (0x0c9b, 0xbb25),
    (0x0c9c, 0xbb26), (0x0c9d, 0xbb27), (0x0c9e, 0xbb28), (0x0c9f, 0xbb2a), (0x0ca0, 0xbb2c), (0x0ca1, 0xbb2d),
    (0x0ca2, 0xbb2e), (0x0ca3, 0xbb2f), (0x0ca4, 0xbb30), (0x0ca5, 0xbb31), (0x0ca6, 0xbb32), (0x0ca7, 0xbb33),
    (0x0ca8, 0xbb37), (0x0ca9, 0xbb39), (0x0caa, 0xbb3a), (0x0cab, 0xbb3f), (0x0cac, 0xbb40), (0x0cad, 0xbb41),
    (0x0cae, 0xbb42), (0x0caf, 0xbb43), (0x0cb0, 0xbb46), (0x0cb1, 0xbb48), (0x0cb2, 0xbb4a), (0x0cb3, 0xbb4b),
    (0x0cb4, 0xbb4c), (0x0cb5, 0xbb4e), (0x0cb6, 0xbb51), (0x0cb7, 0xbb52), (0x0cbe, 0xbb53), (0x0cbf, 0xbb55),
    (0x0cc0, 0xbb56), (0x0cc1, 0xbb57), (0x0cc2, 0xbb59), (0x0cc3, 0xbb5a), (0x0cc4, 0xbb5b), (0x0cc5, 0xbb5c),
    (0x0cc6, 0xbb5d), (0x0cc7, 0xbb5e), (0x0cc8, 0xbb5f), (0x0cc9, 0xbb60), (0x0cca, 0xbb62), (0x0ccb, 0xbb64),
    (0x0ccc, 0xbb65), (0x0ccd, 0xbb66), (0x0cce, 0xbb67), (0x0ccf, 0xbb68), (0x0cd0, 0xbb69), (0x0cd1, 0xbb6a),
    (0x0cd2, 0xbb6b), (0x0cd3, 0xbb6d), (0x0cd4, 0xbb6e), (0x0cd5, 0xbb6f), (0x0cd6, 0xbb70), (0x0cd7, 0xbb71),
    (0x0cde, 0xbb72), (0x0cdf, 0xbb73), (0x0ce0, 0xbb74), (0x0ce1, 0xbb75), (0x0ce2, 0xbb76), (0x0ce3, 0xbb77),
    (0x0ce4, 0xbb78), (0x0ce5, 0xbb79), (0x0ce6, 0xbb7a), (0x0ce7, 0xbb7b), (0x0ce8, 0xbb7c), (0x0ce9, 0xbb7d),
    (0x0cea, 0xbb7e), (0x0ceb, 0xbb7f), (0x0cec, 0xbb80), (0x0ced, 0xbb81), (0x0cee, 0xbb82), (0x0cef, 0xbb83),
    (0x0cf0, 0xbb84), (0x0cf1, 0xbb85), (0x0cf2, 0xbb86), (0x0cf3, 0xbb87), (0x0cf4, 0xbb89), (0x0cf5, 0xbb8a),
    (0x0cf6, 0xbb8b), (0x0cf7, 0xbb8d), (0x0cf8, 0xbb8e), (0x0cf9, 0xbb8f), (0x0cfa, 0xbb91), (0x0cfb, 0xbb92),
    (0x0cfc, 0xbb93), (0x0cfd, 0xbb94), (0x0cfe, 0xbb95), (0x0cff, 0xbb96), (0x0d00, 0xbb97), (0x0d01, 0xbb98),
    (0x0d02, 0xbb99), (0x0d03, 0xbb9a), (0x0d04, 0xbb9b), (0x0d05, 0xbb9c), (0x0d06, 0xbb9d), (0x0d07, 0xbb9e),
    (0x0d08, 0xbb9f), (0x0d09, 0xbba0), (0x0d0a, 0xbba1), (0x0d0b, 0xbba2), (0x0d0c, 0xbba3), (0x0d0d, 0xbba5),
    (0x0d0e, 0xbba6), (0x0d0f, 0xbba7), (0x0d10, 0xbba9), (0x0d11, 0xbbaa), (0x0d12, 0xbbab), (0x0d13, 0xbbad),
    (0x0d14, 0xbbae), (0x0d15, 0xbbaf), (0x0d16, 0xbbb0), (0x0d17, 0xbbb1), (0x0d18, 0xbbb2), (0x0d19, 0xbbb3),
    (0x0d1a, 0xbbb5), (0x0d1b, 0xbbb6), (0x0d1c, 0xbbb8), (0x0d1d, 0xbbb9), (0x0d1e, 0xbbba), (0x0d1f, 0xbbbb),
    (0x0d20, 0xbbbc), (0x0d21, 0xbbbd), (0x0d22, 0xbbbe), (0x0d23, 0xbbbf), (0x0d24, 0xbbc1), (0x0d25, 0xbbc2),
    (0x0d26, 0xbbc3), (0x0d27, 0xbbc5), (0x0d28, 0xbbc6), (0x0d29, 0xbbc7), (0x0d2a, 0xbbc9), (0x0d2b, 0xbbca),
    (0x0d2c, 0xbbcb), (0x0d2d, 0xbbcc), (0x0d2e, 0xbbcd), (0x0d2f, 0xbbce), (0x0d30, 0xbbcf), (0x0d31, 0xbbd1),
    (0x0d32, 0xbbd2), (0x0d33, 0xbbd4), (0x0d34, 0xbbd5), (0x0d35, 0xbbd6), (0x0d36, 0xbbd7), (0x0d37, 0xbbd8),
    (0x0d38, 0xbbd9), (0x0d39, 0xbbda), (0x0d3a, 0xbbdb), (0x0d3b, 0xbbdc), (0x0d3c, 0xbbdd), (0x0d3d, 0xbbde),
    (0x0d3e, 0xbbdf), (0x0d3f, 0xbbe0), (0x0d40, 0xbbe1), (0x0d41, 0xbbe2), (0x0d42, 0xbbe3), (0x0d43, 0xbbe4),
    (0x0d44, 0xbbe5), (0x0d45, 0xbbe6), (0x0d46, 0xbbe7), (0x0d47, 0xbbe8), (0x0d48, 0xbbe9), (0x0d49, 0xbbea),
    (0x0d4a, 0xbbeb), (0x0d4b, 0xbbec), (0x0d4c, 0xbbed), (0x0d4d, 0xbbee), (0x0d4e, 0xbbef), (0x0d4f, 0xbbf0),
    (0x0d50, 0xbbf1), (0x0d51, 0xbbf2), (0x0d52, 0xbbf3), (0x0d53, 0xbbf4), (0x0d54, 0xbbf5), (0x0d55, 0xbbf6),
    (0x0d56, 0xbbf7), (0x0d57, 0xbbfa), (0x0d58, 0xbbfb), (0x0d59, 0xbbfd), (0x0d5a, 0xbbfe), (0x0d5b, 0xbc01),
    (0x0d5c, 0xbc03), (0x0d5d, 0xbc04), (0x0d5e, 0xbc05), (0x0d5f, 0xbc06), (0x0d60, 0xbc07), (0x0d61, 0xbc0a),
    (0x0d62, 0xbc0e), (0x0d63, 0xbc10), (0x0d64, 0xbc12), (0x0d65, 0xbc13), (0x0d66, 0xbc19), (0x0d67, 0xbc1a),
    (0x0d68, 0xbc20), (0x0d69, 0xbc21), (0x0d6a, 0xbc22), (0x0d6b, 0xbc23), (0x0d6c, 0xbc26), (0x0d6d, 0xbc28),
    (0x0d6e, 0xbc2a), (0x0d6f, 0xbc2b), (0x0d70, 0xbc2c), (0x0d71, 0xbc2e), (0x0d72, 0xbc2f), (0x0d73, 0xbc32),
    (0x0d74, 0xbc33), (0x0d75, 0xbc35), (0x0d7c, 0xbc36), (0x0d7d, 0xbc37), (0x0d7e, 0xbc39), (0x0d7f, 0xbc3a),
    (0x0d80, 0xbc3b), (0x0d81, 0xbc3c), (0x0d82, 0xbc3d), (0x0d83, 0xbc3e), (0x0d84, 0xbc3f), (0x0d85, 0xbc42),
    (0x0d86, 0xbc46), (0x0d87, 0xbc47), (0x0d88, 0xbc48), (0x0d89, 0xbc4a), (0x0d8a, 0xbc4b), (0x0d8b, 0xbc4e),
    (0x0d8c, 0xbc4f), (0x0d8d, 0xbc51), (0x0d8e, 0xbc52), (0x0d8f, 0xbc53), (0x0d90, 0xbc54), (0x0d91, 0xbc55),
    (0x0d92, 0xbc56), (0x0d93, 0xbc57), (0x0d94, 0xbc58), (0x0d95, 0xbc59), (0x0d9c, 0xbc5a), (0x0d9d, 0xbc5b),
    (0x0d9e, 0xbc5c), (0x0d9f, 0xbc5e), (0x0da0, 0xbc5f), (0x0da1, 0xbc60), (0x0da2, 0xbc61), (0x0da3, 0xbc62),
    (0x0da4, 0xbc63), (0x0da5, 0xbc64), (0x0da6, 0xbc65), (0x0da7, 0xbc66), (0x0da8, 0xbc67), (0x0da9, 0xbc68),
    (0x0daa, 0xbc69), (0x0dab, 0xbc6a), (0x0dac, 0xbc6b), (0x0dad, 0xbc6c), (0x0dae, 0xbc6d), (0x0daf, 0xbc6e),
    (0x0db0, 0xbc6f), (0x0db1, 0xbc70), (0x0db2, 0xbc71), (0x0db3, 0xbc72), (0x0db4, 0xbc73), (0x0db5, 0xbc74),
    (0x0db6, 0xbc75), (0x0db7, 0xbc76), (0x0db8, 0xbc77), (0x0db9, 0xbc78), (0x0dba, 0xbc79), (0x0dbb, 0xbc7a),
    (0x0dbc, 0xbc7b), (0x0dbd, 0xbc7c), (0x0dbe, 0xbc7d), (0x0dbf, 0xbc7e), (0x0dc0, 0xbc7f), (0x0dc1, 0xbc80),
    (0x0dc2, 0xbc81), (0x0dc3, 0xbc82), (0x0dc4, 0xbc83), (0x0dc5, 0xbc86), (0x0dc6, 0xbc87), (0x0dc7, 0xbc89),
    (0x0dc8, 0xbc8a), (0x0dc9, 0xbc8d), (0x0dca, 0xbc8f), (0x0dcb, 0xbc90), (0x0dcc, 0xbc91), (0x0dcd, 0xbc92),
    (0x0dce, 0xbc93), (0x0dcf, 0xbc96), (0x0dd0, 0xbc98), (0x0dd1, 0xbc9b), (0x0dd2, 0xbc9c), (0x0dd3, 0xbc9d),
    (0x0dd4, 0xbc9e), (0x0dd5, 0xbc9f), (0x0dd6, 0xbca2), (0x0dd7, 0xbca3), (0x0dd8, 0xbca5), (0x0dd9, 0xbca6),
    (0x0dda, 0xbca9), (0x0ddb, 0xbcaa), (0x0ddc, 0xbcab), (0x0ddd, 0xbcac), (0x0dde, 0xbcad), (0x0ddf, 0xbcae),
    (0x0de0, 0xbcaf), (0x0de1, 0xbcb2), (0x0de2, 0xbcb6), (0x0de3, 0xbcb7), (0x0de4, 0xbcb8), (0x0de5, 0xbcb9),
    (0x0de6, 0xbcba), (0x0de7, 0xbcbb), (0x0de8, 0xbcbe), (0x0de9, 0xbcbf), (0x0dea, 0xbcc1), (0x0deb, 0xbcc2),
    (0x0dec, 0xbcc3), (0x0ded, 0xbcc5), (0x0dee, 0xbcc6), (0x0def, 0xbcc7), (0x0df0, 0xbcc8), (0x0df1, 0xbcc9),
    (0x0df2, 0xbcca), (0x0df3, 0xbccb), (0x0df4, 0xbccc), (0x0df5, 0xbcce), (0x0df6, 0xbcd2), (0x0df7, 0xbcd3),
    (0x0df8, 0xbcd4), (0x0df9, 0xbcd6), (0x0dfa, 0xbcd7), (0x0dfb, 0xbcd9), (0x0dfc, 0xbcda), (0x0dfd, 0xbcdb),
    (0x0dfe, 0xbcdd), (0x0dff, 0xbcde), (0x0e00, 0xbcdf), (0x0e01, 0xbce0), (0x0e02, 0xbce1), (0x0e03, 0xbce2),
    (0x0e04, 0xbce3), (0x0e05, 0xbce4), (0x0e06, 0xbce5), (0x0e07, 0xbce6), (0x0e08, 0xbce7), (0x0e09, 0xbce8),
    (0x0e0a, 0xbce9), (0x0e0b, 0xbcea), (0x0e0c, 0xbceb), (0x0e0d, 0xbcec), (0x0e0e, 0xbced), (0x0e0f, 0xbcee),
    (0x0e10, 0xbcef), (0x0e11, 0xbcf0), (0x0e12, 0xbcf1), (0x0e13, 0xbcf2), (0x0e14, 0xbcf3), (0x0e15, 0xbcf7),
    (0x0e16, 0xbcf9), (0x0e17, 0xbcfa), (0x0e18, 0xbcfb), (0x0e19, 0xbcfd), (0x0e1a, 0xbcfe), (0x0e1b, 0xbcff),
    (0x0e1c, 0xbd00), (0x0e1d, 0xbd01), (0x0e1e, 0xbd02), (0x0e1f, 0xbd03), (0x0e20, 0xbd06), (0x0e21, 0xbd08),
    (0x0e22, 0xbd0a), (0x0e23, 0xbd0b), (0x0e24, 0xbd0c), (0x0e25, 0xbd0d), (0x0e26, 0xbd0e), (0x0e27, 0xbd0f),
    (0x0e28, 0xbd11), (0x0e29, 0xbd12), (0x0e2a, 0xbd13), (0x0e2b, 0xbd15), (0x0e2c, 0xbd16), (0x0e2d, 0xbd17),
    (0x0e2e, 0xbd18), (0x0e2f, 0xbd19), (0x0e30, 0xbd1a), (0x0e31, 0xbd1b), (0x0e32, 0xbd1c), (0x0e33, 0xbd1d),
    (0x0e3a, 0xbd1e), (0x0e3b, 0xbd1f), (0x0e3c, 0xbd20), (0x0e3d, 0xbd21), (0x0e3e, 0xbd22), (0x0e3f, 0xbd23),
    (0x0e40, 0xbd25), (0x0e41, 0xbd26), (0x0e42, 0xbd27), (0x0e43, 0xbd28), (0x0e44, 0xbd29), (0x0e45, 0xbd2a),
    (0x0e46, 0xbd2b), (0x0e47, 0xbd2d), (0x0e48, 0xbd2e), (0x0e49, 0xbd2f), (0x0e4a, 0xbd30), (0x0e4b, 0xbd31),
    (0x0e4c, 0xbd32), (0x0e4d, 0xbd33), (0x0e4e, 0xbd34), (0x0e4f, 0xbd35), (0x0e50, 0xbd36), (0x0e51, 0xbd37),
    (0x0e52, 0xbd38), (0x0e53, 0xbd39), (0x0e5a, 0xbd3a), (0x0e5b, 0xbd3b), (0x0e5c, 0xbd3c), (0x0e5d, 0xbd3d),
    (0x0e5e, 0xbd3e), (0x0e5f, 0xbd3f), (0x0e60, 0xbd41), (0x0e61, 0xbd42), (0x0e62, 0xbd43), (0x0e63, 0xbd44),
    (0x0e64, 0xbd45), (0x0e65, 0xbd46), (0x0e66, 0xbd47), (0x0e67, 0xbd4a), (0x0e68, 0xbd4b), (0x0e69, 0xbd4d),
    (0x0e6a, 0xbd4e), (0x0e6b, 0xbd4f), (0x0e6c, 0xbd51), (0x0e6d, 0xbd52), (0x0e6e, 0xbd53), (0x0e6f, 0xbd54),
    (0x0e70, 0xbd55), (0x0e71, 0xbd56), (0x0e72, 0xbd57), (0x0e73, 0xbd5a), (0x0e74, 0xbd5b), (0x0e75, 0xbd5c),
    (0x0e76, 0xbd5d), (0x0e77, 0xbd5e), (0x0e78, 0xbd5f), (0x0e79, 0xbd60), (0x0e7a, 0xbd61), (0x0e7b, 0xbd62),
    (0x0e7c, 0xbd63), (0x0e7d, 0xbd65), (0x0e7e, 0xbd66), (0x0e7f, 0xbd67), (0x0e80, 0xbd69), (0x0e81, 0xbd6a),
    (0x0e82, 0xbd6b), (0x0e83, 0xbd6c), (0x0e84, 0xbd6d), (0x0e85, 0xbd6e), (0x0e86, 0xbd6f), (0x0e87, 0xbd70),
    (0x0e88, 0xbd71), (0x0e89, 0xbd72), (0x0e8a, 0xbd73), (0x0e8b, 0xbd74), (0x0e8c, 0xbd75), (0x0e8d, 0xbd76),
    (0x0e8e, 0xbd77), (0x0e8f, 0xbd78), (0x0e90, 0xbd79), (0x0e91, 0xbd7a), (0x0e92, 0xbd7b), (0x0e93, 0xbd7c),
    (0x0e94, 0xbd7d), (0x0e95, 0xbd7e), (0x0e96, 0xbd7f), (0x0e97, 0xbd82), (0x0e98, 0xbd83), (0x0e99, 0xbd85),
    (0x0e9a, 0xbd86), (0x0e9b, 0xbd8b), (0x0e9c, 0xbd8c), (0x0e9d, 0xbd8d), (0x0e9e, 0xbd8e), (0x0e9f, 0xbd8f),
    (0x0ea0, 0xbd92), (0x0ea1, 0xbd94), (0x0ea2, 0xbd96), (0x0ea3, 0xbd97), (0x0ea4, 0xbd98), (0x0ea5, 0xbd9b),
    (0x0ea6, 0xbd9d), (0x0ea7, 0xbd9e), (0x0ea8, 0xbd9f), (0x0ea9, 0xbda0), (0x0eaa, 0xbda1), (0x0eab, 0xbda2),
    (0x0eac, 0xbda3), (0x0ead, 0xbda5), (0x0eae, 0xbda6), (0x0eaf, 0xbda7), (0x0eb0, 0xbda8), (0x0eb1, 0xbda9),
    (0x0eb2, 0xbdaa), (0x0eb3, 0xbdab), (0x0eb4, 0xbdac), (0x0eb5, 0xbdad), (0x0eb6, 0xbdae), (0x0eb7, 0xbdaf),
    (0x0eb8, 0xbdb1), (0x0eb9, 0xbdb2), (0x0eba, 0xbdb3), (0x0ebb, 0xbdb4), (0x0ebc, 0xbdb5), (0x0ebd, 0xbdb6),
    (0x0ebe, 0xbdb7), (0x0ebf, 0xbdb9), (0x0ec0, 0xbdba), (0x0ec1, 0xbdbb), (0x0ec2, 0xbdbc), (0x0ec3, 0xbdbd),
    (0x0ec4, 0xbdbe), (0x0ec5, 0xbdbf), (0x0ec6, 0xbdc0), (0x0ec7, 0xbdc1), (0x0ec8, 0xbdc2), (0x0ec9, 0xbdc3),
    (0x0eca, 0xbdc4), (0x0ecb, 0xbdc5), (0x0ecc, 0xbdc6), (0x0ecd, 0xbdc7), (0x0ece, 0xbdc8), (0x0ecf, 0xbdc9),
    (0x0ed0, 0xbdca), (0x0ed1, 0xbdcb), (0x0ed2, 0xbdcc), (0x0ed3, 0xbdcd), (0x0ed4, 0xbdce), (0x0ed5, 0xbdcf),
    (0x0ed6, 0xbdd0), (0x0ed7, 0xbdd1), (0x0ed8, 0xbdd2), (0x0ed9, 0xbdd3), (0x0eda, 0xbdd6), (0x0edb, 0xbdd7),
    (0x0edc, 0xbdd9), (0x0edd, 0xbdda), (0x0ede, 0xbddb), (0x0edf, 0xbddd), (0x0ee0, 0xbdde), (0x0ee1, 0xbddf),
    (0x0ee2, 0xbde0), (0x0ee3, 0xbde1), (0x0ee4, 0xbde2), (0x0ee5, 0xbde3), (0x0ee6, 0xbde4), (0x0ee7, 0xbde5),
    (0x0ee8, 0xbde6), (0x0ee9, 0xbde7), (0x0eea, 0xbde8), (0x0eeb, 0xbdea), (0x0eec, 0xbdeb), (0x0eed, 0xbdec),
    (0x0eee, 0xbded), (0x0eef, 0xbdee), (0x0ef0, 0xbdef), (0x0ef1, 0xbdf1), (0x0ef8, 0xbdf2), (0x0ef9, 0xbdf3),
    (0x0efa, 0xbdf5), (0x0efb, 0xbdf6), (0x0efc, 0xbdf7), (0x0efd, 0xbdf9), (0x0efe, 0xbdfa), (0x0eff, 0xbdfb),
    (0x0f00, 0xbdfc), (0x0f01, 0xbdfd), (0x0f02, 0xbdfe), (0x0f03, 0xbdff), (0x0f04, 0xbe01), (0x0f05, 0xbe02),
    (0x0f06, 0xbe04), (0x0f07, 0xbe06), (0x0f08, 0xbe07), (0x0f09, 0xbe08), (0x0f0a, 0xbe09), (0x0f0b, 0xbe0a),
    (0x0f0c, 0xbe0b), (0x0f0d, 0xbe0e), (0x0f0e, 0xbe0f), (0x0f0f, 0xbe11), (0x0f10, 0xbe12), (0x0f11, 0xbe13),
    (0x0f18, 0xbe15), (0x0f19, 0xbe16), (0x0f1a, 0xbe17), (0x0f1b, 0xbe18), (0x0f1c, 0xbe19), (0x0f1d, 0xbe1a),
    (0x0f1e, 0xbe1b), (0x0f1f, 0xbe1e), (0x0f20, 0xbe20), (0x0f21, 0xbe21), (0x0f22, 0xbe22), (0x0f23, 0xbe23),
    (0x0f24, 0xbe24), (0x0f25, 0xbe25), (0x0f26, 0xbe26), (0x0f27, 0xbe27), (0x0f28, 0xbe28), (0x0f29, 0xbe29),
    (0x0f2a, 0xbe2a), (0x0f2b, 0xbe2b), (0x0f2c, 0xbe2c), (0x0f2d, 0xbe2d), (0x0f2e, 0xbe2e), (0x0f2f, 0xbe2f),
    (0x0f30, 0xbe30), (0x0f31, 0xbe31), (0x0f32, 0xbe32), (0x0f33, 0xbe33), (0x0f34, 0xbe34), (0x0f35, 0xbe35),
    (0x0f36, 0xbe36), (0x0f37, 0xbe37), (0x0f38, 0xbe38), (0x0f39, 0xbe39), (0x0f3a, 0xbe3a), (0x0f3b, 0xbe3b),
    (0x0f3c, 0xbe3c), (0x0f3d, 0xbe3d), (0x0f3e, 0xbe3e), (0x0f3f, 0xbe3f), (0x0f40, 0xbe40), (0x0f41, 0xbe41),
    (0x0f42, 0xbe42), (0x0f43, 0xbe43), (0x0f44, 0xbe46), (0x0f45, 0xbe47), (0x0f46, 0xbe49), (0x0f47, 0xbe4a),
    (0x0f48, 0xbe4b), (0x0f49, 0xbe4d), (0x0f4a, 0xbe4f), (0x0f4b, 0xbe50), (0x0f4c, 0xbe51), (0x0f4d, 0xbe52),
    (0x0f4e, 0xbe53), (0x0f4f, 0xbe56), (0x0f50, 0xbe58), (0x0f51, 0xbe5c), (0x0f52, 0xbe5d), (0x0f53, 0xbe5e),
    (0x0f54, 0xbe5f), (0x0f55, 0xbe62), (0x0f56, 0xbe63), (0x0f57, 0xbe65), (0x0f58, 0xbe66), (0x0f59, 0xbe67),
    (0x0f5a, 0xbe69), (0x0f5b, 0xbe6b), (0x0f5c, 0xbe6c), (0x0f5d, 0xbe6d), (0x0f5e, 0xbe6e), (0x0f5f, 0xbe6f),
    (0x0f60, 0xbe72), (0x0f61, 0xbe76), (0x0f62, 0xbe77), (0x0f63, 0xbe78), (0x0f64, 0xbe79), (0x0f65, 0xbe7a),
    (0x0f66, 0xbe7e), (0x0f67, 0xbe7f), (0x0f68, 0xbe81), (0x0f69, 0xbe82), (0x0f6a, 0xbe83), (0x0f6b, 0xbe85),
    (0x0f6c, 0xbe86), (0x0f6d, 0xbe87), (0x0f6e, 0xbe88), (0x0f6f, 0xbe89), (0x0f70, 0xbe8a), (0x0f71, 0xbe8b),
    (0x0f72, 0xbe8e), (0x0f73, 0xbe92), (0x0f74, 0xbe93), (0x0f75, 0xbe94), (0x0f76, 0xbe95), (0x0f77, 0xbe96),
    (0x0f78, 0xbe97), (0x0f79, 0xbe9a), (0x0f7a, 0xbe9b), (0x0f7b, 0xbe9c), (0x0f7c, 0xbe9d), (0x0f7d, 0xbe9e),
    (0x0f7e, 0xbe9f), (0x0f7f, 0xbea0), (0x0f80, 0xbea1), (0x0f81, 0xbea2), (0x0f82, 0xbea3), (0x0f83, 0xbea4),
    (0x0f84, 0xbea5), (0x0f85, 0xbea6), (0x0f86, 0xbea7), (0x0f87, 0xbea9), (0x0f88, 0xbeaa), (0x0f89, 0xbeab),
    (0x0f8a, 0xbeac), (0x0f8b, 0xbead), (0x0f8c, 0xbeae), (0x0f8d, 0xbeaf), (0x0f8e, 0xbeb0), (0x0f8f, 0xbeb1),
    (0x0f90, 0xbeb2), (0x0f91, 0xbeb3), (0x0f92, 0xbeb4), (0x0f93, 0xbeb5), (0x0f94, 0xbeb6), (0x0f95, 0xbeb7),
    (0x0f96, 0xbeb8), (0x0f97, 0xbeb9), (0x0f98, 0xbeba), (0x0f99, 0xbebb), (0x0f9a, 0xbebc), (0x0f9b, 0xbebd),
    (0x0f9c, 0xbebe), (0x0f9d, 0xbebf), (0x0f9e, 0xbec0), (0x0f9f, 0xbec1), (0x0fa0, 0xbec2), (0x0fa1, 0xbec3),
    (0x0fa2, 0xbec4), (0x0fa3, 0xbec5), (0x0fa4, 0xbec6), (0x0fa5, 0xbec7), (0x0fa6, 0xbec8), (0x0fa7, 0xbec9),
    (0x0fa8, 0xbeca), (0x0fa9, 0xbecb), (0x0faa, 0xbecc), (0x0fab, 0xbecd), (0x0fac, 0xbece), (0x0fad, 0xbecf),
    (0x0fae, 0xbed2), (0x0faf, 0xbed3), (0x0fb6, 0xbed5), (0x0fb7, 0xbed6), (0x0fb8, 0xbed9), (0x0fb9, 0xbeda),
    (0x0fba, 0xbedb), (0x0fbb, 0xbedc), (0x0fbc, 0xbedd), (0x0fbd, 0xbede), (0x0fbe, 0xbedf), (0x0fbf, 0xbee1),
    (0x0fc0, 0xbee2), (0x0fc1, 0xbee6), (0x0fc2, 0xbee7), (0x0fc3, 0xbee8), (0x0fc4, 0xbee9), (0x0fc5, 0xbeea),
    (0x0fc6, 0xbeeb), (0x0fc7, 0xbeed), (0x0fc8, 0xbeee), (0x0fc9, 0xbeef), (0x0fca, 0xbef0), (0x0fcb, 0xbef1),
    (0x0fcc, 0xbef2), (0x0fcd, 0xbef3), (0x0fce, 0xbef4), (0x0fcf, 0xbef5), (0x0fd6, 0xbef6), (0x0fd7, 0xbef7),
    (0x0fd8, 0xbef8), (0x0fd9, 0xbef9), (0x0fda, 0xbefa), (0x0fdb, 0xbefb), (0x0fdc, 0xbefc), (0x0fdd, 0xbefd),
    (0x0fde, 0xbefe), (0x0fdf, 0xbeff), (0x0fe0, 0xbf00), (0x0fe1, 0xbf02), (0x0fe2, 0xbf03), (0x0fe3, 0xbf04),
    (0x0fe4, 0xbf05), (0x0fe5, 0xbf06), (0x0fe6, 0xbf07), (0x0fe7, 0xbf0a), (0x0fe8, 0xbf0b), (0x0fe9, 0xbf0c),
    (0x0fea, 0xbf0d), (0x0feb, 0xbf0e), (0x0fec, 0xbf0f), (0x0fed, 0xbf10), (0x0fee, 0xbf11), (0x0fef, 0xbf12),
    (0x0ff0, 0xbf13), (0x0ff1, 0xbf14), (0x0ff2, 0xbf15), (0x0ff3, 0xbf16), (0x0ff4, 0xbf17), (0x0ff5, 0xbf1a),
    (0x0ff6, 0xbf1e), (0x0ff7, 0xbf1f), (0x0ff8, 0xbf20), (0x0ff9, 0xbf21), (0x0ffa, 0xbf22), (0x0ffb, 0xbf23),
    (0x0ffc, 0xbf24), (0x0ffd, 0xbf25), (0x0ffe, 0xbf26), (0x0fff, 0xbf27), (0x1000, 0xbf28), (0x1001, 0xbf29),
    (0x1002, 0xbf2a), (0x1003, 0xbf2b), (0x1004, 0xbf2c), (0x1005, 0xbf2d), (0x1006, 0xbf2e), (0x1007, 0xbf2f),
    (0x1008, 0xbf30), (0x1009, 0xbf31), (0x100a, 0xbf32), (0x100b, 0xbf33), (0x100c, 0xbf34), (0x100d, 0xbf35),
    (0x100e, 0xbf36), (0x100f, 0xbf37), (0x1010, 0xbf38), (0x1011, 0xbf39), (0x1012, 0xbf3a), (0x1013, 0xbf3b),
    (0x1014, 0xbf3c), (0x1015, 0xbf3d), (0x1016, 0xbf3e), (0x1017, 0xbf3f), (0x1018, 0xbf42), (0x1019, 0xbf43),
    (0x101a, 0xbf45), (0x101b, 0xbf46), (0x101c, 0xbf47), (0x101d, 0xbf49), (0x101e, 0xbf4a), (0x101f, 0xbf4b),
    (0x1020, 0xbf4c), (0x1021, 0xbf4d), (0x1022, 0xbf4e), (0x1023, 0xbf4f), (0x1024, 0xbf52), (0x1025, 0xbf53),
    (0x1026, 0xbf54), (0x1027, 0xbf56), (0x1028, 0xbf57), (0x1029, 0xbf58), (0x102a, 0xbf59), (0x102b, 0xbf5a),
    (0x102c, 0xbf5b), (0x102d, 0xbf5c), (0x102e, 0xbf5d), (0x102f, 0xbf5e), (0x1030, 0xbf5f), (0x1031, 0xbf60),
    (0x1032, 0xbf61), (0x1033, 0xbf62), (0x1034, 0xbf63), (0x1035, 0xbf64), (0x1036, 0xbf65), (0x1037, 0xbf66),
    (0x1038, 0xbf67), (0x1039, 0xbf68), (0x103a, 0xbf69), (0x103b, 0xbf6a), (0x103c, 0xbf6b), (0x103d, 0xbf6c),
    (0x103e, 0xbf6d), (0x103f, 0xbf6e), (0x1040, 0xbf6f), (0x1041, 0xbf70), (0x1042, 0xbf71), (0x1043, 0xbf72),
    (0x1044, 0xbf73), (0x1045, 0xbf74), (0x1046, 0xbf75), (0x1047, 0xbf76), (0x1048, 0xbf77), (0x1049, 0xbf78),
    (0x104a, 0xbf79), (0x104b, 0xbf7a), (0x104c, 0xbf7b), (0x104d, 0xbf7c), (0x104e, 0xbf7d), (0x104f, 0xbf7e),
    (0x1050, 0xbf7f), (0x1051, 0xbf80), (0x1052, 0xbf81), (0x1053, 0xbf82), (0x1054, 0xbf83), (0x1055, 0xbf84),
    (0x1056, 0xbf85), (0x1057, 0xbf86), (0x1058, 0xbf87), (0x1059, 0xbf88), (0x105a, 0xbf89), (0x105b, 0xbf8a),
    (0x105c, 0xbf8b), (0x105d, 0xbf8c), (0x105e, 0xbf8d), (0x105f, 0xbf8e), (0x1060, 0xbf8f), (0x1061, 0xbf90),
    (0x1062, 0xbf91), (0x1063, 0xbf92), (0x1064, 0xbf93), (0x1065, 0xbf95), (0x1066, 0xbf96), (0x1067, 0xbf97),
    (0x1068, 0xbf98), (0x1069, 0xbf99), (0x106a, 0xbf9a), (0x106b, 0xbf9b), (0x106c, 0xbf9c), (0x106d, 0xbf9d),
    (0x1074, 0xbf9e), (0x1075, 0xbf9f), (0x1076, 0xbfa0), (0x1077, 0xbfa1), (0x1078, 0xbfa2), (0x1079, 0xbfa3),
    (0x107a, 0xbfa4), (0x107b, 0xbfa5), (0x107c, 0xbfa6), (0x107d, 0xbfa7), (0x107e, 0xbfa8), (0x107f, 0xbfa9),
    (0x1080, 0xbfaa), (0x1081, 0xbfab), (0x1082, 0xbfac), (0x1083, 0xbfad), (0x1084, 0xbfae), (0x1085, 0xbfaf),
    (0x1086, 0xbfb1), (0x1087, 0xbfb2), (0x1088, 0xbfb3), (0x1089, 0xbfb4), (0x108a, 0xbfb5), (0x108b, 0xbfb6),
    (0x108c, 0xbfb7), (0x108d, 0xbfb8), (0x1094, 0xbfb9), (0x1095, 0xbfba), (0x1096, 0xbfbb), (0x1097, 0xbfbc),
    (0x1098, 0xbfbd), (0x1099, 0xbfbe), (0x109a, 0xbfbf), (0x109b, 0xbfc0), (0x109c, 0xbfc1), (0x109d, 0xbfc2),
    (0x109e, 0xbfc3), (0x109f, 0xbfc4), (0x10a0, 0xbfc6), (0x10a1, 0xbfc7), (0x10a2, 0xbfc8), (0x10a3, 0xbfc9),
    (0x10a4, 0xbfca), (0x10a5, 0xbfcb), (0x10a6, 0xbfce), (0x10a7, 0xbfcf), (0x10a8, 0xbfd1), (0x10a9, 0xbfd2),
    (0x10aa, 0xbfd3), (0x10ab, 0xbfd5), (0x10ac, 0xbfd6), (0x10ad, 0xbfd7), (0x10ae, 0xbfd8), (0x10af, 0xbfd9),
    (0x10b0, 0xbfda), (0x10b1, 0xbfdb), (0x10b2, 0xbfdd), (0x10b3, 0xbfde), (0x10b4, 0xbfe0), (0x10b5, 0xbfe2),
    (0x10b6, 0xbfe3), (0x10b7, 0xbfe4), (0x10b8, 0xbfe5), (0x10b9, 0xbfe6), (0x10ba, 0xbfe7), (0x10bb, 0xbfe8),
    (0x10bc, 0xbfe9), (0x10bd, 0xbfea), (0x10be, 0xbfeb), (0x10bf, 0xbfec), (0x10c0, 0xbfed), (0x10c1, 0xbfee),
    (0x10c2, 0xbfef), (0x10c3, 0xbff0), (0x10c4, 0xbff1), (0x10c5, 0xbff2), (0x10c6, 0xbff3), (0x10c7, 0xbff4),
    (0x10c8, 0xbff5), (0x10c9, 0xbff6), (0x10ca, 0xbff7), (0x10cb, 0xbff8), (0x10cc, 0xbff9), (0x10cd, 0xbffa),
    (0x10ce, 0xbffb), (0x10cf, 0xbffc), (0x10d0, 0xbffd), (0x10d1, 0xbffe), (0x10d2, 0xbfff), (0x10d3, 0xc000),
    (0x10d4, 0xc001), (0x10d5, 0xc002), (0x10d6, 0xc003), (0x10d7, 0xc004), (0x10d8, 0xc005), (0x10d9, 0xc006),
    (0x10da, 0xc007), (0x10db, 0xc008), (0x10dc, 0xc009), (0x10dd, 0xc00a), (0x10de, 0xc00b), (0x10df, 0xc00c),
    (0x10e0, 0xc00d), (0x10e1, 0xc00e), (0x10e2, 0xc00f), (0x10e3, 0xc010), (0x10e4, 0xc011), (0x10e5, 0xc012),
    (0x10e6, 0xc013), (0x10e7, 0xc014), (0x10e8, 0xc015), (0x10e9, 0xc016), (0x10ea, 0xc017), (0x10eb, 0xc018),
    (0x10ec, 0xc019), (0x10ed, 0xc01a), (0x10ee, 0xc01b), (0x10ef, 0xc01c), (0x10f0, 0xc01d), (0x10f1, 0xc01e),
    (0x10f2, 0xc01f), (0x10f3, 0xc020), (0x10f4, 0xc021), (0x10f5, 0xc022), (0x10f6, 0xc023), (0x10f7, 0xc024),
    (0x10f8, 0xc025), (0x10f9, 0xc026), (0x10fa, 0xc027), (0x10fb, 0xc028), (0x10fc, 0xc029), (0x10fd, 0xc02a),
    (0x10fe, 0xc02b), (0x10ff, 0xc02c), (0x1100, 0xc02d), (0x1101, 0xc02e), (0x1102, 0xc02f), (0x1103, 0xc030),
    (0x1104, 0xc031), (0x1105, 0xc032), (0x1106, 0xc033), (0x1107, 0xc034), (0x1108, 0xc035), (0x1109, 0xc036),
    (0x110a, 0xc037), (0x110b, 0xc038), (0x110c, 0xc039), (0x110d, 0xc03a), (0x110e, 0xc03b), (0x110f, 0xc03d),
    (0x1110, 0xc03e), (0x1111, 0xc03f), (0x1112, 0xc040), (0x1113, 0xc041), (0x1114, 0xc042), (0x1115, 0xc043),
    (0x1116, 0xc044), (0x1117, 0xc045), (0x1118, 0xc046), (0x1119, 0xc047), (0x111a, 0xc048), (0x111b, 0xc049),
    (0x111c, 0xc04a), (0x111d, 0xc04b), (0x111e, 0xc04c), (0x111f, 0xc04d), (0x1120, 0xc04e), (0x1121, 0xc04f),
    (0x1122, 0xc050), (0x1123, 0xc052), (0x1124, 0xc053), (0x1125, 0xc054), (0x1126, 0xc055), (0x1127, 0xc056),
    (0x1128, 0xc057), (0x1129, 0xc059), (0x112a, 0xc05a), (0x112b, 0xc05b), (0x1132, 0xc05d), (0x1133, 0xc05e),
    (0x1134, 0xc05f), (0x1135, 0xc061), (0x1136, 0xc062), (0x1137, 0xc063), (0x1138, 0xc064), (0x1139, 0xc065),
    (0x113a, 0xc066), (0x113b, 0xc067), (0x113c, 0xc06a), (0x113d, 0xc06b), (0x113e, 0xc06c), (0x113f, 0xc06d),
    (0x1140, 0xc06e), (0x1141, 0xc06f), (0x1142, 0xc070), (0x1143, 0xc071), (0x1144, 0xc072), (0x1145, 0xc073),
    (0x1146, 0xc074), (0x1147, 0xc075), (0x1148, 0xc076), (0x1149, 0xc077), (0x114a, 0xc078), (0x114b, 0xc079),
    (0x1152, 0xc07a), (0x1153, 0xc07b), (0x1154, 0xc07c), (0x1155, 0xc07d), (0x1156, 0xc07e), (0x1157, 0xc07f),
    (0x1158, 0xc080), (0x1159, 0xc081), (0x115a, 0xc082), (0x115b, 0xc083), (0x115c, 0xc084), (0x115d, 0xc085),
    (0x115e, 0xc086), (0x115f, 0xc087), (0x1160, 0xc088), (0x1161, 0xc089), (0x1162, 0xc08a), (0x1163, 0xc08b),
    (0x1164, 0xc08c), (0x1165, 0xc08d), (0x1166, 0xc08e), (0x1167, 0xc08f), (0x1168, 0xc092), (0x1169, 0xc093),
    (0x116a, 0xc095), (0x116b, 0xc096), (0x116c, 0xc097), (0x116d, 0xc099), (0x116e, 0xc09a), (0x116f, 0xc09b),
    (0x1170, 0xc09c), (0x1171, 0xc09d), (0x1172, 0xc09e), (0x1173, 0xc09f), (0x1174, 0xc0a2), (0x1175, 0xc0a4),
    (0x1176, 0xc0a6), (0x1177, 0xc0a7), (0x1178, 0xc0a8), (0x1179, 0xc0a9), (0x117a, 0xc0aa), (0x117b, 0xc0ab),
    (0x117c, 0xc0ae), (0x117d, 0xc0b1), (0x117e, 0xc0b2), (0x117f, 0xc0b7), (0x1180, 0xc0b8), (0x1181, 0xc0b9),
    (0x1182, 0xc0ba), (0x1183, 0xc0bb), (0x1184, 0xc0be), (0x1185, 0xc0c2), (0x1186, 0xc0c3), (0x1187, 0xc0c4),
    (0x1188, 0xc0c6), (0x1189, 0xc0c7), (0x118a, 0xc0ca), (0x118b, 0xc0cb), (0x118c, 0xc0cd), (0x118d, 0xc0ce),
    (0x118e, 0xc0cf), (0x118f, 0xc0d1), (0x1190, 0xc0d2), (0x1191, 0xc0d3), (0x1192, 0xc0d4), (0x1193, 0xc0d5),
    (0x1194, 0xc0d6), (0x1195, 0xc0d7), (0x1196, 0xc0da), (0x1197, 0xc0de), (0x1198, 0xc0df), (0x1199, 0xc0e0),
    (0x119a, 0xc0e1), (0x119b, 0xc0e2), (0x119c, 0xc0e3), (0x119d, 0xc0e6), (0x119e, 0xc0e7), (0x119f, 0xc0e9),
    (0x11a0, 0xc0ea), (0x11a1, 0xc0eb), (0x11a2, 0xc0ed), (0x11a3, 0xc0ee), (0x11a4, 0xc0ef), (0x11a5, 0xc0f0),
    (0x11a6, 0xc0f1), (0x11a7, 0xc0f2), (0x11a8, 0xc0f3), (0x11a9, 0xc0f6), (0x11aa, 0xc0f8), (0x11ab, 0xc0fa),
    (0x11ac, 0xc0fb), (0x11ad, 0xc0fc), (0x11ae, 0xc0fd), (0x11af, 0xc0fe), (0x11b0, 0xc0ff), (0x11b1, 0xc101),
    (0x11b2, 0xc102), (0x11b3, 0xc103), (0x11b4, 0xc105), (0x11b5, 0xc106), (0x11b6, 0xc107), (0x11b7, 0xc109),
    (0x11b8, 0xc10a), (0x11b9, 0xc10b), (0x11ba, 0xc10c), (0x11bb, 0xc10d), (0x11bc, 0xc10e), (0x11bd, 0xc10f),
    (0x11be, 0xc111), (0x11bf, 0xc112), (0x11c0, 0xc113), (0x11c1, 0xc114), (0x11c2, 0xc116), (0x11c3, 0xc117),
    (0x11c4, 0xc118), (0x11c5, 0xc119), (0x11c6, 0xc11a), (0x11c7, 0xc11b), (0x11c8, 0xc121), (0x11c9, 0xc122),
    (0x11ca, 0xc125), (0x11cb, 0xc128), (0x11cc, 0xc129), (0x11cd, 0xc12a), (0x11ce, 0xc12b), (0x11cf, 0xc12e),
    (0x11d0, 0xc132), (0x11d1, 0xc133), (0x11d2, 0xc134), (0x11d3, 0xc135), (0x11d4, 0xc137), (0x11d5, 0xc13a),
    (0x11d6, 0xc13b), (0x11d7, 0xc13d), (0x11d8, 0xc13e), (0x11d9, 0xc13f), (0x11da, 0xc141), (0x11db, 0xc142),
    (0x11dc, 0xc143), (0x11dd, 0xc144), (0x11de, 0xc145), (0x11df, 0xc146), (0x11e0, 0xc147), (0x11e1, 0xc14a),
    (0x11e2, 0xc14e), (0x11e3, 0xc14f), (0x11e4, 0xc150), (0x11e5, 0xc151), (0x11e6, 0xc152), (0x11e7, 0xc153),
    (0x11e8, 0xc156), (0x11e9, 0xc157), (0x11f0, 0xc159), (0x11f1, 0xc15a), (0x11f2, 0xc15b), (0x11f3, 0xc15d),
    (0x11f4, 0xc15e), (0x11f5, 0xc15f), (0x11f6, 0xc160), (0x11f7, 0xc161), (0x11f8, 0xc162), (0x11f9, 0xc163),
    (0x11fa, 0xc166), (0x11fb, 0xc16a), (0x11fc, 0xc16b), (0x11fd, 0xc16c), (0x11fe, 0xc16d), (0x11ff, 0xc16e),
    (0x1200, 0xc16f), (0x1201, 0xc171), (0x1202, 0xc172), (0x1203, 0xc173), (0x1204, 0xc175), (0x1205, 0xc176),
    (0x1206, 0xc177), (0x1207, 0xc179), (0x1208, 0xc17a), (0x1209, 0xc17b), (0x1210, 0xc17c), (0x1211, 0xc17d),
    (0x1212, 0xc17e), (0x1213, 0xc17f), (0x1214, 0xc180), (0x1215, 0xc181), (0x1216, 0xc182), (0x1217, 0xc183),
    (0x1218, 0xc184), (0x1219, 0xc186), (0x121a, 0xc187), (0x121b, 0xc188), (0x121c, 0xc189), (0x121d, 0xc18a),
    (0x121e, 0xc18b), (0x121f, 0xc18f), (0x1220, 0xc191), (0x1221, 0xc192), (0x1222, 0xc193), (0x1223, 0xc195),
    (0x1224, 0xc197), (0x1225, 0xc198), (0x1226, 0xc199), (0x1227, 0xc19a), (0x1228, 0xc19b), (0x1229, 0xc19e),
    (0x122a, 0xc1a0), (0x122b, 0xc1a2), (0x122c, 0xc1a3), (0x122d, 0xc1a4), (0x122e, 0xc1a6), (0x122f, 0xc1a7),
    (0x1230, 0xc1aa), (0x1231, 0xc1ab), (0x1232, 0xc1ad), (0x1233, 0xc1ae), (0x1234, 0xc1af), (0x1235, 0xc1b1),
    (0x1236, 0xc1b2), (0x1237, 0xc1b3), (0x1238, 0xc1b4), (0x1239, 0xc1b5), (0x123a, 0xc1b6), (0x123b, 0xc1b7),
    (0x123c, 0xc1b8), (0x123d, 0xc1b9), (0x123e, 0xc1ba), (0x123f, 0xc1bb), (0x1240, 0xc1bc), (0x1241, 0xc1be),
    (0x1242, 0xc1bf), (0x1243, 0xc1c0), (0x1244, 0xc1c1), (0x1245, 0xc1c2), (0x1246, 0xc1c3), (0x1247, 0xc1c5),
    (0x1248, 0xc1c6), (0x1249, 0xc1c7), (0x124a, 0xc1c9), (0x124b, 0xc1ca), (0x124c, 0xc1cb), (0x124d, 0xc1cd),
    (0x124e, 0xc1ce), (0x124f, 0xc1cf), (0x1250, 0xc1d0), (0x1251, 0xc1d1), (0x1252, 0xc1d2), (0x1253, 0xc1d3),
    (0x1254, 0xc1d5), (0x1255, 0xc1d6), (0x1256, 0xc1d9), (0x1257, 0xc1da), (0x1258, 0xc1db), (0x1259, 0xc1dc),
    (0x125a, 0xc1dd), (0x125b, 0xc1de), (0x125c, 0xc1df), (0x125d, 0xc1e1), (0x125e, 0xc1e2), (0x125f, 0xc1e3),
    (0x1260, 0xc1e5), (0x1261, 0xc1e6), (0x1262, 0xc1e7), (0x1263, 0xc1e9), (0x1264, 0xc1ea), (0x1265, 0xc1eb),
    (0x1266, 0xc1ec), (0x1267, 0xc1ed), (0x1268, 0xc1ee), (0x1269, 0xc1ef), (0x126a, 0xc1f2), (0x126b, 0xc1f4),
    (0x126c, 0xc1f5), (0x126d, 0xc1f6), (0x126e, 0xc1f7), (0x126f, 0xc1f8), (0x1270, 0xc1f9), (0x1271, 0xc1fa),
    (0x1272, 0xc1fb), (0x1273, 0xc1fe), (0x1274, 0xc1ff), (0x1275, 0xc201), (0x1276, 0xc202), (0x1277, 0xc203),
    (0x1278, 0xc205), (0x1279, 0xc206), (0x127a, 0xc207), (0x127b, 0xc208), (0x127c, 0xc209), (0x127d, 0xc20a),
    (0x127e, 0xc20b), (0x127f, 0xc20e), (0x1280, 0xc210), (0x1281, 0xc212), (0x1282, 0xc213), (0x1283, 0xc214),
    (0x1284, 0xc215), (0x1285, 0xc216), (0x1286, 0xc217), (0x1287, 0xc21a), (0x1288, 0xc21b), (0x1289, 0xc21d),
    (0x128a, 0xc21e), (0x128b, 0xc221), (0x128c, 0xc222), (0x128d, 0xc223), (0x128e, 0xc224), (0x128f, 0xc225),
    (0x1290, 0xc226), (0x1291, 0xc227), (0x1292, 0xc22a), (0x1293, 0xc22c), (0x1294, 0xc22e), (0x1295, 0xc230),
    (0x1296, 0xc233), (0x1297, 0xc235), (0x1298, 0xc236), (0x1299, 0xc237), (0x129a, 0xc238), (0x129b, 0xc239),
    (0x129c, 0xc23a), (0x129d, 0xc23b), (0x129e, 0xc23c), (0x129f, 0xc23d), (0x12a0, 0xc23e), (0x12a1, 0xc23f),
    (0x12a2, 0xc240), (0x12a3, 0xc241), (0x12a4, 0xc242), (0x12a5, 0xc243), (0x12a6, 0xc244), (0x12a7, 0xc245),
    (0x12ae, 0xc246), (0x12af, 0xc247), (0x12b0, 0xc249), (0x12b1, 0xc24a), (0x12b2, 0xc24b), (0x12b3, 0xc24c),
    (0x12b4, 0xc24d), (0x12b5, 0xc24e), (0x12b6, 0xc24f), (0x12b7, 0xc252), (0x12b8, 0xc253), (0x12b9, 0xc255),
    (0x12ba, 0xc256), (0x12bb, 0xc257), (0x12bc, 0xc259), (0x12bd, 0xc25a), (0x12be, 0xc25b), (0x12bf, 0xc25c),
    (0x12c0, 0xc25d), (0x12c1, 0xc25e), (0x12c2, 0xc25f), (0x12c3, 0xc261), (0x12c4, 0xc262), (0x12c5, 0xc263),
    (0x12c6, 0xc264), (0x12c7, 0xc266), (0x12ce, 0xc267), (0x12cf, 0xc268), (0x12d0, 0xc269), (0x12d1, 0xc26a),
    (0x12d2, 0xc26b), (0x12d3, 0xc26e), (0x12d4, 0xc26f), (0x12d5, 0xc271), (0x12d6, 0xc272), (0x12d7, 0xc273),
    (0x12d8, 0xc275), (0x12d9, 0xc276), (0x12da, 0xc277), (0x12db, 0xc278), (0x12dc, 0xc279), (0x12dd, 0xc27a),
    (0x12de, 0xc27b), (0x12df, 0xc27e), (0x12e0, 0xc280), (0x12e1, 0xc282), (0x12e2, 0xc283), (0x12e3, 0xc284),
    (0x12e4, 0xc285), (0x12e5, 0xc286), (0x12e6, 0xc287), (0x12e7, 0xc28a), (0x12e8, 0xc28b), (0x12e9, 0xc28c),
    (0x12ea, 0xc28d), (0x12eb, 0xc28e), (0x12ec, 0xc28f), (0x12ed, 0xc291), (0x12ee, 0xc292), (0x12ef, 0xc293),
    (0x12f0, 0xc294), (0x12f1, 0xc295), (0x12f2, 0xc296), (0x12f3, 0xc297), (0x12f4, 0xc299), (0x12f5, 0xc29a),
    (0x12f6, 0xc29c), (0x12f7, 0xc29e), (0x12f8, 0xc29f), (0x12f9, 0xc2a0), (0x12fa, 0xc2a1), (0x12fb, 0xc2a2),
    (0x12fc, 0xc2a3), (0x12fd, 0xc2a6), (0x12fe, 0xc2a7), (0x12ff, 0xc2a9), (0x1300, 0xc2aa), (0x1301, 0xc2ab),
    (0x1302, 0xc2ae), (0x1303, 0xc2af), (0x1304, 0xc2b0), (0x1305, 0xc2b1), (0x1306, 0xc2b2), (0x1307, 0xc2b3),
    (0x1308, 0xc2b6), (0x1309, 0xc2b8), (0x130a, 0xc2ba), (0x130b, 0xc2bb), (0x130c, 0xc2bc), (0x130d, 0xc2bd),
    (0x130e, 0xc2be), (0x130f, 0xc2bf), (0x1310, 0xc2c0), (0x1311, 0xc2c1), (0x1312, 0xc2c2), (0x1313, 0xc2c3),
    (0x1314, 0xc2c4), (0x1315, 0xc2c5), (0x1316, 0xc2c6), (0x1317, 0xc2c7), (0x1318, 0xc2c8), (0x1319, 0xc2c9),
    (0x131a, 0xc2ca), (0x131b, 0xc2cb), (0x131c, 0xc2cc), (0x131d, 0xc2cd), (0x131e, 0xc2ce), (0x131f, 0xc2cf),
    (0x1320, 0xc2d0), (0x1321, 0xc2d1), (0x1322, 0xc2d2), (0x1323, 0xc2d3), (0x1324, 0xc2d4), (0x1325, 0xc2d5),
    (0x1326, 0xc2d6), (0x1327, 0xc2d7), (0x1328, 0xc2d8), (0x1329, 0xc2d9), (0x132a, 0xc2da), (0x132b, 0xc2db),
    (0x132c, 0xc2de), (0x132d, 0xc2df), (0x132e, 0xc2e1), (0x132f, 0xc2e2), (0x1330, 0xc2e5), (0x1331, 0xc2e6),
    (0x1332, 0xc2e7), (0x1333, 0xc2e8), (0x1334, 0xc2e9), (0x1335, 0xc2ea), (0x1336, 0xc2ee), (0x1337, 0xc2f0),
    (0x1338, 0xc2f2), (0x1339, 0xc2f3), (0x133a, 0xc2f4), (0x133b, 0xc2f5), (0x133c, 0xc2f7), (0x133d, 0xc2fa),
    (0x133e, 0xc2fd), (0x133f, 0xc2fe), (0x1340, 0xc2ff), (0x1341, 0xc301), (0x1342, 0xc302), (0x1343, 0xc303),
    (0x1344, 0xc304), (0x1345, 0xc305), (0x1346, 0xc306), (0x1347, 0xc307), (0x1348, 0xc30a), (0x1349, 0xc30b),
    (0x134a, 0xc30e), (0x134b, 0xc30f), (0x134c, 0xc310), (0x134d, 0xc311), (0x134e, 0xc312), (0x134f, 0xc316),
    (0x1350, 0xc317), (0x1351, 0xc319), (0x1352, 0xc31a), (0x1353, 0xc31b), (0x1354, 0xc31d), (0x1355, 0xc31e),
    (0x1356, 0xc31f), (0x1357, 0xc320), (0x1358, 0xc321), (0x1359, 0xc322), (0x135a, 0xc323), (0x135b, 0xc326),
    (0x135c, 0xc327), (0x135d, 0xc32a), (0x135e, 0xc32b), (0x135f, 0xc32c), (0x1360, 0xc32d), (0x1361, 0xc32e),
    (0x1362, 0xc32f), (0x1363, 0xc330), (0x1364, 0xc331), (0x1365, 0xc332), (0x136c, 0xc333), (0x136d, 0xc334),
    (0x136e, 0xc335), (0x136f, 0xc336), (0x1370, 0xc337), (0x1371, 0xc338), (0x1372, 0xc339), (0x1373, 0xc33a),
    (0x1374, 0xc33b), (0x1375, 0xc33c), (0x1376, 0xc33d), (0x1377, 0xc33e), (0x1378, 0xc33f), (0x1379, 0xc340),
    (0x137a, 0xc341), (0x137b, 0xc342), (0x137c, 0xc343), (0x137d, 0xc344), (0x137e, 0xc346), (0x137f, 0xc347),
    (0x1380, 0xc348), (0x1381, 0xc349), (0x1382, 0xc34a), (0x1383, 0xc34b), (0x1384, 0xc34c), (0x1385, 0xc34d),
    (0x138c, 0xc34e), (0x138d, 0xc34f), (0x138e, 0xc350), (0x138f, 0xc351), (0x1390, 0xc352), (0x1391, 0xc353),
    (0x1392, 0xc354), (0x1393, 0xc355), (0x1394, 0xc356), (0x1395, 0xc357), (0x1396, 0xc358), (0x1397, 0xc359),
    (0x1398, 0xc35a), (0x1399, 0xc35b), (0x139a, 0xc35c), (0x139b, 0xc35d), (0x139c, 0xc35e), (0x139d, 0xc35f),
    (0x139e, 0xc360), (0x139f, 0xc361), (0x13a0, 0xc362), (0x13a1, 0xc363), (0x13a2, 0xc364), (0x13a3, 0xc365),
    (0x13a4, 0xc366), (0x13a5, 0xc367), (0x13a6, 0xc36a), (0x13a7, 0xc36b), (0x13a8, 0xc36d), (0x13a9, 0xc36e),
    (0x13aa, 0xc36f), (0x13ab, 0xc371), (0x13ac, 0xc373), (0x13ad, 0xc374), (0x13ae, 0xc375), (0x13af, 0xc376),
    (0x13b0, 0xc377), (0x13b1, 0xc37a), (0x13b2, 0xc37b), (0x13b3, 0xc37e), (0x13b4, 0xc37f), (0x13b5, 0xc380),
    (0x13b6, 0xc381), (0x13b7, 0xc382), (0x13b8, 0xc383), (0x13b9, 0xc385), (0x13ba, 0xc386), (0x13bb, 0xc387),
    (0x13bc, 0xc389), (0x13bd, 0xc38a), (0x13be, 0xc38b), (0x13bf, 0xc38d), (0x13c0, 0xc38e), (0x13c1, 0xc38f),
    (0x13c2, 0xc390), (0x13c3, 0xc391), (0x13c4, 0xc392), (0x13c5, 0xc393), (0x13c6, 0xc394), (0x13c7, 0xc395),
    (0x13c8, 0xc396), (0x13c9, 0xc397), (0x13ca, 0xc398), (0x13cb, 0xc399), (0x13cc, 0xc39a), (0x13cd, 0xc39b),
    (0x13ce, 0xc39c), (0x13cf, 0xc39d), (0x13d0, 0xc39e), (0x13d1, 0xc39f), (0x13d2, 0xc3a0), (0x13d3, 0xc3a1),
    (0x13d4, 0xc3a2), (0x13d5, 0xc3a3), (0x13d6, 0xc3a4), (0x13d7, 0xc3a5), (0x13d8, 0xc3a6), (0x13d9, 0xc3a7),
    (0x13da, 0xc3a8), (0x13db, 0xc3a9), (0x13dc, 0xc3aa), (0x13dd, 0xc3ab), (0x13de, 0xc3ac), (0x13df, 0xc3ad),
    (0x13e0, 0xc3ae), (0x13e1, 0xc3af), (0x13e2, 0xc3b0), (0x13e3, 0xc3b1), (0x13e4, 0xc3b2), (0x13e5, 0xc3b3),
    (0x13e6, 0xc3b4), (0x13e7, 0xc3b5), (0x13e8, 0xc3b6), (0x13e9, 0xc3b7), (0x13ea, 0xc3b8), (0x13eb, 0xc3b9),
    (0x13ec, 0xc3ba), (0x13ed, 0xc3bb), (0x13ee, 0xc3bc), (0x13ef, 0xc3bd), (0x13f0, 0xc3be), (0x13f1, 0xc3bf),
    (0x13f2, 0xc3c1), (0x13f3, 0xc3c2), (0x13f4, 0xc3c3), (0x13f5, 0xc3c4), (0x13f6, 0xc3c5), (0x13f7, 0xc3c6),
    (0x13f8, 0xc3c7), (0x13f9, 0xc3c8), (0x13fa, 0xc3c9), (0x13fb, 0xc3ca), (0x13fc, 0xc3cb), (0x13fd, 0xc3cc),
    (0x13fe, 0xc3cd), (0x13ff, 0xc3ce), (0x1400, 0xc3cf), (0x1401, 0xc3d0), (0x1402, 0xc3d1), (0x1403, 0xc3d2),
    (0x1404, 0xc3d3), (0x1405, 0xc3d4), (0x1406, 0xc3d5), (0x1407, 0xc3d6), (0x1408, 0xc3d7), (0x1409, 0xc3da),
    (0x140a, 0xc3db), (0x140b, 0xc3dd), (0x140c, 0xc3de), (0x140d, 0xc3e1), (0x140e, 0xc3e3), (0x140f, 0xc3e4),
    (0x1410, 0xc3e5), (0x1411, 0xc3e6), (0x1412, 0xc3e7), (0x1413, 0xc3ea), (0x1414, 0xc3eb), (0x1415, 0xc3ec),
    (0x1416, 0xc3ee), (0x1417, 0xc3ef), (0x1418, 0xc3f0), (0x1419, 0xc3f1), (0x141a, 0xc3f2), (0x141b, 0xc3f3),
    (0x141c, 0xc3f6), (0x141d, 0xc3f7), (0x141e, 0xc3f9), (0x141f, 0xc3fa), (0x1420, 0xc3fb), (0x1421, 0xc3fc),
    (0x1422, 0xc3fd), (0x1423, 0xc3fe), (0x142a, 0xc3ff), (0x142b, 0xc400), (0x142c, 0xc401), (0x142d, 0xc402),
    (0x142e, 0xc403), (0x142f, 0xc404), (0x1430, 0xc405), (0x1431, 0xc406), (0x1432, 0xc407), (0x1433, 0xc409),
    (0x1434, 0xc40a), (0x1435, 0xc40b), (0x1436, 0xc40c), (0x1437, 0xc40d), (0x1438, 0xc40e), (0x1439, 0xc40f),
    (0x143a, 0xc411), (0x143b, 0xc412), (0x143c, 0xc413), (0x143d, 0xc414), (0x143e, 0xc415), (0x143f, 0xc416),
    (0x1440, 0xc417), (0x1441, 0xc418), (0x1442, 0xc419), (0x1443, 0xc41a), (0x144a, 0xc41b), (0x144b, 0xc41c),
    (0x144c, 0xc41d), (0x144d, 0xc41e), (0x144e, 0xc41f), (0x144f, 0xc420), (0x1450, 0xc421), (0x1451, 0xc422),
    (0x1452, 0xc423), (0x1453, 0xc425), (0x1454, 0xc426), (0x1455, 0xc427), (0x1456, 0xc428), (0x1457, 0xc429),
    (0x1458, 0xc42a), (0x1459, 0xc42b), (0x145a, 0xc42d), (0x145b, 0xc42e), (0x145c, 0xc42f), (0x145d, 0xc431),
    (0x145e, 0xc432), (0x145f, 0xc433), (0x1460, 0xc435), (0x1461, 0xc436), (0x1462, 0xc437), (0x1463, 0xc438),
    (0x1464, 0xc439), (0x1465, 0xc43a), (0x1466, 0xc43b), (0x1467, 0xc43e), (0x1468, 0xc43f), (0x1469, 0xc440),
    (0x146a, 0xc441), (0x146b, 0xc442), (0x146c, 0xc443), (0x146d, 0xc444), (0x146e, 0xc445), (0x146f, 0xc446),
    (0x1470, 0xc447), (0x1471, 0xc449), (0x1472, 0xc44a), (0x1473, 0xc44b), (0x1474, 0xc44c), (0x1475, 0xc44d),
    (0x1476, 0xc44e), (0x1477, 0xc44f), (0x1478, 0xc450), (0x1479, 0xc451), (0x147a, 0xc452), (0x147b, 0xc453),
    (0x147c, 0xc454), (0x147d, 0xc455), (0x147e, 0xc456), (0x147f, 0xc457), (0x1480, 0xc458), (0x1481, 0xc459),
    (0x1482, 0xc45a), (0x1483, 0xc45b), (0x1484, 0xc45c), (0x1485, 0xc45d), (0x1486, 0xc45e), (0x1487, 0xc45f),
    (0x1488, 0xc460), (0x1489, 0xc461), (0x148a, 0xc462), (0x148b, 0xc463), (0x148c, 0xc466), (0x148d, 0xc467),
    (0x148e, 0xc469), (0x148f, 0xc46a), (0x1490, 0xc46b), (0x1491, 0xc46d), (0x1492, 0xc46e), (0x1493, 0xc46f),
    (0x1494, 0xc470), (0x1495, 0xc471), (0x1496, 0xc472), (0x1497, 0xc473), (0x1498, 0xc476), (0x1499, 0xc477),
    (0x149a, 0xc478), (0x149b, 0xc47a), (0x149c, 0xc47b), (0x149d, 0xc47c), (0x149e, 0xc47d), (0x149f, 0xc47e),
    (0x14a0, 0xc47f), (0x14a1, 0xc481), (0x14a2, 0xc482), (0x14a3, 0xc483), (0x14a4, 0xc484), (0x14a5, 0xc485),
    (0x14a6, 0xc486), (0x14a7, 0xc487), (0x14a8, 0xc488), (0x14a9, 0xc489), (0x14aa, 0xc48a), (0x14ab, 0xc48b),
    (0x14ac, 0xc48c), (0x14ad, 0xc48d), (0x14ae, 0xc48e), (0x14af, 0xc48f), (0x14b0, 0xc490), (0x14b1, 0xc491),
    (0x14b2, 0xc492), (0x14b3, 0xc493), (0x14b4, 0xc495), (0x14b5, 0xc496), (0x14b6, 0xc497), (0x14b7, 0xc498),
    (0x14b8, 0xc499), (0x14b9, 0xc49a), (0x14ba, 0xc49b), (0x14bb, 0xc49d), (0x14bc, 0xc49e), (0x14bd, 0xc49f),
    (0x14be, 0xc4a0), (0x14bf, 0xc4a1), (0x14c0, 0xc4a2), (0x14c1, 0xc4a3), (0x14c2, 0xc4a4), (0x14c3, 0xc4a5),
    (0x14c4, 0xc4a6), (0x14c5, 0xc4a7), (0x14c6, 0xc4a8), (0x14c7, 0xc4a9), (0x14c8, 0xc4aa), (0x14c9, 0xc4ab),
    (0x14ca, 0xc4ac), (0x14cb, 0xc4ad), (0x14cc, 0xc4ae), (0x14cd, 0xc4af), (0x14ce, 0xc4b0), (0x14cf, 0xc4b1),
    (0x14d0, 0xc4b2), (0x14d1, 0xc4b3), (0x14d2, 0xc4b4), (0x14d3, 0xc4b5), (0x14d4, 0xc4b6), (0x14d5, 0xc4b7),
    (0x14d6, 0xc4b9), (0x14d7, 0xc4ba), (0x14d8, 0xc4bb), (0x14d9, 0xc4bd), (0x14da, 0xc4be), (0x14db, 0xc4bf),
    (0x14dc, 0xc4c0), (0x14dd, 0xc4c1), (0x14de, 0xc4c2), (0x14df, 0xc4c3), (0x14e0, 0xc4c4), (0x14e1, 0xc4c5),
    (0x14e8, 0xc4c6), (0x14e9, 0xc4c7), (0x14ea, 0xc4c8), (0x14eb, 0xc4c9), (0x14ec, 0xc4ca), (0x14ed, 0xc4cb),
    (0x14ee, 0xc4cc), (0x14ef, 0xc4cd), (0x14f0, 0xc4ce), (0x14f1, 0xc4cf), (0x14f2, 0xc4d0), (0x14f3, 0xc4d1),
    (0x14f4, 0xc4d2), (0x14f5, 0xc4d3), (0x14f6, 0xc4d4), (0x14f7, 0xc4d5), (0x14f8, 0xc4d6), (0x14f9, 0xc4d7),
    (0x14fa, 0xc4d8), (0x14fb, 0xc4d9), (0x14fc, 0xc4da), (0x14fd, 0xc4db), (0x14fe, 0xc4dc), (0x14ff, 0xc4dd),
    (0x1500, 0xc4de), (0x1501, 0xc4df), (0x1508, 0xc4e0), (0x1509, 0xc4e1), (0x150a, 0xc4e2), (0x150b, 0xc4e3),
    (0x150c, 0xc4e4), (0x150d, 0xc4e5), (0x150e, 0xc4e6), (0x150f, 0xc4e7), (0x1510, 0xc4e8), (0x1511, 0xc4ea),
    (0x1512, 0xc4eb), (0x1513, 0xc4ec), (0x1514, 0xc4ed), (0x1515, 0xc4ee), (0x1516, 0xc4ef), (0x1517, 0xc4f2),
    (0x1518, 0xc4f3), (0x1519, 0xc4f5), (0x151a, 0xc4f6), (0x151b, 0xc4f7), (0x151c, 0xc4f9), (0x151d, 0xc4fb),
    (0x151e, 0xc4fc), (0x151f, 0xc4fd), (0x1520, 0xc4fe), (0x1521, 0xc502), (0x1522, 0xc503), (0x1523, 0xc504),
    (0x1524, 0xc505), (0x1525, 0xc506), (0x1526, 0xc507), (0x1527, 0xc508), (0x1528, 0xc509), (0x1529, 0xc50a),
    (0x152a, 0xc50b), (0x152b, 0xc50d), (0x152c, 0xc50e), (0x152d, 0xc50f), (0x152e, 0xc511), (0x152f, 0xc512),
    (0x1530, 0xc513), (0x1531, 0xc515), (0x1532, 0xc516), (0x1533, 0xc517), (0x1534, 0xc518), (0x1535, 0xc519),
    (0x1536, 0xc51a), (0x1537, 0xc51b), (0x1538, 0xc51d), (0x1539, 0xc51e), (0x153a, 0xc51f), (0x153b, 0xc520),
    (0x153c, 0xc521), (0x153d, 0xc522), (0x153e, 0xc523), (0x153f, 0xc524), (0x1540, 0xc525), (0x1541, 0xc526),
    (0x1542, 0xc527), (0x1543, 0xc52a), (0x1544, 0xc52b), (0x1545, 0xc52d), (0x1546, 0xc52e), (0x1547, 0xc52f),
    (0x1548, 0xc531), (0x1549, 0xc532), (0x154a, 0xc533), (0x154b, 0xc534), (0x154c, 0xc535), (0x154d, 0xc536),
    (0x154e, 0xc537), (0x154f, 0xc53a), (0x1550, 0xc53c), (0x1551, 0xc53e), (0x1552, 0xc53f), (0x1553, 0xc540),
    (0x1554, 0xc541), (0x1555, 0xc542), (0x1556, 0xc543), (0x1557, 0xc546), (0x1558, 0xc547), (0x1559, 0xc54b),
    (0x155a, 0xc54f), (0x155b, 0xc550), (0x155c, 0xc551), (0x155d, 0xc552), (0x155e, 0xc556), (0x155f, 0xc55a),
    (0x1560, 0xc55b), (0x1561, 0xc55c), (0x1562, 0xc55f), (0x1563, 0xc562), (0x1564, 0xc563), (0x1565, 0xc565),
    (0x1566, 0xc566), (0x1567, 0xc567), (0x1568, 0xc569), (0x1569, 0xc56a), (0x156a, 0xc56b), (0x156b, 0xc56c),
    (0x156c, 0xc56d), (0x156d, 0xc56e), (0x156e, 0xc56f), (0x156f, 0xc572), (0x1570, 0xc576), (0x1571, 0xc577),
    (0x1572, 0xc578), (0x1573, 0xc579), (0x1574, 0xc57a), (0x1575, 0xc57b), (0x1576, 0xc57e), (0x1577, 0xc57f),
    (0x1578, 0xc581), (0x1579, 0xc582), (0x157a, 0xc583), (0x157b, 0xc585), (0x157c, 0xc586), (0x157d, 0xc588),
    (0x157e, 0xc589), (0x157f, 0xc58a), (0x1580, 0xc58b), (0x1581, 0xc58e), (0x1582, 0xc590), (0x1583, 0xc592),
    (0x1584, 0xc593), (0x1585, 0xc594), (0x1586, 0xc596), (0x1587, 0xc599), (0x1588, 0xc59a), (0x1589, 0xc59b),
    (0x158a, 0xc59d), (0x158b, 0xc59e), (0x158c, 0xc59f), (0x158d, 0xc5a1), (0x158e, 0xc5a2), (0x158f, 0xc5a3),
    (0x1590, 0xc5a4), (0x1591, 0xc5a5), (0x1592, 0xc5a6), (0x1593, 0xc5a7), (0x1594, 0xc5a8), (0x1595, 0xc5aa),
    (0x1596, 0xc5ab), (0x1597, 0xc5ac), (0x1598, 0xc5ad), (0x1599, 0xc5ae), (0x159a, 0xc5af), (0x159b, 0xc5b0),
    (0x159c, 0xc5b1), (0x159d, 0xc5b2), (0x159e, 0xc5b3), (0x159f, 0xc5b6), (0x15a6, 0xc5b7), (0x15a7, 0xc5ba),
    (0x15a8, 0xc5bf), (0x15a9, 0xc5c0), (0x15aa, 0xc5c1), (0x15ab, 0xc5c2), (0x15ac, 0xc5c3), (0x15ad, 0xc5cb),
    (0x15ae, 0xc5cd), (0x15af, 0xc5cf), (0x15b0, 0xc5d2), (0x15b1, 0xc5d3), (0x15b2, 0xc5d5), (0x15b3, 0xc5d6),
    (0x15b4, 0xc5d7), (0x15b5, 0xc5d9), (0x15b6, 0xc5da), (0x15b7, 0xc5db), (0x15b8, 0xc5dc), (0x15b9, 0xc5dd),
    (0x15ba, 0xc5de), (0x15bb, 0xc5df), (0x15bc, 0xc5e2), (0x15bd, 0xc5e4), (0x15be, 0xc5e6), (0x15bf, 0xc5e7),
    (0x15c6, 0xc5e8), (0x15c7, 0xc5e9), (0x15c8, 0xc5ea), (0x15c9, 0xc5eb), (0x15ca, 0xc5ef), (0x15cb, 0xc5f1),
    (0x15cc, 0xc5f2), (0x15cd, 0xc5f3), (0x15ce, 0xc5f5), (0x15cf, 0xc5f8), (0x15d0, 0xc5f9), (0x15d1, 0xc5fa),
    (0x15d2, 0xc5fb), (0x15d3, 0xc602), (0x15d4, 0xc603), (0x15d5, 0xc604), (0x15d6, 0xc609), (0x15d7, 0xc60a),
    (0x15d8, 0xc60b), (0x15d9, 0xc60d), (0x15da, 0xc60e), (0x15db, 0xc60f), (0x15dc, 0xc611), (0x15dd, 0xc612),
    (0x15de, 0xc613), (0x15df, 0xc614), (0x15e0, 0xc615), (0x15e1, 0xc616), (0x15e2, 0xc617), (0x15e3, 0xc61a),
    (0x15e4, 0xc61d), (0x15e5, 0xc61e), (0x15e6, 0xc61f), (0x15e7, 0xc620), (0x15e8, 0xc621), (0x15e9, 0xc622),
    (0x15ea, 0xc623), (0x15eb, 0xc626), (0x15ec, 0xc627), (0x15ed, 0xc629), (0x15ee, 0xc62a), (0x15ef, 0xc62b),
    (0x15f0, 0xc62f), (0x15f1, 0xc631), (0x15f2, 0xc632), (0x15f3, 0xc636), (0x15f4, 0xc638), (0x15f5, 0xc63a),
    (0x15f6, 0xc63c), (0x15f7, 0xc63d), (0x15f8, 0xc63e), (0x15f9, 0xc63f), (0x15fa, 0xc642), (0x15fb, 0xc643),
    (0x15fc, 0xc645), (0x15fd, 0xc646), (0x15fe, 0xc647), (0x15ff, 0xc649), (0x1600, 0xc64a), (0x1601, 0xc64b),
    (0x1602, 0xc64c), (0x1603, 0xc64d), (0x1604, 0xc64e), (0x1605, 0xc64f), (0x1606, 0xc652), (0x1607, 0xc656),
    (0x1608, 0xc657), (0x1609, 0xc658), (0x160a, 0xc659), (0x160b, 0xc65a), (0x160c, 0xc65b), (0x160d, 0xc65e),
    (0x160e, 0xc65f), (0x160f, 0xc661), (0x1610, 0xc662), (0x1611, 0xc663), (0x1612, 0xc664), (0x1613, 0xc665),
    (0x1614, 0xc666), (0x1615, 0xc667), (0x1616, 0xc668), (0x1617, 0xc669), (0x1618, 0xc66a), (0x1619, 0xc66b),
    (0x161a, 0xc66d), (0x161b, 0xc66e), (0x161c, 0xc670), (0x161d, 0xc672), (0x161e, 0xc673), (0x161f, 0xc674),
    (0x1620, 0xc675), (0x1621, 0xc676), (0x1622, 0xc677), (0x1623, 0xc67a), (0x1624, 0xc67b), (0x1625, 0xc67d),
    (0x1626, 0xc67e), (0x1627, 0xc67f), (0x1628, 0xc681), (0x1629, 0xc682), (0x162a, 0xc683), (0x162b, 0xc684),
    (0x162c, 0xc685), (0x162d, 0xc686), (0x162e, 0xc687), (0x162f, 0xc68a), (0x1630, 0xc68c), (0x1631, 0xc68e),
    (0x1632, 0xc68f), (0x1633, 0xc690), (0x1634, 0xc691), (0x1635, 0xc692), (0x1636, 0xc693), (0x1637, 0xc696),
    (0x1638, 0xc697), (0x1639, 0xc699), (0x163a, 0xc69a), (0x163b, 0xc69b), (0x163c, 0xc69d), (0x163d, 0xc69e),
    (0x163e, 0xc69f), (0x163f, 0xc6a0), (0x1640, 0xc6a1), (0x1641, 0xc6a2), (0x1642, 0xc6a3), (0x1643, 0xc6a6),
    (0x1644, 0xc6a8), (0x1645, 0xc6aa), (0x1646, 0xc6ab), (0x1647, 0xc6ac), (0x1648, 0xc6ad), (0x1649, 0xc6ae),
    (0x164a, 0xc6af), (0x164b, 0xc6b2), (0x164c, 0xc6b3), (0x164d, 0xc6b5), (0x164e, 0xc6b6), (0x164f, 0xc6b7),
    (0x1650, 0xc6bb), (0x1651, 0xc6bc), (0x1652, 0xc6bd), (0x1653, 0xc6be), (0x1654, 0xc6bf), (0x1655, 0xc6c2),
    (0x1656, 0xc6c4), (0x1657, 0xc6c6), (0x1658, 0xc6c7), (0x1659, 0xc6c8), (0x165a, 0xc6c9), (0x165b, 0xc6ca),
    (0x165c, 0xc6cb), (0x165d, 0xc6ce), (0x1664, 0xc6cf), (0x1665, 0xc6d1), (0x1666, 0xc6d2), (0x1667, 0xc6d3),
    (0x1668, 0xc6d5), (0x1669, 0xc6d6), (0x166a, 0xc6d7), (0x166b, 0xc6d8), (0x166c, 0xc6d9), (0x166d, 0xc6da),
    (0x166e, 0xc6db), (0x166f, 0xc6de), (0x1670, 0xc6df), (0x1671, 0xc6e2), (0x1672, 0xc6e3), (0x1673, 0xc6e4),
    (0x1674, 0xc6e5), (0x1675, 0xc6e6), (0x1676, 0xc6e7), (0x1677, 0xc6ea), (0x1678, 0xc6eb), (0x1679, 0xc6ed),
    (0x167a, 0xc6ee), (0x167b, 0xc6ef), (0x167c, 0xc6f1), (0x167d, 0xc6f2), (0x1684, 0xc6f3), (0x1685, 0xc6f4),
    (0x1686, 0xc6f5), (0x1687, 0xc6f6), (0x1688, 0xc6f7), (0x1689, 0xc6fa), (0x168a, 0xc6fb), (0x168b, 0xc6fc),
    (0x168c, 0xc6fe), (0x168d, 0xc6ff), (0x168e, 0xc700), (0x168f, 0xc701), (0x1690, 0xc702), (0x1691, 0xc703),
    (0x1692, 0xc706), (0x1693, 0xc707), (0x1694, 0xc709), (0x1695, 0xc70a), (0x1696, 0xc70b), (0x1697, 0xc70d),
    (0x1698, 0xc70e), (0x1699, 0xc70f), (0x169a, 0xc710), (0x169b, 0xc711), (0x169c, 0xc712), (0x169d, 0xc713),
    (0x169e, 0xc716), (0x169f, 0xc718), (0x16a0, 0xc71a), (0x16a1, 0xc71b), (0x16a2, 0xc71c), (0x16a3, 0xc71d),
    (0x16a4, 0xc71e), (0x16a5, 0xc71f), (0x16a6, 0xc722), (0x16a7, 0xc723), (0x16a8, 0xc725), (0x16a9, 0xc726),
    (0x16aa, 0xc727), (0x16ab, 0xc729), (0x16ac, 0xc72a), (0x16ad, 0xc72b), (0x16ae, 0xc72c), (0x16af, 0xc72d),
    (0x16b0, 0xc72e), (0x16b1, 0xc72f), (0x16b2, 0xc732), (0x16b3, 0xc734), (0x16b4, 0xc736), (0x16b5, 0xc738),
    (0x16b6, 0xc739), (0x16b7, 0xc73a), (0x16b8, 0xc73b), (0x16b9, 0xc73e), (0x16ba, 0xc73f), (0x16bb, 0xc741),
    (0x16bc, 0xc742), (0x16bd, 0xc743), (0x16be, 0xc745), (0x16bf, 0xc746), (0x16c0, 0xc747), (0x16c1, 0xc748),
    (0x16c2, 0xc749), (0x16c3, 0xc74b), (0x16c4, 0xc74e), (0x16c5, 0xc750), (0x16c6, 0xc759), (0x16c7, 0xc75a),
    (0x16c8, 0xc75b), (0x16c9, 0xc75d), (0x16ca, 0xc75e), (0x16cb, 0xc75f), (0x16cc, 0xc761), (0x16cd, 0xc762),
    (0x16ce, 0xc763), (0x16cf, 0xc764), (0x16d0, 0xc765), (0x16d1, 0xc766), (0x16d2, 0xc767), (0x16d3, 0xc769),
    (0x16d4, 0xc76a), (0x16d5, 0xc76c), (0x16d6, 0xc76d), (0x16d7, 0xc76e), (0x16d8, 0xc76f), (0x16d9, 0xc770),
    (0x16da, 0xc771), (0x16db, 0xc772), (0x16dc, 0xc773), (0x16dd, 0xc776), (0x16de, 0xc777), (0x16df, 0xc779),
    (0x16e0, 0xc77a), (0x16e1, 0xc77b), (0x16e2, 0xc77f), (0x16e3, 0xc780), (0x16e4, 0xc781), (0x16e5, 0xc782),
    (0x16e6, 0xc786), (0x16e7, 0xc78b), (0x16e8, 0xc78c), (0x16e9, 0xc78d), (0x16ea, 0xc78f), (0x16eb, 0xc792),
    (0x16ec, 0xc793), (0x16ed, 0xc795), (0x16ee, 0xc799), (0x16ef, 0xc79b), (0x16f0, 0xc79c), (0x16f1, 0xc79d),
    (0x16f2, 0xc79e), (0x16f3, 0xc79f), (0x16f4, 0xc7a2), (0x16f5, 0xc7a7), (0x16f6, 0xc7a8), (0x16f7, 0xc7a9),
    (0x16f8, 0xc7aa), (0x16f9, 0xc7ab), (0x16fa, 0xc7ae), (0x16fb, 0xc7af), (0x16fc, 0xc7b1), (0x16fd, 0xc7b2),
    (0x16fe, 0xc7b3), (0x16ff, 0xc7b5), (0x1700, 0xc7b6), (0x1701, 0xc7b7), (0x1702, 0xc7b8), (0x1703, 0xc7b9),
    (0x1704, 0xc7ba), (0x1705, 0xc7bb), (0x1706, 0xc7be), (0x1707, 0xc7c2), (0x1708, 0xc7c3), (0x1709, 0xc7c4),
    (0x170a, 0xc7c5), (0x170b, 0xc7c6), (0x170c, 0xc7c7), (0x170d, 0xc7ca), (0x170e, 0xc7cb), (0x170f, 0xc7cd),
    (0x1710, 0xc7cf), (0x1711, 0xc7d1), (0x1712, 0xc7d2), (0x1713, 0xc7d3), (0x1714, 0xc7d4), (0x1715, 0xc7d5),
    (0x1716, 0xc7d6), (0x1717, 0xc7d7), (0x1718, 0xc7d9), (0x1719, 0xc7da), (0x171a, 0xc7db), (0x171b, 0xc7dc),
    (0x1722, 0xc7de), (0x1723, 0xc7df), (0x1724, 0xc7e0), (0x1725, 0xc7e1), (0x1726, 0xc7e2), (0x1727, 0xc7e3),
    (0x1728, 0xc7e5), (0x1729, 0xc7e6), (0x172a, 0xc7e7), (0x172b, 0xc7e9), (0x172c, 0xc7ea), (0x172d, 0xc7eb),
    (0x172e, 0xc7ed), (0x172f, 0xc7ee), (0x1730, 0xc7ef), (0x1731, 0xc7f0), (0x1732, 0xc7f1), (0x1733, 0xc7f2),
    (0x1734, 0xc7f3), (0x1735, 0xc7f4), (0x1736, 0xc7f5), (0x1737, 0xc7f6), (0x1738, 0xc7f7), (0x1739, 0xc7f8),
    (0x173a, 0xc7f9), (0x173b, 0xc7fa), (0x1742, 0xc7fb), (0x1743, 0xc7fc), (0x1744, 0xc7fd), (0x1745, 0xc7fe),
    (0x1746, 0xc7ff), (0x1747, 0xc802), (0x1748, 0xc803), (0x1749, 0xc805), (0x174a, 0xc806), (0x174b, 0xc807),
    (0x174c, 0xc809), (0x174d, 0xc80b), (0x174e, 0xc80c), (0x174f, 0xc80d), (0x1750, 0xc80e), (0x1751, 0xc80f),
    (0x1752, 0xc812), (0x1753, 0xc814), (0x1754, 0xc817), (0x1755, 0xc818), (0x1756, 0xc819), (0x1757, 0xc81a),
    (0x1758, 0xc81b), (0x1759, 0xc81e), (0x175a, 0xc81f), (0x175b, 0xc821), (0x175c, 0xc822), (0x175d, 0xc823),
    (0x175e, 0xc825), (0x175f, 0xc826), (0x1760, 0xc827), (0x1761, 0xc828), (0x1762, 0xc829), (0x1763, 0xc82a),
    (0x1764, 0xc82b), (0x1765, 0xc82e), (0x1766, 0xc830), (0x1767, 0xc832), (0x1768, 0xc833), (0x1769, 0xc834),
    (0x176a, 0xc835), (0x176b, 0xc836), (0x176c, 0xc837), (0x176d, 0xc839), (0x176e, 0xc83a), (0x176f, 0xc83b),
    (0x1770, 0xc83d), (0x1771, 0xc83e), (0x1772, 0xc83f), (0x1773, 0xc841), (0x1774, 0xc842), (0x1775, 0xc843),
    (0x1776, 0xc844), (0x1777, 0xc845), (0x1778, 0xc846), (0x1779, 0xc847), (0x177a, 0xc84a), (0x177b, 0xc84b),
    (0x177c, 0xc84e), (0x177d, 0xc84f), (0x177e, 0xc850), (0x177f, 0xc851), (0x1780, 0xc852), (0x1781, 0xc853),
    (0x1782, 0xc855), (0x1783, 0xc856), (0x1784, 0xc857), (0x1785, 0xc858), (0x1786, 0xc859), (0x1787, 0xc85a),
    (0x1788, 0xc85b), (0x1789, 0xc85c), (0x178a, 0xc85d), (0x178b, 0xc85e), (0x178c, 0xc85f), (0x178d, 0xc860),
    (0x178e, 0xc861), (0x178f, 0xc862), (0x1790, 0xc863), (0x1791, 0xc864), (0x1792, 0xc865), (0x1793, 0xc866),
    (0x1794, 0xc867), (0x1795, 0xc868), (0x1796, 0xc869), (0x1797, 0xc86a), (0x1798, 0xc86b), (0x1799, 0xc86c),
    (0x179a, 0xc86d), (0x179b, 0xc86e), (0x179c, 0xc86f), (0x179d, 0xc872), (0x179e, 0xc873), (0x179f, 0xc875),
    (0x17a0, 0xc876), (0x17a1, 0xc877), (0x17a2, 0xc879), (0x17a3, 0xc87b), (0x17a4, 0xc87c), (0x17a5, 0xc87d),
    (0x17a6, 0xc87e), (0x17a7, 0xc87f), (0x17a8, 0xc882), (0x17a9, 0xc884), (0x17aa, 0xc888), (0x17ab, 0xc889),
    (0x17ac, 0xc88a), (0x17ad, 0xc88e), (0x17ae, 0xc88f), (0x17af, 0xc890), (0x17b0, 0xc891), (0x17b1, 0xc892),
    (0x17b2, 0xc893), (0x17b3, 0xc895), (0x17b4, 0xc896), (0x17b5, 0xc897), (0x17b6, 0xc898), (0x17b7, 0xc899),
    (0x17b8, 0xc89a), (0x17b9, 0xc89b), (0x17ba, 0xc89c), (0x17bb, 0xc89e), (0x17bc, 0xc8a0), (0x17bd, 0xc8a2),
    (0x17be, 0xc8a3), (0x17bf, 0xc8a4), (0x17c0, 0xc8a5), (0x17c1, 0xc8a6), (0x17c2, 0xc8a7), (0x17c3, 0xc8a9),
    (0x17c4, 0xc8aa), (0x17c5, 0xc8ab), (0x17c6, 0xc8ac), (0x17c7, 0xc8ad), (0x17c8, 0xc8ae), (0x17c9, 0xc8af),
    (0x17ca, 0xc8b0), (0x17cb, 0xc8b1), (0x17cc, 0xc8b2), (0x17cd, 0xc8b3), (0x17ce, 0xc8b4), (0x17cf, 0xc8b5),
    (0x17d0, 0xc8b6), (0x17d1, 0xc8b7), (0x17d2, 0xc8b8), (0x17d3, 0xc8b9), (0x17d4, 0xc8ba), (0x17d5, 0xc8bb),
    (0x17d6, 0xc8be), (0x17d7, 0xc8bf), (0x17d8, 0xc8c0), (0x17d9, 0xc8c1), (0x17e0, 0xc8c2), (0x17e1, 0xc8c3),
    (0x17e2, 0xc8c5), (0x17e3, 0xc8c6), (0x17e4, 0xc8c7), (0x17e5, 0xc8c9), (0x17e6, 0xc8ca), (0x17e7, 0xc8cb),
    (0x17e8, 0xc8cd), (0x17e9, 0xc8ce), (0x17ea, 0xc8cf), (0x17eb, 0xc8d0), (0x17ec, 0xc8d1), (0x17ed, 0xc8d2),
    (0x17ee, 0xc8d3), (0x17ef, 0xc8d6), (0x17f0, 0xc8d8), (0x17f1, 0xc8da), (0x17f2, 0xc8db), (0x17f3, 0xc8dc),
    (0x17f4, 0xc8dd), (0x17f5, 0xc8de), (0x17f6, 0xc8df), (0x17f7, 0xc8e2), (0x17f8, 0xc8e3), (0x17f9, 0xc8e5),
    (0x1800, 0xc8e6), (0x1801, 0xc8e7), (0x1802, 0xc8e8), (0x1803, 0xc8e9), (0x1804, 0xc8ea), (0x1805, 0xc8eb),
    (0x1806, 0xc8ec), (0x1807, 0xc8ed), (0x1808, 0xc8ee), (0x1809, 0xc8ef), (0x180a, 0xc8f0), (0x180b, 0xc8f1),
    (0x180c, 0xc8f2), (0x180d, 0xc8f3), (0x180e, 0xc8f4), (0x180f, 0xc8f6), (0x1810, 0xc8f7), (0x1811, 0xc8f8),
    (0x1812, 0xc8f9), (0x1813, 0xc8fa), (0x1814, 0xc8fb), (0x1815, 0xc8fe), (0x1816, 0xc8ff), (0x1817, 0xc901),
    (0x1818, 0xc902), (0x1819, 0xc903), (0x181a, 0xc907), (0x181b, 0xc908), (0x181c, 0xc909), (0x181d, 0xc90a),
    (0x181e, 0xc90b), (0x181f, 0xc90e), (0x1820, 0x3000), (0x1821, 0x3001), (0x1822, 0x3002), (0x1823, 0x00b7),
    (0x1824, 0x2025), (0x1825, 0x2026), (0x1826, 0x00a8), (0x1827, 0x3003), (0x1828, 0x00ad), (0x1829, 0x2015),
    (0x182a, 0x2225), (0x182b, 0xff3c), (0x182c, 0x223c), (0x182d, 0x2018), (0x182e, 0x2019), (0x182f, 0x201c),
    (0x1830, 0x201d), (0x1831, 0x3014), (0x1832, 0x3015), (0x1833, 0x3008), (0x1834, 0x3009), (0x1835, 0x300a),
    (0x1836, 0x300b), (0x1837, 0x300c), (0x1838, 0x300d), (0x1839, 0x300e), (0x183a, 0x300f), (0x183b, 0x3010),
    (0x183c, 0x3011), (0x183d, 0x00b1), (0x183e, 0x00d7), (0x183f, 0x00f7), (0x1840, 0x2260), (0x1841, 0x2264),
    (0x1842, 0x2265), (0x1843, 0x221e), (0x1844, 0x2234), (0x1845, 0x00b0), (0x1846, 0x2032), (0x1847, 0x2033),
    (0x1848, 0x2103), (0x1849, 0x212b), (0x184a, 0xffe0), (0x184b, 0xffe1), (0x184c, 0xffe5), (0x184d, 0x2642),
    (0x184e, 0x2640), (0x184f, 0x2220), (0x1850, 0x22a5), (0x1851, 0x2312), (0x1852, 0x2202), (0x1853, 0x2207),
    (0x1854, 0x2261), (0x1855, 0x2252), (0x1856, 0x00a7), (0x1857, 0x203b), (0x1858, 0x2606), (0x1859, 0x2605),
    (0x185a, 0x25cb), (0x185b, 0x25cf), (0x185c, 0x25ce), (0x185d, 0x25c7), (0x185e, 0x25c6), (0x185f, 0x25a1),
    (0x1860, 0x25a0), (0x1861, 0x25b3), (0x1862, 0x25b2), (0x1863, 0x25bd), (0x1864, 0x25bc), (0x1865, 0x2192),
    (0x1866, 0x2190), (0x1867, 0x2191), (0x1868, 0x2193), (0x1869, 0x2194), (0x186a, 0x3013), (0x186b, 0x226a),
    (0x186c, 0x226b), (0x186d, 0x221a), (0x186e, 0x223d), (0x186f, 0x221d), (0x1870, 0x2235), (0x1871, 0x222b),
    (0x1872, 0x222c), (0x1873, 0x2208), (0x1874, 0x220b), (0x1875, 0x2286), (0x1876, 0x2287), (0x1877, 0x2282),
    (0x1878, 0x2283), (0x1879, 0x222a), (0x187a, 0x2229), (0x187b, 0x2227), (0x187c, 0x2228), (0x187d, 0xffe2),
    (0x187e, 0xc910), (0x187f, 0xc912), (0x1880, 0xc913), (0x1881, 0xc914), (0x1882, 0xc915), (0x1883, 0xc916),
    (0x1884, 0xc917), (0x1885, 0xc919), (0x1886, 0xc91a), (0x1887, 0xc91b), (0x1888, 0xc91c), (0x1889, 0xc91d),
    (0x188a, 0xc91e), (0x188b, 0xc91f), (0x188c, 0xc920), (0x188d, 0xc921), (0x188e, 0xc922), (0x188f, 0xc923),
    (0x1890, 0xc924), (0x1891, 0xc925), (0x1892, 0xc926), (0x1893, 0xc927), (0x1894, 0xc928), (0x1895, 0xc929),
    (0x1896, 0xc92a), (0x1897, 0xc92b), (0x189e, 0xc92d), (0x189f, 0xc92e), (0x18a0, 0xc92f), (0x18a1, 0xc930),
    (0x18a2, 0xc931), (0x18a3, 0xc932), (0x18a4, 0xc933), (0x18a5, 0xc935), (0x18a6, 0xc936), (0x18a7, 0xc937),
    (0x18a8, 0xc938), (0x18a9, 0xc939), (0x18aa, 0xc93a), (0x18ab, 0xc93b), (0x18ac, 0xc93c), (0x18ad, 0xc93d),
    (0x18ae, 0xc93e), (0x18af, 0xc93f), (0x18b0, 0xc940), (0x18b1, 0xc941), (0x18b2, 0xc942), (0x18b3, 0xc943),
    (0x18b4, 0xc944), (0x18b5, 0xc945), (0x18b6, 0xc946), (0x18b7, 0xc947), (0x18be, 0xc948), (0x18bf, 0xc949),
    (0x18c0, 0xc94a), (0x18c1, 0xc94b), (0x18c2, 0xc94c), (0x18c3, 0xc94d), (0x18c4, 0xc94e), (0x18c5, 0xc94f),
    (0x18c6, 0xc952), (0x18c7, 0xc953), (0x18c8, 0xc955), (0x18c9, 0xc956), (0x18ca, 0xc957), (0x18cb, 0xc959),
    (0x18cc, 0xc95a), (0x18cd, 0xc95b), (0x18ce, 0xc95c), (0x18cf, 0xc95d), (0x18d0, 0xc95e), (0x18d1, 0xc95f),
    (0x18d2, 0xc962), (0x18d3, 0xc964), (0x18d4, 0xc965), (0x18d5, 0xc966), (0x18d6, 0xc967), (0x18d7, 0xc968),
    (0x18d8, 0xc969), (0x18d9, 0xc96a), (0x18da, 0xc96b), (0x18db, 0xc96d), (0x18dc, 0xc96e), (0x18dd, 0xc96f),
    (0x18de, 0x21d2), (0x18df, 0x21d4), (0x18e0, 0x2200), (0x18e1, 0x2203), (0x18e2, 0x00b4), (0x18e3, 0xff5e),
    (0x18e4, 0x02c7), (0x18e5, 0x02d8), (0x18e6, 0x02dd), (0x18e7, 0x02da), (0x18e8, 0x02d9), (0x18e9, 0x00b8),
    (0x18ea, 0x02db), (0x18eb, 0x00a1), (0x18ec, 0x00bf), (0x18ed, 0x02d0), (0x18ee, 0x222e), (0x18ef, 0x2211),
    (0x18f0, 0x220f), (0x18f1, 0x00a4), (0x18f2, 0x2109), (0x18f3, 0x2030), (0x18f4, 0x25c1), (0x18f5, 0x25c0),
    (0x18f6, 0x25b7), (0x18f7, 0x25b6), (0x18f8, 0x2664), (0x18f9, 0x2660), (0x18fa, 0x2661), (0x18fb, 0x2665),
    (0x18fc, 0x2667), (0x18fd, 0x2663), (0x18fe, 0x2299), (0x18ff, 0x25c8), (0x1900, 0x25a3), (0x1901, 0x25d0),
    (0x1902, 0x25d1), (0x1903, 0x2592), (0x1904, 0x25a4), (0x1905, 0x25a5), (0x1906, 0x25a8), (0x1907, 0x25a7),
    (0x1908, 0x25a6), (0x1909, 0x25a9), (0x190a, 0x2668), (0x190b, 0x260f), (0x190c, 0x260e), (0x190d, 0x261c),
    (0x190e, 0x261e), (0x190f, 0x00b6), (0x1910, 0x2020), (0x1911, 0x2021), (0x1912, 0x2195), (0x1913, 0x2197),
    (0x1914, 0x2199), (0x1915, 0x2196), (0x1916, 0x2198), (0x1917, 0x266d), (0x1918, 0x2669), (0x1919, 0x266a),
    (0x191a, 0x266c), (0x191b, 0x327f), (0x191c, 0x321c), (0x191d, 0x2116), (0x191e, 0x33c7), (0x191f, 0x2122),
    (0x1920, 0x33c2), (0x1921, 0x33d8), (0x1922, 0x2121), (0x1923, 0x20ac), (0x1924, 0x00ae), (0x193c, 0xc971),
    (0x193d, 0xc972), (0x193e, 0xc973), (0x193f, 0xc975), (0x1940, 0xc976), (0x1941, 0xc977), (0x1942, 0xc978),
    (0x1943, 0xc979), (0x1944, 0xc97a), (0x1945, 0xc97b), (0x1946, 0xc97d), (0x1947, 0xc97e), (0x1948, 0xc97f),
    (0x1949, 0xc980), (0x194a, 0xc981), (0x194b, 0xc982), (0x194c, 0xc983), (0x194d, 0xc984), (0x194e, 0xc985),
    (0x194f, 0xc986), (0x1950, 0xc987), (0x1951, 0xc98a), (0x1952, 0xc98b), (0x1953, 0xc98d), (0x1954, 0xc98e),
    (0x1955, 0xc98f), (0x195c, 0xc991), (0x195d, 0xc992), (0x195e, 0xc993), (0x195f, 0xc994), (0x1960, 0xc995),
    (0x1961, 0xc996), (0x1962, 0xc997), (0x1963, 0xc99a), (0x1964, 0xc99c), (0x1965, 0xc99e), (0x1966, 0xc99f),
    (0x1967, 0xc9a0), (0x1968, 0xc9a1), (0x1969, 0xc9a2), (0x196a, 0xc9a3), (0x196b, 0xc9a4), (0x196c, 0xc9a5),
    (0x196d, 0xc9a6), (0x196e, 0xc9a7), (0x196f, 0xc9a8), (0x1970, 0xc9a9), (0x1971, 0xc9aa), (0x1972, 0xc9ab),
    (0x1973, 0xc9ac), (0x1974, 0xc9ad), (0x1975, 0xc9ae), (0x197c, 0xc9af), (0x197d, 0xc9b0), (0x197e, 0xc9b1),
    (0x197f, 0xc9b2), (0x1980, 0xc9b3), (0x1981, 0xc9b4), (0x1982, 0xc9b5), (0x1983, 0xc9b6), (0x1984, 0xc9b7),
    (0x1985, 0xc9b8), (0x1986, 0xc9b9), (0x1987, 0xc9ba), (0x1988, 0xc9bb), (0x1989, 0xc9bc), (0x198a, 0xc9bd),
    (0x198b, 0xc9be), (0x198c, 0xc9bf), (0x198d, 0xc9c2), (0x198e, 0xc9c3), (0x198f, 0xc9c5), (0x1990, 0xc9c6),
    (0x1991, 0xc9c9), (0x1992, 0xc9cb), (0x1993, 0xc9cc), (0x1994, 0xc9cd), (0x1995, 0xc9ce), (0x1996, 0xc9cf),
    (0x1997, 0xc9d2), (0x1998, 0xc9d4), (0x1999, 0xc9d7), (0x199a, 0xc9d8), (0x199b, 0xc9db), (0x199c, 0xff01),
    (0x199d, 0xff02), (0x199e, 0xff03), (0x199f, 0xff04), (0x19a0, 0xff05), (0x19a1, 0xff06), (0x19a2, 0xff07),
    (0x19a3, 0xff08), (0x19a4, 0xff09), (0x19a5, 0xff0a), (0x19a6, 0xff0b), (0x19a7, 0xff0c), (0x19a8, 0xff0d),
    (0x19a9, 0xff0e), (0x19aa, 0xff0f), (0x19ab, 0xff10), (0x19ac, 0xff11), (0x19ad, 0xff12), (0x19ae, 0xff13),
    (0x19af, 0xff14), (0x19b0, 0xff15), (0x19b1, 0xff16), (0x19b2, 0xff17), (0x19b3, 0xff18), (0x19b4, 0xff19),
    (0x19b5, 0xff1a), (0x19b6, 0xff1b), (0x19b7, 0xff1c), (0x19b8, 0xff1d), (0x19b9, 0xff1e), (0x19ba, 0xff1f),
    (0x19bb, 0xff20), (0x19bc, 0xff21), (0x19bd, 0xff22), (0x19be, 0xff23), (0x19bf, 0xff24), (0x19c0, 0xff25),
    (0x19c1, 0xff26), (0x19c2, 0xff27), (0x19c3, 0xff28), (0x19c4, 0xff29), (0x19c5, 0xff2a), (0x19c6, 0xff2b),
    (0x19c7, 0xff2c), (0x19c8, 0xff2d), (0x19c9, 0xff2e), (0x19ca, 0xff2f), (0x19cb, 0xff30), (0x19cc, 0xff31),
    (0x19cd, 0xff32), (0x19ce, 0xff33), (0x19cf, 0xff34), (0x19d0, 0xff35), (0x19d1, 0xff36), (0x19d2, 0xff37),
    (0x19d3, 0xff38), (0x19d4, 0xff39), (0x19d5, 0xff3a), (0x19d6, 0xff3b), (0x19d7, 0xffe6), (0x19d8, 0xff3d),
    (0x19d9, 0xff3e), (0x19da, 0xff3f), (0x19db, 0xff40), (0x19dc, 0xff41), (0x19dd, 0xff42), (0x19de, 0xff43),
    (0x19df, 0xff44), (0x19e0, 0xff45), (0x19e1, 0xff46), (0x19e2, 0xff47), (0x19e3, 0xff48), (0x19e4, 0xff49),
    (0x19e5, 0xff4a), (0x19e6, 0xff4b), (0x19e7, 0xff4c), (0x19e8, 0xff4d), (0x19e9, 0xff4e), (0x19ea, 0xff4f),
    (0x19eb, 0xff50), (0x19ec, 0xff51), (0x19ed, 0xff52), (0x19ee, 0xff53), (0x19ef, 0xff54), (0x19f0, 0xff55),
    (0x19f1, 0xff56), (0x19f2, 0xff57), (0x19f3, 0xff58), (0x19f4, 0xff59), (0x19f5, 0xff5a), (0x19f6, 0xff5b),
    (0x19f7, 0xff5c), (0x19f8, 0xff5d), (0x19f9, 0xffe3), (0x19fa, 0xc9de), (0x19fb, 0xc9df), (0x19fc, 0xc9e1),
    (0x19fd, 0xc9e3), (0x19fe, 0xc9e5), (0x19ff, 0xc9e6), (0x1a00, 0xc9e8), (0x1a01, 0xc9e9), (0x1a02, 0xc9ea),
    (0x1a03, 0xc9eb), (0x1a04, 0xc9ee), (0x1a05, 0xc9f2), (0x1a06, 0xc9f3), (0x1a07, 0xc9f4), (0x1a08, 0xc9f5),
    (0x1a09, 0xc9f6), (0x1a0a, 0xc9f7), (0x1a0b, 0xc9fa), (0x1a0c, 0xc9fb), (0x1a0d, 0xc9fd), (0x1a0e, 0xc9fe),
    (0x1a0f, 0xc9ff), (0x1a10, 0xca01), (0x1a11, 0xca02), (0x1a12, 0xca03), (0x1a13, 0xca04), (0x1a1a, 0xca05),
    (0x1a1b, 0xca06), (0x1a1c, 0xca07), (0x1a1d, 0xca0a), (0x1a1e, 0xca0e), (0x1a1f, 0xca0f), (0x1a20, 0xca10),
    (0x1a21, 0xca11), (0x1a22, 0xca12), (0x1a23, 0xca13), (0x1a24, 0xca15), (0x1a25, 0xca16), (0x1a26, 0xca17),
    (0x1a27, 0xca19), (0x1a28, 0xca1a), (0x1a29, 0xca1b), (0x1a2a, 0xca1c), (0x1a2b, 0xca1d), (0x1a2c, 0xca1e),
    (0x1a2d, 0xca1f), (0x1a2e, 0xca20), (0x1a2f, 0xca21), (0x1a30, 0xca22), (0x1a31, 0xca23), (0x1a32, 0xca24),
    (0x1a33, 0xca25), (0x1a3a, 0xca26), (0x1a3b, 0xca27), (0x1a3c, 0xca28), (0x1a3d, 0xca2a), (0x1a3e, 0xca2b),
    (0x1a3f, 0xca2c), (0x1a40, 0xca2d), (0x1a41, 0xca2e), (0x1a42, 0xca2f), (0x1a43, 0xca30), (0x1a44, 0xca31),
    (0x1a45, 0xca32), (0x1a46, 0xca33), (0x1a47, 0xca34), (0x1a48, 0xca35), (0x1a49, 0xca36), (0x1a4a, 0xca37),
    (0x1a4b, 0xca38), (0x1a4c, 0xca39), (0x1a4d, 0xca3a), (0x1a4e, 0xca3b), (0x1a4f, 0xca3c), (0x1a50, 0xca3d),
    (0x1a51, 0xca3e), (0x1a52, 0xca3f), (0x1a53, 0xca40), (0x1a54, 0xca41), (0x1a55, 0xca42), (0x1a56, 0xca43),
    (0x1a57, 0xca44), (0x1a58, 0xca45), (0x1a59, 0xca46), (0x1a5a, 0x3131), (0x1a5b, 0x3132), (0x1a5c, 0x3133),
    (0x1a5d, 0x3134), (0x1a5e, 0x3135), (0x1a5f, 0x3136), (0x1a60, 0x3137), (0x1a61, 0x3138), (0x1a62, 0x3139),
    (0x1a63, 0x313a), (0x1a64, 0x313b), (0x1a65, 0x313c), (0x1a66, 0x313d), (0x1a67, 0x313e), (0x1a68, 0x313f),
    (0x1a69, 0x3140), (0x1a6a, 0x3141), (0x1a6b, 0x3142), (0x1a6c, 0x3143), (0x1a6d, 0x3144), (0x1a6e, 0x3145),
    (0x1a6f, 0x3146), (0x1a70, 0x3147), (0x1a71, 0x3148), (0x1a72, 0x3149), (0x1a73, 0x314a), (0x1a74, 0x314b),
    (0x1a75, 0x314c), (0x1a76, 0x314d), (0x1a77, 0x314e), (0x1a78, 0x314f), (0x1a79, 0x3150), (0x1a7a, 0x3151),
    (0x1a7b, 0x3152), (0x1a7c, 0x3153), (0x1a7d, 0x3154), (0x1a7e, 0x3155), (0x1a7f, 0x3156), (0x1a80, 0x3157),
    (0x1a81, 0x3158), (0x1a82, 0x3159), (0x1a83, 0x315a), (0x1a84, 0x315b), (0x1a85, 0x315c), (0x1a86, 0x315d),
    (0x1a87, 0x315e), (0x1a88, 0x315f), (0x1a89, 0x3160), (0x1a8a, 0x3161), (0x1a8b, 0x3162), (0x1a8c, 0x3163),
    (0x1a8d, 0x3164), (0x1a8e, 0x3165), (0x1a8f, 0x3166), (0x1a90, 0x3167), (0x1a91, 0x3168), (0x1a92, 0x3169),
    (0x1a93, 0x316a), (0x1a94, 0x316b), (0x1a95, 0x316c), (0x1a96, 0x316d), (0x1a97, 0x316e), (0x1a98, 0x316f),
    (0x1a99, 0x3170), (0x1a9a, 0x3171), (0x1a9b, 0x3172), (0x1a9c, 0x3173), (0x1a9d, 0x3174), (0x1a9e, 0x3175),
    (0x1a9f, 0x3176), (0x1aa0, 0x3177), (0x1aa1, 0x3178), (0x1aa2, 0x3179), (0x1aa3, 0x317a), (0x1aa4, 0x317b),
    (0x1aa5, 0x317c), (0x1aa6, 0x317d), (0x1aa7, 0x317e), (0x1aa8, 0x317f), (0x1aa9, 0x3180), (0x1aaa, 0x3181),
    (0x1aab, 0x3182), (0x1aac, 0x3183), (0x1aad, 0x3184), (0x1aae, 0x3185), (0x1aaf, 0x3186), (0x1ab0, 0x3187),
    (0x1ab1, 0x3188), (0x1ab2, 0x3189), (0x1ab3, 0x318a), (0x1ab4, 0x318b), (0x1ab5, 0x318c), (0x1ab6, 0x318d),
    (0x1ab7, 0x318e), (0x1ab8, 0xca47), (0x1ab9, 0xca48), (0x1aba, 0xca49), (0x1abb, 0xca4a), (0x1abc, 0xca4b),
    (0x1abd, 0xca4e), (0x1abe, 0xca4f), (0x1abf, 0xca51), (0x1ac0, 0xca52), (0x1ac1, 0xca53), (0x1ac2, 0xca55),
    (0x1ac3, 0xca56), (0x1ac4, 0xca57), (0x1ac5, 0xca58), (0x1ac6, 0xca59), (0x1ac7, 0xca5a), (0x1ac8, 0xca5b),
    (0x1ac9, 0xca5e), (0x1aca, 0xca62), (0x1acb, 0xca63), (0x1acc, 0xca64), (0x1acd, 0xca65), (0x1ace, 0xca66),
    (0x1acf, 0xca67), (0x1ad0, 0xca69), (0x1ad1, 0xca6a), (0x1ad8, 0xca6b), (0x1ad9, 0xca6c), (0x1ada, 0xca6d),
    (0x1adb, 0xca6e), (0x1adc, 0xca6f), (0x1add, 0xca70), (0x1ade, 0xca71), (0x1adf, 0xca72), (0x1ae0, 0xca73),
    (0x1ae1, 0xca74), (0x1ae2, 0xca75), (0x1ae3, 0xca76), (0x1ae4, 0xca77), (0x1ae5, 0xca78), (0x1ae6, 0xca79),
    (0x1ae7, 0xca7a), (0x1ae8, 0xca7b), (0x1ae9, 0xca7c), (0x1aea, 0xca7e), (0x1aeb, 0xca7f), (0x1aec, 0xca80),
    (0x1aed, 0xca81), (0x1aee, 0xca82), (0x1aef, 0xca83), (0x1af0, 0xca85), (0x1af1, 0xca86), (0x1af8, 0xca87),
    (0x1af9, 0xca88), (0x1afa, 0xca89), (0x1afb, 0xca8a), (0x1afc, 0xca8b), (0x1afd, 0xca8c), (0x1afe, 0xca8d),
    (0x1aff, 0xca8e), (0x1b00, 0xca8f), (0x1b01, 0xca90), (0x1b02, 0xca91), (0x1b03, 0xca92), (0x1b04, 0xca93),
    (0x1b05, 0xca94), (0x1b06, 0xca95), (0x1b07, 0xca96), (0x1b08, 0xca97), (0x1b09, 0xca99), (0x1b0a, 0xca9a),
    (0x1b0b, 0xca9b), (0x1b0c, 0xca9c), (0x1b0d, 0xca9d), (0x1b0e, 0xca9e), (0x1b0f, 0xca9f), (0x1b10, 0xcaa0),
    (0x1b11, 0xcaa1), (0x1b12, 0xcaa2), (0x1b13, 0xcaa3), (0x1b14, 0xcaa4), (0x1b15, 0xcaa5), (0x1b16, 0xcaa6),
    (0x1b17, 0xcaa7), (0x1b18, 0x2170), (0x1b19, 0x2171), (0x1b1a, 0x2172), (0x1b1b, 0x2173), (0x1b1c, 0x2174),
    (0x1b1d, 0x2175), (0x1b1e, 0x2176), (0x1b1f, 0x2177), (0x1b20, 0x2178), (0x1b21, 0x2179), (0x1b27, 0x2160),
    (0x1b28, 0x2161), (0x1b29, 0x2162), (0x1b2a, 0x2163), (0x1b2b, 0x2164), (0x1b2c, 0x2165), (0x1b2d, 0x2166),
    (0x1b2e, 0x2167), (0x1b2f, 0x2168), (0x1b30, 0x2169), (0x1b38, 0x0391), (0x1b39, 0x0392), (0x1b3a, 0x0393),
    (0x1b3b, 0x0394), (0x1b3c, 0x0395), (0x1b3d, 0x0396), (0x1b3e, 0x0397), (0x1b3f, 0x0398), (0x1b40, 0x0399),
    (0x1b41, 0x039a), (0x1b42, 0x039b), (0x1b43, 0x039c), (0x1b44, 0x039d), (0x1b45, 0x039e), (0x1b46, 0x039f),
    (0x1b47, 0x03a0), (0x1b48, 0x03a1), (0x1b49, 0x03a3), (0x1b4a, 0x03a4), (0x1b4b, 0x03a5), (0x1b4c, 0x03a6),
    (0x1b4d, 0x03a7), (0x1b4e, 0x03a8), (0x1b4f, 0x03a9), (0x1b58, 0x03b1), (0x1b59, 0x03b2), (0x1b5a, 0x03b3),
    (0x1b5b, 0x03b4), (0x1b5c, 0x03b5), (0x1b5d, 0x03b6), (0x1b5e, 0x03b7), (0x1b5f, 0x03b8), (0x1b60, 0x03b9),
    (0x1b61, 0x03ba), (0x1b62, 0x03bb), (0x1b63, 0x03bc), (0x1b64, 0x03bd), (0x1b65, 0x03be), (0x1b66, 0x03bf),
    (0x1b67, 0x03c0), (0x1b68, 0x03c1), (0x1b69, 0x03c3), (0x1b6a, 0x03c4), (0x1b6b, 0x03c5), (0x1b6c, 0x03c6),
    (0x1b6d, 0x03c7), (0x1b6e, 0x03c8), (0x1b6f, 0x03c9), (0x1b76, 0xcaa8), (0x1b77, 0xcaa9), (0x1b78, 0xcaaa),
    (0x1b79, 0xcaab), (0x1b7a, 0xcaac), (0x1b7b, 0xcaad), (0x1b7c, 0xcaae), (0x1b7d, 0xcaaf), (0x1b7e, 0xcab0),
    (0x1b7f, 0xcab1), (0x1b80, 0xcab2), (0x1b81, 0xcab3), (0x1b82, 0xcab4), (0x1b83, 0xcab5), (0x1b84, 0xcab6),
    (0x1b85, 0xcab7), (0x1b86, 0xcab8), (0x1b87, 0xcab9), (0x1b88, 0xcaba), (0x1b89, 0xcabb), (0x1b8a, 0xcabe),
    (0x1b8b, 0xcabf), (0x1b8c, 0xcac1), (0x1b8d, 0xcac2), (0x1b8e, 0xcac3), (0x1b8f, 0xcac5), (0x1b96, 0xcac6),
    (0x1b97, 0xcac7), (0x1b98, 0xcac8), (0x1b99, 0xcac9), (0x1b9a, 0xcaca), (0x1b9b, 0xcacb), (0x1b9c, 0xcace),
    (0x1b9d, 0xcad0), (0x1b9e, 0xcad2), (0x1b9f, 0xcad4), (0x1ba0, 0xcad5), (0x1ba1, 0xcad6), (0x1ba2, 0xcad7),
    (0x1ba3, 0xcada), (0x1ba4, 0xcadb), (0x1ba5, 0xcadc), (0x1ba6, 0xcadd), (0x1ba7, 0xcade), (0x1ba8, 0xcadf),
    (0x1ba9, 0xcae1), (0x1baa, 0xcae2), (0x1bab, 0xcae3), (0x1bac, 0xcae4), (0x1bad, 0xcae5), (0x1bae, 0xcae6),
    (0x1baf, 0xcae7), (0x1bb6, 0xcae8), (0x1bb7, 0xcae9), (0x1bb8, 0xcaea), (0x1bb9, 0xcaeb), (0x1bba, 0xcaed),
    (0x1bbb, 0xcaee), (0x1bbc, 0xcaef), (0x1bbd, 0xcaf0), (0x1bbe, 0xcaf1), (0x1bbf, 0xcaf2), (0x1bc0, 0xcaf3),
    (0x1bc1, 0xcaf5), (0x1bc2, 0xcaf6), (0x1bc3, 0xcaf7), (0x1bc4, 0xcaf8), (0x1bc5, 0xcaf9), (0x1bc6, 0xcafa),
    (0x1bc7, 0xcafb), (0x1bc8, 0xcafc), (0x1bc9, 0xcafd), (0x1bca, 0xcafe), (0x1bcb, 0xcaff), (0x1bcc, 0xcb00),
    (0x1bcd, 0xcb01), (0x1bce, 0xcb02), (0x1bcf, 0xcb03), (0x1bd0, 0xcb04), (0x1bd1, 0xcb05), (0x1bd2, 0xcb06),
    (0x1bd3, 0xcb07), (0x1bd4, 0xcb09), (0x1bd5, 0xcb0a), (0x1bd6, 0x2500), (0x1bd7, 0x2502), (0x1bd8, 0x250c),
    (0x1bd9, 0x2510), (0x1bda, 0x2518), (0x1bdb, 0x2514), (0x1bdc, 0x251c), (0x1bdd, 0x252c), (0x1bde, 0x2524),
    (0x1bdf, 0x2534), (0x1be0, 0x253c), (0x1be1, 0x2501), (0x1be2, 0x2503), (0x1be3, 0x250f), (0x1be4, 0x2513),
    (0x1be5, 0x251b), (0x1be6, 0x2517), (0x1be7, 0x2523), (0x1be8, 0x2533), (0x1be9, 0x252b), (0x1bea, 0x253b),
    (0x1beb, 0x254b), (0x1bec, 0x2520), (0x1bed, 0x252f), (0x1bee, 0x2528), (0x1bef, 0x2537), (0x1bf0, 0x253f),
    (0x1bf1, 0x251d), (0x1bf2, 0x2530), (0x1bf3, 0x2525), (0x1bf4, 0x2538), (0x1bf5, 0x2542), (0x1bf6, 0x2512),
    (0x1bf7, 0x2511), (0x1bf8, 0x251a), (0x1bf9, 0x2519), (0x1bfa, 0x2516), (0x1bfb, 0x2515), (0x1bfc, 0x250e),
    (0x1bfd, 0x250d), (0x1bfe, 0x251e), (0x1bff, 0x251f), (0x1c00, 0x2521), (0x1c01, 0x2522), (0x1c02, 0x2526),
    (0x1c03, 0x2527), (0x1c04, 0x2529), (0x1c05, 0x252a), (0x1c06, 0x252d), (0x1c07, 0x252e), (0x1c08, 0x2531),
    (0x1c09, 0x2532), (0x1c0a, 0x2535), (0x1c0b, 0x2536), (0x1c0c, 0x2539), (0x1c0d, 0x253a), (0x1c0e, 0x253d),
    (0x1c0f, 0x253e), (0x1c10, 0x2540), (0x1c11, 0x2541), (0x1c12, 0x2543), (0x1c13, 0x2544), (0x1c14, 0x2545),
    (0x1c15, 0x2546), (0x1c16, 0x2547), (0x1c17, 0x2548), (0x1c18, 0x2549), (0x1c19, 0x254a), (0x1c34, 0xcb0b),
    (0x1c35, 0xcb0c), (0x1c36, 0xcb0d), (0x1c37, 0xcb0e), (0x1c38, 0xcb0f), (0x1c39, 0xcb11), (0x1c3a, 0xcb12),
    (0x1c3b, 0xcb13), (0x1c3c, 0xcb15), (0x1c3d, 0xcb16), (0x1c3e, 0xcb17), (0x1c3f, 0xcb19), (0x1c40, 0xcb1a),
    (0x1c41, 0xcb1b), (0x1c42, 0xcb1c), (0x1c43, 0xcb1d), (0x1c44, 0xcb1e), (0x1c45, 0xcb1f), (0x1c46, 0xcb22),
    (0x1c47, 0xcb23), (0x1c48, 0xcb24), (0x1c49, 0xcb25), (0x1c4a, 0xcb26), (0x1c4b, 0xcb27), (0x1c4c, 0xcb28),
    (0x1c4d, 0xcb29), (0x1c54, 0xcb2a), (0x1c55, 0xcb2b), (0x1c56, 0xcb2c), (0x1c57, 0xcb2d), (0x1c58, 0xcb2e),
    (0x1c59, 0xcb2f), (0x1c5a, 0xcb30), (0x1c5b, 0xcb31), (0x1c5c, 0xcb32), (0x1c5d, 0xcb33), (0x1c5e, 0xcb34),
    (0x1c5f, 0xcb35), (0x1c60, 0xcb36), (0x1c61, 0xcb37), (0x1c62, 0xcb38), (0x1c63, 0xcb39), (0x1c64, 0xcb3a),
    (0x1c65, 0xcb3b), (0x1c66, 0xcb3c), (0x1c67, 0xcb3d), (0x1c68, 0xcb3e), (0x1c69, 0xcb3f), (0x1c6a, 0xcb40),
    (0x1c6b, 0xcb42), (0x1c6c, 0xcb43), (0x1c6d, 0xcb44), (0x1c74, 0xcb45), (0x1c75, 0xcb46), (0x1c76, 0xcb47),
    (0x1c77, 0xcb4a), (0x1c78, 0xcb4b), (0x1c79, 0xcb4d), (0x1c7a, 0xcb4e), (0x1c7b, 0xcb4f), (0x1c7c, 0xcb51),
    (0x1c7d, 0xcb52), (0x1c7e, 0xcb53), (0x1c7f, 0xcb54), (0x1c80, 0xcb55), (0x1c81, 0xcb56), (0x1c82, 0xcb57),
    (0x1c83, 0xcb5a), (0x1c84, 0xcb5b), (0x1c85, 0xcb5c), (0x1c86, 0xcb5e), (0x1c87, 0xcb5f), (0x1c88, 0xcb60),
    (0x1c89, 0xcb61), (0x1c8a, 0xcb62), (0x1c8b, 0xcb63), (0x1c8c, 0xcb65), (0x1c8d, 0xcb66), (0x1c8e, 0xcb67),
    (0x1c8f, 0xcb68), (0x1c90, 0xcb69), (0x1c91, 0xcb6a), (0x1c92, 0xcb6b), (0x1c93, 0xcb6c), (0x1c94, 0x3395),
    (0x1c95, 0x3396), (0x1c96, 0x3397), (0x1c97, 0x2113), (0x1c98, 0x3398), (0x1c99, 0x33c4), (0x1c9a, 0x33a3),
    (0x1c9b, 0x33a4), (0x1c9c, 0x33a5), (0x1c9d, 0x33a6), (0x1c9e, 0x3399), (0x1c9f, 0x339a), (0x1ca0, 0x339b),
    (0x1ca1, 0x339c), (0x1ca2, 0x339d), (0x1ca3, 0x339e), (0x1ca4, 0x339f), (0x1ca5, 0x33a0), (0x1ca6, 0x33a1),
    (0x1ca7, 0x33a2), (0x1ca8, 0x33ca), (0x1ca9, 0x338d), (0x1caa, 0x338e), (0x1cab, 0x338f), (0x1cac, 0x33cf),
    (0x1cad, 0x3388), (0x1cae, 0x3389), (0x1caf, 0x33c8), (0x1cb0, 0x33a7), (0x1cb1, 0x33a8), (0x1cb2, 0x33b0),
    (0x1cb3, 0x33b1), (0x1cb4, 0x33b2), (0x1cb5, 0x33b3), (0x1cb6, 0x33b4), (0x1cb7, 0x33b5), (0x1cb8, 0x33b6),
    (0x1cb9, 0x33b7), (0x1cba, 0x33b8), (0x1cbb, 0x33b9), (0x1cbc, 0x3380), (0x1cbd, 0x3381), (0x1cbe, 0x3382),
    (0x1cbf, 0x3383), (0x1cc0, 0x3384), (0x1cc1, 0x33ba), (0x1cc2, 0x33bb), (0x1cc3, 0x33bc), (0x1cc4, 0x33bd),
    (0x1cc5, 0x33be), (0x1cc6, 0x33bf), (0x1cc7, 0x3390), (0x1cc8, 0x3391), (0x1cc9, 0x3392), (0x1cca, 0x3393),
    (0x1ccb, 0x3394), (0x1ccc, 0x2126), (0x1ccd, 0x33c0), (0x1cce, 0x33c1), (0x1ccf, 0x338a), (0x1cd0, 0x338b),
    (0x1cd1, 0x338c), (0x1cd2, 0x33d6), (0x1cd3, 0x33c5), (0x1cd4, 0x33ad), (0x1cd5, 0x33ae), (0x1cd6, 0x33af),
    (0x1cd7, 0x33db), (0x1cd8, 0x33a9), (0x1cd9, 0x33aa), (0x1cda, 0x33ab), (0x1cdb, 0x33ac), (0x1cdc, 0x33dd),
    (0x1cdd, 0x33d0), (0x1cde, 0x33d3), (0x1cdf, 0x33c3), (0x1ce0, 0x33c9), (0x1ce1, 0x33dc), (0x1ce2, 0x33c6),
    (0x1cf2, 0xcb6d), (0x1cf3, 0xcb6e), (0x1cf4, 0xcb6f), (0x1cf5, 0xcb70), (0x1cf6, 0xcb71), (0x1cf7, 0xcb72),
    (0x1cf8, 0xcb73), (0x1cf9, 0xcb74), (0x1cfa, 0xcb75), (0x1cfb, 0xcb76), (0x1cfc, 0xcb77), (0x1cfd, 0xcb7a),
    (0x1cfe, 0xcb7b), (0x1cff, 0xcb7c), (0x1d00, 0xcb7d), (0x1d01, 0xcb7e), (0x1d02, 0xcb7f), (0x1d03, 0xcb80),
    (0x1d04, 0xcb81), (0x1d05, 0xcb82), (0x1d06, 0xcb83), (0x1d07, 0xcb84), (0x1d08, 0xcb85), (0x1d09, 0xcb86),
    (0x1d0a, 0xcb87), (0x1d0b, 0xcb88), (0x1d12, 0xcb89), (0x1d13, 0xcb8a), (0x1d14, 0xcb8b), (0x1d15, 0xcb8c),
    (0x1d16, 0xcb8d), (0x1d17, 0xcb8e), (0x1d18, 0xcb8f), (0x1d19, 0xcb90), (0x1d1a, 0xcb91), (0x1d1b, 0xcb92),
    (0x1d1c, 0xcb93), (0x1d1d, 0xcb94), (0x1d1e, 0xcb95), (0x1d1f, 0xcb96), (0x1d20, 0xcb97), (0x1d21, 0xcb98),
    (0x1d22, 0xcb99), (0x1d23, 0xcb9a), (0x1d24, 0xcb9b), (0x1d25, 0xcb9d), (0x1d26, 0xcb9e), (0x1d27, 0xcb9f),
    (0x1d28, 0xcba0), (0x1d29, 0xcba1), (0x1d2a, 0xcba2), (0x1d2b, 0xcba3), (0x1d32, 0xcba4), (0x1d33, 0xcba5),
    (0x1d34, 0xcba6), (0x1d35, 0xcba7), (0x1d36, 0xcba8), (0x1d37, 0xcba9), (0x1d38, 0xcbaa), (0x1d39, 0xcbab),
    (0x1d3a, 0xcbac), (0x1d3b, 0xcbad), (0x1d3c, 0xcbae), (0x1d3d, 0xcbaf), (0x1d3e, 0xcbb0), (0x1d3f, 0xcbb1),
    (0x1d40, 0xcbb2), (0x1d41, 0xcbb3), (0x1d42, 0xcbb4), (0x1d43, 0xcbb5), (0x1d44, 0xcbb6), (0x1d45, 0xcbb7),
    (0x1d46, 0xcbb9), (0x1d47, 0xcbba), (0x1d48, 0xcbbb), (0x1d49, 0xcbbc), (0x1d4a, 0xcbbd), (0x1d4b, 0xcbbe),
    (0x1d4c, 0xcbbf), (0x1d4d, 0xcbc0), (0x1d4e, 0xcbc1), (0x1d4f, 0xcbc2), (0x1d50, 0xcbc3), (0x1d51, 0xcbc4),
    (0x1d52, 0x00c6), (0x1d53, 0x00d0), (0x1d54, 0x00aa), (0x1d55, 0x0126), (0x1d57, 0x0132), (0x1d59, 0x013f),
    (0x1d5a, 0x0141), (0x1d5b, 0x00d8), (0x1d5c, 0x0152), (0x1d5d, 0x00ba), (0x1d5e, 0x00de), (0x1d5f, 0x0166),
    (0x1d60, 0x014a), (0x1d62, 0x3260), (0x1d63, 0x3261), (0x1d64, 0x3262), (0x1d65, 0x3263), (0x1d66, 0x3264),
    (0x1d67, 0x3265), (0x1d68, 0x3266), (0x1d69, 0x3267), (0x1d6a, 0x3268), (0x1d6b, 0x3269), (0x1d6c, 0x326a),
    (0x1d6d, 0x326b), (0x1d6e, 0x326c), (0x1d6f, 0x326d), (0x1d70, 0x326e), (0x1d71, 0x326f), (0x1d72, 0x3270),
    (0x1d73, 0x3271), (0x1d74, 0x3272), (0x1d75, 0x3273), (0x1d76, 0x3274), (0x1d77, 0x3275), (0x1d78, 0x3276),
    (0x1d79, 0x3277), (0x1d7a, 0x3278), (0x1d7b, 0x3279), (0x1d7c, 0x327a), (0x1d7d, 0x327b), (0x1d7e, 0x24d0),
    (0x1d7f, 0x24d1), (0x1d80, 0x24d2), (0x1d81, 0x24d3), (0x1d82, 0x24d4), (0x1d83, 0x24d5), (0x1d84, 0x24d6),
    (0x1d85, 0x24d7), (0x1d86, 0x24d8), (0x1d87, 0x24d9), (0x1d88, 0x24da), (0x1d89, 0x24db), (0x1d8a, 0x24dc),
    (0x1d8b, 0x24dd), (0x1d8c, 0x24de), (0x1d8d, 0x24df), (0x1d8e, 0x24e0), (0x1d8f, 0x24e1), (0x1d90, 0x24e2),
    (0x1d91, 0x24e3), (0x1d92, 0x24e4), (0x1d93, 0x24e5), (0x1d94, 0x24e6), (0x1d95, 0x24e7), (0x1d96, 0x24e8),
    (0x1d97, 0x24e9), (0x1d98, 0x2460), (0x1d99, 0x2461), (0x1d9a, 0x2462), (0x1d9b, 0x2463), (0x1d9c, 0x2464),
    (0x1d9d, 0x2465), (0x1d9e, 0x2466), (0x1d9f, 0x2467), (0x1da0, 0x2468), (0x1da1, 0x2469), (0x1da2, 0x246a),
    (0x1da3, 0x246b), (0x1da4, 0x246c), (0x1da5, 0x246d), (0x1da6, 0x246e), (0x1da7, 0x00bd), (0x1da8, 0x2153),
    (0x1da9, 0x2154), (0x1daa, 0x00bc), (0x1dab, 0x00be), (0x1dac, 0x215b), (0x1dad, 0x215c), (0x1dae, 0x215d),
    (0x1daf, 0x215e), (0x1db0, 0xcbc5), (0x1db1, 0xcbc6), (0x1db2, 0xcbc7), (0x1db3, 0xcbc8), (0x1db4, 0xcbc9),
    (0x1db5, 0xcbca), (0x1db6, 0xcbcb), (0x1db7, 0xcbcc), (0x1db8, 0xcbcd), (0x1db9, 0xcbce), (0x1dba, 0xcbcf),
    (0x1dbb, 0xcbd0), (0x1dbc, 0xcbd1), (0x1dbd, 0xcbd2), (0x1dbe, 0xcbd3), (0x1dbf, 0xcbd5), (0x1dc0, 0xcbd6),
    (0x1dc1, 0xcbd7), (0x1dc2, 0xcbd8), (0x1dc3, 0xcbd9), (0x1dc4, 0xcbda), (0x1dc5, 0xcbdb), (0x1dc6, 0xcbdc),
    (0x1dc7, 0xcbdd), (0x1dc8, 0xcbde), (0x1dc9, 0xcbdf), (0x1dd0, 0xcbe0), (0x1dd1, 0xcbe1), (0x1dd2, 0xcbe2),
    (0x1dd3, 0xcbe3), (0x1dd4, 0xcbe5), (0x1dd5, 0xcbe6), (0x1dd6, 0xcbe8), (0x1dd7, 0xcbea), (0x1dd8, 0xcbeb),
    (0x1dd9, 0xcbec), (0x1dda, 0xcbed), (0x1ddb, 0xcbee), (0x1ddc, 0xcbef), (0x1ddd, 0xcbf0), (0x1dde, 0xcbf1),
    (0x1ddf, 0xcbf2), (0x1de0, 0xcbf3), (0x1de1, 0xcbf4), (0x1de2, 0xcbf5), (0x1de3, 0xcbf6), (0x1de4, 0xcbf7),
    (0x1de5, 0xcbf8), (0x1de6, 0xcbf9), (0x1de7, 0xcbfa), (0x1de8, 0xcbfb), (0x1de9, 0xcbfc), (0x1df0, 0xcbfd),
    (0x1df1, 0xcbfe), (0x1df2, 0xcbff), (0x1df3, 0xcc00), (0x1df4, 0xcc01), (0x1df5, 0xcc02), (0x1df6, 0xcc03),
    (0x1df7, 0xcc04), (0x1df8, 0xcc05), (0x1df9, 0xcc06), (0x1dfa, 0xcc07), (0x1dfb, 0xcc08), (0x1dfc, 0xcc09),
    (0x1dfd, 0xcc0a), (0x1dfe, 0xcc0b), (0x1dff, 0xcc0e), (0x1e00, 0xcc0f), (0x1e01, 0xcc11), (0x1e02, 0xcc12),
    (0x1e03, 0xcc13), (0x1e04, 0xcc15), (0x1e05, 0xcc16), (0x1e06, 0xcc17), (0x1e07, 0xcc18), (0x1e08, 0xcc19),
    (0x1e09, 0xcc1a), (0x1e0a, 0xcc1b), (0x1e0b, 0xcc1e), (0x1e0c, 0xcc1f), (0x1e0d, 0xcc20), (0x1e0e, 0xcc23),
    (0x1e0f, 0xcc24), (0x1e10, 0x00e6), (0x1e11, 0x0111), (0x1e12, 0x00f0), (0x1e13, 0x0127), (0x1e14, 0x0131),
    (0x1e15, 0x0133), (0x1e16, 0x0138), (0x1e17, 0x0140), (0x1e18, 0x0142), (0x1e19, 0x00f8), (0x1e1a, 0x0153),
    (0x1e1b, 0x00df), (0x1e1c, 0x00fe), (0x1e1d, 0x0167), (0x1e1e, 0x014b), (0x1e1f, 0x0149), (0x1e20, 0x3200),
    (0x1e21, 0x3201), (0x1e22, 0x3202), (0x1e23, 0x3203), (0x1e24, 0x3204), (0x1e25, 0x3205), (0x1e26, 0x3206),
    (0x1e27, 0x3207), (0x1e28, 0x3208), (0x1e29, 0x3209), (0x1e2a, 0x320a), (0x1e2b, 0x320b), (0x1e2c, 0x320c),
    (0x1e2d, 0x320d), (0x1e2e, 0x320e), (0x1e2f, 0x320f), (0x1e30, 0x3210), (0x1e31, 0x3211), (0x1e32, 0x3212),
    (0x1e33, 0x3213), (0x1e34, 0x3214), (0x1e35, 0x3215), (0x1e36, 0x3216), (0x1e37, 0x3217), (0x1e38, 0x3218),
    (0x1e39, 0x3219), (0x1e3a, 0x321a), (0x1e3b, 0x321b), (0x1e3c, 0x249c), (0x1e3d, 0x249d), (0x1e3e, 0x249e),
    (0x1e3f, 0x249f), (0x1e40, 0x24a0), (0x1e41, 0x24a1), (0x1e42, 0x24a2), (0x1e43, 0x24a3), (0x1e44, 0x24a4),
    (0x1e45, 0x24a5), (0x1e46, 0x24a6), (0x1e47, 0x24a7), (0x1e48, 0x24a8), (0x1e49, 0x24a9), (0x1e4a, 0x24aa),
    (0x1e4b, 0x24ab), (0x1e4c, 0x24ac), (0x1e4d, 0x24ad), (0x1e4e, 0x24ae), (0x1e4f, 0x24af), (0x1e50, 0x24b0),
    (0x1e51, 0x24b1), (0x1e52, 0x24b2), (0x1e53, 0x24b3), (0x1e54, 0x24b4), (0x1e55, 0x24b5), (0x1e56, 0x2474),
    (0x1e57, 0x2475), (0x1e58, 0x2476), (0x1e59, 0x2477), (0x1e5a, 0x2478), (0x1e5b, 0x2479), (0x1e5c, 0x247a),
    (0x1e5d, 0x247b), (0x1e5e, 0x247c), (0x1e5f, 0x247d), (0x1e60, 0x247e), (0x1e61, 0x247f), (0x1e62, 0x2480),
    (0x1e63, 0x2481), (0x1e64, 0x2482), (0x1e65, 0x00b9), (0x1e66, 0x00b2), (0x1e67, 0x00b3), (0x1e68, 0x2074),
    (0x1e69, 0x207f), (0x1e6a, 0x2081), (0x1e6b, 0x2082), (0x1e6c, 0x2083), (0x1e6d, 0x2084), (0x1e6e, 0xcc25),
    (0x1e6f, 0xcc26), (0x1e70, 0xcc2a), (0x1e71, 0xcc2b), (0x1e72, 0xcc2d), (0x1e73, 0xcc2f), (0x1e74, 0xcc31),
    (0x1e75, 0xcc32), (0x1e76, 0xcc33), (0x1e77, 0xcc34), (0x1e78, 0xcc35), (0x1e79, 0xcc36), (0x1e7a, 0xcc37),
    (0x1e7b, 0xcc3a), (0x1e7c, 0xcc3f), (0x1e7d, 0xcc40), (0x1e7e, 0xcc41), (0x1e7f, 0xcc42), (0x1e80, 0xcc43),
    (0x1e81, 0xcc46), (0x1e82, 0xcc47), (0x1e83, 0xcc49), (0x1e84, 0xcc4a), (0x1e85, 0xcc4b), (0x1e86, 0xcc4d),
    (0x1e87, 0xcc4e), (0x1e8e, 0xcc4f), (0x1e8f, 0xcc50), (0x1e90, 0xcc51), (0x1e91, 0xcc52), (0x1e92, 0xcc53),
    (0x1e93, 0xcc56), (0x1e94, 0xcc5a), (0x1e95, 0xcc5b), (0x1e96, 0xcc5c), (0x1e97, 0xcc5d), (0x1e98, 0xcc5e),
    (0x1e99, 0xcc5f), (0x1e9a, 0xcc61), (0x1e9b, 0xcc62), (0x1e9c, 0xcc63), (0x1e9d, 0xcc65), (0x1e9e, 0xcc67),
    (0x1e9f, 0xcc69), (0x1ea0, 0xcc6a), (0x1ea1, 0xcc6b), (0x1ea2, 0xcc6c), (0x1ea3, 0xcc6d), (0x1ea4, 0xcc6e),
    (0x1ea5, 0xcc6f), (0x1ea6, 0xcc71), (0x1ea7, 0xcc72), (0x1eae, 0xcc73), (0x1eaf, 0xcc74), (0x1eb0, 0xcc76),
    (0x1eb1, 0xcc77), (0x1eb2, 0xcc78), (0x1eb3, 0xcc79), (0x1eb4, 0xcc7a), (0x1eb5, 0xcc7b), (0x1eb6, 0xcc7c),
    (0x1eb7, 0xcc7d), (0x1eb8, 0xcc7e), (0x1eb9, 0xcc7f), (0x1eba, 0xcc80), (0x1ebb, 0xcc81), (0x1ebc, 0xcc82),
    (0x1ebd, 0xcc83), (0x1ebe, 0xcc84), (0x1ebf, 0xcc85), (0x1ec0, 0xcc86), (0x1ec1, 0xcc87), (0x1ec2, 0xcc88),
    (0x1ec3, 0xcc89), (0x1ec4, 0xcc8a), (0x1ec5, 0xcc8b), (0x1ec6, 0xcc8c), (0x1ec7, 0xcc8d), (0x1ec8, 0xcc8e),
    (0x1ec9, 0xcc8f), (0x1eca, 0xcc90), (0x1ecb, 0xcc91), (0x1ecc, 0xcc92), (0x1ecd, 0xcc93), (0x1ece, 0x3041),
    (0x1ecf, 0x3042), (0x1ed0, 0x3043), (0x1ed1, 0x3044), (0x1ed2, 0x3045), (0x1ed3, 0x3046), (0x1ed4, 0x3047),
    (0x1ed5, 0x3048), (0x1ed6, 0x3049), (0x1ed7, 0x304a), (0x1ed8, 0x304b), (0x1ed9, 0x304c), (0x1eda, 0x304d),
    (0x1edb, 0x304e), (0x1edc, 0x304f), (0x1edd, 0x3050), (0x1ede, 0x3051), (0x1edf, 0x3052), (0x1ee0, 0x3053),
    (0x1ee1, 0x3054), (0x1ee2, 0x3055), (0x1ee3, 0x3056), (0x1ee4, 0x3057), (0x1ee5, 0x3058), (0x1ee6, 0x3059),
    (0x1ee7, 0x305a), (0x1ee8, 0x305b), (0x1ee9, 0x305c), (0x1eea, 0x305d), (0x1eeb, 0x305e), (0x1eec, 0x305f),
    (0x1eed, 0x3060), (0x1eee, 0x3061), (0x1eef, 0x3062), (0x1ef0, 0x3063), (0x1ef1, 0x3064), (0x1ef2, 0x3065),
    (0x1ef3, 0x3066), (0x1ef4, 0x3067), (0x1ef5, 0x3068), (0x1ef6, 0x3069), (0x1ef7, 0x306a), (0x1ef8, 0x306b),
    (0x1ef9, 0x306c), (0x1efa, 0x306d), (0x1efb, 0x306e), (0x1efc, 0x306f), (0x1efd, 0x3070), (0x1efe, 0x3071),
    (0x1eff, 0x3072), (0x1f00, 0x3073), (0x1f01, 0x3074), (0x1f02, 0x3075), (0x1f03, 0x3076), (0x1f04, 0x3077),
    (0x1f05, 0x3078), (0x1f06, 0x3079), (0x1f07, 0x307a), (0x1f08, 0x307b), (0x1f09, 0x307c), (0x1f0a, 0x307d),
    (0x1f0b, 0x307e), (0x1f0c, 0x307f), (0x1f0d, 0x3080), (0x1f0e, 0x3081), (0x1f0f, 0x3082), (0x1f10, 0x3083),
    (0x1f11, 0x3084), (0x1f12, 0x3085), (0x1f13, 0x3086), (0x1f14, 0x3087), (0x1f15, 0x3088), (0x1f16, 0x3089),
    (0x1f17, 0x308a), (0x1f18, 0x308b), (0x1f19, 0x308c), (0x1f1a, 0x308d), (0x1f1b, 0x308e), (0x1f1c, 0x308f),
    (0x1f1d, 0x3090), (0x1f1e, 0x3091), (0x1f1f, 0x3092), (0x1f20, 0x3093), (0x1f2c, 0xcc94), (0x1f2d, 0xcc95),
    (0x1f2e, 0xcc96), (0x1f2f, 0xcc97), (0x1f30, 0xcc9a), (0x1f31, 0xcc9b), (0x1f32, 0xcc9d), (0x1f33, 0xcc9e),
    (0x1f34, 0xcc9f), (0x1f35, 0xcca1), (0x1f36, 0xcca2), (0x1f37, 0xcca3), (0x1f38, 0xcca4), (0x1f39, 0xcca5),
    (0x1f3a, 0xcca6), (0x1f3b, 0xcca7), (0x1f3c, 0xccaa), (0x1f3d, 0xccae), (0x1f3e, 0xccaf), (0x1f3f, 0xccb0),
    (0x1f40, 0xccb1), (0x1f41, 0xccb2), (0x1f42, 0xccb3), (0x1f43, 0xccb6), (0x1f44, 0xccb7), (0x1f45, 0xccb9),
    (0x1f4c, 0xccba), (0x1f4d, 0xccbb), (0x1f4e, 0xccbd), (0x1f4f, 0xccbe), (0x1f50, 0xccbf), (0x1f51, 0xccc0),
    (0x1f52, 0xccc1), (0x1f53, 0xccc2), (0x1f54, 0xccc3), (0x1f55, 0xccc6), (0x1f56, 0xccc8), (0x1f57, 0xccca),
    (0x1f58, 0xcccb), (0x1f59, 0xcccc), (0x1f5a, 0xcccd), (0x1f5b, 0xccce), (0x1f5c, 0xcccf), (0x1f5d, 0xccd1),
    (0x1f5e, 0xccd2), (0x1f5f, 0xccd3), (0x1f60, 0xccd5), (0x1f61, 0xccd6), (0x1f62, 0xccd7), (0x1f63, 0xccd8),
    (0x1f64, 0xccd9), (0x1f65, 0xccda), (0x1f6c, 0xccdb), (0x1f6d, 0xccdc), (0x1f6e, 0xccdd), (0x1f6f, 0xccde),
    (0x1f70, 0xccdf), (0x1f71, 0xcce0), (0x1f72, 0xcce1), (0x1f73, 0xcce2), (0x1f74, 0xcce3), (0x1f75, 0xcce5),
    (0x1f76, 0xcce6), (0x1f77, 0xcce7), (0x1f78, 0xcce8), (0x1f79, 0xcce9), (0x1f7a, 0xccea), (0x1f7b, 0xcceb),
    (0x1f7c, 0xcced), (0x1f7d, 0xccee), (0x1f7e, 0xccef), (0x1f7f, 0xccf1), (0x1f80, 0xccf2), (0x1f81, 0xccf3),
    (0x1f82, 0xccf4), (0x1f83, 0xccf5), (0x1f84, 0xccf6), (0x1f85, 0xccf7), (0x1f86, 0xccf8), (0x1f87, 0xccf9),
    (0x1f88, 0xccfa), (0x1f89, 0xccfb), (0x1f8a, 0xccfc), (0x1f8b, 0xccfd), (0x1f8c, 0x30a1), (0x1f8d, 0x30a2),
    (0x1f8e, 0x30a3), (0x1f8f, 0x30a4), (0x1f90, 0x30a5), (0x1f91, 0x30a6), (0x1f92, 0x30a7), (0x1f93, 0x30a8),
    (0x1f94, 0x30a9), (0x1f95, 0x30aa), (0x1f96, 0x30ab), (0x1f97, 0x30ac), (0x1f98, 0x30ad), (0x1f99, 0x30ae),
    (0x1f9a, 0x30af), (0x1f9b, 0x30b0), (0x1f9c, 0x30b1), (0x1f9d, 0x30b2), (0x1f9e, 0x30b3), (0x1f9f, 0x30b4),
    (0x1fa0, 0x30b5), (0x1fa1, 0x30b6), (0x1fa2, 0x30b7), (0x1fa3, 0x30b8), (0x1fa4, 0x30b9), (0x1fa5, 0x30ba),
    (0x1fa6, 0x30bb), (0x1fa7, 0x30bc), (0x1fa8, 0x30bd), (0x1fa9, 0x30be), (0x1faa, 0x30bf), (0x1fab, 0x30c0),
    (0x1fac, 0x30c1), (0x1fad, 0x30c2), (0x1fae, 0x30c3), (0x1faf, 0x30c4), (0x1fb0, 0x30c5), (0x1fb1, 0x30c6),
    (0x1fb2, 0x30c7), (0x1fb3, 0x30c8), (0x1fb4, 0x30c9), (0x1fb5, 0x30ca), (0x1fb6, 0x30cb), (0x1fb7, 0x30cc),
    (0x1fb8, 0x30cd), (0x1fb9, 0x30ce), (0x1fba, 0x30cf), (0x1fbb, 0x30d0), (0x1fbc, 0x30d1), (0x1fbd, 0x30d2),
    (0x1fbe, 0x30d3), (0x1fbf, 0x30d4), (0x1fc0, 0x30d5), (0x1fc1, 0x30d6), (0x1fc2, 0x30d7), (0x1fc3, 0x30d8),
    (0x1fc4, 0x30d9), (0x1fc5, 0x30da), (0x1fc6, 0x30db), (0x1fc7, 0x30dc), (0x1fc8, 0x30dd), (0x1fc9, 0x30de),
    (0x1fca, 0x30df), (0x1fcb, 0x30e0), (0x1fcc, 0x30e1), (0x1fcd, 0x30e2), (0x1fce, 0x30e3), (0x1fcf, 0x30e4),
    (0x1fd0, 0x30e5), (0x1fd1, 0x30e6), (0x1fd2, 0x30e7), (0x1fd3, 0x30e8), (0x1fd4, 0x30e9), (0x1fd5, 0x30ea),
    (0x1fd6, 0x30eb), (0x1fd7, 0x30ec), (0x1fd8, 0x30ed), (0x1fd9, 0x30ee), (0x1fda, 0x30ef), (0x1fdb, 0x30f0),
    (0x1fdc, 0x30f1), (0x1fdd, 0x30f2), (0x1fde, 0x30f3), (0x1fdf, 0x30f4), (0x1fe0, 0x30f5), (0x1fe1, 0x30f6),
    (0x1fea, 0xccfe), (0x1feb, 0xccff), (0x1fec, 0xcd00), (0x1fed, 0xcd02), (0x1fee, 0xcd03), (0x1fef, 0xcd04),
    (0x1ff0, 0xcd05), (0x1ff1, 0xcd06), (0x1ff2, 0xcd07), (0x1ff3, 0xcd0a), (0x1ff4, 0xcd0b), (0x1ff5, 0xcd0d),
    (0x1ff6, 0xcd0e), (0x1ff7, 0xcd0f), (0x1ff8, 0xcd11), (0x1ff9, 0xcd12), (0x1ffa, 0xcd13), (0x1ffb, 0xcd14),
    (0x1ffc, 0xcd15), (0x1ffd, 0xcd16), (0x1ffe, 0xcd17), (0x1fff, 0xcd1a), (0x2000, 0xcd1c), (0x2001, 0xcd1e),
    (0x2002, 0xcd1f), (0x2003, 0xcd20), (0x200a, 0xcd21), (0x200b, 0xcd22), (0x200c, 0xcd23), (0x200d, 0xcd25),
    (0x200e, 0xcd26), (0x200f, 0xcd27), (0x2010, 0xcd29), (0x2011, 0xcd2a), (0x2012, 0xcd2b), (0x2013, 0xcd2d),
    (0x2014, 0xcd2e), (0x2015, 0xcd2f), (0x2016, 0xcd30), (0x2017, 0xcd31), (0x2018, 0xcd32), (0x2019, 0xcd33),
    (0x201a, 0xcd34), (0x201b, 0xcd35), (0x201c, 0xcd36), (0x201d, 0xcd37), (0x201e, 0xcd38), (0x201f, 0xcd3a),
    (0x2020, 0xcd3b), (0x2021, 0xcd3c), (0x2022, 0xcd3d), (0x2023, 0xcd3e), (0x202a, 0xcd3f), (0x202b, 0xcd40),
    (0x202c, 0xcd41), (0x202d, 0xcd42), (0x202e, 0xcd43), (0x202f, 0xcd44), (0x2030, 0xcd45), (0x2031, 0xcd46),
    (0x2032, 0xcd47), (0x2033, 0xcd48), (0x2034, 0xcd49), (0x2035, 0xcd4a), (0x2036, 0xcd4b), (0x2037, 0xcd4c),
    (0x2038, 0xcd4d), (0x2039, 0xcd4e), (0x203a, 0xcd4f), (0x203b, 0xcd50), (0x203c, 0xcd51), (0x203d, 0xcd52),
    (0x203e, 0xcd53), (0x203f, 0xcd54), (0x2040, 0xcd55), (0x2041, 0xcd56), (0x2042, 0xcd57), (0x2043, 0xcd58),
    (0x2044, 0xcd59), (0x2045, 0xcd5a), (0x2046, 0xcd5b), (0x2047, 0xcd5d), (0x2048, 0xcd5e), (0x2049, 0xcd5f),
    (0x204a, 0x0410), (0x204b, 0x0411), (0x204c, 0x0412), (0x204d, 0x0413), (0x204e, 0x0414), (0x204f, 0x0415),
    (0x2050, 0x0401), (0x2051, 0x0416), (0x2052, 0x0417), (0x2053, 0x0418), (0x2054, 0x0419), (0x2055, 0x041a),
    (0x2056, 0x041b), (0x2057, 0x041c), (0x2058, 0x041d), (0x2059, 0x041e), (0x205a, 0x041f), (0x205b, 0x0420),
    (0x205c, 0x0421), (0x205d, 0x0422), (0x205e, 0x0423), (0x205f, 0x0424), (0x2060, 0x0425), (0x2061, 0x0426),
    (0x2062, 0x0427), (0x2063, 0x0428), (0x2064, 0x0429), (0x2065, 0x042a), (0x2066, 0x042b), (0x2067, 0x042c),
    (0x2068, 0x042d), (0x2069, 0x042e), (0x206a, 0x042f), (0x207a, 0x0430), (0x207b, 0x0431), (0x207c, 0x0432),
    (0x207d, 0x0433), (0x207e, 0x0434), (0x207f, 0x0435), (0x2080, 0x0451), (0x2081, 0x0436), (0x2082, 0x0437),
    (0x2083, 0x0438), (0x2084, 0x0439), (0x2085, 0x043a), (0x2086, 0x043b), (0x2087, 0x043c), (0x2088, 0x043d),
    (0x2089, 0x043e), (0x208a, 0x043f), (0x208b, 0x0440), (0x208c, 0x0441), (0x208d, 0x0442), (0x208e, 0x0443),
    (0x208f, 0x0444), (0x2090, 0x0445), (0x2091, 0x0446), (0x2092, 0x0447), (0x2093, 0x0448), (0x2094, 0x0449),
    (0x2095, 0x044a), (0x2096, 0x044b), (0x2097, 0x044c), (0x2098, 0x044d), (0x2099, 0x044e), (0x209a, 0x044f),
    (0x20a8, 0xcd61), (0x20a9, 0xcd62), (0x20aa, 0xcd63), (0x20ab, 0xcd65), (0x20ac, 0xcd66), (0x20ad, 0xcd67),
    (0x20ae, 0xcd68), (0x20af, 0xcd69), (0x20b0, 0xcd6a), (0x20b1, 0xcd6b), (0x20b2, 0xcd6e), (0x20b3, 0xcd70),
    (0x20b4, 0xcd72), (0x20b5, 0xcd73), (0x20b6, 0xcd74), (0x20b7, 0xcd75), (0x20b8, 0xcd76), (0x20b9, 0xcd77),
    (0x20ba, 0xcd79), (0x20bb, 0xcd7a), (0x20bc, 0xcd7b), (0x20bd, 0xcd7c), (0x20be, 0xcd7d), (0x20bf, 0xcd7e),
    (0x20c0, 0xcd7f), (0x20c1, 0xcd80), (0x20c8, 0xcd81), (0x20c9, 0xcd82), (0x20ca, 0xcd83), (0x20cb, 0xcd84),
    (0x20cc, 0xcd85), (0x20cd, 0xcd86), (0x20ce, 0xcd87), (0x20cf, 0xcd89), (0x20d0, 0xcd8a), (0x20d1, 0xcd8b),
    (0x20d2, 0xcd8c), (0x20d3, 0xcd8d), (0x20d4, 0xcd8e), (0x20d5, 0xcd8f), (0x20d6, 0xcd90), (0x20d7, 0xcd91),
    (0x20d8, 0xcd92), (0x20d9, 0xcd93), (0x20da, 0xcd96), (0x20db, 0xcd97), (0x20dc, 0xcd99), (0x20dd, 0xcd9a),
    (0x20de, 0xcd9b), (0x20df, 0xcd9d), (0x20e0, 0xcd9e), (0x20e1, 0xcd9f), (0x20e8, 0xcda0), (0x20e9, 0xcda1),
    (0x20ea, 0xcda2), (0x20eb, 0xcda3), (0x20ec, 0xcda6), (0x20ed, 0xcda8), (0x20ee, 0xcdaa), (0x20ef, 0xcdab),
    (0x20f0, 0xcdac), (0x20f1, 0xcdad), (0x20f2, 0xcdae), (0x20f3, 0xcdaf), (0x20f4, 0xcdb1), (0x20f5, 0xcdb2),
    (0x20f6, 0xcdb3), (0x20f7, 0xcdb4), (0x20f8, 0xcdb5), (0x20f9, 0xcdb6), (0x20fa, 0xcdb7), (0x20fb, 0xcdb8),
    (0x20fc, 0xcdb9), (0x20fd, 0xcdba), (0x20fe, 0xcdbb), (0x20ff, 0xcdbc), (0x2100, 0xcdbd), (0x2101, 0xcdbe),
    (0x2102, 0xcdbf), (0x2103, 0xcdc0), (0x2104, 0xcdc1), (0x2105, 0xcdc2), (0x2106, 0xcdc3), (0x2107, 0xcdc5),
    (0x2166, 0xcdc6), (0x2167, 0xcdc7), (0x2168, 0xcdc8), (0x2169, 0xcdc9), (0x216a, 0xcdca), (0x216b, 0xcdcb),
    (0x216c, 0xcdcd), (0x216d, 0xcdce), (0x216e, 0xcdcf), (0x216f, 0xcdd1), (0x2170, 0xcdd2), (0x2171, 0xcdd3),
    (0x2172, 0xcdd4), (0x2173, 0xcdd5), (0x2174, 0xcdd6), (0x2175, 0xcdd7), (0x2176, 0xcdd8), (0x2177, 0xcdd9),
    (0x2178, 0xcdda), (0x2179, 0xcddb), (0x217a, 0xcddc), (0x217b, 0xcddd), (0x217c, 0xcdde), (0x217d, 0xcddf),
    (0x217e, 0xcde0), (0x217f, 0xcde1), (0x2186, 0xcde2), (0x2187, 0xcde3), (0x2188, 0xcde4), (0x2189, 0xcde5),
    (0x218a, 0xcde6), (0x218b, 0xcde7), (0x218c, 0xcde9), (0x218d, 0xcdea), (0x218e, 0xcdeb), (0x218f, 0xcded),
    (0x2190, 0xcdee), (0x2191, 0xcdef), (0x2192, 0xcdf1), (0x2193, 0xcdf2), (0x2194, 0xcdf3), (0x2195, 0xcdf4),
    (0x2196, 0xcdf5), (0x2197, 0xcdf6), (0x2198, 0xcdf7), (0x2199, 0xcdfa), (0x219a, 0xcdfc), (0x219b, 0xcdfe),
    (0x219c, 0xcdff), (0x219d, 0xce00), (0x219e, 0xce01), (0x219f, 0xce02), (0x21a6, 0xce03), (0x21a7, 0xce05),
    (0x21a8, 0xce06), (0x21a9, 0xce07), (0x21aa, 0xce09), (0x21ab, 0xce0a), (0x21ac, 0xce0b), (0x21ad, 0xce0d),
    (0x21ae, 0xce0e), (0x21af, 0xce0f), (0x21b0, 0xce10), (0x21b1, 0xce11), (0x21b2, 0xce12), (0x21b3, 0xce13),
    (0x21b4, 0xce15), (0x21b5, 0xce16), (0x21b6, 0xce17), (0x21b7, 0xce18), (0x21b8, 0xce1a), (0x21b9, 0xce1b),
    (0x21ba, 0xce1c), (0x21bb, 0xce1d), (0x21bc, 0xce1e), (0x21bd, 0xce1f), (0x21be, 0xce22), (0x21bf, 0xce23),
    (0x21c0, 0xce25), (0x21c1, 0xce26), (0x21c2, 0xce27), (0x21c3, 0xce29), (0x21c4, 0xce2a), (0x21c5, 0xce2b),
    (0x2224, 0xce2c), (0x2225, 0xce2d), (0x2226, 0xce2e), (0x2227, 0xce2f), (0x2228, 0xce32), (0x2229, 0xce34),
    (0x222a, 0xce36), (0x222b, 0xce37), (0x222c, 0xce38), (0x222d, 0xce39), (0x222e, 0xce3a), (0x222f, 0xce3b),
    (0x2230, 0xce3c), (0x2231, 0xce3d), (0x2232, 0xce3e), (0x2233, 0xce3f), (0x2234, 0xce40), (0x2235, 0xce41),
    (0x2236, 0xce42), (0x2237, 0xce43), (0x2238, 0xce44), (0x2239, 0xce45), (0x223a, 0xce46), (0x223b, 0xce47),
    (0x223c, 0xce48), (0x223d, 0xce49), (0x2244, 0xce4a), (0x2245, 0xce4b), (0x2246, 0xce4c), (0x2247, 0xce4d),
    (0x2248, 0xce4e), (0x2249, 0xce4f), (0x224a, 0xce50), (0x224b, 0xce51), (0x224c, 0xce52), (0x224d, 0xce53),
    (0x224e, 0xce54), (0x224f, 0xce55), (0x2250, 0xce56), (0x2251, 0xce57), (0x2252, 0xce5a), (0x2253, 0xce5b),
    (0x2254, 0xce5d), (0x2255, 0xce5e), (0x2256, 0xce62), (0x2257, 0xce63), (0x2258, 0xce64), (0x2259, 0xce65),
    (0x225a, 0xce66), (0x225b, 0xce67), (0x225c, 0xce6a), (0x225d, 0xce6c), (0x2264, 0xce6e), (0x2265, 0xce6f),
    (0x2266, 0xce70), (0x2267, 0xce71), (0x2268, 0xce72), (0x2269, 0xce73), (0x226a, 0xce76), (0x226b, 0xce77),
    (0x226c, 0xce79), (0x226d, 0xce7a), (0x226e, 0xce7b), (0x226f, 0xce7d), (0x2270, 0xce7e), (0x2271, 0xce7f),
    (0x2272, 0xce80), (0x2273, 0xce81), (0x2274, 0xce82), (0x2275, 0xce83), (0x2276, 0xce86), (0x2277, 0xce88),
    (0x2278, 0xce8a), (0x2279, 0xce8b), (0x227a, 0xce8c), (0x227b, 0xce8d), (0x227c, 0xce8e), (0x227d, 0xce8f),
    (0x227e, 0xce92), (0x227f, 0xce93), (0x2280, 0xce95), (0x2281, 0xce96), (0x2282, 0xce97), (0x2283, 0xce99),
    (0x22e2, 0xce9a), (0x22e3, 0xce9b), (0x22e4, 0xce9c), (0x22e5, 0xce9d), (0x22e6, 0xce9e), (0x22e7, 0xce9f),
    (0x22e8, 0xcea2), (0x22e9, 0xcea6), (0x22ea, 0xcea7), (0x22eb, 0xcea8), (0x22ec, 0xcea9), (0x22ed, 0xceaa),
    (0x22ee, 0xceab), (0x22ef, 0xceae), (0x22f0, 0xceaf), (0x22f1, 0xceb0), (0x22f2, 0xceb1), (0x22f3, 0xceb2),
    (0x22f4, 0xceb3), (0x22f5, 0xceb4), (0x22f6, 0xceb5), (0x22f7, 0xceb6), (0x22f8, 0xceb7), (0x22f9, 0xceb8),
    (0x22fa, 0xceb9), (0x22fb, 0xceba), (0x2302, 0xcebb), (0x2303, 0xcebc), (0x2304, 0xcebd), (0x2305, 0xcebe),
    (0x2306, 0xcebf), (0x2307, 0xcec0), (0x2308, 0xcec2), (0x2309, 0xcec3), (0x230a, 0xcec4), (0x230b, 0xcec5),
    (0x230c, 0xcec6), (0x230d, 0xcec7), (0x230e, 0xcec8), (0x230f, 0xcec9), (0x2310, 0xceca), (0x2311, 0xcecb),
    (0x2312, 0xcecc), (0x2313, 0xcecd), (0x2314, 0xcece), (0x2315, 0xcecf), (0x2316, 0xced0), (0x2317, 0xced1),
    (0x2318, 0xced2), (0x2319, 0xced3), (0x231a, 0xced4), (0x231b, 0xced5), (0x2322, 0xced6), (0x2323, 0xced7),
    (0x2324, 0xced8), (0x2325, 0xced9), (0x2326, 0xceda), (0x2327, 0xcedb), (0x2328, 0xcedc), (0x2329, 0xcedd),
    (0x232a, 0xcede), (0x232b, 0xcedf), (0x232c, 0xcee0), (0x232d, 0xcee1), (0x232e, 0xcee2), (0x232f, 0xcee3),
    (0x2330, 0xcee6), (0x2331, 0xcee7), (0x2332, 0xcee9), (0x2333, 0xceea), (0x2334, 0xceed), (0x2335, 0xceee),
    (0x2336, 0xceef), (0x2337, 0xcef0), (0x2338, 0xcef1), (0x2339, 0xcef2), (0x233a, 0xcef3), (0x233b, 0xcef6),
    (0x233c, 0xcefa), (0x233d, 0xcefb), (0x233e, 0xcefc), (0x233f, 0xcefd), (0x2340, 0xcefe), (0x2341, 0xceff),
    (0x2342, 0xac00), (0x2343, 0xac01), (0x2344, 0xac04), (0x2345, 0xac07), (0x2346, 0xac08), (0x2347, 0xac09),
    (0x2348, 0xac0a), (0x2349, 0xac10), (0x234a, 0xac11), (0x234b, 0xac12), (0x234c, 0xac13), (0x234d, 0xac14),
    (0x234e, 0xac15), (0x234f, 0xac16), (0x2350, 0xac17), (0x2351, 0xac19), (0x2352, 0xac1a), (0x2353, 0xac1b),
    (0x2354, 0xac1c), (0x2355, 0xac1d), (0x2356, 0xac20), (0x2357, 0xac24), (0x2358, 0xac2c), (0x2359, 0xac2d),
    (0x235a, 0xac2f), (0x235b, 0xac30), (0x235c, 0xac31), (0x235d, 0xac38), (0x235e, 0xac39), (0x235f, 0xac3c),
    (0x2360, 0xac40), (0x2361, 0xac4b), (0x2362, 0xac4d), (0x2363, 0xac54), (0x2364, 0xac58), (0x2365, 0xac5c),
    (0x2366, 0xac70), (0x2367, 0xac71), (0x2368, 0xac74), (0x2369, 0xac77), (0x236a, 0xac78), (0x236b, 0xac7a),
    (0x236c, 0xac80), (0x236d, 0xac81), (0x236e, 0xac83), (0x236f, 0xac84), (0x2370, 0xac85), (0x2371, 0xac86),
    (0x2372, 0xac89), (0x2373, 0xac8a), (0x2374, 0xac8b), (0x2375, 0xac8c), (0x2376, 0xac90), (0x2377, 0xac94),
    (0x2378, 0xac9c), (0x2379, 0xac9d), (0x237a, 0xac9f), (0x237b, 0xaca0), (0x237c, 0xaca1), (0x237d, 0xaca8),
    (0x237e, 0xaca9), (0x237f, 0xacaa), (0x2380, 0xacac), (0x2381, 0xacaf), (0x2382, 0xacb0), (0x2383, 0xacb8),
    (0x2384, 0xacb9), (0x2385, 0xacbb), (0x2386, 0xacbc), (0x2387, 0xacbd), (0x2388, 0xacc1), (0x2389, 0xacc4),
    (0x238a, 0xacc8), (0x238b, 0xaccc), (0x238c, 0xacd5), (0x238d, 0xacd7), (0x238e, 0xace0), (0x238f, 0xace1),
    (0x2390, 0xace4), (0x2391, 0xace7), (0x2392, 0xace8), (0x2393, 0xacea), (0x2394, 0xacec), (0x2395, 0xacef),
    (0x2396, 0xacf0), (0x2397, 0xacf1), (0x2398, 0xacf3), (0x2399, 0xacf5), (0x239a, 0xacf6), (0x239b, 0xacfc),
    (0x239c, 0xacfd), (0x239d, 0xad00), (0x239e, 0xad04), (0x239f, 0xad06), (0x23a0, 0xcf02), (0x23a1, 0xcf03),
    (0x23a2, 0xcf05), (0x23a3, 0xcf06), (0x23a4, 0xcf07), (0x23a5, 0xcf09), (0x23a6, 0xcf0a), (0x23a7, 0xcf0b),
    (0x23a8, 0xcf0c), (0x23a9, 0xcf0d), (0x23aa, 0xcf0e), (0x23ab, 0xcf0f), (0x23ac, 0xcf12), (0x23ad, 0xcf14),
    (0x23ae, 0xcf16), (0x23af, 0xcf17), (0x23b0, 0xcf18), (0x23b1, 0xcf19), (0x23b2, 0xcf1a), (0x23b3, 0xcf1b),
    (0x23b4, 0xcf1d), (0x23b5, 0xcf1e), (0x23b6, 0xcf1f), (0x23b7, 0xcf21), (0x23b8, 0xcf22), (0x23b9, 0xcf23),
    (0x23c0, 0xcf25), (0x23c1, 0xcf26), (0x23c2, 0xcf27), (0x23c3, 0xcf28), (0x23c4, 0xcf29), (0x23c5, 0xcf2a),
    (0x23c6, 0xcf2b), (0x23c7, 0xcf2e), (0x23c8, 0xcf32), (0x23c9, 0xcf33), (0x23ca, 0xcf34), (0x23cb, 0xcf35),
    (0x23cc, 0xcf36), (0x23cd, 0xcf37), (0x23ce, 0xcf39), (0x23cf, 0xcf3a), (0x23d0, 0xcf3b), (0x23d1, 0xcf3c),
    (0x23d2, 0xcf3d), (0x23d3, 0xcf3e), (0x23d4, 0xcf3f), (0x23d5, 0xcf40), (0x23d6, 0xcf41), (0x23d7, 0xcf42),
    (0x23d8, 0xcf43), (0x23d9, 0xcf44), (0x23e0, 0xcf45), (0x23e1, 0xcf46), (0x23e2, 0xcf47), (0x23e3, 0xcf48),
    (0x23e4, 0xcf49), (0x23e5, 0xcf4a), (0x23e6, 0xcf4b), (0x23e7, 0xcf4c), (0x23e8, 0xcf4d), (0x23e9, 0xcf4e),
    (0x23ea, 0xcf4f), (0x23eb, 0xcf50), (0x23ec, 0xcf51), (0x23ed, 0xcf52), (0x23ee, 0xcf53), (0x23ef, 0xcf56),
    (0x23f0, 0xcf57), (0x23f1, 0xcf59), (0x23f2, 0xcf5a), (0x23f3, 0xcf5b), (0x23f4, 0xcf5d), (0x23f5, 0xcf5e),
    (0x23f6, 0xcf5f), (0x23f7, 0xcf60), (0x23f8, 0xcf61), (0x23f9, 0xcf62), (0x23fa, 0xcf63), (0x23fb, 0xcf66),
    (0x23fc, 0xcf68), (0x23fd, 0xcf6a), (0x23fe, 0xcf6b), (0x23ff, 0xcf6c), (0x2400, 0xad0c), (0x2401, 0xad0d),
    (0x2402, 0xad0f), (0x2403, 0xad11), (0x2404, 0xad18), (0x2405, 0xad1c), (0x2406, 0xad20), (0x2407, 0xad29),
    (0x2408, 0xad2c), (0x2409, 0xad2d), (0x240a, 0xad34), (0x240b, 0xad35), (0x240c, 0xad38), (0x240d, 0xad3c),
    (0x240e, 0xad44), (0x240f, 0xad45), (0x2410, 0xad47), (0x2411, 0xad49), (0x2412, 0xad50), (0x2413, 0xad54),
    (0x2414, 0xad58), (0x2415, 0xad61), (0x2416, 0xad63), (0x2417, 0xad6c), (0x2418, 0xad6d), (0x2419, 0xad70),
    (0x241a, 0xad73), (0x241b, 0xad74), (0x241c, 0xad75), (0x241d, 0xad76), (0x241e, 0xad7b), (0x241f, 0xad7c),
    (0x2420, 0xad7d), (0x2421, 0xad7f), (0x2422, 0xad81), (0x2423, 0xad82), (0x2424, 0xad88), (0x2425, 0xad89),
    (0x2426, 0xad8c), (0x2427, 0xad90), (0x2428, 0xad9c), (0x2429, 0xad9d), (0x242a, 0xada4), (0x242b, 0xadb7),
    (0x242c, 0xadc0), (0x242d, 0xadc1), (0x242e, 0xadc4), (0x242f, 0xadc8), (0x2430, 0xadd0), (0x2431, 0xadd1),
    (0x2432, 0xadd3), (0x2433, 0xaddc), (0x2434, 0xade0), (0x2435, 0xade4), (0x2436, 0xadf8), (0x2437, 0xadf9),
    (0x2438, 0xadfc), (0x2439, 0xadff), (0x243a, 0xae00), (0x243b, 0xae01), (0x243c, 0xae08), (0x243d, 0xae09),
    (0x243e, 0xae0b), (0x243f, 0xae0d), (0x2440, 0xae14), (0x2441, 0xae30), (0x2442, 0xae31), (0x2443, 0xae34),
    (0x2444, 0xae37), (0x2445, 0xae38), (0x2446, 0xae3a), (0x2447, 0xae40), (0x2448, 0xae41), (0x2449, 0xae43),
    (0x244a, 0xae45), (0x244b, 0xae46), (0x244c, 0xae4a), (0x244d, 0xae4c), (0x244e, 0xae4d), (0x244f, 0xae4e),
    (0x2450, 0xae50), (0x2451, 0xae54), (0x2452, 0xae56), (0x2453, 0xae5c), (0x2454, 0xae5d), (0x2455, 0xae5f),
    (0x2456, 0xae60), (0x2457, 0xae61), (0x2458, 0xae65), (0x2459, 0xae68), (0x245a, 0xae69), (0x245b, 0xae6c),
    (0x245c, 0xae70), (0x245d, 0xae78), (0x245e, 0xcf6d), (0x245f, 0xcf6e), (0x2460, 0xcf6f), (0x2461, 0xcf72),
    (0x2462, 0xcf73), (0x2463, 0xcf75), (0x2464, 0xcf76), (0x2465, 0xcf77), (0x2466, 0xcf79), (0x2467, 0xcf7a),
    (0x2468, 0xcf7b), (0x2469, 0xcf7c), (0x246a, 0xcf7d), (0x246b, 0xcf7e), (0x246c, 0xcf7f), (0x246d, 0xcf81),
    (0x246e, 0xcf82), (0x246f, 0xcf83), (0x2470, 0xcf84), (0x2471, 0xcf86), (0x2472, 0xcf87), (0x2473, 0xcf88),
    (0x2474, 0xcf89), (0x2475, 0xcf8a), (0x2476, 0xcf8b), (0x2477, 0xcf8d), (0x247e, 0xcf8e), (0x247f, 0xcf8f),
    (0x2480, 0xcf90), (0x2481, 0xcf91), (0x2482, 0xcf92), (0x2483, 0xcf93), (0x2484, 0xcf94), (0x2485, 0xcf95),
    (0x2486, 0xcf96), (0x2487, 0xcf97), (0x2488, 0xcf98), (0x2489, 0xcf99), (0x248a, 0xcf9a), (0x248b, 0xcf9b),
    (0x248c, 0xcf9c), (0x248d, 0xcf9d), (0x248e, 0xcf9e), (0x248f, 0xcf9f), (0x2490, 0xcfa0), (0x2491, 0xcfa2),
    (0x2492, 0xcfa3), (0x2493, 0xcfa4), (0x2494, 0xcfa5), (0x2495, 0xcfa6), (0x2496, 0xcfa7), (0x2497, 0xcfa9),
    (0x249e, 0xcfaa), (0x249f, 0xcfab), (0x24a0, 0xcfac), (0x24a1, 0xcfad), (0x24a2, 0xcfae), (0x24a3, 0xcfaf),
    (0x24a4, 0xcfb1), (0x24a5, 0xcfb2), (0x24a6, 0xcfb3), (0x24a7, 0xcfb4), (0x24a8, 0xcfb5), (0x24a9, 0xcfb6),
    (0x24aa, 0xcfb7), (0x24ab, 0xcfb8), (0x24ac, 0xcfb9), (0x24ad, 0xcfba), (0x24ae, 0xcfbb), (0x24af, 0xcfbc),
    (0x24b0, 0xcfbd), (0x24b1, 0xcfbe), (0x24b2, 0xcfbf), (0x24b3, 0xcfc0), (0x24b4, 0xcfc1), (0x24b5, 0xcfc2),
    (0x24b6, 0xcfc3), (0x24b7, 0xcfc5), (0x24b8, 0xcfc6), (0x24b9, 0xcfc7), (0x24ba, 0xcfc8), (0x24bb, 0xcfc9),
    (0x24bc, 0xcfca), (0x24bd, 0xcfcb), (0x24be, 0xae79), (0x24bf, 0xae7b), (0x24c0, 0xae7c), (0x24c1, 0xae7d),
    (0x24c2, 0xae84), (0x24c3, 0xae85), (0x24c4, 0xae8c), (0x24c5, 0xaebc), (0x24c6, 0xaebd), (0x24c7, 0xaebe),
    (0x24c8, 0xaec0), (0x24c9, 0xaec4), (0x24ca, 0xaecc), (0x24cb, 0xaecd), (0x24cc, 0xaecf), (0x24cd, 0xaed0),
    (0x24ce, 0xaed1), (0x24cf, 0xaed8), (0x24d0, 0xaed9), (0x24d1, 0xaedc), (0x24d2, 0xaee8), (0x24d3, 0xaeeb),
    (0x24d4, 0xaeed), (0x24d5, 0xaef4), (0x24d6, 0xaef8), (0x24d7, 0xaefc), (0x24d8, 0xaf07), (0x24d9, 0xaf08),
    (0x24da, 0xaf0d), (0x24db, 0xaf10), (0x24dc, 0xaf2c), (0x24dd, 0xaf2d), (0x24de, 0xaf30), (0x24df, 0xaf32),
    (0x24e0, 0xaf34), (0x24e1, 0xaf3c), (0x24e2, 0xaf3d), (0x24e3, 0xaf3f), (0x24e4, 0xaf41), (0x24e5, 0xaf42),
    (0x24e6, 0xaf43), (0x24e7, 0xaf48), (0x24e8, 0xaf49), (0x24e9, 0xaf50), (0x24ea, 0xaf5c), (0x24eb, 0xaf5d),
    (0x24ec, 0xaf64), (0x24ed, 0xaf65), (0x24ee, 0xaf79), (0x24ef, 0xaf80), (0x24f0, 0xaf84), (0x24f1, 0xaf88),
    (0x24f2, 0xaf90), (0x24f3, 0xaf91), (0x24f4, 0xaf95), (0x24f5, 0xaf9c), (0x24f6, 0xafb8), (0x24f7, 0xafb9),
    (0x24f8, 0xafbc), (0x24f9, 0xafc0), (0x24fa, 0xafc7), (0x24fb, 0xafc8), (0x24fc, 0xafc9), (0x24fd, 0xafcb),
    (0x24fe, 0xafcd), (0x24ff, 0xafce), (0x2500, 0xafd4), (0x2501, 0xafdc), (0x2502, 0xafe8), (0x2503, 0xafe9),
    (0x2504, 0xaff0), (0x2505, 0xaff1), (0x2506, 0xaff4), (0x2507, 0xaff8), (0x2508, 0xb000), (0x2509, 0xb001),
    (0x250a, 0xb004), (0x250b, 0xb00c), (0x250c, 0xb010), (0x250d, 0xb014), (0x250e, 0xb01c), (0x250f, 0xb01d),
    (0x2510, 0xb028), (0x2511, 0xb044), (0x2512, 0xb045), (0x2513, 0xb048), (0x2514, 0xb04a), (0x2515, 0xb04c),
    (0x2516, 0xb04e), (0x2517, 0xb053), (0x2518, 0xb054), (0x2519, 0xb055), (0x251a, 0xb057), (0x251b, 0xb059),
    (0x251c, 0xcfcc), (0x251d, 0xcfcd), (0x251e, 0xcfce), (0x251f, 0xcfcf), (0x2520, 0xcfd0), (0x2521, 0xcfd1),
    (0x2522, 0xcfd2), (0x2523, 0xcfd3), (0x2524, 0xcfd4), (0x2525, 0xcfd5), (0x2526, 0xcfd6), (0x2527, 0xcfd7),
    (0x2528, 0xcfd8), (0x2529, 0xcfd9), (0x252a, 0xcfda), (0x252b, 0xcfdb), (0x252c, 0xcfdc), (0x252d, 0xcfdd),
    (0x252e, 0xcfde), (0x252f, 0xcfdf), (0x2530, 0xcfe2), (0x2531, 0xcfe3), (0x2532, 0xcfe5), (0x2533, 0xcfe6),
    (0x2534, 0xcfe7), (0x2535, 0xcfe9), (0x253c, 0xcfea), (0x253d, 0xcfeb), (0x253e, 0xcfec), (0x253f, 0xcfed),
    (0x2540, 0xcfee), (0x2541, 0xcfef), (0x2542, 0xcff2), (0x2543, 0xcff4), (0x2544, 0xcff6), (0x2545, 0xcff7),
    (0x2546, 0xcff8), (0x2547, 0xcff9), (0x2548, 0xcffa), (0x2549, 0xcffb), (0x254a, 0xcffd), (0x254b, 0xcffe),
    (0x254c, 0xcfff), (0x254d, 0xd001), (0x254e, 0xd002), (0x254f, 0xd003), (0x2550, 0xd005), (0x2551, 0xd006),
    (0x2552, 0xd007), (0x2553, 0xd008), (0x2554, 0xd009), (0x2555, 0xd00a), (0x255c, 0xd00b), (0x255d, 0xd00c),
    (0x255e, 0xd00d), (0x255f, 0xd00e), (0x2560, 0xd00f), (0x2561, 0xd010), (0x2562, 0xd012), (0x2563, 0xd013),
    (0x2564, 0xd014), (0x2565, 0xd015), (0x2566, 0xd016), (0x2567, 0xd017), (0x2568, 0xd019), (0x2569, 0xd01a),
    (0x256a, 0xd01b), (0x256b, 0xd01c), (0x256c, 0xd01d), (0x256d, 0xd01e), (0x256e, 0xd01f), (0x256f, 0xd020),
    (0x2570, 0xd021), (0x2571, 0xd022), (0x2572, 0xd023), (0x2573, 0xd024), (0x2574, 0xd025), (0x2575, 0xd026),
    (0x2576, 0xd027), (0x2577, 0xd028), (0x2578, 0xd029), (0x2579, 0xd02a), (0x257a, 0xd02b), (0x257b, 0xd02c),
    (0x257c, 0xb05d), (0x257d, 0xb07c), (0x257e, 0xb07d), (0x257f, 0xb080), (0x2580, 0xb084), (0x2581, 0xb08c),
    (0x2582, 0xb08d), (0x2583, 0xb08f), (0x2584, 0xb091), (0x2585, 0xb098), (0x2586, 0xb099), (0x2587, 0xb09a),
    (0x2588, 0xb09c), (0x2589, 0xb09f), (0x258a, 0xb0a0), (0x258b, 0xb0a1), (0x258c, 0xb0a2), (0x258d, 0xb0a8),
    (0x258e, 0xb0a9), (0x258f, 0xb0ab), (0x2590, 0xb0ac), (0x2591, 0xb0ad), (0x2592, 0xb0ae), (0x2593, 0xb0af),
    (0x2594, 0xb0b1), (0x2595, 0xb0b3), (0x2596, 0xb0b4), (0x2597, 0xb0b5), (0x2598, 0xb0b8), (0x2599, 0xb0bc),
    (0x259a, 0xb0c4), (0x259b, 0xb0c5), (0x259c, 0xb0c7), (0x259d, 0xb0c8), (0x259e, 0xb0c9), (0x259f, 0xb0d0),
    (0x25a0, 0xb0d1), (0x25a1, 0xb0d4), (0x25a2, 0xb0d8), (0x25a3, 0xb0e0), (0x25a4, 0xb0e5), (0x25a5, 0xb108),
    (0x25a6, 0xb109), (0x25a7, 0xb10b), (0x25a8, 0xb10c), (0x25a9, 0xb110), (0x25aa, 0xb112), (0x25ab, 0xb113),
    (0x25ac, 0xb118), (0x25ad, 0xb119), (0x25ae, 0xb11b), (0x25af, 0xb11c), (0x25b0, 0xb11d), (0x25b1, 0xb123),
    (0x25b2, 0xb124), (0x25b3, 0xb125), (0x25b4, 0xb128), (0x25b5, 0xb12c), (0x25b6, 0xb134), (0x25b7, 0xb135),
    (0x25b8, 0xb137), (0x25b9, 0xb138), (0x25ba, 0xb139), (0x25bb, 0xb140), (0x25bc, 0xb141), (0x25bd, 0xb144),
    (0x25be, 0xb148), (0x25bf, 0xb150), (0x25c0, 0xb151), (0x25c1, 0xb154), (0x25c2, 0xb155), (0x25c3, 0xb158),
    (0x25c4, 0xb15c), (0x25c5, 0xb160), (0x25c6, 0xb178), (0x25c7, 0xb179), (0x25c8, 0xb17c), (0x25c9, 0xb180),
    (0x25ca, 0xb182), (0x25cb, 0xb188), (0x25cc, 0xb189), (0x25cd, 0xb18b), (0x25ce, 0xb18d), (0x25cf, 0xb192),
    (0x25d0, 0xb193), (0x25d1, 0xb194), (0x25d2, 0xb198), (0x25d3, 0xb19c), (0x25d4, 0xb1a8), (0x25d5, 0xb1cc),
    (0x25d6, 0xb1d0), (0x25d7, 0xb1d4), (0x25d8, 0xb1dc), (0x25d9, 0xb1dd), (0x25da, 0xd02e), (0x25db, 0xd02f),
    (0x25dc, 0xd030), (0x25dd, 0xd031), (0x25de, 0xd032), (0x25df, 0xd033), (0x25e0, 0xd036), (0x25e1, 0xd037),
    (0x25e2, 0xd039), (0x25e3, 0xd03a), (0x25e4, 0xd03b), (0x25e5, 0xd03d), (0x25e6, 0xd03e), (0x25e7, 0xd03f),
    (0x25e8, 0xd040), (0x25e9, 0xd041), (0x25ea, 0xd042), (0x25eb, 0xd043), (0x25ec, 0xd046), (0x25ed, 0xd048),
    (0x25ee, 0xd04a), (0x25ef, 0xd04b), (0x25f0, 0xd04c), (0x25f1, 0xd04d), (0x25f2, 0xd04e), (0x25f3, 0xd04f),
    (0x25fa, 0xd051), (0x25fb, 0xd052), (0x25fc, 0xd053), (0x25fd, 0xd055), (0x25fe, 0xd056), (0x25ff, 0xd057),
    (0x2600, 0xd059), (0x2601, 0xd05a), (0x2602, 0xd05b), (0x2603, 0xd05c), (0x2604, 0xd05d), (0x2605, 0xd05e),
    (0x2606, 0xd05f), (0x2607, 0xd061), (0x2608, 0xd062), (0x2609, 0xd063), (0x260a, 0xd064), (0x260b, 0xd065),
    (0x260c, 0xd066), (0x260d, 0xd067), (0x260e, 0xd068), (0x260f, 0xd069), (0x2610, 0xd06a), (0x2611, 0xd06b),
    (0x2612, 0xd06e), (0x2613, 0xd06f), (0x261a, 0xd071), (0x261b, 0xd072), (0x261c, 0xd073), (0x261d, 0xd075),
    (0x261e, 0xd076), (0x261f, 0xd077), (0x2620, 0xd078), (0x2621, 0xd079), (0x2622, 0xd07a), (0x2623, 0xd07b),
    (0x2624, 0xd07e), (0x2625, 0xd07f), (0x2626, 0xd080), (0x2627, 0xd082), (0x2628, 0xd083), (0x2629, 0xd084),
    (0x262a, 0xd085), (0x262b, 0xd086), (0x262c, 0xd087), (0x262d, 0xd088), (0x262e, 0xd089), (0x262f, 0xd08a),
    (0x2630, 0xd08b), (0x2631, 0xd08c), (0x2632, 0xd08d), (0x2633, 0xd08e), (0x2634, 0xd08f), (0x2635, 0xd090),
    (0x2636, 0xd091), (0x2637, 0xd092), (0x2638, 0xd093), (0x2639, 0xd094), (0x263a, 0xb1df), (0x263b, 0xb1e8),
    (0x263c, 0xb1e9), (0x263d, 0xb1ec), (0x263e, 0xb1f0), (0x263f, 0xb1f9), (0x2640, 0xb1fb), (0x2641, 0xb1fd),
    (0x2642, 0xb204), (0x2643, 0xb205), (0x2644, 0xb208), (0x2645, 0xb20b), (0x2646, 0xb20c), (0x2647, 0xb214),
    (0x2648, 0xb215), (0x2649, 0xb217), (0x264a, 0xb219), (0x264b, 0xb220), (0x264c, 0xb234), (0x264d, 0xb23c),
    (0x264e, 0xb258), (0x264f, 0xb25c), (0x2650, 0xb260), (0x2651, 0xb268), (0x2652, 0xb269), (0x2653, 0xb274),
    (0x2654, 0xb275), (0x2655, 0xb27c), (0x2656, 0xb284), (0x2657, 0xb285), (0x2658, 0xb289), (0x2659, 0xb290),
    (0x265a, 0xb291), (0x265b, 0xb294), (0x265c, 0xb298), (0x265d, 0xb299), (0x265e, 0xb29a), (0x265f, 0xb2a0),
    (0x2660, 0xb2a1), (0x2661, 0xb2a3), (0x2662, 0xb2a5), (0x2663, 0xb2a6), (0x2664, 0xb2aa), (0x2665, 0xb2ac),
    (0x2666, 0xb2b0), (0x2667, 0xb2b4), (0x2668, 0xb2c8), (0x2669, 0xb2c9), (0x266a, 0xb2cc), (0x266b, 0xb2d0),
    (0x266c, 0xb2d2), (0x266d, 0xb2d8), (0x266e, 0xb2d9), (0x266f, 0xb2db), (0x2670, 0xb2dd), (0x2671, 0xb2e2),
    (0x2672, 0xb2e4), (0x2673, 0xb2e5), (0x2674, 0xb2e6), (0x2675, 0xb2e8), (0x2676, 0xb2eb), (0x2677, 0xb2ec),
    (0x2678, 0xb2ed), (0x2679, 0xb2ee), (0x267a, 0xb2ef), (0x267b, 0xb2f3), (0x267c, 0xb2f4), (0x267d, 0xb2f5),
    (0x267e, 0xb2f7), (0x267f, 0xb2f8), (0x2680, 0xb2f9), (0x2681, 0xb2fa), (0x2682, 0xb2fb), (0x2683, 0xb2ff),
    (0x2684, 0xb300), (0x2685, 0xb301), (0x2686, 0xb304), (0x2687, 0xb308), (0x2688, 0xb310), (0x2689, 0xb311),
    (0x268a, 0xb313), (0x268b, 0xb314), (0x268c, 0xb315), (0x268d, 0xb31c), (0x268e, 0xb354), (0x268f, 0xb355),
    (0x2690, 0xb356), (0x2691, 0xb358), (0x2692, 0xb35b), (0x2693, 0xb35c), (0x2694, 0xb35e), (0x2695, 0xb35f),
    (0x2696, 0xb364), (0x2697, 0xb365), (0x2698, 0xd095), (0x2699, 0xd096), (0x269a, 0xd097), (0x269b, 0xd098),
    (0x269c, 0xd099), (0x269d, 0xd09a), (0x269e, 0xd09b), (0x269f, 0xd09c), (0x26a0, 0xd09d), (0x26a1, 0xd09e),
    (0x26a2, 0xd09f), (0x26a3, 0xd0a0), (0x26a4, 0xd0a1), (0x26a5, 0xd0a2), (0x26a6, 0xd0a3), (0x26a7, 0xd0a6),
    (0x26a8, 0xd0a7), (0x26a9, 0xd0a9), (0x26aa, 0xd0aa), (0x26ab, 0xd0ab), (0x26ac, 0xd0ad), (0x26ad, 0xd0ae),
    (0x26ae, 0xd0af), (0x26af, 0xd0b0), (0x26b0, 0xd0b1), (0x26b1, 0xd0b2), (0x26b8, 0xd0b3), (0x26b9, 0xd0b6),
    (0x26ba, 0xd0b8), (0x26bb, 0xd0ba), (0x26bc, 0xd0bb), (0x26bd, 0xd0bc), (0x26be, 0xd0bd), (0x26bf, 0xd0be),
    (0x26c0, 0xd0bf), (0x26c1, 0xd0c2), (0x26c2, 0xd0c3), (0x26c3, 0xd0c5), (0x26c4, 0xd0c6), (0x26c5, 0xd0c7),
    (0x26c6, 0xd0ca), (0x26c7, 0xd0cb), (0x26c8, 0xd0cc), (0x26c9, 0xd0cd), (0x26ca, 0xd0ce), (0x26cb, 0xd0cf),
    (0x26cc, 0xd0d2), (0x26cd, 0xd0d6), (0x26ce, 0xd0d7), (0x26cf, 0xd0d8), (0x26d0, 0xd0d9), (0x26d1, 0xd0da),
    (0x26d8, 0xd0db), (0x26d9, 0xd0de), (0x26da, 0xd0df), (0x26db, 0xd0e1), (0x26dc, 0xd0e2), (0x26dd, 0xd0e3),
    (0x26de, 0xd0e5), (0x26df, 0xd0e6), (0x26e0, 0xd0e7), (0x26e1, 0xd0e8), (0x26e2, 0xd0e9), (0x26e3, 0xd0ea),
    (0x26e4, 0xd0eb), (0x26e5, 0xd0ee), (0x26e6, 0xd0f2), (0x26e7, 0xd0f3), (0x26e8, 0xd0f4), (0x26e9, 0xd0f5),
    (0x26ea, 0xd0f6), (0x26eb, 0xd0f7), (0x26ec, 0xd0f9), (0x26ed, 0xd0fa), (0x26ee, 0xd0fb), (0x26ef, 0xd0fc),
    (0x26f0, 0xd0fd), (0x26f1, 0xd0fe), (0x26f2, 0xd0ff), (0x26f3, 0xd100), (0x26f4, 0xd101), (0x26f5, 0xd102),
    (0x26f6, 0xd103), (0x26f7, 0xd104), (0x26f8, 0xb367), (0x26f9, 0xb369), (0x26fa, 0xb36b), (0x26fb, 0xb36e),
    (0x26fc, 0xb370), (0x26fd, 0xb371), (0x26fe, 0xb374), (0x26ff, 0xb378), (0x2700, 0xb380), (0x2701, 0xb381),
    (0x2702, 0xb383), (0x2703, 0xb384), (0x2704, 0xb385), (0x2705, 0xb38c), (0x2706, 0xb390), (0x2707, 0xb394),
    (0x2708, 0xb3a0), (0x2709, 0xb3a1), (0x270a, 0xb3a8), (0x270b, 0xb3ac), (0x270c, 0xb3c4), (0x270d, 0xb3c5),
    (0x270e, 0xb3c8), (0x270f, 0xb3cb), (0x2710, 0xb3cc), (0x2711, 0xb3ce), (0x2712, 0xb3d0), (0x2713, 0xb3d4),
    (0x2714, 0xb3d5), (0x2715, 0xb3d7), (0x2716, 0xb3d9), (0x2717, 0xb3db), (0x2718, 0xb3dd), (0x2719, 0xb3e0),
    (0x271a, 0xb3e4), (0x271b, 0xb3e8), (0x271c, 0xb3fc), (0x271d, 0xb410), (0x271e, 0xb418), (0x271f, 0xb41c),
    (0x2720, 0xb420), (0x2721, 0xb428), (0x2722, 0xb429), (0x2723, 0xb42b), (0x2724, 0xb434), (0x2725, 0xb450),
    (0x2726, 0xb451), (0x2727, 0xb454), (0x2728, 0xb458), (0x2729, 0xb460), (0x272a, 0xb461), (0x272b, 0xb463),
    (0x272c, 0xb465), (0x272d, 0xb46c), (0x272e, 0xb480), (0x272f, 0xb488), (0x2730, 0xb49d), (0x2731, 0xb4a4),
    (0x2732, 0xb4a8), (0x2733, 0xb4ac), (0x2734, 0xb4b5), (0x2735, 0xb4b7), (0x2736, 0xb4b9), (0x2737, 0xb4c0),
    (0x2738, 0xb4c4), (0x2739, 0xb4c8), (0x273a, 0xb4d0), (0x273b, 0xb4d5), (0x273c, 0xb4dc), (0x273d, 0xb4dd),
    (0x273e, 0xb4e0), (0x273f, 0xb4e3), (0x2740, 0xb4e4), (0x2741, 0xb4e6), (0x2742, 0xb4ec), (0x2743, 0xb4ed),
    (0x2744, 0xb4ef), (0x2745, 0xb4f1), (0x2746, 0xb4f8), (0x2747, 0xb514), (0x2748, 0xb515), (0x2749, 0xb518),
    (0x274a, 0xb51b), (0x274b, 0xb51c), (0x274c, 0xb524), (0x274d, 0xb525), (0x274e, 0xb527), (0x274f, 0xb528),
    (0x2750, 0xb529), (0x2751, 0xb52a), (0x2752, 0xb530), (0x2753, 0xb531), (0x2754, 0xb534), (0x2755, 0xb538),
    (0x2756, 0xd105), (0x2757, 0xd106), (0x2758, 0xd107), (0x2759, 0xd108), (0x275a, 0xd109), (0x275b, 0xd10a),
    (0x275c, 0xd10b), (0x275d, 0xd10c), (0x275e, 0xd10e), (0x275f, 0xd10f), (0x2760, 0xd110), (0x2761, 0xd111),
    (0x2762, 0xd112), (0x2763, 0xd113), (0x2764, 0xd114), (0x2765, 0xd115), (0x2766, 0xd116), (0x2767, 0xd117),
    (0x2768, 0xd118), (0x2769, 0xd119), (0x276a, 0xd11a), (0x276b, 0xd11b), (0x276c, 0xd11c), (0x276d, 0xd11d),
    (0x276e, 0xd11e), (0x276f, 0xd11f), (0x2776, 0xd120), (0x2777, 0xd121), (0x2778, 0xd122), (0x2779, 0xd123),
    (0x277a, 0xd124), (0x277b, 0xd125), (0x277c, 0xd126), (0x277d, 0xd127), (0x277e, 0xd128), (0x277f, 0xd129),
    (0x2780, 0xd12a), (0x2781, 0xd12b), (0x2782, 0xd12c), (0x2783, 0xd12d), (0x2784, 0xd12e), (0x2785, 0xd12f),
    (0x2786, 0xd132), (0x2787, 0xd133), (0x2788, 0xd135), (0x2789, 0xd136), (0x278a, 0xd137), (0x278b, 0xd139),
    (0x278c, 0xd13b), (0x278d, 0xd13c), (0x278e, 0xd13d), (0x278f, 0xd13e), (0x2796, 0xd13f), (0x2797, 0xd142),
    (0x2798, 0xd146), (0x2799, 0xd147), (0x279a, 0xd148), (0x279b, 0xd149), (0x279c, 0xd14a), (0x279d, 0xd14b),
    (0x279e, 0xd14e), (0x279f, 0xd14f), (0x27a0, 0xd151), (0x27a1, 0xd152), (0x27a2, 0xd153), (0x27a3, 0xd155),
    (0x27a4, 0xd156), (0x27a5, 0xd157), (0x27a6, 0xd158), (0x27a7, 0xd159), (0x27a8, 0xd15a), (0x27a9, 0xd15b),
    (0x27aa, 0xd15e), (0x27ab, 0xd160), (0x27ac, 0xd162), (0x27ad, 0xd163), (0x27ae, 0xd164), (0x27af, 0xd165),
    (0x27b0, 0xd166), (0x27b1, 0xd167), (0x27b2, 0xd169), (0x27b3, 0xd16a), (0x27b4, 0xd16b), (0x27b5, 0xd16d),
    (0x27b6, 0xb540), (0x27b7, 0xb541), (0x27b8, 0xb543), (0x27b9, 0xb544), (0x27ba, 0xb545), (0x27bb, 0xb54b),
    (0x27bc, 0xb54c), (0x27bd, 0xb54d), (0x27be, 0xb550), (0x27bf, 0xb554), (0x27c0, 0xb55c), (0x27c1, 0xb55d),
    (0x27c2, 0xb55f), (0x27c3, 0xb560), (0x27c4, 0xb561), (0x27c5, 0xb5a0), (0x27c6, 0xb5a1), (0x27c7, 0xb5a4),
    (0x27c8, 0xb5a8), (0x27c9, 0xb5aa), (0x27ca, 0xb5ab), (0x27cb, 0xb5b0), (0x27cc, 0xb5b1), (0x27cd, 0xb5b3),
    (0x27ce, 0xb5b4), (0x27cf, 0xb5b5), (0x27d0, 0xb5bb), (0x27d1, 0xb5bc), (0x27d2, 0xb5bd), (0x27d3, 0xb5c0),
    (0x27d4, 0xb5c4), (0x27d5, 0xb5cc), (0x27d6, 0xb5cd), (0x27d7, 0xb5cf), (0x27d8, 0xb5d0), (0x27d9, 0xb5d1),
    (0x27da, 0xb5d8), (0x27db, 0xb5ec), (0x27dc, 0xb610), (0x27dd, 0xb611), (0x27de, 0xb614), (0x27df, 0xb618),
    (0x27e0, 0xb625), (0x27e1, 0xb62c), (0x27e2, 0xb634), (0x27e3, 0xb648), (0x27e4, 0xb664), (0x27e5, 0xb668),
    (0x27e6, 0xb69c), (0x27e7, 0xb69d), (0x27e8, 0xb6a0), (0x27e9, 0xb6a4), (0x27ea, 0xb6ab), (0x27eb, 0xb6ac),
    (0x27ec, 0xb6b1), (0x27ed, 0xb6d4), (0x27ee, 0xb6f0), (0x27ef, 0xb6f4), (0x27f0, 0xb6f8), (0x27f1, 0xb700),
    (0x27f2, 0xb701), (0x27f3, 0xb705), (0x27f4, 0xb728), (0x27f5, 0xb729), (0x27f6, 0xb72c), (0x27f7, 0xb72f),
    (0x27f8, 0xb730), (0x27f9, 0xb738), (0x27fa, 0xb739), (0x27fb, 0xb73b), (0x27fc, 0xb744), (0x27fd, 0xb748),
    (0x27fe, 0xb74c), (0x27ff, 0xb754), (0x2800, 0xb755), (0x2801, 0xb760), (0x2802, 0xb764), (0x2803, 0xb768),
    (0x2804, 0xb770), (0x2805, 0xb771), (0x2806, 0xb773), (0x2807, 0xb775), (0x2808, 0xb77c), (0x2809, 0xb77d),
    (0x280a, 0xb780), (0x280b, 0xb784), (0x280c, 0xb78c), (0x280d, 0xb78d), (0x280e, 0xb78f), (0x280f, 0xb790),
    (0x2810, 0xb791), (0x2811, 0xb792), (0x2812, 0xb796), (0x2813, 0xb797), (0x2814, 0xd16e), (0x2815, 0xd16f),
    (0x2816, 0xd170), (0x2817, 0xd171), (0x2818, 0xd172), (0x2819, 0xd173), (0x281a, 0xd174), (0x281b, 0xd175),
    (0x281c, 0xd176), (0x281d, 0xd177), (0x281e, 0xd178), (0x281f, 0xd179), (0x2820, 0xd17a), (0x2821, 0xd17b),
    (0x2822, 0xd17d), (0x2823, 0xd17e), (0x2824, 0xd17f), (0x2825, 0xd180), (0x2826, 0xd181), (0x2827, 0xd182),
    (0x2828, 0xd183), (0x2829, 0xd185), (0x282a, 0xd186), (0x282b, 0xd187), (0x282c, 0xd189), (0x282d, 0xd18a),
    (0x2834, 0xd18b), (0x2835, 0xd18c), (0x2836, 0xd18d), (0x2837, 0xd18e), (0x2838, 0xd18f), (0x2839, 0xd190),
    (0x283a, 0xd191), (0x283b, 0xd192), (0x283c, 0xd193), (0x283d, 0xd194), (0x283e, 0xd195), (0x283f, 0xd196),
    (0x2840, 0xd197), (0x2841, 0xd198), (0x2842, 0xd199), (0x2843, 0xd19a), (0x2844, 0xd19b), (0x2845, 0xd19c),
    (0x2846, 0xd19d), (0x2847, 0xd19e), (0x2848, 0xd19f), (0x2849, 0xd1a2), (0x284a, 0xd1a3), (0x284b, 0xd1a5),
    (0x284c, 0xd1a6), (0x284d, 0xd1a7), (0x2854, 0xd1a9), (0x2855, 0xd1aa), (0x2856, 0xd1ab), (0x2857, 0xd1ac),
    (0x2858, 0xd1ad), (0x2859, 0xd1ae), (0x285a, 0xd1af), (0x285b, 0xd1b2), (0x285c, 0xd1b4), (0x285d, 0xd1b6),
    (0x285e, 0xd1b7), (0x285f, 0xd1b8), (0x2860, 0xd1b9), (0x2861, 0xd1bb), (0x2862, 0xd1bd), (0x2863, 0xd1be),
    (0x2864, 0xd1bf), (0x2865, 0xd1c1), (0x2866, 0xd1c2), (0x2867, 0xd1c3), (0x2868, 0xd1c4), (0x2869, 0xd1c5),
    (0x286a, 0xd1c6), (0x286b, 0xd1c7), (0x286c, 0xd1c8), (0x286d, 0xd1c9), (0x286e, 0xd1ca), (0x286f, 0xd1cb),
    (0x2870, 0xd1cc), (0x2871, 0xd1cd), (0x2872, 0xd1ce), (0x2873, 0xd1cf), (0x2874, 0xb798), (0x2875, 0xb799),
    (0x2876, 0xb79c), (0x2877, 0xb7a0), (0x2878, 0xb7a8), (0x2879, 0xb7a9), (0x287a, 0xb7ab), (0x287b, 0xb7ac),
    (0x287c, 0xb7ad), (0x287d, 0xb7b4), (0x287e, 0xb7b5), (0x287f, 0xb7b8), (0x2880, 0xb7c7), (0x2881, 0xb7c9),
    (0x2882, 0xb7ec), (0x2883, 0xb7ed), (0x2884, 0xb7f0), (0x2885, 0xb7f4), (0x2886, 0xb7fc), (0x2887, 0xb7fd),
    (0x2888, 0xb7ff), (0x2889, 0xb800), (0x288a, 0xb801), (0x288b, 0xb807), (0x288c, 0xb808), (0x288d, 0xb809),
    (0x288e, 0xb80c), (0x288f, 0xb810), (0x2890, 0xb818), (0x2891, 0xb819), (0x2892, 0xb81b), (0x2893, 0xb81d),
    (0x2894, 0xb824), (0x2895, 0xb825), (0x2896, 0xb828), (0x2897, 0xb82c), (0x2898, 0xb834), (0x2899, 0xb835),
    (0x289a, 0xb837), (0x289b, 0xb838), (0x289c, 0xb839), (0x289d, 0xb840), (0x289e, 0xb844), (0x289f, 0xb851),
    (0x28a0, 0xb853), (0x28a1, 0xb85c), (0x28a2, 0xb85d), (0x28a3, 0xb860), (0x28a4, 0xb864), (0x28a5, 0xb86c),
    (0x28a6, 0xb86d), (0x28a7, 0xb86f), (0x28a8, 0xb871), (0x28a9, 0xb878), (0x28aa, 0xb87c), (0x28ab, 0xb88d),
    (0x28ac, 0xb8a8), (0x28ad, 0xb8b0), (0x28ae, 0xb8b4), (0x28af, 0xb8b8), (0x28b0, 0xb8c0), (0x28b1, 0xb8c1),
    (0x28b2, 0xb8c3), (0x28b3, 0xb8c5), (0x28b4, 0xb8cc), (0x28b5, 0xb8d0), (0x28b6, 0xb8d4), (0x28b7, 0xb8dd),
    (0x28b8, 0xb8df), (0x28b9, 0xb8e1), (0x28ba, 0xb8e8), (0x28bb, 0xb8e9), (0x28bc, 0xb8ec), (0x28bd, 0xb8f0),
    (0x28be, 0xb8f8), (0x28bf, 0xb8f9), (0x28c0, 0xb8fb), (0x28c1, 0xb8fd), (0x28c2, 0xb904), (0x28c3, 0xb918),
    (0x28c4, 0xb920), (0x28c5, 0xb93c), (0x28c6, 0xb93d), (0x28c7, 0xb940), (0x28c8, 0xb944), (0x28c9, 0xb94c),
    (0x28ca, 0xb94f), (0x28cb, 0xb951), (0x28cc, 0xb958), (0x28cd, 0xb959), (0x28ce, 0xb95c), (0x28cf, 0xb960),
    (0x28d0, 0xb968), (0x28d1, 0xb969), (0x28d2, 0xd1d0), (0x28d3, 0xd1d1), (0x28d4, 0xd1d2), (0x28d5, 0xd1d3),
    (0x28d6, 0xd1d4), (0x28d7, 0xd1d5), (0x28d8, 0xd1d6), (0x28d9, 0xd1d7), (0x28da, 0xd1d9), (0x28db, 0xd1da),
    (0x28dc, 0xd1db), (0x28dd, 0xd1dc), (0x28de, 0xd1dd), (0x28df, 0xd1de), (0x28e0, 0xd1df), (0x28e1, 0xd1e0),
    (0x28e2, 0xd1e1), (0x28e3, 0xd1e2), (0x28e4, 0xd1e3), (0x28e5, 0xd1e4), (0x28e6, 0xd1e5), (0x28e7, 0xd1e6),
    (0x28e8, 0xd1e7), (0x28e9, 0xd1e8), (0x28ea, 0xd1e9), (0x28eb, 0xd1ea), (0x28f2, 0xd1eb), (0x28f3, 0xd1ec),
    (0x28f4, 0xd1ed), (0x28f5, 0xd1ee), (0x28f6, 0xd1ef), (0x28f7, 0xd1f0), (0x28f8, 0xd1f1), (0x28f9, 0xd1f2),
    (0x28fa, 0xd1f3), (0x28fb, 0xd1f5), (0x28fc, 0xd1f6), (0x28fd, 0xd1f7), (0x28fe, 0xd1f9), (0x28ff, 0xd1fa),
    (0x2900, 0xd1fb), (0x2901, 0xd1fc), (0x2902, 0xd1fd), (0x2903, 0xd1fe), (0x2904, 0xd1ff), (0x2905, 0xd200),
    (0x2906, 0xd201), (0x2907, 0xd202), (0x2908, 0xd203), (0x2909, 0xd204), (0x290a, 0xd205), (0x290b, 0xd206),
    (0x2912, 0xd208), (0x2913, 0xd20a), (0x2914, 0xd20b), (0x2915, 0xd20c), (0x2916, 0xd20d), (0x2917, 0xd20e),
    (0x2918, 0xd20f), (0x2919, 0xd211), (0x291a, 0xd212), (0x291b, 0xd213), (0x291c, 0xd214), (0x291d, 0xd215),
    (0x291e, 0xd216), (0x291f, 0xd217), (0x2920, 0xd218), (0x2921, 0xd219), (0x2922, 0xd21a), (0x2923, 0xd21b),
    (0x2924, 0xd21c), (0x2925, 0xd21d), (0x2926, 0xd21e), (0x2927, 0xd21f), (0x2928, 0xd220), (0x2929, 0xd221),
    (0x292a, 0xd222), (0x292b, 0xd223), (0x292c, 0xd224), (0x292d, 0xd225), (0x292e, 0xd226), (0x292f, 0xd227),
    (0x2930, 0xd228), (0x2931, 0xd229), (0x2932, 0xb96b), (0x2933, 0xb96d), (0x2934, 0xb974), (0x2935, 0xb975),
    (0x2936, 0xb978), (0x2937, 0xb97c), (0x2938, 0xb984), (0x2939, 0xb985), (0x293a, 0xb987), (0x293b, 0xb989),
    (0x293c, 0xb98a), (0x293d, 0xb98d), (0x293e, 0xb98e), (0x293f, 0xb9ac), (0x2940, 0xb9ad), (0x2941, 0xb9b0),
    (0x2942, 0xb9b4), (0x2943, 0xb9bc), (0x2944, 0xb9bd), (0x2945, 0xb9bf), (0x2946, 0xb9c1), (0x2947, 0xb9c8),
    (0x2948, 0xb9c9), (0x2949, 0xb9cc), (0x294a, 0xb9ce), (0x294b, 0xb9cf), (0x294c, 0xb9d0), (0x294d, 0xb9d1),
    (0x294e, 0xb9d2), (0x294f, 0xb9d8), (0x2950, 0xb9d9), (0x2951, 0xb9db), (0x2952, 0xb9dd), (0x2953, 0xb9de),
    (0x2954, 0xb9e1), (0x2955, 0xb9e3), (0x2956, 0xb9e4), (0x2957, 0xb9e5), (0x2958, 0xb9e8), (0x2959, 0xb9ec),
    (0x295a, 0xb9f4), (0x295b, 0xb9f5), (0x295c, 0xb9f7), (0x295d, 0xb9f8), (0x295e, 0xb9f9), (0x295f, 0xb9fa),
    (0x2960, 0xba00), (0x2961, 0xba01), (0x2962, 0xba08), (0x2963, 0xba15), (0x2964, 0xba38), (0x2965, 0xba39),
    (0x2966, 0xba3c), (0x2967, 0xba40), (0x2968, 0xba42), (0x2969, 0xba48), (0x296a, 0xba49), (0x296b, 0xba4b),
    (0x296c, 0xba4d), (0x296d, 0xba4e), (0x296e, 0xba53), (0x296f, 0xba54), (0x2970, 0xba55), (0x2971, 0xba58),
    (0x2972, 0xba5c), (0x2973, 0xba64), (0x2974, 0xba65), (0x2975, 0xba67), (0x2976, 0xba68), (0x2977, 0xba69),
    (0x2978, 0xba70), (0x2979, 0xba71), (0x297a, 0xba74), (0x297b, 0xba78), (0x297c, 0xba83), (0x297d, 0xba84),
    (0x297e, 0xba85), (0x297f, 0xba87), (0x2980, 0xba8c), (0x2981, 0xbaa8), (0x2982, 0xbaa9), (0x2983, 0xbaab),
    (0x2984, 0xbaac), (0x2985, 0xbab0), (0x2986, 0xbab2), (0x2987, 0xbab8), (0x2988, 0xbab9), (0x2989, 0xbabb),
    (0x298a, 0xbabd), (0x298b, 0xbac4), (0x298c, 0xbac8), (0x298d, 0xbad8), (0x298e, 0xbad9), (0x298f, 0xbafc),
    (0x2990, 0xd22a), (0x2991, 0xd22b), (0x2992, 0xd22e), (0x2993, 0xd22f), (0x2994, 0xd231), (0x2995, 0xd232),
    (0x2996, 0xd233), (0x2997, 0xd235), (0x2998, 0xd236), (0x2999, 0xd237), (0x299a, 0xd238), (0x299b, 0xd239),
    (0x299c, 0xd23a), (0x299d, 0xd23b), (0x299e, 0xd23e), (0x299f, 0xd240), (0x29a0, 0xd242), (0x29a1, 0xd243),
    (0x29a2, 0xd244), (0x29a3, 0xd245), (0x29a4, 0xd246), (0x29a5, 0xd247), (0x29a6, 0xd249), (0x29a7, 0xd24a),
    (0x29a8, 0xd24b), (0x29a9, 0xd24c), (0x29b0, 0xd24d), (0x29b1, 0xd24e), (0x29b2, 0xd24f), (0x29b3, 0xd250),
    (0x29b4, 0xd251), (0x29b5, 0xd252), (0x29b6, 0xd253), (0x29b7, 0xd254), (0x29b8, 0xd255), (0x29b9, 0xd256),
    (0x29ba, 0xd257), (0x29bb, 0xd258), (0x29bc, 0xd259), (0x29bd, 0xd25a), (0x29be, 0xd25b), (0x29bf, 0xd25d),
    (0x29c0, 0xd25e), (0x29c1, 0xd25f), (0x29c2, 0xd260), (0x29c3, 0xd261), (0x29c4, 0xd262), (0x29c5, 0xd263),
    (0x29c6, 0xd265), (0x29c7, 0xd266), (0x29c8, 0xd267), (0x29c9, 0xd268), (0x29d0, 0xd269), (0x29d1, 0xd26a),
    (0x29d2, 0xd26b), (0x29d3, 0xd26c), (0x29d4, 0xd26d), (0x29d5, 0xd26e), (0x29d6, 0xd26f), (0x29d7, 0xd270),
    (0x29d8, 0xd271), (0x29d9, 0xd272), (0x29da, 0xd273), (0x29db, 0xd274), (0x29dc, 0xd275), (0x29dd, 0xd276),
    (0x29de, 0xd277), (0x29df, 0xd278), (0x29e0, 0xd279), (0x29e1, 0xd27a), (0x29e2, 0xd27b), (0x29e3, 0xd27c),
    (0x29e4, 0xd27d), (0x29e5, 0xd27e), (0x29e6, 0xd27f), (0x29e7, 0xd282), (0x29e8, 0xd283), (0x29e9, 0xd285),
    (0x29ea, 0xd286), (0x29eb, 0xd287), (0x29ec, 0xd289), (0x29ed, 0xd28a), (0x29ee, 0xd28b), (0x29ef, 0xd28c),
    (0x29f0, 0xbb00), (0x29f1, 0xbb04), (0x29f2, 0xbb0d), (0x29f3, 0xbb0f), (0x29f4, 0xbb11), (0x29f5, 0xbb18),
    (0x29f6, 0xbb1c), (0x29f7, 0xbb20), (0x29f8, 0xbb29), (0x29f9, 0xbb2b), (0x29fa, 0xbb34), (0x29fb, 0xbb35),
    (0x29fc, 0xbb36), (0x29fd, 0xbb38), (0x29fe, 0xbb3b), (0x29ff, 0xbb3c), (0x2a00, 0xbb3d), (0x2a01, 0xbb3e),
    (0x2a02, 0xbb44), (0x2a03, 0xbb45), (0x2a04, 0xbb47), (0x2a05, 0xbb49), (0x2a06, 0xbb4d), (0x2a07, 0xbb4f),
    (0x2a08, 0xbb50), (0x2a09, 0xbb54), (0x2a0a, 0xbb58), (0x2a0b, 0xbb61), (0x2a0c, 0xbb63), (0x2a0d, 0xbb6c),
    (0x2a0e, 0xbb88), (0x2a0f, 0xbb8c), (0x2a10, 0xbb90), (0x2a11, 0xbba4), (0x2a12, 0xbba8), (0x2a13, 0xbbac),
    (0x2a14, 0xbbb4), (0x2a15, 0xbbb7), (0x2a16, 0xbbc0), (0x2a17, 0xbbc4), (0x2a18, 0xbbc8), (0x2a19, 0xbbd0),
    (0x2a1a, 0xbbd3), (0x2a1b, 0xbbf8), (0x2a1c, 0xbbf9), (0x2a1d, 0xbbfc), (0x2a1e, 0xbbff), (0x2a1f, 0xbc00),
    (0x2a20, 0xbc02), (0x2a21, 0xbc08), (0x2a22, 0xbc09), (0x2a23, 0xbc0b), (0x2a24, 0xbc0c), (0x2a25, 0xbc0d),
    (0x2a26, 0xbc0f), (0x2a27, 0xbc11), (0x2a28, 0xbc14), (0x2a29, 0xbc15), (0x2a2a, 0xbc16), (0x2a2b, 0xbc17),
    (0x2a2c, 0xbc18), (0x2a2d, 0xbc1b), (0x2a2e, 0xbc1c), (0x2a2f, 0xbc1d), (0x2a30, 0xbc1e), (0x2a31, 0xbc1f),
    (0x2a32, 0xbc24), (0x2a33, 0xbc25), (0x2a34, 0xbc27), (0x2a35, 0xbc29), (0x2a36, 0xbc2d), (0x2a37, 0xbc30),
    (0x2a38, 0xbc31), (0x2a39, 0xbc34), (0x2a3a, 0xbc38), (0x2a3b, 0xbc40), (0x2a3c, 0xbc41), (0x2a3d, 0xbc43),
    (0x2a3e, 0xbc44), (0x2a3f, 0xbc45), (0x2a40, 0xbc49), (0x2a41, 0xbc4c), (0x2a42, 0xbc4d), (0x2a43, 0xbc50),
    (0x2a44, 0xbc5d), (0x2a45, 0xbc84), (0x2a46, 0xbc85), (0x2a47, 0xbc88), (0x2a48, 0xbc8b), (0x2a49, 0xbc8c),
    (0x2a4a, 0xbc8e), (0x2a4b, 0xbc94), (0x2a4c, 0xbc95), (0x2a4d, 0xbc97), (0x2a4e, 0xd28d), (0x2a4f, 0xd28e),
    (0x2a50, 0xd28f), (0x2a51, 0xd292), (0x2a52, 0xd293), (0x2a53, 0xd294), (0x2a54, 0xd296), (0x2a55, 0xd297),
    (0x2a56, 0xd298), (0x2a57, 0xd299), (0x2a58, 0xd29a), (0x2a59, 0xd29b), (0x2a5a, 0xd29d), (0x2a5b, 0xd29e),
    (0x2a5c, 0xd29f), (0x2a5d, 0xd2a1), (0x2a5e, 0xd2a2), (0x2a5f, 0xd2a3), (0x2a60, 0xd2a5), (0x2a61, 0xd2a6),
    (0x2a62, 0xd2a7), (0x2a63, 0xd2a8), (0x2a64, 0xd2a9), (0x2a65, 0xd2aa), (0x2a66, 0xd2ab), (0x2a67, 0xd2ad),
    (0x2a6e, 0xd2ae), (0x2a6f, 0xd2af), (0x2a70, 0xd2b0), (0x2a71, 0xd2b2), (0x2a72, 0xd2b3), (0x2a73, 0xd2b4),
    (0x2a74, 0xd2b5), (0x2a75, 0xd2b6), (0x2a76, 0xd2b7), (0x2a77, 0xd2ba), (0x2a78, 0xd2bb), (0x2a79, 0xd2bd),
    (0x2a7a, 0xd2be), (0x2a7b, 0xd2c1), (0x2a7c, 0xd2c3), (0x2a7d, 0xd2c4), (0x2a7e, 0xd2c5), (0x2a7f, 0xd2c6),
    (0x2a80, 0xd2c7), (0x2a81, 0xd2ca), (0x2a82, 0xd2cc), (0x2a83, 0xd2cd), (0x2a84, 0xd2ce), (0x2a85, 0xd2cf),
    (0x2a86, 0xd2d0), (0x2a87, 0xd2d1), (0x2a8e, 0xd2d2), (0x2a8f, 0xd2d3), (0x2a90, 0xd2d5), (0x2a91, 0xd2d6),
    (0x2a92, 0xd2d7), (0x2a93, 0xd2d9), (0x2a94, 0xd2da), (0x2a95, 0xd2db), (0x2a96, 0xd2dd), (0x2a97, 0xd2de),
    (0x2a98, 0xd2df), (0x2a99, 0xd2e0), (0x2a9a, 0xd2e1), (0x2a9b, 0xd2e2), (0x2a9c, 0xd2e3), (0x2a9d, 0xd2e6),
    (0x2a9e, 0xd2e7), (0x2a9f, 0xd2e8), (0x2aa0, 0xd2e9), (0x2aa1, 0xd2ea), (0x2aa2, 0xd2eb), (0x2aa3, 0xd2ec),
    (0x2aa4, 0xd2ed), (0x2aa5, 0xd2ee), (0x2aa6, 0xd2ef), (0x2aa7, 0xd2f2), (0x2aa8, 0xd2f3), (0x2aa9, 0xd2f5),
    (0x2aaa, 0xd2f6), (0x2aab, 0xd2f7), (0x2aac, 0xd2f9), (0x2aad, 0xd2fa), (0x2aae, 0xbc99), (0x2aaf, 0xbc9a),
    (0x2ab0, 0xbca0), (0x2ab1, 0xbca1), (0x2ab2, 0xbca4), (0x2ab3, 0xbca7), (0x2ab4, 0xbca8), (0x2ab5, 0xbcb0),
    (0x2ab6, 0xbcb1), (0x2ab7, 0xbcb3), (0x2ab8, 0xbcb4), (0x2ab9, 0xbcb5), (0x2aba, 0xbcbc), (0x2abb, 0xbcbd),
    (0x2abc, 0xbcc0), (0x2abd, 0xbcc4), (0x2abe, 0xbccd), (0x2abf, 0xbccf), (0x2ac0, 0xbcd0), (0x2ac1, 0xbcd1),
    (0x2ac2, 0xbcd5), (0x2ac3, 0xbcd8), (0x2ac4, 0xbcdc), (0x2ac5, 0xbcf4), (0x2ac6, 0xbcf5), (0x2ac7, 0xbcf6),
    (0x2ac8, 0xbcf8), (0x2ac9, 0xbcfc), (0x2aca, 0xbd04), (0x2acb, 0xbd05), (0x2acc, 0xbd07), (0x2acd, 0xbd09),
    (0x2ace, 0xbd10), (0x2acf, 0xbd14), (0x2ad0, 0xbd24), (0x2ad1, 0xbd2c), (0x2ad2, 0xbd40), (0x2ad3, 0xbd48),
    (0x2ad4, 0xbd49), (0x2ad5, 0xbd4c), (0x2ad6, 0xbd50), (0x2ad7, 0xbd58), (0x2ad8, 0xbd59), (0x2ad9, 0xbd64),
    (0x2ada, 0xbd68), (0x2adb, 0xbd80), (0x2adc, 0xbd81), (0x2add, 0xbd84), (0x2ade, 0xbd87), (0x2adf, 0xbd88),
    (0x2ae0, 0xbd89), (0x2ae1, 0xbd8a), (0x2ae2, 0xbd90), (0x2ae3, 0xbd91), (0x2ae4, 0xbd93), (0x2ae5, 0xbd95),
    (0x2ae6, 0xbd99), (0x2ae7, 0xbd9a), (0x2ae8, 0xbd9c), (0x2ae9, 0xbda4), (0x2aea, 0xbdb0), (0x2aeb, 0xbdb8),
    (0x2aec, 0xbdd4), (0x2aed, 0xbdd5), (0x2aee, 0xbdd8), (0x2aef, 0xbddc), (0x2af0, 0xbde9), (0x2af1, 0xbdf0),
    (0x2af2, 0xbdf4), (0x2af3, 0xbdf8), (0x2af4, 0xbe00), (0x2af5, 0xbe03), (0x2af6, 0xbe05), (0x2af7, 0xbe0c),
    (0x2af8, 0xbe0d), (0x2af9, 0xbe10), (0x2afa, 0xbe14), (0x2afb, 0xbe1c), (0x2afc, 0xbe1d), (0x2afd, 0xbe1f),
    (0x2afe, 0xbe44), (0x2aff, 0xbe45), (0x2b00, 0xbe48), (0x2b01, 0xbe4c), (0x2b02, 0xbe4e), (0x2b03, 0xbe54),
    (0x2b04, 0xbe55), (0x2b05, 0xbe57), (0x2b06, 0xbe59), (0x2b07, 0xbe5a), (0x2b08, 0xbe5b), (0x2b09, 0xbe60),
    (0x2b0a, 0xbe61), (0x2b0b, 0xbe64), (0x2b0c, 0xd2fb), (0x2b0d, 0xd2fc), (0x2b0e, 0xd2fd), (0x2b0f, 0xd2fe),
    (0x2b10, 0xd2ff), (0x2b11, 0xd302), (0x2b12, 0xd304), (0x2b13, 0xd306), (0x2b14, 0xd307), (0x2b15, 0xd308),
    (0x2b16, 0xd309), (0x2b17, 0xd30a), (0x2b18, 0xd30b), (0x2b19, 0xd30f), (0x2b1a, 0xd311), (0x2b1b, 0xd312),
    (0x2b1c, 0xd313), (0x2b1d, 0xd315), (0x2b1e, 0xd317), (0x2b1f, 0xd318), (0x2b20, 0xd319), (0x2b21, 0xd31a),
    (0x2b22, 0xd31b), (0x2b23, 0xd31e), (0x2b24, 0xd322), (0x2b25, 0xd323), (0x2b2c, 0xd324), (0x2b2d, 0xd326),
    (0x2b2e, 0xd327), (0x2b2f, 0xd32a), (0x2b30, 0xd32b), (0x2b31, 0xd32d), (0x2b32, 0xd32e), (0x2b33, 0xd32f),
    (0x2b34, 0xd331), (0x2b35, 0xd332), (0x2b36, 0xd333), (0x2b37, 0xd334), (0x2b38, 0xd335), (0x2b39, 0xd336),
    (0x2b3a, 0xd337), (0x2b3b, 0xd33a), (0x2b3c, 0xd33e), (0x2b3d, 0xd33f), (0x2b3e, 0xd340), (0x2b3f, 0xd341),
    (0x2b40, 0xd342), (0x2b41, 0xd343), (0x2b42, 0xd346), (0x2b43, 0xd347), (0x2b44, 0xd348), (0x2b45, 0xd349),
    (0x2b4c, 0xd34a), (0x2b4d, 0xd34b), (0x2b4e, 0xd34c), (0x2b4f, 0xd34d), (0x2b50, 0xd34e), (0x2b51, 0xd34f),
    (0x2b52, 0xd350), (0x2b53, 0xd351), (0x2b54, 0xd352), (0x2b55, 0xd353), (0x2b56, 0xd354), (0x2b57, 0xd355),
    (0x2b58, 0xd356), (0x2b59, 0xd357), (0x2b5a, 0xd358), (0x2b5b, 0xd359), (0x2b5c, 0xd35a), (0x2b5d, 0xd35b),
    (0x2b5e, 0xd35c), (0x2b5f, 0xd35d), (0x2b60, 0xd35e), (0x2b61, 0xd35f), (0x2b62, 0xd360), (0x2b63, 0xd361),
    (0x2b64, 0xd362), (0x2b65, 0xd363), (0x2b66, 0xd364), (0x2b67, 0xd365), (0x2b68, 0xd366), (0x2b69, 0xd367),
    (0x2b6a, 0xd368), (0x2b6b, 0xd369), (0x2b6c, 0xbe68), (0x2b6d, 0xbe6a), (0x2b6e, 0xbe70), (0x2b6f, 0xbe71),
    (0x2b70, 0xbe73), (0x2b71, 0xbe74), (0x2b72, 0xbe75), (0x2b73, 0xbe7b), (0x2b74, 0xbe7c), (0x2b75, 0xbe7d),
    (0x2b76, 0xbe80), (0x2b77, 0xbe84), (0x2b78, 0xbe8c), (0x2b79, 0xbe8d), (0x2b7a, 0xbe8f), (0x2b7b, 0xbe90),
    (0x2b7c, 0xbe91), (0x2b7d, 0xbe98), (0x2b7e, 0xbe99), (0x2b7f, 0xbea8), (0x2b80, 0xbed0), (0x2b81, 0xbed1),
    (0x2b82, 0xbed4), (0x2b83, 0xbed7), (0x2b84, 0xbed8), (0x2b85, 0xbee0), (0x2b86, 0xbee3), (0x2b87, 0xbee4),
    (0x2b88, 0xbee5), (0x2b89, 0xbeec), (0x2b8a, 0xbf01), (0x2b8b, 0xbf08), (0x2b8c, 0xbf09), (0x2b8d, 0xbf18),
    (0x2b8e, 0xbf19), (0x2b8f, 0xbf1b), (0x2b90, 0xbf1c), (0x2b91, 0xbf1d), (0x2b92, 0xbf40), (0x2b93, 0xbf41),
    (0x2b94, 0xbf44), (0x2b95, 0xbf48), (0x2b96, 0xbf50), (0x2b97, 0xbf51), (0x2b98, 0xbf55), (0x2b99, 0xbf94),
    (0x2b9a, 0xbfb0), (0x2b9b, 0xbfc5), (0x2b9c, 0xbfcc), (0x2b9d, 0xbfcd), (0x2b9e, 0xbfd0), (0x2b9f, 0xbfd4),
    (0x2ba0, 0xbfdc), (0x2ba1, 0xbfdf), (0x2ba2, 0xbfe1), (0x2ba3, 0xc03c), (0x2ba4, 0xc051), (0x2ba5, 0xc058),
    (0x2ba6, 0xc05c), (0x2ba7, 0xc060), (0x2ba8, 0xc068), (0x2ba9, 0xc069), (0x2baa, 0xc090), (0x2bab, 0xc091),
    (0x2bac, 0xc094), (0x2bad, 0xc098), (0x2bae, 0xc0a0), (0x2baf, 0xc0a1), (0x2bb0, 0xc0a3), (0x2bb1, 0xc0a5),
    (0x2bb2, 0xc0ac), (0x2bb3, 0xc0ad), (0x2bb4, 0xc0af), (0x2bb5, 0xc0b0), (0x2bb6, 0xc0b3), (0x2bb7, 0xc0b4),
    (0x2bb8, 0xc0b5), (0x2bb9, 0xc0b6), (0x2bba, 0xc0bc), (0x2bbb, 0xc0bd), (0x2bbc, 0xc0bf), (0x2bbd, 0xc0c0),
    (0x2bbe, 0xc0c1), (0x2bbf, 0xc0c5), (0x2bc0, 0xc0c8), (0x2bc1, 0xc0c9), (0x2bc2, 0xc0cc), (0x2bc3, 0xc0d0),
    (0x2bc4, 0xc0d8), (0x2bc5, 0xc0d9), (0x2bc6, 0xc0db), (0x2bc7, 0xc0dc), (0x2bc8, 0xc0dd), (0x2bc9, 0xc0e4),
    (0x2bca, 0xd36a), (0x2bcb, 0xd36b), (0x2bcc, 0xd36c), (0x2bcd, 0xd36d), (0x2bce, 0xd36e), (0x2bcf, 0xd36f),
    (0x2bd0, 0xd370), (0x2bd1, 0xd371), (0x2bd2, 0xd372), (0x2bd3, 0xd373), (0x2bd4, 0xd374), (0x2bd5, 0xd375),
    (0x2bd6, 0xd376), (0x2bd7, 0xd377), (0x2bd8, 0xd378), (0x2bd9, 0xd379), (0x2bda, 0xd37a), (0x2bdb, 0xd37b),
    (0x2bdc, 0xd37e), (0x2bdd, 0xd37f), (0x2bde, 0xd381), (0x2bdf, 0xd382), (0x2be0, 0xd383), (0x2be1, 0xd385),
    (0x2be2, 0xd386), (0x2be3, 0xd387), (0x2bea, 0xd388), (0x2beb, 0xd389), (0x2bec, 0xd38a), (0x2bed, 0xd38b),
    (0x2bee, 0xd38e), (0x2bef, 0xd392), (0x2bf0, 0xd393), (0x2bf1, 0xd394), (0x2bf2, 0xd395), (0x2bf3, 0xd396),
    (0x2bf4, 0xd397), (0x2bf5, 0xd39a), (0x2bf6, 0xd39b), (0x2bf7, 0xd39d), (0x2bf8, 0xd39e), (0x2bf9, 0xd39f),
    (0x2bfa, 0xd3a1), (0x2bfb, 0xd3a2), (0x2bfc, 0xd3a3), (0x2bfd, 0xd3a4), (0x2bfe, 0xd3a5), (0x2bff, 0xd3a6),
    (0x2c00, 0xd3a7), (0x2c01, 0xd3aa), (0x2c02, 0xd3ac), (0x2c03, 0xd3ae), (0x2c0a, 0xd3af), (0x2c0b, 0xd3b0),
    (0x2c0c, 0xd3b1), (0x2c0d, 0xd3b2), (0x2c0e, 0xd3b3), (0x2c0f, 0xd3b5), (0x2c10, 0xd3b6), (0x2c11, 0xd3b7),
    (0x2c12, 0xd3b9), (0x2c13, 0xd3ba), (0x2c14, 0xd3bb), (0x2c15, 0xd3bd), (0x2c16, 0xd3be), (0x2c17, 0xd3bf),
    (0x2c18, 0xd3c0), (0x2c19, 0xd3c1), (0x2c1a, 0xd3c2), (0x2c1b, 0xd3c3), (0x2c1c, 0xd3c6), (0x2c1d, 0xd3c7),
    (0x2c1e, 0xd3ca), (0x2c1f, 0xd3cb), (0x2c20, 0xd3cc), (0x2c21, 0xd3cd), (0x2c22, 0xd3ce), (0x2c23, 0xd3cf),
    (0x2c24, 0xd3d1), (0x2c25, 0xd3d2), (0x2c26, 0xd3d3), (0x2c27, 0xd3d4), (0x2c28, 0xd3d5), (0x2c29, 0xd3d6),
    (0x2c2a, 0xc0e5), (0x2c2b, 0xc0e8), (0x2c2c, 0xc0ec), (0x2c2d, 0xc0f4), (0x2c2e, 0xc0f5), (0x2c2f, 0xc0f7),
    (0x2c30, 0xc0f9), (0x2c31, 0xc100), (0x2c32, 0xc104), (0x2c33, 0xc108), (0x2c34, 0xc110), (0x2c35, 0xc115),
    (0x2c36, 0xc11c), (0x2c37, 0xc11d), (0x2c38, 0xc11e), (0x2c39, 0xc11f), (0x2c3a, 0xc120), (0x2c3b, 0xc123),
    (0x2c3c, 0xc124), (0x2c3d, 0xc126), (0x2c3e, 0xc127), (0x2c3f, 0xc12c), (0x2c40, 0xc12d), (0x2c41, 0xc12f),
    (0x2c42, 0xc130), (0x2c43, 0xc131), (0x2c44, 0xc136), (0x2c45, 0xc138), (0x2c46, 0xc139), (0x2c47, 0xc13c),
    (0x2c48, 0xc140), (0x2c49, 0xc148), (0x2c4a, 0xc149), (0x2c4b, 0xc14b), (0x2c4c, 0xc14c), (0x2c4d, 0xc14d),
    (0x2c4e, 0xc154), (0x2c4f, 0xc155), (0x2c50, 0xc158), (0x2c51, 0xc15c), (0x2c52, 0xc164), (0x2c53, 0xc165),
    (0x2c54, 0xc167), (0x2c55, 0xc168), (0x2c56, 0xc169), (0x2c57, 0xc170), (0x2c58, 0xc174), (0x2c59, 0xc178),
    (0x2c5a, 0xc185), (0x2c5b, 0xc18c), (0x2c5c, 0xc18d), (0x2c5d, 0xc18e), (0x2c5e, 0xc190), (0x2c5f, 0xc194),
    (0x2c60, 0xc196), (0x2c61, 0xc19c), (0x2c62, 0xc19d), (0x2c63, 0xc19f), (0x2c64, 0xc1a1), (0x2c65, 0xc1a5),
    (0x2c66, 0xc1a8), (0x2c67, 0xc1a9), (0x2c68, 0xc1ac), (0x2c69, 0xc1b0), (0x2c6a, 0xc1bd), (0x2c6b, 0xc1c4),
    (0x2c6c, 0xc1c8), (0x2c6d, 0xc1cc), (0x2c6e, 0xc1d4), (0x2c6f, 0xc1d7), (0x2c70, 0xc1d8), (0x2c71, 0xc1e0),
    (0x2c72, 0xc1e4), (0x2c73, 0xc1e8), (0x2c74, 0xc1f0), (0x2c75, 0xc1f1), (0x2c76, 0xc1f3), (0x2c77, 0xc1fc),
    (0x2c78, 0xc1fd), (0x2c79, 0xc200), (0x2c7a, 0xc204), (0x2c7b, 0xc20c), (0x2c7c, 0xc20d), (0x2c7d, 0xc20f),
    (0x2c7e, 0xc211), (0x2c7f, 0xc218), (0x2c80, 0xc219), (0x2c81, 0xc21c), (0x2c82, 0xc21f), (0x2c83, 0xc220),
    (0x2c84, 0xc228), (0x2c85, 0xc229), (0x2c86, 0xc22b), (0x2c87, 0xc22d), (0x2c88, 0xd3d7), (0x2c89, 0xd3d9),
    (0x2c8a, 0xd3da), (0x2c8b, 0xd3db), (0x2c8c, 0xd3dc), (0x2c8d, 0xd3dd), (0x2c8e, 0xd3de), (0x2c8f, 0xd3df),
    (0x2c90, 0xd3e0), (0x2c91, 0xd3e2), (0x2c92, 0xd3e4), (0x2c93, 0xd3e5), (0x2c94, 0xd3e6), (0x2c95, 0xd3e7),
    (0x2c96, 0xd3e8), (0x2c97, 0xd3e9), (0x2c98, 0xd3ea), (0x2c99, 0xd3eb), (0x2c9a, 0xd3ee), (0x2c9b, 0xd3ef),
    (0x2c9c, 0xd3f1), (0x2c9d, 0xd3f2), (0x2c9e, 0xd3f3), (0x2c9f, 0xd3f5), (0x2ca0, 0xd3f6), (0x2ca1, 0xd3f7),
    (0x2ca8, 0xd3f8), (0x2ca9, 0xd3f9), (0x2caa, 0xd3fa), (0x2cab, 0xd3fb), (0x2cac, 0xd3fe), (0x2cad, 0xd400),
    (0x2cae, 0xd402), (0x2caf, 0xd403), (0x2cb0, 0xd404), (0x2cb1, 0xd405), (0x2cb2, 0xd406), (0x2cb3, 0xd407),
    (0x2cb4, 0xd409), (0x2cb5, 0xd40a), (0x2cb6, 0xd40b), (0x2cb7, 0xd40c), (0x2cb8, 0xd40d), (0x2cb9, 0xd40e),
    (0x2cba, 0xd40f), (0x2cbb, 0xd410), (0x2cbc, 0xd411), (0x2cbd, 0xd412), (0x2cbe, 0xd413), (0x2cbf, 0xd414),
    (0x2cc0, 0xd415), (0x2cc1, 0xd416), (0x2cc8, 0xd417), (0x2cc9, 0xd418), (0x2cca, 0xd419), (0x2ccb, 0xd41a),
    (0x2ccc, 0xd41b), (0x2ccd, 0xd41c), (0x2cce, 0xd41e), (0x2ccf, 0xd41f), (0x2cd0, 0xd420), (0x2cd1, 0xd421),
    (0x2cd2, 0xd422), (0x2cd3, 0xd423), (0x2cd4, 0xd424), (0x2cd5, 0xd425), (0x2cd6, 0xd426), (0x2cd7, 0xd427),
    (0x2cd8, 0xd428), (0x2cd9, 0xd429), (0x2cda, 0xd42a), (0x2cdb, 0xd42b), (0x2cdc, 0xd42c), (0x2cdd, 0xd42d),
    (0x2cde, 0xd42e), (0x2cdf, 0xd42f), (0x2ce0, 0xd430), (0x2ce1, 0xd431), (0x2ce2, 0xd432), (0x2ce3, 0xd433),
    (0x2ce4, 0xd434), (0x2ce5, 0xd435), (0x2ce6, 0xd436), (0x2ce7, 0xd437), (0x2ce8, 0xc22f), (0x2ce9, 0xc231),
    (0x2cea, 0xc232), (0x2ceb, 0xc234), (0x2cec, 0xc248), (0x2ced, 0xc250), (0x2cee, 0xc251), (0x2cef, 0xc254),
    (0x2cf0, 0xc258), (0x2cf1, 0xc260), (0x2cf2, 0xc265), (0x2cf3, 0xc26c), (0x2cf4, 0xc26d), (0x2cf5, 0xc270),
    (0x2cf6, 0xc274), (0x2cf7, 0xc27c), (0x2cf8, 0xc27d), (0x2cf9, 0xc27f), (0x2cfa, 0xc281), (0x2cfb, 0xc288),
    (0x2cfc, 0xc289), (0x2cfd, 0xc290), (0x2cfe, 0xc298), (0x2cff, 0xc29b), (0x2d00, 0xc29d), (0x2d01, 0xc2a4),
    (0x2d02, 0xc2a5), (0x2d03, 0xc2a8), (0x2d04, 0xc2ac), (0x2d05, 0xc2ad), (0x2d06, 0xc2b4), (0x2d07, 0xc2b5),
    (0x2d08, 0xc2b7), (0x2d09, 0xc2b9), (0x2d0a, 0xc2dc), (0x2d0b, 0xc2dd), (0x2d0c, 0xc2e0), (0x2d0d, 0xc2e3),
    (0x2d0e, 0xc2e4), (0x2d0f, 0xc2eb), (0x2d10, 0xc2ec), (0x2d11, 0xc2ed), (0x2d12, 0xc2ef), (0x2d13, 0xc2f1),
    (0x2d14, 0xc2f6), (0x2d15, 0xc2f8), (0x2d16, 0xc2f9), (0x2d17, 0xc2fb), (0x2d18, 0xc2fc), (0x2d19, 0xc300),
    (0x2d1a, 0xc308), (0x2d1b, 0xc309), (0x2d1c, 0xc30c), (0x2d1d, 0xc30d), (0x2d1e, 0xc313), (0x2d1f, 0xc314),
    (0x2d20, 0xc315), (0x2d21, 0xc318), (0x2d22, 0xc31c), (0x2d23, 0xc324), (0x2d24, 0xc325), (0x2d25, 0xc328),
    (0x2d26, 0xc329), (0x2d27, 0xc345), (0x2d28, 0xc368), (0x2d29, 0xc369), (0x2d2a, 0xc36c), (0x2d2b, 0xc370),
    (0x2d2c, 0xc372), (0x2d2d, 0xc378), (0x2d2e, 0xc379), (0x2d2f, 0xc37c), (0x2d30, 0xc37d), (0x2d31, 0xc384),
    (0x2d32, 0xc388), (0x2d33, 0xc38c), (0x2d34, 0xc3c0), (0x2d35, 0xc3d8), (0x2d36, 0xc3d9), (0x2d37, 0xc3dc),
    (0x2d38, 0xc3df), (0x2d39, 0xc3e0), (0x2d3a, 0xc3e2), (0x2d3b, 0xc3e8), (0x2d3c, 0xc3e9), (0x2d3d, 0xc3ed),
    (0x2d3e, 0xc3f4), (0x2d3f, 0xc3f5), (0x2d40, 0xc3f8), (0x2d41, 0xc408), (0x2d42, 0xc410), (0x2d43, 0xc424),
    (0x2d44, 0xc42c), (0x2d45, 0xc430), (0x2d46, 0xd438), (0x2d47, 0xd439), (0x2d48, 0xd43a), (0x2d49, 0xd43b),
    (0x2d4a, 0xd43c), (0x2d4b, 0xd43d), (0x2d4c, 0xd43e), (0x2d4d, 0xd43f), (0x2d4e, 0xd441), (0x2d4f, 0xd442),
    (0x2d50, 0xd443), (0x2d51, 0xd445), (0x2d52, 0xd446), (0x2d53, 0xd447), (0x2d54, 0xd448), (0x2d55, 0xd449),
    (0x2d56, 0xd44a), (0x2d57, 0xd44b), (0x2d58, 0xd44c), (0x2d59, 0xd44d), (0x2d5a, 0xd44e), (0x2d5b, 0xd44f),
    (0x2d5c, 0xd450), (0x2d5d, 0xd451), (0x2d5e, 0xd452), (0x2d5f, 0xd453), (0x2d66, 0xd454), (0x2d67, 0xd455),
    (0x2d68, 0xd456), (0x2d69, 0xd457), (0x2d6a, 0xd458), (0x2d6b, 0xd459), (0x2d6c, 0xd45a), (0x2d6d, 0xd45b),
    (0x2d6e, 0xd45d), (0x2d6f, 0xd45e), (0x2d70, 0xd45f), (0x2d71, 0xd461), (0x2d72, 0xd462), (0x2d73, 0xd463),
    (0x2d74, 0xd465), (0x2d75, 0xd466), (0x2d76, 0xd467), (0x2d77, 0xd468), (0x2d78, 0xd469), (0x2d79, 0xd46a),
    (0x2d7a, 0xd46b), (0x2d7b, 0xd46c), (0x2d7c, 0xd46e), (0x2d7d, 0xd470), (0x2d7e, 0xd471), (0x2d7f, 0xd472),
    (0x2d86, 0xd473), (0x2d87, 0xd474), (0x2d88, 0xd475), (0x2d89, 0xd476), (0x2d8a, 0xd477), (0x2d8b, 0xd47a),
    (0x2d8c, 0xd47b), (0x2d8d, 0xd47d), (0x2d8e, 0xd47e), (0x2d8f, 0xd481), (0x2d90, 0xd483), (0x2d91, 0xd484),
    (0x2d92, 0xd485), (0x2d93, 0xd486), (0x2d94, 0xd487), (0x2d95, 0xd48a), (0x2d96, 0xd48c), (0x2d97, 0xd48e),
    (0x2d98, 0xd48f), (0x2d99, 0xd490), (0x2d9a, 0xd491), (0x2d9b, 0xd492), (0x2d9c, 0xd493), (0x2d9d, 0xd495),
    (0x2d9e, 0xd496), (0x2d9f, 0xd497), (0x2da0, 0xd498), (0x2da1, 0xd499), (0x2da2, 0xd49a), (0x2da3, 0xd49b),
    (0x2da4, 0xd49c), (0x2da5, 0xd49d), (0x2da6, 0xc434), (0x2da7, 0xc43c), (0x2da8, 0xc43d), (0x2da9, 0xc448),
    (0x2daa, 0xc464), (0x2dab, 0xc465), (0x2dac, 0xc468), (0x2dad, 0xc46c), (0x2dae, 0xc474), (0x2daf, 0xc475),
    (0x2db0, 0xc479), (0x2db1, 0xc480), (0x2db2, 0xc494), (0x2db3, 0xc49c), (0x2db4, 0xc4b8), (0x2db5, 0xc4bc),
    (0x2db6, 0xc4e9), (0x2db7, 0xc4f0), (0x2db8, 0xc4f1), (0x2db9, 0xc4f4), (0x2dba, 0xc4f8), (0x2dbb, 0xc4fa),
    (0x2dbc, 0xc4ff), (0x2dbd, 0xc500), (0x2dbe, 0xc501), (0x2dbf, 0xc50c), (0x2dc0, 0xc510), (0x2dc1, 0xc514),
    (0x2dc2, 0xc51c), (0x2dc3, 0xc528), (0x2dc4, 0xc529), (0x2dc5, 0xc52c), (0x2dc6, 0xc530), (0x2dc7, 0xc538),
    (0x2dc8, 0xc539), (0x2dc9, 0xc53b), (0x2dca, 0xc53d), (0x2dcb, 0xc544), (0x2dcc, 0xc545), (0x2dcd, 0xc548),
    (0x2dce, 0xc549), (0x2dcf, 0xc54a), (0x2dd0, 0xc54c), (0x2dd1, 0xc54d), (0x2dd2, 0xc54e), (0x2dd3, 0xc553),
    (0x2dd4, 0xc554), (0x2dd5, 0xc555), (0x2dd6, 0xc557), (0x2dd7, 0xc558), (0x2dd8, 0xc559), (0x2dd9, 0xc55d),
    (0x2dda, 0xc55e), (0x2ddb, 0xc560), (0x2ddc, 0xc561), (0x2ddd, 0xc564), (0x2dde, 0xc568), (0x2ddf, 0xc570),
    (0x2de0, 0xc571), (0x2de1, 0xc573), (0x2de2, 0xc574), (0x2de3, 0xc575), (0x2de4, 0xc57c), (0x2de5, 0xc57d),
    (0x2de6, 0xc580), (0x2de7, 0xc584), (0x2de8, 0xc587), (0x2de9, 0xc58c), (0x2dea, 0xc58d), (0x2deb, 0xc58f),
    (0x2dec, 0xc591), (0x2ded, 0xc595), (0x2dee, 0xc597), (0x2def, 0xc598), (0x2df0, 0xc59c), (0x2df1, 0xc5a0),
    (0x2df2, 0xc5a9), (0x2df3, 0xc5b4), (0x2df4, 0xc5b5), (0x2df5, 0xc5b8), (0x2df6, 0xc5b9), (0x2df7, 0xc5bb),
    (0x2df8, 0xc5bc), (0x2df9, 0xc5bd), (0x2dfa, 0xc5be), (0x2dfb, 0xc5c4), (0x2dfc, 0xc5c5), (0x2dfd, 0xc5c6),
    (0x2dfe, 0xc5c7), (0x2dff, 0xc5c8), (0x2e00, 0xc5c9), (0x2e01, 0xc5ca), (0x2e02, 0xc5cc), (0x2e03, 0xc5ce),
    (0x2e04, 0xd49e), (0x2e05, 0xd49f), (0x2e06, 0xd4a0), (0x2e07, 0xd4a1), (0x2e08, 0xd4a2), (0x2e09, 0xd4a3),
    (0x2e0a, 0xd4a4), (0x2e0b, 0xd4a5), (0x2e0c, 0xd4a6), (0x2e0d, 0xd4a7), (0x2e0e, 0xd4a8), (0x2e0f, 0xd4aa),
    (0x2e10, 0xd4ab), (0x2e11, 0xd4ac), (0x2e12, 0xd4ad), (0x2e13, 0xd4ae), (0x2e14, 0xd4af), (0x2e15, 0xd4b0),
    (0x2e16, 0xd4b1), (0x2e17, 0xd4b2), (0x2e18, 0xd4b3), (0x2e19, 0xd4b4), (0x2e1a, 0xd4b5), (0x2e1b, 0xd4b6),
    (0x2e1c, 0xd4b7), (0x2e1d, 0xd4b8), (0x2e24, 0xd4b9), (0x2e25, 0xd4ba), (0x2e26, 0xd4bb), (0x2e27, 0xd4bc),
    (0x2e28, 0xd4bd), (0x2e29, 0xd4be), (0x2e2a, 0xd4bf), (0x2e2b, 0xd4c0), (0x2e2c, 0xd4c1), (0x2e2d, 0xd4c2),
    (0x2e2e, 0xd4c3), (0x2e2f, 0xd4c4), (0x2e30, 0xd4c5), (0x2e31, 0xd4c6), (0x2e32, 0xd4c7), (0x2e33, 0xd4c8),
    (0x2e34, 0xd4c9), (0x2e35, 0xd4ca), (0x2e36, 0xd4cb), (0x2e37, 0xd4cd), (0x2e38, 0xd4ce), (0x2e39, 0xd4cf),
    (0x2e3a, 0xd4d1), (0x2e3b, 0xd4d2), (0x2e3c, 0xd4d3), (0x2e3d, 0xd4d5), (0x2e44, 0xd4d6), (0x2e45, 0xd4d7),
    (0x2e46, 0xd4d8), (0x2e47, 0xd4d9), (0x2e48, 0xd4da), (0x2e49, 0xd4db), (0x2e4a, 0xd4dd), (0x2e4b, 0xd4de),
    (0x2e4c, 0xd4e0), (0x2e4d, 0xd4e1), (0x2e4e, 0xd4e2), (0x2e4f, 0xd4e3), (0x2e50, 0xd4e4), (0x2e51, 0xd4e5),
    (0x2e52, 0xd4e6), (0x2e53, 0xd4e7), (0x2e54, 0xd4e9), (0x2e55, 0xd4ea), (0x2e56, 0xd4eb), (0x2e57, 0xd4ed),
    (0x2e58, 0xd4ee), (0x2e59, 0xd4ef), (0x2e5a, 0xd4f1), (0x2e5b, 0xd4f2), (0x2e5c, 0xd4f3), (0x2e5d, 0xd4f4),
    (0x2e5e, 0xd4f5), (0x2e5f, 0xd4f6), (0x2e60, 0xd4f7), (0x2e61, 0xd4f9), (0x2e62, 0xd4fa), (0x2e63, 0xd4fc),
    (0x2e64, 0xc5d0), (0x2e65, 0xc5d1), (0x2e66, 0xc5d4), (0x2e67, 0xc5d8), (0x2e68, 0xc5e0), (0x2e69, 0xc5e1),
    (0x2e6a, 0xc5e3), (0x2e6b, 0xc5e5), (0x2e6c, 0xc5ec), (0x2e6d, 0xc5ed), (0x2e6e, 0xc5ee), (0x2e6f, 0xc5f0),
    (0x2e70, 0xc5f4), (0x2e71, 0xc5f6), (0x2e72, 0xc5f7), (0x2e73, 0xc5fc), (0x2e74, 0xc5fd), (0x2e75, 0xc5fe),
    (0x2e76, 0xc5ff), (0x2e77, 0xc600), (0x2e78, 0xc601), (0x2e79, 0xc605), (0x2e7a, 0xc606), (0x2e7b, 0xc607),
    (0x2e7c, 0xc608), (0x2e7d, 0xc60c), (0x2e7e, 0xc610), (0x2e7f, 0xc618), (0x2e80, 0xc619), (0x2e81, 0xc61b),
    (0x2e82, 0xc61c), (0x2e83, 0xc624), (0x2e84, 0xc625), (0x2e85, 0xc628), (0x2e86, 0xc62c), (0x2e87, 0xc62d),
    (0x2e88, 0xc62e), (0x2e89, 0xc630), (0x2e8a, 0xc633), (0x2e8b, 0xc634), (0x2e8c, 0xc635), (0x2e8d, 0xc637),
    (0x2e8e, 0xc639), (0x2e8f, 0xc63b), (0x2e90, 0xc640), (0x2e91, 0xc641), (0x2e92, 0xc644), (0x2e93, 0xc648),
    (0x2e94, 0xc650), (0x2e95, 0xc651), (0x2e96, 0xc653), (0x2e97, 0xc654), (0x2e98, 0xc655), (0x2e99, 0xc65c),
    (0x2e9a, 0xc65d), (0x2e9b, 0xc660), (0x2e9c, 0xc66c), (0x2e9d, 0xc66f), (0x2e9e, 0xc671), (0x2e9f, 0xc678),
    (0x2ea0, 0xc679), (0x2ea1, 0xc67c), (0x2ea2, 0xc680), (0x2ea3, 0xc688), (0x2ea4, 0xc689), (0x2ea5, 0xc68b),
    (0x2ea6, 0xc68d), (0x2ea7, 0xc694), (0x2ea8, 0xc695), (0x2ea9, 0xc698), (0x2eaa, 0xc69c), (0x2eab, 0xc6a4),
    (0x2eac, 0xc6a5), (0x2ead, 0xc6a7), (0x2eae, 0xc6a9), (0x2eaf, 0xc6b0), (0x2eb0, 0xc6b1), (0x2eb1, 0xc6b4),
    (0x2eb2, 0xc6b8), (0x2eb3, 0xc6b9), (0x2eb4, 0xc6ba), (0x2eb5, 0xc6c0), (0x2eb6, 0xc6c1), (0x2eb7, 0xc6c3),
    (0x2eb8, 0xc6c5), (0x2eb9, 0xc6cc), (0x2eba, 0xc6cd), (0x2ebb, 0xc6d0), (0x2ebc, 0xc6d4), (0x2ebd, 0xc6dc),
    (0x2ebe, 0xc6dd), (0x2ebf, 0xc6e0), (0x2ec0, 0xc6e1), (0x2ec1, 0xc6e8), (0x2ec2, 0xd4fe), (0x2ec3, 0xd4ff),
    (0x2ec4, 0xd500), (0x2ec5, 0xd501), (0x2ec6, 0xd502), (0x2ec7, 0xd503), (0x2ec8, 0xd505), (0x2ec9, 0xd506),
    (0x2eca, 0xd507), (0x2ecb, 0xd509), (0x2ecc, 0xd50a), (0x2ecd, 0xd50b), (0x2ece, 0xd50d), (0x2ecf, 0xd50e),
    (0x2ed0, 0xd50f), (0x2ed1, 0xd510), (0x2ed2, 0xd511), (0x2ed3, 0xd512), (0x2ed4, 0xd513), (0x2ed5, 0xd516),
    (0x2ed6, 0xd518), (0x2ed7, 0xd519), (0x2ed8, 0xd51a), (0x2ed9, 0xd51b), (0x2eda, 0xd51c), (0x2edb, 0xd51d),
    (0x2ee2, 0xd51e), (0x2ee3, 0xd51f), (0x2ee4, 0xd520), (0x2ee5, 0xd521), (0x2ee6, 0xd522), (0x2ee7, 0xd523),
    (0x2ee8, 0xd524), (0x2ee9, 0xd525), (0x2eea, 0xd526), (0x2eeb, 0xd527), (0x2eec, 0xd528), (0x2eed, 0xd529),
    (0x2eee, 0xd52a), (0x2eef, 0xd52b), (0x2ef0, 0xd52c), (0x2ef1, 0xd52d), (0x2ef2, 0xd52e), (0x2ef3, 0xd52f),
    (0x2ef4, 0xd530), (0x2ef5, 0xd531), (0x2ef6, 0xd532), (0x2ef7, 0xd533), (0x2ef8, 0xd534), (0x2ef9, 0xd535),
    (0x2efa, 0xd536), (0x2efb, 0xd537), (0x2f02, 0xd538), (0x2f03, 0xd539), (0x2f04, 0xd53a), (0x2f05, 0xd53b),
    (0x2f06, 0xd53e), (0x2f07, 0xd53f), (0x2f08, 0xd541), (0x2f09, 0xd542), (0x2f0a, 0xd543), (0x2f0b, 0xd545),
    (0x2f0c, 0xd546), (0x2f0d, 0xd547), (0x2f0e, 0xd548), (0x2f0f, 0xd549), (0x2f10, 0xd54a), (0x2f11, 0xd54b),
    (0x2f12, 0xd54e), (0x2f13, 0xd550), (0x2f14, 0xd552), (0x2f15, 0xd553), (0x2f16, 0xd554), (0x2f17, 0xd555),
    (0x2f18, 0xd556), (0x2f19, 0xd557), (0x2f1a, 0xd55a), (0x2f1b, 0xd55b), (0x2f1c, 0xd55d), (0x2f1d, 0xd55e),
    (0x2f1e, 0xd55f), (0x2f1f, 0xd561), (0x2f20, 0xd562), (0x2f21, 0xd563), (0x2f22, 0xc6e9), (0x2f23, 0xc6ec),
    (0x2f24, 0xc6f0), (0x2f25, 0xc6f8), (0x2f26, 0xc6f9), (0x2f27, 0xc6fd), (0x2f28, 0xc704), (0x2f29, 0xc705),
    (0x2f2a, 0xc708), (0x2f2b, 0xc70c), (0x2f2c, 0xc714), (0x2f2d, 0xc715), (0x2f2e, 0xc717), (0x2f2f, 0xc719),
    (0x2f30, 0xc720), (0x2f31, 0xc721), (0x2f32, 0xc724), (0x2f33, 0xc728), (0x2f34, 0xc730), (0x2f35, 0xc731),
    (0x2f36, 0xc733), (0x2f37, 0xc735), (0x2f38, 0xc737), (0x2f39, 0xc73c), (0x2f3a, 0xc73d), (0x2f3b, 0xc740),
    (0x2f3c, 0xc744), (0x2f3d, 0xc74a), (0x2f3e, 0xc74c), (0x2f3f, 0xc74d), (0x2f40, 0xc74f), (0x2f41, 0xc751),
    (0x2f42, 0xc752), (0x2f43, 0xc753), (0x2f44, 0xc754), (0x2f45, 0xc755), (0x2f46, 0xc756), (0x2f47, 0xc757),
    (0x2f48, 0xc758), (0x2f49, 0xc75c), (0x2f4a, 0xc760), (0x2f4b, 0xc768), (0x2f4c, 0xc76b), (0x2f4d, 0xc774),
    (0x2f4e, 0xc775), (0x2f4f, 0xc778), (0x2f50, 0xc77c), (0x2f51, 0xc77d), (0x2f52, 0xc77e), (0x2f53, 0xc783),
    (0x2f54, 0xc784), (0x2f55, 0xc785), (0x2f56, 0xc787), (0x2f57, 0xc788), (0x2f58, 0xc789), (0x2f59, 0xc78a),
    (0x2f5a, 0xc78e), (0x2f5b, 0xc790), (0x2f5c, 0xc791), (0x2f5d, 0xc794), (0x2f5e, 0xc796), (0x2f5f, 0xc797),
    (0x2f60, 0xc798), (0x2f61, 0xc79a), (0x2f62, 0xc7a0), (0x2f63, 0xc7a1), (0x2f64, 0xc7a3), (0x2f65, 0xc7a4),
    (0x2f66, 0xc7a5), (0x2f67, 0xc7a6), (0x2f68, 0xc7ac), (0x2f69, 0xc7ad), (0x2f6a, 0xc7b0), (0x2f6b, 0xc7b4),
    (0x2f6c, 0xc7bc), (0x2f6d, 0xc7bd), (0x2f6e, 0xc7bf), (0x2f6f, 0xc7c0), (0x2f70, 0xc7c1), (0x2f71, 0xc7c8),
    (0x2f72, 0xc7c9), (0x2f73, 0xc7cc), (0x2f74, 0xc7ce), (0x2f75, 0xc7d0), (0x2f76, 0xc7d8), (0x2f77, 0xc7dd),
    (0x2f78, 0xc7e4), (0x2f79, 0xc7e8), (0x2f7a, 0xc7ec), (0x2f7b, 0xc800), (0x2f7c, 0xc801), (0x2f7d, 0xc804),
    (0x2f7e, 0xc808), (0x2f7f, 0xc80a), (0x2f80, 0xd564), (0x2f81, 0xd566), (0x2f82, 0xd567), (0x2f83, 0xd56a),
    (0x2f84, 0xd56c), (0x2f85, 0xd56e), (0x2f86, 0xd56f), (0x2f87, 0xd570), (0x2f88, 0xd571), (0x2f89, 0xd572),
    (0x2f8a, 0xd573), (0x2f8b, 0xd576), (0x2f8c, 0xd577), (0x2f8d, 0xd579), (0x2f8e, 0xd57a), (0x2f8f, 0xd57b),
    (0x2f90, 0xd57d), (0x2f91, 0xd57e), (0x2f92, 0xd57f), (0x2f93, 0xd580), (0x2f94, 0xd581), (0x2f95, 0xd582),
    (0x2f96, 0xd583), (0x2f97, 0xd586), (0x2f98, 0xd58a), (0x2f99, 0xd58b), (0x2fa0, 0xd58c), (0x2fa1, 0xd58d),
    (0x2fa2, 0xd58e), (0x2fa3, 0xd58f), (0x2fa4, 0xd591), (0x2fa5, 0xd592), (0x2fa6, 0xd593), (0x2fa7, 0xd594),
    (0x2fa8, 0xd595), (0x2fa9, 0xd596), (0x2faa, 0xd597), (0x2fab, 0xd598), (0x2fac, 0xd599), (0x2fad, 0xd59a),
    (0x2fae, 0xd59b), (0x2faf, 0xd59c), (0x2fb0, 0xd59d), (0x2fb1, 0xd59e), (0x2fb2, 0xd59f), (0x2fb3, 0xd5a0),
    (0x2fb4, 0xd5a1), (0x2fb5, 0xd5a2), (0x2fb6, 0xd5a3), (0x2fb7, 0xd5a4), (0x2fb8, 0xd5a6), (0x2fb9, 0xd5a7),
    (0x2fc0, 0xd5a8), (0x2fc1, 0xd5a9), (0x2fc2, 0xd5aa), (0x2fc3, 0xd5ab), (0x2fc4, 0xd5ac), (0x2fc5, 0xd5ad),
    (0x2fc6, 0xd5ae), (0x2fc7, 0xd5af), (0x2fc8, 0xd5b0), (0x2fc9, 0xd5b1), (0x2fca, 0xd5b2), (0x2fcb, 0xd5b3),
    (0x2fcc, 0xd5b4), (0x2fcd, 0xd5b5), (0x2fce, 0xd5b6), (0x2fcf, 0xd5b7), (0x2fd0, 0xd5b8), (0x2fd1, 0xd5b9),
    (0x2fd2, 0xd5ba), (0x2fd3, 0xd5bb), (0x2fd4, 0xd5bc), (0x2fd5, 0xd5bd), (0x2fd6, 0xd5be), (0x2fd7, 0xd5bf),
    (0x2fd8, 0xd5c0), (0x2fd9, 0xd5c1), (0x2fda, 0xd5c2), (0x2fdb, 0xd5c3), (0x2fdc, 0xd5c4), (0x2fdd, 0xd5c5),
    (0x2fde, 0xd5c6), (0x2fdf, 0xd5c7), (0x2fe0, 0xc810), (0x2fe1, 0xc811), (0x2fe2, 0xc813), (0x2fe3, 0xc815),
    (0x2fe4, 0xc816), (0x2fe5, 0xc81c), (0x2fe6, 0xc81d), (0x2fe7, 0xc820), (0x2fe8, 0xc824), (0x2fe9, 0xc82c),
    (0x2fea, 0xc82d), (0x2feb, 0xc82f), (0x2fec, 0xc831), (0x2fed, 0xc838), (0x2fee, 0xc83c), (0x2fef, 0xc840),
    (0x2ff0, 0xc848), (0x2ff1, 0xc849), (0x2ff2, 0xc84c), (0x2ff3, 0xc84d), (0x2ff4, 0xc854), (0x2ff5, 0xc870),
    (0x2ff6, 0xc871), (0x2ff7, 0xc874), (0x2ff8, 0xc878), (0x2ff9, 0xc87a), (0x2ffa, 0xc880), (0x2ffb, 0xc881),
    (0x2ffc, 0xc883), (0x2ffd, 0xc885), (0x2ffe, 0xc886), (0x2fff, 0xc887), (0x3000, 0xc88b), (0x3001, 0xc88c),
    (0x3002, 0xc88d), (0x3003, 0xc894), (0x3004, 0xc89d), (0x3005, 0xc89f), (0x3006, 0xc8a1), (0x3007, 0xc8a8),
    (0x3008, 0xc8bc), (0x3009, 0xc8bd), (0x300a, 0xc8c4), (0x300b, 0xc8c8), (0x300c, 0xc8cc), (0x300d, 0xc8d4),
    (0x300e, 0xc8d5), (0x300f, 0xc8d7), (0x3010, 0xc8d9), (0x3011, 0xc8e0), (0x3012, 0xc8e1), (0x3013, 0xc8e4),
    (0x3014, 0xc8f5), (0x3015, 0xc8fc), (0x3016, 0xc8fd), (0x3017, 0xc900), (0x3018, 0xc904), (0x3019, 0xc905),
    (0x301a, 0xc906), (0x301b, 0xc90c), (0x301c, 0xc90d), (0x301d, 0xc90f), (0x301e, 0xc911), (0x301f, 0xc918),
    (0x3020, 0xc92c), (0x3021, 0xc934), (0x3022, 0xc950), (0x3023, 0xc951), (0x3024, 0xc954), (0x3025, 0xc958),
    (0x3026, 0xc960), (0x3027, 0xc961), (0x3028, 0xc963), (0x3029, 0xc96c), (0x302a, 0xc970), (0x302b, 0xc974),
    (0x302c, 0xc97c), (0x302d, 0xc988), (0x302e, 0xc989), (0x302f, 0xc98c), (0x3030, 0xc990), (0x3031, 0xc998),
    (0x3032, 0xc999), (0x3033, 0xc99b), (0x3034, 0xc99d), (0x3035, 0xc9c0), (0x3036, 0xc9c1), (0x3037, 0xc9c4),
    (0x3038, 0xc9c7), (0x3039, 0xc9c8), (0x303a, 0xc9ca), (0x303b, 0xc9d0), (0x303c, 0xc9d1), (0x303d, 0xc9d3),
    (0x303e, 0xd5ca), (0x303f, 0xd5cb), (0x3040, 0xd5cd), (0x3041, 0xd5ce), (0x3042, 0xd5cf), (0x3043, 0xd5d1),
    (0x3044, 0xd5d3), (0x3045, 0xd5d4), (0x3046, 0xd5d5), (0x3047, 0xd5d6), (0x3048, 0xd5d7), (0x3049, 0xd5da),
    (0x304a, 0xd5dc), (0x304b, 0xd5de), (0x304c, 0xd5df), (0x304d, 0xd5e0), (0x304e, 0xd5e1), (0x304f, 0xd5e2),
    (0x3050, 0xd5e3), (0x3051, 0xd5e6), (0x3052, 0xd5e7), (0x3053, 0xd5e9), (0x3054, 0xd5ea), (0x3055, 0xd5eb),
    (0x3056, 0xd5ed), (0x3057, 0xd5ee), (0x305e, 0xd5ef), (0x305f, 0xd5f0), (0x3060, 0xd5f1), (0x3061, 0xd5f2),
    (0x3062, 0xd5f3), (0x3063, 0xd5f6), (0x3064, 0xd5f8), (0x3065, 0xd5fa), (0x3066, 0xd5fb), (0x3067, 0xd5fc),
    (0x3068, 0xd5fd), (0x3069, 0xd5fe), (0x306a, 0xd5ff), (0x306b, 0xd602), (0x306c, 0xd603), (0x306d, 0xd605),
    (0x306e, 0xd606), (0x306f, 0xd607), (0x3070, 0xd609), (0x3071, 0xd60a), (0x3072, 0xd60b), (0x3073, 0xd60c),
    (0x3074, 0xd60d), (0x3075, 0xd60e), (0x3076, 0xd60f), (0x3077, 0xd612), (0x307e, 0xd616), (0x307f, 0xd617),
    (0x3080, 0xd618), (0x3081, 0xd619), (0x3082, 0xd61a), (0x3083, 0xd61b), (0x3084, 0xd61d), (0x3085, 0xd61e),
    (0x3086, 0xd61f), (0x3087, 0xd621), (0x3088, 0xd622), (0x3089, 0xd623), (0x308a, 0xd625), (0x308b, 0xd626),
    (0x308c, 0xd627), (0x308d, 0xd628), (0x308e, 0xd629), (0x308f, 0xd62a), (0x3090, 0xd62b), (0x3091, 0xd62c),
    (0x3092, 0xd62e), (0x3093, 0xd62f), (0x3094, 0xd630), (0x3095, 0xd631), (0x3096, 0xd632), (0x3097, 0xd633),
    (0x3098, 0xd634), (0x3099, 0xd635), (0x309a, 0xd636), (0x309b, 0xd637), (0x309c, 0xd63a), (0x309d, 0xd63b),
    (0x309e, 0xc9d5), (0x309f, 0xc9d6), (0x30a0, 0xc9d9), (0x30a1, 0xc9da), (0x30a2, 0xc9dc), (0x30a3, 0xc9dd),
    (0x30a4, 0xc9e0), (0x30a5, 0xc9e2), (0x30a6, 0xc9e4), (0x30a7, 0xc9e7), (0x30a8, 0xc9ec), (0x30a9, 0xc9ed),
    (0x30aa, 0xc9ef), (0x30ab, 0xc9f0), (0x30ac, 0xc9f1), (0x30ad, 0xc9f8), (0x30ae, 0xc9f9), (0x30af, 0xc9fc),
    (0x30b0, 0xca00), (0x30b1, 0xca08), (0x30b2, 0xca09), (0x30b3, 0xca0b), (0x30b4, 0xca0c), (0x30b5, 0xca0d),
    (0x30b6, 0xca14), (0x30b7, 0xca18), (0x30b8, 0xca29), (0x30b9, 0xca4c), (0x30ba, 0xca4d), (0x30bb, 0xca50),
    (0x30bc, 0xca54), (0x30bd, 0xca5c), (0x30be, 0xca5d), (0x30bf, 0xca5f), (0x30c0, 0xca60), (0x30c1, 0xca61),
    (0x30c2, 0xca68), (0x30c3, 0xca7d), (0x30c4, 0xca84), (0x30c5, 0xca98), (0x30c6, 0xcabc), (0x30c7, 0xcabd),
    (0x30c8, 0xcac0), (0x30c9, 0xcac4), (0x30ca, 0xcacc), (0x30cb, 0xcacd), (0x30cc, 0xcacf), (0x30cd, 0xcad1),
    (0x30ce, 0xcad3), (0x30cf, 0xcad8), (0x30d0, 0xcad9), (0x30d1, 0xcae0), (0x30d2, 0xcaec), (0x30d3, 0xcaf4),
    (0x30d4, 0xcb08), (0x30d5, 0xcb10), (0x30d6, 0xcb14), (0x30d7, 0xcb18), (0x30d8, 0xcb20), (0x30d9, 0xcb21),
    (0x30da, 0xcb41), (0x30db, 0xcb48), (0x30dc, 0xcb49), (0x30dd, 0xcb4c), (0x30de, 0xcb50), (0x30df, 0xcb58),
    (0x30e0, 0xcb59), (0x30e1, 0xcb5d), (0x30e2, 0xcb64), (0x30e3, 0xcb78), (0x30e4, 0xcb79), (0x30e5, 0xcb9c),
    (0x30e6, 0xcbb8), (0x30e7, 0xcbd4), (0x30e8, 0xcbe4), (0x30e9, 0xcbe7), (0x30ea, 0xcbe9), (0x30eb, 0xcc0c),
    (0x30ec, 0xcc0d), (0x30ed, 0xcc10), (0x30ee, 0xcc14), (0x30ef, 0xcc1c), (0x30f0, 0xcc1d), (0x30f1, 0xcc21),
    (0x30f2, 0xcc22), (0x30f3, 0xcc27), (0x30f4, 0xcc28), (0x30f5, 0xcc29), (0x30f6, 0xcc2c), (0x30f7, 0xcc2e),
    (0x30f8, 0xcc30), (0x30f9, 0xcc38), (0x30fa, 0xcc39), (0x30fb, 0xcc3b), (0x30fc, 0xd63d), (0x30fd, 0xd63e),
    (0x30fe, 0xd63f), (0x30ff, 0xd641), (0x3100, 0xd642), (0x3101, 0xd643), (0x3102, 0xd644), (0x3103, 0xd646),
    (0x3104, 0xd647), (0x3105, 0xd64a), (0x3106, 0xd64c), (0x3107, 0xd64e), (0x3108, 0xd64f), (0x3109, 0xd650),
    (0x310a, 0xd652), (0x310b, 0xd653), (0x310c, 0xd656), (0x310d, 0xd657), (0x310e, 0xd659), (0x310f, 0xd65a),
    (0x3110, 0xd65b), (0x3111, 0xd65d), (0x3112, 0xd65e), (0x3113, 0xd65f), (0x3114, 0xd660), (0x3115, 0xd661),
    (0x311c, 0xd662), (0x311d, 0xd663), (0x311e, 0xd664), (0x311f, 0xd665), (0x3120, 0xd666), (0x3121, 0xd668),
    (0x3122, 0xd66a), (0x3123, 0xd66b), (0x3124, 0xd66c), (0x3125, 0xd66d), (0x3126, 0xd66e), (0x3127, 0xd66f),
    (0x3128, 0xd672), (0x3129, 0xd673), (0x312a, 0xd675), (0x312b, 0xd676), (0x312c, 0xd677), (0x312d, 0xd678),
    (0x312e, 0xd679), (0x312f, 0xd67a), (0x3130, 0xd67b), (0x3131, 0xd67c), (0x3132, 0xd67d), (0x3133, 0xd67e),
    (0x3134, 0xd67f), (0x3135, 0xd680), (0x313c, 0xd681), (0x313d, 0xd682), (0x313e, 0xd684), (0x313f, 0xd686),
    (0x3140, 0xd687), (0x3141, 0xd688), (0x3142, 0xd689), (0x3143, 0xd68a), (0x3144, 0xd68b), (0x3145, 0xd68e),
    (0x3146, 0xd68f), (0x3147, 0xd691), (0x3148, 0xd692), (0x3149, 0xd693), (0x314a, 0xd695), (0x314b, 0xd696),
    (0x314c, 0xd697), (0x314d, 0xd698), (0x314e, 0xd699), (0x314f, 0xd69a), (0x3150, 0xd69b), (0x3151, 0xd69c),
    (0x3152, 0xd69e), (0x3153, 0xd6a0), (0x3154, 0xd6a2), (0x3155, 0xd6a3), (0x3156, 0xd6a4), (0x3157, 0xd6a5),
    (0x3158, 0xd6a6), (0x3159, 0xd6a7), (0x315a, 0xd6a9), (0x315b, 0xd6aa), (0x315c, 0xcc3c), (0x315d, 0xcc3d),
    (0x315e, 0xcc3e), (0x315f, 0xcc44), (0x3160, 0xcc45), (0x3161, 0xcc48), (0x3162, 0xcc4c), (0x3163, 0xcc54),
    (0x3164, 0xcc55), (0x3165, 0xcc57), (0x3166, 0xcc58), (0x3167, 0xcc59), (0x3168, 0xcc60), (0x3169, 0xcc64),
    (0x316a, 0xcc66), (0x316b, 0xcc68), (0x316c, 0xcc70), (0x316d, 0xcc75), (0x316e, 0xcc98), (0x316f, 0xcc99),
    (0x3170, 0xcc9c), (0x3171, 0xcca0), (0x3172, 0xcca8), (0x3173, 0xcca9), (0x3174, 0xccab), (0x3175, 0xccac),
    (0x3176, 0xccad), (0x3177, 0xccb4), (0x3178, 0xccb5), (0x3179, 0xccb8), (0x317a, 0xccbc), (0x317b, 0xccc4),
    (0x317c, 0xccc5), (0x317d, 0xccc7), (0x317e, 0xccc9), (0x317f, 0xccd0), (0x3180, 0xccd4), (0x3181, 0xcce4),
    (0x3182, 0xccec), (0x3183, 0xccf0), (0x3184, 0xcd01), (0x3185, 0xcd08), (0x3186, 0xcd09), (0x3187, 0xcd0c),
    (0x3188, 0xcd10), (0x3189, 0xcd18), (0x318a, 0xcd19), (0x318b, 0xcd1b), (0x318c, 0xcd1d), (0x318d, 0xcd24),
    (0x318e, 0xcd28), (0x318f, 0xcd2c), (0x3190, 0xcd39), (0x3191, 0xcd5c), (0x3192, 0xcd60), (0x3193, 0xcd64),
    (0x3194, 0xcd6c), (0x3195, 0xcd6d), (0x3196, 0xcd6f), (0x3197, 0xcd71), (0x3198, 0xcd78), (0x3199, 0xcd88),
    (0x319a, 0xcd94), (0x319b, 0xcd95), (0x319c, 0xcd98), (0x319d, 0xcd9c), (0x319e, 0xcda4), (0x319f, 0xcda5),
    (0x31a0, 0xcda7), (0x31a1, 0xcda9), (0x31a2, 0xcdb0), (0x31a3, 0xcdc4), (0x31a4, 0xcdcc), (0x31a5, 0xcdd0),
    (0x31a6, 0xcde8), (0x31a7, 0xcdec), (0x31a8, 0xcdf0), (0x31a9, 0xcdf8), (0x31aa, 0xcdf9), (0x31ab, 0xcdfb),
    (0x31ac, 0xcdfd), (0x31ad, 0xce04), (0x31ae, 0xce08), (0x31af, 0xce0c), (0x31b0, 0xce14), (0x31b1, 0xce19),
    (0x31b2, 0xce20), (0x31b3, 0xce21), (0x31b4, 0xce24), (0x31b5, 0xce28), (0x31b6, 0xce30), (0x31b7, 0xce31),
    (0x31b8, 0xce33), (0x31b9, 0xce35), (0x31ba, 0xd6ab), (0x31bb, 0xd6ad), (0x31bc, 0xd6ae), (0x31bd, 0xd6af),
    (0x31be, 0xd6b1), (0x31bf, 0xd6b2), (0x31c0, 0xd6b3), (0x31c1, 0xd6b4), (0x31c2, 0xd6b5), (0x31c3, 0xd6b6),
    (0x31c4, 0xd6b7), (0x31c5, 0xd6b8), (0x31c6, 0xd6ba), (0x31c7, 0xd6bc), (0x31c8, 0xd6bd), (0x31c9, 0xd6be),
    (0x31ca, 0xd6bf), (0x31cb, 0xd6c0), (0x31cc, 0xd6c1), (0x31cd, 0xd6c2), (0x31ce, 0xd6c3), (0x31cf, 0xd6c6),
    (0x31d0, 0xd6c7), (0x31d1, 0xd6c9), (0x31d2, 0xd6ca), (0x31d3, 0xd6cb), (0x31da, 0xd6cd), (0x31db, 0xd6ce),
    (0x31dc, 0xd6cf), (0x31dd, 0xd6d0), (0x31de, 0xd6d2), (0x31df, 0xd6d3), (0x31e0, 0xd6d5), (0x31e1, 0xd6d6),
    (0x31e2, 0xd6d8), (0x31e3, 0xd6da), (0x31e4, 0xd6db), (0x31e5, 0xd6dc), (0x31e6, 0xd6dd), (0x31e7, 0xd6de),
    (0x31e8, 0xd6df), (0x31e9, 0xd6e1), (0x31ea, 0xd6e2), (0x31eb, 0xd6e3), (0x31ec, 0xd6e5), (0x31ed, 0xd6e6),
    (0x31ee, 0xd6e7), (0x31ef, 0xd6e9), (0x31f0, 0xd6ea), (0x31f1, 0xd6eb), (0x31f2, 0xd6ec), (0x31f3, 0xd6ed),
    (0x31fa, 0xd6ee), (0x31fb, 0xd6ef), (0x31fc, 0xd6f1), (0x31fd, 0xd6f2), (0x31fe, 0xd6f3), (0x31ff, 0xd6f4),
    (0x3200, 0xd6f6), (0x3201, 0xd6f7), (0x3202, 0xd6f8), (0x3203, 0xd6f9), (0x3204, 0xd6fa), (0x3205, 0xd6fb),
    (0x3206, 0xd6fe), (0x3207, 0xd6ff), (0x3208, 0xd701), (0x3209, 0xd702), (0x320a, 0xd703), (0x320b, 0xd705),
    (0x320c, 0xd706), (0x320d, 0xd707), (0x320e, 0xd708), (0x320f, 0xd709), (0x3210, 0xd70a), (0x3211, 0xd70b),
    (0x3212, 0xd70c), (0x3213, 0xd70d), (0x3214, 0xd70e), (0x3215, 0xd70f), (0x3216, 0xd710), (0x3217, 0xd712),
    (0x3218, 0xd713), (0x3219, 0xd714), (0x321a, 0xce58), (0x321b, 0xce59), (0x321c, 0xce5c), (0x321d, 0xce5f),
    (0x321e, 0xce60), (0x321f, 0xce61), (0x3220, 0xce68), (0x3221, 0xce69), (0x3222, 0xce6b), (0x3223, 0xce6d),
    (0x3224, 0xce74), (0x3225, 0xce75), (0x3226, 0xce78), (0x3227, 0xce7c), (0x3228, 0xce84), (0x3229, 0xce85),
    (0x322a, 0xce87), (0x322b, 0xce89), (0x322c, 0xce90), (0x322d, 0xce91), (0x322e, 0xce94), (0x322f, 0xce98),
    (0x3230, 0xcea0), (0x3231, 0xcea1), (0x3232, 0xcea3), (0x3233, 0xcea4), (0x3234, 0xcea5), (0x3235, 0xceac),
    (0x3236, 0xcead), (0x3237, 0xcec1), (0x3238, 0xcee4), (0x3239, 0xcee5), (0x323a, 0xcee8), (0x323b, 0xceeb),
    (0x323c, 0xceec), (0x323d, 0xcef4), (0x323e, 0xcef5), (0x323f, 0xcef7), (0x3240, 0xcef8), (0x3241, 0xcef9),
    (0x3242, 0xcf00), (0x3243, 0xcf01), (0x3244, 0xcf04), (0x3245, 0xcf08), (0x3246, 0xcf10), (0x3247, 0xcf11),
    (0x3248, 0xcf13), (0x3249, 0xcf15), (0x324a, 0xcf1c), (0x324b, 0xcf20), (0x324c, 0xcf24), (0x324d, 0xcf2c),
    (0x324e, 0xcf2d), (0x324f, 0xcf2f), (0x3250, 0xcf30), (0x3251, 0xcf31), (0x3252, 0xcf38), (0x3253, 0xcf54),
    (0x3254, 0xcf55), (0x3255, 0xcf58), (0x3256, 0xcf5c), (0x3257, 0xcf64), (0x3258, 0xcf65), (0x3259, 0xcf67),
    (0x325a, 0xcf69), (0x325b, 0xcf70), (0x325c, 0xcf71), (0x325d, 0xcf74), (0x325e, 0xcf78), (0x325f, 0xcf80),
    (0x3260, 0xcf85), (0x3261, 0xcf8c), (0x3262, 0xcfa1), (0x3263, 0xcfa8), (0x3264, 0xcfb0), (0x3265, 0xcfc4),
    (0x3266, 0xcfe0), (0x3267, 0xcfe1), (0x3268, 0xcfe4), (0x3269, 0xcfe8), (0x326a, 0xcff0), (0x326b, 0xcff1),
    (0x326c, 0xcff3), (0x326d, 0xcff5), (0x326e, 0xcffc), (0x326f, 0xd000), (0x3270, 0xd004), (0x3271, 0xd011),
    (0x3272, 0xd018), (0x3273, 0xd02d), (0x3274, 0xd034), (0x3275, 0xd035), (0x3276, 0xd038), (0x3277, 0xd03c),
    (0x3278, 0xd715), (0x3279, 0xd716), (0x327a, 0xd717), (0x327b, 0xd71a), (0x327c, 0xd71b), (0x327d, 0xd71d),
    (0x327e, 0xd71e), (0x327f, 0xd71f), (0x3280, 0xd721), (0x3281, 0xd722), (0x3282, 0xd723), (0x3283, 0xd724),
    (0x3284, 0xd725), (0x3285, 0xd726), (0x3286, 0xd727), (0x3287, 0xd72a), (0x3288, 0xd72c), (0x3289, 0xd72e),
    (0x328a, 0xd72f), (0x328b, 0xd730), (0x328c, 0xd731), (0x328d, 0xd732), (0x328e, 0xd733), (0x328f, 0xd736),
    (0x3290, 0xd737), (0x3291, 0xd739), (0x3298, 0xd73a), (0x3299, 0xd73b), (0x329a, 0xd73d), (0x329b, 0xd73e),
    (0x329c, 0xd73f), (0x329d, 0xd740), (0x329e, 0xd741), (0x329f, 0xd742), (0x32a0, 0xd743), (0x32a1, 0xd745),
    (0x32a2, 0xd746), (0x32a3, 0xd748), (0x32a4, 0xd74a), (0x32a5, 0xd74b), (0x32a6, 0xd74c), (0x32a7, 0xd74d),
    (0x32a8, 0xd74e), (0x32a9, 0xd74f), (0x32aa, 0xd752), (0x32ab, 0xd753), (0x32ac, 0xd755), (0x32ad, 0xd75a),
    (0x32ae, 0xd75b), (0x32af, 0xd75c), (0x32b0, 0xd75d), (0x32b1, 0xd75e), (0x32b8, 0xd75f), (0x32b9, 0xd762),
    (0x32ba, 0xd764), (0x32bb, 0xd766), (0x32bc, 0xd767), (0x32bd, 0xd768), (0x32be, 0xd76a), (0x32bf, 0xd76b),
    (0x32c0, 0xd76d), (0x32c1, 0xd76e), (0x32c2, 0xd76f), (0x32c3, 0xd771), (0x32c4, 0xd772), (0x32c5, 0xd773),
    (0x32c6, 0xd775), (0x32c7, 0xd776), (0x32c8, 0xd777), (0x32c9, 0xd778), (0x32ca, 0xd779), (0x32cb, 0xd77a),
    (0x32cc, 0xd77b), (0x32cd, 0xd77e), (0x32ce, 0xd77f), (0x32cf, 0xd780), (0x32d0, 0xd782), (0x32d1, 0xd783),
    (0x32d2, 0xd784), (0x32d3, 0xd785), (0x32d4, 0xd786), (0x32d5, 0xd787), (0x32d6, 0xd78a), (0x32d7, 0xd78b),
    (0x32d8, 0xd044), (0x32d9, 0xd045), (0x32da, 0xd047), (0x32db, 0xd049), (0x32dc, 0xd050), (0x32dd, 0xd054),
    (0x32de, 0xd058), (0x32df, 0xd060), (0x32e0, 0xd06c), (0x32e1, 0xd06d), (0x32e2, 0xd070), (0x32e3, 0xd074),
    (0x32e4, 0xd07c), (0x32e5, 0xd07d), (0x32e6, 0xd081), (0x32e7, 0xd0a4), (0x32e8, 0xd0a5), (0x32e9, 0xd0a8),
    (0x32ea, 0xd0ac), (0x32eb, 0xd0b4), (0x32ec, 0xd0b5), (0x32ed, 0xd0b7), (0x32ee, 0xd0b9), (0x32ef, 0xd0c0),
    (0x32f0, 0xd0c1), (0x32f1, 0xd0c4), (0x32f2, 0xd0c8), (0x32f3, 0xd0c9), (0x32f4, 0xd0d0), (0x32f5, 0xd0d1),
    (0x32f6, 0xd0d3), (0x32f7, 0xd0d4), (0x32f8, 0xd0d5), (0x32f9, 0xd0dc), (0x32fa, 0xd0dd), (0x32fb, 0xd0e0),
    (0x32fc, 0xd0e4), (0x32fd, 0xd0ec), (0x32fe, 0xd0ed), (0x32ff, 0xd0ef), (0x3300, 0xd0f0), (0x3301, 0xd0f1),
    (0x3302, 0xd0f8), (0x3303, 0xd10d), (0x3304, 0xd130), (0x3305, 0xd131), (0x3306, 0xd134), (0x3307, 0xd138),
    (0x3308, 0xd13a), (0x3309, 0xd140), (0x330a, 0xd141), (0x330b, 0xd143), (0x330c, 0xd144), (0x330d, 0xd145),
    (0x330e, 0xd14c), (0x330f, 0xd14d), (0x3310, 0xd150), (0x3311, 0xd154), (0x3312, 0xd15c), (0x3313, 0xd15d),
    (0x3314, 0xd15f), (0x3315, 0xd161), (0x3316, 0xd168), (0x3317, 0xd16c), (0x3318, 0xd17c), (0x3319, 0xd184),
    (0x331a, 0xd188), (0x331b, 0xd1a0), (0x331c, 0xd1a1), (0x331d, 0xd1a4), (0x331e, 0xd1a8), (0x331f, 0xd1b0),
    (0x3320, 0xd1b1), (0x3321, 0xd1b3), (0x3322, 0xd1b5), (0x3323, 0xd1ba), (0x3324, 0xd1bc), (0x3325, 0xd1c0),
    (0x3326, 0xd1d8), (0x3327, 0xd1f4), (0x3328, 0xd1f8), (0x3329, 0xd207), (0x332a, 0xd209), (0x332b, 0xd210),
    (0x332c, 0xd22c), (0x332d, 0xd22d), (0x332e, 0xd230), (0x332f, 0xd234), (0x3330, 0xd23c), (0x3331, 0xd23d),
    (0x3332, 0xd23f), (0x3333, 0xd241), (0x3334, 0xd248), (0x3335, 0xd25c), (0x3336, 0xd78d), (0x3337, 0xd78e),
    (0x3338, 0xd78f), (0x3339, 0xd791), (0x333a, 0xd792), (0x333b, 0xd793), (0x333c, 0xd794), (0x333d, 0xd795),
    (0x333e, 0xd796), (0x333f, 0xd797), (0x3340, 0xd79a), (0x3341, 0xd79c), (0x3342, 0xd79e), (0x3343, 0xd79f),
    (0x3344, 0xd7a0), (0x3345, 0xd7a1), (0x3346, 0xd7a2), (0x3347, 0xd7a3), (0x3396, 0xd264), (0x3397, 0xd280),
    (0x3398, 0xd281), (0x3399, 0xd284), (0x339a, 0xd288), (0x339b, 0xd290), (0x339c, 0xd291), (0x339d, 0xd295),
    (0x339e, 0xd29c), (0x339f, 0xd2a0), (0x33a0, 0xd2a4), (0x33a1, 0xd2ac), (0x33a2, 0xd2b1), (0x33a3, 0xd2b8),
    (0x33a4, 0xd2b9), (0x33a5, 0xd2bc), (0x33a6, 0xd2bf), (0x33a7, 0xd2c0), (0x33a8, 0xd2c2), (0x33a9, 0xd2c8),
    (0x33aa, 0xd2c9), (0x33ab, 0xd2cb), (0x33ac, 0xd2d4), (0x33ad, 0xd2d8), (0x33ae, 0xd2dc), (0x33af, 0xd2e4),
    (0x33b0, 0xd2e5), (0x33b1, 0xd2f0), (0x33b2, 0xd2f1), (0x33b3, 0xd2f4), (0x33b4, 0xd2f8), (0x33b5, 0xd300),
    (0x33b6, 0xd301), (0x33b7, 0xd303), (0x33b8, 0xd305), (0x33b9, 0xd30c), (0x33ba, 0xd30d), (0x33bb, 0xd30e),
    (0x33bc, 0xd310), (0x33bd, 0xd314), (0x33be, 0xd316), (0x33bf, 0xd31c), (0x33c0, 0xd31d), (0x33c1, 0xd31f),
    (0x33c2, 0xd320), (0x33c3, 0xd321), (0x33c4, 0xd325), (0x33c5, 0xd328), (0x33c6, 0xd329), (0x33c7, 0xd32c),
    (0x33c8, 0xd330), (0x33c9, 0xd338), (0x33ca, 0xd339), (0x33cb, 0xd33b), (0x33cc, 0xd33c), (0x33cd, 0xd33d),
    (0x33ce, 0xd344), (0x33cf, 0xd345), (0x33d0, 0xd37c), (0x33d1, 0xd37d), (0x33d2, 0xd380), (0x33d3, 0xd384),
    (0x33d4, 0xd38c), (0x33d5, 0xd38d), (0x33d6, 0xd38f), (0x33d7, 0xd390), (0x33d8, 0xd391), (0x33d9, 0xd398),
    (0x33da, 0xd399), (0x33db, 0xd39c), (0x33dc, 0xd3a0), (0x33dd, 0xd3a8), (0x33de, 0xd3a9), (0x33df, 0xd3ab),
    (0x33e0, 0xd3ad), (0x33e1, 0xd3b4), (0x33e2, 0xd3b8), (0x33e3, 0xd3bc), (0x33e4, 0xd3c4), (0x33e5, 0xd3c5),
    (0x33e6, 0xd3c8), (0x33e7, 0xd3c9), (0x33e8, 0xd3d0), (0x33e9, 0xd3d8), (0x33ea, 0xd3e1), (0x33eb, 0xd3e3),
    (0x33ec, 0xd3ec), (0x33ed, 0xd3ed), (0x33ee, 0xd3f0), (0x33ef, 0xd3f4), (0x33f0, 0xd3fc), (0x33f1, 0xd3fd),
    (0x33f2, 0xd3ff), (0x33f3, 0xd401), (0x3454, 0xd408), (0x3455, 0xd41d), (0x3456, 0xd440), (0x3457, 0xd444),
    (0x3458, 0xd45c), (0x3459, 0xd460), (0x345a, 0xd464), (0x345b, 0xd46d), (0x345c, 0xd46f), (0x345d, 0xd478),
    (0x345e, 0xd479), (0x345f, 0xd47c), (0x3460, 0xd47f), (0x3461, 0xd480), (0x3462, 0xd482), (0x3463, 0xd488),
    (0x3464, 0xd489), (0x3465, 0xd48b), (0x3466, 0xd48d), (0x3467, 0xd494), (0x3468, 0xd4a9), (0x3469, 0xd4cc),
    (0x346a, 0xd4d0), (0x346b, 0xd4d4), (0x346c, 0xd4dc), (0x346d, 0xd4df), (0x346e, 0xd4e8), (0x346f, 0xd4ec),
    (0x3470, 0xd4f0), (0x3471, 0xd4f8), (0x3472, 0xd4fb), (0x3473, 0xd4fd), (0x3474, 0xd504), (0x3475, 0xd508),
    (0x3476, 0xd50c), (0x3477, 0xd514), (0x3478, 0xd515), (0x3479, 0xd517), (0x347a, 0xd53c), (0x347b, 0xd53d),
    (0x347c, 0xd540), (0x347d, 0xd544), (0x347e, 0xd54c), (0x347f, 0xd54d), (0x3480, 0xd54f), (0x3481, 0xd551),
    (0x3482, 0xd558), (0x3483, 0xd559), (0x3484, 0xd55c), (0x3485, 0xd560), (0x3486, 0xd565), (0x3487, 0xd568),
    (0x3488, 0xd569), (0x3489, 0xd56b), (0x348a, 0xd56d), (0x348b, 0xd574), (0x348c, 0xd575), (0x348d, 0xd578),
    (0x348e, 0xd57c), (0x348f, 0xd584), (0x3490, 0xd585), (0x3491, 0xd587), (0x3492, 0xd588), (0x3493, 0xd589),
    (0x3494, 0xd590), (0x3495, 0xd5a5), (0x3496, 0xd5c8), (0x3497, 0xd5c9), (0x3498, 0xd5cc), (0x3499, 0xd5d0),
    (0x349a, 0xd5d2), (0x349b, 0xd5d8), (0x349c, 0xd5d9), (0x349d, 0xd5db), (0x349e, 0xd5dd), (0x349f, 0xd5e4),
    (0x34a0, 0xd5e5), (0x34a1, 0xd5e8), (0x34a2, 0xd5ec), (0x34a3, 0xd5f4), (0x34a4, 0xd5f5), (0x34a5, 0xd5f7),
    (0x34a6, 0xd5f9), (0x34a7, 0xd600), (0x34a8, 0xd601), (0x34a9, 0xd604), (0x34aa, 0xd608), (0x34ab, 0xd610),
    (0x34ac, 0xd611), (0x34ad, 0xd613), (0x34ae, 0xd614), (0x34af, 0xd615), (0x34b0, 0xd61c), (0x34b1, 0xd620),
    (0x3512, 0xd624), (0x3513, 0xd62d), (0x3514, 0xd638), (0x3515, 0xd639), (0x3516, 0xd63c), (0x3517, 0xd640),
    (0x3518, 0xd645), (0x3519, 0xd648), (0x351a, 0xd649), (0x351b, 0xd64b), (0x351c, 0xd64d), (0x351d, 0xd651),
    (0x351e, 0xd654), (0x351f, 0xd655), (0x3520, 0xd658), (0x3521, 0xd65c), (0x3522, 0xd667), (0x3523, 0xd669),
    (0x3524, 0xd670), (0x3525, 0xd671), (0x3526, 0xd674), (0x3527, 0xd683), (0x3528, 0xd685), (0x3529, 0xd68c),
    (0x352a, 0xd68d), (0x352b, 0xd690), (0x352c, 0xd694), (0x352d, 0xd69d), (0x352e, 0xd69f), (0x352f, 0xd6a1),
    (0x3530, 0xd6a8), (0x3531, 0xd6ac), (0x3532, 0xd6b0), (0x3533, 0xd6b9), (0x3534, 0xd6bb), (0x3535, 0xd6c4),
    (0x3536, 0xd6c5), (0x3537, 0xd6c8), (0x3538, 0xd6cc), (0x3539, 0xd6d1), (0x353a, 0xd6d4), (0x353b, 0xd6d7),
    (0x353c, 0xd6d9), (0x353d, 0xd6e0), (0x353e, 0xd6e4), (0x353f, 0xd6e8), (0x3540, 0xd6f0), (0x3541, 0xd6f5),
    (0x3542, 0xd6fc), (0x3543, 0xd6fd), (0x3544, 0xd700), (0x3545, 0xd704), (0x3546, 0xd711), (0x3547, 0xd718),
    (0x3548, 0xd719), (0x3549, 0xd71c), (0x354a, 0xd720), (0x354b, 0xd728), (0x354c, 0xd729), (0x354d, 0xd72b),
    (0x354e, 0xd72d), (0x354f, 0xd734), (0x3550, 0xd735), (0x3551, 0xd738), (0x3552, 0xd73c), (0x3553, 0xd744),
    (0x3554, 0xd747), (0x3555, 0xd749), (0x3556, 0xd750), (0x3557, 0xd751), (0x3558, 0xd754), (0x3559, 0xd756),
    (0x355a, 0xd757), (0x355b, 0xd758), (0x355c, 0xd759), (0x355d, 0xd760), (0x355e, 0xd761), (0x355f, 0xd763),
    (0x3560, 0xd765), (0x3561, 0xd769), (0x3562, 0xd76c), (0x3563, 0xd770), (0x3564, 0xd774), (0x3565, 0xd77c),
    (0x3566, 0xd77d), (0x3567, 0xd781), (0x3568, 0xd788), (0x3569, 0xd789), (0x356a, 0xd78c), (0x356b, 0xd790),
    (0x356c, 0xd798), (0x356d, 0xd799), (0x356e, 0xd79b), (0x356f, 0xd79d), (0x368e, 0x4f3d), (0x368f, 0x4f73),
    (0x3690, 0x5047), (0x3691, 0x50f9), (0x3692, 0x52a0), (0x3693, 0x53ef), (0x3694, 0x5475), (0x3695, 0x54e5),
    (0x3696, 0x5609), (0x3697, 0x5ac1), (0x3698, 0x5bb6), (0x3699, 0x6687), (0x369a, 0x67b6), (0x369b, 0x67b7),
    (0x369c, 0x67ef), (0x369d, 0x6b4c), (0x369e, 0x73c2), (0x369f, 0x75c2), (0x36a0, 0x7a3c), (0x36a1, 0x82db),
    (0x36a2, 0x8304), (0x36a3, 0x8857), (0x36a4, 0x8888), (0x36a5, 0x8a36), (0x36a6, 0x8cc8), (0x36a7, 0x8dcf),
    (0x36a8, 0x8efb), (0x36a9, 0x8fe6), (0x36aa, 0x99d5), (0x36ab, 0x523b), (0x36ac, 0x5374), (0x36ad, 0x5404),
    (0x36ae, 0x606a), (0x36af, 0x6164), (0x36b0, 0x6bbc), (0x36b1, 0x73cf), (0x36b2, 0x811a), (0x36b3, 0x89ba),
    (0x36b4, 0x89d2), (0x36b5, 0x95a3), (0x36b6, 0x4f83), (0x36b7, 0x520a), (0x36b8, 0x58be), (0x36b9, 0x5978),
    (0x36ba, 0x59e6), (0x36bb, 0x5e72), (0x36bc, 0x5e79), (0x36bd, 0x61c7), (0x36be, 0x63c0), (0x36bf, 0x6746),
    (0x36c0, 0x67ec), (0x36c1, 0x687f), (0x36c2, 0x6f97), (0x36c3, 0x764e), (0x36c4, 0x770b), (0x36c5, 0x78f5),
    (0x36c6, 0x7a08), (0x36c7, 0x7aff), (0x36c8, 0x7c21), (0x36c9, 0x809d), (0x36ca, 0x826e), (0x36cb, 0x8271),
    (0x36cc, 0x8aeb), (0x36cd, 0x9593), (0x36ce, 0x4e6b), (0x36cf, 0x559d), (0x36d0, 0x66f7), (0x36d1, 0x6e34),
    (0x36d2, 0x78a3), (0x36d3, 0x7aed), (0x36d4, 0x845b), (0x36d5, 0x8910), (0x36d6, 0x874e), (0x36d7, 0x97a8),
    (0x36d8, 0x52d8), (0x36d9, 0x574e), (0x36da, 0x582a), (0x36db, 0x5d4c), (0x36dc, 0x611f), (0x36dd, 0x61be),
    (0x36de, 0x6221), (0x36df, 0x6562), (0x36e0, 0x67d1), (0x36e1, 0x6a44), (0x36e2, 0x6e1b), (0x36e3, 0x7518),
    (0x36e4, 0x75b3), (0x36e5, 0x76e3), (0x36e6, 0x77b0), (0x36e7, 0x7d3a), (0x36e8, 0x90af), (0x36e9, 0x9451),
    (0x36ea, 0x9452), (0x36eb, 0x9f95), (0x374c, 0x5323), (0x374d, 0x5cac), (0x374e, 0x7532), (0x374f, 0x80db),
    (0x3750, 0x9240), (0x3751, 0x9598), (0x3752, 0x525b), (0x3753, 0x5808), (0x3754, 0x59dc), (0x3755, 0x5ca1),
    (0x3756, 0x5d17), (0x3757, 0x5eb7), (0x3758, 0x5f3a), (0x3759, 0x5f4a), (0x375a, 0x6177), (0x375b, 0x6c5f),
    (0x375c, 0x757a), (0x375d, 0x7586), (0x375e, 0x7ce0), (0x375f, 0x7d73), (0x3760, 0x7db1), (0x3761, 0x7f8c),
    (0x3762, 0x8154), (0x3763, 0x8221), (0x3764, 0x8591), (0x3765, 0x8941), (0x3766, 0x8b1b), (0x3767, 0x92fc),
    (0x3768, 0x964d), (0x3769, 0x9c47), (0x376a, 0x4ecb), (0x376b, 0x4ef7), (0x376c, 0x500b), (0x376d, 0x51f1),
    (0x376e, 0x584f), (0x376f, 0x6137), (0x3770, 0x613e), (0x3771, 0x6168), (0x3772, 0x6539), (0x3773, 0x69ea),
    (0x3774, 0x6f11), (0x3775, 0x75a5), (0x3776, 0x7686), (0x3777, 0x76d6), (0x3778, 0x7b87), (0x3779, 0x82a5),
    (0x377a, 0x84cb), (0x377b, 0xf900), (0x377c, 0x93a7), (0x377d, 0x958b), (0x377e, 0x5580), (0x377f, 0x5ba2),
    (0x3780, 0x5751), (0x3781, 0xf901), (0x3782, 0x7cb3), (0x3783, 0x7fb9), (0x3784, 0x91b5), (0x3785, 0x5028),
    (0x3786, 0x53bb), (0x3787, 0x5c45), (0x3788, 0x5de8), (0x3789, 0x62d2), (0x378a, 0x636e), (0x378b, 0x64da),
    (0x378c, 0x64e7), (0x378d, 0x6e20), (0x378e, 0x70ac), (0x378f, 0x795b), (0x3790, 0x8ddd), (0x3791, 0x8e1e),
    (0x3792, 0xf902), (0x3793, 0x907d), (0x3794, 0x9245), (0x3795, 0x92f8), (0x3796, 0x4e7e), (0x3797, 0x4ef6),
    (0x3798, 0x5065), (0x3799, 0x5dfe), (0x379a, 0x5efa), (0x379b, 0x6106), (0x379c, 0x6957), (0x379d, 0x8171),
    (0x379e, 0x8654), (0x379f, 0x8e47), (0x37a0, 0x9375), (0x37a1, 0x9a2b), (0x37a2, 0x4e5e), (0x37a3, 0x5091),
    (0x37a4, 0x6770), (0x37a5, 0x6840), (0x37a6, 0x5109), (0x37a7, 0x528d), (0x37a8, 0x5292), (0x37a9, 0x6aa2),
    (0x380a, 0x77bc), (0x380b, 0x9210), (0x380c, 0x9ed4), (0x380d, 0x52ab), (0x380e, 0x602f), (0x380f, 0x8ff2),
    (0x3810, 0x5048), (0x3811, 0x61a9), (0x3812, 0x63ed), (0x3813, 0x64ca), (0x3814, 0x683c), (0x3815, 0x6a84),
    (0x3816, 0x6fc0), (0x3817, 0x8188), (0x3818, 0x89a1), (0x3819, 0x9694), (0x381a, 0x5805), (0x381b, 0x727d),
    (0x381c, 0x72ac), (0x381d, 0x7504), (0x381e, 0x7d79), (0x381f, 0x7e6d), (0x3820, 0x80a9), (0x3821, 0x898b),
    (0x3822, 0x8b74), (0x3823, 0x9063), (0x3824, 0x9d51), (0x3825, 0x6289), (0x3826, 0x6c7a), (0x3827, 0x6f54),
    (0x3828, 0x7d50), (0x3829, 0x7f3a), (0x382a, 0x8a23), (0x382b, 0x517c), (0x382c, 0x614a), (0x382d, 0x7b9d),
    (0x382e, 0x8b19), (0x382f, 0x9257), (0x3830, 0x938c), (0x3831, 0x4eac), (0x3832, 0x4fd3), (0x3833, 0x501e),
    (0x3834, 0x50be), (0x3835, 0x5106), (0x3836, 0x52c1), (0x3837, 0x52cd), (0x3838, 0x537f), (0x3839, 0x5770),
    (0x383a, 0x5883), (0x383b, 0x5e9a), (0x383c, 0x5f91), (0x383d, 0x6176), (0x383e, 0x61ac), (0x383f, 0x64ce),
    (0x3840, 0x656c), (0x3841, 0x666f), (0x3842, 0x66bb), (0x3843, 0x66f4), (0x3844, 0x6897), (0x3845, 0x6d87),
    (0x3846, 0x7085), (0x3847, 0x70f1), (0x3848, 0x749f), (0x3849, 0x74a5), (0x384a, 0x74ca), (0x384b, 0x75d9),
    (0x384c, 0x786c), (0x384d, 0x78ec), (0x384e, 0x7adf), (0x384f, 0x7af6), (0x3850, 0x7d45), (0x3851, 0x7d93),
    (0x3852, 0x8015), (0x3853, 0x803f), (0x3854, 0x811b), (0x3855, 0x8396), (0x3856, 0x8b66), (0x3857, 0x8f15),
    (0x3858, 0x9015), (0x3859, 0x93e1), (0x385a, 0x9803), (0x385b, 0x9838), (0x385c, 0x9a5a), (0x385d, 0x9be8),
    (0x385e, 0x4fc2), (0x385f, 0x5553), (0x3860, 0x583a), (0x3861, 0x5951), (0x3862, 0x5b63), (0x3863, 0x5c46),
    (0x3864, 0x60b8), (0x3865, 0x6212), (0x3866, 0x6842), (0x3867, 0x68b0), (0x38c8, 0x68e8), (0x38c9, 0x6eaa),
    (0x38ca, 0x754c), (0x38cb, 0x7678), (0x38cc, 0x78ce), (0x38cd, 0x7a3d), (0x38ce, 0x7cfb), (0x38cf, 0x7e6b),
    (0x38d0, 0x7e7c), (0x38d1, 0x8a08), (0x38d2, 0x8aa1), (0x38d3, 0x8c3f), (0x38d4, 0x968e), (0x38d5, 0x9dc4),
    (0x38d6, 0x53e4), (0x38d7, 0x53e9), (0x38d8, 0x544a), (0x38d9, 0x5471), (0x38da, 0x56fa), (0x38db, 0x59d1),
    (0x38dc, 0x5b64), (0x38dd, 0x5c3b), (0x38de, 0x5eab), (0x38df, 0x62f7), (0x38e0, 0x6537), (0x38e1, 0x6545),
    (0x38e2, 0x6572), (0x38e3, 0x66a0), (0x38e4, 0x67af), (0x38e5, 0x69c1), (0x38e6, 0x6cbd), (0x38e7, 0x75fc),
    (0x38e8, 0x7690), (0x38e9, 0x777e), (0x38ea, 0x7a3f), (0x38eb, 0x7f94), (0x38ec, 0x8003), (0x38ed, 0x80a1),
    (0x38ee, 0x818f), (0x38ef, 0x82e6), (0x38f0, 0x82fd), (0x38f1, 0x83f0), (0x38f2, 0x85c1), (0x38f3, 0x8831),
    (0x38f4, 0x88b4), (0x38f5, 0x8aa5), (0x38f6, 0xf903), (0x38f7, 0x8f9c), (0x38f8, 0x932e), (0x38f9, 0x96c7),
    (0x38fa, 0x9867), (0x38fb, 0x9ad8), (0x38fc, 0x9f13), (0x38fd, 0x54ed), (0x38fe, 0x659b), (0x38ff, 0x66f2),
    (0x3900, 0x688f), (0x3901, 0x7a40), (0x3902, 0x8c37), (0x3903, 0x9d60), (0x3904, 0x56f0), (0x3905, 0x5764),
    (0x3906, 0x5d11), (0x3907, 0x6606), (0x3908, 0x68b1), (0x3909, 0x68cd), (0x390a, 0x6efe), (0x390b, 0x7428),
    (0x390c, 0x889e), (0x390d, 0x9be4), (0x390e, 0x6c68), (0x390f, 0xf904), (0x3910, 0x9aa8), (0x3911, 0x4f9b),
    (0x3912, 0x516c), (0x3913, 0x5171), (0x3914, 0x529f), (0x3915, 0x5b54), (0x3916, 0x5de5), (0x3917, 0x6050),
    (0x3918, 0x606d), (0x3919, 0x62f1), (0x391a, 0x63a7), (0x391b, 0x653b), (0x391c, 0x73d9), (0x391d, 0x7a7a),
    (0x391e, 0x86a3), (0x391f, 0x8ca2), (0x3920, 0x978f), (0x3921, 0x4e32), (0x3922, 0x5be1), (0x3923, 0x6208),
    (0x3924, 0x679c), (0x3925, 0x74dc), (0x3986, 0x79d1), (0x3987, 0x83d3), (0x3988, 0x8a87), (0x3989, 0x8ab2),
    (0x398a, 0x8de8), (0x398b, 0x904e), (0x398c, 0x934b), (0x398d, 0x9846), (0x398e, 0x5ed3), (0x398f, 0x69e8),
    (0x3990, 0x85ff), (0x3991, 0x90ed), (0x3992, 0xf905), (0x3993, 0x51a0), (0x3994, 0x5b98), (0x3995, 0x5bec),
    (0x3996, 0x6163), (0x3997, 0x68fa), (0x3998, 0x6b3e), (0x3999, 0x704c), (0x399a, 0x742f), (0x399b, 0x74d8),
    (0x399c, 0x7ba1), (0x399d, 0x7f50), (0x399e, 0x83c5), (0x399f, 0x89c0), (0x39a0, 0x8cab), (0x39a1, 0x95dc),
    (0x39a2, 0x9928), (0x39a3, 0x522e), (0x39a4, 0x605d), (0x39a5, 0x62ec), (0x39a6, 0x9002), (0x39a7, 0x4f8a),
    (0x39a8, 0x5149), (0x39a9, 0x5321), (0x39aa, 0x58d9), (0x39ab, 0x5ee3), (0x39ac, 0x66e0), (0x39ad, 0x6d38),
    (0x39ae, 0x709a), (0x39af, 0x72c2), (0x39b0, 0x73d6), (0x39b1, 0x7b50), (0x39b2, 0x80f1), (0x39b3, 0x945b),
    (0x39b4, 0x5366), (0x39b5, 0x639b), (0x39b6, 0x7f6b), (0x39b7, 0x4e56), (0x39b8, 0x5080), (0x39b9, 0x584a),
    (0x39ba, 0x58de), (0x39bb, 0x602a), (0x39bc, 0x6127), (0x39bd, 0x62d0), (0x39be, 0x69d0), (0x39bf, 0x9b41),
    (0x39c0, 0x5b8f), (0x39c1, 0x7d18), (0x39c2, 0x80b1), (0x39c3, 0x8f5f), (0x39c4, 0x4ea4), (0x39c5, 0x50d1),
    (0x39c6, 0x54ac), (0x39c7, 0x55ac), (0x39c8, 0x5b0c), (0x39c9, 0x5da0), (0x39ca, 0x5de7), (0x39cb, 0x652a),
    (0x39cc, 0x654e), (0x39cd, 0x6821), (0x39ce, 0x6a4b), (0x39cf, 0x72e1), (0x39d0, 0x768e), (0x39d1, 0x77ef),
    (0x39d2, 0x7d5e), (0x39d3, 0x7ff9), (0x39d4, 0x81a0), (0x39d5, 0x854e), (0x39d6, 0x86df), (0x39d7, 0x8f03),
    (0x39d8, 0x8f4e), (0x39d9, 0x90ca), (0x39da, 0x9903), (0x39db, 0x9a55), (0x39dc, 0x9bab), (0x39dd, 0x4e18),
    (0x39de, 0x4e45), (0x39df, 0x4e5d), (0x39e0, 0x4ec7), (0x39e1, 0x4ff1), (0x39e2, 0x5177), (0x39e3, 0x52fe),
    (0x3a44, 0x5340), (0x3a45, 0x53e3), (0x3a46, 0x53e5), (0x3a47, 0x548e), (0x3a48, 0x5614), (0x3a49, 0x5775),
    (0x3a4a, 0x57a2), (0x3a4b, 0x5bc7), (0x3a4c, 0x5d87), (0x3a4d, 0x5ed0), (0x3a4e, 0x61fc), (0x3a4f, 0x62d8),
    (0x3a50, 0x6551), (0x3a51, 0x67b8), (0x3a52, 0x67e9), (0x3a53, 0x69cb), (0x3a54, 0x6b50), (0x3a55, 0x6bc6),
    (0x3a56, 0x6bec), (0x3a57, 0x6c42), (0x3a58, 0x6e9d), (0x3a59, 0x7078), (0x3a5a, 0x72d7), (0x3a5b, 0x7396),
    (0x3a5c, 0x7403), (0x3a5d, 0x77bf), (0x3a5e, 0x77e9), (0x3a5f, 0x7a76), (0x3a60, 0x7d7f), (0x3a61, 0x8009),
    (0x3a62, 0x81fc), (0x3a63, 0x8205), (0x3a64, 0x820a), (0x3a65, 0x82df), (0x3a66, 0x8862), (0x3a67, 0x8b33),
    (0x3a68, 0x8cfc), (0x3a69, 0x8ec0), (0x3a6a, 0x9011), (0x3a6b, 0x90b1), (0x3a6c, 0x9264), (0x3a6d, 0x92b6),
    (0x3a6e, 0x99d2), (0x3a6f, 0x9a45), (0x3a70, 0x9ce9), (0x3a71, 0x9dd7), (0x3a72, 0x9f9c), (0x3a73, 0x570b),
    (0x3a74, 0x5c40), (0x3a75, 0x83ca), (0x3a76, 0x97a0), (0x3a77, 0x97ab), (0x3a78, 0x9eb4), (0x3a79, 0x541b),
    (0x3a7a, 0x7a98), (0x3a7b, 0x7fa4), (0x3a7c, 0x88d9), (0x3a7d, 0x8ecd), (0x3a7e, 0x90e1), (0x3a7f, 0x5800),
    (0x3a80, 0x5c48), (0x3a81, 0x6398), (0x3a82, 0x7a9f), (0x3a83, 0x5bae), (0x3a84, 0x5f13), (0x3a85, 0x7a79),
    (0x3a86, 0x7aae), (0x3a87, 0x828e), (0x3a88, 0x8eac), (0x3a89, 0x5026), (0x3a8a, 0x5238), (0x3a8b, 0x52f8),
    (0x3a8c, 0x5377), (0x3a8d, 0x5708), (0x3a8e, 0x62f3), (0x3a8f, 0x6372), (0x3a90, 0x6b0a), (0x3a91, 0x6dc3),
    (0x3a92, 0x7737), (0x3a93, 0x53a5), (0x3a94, 0x7357), (0x3a95, 0x8568), (0x3a96, 0x8e76), (0x3a97, 0x95d5),
    (0x3a98, 0x673a), (0x3a99, 0x6ac3), (0x3a9a, 0x6f70), (0x3a9b, 0x8a6d), (0x3a9c, 0x8ecc), (0x3a9d, 0x994b),
    (0x3a9e, 0xf906), (0x3a9f, 0x6677), (0x3aa0, 0x6b78), (0x3aa1, 0x8cb4), (0x3b02, 0x9b3c), (0x3b03, 0xf907),
    (0x3b04, 0x53eb), (0x3b05, 0x572d), (0x3b06, 0x594e), (0x3b07, 0x63c6), (0x3b08, 0x69fb), (0x3b09, 0x73ea),
    (0x3b0a, 0x7845), (0x3b0b, 0x7aba), (0x3b0c, 0x7ac5), (0x3b0d, 0x7cfe), (0x3b0e, 0x8475), (0x3b0f, 0x898f),
    (0x3b10, 0x8d73), (0x3b11, 0x9035), (0x3b12, 0x95a8), (0x3b13, 0x52fb), (0x3b14, 0x5747), (0x3b15, 0x7547),
    (0x3b16, 0x7b60), (0x3b17, 0x83cc), (0x3b18, 0x921e), (0x3b19, 0xf908), (0x3b1a, 0x6a58), (0x3b1b, 0x514b),
    (0x3b1c, 0x524b), (0x3b1d, 0x5287), (0x3b1e, 0x621f), (0x3b1f, 0x68d8), (0x3b20, 0x6975), (0x3b21, 0x9699),
    (0x3b22, 0x50c5), (0x3b23, 0x52a4), (0x3b24, 0x52e4), (0x3b25, 0x61c3), (0x3b26, 0x65a4), (0x3b27, 0x6839),
    (0x3b28, 0x69ff), (0x3b29, 0x747e), (0x3b2a, 0x7b4b), (0x3b2b, 0x82b9), (0x3b2c, 0x83eb), (0x3b2d, 0x89b2),
    (0x3b2e, 0x8b39), (0x3b2f, 0x8fd1), (0x3b30, 0x9949), (0x3b31, 0xf909), (0x3b32, 0x4eca), (0x3b33, 0x5997),
    (0x3b34, 0x64d2), (0x3b35, 0x6611), (0x3b36, 0x6a8e), (0x3b37, 0x7434), (0x3b38, 0x7981), (0x3b39, 0x79bd),
    (0x3b3a, 0x82a9), (0x3b3b, 0x887e), (0x3b3c, 0x887f), (0x3b3d, 0x895f), (0x3b3e, 0xf90a), (0x3b3f, 0x9326),
    (0x3b40, 0x4f0b), (0x3b41, 0x53ca), (0x3b42, 0x6025), (0x3b43, 0x6271), (0x3b44, 0x6c72), (0x3b45, 0x7d1a),
    (0x3b46, 0x7d66), (0x3b47, 0x4e98), (0x3b48, 0x5162), (0x3b49, 0x77dc), (0x3b4a, 0x80af), (0x3b4b, 0x4f01),
    (0x3b4c, 0x4f0e), (0x3b4d, 0x5176), (0x3b4e, 0x5180), (0x3b4f, 0x55dc), (0x3b50, 0x5668), (0x3b51, 0x573b),
    (0x3b52, 0x57fa), (0x3b53, 0x57fc), (0x3b54, 0x5914), (0x3b55, 0x5947), (0x3b56, 0x5993), (0x3b57, 0x5bc4),
    (0x3b58, 0x5c90), (0x3b59, 0x5d0e), (0x3b5a, 0x5df1), (0x3b5b, 0x5e7e), (0x3b5c, 0x5fcc), (0x3b5d, 0x6280),
    (0x3b5e, 0x65d7), (0x3b5f, 0x65e3), (0x3bc0, 0x671e), (0x3bc1, 0x671f), (0x3bc2, 0x675e), (0x3bc3, 0x68cb),
    (0x3bc4, 0x68c4), (0x3bc5, 0x6a5f), (0x3bc6, 0x6b3a), (0x3bc7, 0x6c23), (0x3bc8, 0x6c7d), (0x3bc9, 0x6c82),
    (0x3bca, 0x6dc7), (0x3bcb, 0x7398), (0x3bcc, 0x7426), (0x3bcd, 0x742a), (0x3bce, 0x7482), (0x3bcf, 0x74a3),
    (0x3bd0, 0x7578), (0x3bd1, 0x757f), (0x3bd2, 0x7881), (0x3bd3, 0x78ef), (0x3bd4, 0x7941), (0x3bd5, 0x7947),
    (0x3bd6, 0x7948), (0x3bd7, 0x797a), (0x3bd8, 0x7b95), (0x3bd9, 0x7d00), (0x3bda, 0x7dba), (0x3bdb, 0x7f88),
    (0x3bdc, 0x8006), (0x3bdd, 0x802d), (0x3bde, 0x808c), (0x3bdf, 0x8a18), (0x3be0, 0x8b4f), (0x3be1, 0x8c48),
    (0x3be2, 0x8d77), (0x3be3, 0x9321), (0x3be4, 0x9324), (0x3be5, 0x98e2), (0x3be6, 0x9951), (0x3be7, 0x9a0e),
    (0x3be8, 0x9a0f), (0x3be9, 0x9a65), (0x3bea, 0x9e92), (0x3beb, 0x7dca), (0x3bec, 0x4f76), (0x3bed, 0x5409),
    (0x3bee, 0x62ee), (0x3bef, 0x6854), (0x3bf0, 0x91d1), (0x3bf1, 0x55ab), (0x3bf2, 0x513a), (0x3bf3, 0xf90b),
    (0x3bf4, 0xf90c), (0x3bf5, 0x5a1c), (0x3bf6, 0x61e6), (0x3bf7, 0xf90d), (0x3bf8, 0x62cf), (0x3bf9, 0x62ff),
    (0x3bfa, 0xf90e), (0x3bfb, 0xf90f), (0x3bfc, 0xf910), (0x3bfd, 0xf911), (0x3bfe, 0xf912), (0x3bff, 0xf913),
    (0x3c00, 0x90a3), (0x3c01, 0xf914), (0x3c02, 0xf915), (0x3c03, 0xf916), (0x3c04, 0xf917), (0x3c05, 0xf918),
    (0x3c06, 0x8afe), (0x3c07, 0xf919), (0x3c08, 0xf91a), (0x3c09, 0xf91b), (0x3c0a, 0xf91c), (0x3c0b, 0x6696),
    (0x3c0c, 0xf91d), (0x3c0d, 0x7156), (0x3c0e, 0xf91e), (0x3c0f, 0xf91f), (0x3c10, 0x96e3), (0x3c11, 0xf920),
    (0x3c12, 0x634f), (0x3c13, 0x637a), (0x3c14, 0x5357), (0x3c15, 0xf921), (0x3c16, 0x678f), (0x3c17, 0x6960),
    (0x3c18, 0x6e73), (0x3c19, 0xf922), (0x3c1a, 0x7537), (0x3c1b, 0xf923), (0x3c1c, 0xf924), (0x3c1d, 0xf925),
    (0x3c7e, 0x7d0d), (0x3c7f, 0xf926), (0x3c80, 0xf927), (0x3c81, 0x8872), (0x3c82, 0x56ca), (0x3c83, 0x5a18),
    (0x3c84, 0xf928), (0x3c85, 0xf929), (0x3c86, 0xf92a), (0x3c87, 0xf92b), (0x3c88, 0xf92c), (0x3c89, 0x4e43),
    (0x3c8a, 0xf92d), (0x3c8b, 0x5167), (0x3c8c, 0x5948), (0x3c8d, 0x67f0), (0x3c8e, 0x8010), (0x3c8f, 0xf92e),
    (0x3c90, 0x5973), (0x3c91, 0x5e74), (0x3c92, 0x649a), (0x3c93, 0x79ca), (0x3c94, 0x5ff5), (0x3c95, 0x606c),
    (0x3c96, 0x62c8), (0x3c97, 0x637b), (0x3c98, 0x5be7), (0x3c99, 0x5bd7), (0x3c9a, 0x52aa), (0x3c9b, 0xf92f),
    (0x3c9c, 0x5974), (0x3c9d, 0x5f29), (0x3c9e, 0x6012), (0x3c9f, 0xf930), (0x3ca0, 0xf931), (0x3ca1, 0xf932),
    (0x3ca2, 0x7459), (0x3ca3, 0xf933), (0x3ca4, 0xf934), (0x3ca5, 0xf935), (0x3ca6, 0xf936), (0x3ca7, 0xf937),
    (0x3ca8, 0xf938), (0x3ca9, 0x99d1), (0x3caa, 0xf939), (0x3cab, 0xf93a), (0x3cac, 0xf93b), (0x3cad, 0xf93c),
    (0x3cae, 0xf93d), (0x3caf, 0xf93e), (0x3cb0, 0xf93f), (0x3cb1, 0xf940), (0x3cb2, 0xf941), (0x3cb3, 0xf942),
    (0x3cb4, 0xf943), (0x3cb5, 0x6fc3), (0x3cb6, 0xf944), (0x3cb7, 0xf945), (0x3cb8, 0x81bf), (0x3cb9, 0x8fb2),
    (0x3cba, 0x60f1), (0x3cbb, 0xf946), (0x3cbc, 0xf947), (0x3cbd, 0x8166), (0x3cbe, 0xf948), (0x3cbf, 0xf949),
    (0x3cc0, 0x5c3f), (0x3cc1, 0xf94a), (0x3cc2, 0xf94b), (0x3cc3, 0xf94c), (0x3cc4, 0xf94d), (0x3cc5, 0xf94e),
    (0x3cc6, 0xf94f), (0x3cc7, 0xf950), (0x3cc8, 0xf951), (0x3cc9, 0x5ae9), (0x3cca, 0x8a25), (0x3ccb, 0x677b),
    (0x3ccc, 0x7d10), (0x3ccd, 0xf952), (0x3cce, 0xf953), (0x3ccf, 0xf954), (0x3cd0, 0xf955), (0x3cd1, 0xf956),
    (0x3cd2, 0xf957), (0x3cd3, 0x80fd), (0x3cd4, 0xf958), (0x3cd5, 0xf959), (0x3cd6, 0x5c3c), (0x3cd7, 0x6ce5),
    (0x3cd8, 0x533f), (0x3cd9, 0x6eba), (0x3cda, 0x591a), (0x3cdb, 0x8336), (0x3d3c, 0x4e39), (0x3d3d, 0x4eb6),
    (0x3d3e, 0x4f46), (0x3d3f, 0x55ae), (0x3d40, 0x5718), (0x3d41, 0x58c7), (0x3d42, 0x5f56), (0x3d43, 0x65b7),
    (0x3d44, 0x65e6), (0x3d45, 0x6a80), (0x3d46, 0x6bb5), (0x3d47, 0x6e4d), (0x3d48, 0x77ed), (0x3d49, 0x7aef),
    (0x3d4a, 0x7c1e), (0x3d4b, 0x7dde), (0x3d4c, 0x86cb), (0x3d4d, 0x8892), (0x3d4e, 0x9132), (0x3d4f, 0x935b),
    (0x3d50, 0x64bb), (0x3d51, 0x6fbe), (0x3d52, 0x737a), (0x3d53, 0x75b8), (0x3d54, 0x9054), (0x3d55, 0x5556),
    (0x3d56, 0x574d), (0x3d57, 0x61ba), (0x3d58, 0x64d4), (0x3d59, 0x66c7), (0x3d5a, 0x6de1), (0x3d5b, 0x6e5b),
    (0x3d5c, 0x6f6d), (0x3d5d, 0x6fb9), (0x3d5e, 0x75f0), (0x3d5f, 0x8043), (0x3d60, 0x81bd), (0x3d61, 0x8541),
    (0x3d62, 0x8983), (0x3d63, 0x8ac7), (0x3d64, 0x8b5a), (0x3d65, 0x931f), (0x3d66, 0x6c93), (0x3d67, 0x7553),
    (0x3d68, 0x7b54), (0x3d69, 0x8e0f), (0x3d6a, 0x905d), (0x3d6b, 0x5510), (0x3d6c, 0x5802), (0x3d6d, 0x5858),
    (0x3d6e, 0x5e62), (0x3d6f, 0x6207), (0x3d70, 0x649e), (0x3d71, 0x68e0), (0x3d72, 0x7576), (0x3d73, 0x7cd6),
    (0x3d74, 0x87b3), (0x3d75, 0x9ee8), (0x3d76, 0x4ee3), (0x3d77, 0x5788), (0x3d78, 0x576e), (0x3d79, 0x5927),
    (0x3d7a, 0x5c0d), (0x3d7b, 0x5cb1), (0x3d7c, 0x5e36), (0x3d7d, 0x5f85), (0x3d7e, 0x6234), (0x3d7f, 0x64e1),
    (0x3d80, 0x73b3), (0x3d81, 0x81fa), (0x3d82, 0x888b), (0x3d83, 0x8cb8), (0x3d84, 0x968a), (0x3d85, 0x9edb),
    (0x3d86, 0x5b85), (0x3d87, 0x5fb7), (0x3d88, 0x60b3), (0x3d89, 0x5012), (0x3d8a, 0x5200), (0x3d8b, 0x5230),
    (0x3d8c, 0x5716), (0x3d8d, 0x5835), (0x3d8e, 0x5857), (0x3d8f, 0x5c0e), (0x3d90, 0x5c60), (0x3d91, 0x5cf6),
    (0x3d92, 0x5d8b), (0x3d93, 0x5ea6), (0x3d94, 0x5f92), (0x3d95, 0x60bc), (0x3d96, 0x6311), (0x3d97, 0x6389),
    (0x3d98, 0x6417), (0x3d99, 0x6843), (0x3dfa, 0x68f9), (0x3dfb, 0x6ac2), (0x3dfc, 0x6dd8), (0x3dfd, 0x6e21),
    (0x3dfe, 0x6ed4), (0x3dff, 0x6fe4), (0x3e00, 0x71fe), (0x3e01, 0x76dc), (0x3e02, 0x7779), (0x3e03, 0x79b1),
    (0x3e04, 0x7a3b), (0x3e05, 0x8404), (0x3e06, 0x89a9), (0x3e07, 0x8ced), (0x3e08, 0x8df3), (0x3e09, 0x8e48),
    (0x3e0a, 0x9003), (0x3e0b, 0x9014), (0x3e0c, 0x9053), (0x3e0d, 0x90fd), (0x3e0e, 0x934d), (0x3e0f, 0x9676),
    (0x3e10, 0x97dc), (0x3e11, 0x6bd2), (0x3e12, 0x7006), (0x3e13, 0x7258), (0x3e14, 0x72a2), (0x3e15, 0x7368),
    (0x3e16, 0x7763), (0x3e17, 0x79bf), (0x3e18, 0x7be4), (0x3e19, 0x7e9b), (0x3e1a, 0x8b80), (0x3e1b, 0x58a9),
    (0x3e1c, 0x60c7), (0x3e1d, 0x6566), (0x3e1e, 0x65fd), (0x3e1f, 0x66be), (0x3e20, 0x6c8c), (0x3e21, 0x711e),
    (0x3e22, 0x71c9), (0x3e23, 0x8c5a), (0x3e24, 0x9813), (0x3e25, 0x4e6d), (0x3e26, 0x7a81), (0x3e27, 0x4edd),
    (0x3e28, 0x51ac), (0x3e29, 0x51cd), (0x3e2a, 0x52d5), (0x3e2b, 0x540c), (0x3e2c, 0x61a7), (0x3e2d, 0x6771),
    (0x3e2e, 0x6850), (0x3e2f, 0x68df), (0x3e30, 0x6d1e), (0x3e31, 0x6f7c), (0x3e32, 0x75bc), (0x3e33, 0x77b3),
    (0x3e34, 0x7ae5), (0x3e35, 0x80f4), (0x3e36, 0x8463), (0x3e37, 0x9285), (0x3e38, 0x515c), (0x3e39, 0x6597),
    (0x3e3a, 0x675c), (0x3e3b, 0x6793), (0x3e3c, 0x75d8), (0x3e3d, 0x7ac7), (0x3e3e, 0x8373), (0x3e3f, 0xf95a),
    (0x3e40, 0x8c46), (0x3e41, 0x9017), (0x3e42, 0x982d), (0x3e43, 0x5c6f), (0x3e44, 0x81c0), (0x3e45, 0x829a),
    (0x3e46, 0x9041), (0x3e47, 0x906f), (0x3e48, 0x920d), (0x3e49, 0x5f97), (0x3e4a, 0x5d9d), (0x3e4b, 0x6a59),
    (0x3e4c, 0x71c8), (0x3e4d, 0x767b), (0x3e4e, 0x7b49), (0x3e4f, 0x85e4), (0x3e50, 0x8b04), (0x3e51, 0x9127),
    (0x3e52, 0x9a30), (0x3e53, 0x5587), (0x3e54, 0x61f6), (0x3e55, 0xf95b), (0x3e56, 0x7669), (0x3e57, 0x7f85),
    (0x3eb8, 0x863f), (0x3eb9, 0x87ba), (0x3eba, 0x88f8), (0x3ebb, 0x908f), (0x3ebc, 0xf95c), (0x3ebd, 0x6d1b),
    (0x3ebe, 0x70d9), (0x3ebf, 0x73de), (0x3ec0, 0x7d61), (0x3ec1, 0x843d), (0x3ec2, 0xf95d), (0x3ec3, 0x916a),
    (0x3ec4, 0x99f1), (0x3ec5, 0xf95e), (0x3ec6, 0x4e82), (0x3ec7, 0x5375), (0x3ec8, 0x6b04), (0x3ec9, 0x6b12),
    (0x3eca, 0x703e), (0x3ecb, 0x721b), (0x3ecc, 0x862d), (0x3ecd, 0x9e1e), (0x3ece, 0x524c), (0x3ecf, 0x8fa3),
    (0x3ed0, 0x5d50), (0x3ed1, 0x64e5), (0x3ed2, 0x652c), (0x3ed3, 0x6b16), (0x3ed4, 0x6feb), (0x3ed5, 0x7c43),
    (0x3ed6, 0x7e9c), (0x3ed7, 0x85cd), (0x3ed8, 0x8964), (0x3ed9, 0x89bd), (0x3eda, 0x62c9), (0x3edb, 0x81d8),
    (0x3edc, 0x881f), (0x3edd, 0x5eca), (0x3ede, 0x6717), (0x3edf, 0x6d6a), (0x3ee0, 0x72fc), (0x3ee1, 0x7405),
    (0x3ee2, 0x746f), (0x3ee3, 0x8782), (0x3ee4, 0x90de), (0x3ee5, 0x4f86), (0x3ee6, 0x5d0d), (0x3ee7, 0x5fa0),
    (0x3ee8, 0x840a), (0x3ee9, 0x51b7), (0x3eea, 0x63a0), (0x3eeb, 0x7565), (0x3eec, 0x4eae), (0x3eed, 0x5006),
    (0x3eee, 0x5169), (0x3eef, 0x51c9), (0x3ef0, 0x6881), (0x3ef1, 0x6a11), (0x3ef2, 0x7cae), (0x3ef3, 0x7cb1),
    (0x3ef4, 0x7ce7), (0x3ef5, 0x826f), (0x3ef6, 0x8ad2), (0x3ef7, 0x8f1b), (0x3ef8, 0x91cf), (0x3ef9, 0x4fb6),
    (0x3efa, 0x5137), (0x3efb, 0x52f5), (0x3efc, 0x5442), (0x3efd, 0x5eec), (0x3efe, 0x616e), (0x3eff, 0x623e),
    (0x3f00, 0x65c5), (0x3f01, 0x6ada), (0x3f02, 0x6ffe), (0x3f03, 0x792a), (0x3f04, 0x85dc), (0x3f05, 0x8823),
    (0x3f06, 0x95ad), (0x3f07, 0x9a62), (0x3f08, 0x9a6a), (0x3f09, 0x9e97), (0x3f0a, 0x9ece), (0x3f0b, 0x529b),
    (0x3f0c, 0x66c6), (0x3f0d, 0x6b77), (0x3f0e, 0x701d), (0x3f0f, 0x792b), (0x3f10, 0x8f62), (0x3f11, 0x9742),
    (0x3f12, 0x6190), (0x3f13, 0x6200), (0x3f14, 0x6523), (0x3f15, 0x6f23), (0x3f76, 0x7149), (0x3f77, 0x7489),
    (0x3f78, 0x7df4), (0x3f79, 0x806f), (0x3f7a, 0x84ee), (0x3f7b, 0x8f26), (0x3f7c, 0x9023), (0x3f7d, 0x934a),
    (0x3f7e, 0x51bd), (0x3f7f, 0x5217), (0x3f80, 0x52a3), (0x3f81, 0x6d0c), (0x3f82, 0x70c8), (0x3f83, 0x88c2),
    (0x3f84, 0x5ec9), (0x3f85, 0x6582), (0x3f86, 0x6bae), (0x3f87, 0x6fc2), (0x3f88, 0x7c3e), (0x3f89, 0x7375),
    (0x3f8a, 0x4ee4), (0x3f8b, 0x4f36), (0x3f8c, 0x56f9), (0x3f8d, 0xf95f), (0x3f8e, 0x5cba), (0x3f8f, 0x5dba),
    (0x3f90, 0x601c), (0x3f91, 0x73b2), (0x3f92, 0x7b2d), (0x3f93, 0x7f9a), (0x3f94, 0x7fce), (0x3f95, 0x8046),
    (0x3f96, 0x901e), (0x3f97, 0x9234), (0x3f98, 0x96f6), (0x3f99, 0x9748), (0x3f9a, 0x9818), (0x3f9b, 0x9f61),
    (0x3f9c, 0x4f8b), (0x3f9d, 0x6fa7), (0x3f9e, 0x79ae), (0x3f9f, 0x91b4), (0x3fa0, 0x96b7), (0x3fa1, 0x52de),
    (0x3fa2, 0xf960), (0x3fa3, 0x6488), (0x3fa4, 0x64c4), (0x3fa5, 0x6ad3), (0x3fa6, 0x6f5e), (0x3fa7, 0x7018),
    (0x3fa8, 0x7210), (0x3fa9, 0x76e7), (0x3faa, 0x8001), (0x3fab, 0x8606), (0x3fac, 0x865c), (0x3fad, 0x8def),
    (0x3fae, 0x8f05), (0x3faf, 0x9732), (0x3fb0, 0x9b6f), (0x3fb1, 0x9dfa), (0x3fb2, 0x9e75), (0x3fb3, 0x788c),
    (0x3fb4, 0x797f), (0x3fb5, 0x7da0), (0x3fb6, 0x83c9), (0x3fb7, 0x9304), (0x3fb8, 0x9e7f), (0x3fb9, 0x9e93),
    (0x3fba, 0x8ad6), (0x3fbb, 0x58df), (0x3fbc, 0x5f04), (0x3fbd, 0x6727), (0x3fbe, 0x7027), (0x3fbf, 0x74cf),
    (0x3fc0, 0x7c60), (0x3fc1, 0x807e), (0x3fc2, 0x5121), (0x3fc3, 0x7028), (0x3fc4, 0x7262), (0x3fc5, 0x78ca),
    (0x3fc6, 0x8cc2), (0x3fc7, 0x8cda), (0x3fc8, 0x8cf4), (0x3fc9, 0x96f7), (0x3fca, 0x4e86), (0x3fcb, 0x50da),
    (0x3fcc, 0x5bee), (0x3fcd, 0x5ed6), (0x3fce, 0x6599), (0x3fcf, 0x71ce), (0x3fd0, 0x7642), (0x3fd1, 0x77ad),
    (0x3fd2, 0x804a), (0x3fd3, 0x84fc), (0x4034, 0x907c), (0x4035, 0x9b27), (0x4036, 0x9f8d), (0x4037, 0x58d8),
    (0x4038, 0x5a41), (0x4039, 0x5c62), (0x403a, 0x6a13), (0x403b, 0x6dda), (0x403c, 0x6f0f), (0x403d, 0x763b),
    (0x403e, 0x7d2f), (0x403f, 0x7e37), (0x4040, 0x851e), (0x4041, 0x8938), (0x4042, 0x93e4), (0x4043, 0x964b),
    (0x4044, 0x5289), (0x4045, 0x65d2), (0x4046, 0x67f3), (0x4047, 0x69b4), (0x4048, 0x6d41), (0x4049, 0x6e9c),
    (0x404a, 0x700f), (0x404b, 0x7409), (0x404c, 0x7460), (0x404d, 0x7559), (0x404e, 0x7624), (0x404f, 0x786b),
    (0x4050, 0x8b2c), (0x4051, 0x985e), (0x4052, 0x516d), (0x4053, 0x622e), (0x4054, 0x9678), (0x4055, 0x4f96),
    (0x4056, 0x502b), (0x4057, 0x5d19), (0x4058, 0x6dea), (0x4059, 0x7db8), (0x405a, 0x8f2a), (0x405b, 0x5f8b),
    (0x405c, 0x6144), (0x405d, 0x6817), (0x405e, 0xf961), (0x405f, 0x9686), (0x4060, 0x52d2), (0x4061, 0x808b),
    (0x4062, 0x51dc), (0x4063, 0x51cc), (0x4064, 0x695e), (0x4065, 0x7a1c), (0x4066, 0x7dbe), (0x4067, 0x83f1),
    (0x4068, 0x9675), (0x4069, 0x4fda), (0x406a, 0x5229), (0x406b, 0x5398), (0x406c, 0x540f), (0x406d, 0x550e),
    (0x406e, 0x5c65), (0x406f, 0x60a7), (0x4070, 0x674e), (0x4071, 0x68a8), (0x4072, 0x6d6c), (0x4073, 0x7281),
    (0x4074, 0x72f8), (0x4075, 0x7406), (0x4076, 0x7483), (0x4077, 0xf962), (0x4078, 0x75e2), (0x4079, 0x7c6c),
    (0x407a, 0x7f79), (0x407b, 0x7fb8), (0x407c, 0x8389), (0x407d, 0x88cf), (0x407e, 0x88e1), (0x407f, 0x91cc),
    (0x4080, 0x91d0), (0x4081, 0x96e2), (0x4082, 0x9bc9), (0x4083, 0x541d), (0x4084, 0x6f7e), (0x4085, 0x71d0),
    (0x4086, 0x7498), (0x4087, 0x85fa), (0x4088, 0x8eaa), (0x4089, 0x96a3), (0x408a, 0x9c57), (0x408b, 0x9e9f),
    (0x408c, 0x6797), (0x408d, 0x6dcb), (0x408e, 0x7433), (0x408f, 0x81e8), (0x4090, 0x9716), (0x4091, 0x782c),
    (0x40f2, 0x7acb), (0x40f3, 0x7b20), (0x40f4, 0x7c92), (0x40f5, 0x6469), (0x40f6, 0x746a), (0x40f7, 0x75f2),
    (0x40f8, 0x78bc), (0x40f9, 0x78e8), (0x40fa, 0x99ac), (0x40fb, 0x9b54), (0x40fc, 0x9ebb), (0x40fd, 0x5bde),
    (0x40fe, 0x5e55), (0x40ff, 0x6f20), (0x4100, 0x819c), (0x4101, 0x83ab), (0x4102, 0x9088), (0x4103, 0x4e07),
    (0x4104, 0x534d), (0x4105, 0x5a29), (0x4106, 0x5dd2), (0x4107, 0x5f4e), (0x4108, 0x6162), (0x4109, 0x633d),
    (0x410a, 0x6669), (0x410b, 0x66fc), (0x410c, 0x6eff), (0x410d, 0x6f2b), (0x410e, 0x7063), (0x410f, 0x779e),
    (0x4110, 0x842c), (0x4111, 0x8513), (0x4112, 0x883b), (0x4113, 0x8f13), (0x4114, 0x9945), (0x4115, 0x9c3b),
    (0x4116, 0x551c), (0x4117, 0x62b9), (0x4118, 0x672b), (0x4119, 0x6cab), (0x411a, 0x8309), (0x411b, 0x896a),
    (0x411c, 0x977a), (0x411d, 0x4ea1), (0x411e, 0x5984), (0x411f, 0x5fd8), (0x4120, 0x5fd9), (0x4121, 0x671b),
    (0x4122, 0x7db2), (0x4123, 0x7f54), (0x4124, 0x8292), (0x4125, 0x832b), (0x4126, 0x83bd), (0x4127, 0x8f1e),
    (0x4128, 0x9099), (0x4129, 0x57cb), (0x412a, 0x59b9), (0x412b, 0x5a92), (0x412c, 0x5bd0), (0x412d, 0x6627),
    (0x412e, 0x679a), (0x412f, 0x6885), (0x4130, 0x6bcf), (0x4131, 0x7164), (0x4132, 0x7f75), (0x4133, 0x8cb7),
    (0x4134, 0x8ce3), (0x4135, 0x9081), (0x4136, 0x9b45), (0x4137, 0x8108), (0x4138, 0x8c8a), (0x4139, 0x964c),
    (0x413a, 0x9a40), (0x413b, 0x9ea5), (0x413c, 0x5b5f), (0x413d, 0x6c13), (0x413e, 0x731b), (0x413f, 0x76f2),
    (0x4140, 0x76df), (0x4141, 0x840c), (0x4142, 0x51aa), (0x4143, 0x8993), (0x4144, 0x514d), (0x4145, 0x5195),
    (0x4146, 0x52c9), (0x4147, 0x68c9), (0x4148, 0x6c94), (0x4149, 0x7704), (0x414a, 0x7720), (0x414b, 0x7dbf),
    (0x414c, 0x7dec), (0x414d, 0x9762), (0x414e, 0x9eb5), (0x414f, 0x6ec5), (0x41b0, 0x8511), (0x41b1, 0x51a5),
    (0x41b2, 0x540d), (0x41b3, 0x547d), (0x41b4, 0x660e), (0x41b5, 0x669d), (0x41b6, 0x6927), (0x41b7, 0x6e9f),
    (0x41b8, 0x76bf), (0x41b9, 0x7791), (0x41ba, 0x8317), (0x41bb, 0x84c2), (0x41bc, 0x879f), (0x41bd, 0x9169),
    (0x41be, 0x9298), (0x41bf, 0x9cf4), (0x41c0, 0x8882), (0x41c1, 0x4fae), (0x41c2, 0x5192), (0x41c3, 0x52df),
    (0x41c4, 0x59c6), (0x41c5, 0x5e3d), (0x41c6, 0x6155), (0x41c7, 0x6478), (0x41c8, 0x6479), (0x41c9, 0x66ae),
    (0x41ca, 0x67d0), (0x41cb, 0x6a21), (0x41cc, 0x6bcd), (0x41cd, 0x6bdb), (0x41ce, 0x725f), (0x41cf, 0x7261),
    (0x41d0, 0x7441), (0x41d1, 0x7738), (0x41d2, 0x77db), (0x41d3, 0x8017), (0x41d4, 0x82bc), (0x41d5, 0x8305),
    (0x41d6, 0x8b00), (0x41d7, 0x8b28), (0x41d8, 0x8c8c), (0x41d9, 0x6728), (0x41da, 0x6c90), (0x41db, 0x7267),
    (0x41dc, 0x76ee), (0x41dd, 0x7766), (0x41de, 0x7a46), (0x41df, 0x9da9), (0x41e0, 0x6b7f), (0x41e1, 0x6c92),
    (0x41e2, 0x5922), (0x41e3, 0x6726), (0x41e4, 0x8499), (0x41e5, 0x536f), (0x41e6, 0x5893), (0x41e7, 0x5999),
    (0x41e8, 0x5edf), (0x41e9, 0x63cf), (0x41ea, 0x6634), (0x41eb, 0x6773), (0x41ec, 0x6e3a), (0x41ed, 0x732b),
    (0x41ee, 0x7ad7), (0x41ef, 0x82d7), (0x41f0, 0x9328), (0x41f1, 0x52d9), (0x41f2, 0x5deb), (0x41f3, 0x61ae),
    (0x41f4, 0x61cb), (0x41f5, 0x620a), (0x41f6, 0x62c7), (0x41f7, 0x64ab), (0x41f8, 0x65e0), (0x41f9, 0x6959),
    (0x41fa, 0x6b66), (0x41fb, 0x6bcb), (0x41fc, 0x7121), (0x41fd, 0x73f7), (0x41fe, 0x755d), (0x41ff, 0x7e46),
    (0x4200, 0x821e), (0x4201, 0x8302), (0x4202, 0x856a), (0x4203, 0x8aa3), (0x4204, 0x8cbf), (0x4205, 0x9727),
    (0x4206, 0x9d61), (0x4207, 0x58a8), (0x4208, 0x9ed8), (0x4209, 0x5011), (0x420a, 0x520e), (0x420b, 0x543b),
    (0x420c, 0x554f), (0x420d, 0x6587), (0x426e, 0x6c76), (0x426f, 0x7d0a), (0x4270, 0x7d0b), (0x4271, 0x805e),
    (0x4272, 0x868a), (0x4273, 0x9580), (0x4274, 0x96ef), (0x4275, 0x52ff), (0x4276, 0x6c95), (0x4277, 0x7269),
    (0x4278, 0x5473), (0x4279, 0x5a9a), (0x427a, 0x5c3e), (0x427b, 0x5d4b), (0x427c, 0x5f4c), (0x427d, 0x5fae),
    (0x427e, 0x672a), (0x427f, 0x68b6), (0x4280, 0x6963), (0x4281, 0x6e3c), (0x4282, 0x6e44), (0x4283, 0x7709),
    (0x4284, 0x7c73), (0x4285, 0x7f8e), (0x4286, 0x8587), (0x4287, 0x8b0e), (0x4288, 0x8ff7), (0x4289, 0x9761),
    (0x428a, 0x9ef4), (0x428b, 0x5cb7), (0x428c, 0x60b6), (0x428d, 0x610d), (0x428e, 0x61ab), (0x428f, 0x654f),
    (0x4290, 0x65fb), (0x4291, 0x65fc), (0x4292, 0x6c11), (0x4293, 0x6cef), (0x4294, 0x739f), (0x4295, 0x73c9),
    (0x4296, 0x7de1), (0x4297, 0x9594), (0x4298, 0x5bc6), (0x4299, 0x871c), (0x429a, 0x8b10), (0x429b, 0x525d),
    (0x429c, 0x535a), (0x429d, 0x62cd), (0x429e, 0x640f), (0x429f, 0x64b2), (0x42a0, 0x6734), (0x42a1, 0x6a38),
    (0x42a2, 0x6cca), (0x42a3, 0x73c0), (0x42a4, 0x749e), (0x42a5, 0x7b94), (0x42a6, 0x7c95), (0x42a7, 0x7e1b),
    (0x42a8, 0x818a), (0x42a9, 0x8236), (0x42aa, 0x8584), (0x42ab, 0x8feb), (0x42ac, 0x96f9), (0x42ad, 0x99c1),
    (0x42ae, 0x4f34), (0x42af, 0x534a), (0x42b0, 0x53cd), (0x42b1, 0x53db), (0x42b2, 0x62cc), (0x42b3, 0x642c),
    (0x42b4, 0x6500), (0x42b5, 0x6591), (0x42b6, 0x69c3), (0x42b7, 0x6cee), (0x42b8, 0x6f58), (0x42b9, 0x73ed),
    (0x42ba, 0x7554), (0x42bb, 0x7622), (0x42bc, 0x76e4), (0x42bd, 0x76fc), (0x42be, 0x78d0), (0x42bf, 0x78fb),
    (0x42c0, 0x792c), (0x42c1, 0x7d46), (0x42c2, 0x822c), (0x42c3, 0x87e0), (0x42c4, 0x8fd4), (0x42c5, 0x9812),
    (0x42c6, 0x98ef), (0x42c7, 0x52c3), (0x42c8, 0x62d4), (0x42c9, 0x64a5), (0x42ca, 0x6e24), (0x42cb, 0x6f51),
    (0x432c, 0x767c), (0x432d, 0x8dcb), (0x432e, 0x91b1), (0x432f, 0x9262), (0x4330, 0x9aee), (0x4331, 0x9b43),
    (0x4332, 0x5023), (0x4333, 0x508d), (0x4334, 0x574a), (0x4335, 0x59a8), (0x4336, 0x5c28), (0x4337, 0x5e47),
    (0x4338, 0x5f77), (0x4339, 0x623f), (0x433a, 0x653e), (0x433b, 0x65b9), (0x433c, 0x65c1), (0x433d, 0x6609),
    (0x433e, 0x678b), (0x433f, 0x699c), (0x4340, 0x6ec2), (0x4341, 0x78c5), (0x4342, 0x7d21), (0x4343, 0x80aa),
    (0x4344, 0x8180), (0x4345, 0x822b), (0x4346, 0x82b3), (0x4347, 0x84a1), (0x4348, 0x868c), (0x4349, 0x8a2a),
    (0x434a, 0x8b17), (0x434b, 0x90a6), (0x434c, 0x9632), (0x434d, 0x9f90), (0x434e, 0x500d), (0x434f, 0x4ff3),
    (0x4350, 0xf963), (0x4351, 0x57f9), (0x4352, 0x5f98), (0x4353, 0x62dc), (0x4354, 0x6392), (0x4355, 0x676f),
    (0x4356, 0x6e43), (0x4357, 0x7119), (0x4358, 0x76c3), (0x4359, 0x80cc), (0x435a, 0x80da), (0x435b, 0x88f4),
    (0x435c, 0x88f5), (0x435d, 0x8919), (0x435e, 0x8ce0), (0x435f, 0x8f29), (0x4360, 0x914d), (0x4361, 0x966a),
    (0x4362, 0x4f2f), (0x4363, 0x4f70), (0x4364, 0x5e1b), (0x4365, 0x67cf), (0x4366, 0x6822), (0x4367, 0x767d),
    (0x4368, 0x767e), (0x4369, 0x9b44), (0x436a, 0x5e61), (0x436b, 0x6a0a), (0x436c, 0x7169), (0x436d, 0x71d4),
    (0x436e, 0x756a), (0x436f, 0xf964), (0x4370, 0x7e41), (0x4371, 0x8543), (0x4372, 0x85e9), (0x4373, 0x98dc),
    (0x4374, 0x4f10), (0x4375, 0x7b4f), (0x4376, 0x7f70), (0x4377, 0x95a5), (0x4378, 0x51e1), (0x4379, 0x5e06),
    (0x437a, 0x68b5), (0x437b, 0x6c3e), (0x437c, 0x6c4e), (0x437d, 0x6cdb), (0x437e, 0x72af), (0x437f, 0x7bc4),
    (0x4380, 0x8303), (0x4381, 0x6cd5), (0x4382, 0x743a), (0x4383, 0x50fb), (0x4384, 0x5288), (0x4385, 0x58c1),
    (0x4386, 0x64d8), (0x4387, 0x6a97), (0x4388, 0x74a7), (0x4389, 0x7656), (0x43ea, 0x78a7), (0x43eb, 0x8617),
    (0x43ec, 0x95e2), (0x43ed, 0x9739), (0x43ee, 0xf965), (0x43ef, 0x535e), (0x43f0, 0x5f01), (0x43f1, 0x8b8a),
    (0x43f2, 0x8fa8), (0x43f3, 0x8faf), (0x43f4, 0x908a), (0x43f5, 0x5225), (0x43f6, 0x77a5), (0x43f7, 0x9c49),
    (0x43f8, 0x9f08), (0x43f9, 0x4e19), (0x43fa, 0x5002), (0x43fb, 0x5175), (0x43fc, 0x5c5b), (0x43fd, 0x5e77),
    (0x43fe, 0x661e), (0x43ff, 0x663a), (0x4400, 0x67c4), (0x4401, 0x68c5), (0x4402, 0x70b3), (0x4403, 0x7501),
    (0x4404, 0x75c5), (0x4405, 0x79c9), (0x4406, 0x7add), (0x4407, 0x8f27), (0x4408, 0x9920), (0x4409, 0x9a08),
    (0x440a, 0x4fdd), (0x440b, 0x5821), (0x440c, 0x5831), (0x440d, 0x5bf6), (0x440e, 0x666e), (0x440f, 0x6b65),
    (0x4410, 0x6d11), (0x4411, 0x6e7a), (0x4412, 0x6f7d), (0x4413, 0x73e4), (0x4414, 0x752b), (0x4415, 0x83e9),
    (0x4416, 0x88dc), (0x4417, 0x8913), (0x4418, 0x8b5c), (0x4419, 0x8f14), (0x441a, 0x4f0f), (0x441b, 0x50d5),
    (0x441c, 0x5310), (0x441d, 0x535c), (0x441e, 0x5b93), (0x441f, 0x5fa9), (0x4420, 0x670d), (0x4421, 0x798f),
    (0x4422, 0x8179), (0x4423, 0x832f), (0x4424, 0x8514), (0x4425, 0x8907), (0x4426, 0x8986), (0x4427, 0x8f39),
    (0x4428, 0x8f3b), (0x4429, 0x99a5), (0x442a, 0x9c12), (0x442b, 0x672c), (0x442c, 0x4e76), (0x442d, 0x4ff8),
    (0x442e, 0x5949), (0x442f, 0x5c01), (0x4430, 0x5cef), (0x4431, 0x5cf0), (0x4432, 0x6367), (0x4433, 0x68d2),
    (0x4434, 0x70fd), (0x4435, 0x71a2), (0x4436, 0x742b), (0x4437, 0x7e2b), (0x4438, 0x84ec), (0x4439, 0x8702),
    (0x443a, 0x9022), (0x443b, 0x92d2), (0x443c, 0x9cf3), (0x443d, 0x4e0d), (0x443e, 0x4ed8), (0x443f, 0x4fef),
    (0x4440, 0x5085), (0x4441, 0x5256), (0x4442, 0x526f), (0x4443, 0x5426), (0x4444, 0x5490), (0x4445, 0x57e0),
    (0x4446, 0x592b), (0x4447, 0x5a66), (0x44a8, 0x5b5a), (0x44a9, 0x5b75), (0x44aa, 0x5bcc), (0x44ab, 0x5e9c),
    (0x44ac, 0xf966), (0x44ad, 0x6276), (0x44ae, 0x6577), (0x44af, 0x65a7), (0x44b0, 0x6d6e), (0x44b1, 0x6ea5),
    (0x44b2, 0x7236), (0x44b3, 0x7b26), (0x44b4, 0x7c3f), (0x44b5, 0x7f36), (0x44b6, 0x8150), (0x44b7, 0x8151),
    (0x44b8, 0x819a), (0x44b9, 0x8240), (0x44ba, 0x8299), (0x44bb, 0x83a9), (0x44bc, 0x8a03), (0x44bd, 0x8ca0),
    (0x44be, 0x8ce6), (0x44bf, 0x8cfb), (0x44c0, 0x8d74), (0x44c1, 0x8dba), (0x44c2, 0x90e8), (0x44c3, 0x91dc),
    (0x44c4, 0x961c), (0x44c5, 0x9644), (0x44c6, 0x99d9), (0x44c7, 0x9ce7), (0x44c8, 0x5317), (0x44c9, 0x5206),
    (0x44ca, 0x5429), (0x44cb, 0x5674), (0x44cc, 0x58b3), (0x44cd, 0x5954), (0x44ce, 0x596e), (0x44cf, 0x5fff),
    (0x44d0, 0x61a4), (0x44d1, 0x626e), (0x44d2, 0x6610), (0x44d3, 0x6c7e), (0x44d4, 0x711a), (0x44d5, 0x76c6),
    (0x44d6, 0x7c89), (0x44d7, 0x7cde), (0x44d8, 0x7d1b), (0x44d9, 0x82ac), (0x44da, 0x8cc1), (0x44db, 0x96f0),
    (0x44dc, 0xf967), (0x44dd, 0x4f5b), (0x44de, 0x5f17), (0x44df, 0x5f7f), (0x44e0, 0x62c2), (0x44e1, 0x5d29),
    (0x44e2, 0x670b), (0x44e3, 0x68da), (0x44e4, 0x787c), (0x44e5, 0x7e43), (0x44e6, 0x9d6c), (0x44e7, 0x4e15),
    (0x44e8, 0x5099), (0x44e9, 0x5315), (0x44ea, 0x532a), (0x44eb, 0x5351), (0x44ec, 0x5983), (0x44ed, 0x5a62),
    (0x44ee, 0x5e87), (0x44ef, 0x60b2), (0x44f0, 0x618a), (0x44f1, 0x6249), (0x44f2, 0x6279), (0x44f3, 0x6590),
    (0x44f4, 0x6787), (0x44f5, 0x69a7), (0x44f6, 0x6bd4), (0x44f7, 0x6bd6), (0x44f8, 0x6bd7), (0x44f9, 0x6bd8),
    (0x44fa, 0x6cb8), (0x44fb, 0xf968), (0x44fc, 0x7435), (0x44fd, 0x75fa), (0x44fe, 0x7812), (0x44ff, 0x7891),
    (0x4500, 0x79d5), (0x4501, 0x79d8), (0x4502, 0x7c83), (0x4503, 0x7dcb), (0x4504, 0x7fe1), (0x4505, 0x80a5),
    (0x4566, 0x813e), (0x4567, 0x81c2), (0x4568, 0x83f2), (0x4569, 0x871a), (0x456a, 0x88e8), (0x456b, 0x8ab9),
    (0x456c, 0x8b6c), (0x456d, 0x8cbb), (0x456e, 0x9119), (0x456f, 0x975e), (0x4570, 0x98db), (0x4571, 0x9f3b),
    (0x4572, 0x56ac), (0x4573, 0x5b2a), (0x4574, 0x5f6c), (0x4575, 0x658c), (0x4576, 0x6ab3), (0x4577, 0x6baf),
    (0x4578, 0x6d5c), (0x4579, 0x6ff1), (0x457a, 0x7015), (0x457b, 0x725d), (0x457c, 0x73ad), (0x457d, 0x8ca7),
    (0x457e, 0x8cd3), (0x457f, 0x983b), (0x4580, 0x6191), (0x4581, 0x6c37), (0x4582, 0x8058), (0x4583, 0x9a01),
    (0x4584, 0x4e4d), (0x4585, 0x4e8b), (0x4586, 0x4e9b), (0x4587, 0x4ed5), (0x4588, 0x4f3a), (0x4589, 0x4f3c),
    (0x458a, 0x4f7f), (0x458b, 0x4fdf), (0x458c, 0x50ff), (0x458d, 0x53f2), (0x458e, 0x53f8), (0x458f, 0x5506),
    (0x4590, 0x55e3), (0x4591, 0x56db), (0x4592, 0x58eb), (0x4593, 0x5962), (0x4594, 0x5a11), (0x4595, 0x5beb),
    (0x4596, 0x5bfa), (0x4597, 0x5c04), (0x4598, 0x5df3), (0x4599, 0x5e2b), (0x459a, 0x5f99), (0x459b, 0x601d),
    (0x459c, 0x6368), (0x459d, 0x659c), (0x459e, 0x65af), (0x459f, 0x67f6), (0x45a0, 0x67fb), (0x45a1, 0x68ad),
    (0x45a2, 0x6b7b), (0x45a3, 0x6c99), (0x45a4, 0x6cd7), (0x45a5, 0x6e23), (0x45a6, 0x7009), (0x45a7, 0x7345),
    (0x45a8, 0x7802), (0x45a9, 0x793e), (0x45aa, 0x7940), (0x45ab, 0x7960), (0x45ac, 0x79c1), (0x45ad, 0x7be9),
    (0x45ae, 0x7d17), (0x45af, 0x7d72), (0x45b0, 0x8086), (0x45b1, 0x820d), (0x45b2, 0x838e), (0x45b3, 0x84d1),
    (0x45b4, 0x86c7), (0x45b5, 0x88df), (0x45b6, 0x8a50), (0x45b7, 0x8a5e), (0x45b8, 0x8b1d), (0x45b9, 0x8cdc),
    (0x45ba, 0x8d66), (0x45bb, 0x8fad), (0x45bc, 0x90aa), (0x45bd, 0x98fc), (0x45be, 0x99df), (0x45bf, 0x9e9d),
    (0x45c0, 0x524a), (0x45c1, 0xf969), (0x45c2, 0x6714), (0x45c3, 0xf96a), (0x4624, 0x5098), (0x4625, 0x522a),
    (0x4626, 0x5c71), (0x4627, 0x6563), (0x4628, 0x6c55), (0x4629, 0x73ca), (0x462a, 0x7523), (0x462b, 0x759d),
    (0x462c, 0x7b97), (0x462d, 0x849c), (0x462e, 0x9178), (0x462f, 0x9730), (0x4630, 0x4e77), (0x4631, 0x6492),
    (0x4632, 0x6bba), (0x4633, 0x715e), (0x4634, 0x85a9), (0x4635, 0x4e09), (0x4636, 0xf96b), (0x4637, 0x6749),
    (0x4638, 0x68ee), (0x4639, 0x6e17), (0x463a, 0x829f), (0x463b, 0x8518), (0x463c, 0x886b), (0x463d, 0x63f7),
    (0x463e, 0x6f81), (0x463f, 0x9212), (0x4640, 0x98af), (0x4641, 0x4e0a), (0x4642, 0x50b7), (0x4643, 0x50cf),
    (0x4644, 0x511f), (0x4645, 0x5546), (0x4646, 0x55aa), (0x4647, 0x5617), (0x4648, 0x5b40), (0x4649, 0x5c19),
    (0x464a, 0x5ce0), (0x464b, 0x5e38), (0x464c, 0x5e8a), (0x464d, 0x5ea0), (0x464e, 0x5ec2), (0x464f, 0x60f3),
    (0x4650, 0x6851), (0x4651, 0x6a61), (0x4652, 0x6e58), (0x4653, 0x723d), (0x4654, 0x7240), (0x4655, 0x72c0),
    (0x4656, 0x76f8), (0x4657, 0x7965), (0x4658, 0x7bb1), (0x4659, 0x7fd4), (0x465a, 0x88f3), (0x465b, 0x89f4),
    (0x465c, 0x8a73), (0x465d, 0x8c61), (0x465e, 0x8cde), (0x465f, 0x971c), (0x4660, 0x585e), (0x4661, 0x74bd),
    (0x4662, 0x8cfd), (0x4663, 0x55c7), (0x4664, 0xf96c), (0x4665, 0x7a61), (0x4666, 0x7d22), (0x4667, 0x8272),
    (0x4668, 0x7272), (0x4669, 0x751f), (0x466a, 0x7525), (0x466b, 0xf96d), (0x466c, 0x7b19), (0x466d, 0x5885),
    (0x466e, 0x58fb), (0x466f, 0x5dbc), (0x4670, 0x5e8f), (0x4671, 0x5eb6), (0x4672, 0x5f90), (0x4673, 0x6055),
    (0x4674, 0x6292), (0x4675, 0x637f), (0x4676, 0x654d), (0x4677, 0x6691), (0x4678, 0x66d9), (0x4679, 0x66f8),
    (0x467a, 0x6816), (0x467b, 0x68f2), (0x467c, 0x7280), (0x467d, 0x745e), (0x467e, 0x7b6e), (0x467f, 0x7d6e),
    (0x4680, 0x7dd6), (0x4681, 0x7f72), (0x46e2, 0x80e5), (0x46e3, 0x8212), (0x46e4, 0x85af), (0x46e5, 0x897f),
    (0x46e6, 0x8a93), (0x46e7, 0x901d), (0x46e8, 0x92e4), (0x46e9, 0x9ecd), (0x46ea, 0x9f20), (0x46eb, 0x5915),
    (0x46ec, 0x596d), (0x46ed, 0x5e2d), (0x46ee, 0x60dc), (0x46ef, 0x6614), (0x46f0, 0x6673), (0x46f1, 0x6790),
    (0x46f2, 0x6c50), (0x46f3, 0x6dc5), (0x46f4, 0x6f5f), (0x46f5, 0x77f3), (0x46f6, 0x78a9), (0x46f7, 0x84c6),
    (0x46f8, 0x91cb), (0x46f9, 0x932b), (0x46fa, 0x4ed9), (0x46fb, 0x50ca), (0x46fc, 0x5148), (0x46fd, 0x5584),
    (0x46fe, 0x5b0b), (0x46ff, 0x5ba3), (0x4700, 0x6247), (0x4701, 0x657e), (0x4702, 0x65cb), (0x4703, 0x6e32),
    (0x4704, 0x717d), (0x4705, 0x7401), (0x4706, 0x7444), (0x4707, 0x7487), (0x4708, 0x74bf), (0x4709, 0x766c),
    (0x470a, 0x79aa), (0x470b, 0x7dda), (0x470c, 0x7e55), (0x470d, 0x7fa8), (0x470e, 0x817a), (0x470f, 0x81b3),
    (0x4710, 0x8239), (0x4711, 0x861a), (0x4712, 0x87ec), (0x4713, 0x8a75), (0x4714, 0x8de3), (0x4715, 0x9078),
    (0x4716, 0x9291), (0x4717, 0x9425), (0x4718, 0x994d), (0x4719, 0x9bae), (0x471a, 0x5368), (0x471b, 0x5c51),
    (0x471c, 0x6954), (0x471d, 0x6cc4), (0x471e, 0x6d29), (0x471f, 0x6e2b), (0x4720, 0x820c), (0x4721, 0x859b),
    (0x4722, 0x893b), (0x4723, 0x8a2d), (0x4724, 0x8aaa), (0x4725, 0x96ea), (0x4726, 0x9f67), (0x4727, 0x5261),
    (0x4728, 0x66b9), (0x4729, 0x6bb2), (0x472a, 0x7e96), (0x472b, 0x87fe), (0x472c, 0x8d0d), (0x472d, 0x9583),
    (0x472e, 0x965d), (0x472f, 0x651d), (0x4730, 0x6d89), (0x4731, 0x71ee), (0x4732, 0xf96e), (0x4733, 0x57ce),
    (0x4734, 0x59d3), (0x4735, 0x5bac), (0x4736, 0x6027), (0x4737, 0x60fa), (0x4738, 0x6210), (0x4739, 0x661f),
    (0x473a, 0x665f), (0x473b, 0x7329), (0x473c, 0x73f9), (0x473d, 0x76db), (0x473e, 0x7701), (0x473f, 0x7b6c),
    (0x47a0, 0x8056), (0x47a1, 0x8072), (0x47a2, 0x8165), (0x47a3, 0x8aa0), (0x47a4, 0x9192), (0x47a5, 0x4e16),
    (0x47a6, 0x52e2), (0x47a7, 0x6b72), (0x47a8, 0x6d17), (0x47a9, 0x7a05), (0x47aa, 0x7b39), (0x47ab, 0x7d30),
    (0x47ac, 0xf96f), (0x47ad, 0x8cb0), (0x47ae, 0x53ec), (0x47af, 0x562f), (0x47b0, 0x5851), (0x47b1, 0x5bb5),
    (0x47b2, 0x5c0f), (0x47b3, 0x5c11), (0x47b4, 0x5de2), (0x47b5, 0x6240), (0x47b6, 0x6383), (0x47b7, 0x6414),
    (0x47b8, 0x662d), (0x47b9, 0x68b3), (0x47ba, 0x6cbc), (0x47bb, 0x6d88), (0x47bc, 0x6eaf), (0x47bd, 0x701f),
    (0x47be, 0x70a4), (0x47bf, 0x71d2), (0x47c0, 0x7526), (0x47c1, 0x758f), (0x47c2, 0x758e), (0x47c3, 0x7619),
    (0x47c4, 0x7b11), (0x47c5, 0x7be0), (0x47c6, 0x7c2b), (0x47c7, 0x7d20), (0x47c8, 0x7d39), (0x47c9, 0x852c),
    (0x47ca, 0x856d), (0x47cb, 0x8607), (0x47cc, 0x8a34), (0x47cd, 0x900d), (0x47ce, 0x9061), (0x47cf, 0x90b5),
    (0x47d0, 0x92b7), (0x47d1, 0x97f6), (0x47d2, 0x9a37), (0x47d3, 0x4fd7), (0x47d4, 0x5c6c), (0x47d5, 0x675f),
    (0x47d6, 0x6d91), (0x47d7, 0x7c9f), (0x47d8, 0x7e8c), (0x47d9, 0x8b16), (0x47da, 0x8d16), (0x47db, 0x901f),
    (0x47dc, 0x5b6b), (0x47dd, 0x5dfd), (0x47de, 0x640d), (0x47df, 0x84c0), (0x47e0, 0x905c), (0x47e1, 0x98e1),
    (0x47e2, 0x7387), (0x47e3, 0x5b8b), (0x47e4, 0x609a), (0x47e5, 0x677e), (0x47e6, 0x6dde), (0x47e7, 0x8a1f),
    (0x47e8, 0x8aa6), (0x47e9, 0x9001), (0x47ea, 0x980c), (0x47eb, 0x5237), (0x47ec, 0xf970), (0x47ed, 0x7051),
    (0x47ee, 0x788e), (0x47ef, 0x9396), (0x47f0, 0x8870), (0x47f1, 0x91d7), (0x47f2, 0x4fee), (0x47f3, 0x53d7),
    (0x47f4, 0x55fd), (0x47f5, 0x56da), (0x47f6, 0x5782), (0x47f7, 0x58fd), (0x47f8, 0x5ac2), (0x47f9, 0x5b88),
    (0x47fa, 0x5cab), (0x47fb, 0x5cc0), (0x47fc, 0x5e25), (0x47fd, 0x6101), (0x485e, 0x620d), (0x485f, 0x624b),
    (0x4860, 0x6388), (0x4861, 0x641c), (0x4862, 0x6536), (0x4863, 0x6578), (0x4864, 0x6a39), (0x4865, 0x6b8a),
    (0x4866, 0x6c34), (0x4867, 0x6d19), (0x4868, 0x6f31), (0x4869, 0x71e7), (0x486a, 0x72e9), (0x486b, 0x7378),
    (0x486c, 0x7407), (0x486d, 0x74b2), (0x486e, 0x7626), (0x486f, 0x7761), (0x4870, 0x79c0), (0x4871, 0x7a57),
    (0x4872, 0x7aea), (0x4873, 0x7cb9), (0x4874, 0x7d8f), (0x4875, 0x7dac), (0x4876, 0x7e61), (0x4877, 0x7f9e),
    (0x4878, 0x8129), (0x4879, 0x8331), (0x487a, 0x8490), (0x487b, 0x84da), (0x487c, 0x85ea), (0x487d, 0x8896),
    (0x487e, 0x8ab0), (0x487f, 0x8b90), (0x4880, 0x8f38), (0x4881, 0x9042), (0x4882, 0x9083), (0x4883, 0x916c),
    (0x4884, 0x9296), (0x4885, 0x92b9), (0x4886, 0x968b), (0x4887, 0x96a7), (0x4888, 0x96a8), (0x4889, 0x96d6),
    (0x488a, 0x9700), (0x488b, 0x9808), (0x488c, 0x9996), (0x488d, 0x9ad3), (0x488e, 0x9b1a), (0x488f, 0x53d4),
    (0x4890, 0x587e), (0x4891, 0x5919), (0x4892, 0x5b70), (0x4893, 0x5bbf), (0x4894, 0x6dd1), (0x4895, 0x6f5a),
    (0x4896, 0x719f), (0x4897, 0x7421), (0x4898, 0x74b9), (0x4899, 0x8085), (0x489a, 0x83fd), (0x489b, 0x5de1),
    (0x489c, 0x5f87), (0x489d, 0x5faa), (0x489e, 0x6042), (0x489f, 0x65ec), (0x48a0, 0x6812), (0x48a1, 0x696f),
    (0x48a2, 0x6a53), (0x48a3, 0x6b89), (0x48a4, 0x6d35), (0x48a5, 0x6df3), (0x48a6, 0x73e3), (0x48a7, 0x76fe),
    (0x48a8, 0x77ac), (0x48a9, 0x7b4d), (0x48aa, 0x7d14), (0x48ab, 0x8123), (0x48ac, 0x821c), (0x48ad, 0x8340),
    (0x48ae, 0x84f4), (0x48af, 0x8563), (0x48b0, 0x8a62), (0x48b1, 0x8ac4), (0x48b2, 0x9187), (0x48b3, 0x931e),
    (0x48b4, 0x9806), (0x48b5, 0x99b4), (0x48b6, 0x620c), (0x48b7, 0x8853), (0x48b8, 0x8ff0), (0x48b9, 0x9265),
    (0x48ba, 0x5d07), (0x48bb, 0x5d27), (0x491c, 0x5d69), (0x491d, 0x745f), (0x491e, 0x819d), (0x491f, 0x8768),
    (0x4920, 0x6fd5), (0x4921, 0x62fe), (0x4922, 0x7fd2), (0x4923, 0x8936), (0x4924, 0x8972), (0x4925, 0x4e1e),
    (0x4926, 0x4e58), (0x4927, 0x50e7), (0x4928, 0x52dd), (0x4929, 0x5347), (0x492a, 0x627f), (0x492b, 0x6607),
    (0x492c, 0x7e69), (0x492d, 0x8805), (0x492e, 0x965e), (0x492f, 0x4f8d), (0x4930, 0x5319), (0x4931, 0x5636),
    (0x4932, 0x59cb), (0x4933, 0x5aa4), (0x4934, 0x5c38), (0x4935, 0x5c4e), (0x4936, 0x5c4d), (0x4937, 0x5e02),
    (0x4938, 0x5f11), (0x4939, 0x6043), (0x493a, 0x65bd), (0x493b, 0x662f), (0x493c, 0x6642), (0x493d, 0x67be),
    (0x493e, 0x67f4), (0x493f, 0x731c), (0x4940, 0x77e2), (0x4941, 0x793a), (0x4942, 0x7fc5), (0x4943, 0x8494),
    (0x4944, 0x84cd), (0x4945, 0x8996), (0x4946, 0x8a66), (0x4947, 0x8a69), (0x4948, 0x8ae1), (0x4949, 0x8c55),
    (0x494a, 0x8c7a), (0x494b, 0x57f4), (0x494c, 0x5bd4), (0x494d, 0x5f0f), (0x494e, 0x606f), (0x494f, 0x62ed),
    (0x4950, 0x690d), (0x4951, 0x6b96), (0x4952, 0x6e5c), (0x4953, 0x7184), (0x4954, 0x7bd2), (0x4955, 0x8755),
    (0x4956, 0x8b58), (0x4957, 0x8efe), (0x4958, 0x98df), (0x4959, 0x98fe), (0x495a, 0x4f38), (0x495b, 0x4f81),
    (0x495c, 0x4fe1), (0x495d, 0x547b), (0x495e, 0x5a20), (0x495f, 0x5bb8), (0x4960, 0x613c), (0x4961, 0x65b0),
    (0x4962, 0x6668), (0x4963, 0x71fc), (0x4964, 0x7533), (0x4965, 0x795e), (0x4966, 0x7d33), (0x4967, 0x814e),
    (0x4968, 0x81e3), (0x4969, 0x8398), (0x496a, 0x85aa), (0x496b, 0x85ce), (0x496c, 0x8703), (0x496d, 0x8a0a),
    (0x496e, 0x8eab), (0x496f, 0x8f9b), (0x4970, 0xf971), (0x4971, 0x8fc5), (0x4972, 0x5931), (0x4973, 0x5ba4),
    (0x4974, 0x5be6), (0x4975, 0x6089), (0x4976, 0x5be9), (0x4977, 0x5c0b), (0x4978, 0x5fc3), (0x4979, 0x6c81),
    (0x49da, 0xf972), (0x49db, 0x6df1), (0x49dc, 0x700b), (0x49dd, 0x751a), (0x49de, 0x82af), (0x49df, 0x8af6),
    (0x49e0, 0x4ec0), (0x49e1, 0x5341), (0x49e2, 0xf973), (0x49e3, 0x96d9), (0x49e4, 0x6c0f), (0x49e5, 0x4e9e),
    (0x49e6, 0x4fc4), (0x49e7, 0x5152), (0x49e8, 0x555e), (0x49e9, 0x5a25), (0x49ea, 0x5ce8), (0x49eb, 0x6211),
    (0x49ec, 0x7259), (0x49ed, 0x82bd), (0x49ee, 0x83aa), (0x49ef, 0x86fe), (0x49f0, 0x8859), (0x49f1, 0x8a1d),
    (0x49f2, 0x963f), (0x49f3, 0x96c5), (0x49f4, 0x9913), (0x49f5, 0x9d09), (0x49f6, 0x9d5d), (0x49f7, 0x580a),
    (0x49f8, 0x5cb3), (0x49f9, 0x5dbd), (0x49fa, 0x5e44), (0x49fb, 0x60e1), (0x49fc, 0x6115), (0x49fd, 0x63e1),
    (0x49fe, 0x6a02), (0x49ff, 0x6e25), (0x4a00, 0x9102), (0x4a01, 0x9354), (0x4a02, 0x984e), (0x4a03, 0x9c10),
    (0x4a04, 0x9f77), (0x4a05, 0x5b89), (0x4a06, 0x5cb8), (0x4a07, 0x6309), (0x4a08, 0x664f), (0x4a09, 0x6848),
    (0x4a0a, 0x773c), (0x4a0b, 0x96c1), (0x4a0c, 0x978d), (0x4a0d, 0x9854), (0x4a0e, 0x9b9f), (0x4a0f, 0x65a1),
    (0x4a10, 0x8b01), (0x4a11, 0x8ecb), (0x4a12, 0x95bc), (0x4a13, 0x5535), (0x4a14, 0x5ca9), (0x4a15, 0x5dd6),
    (0x4a16, 0x5eb5), (0x4a17, 0x6697), (0x4a18, 0x764c), (0x4a19, 0x83f4), (0x4a1a, 0x95c7), (0x4a1b, 0x58d3),
    (0x4a1c, 0x62bc), (0x4a1d, 0x72ce), (0x4a1e, 0x9d28), (0x4a1f, 0x4ef0), (0x4a20, 0x592e), (0x4a21, 0x600f),
    (0x4a22, 0x663b), (0x4a23, 0x6b83), (0x4a24, 0x79e7), (0x4a25, 0x9d26), (0x4a26, 0x5393), (0x4a27, 0x54c0),
    (0x4a28, 0x57c3), (0x4a29, 0x5d16), (0x4a2a, 0x611b), (0x4a2b, 0x66d6), (0x4a2c, 0x6daf), (0x4a2d, 0x788d),
    (0x4a2e, 0x827e), (0x4a2f, 0x9698), (0x4a30, 0x9744), (0x4a31, 0x5384), (0x4a32, 0x627c), (0x4a33, 0x6396),
    (0x4a34, 0x6db2), (0x4a35, 0x7e0a), (0x4a36, 0x814b), (0x4a37, 0x984d), (0x4a98, 0x6afb), (0x4a99, 0x7f4c),
    (0x4a9a, 0x9daf), (0x4a9b, 0x9e1a), (0x4a9c, 0x4e5f), (0x4a9d, 0x503b), (0x4a9e, 0x51b6), (0x4a9f, 0x591c),
    (0x4aa0, 0x60f9), (0x4aa1, 0x63f6), (0x4aa2, 0x6930), (0x4aa3, 0x723a), (0x4aa4, 0x8036), (0x4aa5, 0xf974),
    (0x4aa6, 0x91ce), (0x4aa7, 0x5f31), (0x4aa8, 0xf975), (0x4aa9, 0xf976), (0x4aaa, 0x7d04), (0x4aab, 0x82e5),
    (0x4aac, 0x846f), (0x4aad, 0x84bb), (0x4aae, 0x85e5), (0x4aaf, 0x8e8d), (0x4ab0, 0xf977), (0x4ab1, 0x4f6f),
    (0x4ab2, 0xf978), (0x4ab3, 0xf979), (0x4ab4, 0x58e4), (0x4ab5, 0x5b43), (0x4ab6, 0x6059), (0x4ab7, 0x63da),
    (0x4ab8, 0x6518), (0x4ab9, 0x656d), (0x4aba, 0x6698), (0x4abb, 0xf97a), (0x4abc, 0x694a), (0x4abd, 0x6a23),
    (0x4abe, 0x6d0b), (0x4abf, 0x7001), (0x4ac0, 0x716c), (0x4ac1, 0x75d2), (0x4ac2, 0x760d), (0x4ac3, 0x79b3),
    (0x4ac4, 0x7a70), (0x4ac5, 0xf97b), (0x4ac6, 0x7f8a), (0x4ac7, 0xf97c), (0x4ac8, 0x8944), (0x4ac9, 0xf97d),
    (0x4aca, 0x8b93), (0x4acb, 0x91c0), (0x4acc, 0x967d), (0x4acd, 0xf97e), (0x4ace, 0x990a), (0x4acf, 0x5704),
    (0x4ad0, 0x5fa1), (0x4ad1, 0x65bc), (0x4ad2, 0x6f01), (0x4ad3, 0x7600), (0x4ad4, 0x79a6), (0x4ad5, 0x8a9e),
    (0x4ad6, 0x99ad), (0x4ad7, 0x9b5a), (0x4ad8, 0x9f6c), (0x4ad9, 0x5104), (0x4ada, 0x61b6), (0x4adb, 0x6291),
    (0x4adc, 0x6a8d), (0x4add, 0x81c6), (0x4ade, 0x5043), (0x4adf, 0x5830), (0x4ae0, 0x5f66), (0x4ae1, 0x7109),
    (0x4ae2, 0x8a00), (0x4ae3, 0x8afa), (0x4ae4, 0x5b7c), (0x4ae5, 0x8616), (0x4ae6, 0x4ffa), (0x4ae7, 0x513c),
    (0x4ae8, 0x56b4), (0x4ae9, 0x5944), (0x4aea, 0x63a9), (0x4aeb, 0x6df9), (0x4aec, 0x5daa), (0x4aed, 0x696d),
    (0x4aee, 0x5186), (0x4aef, 0x4e88), (0x4af0, 0x4f59), (0x4af1, 0xf97f), (0x4af2, 0xf980), (0x4af3, 0xf981),
    (0x4af4, 0x5982), (0x4af5, 0xf982), (0x4b56, 0xf983), (0x4b57, 0x6b5f), (0x4b58, 0x6c5d), (0x4b59, 0xf984),
    (0x4b5a, 0x74b5), (0x4b5b, 0x7916), (0x4b5c, 0xf985), (0x4b5d, 0x8207), (0x4b5e, 0x8245), (0x4b5f, 0x8339),
    (0x4b60, 0x8f3f), (0x4b61, 0x8f5d), (0x4b62, 0xf986), (0x4b63, 0x9918), (0x4b64, 0xf987), (0x4b65, 0xf988),
    (0x4b66, 0xf989), (0x4b67, 0x4ea6), (0x4b68, 0xf98a), (0x4b69, 0x57df), (0x4b6a, 0x5f79), (0x4b6b, 0x6613),
    (0x4b6c, 0xf98b), (0x4b6d, 0xf98c), (0x4b6e, 0x75ab), (0x4b6f, 0x7e79), (0x4b70, 0x8b6f), (0x4b71, 0xf98d),
    (0x4b72, 0x9006), (0x4b73, 0x9a5b), (0x4b74, 0x56a5), (0x4b75, 0x5827), (0x4b76, 0x59f8), (0x4b77, 0x5a1f),
    (0x4b78, 0x5bb4), (0x4b79, 0xf98e), (0x4b7a, 0x5ef6), (0x4b7b, 0xf98f), (0x4b7c, 0xf990), (0x4b7d, 0x6350),
    (0x4b7e, 0x633b), (0x4b7f, 0xf991), (0x4b80, 0x693d), (0x4b81, 0x6c87), (0x4b82, 0x6cbf), (0x4b83, 0x6d8e),
    (0x4b84, 0x6d93), (0x4b85, 0x6df5), (0x4b86, 0x6f14), (0x4b87, 0xf992), (0x4b88, 0x70df), (0x4b89, 0x7136),
    (0x4b8a, 0x7159), (0x4b8b, 0xf993), (0x4b8c, 0x71c3), (0x4b8d, 0x71d5), (0x4b8e, 0xf994), (0x4b8f, 0x784f),
    (0x4b90, 0x786f), (0x4b91, 0xf995), (0x4b92, 0x7b75), (0x4b93, 0x7de3), (0x4b94, 0xf996), (0x4b95, 0x7e2f),
    (0x4b96, 0xf997), (0x4b97, 0x884d), (0x4b98, 0x8edf), (0x4b99, 0xf998), (0x4b9a, 0xf999), (0x4b9b, 0xf99a),
    (0x4b9c, 0x925b), (0x4b9d, 0xf99b), (0x4b9e, 0x9cf6), (0x4b9f, 0xf99c), (0x4ba0, 0xf99d), (0x4ba1, 0xf99e),
    (0x4ba2, 0x6085), (0x4ba3, 0x6d85), (0x4ba4, 0xf99f), (0x4ba5, 0x71b1), (0x4ba6, 0xf9a0), (0x4ba7, 0xf9a1),
    (0x4ba8, 0x95b1), (0x4ba9, 0x53ad), (0x4baa, 0xf9a2), (0x4bab, 0xf9a3), (0x4bac, 0xf9a4), (0x4bad, 0x67d3),
    (0x4bae, 0xf9a5), (0x4baf, 0x708e), (0x4bb0, 0x7130), (0x4bb1, 0x7430), (0x4bb2, 0x8276), (0x4bb3, 0x82d2),
    (0x4c14, 0xf9a6), (0x4c15, 0x95bb), (0x4c16, 0x9ae5), (0x4c17, 0x9e7d), (0x4c18, 0x66c4), (0x4c19, 0xf9a7),
    (0x4c1a, 0x71c1), (0x4c1b, 0x8449), (0x4c1c, 0xf9a8), (0x4c1d, 0xf9a9), (0x4c1e, 0x584b), (0x4c1f, 0xf9aa),
    (0x4c20, 0xf9ab), (0x4c21, 0x5db8), (0x4c22, 0x5f71), (0x4c23, 0xf9ac), (0x4c24, 0x6620), (0x4c25, 0x668e),
    (0x4c26, 0x6979), (0x4c27, 0x69ae), (0x4c28, 0x6c38), (0x4c29, 0x6cf3), (0x4c2a, 0x6e36), (0x4c2b, 0x6f41),
    (0x4c2c, 0x6fda), (0x4c2d, 0x701b), (0x4c2e, 0x702f), (0x4c2f, 0x7150), (0x4c30, 0x71df), (0x4c31, 0x7370),
    (0x4c32, 0xf9ad), (0x4c33, 0x745b), (0x4c34, 0xf9ae), (0x4c35, 0x74d4), (0x4c36, 0x76c8), (0x4c37, 0x7a4e),
    (0x4c38, 0x7e93), (0x4c39, 0xf9af), (0x4c3a, 0xf9b0), (0x4c3b, 0x82f1), (0x4c3c, 0x8a60), (0x4c3d, 0x8fce),
    (0x4c3e, 0xf9b1), (0x4c3f, 0x9348), (0x4c40, 0xf9b2), (0x4c41, 0x9719), (0x4c42, 0xf9b3), (0x4c43, 0xf9b4),
    (0x4c44, 0x4e42), (0x4c45, 0x502a), (0x4c46, 0xf9b5), (0x4c47, 0x5208), (0x4c48, 0x53e1), (0x4c49, 0x66f3),
    (0x4c4a, 0x6c6d), (0x4c4b, 0x6fca), (0x4c4c, 0x730a), (0x4c4d, 0x777f), (0x4c4e, 0x7a62), (0x4c4f, 0x82ae),
    (0x4c50, 0x85dd), (0x4c51, 0x8602), (0x4c52, 0xf9b6), (0x4c53, 0x88d4), (0x4c54, 0x8a63), (0x4c55, 0x8b7d),
    (0x4c56, 0x8c6b), (0x4c57, 0xf9b7), (0x4c58, 0x92b3), (0x4c59, 0xf9b8), (0x4c5a, 0x9713), (0x4c5b, 0x9810),
    (0x4c5c, 0x4e94), (0x4c5d, 0x4f0d), (0x4c5e, 0x4fc9), (0x4c5f, 0x50b2), (0x4c60, 0x5348), (0x4c61, 0x543e),
    (0x4c62, 0x5433), (0x4c63, 0x55da), (0x4c64, 0x5862), (0x4c65, 0x58ba), (0x4c66, 0x5967), (0x4c67, 0x5a1b),
    (0x4c68, 0x5be4), (0x4c69, 0x609f), (0x4c6a, 0xf9b9), (0x4c6b, 0x61ca), (0x4c6c, 0x6556), (0x4c6d, 0x65ff),
    (0x4c6e, 0x6664), (0x4c6f, 0x68a7), (0x4c70, 0x6c5a), (0x4c71, 0x6fb3), (0x4cd2, 0x70cf), (0x4cd3, 0x71ac),
    (0x4cd4, 0x7352), (0x4cd5, 0x7b7d), (0x4cd6, 0x8708), (0x4cd7, 0x8aa4), (0x4cd8, 0x9c32), (0x4cd9, 0x9f07),
    (0x4cda, 0x5c4b), (0x4cdb, 0x6c83), (0x4cdc, 0x7344), (0x4cdd, 0x7389), (0x4cde, 0x923a), (0x4cdf, 0x6eab),
    (0x4ce0, 0x7465), (0x4ce1, 0x761f), (0x4ce2, 0x7a69), (0x4ce3, 0x7e15), (0x4ce4, 0x860a), (0x4ce5, 0x5140),
    (0x4ce6, 0x58c5), (0x4ce7, 0x64c1), (0x4ce8, 0x74ee), (0x4ce9, 0x7515), (0x4cea, 0x7670), (0x4ceb, 0x7fc1),
    (0x4cec, 0x9095), (0x4ced, 0x96cd), (0x4cee, 0x9954), (0x4cef, 0x6e26), (0x4cf0, 0x74e6), (0x4cf1, 0x7aa9),
    (0x4cf2, 0x7aaa), (0x4cf3, 0x81e5), (0x4cf4, 0x86d9), (0x4cf5, 0x8778), (0x4cf6, 0x8a1b), (0x4cf7, 0x5a49),
    (0x4cf8, 0x5b8c), (0x4cf9, 0x5b9b), (0x4cfa, 0x68a1), (0x4cfb, 0x6900), (0x4cfc, 0x6d63), (0x4cfd, 0x73a9),
    (0x4cfe, 0x7413), (0x4cff, 0x742c), (0x4d00, 0x7897), (0x4d01, 0x7de9), (0x4d02, 0x7feb), (0x4d03, 0x8118),
    (0x4d04, 0x8155), (0x4d05, 0x839e), (0x4d06, 0x8c4c), (0x4d07, 0x962e), (0x4d08, 0x9811), (0x4d09, 0x66f0),
    (0x4d0a, 0x5f80), (0x4d0b, 0x65fa), (0x4d0c, 0x6789), (0x4d0d, 0x6c6a), (0x4d0e, 0x738b), (0x4d0f, 0x502d),
    (0x4d10, 0x5a03), (0x4d11, 0x6b6a), (0x4d12, 0x77ee), (0x4d13, 0x5916), (0x4d14, 0x5d6c), (0x4d15, 0x5dcd),
    (0x4d16, 0x7325), (0x4d17, 0x754f), (0x4d18, 0xf9ba), (0x4d19, 0xf9bb), (0x4d1a, 0x50e5), (0x4d1b, 0x51f9),
    (0x4d1c, 0x582f), (0x4d1d, 0x592d), (0x4d1e, 0x5996), (0x4d1f, 0x59da), (0x4d20, 0x5be5), (0x4d21, 0xf9bc),
    (0x4d22, 0xf9bd), (0x4d23, 0x5da2), (0x4d24, 0x62d7), (0x4d25, 0x6416), (0x4d26, 0x6493), (0x4d27, 0x64fe),
    (0x4d28, 0xf9be), (0x4d29, 0x66dc), (0x4d2a, 0xf9bf), (0x4d2b, 0x6a48), (0x4d2c, 0xf9c0), (0x4d2d, 0x71ff),
    (0x4d2e, 0x7464), (0x4d2f, 0xf9c1), (0x4d90, 0x7a88), (0x4d91, 0x7aaf), (0x4d92, 0x7e47), (0x4d93, 0x7e5e),
    (0x4d94, 0x8000), (0x4d95, 0x8170), (0x4d96, 0xf9c2), (0x4d97, 0x87ef), (0x4d98, 0x8981), (0x4d99, 0x8b20),
    (0x4d9a, 0x9059), (0x4d9b, 0xf9c3), (0x4d9c, 0x9080), (0x4d9d, 0x9952), (0x4d9e, 0x617e), (0x4d9f, 0x6b32),
    (0x4da0, 0x6d74), (0x4da1, 0x7e1f), (0x4da2, 0x8925), (0x4da3, 0x8fb1), (0x4da4, 0x4fd1), (0x4da5, 0x50ad),
    (0x4da6, 0x5197), (0x4da7, 0x52c7), (0x4da8, 0x57c7), (0x4da9, 0x5889), (0x4daa, 0x5bb9), (0x4dab, 0x5eb8),
    (0x4dac, 0x6142), (0x4dad, 0x6995), (0x4dae, 0x6d8c), (0x4daf, 0x6e67), (0x4db0, 0x6eb6), (0x4db1, 0x7194),
    (0x4db2, 0x7462), (0x4db3, 0x7528), (0x4db4, 0x752c), (0x4db5, 0x8073), (0x4db6, 0x8338), (0x4db7, 0x84c9),
    (0x4db8, 0x8e0a), (0x4db9, 0x9394), (0x4dba, 0x93de), (0x4dbb, 0xf9c4), (0x4dbc, 0x4e8e), (0x4dbd, 0x4f51),
    (0x4dbe, 0x5076), (0x4dbf, 0x512a), (0x4dc0, 0x53c8), (0x4dc1, 0x53cb), (0x4dc2, 0x53f3), (0x4dc3, 0x5b87),
    (0x4dc4, 0x5bd3), (0x4dc5, 0x5c24), (0x4dc6, 0x611a), (0x4dc7, 0x6182), (0x4dc8, 0x65f4), (0x4dc9, 0x725b),
    (0x4dca, 0x7397), (0x4dcb, 0x7440), (0x4dcc, 0x76c2), (0x4dcd, 0x7950), (0x4dce, 0x7991), (0x4dcf, 0x79b9),
    (0x4dd0, 0x7d06), (0x4dd1, 0x7fbd), (0x4dd2, 0x828b), (0x4dd3, 0x85d5), (0x4dd4, 0x865e), (0x4dd5, 0x8fc2),
    (0x4dd6, 0x9047), (0x4dd7, 0x90f5), (0x4dd8, 0x91ea), (0x4dd9, 0x9685), (0x4dda, 0x96e8), (0x4ddb, 0x96e9),
    (0x4ddc, 0x52d6), (0x4ddd, 0x5f67), (0x4dde, 0x65ed), (0x4ddf, 0x6631), (0x4de0, 0x682f), (0x4de1, 0x715c),
    (0x4de2, 0x7a36), (0x4de3, 0x90c1), (0x4de4, 0x980a), (0x4de5, 0x4e91), (0x4de6, 0xf9c5), (0x4de7, 0x6a52),
    (0x4de8, 0x6b9e), (0x4de9, 0x6f90), (0x4dea, 0x7189), (0x4deb, 0x8018), (0x4dec, 0x82b8), (0x4ded, 0x8553),
    (0x4e4e, 0x904b), (0x4e4f, 0x9695), (0x4e50, 0x96f2), (0x4e51, 0x97fb), (0x4e52, 0x851a), (0x4e53, 0x9b31),
    (0x4e54, 0x4e90), (0x4e55, 0x718a), (0x4e56, 0x96c4), (0x4e57, 0x5143), (0x4e58, 0x539f), (0x4e59, 0x54e1),
    (0x4e5a, 0x5713), (0x4e5b, 0x5712), (0x4e5c, 0x57a3), (0x4e5d, 0x5a9b), (0x4e5e, 0x5ac4), (0x4e5f, 0x5bc3),
    (0x4e60, 0x6028), (0x4e61, 0x613f), (0x4e62, 0x63f4), (0x4e63, 0x6c85), (0x4e64, 0x6d39), (0x4e65, 0x6e72),
    (0x4e66, 0x6e90), (0x4e67, 0x7230), (0x4e68, 0x733f), (0x4e69, 0x7457), (0x4e6a, 0x82d1), (0x4e6b, 0x8881),
    (0x4e6c, 0x8f45), (0x4e6d, 0x9060), (0x4e6e, 0xf9c6), (0x4e6f, 0x9662), (0x4e70, 0x9858), (0x4e71, 0x9d1b),
    (0x4e72, 0x6708), (0x4e73, 0x8d8a), (0x4e74, 0x925e), (0x4e75, 0x4f4d), (0x4e76, 0x5049), (0x4e77, 0x50de),
    (0x4e78, 0x5371), (0x4e79, 0x570d), (0x4e7a, 0x59d4), (0x4e7b, 0x5a01), (0x4e7c, 0x5c09), (0x4e7d, 0x6170),
    (0x4e7e, 0x6690), (0x4e7f, 0x6e2d), (0x4e80, 0x7232), (0x4e81, 0x744b), (0x4e82, 0x7def), (0x4e83, 0x80c3),
    (0x4e84, 0x840e), (0x4e85, 0x8466), (0x4e86, 0x853f), (0x4e87, 0x875f), (0x4e88, 0x885b), (0x4e89, 0x8918),
    (0x4e8a, 0x8b02), (0x4e8b, 0x9055), (0x4e8c, 0x97cb), (0x4e8d, 0x9b4f), (0x4e8e, 0x4e73), (0x4e8f, 0x4f91),
    (0x4e90, 0x5112), (0x4e91, 0x516a), (0x4e92, 0xf9c7), (0x4e93, 0x552f), (0x4e94, 0x55a9), (0x4e95, 0x5b7a),
    (0x4e96, 0x5ba5), (0x4e97, 0x5e7c), (0x4e98, 0x5e7d), (0x4e99, 0x5ebe), (0x4e9a, 0x60a0), (0x4e9b, 0x60df),
    (0x4e9c, 0x6108), (0x4e9d, 0x6109), (0x4e9e, 0x63c4), (0x4e9f, 0x6538), (0x4ea0, 0x6709), (0x4ea1, 0xf9c8),
    (0x4ea2, 0x67d4), (0x4ea3, 0x67da), (0x4ea4, 0xf9c9), (0x4ea5, 0x6961), (0x4ea6, 0x6962), (0x4ea7, 0x6cb9),
    (0x4ea8, 0x6d27), (0x4ea9, 0xf9ca), (0x4eaa, 0x6e38), (0x4eab, 0xf9cb), (0x4f0c, 0x6fe1), (0x4f0d, 0x7336),
    (0x4f0e, 0x7337), (0x4f0f, 0xf9cc), (0x4f10, 0x745c), (0x4f11, 0x7531), (0x4f12, 0xf9cd), (0x4f13, 0x7652),
    (0x4f14, 0xf9ce), (0x4f15, 0xf9cf), (0x4f16, 0x7dad), (0x4f17, 0x81fe), (0x4f18, 0x8438), (0x4f19, 0x88d5),
    (0x4f1a, 0x8a98), (0x4f1b, 0x8adb), (0x4f1c, 0x8aed), (0x4f1d, 0x8e30), (0x4f1e, 0x8e42), (0x4f1f, 0x904a),
    (0x4f20, 0x903e), (0x4f21, 0x907a), (0x4f22, 0x9149), (0x4f23, 0x91c9), (0x4f24, 0x936e), (0x4f25, 0xf9d0),
    (0x4f26, 0xf9d1), (0x4f27, 0x5809), (0x4f28, 0xf9d2), (0x4f29, 0x6bd3), (0x4f2a, 0x8089), (0x4f2b, 0x80b2),
    (0x4f2c, 0xf9d3), (0x4f2d, 0xf9d4), (0x4f2e, 0x5141), (0x4f2f, 0x596b), (0x4f30, 0x5c39), (0x4f31, 0xf9d5),
    (0x4f32, 0xf9d6), (0x4f33, 0x6f64), (0x4f34, 0x73a7), (0x4f35, 0x80e4), (0x4f36, 0x8d07), (0x4f37, 0xf9d7),
    (0x4f38, 0x9217), (0x4f39, 0x958f), (0x4f3a, 0xf9d8), (0x4f3b, 0xf9d9), (0x4f3c, 0xf9da), (0x4f3d, 0xf9db),
    (0x4f3e, 0x807f), (0x4f3f, 0x620e), (0x4f40, 0x701c), (0x4f41, 0x7d68), (0x4f42, 0x878d), (0x4f43, 0xf9dc),
    (0x4f44, 0x57a0), (0x4f45, 0x6069), (0x4f46, 0x6147), (0x4f47, 0x6bb7), (0x4f48, 0x8abe), (0x4f49, 0x9280),
    (0x4f4a, 0x96b1), (0x4f4b, 0x4e59), (0x4f4c, 0x541f), (0x4f4d, 0x6deb), (0x4f4e, 0x852d), (0x4f4f, 0x9670),
    (0x4f50, 0x97f3), (0x4f51, 0x98ee), (0x4f52, 0x63d6), (0x4f53, 0x6ce3), (0x4f54, 0x9091), (0x4f55, 0x51dd),
    (0x4f56, 0x61c9), (0x4f57, 0x81ba), (0x4f58, 0x9df9), (0x4f59, 0x4f9d), (0x4f5a, 0x501a), (0x4f5b, 0x5100),
    (0x4f5c, 0x5b9c), (0x4f5d, 0x610f), (0x4f5e, 0x61ff), (0x4f5f, 0x64ec), (0x4f60, 0x6905), (0x4f61, 0x6bc5),
    (0x4f62, 0x7591), (0x4f63, 0x77e3), (0x4f64, 0x7fa9), (0x4f65, 0x8264), (0x4f66, 0x858f), (0x4f67, 0x87fb),
    (0x4f68, 0x8863), (0x4f69, 0x8abc), (0x4fca, 0x8b70), (0x4fcb, 0x91ab), (0x4fcc, 0x4e8c), (0x4fcd, 0x4ee5),
    (0x4fce, 0x4f0a), (0x4fcf, 0xf9dd), (0x4fd0, 0xf9de), (0x4fd1, 0x5937), (0x4fd2, 0x59e8), (0x4fd3, 0xf9df),
    (0x4fd4, 0x5df2), (0x4fd5, 0x5f1b), (0x4fd6, 0x5f5b), (0x4fd7, 0x6021), (0x4fd8, 0xf9e0), (0x4fd9, 0xf9e1),
    (0x4fda, 0xf9e2), (0x4fdb, 0xf9e3), (0x4fdc, 0x723e), (0x4fdd, 0x73e5), (0x4fde, 0xf9e4), (0x4fdf, 0x7570),
    (0x4fe0, 0x75cd), (0x4fe1, 0xf9e5), (0x4fe2, 0x79fb), (0x4fe3, 0xf9e6), (0x4fe4, 0x800c), (0x4fe5, 0x8033),
    (0x4fe6, 0x8084), (0x4fe7, 0x82e1), (0x4fe8, 0x8351), (0x4fe9, 0xf9e7), (0x4fea, 0xf9e8), (0x4feb, 0x8cbd),
    (0x4fec, 0x8cb3), (0x4fed, 0x9087), (0x4fee, 0xf9e9), (0x4fef, 0xf9ea), (0x4ff0, 0x98f4), (0x4ff1, 0x990c),
    (0x4ff2, 0xf9eb), (0x4ff3, 0xf9ec), (0x4ff4, 0x7037), (0x4ff5, 0x76ca), (0x4ff6, 0x7fca), (0x4ff7, 0x7fcc),
    (0x4ff8, 0x7ffc), (0x4ff9, 0x8b1a), (0x4ffa, 0x4eba), (0x4ffb, 0x4ec1), (0x4ffc, 0x5203), (0x4ffd, 0x5370),
    (0x4ffe, 0xf9ed), (0x4fff, 0x54bd), (0x5000, 0x56e0), (0x5001, 0x59fb), (0x5002, 0x5bc5), (0x5003, 0x5f15),
    (0x5004, 0x5fcd), (0x5005, 0x6e6e), (0x5006, 0xf9ee), (0x5007, 0xf9ef), (0x5008, 0x7d6a), (0x5009, 0x8335),
    (0x500a, 0xf9f0), (0x500b, 0x8693), (0x500c, 0x8a8d), (0x500d, 0xf9f1), (0x500e, 0x976d), (0x500f, 0x9777),
    (0x5010, 0xf9f2), (0x5011, 0xf9f3), (0x5012, 0x4e00), (0x5013, 0x4f5a), (0x5014, 0x4f7e), (0x5015, 0x58f9),
    (0x5016, 0x65e5), (0x5017, 0x6ea2), (0x5018, 0x9038), (0x5019, 0x93b0), (0x501a, 0x99b9), (0x501b, 0x4efb),
    (0x501c, 0x58ec), (0x501d, 0x598a), (0x501e, 0x59d9), (0x501f, 0x6041), (0x5020, 0xf9f4), (0x5021, 0xf9f5),
    (0x5022, 0x7a14), (0x5023, 0xf9f6), (0x5024, 0x834f), (0x5025, 0x8cc3), (0x5026, 0x5165), (0x5027, 0x5344),
    (0x5088, 0xf9f7), (0x5089, 0xf9f8), (0x508a, 0xf9f9), (0x508b, 0x4ecd), (0x508c, 0x5269), (0x508d, 0x5b55),
    (0x508e, 0x82bf), (0x508f, 0x4ed4), (0x5090, 0x523a), (0x5091, 0x54a8), (0x5092, 0x59c9), (0x5093, 0x59ff),
    (0x5094, 0x5b50), (0x5095, 0x5b57), (0x5096, 0x5b5c), (0x5097, 0x6063), (0x5098, 0x6148), (0x5099, 0x6ecb),
    (0x509a, 0x7099), (0x509b, 0x716e), (0x509c, 0x7386), (0x509d, 0x74f7), (0x509e, 0x75b5), (0x509f, 0x78c1),
    (0x50a0, 0x7d2b), (0x50a1, 0x8005), (0x50a2, 0x81ea), (0x50a3, 0x8328), (0x50a4, 0x8517), (0x50a5, 0x85c9),
    (0x50a6, 0x8aee), (0x50a7, 0x8cc7), (0x50a8, 0x96cc), (0x50a9, 0x4f5c), (0x50aa, 0x52fa), (0x50ab, 0x56bc),
    (0x50ac, 0x65ab), (0x50ad, 0x6628), (0x50ae, 0x707c), (0x50af, 0x70b8), (0x50b0, 0x7235), (0x50b1, 0x7dbd),
    (0x50b2, 0x828d), (0x50b3, 0x914c), (0x50b4, 0x96c0), (0x50b5, 0x9d72), (0x50b6, 0x5b71), (0x50b7, 0x68e7),
    (0x50b8, 0x6b98), (0x50b9, 0x6f7a), (0x50ba, 0x76de), (0x50bb, 0x5c91), (0x50bc, 0x66ab), (0x50bd, 0x6f5b),
    (0x50be, 0x7bb4), (0x50bf, 0x7c2a), (0x50c0, 0x8836), (0x50c1, 0x96dc), (0x50c2, 0x4e08), (0x50c3, 0x4ed7),
    (0x50c4, 0x5320), (0x50c5, 0x5834), (0x50c6, 0x58bb), (0x50c7, 0x58ef), (0x50c8, 0x596c), (0x50c9, 0x5c07),
    (0x50ca, 0x5e33), (0x50cb, 0x5e84), (0x50cc, 0x5f35), (0x50cd, 0x638c), (0x50ce, 0x66b2), (0x50cf, 0x6756),
    (0x50d0, 0x6a1f), (0x50d1, 0x6aa3), (0x50d2, 0x6b0c), (0x50d3, 0x6f3f), (0x50d4, 0x7246), (0x50d5, 0xf9fa),
    (0x50d6, 0x7350), (0x50d7, 0x748b), (0x50d8, 0x7ae0), (0x50d9, 0x7ca7), (0x50da, 0x8178), (0x50db, 0x81df),
    (0x50dc, 0x81e7), (0x50dd, 0x838a), (0x50de, 0x846c), (0x50df, 0x8523), (0x50e0, 0x8594), (0x50e1, 0x85cf),
    (0x50e2, 0x88dd), (0x50e3, 0x8d13), (0x50e4, 0x91ac), (0x50e5, 0x9577), (0x5146, 0x969c), (0x5147, 0x518d),
    (0x5148, 0x54c9), (0x5149, 0x5728), (0x514a, 0x5bb0), (0x514b, 0x624d), (0x514c, 0x6750), (0x514d, 0x683d),
    (0x514e, 0x6893), (0x514f, 0x6e3d), (0x5150, 0x6ed3), (0x5151, 0x707d), (0x5152, 0x7e21), (0x5153, 0x88c1),
    (0x5154, 0x8ca1), (0x5155, 0x8f09), (0x5156, 0x9f4b), (0x5157, 0x9f4e), (0x5158, 0x722d), (0x5159, 0x7b8f),
    (0x515a, 0x8acd), (0x515b, 0x931a), (0x515c, 0x4f47), (0x515d, 0x4f4e), (0x515e, 0x5132), (0x515f, 0x5480),
    (0x5160, 0x59d0), (0x5161, 0x5e95), (0x5162, 0x62b5), (0x5163, 0x6775), (0x5164, 0x696e), (0x5165, 0x6a17),
    (0x5166, 0x6cae), (0x5167, 0x6e1a), (0x5168, 0x72d9), (0x5169, 0x732a), (0x516a, 0x75bd), (0x516b, 0x7bb8),
    (0x516c, 0x7d35), (0x516d, 0x82e7), (0x516e, 0x83f9), (0x516f, 0x8457), (0x5170, 0x85f7), (0x5171, 0x8a5b),
    (0x5172, 0x8caf), (0x5173, 0x8e87), (0x5174, 0x9019), (0x5175, 0x90b8), (0x5176, 0x96ce), (0x5177, 0x9f5f),
    (0x5178, 0x52e3), (0x5179, 0x540a), (0x517a, 0x5ae1), (0x517b, 0x5bc2), (0x517c, 0x6458), (0x517d, 0x6575),
    (0x517e, 0x6ef4), (0x517f, 0x72c4), (0x5180, 0xf9fb), (0x5181, 0x7684), (0x5182, 0x7a4d), (0x5183, 0x7b1b),
    (0x5184, 0x7c4d), (0x5185, 0x7e3e), (0x5186, 0x7fdf), (0x5187, 0x837b), (0x5188, 0x8b2b), (0x5189, 0x8cca),
    (0x518a, 0x8d64), (0x518b, 0x8de1), (0x518c, 0x8e5f), (0x518d, 0x8fea), (0x518e, 0x8ff9), (0x518f, 0x9069),
    (0x5190, 0x93d1), (0x5191, 0x4f43), (0x5192, 0x4f7a), (0x5193, 0x50b3), (0x5194, 0x5168), (0x5195, 0x5178),
    (0x5196, 0x524d), (0x5197, 0x526a), (0x5198, 0x5861), (0x5199, 0x587c), (0x519a, 0x5960), (0x519b, 0x5c08),
    (0x519c, 0x5c55), (0x519d, 0x5edb), (0x519e, 0x609b), (0x519f, 0x6230), (0x51a0, 0x6813), (0x51a1, 0x6bbf),
    (0x51a2, 0x6c08), (0x51a3, 0x6fb1), (0x5204, 0x714e), (0x5205, 0x7420), (0x5206, 0x7530), (0x5207, 0x7538),
    (0x5208, 0x7551), (0x5209, 0x7672), (0x520a, 0x7b4c), (0x520b, 0x7b8b), (0x520c, 0x7bad), (0x520d, 0x7bc6),
    (0x520e, 0x7e8f), (0x520f, 0x8a6e), (0x5210, 0x8f3e), (0x5211, 0x8f49), (0x5212, 0x923f), (0x5213, 0x9293),
    (0x5214, 0x9322), (0x5215, 0x942b), (0x5216, 0x96fb), (0x5217, 0x985a), (0x5218, 0x986b), (0x5219, 0x991e),
    (0x521a, 0x5207), (0x521b, 0x622a), (0x521c, 0x6298), (0x521d, 0x6d59), (0x521e, 0x7664), (0x521f, 0x7aca),
    (0x5220, 0x7bc0), (0x5221, 0x7d76), (0x5222, 0x5360), (0x5223, 0x5cbe), (0x5224, 0x5e97), (0x5225, 0x6f38),
    (0x5226, 0x70b9), (0x5227, 0x7c98), (0x5228, 0x9711), (0x5229, 0x9b8e), (0x522a, 0x9ede), (0x522b, 0x63a5),
    (0x522c, 0x647a), (0x522d, 0x8776), (0x522e, 0x4e01), (0x522f, 0x4e95), (0x5230, 0x4ead), (0x5231, 0x505c),
    (0x5232, 0x5075), (0x5233, 0x5448), (0x5234, 0x59c3), (0x5235, 0x5b9a), (0x5236, 0x5e40), (0x5237, 0x5ead),
    (0x5238, 0x5ef7), (0x5239, 0x5f81), (0x523a, 0x60c5), (0x523b, 0x633a), (0x523c, 0x653f), (0x523d, 0x6574),
    (0x523e, 0x65cc), (0x523f, 0x6676), (0x5240, 0x6678), (0x5241, 0x67fe), (0x5242, 0x6968), (0x5243, 0x6a89),
    (0x5244, 0x6b63), (0x5245, 0x6c40), (0x5246, 0x6dc0), (0x5247, 0x6de8), (0x5248, 0x6e1f), (0x5249, 0x6e5e),
    (0x524a, 0x701e), (0x524b, 0x70a1), (0x524c, 0x738e), (0x524d, 0x73fd), (0x524e, 0x753a), (0x524f, 0x775b),
    (0x5250, 0x7887), (0x5251, 0x798e), (0x5252, 0x7a0b), (0x5253, 0x7a7d), (0x5254, 0x7cbe), (0x5255, 0x7d8e),
    (0x5256, 0x8247), (0x5257, 0x8a02), (0x5258, 0x8aea), (0x5259, 0x8c9e), (0x525a, 0x912d), (0x525b, 0x914a),
    (0x525c, 0x91d8), (0x525d, 0x9266), (0x525e, 0x92cc), (0x525f, 0x9320), (0x5260, 0x9706), (0x5261, 0x9756),
    (0x52c2, 0x975c), (0x52c3, 0x9802), (0x52c4, 0x9f0e), (0x52c5, 0x5236), (0x52c6, 0x5291), (0x52c7, 0x557c),
    (0x52c8, 0x5824), (0x52c9, 0x5e1d), (0x52ca, 0x5f1f), (0x52cb, 0x608c), (0x52cc, 0x63d0), (0x52cd, 0x68af),
    (0x52ce, 0x6fdf), (0x52cf, 0x796d), (0x52d0, 0x7b2c), (0x52d1, 0x81cd), (0x52d2, 0x85ba), (0x52d3, 0x88fd),
    (0x52d4, 0x8af8), (0x52d5, 0x8e44), (0x52d6, 0x918d), (0x52d7, 0x9664), (0x52d8, 0x969b), (0x52d9, 0x973d),
    (0x52da, 0x984c), (0x52db, 0x9f4a), (0x52dc, 0x4fce), (0x52dd, 0x5146), (0x52de, 0x51cb), (0x52df, 0x52a9),
    (0x52e0, 0x5632), (0x52e1, 0x5f14), (0x52e2, 0x5f6b), (0x52e3, 0x63aa), (0x52e4, 0x64cd), (0x52e5, 0x65e9),
    (0x52e6, 0x6641), (0x52e7, 0x66fa), (0x52e8, 0x66f9), (0x52e9, 0x671d), (0x52ea, 0x689d), (0x52eb, 0x68d7),
    (0x52ec, 0x69fd), (0x52ed, 0x6f15), (0x52ee, 0x6f6e), (0x52ef, 0x7167), (0x52f0, 0x71e5), (0x52f1, 0x722a),
    (0x52f2, 0x74aa), (0x52f3, 0x773a), (0x52f4, 0x7956), (0x52f5, 0x795a), (0x52f6, 0x79df), (0x52f7, 0x7a20),
    (0x52f8, 0x7a95), (0x52f9, 0x7c97), (0x52fa, 0x7cdf), (0x52fb, 0x7d44), (0x52fc, 0x7e70), (0x52fd, 0x8087),
    (0x52fe, 0x85fb), (0x52ff, 0x86a4), (0x5300, 0x8a54), (0x5301, 0x8abf), (0x5302, 0x8d99), (0x5303, 0x8e81),
    (0x5304, 0x9020), (0x5305, 0x906d), (0x5306, 0x91e3), (0x5307, 0x963b), (0x5308, 0x96d5), (0x5309, 0x9ce5),
    (0x530a, 0x65cf), (0x530b, 0x7c07), (0x530c, 0x8db3), (0x530d, 0x93c3), (0x530e, 0x5b58), (0x530f, 0x5c0a),
    (0x5310, 0x5352), (0x5311, 0x62d9), (0x5312, 0x731d), (0x5313, 0x5027), (0x5314, 0x5b97), (0x5315, 0x5f9e),
    (0x5316, 0x60b0), (0x5317, 0x616b), (0x5318, 0x68d5), (0x5319, 0x6dd9), (0x531a, 0x742e), (0x531b, 0x7a2e),
    (0x531c, 0x7d42), (0x531d, 0x7d9c), (0x531e, 0x7e31), (0x531f, 0x816b), (0x5380, 0x8e2a), (0x5381, 0x8e35),
    (0x5382, 0x937e), (0x5383, 0x9418), (0x5384, 0x4f50), (0x5385, 0x5750), (0x5386, 0x5de6), (0x5387, 0x5ea7),
    (0x5388, 0x632b), (0x5389, 0x7f6a), (0x538a, 0x4e3b), (0x538b, 0x4f4f), (0x538c, 0x4f8f), (0x538d, 0x505a),
    (0x538e, 0x59dd), (0x538f, 0x80c4), (0x5390, 0x546a), (0x5391, 0x5468), (0x5392, 0x55fe), (0x5393, 0x594f),
    (0x5394, 0x5b99), (0x5395, 0x5dde), (0x5396, 0x5eda), (0x5397, 0x665d), (0x5398, 0x6731), (0x5399, 0x67f1),
    (0x539a, 0x682a), (0x539b, 0x6ce8), (0x539c, 0x6d32), (0x539d, 0x6e4a), (0x539e, 0x6f8d), (0x539f, 0x70b7),
    (0x53a0, 0x73e0), (0x53a1, 0x7587), (0x53a2, 0x7c4c), (0x53a3, 0x7d02), (0x53a4, 0x7d2c), (0x53a5, 0x7da2),
    (0x53a6, 0x821f), (0x53a7, 0x86db), (0x53a8, 0x8a3b), (0x53a9, 0x8a85), (0x53aa, 0x8d70), (0x53ab, 0x8e8a),
    (0x53ac, 0x8f33), (0x53ad, 0x9031), (0x53ae, 0x914e), (0x53af, 0x9152), (0x53b0, 0x9444), (0x53b1, 0x99d0),
    (0x53b2, 0x7af9), (0x53b3, 0x7ca5), (0x53b4, 0x4fca), (0x53b5, 0x5101), (0x53b6, 0x51c6), (0x53b7, 0x57c8),
    (0x53b8, 0x5bef), (0x53b9, 0x5cfb), (0x53ba, 0x6659), (0x53bb, 0x6a3d), (0x53bc, 0x6d5a), (0x53bd, 0x6e96),
    (0x53be, 0x6fec), (0x53bf, 0x710c), (0x53c0, 0x756f), (0x53c1, 0x7ae3), (0x53c2, 0x8822), (0x53c3, 0x9021),
    (0x53c4, 0x9075), (0x53c5, 0x96cb), (0x53c6, 0x99ff), (0x53c7, 0x8301), (0x53c8, 0x4e2d), (0x53c9, 0x4ef2),
    (0x53ca, 0x8846), (0x53cb, 0x91cd), (0x53cc, 0x537d), (0x53cd, 0x6adb), (0x53ce, 0x696b), (0x53cf, 0x6c41),
    (0x53d0, 0x847a), (0x53d1, 0x589e), (0x53d2, 0x618e), (0x53d3, 0x66fe), (0x53d4, 0x62ef), (0x53d5, 0x70dd),
    (0x53d6, 0x7511), (0x53d7, 0x75c7), (0x53d8, 0x7e52), (0x53d9, 0x84b8), (0x53da, 0x8b49), (0x53db, 0x8d08),
    (0x53dc, 0x4e4b), (0x53dd, 0x53ea), (0x543e, 0x54ab), (0x543f, 0x5730), (0x5440, 0x5740), (0x5441, 0x5fd7),
    (0x5442, 0x6301), (0x5443, 0x6307), (0x5444, 0x646f), (0x5445, 0x652f), (0x5446, 0x65e8), (0x5447, 0x667a),
    (0x5448, 0x679d), (0x5449, 0x67b3), (0x544a, 0x6b62), (0x544b, 0x6c60), (0x544c, 0x6c9a), (0x544d, 0x6f2c),
    (0x544e, 0x77e5), (0x544f, 0x7825), (0x5450, 0x7949), (0x5451, 0x7957), (0x5452, 0x7d19), (0x5453, 0x80a2),
    (0x5454, 0x8102), (0x5455, 0x81f3), (0x5456, 0x829d), (0x5457, 0x82b7), (0x5458, 0x8718), (0x5459, 0x8a8c),
    (0x545a, 0xf9fc), (0x545b, 0x8d04), (0x545c, 0x8dbe), (0x545d, 0x9072), (0x545e, 0x76f4), (0x545f, 0x7a19),
    (0x5460, 0x7a37), (0x5461, 0x7e54), (0x5462, 0x8077), (0x5463, 0x5507), (0x5464, 0x55d4), (0x5465, 0x5875),
    (0x5466, 0x632f), (0x5467, 0x6422), (0x5468, 0x6649), (0x5469, 0x664b), (0x546a, 0x686d), (0x546b, 0x699b),
    (0x546c, 0x6b84), (0x546d, 0x6d25), (0x546e, 0x6eb1), (0x546f, 0x73cd), (0x5470, 0x7468), (0x5471, 0x74a1),
    (0x5472, 0x755b), (0x5473, 0x75b9), (0x5474, 0x76e1), (0x5475, 0x771e), (0x5476, 0x778b), (0x5477, 0x79e6),
    (0x5478, 0x7e09), (0x5479, 0x7e1d), (0x547a, 0x81fb), (0x547b, 0x852f), (0x547c, 0x8897), (0x547d, 0x8a3a),
    (0x547e, 0x8cd1), (0x547f, 0x8eeb), (0x5480, 0x8fb0), (0x5481, 0x9032), (0x5482, 0x93ad), (0x5483, 0x9663),
    (0x5484, 0x9673), (0x5485, 0x9707), (0x5486, 0x4f84), (0x5487, 0x53f1), (0x5488, 0x59ea), (0x5489, 0x5ac9),
    (0x548a, 0x5e19), (0x548b, 0x684e), (0x548c, 0x74c6), (0x548d, 0x75be), (0x548e, 0x79e9), (0x548f, 0x7a92),
    (0x5490, 0x81a3), (0x5491, 0x86ed), (0x5492, 0x8cea), (0x5493, 0x8dcc), (0x5494, 0x8fed), (0x5495, 0x659f),
    (0x5496, 0x6715), (0x5497, 0xf9fd), (0x5498, 0x57f7), (0x5499, 0x6f57), (0x549a, 0x7ddd), (0x549b, 0x8f2f),
    (0x54fc, 0x93f6), (0x54fd, 0x96c6), (0x54fe, 0x5fb5), (0x54ff, 0x61f2), (0x5500, 0x6f84), (0x5501, 0x4e14),
    (0x5502, 0x4f98), (0x5503, 0x501f), (0x5504, 0x53c9), (0x5505, 0x55df), (0x5506, 0x5d6f), (0x5507, 0x5dee),
    (0x5508, 0x6b21), (0x5509, 0x6b64), (0x550a, 0x78cb), (0x550b, 0x7b9a), (0x550c, 0xf9fe), (0x550d, 0x8e49),
    (0x550e, 0x8eca), (0x550f, 0x906e), (0x5510, 0x6349), (0x5511, 0x643e), (0x5512, 0x7740), (0x5513, 0x7a84),
    (0x5514, 0x932f), (0x5515, 0x947f), (0x5516, 0x9f6a), (0x5517, 0x64b0), (0x5518, 0x6faf), (0x5519, 0x71e6),
    (0x551a, 0x74a8), (0x551b, 0x74da), (0x551c, 0x7ac4), (0x551d, 0x7c12), (0x551e, 0x7e82), (0x551f, 0x7cb2),
    (0x5520, 0x7e98), (0x5521, 0x8b9a), (0x5522, 0x8d0a), (0x5523, 0x947d), (0x5524, 0x9910), (0x5525, 0x994c),
    (0x5526, 0x5239), (0x5527, 0x5bdf), (0x5528, 0x64e6), (0x5529, 0x672d), (0x552a, 0x7d2e), (0x552b, 0x50ed),
    (0x552c, 0x53c3), (0x552d, 0x5879), (0x552e, 0x6158), (0x552f, 0x6159), (0x5530, 0x61fa), (0x5531, 0x65ac),
    (0x5532, 0x7ad9), (0x5533, 0x8b92), (0x5534, 0x8b96), (0x5535, 0x5009), (0x5536, 0x5021), (0x5537, 0x5275),
    (0x5538, 0x5531), (0x5539, 0x5a3c), (0x553a, 0x5ee0), (0x553b, 0x5f70), (0x553c, 0x6134), (0x553d, 0x655e),
    (0x553e, 0x660c), (0x553f, 0x6636), (0x5540, 0x66a2), (0x5541, 0x69cd), (0x5542, 0x6ec4), (0x5543, 0x6f32),
    (0x5544, 0x7316), (0x5545, 0x7621), (0x5546, 0x7a93), (0x5547, 0x8139), (0x5548, 0x8259), (0x5549, 0x83d6),
    (0x554a, 0x84bc), (0x554b, 0x50b5), (0x554c, 0x57f0), (0x554d, 0x5bc0), (0x554e, 0x5be8), (0x554f, 0x5f69),
    (0x5550, 0x63a1), (0x5551, 0x7826), (0x5552, 0x7db5), (0x5553, 0x83dc), (0x5554, 0x8521), (0x5555, 0x91c7),
    (0x5556, 0x91f5), (0x5557, 0x518a), (0x5558, 0x67f5), (0x5559, 0x7b56), (0x55ba, 0x8cac), (0x55bb, 0x51c4),
    (0x55bc, 0x59bb), (0x55bd, 0x60bd), (0x55be, 0x8655), (0x55bf, 0x501c), (0x55c0, 0xf9ff), (0x55c1, 0x5254),
    (0x55c2, 0x5c3a), (0x55c3, 0x617d), (0x55c4, 0x621a), (0x55c5, 0x62d3), (0x55c6, 0x64f2), (0x55c7, 0x65a5),
    (0x55c8, 0x6ecc), (0x55c9, 0x7620), (0x55ca, 0x810a), (0x55cb, 0x8e60), (0x55cc, 0x965f), (0x55cd, 0x96bb),
    (0x55ce, 0x4edf), (0x55cf, 0x5343), (0x55d0, 0x5598), (0x55d1, 0x5929), (0x55d2, 0x5ddd), (0x55d3, 0x64c5),
    (0x55d4, 0x6cc9), (0x55d5, 0x6dfa), (0x55d6, 0x7394), (0x55d7, 0x7a7f), (0x55d8, 0x821b), (0x55d9, 0x85a6),
    (0x55da, 0x8ce4), (0x55db, 0x8e10), (0x55dc, 0x9077), (0x55dd, 0x91e7), (0x55de, 0x95e1), (0x55df, 0x9621),
    (0x55e0, 0x97c6), (0x55e1, 0x51f8), (0x55e2, 0x54f2), (0x55e3, 0x5586), (0x55e4, 0x5fb9), (0x55e5, 0x64a4),
    (0x55e6, 0x6f88), (0x55e7, 0x7db4), (0x55e8, 0x8f1f), (0x55e9, 0x8f4d), (0x55ea, 0x9435), (0x55eb, 0x50c9),
    (0x55ec, 0x5c16), (0x55ed, 0x6cbe), (0x55ee, 0x6dfb), (0x55ef, 0x751b), (0x55f0, 0x77bb), (0x55f1, 0x7c3d),
    (0x55f2, 0x7c64), (0x55f3, 0x8a79), (0x55f4, 0x8ac2), (0x55f5, 0x581e), (0x55f6, 0x59be), (0x55f7, 0x5e16),
    (0x55f8, 0x6377), (0x55f9, 0x7252), (0x55fa, 0x758a), (0x55fb, 0x776b), (0x55fc, 0x8adc), (0x55fd, 0x8cbc),
    (0x55fe, 0x8f12), (0x55ff, 0x5ef3), (0x5600, 0x6674), (0x5601, 0x6df8), (0x5602, 0x807d), (0x5603, 0x83c1),
    (0x5604, 0x8acb), (0x5605, 0x9751), (0x5606, 0x9bd6), (0x5607, 0xfa00), (0x5608, 0x5243), (0x5609, 0x66ff),
    (0x560a, 0x6d95), (0x560b, 0x6eef), (0x560c, 0x7de0), (0x560d, 0x8ae6), (0x560e, 0x902e), (0x560f, 0x905e),
    (0x5610, 0x9ad4), (0x5611, 0x521d), (0x5612, 0x527f), (0x5613, 0x54e8), (0x5614, 0x6194), (0x5615, 0x6284),
    (0x5616, 0x62db), (0x5617, 0x68a2), (0x5678, 0x6912), (0x5679, 0x695a), (0x567a, 0x6a35), (0x567b, 0x7092),
    (0x567c, 0x7126), (0x567d, 0x785d), (0x567e, 0x7901), (0x567f, 0x790e), (0x5680, 0x79d2), (0x5681, 0x7a0d),
    (0x5682, 0x8096), (0x5683, 0x8278), (0x5684, 0x82d5), (0x5685, 0x8349), (0x5686, 0x8549), (0x5687, 0x8c82),
    (0x5688, 0x8d85), (0x5689, 0x9162), (0x568a, 0x918b), (0x568b, 0x91ae), (0x568c, 0x4fc3), (0x568d, 0x56d1),
    (0x568e, 0x71ed), (0x568f, 0x77d7), (0x5690, 0x8700), (0x5691, 0x89f8), (0x5692, 0x5bf8), (0x5693, 0x5fd6),
    (0x5694, 0x6751), (0x5695, 0x90a8), (0x5696, 0x53e2), (0x5697, 0x585a), (0x5698, 0x5bf5), (0x5699, 0x60a4),
    (0x569a, 0x6181), (0x569b, 0x6460), (0x569c, 0x7e3d), (0x569d, 0x8070), (0x569e, 0x8525), (0x569f, 0x9283),
    (0x56a0, 0x64ae), (0x56a1, 0x50ac), (0x56a2, 0x5d14), (0x56a3, 0x6700), (0x56a4, 0x589c), (0x56a5, 0x62bd),
    (0x56a6, 0x63a8), (0x56a7, 0x690e), (0x56a8, 0x6978), (0x56a9, 0x6a1e), (0x56aa, 0x6e6b), (0x56ab, 0x76ba),
    (0x56ac, 0x79cb), (0x56ad, 0x82bb), (0x56ae, 0x8429), (0x56af, 0x8acf), (0x56b0, 0x8da8), (0x56b1, 0x8ffd),
    (0x56b2, 0x9112), (0x56b3, 0x914b), (0x56b4, 0x919c), (0x56b5, 0x9310), (0x56b6, 0x9318), (0x56b7, 0x939a),
    (0x56b8, 0x96db), (0x56b9, 0x9a36), (0x56ba, 0x9c0d), (0x56bb, 0x4e11), (0x56bc, 0x755c), (0x56bd, 0x795d),
    (0x56be, 0x7afa), (0x56bf, 0x7b51), (0x56c0, 0x7bc9), (0x56c1, 0x7e2e), (0x56c2, 0x84c4), (0x56c3, 0x8e59),
    (0x56c4, 0x8e74), (0x56c5, 0x8ef8), (0x56c6, 0x9010), (0x56c7, 0x6625), (0x56c8, 0x693f), (0x56c9, 0x7443),
    (0x56ca, 0x51fa), (0x56cb, 0x672e), (0x56cc, 0x9edc), (0x56cd, 0x5145), (0x56ce, 0x5fe0), (0x56cf, 0x6c96),
    (0x56d0, 0x87f2), (0x56d1, 0x885d), (0x56d2, 0x8877), (0x56d3, 0x60b4), (0x56d4, 0x81b5), (0x56d5, 0x8403),
    (0x5736, 0x8d05), (0x5737, 0x53d6), (0x5738, 0x5439), (0x5739, 0x5634), (0x573a, 0x5a36), (0x573b, 0x5c31),
    (0x573c, 0x708a), (0x573d, 0x7fe0), (0x573e, 0x805a), (0x573f, 0x8106), (0x5740, 0x81ed), (0x5741, 0x8da3),
    (0x5742, 0x9189), (0x5743, 0x9a5f), (0x5744, 0x9df2), (0x5745, 0x5074), (0x5746, 0x4ec4), (0x5747, 0x53a0),
    (0x5748, 0x60fb), (0x5749, 0x6e2c), (0x574a, 0x5c64), (0x574b, 0x4f88), (0x574c, 0x5024), (0x574d, 0x55e4),
    (0x574e, 0x5cd9), (0x574f, 0x5e5f), (0x5750, 0x6065), (0x5751, 0x6894), (0x5752, 0x6cbb), (0x5753, 0x6dc4),
    (0x5754, 0x71be), (0x5755, 0x75d4), (0x5756, 0x75f4), (0x5757, 0x7661), (0x5758, 0x7a1a), (0x5759, 0x7a49),
    (0x575a, 0x7dc7), (0x575b, 0x7dfb), (0x575c, 0x7f6e), (0x575d, 0x81f4), (0x575e, 0x86a9), (0x575f, 0x8f1c),
    (0x5760, 0x96c9), (0x5761, 0x99b3), (0x5762, 0x9f52), (0x5763, 0x5247), (0x5764, 0x52c5), (0x5765, 0x98ed),
    (0x5766, 0x89aa), (0x5767, 0x4e03), (0x5768, 0x67d2), (0x5769, 0x6f06), (0x576a, 0x4fb5), (0x576b, 0x5be2),
    (0x576c, 0x6795), (0x576d, 0x6c88), (0x576e, 0x6d78), (0x576f, 0x741b), (0x5770, 0x7827), (0x5771, 0x91dd),
    (0x5772, 0x937c), (0x5773, 0x87c4), (0x5774, 0x79e4), (0x5775, 0x7a31), (0x5776, 0x5feb), (0x5777, 0x4ed6),
    (0x5778, 0x54a4), (0x5779, 0x553e), (0x577a, 0x58ae), (0x577b, 0x59a5), (0x577c, 0x60f0), (0x577d, 0x6253),
    (0x577e, 0x62d6), (0x577f, 0x6736), (0x5780, 0x6955), (0x5781, 0x8235), (0x5782, 0x9640), (0x5783, 0x99b1),
    (0x5784, 0x99dd), (0x5785, 0x502c), (0x5786, 0x5353), (0x5787, 0x5544), (0x5788, 0x577c), (0x5789, 0xfa01),
    (0x578a, 0x6258), (0x578b, 0xfa02), (0x578c, 0x64e2), (0x578d, 0x666b), (0x578e, 0x67dd), (0x578f, 0x6fc1),
    (0x5790, 0x6fef), (0x5791, 0x7422), (0x5792, 0x7438), (0x5793, 0x8a17), (0x57f4, 0x9438), (0x57f5, 0x5451),
    (0x57f6, 0x5606), (0x57f7, 0x5766), (0x57f8, 0x5f48), (0x57f9, 0x619a), (0x57fa, 0x6b4e), (0x57fb, 0x7058),
    (0x57fc, 0x70ad), (0x57fd, 0x7dbb), (0x57fe, 0x8a95), (0x57ff, 0x596a), (0x5800, 0x812b), (0x5801, 0x63a2),
    (0x5802, 0x7708), (0x5803, 0x803d), (0x5804, 0x8caa), (0x5805, 0x5854), (0x5806, 0x642d), (0x5807, 0x69bb),
    (0x5808, 0x5b95), (0x5809, 0x5e11), (0x580a, 0x6e6f), (0x580b, 0xfa03), (0x580c, 0x8569), (0x580d, 0x514c),
    (0x580e, 0x53f0), (0x580f, 0x592a), (0x5810, 0x6020), (0x5811, 0x614b), (0x5812, 0x6b86), (0x5813, 0x6c70),
    (0x5814, 0x6cf0), (0x5815, 0x7b1e), (0x5816, 0x80ce), (0x5817, 0x82d4), (0x5818, 0x8dc6), (0x5819, 0x90b0),
    (0x581a, 0x98b1), (0x581b, 0xfa04), (0x581c, 0x64c7), (0x581d, 0x6fa4), (0x581e, 0x6491), (0x581f, 0x6504),
    (0x5820, 0x514e), (0x5821, 0x5410), (0x5822, 0x571f), (0x5823, 0x8a0e), (0x5824, 0x615f), (0x5825, 0x6876),
    (0x5826, 0xfa05), (0x5827, 0x75db), (0x5828, 0x7b52), (0x5829, 0x7d71), (0x582a, 0x901a), (0x582b, 0x5806),
    (0x582c, 0x69cc), (0x582d, 0x817f), (0x582e, 0x892a), (0x582f, 0x9000), (0x5830, 0x9839), (0x5831, 0x5078),
    (0x5832, 0x5957), (0x5833, 0x59ac), (0x5834, 0x6295), (0x5835, 0x900f), (0x5836, 0x9b2a), (0x5837, 0x615d),
    (0x5838, 0x7279), (0x5839, 0x95d6), (0x583a, 0x5761), (0x583b, 0x5a46), (0x583c, 0x5df4), (0x583d, 0x628a),
    (0x583e, 0x64ad), (0x583f, 0x64fa), (0x5840, 0x6777), (0x5841, 0x6ce2), (0x5842, 0x6d3e), (0x5843, 0x722c),
    (0x5844, 0x7436), (0x5845, 0x7834), (0x5846, 0x7f77), (0x5847, 0x82ad), (0x5848, 0x8ddb), (0x5849, 0x9817),
    (0x584a, 0x5224), (0x584b, 0x5742), (0x584c, 0x677f), (0x584d, 0x7248), (0x584e, 0x74e3), (0x584f, 0x8ca9),
    (0x5850, 0x8fa6), (0x5851, 0x9211), (0x58b2, 0x962a), (0x58b3, 0x516b), (0x58b4, 0x53ed), (0x58b5, 0x634c),
    (0x58b6, 0x4f69), (0x58b7, 0x5504), (0x58b8, 0x6096), (0x58b9, 0x6557), (0x58ba, 0x6c9b), (0x58bb, 0x6d7f),
    (0x58bc, 0x724c), (0x58bd, 0x72fd), (0x58be, 0x7a17), (0x58bf, 0x8987), (0x58c0, 0x8c9d), (0x58c1, 0x5f6d),
    (0x58c2, 0x6f8e), (0x58c3, 0x70f9), (0x58c4, 0x81a8), (0x58c5, 0x610e), (0x58c6, 0x4fbf), (0x58c7, 0x504f),
    (0x58c8, 0x6241), (0x58c9, 0x7247), (0x58ca, 0x7bc7), (0x58cb, 0x7de8), (0x58cc, 0x7fe9), (0x58cd, 0x904d),
    (0x58ce, 0x97ad), (0x58cf, 0x9a19), (0x58d0, 0x8cb6), (0x58d1, 0x576a), (0x58d2, 0x5e73), (0x58d3, 0x67b0),
    (0x58d4, 0x840d), (0x58d5, 0x8a55), (0x58d6, 0x5420), (0x58d7, 0x5b16), (0x58d8, 0x5e63), (0x58d9, 0x5ee2),
    (0x58da, 0x5f0a), (0x58db, 0x6583), (0x58dc, 0x80ba), (0x58dd, 0x853d), (0x58de, 0x9589), (0x58df, 0x965b),
    (0x58e0, 0x4f48), (0x58e1, 0x5305), (0x58e2, 0x530d), (0x58e3, 0x530f), (0x58e4, 0x5486), (0x58e5, 0x54fa),
    (0x58e6, 0x5703), (0x58e7, 0x5e03), (0x58e8, 0x6016), (0x58e9, 0x629b), (0x58ea, 0x62b1), (0x58eb, 0x6355),
    (0x58ec, 0xfa06), (0x58ed, 0x6ce1), (0x58ee, 0x6d66), (0x58ef, 0x75b1), (0x58f0, 0x7832), (0x58f1, 0x80de),
    (0x58f2, 0x812f), (0x58f3, 0x82de), (0x58f4, 0x8461), (0x58f5, 0x84b2), (0x58f6, 0x888d), (0x58f7, 0x8912),
    (0x58f8, 0x900b), (0x58f9, 0x92ea), (0x58fa, 0x98fd), (0x58fb, 0x9b91), (0x58fc, 0x5e45), (0x58fd, 0x66b4),
    (0x58fe, 0x66dd), (0x58ff, 0x7011), (0x5900, 0x7206), (0x5901, 0xfa07), (0x5902, 0x4ff5), (0x5903, 0x527d),
    (0x5904, 0x5f6a), (0x5905, 0x6153), (0x5906, 0x6753), (0x5907, 0x6a19), (0x5908, 0x6f02), (0x5909, 0x74e2),
    (0x590a, 0x7968), (0x590b, 0x8868), (0x590c, 0x8c79), (0x590d, 0x98c7), (0x590e, 0x98c4), (0x590f, 0x9a43),
    (0x5970, 0x54c1), (0x5971, 0x7a1f), (0x5972, 0x6953), (0x5973, 0x8af7), (0x5974, 0x8c4a), (0x5975, 0x98a8),
    (0x5976, 0x99ae), (0x5977, 0x5f7c), (0x5978, 0x62ab), (0x5979, 0x75b2), (0x597a, 0x76ae), (0x597b, 0x88ab),
    (0x597c, 0x907f), (0x597d, 0x9642), (0x597e, 0x5339), (0x597f, 0x5f3c), (0x5980, 0x5fc5), (0x5981, 0x6ccc),
    (0x5982, 0x73cc), (0x5983, 0x7562), (0x5984, 0x758b), (0x5985, 0x7b46), (0x5986, 0x82fe), (0x5987, 0x999d),
    (0x5988, 0x4e4f), (0x5989, 0x903c), (0x598a, 0x4e0b), (0x598b, 0x4f55), (0x598c, 0x53a6), (0x598d, 0x590f),
    (0x598e, 0x5ec8), (0x598f, 0x6630), (0x5990, 0x6cb3), (0x5991, 0x7455), (0x5992, 0x8377), (0x5993, 0x8766),
    (0x5994, 0x8cc0), (0x5995, 0x9050), (0x5996, 0x971e), (0x5997, 0x9c15), (0x5998, 0x58d1), (0x5999, 0x5b78),
    (0x599a, 0x8650), (0x599b, 0x8b14), (0x599c, 0x9db4), (0x599d, 0x5bd2), (0x599e, 0x6068), (0x599f, 0x608d),
    (0x59a0, 0x65f1), (0x59a1, 0x6c57), (0x59a2, 0x6f22), (0x59a3, 0x6fa3), (0x59a4, 0x701a), (0x59a5, 0x7f55),
    (0x59a6, 0x7ff0), (0x59a7, 0x9591), (0x59a8, 0x9592), (0x59a9, 0x9650), (0x59aa, 0x97d3), (0x59ab, 0x5272),
    (0x59ac, 0x8f44), (0x59ad, 0x51fd), (0x59ae, 0x542b), (0x59af, 0x54b8), (0x59b0, 0x5563), (0x59b1, 0x558a),
    (0x59b2, 0x6abb), (0x59b3, 0x6db5), (0x59b4, 0x7dd8), (0x59b5, 0x8266), (0x59b6, 0x929c), (0x59b7, 0x9677),
    (0x59b8, 0x9e79), (0x59b9, 0x5408), (0x59ba, 0x54c8), (0x59bb, 0x76d2), (0x59bc, 0x86e4), (0x59bd, 0x95a4),
    (0x59be, 0x95d4), (0x59bf, 0x965c), (0x59c0, 0x4ea2), (0x59c1, 0x4f09), (0x59c2, 0x59ee), (0x59c3, 0x5ae6),
    (0x59c4, 0x5df7), (0x59c5, 0x6052), (0x59c6, 0x6297), (0x59c7, 0x676d), (0x59c8, 0x6841), (0x59c9, 0x6c86),
    (0x59ca, 0x6e2f), (0x59cb, 0x7f38), (0x59cc, 0x809b), (0x59cd, 0x822a), (0x5a2e, 0xfa08), (0x5a2f, 0xfa09),
    (0x5a30, 0x9805), (0x5a31, 0x4ea5), (0x5a32, 0x5055), (0x5a33, 0x54b3), (0x5a34, 0x5793), (0x5a35, 0x595a),
    (0x5a36, 0x5b69), (0x5a37, 0x5bb3), (0x5a38, 0x61c8), (0x5a39, 0x6977), (0x5a3a, 0x6d77), (0x5a3b, 0x7023),
    (0x5a3c, 0x87f9), (0x5a3d, 0x89e3), (0x5a3e, 0x8a72), (0x5a3f, 0x8ae7), (0x5a40, 0x9082), (0x5a41, 0x99ed),
    (0x5a42, 0x9ab8), (0x5a43, 0x52be), (0x5a44, 0x6838), (0x5a45, 0x5016), (0x5a46, 0x5e78), (0x5a47, 0x674f),
    (0x5a48, 0x8347), (0x5a49, 0x884c), (0x5a4a, 0x4eab), (0x5a4b, 0x5411), (0x5a4c, 0x56ae), (0x5a4d, 0x73e6),
    (0x5a4e, 0x9115), (0x5a4f, 0x97ff), (0x5a50, 0x9909), (0x5a51, 0x9957), (0x5a52, 0x9999), (0x5a53, 0x5653),
    (0x5a54, 0x589f), (0x5a55, 0x865b), (0x5a56, 0x8a31), (0x5a57, 0x61b2), (0x5a58, 0x6af6), (0x5a59, 0x737b),
    (0x5a5a, 0x8ed2), (0x5a5b, 0x6b47), (0x5a5c, 0x96aa), (0x5a5d, 0x9a57), (0x5a5e, 0x5955), (0x5a5f, 0x7200),
    (0x5a60, 0x8d6b), (0x5a61, 0x9769), (0x5a62, 0x4fd4), (0x5a63, 0x5cf4), (0x5a64, 0x5f26), (0x5a65, 0x61f8),
    (0x5a66, 0x665b), (0x5a67, 0x6ceb), (0x5a68, 0x70ab), (0x5a69, 0x7384), (0x5a6a, 0x73b9), (0x5a6b, 0x73fe),
    (0x5a6c, 0x7729), (0x5a6d, 0x774d), (0x5a6e, 0x7d43), (0x5a6f, 0x7d62), (0x5a70, 0x7e23), (0x5a71, 0x8237),
    (0x5a72, 0x8852), (0x5a73, 0xfa0a), (0x5a74, 0x8ce2), (0x5a75, 0x9249), (0x5a76, 0x986f), (0x5a77, 0x5b51),
    (0x5a78, 0x7a74), (0x5a79, 0x8840), (0x5a7a, 0x9801), (0x5a7b, 0x5acc), (0x5a7c, 0x4fe0), (0x5a7d, 0x5354),
    (0x5a7e, 0x593e), (0x5a7f, 0x5cfd), (0x5a80, 0x633e), (0x5a81, 0x6d79), (0x5a82, 0x72f9), (0x5a83, 0x8105),
    (0x5a84, 0x8107), (0x5a85, 0x83a2), (0x5a86, 0x92cf), (0x5a87, 0x9830), (0x5a88, 0x4ea8), (0x5a89, 0x5144),
    (0x5a8a, 0x5211), (0x5a8b, 0x578b), (0x5aec, 0x5f62), (0x5aed, 0x6cc2), (0x5aee, 0x6ece), (0x5aef, 0x7005),
    (0x5af0, 0x7050), (0x5af1, 0x70af), (0x5af2, 0x7192), (0x5af3, 0x73e9), (0x5af4, 0x7469), (0x5af5, 0x834a),
    (0x5af6, 0x87a2), (0x5af7, 0x8861), (0x5af8, 0x9008), (0x5af9, 0x90a2), (0x5afa, 0x93a3), (0x5afb, 0x99a8),
    (0x5afc, 0x516e), (0x5afd, 0x5f57), (0x5afe, 0x60e0), (0x5aff, 0x6167), (0x5b00, 0x66b3), (0x5b01, 0x8559),
    (0x5b02, 0x8e4a), (0x5b03, 0x91af), (0x5b04, 0x978b), (0x5b05, 0x4e4e), (0x5b06, 0x4e92), (0x5b07, 0x547c),
    (0x5b08, 0x58d5), (0x5b09, 0x58fa), (0x5b0a, 0x597d), (0x5b0b, 0x5cb5), (0x5b0c, 0x5f27), (0x5b0d, 0x6236),
    (0x5b0e, 0x6248), (0x5b0f, 0x660a), (0x5b10, 0x6667), (0x5b11, 0x6beb), (0x5b12, 0x6d69), (0x5b13, 0x6dcf),
    (0x5b14, 0x6e56), (0x5b15, 0x6ef8), (0x5b16, 0x6f94), (0x5b17, 0x6fe0), (0x5b18, 0x6fe9), (0x5b19, 0x705d),
    (0x5b1a, 0x72d0), (0x5b1b, 0x7425), (0x5b1c, 0x745a), (0x5b1d, 0x74e0), (0x5b1e, 0x7693), (0x5b1f, 0x795c),
    (0x5b20, 0x7cca), (0x5b21, 0x7e1e), (0x5b22, 0x80e1), (0x5b23, 0x82a6), (0x5b24, 0x846b), (0x5b25, 0x84bf),
    (0x5b26, 0x864e), (0x5b27, 0x865f), (0x5b28, 0x8774), (0x5b29, 0x8b77), (0x5b2a, 0x8c6a), (0x5b2b, 0x93ac),
    (0x5b2c, 0x9800), (0x5b2d, 0x9865), (0x5b2e, 0x60d1), (0x5b2f, 0x6216), (0x5b30, 0x9177), (0x5b31, 0x5a5a),
    (0x5b32, 0x660f), (0x5b33, 0x6df7), (0x5b34, 0x6e3e), (0x5b35, 0x743f), (0x5b36, 0x9b42), (0x5b37, 0x5ffd),
    (0x5b38, 0x60da), (0x5b39, 0x7b0f), (0x5b3a, 0x54c4), (0x5b3b, 0x5f18), (0x5b3c, 0x6c5e), (0x5b3d, 0x6cd3),
    (0x5b3e, 0x6d2a), (0x5b3f, 0x70d8), (0x5b40, 0x7d05), (0x5b41, 0x8679), (0x5b42, 0x8a0c), (0x5b43, 0x9d3b),
    (0x5b44, 0x5316), (0x5b45, 0x548c), (0x5b46, 0x5b05), (0x5b47, 0x6a3a), (0x5b48, 0x706b), (0x5b49, 0x7575),
    (0x5baa, 0x798d), (0x5bab, 0x79be), (0x5bac, 0x82b1), (0x5bad, 0x83ef), (0x5bae, 0x8a71), (0x5baf, 0x8b41),
    (0x5bb0, 0x8ca8), (0x5bb1, 0x9774), (0x5bb2, 0xfa0b), (0x5bb3, 0x64f4), (0x5bb4, 0x652b), (0x5bb5, 0x78ba),
    (0x5bb6, 0x78bb), (0x5bb7, 0x7a6b), (0x5bb8, 0x4e38), (0x5bb9, 0x559a), (0x5bba, 0x5950), (0x5bbb, 0x5ba6),
    (0x5bbc, 0x5e7b), (0x5bbd, 0x60a3), (0x5bbe, 0x63db), (0x5bbf, 0x6b61), (0x5bc0, 0x6665), (0x5bc1, 0x6853),
    (0x5bc2, 0x6e19), (0x5bc3, 0x7165), (0x5bc4, 0x74b0), (0x5bc5, 0x7d08), (0x5bc6, 0x9084), (0x5bc7, 0x9a69),
    (0x5bc8, 0x9c25), (0x5bc9, 0x6d3b), (0x5bca, 0x6ed1), (0x5bcb, 0x733e), (0x5bcc, 0x8c41), (0x5bcd, 0x95ca),
    (0x5bce, 0x51f0), (0x5bcf, 0x5e4c), (0x5bd0, 0x5fa8), (0x5bd1, 0x604d), (0x5bd2, 0x60f6), (0x5bd3, 0x6130),
    (0x5bd4, 0x614c), (0x5bd5, 0x6643), (0x5bd6, 0x6644), (0x5bd7, 0x69a5), (0x5bd8, 0x6cc1), (0x5bd9, 0x6e5f),
    (0x5bda, 0x6ec9), (0x5bdb, 0x6f62), (0x5bdc, 0x714c), (0x5bdd, 0x749c), (0x5bde, 0x7687), (0x5bdf, 0x7bc1),
    (0x5be0, 0x7c27), (0x5be1, 0x8352), (0x5be2, 0x8757), (0x5be3, 0x9051), (0x5be4, 0x968d), (0x5be5, 0x9ec3),
    (0x5be6, 0x532f), (0x5be7, 0x56de), (0x5be8, 0x5efb), (0x5be9, 0x5f8a), (0x5bea, 0x6062), (0x5beb, 0x6094),
    (0x5bec, 0x61f7), (0x5bed, 0x6666), (0x5bee, 0x6703), (0x5bef, 0x6a9c), (0x5bf0, 0x6dee), (0x5bf1, 0x6fae),
    (0x5bf2, 0x7070), (0x5bf3, 0x736a), (0x5bf4, 0x7e6a), (0x5bf5, 0x81be), (0x5bf6, 0x8334), (0x5bf7, 0x86d4),
    (0x5bf8, 0x8aa8), (0x5bf9, 0x8cc4), (0x5bfa, 0x5283), (0x5bfb, 0x7372), (0x5bfc, 0x5b96), (0x5bfd, 0x6a6b),
    (0x5bfe, 0x9404), (0x5bff, 0x54ee), (0x5c00, 0x5686), (0x5c01, 0x5b5d), (0x5c02, 0x6548), (0x5c03, 0x6585),
    (0x5c04, 0x66c9), (0x5c05, 0x689f), (0x5c06, 0x6d8d), (0x5c07, 0x6dc6), (0x5c68, 0x723b), (0x5c69, 0x80b4),
    (0x5c6a, 0x9175), (0x5c6b, 0x9a4d), (0x5c6c, 0x4faf), (0x5c6d, 0x5019), (0x5c6e, 0x539a), (0x5c6f, 0x540e),
    (0x5c70, 0x543c), (0x5c71, 0x5589), (0x5c72, 0x55c5), (0x5c73, 0x5e3f), (0x5c74, 0x5f8c), (0x5c75, 0x673d),
    (0x5c76, 0x7166), (0x5c77, 0x73dd), (0x5c78, 0x9005), (0x5c79, 0x52db), (0x5c7a, 0x52f3), (0x5c7b, 0x5864),
    (0x5c7c, 0x58ce), (0x5c7d, 0x7104), (0x5c7e, 0x718f), (0x5c7f, 0x71fb), (0x5c80, 0x85b0), (0x5c81, 0x8a13),
    (0x5c82, 0x6688), (0x5c83, 0x85a8), (0x5c84, 0x55a7), (0x5c85, 0x6684), (0x5c86, 0x714a), (0x5c87, 0x8431),
    (0x5c88, 0x5349), (0x5c89, 0x5599), (0x5c8a, 0x6bc1), (0x5c8b, 0x5f59), (0x5c8c, 0x5fbd), (0x5c8d, 0x63ee),
    (0x5c8e, 0x6689), (0x5c8f, 0x7147), (0x5c90, 0x8af1), (0x5c91, 0x8f1d), (0x5c92, 0x9ebe), (0x5c93, 0x4f11),
    (0x5c94, 0x643a), (0x5c95, 0x70cb), (0x5c96, 0x7566), (0x5c97, 0x8667), (0x5c98, 0x6064), (0x5c99, 0x8b4e),
    (0x5c9a, 0x9df8), (0x5c9b, 0x5147), (0x5c9c, 0x51f6), (0x5c9d, 0x5308), (0x5c9e, 0x6d36), (0x5c9f, 0x80f8),
    (0x5ca0, 0x9ed1), (0x5ca1, 0x6615), (0x5ca2, 0x6b23), (0x5ca3, 0x7098), (0x5ca4, 0x75d5), (0x5ca5, 0x5403),
    (0x5ca6, 0x5c79), (0x5ca7, 0x7d07), (0x5ca8, 0x8a16), (0x5ca9, 0x6b20), (0x5caa, 0x6b3d), (0x5cab, 0x6b46),
    (0x5cac, 0x5438), (0x5cad, 0x6070), (0x5cae, 0x6d3d), (0x5caf, 0x7fd5), (0x5cb0, 0x8208), (0x5cb1, 0x50d6),
    (0x5cb2, 0x51de), (0x5cb3, 0x559c), (0x5cb4, 0x566b), (0x5cb5, 0x56cd), (0x5cb6, 0x59ec), (0x5cb7, 0x5b09),
    (0x5cb8, 0x5e0c), (0x5cb9, 0x6199), (0x5cba, 0x6198), (0x5cbb, 0x6231), (0x5cbc, 0x665e), (0x5cbd, 0x66e6),
    (0x5cbe, 0x7199), (0x5cbf, 0x71b9), (0x5cc0, 0x71ba), (0x5cc1, 0x72a7), (0x5cc2, 0x79a7), (0x5cc3, 0x7a00),
    (0x5cc4, 0x7fb2), (0x5cc5, 0x8a70),
];

pub static EUC_KR_ENCODE: [(u16, u16); 17048] = [
    (0x00a1, 0x18eb), (0x00a4, 0x18f1), (0x00a7, 0x1856), (0x00a8, 0x1826), (0x00aa, 0x1d54), (0x00ad, 0x1828),
    (0x00ae, 0x1924), (0x00b0, 0x1845), (0x00b1, 0x183d), (0x00b2, 0x1e66), (0x00b3, 0x1e67), (0x00b4, 0x18e2),
    (0x00b6, 0x190f), (0x00b7, 0x1823), (0x00b8, 0x18e9), (0x00b9, 0x1e65), (0x00ba, 0x1d5d), (0x00bc, 0x1daa),
    (0x00bd, 0x1da7), (0x00be, 0x1dab), (0x00bf, 0x18ec), (0x00c6, 0x1d52), (0x00d0, 0x1d53), (0x00d7, 0x183e),
    (0x00d8, 0x1d5b), (0x00de, 0x1d5e), (0x00df, 0x1e1b), (0x00e6, 0x1e10), (0x00f0, 0x1e12), (0x00f7, 0x183f),
    (0x00f8, 0x1e19), (0x00fe, 0x1e1c), (0x0111, 0x1e11), (0x0126, 0x1d55), (0x0127, 0x1e13), (0x0131, 0x1e14),
    (0x0132, 0x1d57), (0x0133, 0x1e15), (0x0138, 0x1e16), (0x013f, 0x1d59), (0x0140, 0x1e17), (0x0141, 0x1d5a),
    (0x0142, 0x1e18), (0x0149, 0x1e1f), (0x014a, 0x1d60), (0x014b, 0x1e1e), (0x0152, 0x1d5c), (0x0153, 0x1e1a),
    (0x0166, 0x1d5f), (0x0167, 0x1e1d), (0x02c7, 0x18e4), (0x02d0, 0x18ed), (0x02d8, 0x18e5), (0x02d9, 0x18e8),
    (0x02da, 0x18e7), (0x02db, 0x18ea), (0x02dd, 0x18e6), (0x0391, 0x1b38), (0x0392, 0x1b39), (0x0393, 0x1b3a),
    (0x0394, 0x1b3b), (0x0395, 0x1b3c), (0x0396, 0x1b3d), (0x0397, 0x1b3e), (0x0398, 0x1b3f), (0x0399, 0x1b40),
    (0x039a, 0x1b41), (0x039b, 0x1b42), (0x039c, 0x1b43), (0x039d, 0x1b44), (0x039e, 0x1b45), (0x039f, 0x1b46),
    (0x03a0, 0x1b47), (0x03a1, 0x1b48), (0x03a3, 0x1b49), (0x03a4, 0x1b4a), (0x03a5, 0x1b4b), (0x03a6, 0x1b4c),
    (0x03a7, 0x1b4d), (0x03a8, 0x1b4e), (0x03a9, 0x1b4f), (0x03b1, 0x1b58), (0x03b2, 0x1b59), (0x03b3, 0x1b5a),
    (0x03b4, 0x1b5b), (0x03b5, 0x1b5c), (0x03b6, 0x1b5d), (0x03b7, 0x1b5e), (0x03b8, 0x1b5f), (0x03b9, 0x1b60),
    (0x03ba, 0x1b61), (0x03bb, 0x1b62), (0x03bc, 0x1b63), (0x03bd, 0x1b64), (0x03be, 0x1b65), (0x03bf, 0x1b66),
    (0x03c0, 0x1b67), (0x03c1, 0x1b68), (0x03c3, 0x1b69), (0x03c4, 0x1b6a), (0x03c5, 0x1b6b), (0x03c6, 0x1b6c),
    (0x03c7, 0x1b6d), (0x03c8, 0x1b6e), (0x03c9, 0x1b6f), (0x0401, 0x2050), (0x0410, 0x204a), (0x0411, 0x204b),
    (0x0412, 0x204c), (0x0413, 0x204d), (0x0414, 0x204e), (0x0415, 0x204f), (0x0416, 0x2051), (0x0417, 0x2052),
    (0x0418, 0x2053), (0x0419, 0x2054), (0x041a, 0x2055), (0x041b, 0x2056), (0x041c, 0x2057), (0x041d, 0x2058),
    (0x041e, 0x2059), (0x041f, 0x205a), (0x0420, 0x205b), (0x0421, 0x205c), (0x0422, 0x205d), (0x0423, 0x205e),
    (0x0424, 0x205f), (0x0425, 0x2060), (0x0426, 0x2061), (0x0427, 0x2062), (0x0428, 0x2063), (0x0429, 0x2064),
    (0x042a, 0x2065), (0x042b, 0x2066), (0x042c, 0x2067), (0x042d, 0x2068), (0x042e, 0x2069), (0x042f, 0x206a),
    (0x0430, 0x207a), (0x0431, 0x207b), (0x0432, 0x207c), (0x0433, 0x207d), (0x0434, 0x207e), (0x0435, 0x207f),
    (0x0436, 0x2081), (0x0437, 0x2082), (0x0438, 0x2083), (0x0439, 0x2084), (0x043a, 0x2085), (0x043b, 0x2086),
    (0x043c, 0x2087), (0x043d, 0x2088), (0x043e, 0x2089), (0x043f, 0x208a), (0x0440, 0x208b), (0x0441, 0x208c),
    (0x0442, 0x208d), (0x0443, 0x208e), (0x0444, 0x208f), (0x0445, 0x2090), (0x0446, 0x2091), (0x0447, 0x2092),
    (0x0448, 0x2093), (0x0449, 0x2094), (0x044a, 0x2095), (0x044b, 0x2096), (0x044c, 0x2097), (0x044d, 0x2098),
    (0x044e, 0x2099), (0x044f, 0x209a), (0x0451, 0x2080), (0x2015, 0x1829), (0x2018, 0x182d), (0x2019, 0x182e),
    (0x201c, 0x182f), (0x201d, 0x1830), (0x2020, 0x1910), (0x2021, 0x1911), (0x2025, 0x1824), (0x2026, 0x1825),
    (0x2030, 0x18f3), (0x2032, 0x1846), (0x2033, 0x1847), (0x203b, 0x1857), (0x2074, 0x1e68), (0x207f, 0x1e69),
    (0x2081, 0x1e6a), (0x2082, 0x1e6b), (0x2083, 0x1e6c), (0x2084, 0x1e6d), (0x20ac, 0x1923), (0x2103, 0x1848),
    (0x2109, 0x18f2), (0x2113, 0x1c97), (0x2116, 0x191d), (0x2121, 0x1922), (0x2122, 0x191f), (0x2126, 0x1ccc),
    (0x212b, 0x1849), (0x2153, 0x1da8), (0x2154, 0x1da9), (0x215b, 0x1dac), (0x215c, 0x1dad), (0x215d, 0x1dae),
    (0x215e, 0x1daf), (0x2160, 0x1b27), (0x2161, 0x1b28), (0x2162, 0x1b29), (0x2163, 0x1b2a), (0x2164, 0x1b2b),
    (0x2165, 0x1b2c), (0x2166, 0x1b2d), (0x2167, 0x1b2e), (0x2168, 0x1b2f), (0x2169, 0x1b30), (0x2170, 0x1b18),
    (0x2171, 0x1b19), (0x2172, 0x1b1a), (0x2173, 0x1b1b), (0x2174, 0x1b1c), (0x2175, 0x1b1d), (0x2176, 0x1b1e),
    (0x2177, 0x1b1f), (0x2178, 0x1b20), (0x2179, 0x1b21), (0x2190, 0x1866), (0x2191, 0x1867), (0x2192, 0x1865),
    (0x2193, 0x1868), (0x2194, 0x1869), (0x2195, 0x1912), (0x2196, 0x1915), (0x2197, 0x1913), (0x2198, 0x1916),
    (0x2199, 0x1914), (0x21d2, 0x18de), (0x21d4, 0x18df), (0x2200, 0x18e0), (0x2202, 0x1852), (0x2203, 0x18e1),
    (0x2207, 0x1853), (0x2208, 0x1873), (0x220b, 0x1874), (0x220f, 0x18f0), (0x2211, 0x18ef), (0x221a, 0x186d),
    (0x221d, 0x186f), (0x221e, 0x1843), (0x2220, 0x184f), (0x2225, 0x182a), (0x2227, 0x187b), (0x2228, 0x187c),
    (0x2229, 0x187a), (0x222a, 0x1879), (0x222b, 0x1871), (0x222c, 0x1872), (0x222e, 0x18ee), (0x2234, 0x1844),
    (0x2235, 0x1870), (0x223c, 0x182c), (0x223d, 0x186e), (0x2252, 0x1855), (0x2260, 0x1840), (0x2261, 0x1854),
    (0x2264, 0x1841), (0x2265, 0x1842), (0x226a, 0x186b), (0x226b, 0x186c), (0x2282, 0x1877), (0x2283, 0x1878),
    (0x2286, 0x1875), (0x2287, 0x1876), (0x2299, 0x18fe), (0x22a5, 0x1850), (0x2312, 0x1851), (0x2460, 0x1d98),
    (0x2461, 0x1d99), (0x2462, 0x1d9a), (0x2463, 0x1d9b), (0x2464, 0x1d9c), (0x2465, 0x1d9d), (0x2466, 0x1d9e),
    (0x2467, 0x1d9f), (0x2468, 0x1da0), (0x2469, 0x1da1), (0x246a, 0x1da2), (0x246b, 0x1da3), (0x246c, 0x1da4),
    (0x246d, 0x1da5), (0x246e, 0x1da6), (0x2474, 0x1e56), (0x2475, 0x1e57), (0x2476, 0x1e58), (0x2477, 0x1e59),
    (0x2478, 0x1e5a), (0x2479, 0x1e5b), (0x247a, 0x1e5c), (0x247b, 0x1e5d), (0x247c, 0x1e5e), (0x247d, 0x1e5f),
    (0x247e, 0x1e60), (0x247f, 0x1e61), (0x2480, 0x1e62), (0x2481, 0x1e63), (0x2482, 0x1e64), (0x249c, 0x1e3c),
    (0x249d, 0x1e3d), (0x249e, 0x1e3e), (0x249f, 0x1e3f), (0x24a0, 0x1e40), (0x24a1, 0x1e41), (0x24a2, 0x1e42),
    (0x24a3, 0x1e43), (0x24a4, 0x1e44), (0x24a5, 0x1e45), (0x24a6, 0x1e46), (0x24a7, 0x1e47), (0x24a8, 0x1e48),
    (0x24a9, 0x1e49), (0x24aa, 0x1e4a), (0x24ab, 0x1e4b), (0x24ac, 0x1e4c), (0x24ad, 0x1e4d), (0x24ae, 0x1e4e),
    (0x24af, 0x1e4f), (0x24b0, 0x1e50), (0x24b1, 0x1e51), (0x24b2, 0x1e52), (0x24b3, 0x1e53), (0x24b4, 0x1e54),
    (0x24b5, 0x1e55), (0x24d0, 0x1d7e), (0x24d1, 0x1d7f), (0x24d2, 0x1d80), (0x24d3, 0x1d81), (0x24d4, 0x1d82),
    (0x24d5, 0x1d83), (0x24d6, 0x1d84), (0x24d7, 0x1d85), (0x24d8, 0x1d86), (0x24d9, 0x1d87), (0x24da, 0x1d88),
    (0x24db, 0x1d89), (0x24dc, 0x1d8a), (0x24dd, 0x1d8b), (0x24de, 0x1d8c), (0x24df, 0x1d8d), (0x24e0, 0x1d8e),
    (0x24e1, 0x1d8f), (0x24e2, 0x1d90), (0x24e3, 0x1d91), (0x24e4, 0x1d92), (0x24e5, 0x1d93), (0x24e6, 0x1d94),
    (0x24e7, 0x1d95), (0x24e8, 0x1d96), (0x24e9, 0x1d97), (0x2500, 0x1bd6), (0x2501, 0x1be1), (0x2502, 0x1bd7),
    (0x2503, 0x1be2), (0x250c, 0x1bd8), (0x250d, 0x1bfd), (0x250e, 0x1bfc), (0x250f, 0x1be3), (0x2510, 0x1bd9),
    (0x2511, 0x1bf7), (0x2512, 0x1bf6), (0x2513, 0x1be4), (0x2514, 0x1bdb), (0x2515, 0x1bfb), (0x2516, 0x1bfa),
    (0x2517, 0x1be6), (0x2518, 0x1bda), (0x2519, 0x1bf9), (0x251a, 0x1bf8), (0x251b, 0x1be5), (0x251c, 0x1bdc),
    (0x251d, 0x1bf1), (0x251e, 0x1bfe), (0x251f, 0x1bff), (0x2520, 0x1bec), (0x2521, 0x1c00), (0x2522, 0x1c01),
    (0x2523, 0x1be7), (0x2524, 0x1bde), (0x2525, 0x1bf3), (0x2526, 0x1c02), (0x2527, 0x1c03), (0x2528, 0x1bee),
    (0x2529, 0x1c04), (0x252a, 0x1c05), (0x252b, 0x1be9), (0x252c, 0x1bdd), (0x252d, 0x1c06), (0x252e, 0x1c07),
    (0x252f, 0x1bed), (0x2530, 0x1bf2), (0x2531, 0x1c08), (0x2532, 0x1c09), (0x2533, 0x1be8), (0x2534, 0x1bdf),
    (0x2535, 0x1c0a), (0x2536, 0x1c0b), (0x2537, 0x1bef), (0x2538, 0x1bf4), (0x2539, 0x1c0c), (0x253a, 0x1c0d),
    (0x253b, 0x1bea), (0x253c, 0x1be0), (0x253d, 0x1c0e), (0x253e, 0x1c0f), (0x253f, 0x1bf0), (0x2540, 0x1c10),
    (0x2541, 0x1c11), (0x2542, 0x1bf5), (0x2543, 0x1c12), (0x2544, 0x1c13), (0x2545, 0x1c14), (0x2546, 0x1c15),
    (0x2547, 0x1c16), (0x2548, 0x1c17), (0x2549, 0x1c18), (0x254a, 0x1c19), (0x254b, 0x1beb), (0x2592, 0x1903),
    (0x25a0, 0x1860), (0x25a1, 0x185f), (0x25a3, 0x1900), (0x25a4, 0x1904), (0x25a5, 0x1905), (0x25a6, 0x1908),
    (0x25a7, 0x1907), (0x25a8, 0x1906), (0x25a9, 0x1909), (0x25b2, 0x1862), (0x25b3, 0x1861), (0x25b6, 0x18f7),
    (0x25b7, 0x18f6), (0x25bc, 0x1864), (0x25bd, 0x1863), (0x25c0, 0x18f5), (0x25c1, 0x18f4), (0x25c6, 0x185e),
    (0x25c7, 0x185d), (0x25c8, 0x18ff), (0x25cb, 0x185a), (0x25ce, 0x185c), (0x25cf, 0x185b), (0x25d0, 0x1901),
    (0x25d1, 0x1902), (0x2605, 0x1859), (0x2606, 0x1858), (0x260e, 0x190c), (0x260f, 0x190b), (0x261c, 0x190d),
    (0x261e, 0x190e), (0x2640, 0x184e), (0x2642, 0x184d), (0x2660, 0x18f9), (0x2661, 0x18fa), (0x2663, 0x18fd),
    (0x2664, 0x18f8), (0x2665, 0x18fb), (0x2667, 0x18fc), (0x2668, 0x190a), (0x2669, 0x1918), (0x266a, 0x1919),
    (0x266c, 0x191a), (0x266d, 0x1917), (0x3000, 0x1820), (0x3001, 0x1821), (0x3002, 0x1822), (0x3003, 0x1827),
    (0x3008, 0x1833), (0x3009, 0x1834), (0x300a, 0x1835), (0x300b, 0x1836), (0x300c, 0x1837), (0x300d, 0x1838),
    (0x300e, 0x1839), (0x300f, 0x183a), (0x3010, 0x183b), (0x3011, 0x183c), (0x3013, 0x186a), (0x3014, 0x1831),
    (0x3015, 0x1832), (0x3041, 0x1ece), (0x3042, 0x1ecf), (0x3043, 0x1ed0), (0x3044, 0x1ed1), (0x3045, 0x1ed2),
    (0x3046, 0x1ed3), (0x3047, 0x1ed4), (0x3048, 0x1ed5), (0x3049, 0x1ed6), (0x304a, 0x1ed7), (0x304b, 0x1ed8),
    (0x304c, 0x1ed9), (0x304d, 0x1eda), (0x304e, 0x1edb), (0x304f, 0x1edc), (0x3050, 0x1edd), (0x3051, 0x1ede),
    (0x3052, 0x1edf), (0x3053, 0x1ee0), (0x3054, 0x1ee1), (0x3055, 0x1ee2), (0x3056, 0x1ee3), (0x3057, 0x1ee4),
    (0x3058, 0x1ee5), (0x3059, 0x1ee6), (0x305a, 0x1ee7), (0x305b, 0x1ee8), (0x305c, 0x1ee9), (0x305d, 0x1eea),
    (0x305e, 0x1eeb), (0x305f, 0x1eec), (0x3060, 0x1eed), (0x3061, 0x1eee), (0x3062, 0x1eef), (0x3063, 0x1ef0),
    (0x3064, 0x1ef1), (0x3065, 0x1ef2), (0x3066, 0x1ef3), (0x3067, 0x1ef4), (0x3068, 0x1ef5), (0x3069, 0x1ef6),
    (0x306a, 0x1ef7), (0x306b, 0x1ef8), (0x306c, 0x1ef9), (0x306d, 0x1efa), (0x306e, 0x1efb), (0x306f, 0x1efc),
    (0x3070, 0x1efd), (0x3071, 0x1efe), (0x3072, 0x1eff), (0x3073, 0x1f00), (0x3074, 0x1f01), (0x3075, 0x1f02),
    (0x3076, 0x1f03), (0x3077, 0x1f04), (0x3078, 0x1f05), (0x3079, 0x1f06), (0x307a, 0x1f07), (0x307b, 0x1f08),
    (0x307c, 0x1f09), (0x307d, 0x1f0a), (0x307e, 0x1f0b), (0x307f, 0x1f0c), (0x3080, 0x1f0d), (0x3081, 0x1f0e),
    (0x3082, 0x1f0f), (0x3083, 0x1f10), (0x3084, 0x1f11), (0x3085, 0x1f12), (0x3086, 0x1f13), (0x3087, 0x1f14),
    (0x3088, 0x1f15), (0x3089, 0x1f16), (0x308a, 0x1f17), (0x308b, 0x1f18), (0x308c, 0x1f19), (0x308d, 0x1f1a),
    (0x308e, 0x1f1b), (0x308f, 0x1f1c), (0x3090, 0x1f1d), (0x3091, 0x1f1e), (0x3092, 0x1f1f), (0x3093, 0x1f20),
    (0x30a1, 0x1f8c), (0x30a2, 0x1f8d), (0x30a3, 0x1f8e), (0x30a4, 0x1f8f), (0x30a5, 0x1f90), (0x30a6, 0x1f91),
    (0x30a7, 0x1f92), (0x30a8, 0x1f93), (0x30a9, 0x1f94), (0x30aa, 0x1f95), (0x30ab, 0x1f96), (0x30ac, 0x1f97),
    (0x30ad, 0x1f98), (0x30ae, 0x1f99), (0x30af, 0x1f9a), (0x30b0, 0x1f9b), (0x30b1, 0x1f9c), (0x30b2, 0x1f9d),
    (0x30b3, 0x1f9e), (0x30b4, 0x1f9f), (0x30b5, 0x1fa0), (0x30b6, 0x1fa1), (0x30b7, 0x1fa2), (0x30b8, 0x1fa3),
    (0x30b9, 0x1fa4), (0x30ba, 0x1fa5), (0x30bb, 0x1fa6), (0x30bc, 0x1fa7), (0x30bd, 0x1fa8), (0x30be, 0x1fa9),
    (0x30bf, 0x1faa), (0x30c0, 0x1fab), (0x30c1, 0x1fac), (0x30c2, 0x1fad), (0x30c3, 0x1fae), (0x30c4, 0x1faf),
    (0x30c5, 0x1fb0), (0x30c6, 0x1fb1), (0x30c7, 0x1fb2), (0x30c8, 0x1fb3), (0x30c9, 0x1fb4), (0x30ca, 0x1fb5),
    (0x30cb, 0x1fb6), (0x30cc, 0x1fb7), (0x30cd, 0x1fb8), (0x30ce, 0x1fb9), (0x30cf, 0x1fba), (0x30d0, 0x1fbb),
    (0x30d1, 0x1fbc), (0x30d2, 0x1fbd), (0x30d3, 0x1fbe), (0x30d4, 0x1fbf), (0x30d5, 0x1fc0), (0x30d6, 0x1fc1),
    (0x30d7, 0x1fc2), (0x30d8, 0x1fc3), (0x30d9, 0x1fc4), (0x30da, 0x1fc5), (0x30db, 0x1fc6), (0x30dc, 0x1fc7),
    (0x30dd, 0x1fc8), (0x30de, 0x1fc9), (0x30df, 0x1fca), (0x30e0, 0x1fcb), (0x30e1, 0x1fcc), (0x30e2, 0x1fcd),
    (0x30e3, 0x1fce), (0x30e4, 0x1fcf), (0x30e5, 0x1fd0), (0x30e6, 0x1fd1), (0x30e7, 0x1fd2), (0x30e8, 0x1fd3),
    (0x30e9, 0x1fd4), (0x30ea, 0x1fd5), (0x30eb, 0x1fd6), (0x30ec, 0x1fd7), (0x30ed, 0x1fd8), (0x30ee, 0x1fd9),
    (0x30ef, 0x1fda), (0x30f0, 0x1fdb), (0x30f1, 0x1fdc), (0x30f2, 0x1fdd), (0x30f3, 0x1fde), (0x30f4, 0x1fdf),
    (0x30f5, 0x1fe0), (0x30f6, 0x1fe1), (0x3131, 0x1a5a), (0x3132, 0x1a5b), (0x3133, 0x1a5c), (0x3134, 0x1a5d),
    (0x3135, 0x1a5e), (0x3136, 0x1a5f), (0x3137, 0x1a60), (0x3138, 0x1a61), (0x3139, 0x1a62), (0x313a, 0x1a63),
    (0x313b, 0x1a64), (0x313c, 0x1a65), (0x313d, 0x1a66), (0x313e, 0x1a67), (0x313f, 0x1a68), (0x3140, 0x1a69),
    (0x3141, 0x1a6a), (0x3142, 0x1a6b), (0x3143, 0x1a6c), (0x3144, 0x1a6d), (0x3145, 0x1a6e), (0x3146, 0x1a6f),
    (0x3147, 0x1a70), (0x3148, 0x1a71), (0x3149, 0x1a72), (0x314a, 0x1a73), (0x314b, 0x1a74), (0x314c, 0x1a75),
    (0x314d, 0x1a76), (0x314e, 0x1a77), (0x314f, 0x1a78), (0x3150, 0x1a79), (0x3151, 0x1a7a), (0x3152, 0x1a7b),
    (0x3153, 0x1a7c), (0x3154, 0x1a7d), (0x3155, 0x1a7e), (0x3156, 0x1a7f), (0x3157, 0x1a80), (0x3158, 0x1a81),
    (0x3159, 0x1a82), (0x315a, 0x1a83), (0x315b, 0x1a84), (0x315c, 0x1a85), (0x315d, 0x1a86), (0x315e, 0x1a87),
    (0x315f, 0x1a88), (0x3160, 0x1a89), (0x3161, 0x1a8a), (0x3162, 0x1a8b), (0x3163, 0x1a8c), (0x3164, 0x1a8d),
    (0x3165, 0x1a8e), (0x3166, 0x1a8f), (0x3167, 0x1a90), (0x3168, 0x1a91), (0x3169, 0x1a92), (0x316a, 0x1a93),
    (0x316b, 0x1a94), (0x316c, 0x1a95), (0x316d, 0x1a96), (0x316e, 0x1a97), (0x316f, 0x1a98), (0x3170, 0x1a99),
    (0x3171, 0x1a9a), (0x3172, 0x1a9b), (0x3173, 0x1a9c), (0x3174, 0x1a9d), (0x3175, 0x1a9e), (0x3176, 0x1a9f),
    (0x3177, 0x1aa0), (0x3178, 0x1aa1), (0x3179, 0x1aa2), (0x317a, 0x1aa3), (0x317b, 0x1aa4), (0x317c, 0x1aa5),
    (0x317d, 0x1aa6), (0x317e, 0x1aa7), (0x317f, 0x1aa8), (0x3180, 0x1aa9), (0x3181, 0x1aaa), (0x3182, 0x1aab),
    (0x3183, 0x1aac), (0x3184, 0x1aad), (0x3185, 0x1aae), (0x3186, 0x1aaf), (0x3187, 0x1ab0), (0x3188, 0x1ab1),
    (0x3189, 0x1ab2), (0x318a, 0x1ab3), (0x318b, 0x1ab4), (0x318c, 0x1ab5), (0x318d, 0x1ab6), (0x318e, 0x1ab7),
    (0x3200, 0x1e20), (0x3201, 0x1e21), (0x3202, 0x1e22), (0x3203, 0x1e23), (0x3204, 0x1e24), (0x3205, 0x1e25),
    (0x3206, 0x1e26), (0x3207, 0x1e27), (0x3208, 0x1e28), (0x3209, 0x1e29), (0x320a, 0x1e2a), (0x320b, 0x1e2b),
    (0x320c, 0x1e2c), (0x320d, 0x1e2d), (0x320e, 0x1e2e), (0x320f, 0x1e2f), (0x3210, 0x1e30), (0x3211, 0x1e31),
    (0x3212, 0x1e32), (0x3213, 0x1e33), (0x3214, 0x1e34), (0x3215, 0x1e35), (0x3216, 0x1e36), (0x3217, 0x1e37),
    (0x3218, 0x1e38), (0x3219, 0x1e39), (0x321a, 0x1e3a), (0x321b, 0x1e3b), (0x321c, 0x191c), (0x3260, 0x1d62),
    (0x3261, 0x1d63), (0x3262, 0x1d64), (0x3263, 0x1d65), (0x3264, 0x1d66), (0x3265, 0x1d67), (0x3266, 0x1d68),
    (0x3267, 0x1d69), (0x3268, 0x1d6a), (0x3269, 0x1d6b), (0x326a, 0x1d6c), (0x326b, 0x1d6d), (0x326c, 0x1d6e),
    (0x326d, 0x1d6f), (0x326e, 0x1d70), (0x326f, 0x1d71), (0x3270, 0x1d72), (0x3271, 0x1d73), (0x3272, 0x1d74),
    (0x3273, 0x1d75), (0x3274, 0x1d76), (0x3275, 0x1d77), (0x3276, 0x1d78), (0x3277, 0x1d79), (0x3278, 0x1d7a),
    (0x3279, 0x1d7b), (0x327a, 0x1d7c), (0x327b, 0x1d7d), (0x327f, 0x191b), (0x3380, 0x1cbc), (0x3381, 0x1cbd),
    (0x3382, 0x1cbe), (0x3383, 0x1cbf), (0x3384, 0x1cc0), (0x3388, 0x1cad), (0x3389, 0x1cae), (0x338a, 0x1ccf),
    (0x338b, 0x1cd0), (0x338c, 0x1cd1), (0x338d, 0x1ca9), (0x338e, 0x1caa), (0x338f, 0x1cab), (0x3390, 0x1cc7),
    (0x3391, 0x1cc8), (0x3392, 0x1cc9), (0x3393, 0x1cca), (0x3394, 0x1ccb), (0x3395, 0x1c94), (0x3396, 0x1c95),
    (0x3397, 0x1c96), (0x3398, 0x1c98), (0x3399, 0x1c9e), (0x339a, 0x1c9f), (0x339b, 0x1ca0), (0x339c, 0x1ca1),
    (0x339d, 0x1ca2), (0x339e, 0x1ca3), (0x339f, 0x1ca4), (0x33a0, 0x1ca5), (0x33a1, 0x1ca6), (0x33a2, 0x1ca7),
    (0x33a3, 0x1c9a), (0x33a4, 0x1c9b), (0x33a5, 0x1c9c), (0x33a6, 0x1c9d), (0x33a7, 0x1cb0), (0x33a8, 0x1cb1),
    (0x33a9, 0x1cd8), (0x33aa, 0x1cd9), (0x33ab, 0x1cda), (0x33ac, 0x1cdb), (0x33ad, 0x1cd4), (0x33ae, 0x1cd5),
    (0x33af, 0x1cd6), (0x33b0, 0x1cb2), (0x33b1, 0x1cb3), (0x33b2, 0x1cb4), (0x33b3, 0x1cb5), (0x33b4, 0x1cb6),
    (0x33b5, 0x1cb7), (0x33b6, 0x1cb8), (0x33b7, 0x1cb9), (0x33b8, 0x1cba), (0x33b9, 0x1cbb), (0x33ba, 0x1cc1),
    (0x33bb, 0x1cc2), (0x33bc, 0x1cc3), (0x33bd, 0x1cc4), (0x33be, 0x1cc5), (0x33bf, 0x1cc6), (0x33c0, 0x1ccd),
    (0x33c1, 0x1cce), (0x33c2, 0x1920), (0x33c3, 0x1cdf), (0x33c4, 0x1c99), (0x33c5, 0x1cd3), (0x33c6, 0x1ce2),
    (0x33c7, 0x191e), (0x33c8, 0x1caf), (0x33c9, 0x1ce0), (0x33ca, 0x1ca8), (0x33cf, 0x1cac), (0x33d0, 0x1cdd),
    (0x33d3, 0x1cde), (0x33d6, 0x1cd2), (0x33d8, 0x1921), (0x33db, 0x1cd7), (0x33dc, 0x1ce1), (0x33dd, 0x1cdc),
    (0x4e00, 0x5012), (0x4e01, 0x522e), (0x4e03, 0x5767), (0x4e07, 0x4103), (0x4e08, 0x50c2), (0x4e09, 0x4635),
    (0x4e0a, 0x4641), (0x4e0b, 0x598a), (0x4e0d, 0x443d), (0x4e11, 0x56bb), (0x4e14, 0x5501), (0x4e15, 0x44e7),
    (0x4e16, 0x47a5), (0x4e18, 0x39dd), (0x4e19, 0x43f9), (0x4e1e, 0x4925), (0x4e2d, 0x53c8), (0x4e32, 0x3921),
    (0x4e38, 0x5bb8), (0x4e39, 0x3d3c), (0x4e3b, 0x538a), (0x4e42, 0x4c44), (0x4e43, 0x3c89), (0x4e45, 0x39de),
    (0x4e4b, 0x53dc), (0x4e4d, 0x4584), (0x4e4e, 0x5b05), (0x4e4f, 0x5988), (0x4e56, 0x39b7), (0x4e58, 0x4926),
    (0x4e59, 0x4f4b), (0x4e5d, 0x39df), (0x4e5e, 0x37a2), (0x4e5f, 0x4a9c), (0x4e6b, 0x36ce), (0x4e6d, 0x3e25),
    (0x4e73, 0x4e8e), (0x4e76, 0x442c), (0x4e77, 0x4630), (0x4e7e, 0x3796), (0x4e82, 0x3ec6), (0x4e86, 0x3fca),
    (0x4e88, 0x4aef), (0x4e8b, 0x4585), (0x4e8c, 0x4fcc), (0x4e8e, 0x4dbc), (0x4e90, 0x4e54), (0x4e91, 0x4de5),
    (0x4e92, 0x5b06), (0x4e94, 0x4c5c), (0x4e95, 0x522f), (0x4e98, 0x3b47), (0x4e9b, 0x4586), (0x4e9e, 0x49e5),
    (0x4ea1, 0x411d), (0x4ea2, 0x59c0), (0x4ea4, 0x39c4), (0x4ea5, 0x5a31), (0x4ea6, 0x4b67), (0x4ea8, 0x5a88),
    (0x4eab, 0x5a4a), (0x4eac, 0x3831), (0x4ead, 0x5230), (0x4eae, 0x3eec), (0x4eb6, 0x3d3d), (0x4eba, 0x4ffa),
    (0x4ec0, 0x49e0), (0x4ec1, 0x4ffb), (0x4ec4, 0x5746), (0x4ec7, 0x39e0), (0x4eca, 0x3b32), (0x4ecb, 0x376a),
    (0x4ecd, 0x508b), (0x4ed4, 0x508f), (0x4ed5, 0x4587), (0x4ed6, 0x5777), (0x4ed7, 0x50c3), (0x4ed8, 0x443e),
    (0x4ed9, 0x46fa), (0x4edd, 0x3e27), (0x4edf, 0x55ce), (0x4ee3, 0x3d76), (0x4ee4, 0x3f8a), (0x4ee5, 0x4fcd),
    (0x4ef0, 0x4a1f), (0x4ef2, 0x53c9), (0x4ef6, 0x3797), (0x4ef7, 0x376b), (0x4efb, 0x501b), (0x4f01, 0x3b4b),
    (0x4f09, 0x59c1), (0x4f0a, 0x4fce), (0x4f0b, 0x3b40), (0x4f0d, 0x4c5d), (0x4f0e, 0x3b4c), (0x4f0f, 0x441a),
    (0x4f10, 0x4374), (0x4f11, 0x5c93), (0x4f2f, 0x4362), (0x4f34, 0x42ae), (0x4f36, 0x3f8b), (0x4f38, 0x495a),
    (0x4f3a, 0x4588), (0x4f3c, 0x4589), (0x4f3d, 0x368e), (0x4f43, 0x5191), (0x4f46, 0x3d3e), (0x4f47, 0x515c),
    (0x4f48, 0x58e0), (0x4f4d, 0x4e75), (0x4f4e, 0x515d), (0x4f4f, 0x538b), (0x4f50, 0x5384), (0x4f51, 0x4dbd),
    (0x4f55, 0x598b), (0x4f59, 0x4af0), (0x4f5a, 0x5013), (0x4f5b, 0x44dd), (0x4f5c, 0x50a9), (0x4f69, 0x58b6),
    (0x4f6f, 0x4ab1), (0x4f70, 0x4363), (0x4f73, 0x368f), (0x4f76, 0x3bec), (0x4f7a, 0x5192), (0x4f7e, 0x5014),
    (0x4f7f, 0x458a), (0x4f81, 0x495b), (0x4f83, 0x36b6), (0x4f84, 0x5486), (0x4f86, 0x3ee5), (0x4f88, 0x574b),
    (0x4f8a, 0x39a7), (0x4f8b, 0x3f9c), (0x4f8d, 0x492f), (0x4f8f, 0x538c), (0x4f91, 0x4e8f), (0x4f96, 0x4055),
    (0x4f98, 0x5502), (0x4f9b, 0x3911), (0x4f9d, 0x4f59), (0x4fae, 0x41c1), (0x4faf, 0x5c6c), (0x4fb5, 0x576a),
    (0x4fb6, 0x3ef9), (0x4fbf, 0x58c6), (0x4fc2, 0x385e), (0x4fc3, 0x568c), (0x4fc4, 0x49e6), (0x4fc9, 0x4c5e),
    (0x4fca, 0x53b4), (0x4fce, 0x52dc), (0x4fd1, 0x4da4), (0x4fd3, 0x3832), (0x4fd4, 0x5a62), (0x4fd7, 0x47d3),
    (0x4fda, 0x4069), (0x4fdd, 0x440a), (0x4fdf, 0x458b), (0x4fe0, 0x5a7c), (0x4fe1, 0x495c), (0x4fee, 0x47f2),
    (0x4fef, 0x443f), (0x4ff1, 0x39e1), (0x4ff3, 0x434f), (0x4ff5, 0x5902), (0x4ff8, 0x442d), (0x4ffa, 0x4ae6),
    (0x5002, 0x43fa), (0x5006, 0x3eed), (0x5009, 0x5535), (0x500b, 0x376c), (0x500d, 0x434e), (0x5011, 0x4209),
    (0x5012, 0x3d89), (0x5016, 0x5a45), (0x5019, 0x5c6d), (0x501a, 0x4f5a), (0x501c, 0x55bf), (0x501e, 0x3833),
    (0x501f, 0x5503), (0x5021, 0x5536), (0x5023, 0x4332), (0x5024, 0x574c), (0x5026, 0x3a89), (0x5027, 0x5313),
    (0x5028, 0x3785), (0x502a, 0x4c45), (0x502b, 0x4056), (0x502c, 0x5785), (0x502d, 0x4d0f), (0x503b, 0x4a9d),
    (0x5043, 0x4ade), (0x5047, 0x3690), (0x5048, 0x3810), (0x5049, 0x4e76), (0x504f, 0x58c7), (0x5055, 0x5a32),
    (0x505a, 0x538d), (0x505c, 0x5231), (0x5065, 0x3798), (0x5074, 0x5745), (0x5075, 0x5232), (0x5076, 0x4dbe),
    (0x5078, 0x5831), (0x5080, 0x39b8), (0x5085, 0x4440), (0x508d, 0x4333), (0x5091, 0x37a3), (0x5098, 0x4624),
    (0x5099, 0x44e8), (0x50ac, 0x56a1), (0x50ad, 0x4da5), (0x50b2, 0x4c5f), (0x50b3, 0x5193), (0x50b5, 0x554b),
    (0x50b7, 0x4642), (0x50be, 0x3834), (0x50c5, 0x3b22), (0x50c9, 0x55eb), (0x50ca, 0x46fb), (0x50cf, 0x4643),
    (0x50d1, 0x39c5), (0x50d5, 0x441b), (0x50d6, 0x5cb1), (0x50da, 0x3fcb), (0x50de, 0x4e77), (0x50e5, 0x4d1a),
    (0x50e7, 0x4927), (0x50ed, 0x552b), (0x50f9, 0x3691), (0x50fb, 0x4383), (0x50ff, 0x458c), (0x5100, 0x4f5b),
    (0x5101, 0x53b5), (0x5104, 0x4ad9), (0x5106, 0x3835), (0x5109, 0x37a6), (0x5112, 0x4e90), (0x511f, 0x4644),
    (0x5121, 0x3fc2), (0x512a, 0x4dbf), (0x5132, 0x515e), (0x5137, 0x3efa), (0x513a, 0x3bf2), (0x513c, 0x4ae7),
    (0x5140, 0x4ce5), (0x5141, 0x4f2e), (0x5143, 0x4e57), (0x5144, 0x5a89), (0x5145, 0x56cd), (0x5146, 0x52dd),
    (0x5147, 0x5c9b), (0x5148, 0x46fc), (0x5149, 0x39a8), (0x514b, 0x3b1b), (0x514c, 0x580d), (0x514d, 0x4144),
    (0x514e, 0x5820), (0x5152, 0x49e7), (0x515c, 0x3e38), (0x5162, 0x3b48), (0x5165, 0x5026), (0x5167, 0x3c8b),
    (0x5168, 0x5194), (0x5169, 0x3eee), (0x516a, 0x4e91), (0x516b, 0x58b3), (0x516c, 0x3912), (0x516d, 0x4052),
    (0x516e, 0x5afc), (0x5171, 0x3913), (0x5175, 0x43fb), (0x5176, 0x3b4d), (0x5177, 0x39e2), (0x5178, 0x5195),
    (0x517c, 0x382b), (0x5180, 0x3b4e), (0x5186, 0x4aee), (0x518a, 0x5557), (0x518d, 0x5147), (0x5192, 0x41c2),
    (0x5195, 0x4145), (0x5197, 0x4da6), (0x51a0, 0x3993), (0x51a5, 0x41b1), (0x51aa, 0x4142), (0x51ac, 0x3e28),
    (0x51b6, 0x4a9e), (0x51b7, 0x3ee9), (0x51bd, 0x3f7e), (0x51c4, 0x55bb), (0x51c6, 0x53b6), (0x51c9, 0x3eef),
    (0x51cb, 0x52de), (0x51cc, 0x4063), (0x51cd, 0x3e29), (0x51dc, 0x4062), (0x51dd, 0x4f55), (0x51de, 0x5cb2),
    (0x51e1, 0x4378), (0x51f0, 0x5bce), (0x51f1, 0x376d), (0x51f6, 0x5c9c), (0x51f8, 0x55e1), (0x51f9, 0x4d1b),
    (0x51fa, 0x56ca), (0x51fd, 0x59ad), (0x5200, 0x3d8a), (0x5203, 0x4ffc), (0x5206, 0x44c9), (0x5207, 0x521a),
    (0x5208, 0x4c47), (0x520a, 0x36b7), (0x520e, 0x420a), (0x5211, 0x5a8a), (0x5217, 0x3f7f), (0x521d, 0x5611),
    (0x5224, 0x584a), (0x5225, 0x43f5), (0x5229, 0x406a), (0x522a, 0x4625), (0x522e, 0x39a3), (0x5230, 0x3d8b),
    (0x5236, 0x52c5), (0x5237, 0x47eb), (0x5238, 0x3a8a), (0x5239, 0x5526), (0x523a, 0x5090), (0x523b, 0x36ab),
    (0x5243, 0x5608), (0x5247, 0x5763), (0x524a, 0x45c0), (0x524b, 0x3b1c), (0x524c, 0x3ece), (0x524d, 0x5196),
    (0x5254, 0x55c1), (0x5256, 0x4441), (0x525b, 0x3752), (0x525d, 0x429b), (0x5261, 0x4727), (0x5269, 0x508c),
    (0x526a, 0x5197), (0x526f, 0x4442), (0x5272, 0x59ab), (0x5275, 0x5537), (0x527d, 0x5903), (0x527f, 0x5612),
    (0x5283, 0x5bfa), (0x5287, 0x3b1d), (0x5288, 0x4384), (0x5289, 0x4044), (0x528d, 0x37a7), (0x5291, 0x52c6),
    (0x5292, 0x37a8), (0x529b, 0x3f0b), (0x529f, 0x3914), (0x52a0, 0x3692), (0x52a3, 0x3f80), (0x52a4, 0x3b23),
    (0x52a9, 0x52df), (0x52aa, 0x3c9a), (0x52ab, 0x380d), (0x52be, 0x5a43), (0x52c1, 0x3836), (0x52c3, 0x42c7),
    (0x52c5, 0x5764), (0x52c7, 0x4da7), (0x52c9, 0x4146), (0x52cd, 0x3837), (0x52d2, 0x4060), (0x52d5, 0x3e2a),
    (0x52d6, 0x4ddc), (0x52d8, 0x36d8), (0x52d9, 0x41f1), (0x52db, 0x5c79), (0x52dd, 0x4928), (0x52de, 0x3fa1),
    (0x52df, 0x41c3), (0x52e2, 0x47a6), (0x52e3, 0x5178), (0x52e4, 0x3b24), (0x52f3, 0x5c7a), (0x52f5, 0x3efb),
    (0x52f8, 0x3a8b), (0x52fa, 0x50aa), (0x52fb, 0x3b13), (0x52fe, 0x39e3), (0x52ff, 0x4275), (0x5305, 0x58e1),
    (0x5308, 0x5c9d), (0x530d, 0x58e2), (0x530f, 0x58e3), (0x5310, 0x441c), (0x5315, 0x44e9), (0x5316, 0x5b44),
    (0x5317, 0x44c8), (0x5319, 0x4930), (0x5320, 0x50c4), (0x5321, 0x39a9), (0x5323, 0x374c), (0x532a, 0x44ea),
    (0x532f, 0x5be6), (0x5339, 0x597e), (0x533f, 0x3cd8), (0x5340, 0x3a44), (0x5341, 0x49e1), (0x5343, 0x55cf),
    (0x5344, 0x5027), (0x5347, 0x4929), (0x5348, 0x4c60), (0x5349, 0x5c88), (0x534a, 0x42af), (0x534d, 0x4104),
    (0x5351, 0x44eb), (0x5352, 0x5310), (0x5353, 0x5786), (0x5354, 0x5a7d), (0x5357, 0x3c14), (0x535a, 0x429c),
    (0x535c, 0x441d), (0x535e, 0x43ef), (0x5360, 0x5222), (0x5366, 0x39b4), (0x5368, 0x471a), (0x536f, 0x41e5),
    (0x5370, 0x4ffd), (0x5371, 0x4e78), (0x5374, 0x36ac), (0x5375, 0x3ec7), (0x5377, 0x3a8c), (0x537d, 0x53cc),
    (0x537f, 0x3838), (0x5384, 0x4a31), (0x5393, 0x4a26), (0x5398, 0x406b), (0x539a, 0x5c6e), (0x539f, 0x4e58),
    (0x53a0, 0x5747), (0x53a5, 0x3a93), (0x53a6, 0x598c), (0x53ad, 0x4ba9), (0x53bb, 0x3786), (0x53c3, 0x552c),
    (0x53c8, 0x4dc0), (0x53c9, 0x5504), (0x53ca, 0x3b41), (0x53cb, 0x4dc1), (0x53cd, 0x42b0), (0x53d4, 0x488f),
    (0x53d6, 0x5737), (0x53d7, 0x47f3), (0x53db, 0x42b1), (0x53e1, 0x4c48), (0x53e2, 0x5696), (0x53e3, 0x3a45),
    (0x53e4, 0x38d6), (0x53e5, 0x3a46), (0x53e9, 0x38d7), (0x53ea, 0x53dd), (0x53eb, 0x3b04), (0x53ec, 0x47ae),
    (0x53ed, 0x58b4), (0x53ef, 0x3693), (0x53f0, 0x580e), (0x53f1, 0x5487), (0x53f2, 0x458d), (0x53f3, 0x4dc2),
    (0x53f8, 0x458e), (0x5403, 0x5ca5), (0x5404, 0x36ad), (0x5408, 0x59b9), (0x5409, 0x3bed), (0x540a, 0x5179),
    (0x540c, 0x3e2b), (0x540d, 0x41b2), (0x540e, 0x5c6f), (0x540f, 0x406c), (0x5410, 0x5821), (0x5411, 0x5a4b),
    (0x541b, 0x3a79), (0x541d, 0x4083), (0x541f, 0x4f4c), (0x5420, 0x58d6), (0x5426, 0x4443), (0x5429, 0x44ca),
    (0x542b, 0x59ae), (0x5433, 0x4c62), (0x5438, 0x5cac), (0x5439, 0x5738), (0x543b, 0x420b), (0x543c, 0x5c70),
    (0x543e, 0x4c61), (0x5442, 0x3efc), (0x5448, 0x5233), (0x544a, 0x38d8), (0x5451, 0x57f5), (0x5468, 0x5391),
    (0x546a, 0x5390), (0x5471, 0x38d9), (0x5473, 0x4278), (0x5475, 0x3694), (0x547b, 0x495d), (0x547c, 0x5b07),
    (0x547d, 0x41b3), (0x5480, 0x515f), (0x5486, 0x58e4), (0x548c, 0x5b45), (0x548e, 0x3a47), (0x5490, 0x4444),
    (0x54a4, 0x5778), (0x54a8, 0x5091), (0x54ab, 0x543e), (0x54ac, 0x39c6), (0x54b3, 0x5a33), (0x54b8, 0x59af),
    (0x54bd, 0x4fff), (0x54c0, 0x4a27), (0x54c1, 0x5970), (0x54c4, 0x5b3a), (0x54c8, 0x59ba), (0x54c9, 0x5148),
    (0x54e1, 0x4e59), (0x54e5, 0x3695), (0x54e8, 0x5613), (0x54ed, 0x38fd), (0x54ee, 0x5bff), (0x54f2, 0x55e2),
    (0x54fa, 0x58e5), (0x5504, 0x58b7), (0x5506, 0x458f), (0x5507, 0x5463), (0x550e, 0x406d), (0x5510, 0x3d6b),
    (0x551c, 0x4116), (0x552f, 0x4e93), (0x5531, 0x5538), (0x5535, 0x4a13), (0x553e, 0x5779), (0x5544, 0x5787),
    (0x5546, 0x4645), (0x554f, 0x420c), (0x5553, 0x385f), (0x5556, 0x3d55), (0x555e, 0x49e8), (0x5563, 0x59b0),
    (0x557c, 0x52c7), (0x5580, 0x377e), (0x5584, 0x46fd), (0x5586, 0x55e3), (0x5587, 0x3e53), (0x5589, 0x5c71),
    (0x558a, 0x59b1), (0x5598, 0x55d0), (0x5599, 0x5c89), (0x559a, 0x5bb9), (0x559c, 0x5cb3), (0x559d, 0x36cf),
    (0x55a7, 0x5c84), (0x55a9, 0x4e94), (0x55aa, 0x4646), (0x55ab, 0x3bf1), (0x55ac, 0x39c7), (0x55ae, 0x3d3f),
    (0x55c5, 0x5c72), (0x55c7, 0x4663), (0x55d4, 0x5464), (0x55da, 0x4c63), (0x55dc, 0x3b4f), (0x55df, 0x5505),
    (0x55e3, 0x4590), (0x55e4, 0x574d), (0x55fd, 0x47f4), (0x55fe, 0x5392), (0x5606, 0x57f6), (0x5609, 0x3696),
    (0x5614, 0x3a48), (0x5617, 0x4647), (0x562f, 0x47af), (0x5632, 0x52e0), (0x5634, 0x5739), (0x5636, 0x4931),
    (0x5653, 0x5a53), (0x5668, 0x3b50), (0x566b, 0x5cb4), (0x5674, 0x44cb), (0x5686, 0x5c00), (0x56a5, 0x4b74),
    (0x56ac, 0x4572), (0x56ae, 0x5a4c), (0x56b4, 0x4ae8), (0x56bc, 0x50ab), (0x56ca, 0x3c82), (0x56cd, 0x5cb5),
    (0x56d1, 0x568d), (0x56da, 0x47f5), (0x56db, 0x4591), (0x56de, 0x5be7), (0x56e0, 0x5000), (0x56f0, 0x3904),
    (0x56f9, 0x3f8c), (0x56fa, 0x38da), (0x5703, 0x58e6), (0x5704, 0x4acf), (0x5708, 0x3a8d), (0x570b, 0x3a73),
    (0x570d, 0x4e79), (0x5712, 0x4e5b), (0x5713, 0x4e5a), (0x5716, 0x3d8c), (0x5718, 0x3d40), (0x571f, 0x5822),
    (0x5728, 0x5149), (0x572d, 0x3b05), (0x5730, 0x543f), (0x573b, 0x3b51), (0x5740, 0x5440), (0x5742, 0x584b),
    (0x5747, 0x3b14), (0x574a, 0x4334), (0x574d, 0x3d56), (0x574e, 0x36d9), (0x5750, 0x5385), (0x5751, 0x3780),
    (0x5761, 0x583a), (0x5764, 0x3905), (0x5766, 0x57f7), (0x576a, 0x58d1), (0x576e, 0x3d78), (0x5770, 0x3839),
    (0x5775, 0x3a49), (0x577c, 0x5788), (0x5782, 0x47f6), (0x5788, 0x3d77), (0x578b, 0x5a8b), (0x5793, 0x5a34),
    (0x57a0, 0x4f44), (0x57a2, 0x3a4a), (0x57a3, 0x4e5c), (0x57c3, 0x4a28), (0x57c7, 0x4da8), (0x57c8, 0x53b7),
    (0x57cb, 0x4129), (0x57ce, 0x4733), (0x57df, 0x4b69), (0x57e0, 0x4445), (0x57f0, 0x554c), (0x57f4, 0x494b),
    (0x57f7, 0x5498), (0x57f9, 0x4351), (0x57fa, 0x3b52), (0x57fc, 0x3b53), (0x5800, 0x3a7f), (0x5802, 0x3d6c),
    (0x5805, 0x381a), (0x5806, 0x582b), (0x5808, 0x3753), (0x5809, 0x4f27), (0x580a, 0x49f7), (0x581e, 0x55f5),
    (0x5821, 0x440b), (0x5824, 0x52c8), (0x5827, 0x4b75), (0x582a, 0x36da), (0x582f, 0x4d1c), (0x5830, 0x4adf),
    (0x5831, 0x440c), (0x5834, 0x50c5), (0x5835, 0x3d8d), (0x583a, 0x3860), (0x584a, 0x39b9), (0x584b, 0x4c1e),
    (0x584f, 0x376e), (0x5851, 0x47b0), (0x5854, 0x5805), (0x5857, 0x3d8e), (0x5858, 0x3d6d), (0x585a, 0x5697),
    (0x585e, 0x4660), (0x5861, 0x5198), (0x5862, 0x4c64), (0x5864, 0x5c7b), (0x5875, 0x5465), (0x5879, 0x552d),
    (0x587c, 0x5199), (0x587e, 0x4890), (0x5883, 0x383a), (0x5885, 0x466d), (0x5889, 0x4da9), (0x5893, 0x41e6),
    (0x589c, 0x56a4), (0x589e, 0x53d1), (0x589f, 0x5a54), (0x58a8, 0x4207), (0x58a9, 0x3e1b), (0x58ae, 0x577a),
    (0x58b3, 0x44cc), (0x58ba, 0x4c65), (0x58bb, 0x50c6), (0x58be, 0x36b8), (0x58c1, 0x4385), (0x58c5, 0x4ce6),
    (0x58c7, 0x3d41), (0x58ce, 0x5c7c), (0x58d1, 0x5998), (0x58d3, 0x4a1b), (0x58d5, 0x5b08), (0x58d8, 0x4037),
    (0x58d9, 0x39aa), (0x58de, 0x39ba), (0x58df, 0x3fbb), (0x58e4, 0x4ab4), (0x58eb, 0x4592), (0x58ec, 0x501c),
    (0x58ef, 0x50c7), (0x58f9, 0x5015), (0x58fa, 0x5b09), (0x58fb, 0x466e), (0x58fd, 0x47f7), (0x590f, 0x598d),
    (0x5914, 0x3b54), (0x5915, 0x46eb), (0x5916, 0x4d13), (0x5919, 0x4891), (0x591a, 0x3cda), (0x591c, 0x4a9f),
    (0x5922, 0x41e2), (0x5927, 0x3d79), (0x5929, 0x55d1), (0x592a, 0x580f), (0x592b, 0x4446), (0x592d, 0x4d1d),
    (0x592e, 0x4a20), (0x5931, 0x4972), (0x5937, 0x4fd1), (0x593e, 0x5a7e), (0x5944, 0x4ae9), (0x5947, 0x3b55),
    (0x5948, 0x3c8c), (0x5949, 0x442e), (0x594e, 0x3b06), (0x594f, 0x5393), (0x5950, 0x5bba), (0x5951, 0x3861),
    (0x5954, 0x44cd), (0x5955, 0x5a5e), (0x5957, 0x5832), (0x595a, 0x5a35), (0x5960, 0x519a), (0x5962, 0x4593),
    (0x5967, 0x4c66), (0x596a, 0x57ff), (0x596b, 0x4f2f), (0x596c, 0x50c8), (0x596d, 0x46ec), (0x596e, 0x44ce),
    (0x5973, 0x3c90), (0x5974, 0x3c9c), (0x5978, 0x36b9), (0x597d, 0x5b0a), (0x5982, 0x4af4), (0x5983, 0x44ec),
    (0x5984, 0x411e), (0x598a, 0x501d), (0x5993, 0x3b56), (0x5996, 0x4d1e), (0x5997, 0x3b33), (0x5999, 0x41e7),
    (0x59a5, 0x577b), (0x59a8, 0x4335), (0x59ac, 0x5833), (0x59b9, 0x412a), (0x59bb, 0x55bc), (0x59be, 0x55f6),
    (0x59c3, 0x5234), (0x59c6, 0x41c4), (0x59c9, 0x5092), (0x59cb, 0x4932), (0x59d0, 0x5160), (0x59d1, 0x38db),
    (0x59d3, 0x4734), (0x59d4, 0x4e7a), (0x59d9, 0x501e), (0x59da, 0x4d1f), (0x59dc, 0x3754), (0x59dd, 0x538e),
    (0x59e6, 0x36ba), (0x59e8, 0x4fd2), (0x59ea, 0x5488), (0x59ec, 0x5cb6), (0x59ee, 0x59c2), (0x59f8, 0x4b76),
    (0x59fb, 0x5001), (0x59ff, 0x5093), (0x5a01, 0x4e7b), (0x5a03, 0x4d10), (0x5a11, 0x4594), (0x5a18, 0x3c83),
    (0x5a1b, 0x4c67), (0x5a1c, 0x3bf5), (0x5a1f, 0x4b77), (0x5a20, 0x495e), (0x5a25, 0x49e9), (0x5a29, 0x4105),
    (0x5a36, 0x573a), (0x5a3c, 0x5539), (0x5a41, 0x4038), (0x5a46, 0x583b), (0x5a49, 0x4cf7), (0x5a5a, 0x5b31),
    (0x5a62, 0x44ed), (0x5a66, 0x4447), (0x5a92, 0x412b), (0x5a9a, 0x4279), (0x5a9b, 0x4e5d), (0x5aa4, 0x4933),
    (0x5ac1, 0x3697), (0x5ac2, 0x47f8), (0x5ac4, 0x4e5e), (0x5ac9, 0x5489), (0x5acc, 0x5a7b), (0x5ae1, 0x517a),
    (0x5ae6, 0x59c3), (0x5ae9, 0x3cc9), (0x5b05, 0x5b46), (0x5b09, 0x5cb7), (0x5b0b, 0x46fe), (0x5b0c, 0x39c8),
    (0x5b16, 0x58d7), (0x5b2a, 0x4573), (0x5b40, 0x4648), (0x5b43, 0x4ab5), (0x5b50, 0x5094), (0x5b51, 0x5a77),
    (0x5b54, 0x3915), (0x5b55, 0x508d), (0x5b57, 0x5095), (0x5b58, 0x530e), (0x5b5a, 0x44a8), (0x5b5c, 0x5096),
    (0x5b5d, 0x5c01), (0x5b5f, 0x413c), (0x5b63, 0x3862), (0x5b64, 0x38dc), (0x5b69, 0x5a36), (0x5b6b, 0x47dc),
    (0x5b70, 0x4892), (0x5b71, 0x50b6), (0x5b75, 0x44a9), (0x5b78, 0x5999), (0x5b7a, 0x4e95), (0x5b7c, 0x4ae4),
    (0x5b85, 0x3d86), (0x5b87, 0x4dc3), (0x5b88, 0x47f9), (0x5b89, 0x4a05), (0x5b8b, 0x47e3), (0x5b8c, 0x4cf8),
    (0x5b8f, 0x39c0), (0x5b93, 0x441e), (0x5b95, 0x5808), (0x5b96, 0x5bfc), (0x5b97, 0x5314), (0x5b98, 0x3994),
    (0x5b99, 0x5394), (0x5b9a, 0x5235), (0x5b9b, 0x4cf9), (0x5b9c, 0x4f5c), (0x5ba2, 0x377f), (0x5ba3, 0x46ff),
    (0x5ba4, 0x4973), (0x5ba5, 0x4e96), (0x5ba6, 0x5bbb), (0x5bac, 0x4735), (0x5bae, 0x3a83), (0x5bb0, 0x514a),
    (0x5bb3, 0x5a37), (0x5bb4, 0x4b78), (0x5bb5, 0x47b1), (0x5bb6, 0x3698), (0x5bb8, 0x495f), (0x5bb9, 0x4daa),
    (0x5bbf, 0x4893), (0x5bc0, 0x554d), (0x5bc2, 0x517b), (0x5bc3, 0x4e5f), (0x5bc4, 0x3b57), (0x5bc5, 0x5002),
    (0x5bc6, 0x4298), (0x5bc7, 0x3a4b), (0x5bcc, 0x44aa), (0x5bd0, 0x412c), (0x5bd2, 0x599d), (0x5bd3, 0x4dc4),
    (0x5bd4, 0x494c), (0x5bd7, 0x3c99), (0x5bde, 0x40fd), (0x5bdf, 0x5527), (0x5be1, 0x3922), (0x5be2, 0x576b),
    (0x5be4, 0x4c68), (0x5be5, 0x4d20), (0x5be6, 0x4974), (0x5be7, 0x3c98), (0x5be8, 0x554e), (0x5be9, 0x4976),
    (0x5beb, 0x4595), (0x5bec, 0x3995), (0x5bee, 0x3fcc), (0x5bef, 0x53b8), (0x5bf5, 0x5698), (0x5bf6, 0x440d),
    (0x5bf8, 0x5692), (0x5bfa, 0x4596), (0x5c01, 0x442f), (0x5c04, 0x4597), (0x5c07, 0x50c9), (0x5c08, 0x519b),
    (0x5c09, 0x4e7c), (0x5c0a, 0x530f), (0x5c0b, 0x4977), (0x5c0d, 0x3d7a), (0x5c0e, 0x3d8f), (0x5c0f, 0x47b2),
    (0x5c11, 0x47b3), (0x5c16, 0x55ec), (0x5c19, 0x4649), (0x5c24, 0x4dc5), (0x5c28, 0x4336), (0x5c31, 0x573b),
    (0x5c38, 0x4934), (0x5c39, 0x4f30), (0x5c3a, 0x55c2), (0x5c3b, 0x38dd), (0x5c3c, 0x3cd6), (0x5c3e, 0x427a),
    (0x5c3f, 0x3cc0), (0x5c40, 0x3a74), (0x5c45, 0x3787), (0x5c46, 0x3863), (0x5c48, 0x3a80), (0x5c4b, 0x4cda),
    (0x5c4d, 0x4936), (0x5c4e, 0x4935), (0x5c51, 0x471b), (0x5c55, 0x519c), (0x5c5b, 0x43fc), (0x5c60, 0x3d90),
    (0x5c62, 0x4039), (0x5c64, 0x574a), (0x5c65, 0x406e), (0x5c6c, 0x47d4), (0x5c6f, 0x3e43), (0x5c71, 0x4626),
    (0x5c79, 0x5ca6), (0x5c90, 0x3b58), (0x5c91, 0x50bb), (0x5ca1, 0x3755), (0x5ca9, 0x4a14), (0x5cab, 0x47fa),
    (0x5cac, 0x374d), (0x5cb1, 0x3d7b), (0x5cb3, 0x49f8), (0x5cb5, 0x5b0b), (0x5cb7, 0x428b), (0x5cb8, 0x4a06),
    (0x5cba, 0x3f8e), (0x5cbe, 0x5223), (0x5cc0, 0x47fb), (0x5cd9, 0x574e), (0x5ce0, 0x464a), (0x5ce8, 0x49ea),
    (0x5cef, 0x4430), (0x5cf0, 0x4431), (0x5cf4, 0x5a63), (0x5cf6, 0x3d91), (0x5cfb, 0x53b9), (0x5cfd, 0x5a7f),
    (0x5d07, 0x48ba), (0x5d0d, 0x3ee6), (0x5d0e, 0x3b59), (0x5d11, 0x3906), (0x5d14, 0x56a2), (0x5d16, 0x4a29),
    (0x5d17, 0x3756), (0x5d19, 0x4057), (0x5d27, 0x48bb), (0x5d29, 0x44e1), (0x5d4b, 0x427b), (0x5d4c, 0x36db),
    (0x5d50, 0x3ed0), (0x5d69, 0x491c), (0x5d6c, 0x4d14), (0x5d6f, 0x5506), (0x5d87, 0x3a4c), (0x5d8b, 0x3d92),
    (0x5d9d, 0x3e4a), (0x5da0, 0x39c9), (0x5da2, 0x4d23), (0x5daa, 0x4aec), (0x5db8, 0x4c21), (0x5dba, 0x3f8f),
    (0x5dbc, 0x466f), (0x5dbd, 0x49f9), (0x5dcd, 0x4d15), (0x5dd2, 0x4106), (0x5dd6, 0x4a15), (0x5ddd, 0x55d2),
    (0x5dde, 0x5395), (0x5de1, 0x489b), (0x5de2, 0x47b4), (0x5de5, 0x3916), (0x5de6, 0x5386), (0x5de7, 0x39ca),
    (0x5de8, 0x3788), (0x5deb, 0x41f2), (0x5dee, 0x5507), (0x5df1, 0x3b5a), (0x5df2, 0x4fd4), (0x5df3, 0x4598),
    (0x5df4, 0x583c), (0x5df7, 0x59c4), (0x5dfd, 0x47dd), (0x5dfe, 0x3799), (0x5e02, 0x4937), (0x5e03, 0x58e7),
    (0x5e06, 0x4379), (0x5e0c, 0x5cb8), (0x5e11, 0x5809), (0x5e16, 0x55f7), (0x5e19, 0x548a), (0x5e1b, 0x4364),
    (0x5e1d, 0x52c9), (0x5e25, 0x47fc), (0x5e2b, 0x4599), (0x5e2d, 0x46ed), (0x5e33, 0x50ca), (0x5e36, 0x3d7c),
    (0x5e38, 0x464b), (0x5e3d, 0x41c5), (0x5e3f, 0x5c73), (0x5e40, 0x5236), (0x5e44, 0x49fa), (0x5e45, 0x58fc),
    (0x5e47, 0x4337), (0x5e4c, 0x5bcf), (0x5e55, 0x40fe), (0x5e5f, 0x574f), (0x5e61, 0x436a), (0x5e62, 0x3d6e),
    (0x5e63, 0x58d8), (0x5e72, 0x36bb), (0x5e73, 0x58d2), (0x5e74, 0x3c91), (0x5e77, 0x43fd), (0x5e78, 0x5a46),
    (0x5e79, 0x36bc), (0x5e7b, 0x5bbc), (0x5e7c, 0x4e97), (0x5e7d, 0x4e98), (0x5e7e, 0x3b5b), (0x5e84, 0x50cb),
    (0x5e87, 0x44ee), (0x5e8a, 0x464c), (0x5e8f, 0x4670), (0x5e95, 0x5161), (0x5e97, 0x5224), (0x5e9a, 0x383b),
    (0x5e9c, 0x44ab), (0x5ea0, 0x464d), (0x5ea6, 0x3d93), (0x5ea7, 0x5387), (0x5eab, 0x38de), (0x5ead, 0x5237),
    (0x5eb5, 0x4a16), (0x5eb6, 0x4671), (0x5eb7, 0x3757), (0x5eb8, 0x4dab), (0x5ebe, 0x4e99), (0x5ec2, 0x464e),
    (0x5ec8, 0x598e), (0x5ec9, 0x3f84), (0x5eca, 0x3edd), (0x5ed0, 0x3a4d), (0x5ed3, 0x398e), (0x5ed6, 0x3fcd),
    (0x5eda, 0x5396), (0x5edb, 0x519d), (0x5edf, 0x41e8), (0x5ee0, 0x553a), (0x5ee2, 0x58d9), (0x5ee3, 0x39ab),
    (0x5eec, 0x3efd), (0x5ef3, 0x55ff), (0x5ef6, 0x4b7a), (0x5ef7, 0x5238), (0x5efa, 0x379a), (0x5efb, 0x5be8),
    (0x5f01, 0x43f0), (0x5f04, 0x3fbc), (0x5f0a, 0x58da), (0x5f0f, 0x494d), (0x5f11, 0x4938), (0x5f13, 0x3a84),
    (0x5f14, 0x52e1), (0x5f15, 0x5003), (0x5f17, 0x44de), (0x5f18, 0x5b3b), (0x5f1b, 0x4fd5), (0x5f1f, 0x52ca),
    (0x5f26, 0x5a64), (0x5f27, 0x5b0c), (0x5f29, 0x3c9d), (0x5f31, 0x4aa7), (0x5f35, 0x50cc), (0x5f3a, 0x3758),
    (0x5f3c, 0x597f), (0x5f48, 0x57f8), (0x5f4a, 0x3759), (0x5f4c, 0x427c), (0x5f4e, 0x4107), (0x5f56, 0x3d42),
    (0x5f57, 0x5afd), (0x5f59, 0x5c8b), (0x5f5b, 0x4fd6), (0x5f62, 0x5aec), (0x5f66, 0x4ae0), (0x5f67, 0x4ddd),
    (0x5f69, 0x554f), (0x5f6a, 0x5904), (0x5f6b, 0x52e2), (0x5f6c, 0x4574), (0x5f6d, 0x58c1), (0x5f70, 0x553b),
    (0x5f71, 0x4c22), (0x5f77, 0x4338), (0x5f79, 0x4b6a), (0x5f7c, 0x5977), (0x5f7f, 0x44df), (0x5f80, 0x4d0a),
    (0x5f81, 0x5239), (0x5f85, 0x3d7d), (0x5f87, 0x489c), (0x5f8a, 0x5be9), (0x5f8b, 0x405b), (0x5f8c, 0x5c74),
    (0x5f90, 0x4672), (0x5f91, 0x383c), (0x5f92, 0x3d94), (0x5f97, 0x3e49), (0x5f98, 0x4352), (0x5f99, 0x459a),
    (0x5f9e, 0x5315), (0x5fa0, 0x3ee7), (0x5fa1, 0x4ad0), (0x5fa8, 0x5bd0), (0x5fa9, 0x441f), (0x5faa, 0x489d),
    (0x5fae, 0x427d), (0x5fb5, 0x54fe), (0x5fb7, 0x3d87), (0x5fb9, 0x55e4), (0x5fbd, 0x5c8c), (0x5fc3, 0x4978),
    (0x5fc5, 0x5980), (0x5fcc, 0x3b5c), (0x5fcd, 0x5004), (0x5fd6, 0x5693), (0x5fd7, 0x5441), (0x5fd8, 0x411f),
    (0x5fd9, 0x4120), (0x5fe0, 0x56ce), (0x5feb, 0x5776), (0x5ff5, 0x3c94), (0x5ffd, 0x5b37), (0x5fff, 0x44cf),
    (0x600f, 0x4a21), (0x6012, 0x3c9e), (0x6016, 0x58e8), (0x601c, 0x3f90), (0x601d, 0x459b), (0x6020, 0x5810),
    (0x6021, 0x4fd7), (0x6025, 0x3b42), (0x6027, 0x4736), (0x6028, 0x4e60), (0x602a, 0x39bb), (0x602f, 0x380e),
    (0x6041, 0x501f), (0x6042, 0x489e), (0x6043, 0x4939), (0x604d, 0x5bd1), (0x6050, 0x3917), (0x6052, 0x59c5),
    (0x6055, 0x4673), (0x6059, 0x4ab6), (0x605d, 0x39a4), (0x6062, 0x5bea), (0x6063, 0x5097), (0x6064, 0x5c98),
    (0x6065, 0x5750), (0x6068, 0x599e), (0x6069, 0x4f45), (0x606a, 0x36ae), (0x606c, 0x3c95), (0x606d, 0x3918),
    (0x606f, 0x494e), (0x6070, 0x5cad), (0x6085, 0x4ba2), (0x6089, 0x4975), (0x608c, 0x52cb), (0x608d, 0x599f),
    (0x6094, 0x5beb), (0x6096, 0x58b8), (0x609a, 0x47e4), (0x609b, 0x519e), (0x609f, 0x4c69), (0x60a0, 0x4e9a),
    (0x60a3, 0x5bbd), (0x60a4, 0x5699), (0x60a7, 0x406f), (0x60b0, 0x5316), (0x60b2, 0x44ef), (0x60b3, 0x3d88),
    (0x60b4, 0x56d3), (0x60b6, 0x428c), (0x60b8, 0x3864), (0x60bc, 0x3d95), (0x60bd, 0x55bd), (0x60c5, 0x523a),
    (0x60c7, 0x3e1c), (0x60d1, 0x5b2e), (0x60da, 0x5b38), (0x60dc, 0x46ee), (0x60df, 0x4e9b), (0x60e0, 0x5afe),
    (0x60e1, 0x49fb), (0x60f0, 0x577c), (0x60f1, 0x3cba), (0x60f3, 0x464f), (0x60f6, 0x5bd2), (0x60f9, 0x4aa0),
    (0x60fa, 0x4737), (0x60fb, 0x5748), (0x6101, 0x47fd), (0x6106, 0x379b), (0x6108, 0x4e9c), (0x6109, 0x4e9d),
    (0x610d, 0x428d), (0x610e, 0x58c5), (0x610f, 0x4f5d), (0x6115, 0x49fc), (0x611a, 0x4dc6), (0x611b, 0x4a2a),
    (0x611f, 0x36dc), (0x6127, 0x39bc), (0x6130, 0x5bd3), (0x6134, 0x553c), (0x6137, 0x376f), (0x613c, 0x4960),
    (0x613e, 0x3770), (0x613f, 0x4e61), (0x6142, 0x4dac), (0x6144, 0x405c), (0x6147, 0x4f46), (0x6148, 0x5098),
    (0x614a, 0x382c), (0x614b, 0x5811), (0x614c, 0x5bd4), (0x6153, 0x5905), (0x6155, 0x41c6), (0x6158, 0x552e),
    (0x6159, 0x552f), (0x615d, 0x5837), (0x615f, 0x5824), (0x6162, 0x4108), (0x6163, 0x3996), (0x6164, 0x36af),
    (0x6167, 0x5aff), (0x6168, 0x3771), (0x616b, 0x5317), (0x616e, 0x3efe), (0x6170, 0x4e7d), (0x6176, 0x383d),
    (0x6177, 0x375a), (0x617d, 0x55c3), (0x617e, 0x4d9e), (0x6181, 0x569a), (0x6182, 0x4dc7), (0x618a, 0x44f0),
    (0x618e, 0x53d2), (0x6190, 0x3f12), (0x6191, 0x4580), (0x6194, 0x5614), (0x6198, 0x5cba), (0x6199, 0x5cb9),
    (0x619a, 0x57f9), (0x61a4, 0x44d0), (0x61a7, 0x3e2c), (0x61a9, 0x3811), (0x61ab, 0x428e), (0x61ac, 0x383e),
    (0x61ae, 0x41f3), (0x61b2, 0x5a57), (0x61b6, 0x4ada), (0x61ba, 0x3d57), (0x61be, 0x36dd), (0x61c3, 0x3b25),
    (0x61c7, 0x36bd), (0x61c8, 0x5a38), (0x61c9, 0x4f56), (0x61ca, 0x4c6b), (0x61cb, 0x41f4), (0x61e6, 0x3bf6),
    (0x61f2, 0x54ff), (0x61f6, 0x3e54), (0x61f7, 0x5bec), (0x61f8, 0x5a65), (0x61fa, 0x5530), (0x61fc, 0x3a4e),
    (0x61ff, 0x4f5e), (0x6200, 0x3f13), (0x6207, 0x3d6f), (0x6208, 0x3923), (0x620a, 0x41f5), (0x620c, 0x48b6),
    (0x620d, 0x485e), (0x620e, 0x4f3f), (0x6210, 0x4738), (0x6211, 0x49eb), (0x6212, 0x3865), (0x6216, 0x5b2f),
    (0x621a, 0x55c4), (0x621f, 0x3b1e), (0x6221, 0x36de), (0x622a, 0x521b), (0x622e, 0x4053), (0x6230, 0x519f),
    (0x6231, 0x5cbb), (0x6234, 0x3d7e), (0x6236, 0x5b0d), (0x623e, 0x3eff), (0x623f, 0x4339), (0x6240, 0x47b5),
    (0x6241, 0x58c8), (0x6247, 0x4700), (0x6248, 0x5b0e), (0x6249, 0x44f1), (0x624b, 0x485f), (0x624d, 0x514b),
    (0x6253, 0x577d), (0x6258, 0x578a), (0x626e, 0x44d1), (0x6271, 0x3b43), (0x6276, 0x44ad), (0x6279, 0x44f2),
    (0x627c, 0x4a32), (0x627f, 0x492a), (0x6280, 0x3b5d), (0x6284, 0x5615), (0x6289, 0x3825), (0x628a, 0x583d),
    (0x6291, 0x4adb), (0x6292, 0x4674), (0x6295, 0x5834), (0x6297, 0x59c6), (0x6298, 0x521c), (0x629b, 0x58e9),
    (0x62ab, 0x5978), (0x62b1, 0x58ea), (0x62b5, 0x5162), (0x62b9, 0x4117), (0x62bc, 0x4a1c), (0x62bd, 0x56a5),
    (0x62c2, 0x44e0), (0x62c7, 0x41f6), (0x62c8, 0x3c96), (0x62c9, 0x3eda), (0x62cc, 0x42b2), (0x62cd, 0x429d),
    (0x62cf, 0x3bf8), (0x62d0, 0x39bd), (0x62d2, 0x3789), (0x62d3, 0x55c5), (0x62d4, 0x42c8), (0x62d6, 0x577e),
    (0x62d7, 0x4d24), (0x62d8, 0x3a4f), (0x62d9, 0x5311), (0x62db, 0x5616), (0x62dc, 0x4353), (0x62ec, 0x39a5),
    (0x62ed, 0x494f), (0x62ee, 0x3bee), (0x62ef, 0x53d4), (0x62f1, 0x3919), (0x62f3, 0x3a8e), (0x62f7, 0x38df),
    (0x62fe, 0x4921), (0x62ff, 0x3bf9), (0x6301, 0x5442), (0x6307, 0x5443), (0x6309, 0x4a07), (0x6311, 0x3d96),
    (0x632b, 0x5388), (0x632f, 0x5466), (0x633a, 0x523b), (0x633b, 0x4b7e), (0x633d, 0x4109), (0x633e, 0x5a80),
    (0x6349, 0x5510), (0x634c, 0x58b5), (0x634f, 0x3c12), (0x6350, 0x4b7d), (0x6355, 0x58eb), (0x6367, 0x4432),
    (0x6368, 0x459c), (0x636e, 0x378a), (0x6372, 0x3a8f), (0x6377, 0x55f8), (0x637a, 0x3c13), (0x637b, 0x3c97),
    (0x637f, 0x4675), (0x6383, 0x47b6), (0x6388, 0x4860), (0x6389, 0x3d97), (0x638c, 0x50cd), (0x6392, 0x4354),
    (0x6396, 0x4a33), (0x6398, 0x3a81), (0x639b, 0x39b5), (0x63a0, 0x3eea), (0x63a1, 0x5550), (0x63a2, 0x5801),
    (0x63a5, 0x522b), (0x63a7, 0x391a), (0x63a8, 0x56a6), (0x63a9, 0x4aea), (0x63aa, 0x52e3), (0x63c0, 0x36be),
    (0x63c4, 0x4e9e), (0x63c6, 0x3b07), (0x63cf, 0x41e9), (0x63d0, 0x52cc), (0x63d6, 0x4f52), (0x63da, 0x4ab7),
    (0x63db, 0x5bbe), (0x63e1, 0x49fd), (0x63ed, 0x3812), (0x63ee, 0x5c8d), (0x63f4, 0x4e62), (0x63f6, 0x4aa1),
    (0x63f7, 0x463d), (0x640d, 0x47de), (0x640f, 0x429e), (0x6414, 0x47b7), (0x6416, 0x4d25), (0x6417, 0x3d98),
    (0x641c, 0x4861), (0x6422, 0x5467), (0x642c, 0x42b3), (0x642d, 0x5806), (0x643a, 0x5c94), (0x643e, 0x5511),
    (0x6458, 0x517c), (0x6460, 0x569b), (0x6469, 0x40f5), (0x646f, 0x5444), (0x6478, 0x41c7), (0x6479, 0x41c8),
    (0x647a, 0x522c), (0x6488, 0x3fa3), (0x6491, 0x581e), (0x6492, 0x4631), (0x6493, 0x4d26), (0x649a, 0x3c92),
    (0x649e, 0x3d70), (0x64a4, 0x55e5), (0x64a5, 0x42c9), (0x64ab, 0x41f7), (0x64ad, 0x583e), (0x64ae, 0x56a0),
    (0x64b0, 0x5517), (0x64b2, 0x429f), (0x64bb, 0x3d50), (0x64c1, 0x4ce7), (0x64c4, 0x3fa4), (0x64c5, 0x55d3),
    (0x64c7, 0x581c), (0x64ca, 0x3813), (0x64cd, 0x52e4), (0x64ce, 0x383f), (0x64d2, 0x3b34), (0x64d4, 0x3d58),
    (0x64d8, 0x4386), (0x64da, 0x378b), (0x64e1, 0x3d7f), (0x64e2, 0x578c), (0x64e5, 0x3ed1), (0x64e6, 0x5528),
    (0x64e7, 0x378c), (0x64ec, 0x4f5f), (0x64f2, 0x55c6), (0x64f4, 0x5bb3), (0x64fa, 0x583f), (0x64fe, 0x4d27),
    (0x6500, 0x42b4), (0x6504, 0x581f), (0x6518, 0x4ab8), (0x651d, 0x472f), (0x6523, 0x3f14), (0x652a, 0x39cb),
    (0x652b, 0x5bb4), (0x652c, 0x3ed2), (0x652f, 0x5445), (0x6536, 0x4862), (0x6537, 0x38e0), (0x6538, 0x4e9f),
    (0x6539, 0x3772), (0x653b, 0x391b), (0x653e, 0x433a), (0x653f, 0x523c), (0x6545, 0x38e1), (0x6548, 0x5c02),
    (0x654d, 0x4676), (0x654e, 0x39cc), (0x654f, 0x428f), (0x6551, 0x3a50), (0x6556, 0x4c6c), (0x6557, 0x58b9),
    (0x655e, 0x553d), (0x6562, 0x36df), (0x6563, 0x4627), (0x6566, 0x3e1d), (0x656c, 0x3840), (0x656d, 0x4ab9),
    (0x6572, 0x38e2), (0x6574, 0x523d), (0x6575, 0x517d), (0x6577, 0x44ae), (0x6578, 0x4863), (0x657e, 0x4701),
    (0x6582, 0x3f85), (0x6583, 0x58db), (0x6585, 0x5c03), (0x6587, 0x420d), (0x658c, 0x4575), (0x6590, 0x44f3),
    (0x6591, 0x42b5), (0x6597, 0x3e39), (0x6599, 0x3fce), (0x659b, 0x38fe), (0x659c, 0x459d), (0x659f, 0x5495),
    (0x65a1, 0x4a0f), (0x65a4, 0x3b26), (0x65a5, 0x55c7), (0x65a7, 0x44af), (0x65ab, 0x50ac), (0x65ac, 0x5531),
    (0x65af, 0x459e), (0x65b0, 0x4961), (0x65b7, 0x3d43), (0x65b9, 0x433b), (0x65bc, 0x4ad1), (0x65bd, 0x493a),
    (0x65c1, 0x433c), (0x65c5, 0x3f00), (0x65cb, 0x4702), (0x65cc, 0x523e), (0x65cf, 0x530a), (0x65d2, 0x4045),
    (0x65d7, 0x3b5e), (0x65e0, 0x41f8), (0x65e3, 0x3b5f), (0x65e5, 0x5016), (0x65e6, 0x3d44), (0x65e8, 0x5446),
    (0x65e9, 0x52e5), (0x65ec, 0x489f), (0x65ed, 0x4dde), (0x65f1, 0x59a0), (0x65f4, 0x4dc8), (0x65fa, 0x4d0b),
    (0x65fb, 0x4290), (0x65fc, 0x4291), (0x65fd, 0x3e1e), (0x65ff, 0x4c6d), (0x6606, 0x3907), (0x6607, 0x492b),
    (0x6609, 0x433d), (0x660a, 0x5b0f), (0x660c, 0x553e), (0x660e, 0x41b4), (0x660f, 0x5b32), (0x6610, 0x44d2),
    (0x6611, 0x3b35), (0x6613, 0x4b6b), (0x6614, 0x46ef), (0x6615, 0x5ca1), (0x661e, 0x43fe), (0x661f, 0x4739),
    (0x6620, 0x4c24), (0x6625, 0x56c7), (0x6627, 0x412d), (0x6628, 0x50ad), (0x662d, 0x47b8), (0x662f, 0x493b),
    (0x6630, 0x598f), (0x6631, 0x4ddf), (0x6634, 0x41ea), (0x6636, 0x553f), (0x663a, 0x43ff), (0x663b, 0x4a22),
    (0x6641, 0x52e6), (0x6642, 0x493c), (0x6643, 0x5bd5), (0x6644, 0x5bd6), (0x6649, 0x5468), (0x664b, 0x5469),
    (0x664f, 0x4a08), (0x6659, 0x53ba), (0x665b, 0x5a66), (0x665d, 0x5397), (0x665e, 0x5cbc), (0x665f, 0x473a),
    (0x6664, 0x4c6e), (0x6665, 0x5bc0), (0x6666, 0x5bed), (0x6667, 0x5b10), (0x6668, 0x4962), (0x6669, 0x410a),
    (0x666b, 0x578d), (0x666e, 0x440e), (0x666f, 0x3841), (0x6673, 0x46f0), (0x6674, 0x5600), (0x6676, 0x523f),
    (0x6677, 0x3a9f), (0x6678, 0x5240), (0x667a, 0x5447), (0x6684, 0x5c85), (0x6687, 0x3699), (0x6688, 0x5c82),
    (0x6689, 0x5c8e), (0x668e, 0x4c25), (0x6690, 0x4e7e), (0x6691, 0x4677), (0x6696, 0x3c0b), (0x6697, 0x4a17),
    (0x6698, 0x4aba), (0x669d, 0x41b5), (0x66a0, 0x38e3), (0x66a2, 0x5540), (0x66ab, 0x50bc), (0x66ae, 0x41c9),
    (0x66b2, 0x50ce), (0x66b3, 0x5b00), (0x66b4, 0x58fd), (0x66b9, 0x4728), (0x66bb, 0x3842), (0x66be, 0x3e1f),
    (0x66c4, 0x4c18), (0x66c6, 0x3f0c), (0x66c7, 0x3d59), (0x66c9, 0x5c04), (0x66d6, 0x4a2b), (0x66d9, 0x4678),
    (0x66dc, 0x4d29), (0x66dd, 0x58fe), (0x66e0, 0x39ac), (0x66e6, 0x5cbd), (0x66f0, 0x4d09), (0x66f2, 0x38ff),
    (0x66f3, 0x4c49), (0x66f4, 0x3843), (0x66f7, 0x36d0), (0x66f8, 0x4679), (0x66f9, 0x52e8), (0x66fa, 0x52e7),
    (0x66fc, 0x410b), (0x66fe, 0x53d3), (0x66ff, 0x5609), (0x6700, 0x56a3), (0x6703, 0x5bee), (0x6708, 0x4e72),
    (0x6709, 0x4ea0), (0x670b, 0x44e2), (0x670d, 0x4420), (0x6714, 0x45c2), (0x6715, 0x5496), (0x6717, 0x3ede),
    (0x671b, 0x4121), (0x671d, 0x52e9), (0x671e, 0x3bc0), (0x671f, 0x3bc1), (0x6726, 0x41e3), (0x6727, 0x3fbd),
    (0x6728, 0x41d9), (0x672a, 0x427e), (0x672b, 0x4118), (0x672c, 0x442b), (0x672d, 0x5529), (0x672e, 0x56cb),
    (0x6731, 0x5398), (0x6734, 0x42a0), (0x6736, 0x577f), (0x673a, 0x3a98), (0x673d, 0x5c75), (0x6746, 0x36bf),
    (0x6749, 0x4637), (0x674e, 0x4070), (0x674f, 0x5a47), (0x6750, 0x514c), (0x6751, 0x5694), (0x6753, 0x5906),
    (0x6756, 0x50cf), (0x675c, 0x3e3a), (0x675e, 0x3bc2), (0x675f, 0x47d5), (0x676d, 0x59c7), (0x676f, 0x4355),
    (0x6770, 0x37a4), (0x6771, 0x3e2d), (0x6773, 0x41eb), (0x6775, 0x5163), (0x6777, 0x5840), (0x677b, 0x3ccb),
    (0x677e, 0x47e5), (0x677f, 0x584c), (0x6787, 0x44f4), (0x6789, 0x4d0c), (0x678b, 0x433e), (0x678f, 0x3c16),
    (0x6790, 0x46f1), (0x6793, 0x3e3b), (0x6795, 0x576c), (0x6797, 0x408c), (0x679a, 0x412e), (0x679c, 0x3924),
    (0x679d, 0x5448), (0x67af, 0x38e4), (0x67b0, 0x58d3), (0x67b3, 0x5449), (0x67b6, 0x369a), (0x67b7, 0x369b),
    (0x67b8, 0x3a51), (0x67be, 0x493d), (0x67c4, 0x4400), (0x67cf, 0x4365), (0x67d0, 0x41ca), (0x67d1, 0x36e0),
    (0x67d2, 0x5768), (0x67d3, 0x4bad), (0x67d4, 0x4ea2), (0x67da, 0x4ea3), (0x67dd, 0x578e), (0x67e9, 0x3a52),
    (0x67ec, 0x36c0), (0x67ef, 0x369c), (0x67f0, 0x3c8d), (0x67f1, 0x5399), (0x67f3, 0x4046), (0x67f4, 0x493e),
    (0x67f5, 0x5558), (0x67f6, 0x459f), (0x67fb, 0x45a0), (0x67fe, 0x5241), (0x6812, 0x48a0), (0x6813, 0x51a0),
    (0x6816, 0x467a), (0x6817, 0x405d), (0x6821, 0x39cd), (0x6822, 0x4366), (0x682a, 0x539a), (0x682f, 0x4de0),
    (0x6838, 0x5a44), (0x6839, 0x3b27), (0x683c, 0x3814), (0x683d, 0x514d), (0x6840, 0x37a5), (0x6841, 0x59c8),
    (0x6842, 0x3866), (0x6843, 0x3d99), (0x6848, 0x4a09), (0x684e, 0x548b), (0x6850, 0x3e2e), (0x6851, 0x4650),
    (0x6853, 0x5bc1), (0x6854, 0x3bef), (0x686d, 0x546a), (0x6876, 0x5825), (0x687f, 0x36c1), (0x6881, 0x3ef0),
    (0x6885, 0x412f), (0x688f, 0x3900), (0x6893, 0x514e), (0x6894, 0x5751), (0x6897, 0x3844), (0x689d, 0x52ea),
    (0x689f, 0x5c05), (0x68a1, 0x4cfa), (0x68a2, 0x5617), (0x68a7, 0x4c6f), (0x68a8, 0x4071), (0x68ad, 0x45a1),
    (0x68af, 0x52cd), (0x68b0, 0x3867), (0x68b1, 0x3908), (0x68b3, 0x47b9), (0x68b5, 0x437a), (0x68b6, 0x427f),
    (0x68c4, 0x3bc4), (0x68c5, 0x4401), (0x68c9, 0x4147), (0x68cb, 0x3bc3), (0x68cd, 0x3909), (0x68d2, 0x4433),
    (0x68d5, 0x5318), (0x68d7, 0x52eb), (0x68d8, 0x3b1f), (0x68da, 0x44e3), (0x68df, 0x3e2f), (0x68e0, 0x3d71),
    (0x68e7, 0x50b7), (0x68e8, 0x38c8), (0x68ee, 0x4638), (0x68f2, 0x467b), (0x68f9, 0x3dfa), (0x68fa, 0x3997),
    (0x6900, 0x4cfb), (0x6905, 0x4f60), (0x690d, 0x4950), (0x690e, 0x56a7), (0x6912, 0x5678), (0x6927, 0x41b6),
    (0x6930, 0x4aa2), (0x693d, 0x4b80), (0x693f, 0x56c8), (0x694a, 0x4abc), (0x6953, 0x5972), (0x6954, 0x471c),
    (0x6955, 0x5780), (0x6957, 0x379c), (0x6959, 0x41f9), (0x695a, 0x5679), (0x695e, 0x4064), (0x6960, 0x3c17),
    (0x6961, 0x4ea5), (0x6962, 0x4ea6), (0x6963, 0x4280), (0x6968, 0x5242), (0x696b, 0x53ce), (0x696d, 0x4aed),
    (0x696e, 0x5164), (0x696f, 0x48a1), (0x6975, 0x3b20), (0x6977, 0x5a39), (0x6978, 0x56a8), (0x6979, 0x4c26),
    (0x6995, 0x4dad), (0x699b, 0x546b), (0x699c, 0x433f), (0x69a5, 0x5bd7), (0x69a7, 0x44f5), (0x69ae, 0x4c27),
    (0x69b4, 0x4047), (0x69bb, 0x5807), (0x69c1, 0x38e5), (0x69c3, 0x42b6), (0x69cb, 0x3a53), (0x69cc, 0x582c),
    (0x69cd, 0x5541), (0x69d0, 0x39be), (0x69e8, 0x398f), (0x69ea, 0x3773), (0x69fb, 0x3b08), (0x69fd, 0x52ec),
    (0x69ff, 0x3b28), (0x6a02, 0x49fe), (0x6a0a, 0x436b), (0x6a11, 0x3ef1), (0x6a13, 0x403a), (0x6a17, 0x5165),
    (0x6a19, 0x5907), (0x6a1e, 0x56a9), (0x6a1f, 0x50d0), (0x6a21, 0x41cb), (0x6a23, 0x4abd), (0x6a35, 0x567a),
    (0x6a38, 0x42a1), (0x6a39, 0x4864), (0x6a3a, 0x5b47), (0x6a3d, 0x53bb), (0x6a44, 0x36e1), (0x6a48, 0x4d2b),
    (0x6a4b, 0x39ce), (0x6a52, 0x4de7), (0x6a53, 0x48a2), (0x6a58, 0x3b1a), (0x6a59, 0x3e4b), (0x6a5f, 0x3bc5),
    (0x6a61, 0x4651), (0x6a6b, 0x5bfd), (0x6a80, 0x3d45), (0x6a84, 0x3815), (0x6a89, 0x5243), (0x6a8d, 0x4adc),
    (0x6a8e, 0x3b36), (0x6a97, 0x4387), (0x6a9c, 0x5bef), (0x6aa2, 0x37a9), (0x6aa3, 0x50d1), (0x6ab3, 0x4576),
    (0x6abb, 0x59b2), (0x6ac2, 0x3dfb), (0x6ac3, 0x3a99), (0x6ad3, 0x3fa5), (0x6ada, 0x3f01), (0x6adb, 0x53cd),
    (0x6af6, 0x5a58), (0x6afb, 0x4a98), (0x6b04, 0x3ec8), (0x6b0a, 0x3a90), (0x6b0c, 0x50d2), (0x6b12, 0x3ec9),
    (0x6b16, 0x3ed3), (0x6b20, 0x5ca9), (0x6b21, 0x5508), (0x6b23, 0x5ca2), (0x6b32, 0x4d9f), (0x6b3a, 0x3bc6),
    (0x6b3d, 0x5caa), (0x6b3e, 0x3998), (0x6b46, 0x5cab), (0x6b47, 0x5a5b), (0x6b4c, 0x369d), (0x6b4e, 0x57fa),
    (0x6b50, 0x3a54), (0x6b5f, 0x4b57), (0x6b61, 0x5bbf), (0x6b62, 0x544a), (0x6b63, 0x5244), (0x6b64, 0x5509),
    (0x6b65, 0x440f), (0x6b66, 0x41fa), (0x6b6a, 0x4d11), (0x6b72, 0x47a7), (0x6b77, 0x3f0d), (0x6b78, 0x3aa0),
    (0x6b7b, 0x45a2), (0x6b7f, 0x41e0), (0x6b83, 0x4a23), (0x6b84, 0x546c), (0x6b86, 0x5812), (0x6b89, 0x48a3),
    (0x6b8a, 0x4865), (0x6b96, 0x4951), (0x6b98, 0x50b8), (0x6b9e, 0x4de8), (0x6bae, 0x3f86), (0x6baf, 0x4577),
    (0x6bb2, 0x4729), (0x6bb5, 0x3d46), (0x6bb7, 0x4f47), (0x6bba, 0x4632), (0x6bbc, 0x36b0), (0x6bbf, 0x51a1),
    (0x6bc1, 0x5c8a), (0x6bc5, 0x4f61), (0x6bc6, 0x3a55), (0x6bcb, 0x41fb), (0x6bcd, 0x41cc), (0x6bcf, 0x4130),
    (0x6bd2, 0x3e11), (0x6bd3, 0x4f29), (0x6bd4, 0x44f6), (0x6bd6, 0x44f7), (0x6bd7, 0x44f8), (0x6bd8, 0x44f9),
    (0x6bdb, 0x41cd), (0x6beb, 0x5b11), (0x6bec, 0x3a56), (0x6c08, 0x51a2), (0x6c0f, 0x49e4), (0x6c11, 0x4292),
    (0x6c13, 0x413d), (0x6c23, 0x3bc7), (0x6c34, 0x4866), (0x6c37, 0x4581), (0x6c38, 0x4c28), (0x6c3e, 0x437b),
    (0x6c40, 0x5245), (0x6c41, 0x53cf), (0x6c42, 0x3a57), (0x6c4e, 0x437c), (0x6c50, 0x46f2), (0x6c55, 0x4628),
    (0x6c57, 0x59a1), (0x6c5a, 0x4c70), (0x6c5d, 0x4b58), (0x6c5e, 0x5b3c), (0x6c5f, 0x375b), (0x6c60, 0x544b),
    (0x6c68, 0x390e), (0x6c6a, 0x4d0d), (0x6c6d, 0x4c4a), (0x6c70, 0x5813), (0x6c72, 0x3b44), (0x6c76, 0x426e),
    (0x6c7a, 0x3826), (0x6c7d, 0x3bc8), (0x6c7e, 0x44d3), (0x6c81, 0x4979), (0x6c82, 0x3bc9), (0x6c83, 0x4cdb),
    (0x6c85, 0x4e63), (0x6c86, 0x59c9), (0x6c87, 0x4b81), (0x6c88, 0x576d), (0x6c8c, 0x3e20), (0x6c90, 0x41da),
    (0x6c92, 0x41e1), (0x6c93, 0x3d66), (0x6c94, 0x4148), (0x6c95, 0x4276), (0x6c96, 0x56cf), (0x6c99, 0x45a3),
    (0x6c9a, 0x544c), (0x6c9b, 0x58ba), (0x6cab, 0x4119), (0x6cae, 0x5166), (0x6cb3, 0x5990), (0x6cb8, 0x44fa),
    (0x6cb9, 0x4ea7), (0x6cbb, 0x5752), (0x6cbc, 0x47ba), (0x6cbd, 0x38e6), (0x6cbe, 0x55ed), (0x6cbf, 0x4b82),
    (0x6cc1, 0x5bd8), (0x6cc2, 0x5aed), (0x6cc4, 0x471d), (0x6cc9, 0x55d4), (0x6cca, 0x42a2), (0x6ccc, 0x5981),
    (0x6cd3, 0x5b3d), (0x6cd5, 0x4381), (0x6cd7, 0x45a4), (0x6cdb, 0x437d), (0x6ce1, 0x58ed), (0x6ce2, 0x5841),
    (0x6ce3, 0x4f53), (0x6ce5, 0x3cd7), (0x6ce8, 0x539b), (0x6ceb, 0x5a67), (0x6cee, 0x42b7), (0x6cef, 0x4293),
    (0x6cf0, 0x5814), (0x6cf3, 0x4c29), (0x6d0b, 0x4abe), (0x6d0c, 0x3f81), (0x6d11, 0x4410), (0x6d17, 0x47a8),
    (0x6d19, 0x4867), (0x6d1b, 0x3ebd), (0x6d1e, 0x3e30), (0x6d25, 0x546d), (0x6d27, 0x4ea8), (0x6d29, 0x471e),
    (0x6d2a, 0x5b3e), (0x6d32, 0x539c), (0x6d35, 0x48a4), (0x6d36, 0x5c9e), (0x6d38, 0x39ad), (0x6d39, 0x4e64),
    (0x6d3b, 0x5bc9), (0x6d3d, 0x5cae), (0x6d3e, 0x5842), (0x6d41, 0x4048), (0x6d59, 0x521d), (0x6d5a, 0x53bc),
    (0x6d5c, 0x4578), (0x6d63, 0x4cfc), (0x6d66, 0x58ee), (0x6d69, 0x5b12), (0x6d6a, 0x3edf), (0x6d6c, 0x4072),
    (0x6d6e, 0x44b0), (0x6d74, 0x4da0), (0x6d77, 0x5a3a), (0x6d78, 0x576e), (0x6d79, 0x5a81), (0x6d7f, 0x58bb),
    (0x6d85, 0x4ba3), (0x6d87, 0x3845), (0x6d88, 0x47bb), (0x6d89, 0x4730), (0x6d8c, 0x4dae), (0x6d8d, 0x5c06),
    (0x6d8e, 0x4b83), (0x6d91, 0x47d6), (0x6d93, 0x4b84), (0x6d95, 0x560a), (0x6daf, 0x4a2c), (0x6db2, 0x4a34),
    (0x6db5, 0x59b3), (0x6dc0, 0x5246), (0x6dc3, 0x3a91), (0x6dc4, 0x5753), (0x6dc5, 0x46f3), (0x6dc6, 0x5c07),
    (0x6dc7, 0x3bca), (0x6dcb, 0x408d), (0x6dcf, 0x5b13), (0x6dd1, 0x4894), (0x6dd8, 0x3dfc), (0x6dd9, 0x5319),
    (0x6dda, 0x403b), (0x6dde, 0x47e6), (0x6de1, 0x3d5a), (0x6de8, 0x5247), (0x6dea, 0x4058), (0x6deb, 0x4f4d),
    (0x6dee, 0x5bf0), (0x6df1, 0x49db), (0x6df3, 0x48a5), (0x6df5, 0x4b85), (0x6df7, 0x5b33), (0x6df8, 0x5601),
    (0x6df9, 0x4aeb), (0x6dfa, 0x55d5), (0x6dfb, 0x55ee), (0x6e17, 0x4639), (0x6e19, 0x5bc2), (0x6e1a, 0x5167),
    (0x6e1b, 0x36e2), (0x6e1f, 0x5248), (0x6e20, 0x378d), (0x6e21, 0x3dfd), (0x6e23, 0x45a5), (0x6e24, 0x42ca),
    (0x6e25, 0x49ff), (0x6e26, 0x4cef), (0x6e2b, 0x471f), (0x6e2c, 0x5749), (0x6e2d, 0x4e7f), (0x6e2f, 0x59ca),
    (0x6e32, 0x4703), (0x6e34, 0x36d1), (0x6e36, 0x4c2a), (0x6e38, 0x4eaa), (0x6e3a, 0x41ec), (0x6e3c, 0x4281),
    (0x6e3d, 0x514f), (0x6e3e, 0x5b34), (0x6e43, 0x4356), (0x6e44, 0x4282), (0x6e4a, 0x539d), (0x6e4d, 0x3d47),
    (0x6e56, 0x5b14), (0x6e58, 0x4652), (0x6e5b, 0x3d5b), (0x6e5c, 0x4952), (0x6e5e, 0x5249), (0x6e5f, 0x5bd9),
    (0x6e67, 0x4daf), (0x6e6b, 0x56aa), (0x6e6e, 0x5005), (0x6e6f, 0x580a), (0x6e72, 0x4e65), (0x6e73, 0x3c18),
    (0x6e7a, 0x4411), (0x6e90, 0x4e66), (0x6e96, 0x53bd), (0x6e9c, 0x4049), (0x6e9d, 0x3a58), (0x6e9f, 0x41b7),
    (0x6ea2, 0x5017), (0x6ea5, 0x44b1), (0x6eaa, 0x38c9), (0x6eab, 0x4cdf), (0x6eaf, 0x47bc), (0x6eb1, 0x546e),
    (0x6eb6, 0x4db0), (0x6eba, 0x3cd9), (0x6ec2, 0x4340), (0x6ec4, 0x5542), (0x6ec5, 0x414f), (0x6ec9, 0x5bda),
    (0x6ecb, 0x5099), (0x6ecc, 0x55c8), (0x6ece, 0x5aee), (0x6ed1, 0x5bca), (0x6ed3, 0x5150), (0x6ed4, 0x3dfe),
    (0x6eef, 0x560b), (0x6ef4, 0x517e), (0x6ef8, 0x5b15), (0x6efe, 0x390a), (0x6eff, 0x410c), (0x6f01, 0x4ad2),
    (0x6f02, 0x5908), (0x6f06, 0x5769), (0x6f0f, 0x403c), (0x6f11, 0x3774), (0x6f14, 0x4b86), (0x6f15, 0x52ed),
    (0x6f20, 0x40ff), (0x6f22, 0x59a2), (0x6f23, 0x3f15), (0x6f2b, 0x410d), (0x6f2c, 0x544d), (0x6f31, 0x4868),
    (0x6f32, 0x5543), (0x6f38, 0x5225), (0x6f3f, 0x50d3), (0x6f41, 0x4c2b), (0x6f51, 0x42cb), (0x6f54, 0x3827),
    (0x6f57, 0x5499), (0x6f58, 0x42b8), (0x6f5a, 0x4895), (0x6f5b, 0x50bd), (0x6f5e, 0x3fa6), (0x6f5f, 0x46f4),
    (0x6f62, 0x5bdb), (0x6f64, 0x4f33), (0x6f6d, 0x3d5c), (0x6f6e, 0x52ee), (0x6f70, 0x3a9a), (0x6f7a, 0x50b9),
    (0x6f7c, 0x3e31), (0x6f7d, 0x4412), (0x6f7e, 0x4084), (0x6f81, 0x463e), (0x6f84, 0x5500), (0x6f88, 0x55e6),
    (0x6f8d, 0x539e), (0x6f8e, 0x58c2), (0x6f90, 0x4de9), (0x6f94, 0x5b16), (0x6f97, 0x36c2), (0x6fa3, 0x59a3),
    (0x6fa4, 0x581d), (0x6fa7, 0x3f9d), (0x6fae, 0x5bf1), (0x6faf, 0x5518), (0x6fb1, 0x51a3), (0x6fb3, 0x4c71),
    (0x6fb9, 0x3d5d), (0x6fbe, 0x3d51), (0x6fc0, 0x3816), (0x6fc1, 0x578f), (0x6fc2, 0x3f87), (0x6fc3, 0x3cb5),
    (0x6fca, 0x4c4b), (0x6fd5, 0x4920), (0x6fda, 0x4c2c), (0x6fdf, 0x52ce), (0x6fe0, 0x5b17), (0x6fe1, 0x4f0c),
    (0x6fe4, 0x3dff), (0x6fe9, 0x5b18), (0x6feb, 0x3ed4), (0x6fec, 0x53be), (0x6fef, 0x5790), (0x6ff1, 0x4579),
    (0x6ffe, 0x3f02), (0x7001, 0x4abf), (0x7005, 0x5aef), (0x7006, 0x3e12), (0x7009, 0x45a6), (0x700b, 0x49dc),
    (0x700f, 0x404a), (0x7011, 0x58ff), (0x7015, 0x457a), (0x7018, 0x3fa7), (0x701a, 0x59a4), (0x701b, 0x4c2d),
    (0x701c, 0x4f40), (0x701d, 0x3f0e), (0x701e, 0x524a), (0x701f, 0x47bd), (0x7023, 0x5a3b), (0x7027, 0x3fbe),
    (0x7028, 0x3fc3), (0x702f, 0x4c2e), (0x7037, 0x4ff4), (0x703e, 0x3eca), (0x704c, 0x3999), (0x7050, 0x5af0),
    (0x7051, 0x47ed), (0x7058, 0x57fb), (0x705d, 0x5b19), (0x7063, 0x410e), (0x706b, 0x5b48), (0x7070, 0x5bf2),
    (0x7078, 0x3a59), (0x707c, 0x50ae), (0x707d, 0x5151), (0x7085, 0x3846), (0x708a, 0x573c), (0x708e, 0x4baf),
    (0x7092, 0x567b), (0x7098, 0x5ca3), (0x7099, 0x509a), (0x709a, 0x39ae), (0x70a1, 0x524b), (0x70a4, 0x47be),
    (0x70ab, 0x5a68), (0x70ac, 0x378e), (0x70ad, 0x57fc), (0x70af, 0x5af1), (0x70b3, 0x4402), (0x70b7, 0x539f),
    (0x70b8, 0x50af), (0x70b9, 0x5226), (0x70c8, 0x3f82), (0x70cb, 0x5c95), (0x70cf, 0x4cd2), (0x70d8, 0x5b3f),
    (0x70d9, 0x3ebe), (0x70dd, 0x53d5), (0x70df, 0x4b88), (0x70f1, 0x3847), (0x70f9, 0x58c3), (0x70fd, 0x4434),
    (0x7104, 0x5c7d), (0x7109, 0x4ae1), (0x710c, 0x53bf), (0x7119, 0x4357), (0x711a, 0x44d4), (0x711e, 0x3e21),
    (0x7121, 0x41fc), (0x7126, 0x567c), (0x7130, 0x4bb0), (0x7136, 0x4b89), (0x7147, 0x5c8f), (0x7149, 0x3f76),
    (0x714a, 0x5c86), (0x714c, 0x5bdc), (0x714e, 0x5204), (0x7150, 0x4c2f), (0x7156, 0x3c0d), (0x7159, 0x4b8a),
    (0x715c, 0x4de1), (0x715e, 0x4633), (0x7164, 0x4131), (0x7165, 0x5bc3), (0x7166, 0x5c76), (0x7167, 0x52ef),
    (0x7169, 0x436c), (0x716c, 0x4ac0), (0x716e, 0x509b), (0x717d, 0x4704), (0x7184, 0x4953), (0x7189, 0x4dea),
    (0x718a, 0x4e55), (0x718f, 0x5c7e), (0x7192, 0x5af2), (0x7194, 0x4db1), (0x7199, 0x5cbe), (0x719f, 0x4896),
    (0x71a2, 0x4435), (0x71ac, 0x4cd3), (0x71b1, 0x4ba5), (0x71b9, 0x5cbf), (0x71ba, 0x5cc0), (0x71be, 0x5754),
    (0x71c1, 0x4c1a), (0x71c3, 0x4b8c), (0x71c8, 0x3e4c), (0x71c9, 0x3e22), (0x71ce, 0x3fcf), (0x71d0, 0x4085),
    (0x71d2, 0x47bf), (0x71d4, 0x436d), (0x71d5, 0x4b8d), (0x71df, 0x4c30), (0x71e5, 0x52f0), (0x71e6, 0x5519),
    (0x71e7, 0x4869), (0x71ed, 0x568e), (0x71ee, 0x4731), (0x71fb, 0x5c7f), (0x71fc, 0x4963), (0x71fe, 0x3e00),
    (0x71ff, 0x4d2d), (0x7200, 0x5a5f), (0x7206, 0x5900), (0x7210, 0x3fa8), (0x721b, 0x3ecb), (0x722a, 0x52f1),
    (0x722c, 0x5843), (0x722d, 0x5158), (0x7230, 0x4e67), (0x7232, 0x4e80), (0x7235, 0x50b0), (0x7236, 0x44b2),
    (0x723a, 0x4aa3), (0x723b, 0x5c68), (0x723d, 0x4653), (0x723e, 0x4fdc), (0x7240, 0x4654), (0x7246, 0x50d4),
    (0x7247, 0x58c9), (0x7248, 0x584d), (0x724c, 0x58bc), (0x7252, 0x55f9), (0x7258, 0x3e13), (0x7259, 0x49ec),
    (0x725b, 0x4dc9), (0x725d, 0x457b), (0x725f, 0x41ce), (0x7261, 0x41cf), (0x7262, 0x3fc4), (0x7267, 0x41db),
    (0x7269, 0x4277), (0x7272, 0x4668), (0x7279, 0x5838), (0x727d, 0x381b), (0x7280, 0x467c), (0x7281, 0x4073),
    (0x72a2, 0x3e14), (0x72a7, 0x5cc1), (0x72ac, 0x381c), (0x72af, 0x437e), (0x72c0, 0x4655), (0x72c2, 0x39af),
    (0x72c4, 0x517f), (0x72ce, 0x4a1d), (0x72d0, 0x5b1a), (0x72d7, 0x3a5a), (0x72d9, 0x5168), (0x72e1, 0x39cf),
    (0x72e9, 0x486a), (0x72f8, 0x4074), (0x72f9, 0x5a82), (0x72fc, 0x3ee0), (0x72fd, 0x58bd), (0x730a, 0x4c4c),
    (0x7316, 0x5544), (0x731b, 0x413e), (0x731c, 0x493f), (0x731d, 0x5312), (0x7325, 0x4d16), (0x7329, 0x473b),
    (0x732a, 0x5169), (0x732b, 0x41ed), (0x7336, 0x4f0d), (0x7337, 0x4f0e), (0x733e, 0x5bcb), (0x733f, 0x4e68),
    (0x7344, 0x4cdc), (0x7345, 0x45a7), (0x7350, 0x50d6), (0x7352, 0x4cd4), (0x7357, 0x3a94), (0x7368, 0x3e15),
    (0x736a, 0x5bf3), (0x7370, 0x4c31), (0x7372, 0x5bfb), (0x7375, 0x3f89), (0x7378, 0x486b), (0x737a, 0x3d52),
    (0x737b, 0x5a59), (0x7384, 0x5a69), (0x7386, 0x509c), (0x7387, 0x47e2), (0x7389, 0x4cdd), (0x738b, 0x4d0e),
    (0x738e, 0x524c), (0x7394, 0x55d6), (0x7396, 0x3a5b), (0x7397, 0x4dca), (0x7398, 0x3bcb), (0x739f, 0x4294),
    (0x73a7, 0x4f34), (0x73a9, 0x4cfd), (0x73ad, 0x457c), (0x73b2, 0x3f91), (0x73b3, 0x3d80), (0x73b9, 0x5a6a),
    (0x73c0, 0x42a3), (0x73c2, 0x369e), (0x73c9, 0x4295), (0x73ca, 0x4629), (0x73cc, 0x5982), (0x73cd, 0x546f),
    (0x73cf, 0x36b1), (0x73d6, 0x39b0), (0x73d9, 0x391c), (0x73dd, 0x5c77), (0x73de, 0x3ebf), (0x73e0, 0x53a0),
    (0x73e3, 0x48a6), (0x73e4, 0x4413), (0x73e5, 0x4fdd), (0x73e6, 0x5a4d), (0x73e9, 0x5af3), (0x73ea, 0x3b09),
    (0x73ed, 0x42b9), (0x73f7, 0x41fd), (0x73f9, 0x473c), (0x73fd, 0x524d), (0x73fe, 0x5a6b), (0x7401, 0x4705),
    (0x7403, 0x3a5c), (0x7405, 0x3ee1), (0x7406, 0x4075), (0x7407, 0x486c), (0x7409, 0x404b), (0x7413, 0x4cfe),
    (0x741b, 0x576f), (0x7420, 0x5205), (0x7421, 0x4897), (0x7422, 0x5791), (0x7425, 0x5b1b), (0x7426, 0x3bcc),
    (0x7428, 0x390b), (0x742a, 0x3bcd), (0x742b, 0x4436), (0x742c, 0x4cff), (0x742e, 0x531a), (0x742f, 0x399a),
    (0x7430, 0x4bb1), (0x7433, 0x408e), (0x7434, 0x3b37), (0x7435, 0x44fc), (0x7436, 0x5844), (0x7438, 0x5792),
    (0x743a, 0x4382), (0x743f, 0x5b35), (0x7440, 0x4dcb), (0x7441, 0x41d0), (0x7443, 0x56c9), (0x7444, 0x4706),
    (0x744b, 0x4e81), (0x7455, 0x5991), (0x7457, 0x4e69), (0x7459, 0x3ca2), (0x745a, 0x5b1c), (0x745b, 0x4c33),
    (0x745c, 0x4f10), (0x745e, 0x467d), (0x745f, 0x491d), (0x7460, 0x404c), (0x7462, 0x4db2), (0x7464, 0x4d2e),
    (0x7465, 0x4ce0), (0x7468, 0x5470), (0x7469, 0x5af4), (0x746a, 0x40f6), (0x746f, 0x3ee2), (0x747e, 0x3b29),
    (0x7482, 0x3bce), (0x7483, 0x4076), (0x7487, 0x4707), (0x7489, 0x3f77), (0x748b, 0x50d7), (0x7498, 0x4086),
    (0x749c, 0x5bdd), (0x749e, 0x42a4), (0x749f, 0x3848), (0x74a1, 0x5471), (0x74a3, 0x3bcf), (0x74a5, 0x3849),
    (0x74a7, 0x4388), (0x74a8, 0x551a), (0x74aa, 0x52f2), (0x74b0, 0x5bc4), (0x74b2, 0x486d), (0x74b5, 0x4b5a),
    (0x74b9, 0x4898), (0x74bd, 0x4661), (0x74bf, 0x4708), (0x74c6, 0x548c), (0x74ca, 0x384a), (0x74cf, 0x3fbf),
    (0x74d4, 0x4c35), (0x74d8, 0x399b), (0x74da, 0x551b), (0x74dc, 0x3925), (0x74e0, 0x5b1d), (0x74e2, 0x5909),
    (0x74e3, 0x584e), (0x74e6, 0x4cf0), (0x74ee, 0x4ce8), (0x74f7, 0x509d), (0x7501, 0x4403), (0x7504, 0x381d),
    (0x7511, 0x53d6), (0x7515, 0x4ce9), (0x7518, 0x36e3), (0x751a, 0x49dd), (0x751b, 0x55ef), (0x751f, 0x4669),
    (0x7523, 0x462a), (0x7525, 0x466a), (0x7526, 0x47c0), (0x7528, 0x4db3), (0x752b, 0x4414), (0x752c, 0x4db4),
    (0x7530, 0x5206), (0x7531, 0x4f11), (0x7532, 0x374e), (0x7533, 0x4964), (0x7537, 0x3c1a), (0x7538, 0x5207),
    (0x753a, 0x524e), (0x7547, 0x3b15), (0x754c, 0x38ca), (0x754f, 0x4d17), (0x7551, 0x5208), (0x7553, 0x3d67),
    (0x7554, 0x42ba), (0x7559, 0x404d), (0x755b, 0x5472), (0x755c, 0x56bc), (0x755d, 0x41fe), (0x7562, 0x5983),
    (0x7565, 0x3eeb), (0x7566, 0x5c96), (0x756a, 0x436e), (0x756f, 0x53c0), (0x7570, 0x4fdf), (0x7575, 0x5b49),
    (0x7576, 0x3d72), (0x7578, 0x3bd0), (0x757a, 0x375c), (0x757f, 0x3bd1), (0x7586, 0x375d), (0x7587, 0x53a1),
    (0x758a, 0x55fa), (0x758b, 0x5984), (0x758e, 0x47c2), (0x758f, 0x47c1), (0x7591, 0x4f62), (0x759d, 0x462b),
    (0x75a5, 0x3775), (0x75ab, 0x4b6e), (0x75b1, 0x58ef), (0x75b2, 0x5979), (0x75b3, 0x36e4), (0x75b5, 0x509e),
    (0x75b8, 0x3d53), (0x75b9, 0x5473), (0x75bc, 0x3e32), (0x75bd, 0x516a), (0x75be, 0x548d), (0x75c2, 0x369f),
    (0x75c5, 0x4404), (0x75c7, 0x53d7), (0x75cd, 0x4fe0), (0x75d2, 0x4ac1), (0x75d4, 0x5755), (0x75d5, 0x5ca4),
    (0x75d8, 0x3e3c), (0x75d9, 0x384b), (0x75db, 0x5827), (0x75e2, 0x4078), (0x75f0, 0x3d5e), (0x75f2, 0x40f7),
    (0x75f4, 0x5756), (0x75fa, 0x44fd), (0x75fc, 0x38e7), (0x7600, 0x4ad3), (0x760d, 0x4ac2), (0x7619, 0x47c3),
    (0x761f, 0x4ce1), (0x7620, 0x55c9), (0x7621, 0x5545), (0x7622, 0x42bb), (0x7624, 0x404e), (0x7626, 0x486e),
    (0x763b, 0x403d), (0x7642, 0x3fd0), (0x764c, 0x4a18), (0x764e, 0x36c3), (0x7652, 0x4f13), (0x7656, 0x4389),
    (0x7661, 0x5757), (0x7664, 0x521e), (0x7669, 0x3e56), (0x766c, 0x4709), (0x7670, 0x4cea), (0x7672, 0x5209),
    (0x7678, 0x38cb), (0x767b, 0x3e4d), (0x767c, 0x432c), (0x767d, 0x4367), (0x767e, 0x4368), (0x7684, 0x5181),
    (0x7686, 0x3776), (0x7687, 0x5bde), (0x768e, 0x39d0), (0x7690, 0x38e8), (0x7693, 0x5b1e), (0x76ae, 0x597a),
    (0x76ba, 0x56ab), (0x76bf, 0x41b8), (0x76c2, 0x4dcc), (0x76c3, 0x4358), (0x76c6, 0x44d5), (0x76c8, 0x4c36),
    (0x76ca, 0x4ff5), (0x76d2, 0x59bb), (0x76d6, 0x3777), (0x76db, 0x473d), (0x76dc, 0x3e01), (0x76de, 0x50ba),
    (0x76df, 0x4140), (0x76e1, 0x5474), (0x76e3, 0x36e5), (0x76e4, 0x42bc), (0x76e7, 0x3fa9), (0x76ee, 0x41dc),
    (0x76f2, 0x413f), (0x76f4, 0x545e), (0x76f8, 0x4656), (0x76fc, 0x42bd), (0x76fe, 0x48a7), (0x7701, 0x473e),
    (0x7704, 0x4149), (0x7708, 0x5802), (0x7709, 0x4283), (0x770b, 0x36c4), (0x771e, 0x5475), (0x7720, 0x414a),
    (0x7729, 0x5a6c), (0x7737, 0x3a92), (0x7738, 0x41d1), (0x773a, 0x52f3), (0x773c, 0x4a0a), (0x7740, 0x5512),
    (0x774d, 0x5a6d), (0x775b, 0x524f), (0x7761, 0x486f), (0x7763, 0x3e16), (0x7766, 0x41dd), (0x776b, 0x55fb),
    (0x7779, 0x3e02), (0x777e, 0x38e9), (0x777f, 0x4c4d), (0x778b, 0x5476), (0x7791, 0x41b9), (0x779e, 0x410f),
    (0x77a5, 0x43f6), (0x77ac, 0x48a8), (0x77ad, 0x3fd1), (0x77b0, 0x36e6), (0x77b3, 0x3e33), (0x77bb, 0x55f0),
    (0x77bc, 0x380a), (0x77bf, 0x3a5d), (0x77d7, 0x568f), (0x77db, 0x41d2), (0x77dc, 0x3b49), (0x77e2, 0x4940),
    (0x77e3, 0x4f63), (0x77e5, 0x544e), (0x77e9, 0x3a5e), (0x77ed, 0x3d48), (0x77ee, 0x4d12), (0x77ef, 0x39d1),
    (0x77f3, 0x46f5), (0x7802, 0x45a8), (0x7812, 0x44fe), (0x7825, 0x544f), (0x7826, 0x5551), (0x7827, 0x5770),
    (0x782c, 0x4091), (0x7832, 0x58f0), (0x7834, 0x5845), (0x7845, 0x3b0a), (0x784f, 0x4b8f), (0x785d, 0x567d),
    (0x786b, 0x404f), (0x786c, 0x384c), (0x786f, 0x4b90), (0x787c, 0x44e4), (0x7881, 0x3bd2), (0x7887, 0x5250),
    (0x788c, 0x3fb3), (0x788d, 0x4a2d), (0x788e, 0x47ee), (0x7891, 0x44ff), (0x7897, 0x4d00), (0x78a3, 0x36d2),
    (0x78a7, 0x43ea), (0x78a9, 0x46f6), (0x78ba, 0x5bb5), (0x78bb, 0x5bb6), (0x78bc, 0x40f8), (0x78c1, 0x509f),
    (0x78c5, 0x4341), (0x78ca, 0x3fc5), (0x78cb, 0x550a), (0x78ce, 0x38cc), (0x78d0, 0x42be), (0x78e8, 0x40f9),
    (0x78ec, 0x384d), (0x78ef, 0x3bd3), (0x78f5, 0x36c5), (0x78fb, 0x42bf), (0x7901, 0x567e), (0x790e, 0x567f),
    (0x7916, 0x4b5b), (0x792a, 0x3f03), (0x792b, 0x3f0f), (0x792c, 0x42c0), (0x793a, 0x4941), (0x793e, 0x45a9),
    (0x7940, 0x45aa), (0x7941, 0x3bd4), (0x7947, 0x3bd5), (0x7948, 0x3bd6), (0x7949, 0x5450), (0x7950, 0x4dcd),
    (0x7956, 0x52f4), (0x7957, 0x5451), (0x795a, 0x52f5), (0x795b, 0x378f), (0x795c, 0x5b1f), (0x795d, 0x56bd),
    (0x795e, 0x4965), (0x7960, 0x45ab), (0x7965, 0x4657), (0x7968, 0x590a), (0x796d, 0x52cf), (0x797a, 0x3bd7),
    (0x797f, 0x3fb4), (0x7981, 0x3b38), (0x798d, 0x5baa), (0x798e, 0x5251), (0x798f, 0x4421), (0x7991, 0x4dce),
    (0x79a6, 0x4ad4), (0x79a7, 0x5cc2), (0x79aa, 0x470a), (0x79ae, 0x3f9e), (0x79b1, 0x3e03), (0x79b3, 0x4ac3),
    (0x79b9, 0x4dcf), (0x79bd, 0x3b39), (0x79be, 0x5bab), (0x79bf, 0x3e17), (0x79c0, 0x4870), (0x79c1, 0x45ac),
    (0x79c9, 0x4405), (0x79ca, 0x3c93), (0x79cb, 0x56ac), (0x79d1, 0x3986), (0x79d2, 0x5680), (0x79d5, 0x4500),
    (0x79d8, 0x4501), (0x79df, 0x52f6), (0x79e4, 0x5774), (0x79e6, 0x5477), (0x79e7, 0x4a24), (0x79e9, 0x548e),
    (0x79fb, 0x4fe2), (0x7a00, 0x5cc3), (0x7a05, 0x47a9), (0x7a08, 0x36c6), (0x7a0b, 0x5252), (0x7a0d, 0x5681),
    (0x7a14, 0x5022), (0x7a17, 0x58be), (0x7a19, 0x545f), (0x7a1a, 0x5758), (0x7a1c, 0x4065), (0x7a1f, 0x5971),
    (0x7a20, 0x52f7), (0x7a2e, 0x531b), (0x7a31, 0x5775), (0x7a36, 0x4de2), (0x7a37, 0x5460), (0x7a3b, 0x3e04),
    (0x7a3c, 0x36a0), (0x7a3d, 0x38cd), (0x7a3f, 0x38ea), (0x7a40, 0x3901), (0x7a46, 0x41de), (0x7a49, 0x5759),
    (0x7a4d, 0x5182), (0x7a4e, 0x4c37), (0x7a57, 0x4871), (0x7a61, 0x4665), (0x7a62, 0x4c4e), (0x7a69, 0x4ce2),
    (0x7a6b, 0x5bb7), (0x7a70, 0x4ac4), (0x7a74, 0x5a78), (0x7a76, 0x3a5f), (0x7a79, 0x3a85), (0x7a7a, 0x391d),
    (0x7a7d, 0x5253), (0x7a7f, 0x55d7), (0x7a81, 0x3e26), (0x7a84, 0x5513), (0x7a88, 0x4d90), (0x7a92, 0x548f),
    (0x7a93, 0x5546), (0x7a95, 0x52f8), (0x7a98, 0x3a7a), (0x7a9f, 0x3a82), (0x7aa9, 0x4cf1), (0x7aaa, 0x4cf2),
    (0x7aae, 0x3a86), (0x7aaf, 0x4d91), (0x7aba, 0x3b0b), (0x7ac4, 0x551c), (0x7ac5, 0x3b0c), (0x7ac7, 0x3e3d),
    (0x7aca, 0x521f), (0x7acb, 0x40f2), (0x7ad7, 0x41ee), (0x7ad9, 0x5532), (0x7add, 0x4406), (0x7adf, 0x384e),
    (0x7ae0, 0x50d8), (0x7ae3, 0x53c1), (0x7ae5, 0x3e34), (0x7aea, 0x4872), (0x7aed, 0x36d3), (0x7aef, 0x3d49),
    (0x7af6, 0x384f), (0x7af9, 0x53b2), (0x7afa, 0x56be), (0x7aff, 0x36c7), (0x7b0f, 0x5b39), (0x7b11, 0x47c4),
    (0x7b19, 0x466c), (0x7b1b, 0x5183), (0x7b1e, 0x5815), (0x7b20, 0x40f3), (0x7b26, 0x44b3), (0x7b2c, 0x52d0),
    (0x7b2d, 0x3f92), (0x7b39, 0x47aa), (0x7b46, 0x5985), (0x7b49, 0x3e4e), (0x7b4b, 0x3b2a), (0x7b4c, 0x520a),
    (0x7b4d, 0x48a9), (0x7b4f, 0x4375), (0x7b50, 0x39b1), (0x7b51, 0x56bf), (0x7b52, 0x5828), (0x7b54, 0x3d68),
    (0x7b56, 0x5559), (0x7b60, 0x3b16), (0x7b6c, 0x473f), (0x7b6e, 0x467e), (0x7b75, 0x4b92), (0x7b7d, 0x4cd5),
    (0x7b87, 0x3778), (0x7b8b, 0x520b), (0x7b8f, 0x5159), (0x7b94, 0x42a5), (0x7b95, 0x3bd8), (0x7b97, 0x462c),
    (0x7b9a, 0x550b), (0x7b9d, 0x382d), (0x7ba1, 0x399c), (0x7bad, 0x520c), (0x7bb1, 0x4658), (0x7bb4, 0x50be),
    (0x7bb8, 0x516b), (0x7bc0, 0x5220), (0x7bc1, 0x5bdf), (0x7bc4, 0x437f), (0x7bc6, 0x520d), (0x7bc7, 0x58ca),
    (0x7bc9, 0x56c0), (0x7bd2, 0x4954), (0x7be0, 0x47c5), (0x7be4, 0x3e18), (0x7be9, 0x45ad), (0x7c07, 0x530b),
    (0x7c12, 0x551d), (0x7c1e, 0x3d4a), (0x7c21, 0x36c8), (0x7c27, 0x5be0), (0x7c2a, 0x50bf), (0x7c2b, 0x47c6),
    (0x7c3d, 0x55f1), (0x7c3e, 0x3f88), (0x7c3f, 0x44b4), (0x7c43, 0x3ed5), (0x7c4c, 0x53a2), (0x7c4d, 0x5184),
    (0x7c60, 0x3fc0), (0x7c64, 0x55f2), (0x7c6c, 0x4079), (0x7c73, 0x4284), (0x7c83, 0x4502), (0x7c89, 0x44d6),
    (0x7c92, 0x40f4), (0x7c95, 0x42a6), (0x7c97, 0x52f9), (0x7c98, 0x5227), (0x7c9f, 0x47d7), (0x7ca5, 0x53b3),
    (0x7ca7, 0x50d9), (0x7cae, 0x3ef2), (0x7cb1, 0x3ef3), (0x7cb2, 0x551f), (0x7cb3, 0x3782), (0x7cb9, 0x4873),
    (0x7cbe, 0x5254), (0x7cca, 0x5b20), (0x7cd6, 0x3d73), (0x7cde, 0x44d7), (0x7cdf, 0x52fa), (0x7ce0, 0x375e),
    (0x7ce7, 0x3ef4), (0x7cfb, 0x38ce), (0x7cfe, 0x3b0d), (0x7d00, 0x3bd9), (0x7d02, 0x53a3), (0x7d04, 0x4aaa),
    (0x7d05, 0x5b40), (0x7d06, 0x4dd0), (0x7d07, 0x5ca7), (0x7d08, 0x5bc5), (0x7d0a, 0x426f), (0x7d0b, 0x4270),
    (0x7d0d, 0x3c7e), (0x7d10, 0x3ccc), (0x7d14, 0x48aa), (0x7d17, 0x45ae), (0x7d18, 0x39c1), (0x7d19, 0x5452),
    (0x7d1a, 0x3b45), (0x7d1b, 0x44d8), (0x7d20, 0x47c7), (0x7d21, 0x4342), (0x7d22, 0x4666), (0x7d2b, 0x50a0),
    (0x7d2c, 0x53a4), (0x7d2e, 0x552a), (0x7d2f, 0x403e), (0x7d30, 0x47ab), (0x7d33, 0x4966), (0x7d35, 0x516c),
    (0x7d39, 0x47c8), (0x7d3a, 0x36e7), (0x7d42, 0x531c), (0x7d43, 0x5a6e), (0x7d44, 0x52fb), (0x7d45, 0x3850),
    (0x7d46, 0x42c1), (0x7d50, 0x3828), (0x7d5e, 0x39d2), (0x7d61, 0x3ec0), (0x7d62, 0x5a6f), (0x7d66, 0x3b46),
    (0x7d68, 0x4f41), (0x7d6a, 0x5008), (0x7d6e, 0x467f), (0x7d71, 0x5829), (0x7d72, 0x45af), (0x7d73, 0x375f),
    (0x7d76, 0x5221), (0x7d79, 0x381e), (0x7d7f, 0x3a60), (0x7d8e, 0x5255), (0x7d8f, 0x4874), (0x7d93, 0x3851),
    (0x7d9c, 0x531d), (0x7da0, 0x3fb5), (0x7da2, 0x53a5), (0x7dac, 0x4875), (0x7dad, 0x4f16), (0x7db1, 0x3760),
    (0x7db2, 0x4122), (0x7db4, 0x55e7), (0x7db5, 0x5552), (0x7db8, 0x4059), (0x7dba, 0x3bda), (0x7dbb, 0x57fd),
    (0x7dbd, 0x50b1), (0x7dbe, 0x4066), (0x7dbf, 0x414b), (0x7dc7, 0x575a), (0x7dca, 0x3beb), (0x7dcb, 0x4503),
    (0x7dd6, 0x4680), (0x7dd8, 0x59b4), (0x7dda, 0x470b), (0x7ddd, 0x549a), (0x7dde, 0x3d4b), (0x7de0, 0x560c),
    (0x7de1, 0x4296), (0x7de3, 0x4b93), (0x7de8, 0x58cb), (0x7de9, 0x4d01), (0x7dec, 0x414c), (0x7def, 0x4e82),
    (0x7df4, 0x3f78), (0x7dfb, 0x575b), (0x7e09, 0x5478), (0x7e0a, 0x4a35), (0x7e15, 0x4ce3), (0x7e1b, 0x42a7),
    (0x7e1d, 0x5479), (0x7e1e, 0x5b21), (0x7e1f, 0x4da1), (0x7e21, 0x5152), (0x7e23, 0x5a70), (0x7e2b, 0x4437),
    (0x7e2e, 0x56c1), (0x7e2f, 0x4b95), (0x7e31, 0x531e), (0x7e37, 0x403f), (0x7e3d, 0x569c), (0x7e3e, 0x5185),
    (0x7e41, 0x4370), (0x7e43, 0x44e5), (0x7e46, 0x41ff), (0x7e47, 0x4d92), (0x7e52, 0x53d8), (0x7e54, 0x5461),
    (0x7e55, 0x470c), (0x7e5e, 0x4d93), (0x7e61, 0x4876), (0x7e69, 0x492c), (0x7e6a, 0x5bf4), (0x7e6b, 0x38cf),
    (0x7e6d, 0x381f), (0x7e70, 0x52fc), (0x7e79, 0x4b6f), (0x7e7c, 0x38d0), (0x7e82, 0x551e), (0x7e8c, 0x47d8),
    (0x7e8f, 0x520e), (0x7e93, 0x4c38), (0x7e96, 0x472a), (0x7e98, 0x5520), (0x7e9b, 0x3e19), (0x7e9c, 0x3ed6),
    (0x7f36, 0x44b5), (0x7f38, 0x59cb), (0x7f3a, 0x3829), (0x7f4c, 0x4a99), (0x7f50, 0x399d), (0x7f54, 0x4123),
    (0x7f55, 0x59a5), (0x7f6a, 0x5389), (0x7f6b, 0x39b6), (0x7f6e, 0x575c), (0x7f70, 0x4376), (0x7f72, 0x4681),
    (0x7f75, 0x4132), (0x7f77, 0x5846), (0x7f79, 0x407a), (0x7f85, 0x3e57), (0x7f88, 0x3bdb), (0x7f8a, 0x4ac6),
    (0x7f8c, 0x3761), (0x7f8e, 0x4285), (0x7f94, 0x38eb), (0x7f9a, 0x3f93), (0x7f9e, 0x4877), (0x7fa4, 0x3a7b),
    (0x7fa8, 0x470d), (0x7fa9, 0x4f64), (0x7fb2, 0x5cc4), (0x7fb8, 0x407b), (0x7fb9, 0x3783), (0x7fbd, 0x4dd1),
    (0x7fc1, 0x4ceb), (0x7fc5, 0x4942), (0x7fca, 0x4ff6), (0x7fcc, 0x4ff7), (0x7fce, 0x3f94), (0x7fd2, 0x4922),
    (0x7fd4, 0x4659), (0x7fd5, 0x5caf), (0x7fdf, 0x5186), (0x7fe0, 0x573d), (0x7fe1, 0x4504), (0x7fe9, 0x58cc),
    (0x7feb, 0x4d02), (0x7ff0, 0x59a6), (0x7ff9, 0x39d3), (0x7ffc, 0x4ff8), (0x8000, 0x4d94), (0x8001, 0x3faa),
    (0x8003, 0x38ec), (0x8005, 0x50a1), (0x8006, 0x3bdc), (0x8009, 0x3a61), (0x800c, 0x4fe4), (0x8010, 0x3c8e),
    (0x8015, 0x3852), (0x8017, 0x41d3), (0x8018, 0x4deb), (0x802d, 0x3bdd), (0x8033, 0x4fe5), (0x8036, 0x4aa4),
    (0x803d, 0x5803), (0x803f, 0x3853), (0x8043, 0x3d5f), (0x8046, 0x3f95), (0x804a, 0x3fd2), (0x8056, 0x47a0),
    (0x8058, 0x4582), (0x805a, 0x573e), (0x805e, 0x4271), (0x806f, 0x3f79), (0x8070, 0x569d), (0x8072, 0x47a1),
    (0x8073, 0x4db5), (0x8077, 0x5462), (0x807d, 0x5602), (0x807e, 0x3fc1), (0x807f, 0x4f3e), (0x8084, 0x4fe6),
    (0x8085, 0x4899), (0x8086, 0x45b0), (0x8087, 0x52fd), (0x8089, 0x4f2a), (0x808b, 0x4061), (0x808c, 0x3bde),
    (0x8096, 0x5682), (0x809b, 0x59cc), (0x809d, 0x36c9), (0x80a1, 0x38ed), (0x80a2, 0x5453), (0x80a5, 0x4505),
    (0x80a9, 0x3820), (0x80aa, 0x4343), (0x80af, 0x3b4a), (0x80b1, 0x39c2), (0x80b2, 0x4f2b), (0x80b4, 0x5c69),
    (0x80ba, 0x58dc), (0x80c3, 0x4e83), (0x80c4, 0x538f), (0x80cc, 0x4359), (0x80ce, 0x5816), (0x80da, 0x435a),
    (0x80db, 0x374f), (0x80de, 0x58f1), (0x80e1, 0x5b22), (0x80e4, 0x4f35), (0x80e5, 0x46e2), (0x80f1, 0x39b2),
    (0x80f4, 0x3e35), (0x80f8, 0x5c9f), (0x80fd, 0x3cd3), (0x8102, 0x5454), (0x8105, 0x5a83), (0x8106, 0x573f),
    (0x8107, 0x5a84), (0x8108, 0x4137), (0x810a, 0x55ca), (0x8118, 0x4d03), (0x811a, 0x36b2), (0x811b, 0x3854),
    (0x8123, 0x48ab), (0x8129, 0x4878), (0x812b, 0x5800), (0x812f, 0x58f2), (0x8139, 0x5547), (0x813e, 0x4566),
    (0x814b, 0x4a36), (0x814e, 0x4967), (0x8150, 0x44b6), (0x8151, 0x44b7), (0x8154, 0x3762), (0x8155, 0x4d04),
    (0x8165, 0x47a2), (0x8166, 0x3cbd), (0x816b, 0x531f), (0x8170, 0x4d95), (0x8171, 0x379d), (0x8178, 0x50da),
    (0x8179, 0x4422), (0x817a, 0x470e), (0x817f, 0x582d), (0x8180, 0x4344), (0x8188, 0x3817), (0x818a, 0x42a8),
    (0x818f, 0x38ee), (0x819a, 0x44b8), (0x819c, 0x4100), (0x819d, 0x491e), (0x81a0, 0x39d4), (0x81a3, 0x5490),
    (0x81a8, 0x58c4), (0x81b3, 0x470f), (0x81b5, 0x56d4), (0x81ba, 0x4f57), (0x81bd, 0x3d60), (0x81be, 0x5bf5),
    (0x81bf, 0x3cb8), (0x81c0, 0x3e44), (0x81c2, 0x4567), (0x81c6, 0x4add), (0x81cd, 0x52d1), (0x81d8, 0x3edb),
    (0x81df, 0x50db), (0x81e3, 0x4968), (0x81e5, 0x4cf3), (0x81e7, 0x50dc), (0x81e8, 0x408f), (0x81ea, 0x50a2),
    (0x81ed, 0x5740), (0x81f3, 0x5455), (0x81f4, 0x575d), (0x81fa, 0x3d81), (0x81fb, 0x547a), (0x81fc, 0x3a62),
    (0x81fe, 0x4f17), (0x8205, 0x3a63), (0x8207, 0x4b5d), (0x8208, 0x5cb0), (0x820a, 0x3a64), (0x820c, 0x4720),
    (0x820d, 0x45b1), (0x8212, 0x46e3), (0x821b, 0x55d8), (0x821c, 0x48ac), (0x821e, 0x4200), (0x821f, 0x53a6),
    (0x8221, 0x3763), (0x822a, 0x59cd), (0x822b, 0x4345), (0x822c, 0x42c2), (0x8235, 0x5781), (0x8236, 0x42a9),
    (0x8237, 0x5a71), (0x8239, 0x4710), (0x8240, 0x44b9), (0x8245, 0x4b5e), (0x8247, 0x5256), (0x8259, 0x5548),
    (0x8264, 0x4f65), (0x8266, 0x59b5), (0x826e, 0x36ca), (0x826f, 0x3ef5), (0x8271, 0x36cb), (0x8272, 0x4667),
    (0x8276, 0x4bb2), (0x8278, 0x5683), (0x827e, 0x4a2e), (0x828b, 0x4dd2), (0x828d, 0x50b2), (0x828e, 0x3a87),
    (0x8292, 0x4124), (0x8299, 0x44ba), (0x829a, 0x3e45), (0x829d, 0x5456), (0x829f, 0x463a), (0x82a5, 0x3779),
    (0x82a6, 0x5b23), (0x82a9, 0x3b3a), (0x82ac, 0x44d9), (0x82ad, 0x5847), (0x82ae, 0x4c4f), (0x82af, 0x49de),
    (0x82b1, 0x5bac), (0x82b3, 0x4346), (0x82b7, 0x5457), (0x82b8, 0x4dec), (0x82b9, 0x3b2b), (0x82bb, 0x56ad),
    (0x82bc, 0x41d4), (0x82bd, 0x49ed), (0x82bf, 0x508e), (0x82d1, 0x4e6a), (0x82d2, 0x4bb3), (0x82d4, 0x5817),
    (0x82d5, 0x5684), (0x82d7, 0x41ef), (0x82db, 0x36a1), (0x82de, 0x58f3), (0x82df, 0x3a65), (0x82e1, 0x4fe7),
    (0x82e5, 0x4aab), (0x82e6, 0x38ef), (0x82e7, 0x516d), (0x82f1, 0x4c3b), (0x82fd, 0x38f0), (0x82fe, 0x5986),
    (0x8301, 0x53c7), (0x8302, 0x4201), (0x8303, 0x4380), (0x8304, 0x36a2), (0x8305, 0x41d5), (0x8309, 0x411a),
    (0x8317, 0x41ba), (0x8328, 0x50a3), (0x832b, 0x4125), (0x832f, 0x4423), (0x8331, 0x4879), (0x8334, 0x5bf6),
    (0x8335, 0x5009), (0x8336, 0x3cdb), (0x8338, 0x4db6), (0x8339, 0x4b5f), (0x8340, 0x48ad), (0x8347, 0x5a48),
    (0x8349, 0x5685), (0x834a, 0x5af5), (0x834f, 0x5024), (0x8351, 0x4fe8), (0x8352, 0x5be1), (0x8373, 0x3e3e),
    (0x8377, 0x5992), (0x837b, 0x5187), (0x8389, 0x407c), (0x838a, 0x50dd), (0x838e, 0x45b2), (0x8396, 0x3855),
    (0x8398, 0x4969), (0x839e, 0x4d05), (0x83a2, 0x5a85), (0x83a9, 0x44bb), (0x83aa, 0x49ee), (0x83ab, 0x4101),
    (0x83bd, 0x4126), (0x83c1, 0x5603), (0x83c5, 0x399e), (0x83c9, 0x3fb6), (0x83ca, 0x3a75), (0x83cc, 0x3b17),
    (0x83d3, 0x3987), (0x83d6, 0x5549), (0x83dc, 0x5553), (0x83e9, 0x4415), (0x83eb, 0x3b2c), (0x83ef, 0x5bad),
    (0x83f0, 0x38f1), (0x83f1, 0x4067), (0x83f2, 0x4568), (0x83f4, 0x4a19), (0x83f9, 0x516e), (0x83fd, 0x489a),
    (0x8403, 0x56d5), (0x8404, 0x3e05), (0x840a, 0x3ee8), (0x840c, 0x4141), (0x840d, 0x58d4), (0x840e, 0x4e84),
    (0x8429, 0x56ae), (0x842c, 0x4110), (0x8431, 0x5c87), (0x8438, 0x4f18), (0x843d, 0x3ec1), (0x8449, 0x4c1b),
    (0x8457, 0x516f), (0x845b, 0x36d4), (0x8461, 0x58f4), (0x8463, 0x3e36), (0x8466, 0x4e85), (0x846b, 0x5b24),
    (0x846c, 0x50de), (0x846f, 0x4aac), (0x8475, 0x3b0e), (0x847a, 0x53d0), (0x8490, 0x487a), (0x8494, 0x4943),
    (0x8499, 0x41e4), (0x849c, 0x462d), (0x84a1, 0x4347), (0x84b2, 0x58f5), (0x84b8, 0x53d9), (0x84bb, 0x4aad),
    (0x84bc, 0x554a), (0x84bf, 0x5b25), (0x84c0, 0x47df), (0x84c2, 0x41bb), (0x84c4, 0x56c2), (0x84c6, 0x46f7),
    (0x84c9, 0x4db7), (0x84cb, 0x377a), (0x84cd, 0x4944), (0x84d1, 0x45b3), (0x84da, 0x487b), (0x84ec, 0x4438),
    (0x84ee, 0x3f7a), (0x84f4, 0x48ae), (0x84fc, 0x3fd3), (0x8511, 0x41b0), (0x8513, 0x4111), (0x8514, 0x4424),
    (0x8517, 0x50a4), (0x8518, 0x463b), (0x851a, 0x4e52), (0x851e, 0x4040), (0x8521, 0x5554), (0x8523, 0x50df),
    (0x8525, 0x569e), (0x852c, 0x47c9), (0x852d, 0x4f4e), (0x852f, 0x547b), (0x853d, 0x58dd), (0x853f, 0x4e86),
    (0x8541, 0x3d61), (0x8543, 0x4371), (0x8549, 0x5686), (0x854e, 0x39d5), (0x8553, 0x4ded), (0x8559, 0x5b01),
    (0x8563, 0x48af), (0x8568, 0x3a95), (0x8569, 0x580c), (0x856a, 0x4202), (0x856d, 0x47ca), (0x8584, 0x42aa),
    (0x8587, 0x4286), (0x858f, 0x4f66), (0x8591, 0x3764), (0x8594, 0x50e0), (0x859b, 0x4721), (0x85a6, 0x55d9),
    (0x85a8, 0x5c83), (0x85a9, 0x4634), (0x85aa, 0x496a), (0x85af, 0x46e4), (0x85b0, 0x5c80), (0x85ba, 0x52d2),
    (0x85c1, 0x38f2), (0x85c9, 0x50a5), (0x85cd, 0x3ed7), (0x85ce, 0x496b), (0x85cf, 0x50e1), (0x85d5, 0x4dd3),
    (0x85dc, 0x3f04), (0x85dd, 0x4c50), (0x85e4, 0x3e4f), (0x85e5, 0x4aae), (0x85e9, 0x4372), (0x85ea, 0x487c),
    (0x85f7, 0x5170), (0x85fa, 0x4087), (0x85fb, 0x52fe), (0x85ff, 0x3990), (0x8602, 0x4c51), (0x8606, 0x3fab),
    (0x8607, 0x47cb), (0x860a, 0x4ce4), (0x8616, 0x4ae5), (0x8617, 0x43eb), (0x861a, 0x4711), (0x862d, 0x3ecc),
    (0x863f, 0x3eb8), (0x864e, 0x5b26), (0x8650, 0x599a), (0x8654, 0x379e), (0x8655, 0x55be), (0x865b, 0x5a55),
    (0x865c, 0x3fac), (0x865e, 0x4dd4), (0x865f, 0x5b27), (0x8667, 0x5c97), (0x8679, 0x5b41), (0x868a, 0x4272),
    (0x868c, 0x4348), (0x8693, 0x500b), (0x86a3, 0x391e), (0x86a4, 0x52ff), (0x86a9, 0x575e), (0x86c7, 0x45b4),
    (0x86cb, 0x3d4c), (0x86d4, 0x5bf7), (0x86d9, 0x4cf4), (0x86db, 0x53a7), (0x86df, 0x39d6), (0x86e4, 0x59bc),
    (0x86ed, 0x5491), (0x86fe, 0x49ef), (0x8700, 0x5690), (0x8702, 0x4439), (0x8703, 0x496c), (0x8708, 0x4cd6),
    (0x8718, 0x5458), (0x871a, 0x4569), (0x871c, 0x4299), (0x874e, 0x36d6), (0x8755, 0x4955), (0x8757, 0x5be2),
    (0x875f, 0x4e87), (0x8766, 0x5993), (0x8768, 0x491f), (0x8774, 0x5b28), (0x8776, 0x522d), (0x8778, 0x4cf5),
    (0x8782, 0x3ee3), (0x878d, 0x4f42), (0x879f, 0x41bc), (0x87a2, 0x5af6), (0x87b3, 0x3d74), (0x87ba, 0x3eb9),
    (0x87c4, 0x5773), (0x87e0, 0x42c3), (0x87ec, 0x4712), (0x87ef, 0x4d97), (0x87f2, 0x56d0), (0x87f9, 0x5a3c),
    (0x87fb, 0x4f67), (0x87fe, 0x472b), (0x8805, 0x492d), (0x881f, 0x3edc), (0x8822, 0x53c2), (0x8823, 0x3f05),
    (0x8831, 0x38f3), (0x8836, 0x50c0), (0x883b, 0x4112), (0x8840, 0x5a79), (0x8846, 0x53ca), (0x884c, 0x5a49),
    (0x884d, 0x4b97), (0x8852, 0x5a72), (0x8853, 0x48b7), (0x8857, 0x36a3), (0x8859, 0x49f0), (0x885b, 0x4e88),
    (0x885d, 0x56d1), (0x8861, 0x5af7), (0x8862, 0x3a66), (0x8863, 0x4f68), (0x8868, 0x590b), (0x886b, 0x463c),
    (0x8870, 0x47f0), (0x8872, 0x3c81), (0x8877, 0x56d2), (0x887e, 0x3b3b), (0x887f, 0x3b3c), (0x8881, 0x4e6b),
    (0x8882, 0x41c0), (0x8888, 0x36a4), (0x888b, 0x3d82), (0x888d, 0x58f6), (0x8892, 0x3d4d), (0x8896, 0x487d),
    (0x8897, 0x547c), (0x889e, 0x390c), (0x88ab, 0x597b), (0x88b4, 0x38f4), (0x88c1, 0x5153), (0x88c2, 0x3f83),
    (0x88cf, 0x407d), (0x88d4, 0x4c53), (0x88d5, 0x4f19), (0x88d9, 0x3a7c), (0x88dc, 0x4416), (0x88dd, 0x50e2),
    (0x88df, 0x45b5), (0x88e1, 0x407e), (0x88e8, 0x456a), (0x88f3, 0x465a), (0x88f4, 0x435b), (0x88f5, 0x435c),
    (0x88f8, 0x3eba), (0x88fd, 0x52d3), (0x8907, 0x4425), (0x8910, 0x36d5), (0x8912, 0x58f7), (0x8913, 0x4417),
    (0x8918, 0x4e89), (0x8919, 0x435d), (0x8925, 0x4da2), (0x892a, 0x582e), (0x8936, 0x4923), (0x8938, 0x4041),
    (0x893b, 0x4722), (0x8941, 0x3765), (0x8944, 0x4ac8), (0x895f, 0x3b3d), (0x8964, 0x3ed8), (0x896a, 0x411b),
    (0x8972, 0x4924), (0x897f, 0x46e5), (0x8981, 0x4d98), (0x8983, 0x3d62), (0x8986, 0x4426), (0x8987, 0x58bf),
    (0x898b, 0x3821), (0x898f, 0x3b0f), (0x8993, 0x4143), (0x8996, 0x4945), (0x89a1, 0x3818), (0x89a9, 0x3e06),
    (0x89aa, 0x5766), (0x89b2, 0x3b2d), (0x89ba, 0x36b3), (0x89bd, 0x3ed9), (0x89c0, 0x399f), (0x89d2, 0x36b4),
    (0x89e3, 0x5a3d), (0x89f4, 0x465b), (0x89f8, 0x5691), (0x8a00, 0x4ae2), (0x8a02, 0x5257), (0x8a03, 0x44bc),
    (0x8a08, 0x38d1), (0x8a0a, 0x496d), (0x8a0c, 0x5b42), (0x8a0e, 0x5823), (0x8a13, 0x5c81), (0x8a16, 0x5ca8),
    (0x8a17, 0x5793), (0x8a18, 0x3bdf), (0x8a1b, 0x4cf6), (0x8a1d, 0x49f1), (0x8a1f, 0x47e7), (0x8a23, 0x382a),
    (0x8a25, 0x3cca), (0x8a2a, 0x4349), (0x8a2d, 0x4723), (0x8a31, 0x5a56), (0x8a34, 0x47cc), (0x8a36, 0x36a5),
    (0x8a3a, 0x547d), (0x8a3b, 0x53a8), (0x8a50, 0x45b6), (0x8a54, 0x5300), (0x8a55, 0x58d5), (0x8a5b, 0x5171),
    (0x8a5e, 0x45b7), (0x8a60, 0x4c3c), (0x8a62, 0x48b0), (0x8a63, 0x4c54), (0x8a66, 0x4946), (0x8a69, 0x4947),
    (0x8a6d, 0x3a9b), (0x8a6e, 0x520f), (0x8a70, 0x5cc5), (0x8a71, 0x5bae), (0x8a72, 0x5a3e), (0x8a73, 0x465c),
    (0x8a75, 0x4713), (0x8a79, 0x55f3), (0x8a85, 0x53a9), (0x8a87, 0x3988), (0x8a8c, 0x5459), (0x8a8d, 0x500c),
    (0x8a93, 0x46e6), (0x8a95, 0x57fe), (0x8a98, 0x4f1a), (0x8a9e, 0x4ad5), (0x8aa0, 0x47a3), (0x8aa1, 0x38d2),
    (0x8aa3, 0x4203), (0x8aa4, 0x4cd7), (0x8aa5, 0x38f5), (0x8aa6, 0x47e8), (0x8aa8, 0x5bf8), (0x8aaa, 0x4724),
    (0x8ab0, 0x487e), (0x8ab2, 0x3989), (0x8ab9, 0x456b), (0x8abc, 0x4f69), (0x8abe, 0x4f48), (0x8abf, 0x5301),
    (0x8ac2, 0x55f4), (0x8ac4, 0x48b1), (0x8ac7, 0x3d63), (0x8acb, 0x5604), (0x8acd, 0x515a), (0x8acf, 0x56af),
    (0x8ad2, 0x3ef6), (0x8ad6, 0x3fba), (0x8adb, 0x4f1b), (0x8adc, 0x55fc), (0x8ae1, 0x4948), (0x8ae6, 0x560d),
    (0x8ae7, 0x5a3f), (0x8aea, 0x5258), (0x8aeb, 0x36cc), (0x8aed, 0x4f1c), (0x8aee, 0x50a6), (0x8af1, 0x5c90),
    (0x8af6, 0x49df), (0x8af7, 0x5973), (0x8af8, 0x52d4), (0x8afa, 0x4ae3), (0x8afe, 0x3c06), (0x8b00, 0x41d6),
    (0x8b01, 0x4a10), (0x8b02, 0x4e8a), (0x8b04, 0x3e50), (0x8b0e, 0x4287), (0x8b10, 0x429a), (0x8b14, 0x599b),
    (0x8b16, 0x47d9), (0x8b17, 0x434a), (0x8b19, 0x382e), (0x8b1a, 0x4ff9), (0x8b1b, 0x3766), (0x8b1d, 0x45b8),
    (0x8b20, 0x4d99), (0x8b28, 0x41d7), (0x8b2b, 0x5188), (0x8b2c, 0x4050), (0x8b33, 0x3a67), (0x8b39, 0x3b2e),
    (0x8b41, 0x5baf), (0x8b49, 0x53da), (0x8b4e, 0x5c99), (0x8b4f, 0x3be0), (0x8b58, 0x4956), (0x8b5a, 0x3d64),
    (0x8b5c, 0x4418), (0x8b66, 0x3856), (0x8b6c, 0x456c), (0x8b6f, 0x4b70), (0x8b70, 0x4fca), (0x8b74, 0x3822),
    (0x8b77, 0x5b29), (0x8b7d, 0x4c55), (0x8b80, 0x3e1a), (0x8b8a, 0x43f1), (0x8b90, 0x487f), (0x8b92, 0x5533),
    (0x8b93, 0x4aca), (0x8b96, 0x5534), (0x8b9a, 0x5521), (0x8c37, 0x3902), (0x8c3f, 0x38d3), (0x8c41, 0x5bcc),
    (0x8c46, 0x3e40), (0x8c48, 0x3be1), (0x8c4a, 0x5974), (0x8c4c, 0x4d06), (0x8c55, 0x4949), (0x8c5a, 0x3e23),
    (0x8c61, 0x465d), (0x8c6a, 0x5b2a), (0x8c6b, 0x4c56), (0x8c79, 0x590c), (0x8c7a, 0x494a), (0x8c82, 0x5687),
    (0x8c8a, 0x4138), (0x8c8c, 0x41d8), (0x8c9d, 0x58c0), (0x8c9e, 0x5259), (0x8ca0, 0x44bd), (0x8ca1, 0x5154),
    (0x8ca2, 0x391f), (0x8ca7, 0x457d), (0x8ca8, 0x5bb0), (0x8ca9, 0x584f), (0x8caa, 0x5804), (0x8cab, 0x39a0),
    (0x8cac, 0x55ba), (0x8caf, 0x5172), (0x8cb0, 0x47ad), (0x8cb3, 0x4fec), (0x8cb4, 0x3aa1), (0x8cb6, 0x58d0),
    (0x8cb7, 0x4133), (0x8cb8, 0x3d83), (0x8cbb, 0x456d), (0x8cbc, 0x55fd), (0x8cbd, 0x4feb), (0x8cbf, 0x4204),
    (0x8cc0, 0x5994), (0x8cc1, 0x44da), (0x8cc2, 0x3fc6), (0x8cc3, 0x5025), (0x8cc4, 0x5bf9), (0x8cc7, 0x50a7),
    (0x8cc8, 0x36a6), (0x8cca, 0x5189), (0x8cd1, 0x547e), (0x8cd3, 0x457e), (0x8cda, 0x3fc7), (0x8cdc, 0x45b9),
    (0x8cde, 0x465e), (0x8ce0, 0x435e), (0x8ce2, 0x5a74), (0x8ce3, 0x4134), (0x8ce4, 0x55da), (0x8ce6, 0x44be),
    (0x8cea, 0x5492), (0x8ced, 0x3e07), (0x8cf4, 0x3fc8), (0x8cfb, 0x44bf), (0x8cfc, 0x3a68), (0x8cfd, 0x4662),
    (0x8d04, 0x545b), (0x8d05, 0x5736), (0x8d07, 0x4f36), (0x8d08, 0x53db), (0x8d0a, 0x5522), (0x8d0d, 0x472c),
    (0x8d13, 0x50e3), (0x8d16, 0x47da), (0x8d64, 0x518a), (0x8d66, 0x45ba), (0x8d6b, 0x5a60), (0x8d70, 0x53aa),
    (0x8d73, 0x3b10), (0x8d74, 0x44c0), (0x8d77, 0x3be2), (0x8d85, 0x5688), (0x8d8a, 0x4e73), (0x8d99, 0x5302),
    (0x8da3, 0x5741), (0x8da8, 0x56b0), (0x8db3, 0x530c), (0x8dba, 0x44c1), (0x8dbe, 0x545c), (0x8dc6, 0x5818),
    (0x8dcb, 0x432d), (0x8dcc, 0x5493), (0x8dcf, 0x36a7), (0x8ddb, 0x5848), (0x8ddd, 0x3790), (0x8de1, 0x518b),
    (0x8de3, 0x4714), (0x8de8, 0x398a), (0x8def, 0x3fad), (0x8df3, 0x3e08), (0x8e0a, 0x4db8), (0x8e0f, 0x3d69),
    (0x8e10, 0x55db), (0x8e1e, 0x3791), (0x8e2a, 0x5380), (0x8e30, 0x4f1d), (0x8e35, 0x5381), (0x8e42, 0x4f1e),
    (0x8e44, 0x52d5), (0x8e47, 0x379f), (0x8e48, 0x3e09), (0x8e49, 0x550d), (0x8e4a, 0x5b02), (0x8e59, 0x56c3),
    (0x8e5f, 0x518c), (0x8e60, 0x55cb), (0x8e74, 0x56c4), (0x8e76, 0x3a96), (0x8e81, 0x5303), (0x8e87, 0x5173),
    (0x8e8a, 0x53ab), (0x8e8d, 0x4aaf), (0x8eaa, 0x4088), (0x8eab, 0x496e), (0x8eac, 0x3a88), (0x8ec0, 0x3a69),
    (0x8eca, 0x550e), (0x8ecb, 0x4a11), (0x8ecc, 0x3a9c), (0x8ecd, 0x3a7d), (0x8ed2, 0x5a5a), (0x8edf, 0x4b98),
    (0x8eeb, 0x547f), (0x8ef8, 0x56c5), (0x8efb, 0x36a8), (0x8efe, 0x4957), (0x8f03, 0x39d7), (0x8f05, 0x3fae),
    (0x8f09, 0x5155), (0x8f12, 0x55fe), (0x8f13, 0x4113), (0x8f14, 0x4419), (0x8f15, 0x3857), (0x8f1b, 0x3ef7),
    (0x8f1c, 0x575f), (0x8f1d, 0x5c91), (0x8f1e, 0x4127), (0x8f1f, 0x55e8), (0x8f26, 0x3f7b), (0x8f27, 0x4407),
    (0x8f29, 0x435f), (0x8f2a, 0x405a), (0x8f2f, 0x549b), (0x8f33, 0x53ac), (0x8f38, 0x4880), (0x8f39, 0x4427),
    (0x8f3b, 0x4428), (0x8f3e, 0x5210), (0x8f3f, 0x4b60), (0x8f44, 0x59ac), (0x8f45, 0x4e6c), (0x8f49, 0x5211),
    (0x8f4d, 0x55e9), (0x8f4e, 0x39d8), (0x8f5d, 0x4b61), (0x8f5f, 0x39c3), (0x8f62, 0x3f10), (0x8f9b, 0x496f),
    (0x8f9c, 0x38f7), (0x8fa3, 0x3ecf), (0x8fa6, 0x5850), (0x8fa8, 0x43f2), (0x8fad, 0x45bb), (0x8faf, 0x43f3),
    (0x8fb0, 0x5480), (0x8fb1, 0x4da3), (0x8fb2, 0x3cb9), (0x8fc2, 0x4dd5), (0x8fc5, 0x4971), (0x8fce, 0x4c3d),
    (0x8fd1, 0x3b2f), (0x8fd4, 0x42c4), (0x8fe6, 0x36a9), (0x8fea, 0x518d), (0x8feb, 0x42ab), (0x8fed, 0x5494),
    (0x8ff0, 0x48b8), (0x8ff2, 0x380f), (0x8ff7, 0x4288), (0x8ff9, 0x518e), (0x8ffd, 0x56b1), (0x9000, 0x582f),
    (0x9001, 0x47e9), (0x9002, 0x39a6), (0x9003, 0x3e0a), (0x9005, 0x5c78), (0x9006, 0x4b72), (0x9008, 0x5af8),
    (0x900b, 0x58f8), (0x900d, 0x47cd), (0x900f, 0x5835), (0x9010, 0x56c6), (0x9011, 0x3a6a), (0x9014, 0x3e0b),
    (0x9015, 0x3858), (0x9017, 0x3e41), (0x9019, 0x5174), (0x901a, 0x582a), (0x901d, 0x46e7), (0x901e, 0x3f96),
    (0x901f, 0x47db), (0x9020, 0x5304), (0x9021, 0x53c3), (0x9022, 0x443a), (0x9023, 0x3f7c), (0x902e, 0x560e),
    (0x9031, 0x53ad), (0x9032, 0x5481), (0x9035, 0x3b11), (0x9038, 0x5018), (0x903c, 0x5989), (0x903e, 0x4f20),
    (0x9041, 0x3e46), (0x9042, 0x4881), (0x9047, 0x4dd6), (0x904a, 0x4f1f), (0x904b, 0x4e4e), (0x904d, 0x58cd),
    (0x904e, 0x398b), (0x9050, 0x5995), (0x9051, 0x5be3), (0x9053, 0x3e0c), (0x9054, 0x3d54), (0x9055, 0x4e8b),
    (0x9059, 0x4d9a), (0x905c, 0x47e0), (0x905d, 0x3d6a), (0x905e, 0x560f), (0x9060, 0x4e6d), (0x9061, 0x47ce),
    (0x9063, 0x3823), (0x9069, 0x518f), (0x906d, 0x5305), (0x906e, 0x550f), (0x906f, 0x3e47), (0x9072, 0x545d),
    (0x9075, 0x53c4), (0x9077, 0x55dc), (0x9078, 0x4715), (0x907a, 0x4f21), (0x907c, 0x4034), (0x907d, 0x3793),
    (0x907f, 0x597c), (0x9080, 0x4d9c), (0x9081, 0x4135), (0x9082, 0x5a40), (0x9083, 0x4882), (0x9084, 0x5bc6),
    (0x9087, 0x4fed), (0x9088, 0x4102), (0x908a, 0x43f4), (0x908f, 0x3ebb), (0x9091, 0x4f54), (0x9095, 0x4cec),
    (0x9099, 0x4128), (0x90a2, 0x5af9), (0x90a3, 0x3c00), (0x90a6, 0x434b), (0x90a8, 0x5695), (0x90aa, 0x45bc),
    (0x90af, 0x36e8), (0x90b0, 0x5819), (0x90b1, 0x3a6b), (0x90b5, 0x47cf), (0x90b8, 0x5175), (0x90c1, 0x4de3),
    (0x90ca, 0x39d9), (0x90de, 0x3ee4), (0x90e1, 0x3a7e), (0x90e8, 0x44c2), (0x90ed, 0x3991), (0x90f5, 0x4dd7),
    (0x90fd, 0x3e0d), (0x9102, 0x4a00), (0x9112, 0x56b2), (0x9115, 0x5a4e), (0x9119, 0x456e), (0x9127, 0x3e51),
    (0x912d, 0x525a), (0x9132, 0x3d4e), (0x9149, 0x4f22), (0x914a, 0x525b), (0x914b, 0x56b3), (0x914c, 0x50b3),
    (0x914d, 0x4360), (0x914e, 0x53ae), (0x9152, 0x53af), (0x9162, 0x5689), (0x9169, 0x41bd), (0x916a, 0x3ec3),
    (0x916c, 0x4883), (0x9175, 0x5c6a), (0x9177, 0x5b30), (0x9178, 0x462e), (0x9187, 0x48b2), (0x9189, 0x5742),
    (0x918b, 0x568a), (0x918d, 0x52d6), (0x9192, 0x47a4), (0x919c, 0x56b4), (0x91ab, 0x4fcb), (0x91ac, 0x50e4),
    (0x91ae, 0x568b), (0x91af, 0x5b03), (0x91b1, 0x432e), (0x91b4, 0x3f9f), (0x91b5, 0x3784), (0x91c0, 0x4acb),
    (0x91c7, 0x5555), (0x91c9, 0x4f23), (0x91cb, 0x46f8), (0x91cc, 0x407f), (0x91cd, 0x53cb), (0x91ce, 0x4aa6),
    (0x91cf, 0x3ef8), (0x91d0, 0x4080), (0x91d1, 0x3bf0), (0x91d7, 0x47f1), (0x91d8, 0x525c), (0x91dc, 0x44c3),
    (0x91dd, 0x5771), (0x91e3, 0x5306), (0x91e7, 0x55dd), (0x91ea, 0x4dd8), (0x91f5, 0x5556), (0x920d, 0x3e48),
    (0x9210, 0x380b), (0x9211, 0x5851), (0x9212, 0x463f), (0x9217, 0x4f38), (0x921e, 0x3b18), (0x9234, 0x3f97),
    (0x923a, 0x4cde), (0x923f, 0x5212), (0x9240, 0x3750), (0x9245, 0x3794), (0x9249, 0x5a75), (0x9257, 0x382f),
    (0x925b, 0x4b9c), (0x925e, 0x4e74), (0x9262, 0x432f), (0x9264, 0x3a6c), (0x9265, 0x48b9), (0x9266, 0x525d),
    (0x9280, 0x4f49), (0x9283, 0x569f), (0x9285, 0x3e37), (0x9291, 0x4716), (0x9293, 0x5213), (0x9296, 0x4884),
    (0x9298, 0x41be), (0x929c, 0x59b6), (0x92b3, 0x4c58), (0x92b6, 0x3a6d), (0x92b7, 0x47d0), (0x92b9, 0x4885),
    (0x92cc, 0x525e), (0x92cf, 0x5a86), (0x92d2, 0x443b), (0x92e4, 0x46e8), (0x92ea, 0x58f9), (0x92f8, 0x3795),
    (0x92fc, 0x3767), (0x9304, 0x3fb7), (0x9310, 0x56b5), (0x9318, 0x56b6), (0x931a, 0x515b), (0x931e, 0x48b3),
    (0x931f, 0x3d65), (0x9320, 0x525f), (0x9321, 0x3be3), (0x9322, 0x5214), (0x9324, 0x3be4), (0x9326, 0x3b3f),
    (0x9328, 0x41f0), (0x932b, 0x46f9), (0x932e, 0x38f8), (0x932f, 0x5514), (0x9348, 0x4c3f), (0x934a, 0x3f7d),
    (0x934b, 0x398c), (0x934d, 0x3e0e), (0x9354, 0x4a01), (0x935b, 0x3d4f), (0x936e, 0x4f24), (0x9375, 0x37a0),
    (0x937c, 0x5772), (0x937e, 0x5382), (0x938c, 0x3830), (0x9394, 0x4db9), (0x9396, 0x47ef), (0x939a, 0x56b7),
    (0x93a3, 0x5afa), (0x93a7, 0x377c), (0x93ac, 0x5b2b), (0x93ad, 0x5482), (0x93b0, 0x5019), (0x93c3, 0x530d),
    (0x93d1, 0x5190), (0x93de, 0x4dba), (0x93e1, 0x3859), (0x93e4, 0x4042), (0x93f6, 0x54fc), (0x9404, 0x5bfe),
    (0x9418, 0x5383), (0x9425, 0x4717), (0x942b, 0x5215), (0x9435, 0x55ea), (0x9438, 0x57f4), (0x9444, 0x53b0),
    (0x9451, 0x36e9), (0x9452, 0x36ea), (0x945b, 0x39b3), (0x947d, 0x5523), (0x947f, 0x5515), (0x9577, 0x50e5),
    (0x9580, 0x4273), (0x9583, 0x472d), (0x9589, 0x58de), (0x958b, 0x377d), (0x958f, 0x4f39), (0x9591, 0x59a7),
    (0x9592, 0x59a8), (0x9593, 0x36cd), (0x9594, 0x4297), (0x9598, 0x3751), (0x95a3, 0x36b5), (0x95a4, 0x59bd),
    (0x95a5, 0x4377), (0x95a8, 0x3b12), (0x95ad, 0x3f06), (0x95b1, 0x4ba8), (0x95bb, 0x4c15), (0x95bc, 0x4a12),
    (0x95c7, 0x4a1a), (0x95ca, 0x5bcd), (0x95d4, 0x59be), (0x95d5, 0x3a97), (0x95d6, 0x5839), (0x95dc, 0x39a1),
    (0x95e1, 0x55de), (0x95e2, 0x43ec), (0x961c, 0x44c4), (0x9621, 0x55df), (0x962a, 0x58b2), (0x962e, 0x4d07),
    (0x9632, 0x434c), (0x963b, 0x5307), (0x963f, 0x49f2), (0x9640, 0x5782), (0x9642, 0x597d), (0x9644, 0x44c5),
    (0x964b, 0x4043), (0x964c, 0x4139), (0x964d, 0x3768), (0x9650, 0x59a9), (0x965b, 0x58df), (0x965c, 0x59bf),
    (0x965d, 0x472e), (0x965e, 0x492e), (0x965f, 0x55cc), (0x9662, 0x4e6f), (0x9663, 0x5483), (0x9664, 0x52d7),
    (0x966a, 0x4361), (0x9670, 0x4f4f), (0x9673, 0x5484), (0x9675, 0x4068), (0x9676, 0x3e0f), (0x9677, 0x59b7),
    (0x9678, 0x4054), (0x967d, 0x4acc), (0x9685, 0x4dd9), (0x9686, 0x405f), (0x968a, 0x3d84), (0x968b, 0x4886),
    (0x968d, 0x5be4), (0x968e, 0x38d4), (0x9694, 0x3819), (0x9695, 0x4e4f), (0x9698, 0x4a2f), (0x9699, 0x3b21),
    (0x969b, 0x52d8), (0x969c, 0x5146), (0x96a3, 0x4089), (0x96a7, 0x4887), (0x96a8, 0x4888), (0x96aa, 0x5a5c),
    (0x96b1, 0x4f4a), (0x96b7, 0x3fa0), (0x96bb, 0x55cd), (0x96c0, 0x50b4), (0x96c1, 0x4a0b), (0x96c4, 0x4e56),
    (0x96c5, 0x49f3), (0x96c6, 0x54fd), (0x96c7, 0x38f9), (0x96c9, 0x5760), (0x96cb, 0x53c5), (0x96cc, 0x50a8),
    (0x96cd, 0x4ced), (0x96ce, 0x5176), (0x96d5, 0x5308), (0x96d6, 0x4889), (0x96d9, 0x49e3), (0x96db, 0x56b8),
    (0x96dc, 0x50c1), (0x96e2, 0x4081), (0x96e3, 0x3c10), (0x96e8, 0x4dda), (0x96e9, 0x4ddb), (0x96ea, 0x4725),
    (0x96ef, 0x4274), (0x96f0, 0x44db), (0x96f2, 0x4e50), (0x96f6, 0x3f98), (0x96f7, 0x3fc9), (0x96f9, 0x42ac),
    (0x96fb, 0x5216), (0x9700, 0x488a), (0x9706, 0x5260), (0x9707, 0x5485), (0x9711, 0x5228), (0x9713, 0x4c5a),
    (0x9716, 0x4090), (0x9719, 0x4c41), (0x971c, 0x465f), (0x971e, 0x5996), (0x9727, 0x4205), (0x9730, 0x462f),
    (0x9732, 0x3faf), (0x9739, 0x43ed), (0x973d, 0x52d9), (0x9742, 0x3f11), (0x9744, 0x4a30), (0x9748, 0x3f99),
    (0x9751, 0x5605), (0x9756, 0x5261), (0x975c, 0x52c2), (0x975e, 0x456f), (0x9761, 0x4289), (0x9762, 0x414d),
    (0x9769, 0x5a61), (0x976d, 0x500e), (0x9774, 0x5bb1), (0x9777, 0x500f), (0x977a, 0x411c), (0x978b, 0x5b04),
    (0x978d, 0x4a0c), (0x978f, 0x3920), (0x97a0, 0x3a76), (0x97a8, 0x36d7), (0x97ab, 0x3a77), (0x97ad, 0x58ce),
    (0x97c6, 0x55e0), (0x97cb, 0x4e8c), (0x97d3, 0x59aa), (0x97dc, 0x3e10), (0x97f3, 0x4f50), (0x97f6, 0x47d1),
    (0x97fb, 0x4e51), (0x97ff, 0x5a4f), (0x9800, 0x5b2c), (0x9801, 0x5a7a), (0x9802, 0x52c3), (0x9803, 0x385a),
    (0x9805, 0x5a30), (0x9806, 0x48b4), (0x9808, 0x488b), (0x980a, 0x4de4), (0x980c, 0x47ea), (0x9810, 0x4c5b),
    (0x9811, 0x4d08), (0x9812, 0x42c5), (0x9813, 0x3e24), (0x9817, 0x5849), (0x9818, 0x3f9a), (0x982d, 0x3e42),
    (0x9830, 0x5a87), (0x9838, 0x385b), (0x9839, 0x5830), (0x983b, 0x457f), (0x9846, 0x398d), (0x984c, 0x52da),
    (0x984d, 0x4a37), (0x984e, 0x4a02), (0x9854, 0x4a0d), (0x9858, 0x4e70), (0x985a, 0x5217), (0x985e, 0x4051),
    (0x9865, 0x5b2d), (0x9867, 0x38fa), (0x986b, 0x5218), (0x986f, 0x5a76), (0x98a8, 0x5975), (0x98af, 0x4640),
    (0x98b1, 0x581a), (0x98c4, 0x590e), (0x98c7, 0x590d), (0x98db, 0x4570), (0x98dc, 0x4373), (0x98df, 0x4958),
    (0x98e1, 0x47e1), (0x98e2, 0x3be5), (0x98ed, 0x5765), (0x98ee, 0x4f51), (0x98ef, 0x42c6), (0x98f4, 0x4ff0),
    (0x98fc, 0x45bd), (0x98fd, 0x58fa), (0x98fe, 0x4959), (0x9903, 0x39da), (0x9909, 0x5a50), (0x990a, 0x4ace),
    (0x990c, 0x4ff1), (0x9910, 0x5524), (0x9913, 0x49f4), (0x9918, 0x4b63), (0x991e, 0x5219), (0x9920, 0x4408),
    (0x9928, 0x39a2), (0x9945, 0x4114), (0x9949, 0x3b30), (0x994b, 0x3a9d), (0x994c, 0x5525), (0x994d, 0x4718),
    (0x9951, 0x3be6), (0x9952, 0x4d9d), (0x9954, 0x4cee), (0x9957, 0x5a51), (0x9996, 0x488c), (0x9999, 0x5a52),
    (0x999d, 0x5987), (0x99a5, 0x4429), (0x99a8, 0x5afb), (0x99ac, 0x40fa), (0x99ad, 0x4ad6), (0x99ae, 0x5976),
    (0x99b1, 0x5783), (0x99b3, 0x5761), (0x99b4, 0x48b5), (0x99b9, 0x501a), (0x99c1, 0x42ad), (0x99d0, 0x53b1),
    (0x99d1, 0x3ca9), (0x99d2, 0x3a6e), (0x99d5, 0x36aa), (0x99d9, 0x44c6), (0x99dd, 0x5784), (0x99df, 0x45be),
    (0x99ed, 0x5a41), (0x99f1, 0x3ec4), (0x99ff, 0x53c6), (0x9a01, 0x4583), (0x9a08, 0x4409), (0x9a0e, 0x3be7),
    (0x9a0f, 0x3be8), (0x9a19, 0x58cf), (0x9a2b, 0x37a1), (0x9a30, 0x3e52), (0x9a36, 0x56b9), (0x9a37, 0x47d2),
    (0x9a40, 0x413a), (0x9a43, 0x590f), (0x9a45, 0x3a6f), (0x9a4d, 0x5c6b), (0x9a55, 0x39db), (0x9a57, 0x5a5d),
    (0x9a5a, 0x385c), (0x9a5b, 0x4b73), (0x9a5f, 0x5743), (0x9a62, 0x3f07), (0x9a65, 0x3be9), (0x9a69, 0x5bc7),
    (0x9a6a, 0x3f08), (0x9aa8, 0x3910), (0x9ab8, 0x5a42), (0x9ad3, 0x488d), (0x9ad4, 0x5610), (0x9ad8, 0x38fb),
    (0x9ae5, 0x4c16), (0x9aee, 0x4330), (0x9b1a, 0x488e), (0x9b27, 0x4035), (0x9b2a, 0x5836), (0x9b31, 0x4e53),
    (0x9b3c, 0x3b02), (0x9b41, 0x39bf), (0x9b42, 0x5b36), (0x9b43, 0x4331), (0x9b44, 0x4369), (0x9b45, 0x4136),
    (0x9b4f, 0x4e8d), (0x9b54, 0x40fb), (0x9b5a, 0x4ad7), (0x9b6f, 0x3fb0), (0x9b8e, 0x5229), (0x9b91, 0x58fb),
    (0x9b9f, 0x4a0e), (0x9bab, 0x39dc), (0x9bae, 0x4719), (0x9bc9, 0x4082), (0x9bd6, 0x5606), (0x9be4, 0x390d),
    (0x9be8, 0x385d), (0x9c0d, 0x56ba), (0x9c10, 0x4a03), (0x9c12, 0x442a), (0x9c15, 0x5997), (0x9c25, 0x5bc8),
    (0x9c32, 0x4cd8), (0x9c3b, 0x4115), (0x9c47, 0x3769), (0x9c49, 0x43f7), (0x9c57, 0x408a), (0x9ce5, 0x5309),
    (0x9ce7, 0x44c7), (0x9ce9, 0x3a70), (0x9cf3, 0x443c), (0x9cf4, 0x41bf), (0x9cf6, 0x4b9e), (0x9d09, 0x49f5),
    (0x9d1b, 0x4e71), (0x9d26, 0x4a25), (0x9d28, 0x4a1e), (0x9d3b, 0x5b43), (0x9d51, 0x3824), (0x9d5d, 0x49f6),
    (0x9d60, 0x3903), (0x9d61, 0x4206), (0x9d6c, 0x44e6), (0x9d72, 0x50b5), (0x9da9, 0x41df), (0x9daf, 0x4a9a),
    (0x9db4, 0x599c), (0x9dc4, 0x38d5), (0x9dd7, 0x3a71), (0x9df2, 0x5744), (0x9df8, 0x5c9a), (0x9df9, 0x4f58),
    (0x9dfa, 0x3fb1), (0x9e1a, 0x4a9b), (0x9e1e, 0x3ecd), (0x9e75, 0x3fb2), (0x9e79, 0x59b8), (0x9e7d, 0x4c17),
    (0x9e7f, 0x3fb8), (0x9e92, 0x3bea), (0x9e93, 0x3fb9), (0x9e97, 0x3f09), (0x9e9d, 0x45bf), (0x9e9f, 0x408b),
    (0x9ea5, 0x413b), (0x9eb4, 0x3a78), (0x9eb5, 0x414e), (0x9ebb, 0x40fc), (0x9ebe, 0x5c92), (0x9ec3, 0x5be5),
    (0x9ecd, 0x46e9), (0x9ece, 0x3f0a), (0x9ed1, 0x5ca0), (0x9ed4, 0x380c), (0x9ed8, 0x4208), (0x9edb, 0x3d85),
    (0x9edc, 0x56cc), (0x9ede, 0x522a), (0x9ee8, 0x3d75), (0x9ef4, 0x428a), (0x9f07, 0x4cd9), (0x9f08, 0x43f8),
    (0x9f0e, 0x52c4), (0x9f13, 0x38fc), (0x9f20, 0x46ea), (0x9f3b, 0x4571), (0x9f4a, 0x52db), (0x9f4b, 0x5156),
    (0x9f4e, 0x5157), (0x9f52, 0x5762), (0x9f5f, 0x5177), (0x9f61, 0x3f9b), (0x9f67, 0x4726), (0x9f6a, 0x5516),
    (0x9f6c, 0x4ad8), (0x9f77, 0x4a04), (0x9f8d, 0x4036), (0x9f90, 0x434d), (0x9f95, 0x36eb), (0x9f9c, 0x3a72),
    (0xac00, 0x2342), (0xac01, 0x2343), (0xac02, 0x0000), (0xac03, 0x0001), (0xac04, 0x2344), (0xac05, 0x0002),
    (0xac06, 0x0003), (0xac07, 0x2345), (0xac08, 0x2346), (0xac09, 0x2347), (0xac0a, 0x2348), (0xac0b, 0x0004),
    (0xac0c, 0x0005), (0xac0d, 0x0006), (0xac0e, 0x0007), (0xac0f, 0x0008), (0xac10, 0x2349), (0xac11, 0x234a),
    (0xac12, 0x234b), (0xac13, 0x234c), (0xac14, 0x234d), (0xac15, 0x234e), (0xac16, 0x234f), (0xac17, 0x2350),
    (0xac18, 0x0009), (0xac19, 0x2351), (0xac1a, 0x2352), (0xac1b, 0x2353), (0xac1c, 0x2354), (0xac1d, 0x2355),
    (0xac1e, 0x000a), (0xac1f, 0x000b), (0xac20, 0x2356), (0xac21, 0x000c), (0xac22, 0x000d), (0xac23, 0x000e),
    (0xac24, 0x2357), (0xac25, 0x000f), (0xac26, 0x0010), (0xac27, 0x0011), (0xac28, 0x0012), (0xac29, 0x0013),
    (0xac2a, 0x0014), (0xac2b, 0x0015), (0xac2c, 0x2358), (0xac2d, 0x2359), (0xac2e, 0x0016), (0xac2f, 0x235a),
    (0xac30, 0x235b), (0xac31, 0x235c), (0xac32, 0x0017), (0xac33, 0x0018), (0xac34, 0x0019), (0xac35, 0x0020),
    (0xac36, 0x0021), (0xac37, 0x0022), (0xac38, 0x235d), (0xac39, 0x235e), (0xac3a, 0x0023), (0xac3b, 0x0024),
    (0xac3c, 0x235f), (0xac3d, 0x0025), (0xac3e, 0x0026), (0xac3f, 0x0027), (0xac40, 0x2360), (0xac41, 0x0028),
    (0xac42, 0x0029), (0xac43, 0x002a), (0xac44, 0x002b), (0xac45, 0x002c), (0xac46, 0x002d), (0xac47, 0x002e),
    (0xac48, 0x002f), (0xac49, 0x0030), (0xac4a, 0x0031), (0xac4b, 0x2361), (0xac4c, 0x0032), (0xac4d, 0x2362),
    (0xac4e, 0x0033), (0xac4f, 0x0034), (0xac50, 0x0035), (0xac51, 0x0036), (0xac52, 0x0037), (0xac53, 0x0038),
    (0xac54, 0x2363), (0xac55, 0x0039), (0xac56, 0x0040), (0xac57, 0x0041), (0xac58, 0x2364), (0xac59, 0x0042),
    (0xac5a, 0x0043), (0xac5b, 0x0044), (0xac5c, 0x2365), (0xac5d, 0x0045), (0xac5e, 0x0046), (0xac5f, 0x0047),
    (0xac60, 0x0048), (0xac61, 0x0049), (0xac62, 0x004a), (0xac63, 0x004b), (0xac64, 0x004c), (0xac65, 0x004d),
    (0xac66, 0x004e), (0xac67, 0x004f), (0xac68, 0x0050), (0xac69, 0x0051), (0xac6a, 0x0052), (0xac6b, 0x0053),
    (0xac6c, 0x0054), (0xac6d, 0x0055), (0xac6e, 0x0056), (0xac6f, 0x0057), (0xac70, 0x2366), (0xac71, 0x2367),
    (0xac72, 0x0058), (0xac73, 0x0059), (0xac74, 0x2368), (0xac75, 0x005a), (0xac76, 0x005b), (0xac77, 0x2369),
    (0xac78, 0x236a), (0xac79, 0x005c), (0xac7a, 0x236b), (0xac7b, 0x005d), (0xac7c, 0x005e), (0xac7d, 0x005f),
    (0xac7e, 0x0060), (0xac7f, 0x0061), (0xac80, 0x236c), (0xac81, 0x236d), (0xac82, 0x0062), (0xac83, 0x236e),
    (0xac84, 0x236f), (0xac85, 0x2370), (0xac86, 0x2371), (0xac87, 0x0063), (0xac88, 0x0064), (0xac89, 0x2372),
    (0xac8a, 0x2373), (0xac8b, 0x2374), (0xac8c, 0x2375), (0xac8d, 0x0065), (0xac8e, 0x0066), (0xac8f, 0x0067),
    (0xac90, 0x2376), (0xac91, 0x0068), (0xac92, 0x0069), (0xac93, 0x006a), (0xac94, 0x2377), (0xac95, 0x006b),
    (0xac96, 0x006c), (0xac97, 0x006d), (0xac98, 0x006e), (0xac99, 0x006f), (0xac9a, 0x0070), (0xac9b, 0x0071),
    (0xac9c, 0x2378), (0xac9d, 0x2379), (0xac9e, 0x0072), (0xac9f, 0x237a), (0xaca0, 0x237b), (0xaca1, 0x237c),
    (0xaca2, 0x0073), (0xaca3, 0x0074), (0xaca4, 0x0075), (0xaca5, 0x0076), (0xaca6, 0x0077), (0xaca7, 0x0078),
    (0xaca8, 0x237d), (0xaca9, 0x237e), (0xacaa, 0x237f), (0xacab, 0x0079), (0xacac, 0x2380), (0xacad, 0x007a),
    (0xacae, 0x007b), (0xacaf, 0x2381), (0xacb0, 0x2382), (0xacb1, 0x007c), (0xacb2, 0x007d), (0xacb3, 0x007e),
    (0xacb4, 0x007f), (0xacb5, 0x0080), (0xacb6, 0x0081), (0xacb7, 0x0082), (0xacb8, 0x2383), (0xacb9, 0x2384),
    (0xacba, 0x0083), (0xacbb, 0x2385), (0xacbc, 0x2386), (0xacbd, 0x2387), (0xacbe, 0x0084), (0xacbf, 0x0085),
    (0xacc0, 0x0086), (0xacc1, 0x2388), (0xacc2, 0x0087), (0xacc3, 0x0088), (0xacc4, 0x2389), (0xacc5, 0x0089),
    (0xacc6, 0x008a), (0xacc7, 0x008b), (0xacc8, 0x238a), (0xacc9, 0x008c), (0xacca, 0x008d), (0xaccb, 0x008e),
    (0xaccc, 0x238b), (0xaccd, 0x008f), (0xacce, 0x0090), (0xaccf, 0x0091), (0xacd0, 0x0092), (0xacd1, 0x0093),
    (0xacd2, 0x0094), (0xacd3, 0x0095), (0xacd4, 0x0096), (0xacd5, 0x238c), (0xacd6, 0x0097), (0xacd7, 0x238d),
    (0xacd8, 0x0098), (0xacd9, 0x0099), (0xacda, 0x009a), (0xacdb, 0x009b), (0xacdc, 0x009c), (0xacdd, 0x009d),
    (0xacde, 0x009e), (0xacdf, 0x009f), (0xace0, 0x238e), (0xace1, 0x238f), (0xace2, 0x00a0), (0xace3, 0x00a1),
    (0xace4, 0x2390), (0xace5, 0x00a2), (0xace6, 0x00a3), (0xace7, 0x2391), (0xace8, 0x2392), (0xace9, 0x00a4),
    (0xacea, 0x2393), (0xaceb, 0x00a5), (0xacec, 0x2394), (0xaced, 0x00a6), (0xacee, 0x00a7), (0xacef, 0x2395),
    (0xacf0, 0x2396), (0xacf1, 0x2397), (0xacf2, 0x00a8), (0xacf3, 0x2398), (0xacf4, 0x00a9), (0xacf5, 0x2399),
    (0xacf6, 0x239a), (0xacf7, 0x00aa), (0xacf8, 0x00ab), (0xacf9, 0x00ac), (0xacfa, 0x00ad), (0xacfb, 0x00ae),
    (0xacfc, 0x239b), (0xacfd, 0x239c), (0xacfe, 0x00af), (0xacff, 0x00b0), (0xad00, 0x239d), (0xad01, 0x00b1),
    (0xad02, 0x00b2), (0xad03, 0x00b3), (0xad04, 0x239e), (0xad05, 0x00b4), (0xad06, 0x239f), (0xad07, 0x00b5),
    (0xad08, 0x00b6), (0xad09, 0x00b7), (0xad0a, 0x00b8), (0xad0b, 0x00b9), (0xad0c, 0x2400), (0xad0d, 0x2401),
    (0xad0e, 0x00ba), (0xad0f, 0x2402), (0xad10, 0x00bb), (0xad11, 0x2403), (0xad12, 0x00bc), (0xad13, 0x00bd),
    (0xad14, 0x00be), (0xad15, 0x00bf), (0xad16, 0x00c0), (0xad17, 0x00c1), (0xad18, 0x2404), (0xad19, 0x00c2),
    (0xad1a, 0x00c3), (0xad1b, 0x00c4), (0xad1c, 0x2405), (0xad1d, 0x00c5), (0xad1e, 0x00c6), (0xad1f, 0x00c7),
    (0xad20, 0x2406), (0xad21, 0x00c8), (0xad22, 0x00c9), (0xad23, 0x00ca), (0xad24, 0x00cb), (0xad25, 0x00cc),
    (0xad26, 0x00cd), (0xad27, 0x00ce), (0xad28, 0x00cf), (0xad29, 0x2407), (0xad2a, 0x00d0), (0xad2b, 0x00d1),
    (0xad2c, 0x2408), (0xad2d, 0x2409), (0xad2e, 0x00d2), (0xad2f, 0x00d3), (0xad30, 0x00d4), (0xad31, 0x00d5),
    (0xad32, 0x00d6), (0xad33, 0x00d7), (0xad34, 0x240a), (0xad35, 0x240b), (0xad36, 0x00de), (0xad37, 0x00df),
    (0xad38, 0x240c), (0xad39, 0x00e0), (0xad3a, 0x00e1), (0xad3b, 0x00e2), (0xad3c, 0x240d), (0xad3d, 0x00e3),
    (0xad3e, 0x00e4), (0xad3f, 0x00e5), (0xad40, 0x00e6), (0xad41, 0x00e7), (0xad42, 0x00e8), (0xad43, 0x00e9),
    (0xad44, 0x240e), (0xad45, 0x240f), (0xad46, 0x00ea), (0xad47, 0x2410), (0xad48, 0x00eb), (0xad49, 0x2411),
    (0xad4a, 0x00ec), (0xad4b, 0x00ed), (0xad4c, 0x00ee), (0xad4d, 0x00ef), (0xad4e, 0x00f0), (0xad4f, 0x00f1),
    (0xad50, 0x2412), (0xad51, 0x00f2), (0xad52, 0x00f3), (0xad53, 0x00f4), (0xad54, 0x2413), (0xad55, 0x00f5),
    (0xad56, 0x00f6), (0xad57, 0x00f7), (0xad58, 0x2414), (0xad59, 0x00fe), (0xad5a, 0x00ff), (0xad5b, 0x0100),
    (0xad5c, 0x0101), (0xad5d, 0x0102), (0xad5e, 0x0103), (0xad5f, 0x0104), (0xad60, 0x0105), (0xad61, 0x2415),
    (0xad62, 0x0106), (0xad63, 0x2416), (0xad64, 0x0107), (0xad65, 0x0108), (0xad66, 0x0109), (0xad67, 0x010a),
    (0xad68, 0x010b), (0xad69, 0x010c), (0xad6a, 0x010d), (0xad6b, 0x010e), (0xad6c, 0x2417), (0xad6d, 0x2418),
    (0xad6e, 0x010f), (0xad6f, 0x0110), (0xad70, 0x2419), (0xad71, 0x0111), (0xad72, 0x0112), (0xad73, 0x241a),
    (0xad74, 0x241b), (0xad75, 0x241c), (0xad76, 0x241d), (0xad77, 0x0113), (0xad78, 0x0114), (0xad79, 0x0115),
    (0xad7a, 0x0116), (0xad7b, 0x241e), (0xad7c, 0x241f), (0xad7d, 0x2420), (0xad7e, 0x0117), (0xad7f, 0x2421),
    (0xad80, 0x0118), (0xad81, 0x2422), (0xad82, 0x2423), (0xad83, 0x0119), (0xad84, 0x011a), (0xad85, 0x011b),
    (0xad86, 0x011c), (0xad87, 0x011d), (0xad88, 0x2424), (0xad89, 0x2425), (0xad8a, 0x011e), (0xad8b, 0x011f),
    (0xad8c, 0x2426), (0xad8d, 0x0120), (0xad8e, 0x0121), (0xad8f, 0x0122), (0xad90, 0x2427), (0xad91, 0x0123),
    (0xad92, 0x0124), (0xad93, 0x0125), (0xad94, 0x0126), (0xad95, 0x0127), (0xad96, 0x0128), (0xad97, 0x0129),
    (0xad98, 0x012a), (0xad99, 0x012b), (0xad9a, 0x012c), (0xad9b, 0x012d), (0xad9c, 0x2428), (0xad9d, 0x2429),
    (0xad9e, 0x012e), (0xad9f, 0x012f), (0xada0, 0x0130), (0xada1, 0x0131), (0xada2, 0x0132), (0xada3, 0x0133),
    (0xada4, 0x242a), (0xada5, 0x0134), (0xada6, 0x0135), (0xada7, 0x0136), (0xada8, 0x0137), (0xada9, 0x0138),
    (0xadaa, 0x0139), (0xadab, 0x013a), (0xadac, 0x013b), (0xadad, 0x013c), (0xadae, 0x013d), (0xadaf, 0x013e),
    (0xadb0, 0x013f), (0xadb1, 0x0140), (0xadb2, 0x0141), (0xadb3, 0x0142), (0xadb4, 0x0143), (0xadb5, 0x0144),
    (0xadb6, 0x0145), (0xadb7, 0x242b), (0xadb8, 0x0146), (0xadb9, 0x0147), (0xadba, 0x0148), (0xadbb, 0x0149),
    (0xadbc, 0x014a), (0xadbd, 0x014b), (0xadbe, 0x014c), (0xadbf, 0x014d), (0xadc0, 0x242c), (0xadc1, 0x242d),
    (0xadc2, 0x014e), (0xadc3, 0x014f), (0xadc4, 0x242e), (0xadc5, 0x0150), (0xadc6, 0x0151), (0xadc7, 0x0152),
    (0xadc8, 0x242f), (0xadc9, 0x0153), (0xadca, 0x0154), (0xadcb, 0x0155), (0xadcc, 0x0156), (0xadcd, 0x0157),
    (0xadce, 0x0158), (0xadcf, 0x0159), (0xadd0, 0x2430), (0xadd1, 0x2431), (0xadd2, 0x015a), (0xadd3, 0x2432),
    (0xadd4, 0x015b), (0xadd5, 0x015c), (0xadd6, 0x015d), (0xadd7, 0x015e), (0xadd8, 0x015f), (0xadd9, 0x0160),
    (0xadda, 0x0161), (0xaddb, 0x0162), (0xaddc, 0x2433), (0xaddd, 0x0163), (0xadde, 0x0164), (0xaddf, 0x0165),
    (0xade0, 0x2434), (0xade1, 0x0166), (0xade2, 0x0167), (0xade3, 0x0168), (0xade4, 0x2435), (0xade5, 0x0169),
    (0xade6, 0x016a), (0xade7, 0x016b), (0xade8, 0x016c), (0xade9, 0x016d), (0xadea, 0x016e), (0xadeb, 0x016f),
    (0xadec, 0x0170), (0xaded, 0x0171), (0xadee, 0x0172), (0xadef, 0x0173), (0xadf0, 0x0174), (0xadf1, 0x0175),
    (0xadf2, 0x0176), (0xadf3, 0x0177), (0xadf4, 0x0178), (0xadf5, 0x0179), (0xadf6, 0x017a), (0xadf7, 0x017b),
    (0xadf8, 0x2436), (0xadf9, 0x2437), (0xadfa, 0x017c), (0xadfb, 0x017d), (0xadfc, 0x2438), (0xadfd, 0x017e),
    (0xadfe, 0x017f), (0xadff, 0x2439), (0xae00, 0x243a), (0xae01, 0x243b), (0xae02, 0x0180), (0xae03, 0x0181),
    (0xae04, 0x0182), (0xae05, 0x0183), (0xae06, 0x0184), (0xae07, 0x0185), (0xae08, 0x243c), (0xae09, 0x243d),
    (0xae0a, 0x0186), (0xae0b, 0x243e), (0xae0c, 0x0187), (0xae0d, 0x243f), (0xae0e, 0x0188), (0xae0f, 0x0189),
    (0xae10, 0x018a), (0xae11, 0x018b), (0xae12, 0x018c), (0xae13, 0x018d), (0xae14, 0x2440), (0xae15, 0x018e),
    (0xae16, 0x018f), (0xae17, 0x0190), (0xae18, 0x0191), (0xae19, 0x0192), (0xae1a, 0x0193), (0xae1b, 0x0194),
    (0xae1c, 0x0195), (0xae1d, 0x019c), (0xae1e, 0x019d), (0xae1f, 0x019e), (0xae20, 0x019f), (0xae21, 0x01a0),
    (0xae22, 0x01a1), (0xae23, 0x01a2), (0xae24, 0x01a3), (0xae25, 0x01a4), (0xae26, 0x01a5), (0xae27, 0x01a6),
    (0xae28, 0x01a7), (0xae29, 0x01a8), (0xae2a, 0x01a9), (0xae2b, 0x01aa), (0xae2c, 0x01ab), (0xae2d, 0x01ac),
    (0xae2e, 0x01ad), (0xae2f, 0x01ae), (0xae30, 0x2441), (0xae31, 0x2442), (0xae32, 0x01af), (0xae33, 0x01b0),
    (0xae34, 0x2443), (0xae35, 0x01b1), (0xae36, 0x01b2), (0xae37, 0x2444), (0xae38, 0x2445), (0xae39, 0x01b3),
    (0xae3a, 0x2446), (0xae3b, 0x01b4), (0xae3c, 0x01b5), (0xae3d, 0x01bc), (0xae3e, 0x01bd), (0xae3f, 0x01be),
    (0xae40, 0x2447), (0xae41, 0x2448), (0xae42, 0x01bf), (0xae43, 0x2449), (0xae44, 0x01c0), (0xae45, 0x244a),
    (0xae46, 0x244b), (0xae47, 0x01c1), (0xae48, 0x01c2), (0xae49, 0x01c3), (0xae4a, 0x244c), (0xae4b, 0x01c4),
    (0xae4c, 0x244d), (0xae4d, 0x244e), (0xae4e, 0x244f), (0xae4f, 0x01c5), (0xae50, 0x2450), (0xae51, 0x01c6),
    (0xae52, 0x01c7), (0xae53, 0x01c8), (0xae54, 0x2451), (0xae55, 0x01c9), (0xae56, 0x2452), (0xae57, 0x01ca),
    (0xae58, 0x01cb), (0xae59, 0x01cc), (0xae5a, 0x01cd), (0xae5b, 0x01ce), (0xae5c, 0x2453), (0xae5d, 0x2454),
    (0xae5e, 0x01cf), (0xae5f, 0x2455), (0xae60, 0x2456), (0xae61, 0x2457), (0xae62, 0x01d0), (0xae63, 0x01d1),
    (0xae64, 0x01d2), (0xae65, 0x2458), (0xae66, 0x01d3), (0xae67, 0x01d4), (0xae68, 0x2459), (0xae69, 0x245a),
    (0xae6a, 0x01d5), (0xae6b, 0x01d6), (0xae6c, 0x245b), (0xae6d, 0x01d7), (0xae6e, 0x01d8), (0xae6f, 0x01d9),
    (0xae70, 0x245c), (0xae71, 0x01da), (0xae72, 0x01db), (0xae73, 0x01dc), (0xae74, 0x01dd), (0xae75, 0x01de),
    (0xae76, 0x01df), (0xae77, 0x01e0), (0xae78, 0x245d), (0xae79, 0x24be), (0xae7a, 0x01e1), (0xae7b, 0x24bf),
    (0xae7c, 0x24c0), (0xae7d, 0x24c1), (0xae7e, 0x01e2), (0xae7f, 0x01e3), (0xae80, 0x01e4), (0xae81, 0x01e5),
    (0xae82, 0x01e6), (0xae83, 0x01e7), (0xae84, 0x24c2), (0xae85, 0x24c3), (0xae86, 0x01e8), (0xae87, 0x01e9),
    (0xae88, 0x01ea), (0xae89, 0x01eb), (0xae8a, 0x01ec), (0xae8b, 0x01ed), (0xae8c, 0x24c4), (0xae8d, 0x01ee),
    (0xae8e, 0x01ef), (0xae8f, 0x01f0), (0xae90, 0x01f1), (0xae91, 0x01f2), (0xae92, 0x01f3), (0xae93, 0x01f4),
    (0xae94, 0x01f5), (0xae95, 0x01f6), (0xae96, 0x01f7), (0xae97, 0x01f8), (0xae98, 0x01f9), (0xae99, 0x01fa),
    (0xae9a, 0x01fb), (0xae9b, 0x01fc), (0xae9c, 0x01fd), (0xae9d, 0x01fe), (0xae9e, 0x01ff), (0xae9f, 0x0200),
    (0xaea0, 0x0201), (0xaea1, 0x0202), (0xaea2, 0x0203), (0xaea3, 0x0204), (0xaea4, 0x0205), (0xaea5, 0x0206),
    (0xaea6, 0x0207), (0xaea7, 0x0208), (0xaea8, 0x0209), (0xaea9, 0x020a), (0xaeaa, 0x020b), (0xaeab, 0x020c),
    (0xaeac, 0x020d), (0xaead, 0x020e), (0xaeae, 0x020f), (0xaeaf, 0x0210), (0xaeb0, 0x0211), (0xaeb1, 0x0212),
    (0xaeb2, 0x0213), (0xaeb3, 0x0214), (0xaeb4, 0x0215), (0xaeb5, 0x0216), (0xaeb6, 0x0217), (0xaeb7, 0x0218),
    (0xaeb8, 0x0219), (0xaeb9, 0x021a), (0xaeba, 0x021b), (0xaebb, 0x021c), (0xaebc, 0x24c5), (0xaebd, 0x24c6),
    (0xaebe, 0x24c7), (0xaebf, 0x021d), (0xaec0, 0x24c8), (0xaec1, 0x021e), (0xaec2, 0x021f), (0xaec3, 0x0220),
    (0xaec4, 0x24c9), (0xaec5, 0x0221), (0xaec6, 0x0222), (0xaec7, 0x0223), (0xaec8, 0x0224), (0xaec9, 0x0225),
    (0xaeca, 0x0226), (0xaecb, 0x0227), (0xaecc, 0x24ca), (0xaecd, 0x24cb), (0xaece, 0x0228), (0xaecf, 0x24cc),
    (0xaed0, 0x24cd), (0xaed1, 0x24ce), (0xaed2, 0x0229), (0xaed3, 0x022a), (0xaed4, 0x022b), (0xaed5, 0x022c),
    (0xaed6, 0x022d), (0xaed7, 0x022e), (0xaed8, 0x24cf), (0xaed9, 0x24d0), (0xaeda, 0x022f), (0xaedb, 0x0230),
    (0xaedc, 0x24d1), (0xaedd, 0x0231), (0xaede, 0x0232), (0xaedf, 0x0233), (0xaee0, 0x0234), (0xaee1, 0x0235),
    (0xaee2, 0x0236), (0xaee3, 0x0237), (0xaee4, 0x0238), (0xaee5, 0x0239), (0xaee6, 0x023a), (0xaee7, 0x023b),
    (0xaee8, 0x24d2), (0xaee9, 0x023c), (0xaeea, 0x023d), (0xaeeb, 0x24d3), (0xaeec, 0x023e), (0xaeed, 0x24d4),
    (0xaeee, 0x023f), (0xaeef, 0x0240), (0xaef0, 0x0241), (0xaef1, 0x0242), (0xaef2, 0x0243), (0xaef3, 0x0244),
    (0xaef4, 0x24d5), (0xaef5, 0x0245), (0xaef6, 0x0246), (0xaef7, 0x0247), (0xaef8, 0x24d6), (0xaef9, 0x0248),
    (0xaefa, 0x0249), (0xaefb, 0x024a), (0xaefc, 0x24d7), (0xaefd, 0x024b), (0xaefe, 0x024c), (0xaeff, 0x024d),
    (0xaf00, 0x024e), (0xaf01, 0x024f), (0xaf02, 0x0250), (0xaf03, 0x0251), (0xaf04, 0x0252), (0xaf05, 0x0253),
    (0xaf06, 0x025a), (0xaf07, 0x24d8), (0xaf08, 0x24d9), (0xaf09, 0x025b), (0xaf0a, 0x025c), (0xaf0b, 0x025d),
    (0xaf0c, 0x025e), (0xaf0d, 0x24da), (0xaf0e, 0x025f), (0xaf0f, 0x0260), (0xaf10, 0x24db), (0xaf11, 0x0261),
    (0xaf12, 0x0262), (0xaf13, 0x0263), (0xaf14, 0x0264), (0xaf15, 0x0265), (0xaf16, 0x0266), (0xaf17, 0x0267),
    (0xaf18, 0x0268), (0xaf19, 0x0269), (0xaf1a, 0x026a), (0xaf1b, 0x026b), (0xaf1c, 0x026c), (0xaf1d, 0x026d),
    (0xaf1e, 0x026e), (0xaf1f, 0x026f), (0xaf20, 0x0270), (0xaf21, 0x0271), (0xaf22, 0x0272), (0xaf23, 0x0273),
    (0xaf24, 0x027a), (0xaf25, 0x027b), (0xaf26, 0x027c), (0xaf27, 0x027d), (0xaf28, 0x027e), (0xaf29, 0x027f),
    (0xaf2a, 0x0280), (0xaf2b, 0x0281), (0xaf2c, 0x24dc), (0xaf2d, 0x24dd), (0xaf2e, 0x0282), (0xaf2f, 0x0283),
    (0xaf30, 0x24de), (0xaf31, 0x0284), (0xaf32, 0x24df), (0xaf33, 0x0285), (0xaf34, 0x24e0), (0xaf35, 0x0286),
    (0xaf36, 0x0287), (0xaf37, 0x0288), (0xaf38, 0x0289), (0xaf39, 0x028a), (0xaf3a, 0x028b), (0xaf3b, 0x028c),
    (0xaf3c, 0x24e1), (0xaf3d, 0x24e2), (0xaf3e, 0x028d), (0xaf3f, 0x24e3), (0xaf40, 0x028e), (0xaf41, 0x24e4),
    (0xaf42, 0x24e5), (0xaf43, 0x24e6), (0xaf44, 0x028f), (0xaf45, 0x0290), (0xaf46, 0x0291), (0xaf47, 0x0292),
    (0xaf48, 0x24e7), (0xaf49, 0x24e8), (0xaf4a, 0x0293), (0xaf4b, 0x0294), (0xaf4c, 0x0295), (0xaf4d, 0x0296),
    (0xaf4e, 0x0297), (0xaf4f, 0x0298), (0xaf50, 0x24e9), (0xaf51, 0x0299), (0xaf52, 0x029a), (0xaf53, 0x029b),
    (0xaf54, 0x029c), (0xaf55, 0x029d), (0xaf56, 0x029e), (0xaf57, 0x029f), (0xaf58, 0x02a0), (0xaf59, 0x02a1),
    (0xaf5a, 0x02a2), (0xaf5b, 0x02a3), (0xaf5c, 0x24ea), (0xaf5d, 0x24eb), (0xaf5e, 0x02a4), (0xaf5f, 0x02a5),
    (0xaf60, 0x02a6), (0xaf61, 0x02a7), (0xaf62, 0x02a8), (0xaf63, 0x02a9), (0xaf64, 0x24ec), (0xaf65, 0x24ed),
    (0xaf66, 0x02aa), (0xaf67, 0x02ab), (0xaf68, 0x02ac), (0xaf69, 0x02ad), (0xaf6a, 0x02ae), (0xaf6b, 0x02af),
    (0xaf6c, 0x02b0), (0xaf6d, 0x02b1), (0xaf6e, 0x02b2), (0xaf6f, 0x02b3), (0xaf70, 0x02b4), (0xaf71, 0x02b5),
    (0xaf72, 0x02b6), (0xaf73, 0x02b7), (0xaf74, 0x02b8), (0xaf75, 0x02b9), (0xaf76, 0x02ba), (0xaf77, 0x02bb),
    (0xaf78, 0x02bc), (0xaf79, 0x24ee), (0xaf7a, 0x02bd), (0xaf7b, 0x02be), (0xaf7c, 0x02bf), (0xaf7d, 0x02c0),
    (0xaf7e, 0x02c1), (0xaf7f, 0x02c2), (0xaf80, 0x24ef), (0xaf81, 0x02c3), (0xaf82, 0x02c4), (0xaf83, 0x02c5),
    (0xaf84, 0x24f0), (0xaf85, 0x02c6), (0xaf86, 0x02c7), (0xaf87, 0x02c8), (0xaf88, 0x24f1), (0xaf89, 0x02c9),
    (0xaf8a, 0x02ca), (0xaf8b, 0x02cb), (0xaf8c, 0x02cc), (0xaf8d, 0x02cd), (0xaf8e, 0x02ce), (0xaf8f, 0x02cf),
    (0xaf90, 0x24f2), (0xaf91, 0x24f3), (0xaf92, 0x02d0), (0xaf93, 0x02d1), (0xaf94, 0x02d2), (0xaf95, 0x24f4),
    (0xaf96, 0x02d3), (0xaf97, 0x02d4), (0xaf98, 0x02d5), (0xaf99, 0x02d6), (0xaf9a, 0x02d7), (0xaf9b, 0x02d8),
    (0xaf9c, 0x24f5), (0xaf9d, 0x02d9), (0xaf9e, 0x02da), (0xaf9f, 0x02db), (0xafa0, 0x02dc), (0xafa1, 0x02dd),
    (0xafa2, 0x02de), (0xafa3, 0x02df), (0xafa4, 0x02e0), (0xafa5, 0x02e1), (0xafa6, 0x02e2), (0xafa7, 0x02e3),
    (0xafa8, 0x02e4), (0xafa9, 0x02e5), (0xafaa, 0x02e6), (0xafab, 0x02e7), (0xafac, 0x02e8), (0xafad, 0x02e9),
    (0xafae, 0x02ea), (0xafaf, 0x02eb), (0xafb0, 0x02ec), (0xafb1, 0x02ed), (0xafb2, 0x02ee), (0xafb3, 0x02ef),
    (0xafb4, 0x02f0), (0xafb5, 0x02f1), (0xafb6, 0x02f2), (0xafb7, 0x02f3), (0xafb8, 0x24f6), (0xafb9, 0x24f7),
    (0xafba, 0x02f4), (0xafbb, 0x02f5), (0xafbc, 0x24f8), (0xafbd, 0x02f6), (0xafbe, 0x02f7), (0xafbf, 0x02f8),
    (0xafc0, 0x24f9), (0xafc1, 0x02f9), (0xafc2, 0x02fa), (0xafc3, 0x02fb), (0xafc4, 0x02fc), (0xafc5, 0x02fd),
    (0xafc6, 0x02fe), (0xafc7, 0x24fa), (0xafc8, 0x24fb), (0xafc9, 0x24fc), (0xafca, 0x02ff), (0xafcb, 0x24fd),
    (0xafcc, 0x0300), (0xafcd, 0x24fe), (0xafce, 0x24ff), (0xafcf, 0x0301), (0xafd0, 0x0302), (0xafd1, 0x0303),
    (0xafd2, 0x0304), (0xafd3, 0x0305), (0xafd4, 0x2500), (0xafd5, 0x0306), (0xafd6, 0x0307), (0xafd7, 0x0308),
    (0xafd8, 0x0309), (0xafd9, 0x030a), (0xafda, 0x030b), (0xafdb, 0x030c), (0xafdc, 0x2501), (0xafdd, 0x030d),
    (0xafde, 0x030e), (0xafdf, 0x030f), (0xafe0, 0x0310), (0xafe1, 0x0311), (0xafe2, 0x0318), (0xafe3, 0x0319),
    (0xafe4, 0x031a), (0xafe5, 0x031b), (0xafe6, 0x031c), (0xafe7, 0x031d), (0xafe8, 0x2502), (0xafe9, 0x2503),
    (0xafea, 0x031e), (0xafeb, 0x031f), (0xafec, 0x0320), (0xafed, 0x0321), (0xafee, 0x0322), (0xafef, 0x0323),
    (0xaff0, 0x2504), (0xaff1, 0x2505), (0xaff2, 0x0324), (0xaff3, 0x0325), (0xaff4, 0x2506), (0xaff5, 0x0326),
    (0xaff6, 0x0327), (0xaff7, 0x0328), (0xaff8, 0x2507), (0xaff9, 0x0329), (0xaffa, 0x032a), (0xaffb, 0x032b),
    (0xaffc, 0x032c), (0xaffd, 0x032d), (0xaffe, 0x032e), (0xafff, 0x032f), (0xb000, 0x2508), (0xb001, 0x2509),
    (0xb002, 0x0330), (0xb003, 0x0331), (0xb004, 0x250a), (0xb005, 0x0338), (0xb006, 0x0339), (0xb007, 0x033a),
    (0xb008, 0x033b), (0xb009, 0x033c), (0xb00a, 0x033d), (0xb00b, 0x033e), (0xb00c, 0x250b), (0xb00d, 0x033f),
    (0xb00e, 0x0340), (0xb00f, 0x0341), (0xb010, 0x250c), (0xb011, 0x0342), (0xb012, 0x0343), (0xb013, 0x0344),
    (0xb014, 0x250d), (0xb015, 0x0345), (0xb016, 0x0346), (0xb017, 0x0347), (0xb018, 0x0348), (0xb019, 0x0349),
    (0xb01a, 0x034a), (0xb01b, 0x034b), (0xb01c, 0x250e), (0xb01d, 0x250f), (0xb01e, 0x034c), (0xb01f, 0x034d),
    (0xb020, 0x034e), (0xb021, 0x034f), (0xb022, 0x0350), (0xb023, 0x0351), (0xb024, 0x0352), (0xb025, 0x0353),
    (0xb026, 0x0354), (0xb027, 0x0355), (0xb028, 0x2510), (0xb029, 0x0356), (0xb02a, 0x0357), (0xb02b, 0x0358),
    (0xb02c, 0x0359), (0xb02d, 0x035a), (0xb02e, 0x035b), (0xb02f, 0x035c), (0xb030, 0x035d), (0xb031, 0x035e),
    (0xb032, 0x035f), (0xb033, 0x0360), (0xb034, 0x0361), (0xb035, 0x0362), (0xb036, 0x0363), (0xb037, 0x0364),
    (0xb038, 0x0365), (0xb039, 0x0366), (0xb03a, 0x0367), (0xb03b, 0x0368), (0xb03c, 0x0369), (0xb03d, 0x036a),
    (0xb03e, 0x036b), (0xb03f, 0x036c), (0xb040, 0x036d), (0xb041, 0x036e), (0xb042, 0x036f), (0xb043, 0x0370),
    (0xb044, 0x2511), (0xb045, 0x2512), (0xb046, 0x0371), (0xb047, 0x0372), (0xb048, 0x2513), (0xb049, 0x0373),
    (0xb04a, 0x2514), (0xb04b, 0x0374), (0xb04c, 0x2515), (0xb04d, 0x0375), (0xb04e, 0x2516), (0xb04f, 0x0376),
    (0xb050, 0x0377), (0xb051, 0x0378), (0xb052, 0x0379), (0xb053, 0x2517), (0xb054, 0x2518), (0xb055, 0x2519),
    (0xb056, 0x037a), (0xb057, 0x251a), (0xb058, 0x037b), (0xb059, 0x251b), (0xb05a, 0x037c), (0xb05b, 0x037d),
    (0xb05c, 0x037e), (0xb05d, 0x257c), (0xb05e, 0x037f), (0xb05f, 0x0380), (0xb060, 0x0381), (0xb061, 0x0382),
    (0xb062, 0x0383), (0xb063, 0x0384), (0xb064, 0x0385), (0xb065, 0x0386), (0xb066, 0x0387), (0xb067, 0x0388),
    (0xb068, 0x0389), (0xb069, 0x038a), (0xb06a, 0x038b), (0xb06b, 0x038c), (0xb06c, 0x038d), (0xb06d, 0x038e),
    (0xb06e, 0x038f), (0xb06f, 0x0390), (0xb070, 0x0391), (0xb071, 0x0392), (0xb072, 0x0393), (0xb073, 0x0394),
    (0xb074, 0x0395), (0xb075, 0x0396), (0xb076, 0x0397), (0xb077, 0x0398), (0xb078, 0x0399), (0xb079, 0x039a),
    (0xb07a, 0x039b), (0xb07b, 0x039c), (0xb07c, 0x257d), (0xb07d, 0x257e), (0xb07e, 0x039d), (0xb07f, 0x039e),
    (0xb080, 0x257f), (0xb081, 0x039f), (0xb082, 0x03a0), (0xb083, 0x03a1), (0xb084, 0x2580), (0xb085, 0x03a2),
    (0xb086, 0x03a3), (0xb087, 0x03a4), (0xb088, 0x03a5), (0xb089, 0x03a6), (0xb08a, 0x03a7), (0xb08b, 0x03a8),
    (0xb08c, 0x2581), (0xb08d, 0x2582), (0xb08e, 0x03a9), (0xb08f, 0x2583), (0xb090, 0x03aa), (0xb091, 0x2584),
    (0xb092, 0x03ab), (0xb093, 0x03ac), (0xb094, 0x03ad), (0xb095, 0x03ae), (0xb096, 0x03af), (0xb097, 0x03b0),
    (0xb098, 0x2585), (0xb099, 0x2586), (0xb09a, 0x2587), (0xb09b, 0x03b1), (0xb09c, 0x2588), (0xb09d, 0x03b2),
    (0xb09e, 0x03b3), (0xb09f, 0x2589), (0xb0a0, 0x258a), (0xb0a1, 0x258b), (0xb0a2, 0x258c), (0xb0a3, 0x03b4),
    (0xb0a4, 0x03b5), (0xb0a5, 0x03b6), (0xb0a6, 0x03b7), (0xb0a7, 0x03b8), (0xb0a8, 0x258d), (0xb0a9, 0x258e),
    (0xb0aa, 0x03b9), (0xb0ab, 0x258f), (0xb0ac, 0x2590), (0xb0ad, 0x2591), (0xb0ae, 0x2592), (0xb0af, 0x2593),
    (0xb0b0, 0x03ba), (0xb0b1, 0x2594), (0xb0b2, 0x03bb), (0xb0b3, 0x2595), (0xb0b4, 0x2596), (0xb0b5, 0x2597),
    (0xb0b6, 0x03bc), (0xb0b7, 0x03bd), (0xb0b8, 0x2598), (0xb0b9, 0x03be), (0xb0ba, 0x03bf), (0xb0bb, 0x03c0),
    (0xb0bc, 0x2599), (0xb0bd, 0x03c1), (0xb0be, 0x03c2), (0xb0bf, 0x03c3), (0xb0c0, 0x03c4), (0xb0c1, 0x03c5),
    (0xb0c2, 0x03c6), (0xb0c3, 0x03c7), (0xb0c4, 0x259a), (0xb0c5, 0x259b), (0xb0c6, 0x03c8), (0xb0c7, 0x259c),
    (0xb0c8, 0x259d), (0xb0c9, 0x259e), (0xb0ca, 0x03c9), (0xb0cb, 0x03ca), (0xb0cc, 0x03cb), (0xb0cd, 0x03cc),
    (0xb0ce, 0x03cd), (0xb0cf, 0x03ce), (0xb0d0, 0x259f), (0xb0d1, 0x25a0), (0xb0d2, 0x03cf), (0xb0d3, 0x03d6),
    (0xb0d4, 0x25a1), (0xb0d5, 0x03d7), (0xb0d6, 0x03d8), (0xb0d7, 0x03d9), (0xb0d8, 0x25a2), (0xb0d9, 0x03da),
    (0xb0da, 0x03db), (0xb0db, 0x03dc), (0xb0dc, 0x03dd), (0xb0dd, 0x03de), (0xb0de, 0x03df), (0xb0df, 0x03e0),
    (0xb0e0, 0x25a3), (0xb0e1, 0x03e1), (0xb0e2, 0x03e2), (0xb0e3, 0x03e3), (0xb0e4, 0x03e4), (0xb0e5, 0x25a4),
    (0xb0e6, 0x03e5), (0xb0e7, 0x03e6), (0xb0e8, 0x03e7), (0xb0e9, 0x03e8), (0xb0ea, 0x03e9), (0xb0eb, 0x03ea),
    (0xb0ec, 0x03eb), (0xb0ed, 0x03ec), (0xb0ee, 0x03ed), (0xb0ef, 0x03ee), (0xb0f0, 0x03ef), (0xb0f1, 0x03f6),
    (0xb0f2, 0x03f7), (0xb0f3, 0x03f8), (0xb0f4, 0x03f9), (0xb0f5, 0x03fa), (0xb0f6, 0x03fb), (0xb0f7, 0x03fc),
    (0xb0f8, 0x03fd), (0xb0f9, 0x03fe), (0xb0fa, 0x03ff), (0xb0fb, 0x0400), (0xb0fc, 0x0401), (0xb0fd, 0x0402),
    (0xb0fe, 0x0403), (0xb0ff, 0x0404), (0xb100, 0x0405), (0xb101, 0x0406), (0xb102, 0x0407), (0xb103, 0x0408),
    (0xb104, 0x0409), (0xb105, 0x040a), (0xb106, 0x040b), (0xb107, 0x040c), (0xb108, 0x25a5), (0xb109, 0x25a6),
    (0xb10a, 0x040d), (0xb10b, 0x25a7), (0xb10c, 0x25a8), (0xb10d, 0x040e), (0xb10e, 0x040f), (0xb10f, 0x0410),
    (0xb110, 0x25a9), (0xb111, 0x0411), (0xb112, 0x25aa), (0xb113, 0x25ab), (0xb114, 0x0412), (0xb115, 0x0413),
    (0xb116, 0x0414), (0xb117, 0x0415), (0xb118, 0x25ac), (0xb119, 0x25ad), (0xb11a, 0x0416), (0xb11b, 0x25ae),
    (0xb11c, 0x25af), (0xb11d, 0x25b0), (0xb11e, 0x0417), (0xb11f, 0x0418), (0xb120, 0x0419), (0xb121, 0x041a),
    (0xb122, 0x041b), (0xb123, 0x25b1), (0xb124, 0x25b2), (0xb125, 0x25b3), (0xb126, 0x041c), (0xb127, 0x041d),
    (0xb128, 0x25b4), (0xb129, 0x041e), (0xb12a, 0x041f), (0xb12b, 0x0420), (0xb12c, 0x25b5), (0xb12d, 0x0421),
    (0xb12e, 0x0422), (0xb12f, 0x0423), (0xb130, 0x0424), (0xb131, 0x0425), (0xb132, 0x0426), (0xb133, 0x0427),
    (0xb134, 0x25b6), (0xb135, 0x25b7), (0xb136, 0x0428), (0xb137, 0x25b8), (0xb138, 0x25b9), (0xb139, 0x25ba),
    (0xb13a, 0x0429), (0xb13b, 0x042a), (0xb13c, 0x042b), (0xb13d, 0x042c), (0xb13e, 0x042d), (0xb13f, 0x042e),
    (0xb140, 0x25bb), (0xb141, 0x25bc), (0xb142, 0x042f), (0xb143, 0x0430), (0xb144, 0x25bd), (0xb145, 0x0431),
    (0xb146, 0x0432), (0xb147, 0x0433), (0xb148, 0x25be), (0xb149, 0x0434), (0xb14a, 0x0435), (0xb14b, 0x0436),
    (0xb14c, 0x0437), (0xb14d, 0x0438), (0xb14e, 0x0439), (0xb14f, 0x043a), (0xb150, 0x25bf), (0xb151, 0x25c0),
    (0xb152, 0x043b), (0xb153, 0x043c), (0xb154, 0x25c1), (0xb155, 0x25c2), (0xb156, 0x043d), (0xb157, 0x043e),
    (0xb158, 0x25c3), (0xb159, 0x043f), (0xb15a, 0x0440), (0xb15b, 0x0441), (0xb15c, 0x25c4), (0xb15d, 0x0442),
    (0xb15e, 0x0443), (0xb15f, 0x0444), (0xb160, 0x25c5), (0xb161, 0x0445), (0xb162, 0x0446), (0xb163, 0x0447),
    (0xb164, 0x0448), (0xb165, 0x0449), (0xb166, 0x044a), (0xb167, 0x044b), (0xb168, 0x044c), (0xb169, 0x044d),
    (0xb16a, 0x044e), (0xb16b, 0x044f), (0xb16c, 0x0450), (0xb16d, 0x0451), (0xb16e, 0x0452), (0xb16f, 0x0453),
    (0xb170, 0x0454), (0xb171, 0x0455), (0xb172, 0x0456), (0xb173, 0x0457), (0xb174, 0x0458), (0xb175, 0x0459),
    (0xb176, 0x045a), (0xb177, 0x045b), (0xb178, 0x25c6), (0xb179, 0x25c7), (0xb17a, 0x045c), (0xb17b, 0x045d),
    (0xb17c, 0x25c8), (0xb17d, 0x045e), (0xb17e, 0x045f), (0xb17f, 0x0460), (0xb180, 0x25c9), (0xb181, 0x0461),
    (0xb182, 0x25ca), (0xb183, 0x0462), (0xb184, 0x0463), (0xb185, 0x0464), (0xb186, 0x0465), (0xb187, 0x0466),
    (0xb188, 0x25cb), (0xb189, 0x25cc), (0xb18a, 0x0467), (0xb18b, 0x25cd), (0xb18c, 0x0468), (0xb18d, 0x25ce),
    (0xb18e, 0x0469), (0xb18f, 0x046a), (0xb190, 0x046b), (0xb191, 0x046c), (0xb192, 0x25cf), (0xb193, 0x25d0),
    (0xb194, 0x25d1), (0xb195, 0x046d), (0xb196, 0x046e), (0xb197, 0x046f), (0xb198, 0x25d2), (0xb199, 0x0470),
    (0xb19a, 0x0471), (0xb19b, 0x0472), (0xb19c, 0x25d3), (0xb19d, 0x0473), (0xb19e, 0x0474), (0xb19f, 0x0475),
    (0xb1a0, 0x0476), (0xb1a1, 0x0477), (0xb1a2, 0x0478), (0xb1a3, 0x0479), (0xb1a4, 0x047a), (0xb1a5, 0x047b),
    (0xb1a6, 0x047c), (0xb1a7, 0x047d), (0xb1a8, 0x25d4), (0xb1a9, 0x047e), (0xb1aa, 0x047f), (0xb1ab, 0x0480),
    (0xb1ac, 0x0481), (0xb1ad, 0x0482), (0xb1ae, 0x0483), (0xb1af, 0x0484), (0xb1b0, 0x0485), (0xb1b1, 0x0486),
    (0xb1b2, 0x0487), (0xb1b3, 0x0488), (0xb1b4, 0x0489), (0xb1b5, 0x048a), (0xb1b6, 0x048b), (0xb1b7, 0x048c),
    (0xb1b8, 0x048d), (0xb1b9, 0x0494), (0xb1ba, 0x0495), (0xb1bb, 0x0496), (0xb1bc, 0x0497), (0xb1bd, 0x0498),
    (0xb1be, 0x0499), (0xb1bf, 0x049a), (0xb1c0, 0x049b), (0xb1c1, 0x049c), (0xb1c2, 0x049d), (0xb1c3, 0x049e),
    (0xb1c4, 0x049f), (0xb1c5, 0x04a0), (0xb1c6, 0x04a1), (0xb1c7, 0x04a2), (0xb1c8, 0x04a3), (0xb1c9, 0x04a4),
    (0xb1ca, 0x04a5), (0xb1cb, 0x04a6), (0xb1cc, 0x25d5), (0xb1cd, 0x04a7), (0xb1ce, 0x04a8), (0xb1cf, 0x04a9),
    (0xb1d0, 0x25d6), (0xb1d1, 0x04aa), (0xb1d2, 0x04ab), (0xb1d3, 0x04ac), (0xb1d4, 0x25d7), (0xb1d5, 0x04ad),
    (0xb1d6, 0x04b4), (0xb1d7, 0x04b5), (0xb1d8, 0x04b6), (0xb1d9, 0x04b7), (0xb1da, 0x04b8), (0xb1db, 0x04b9),
    (0xb1dc, 0x25d8), (0xb1dd, 0x25d9), (0xb1de, 0x04ba), (0xb1df, 0x263a), (0xb1e0, 0x04bb), (0xb1e1, 0x04bc),
    (0xb1e2, 0x04bd), (0xb1e3, 0x04be), (0xb1e4, 0x04bf), (0xb1e5, 0x04c0), (0xb1e6, 0x04c1), (0xb1e7, 0x04c2),
    (0xb1e8, 0x263b), (0xb1e9, 0x263c), (0xb1ea, 0x04c3), (0xb1eb, 0x04c4), (0xb1ec, 0x263d), (0xb1ed, 0x04c5),
    (0xb1ee, 0x04c6), (0xb1ef, 0x04c7), (0xb1f0, 0x263e), (0xb1f1, 0x04c8), (0xb1f2, 0x04c9), (0xb1f3, 0x04ca),
    (0xb1f4, 0x04cb), (0xb1f5, 0x04cc), (0xb1f6, 0x04cd), (0xb1f7, 0x04ce), (0xb1f8, 0x04cf), (0xb1f9, 0x263f),
    (0xb1fa, 0x04d0), (0xb1fb, 0x2640), (0xb1fc, 0x04d1), (0xb1fd, 0x2641), (0xb1fe, 0x04d2), (0xb1ff, 0x04d3),
    (0xb200, 0x04d4), (0xb201, 0x04d5), (0xb202, 0x04d6), (0xb203, 0x04d7), (0xb204, 0x2642), (0xb205, 0x2643),
    (0xb206, 0x04d8), (0xb207, 0x04d9), (0xb208, 0x2644), (0xb209, 0x04da), (0xb20a, 0x04db), (0xb20b, 0x2645),
    (0xb20c, 0x2646), (0xb20d, 0x04dc), (0xb20e, 0x04dd), (0xb20f, 0x04de), (0xb210, 0x04df), (0xb211, 0x04e0),
    (0xb212, 0x04e1), (0xb213, 0x04e2), (0xb214, 0x2647), (0xb215, 0x2648), (0xb216, 0x04e3), (0xb217, 0x2649),
    (0xb218, 0x04e4), (0xb219, 0x264a), (0xb21a, 0x04e5), (0xb21b, 0x04e6), (0xb21c, 0x04e7), (0xb21d, 0x04e8),
    (0xb21e, 0x04e9), (0xb21f, 0x04ea), (0xb220, 0x264b), (0xb221, 0x04eb), (0xb222, 0x04ec), (0xb223, 0x04ed),
    (0xb224, 0x04ee), (0xb225, 0x04ef), (0xb226, 0x04f0), (0xb227, 0x04f1), (0xb228, 0x04f2), (0xb229, 0x04f3),
    (0xb22a, 0x04f4), (0xb22b, 0x04f5), (0xb22c, 0x04f6), (0xb22d, 0x04f7), (0xb22e, 0x04f8), (0xb22f, 0x04f9),
    (0xb230, 0x04fa), (0xb231, 0x04fb), (0xb232, 0x04fc), (0xb233, 0x04fd), (0xb234, 0x264c), (0xb235, 0x04fe),
    (0xb236, 0x04ff), (0xb237, 0x0500), (0xb238, 0x0501), (0xb239, 0x0502), (0xb23a, 0x0503), (0xb23b, 0x0504),
    (0xb23c, 0x264d), (0xb23d, 0x0505), (0xb23e, 0x0506), (0xb23f, 0x0507), (0xb240, 0x0508), (0xb241, 0x0509),
    (0xb242, 0x050a), (0xb243, 0x050b), (0xb244, 0x050c), (0xb245, 0x050d), (0xb246, 0x050e), (0xb247, 0x050f),
    (0xb248, 0x0510), (0xb249, 0x0511), (0xb24a, 0x0512), (0xb24b, 0x0513), (0xb24c, 0x0514), (0xb24d, 0x0515),
    (0xb24e, 0x0516), (0xb24f, 0x0517), (0xb250, 0x0518), (0xb251, 0x0519), (0xb252, 0x051a), (0xb253, 0x051b),
    (0xb254, 0x051c), (0xb255, 0x051d), (0xb256, 0x051e), (0xb257, 0x051f), (0xb258, 0x264e), (0xb259, 0x0520),
    (0xb25a, 0x0521), (0xb25b, 0x0522), (0xb25c, 0x264f), (0xb25d, 0x0523), (0xb25e, 0x0524), (0xb25f, 0x0525),
    (0xb260, 0x2650), (0xb261, 0x0526), (0xb262, 0x0527), (0xb263, 0x0528), (0xb264, 0x0529), (0xb265, 0x052a),
    (0xb266, 0x052b), (0xb267, 0x052c), (0xb268, 0x2651), (0xb269, 0x2652), (0xb26a, 0x052d), (0xb26b, 0x052e),
    (0xb26c, 0x052f), (0xb26d, 0x0530), (0xb26e, 0x0531), (0xb26f, 0x0532), (0xb270, 0x0533), (0xb271, 0x0534),
    (0xb272, 0x0535), (0xb273, 0x0536), (0xb274, 0x2653), (0xb275, 0x2654), (0xb276, 0x0537), (0xb277, 0x0538),
    (0xb278, 0x0539), (0xb279, 0x053a), (0xb27a, 0x053b), (0xb27b, 0x053c), (0xb27c, 0x2655), (0xb27d, 0x053d),
    (0xb27e, 0x053e), (0xb27f, 0x053f), (0xb280, 0x0540), (0xb281, 0x0541), (0xb282, 0x0542), (0xb283, 0x0543),
    (0xb284, 0x2656), (0xb285, 0x2657), (0xb286, 0x0544), (0xb287, 0x0545), (0xb288, 0x0546), (0xb289, 0x2658),
    (0xb28a, 0x0547), (0xb28b, 0x0548), (0xb28c, 0x0549), (0xb28d, 0x054a), (0xb28e, 0x054b), (0xb28f, 0x0552),
    (0xb290, 0x2659), (0xb291, 0x265a), (0xb292, 0x0553), (0xb293, 0x0554), (0xb294, 0x265b), (0xb295, 0x0555),
    (0xb296, 0x0556), (0xb297, 0x0557), (0xb298, 0x265c), (0xb299, 0x265d), (0xb29a, 0x265e), (0xb29b, 0x0558),
    (0xb29c, 0x0559), (0xb29d, 0x055a), (0xb29e, 0x055b), (0xb29f, 0x055c), (0xb2a0, 0x265f), (0xb2a1, 0x2660),
    (0xb2a2, 0x055d), (0xb2a3, 0x2661), (0xb2a4, 0x055e), (0xb2a5, 0x2662), (0xb2a6, 0x2663), (0xb2a7, 0x055f),
    (0xb2a8, 0x0560), (0xb2a9, 0x0561), (0xb2aa, 0x2664), (0xb2ab, 0x0562), (0xb2ac, 0x2665), (0xb2ad, 0x0563),
    (0xb2ae, 0x0564), (0xb2af, 0x0565), (0xb2b0, 0x2666), (0xb2b1, 0x0566), (0xb2b2, 0x0567), (0xb2b3, 0x0568),
    (0xb2b4, 0x2667), (0xb2b5, 0x0569), (0xb2b6, 0x056a), (0xb2b7, 0x056b), (0xb2b8, 0x0572), (0xb2b9, 0x0573),
    (0xb2ba, 0x0574), (0xb2bb, 0x0575), (0xb2bc, 0x0576), (0xb2bd, 0x0577), (0xb2be, 0x0578), (0xb2bf, 0x0579),
    (0xb2c0, 0x057a), (0xb2c1, 0x057b), (0xb2c2, 0x057c), (0xb2c3, 0x057d), (0xb2c4, 0x057e), (0xb2c5, 0x057f),
    (0xb2c6, 0x0580), (0xb2c7, 0x0581), (0xb2c8, 0x2668), (0xb2c9, 0x2669), (0xb2ca, 0x0582), (0xb2cb, 0x0583),
    (0xb2cc, 0x266a), (0xb2cd, 0x0584), (0xb2ce, 0x0585), (0xb2cf, 0x0586), (0xb2d0, 0x266b), (0xb2d1, 0x0587),
    (0xb2d2, 0x266c), (0xb2d3, 0x0588), (0xb2d4, 0x0589), (0xb2d5, 0x058a), (0xb2d6, 0x058b), (0xb2d7, 0x058c),
    (0xb2d8, 0x266d), (0xb2d9, 0x266e), (0xb2da, 0x058d), (0xb2db, 0x266f), (0xb2dc, 0x058e), (0xb2dd, 0x2670),
    (0xb2de, 0x058f), (0xb2df, 0x0590), (0xb2e0, 0x0591), (0xb2e1, 0x0592), (0xb2e2, 0x2671), (0xb2e3, 0x0593),
    (0xb2e4, 0x2672), (0xb2e5, 0x2673), (0xb2e6, 0x2674), (0xb2e7, 0x0594), (0xb2e8, 0x2675), (0xb2e9, 0x0595),
    (0xb2ea, 0x0596), (0xb2eb, 0x2676), (0xb2ec, 0x2677), (0xb2ed, 0x2678), (0xb2ee, 0x2679), (0xb2ef, 0x267a),
    (0xb2f0, 0x0597), (0xb2f1, 0x0598), (0xb2f2, 0x0599), (0xb2f3, 0x267b), (0xb2f4, 0x267c), (0xb2f5, 0x267d),
    (0xb2f6, 0x059a), (0xb2f7, 0x267e), (0xb2f8, 0x267f), (0xb2f9, 0x2680), (0xb2fa, 0x2681), (0xb2fb, 0x2682),
    (0xb2fc, 0x059b), (0xb2fd, 0x059c), (0xb2fe, 0x059d), (0xb2ff, 0x2683), (0xb300, 0x2684), (0xb301, 0x2685),
    (0xb302, 0x059e), (0xb303, 0x059f), (0xb304, 0x2686), (0xb305, 0x05a0), (0xb306, 0x05a1), (0xb307, 0x05a2),
    (0xb308, 0x2687), (0xb309, 0x05a3), (0xb30a, 0x05a4), (0xb30b, 0x05a5), (0xb30c, 0x05a6), (0xb30d, 0x05a7),
    (0xb30e, 0x05a8), (0xb30f, 0x05a9), (0xb310, 0x2688), (0xb311, 0x2689), (0xb312, 0x05aa), (0xb313, 0x268a),
    (0xb314, 0x268b), (0xb315, 0x268c), (0xb316, 0x05ab), (0xb317, 0x05ac), (0xb318, 0x05ad), (0xb319, 0x05ae),
    (0xb31a, 0x05af), (0xb31b, 0x05b0), (0xb31c, 0x268d), (0xb31d, 0x05b1), (0xb31e, 0x05b2), (0xb31f, 0x05b3),
    (0xb320, 0x05b4), (0xb321, 0x05b5), (0xb322, 0x05b6), (0xb323, 0x05b7), (0xb324, 0x05b8), (0xb325, 0x05b9),
    (0xb326, 0x05ba), (0xb327, 0x05bb), (0xb328, 0x05bc), (0xb329, 0x05bd), (0xb32a, 0x05be), (0xb32b, 0x05bf),
    (0xb32c, 0x05c0), (0xb32d, 0x05c1), (0xb32e, 0x05c2), (0xb32f, 0x05c3), (0xb330, 0x05c4), (0xb331, 0x05c5),
    (0xb332, 0x05c6), (0xb333, 0x05c7), (0xb334, 0x05c8), (0xb335, 0x05c9), (0xb336, 0x05ca), (0xb337, 0x05cb),
    (0xb338, 0x05cc), (0xb339, 0x05cd), (0xb33a, 0x05ce), (0xb33b, 0x05cf), (0xb33c, 0x05d0), (0xb33d, 0x05d1),
    (0xb33e, 0x05d2), (0xb33f, 0x05d3), (0xb340, 0x05d4), (0xb341, 0x05d5), (0xb342, 0x05d6), (0xb343, 0x05d7),
    (0xb344, 0x05d8), (0xb345, 0x05d9), (0xb346, 0x05da), (0xb347, 0x05db), (0xb348, 0x05dc), (0xb349, 0x05dd),
    (0xb34a, 0x05de), (0xb34b, 0x05df), (0xb34c, 0x05e0), (0xb34d, 0x05e1), (0xb34e, 0x05e2), (0xb34f, 0x05e3),
    (0xb350, 0x05e4), (0xb351, 0x05e5), (0xb352, 0x05e6), (0xb353, 0x05e7), (0xb354, 0x268e), (0xb355, 0x268f),
    (0xb356, 0x2690), (0xb357, 0x05e8), (0xb358, 0x2691), (0xb359, 0x05e9), (0xb35a, 0x05ea), (0xb35b, 0x2692),
    (0xb35c, 0x2693), (0xb35d, 0x05eb), (0xb35e, 0x2694), (0xb35f, 0x2695), (0xb360, 0x05ec), (0xb361, 0x05ed),
    (0xb362, 0x05ee), (0xb363, 0x05ef), (0xb364, 0x2696), (0xb365, 0x2697), (0xb366, 0x05f0), (0xb367, 0x26f8),
    (0xb368, 0x05f1), (0xb369, 0x26f9), (0xb36a, 0x05f2), (0xb36b, 0x26fa), (0xb36c, 0x05f3), (0xb36d, 0x05f4),
    (0xb36e, 0x26fb), (0xb36f, 0x05f5), (0xb370, 0x26fc), (0xb371, 0x26fd), (0xb372, 0x05f6), (0xb373, 0x05f7),
    (0xb374, 0x26fe), (0xb375, 0x05f8), (0xb376, 0x05f9), (0xb377, 0x05fa), (0xb378, 0x26ff), (0xb379, 0x05fb),
    (0xb37a, 0x05fc), (0xb37b, 0x05fd), (0xb37c, 0x05fe), (0xb37d, 0x05ff), (0xb37e, 0x0600), (0xb37f, 0x0601),
    (0xb380, 0x2700), (0xb381, 0x2701), (0xb382, 0x0602), (0xb383, 0x2702), (0xb384, 0x2703), (0xb385, 0x2704),
    (0xb386, 0x0603), (0xb387, 0x0604), (0xb388, 0x0605), (0xb389, 0x0606), (0xb38a, 0x0607), (0xb38b, 0x0608),
    (0xb38c, 0x2705), (0xb38d, 0x0609), (0xb38e, 0x0610), (0xb38f, 0x0611), (0xb390, 0x2706), (0xb391, 0x0612),
    (0xb392, 0x0613), (0xb393, 0x0614), (0xb394, 0x2707), (0xb395, 0x0615), (0xb396, 0x0616), (0xb397, 0x0617),
    (0xb398, 0x0618), (0xb399, 0x0619), (0xb39a, 0x061a), (0xb39b, 0x061b), (0xb39c, 0x061c), (0xb39d, 0x061d),
    (0xb39e, 0x061e), (0xb39f, 0x061f), (0xb3a0, 0x2708), (0xb3a1, 0x2709), (0xb3a2, 0x0620), (0xb3a3, 0x0621),
    (0xb3a4, 0x0622), (0xb3a5, 0x0623), (0xb3a6, 0x0624), (0xb3a7, 0x0625), (0xb3a8, 0x270a), (0xb3a9, 0x0626),
    (0xb3aa, 0x0627), (0xb3ab, 0x0628), (0xb3ac, 0x270b), (0xb3ad, 0x0629), (0xb3ae, 0x0630), (0xb3af, 0x0631),
    (0xb3b0, 0x0632), (0xb3b1, 0x0633), (0xb3b2, 0x0634), (0xb3b3, 0x0635), (0xb3b4, 0x0636), (0xb3b5, 0x0637),
    (0xb3b6, 0x0638), (0xb3b7, 0x0639), (0xb3b8, 0x063a), (0xb3b9, 0x063b), (0xb3ba, 0x063c), (0xb3bb, 0x063d),
    (0xb3bc, 0x063e), (0xb3bd, 0x063f), (0xb3be, 0x0640), (0xb3bf, 0x0641), (0xb3c0, 0x0642), (0xb3c1, 0x0643),
    (0xb3c2, 0x0644), (0xb3c3, 0x0645), (0xb3c4, 0x270c), (0xb3c5, 0x270d), (0xb3c6, 0x0646), (0xb3c7, 0x0647),
    (0xb3c8, 0x270e), (0xb3c9, 0x0648), (0xb3ca, 0x0649), (0xb3cb, 0x270f), (0xb3cc, 0x2710), (0xb3cd, 0x064a),
    (0xb3ce, 0x2711), (0xb3cf, 0x064b), (0xb3d0, 0x2712), (0xb3d1, 0x064c), (0xb3d2, 0x064d), (0xb3d3, 0x064e),
    (0xb3d4, 0x2713), (0xb3d5, 0x2714), (0xb3d6, 0x064f), (0xb3d7, 0x2715), (0xb3d8, 0x0650), (0xb3d9, 0x2716),
    (0xb3da, 0x0651), (0xb3db, 0x2717), (0xb3dc, 0x0652), (0xb3dd, 0x2718), (0xb3de, 0x0653), (0xb3df, 0x0654),
    (0xb3e0, 0x2719), (0xb3e1, 0x0655), (0xb3e2, 0x0656), (0xb3e3, 0x0657), (0xb3e4, 0x271a), (0xb3e5, 0x0658),
    (0xb3e6, 0x0659), (0xb3e7, 0x065a), (0xb3e8, 0x271b), (0xb3e9, 0x065b), (0xb3ea, 0x065c), (0xb3eb, 0x065d),
    (0xb3ec, 0x065e), (0xb3ed, 0x065f), (0xb3ee, 0x0660), (0xb3ef, 0x0661), (0xb3f0, 0x0662), (0xb3f1, 0x0663),
    (0xb3f2, 0x0664), (0xb3f3, 0x0665), (0xb3f4, 0x0666), (0xb3f5, 0x0667), (0xb3f6, 0x0668), (0xb3f7, 0x0669),
    (0xb3f8, 0x066a), (0xb3f9, 0x066b), (0xb3fa, 0x066c), (0xb3fb, 0x066d), (0xb3fc, 0x271c), (0xb3fd, 0x066e),
    (0xb3fe, 0x066f), (0xb3ff, 0x0670), (0xb400, 0x0671), (0xb401, 0x0672), (0xb402, 0x0673), (0xb403, 0x0674),
    (0xb404, 0x0675), (0xb405, 0x0676), (0xb406, 0x0677), (0xb407, 0x0678), (0xb408, 0x0679), (0xb409, 0x067a),
    (0xb40a, 0x067b), (0xb40b, 0x067c), (0xb40c, 0x067d), (0xb40d, 0x067e), (0xb40e, 0x067f), (0xb40f, 0x0680),
    (0xb410, 0x271d), (0xb411, 0x0681), (0xb412, 0x0682), (0xb413, 0x0683), (0xb414, 0x0684), (0xb415, 0x0685),
    (0xb416, 0x0686), (0xb417, 0x0687), (0xb418, 0x271e), (0xb419, 0x0688), (0xb41a, 0x0689), (0xb41b, 0x068a),
    (0xb41c, 0x271f), (0xb41d, 0x068b), (0xb41e, 0x068c), (0xb41f, 0x068d), (0xb420, 0x2720), (0xb421, 0x068e),
    (0xb422, 0x068f), (0xb423, 0x0690), (0xb424, 0x0691), (0xb425, 0x0692), (0xb426, 0x0693), (0xb427, 0x0694),
    (0xb428, 0x2721), (0xb429, 0x2722), (0xb42a, 0x0695), (0xb42b, 0x2723), (0xb42c, 0x0696), (0xb42d, 0x0697),
    (0xb42e, 0x0698), (0xb42f, 0x0699), (0xb430, 0x069a), (0xb431, 0x069b), (0xb432, 0x069c), (0xb433, 0x069d),
    (0xb434, 0x2724), (0xb435, 0x069e), (0xb436, 0x069f), (0xb437, 0x06a0), (0xb438, 0x06a1), (0xb439, 0x06a2),
    (0xb43a, 0x06a3), (0xb43b, 0x06a4), (0xb43c, 0x06a5), (0xb43d, 0x06a6), (0xb43e, 0x06a7), (0xb43f, 0x06a8),
    (0xb440, 0x06a9), (0xb441, 0x06aa), (0xb442, 0x06ab), (0xb443, 0x06ac), (0xb444, 0x06ad), (0xb445, 0x06ae),
    (0xb446, 0x06af), (0xb447, 0x06b0), (0xb448, 0x06b1), (0xb449, 0x06b2), (0xb44a, 0x06b3), (0xb44b, 0x06b4),
    (0xb44c, 0x06b5), (0xb44d, 0x06b6), (0xb44e, 0x06b7), (0xb44f, 0x06b8), (0xb450, 0x2725), (0xb451, 0x2726),
    (0xb452, 0x06b9), (0xb453, 0x06ba), (0xb454, 0x2727), (0xb455, 0x06bb), (0xb456, 0x06bc), (0xb457, 0x06bd),
    (0xb458, 0x2728), (0xb459, 0x06be), (0xb45a, 0x06bf), (0xb45b, 0x06c0), (0xb45c, 0x06c1), (0xb45d, 0x06c2),
    (0xb45e, 0x06c3), (0xb45f, 0x06c4), (0xb460, 0x2729), (0xb461, 0x272a), (0xb462, 0x06c5), (0xb463, 0x272b),
    (0xb464, 0x06c6), (0xb465, 0x272c), (0xb466, 0x06c7), (0xb467, 0x06ce), (0xb468, 0x06cf), (0xb469, 0x06d0),
    (0xb46a, 0x06d1), (0xb46b, 0x06d2), (0xb46c, 0x272d), (0xb46d, 0x06d3), (0xb46e, 0x06d4), (0xb46f, 0x06d5),
    (0xb470, 0x06d6), (0xb471, 0x06d7), (0xb472, 0x06d8), (0xb473, 0x06d9), (0xb474, 0x06da), (0xb475, 0x06db),
    (0xb476, 0x06dc), (0xb477, 0x06dd), (0xb478, 0x06de), (0xb479, 0x06df), (0xb47a, 0x06e0), (0xb47b, 0x06e1),
    (0xb47c, 0x06e2), (0xb47d, 0x06e3), (0xb47e, 0x06e4), (0xb47f, 0x06e5), (0xb480, 0x272e), (0xb481, 0x06e6),
    (0xb482, 0x06e7), (0xb483, 0x06ee), (0xb484, 0x06ef), (0xb485, 0x06f0), (0xb486, 0x06f1), (0xb487, 0x06f2),
    (0xb488, 0x272f), (0xb489, 0x06f3), (0xb48a, 0x06f4), (0xb48b, 0x06f5), (0xb48c, 0x06f6), (0xb48d, 0x06f7),
    (0xb48e, 0x06f8), (0xb48f, 0x06f9), (0xb490, 0x06fa), (0xb491, 0x06fb), (0xb492, 0x06fc), (0xb493, 0x06fd),
    (0xb494, 0x06fe), (0xb495, 0x06ff), (0xb496, 0x0700), (0xb497, 0x0701), (0xb498, 0x0702), (0xb499, 0x0703),
    (0xb49a, 0x0704), (0xb49b, 0x0705), (0xb49c, 0x0706), (0xb49d, 0x2730), (0xb49e, 0x0707), (0xb49f, 0x0708),
    (0xb4a0, 0x0709), (0xb4a1, 0x070a), (0xb4a2, 0x070b), (0xb4a3, 0x070c), (0xb4a4, 0x2731), (0xb4a5, 0x070d),
    (0xb4a6, 0x070e), (0xb4a7, 0x070f), (0xb4a8, 0x2732), (0xb4a9, 0x0710), (0xb4aa, 0x0711), (0xb4ab, 0x0712),
    (0xb4ac, 0x2733), (0xb4ad, 0x0713), (0xb4ae, 0x0714), (0xb4af, 0x0715), (0xb4b0, 0x0716), (0xb4b1, 0x0717),
    (0xb4b2, 0x0718), (0xb4b3, 0x0719), (0xb4b4, 0x071a), (0xb4b5, 0x2734), (0xb4b6, 0x071b), (0xb4b7, 0x2735),
    (0xb4b8, 0x071c), (0xb4b9, 0x2736), (0xb4ba, 0x071d), (0xb4bb, 0x071e), (0xb4bc, 0x071f), (0xb4bd, 0x0720),
    (0xb4be, 0x0721), (0xb4bf, 0x0722), (0xb4c0, 0x2737), (0xb4c1, 0x0723), (0xb4c2, 0x0724), (0xb4c3, 0x0725),
    (0xb4c4, 0x2738), (0xb4c5, 0x0726), (0xb4c6, 0x0727), (0xb4c7, 0x0728), (0xb4c8, 0x2739), (0xb4c9, 0x0729),
    (0xb4ca, 0x072a), (0xb4cb, 0x072b), (0xb4cc, 0x072c), (0xb4cd, 0x072d), (0xb4ce, 0x072e), (0xb4cf, 0x072f),
    (0xb4d0, 0x273a), (0xb4d1, 0x0730), (0xb4d2, 0x0731), (0xb4d3, 0x0732), (0xb4d4, 0x0733), (0xb4d5, 0x273b),
    (0xb4d6, 0x0734), (0xb4d7, 0x0735), (0xb4d8, 0x0736), (0xb4d9, 0x0737), (0xb4da, 0x0738), (0xb4db, 0x0739),
    (0xb4dc, 0x273c), (0xb4dd, 0x273d), (0xb4de, 0x073a), (0xb4df, 0x073b), (0xb4e0, 0x273e), (0xb4e1, 0x073c),
    (0xb4e2, 0x073d), (0xb4e3, 0x273f), (0xb4e4, 0x2740), (0xb4e5, 0x073e), (0xb4e6, 0x2741), (0xb4e7, 0x073f),
    (0xb4e8, 0x0740), (0xb4e9, 0x0741), (0xb4ea, 0x0742), (0xb4eb, 0x0743), (0xb4ec, 0x2742), (0xb4ed, 0x2743),
    (0xb4ee, 0x0744), (0xb4ef, 0x2744), (0xb4f0, 0x0745), (0xb4f1, 0x2745), (0xb4f2, 0x0746), (0xb4f3, 0x0747),
    (0xb4f4, 0x0748), (0xb4f5, 0x0749), (0xb4f6, 0x074a), (0xb4f7, 0x074b), (0xb4f8, 0x2746), (0xb4f9, 0x074c),
    (0xb4fa, 0x074d), (0xb4fb, 0x074e), (0xb4fc, 0x074f), (0xb4fd, 0x0750), (0xb4fe, 0x0751), (0xb4ff, 0x0752),
    (0xb500, 0x0753), (0xb501, 0x0754), (0xb502, 0x0755), (0xb503, 0x0756), (0xb504, 0x0757), (0xb505, 0x0758),
    (0xb506, 0x0759), (0xb507, 0x075a), (0xb508, 0x075b), (0xb509, 0x075c), (0xb50a, 0x075d), (0xb50b, 0x075e),
    (0xb50c, 0x075f), (0xb50d, 0x0760), (0xb50e, 0x0761), (0xb50f, 0x0762), (0xb510, 0x0763), (0xb511, 0x0764),
    (0xb512, 0x0765), (0xb513, 0x0766), (0xb514, 0x2747), (0xb515, 0x2748), (0xb516, 0x0767), (0xb517, 0x0768),
    (0xb518, 0x2749), (0xb519, 0x0769), (0xb51a, 0x076a), (0xb51b, 0x274a), (0xb51c, 0x274b), (0xb51d, 0x076b),
    (0xb51e, 0x076c), (0xb51f, 0x076d), (0xb520, 0x076e), (0xb521, 0x076f), (0xb522, 0x0770), (0xb523, 0x0771),
    (0xb524, 0x274c), (0xb525, 0x274d), (0xb526, 0x0772), (0xb527, 0x274e), (0xb528, 0x274f), (0xb529, 0x2750),
    (0xb52a, 0x2751), (0xb52b, 0x0773), (0xb52c, 0x0774), (0xb52d, 0x0775), (0xb52e, 0x0776), (0xb52f, 0x0777),
    (0xb530, 0x2752), (0xb531, 0x2753), (0xb532, 0x0778), (0xb533, 0x0779), (0xb534, 0x2754), (0xb535, 0x077a),
    (0xb536, 0x077b), (0xb537, 0x077c), (0xb538, 0x2755), (0xb539, 0x077d), (0xb53a, 0x077e), (0xb53b, 0x077f),
    (0xb53c, 0x0780), (0xb53d, 0x0781), (0xb53e, 0x0782), (0xb53f, 0x0783), (0xb540, 0x27b6), (0xb541, 0x27b7),
    (0xb542, 0x0784), (0xb543, 0x27b8), (0xb544, 0x27b9), (0xb545, 0x27ba), (0xb546, 0x0785), (0xb547, 0x078c),
    (0xb548, 0x078d), (0xb549, 0x078e), (0xb54a, 0x078f), (0xb54b, 0x27bb), (0xb54c, 0x27bc), (0xb54d, 0x27bd),
    (0xb54e, 0x0790), (0xb54f, 0x0791), (0xb550, 0x27be), (0xb551, 0x0792), (0xb552, 0x0793), (0xb553, 0x0794),
    (0xb554, 0x27bf), (0xb555, 0x0795), (0xb556, 0x0796), (0xb557, 0x0797), (0xb558, 0x0798), (0xb559, 0x0799),
    (0xb55a, 0x079a), (0xb55b, 0x079b), (0xb55c, 0x27c0), (0xb55d, 0x27c1), (0xb55e, 0x079c), (0xb55f, 0x27c2),
    (0xb560, 0x27c3), (0xb561, 0x27c4), (0xb562, 0x079d), (0xb563, 0x079e), (0xb564, 0x079f), (0xb565, 0x07a0),
    (0xb566, 0x07a1), (0xb567, 0x07a2), (0xb568, 0x07a3), (0xb569, 0x07a4), (0xb56a, 0x07a5), (0xb56b, 0x07ac),
    (0xb56c, 0x07ad), (0xb56d, 0x07ae), (0xb56e, 0x07af), (0xb56f, 0x07b0), (0xb570, 0x07b1), (0xb571, 0x07b2),
    (0xb572, 0x07b3), (0xb573, 0x07b4), (0xb574, 0x07b5), (0xb575, 0x07b6), (0xb576, 0x07b7), (0xb577, 0x07b8),
    (0xb578, 0x07b9), (0xb579, 0x07ba), (0xb57a, 0x07bb), (0xb57b, 0x07bc), (0xb57c, 0x07bd), (0xb57d, 0x07be),
    (0xb57e, 0x07bf), (0xb57f, 0x07c0), (0xb580, 0x07c1), (0xb581, 0x07c2), (0xb582, 0x07c3), (0xb583, 0x07c4),
    (0xb584, 0x07c5), (0xb585, 0x07c6), (0xb586, 0x07c7), (0xb587, 0x07c8), (0xb588, 0x07c9), (0xb589, 0x07ca),
    (0xb58a, 0x07cb), (0xb58b, 0x07cc), (0xb58c, 0x07cd), (0xb58d, 0x07ce), (0xb58e, 0x07cf), (0xb58f, 0x07d0),
    (0xb590, 0x07d1), (0xb591, 0x07d2), (0xb592, 0x07d3), (0xb593, 0x07d4), (0xb594, 0x07d5), (0xb595, 0x07d6),
    (0xb596, 0x07d7), (0xb597, 0x07d8), (0xb598, 0x07d9), (0xb599, 0x07da), (0xb59a, 0x07db), (0xb59b, 0x07dc),
    (0xb59c, 0x07dd), (0xb59d, 0x07de), (0xb59e, 0x07df), (0xb59f, 0x07e0), (0xb5a0, 0x27c5), (0xb5a1, 0x27c6),
    (0xb5a2, 0x07e1), (0xb5a3, 0x07e2), (0xb5a4, 0x27c7), (0xb5a5, 0x07e3), (0xb5a6, 0x07e4), (0xb5a7, 0x07e5),
    (0xb5a8, 0x27c8), (0xb5a9, 0x07e6), (0xb5aa, 0x27c9), (0xb5ab, 0x27ca), (0xb5ac, 0x07e7), (0xb5ad, 0x07e8),
    (0xb5ae, 0x07e9), (0xb5af, 0x07ea), (0xb5b0, 0x27cb), (0xb5b1, 0x27cc), (0xb5b2, 0x07eb), (0xb5b3, 0x27cd),
    (0xb5b4, 0x27ce), (0xb5b5, 0x27cf), (0xb5b6, 0x07ec), (0xb5b7, 0x07ed), (0xb5b8, 0x07ee), (0xb5b9, 0x07ef),
    (0xb5ba, 0x07f0), (0xb5bb, 0x27d0), (0xb5bc, 0x27d1), (0xb5bd, 0x27d2), (0xb5be, 0x07f1), (0xb5bf, 0x07f2),
    (0xb5c0, 0x27d3), (0xb5c1, 0x07f3), (0xb5c2, 0x07f4), (0xb5c3, 0x07f5), (0xb5c4, 0x27d4), (0xb5c5, 0x07f6),
    (0xb5c6, 0x07f7), (0xb5c7, 0x07f8), (0xb5c8, 0x07f9), (0xb5c9, 0x07fa), (0xb5ca, 0x07fb), (0xb5cb, 0x07fc),
    (0xb5cc, 0x27d5), (0xb5cd, 0x27d6), (0xb5ce, 0x07fd), (0xb5cf, 0x27d7), (0xb5d0, 0x27d8), (0xb5d1, 0x27d9),
    (0xb5d2, 0x07fe), (0xb5d3, 0x07ff), (0xb5d4, 0x0800), (0xb5d5, 0x0801), (0xb5d6, 0x0802), (0xb5d7, 0x0803),
    (0xb5d8, 0x27da), (0xb5d9, 0x0804), (0xb5da, 0x0805), (0xb5db, 0x0806), (0xb5dc, 0x0807), (0xb5dd, 0x0808),
    (0xb5de, 0x0809), (0xb5df, 0x080a), (0xb5e0, 0x080b), (0xb5e1, 0x080c), (0xb5e2, 0x080d), (0xb5e3, 0x080e),
    (0xb5e4, 0x080f), (0xb5e5, 0x0810), (0xb5e6, 0x0811), (0xb5e7, 0x0812), (0xb5e8, 0x0813), (0xb5e9, 0x0814),
    (0xb5ea, 0x0815), (0xb5eb, 0x0816), (0xb5ec, 0x27db), (0xb5ed, 0x0817), (0xb5ee, 0x0818), (0xb5ef, 0x0819),
    (0xb5f0, 0x081a), (0xb5f1, 0x081b), (0xb5f2, 0x081c), (0xb5f3, 0x081d), (0xb5f4, 0x081e), (0xb5f5, 0x081f),
    (0xb5f6, 0x0820), (0xb5f7, 0x0821), (0xb5f8, 0x0822), (0xb5f9, 0x0823), (0xb5fa, 0x0824), (0xb5fb, 0x0825),
    (0xb5fc, 0x0826), (0xb5fd, 0x0827), (0xb5fe, 0x0828), (0xb5ff, 0x0829), (0xb600, 0x082a), (0xb601, 0x082b),
    (0xb602, 0x082c), (0xb603, 0x082d), (0xb604, 0x082e), (0xb605, 0x082f), (0xb606, 0x0830), (0xb607, 0x0831),
    (0xb608, 0x0832), (0xb609, 0x0833), (0xb60a, 0x0834), (0xb60b, 0x0835), (0xb60c, 0x0836), (0xb60d, 0x0837),
    (0xb60e, 0x0838), (0xb60f, 0x0839), (0xb610, 0x27dc), (0xb611, 0x27dd), (0xb612, 0x083a), (0xb613, 0x083b),
    (0xb614, 0x27de), (0xb615, 0x083c), (0xb616, 0x083d), (0xb617, 0x083e), (0xb618, 0x27df), (0xb619, 0x083f),
    (0xb61a, 0x0840), (0xb61b, 0x0841), (0xb61c, 0x0842), (0xb61d, 0x0843), (0xb61e, 0x084a), (0xb61f, 0x084b),
    (0xb620, 0x084c), (0xb621, 0x084d), (0xb622, 0x084e), (0xb623, 0x084f), (0xb624, 0x0850), (0xb625, 0x27e0),
    (0xb626, 0x0851), (0xb627, 0x0852), (0xb628, 0x0853), (0xb629, 0x0854), (0xb62a, 0x0855), (0xb62b, 0x0856),
    (0xb62c, 0x27e1), (0xb62d, 0x0857), (0xb62e, 0x0858), (0xb62f, 0x0859), (0xb630, 0x085a), (0xb631, 0x085b),
    (0xb632, 0x085c), (0xb633, 0x085d), (0xb634, 0x27e2), (0xb635, 0x085e), (0xb636, 0x085f), (0xb637, 0x0860),
    (0xb638, 0x0861), (0xb639, 0x0862), (0xb63a, 0x0863), (0xb63b, 0x086a), (0xb63c, 0x086b), (0xb63d, 0x086c),
    (0xb63e, 0x086d), (0xb63f, 0x086e), (0xb640, 0x086f), (0xb641, 0x0870), (0xb642, 0x0871), (0xb643, 0x0872),
    (0xb644, 0x0873), (0xb645, 0x0874), (0xb646, 0x0875), (0xb647, 0x0876), (0xb648, 0x27e3), (0xb649, 0x0877),
    (0xb64a, 0x0878), (0xb64b, 0x0879), (0xb64c, 0x087a), (0xb64d, 0x087b), (0xb64e, 0x087c), (0xb64f, 0x087d),
    (0xb650, 0x087e), (0xb651, 0x087f), (0xb652, 0x0880), (0xb653, 0x0881), (0xb654, 0x0882), (0xb655, 0x0883),
    (0xb656, 0x0884), (0xb657, 0x0885), (0xb658, 0x0886), (0xb659, 0x0887), (0xb65a, 0x0888), (0xb65b, 0x0889),
    (0xb65c, 0x088a), (0xb65d, 0x088b), (0xb65e, 0x088c), (0xb65f, 0x088d), (0xb660, 0x088e), (0xb661, 0x088f),
    (0xb662, 0x0890), (0xb663, 0x0891), (0xb664, 0x27e4), (0xb665, 0x0892), (0xb666, 0x0893), (0xb667, 0x0894),
    (0xb668, 0x27e5), (0xb669, 0x0895), (0xb66a, 0x0896), (0xb66b, 0x0897), (0xb66c, 0x0898), (0xb66d, 0x0899),
    (0xb66e, 0x089a), (0xb66f, 0x089b), (0xb670, 0x089c), (0xb671, 0x089d), (0xb672, 0x089e), (0xb673, 0x089f),
    (0xb674, 0x08a0), (0xb675, 0x08a1), (0xb676, 0x08a2), (0xb677, 0x08a3), (0xb678, 0x08a4), (0xb679, 0x08a5),
    (0xb67a, 0x08a6), (0xb67b, 0x08a7), (0xb67c, 0x08a8), (0xb67d, 0x08a9), (0xb67e, 0x08aa), (0xb67f, 0x08ab),
    (0xb680, 0x08ac), (0xb681, 0x08ad), (0xb682, 0x08ae), (0xb683, 0x08af), (0xb684, 0x08b0), (0xb685, 0x08b1),
    (0xb686, 0x08b2), (0xb687, 0x08b3), (0xb688, 0x08b4), (0xb689, 0x08b5), (0xb68a, 0x08b6), (0xb68b, 0x08b7),
    (0xb68c, 0x08b8), (0xb68d, 0x08b9), (0xb68e, 0x08ba), (0xb68f, 0x08bb), (0xb690, 0x08bc), (0xb691, 0x08bd),
    (0xb692, 0x08be), (0xb693, 0x08bf), (0xb694, 0x08c0), (0xb695, 0x08c1), (0xb696, 0x08c2), (0xb697, 0x08c3),
    (0xb698, 0x08c4), (0xb699, 0x08c5), (0xb69a, 0x08c6), (0xb69b, 0x08c7), (0xb69c, 0x27e6), (0xb69d, 0x27e7),
    (0xb69e, 0x08c8), (0xb69f, 0x08c9), (0xb6a0, 0x27e8), (0xb6a1, 0x08ca), (0xb6a2, 0x08cb), (0xb6a3, 0x08cc),
    (0xb6a4, 0x27e9), (0xb6a5, 0x08cd), (0xb6a6, 0x08ce), (0xb6a7, 0x08cf), (0xb6a8, 0x08d0), (0xb6a9, 0x08d1),
    (0xb6aa, 0x08d2), (0xb6ab, 0x27ea), (0xb6ac, 0x27eb), (0xb6ad, 0x08d3), (0xb6ae, 0x08d4), (0xb6af, 0x08d5),
    (0xb6b0, 0x08d6), (0xb6b1, 0x27ec), (0xb6b2, 0x08d7), (0xb6b3, 0x08d8), (0xb6b4, 0x08d9), (0xb6b5, 0x08da),
    (0xb6b6, 0x08db), (0xb6b7, 0x08dc), (0xb6b8, 0x08dd), (0xb6b9, 0x08de), (0xb6ba, 0x08df), (0xb6bb, 0x08e0),
    (0xb6bc, 0x08e1), (0xb6bd, 0x08e2), (0xb6be, 0x08e3), (0xb6bf, 0x08e4), (0xb6c0, 0x08e5), (0xb6c1, 0x08e6),
    (0xb6c2, 0x08e7), (0xb6c3, 0x08e8), (0xb6c4, 0x08e9), (0xb6c5, 0x08ea), (0xb6c6, 0x08eb), (0xb6c7, 0x08ec),
    (0xb6c8, 0x08ed), (0xb6c9, 0x08ee), (0xb6ca, 0x08ef), (0xb6cb, 0x08f0), (0xb6cc, 0x08f1), (0xb6cd, 0x08f2),
    (0xb6ce, 0x08f3), (0xb6cf, 0x08f4), (0xb6d0, 0x08f5), (0xb6d1, 0x08f6), (0xb6d2, 0x08f7), (0xb6d3, 0x08f8),
    (0xb6d4, 0x27ed), (0xb6d5, 0x08f9), (0xb6d6, 0x08fa), (0xb6d7, 0x08fb), (0xb6d8, 0x08fc), (0xb6d9, 0x08fd),
    (0xb6da, 0x08fe), (0xb6db, 0x08ff), (0xb6dc, 0x0900), (0xb6dd, 0x0901), (0xb6de, 0x0908), (0xb6df, 0x0909),
    (0xb6e0, 0x090a), (0xb6e1, 0x090b), (0xb6e2, 0x090c), (0xb6e3, 0x090d), (0xb6e4, 0x090e), (0xb6e5, 0x090f),
    (0xb6e6, 0x0910), (0xb6e7, 0x0911), (0xb6e8, 0x0912), (0xb6e9, 0x0913), (0xb6ea, 0x0914), (0xb6eb, 0x0915),
    (0xb6ec, 0x0916), (0xb6ed, 0x0917), (0xb6ee, 0x0918), (0xb6ef, 0x0919), (0xb6f0, 0x27ee), (0xb6f1, 0x091a),
    (0xb6f2, 0x091b), (0xb6f3, 0x091c), (0xb6f4, 0x27ef), (0xb6f5, 0x091d), (0xb6f6, 0x091e), (0xb6f7, 0x091f),
    (0xb6f8, 0x27f0), (0xb6f9, 0x0920), (0xb6fa, 0x0921), (0xb6fb, 0x0928), (0xb6fc, 0x0929), (0xb6fd, 0x092a),
    (0xb6fe, 0x092b), (0xb6ff, 0x092c), (0xb700, 0x27f1), (0xb701, 0x27f2), (0xb702, 0x092d), (0xb703, 0x092e),
    (0xb704, 0x092f), (0xb705, 0x27f3), (0xb706, 0x0930), (0xb707, 0x0931), (0xb708, 0x0932), (0xb709, 0x0933),
    (0xb70a, 0x0934), (0xb70b, 0x0935), (0xb70c, 0x0936), (0xb70d, 0x0937), (0xb70e, 0x0938), (0xb70f, 0x0939),
    (0xb710, 0x093a), (0xb711, 0x093b), (0xb712, 0x093c), (0xb713, 0x093d), (0xb714, 0x093e), (0xb715, 0x093f),
    (0xb716, 0x0940), (0xb717, 0x0941), (0xb718, 0x0942), (0xb719, 0x0943), (0xb71a, 0x0944), (0xb71b, 0x0945),
    (0xb71c, 0x0946), (0xb71d, 0x0947), (0xb71e, 0x0948), (0xb71f, 0x0949), (0xb720, 0x094a), (0xb721, 0x094b),
    (0xb722, 0x094c), (0xb723, 0x094d), (0xb724, 0x094e), (0xb725, 0x094f), (0xb726, 0x0950), (0xb727, 0x0951),
    (0xb728, 0x27f4), (0xb729, 0x27f5), (0xb72a, 0x0952), (0xb72b, 0x0953), (0xb72c, 0x27f6), (0xb72d, 0x0954),
    (0xb72e, 0x0955), (0xb72f, 0x27f7), (0xb730, 0x27f8), (0xb731, 0x0956), (0xb732, 0x0957), (0xb733, 0x0958),
    (0xb734, 0x0959), (0xb735, 0x095a), (0xb736, 0x095b), (0xb737, 0x095c), (0xb738, 0x27f9), (0xb739, 0x27fa),
    (0xb73a, 0x095d), (0xb73b, 0x27fb), (0xb73c, 0x095e), (0xb73d, 0x095f), (0xb73e, 0x0960), (0xb73f, 0x0961),
    (0xb740, 0x0962), (0xb741, 0x0963), (0xb742, 0x0964), (0xb743, 0x0965), (0xb744, 0x27fc), (0xb745, 0x0966),
    (0xb746, 0x0967), (0xb747, 0x0968), (0xb748, 0x27fd), (0xb749, 0x0969), (0xb74a, 0x096a), (0xb74b, 0x096b),
    (0xb74c, 0x27fe), (0xb74d, 0x096c), (0xb74e, 0x096d), (0xb74f, 0x096e), (0xb750, 0x096f), (0xb751, 0x0970),
    (0xb752, 0x0971), (0xb753, 0x0972), (0xb754, 0x27ff), (0xb755, 0x2800), (0xb756, 0x0973), (0xb757, 0x0974),
    (0xb758, 0x0975), (0xb759, 0x0976), (0xb75a, 0x0977), (0xb75b, 0x0978), (0xb75c, 0x0979), (0xb75d, 0x097a),
    (0xb75e, 0x097b), (0xb75f, 0x097c), (0xb760, 0x2801), (0xb761, 0x097d), (0xb762, 0x097e), (0xb763, 0x097f),
    (0xb764, 0x2802), (0xb765, 0x0980), (0xb766, 0x0981), (0xb767, 0x0982), (0xb768, 0x2803), (0xb769, 0x0983),
    (0xb76a, 0x0984), (0xb76b, 0x0985), (0xb76c, 0x0986), (0xb76d, 0x0987), (0xb76e, 0x0988), (0xb76f, 0x0989),
    (0xb770, 0x2804), (0xb771, 0x2805), (0xb772, 0x098a), (0xb773, 0x2806), (0xb774, 0x098b), (0xb775, 0x2807),
    (0xb776, 0x098c), (0xb777, 0x098d), (0xb778, 0x098e), (0xb779, 0x098f), (0xb77a, 0x0990), (0xb77b, 0x0991),
    (0xb77c, 0x2808), (0xb77d, 0x2809), (0xb77e, 0x0992), (0xb77f, 0x0993), (0xb780, 0x280a), (0xb781, 0x0994),
    (0xb782, 0x0995), (0xb783, 0x0996), (0xb784, 0x280b), (0xb785, 0x0997), (0xb786, 0x0998), (0xb787, 0x0999),
    (0xb788, 0x099a), (0xb789, 0x099b), (0xb78a, 0x099c), (0xb78b, 0x099d), (0xb78c, 0x280c), (0xb78d, 0x280d),
    (0xb78e, 0x099e), (0xb78f, 0x280e), (0xb790, 0x280f), (0xb791, 0x2810), (0xb792, 0x2811), (0xb793, 0x099f),
    (0xb794, 0x09a0), (0xb795, 0x09a1), (0xb796, 0x2812), (0xb797, 0x2813), (0xb798, 0x2874), (0xb799, 0x2875),
    (0xb79a, 0x09a2), (0xb79b, 0x09a3), (0xb79c, 0x2876), (0xb79d, 0x09a4), (0xb79e, 0x09a5), (0xb79f, 0x09a6),
    (0xb7a0, 0x2877), (0xb7a1, 0x09a7), (0xb7a2, 0x09a8), (0xb7a3, 0x09a9), (0xb7a4, 0x09aa), (0xb7a5, 0x09ab),
    (0xb7a6, 0x09ac), (0xb7a7, 0x09ad), (0xb7a8, 0x2878), (0xb7a9, 0x2879), (0xb7aa, 0x09ae), (0xb7ab, 0x287a),
    (0xb7ac, 0x287b), (0xb7ad, 0x287c), (0xb7ae, 0x09af), (0xb7af, 0x09b0), (0xb7b0, 0x09b1), (0xb7b1, 0x09b2),
    (0xb7b2, 0x09b3), (0xb7b3, 0x09b4), (0xb7b4, 0x287d), (0xb7b5, 0x287e), (0xb7b6, 0x09b5), (0xb7b7, 0x09b6),
    (0xb7b8, 0x287f), (0xb7b9, 0x09b7), (0xb7ba, 0x09b8), (0xb7bb, 0x09b9), (0xb7bc, 0x09ba), (0xb7bd, 0x09bb),
    (0xb7be, 0x09bc), (0xb7bf, 0x09bd), (0xb7c0, 0x09be), (0xb7c1, 0x09bf), (0xb7c2, 0x09c6), (0xb7c3, 0x09c7),
    (0xb7c4, 0x09c8), (0xb7c5, 0x09c9), (0xb7c6, 0x09ca), (0xb7c7, 0x2880), (0xb7c8, 0x09cb), (0xb7c9, 0x2881),
    (0xb7ca, 0x09cc), (0xb7cb, 0x09cd), (0xb7cc, 0x09ce), (0xb7cd, 0x09cf), (0xb7ce, 0x09d0), (0xb7cf, 0x09d1),
    (0xb7d0, 0x09d2), (0xb7d1, 0x09d3), (0xb7d2, 0x09d4), (0xb7d3, 0x09d5), (0xb7d4, 0x09d6), (0xb7d5, 0x09d7),
    (0xb7d6, 0x09d8), (0xb7d7, 0x09d9), (0xb7d8, 0x09da), (0xb7d9, 0x09db), (0xb7da, 0x09dc), (0xb7db, 0x09dd),
    (0xb7dc, 0x09de), (0xb7dd, 0x09df), (0xb7de, 0x09e6), (0xb7df, 0x09e7), (0xb7e0, 0x09e8), (0xb7e1, 0x09e9),
    (0xb7e2, 0x09ea), (0xb7e3, 0x09eb), (0xb7e4, 0x09ec), (0xb7e5, 0x09ed), (0xb7e6, 0x09ee), (0xb7e7, 0x09ef),
    (0xb7e8, 0x09f0), (0xb7e9, 0x09f1), (0xb7ea, 0x09f2), (0xb7eb, 0x09f3), (0xb7ec, 0x2882), (0xb7ed, 0x2883),
    (0xb7ee, 0x09f4), (0xb7ef, 0x09f5), (0xb7f0, 0x2884), (0xb7f1, 0x09f6), (0xb7f2, 0x09f7), (0xb7f3, 0x09f8),
    (0xb7f4, 0x2885), (0xb7f5, 0x09f9), (0xb7f6, 0x09fa), (0xb7f7, 0x09fb), (0xb7f8, 0x09fc), (0xb7f9, 0x09fd),
    (0xb7fa, 0x09fe), (0xb7fb, 0x09ff), (0xb7fc, 0x2886), (0xb7fd, 0x2887), (0xb7fe, 0x0a00), (0xb7ff, 0x2888),
    (0xb800, 0x2889), (0xb801, 0x288a), (0xb802, 0x0a01), (0xb803, 0x0a02), (0xb804, 0x0a03), (0xb805, 0x0a04),
    (0xb806, 0x0a05), (0xb807, 0x288b), (0xb808, 0x288c), (0xb809, 0x288d), (0xb80a, 0x0a06), (0xb80b, 0x0a07),
    (0xb80c, 0x288e), (0xb80d, 0x0a08), (0xb80e, 0x0a09), (0xb80f, 0x0a0a), (0xb810, 0x288f), (0xb811, 0x0a0b),
    (0xb812, 0x0a0c), (0xb813, 0x0a0d), (0xb814, 0x0a0e), (0xb815, 0x0a0f), (0xb816, 0x0a10), (0xb817, 0x0a11),
    (0xb818, 0x2890), (0xb819, 0x2891), (0xb81a, 0x0a12), (0xb81b, 0x2892), (0xb81c, 0x0a13), (0xb81d, 0x2893),
    (0xb81e, 0x0a14), (0xb81f, 0x0a15), (0xb820, 0x0a16), (0xb821, 0x0a17), (0xb822, 0x0a18), (0xb823, 0x0a19),
    (0xb824, 0x2894), (0xb825, 0x2895), (0xb826, 0x0a1a), (0xb827, 0x0a1b), (0xb828, 0x2896), (0xb829, 0x0a1c),
    (0xb82a, 0x0a1d), (0xb82b, 0x0a1e), (0xb82c, 0x2897), (0xb82d, 0x0a1f), (0xb82e, 0x0a20), (0xb82f, 0x0a21),
    (0xb830, 0x0a22), (0xb831, 0x0a23), (0xb832, 0x0a24), (0xb833, 0x0a25), (0xb834, 0x2898), (0xb835, 0x2899),
    (0xb836, 0x0a26), (0xb837, 0x289a), (0xb838, 0x289b), (0xb839, 0x289c), (0xb83a, 0x0a27), (0xb83b, 0x0a28),
    (0xb83c, 0x0a29), (0xb83d, 0x0a2a), (0xb83e, 0x0a2b), (0xb83f, 0x0a2c), (0xb840, 0x289d), (0xb841, 0x0a2d),
    (0xb842, 0x0a2e), (0xb843, 0x0a2f), (0xb844, 0x289e), (0xb845, 0x0a30), (0xb846, 0x0a31), (0xb847, 0x0a32),
    (0xb848, 0x0a33), (0xb849, 0x0a34), (0xb84a, 0x0a35), (0xb84b, 0x0a36), (0xb84c, 0x0a37), (0xb84d, 0x0a38),
    (0xb84e, 0x0a39), (0xb84f, 0x0a3a), (0xb850, 0x0a3b), (0xb851, 0x289f), (0xb852, 0x0a3c), (0xb853, 0x28a0),
    (0xb854, 0x0a3d), (0xb855, 0x0a3e), (0xb856, 0x0a3f), (0xb857, 0x0a40), (0xb858, 0x0a41), (0xb859, 0x0a42),
    (0xb85a, 0x0a43), (0xb85b, 0x0a44), (0xb85c, 0x28a1), (0xb85d, 0x28a2), (0xb85e, 0x0a45), (0xb85f, 0x0a46),
    (0xb860, 0x28a3), (0xb861, 0x0a47), (0xb862, 0x0a48), (0xb863, 0x0a49), (0xb864, 0x28a4), (0xb865, 0x0a4a),
    (0xb866, 0x0a4b), (0xb867, 0x0a4c), (0xb868, 0x0a4d), (0xb869, 0x0a4e), (0xb86a, 0x0a4f), (0xb86b, 0x0a50),
    (0xb86c, 0x28a5), (0xb86d, 0x28a6), (0xb86e, 0x0a51), (0xb86f, 0x28a7), (0xb870, 0x0a52), (0xb871, 0x28a8),
    (0xb872, 0x0a53), (0xb873, 0x0a54), (0xb874, 0x0a55), (0xb875, 0x0a56), (0xb876, 0x0a57), (0xb877, 0x0a58),
    (0xb878, 0x28a9), (0xb879, 0x0a59), (0xb87a, 0x0a5a), (0xb87b, 0x0a5b), (0xb87c, 0x28aa), (0xb87d, 0x0a5c),
    (0xb87e, 0x0a5d), (0xb87f, 0x0a5e), (0xb880, 0x0a5f), (0xb881, 0x0a60), (0xb882, 0x0a61), (0xb883, 0x0a62),
    (0xb884, 0x0a63), (0xb885, 0x0a64), (0xb886, 0x0a65), (0xb887, 0x0a66), (0xb888, 0x0a67), (0xb889, 0x0a68),
    (0xb88a, 0x0a69), (0xb88b, 0x0a6a), (0xb88c, 0x0a6b), (0xb88d, 0x28ab), (0xb88e, 0x0a6c), (0xb88f, 0x0a6d),
    (0xb890, 0x0a6e), (0xb891, 0x0a6f), (0xb892, 0x0a70), (0xb893, 0x0a71), (0xb894, 0x0a72), (0xb895, 0x0a73),
    (0xb896, 0x0a74), (0xb897, 0x0a75), (0xb898, 0x0a76), (0xb899, 0x0a77), (0xb89a, 0x0a78), (0xb89b, 0x0a79),
    (0xb89c, 0x0a7a), (0xb89d, 0x0a7b), (0xb89e, 0x0a7c), (0xb89f, 0x0a7d), (0xb8a0, 0x0a84), (0xb8a1, 0x0a85),
    (0xb8a2, 0x0a86), (0xb8a3, 0x0a87), (0xb8a4, 0x0a88), (0xb8a5, 0x0a89), (0xb8a6, 0x0a8a), (0xb8a7, 0x0a8b),
    (0xb8a8, 0x28ac), (0xb8a9, 0x0a8c), (0xb8aa, 0x0a8d), (0xb8ab, 0x0a8e), (0xb8ac, 0x0a8f), (0xb8ad, 0x0a90),
    (0xb8ae, 0x0a91), (0xb8af, 0x0a92), (0xb8b0, 0x28ad), (0xb8b1, 0x0a93), (0xb8b2, 0x0a94), (0xb8b3, 0x0a95),
    (0xb8b4, 0x28ae), (0xb8b5, 0x0a96), (0xb8b6, 0x0a97), (0xb8b7, 0x0a98), (0xb8b8, 0x28af), (0xb8b9, 0x0a99),
    (0xb8ba, 0x0a9a), (0xb8bb, 0x0a9b), (0xb8bc, 0x0a9c), (0xb8bd, 0x0a9d), (0xb8be, 0x0aa4), (0xb8bf, 0x0aa5),
    (0xb8c0, 0x28b0), (0xb8c1, 0x28b1), (0xb8c2, 0x0aa6), (0xb8c3, 0x28b2), (0xb8c4, 0x0aa7), (0xb8c5, 0x28b3),
    (0xb8c6, 0x0aa8), (0xb8c7, 0x0aa9), (0xb8c8, 0x0aaa), (0xb8c9, 0x0aab), (0xb8ca, 0x0aac), (0xb8cb, 0x0aad),
    (0xb8cc, 0x28b4), (0xb8cd, 0x0aae), (0xb8ce, 0x0aaf), (0xb8cf, 0x0ab0), (0xb8d0, 0x28b5), (0xb8d1, 0x0ab1),
    (0xb8d2, 0x0ab2), (0xb8d3, 0x0ab3), (0xb8d4, 0x28b6), (0xb8d5, 0x0ab4), (0xb8d6, 0x0ab5), (0xb8d7, 0x0ab6),
    (0xb8d8, 0x0ab7), (0xb8d9, 0x0ab8), (0xb8da, 0x0ab9), (0xb8db, 0x0aba), (0xb8dc, 0x0abb), (0xb8dd, 0x28b7),
    (0xb8de, 0x0abc), (0xb8df, 0x28b8), (0xb8e0, 0x0abd), (0xb8e1, 0x28b9), (0xb8e2, 0x0abe), (0xb8e3, 0x0abf),
    (0xb8e4, 0x0ac0), (0xb8e5, 0x0ac1), (0xb8e6, 0x0ac2), (0xb8e7, 0x0ac3), (0xb8e8, 0x28ba), (0xb8e9, 0x28bb),
    (0xb8ea, 0x0ac4), (0xb8eb, 0x0ac5), (0xb8ec, 0x28bc), (0xb8ed, 0x0ac6), (0xb8ee, 0x0ac7), (0xb8ef, 0x0ac8),
    (0xb8f0, 0x28bd), (0xb8f1, 0x0ac9), (0xb8f2, 0x0aca), (0xb8f3, 0x0acb), (0xb8f4, 0x0acc), (0xb8f5, 0x0acd),
    (0xb8f6, 0x0ace), (0xb8f7, 0x0acf), (0xb8f8, 0x28be), (0xb8f9, 0x28bf), (0xb8fa, 0x0ad0), (0xb8fb, 0x28c0),
    (0xb8fc, 0x0ad1), (0xb8fd, 0x28c1), (0xb8fe, 0x0ad2), (0xb8ff, 0x0ad3), (0xb900, 0x0ad4), (0xb901, 0x0ad5),
    (0xb902, 0x0ad6), (0xb903, 0x0ad7), (0xb904, 0x28c2), (0xb905, 0x0ad8), (0xb906, 0x0ad9), (0xb907, 0x0ada),
    (0xb908, 0x0adb), (0xb909, 0x0adc), (0xb90a, 0x0add), (0xb90b, 0x0ade), (0xb90c, 0x0adf), (0xb90d, 0x0ae0),
    (0xb90e, 0x0ae1), (0xb90f, 0x0ae2), (0xb910, 0x0ae3), (0xb911, 0x0ae4), (0xb912, 0x0ae5), (0xb913, 0x0ae6),
    (0xb914, 0x0ae7), (0xb915, 0x0ae8), (0xb916, 0x0ae9), (0xb917, 0x0aea), (0xb918, 0x28c3), (0xb919, 0x0aeb),
    (0xb91a, 0x0aec), (0xb91b, 0x0aed), (0xb91c, 0x0aee), (0xb91d, 0x0aef), (0xb91e, 0x0af0), (0xb91f, 0x0af1),
    (0xb920, 0x28c4), (0xb921, 0x0af2), (0xb922, 0x0af3), (0xb923, 0x0af4), (0xb924, 0x0af5), (0xb925, 0x0af6),
    (0xb926, 0x0af7), (0xb927, 0x0af8), (0xb928, 0x0af9), (0xb929, 0x0afa), (0xb92a, 0x0afb), (0xb92b, 0x0afc),
    (0xb92c, 0x0afd), (0xb92d, 0x0afe), (0xb92e, 0x0aff), (0xb92f, 0x0b00), (0xb930, 0x0b01), (0xb931, 0x0b02),
    (0xb932, 0x0b03), (0xb933, 0x0b04), (0xb934, 0x0b05), (0xb935, 0x0b06), (0xb936, 0x0b07), (0xb937, 0x0b08),
    (0xb938, 0x0b09), (0xb939, 0x0b0a), (0xb93a, 0x0b0b), (0xb93b, 0x0b0c), (0xb93c, 0x28c5), (0xb93d, 0x28c6),
    (0xb93e, 0x0b0d), (0xb93f, 0x0b0e), (0xb940, 0x28c7), (0xb941, 0x0b0f), (0xb942, 0x0b10), (0xb943, 0x0b11),
    (0xb944, 0x28c8), (0xb945, 0x0b12), (0xb946, 0x0b13), (0xb947, 0x0b14), (0xb948, 0x0b15), (0xb949, 0x0b16),
    (0xb94a, 0x0b17), (0xb94b, 0x0b18), (0xb94c, 0x28c9), (0xb94d, 0x0b19), (0xb94e, 0x0b1a), (0xb94f, 0x28ca),
    (0xb950, 0x0b1b), (0xb951, 0x28cb), (0xb952, 0x0b1c), (0xb953, 0x0b1d), (0xb954, 0x0b1e), (0xb955, 0x0b1f),
    (0xb956, 0x0b20), (0xb957, 0x0b21), (0xb958, 0x28cc), (0xb959, 0x28cd), (0xb95a, 0x0b22), (0xb95b, 0x0b23),
    (0xb95c, 0x28ce), (0xb95d, 0x0b24), (0xb95e, 0x0b25), (0xb95f, 0x0b26), (0xb960, 0x28cf), (0xb961, 0x0b27),
    (0xb962, 0x0b28), (0xb963, 0x0b29), (0xb964, 0x0b2a), (0xb965, 0x0b2b), (0xb966, 0x0b2c), (0xb967, 0x0b2d),
    (0xb968, 0x28d0), (0xb969, 0x28d1), (0xb96a, 0x0b2e), (0xb96b, 0x2932), (0xb96c, 0x0b2f), (0xb96d, 0x2933),
    (0xb96e, 0x0b30), (0xb96f, 0x0b31), (0xb970, 0x0b32), (0xb971, 0x0b33), (0xb972, 0x0b34), (0xb973, 0x0b35),
    (0xb974, 0x2934), (0xb975, 0x2935), (0xb976, 0x0b36), (0xb977, 0x0b37), (0xb978, 0x2936), (0xb979, 0x0b38),
    (0xb97a, 0x0b39), (0xb97b, 0x0b3a), (0xb97c, 0x2937), (0xb97d, 0x0b3b), (0xb97e, 0x0b42), (0xb97f, 0x0b43),
    (0xb980, 0x0b44), (0xb981, 0x0b45), (0xb982, 0x0b46), (0xb983, 0x0b47), (0xb984, 0x2938), (0xb985, 0x2939),
    (0xb986, 0x0b48), (0xb987, 0x293a), (0xb988, 0x0b49), (0xb989, 0x293b), (0xb98a, 0x293c), (0xb98b, 0x0b4a),
    (0xb98c, 0x0b4b), (0xb98d, 0x293d), (0xb98e, 0x293e), (0xb98f, 0x0b4c), (0xb990, 0x0b4d), (0xb991, 0x0b4e),
    (0xb992, 0x0b4f), (0xb993, 0x0b50), (0xb994, 0x0b51), (0xb995, 0x0b52), (0xb996, 0x0b53), (0xb997, 0x0b54),
    (0xb998, 0x0b55), (0xb999, 0x0b56), (0xb99a, 0x0b57), (0xb99b, 0x0b58), (0xb99c, 0x0b59), (0xb99d, 0x0b5a),
    (0xb99e, 0x0b5b), (0xb99f, 0x0b62), (0xb9a0, 0x0b63), (0xb9a1, 0x0b64), (0xb9a2, 0x0b65), (0xb9a3, 0x0b66),
    (0xb9a4, 0x0b67), (0xb9a5, 0x0b68), (0xb9a6, 0x0b69), (0xb9a7, 0x0b6a), (0xb9a8, 0x0b6b), (0xb9a9, 0x0b6c),
    (0xb9aa, 0x0b6d), (0xb9ab, 0x0b6e), (0xb9ac, 0x293f), (0xb9ad, 0x2940), (0xb9ae, 0x0b6f), (0xb9af, 0x0b70),
    (0xb9b0, 0x2941), (0xb9b1, 0x0b71), (0xb9b2, 0x0b72), (0xb9b3, 0x0b73), (0xb9b4, 0x2942), (0xb9b5, 0x0b74),
    (0xb9b6, 0x0b75), (0xb9b7, 0x0b76), (0xb9b8, 0x0b77), (0xb9b9, 0x0b78), (0xb9ba, 0x0b79), (0xb9bb, 0x0b7a),
    (0xb9bc, 0x2943), (0xb9bd, 0x2944), (0xb9be, 0x0b7b), (0xb9bf, 0x2945), (0xb9c0, 0x0b7c), (0xb9c1, 0x2946),
    (0xb9c2, 0x0b7d), (0xb9c3, 0x0b7e), (0xb9c4, 0x0b7f), (0xb9c5, 0x0b80), (0xb9c6, 0x0b81), (0xb9c7, 0x0b82),
    (0xb9c8, 0x2947), (0xb9c9, 0x2948), (0xb9ca, 0x0b83), (0xb9cb, 0x0b84), (0xb9cc, 0x2949), (0xb9cd, 0x0b85),
    (0xb9ce, 0x294a), (0xb9cf, 0x294b), (0xb9d0, 0x294c), (0xb9d1, 0x294d), (0xb9d2, 0x294e), (0xb9d3, 0x0b86),
    (0xb9d4, 0x0b87), (0xb9d5, 0x0b88), (0xb9d6, 0x0b89), (0xb9d7, 0x0b8a), (0xb9d8, 0x294f), (0xb9d9, 0x2950),
    (0xb9da, 0x0b8b), (0xb9db, 0x2951), (0xb9dc, 0x0b8c), (0xb9dd, 0x2952), (0xb9de, 0x2953), (0xb9df, 0x0b8d),
    (0xb9e0, 0x0b8e), (0xb9e1, 0x2954), (0xb9e2, 0x0b8f), (0xb9e3, 0x2955), (0xb9e4, 0x2956), (0xb9e5, 0x2957),
    (0xb9e6, 0x0b90), (0xb9e7, 0x0b91), (0xb9e8, 0x2958), (0xb9e9, 0x0b92), (0xb9ea, 0x0b93), (0xb9eb, 0x0b94),
    (0xb9ec, 0x2959), (0xb9ed, 0x0b95), (0xb9ee, 0x0b96), (0xb9ef, 0x0b97), (0xb9f0, 0x0b98), (0xb9f1, 0x0b99),
    (0xb9f2, 0x0b9a), (0xb9f3, 0x0b9b), (0xb9f4, 0x295a), (0xb9f5, 0x295b), (0xb9f6, 0x0b9c), (0xb9f7, 0x295c),
    (0xb9f8, 0x295d), (0xb9f9, 0x295e), (0xb9fa, 0x295f), (0xb9fb, 0x0b9d), (0xb9fc, 0x0b9e), (0xb9fd, 0x0b9f),
    (0xb9fe, 0x0ba0), (0xb9ff, 0x0ba1), (0xba00, 0x2960), (0xba01, 0x2961), (0xba02, 0x0ba2), (0xba03, 0x0ba3),
    (0xba04, 0x0ba4), (0xba05, 0x0ba5), (0xba06, 0x0ba6), (0xba07, 0x0ba7), (0xba08, 0x2962), (0xba09, 0x0ba8),
    (0xba0a, 0x0ba9), (0xba0b, 0x0baa), (0xba0c, 0x0bab), (0xba0d, 0x0bac), (0xba0e, 0x0bad), (0xba0f, 0x0bae),
    (0xba10, 0x0baf), (0xba11, 0x0bb0), (0xba12, 0x0bb1), (0xba13, 0x0bb2), (0xba14, 0x0bb3), (0xba15, 0x2963),
    (0xba16, 0x0bb4), (0xba17, 0x0bb5), (0xba18, 0x0bb6), (0xba19, 0x0bb7), (0xba1a, 0x0bb8), (0xba1b, 0x0bb9),
    (0xba1c, 0x0bba), (0xba1d, 0x0bbb), (0xba1e, 0x0bbc), (0xba1f, 0x0bbd), (0xba20, 0x0bbe), (0xba21, 0x0bbf),
    (0xba22, 0x0bc0), (0xba23, 0x0bc1), (0xba24, 0x0bc2), (0xba25, 0x0bc3), (0xba26, 0x0bc4), (0xba27, 0x0bc5),
    (0xba28, 0x0bc6), (0xba29, 0x0bc7), (0xba2a, 0x0bc8), (0xba2b, 0x0bc9), (0xba2c, 0x0bca), (0xba2d, 0x0bcb),
    (0xba2e, 0x0bcc), (0xba2f, 0x0bcd), (0xba30, 0x0bce), (0xba31, 0x0bcf), (0xba32, 0x0bd0), (0xba33, 0x0bd1),
    (0xba34, 0x0bd2), (0xba35, 0x0bd3), (0xba36, 0x0bd4), (0xba37, 0x0bd5), (0xba38, 0x2964), (0xba39, 0x2965),
    (0xba3a, 0x0bd6), (0xba3b, 0x0bd7), (0xba3c, 0x2966), (0xba3d, 0x0bd8), (0xba3e, 0x0bd9), (0xba3f, 0x0bda),
    (0xba40, 0x2967), (0xba41, 0x0bdb), (0xba42, 0x2968), (0xba43, 0x0bdc), (0xba44, 0x0bdd), (0xba45, 0x0bde),
    (0xba46, 0x0bdf), (0xba47, 0x0be0), (0xba48, 0x2969), (0xba49, 0x296a), (0xba4a, 0x0be1), (0xba4b, 0x296b),
    (0xba4c, 0x0be2), (0xba4d, 0x296c), (0xba4e, 0x296d), (0xba4f, 0x0be3), (0xba50, 0x0be4), (0xba51, 0x0be5),
    (0xba52, 0x0be6), (0xba53, 0x296e), (0xba54, 0x296f), (0xba55, 0x2970), (0xba56, 0x0be7), (0xba57, 0x0be8),
    (0xba58, 0x2971), (0xba59, 0x0be9), (0xba5a, 0x0bea), (0xba5b, 0x0beb), (0xba5c, 0x2972), (0xba5d, 0x0bec),
    (0xba5e, 0x0bed), (0xba5f, 0x0bee), (0xba60, 0x0bef), (0xba61, 0x0bf0), (0xba62, 0x0bf1), (0xba63, 0x0bf2),
    (0xba64, 0x2973), (0xba65, 0x2974), (0xba66, 0x0bf3), (0xba67, 0x2975), (0xba68, 0x2976), (0xba69, 0x2977),
    (0xba6a, 0x0bf4), (0xba6b, 0x0bf5), (0xba6c, 0x0bf6), (0xba6d, 0x0bf7), (0xba6e, 0x0bf8), (0xba6f, 0x0bf9),
    (0xba70, 0x2978), (0xba71, 0x2979), (0xba72, 0x0c00), (0xba73, 0x0c01), (0xba74, 0x297a), (0xba75, 0x0c02),
    (0xba76, 0x0c03), (0xba77, 0x0c04), (0xba78, 0x297b), (0xba79, 0x0c05), (0xba7a, 0x0c06), (0xba7b, 0x0c07),
    (0xba7c, 0x0c08), (0xba7d, 0x0c09), (0xba7e, 0x0c0a), (0xba7f, 0x0c0b), (0xba80, 0x0c0c), (0xba81, 0x0c0d),
    (0xba82, 0x0c0e), (0xba83, 0x297c), (0xba84, 0x297d), (0xba85, 0x297e), (0xba86, 0x0c0f), (0xba87, 0x297f),
    (0xba88, 0x0c10), (0xba89, 0x0c11), (0xba8a, 0x0c12), (0xba8b, 0x0c13), (0xba8c, 0x2980), (0xba8d, 0x0c14),
    (0xba8e, 0x0c15), (0xba8f, 0x0c16), (0xba90, 0x0c17), (0xba91, 0x0c18), (0xba92, 0x0c19), (0xba93, 0x0c20),
    (0xba94, 0x0c21), (0xba95, 0x0c22), (0xba96, 0x0c23), (0xba97, 0x0c24), (0xba98, 0x0c25), (0xba99, 0x0c26),
    (0xba9a, 0x0c27), (0xba9b, 0x0c28), (0xba9c, 0x0c29), (0xba9d, 0x0c2a), (0xba9e, 0x0c2b), (0xba9f, 0x0c2c),
    (0xbaa0, 0x0c2d), (0xbaa1, 0x0c2e), (0xbaa2, 0x0c2f), (0xbaa3, 0x0c30), (0xbaa4, 0x0c31), (0xbaa5, 0x0c32),
    (0xbaa6, 0x0c33), (0xbaa7, 0x0c34), (0xbaa8, 0x2981), (0xbaa9, 0x2982), (0xbaaa, 0x0c35), (0xbaab, 0x2983),
    (0xbaac, 0x2984), (0xbaad, 0x0c36), (0xbaae, 0x0c37), (0xbaaf, 0x0c38), (0xbab0, 0x2985), (0xbab1, 0x0c39),
    (0xbab2, 0x2986), (0xbab3, 0x0c3a), (0xbab4, 0x0c3b), (0xbab5, 0x0c3c), (0xbab6, 0x0c3d), (0xbab7, 0x0c3e),
    (0xbab8, 0x2987), (0xbab9, 0x2988), (0xbaba, 0x0c3f), (0xbabb, 0x2989), (0xbabc, 0x0c40), (0xbabd, 0x298a),
    (0xbabe, 0x0c41), (0xbabf, 0x0c42), (0xbac0, 0x0c43), (0xbac1, 0x0c44), (0xbac2, 0x0c45), (0xbac3, 0x0c46),
    (0xbac4, 0x298b), (0xbac5, 0x0c47), (0xbac6, 0x0c48), (0xbac7, 0x0c49), (0xbac8, 0x298c), (0xbac9, 0x0c4a),
    (0xbaca, 0x0c4b), (0xbacb, 0x0c4c), (0xbacc, 0x0c4d), (0xbacd, 0x0c4e), (0xbace, 0x0c4f), (0xbacf, 0x0c50),
    (0xbad0, 0x0c51), (0xbad1, 0x0c52), (0xbad2, 0x0c53), (0xbad3, 0x0c54), (0xbad4, 0x0c55), (0xbad5, 0x0c56),
    (0xbad6, 0x0c57), (0xbad7, 0x0c58), (0xbad8, 0x298d), (0xbad9, 0x298e), (0xbada, 0x0c59), (0xbadb, 0x0c5a),
    (0xbadc, 0x0c5b), (0xbadd, 0x0c5c), (0xbade, 0x0c5d), (0xbadf, 0x0c5e), (0xbae0, 0x0c5f), (0xbae1, 0x0c60),
    (0xbae2, 0x0c61), (0xbae3, 0x0c62), (0xbae4, 0x0c63), (0xbae5, 0x0c64), (0xbae6, 0x0c65), (0xbae7, 0x0c66),
    (0xbae8, 0x0c67), (0xbae9, 0x0c68), (0xbaea, 0x0c69), (0xbaeb, 0x0c6a), (0xbaec, 0x0c6b), (0xbaed, 0x0c6c),
    (0xbaee, 0x0c6d), (0xbaef, 0x0c6e), (0xbaf0, 0x0c6f), (0xbaf1, 0x0c70), (0xbaf2, 0x0c71), (0xbaf3, 0x0c72),
    (0xbaf4, 0x0c73), (0xbaf5, 0x0c74), (0xbaf6, 0x0c75), (0xbaf7, 0x0c76), (0xbaf8, 0x0c77), (0xbaf9, 0x0c78),
    (0xbafa, 0x0c79), (0xbafb, 0x0c7a), (0xbafc, 0x298f), (0xbafd, 0x0c7b), (0xbafe, 0x0c7c), (0xbaff, 0x0c7d),
    (0xbb00, 0x29f0), (0xbb01, 0x0c7e), (0xbb02, 0x0c7f), (0xbb03, 0x0c80), (0xbb04, 0x29f1), (0xbb05, 0x0c81),
    (0xbb06, 0x0c82), (0xbb07, 0x0c83), (0xbb08, 0x0c84), (0xbb09, 0x0c85), (0xbb0a, 0x0c86), (0xbb0b, 0x0c87),
    (0xbb0c, 0x0c88), (0xbb0d, 0x29f2), (0xbb0e, 0x0c89), (0xbb0f, 0x29f3), (0xbb10, 0x0c8a), (0xbb11, 0x29f4),
    (0xbb12, 0x0c8b), (0xbb13, 0x0c8c), (0xbb14, 0x0c8d), (0xbb15, 0x0c8e), (0xbb16, 0x0c8f), (0xbb17, 0x0c90),
    (0xbb18, 0x29f5), (0xbb19, 0x0c91), (0xbb1a, 0x0c92), (0xbb1b, 0x0c93), (0xbb1c, 0x29f6), (0xbb1d, 0x0c94),
    (0xbb1e, 0x0c95), (0xbb1f, 0x0c96), (0xbb20, 0x29f7), (0xbb21, 0x0c97), (0xbb22, 0x0c98), (0xbb23, 0x0c99),
    (0xbb24, 0x0c9a), (0xbb25, 0x0c9b), (0xbb26, 0x0c9c), (0xbb27, 0x0c9d), (0xbb28, 0x0c9e), (0xbb29, 0x29f8),
    (0xbb2a, 0x0c9f), (0xbb2b, 0x29f9), (0xbb2c, 0x0ca0), (0xbb2d, 0x0ca1), (0xbb2e, 0x0ca2), (0xbb2f, 0x0ca3),
    (0xbb30, 0x0ca4), (0xbb31, 0x0ca5), (0xbb32, 0x0ca6), (0xbb33, 0x0ca7), (0xbb34, 0x29fa), (0xbb35, 0x29fb),
    (0xbb36, 0x29fc), (0xbb37, 0x0ca8), (0xbb38, 0x29fd), (0xbb39, 0x0ca9), (0xbb3a, 0x0caa), (0xbb3b, 0x29fe),
    (0xbb3c, 0x29ff), (0xbb3d, 0x2a00), (0xbb3e, 0x2a01), (0xbb3f, 0x0cab), (0xbb40, 0x0cac), (0xbb41, 0x0cad),
    (0xbb42, 0x0cae), (0xbb43, 0x0caf), (0xbb44, 0x2a02), (0xbb45, 0x2a03), (0xbb46, 0x0cb0), (0xbb47, 0x2a04),
    (0xbb48, 0x0cb1), (0xbb49, 0x2a05), (0xbb4a, 0x0cb2), (0xbb4b, 0x0cb3), (0xbb4c, 0x0cb4), (0xbb4d, 0x2a06),
    (0xbb4e, 0x0cb5), (0xbb4f, 0x2a07), (0xbb50, 0x2a08), (0xbb51, 0x0cb6), (0xbb52, 0x0cb7), (0xbb53, 0x0cbe),
    (0xbb54, 0x2a09), (0xbb55, 0x0cbf), (0xbb56, 0x0cc0), (0xbb57, 0x0cc1), (0xbb58, 0x2a0a), (0xbb59, 0x0cc2),
    (0xbb5a, 0x0cc3), (0xbb5b, 0x0cc4), (0xbb5c, 0x0cc5), (0xbb5d, 0x0cc6), (0xbb5e, 0x0cc7), (0xbb5f, 0x0cc8),
    (0xbb60, 0x0cc9), (0xbb61, 0x2a0b), (0xbb62, 0x0cca), (0xbb63, 0x2a0c), (0xbb64, 0x0ccb), (0xbb65, 0x0ccc),
    (0xbb66, 0x0ccd), (0xbb67, 0x0cce), (0xbb68, 0x0ccf), (0xbb69, 0x0cd0), (0xbb6a, 0x0cd1), (0xbb6b, 0x0cd2),
    (0xbb6c, 0x2a0d), (0xbb6d, 0x0cd3), (0xbb6e, 0x0cd4), (0xbb6f, 0x0cd5), (0xbb70, 0x0cd6), (0xbb71, 0x0cd7),
    (0xbb72, 0x0cde), (0xbb73, 0x0cdf), (0xbb74, 0x0ce0), (0xbb75, 0x0ce1), (0xbb76, 0x0ce2), (0xbb77, 0x0ce3),
    (0xbb78, 0x0ce4), (0xbb79, 0x0ce5), (0xbb7a, 0x0ce6), (0xbb7b, 0x0ce7), (0xbb7c, 0x0ce8), (0xbb7d, 0x0ce9),
    (0xbb7e, 0x0cea), (0xbb7f, 0x0ceb), (0xbb80, 0x0cec), (0xbb81, 0x0ced), (0xbb82, 0x0cee), (0xbb83, 0x0cef),
    (0xbb84, 0x0cf0), (0xbb85, 0x0cf1), (0xbb86, 0x0cf2), (0xbb87, 0x0cf3), (0xbb88, 0x2a0e), (0xbb89, 0x0cf4),
    (0xbb8a, 0x0cf5), (0xbb8b, 0x0cf6), (0xbb8c, 0x2a0f), (0xbb8d, 0x0cf7), (0xbb8e, 0x0cf8), (0xbb8f, 0x0cf9),
    (0xbb90, 0x2a10), (0xbb91, 0x0cfa), (0xbb92, 0x0cfb), (0xbb93, 0x0cfc), (0xbb94, 0x0cfd), (0xbb95, 0x0cfe),
    (0xbb96, 0x0cff), (0xbb97, 0x0d00), (0xbb98, 0x0d01), (0xbb99, 0x0d02), (0xbb9a, 0x0d03), (0xbb9b, 0x0d04),
    (0xbb9c, 0x0d05), (0xbb9d, 0x0d06), (0xbb9e, 0x0d07), (0xbb9f, 0x0d08), (0xbba0, 0x0d09), (0xbba1, 0x0d0a),
    (0xbba2, 0x0d0b), (0xbba3, 0x0d0c), (0xbba4, 0x2a11), (0xbba5, 0x0d0d), (0xbba6, 0x0d0e), (0xbba7, 0x0d0f),
    (0xbba8, 0x2a12), (0xbba9, 0x0d10), (0xbbaa, 0x0d11), (0xbbab, 0x0d12), (0xbbac, 0x2a13), (0xbbad, 0x0d13),
    (0xbbae, 0x0d14), (0xbbaf, 0x0d15), (0xbbb0, 0x0d16), (0xbbb1, 0x0d17), (0xbbb2, 0x0d18), (0xbbb3, 0x0d19),
    (0xbbb4, 0x2a14), (0xbbb5, 0x0d1a), (0xbbb6, 0x0d1b), (0xbbb7, 0x2a15), (0xbbb8, 0x0d1c), (0xbbb9, 0x0d1d),
    (0xbbba, 0x0d1e), (0xbbbb, 0x0d1f), (0xbbbc, 0x0d20), (0xbbbd, 0x0d21), (0xbbbe, 0x0d22), (0xbbbf, 0x0d23),
    (0xbbc0, 0x2a16), (0xbbc1, 0x0d24), (0xbbc2, 0x0d25), (0xbbc3, 0x0d26), (0xbbc4, 0x2a17), (0xbbc5, 0x0d27),
    (0xbbc6, 0x0d28), (0xbbc7, 0x0d29), (0xbbc8, 0x2a18), (0xbbc9, 0x0d2a), (0xbbca, 0x0d2b), (0xbbcb, 0x0d2c),
    (0xbbcc, 0x0d2d), (0xbbcd, 0x0d2e), (0xbbce, 0x0d2f), (0xbbcf, 0x0d30), (0xbbd0, 0x2a19), (0xbbd1, 0x0d31),
    (0xbbd2, 0x0d32), (0xbbd3, 0x2a1a), (0xbbd4, 0x0d33), (0xbbd5, 0x0d34), (0xbbd6, 0x0d35), (0xbbd7, 0x0d36),
    (0xbbd8, 0x0d37), (0xbbd9, 0x0d38), (0xbbda, 0x0d39), (0xbbdb, 0x0d3a), (0xbbdc, 0x0d3b), (0xbbdd, 0x0d3c),
    (0xbbde, 0x0d3d), (0xbbdf, 0x0d3e), (0xbbe0, 0x0d3f), (0xbbe1, 0x0d40), (0xbbe2, 0x0d41), (0xbbe3, 0x0d42),
    (0xbbe4, 0x0d43), (0xbbe5, 0x0d44), (0xbbe6, 0x0d45), (0xbbe7, 0x0d46), (0xbbe8, 0x0d47), (0xbbe9, 0x0d48),
    (0xbbea, 0x0d49), (0xbbeb, 0x0d4a), (0xbbec, 0x0d4b), (0xbbed, 0x0d4c), (0xbbee, 0x0d4d), (0xbbef, 0x0d4e),
    (0xbbf0, 0x0d4f), (0xbbf1, 0x0d50), (0xbbf2, 0x0d51), (0xbbf3, 0x0d52), (0xbbf4, 0x0d53), (0xbbf5, 0x0d54),
    (0xbbf6, 0x0d55), (0xbbf7, 0x0d56), (0xbbf8, 0x2a1b), (0xbbf9, 0x2a1c), (0xbbfa, 0x0d57), (0xbbfb, 0x0d58),
    (0xbbfc, 0x2a1d), (0xbbfd, 0x0d59), (0xbbfe, 0x0d5a), (0xbbff, 0x2a1e), (0xbc00, 0x2a1f), (0xbc01, 0x0d5b),
    (0xbc02, 0x2a20), (0xbc03, 0x0d5c), (0xbc04, 0x0d5d), (0xbc05, 0x0d5e), (0xbc06, 0x0d5f), (0xbc07, 0x0d60),
    (0xbc08, 0x2a21), (0xbc09, 0x2a22), (0xbc0a, 0x0d61), (0xbc0b, 0x2a23), (0xbc0c, 0x2a24), (0xbc0d, 0x2a25),
    (0xbc0e, 0x0d62), (0xbc0f, 0x2a26), (0xbc10, 0x0d63), (0xbc11, 0x2a27), (0xbc12, 0x0d64), (0xbc13, 0x0d65),
    (0xbc14, 0x2a28), (0xbc15, 0x2a29), (0xbc16, 0x2a2a), (0xbc17, 0x2a2b), (0xbc18, 0x2a2c), (0xbc19, 0x0d66),
    (0xbc1a, 0x0d67), (0xbc1b, 0x2a2d), (0xbc1c, 0x2a2e), (0xbc1d, 0x2a2f), (0xbc1e, 0x2a30), (0xbc1f, 0x2a31),
    (0xbc20, 0x0d68), (0xbc21, 0x0d69), (0xbc22, 0x0d6a), (0xbc23, 0x0d6b), (0xbc24, 0x2a32), (0xbc25, 0x2a33),
    (0xbc26, 0x0d6c), (0xbc27, 0x2a34), (0xbc28, 0x0d6d), (0xbc29, 0x2a35), (0xbc2a, 0x0d6e), (0xbc2b, 0x0d6f),
    (0xbc2c, 0x0d70), (0xbc2d, 0x2a36), (0xbc2e, 0x0d71), (0xbc2f, 0x0d72), (0xbc30, 0x2a37), (0xbc31, 0x2a38),
    (0xbc32, 0x0d73), (0xbc33, 0x0d74), (0xbc34, 0x2a39), (0xbc35, 0x0d75), (0xbc36, 0x0d7c), (0xbc37, 0x0d7d),
    (0xbc38, 0x2a3a), (0xbc39, 0x0d7e), (0xbc3a, 0x0d7f), (0xbc3b, 0x0d80), (0xbc3c, 0x0d81), (0xbc3d, 0x0d82),
    (0xbc3e, 0x0d83), (0xbc3f, 0x0d84), (0xbc40, 0x2a3b), (0xbc41, 0x2a3c), (0xbc42, 0x0d85), (0xbc43, 0x2a3d),
    (0xbc44, 0x2a3e), (0xbc45, 0x2a3f), (0xbc46, 0x0d86), (0xbc47, 0x0d87), (0xbc48, 0x0d88), (0xbc49, 0x2a40),
    (0xbc4a, 0x0d89), (0xbc4b, 0x0d8a), (0xbc4c, 0x2a41), (0xbc4d, 0x2a42), (0xbc4e, 0x0d8b), (0xbc4f, 0x0d8c),
    (0xbc50, 0x2a43), (0xbc51, 0x0d8d), (0xbc52, 0x0d8e), (0xbc53, 0x0d8f), (0xbc54, 0x0d90), (0xbc55, 0x0d91),
    (0xbc56, 0x0d92), (0xbc57, 0x0d93), (0xbc58, 0x0d94), (0xbc59, 0x0d95), (0xbc5a, 0x0d9c), (0xbc5b, 0x0d9d),
    (0xbc5c, 0x0d9e), (0xbc5d, 0x2a44), (0xbc5e, 0x0d9f), (0xbc5f, 0x0da0), (0xbc60, 0x0da1), (0xbc61, 0x0da2),
    (0xbc62, 0x0da3), (0xbc63, 0x0da4), (0xbc64, 0x0da5), (0xbc65, 0x0da6), (0xbc66, 0x0da7), (0xbc67, 0x0da8),
    (0xbc68, 0x0da9), (0xbc69, 0x0daa), (0xbc6a, 0x0dab), (0xbc6b, 0x0dac), (0xbc6c, 0x0dad), (0xbc6d, 0x0dae),
    (0xbc6e, 0x0daf), (0xbc6f, 0x0db0), (0xbc70, 0x0db1), (0xbc71, 0x0db2), (0xbc72, 0x0db3), (0xbc73, 0x0db4),
    (0xbc74, 0x0db5), (0xbc75, 0x0db6), (0xbc76, 0x0db7), (0xbc77, 0x0db8), (0xbc78, 0x0db9), (0xbc79, 0x0dba),
    (0xbc7a, 0x0dbb), (0xbc7b, 0x0dbc), (0xbc7c, 0x0dbd), (0xbc7d, 0x0dbe), (0xbc7e, 0x0dbf), (0xbc7f, 0x0dc0),
    (0xbc80, 0x0dc1), (0xbc81, 0x0dc2), (0xbc82, 0x0dc3), (0xbc83, 0x0dc4), (0xbc84, 0x2a45), (0xbc85, 0x2a46),
    (0xbc86, 0x0dc5), (0xbc87, 0x0dc6), (0xbc88, 0x2a47), (0xbc89, 0x0dc7), (0xbc8a, 0x0dc8), (0xbc8b, 0x2a48),
    (0xbc8c, 0x2a49), (0xbc8d, 0x0dc9), (0xbc8e, 0x2a4a), (0xbc8f, 0x0dca), (0xbc90, 0x0dcb), (0xbc91, 0x0dcc),
    (0xbc92, 0x0dcd), (0xbc93, 0x0dce), (0xbc94, 0x2a4b), (0xbc95, 0x2a4c), (0xbc96, 0x0dcf), (0xbc97, 0x2a4d),
    (0xbc98, 0x0dd0), (0xbc99, 0x2aae), (0xbc9a, 0x2aaf), (0xbc9b, 0x0dd1), (0xbc9c, 0x0dd2), (0xbc9d, 0x0dd3),
    (0xbc9e, 0x0dd4), (0xbc9f, 0x0dd5), (0xbca0, 0x2ab0), (0xbca1, 0x2ab1), (0xbca2, 0x0dd6), (0xbca3, 0x0dd7),
    (0xbca4, 0x2ab2), (0xbca5, 0x0dd8), (0xbca6, 0x0dd9), (0xbca7, 0x2ab3), (0xbca8, 0x2ab4), (0xbca9, 0x0dda),
    (0xbcaa, 0x0ddb), (0xbcab, 0x0ddc), (0xbcac, 0x0ddd), (0xbcad, 0x0dde), (0xbcae, 0x0ddf), (0xbcaf, 0x0de0),
    (0xbcb0, 0x2ab5), (0xbcb1, 0x2ab6), (0xbcb2, 0x0de1), (0xbcb3, 0x2ab7), (0xbcb4, 0x2ab8), (0xbcb5, 0x2ab9),
    (0xbcb6, 0x0de2), (0xbcb7, 0x0de3), (0xbcb8, 0x0de4), (0xbcb9, 0x0de5), (0xbcba, 0x0de6), (0xbcbb, 0x0de7),
    (0xbcbc, 0x2aba), (0xbcbd, 0x2abb), (0xbcbe, 0x0de8), (0xbcbf, 0x0de9), (0xbcc0, 0x2abc), (0xbcc1, 0x0dea),
    (0xbcc2, 0x0deb), (0xbcc3, 0x0dec), (0xbcc4, 0x2abd), (0xbcc5, 0x0ded), (0xbcc6, 0x0dee), (0xbcc7, 0x0def),
    (0xbcc8, 0x0df0), (0xbcc9, 0x0df1), (0xbcca, 0x0df2), (0xbccb, 0x0df3), (0xbccc, 0x0df4), (0xbccd, 0x2abe),
    (0xbcce, 0x0df5), (0xbccf, 0x2abf), (0xbcd0, 0x2ac0), (0xbcd1, 0x2ac1), (0xbcd2, 0x0df6), (0xbcd3, 0x0df7),
    (0xbcd4, 0x0df8), (0xbcd5, 0x2ac2), (0xbcd6, 0x0df9), (0xbcd7, 0x0dfa), (0xbcd8, 0x2ac3), (0xbcd9, 0x0dfb),
    (0xbcda, 0x0dfc), (0xbcdb, 0x0dfd), (0xbcdc, 0x2ac4), (0xbcdd, 0x0dfe), (0xbcde, 0x0dff), (0xbcdf, 0x0e00),
    (0xbce0, 0x0e01), (0xbce1, 0x0e02), (0xbce2, 0x0e03), (0xbce3, 0x0e04), (0xbce4, 0x0e05), (0xbce5, 0x0e06),
    (0xbce6, 0x0e07), (0xbce7, 0x0e08), (0xbce8, 0x0e09), (0xbce9, 0x0e0a), (0xbcea, 0x0e0b), (0xbceb, 0x0e0c),
    (0xbcec, 0x0e0d), (0xbced, 0x0e0e), (0xbcee, 0x0e0f), (0xbcef, 0x0e10), (0xbcf0, 0x0e11), (0xbcf1, 0x0e12),
    (0xbcf2, 0x0e13), (0xbcf3, 0x0e14), (0xbcf4, 0x2ac5), (0xbcf5, 0x2ac6), (0xbcf6, 0x2ac7), (0xbcf7, 0x0e15),
    (0xbcf8, 0x2ac8), (0xbcf9, 0x0e16), (0xbcfa, 0x0e17), (0xbcfb, 0x0e18), (0xbcfc, 0x2ac9), (0xbcfd, 0x0e19),
    (0xbcfe, 0x0e1a), (0xbcff, 0x0e1b), (0xbd00, 0x0e1c), (0xbd01, 0x0e1d), (0xbd02, 0x0e1e), (0xbd03, 0x0e1f),
    (0xbd04, 0x2aca), (0xbd05, 0x2acb), (0xbd06, 0x0e20), (0xbd07, 0x2acc), (0xbd08, 0x0e21), (0xbd09, 0x2acd),
    (0xbd0a, 0x0e22), (0xbd0b, 0x0e23), (0xbd0c, 0x0e24), (0xbd0d, 0x0e25), (0xbd0e, 0x0e26), (0xbd0f, 0x0e27),
    (0xbd10, 0x2ace), (0xbd11, 0x0e28), (0xbd12, 0x0e29), (0xbd13, 0x0e2a), (0xbd14, 0x2acf), (0xbd15, 0x0e2b),
    (0xbd16, 0x0e2c), (0xbd17, 0x0e2d), (0xbd18, 0x0e2e), (0xbd19, 0x0e2f), (0xbd1a, 0x0e30), (0xbd1b, 0x0e31),
    (0xbd1c, 0x0e32), (0xbd1d, 0x0e33), (0xbd1e, 0x0e3a), (0xbd1f, 0x0e3b), (0xbd20, 0x0e3c), (0xbd21, 0x0e3d),
    (0xbd22, 0x0e3e), (0xbd23, 0x0e3f), (0xbd24, 0x2ad0), (0xbd25, 0x0e40), (0xbd26, 0x0e41), (0xbd27, 0x0e42),
    (0xbd28, 0x0e43), (0xbd29, 0x0e44), (0xbd2a, 0x0e45), (0xbd2b, 0x0e46), (0xbd2c, 0x2ad1), (0xbd2d, 0x0e47),
    (0xbd2e, 0x0e48), (0xbd2f, 0x0e49), (0xbd30, 0x0e4a), (0xbd31, 0x0e4b), (0xbd32, 0x0e4c), (0xbd33, 0x0e4d),
    (0xbd34, 0x0e4e), (0xbd35, 0x0e4f), (0xbd36, 0x0e50), (0xbd37, 0x0e51), (0xbd38, 0x0e52), (0xbd39, 0x0e53),
    (0xbd3a, 0x0e5a), (0xbd3b, 0x0e5b), (0xbd3c, 0x0e5c), (0xbd3d, 0x0e5d), (0xbd3e, 0x0e5e), (0xbd3f, 0x0e5f),
    (0xbd40, 0x2ad2), (0xbd41, 0x0e60), (0xbd42, 0x0e61), (0xbd43, 0x0e62), (0xbd44, 0x0e63), (0xbd45, 0x0e64),
    (0xbd46, 0x0e65), (0xbd47, 0x0e66), (0xbd48, 0x2ad3), (0xbd49, 0x2ad4), (0xbd4a, 0x0e67), (0xbd4b, 0x0e68),
    (0xbd4c, 0x2ad5), (0xbd4d, 0x0e69), (0xbd4e, 0x0e6a), (0xbd4f, 0x0e6b), (0xbd50, 0x2ad6), (0xbd51, 0x0e6c),
    (0xbd52, 0x0e6d), (0xbd53, 0x0e6e), (0xbd54, 0x0e6f), (0xbd55, 0x0e70), (0xbd56, 0x0e71), (0xbd57, 0x0e72),
    (0xbd58, 0x2ad7), (0xbd59, 0x2ad8), (0xbd5a, 0x0e73), (0xbd5b, 0x0e74), (0xbd5c, 0x0e75), (0xbd5d, 0x0e76),
    (0xbd5e, 0x0e77), (0xbd5f, 0x0e78), (0xbd60, 0x0e79), (0xbd61, 0x0e7a), (0xbd62, 0x0e7b), (0xbd63, 0x0e7c),
    (0xbd64, 0x2ad9), (0xbd65, 0x0e7d), (0xbd66, 0x0e7e), (0xbd67, 0x0e7f), (0xbd68, 0x2ada), (0xbd69, 0x0e80),
    (0xbd6a, 0x0e81), (0xbd6b, 0x0e82), (0xbd6c, 0x0e83), (0xbd6d, 0x0e84), (0xbd6e, 0x0e85), (0xbd6f, 0x0e86),
    (0xbd70, 0x0e87), (0xbd71, 0x0e88), (0xbd72, 0x0e89), (0xbd73, 0x0e8a), (0xbd74, 0x0e8b), (0xbd75, 0x0e8c),
    (0xbd76, 0x0e8d), (0xbd77, 0x0e8e), (0xbd78, 0x0e8f), (0xbd79, 0x0e90), (0xbd7a, 0x0e91), (0xbd7b, 0x0e92),
    (0xbd7c, 0x0e93), (0xbd7d, 0x0e94), (0xbd7e, 0x0e95), (0xbd7f, 0x0e96), (0xbd80, 0x2adb), (0xbd81, 0x2adc),
    (0xbd82, 0x0e97), (0xbd83, 0x0e98), (0xbd84, 0x2add), (0xbd85, 0x0e99), (0xbd86, 0x0e9a), (0xbd87, 0x2ade),
    (0xbd88, 0x2adf), (0xbd89, 0x2ae0), (0xbd8a, 0x2ae1), (0xbd8b, 0x0e9b), (0xbd8c, 0x0e9c), (0xbd8d, 0x0e9d),
    (0xbd8e, 0x0e9e), (0xbd8f, 0x0e9f), (0xbd90, 0x2ae2), (0xbd91, 0x2ae3), (0xbd92, 0x0ea0), (0xbd93, 0x2ae4),
    (0xbd94, 0x0ea1), (0xbd95, 0x2ae5), (0xbd96, 0x0ea2), (0xbd97, 0x0ea3), (0xbd98, 0x0ea4), (0xbd99, 0x2ae6),
    (0xbd9a, 0x2ae7), (0xbd9b, 0x0ea5), (0xbd9c, 0x2ae8), (0xbd9d, 0x0ea6), (0xbd9e, 0x0ea7), (0xbd9f, 0x0ea8),
    (0xbda0, 0x0ea9), (0xbda1, 0x0eaa), (0xbda2, 0x0eab), (0xbda3, 0x0eac), (0xbda4, 0x2ae9), (0xbda5, 0x0ead),
    (0xbda6, 0x0eae), (0xbda7, 0x0eaf), (0xbda8, 0x0eb0), (0xbda9, 0x0eb1), (0xbdaa, 0x0eb2), (0xbdab, 0x0eb3),
    (0xbdac, 0x0eb4), (0xbdad, 0x0eb5), (0xbdae, 0x0eb6), (0xbdaf, 0x0eb7), (0xbdb0, 0x2aea), (0xbdb1, 0x0eb8),
    (0xbdb2, 0x0eb9), (0xbdb3, 0x0eba), (0xbdb4, 0x0ebb), (0xbdb5, 0x0ebc), (0xbdb6, 0x0ebd), (0xbdb7, 0x0ebe),
    (0xbdb8, 0x2aeb), (0xbdb9, 0x0ebf), (0xbdba, 0x0ec0), (0xbdbb, 0x0ec1), (0xbdbc, 0x0ec2), (0xbdbd, 0x0ec3),
    (0xbdbe, 0x0ec4), (0xbdbf, 0x0ec5), (0xbdc0, 0x0ec6), (0xbdc1, 0x0ec7), (0xbdc2, 0x0ec8), (0xbdc3, 0x0ec9),
    (0xbdc4, 0x0eca), (0xbdc5, 0x0ecb), (0xbdc6, 0x0ecc), (0xbdc7, 0x0ecd), (0xbdc8, 0x0ece), (0xbdc9, 0x0ecf),
    (0xbdca, 0x0ed0), (0xbdcb, 0x0ed1), (0xbdcc, 0x0ed2), (0xbdcd, 0x0ed3), (0xbdce, 0x0ed4), (0xbdcf, 0x0ed5),
    (0xbdd0, 0x0ed6), (0xbdd1, 0x0ed7), (0xbdd2, 0x0ed8), (0xbdd3, 0x0ed9), (0xbdd4, 0x2aec), (0xbdd5, 0x2aed),
    (0xbdd6, 0x0eda), (0xbdd7, 0x0edb), (0xbdd8, 0x2aee), (0xbdd9, 0x0edc), (0xbdda, 0x0edd), (0xbddb, 0x0ede),
    (0xbddc, 0x2aef), (0xbddd, 0x0edf), (0xbdde, 0x0ee0), (0xbddf, 0x0ee1), (0xbde0, 0x0ee2), (0xbde1, 0x0ee3),
    (0xbde2, 0x0ee4), (0xbde3, 0x0ee5), (0xbde4, 0x0ee6), (0xbde5, 0x0ee7), (0xbde6, 0x0ee8), (0xbde7, 0x0ee9),
    (0xbde8, 0x0eea), (0xbde9, 0x2af0), (0xbdea, 0x0eeb), (0xbdeb, 0x0eec), (0xbdec, 0x0eed), (0xbded, 0x0eee),
    (0xbdee, 0x0eef), (0xbdef, 0x0ef0), (0xbdf0, 0x2af1), (0xbdf1, 0x0ef1), (0xbdf2, 0x0ef8), (0xbdf3, 0x0ef9),
    (0xbdf4, 0x2af2), (0xbdf5, 0x0efa), (0xbdf6, 0x0efb), (0xbdf7, 0x0efc), (0xbdf8, 0x2af3), (0xbdf9, 0x0efd),
    (0xbdfa, 0x0efe), (0xbdfb, 0x0eff), (0xbdfc, 0x0f00), (0xbdfd, 0x0f01), (0xbdfe, 0x0f02), (0xbdff, 0x0f03),
    (0xbe00, 0x2af4), (0xbe01, 0x0f04), (0xbe02, 0x0f05), (0xbe03, 0x2af5), (0xbe04, 0x0f06), (0xbe05, 0x2af6),
    (0xbe06, 0x0f07), (0xbe07, 0x0f08), (0xbe08, 0x0f09), (0xbe09, 0x0f0a), (0xbe0a, 0x0f0b), (0xbe0b, 0x0f0c),
    (0xbe0c, 0x2af7), (0xbe0d, 0x2af8), (0xbe0e, 0x0f0d), (0xbe0f, 0x0f0e), (0xbe10, 0x2af9), (0xbe11, 0x0f0f),
    (0xbe12, 0x0f10), (0xbe13, 0x0f11), (0xbe14, 0x2afa), (0xbe15, 0x0f18), (0xbe16, 0x0f19), (0xbe17, 0x0f1a),
    (0xbe18, 0x0f1b), (0xbe19, 0x0f1c), (0xbe1a, 0x0f1d), (0xbe1b, 0x0f1e), (0xbe1c, 0x2afb), (0xbe1d, 0x2afc),
    (0xbe1e, 0x0f1f), (0xbe1f, 0x2afd), (0xbe20, 0x0f20), (0xbe21, 0x0f21), (0xbe22, 0x0f22), (0xbe23, 0x0f23),
    (0xbe24, 0x0f24), (0xbe25, 0x0f25), (0xbe26, 0x0f26), (0xbe27, 0x0f27), (0xbe28, 0x0f28), (0xbe29, 0x0f29),
    (0xbe2a, 0x0f2a), (0xbe2b, 0x0f2b), (0xbe2c, 0x0f2c), (0xbe2d, 0x0f2d), (0xbe2e, 0x0f2e), (0xbe2f, 0x0f2f),
    (0xbe30, 0x0f30), (0xbe31, 0x0f31), (0xbe32, 0x0f32), (0xbe33, 0x0f33), (0xbe34, 0x0f34), (0xbe35, 0x0f35),
    (0xbe36, 0x0f36), (0xbe37, 0x0f37), (0xbe38, 0x0f38), (0xbe39, 0x0f39), (0xbe3a, 0x0f3a), (0xbe3b, 0x0f3b),
    (0xbe3c, 0x0f3c), (0xbe3d, 0x0f3d), (0xbe3e, 0x0f3e), (0xbe3f, 0x0f3f), (0xbe40, 0x0f40), (0xbe41, 0x0f41),
    (0xbe42, 0x0f42), (0xbe43, 0x0f43), (0xbe44, 0x2afe), (0xbe45, 0x2aff), (0xbe46, 0x0f44), (0xbe47, 0x0f45),
    (0xbe48, 0x2b00), (0xbe49, 0x0f46), (0xbe4a, 0x0f47), (0xbe4b, 0x0f48), (0xbe4c, 0x2b01), (0xbe4d, 0x0f49),
    (0xbe4e, 0x2b02), (0xbe4f, 0x0f4a), (0xbe50, 0x0f4b), (0xbe51, 0x0f4c), (0xbe52, 0x0f4d), (0xbe53, 0x0f4e),
    (0xbe54, 0x2b03), (0xbe55, 0x2b04), (0xbe56, 0x0f4f), (0xbe57, 0x2b05), (0xbe58, 0x0f50), (0xbe59, 0x2b06),
    (0xbe5a, 0x2b07), (0xbe5b, 0x2b08), (0xbe5c, 0x0f51), (0xbe5d, 0x0f52), (0xbe5e, 0x0f53), (0xbe5f, 0x0f54),
    (0xbe60, 0x2b09), (0xbe61, 0x2b0a), (0xbe62, 0x0f55), (0xbe63, 0x0f56), (0xbe64, 0x2b0b), (0xbe65, 0x0f57),
    (0xbe66, 0x0f58), (0xbe67, 0x0f59), (0xbe68, 0x2b6c), (0xbe69, 0x0f5a), (0xbe6a, 0x2b6d), (0xbe6b, 0x0f5b),
    (0xbe6c, 0x0f5c), (0xbe6d, 0x0f5d), (0xbe6e, 0x0f5e), (0xbe6f, 0x0f5f), (0xbe70, 0x2b6e), (0xbe71, 0x2b6f),
    (0xbe72, 0x0f60), (0xbe73, 0x2b70), (0xbe74, 0x2b71), (0xbe75, 0x2b72), (0xbe76, 0x0f61), (0xbe77, 0x0f62),
    (0xbe78, 0x0f63), (0xbe79, 0x0f64), (0xbe7a, 0x0f65), (0xbe7b, 0x2b73), (0xbe7c, 0x2b74), (0xbe7d, 0x2b75),
    (0xbe7e, 0x0f66), (0xbe7f, 0x0f67), (0xbe80, 0x2b76), (0xbe81, 0x0f68), (0xbe82, 0x0f69), (0xbe83, 0x0f6a),
    (0xbe84, 0x2b77), (0xbe85, 0x0f6b), (0xbe86, 0x0f6c), (0xbe87, 0x0f6d), (0xbe88, 0x0f6e), (0xbe89, 0x0f6f),
    (0xbe8a, 0x0f70), (0xbe8b, 0x0f71), (0xbe8c, 0x2b78), (0xbe8d, 0x2b79), (0xbe8e, 0x0f72), (0xbe8f, 0x2b7a),
    (0xbe90, 0x2b7b), (0xbe91, 0x2b7c), (0xbe92, 0x0f73), (0xbe93, 0x0f74), (0xbe94, 0x0f75), (0xbe95, 0x0f76),
    (0xbe96, 0x0f77), (0xbe97, 0x0f78), (0xbe98, 0x2b7d), (0xbe99, 0x2b7e), (0xbe9a, 0x0f79), (0xbe9b, 0x0f7a),
    (0xbe9c, 0x0f7b), (0xbe9d, 0x0f7c), (0xbe9e, 0x0f7d), (0xbe9f, 0x0f7e), (0xbea0, 0x0f7f), (0xbea1, 0x0f80),
    (0xbea2, 0x0f81), (0xbea3, 0x0f82), (0xbea4, 0x0f83), (0xbea5, 0x0f84), (0xbea6, 0x0f85), (0xbea7, 0x0f86),
    (0xbea8, 0x2b7f), (0xbea9, 0x0f87), (0xbeaa, 0x0f88), (0xbeab, 0x0f89), (0xbeac, 0x0f8a), (0xbead, 0x0f8b),
    (0xbeae, 0x0f8c), (0xbeaf, 0x0f8d), (0xbeb0, 0x0f8e), (0xbeb1, 0x0f8f), (0xbeb2, 0x0f90), (0xbeb3, 0x0f91),
    (0xbeb4, 0x0f92), (0xbeb5, 0x0f93), (0xbeb6, 0x0f94), (0xbeb7, 0x0f95), (0xbeb8, 0x0f96), (0xbeb9, 0x0f97),
    (0xbeba, 0x0f98), (0xbebb, 0x0f99), (0xbebc, 0x0f9a), (0xbebd, 0x0f9b), (0xbebe, 0x0f9c), (0xbebf, 0x0f9d),
    (0xbec0, 0x0f9e), (0xbec1, 0x0f9f), (0xbec2, 0x0fa0), (0xbec3, 0x0fa1), (0xbec4, 0x0fa2), (0xbec5, 0x0fa3),
    (0xbec6, 0x0fa4), (0xbec7, 0x0fa5), (0xbec8, 0x0fa6), (0xbec9, 0x0fa7), (0xbeca, 0x0fa8), (0xbecb, 0x0fa9),
    (0xbecc, 0x0faa), (0xbecd, 0x0fab), (0xbece, 0x0fac), (0xbecf, 0x0fad), (0xbed0, 0x2b80), (0xbed1, 0x2b81),
    (0xbed2, 0x0fae), (0xbed3, 0x0faf), (0xbed4, 0x2b82), (0xbed5, 0x0fb6), (0xbed6, 0x0fb7), (0xbed7, 0x2b83),
    (0xbed8, 0x2b84), (0xbed9, 0x0fb8), (0xbeda, 0x0fb9), (0xbedb, 0x0fba), (0xbedc, 0x0fbb), (0xbedd, 0x0fbc),
    (0xbede, 0x0fbd), (0xbedf, 0x0fbe), (0xbee0, 0x2b85), (0xbee1, 0x0fbf), (0xbee2, 0x0fc0), (0xbee3, 0x2b86),
    (0xbee4, 0x2b87), (0xbee5, 0x2b88), (0xbee6, 0x0fc1), (0xbee7, 0x0fc2), (0xbee8, 0x0fc3), (0xbee9, 0x0fc4),
    (0xbeea, 0x0fc5), (0xbeeb, 0x0fc6), (0xbeec, 0x2b89), (0xbeed, 0x0fc7), (0xbeee, 0x0fc8), (0xbeef, 0x0fc9),
    (0xbef0, 0x0fca), (0xbef1, 0x0fcb), (0xbef2, 0x0fcc), (0xbef3, 0x0fcd), (0xbef4, 0x0fce), (0xbef5, 0x0fcf),
    (0xbef6, 0x0fd6), (0xbef7, 0x0fd7), (0xbef8, 0x0fd8), (0xbef9, 0x0fd9), (0xbefa, 0x0fda), (0xbefb, 0x0fdb),
    (0xbefc, 0x0fdc), (0xbefd, 0x0fdd), (0xbefe, 0x0fde), (0xbeff, 0x0fdf), (0xbf00, 0x0fe0), (0xbf01, 0x2b8a),
    (0xbf02, 0x0fe1), (0xbf03, 0x0fe2), (0xbf04, 0x0fe3), (0xbf05, 0x0fe4), (0xbf06, 0x0fe5), (0xbf07, 0x0fe6),
    (0xbf08, 0x2b8b), (0xbf09, 0x2b8c), (0xbf0a, 0x0fe7), (0xbf0b, 0x0fe8), (0xbf0c, 0x0fe9), (0xbf0d, 0x0fea),
    (0xbf0e, 0x0feb), (0xbf0f, 0x0fec), (0xbf10, 0x0fed), (0xbf11, 0x0fee), (0xbf12, 0x0fef), (0xbf13, 0x0ff0),
    (0xbf14, 0x0ff1), (0xbf15, 0x0ff2), (0xbf16, 0x0ff3), (0xbf17, 0x0ff4), (0xbf18, 0x2b8d), (0xbf19, 0x2b8e),
    (0xbf1a, 0x0ff5), (0xbf1b, 0x2b8f), (0xbf1c, 0x2b90), (0xbf1d, 0x2b91), (0xbf1e, 0x0ff6), (0xbf1f, 0x0ff7),
    (0xbf20, 0x0ff8), (0xbf21, 0x0ff9), (0xbf22, 0x0ffa), (0xbf23, 0x0ffb), (0xbf24, 0x0ffc), (0xbf25, 0x0ffd),
    (0xbf26, 0x0ffe), (0xbf27, 0x0fff), (0xbf28, 0x1000), (0xbf29, 0x1001), (0xbf2a, 0x1002), (0xbf2b, 0x1003),
    (0xbf2c, 0x1004), (0xbf2d, 0x1005), (0xbf2e, 0x1006), (0xbf2f, 0x1007), (0xbf30, 0x1008), (0xbf31, 0x1009),
    (0xbf32, 0x100a), (0xbf33, 0x100b), (0xbf34, 0x100c), (0xbf35, 0x100d), (0xbf36, 0x100e), (0xbf37, 0x100f),
    (0xbf38, 0x1010), (0xbf39, 0x1011), (0xbf3a, 0x1012), (0xbf3b, 0x1013), (0xbf3c, 0x1014), (0xbf3d, 0x1015),
    (0xbf3e, 0x1016), (0xbf3f, 0x1017), (0xbf40, 0x2b92), (0xbf41, 0x2b93), (0xbf42, 0x1018), (0xbf43, 0x1019),
    (0xbf44, 0x2b94), (0xbf45, 0x101a), (0xbf46, 0x101b), (0xbf47, 0x101c), (0xbf48, 0x2b95), (0xbf49, 0x101d),
    (0xbf4a, 0x101e), (0xbf4b, 0x101f), (0xbf4c, 0x1020), (0xbf4d, 0x1021), (0xbf4e, 0x1022), (0xbf4f, 0x1023),
    (0xbf50, 0x2b96), (0xbf51, 0x2b97), (0xbf52, 0x1024), (0xbf53, 0x1025), (0xbf54, 0x1026), (0xbf55, 0x2b98),
    (0xbf56, 0x1027), (0xbf57, 0x1028), (0xbf58, 0x1029), (0xbf59, 0x102a), (0xbf5a, 0x102b), (0xbf5b, 0x102c),
    (0xbf5c, 0x102d), (0xbf5d, 0x102e), (0xbf5e, 0x102f), (0xbf5f, 0x1030), (0xbf60, 0x1031), (0xbf61, 0x1032),
    (0xbf62, 0x1033), (0xbf63, 0x1034), (0xbf64, 0x1035), (0xbf65, 0x1036), (0xbf66, 0x1037), (0xbf67, 0x1038),
    (0xbf68, 0x1039), (0xbf69, 0x103a), (0xbf6a, 0x103b), (0xbf6b, 0x103c), (0xbf6c, 0x103d), (0xbf6d, 0x103e),
    (0xbf6e, 0x103f), (0xbf6f, 0x1040), (0xbf70, 0x1041), (0xbf71, 0x1042), (0xbf72, 0x1043), (0xbf73, 0x1044),
    (0xbf74, 0x1045), (0xbf75, 0x1046), (0xbf76, 0x1047), (0xbf77, 0x1048), (0xbf78, 0x1049), (0xbf79, 0x104a),
    (0xbf7a, 0x104b), (0xbf7b, 0x104c), (0xbf7c, 0x104d), (0xbf7d, 0x104e), (0xbf7e, 0x104f), (0xbf7f, 0x1050),
    (0xbf80, 0x1051), (0xbf81, 0x1052), (0xbf82, 0x1053), (0xbf83, 0x1054), (0xbf84, 0x1055), (0xbf85, 0x1056),
    (0xbf86, 0x1057), (0xbf87, 0x1058), (0xbf88, 0x1059), (0xbf89, 0x105a), (0xbf8a, 0x105b), (0xbf8b, 0x105c),
    (0xbf8c, 0x105d), (0xbf8d, 0x105e), (0xbf8e, 0x105f), (0xbf8f, 0x1060), (0xbf90, 0x1061), (0xbf91, 0x1062),
    (0xbf92, 0x1063), (0xbf93, 0x1064), (0xbf94, 0x2b99), (0xbf95, 0x1065), (0xbf96, 0x1066), (0xbf97, 0x1067),
    (0xbf98, 0x1068), (0xbf99, 0x1069), (0xbf9a, 0x106a), (0xbf9b, 0x106b), (0xbf9c, 0x106c), (0xbf9d, 0x106d),
    (0xbf9e, 0x1074), (0xbf9f, 0x1075), (0xbfa0, 0x1076), (0xbfa1, 0x1077), (0xbfa2, 0x1078), (0xbfa3, 0x1079),
    (0xbfa4, 0x107a), (0xbfa5, 0x107b), (0xbfa6, 0x107c), (0xbfa7, 0x107d), (0xbfa8, 0x107e), (0xbfa9, 0x107f),
    (0xbfaa, 0x1080), (0xbfab, 0x1081), (0xbfac, 0x1082), (0xbfad, 0x1083), (0xbfae, 0x1084), (0xbfaf, 0x1085),
    (0xbfb0, 0x2b9a), (0xbfb1, 0x1086), (0xbfb2, 0x1087), (0xbfb3, 0x1088), (0xbfb4, 0x1089), (0xbfb5, 0x108a),
    (0xbfb6, 0x108b), (0xbfb7, 0x108c), (0xbfb8, 0x108d), (0xbfb9, 0x1094), (0xbfba, 0x1095), (0xbfbb, 0x1096),
    (0xbfbc, 0x1097), (0xbfbd, 0x1098), (0xbfbe, 0x1099), (0xbfbf, 0x109a), (0xbfc0, 0x109b), (0xbfc1, 0x109c),
    (0xbfc2, 0x109d), (0xbfc3, 0x109e), (0xbfc4, 0x109f), (0xbfc5, 0x2b9b), (0xbfc6, 0x10a0), (0xbfc7, 0x10a1),
    (0xbfc8, 0x10a2), (0xbfc9, 0x10a3), (0xbfca, 0x10a4), (0xbfcb, 0x10a5), (0xbfcc, 0x2b9c), (0xbfcd, 0x2b9d),
    (0xbfce, 0x10a6), (0xbfcf, 0x10a7), (0xbfd0, 0x2b9e), (0xbfd1, 0x10a8), (0xbfd2, 0x10a9), (0xbfd3, 0x10aa),
    (0xbfd4, 0x2b9f), (0xbfd5, 0x10ab), (0xbfd6, 0x10ac), (0xbfd7, 0x10ad), (0xbfd8, 0x10ae), (0xbfd9, 0x10af),
    (0xbfda, 0x10b0), (0xbfdb, 0x10b1), (0xbfdc, 0x2ba0), (0xbfdd, 0x10b2), (0xbfde, 0x10b3), (0xbfdf, 0x2ba1),
    (0xbfe0, 0x10b4), (0xbfe1, 0x2ba2), (0xbfe2, 0x10b5), (0xbfe3, 0x10b6), (0xbfe4, 0x10b7), (0xbfe5, 0x10b8),
    (0xbfe6, 0x10b9), (0xbfe7, 0x10ba), (0xbfe8, 0x10bb), (0xbfe9, 0x10bc), (0xbfea, 0x10bd), (0xbfeb, 0x10be),
    (0xbfec, 0x10bf), (0xbfed, 0x10c0), (0xbfee, 0x10c1), (0xbfef, 0x10c2), (0xbff0, 0x10c3), (0xbff1, 0x10c4),
    (0xbff2, 0x10c5), (0xbff3, 0x10c6), (0xbff4, 0x10c7), (0xbff5, 0x10c8), (0xbff6, 0x10c9), (0xbff7, 0x10ca),
    (0xbff8, 0x10cb), (0xbff9, 0x10cc), (0xbffa, 0x10cd), (0xbffb, 0x10ce), (0xbffc, 0x10cf), (0xbffd, 0x10d0),
    (0xbffe, 0x10d1), (0xbfff, 0x10d2), (0xc000, 0x10d3), (0xc001, 0x10d4), (0xc002, 0x10d5), (0xc003, 0x10d6),
    (0xc004, 0x10d7), (0xc005, 0x10d8), (0xc006, 0x10d9), (0xc007, 0x10da), (0xc008, 0x10db), (0xc009, 0x10dc),
    (0xc00a, 0x10dd), (0xc00b, 0x10de), (0xc00c, 0x10df), (0xc00d, 0x10e0), (0xc00e, 0x10e1), (0xc00f, 0x10e2),
    (0xc010, 0x10e3), (0xc011, 0x10e4), (0xc012, 0x10e5), (0xc013, 0x10e6), (0xc014, 0x10e7), (0xc015, 0x10e8),
    (0xc016, 0x10e9), (0xc017, 0x10ea), (0xc018, 0x10eb), (0xc019, 0x10ec), (0xc01a, 0x10ed), (0xc01b, 0x10ee),
    (0xc01c, 0x10ef), (0xc01d, 0x10f0), (0xc01e, 0x10f1), (0xc01f, 0x10f2), (0xc020, 0x10f3), (0xc021, 0x10f4),
    (0xc022, 0x10f5), (0xc023, 0x10f6), (0xc024, 0x10f7), (0xc025, 0x10f8), (0xc026, 0x10f9), (0xc027, 0x10fa),
    (0xc028, 0x10fb), (0xc029, 0x10fc), (0xc02a, 0x10fd), (0xc02b, 0x10fe), (0xc02c, 0x10ff), (0xc02d, 0x1100),
    (0xc02e, 0x1101), (0xc02f, 0x1102), (0xc030, 0x1103), (0xc031, 0x1104), (0xc032, 0x1105), (0xc033, 0x1106),
    (0xc034, 0x1107), (0xc035, 0x1108), (0xc036, 0x1109), (0xc037, 0x110a), (0xc038, 0x110b), (0xc039, 0x110c),
    (0xc03a, 0x110d), (0xc03b, 0x110e), (0xc03c, 0x2ba3), (0xc03d, 0x110f), (0xc03e, 0x1110), (0xc03f, 0x1111),
    (0xc040, 0x1112), (0xc041, 0x1113), (0xc042, 0x1114), (0xc043, 0x1115), (0xc044, 0x1116), (0xc045, 0x1117),
    (0xc046, 0x1118), (0xc047, 0x1119), (0xc048, 0x111a), (0xc049, 0x111b), (0xc04a, 0x111c), (0xc04b, 0x111d),
    (0xc04c, 0x111e), (0xc04d, 0x111f), (0xc04e, 0x1120), (0xc04f, 0x1121), (0xc050, 0x1122), (0xc051, 0x2ba4),
    (0xc052, 0x1123), (0xc053, 0x1124), (0xc054, 0x1125), (0xc055, 0x1126), (0xc056, 0x1127), (0xc057, 0x1128),
    (0xc058, 0x2ba5), (0xc059, 0x1129), (0xc05a, 0x112a), (0xc05b, 0x112b), (0xc05c, 0x2ba6), (0xc05d, 0x1132),
    (0xc05e, 0x1133), (0xc05f, 0x1134), (0xc060, 0x2ba7), (0xc061, 0x1135), (0xc062, 0x1136), (0xc063, 0x1137),
    (0xc064, 0x1138), (0xc065, 0x1139), (0xc066, 0x113a), (0xc067, 0x113b), (0xc068, 0x2ba8), (0xc069, 0x2ba9),
    (0xc06a, 0x113c), (0xc06b, 0x113d), (0xc06c, 0x113e), (0xc06d, 0x113f), (0xc06e, 0x1140), (0xc06f, 0x1141),
    (0xc070, 0x1142), (0xc071, 0x1143), (0xc072, 0x1144), (0xc073, 0x1145), (0xc074, 0x1146), (0xc075, 0x1147),
    (0xc076, 0x1148), (0xc077, 0x1149), (0xc078, 0x114a), (0xc079, 0x114b), (0xc07a, 0x1152), (0xc07b, 0x1153),
    (0xc07c, 0x1154), (0xc07d, 0x1155), (0xc07e, 0x1156), (0xc07f, 0x1157), (0xc080, 0x1158), (0xc081, 0x1159),
    (0xc082, 0x115a), (0xc083, 0x115b), (0xc084, 0x115c), (0xc085, 0x115d), (0xc086, 0x115e), (0xc087, 0x115f),
    (0xc088, 0x1160), (0xc089, 0x1161), (0xc08a, 0x1162), (0xc08b, 0x1163), (0xc08c, 0x1164), (0xc08d, 0x1165),
    (0xc08e, 0x1166), (0xc08f, 0x1167), (0xc090, 0x2baa), (0xc091, 0x2bab), (0xc092, 0x1168), (0xc093, 0x1169),
    (0xc094, 0x2bac), (0xc095, 0x116a), (0xc096, 0x116b), (0xc097, 0x116c), (0xc098, 0x2bad), (0xc099, 0x116d),
    (0xc09a, 0x116e), (0xc09b, 0x116f), (0xc09c, 0x1170), (0xc09d, 0x1171), (0xc09e, 0x1172), (0xc09f, 0x1173),
    (0xc0a0, 0x2bae), (0xc0a1, 0x2baf), (0xc0a2, 0x1174), (0xc0a3, 0x2bb0), (0xc0a4, 0x1175), (0xc0a5, 0x2bb1),
    (0xc0a6, 0x1176), (0xc0a7, 0x1177), (0xc0a8, 0x1178), (0xc0a9, 0x1179), (0xc0aa, 0x117a), (0xc0ab, 0x117b),
    (0xc0ac, 0x2bb2), (0xc0ad, 0x2bb3), (0xc0ae, 0x117c), (0xc0af, 0x2bb4), (0xc0b0, 0x2bb5), (0xc0b1, 0x117d),
    (0xc0b2, 0x117e), (0xc0b3, 0x2bb6), (0xc0b4, 0x2bb7), (0xc0b5, 0x2bb8), (0xc0b6, 0x2bb9), (0xc0b7, 0x117f),
    (0xc0b8, 0x1180), (0xc0b9, 0x1181), (0xc0ba, 0x1182), (0xc0bb, 0x1183), (0xc0bc, 0x2bba), (0xc0bd, 0x2bbb),
    (0xc0be, 0x1184), (0xc0bf, 0x2bbc), (0xc0c0, 0x2bbd), (0xc0c1, 0x2bbe), (0xc0c2, 0x1185), (0xc0c3, 0x1186),
    (0xc0c4, 0x1187), (0xc0c5, 0x2bbf), (0xc0c6, 0x1188), (0xc0c7, 0x1189), (0xc0c8, 0x2bc0), (0xc0c9, 0x2bc1),
    (0xc0ca, 0x118a), (0xc0cb, 0x118b), (0xc0cc, 0x2bc2), (0xc0cd, 0x118c), (0xc0ce, 0x118d), (0xc0cf, 0x118e),
    (0xc0d0, 0x2bc3), (0xc0d1, 0x118f), (0xc0d2, 0x1190), (0xc0d3, 0x1191), (0xc0d4, 0x1192), (0xc0d5, 0x1193),
    (0xc0d6, 0x1194), (0xc0d7, 0x1195), (0xc0d8, 0x2bc4), (0xc0d9, 0x2bc5), (0xc0da, 0x1196), (0xc0db, 0x2bc6),
    (0xc0dc, 0x2bc7), (0xc0dd, 0x2bc8), (0xc0de, 0x1197), (0xc0df, 0x1198), (0xc0e0, 0x1199), (0xc0e1, 0x119a),
    (0xc0e2, 0x119b), (0xc0e3, 0x119c), (0xc0e4, 0x2bc9), (0xc0e5, 0x2c2a), (0xc0e6, 0x119d), (0xc0e7, 0x119e),
    (0xc0e8, 0x2c2b), (0xc0e9, 0x119f), (0xc0ea, 0x11a0), (0xc0eb, 0x11a1), (0xc0ec, 0x2c2c), (0xc0ed, 0x11a2),
    (0xc0ee, 0x11a3), (0xc0ef, 0x11a4), (0xc0f0, 0x11a5), (0xc0f1, 0x11a6), (0xc0f2, 0x11a7), (0xc0f3, 0x11a8),
    (0xc0f4, 0x2c2d), (0xc0f5, 0x2c2e), (0xc0f6, 0x11a9), (0xc0f7, 0x2c2f), (0xc0f8, 0x11aa), (0xc0f9, 0x2c30),
    (0xc0fa, 0x11ab), (0xc0fb, 0x11ac), (0xc0fc, 0x11ad), (0xc0fd, 0x11ae), (0xc0fe, 0x11af), (0xc0ff, 0x11b0),
    (0xc100, 0x2c31), (0xc101, 0x11b1), (0xc102, 0x11b2), (0xc103, 0x11b3), (0xc104, 0x2c32), (0xc105, 0x11b4),
    (0xc106, 0x11b5), (0xc107, 0x11b6), (0xc108, 0x2c33), (0xc109, 0x11b7), (0xc10a, 0x11b8), (0xc10b, 0x11b9),
    (0xc10c, 0x11ba), (0xc10d, 0x11bb), (0xc10e, 0x11bc), (0xc10f, 0x11bd), (0xc110, 0x2c34), (0xc111, 0x11be),
    (0xc112, 0x11bf), (0xc113, 0x11c0), (0xc114, 0x11c1), (0xc115, 0x2c35), (0xc116, 0x11c2), (0xc117, 0x11c3),
    (0xc118, 0x11c4), (0xc119, 0x11c5), (0xc11a, 0x11c6), (0xc11b, 0x11c7), (0xc11c, 0x2c36), (0xc11d, 0x2c37),
    (0xc11e, 0x2c38), (0xc11f, 0x2c39), (0xc120, 0x2c3a), (0xc121, 0x11c8), (0xc122, 0x11c9), (0xc123, 0x2c3b),
    (0xc124, 0x2c3c), (0xc125, 0x11ca), (0xc126, 0x2c3d), (0xc127, 0x2c3e), (0xc128, 0x11cb), (0xc129, 0x11cc),
    (0xc12a, 0x11cd), (0xc12b, 0x11ce), (0xc12c, 0x2c3f), (0xc12d, 0x2c40), (0xc12e, 0x11cf), (0xc12f, 0x2c41),
    (0xc130, 0x2c42), (0xc131, 0x2c43), (0xc132, 0x11d0), (0xc133, 0x11d1), (0xc134, 0x11d2), (0xc135, 0x11d3),
    (0xc136, 0x2c44), (0xc137, 0x11d4), (0xc138, 0x2c45), (0xc139, 0x2c46), (0xc13a, 0x11d5), (0xc13b, 0x11d6),
    (0xc13c, 0x2c47), (0xc13d, 0x11d7), (0xc13e, 0x11d8), (0xc13f, 0x11d9), (0xc140, 0x2c48), (0xc141, 0x11da),
    (0xc142, 0x11db), (0xc143, 0x11dc), (0xc144, 0x11dd), (0xc145, 0x11de), (0xc146, 0x11df), (0xc147, 0x11e0),
    (0xc148, 0x2c49), (0xc149, 0x2c4a), (0xc14a, 0x11e1), (0xc14b, 0x2c4b), (0xc14c, 0x2c4c), (0xc14d, 0x2c4d),
    (0xc14e, 0x11e2), (0xc14f, 0x11e3), (0xc150, 0x11e4), (0xc151, 0x11e5), (0xc152, 0x11e6), (0xc153, 0x11e7),
    (0xc154, 0x2c4e), (0xc155, 0x2c4f), (0xc156, 0x11e8), (0xc157, 0x11e9), (0xc158, 0x2c50), (0xc159, 0x11f0),
    (0xc15a, 0x11f1), (0xc15b, 0x11f2), (0xc15c, 0x2c51), (0xc15d, 0x11f3), (0xc15e, 0x11f4), (0xc15f, 0x11f5),
    (0xc160, 0x11f6), (0xc161, 0x11f7), (0xc162, 0x11f8), (0xc163, 0x11f9), (0xc164, 0x2c52), (0xc165, 0x2c53),
    (0xc166, 0x11fa), (0xc167, 0x2c54), (0xc168, 0x2c55), (0xc169, 0x2c56), (0xc16a, 0x11fb), (0xc16b, 0x11fc),
    (0xc16c, 0x11fd), (0xc16d, 0x11fe), (0xc16e, 0x11ff), (0xc16f, 0x1200), (0xc170, 0x2c57), (0xc171, 0x1201),
    (0xc172, 0x1202), (0xc173, 0x1203), (0xc174, 0x2c58), (0xc175, 0x1204), (0xc176, 0x1205), (0xc177, 0x1206),
    (0xc178, 0x2c59), (0xc179, 0x1207), (0xc17a, 0x1208), (0xc17b, 0x1209), (0xc17c, 0x1210), (0xc17d, 0x1211),
    (0xc17e, 0x1212), (0xc17f, 0x1213), (0xc180, 0x1214), (0xc181, 0x1215), (0xc182, 0x1216), (0xc183, 0x1217),
    (0xc184, 0x1218), (0xc185, 0x2c5a), (0xc186, 0x1219), (0xc187, 0x121a), (0xc188, 0x121b), (0xc189, 0x121c),
    (0xc18a, 0x121d), (0xc18b, 0x121e), (0xc18c, 0x2c5b), (0xc18d, 0x2c5c), (0xc18e, 0x2c5d), (0xc18f, 0x121f),
    (0xc190, 0x2c5e), (0xc191, 0x1220), (0xc192, 0x1221), (0xc193, 0x1222), (0xc194, 0x2c5f), (0xc195, 0x1223),
    (0xc196, 0x2c60), (0xc197, 0x1224), (0xc198, 0x1225), (0xc199, 0x1226), (0xc19a, 0x1227), (0xc19b, 0x1228),
    (0xc19c, 0x2c61), (0xc19d, 0x2c62), (0xc19e, 0x1229), (0xc19f, 0x2c63), (0xc1a0, 0x122a), (0xc1a1, 0x2c64),
    (0xc1a2, 0x122b), (0xc1a3, 0x122c), (0xc1a4, 0x122d), (0xc1a5, 0x2c65), (0xc1a6, 0x122e), (0xc1a7, 0x122f),
    (0xc1a8, 0x2c66), (0xc1a9, 0x2c67), (0xc1aa, 0x1230), (0xc1ab, 0x1231), (0xc1ac, 0x2c68), (0xc1ad, 0x1232),
    (0xc1ae, 0x1233), (0xc1af, 0x1234), (0xc1b0, 0x2c69), (0xc1b1, 0x1235), (0xc1b2, 0x1236), (0xc1b3, 0x1237),
    (0xc1b4, 0x1238), (0xc1b5, 0x1239), (0xc1b6, 0x123a), (0xc1b7, 0x123b), (0xc1b8, 0x123c), (0xc1b9, 0x123d),
    (0xc1ba, 0x123e), (0xc1bb, 0x123f), (0xc1bc, 0x1240), (0xc1bd, 0x2c6a), (0xc1be, 0x1241), (0xc1bf, 0x1242),
    (0xc1c0, 0x1243), (0xc1c1, 0x1244), (0xc1c2, 0x1245), (0xc1c3, 0x1246), (0xc1c4, 0x2c6b), (0xc1c5, 0x1247),
    (0xc1c6, 0x1248), (0xc1c7, 0x1249), (0xc1c8, 0x2c6c), (0xc1c9, 0x124a), (0xc1ca, 0x124b), (0xc1cb, 0x124c),
    (0xc1cc, 0x2c6d), (0xc1cd, 0x124d), (0xc1ce, 0x124e), (0xc1cf, 0x124f), (0xc1d0, 0x1250), (0xc1d1, 0x1251),
    (0xc1d2, 0x1252), (0xc1d3, 0x1253), (0xc1d4, 0x2c6e), (0xc1d5, 0x1254), (0xc1d6, 0x1255), (0xc1d7, 0x2c6f),
    (0xc1d8, 0x2c70), (0xc1d9, 0x1256), (0xc1da, 0x1257), (0xc1db, 0x1258), (0xc1dc, 0x1259), (0xc1dd, 0x125a),
    (0xc1de, 0x125b), (0xc1df, 0x125c), (0xc1e0, 0x2c71), (0xc1e1, 0x125d), (0xc1e2, 0x125e), (0xc1e3, 0x125f),
    (0xc1e4, 0x2c72), (0xc1e5, 0x1260), (0xc1e6, 0x1261), (0xc1e7, 0x1262), (0xc1e8, 0x2c73), (0xc1e9, 0x1263),
    (0xc1ea, 0x1264), (0xc1eb, 0x1265), (0xc1ec, 0x1266), (0xc1ed, 0x1267), (0xc1ee, 0x1268), (0xc1ef, 0x1269),
    (0xc1f0, 0x2c74), (0xc1f1, 0x2c75), (0xc1f2, 0x126a), (0xc1f3, 0x2c76), (0xc1f4, 0x126b), (0xc1f5, 0x126c),
    (0xc1f6, 0x126d), (0xc1f7, 0x126e), (0xc1f8, 0x126f), (0xc1f9, 0x1270), (0xc1fa, 0x1271), (0xc1fb, 0x1272),
    (0xc1fc, 0x2c77), (0xc1fd, 0x2c78), (0xc1fe, 0x1273), (0xc1ff, 0x1274), (0xc200, 0x2c79), (0xc201, 0x1275),
    (0xc202, 0x1276), (0xc203, 0x1277), (0xc204, 0x2c7a), (0xc205, 0x1278), (0xc206, 0x1279), (0xc207, 0x127a),
    (0xc208, 0x127b), (0xc209, 0x127c), (0xc20a, 0x127d), (0xc20b, 0x127e), (0xc20c, 0x2c7b), (0xc20d, 0x2c7c),
    (0xc20e, 0x127f), (0xc20f, 0x2c7d), (0xc210, 0x1280), (0xc211, 0x2c7e), (0xc212, 0x1281), (0xc213, 0x1282),
    (0xc214, 0x1283), (0xc215, 0x1284), (0xc216, 0x1285), (0xc217, 0x1286), (0xc218, 0x2c7f), (0xc219, 0x2c80),
    (0xc21a, 0x1287), (0xc21b, 0x1288), (0xc21c, 0x2c81), (0xc21d, 0x1289), (0xc21e, 0x128a), (0xc21f, 0x2c82),
    (0xc220, 0x2c83), (0xc221, 0x128b), (0xc222, 0x128c), (0xc223, 0x128d), (0xc224, 0x128e), (0xc225, 0x128f),
    (0xc226, 0x1290), (0xc227, 0x1291), (0xc228, 0x2c84), (0xc229, 0x2c85), (0xc22a, 0x1292), (0xc22b, 0x2c86),
    (0xc22c, 0x1293), (0xc22d, 0x2c87), (0xc22e, 0x1294), (0xc22f, 0x2ce8), (0xc230, 0x1295), (0xc231, 0x2ce9),
    (0xc232, 0x2cea), (0xc233, 0x1296), (0xc234, 0x2ceb), (0xc235, 0x1297), (0xc236, 0x1298), (0xc237, 0x1299),
    (0xc238, 0x129a), (0xc239, 0x129b), (0xc23a, 0x129c), (0xc23b, 0x129d), (0xc23c, 0x129e), (0xc23d, 0x129f),
    (0xc23e, 0x12a0), (0xc23f, 0x12a1), (0xc240, 0x12a2), (0xc241, 0x12a3), (0xc242, 0x12a4), (0xc243, 0x12a5),
    (0xc244, 0x12a6), (0xc245, 0x12a7), (0xc246, 0x12ae), (0xc247, 0x12af), (0xc248, 0x2cec), (0xc249, 0x12b0),
    (0xc24a, 0x12b1), (0xc24b, 0x12b2), (0xc24c, 0x12b3), (0xc24d, 0x12b4), (0xc24e, 0x12b5), (0xc24f, 0x12b6),
    (0xc250, 0x2ced), (0xc251, 0x2cee), (0xc252, 0x12b7), (0xc253, 0x12b8), (0xc254, 0x2cef), (0xc255, 0x12b9),
    (0xc256, 0x12ba), (0xc257, 0x12bb), (0xc258, 0x2cf0), (0xc259, 0x12bc), (0xc25a, 0x12bd), (0xc25b, 0x12be),
    (0xc25c, 0x12bf), (0xc25d, 0x12c0), (0xc25e, 0x12c1), (0xc25f, 0x12c2), (0xc260, 0x2cf1), (0xc261, 0x12c3),
    (0xc262, 0x12c4), (0xc263, 0x12c5), (0xc264, 0x12c6), (0xc265, 0x2cf2), (0xc266, 0x12c7), (0xc267, 0x12ce),
    (0xc268, 0x12cf), (0xc269, 0x12d0), (0xc26a, 0x12d1), (0xc26b, 0x12d2), (0xc26c, 0x2cf3), (0xc26d, 0x2cf4),
    (0xc26e, 0x12d3), (0xc26f, 0x12d4), (0xc270, 0x2cf5), (0xc271, 0x12d5), (0xc272, 0x12d6), (0xc273, 0x12d7),
    (0xc274, 0x2cf6), (0xc275, 0x12d8), (0xc276, 0x12d9), (0xc277, 0x12da), (0xc278, 0x12db), (0xc279, 0x12dc),
    (0xc27a, 0x12dd), (0xc27b, 0x12de), (0xc27c, 0x2cf7), (0xc27d, 0x2cf8), (0xc27e, 0x12df), (0xc27f, 0x2cf9),
    (0xc280, 0x12e0), (0xc281, 0x2cfa), (0xc282, 0x12e1), (0xc283, 0x12e2), (0xc284, 0x12e3), (0xc285, 0x12e4),
    (0xc286, 0x12e5), (0xc287, 0x12e6), (0xc288, 0x2cfb), (0xc289, 0x2cfc), (0xc28a, 0x12e7), (0xc28b, 0x12e8),
    (0xc28c, 0x12e9), (0xc28d, 0x12ea), (0xc28e, 0x12eb), (0xc28f, 0x12ec), (0xc290, 0x2cfd), (0xc291, 0x12ed),
    (0xc292, 0x12ee), (0xc293, 0x12ef), (0xc294, 0x12f0), (0xc295, 0x12f1), (0xc296, 0x12f2), (0xc297, 0x12f3),
    (0xc298, 0x2cfe), (0xc299, 0x12f4), (0xc29a, 0x12f5), (0xc29b, 0x2cff), (0xc29c, 0x12f6), (0xc29d, 0x2d00),
    (0xc29e, 0x12f7), (0xc29f, 0x12f8), (0xc2a0, 0x12f9), (0xc2a1, 0x12fa), (0xc2a2, 0x12fb), (0xc2a3, 0x12fc),
    (0xc2a4, 0x2d01), (0xc2a5, 0x2d02), (0xc2a6, 0x12fd), (0xc2a7, 0x12fe), (0xc2a8, 0x2d03), (0xc2a9, 0x12ff),
    (0xc2aa, 0x1300), (0xc2ab, 0x1301), (0xc2ac, 0x2d04), (0xc2ad, 0x2d05), (0xc2ae, 0x1302), (0xc2af, 0x1303),
    (0xc2b0, 0x1304), (0xc2b1, 0x1305), (0xc2b2, 0x1306), (0xc2b3, 0x1307), (0xc2b4, 0x2d06), (0xc2b5, 0x2d07),
    (0xc2b6, 0x1308), (0xc2b7, 0x2d08), (0xc2b8, 0x1309), (0xc2b9, 0x2d09), (0xc2ba, 0x130a), (0xc2bb, 0x130b),
    (0xc2bc, 0x130c), (0xc2bd, 0x130d), (0xc2be, 0x130e), (0xc2bf, 0x130f), (0xc2c0, 0x1310), (0xc2c1, 0x1311),
    (0xc2c2, 0x1312), (0xc2c3, 0x1313), (0xc2c4, 0x1314), (0xc2c5, 0x1315), (0xc2c6, 0x1316), (0xc2c7, 0x1317),
    (0xc2c8, 0x1318), (0xc2c9, 0x1319), (0xc2ca, 0x131a), (0xc2cb, 0x131b), (0xc2cc, 0x131c), (0xc2cd, 0x131d),
    (0xc2ce, 0x131e), (0xc2cf, 0x131f), (0xc2d0, 0x1320), (0xc2d1, 0x1321), (0xc2d2, 0x1322), (0xc2d3, 0x1323),
    (0xc2d4, 0x1324), (0xc2d5, 0x1325), (0xc2d6, 0x1326), (0xc2d7, 0x1327), (0xc2d8, 0x1328), (0xc2d9, 0x1329),
    (0xc2da, 0x132a), (0xc2db, 0x132b), (0xc2dc, 0x2d0a), (0xc2dd, 0x2d0b), (0xc2de, 0x132c), (0xc2df, 0x132d),
    (0xc2e0, 0x2d0c), (0xc2e1, 0x132e), (0xc2e2, 0x132f), (0xc2e3, 0x2d0d), (0xc2e4, 0x2d0e), (0xc2e5, 0x1330),
    (0xc2e6, 0x1331), (0xc2e7, 0x1332), (0xc2e8, 0x1333), (0xc2e9, 0x1334), (0xc2ea, 0x1335), (0xc2eb, 0x2d0f),
    (0xc2ec, 0x2d10), (0xc2ed, 0x2d11), (0xc2ee, 0x1336), (0xc2ef, 0x2d12), (0xc2f0, 0x1337), (0xc2f1, 0x2d13),
    (0xc2f2, 0x1338), (0xc2f3, 0x1339), (0xc2f4, 0x133a), (0xc2f5, 0x133b), (0xc2f6, 0x2d14), (0xc2f7, 0x133c),
    (0xc2f8, 0x2d15), (0xc2f9, 0x2d16), (0xc2fa, 0x133d), (0xc2fb, 0x2d17), (0xc2fc, 0x2d18), (0xc2fd, 0x133e),
    (0xc2fe, 0x133f), (0xc2ff, 0x1340), (0xc300, 0x2d19), (0xc301, 0x1341), (0xc302, 0x1342), (0xc303, 0x1343),
    (0xc304, 0x1344), (0xc305, 0x1345), (0xc306, 0x1346), (0xc307, 0x1347), (0xc308, 0x2d1a), (0xc309, 0x2d1b),
    (0xc30a, 0x1348), (0xc30b, 0x1349), (0xc30c, 0x2d1c), (0xc30d, 0x2d1d), (0xc30e, 0x134a), (0xc30f, 0x134b),
    (0xc310, 0x134c), (0xc311, 0x134d), (0xc312, 0x134e), (0xc313, 0x2d1e), (0xc314, 0x2d1f), (0xc315, 0x2d20),
    (0xc316, 0x134f), (0xc317, 0x1350), (0xc318, 0x2d21), (0xc319, 0x1351), (0xc31a, 0x1352), (0xc31b, 0x1353),
    (0xc31c, 0x2d22), (0xc31d, 0x1354), (0xc31e, 0x1355), (0xc31f, 0x1356), (0xc320, 0x1357), (0xc321, 0x1358),
    (0xc322, 0x1359), (0xc323, 0x135a), (0xc324, 0x2d23), (0xc325, 0x2d24), (0xc326, 0x135b), (0xc327, 0x135c),
    (0xc328, 0x2d25), (0xc329, 0x2d26), (0xc32a, 0x135d), (0xc32b, 0x135e), (0xc32c, 0x135f), (0xc32d, 0x1360),
    (0xc32e, 0x1361), (0xc32f, 0x1362), (0xc330, 0x1363), (0xc331, 0x1364), (0xc332, 0x1365), (0xc333, 0x136c),
    (0xc334, 0x136d), (0xc335, 0x136e), (0xc336, 0x136f), (0xc337, 0x1370), (0xc338, 0x1371), (0xc339, 0x1372),
    (0xc33a, 0x1373), (0xc33b, 0x1374), (0xc33c, 0x1375), (0xc33d, 0x1376), (0xc33e, 0x1377), (0xc33f, 0x1378),
    (0xc340, 0x1379), (0xc341, 0x137a), (0xc342, 0x137b), (0xc343, 0x137c), (0xc344, 0x137d), (0xc345, 0x2d27),
    (0xc346, 0x137e), (0xc347, 0x137f), (0xc348, 0x1380), (0xc349, 0x1381), (0xc34a, 0x1382), (0xc34b, 0x1383),
    (0xc34c, 0x1384), (0xc34d, 0x1385), (0xc34e, 0x138c), (0xc34f, 0x138d), (0xc350, 0x138e), (0xc351, 0x138f),
    (0xc352, 0x1390), (0xc353, 0x1391), (0xc354, 0x1392), (0xc355, 0x1393), (0xc356, 0x1394), (0xc357, 0x1395),
    (0xc358, 0x1396), (0xc359, 0x1397), (0xc35a, 0x1398), (0xc35b, 0x1399), (0xc35c, 0x139a), (0xc35d, 0x139b),
    (0xc35e, 0x139c), (0xc35f, 0x139d), (0xc360, 0x139e), (0xc361, 0x139f), (0xc362, 0x13a0), (0xc363, 0x13a1),
    (0xc364, 0x13a2), (0xc365, 0x13a3), (0xc366, 0x13a4), (0xc367, 0x13a5), (0xc368, 0x2d28), (0xc369, 0x2d29),
    (0xc36a, 0x13a6), (0xc36b, 0x13a7), (0xc36c, 0x2d2a), (0xc36d, 0x13a8), (0xc36e, 0x13a9), (0xc36f, 0x13aa),
    (0xc370, 0x2d2b), (0xc371, 0x13ab), (0xc372, 0x2d2c), (0xc373, 0x13ac), (0xc374, 0x13ad), (0xc375, 0x13ae),
    (0xc376, 0x13af), (0xc377, 0x13b0), (0xc378, 0x2d2d), (0xc379, 0x2d2e), (0xc37a, 0x13b1), (0xc37b, 0x13b2),
    (0xc37c, 0x2d2f), (0xc37d, 0x2d30), (0xc37e, 0x13b3), (0xc37f, 0x13b4), (0xc380, 0x13b5), (0xc381, 0x13b6),
    (0xc382, 0x13b7), (0xc383, 0x13b8), (0xc384, 0x2d31), (0xc385, 0x13b9), (0xc386, 0x13ba), (0xc387, 0x13bb),
    (0xc388, 0x2d32), (0xc389, 0x13bc), (0xc38a, 0x13bd), (0xc38b, 0x13be), (0xc38c, 0x2d33), (0xc38d, 0x13bf),
    (0xc38e, 0x13c0), (0xc38f, 0x13c1), (0xc390, 0x13c2), (0xc391, 0x13c3), (0xc392, 0x13c4), (0xc393, 0x13c5),
    (0xc394, 0x13c6), (0xc395, 0x13c7), (0xc396, 0x13c8), (0xc397, 0x13c9), (0xc398, 0x13ca), (0xc399, 0x13cb),
    (0xc39a, 0x13cc), (0xc39b, 0x13cd), (0xc39c, 0x13ce), (0xc39d, 0x13cf), (0xc39e, 0x13d0), (0xc39f, 0x13d1),
    (0xc3a0, 0x13d2), (0xc3a1, 0x13d3), (0xc3a2, 0x13d4), (0xc3a3, 0x13d5), (0xc3a4, 0x13d6), (0xc3a5, 0x13d7),
    (0xc3a6, 0x13d8), (0xc3a7, 0x13d9), (0xc3a8, 0x13da), (0xc3a9, 0x13db), (0xc3aa, 0x13dc), (0xc3ab, 0x13dd),
    (0xc3ac, 0x13de), (0xc3ad, 0x13df), (0xc3ae, 0x13e0), (0xc3af, 0x13e1), (0xc3b0, 0x13e2), (0xc3b1, 0x13e3),
    (0xc3b2, 0x13e4), (0xc3b3, 0x13e5), (0xc3b4, 0x13e6), (0xc3b5, 0x13e7), (0xc3b6, 0x13e8), (0xc3b7, 0x13e9),
    (0xc3b8, 0x13ea), (0xc3b9, 0x13eb), (0xc3ba, 0x13ec), (0xc3bb, 0x13ed), (0xc3bc, 0x13ee), (0xc3bd, 0x13ef),
    (0xc3be, 0x13f0), (0xc3bf, 0x13f1), (0xc3c0, 0x2d34), (0xc3c1, 0x13f2), (0xc3c2, 0x13f3), (0xc3c3, 0x13f4),
    (0xc3c4, 0x13f5), (0xc3c5, 0x13f6), (0xc3c6, 0x13f7), (0xc3c7, 0x13f8), (0xc3c8, 0x13f9), (0xc3c9, 0x13fa),
    (0xc3ca, 0x13fb), (0xc3cb, 0x13fc), (0xc3cc, 0x13fd), (0xc3cd, 0x13fe), (0xc3ce, 0x13ff), (0xc3cf, 0x1400),
    (0xc3d0, 0x1401), (0xc3d1, 0x1402), (0xc3d2, 0x1403), (0xc3d3, 0x1404), (0xc3d4, 0x1405), (0xc3d5, 0x1406),
    (0xc3d6, 0x1407), (0xc3d7, 0x1408), (0xc3d8, 0x2d35), (0xc3d9, 0x2d36), (0xc3da, 0x1409), (0xc3db, 0x140a),
    (0xc3dc, 0x2d37), (0xc3dd, 0x140b), (0xc3de, 0x140c), (0xc3df, 0x2d38), (0xc3e0, 0x2d39), (0xc3e1, 0x140d),
    (0xc3e2, 0x2d3a), (0xc3e3, 0x140e), (0xc3e4, 0x140f), (0xc3e5, 0x1410), (0xc3e6, 0x1411), (0xc3e7, 0x1412),
    (0xc3e8, 0x2d3b), (0xc3e9, 0x2d3c), (0xc3ea, 0x1413), (0xc3eb, 0x1414), (0xc3ec, 0x1415), (0xc3ed, 0x2d3d),
    (0xc3ee, 0x1416), (0xc3ef, 0x1417), (0xc3f0, 0x1418), (0xc3f1, 0x1419), (0xc3f2, 0x141a), (0xc3f3, 0x141b),
    (0xc3f4, 0x2d3e), (0xc3f5, 0x2d3f), (0xc3f6, 0x141c), (0xc3f7, 0x141d), (0xc3f8, 0x2d40), (0xc3f9, 0x141e),
    (0xc3fa, 0x141f), (0xc3fb, 0x1420), (0xc3fc, 0x1421), (0xc3fd, 0x1422), (0xc3fe, 0x1423), (0xc3ff, 0x142a),
    (0xc400, 0x142b), (0xc401, 0x142c), (0xc402, 0x142d), (0xc403, 0x142e), (0xc404, 0x142f), (0xc405, 0x1430),
    (0xc406, 0x1431), (0xc407, 0x1432), (0xc408, 0x2d41), (0xc409, 0x1433), (0xc40a, 0x1434), (0xc40b, 0x1435),
    (0xc40c, 0x1436), (0xc40d, 0x1437), (0xc40e, 0x1438), (0xc40f, 0x1439), (0xc410, 0x2d42), (0xc411, 0x143a),
    (0xc412, 0x143b), (0xc413, 0x143c), (0xc414, 0x143d), (0xc415, 0x143e), (0xc416, 0x143f), (0xc417, 0x1440),
    (0xc418, 0x1441), (0xc419, 0x1442), (0xc41a, 0x1443), (0xc41b, 0x144a), (0xc41c, 0x144b), (0xc41d, 0x144c),
    (0xc41e, 0x144d), (0xc41f, 0x144e), (0xc420, 0x144f), (0xc421, 0x1450), (0xc422, 0x1451), (0xc423, 0x1452),
    (0xc424, 0x2d43), (0xc425, 0x1453), (0xc426, 0x1454), (0xc427, 0x1455), (0xc428, 0x1456), (0xc429, 0x1457),
    (0xc42a, 0x1458), (0xc42b, 0x1459), (0xc42c, 0x2d44), (0xc42d, 0x145a), (0xc42e, 0x145b), (0xc42f, 0x145c),
    (0xc430, 0x2d45), (0xc431, 0x145d), (0xc432, 0x145e), (0xc433, 0x145f), (0xc434, 0x2da6), (0xc435, 0x1460),
    (0xc436, 0x1461), (0xc437, 0x1462), (0xc438, 0x1463), (0xc439, 0x1464), (0xc43a, 0x1465), (0xc43b, 0x1466),
    (0xc43c, 0x2da7), (0xc43d, 0x2da8), (0xc43e, 0x1467), (0xc43f, 0x1468), (0xc440, 0x1469), (0xc441, 0x146a),
    (0xc442, 0x146b), (0xc443, 0x146c), (0xc444, 0x146d), (0xc445, 0x146e), (0xc446, 0x146f), (0xc447, 0x1470),
    (0xc448, 0x2da9), (0xc449, 0x1471), (0xc44a, 0x1472), (0xc44b, 0x1473), (0xc44c, 0x1474), (0xc44d, 0x1475),
    (0xc44e, 0x1476), (0xc44f, 0x1477), (0xc450, 0x1478), (0xc451, 0x1479), (0xc452, 0x147a), (0xc453, 0x147b),
    (0xc454, 0x147c), (0xc455, 0x147d), (0xc456, 0x147e), (0xc457, 0x147f), (0xc458, 0x1480), (0xc459, 0x1481),
    (0xc45a, 0x1482), (0xc45b, 0x1483), (0xc45c, 0x1484), (0xc45d, 0x1485), (0xc45e, 0x1486), (0xc45f, 0x1487),
    (0xc460, 0x1488), (0xc461, 0x1489), (0xc462, 0x148a), (0xc463, 0x148b), (0xc464, 0x2daa), (0xc465, 0x2dab),
    (0xc466, 0x148c), (0xc467, 0x148d), (0xc468, 0x2dac), (0xc469, 0x148e), (0xc46a, 0x148f), (0xc46b, 0x1490),
    (0xc46c, 0x2dad), (0xc46d, 0x1491), (0xc46e, 0x1492), (0xc46f, 0x1493), (0xc470, 0x1494), (0xc471, 0x1495),
    (0xc472, 0x1496), (0xc473, 0x1497), (0xc474, 0x2dae), (0xc475, 0x2daf), (0xc476, 0x1498), (0xc477, 0x1499),
    (0xc478, 0x149a), (0xc479, 0x2db0), (0xc47a, 0x149b), (0xc47b, 0x149c), (0xc47c, 0x149d), (0xc47d, 0x149e),
    (0xc47e, 0x149f), (0xc47f, 0x14a0), (0xc480, 0x2db1), (0xc481, 0x14a1), (0xc482, 0x14a2), (0xc483, 0x14a3),
    (0xc484, 0x14a4), (0xc485, 0x14a5), (0xc486, 0x14a6), (0xc487, 0x14a7), (0xc488, 0x14a8), (0xc489, 0x14a9),
    (0xc48a, 0x14aa), (0xc48b, 0x14ab), (0xc48c, 0x14ac), (0xc48d, 0x14ad), (0xc48e, 0x14ae), (0xc48f, 0x14af),
    (0xc490, 0x14b0), (0xc491, 0x14b1), (0xc492, 0x14b2), (0xc493, 0x14b3), (0xc494, 0x2db2), (0xc495, 0x14b4),
    (0xc496, 0x14b5), (0xc497, 0x14b6), (0xc498, 0x14b7), (0xc499, 0x14b8), (0xc49a, 0x14b9), (0xc49b, 0x14ba),
    (0xc49c, 0x2db3), (0xc49d, 0x14bb), (0xc49e, 0x14bc), (0xc49f, 0x14bd), (0xc4a0, 0x14be), (0xc4a1, 0x14bf),
    (0xc4a2, 0x14c0), (0xc4a3, 0x14c1), (0xc4a4, 0x14c2), (0xc4a5, 0x14c3), (0xc4a6, 0x14c4), (0xc4a7, 0x14c5),
    (0xc4a8, 0x14c6), (0xc4a9, 0x14c7), (0xc4aa, 0x14c8), (0xc4ab, 0x14c9), (0xc4ac, 0x14ca), (0xc4ad, 0x14cb),
    (0xc4ae, 0x14cc), (0xc4af, 0x14cd), (0xc4b0, 0x14ce), (0xc4b1, 0x14cf), (0xc4b2, 0x14d0), (0xc4b3, 0x14d1),
    (0xc4b4, 0x14d2), (0xc4b5, 0x14d3), (0xc4b6, 0x14d4), (0xc4b7, 0x14d5), (0xc4b8, 0x2db4), (0xc4b9, 0x14d6),
    (0xc4ba, 0x14d7), (0xc4bb, 0x14d8), (0xc4bc, 0x2db5), (0xc4bd, 0x14d9), (0xc4be, 0x14da), (0xc4bf, 0x14db),
    (0xc4c0, 0x14dc), (0xc4c1, 0x14dd), (0xc4c2, 0x14de), (0xc4c3, 0x14df), (0xc4c4, 0x14e0), (0xc4c5, 0x14e1),
    (0xc4c6, 0x14e8), (0xc4c7, 0x14e9), (0xc4c8, 0x14ea), (0xc4c9, 0x14eb), (0xc4ca, 0x14ec), (0xc4cb, 0x14ed),
    (0xc4cc, 0x14ee), (0xc4cd, 0x14ef), (0xc4ce, 0x14f0), (0xc4cf, 0x14f1), (0xc4d0, 0x14f2), (0xc4d1, 0x14f3),
    (0xc4d2, 0x14f4), (0xc4d3, 0x14f5), (0xc4d4, 0x14f6), (0xc4d5, 0x14f7), (0xc4d6, 0x14f8), (0xc4d7, 0x14f9),
    (0xc4d8, 0x14fa), (0xc4d9, 0x14fb), (0xc4da, 0x14fc), (0xc4db, 0x14fd), (0xc4dc, 0x14fe), (0xc4dd, 0x14ff),
    (0xc4de, 0x1500), (0xc4df, 0x1501), (0xc4e0, 0x1508), (0xc4e1, 0x1509), (0xc4e2, 0x150a), (0xc4e3, 0x150b),
    (0xc4e4, 0x150c), (0xc4e5, 0x150d), (0xc4e6, 0x150e), (0xc4e7, 0x150f), (0xc4e8, 0x1510), (0xc4e9, 0x2db6),
    (0xc4ea, 0x1511), (0xc4eb, 0x1512), (0xc4ec, 0x1513), (0xc4ed, 0x1514), (0xc4ee, 0x1515), (0xc4ef, 0x1516),
    (0xc4f0, 0x2db7), (0xc4f1, 0x2db8), (0xc4f2, 0x1517), (0xc4f3, 0x1518), (0xc4f4, 0x2db9), (0xc4f5, 0x1519),
    (0xc4f6, 0x151a), (0xc4f7, 0x151b), (0xc4f8, 0x2dba), (0xc4f9, 0x151c), (0xc4fa, 0x2dbb), (0xc4fb, 0x151d),
    (0xc4fc, 0x151e), (0xc4fd, 0x151f), (0xc4fe, 0x1520), (0xc4ff, 0x2dbc), (0xc500, 0x2dbd), (0xc501, 0x2dbe),
    (0xc502, 0x1521), (0xc503, 0x1522), (0xc504, 0x1523), (0xc505, 0x1524), (0xc506, 0x1525), (0xc507, 0x1526),
    (0xc508, 0x1527), (0xc509, 0x1528), (0xc50a, 0x1529), (0xc50b, 0x152a), (0xc50c, 0x2dbf), (0xc50d, 0x152b),
    (0xc50e, 0x152c), (0xc50f, 0x152d), (0xc510, 0x2dc0), (0xc511, 0x152e), (0xc512, 0x152f), (0xc513, 0x1530),
    (0xc514, 0x2dc1), (0xc515, 0x1531), (0xc516, 0x1532), (0xc517, 0x1533), (0xc518, 0x1534), (0xc519, 0x1535),
    (0xc51a, 0x1536), (0xc51b, 0x1537), (0xc51c, 0x2dc2), (0xc51d, 0x1538), (0xc51e, 0x1539), (0xc51f, 0x153a),
    (0xc520, 0x153b), (0xc521, 0x153c), (0xc522, 0x153d), (0xc523, 0x153e), (0xc524, 0x153f), (0xc525, 0x1540),
    (0xc526, 0x1541), (0xc527, 0x1542), (0xc528, 0x2dc3), (0xc529, 0x2dc4), (0xc52a, 0x1543), (0xc52b, 0x1544),
    (0xc52c, 0x2dc5), (0xc52d, 0x1545), (0xc52e, 0x1546), (0xc52f, 0x1547), (0xc530, 0x2dc6), (0xc531, 0x1548),
    (0xc532, 0x1549), (0xc533, 0x154a), (0xc534, 0x154b), (0xc535, 0x154c), (0xc536, 0x154d), (0xc537, 0x154e),
    (0xc538, 0x2dc7), (0xc539, 0x2dc8), (0xc53a, 0x154f), (0xc53b, 0x2dc9), (0xc53c, 0x1550), (0xc53d, 0x2dca),
    (0xc53e, 0x1551), (0xc53f, 0x1552), (0xc540, 0x1553), (0xc541, 0x1554), (0xc542, 0x1555), (0xc543, 0x1556),
    (0xc544, 0x2dcb), (0xc545, 0x2dcc), (0xc546, 0x1557), (0xc547, 0x1558), (0xc548, 0x2dcd), (0xc549, 0x2dce),
    (0xc54a, 0x2dcf), (0xc54b, 0x1559), (0xc54c, 0x2dd0), (0xc54d, 0x2dd1), (0xc54e, 0x2dd2), (0xc54f, 0x155a),
    (0xc550, 0x155b), (0xc551, 0x155c), (0xc552, 0x155d), (0xc553, 0x2dd3), (0xc554, 0x2dd4), (0xc555, 0x2dd5),
    (0xc556, 0x155e), (0xc557, 0x2dd6), (0xc558, 0x2dd7), (0xc559, 0x2dd8), (0xc55a, 0x155f), (0xc55b, 0x1560),
    (0xc55c, 0x1561), (0xc55d, 0x2dd9), (0xc55e, 0x2dda), (0xc55f, 0x1562), (0xc560, 0x2ddb), (0xc561, 0x2ddc),
    (0xc562, 0x1563), (0xc563, 0x1564), (0xc564, 0x2ddd), (0xc565, 0x1565), (0xc566, 0x1566), (0xc567, 0x1567),
    (0xc568, 0x2dde), (0xc569, 0x1568), (0xc56a, 0x1569), (0xc56b, 0x156a), (0xc56c, 0x156b), (0xc56d, 0x156c),
    (0xc56e, 0x156d), (0xc56f, 0x156e), (0xc570, 0x2ddf), (0xc571, 0x2de0), (0xc572, 0x156f), (0xc573, 0x2de1),
    (0xc574, 0x2de2), (0xc575, 0x2de3), (0xc576, 0x1570), (0xc577, 0x1571), (0xc578, 0x1572), (0xc579, 0x1573),
    (0xc57a, 0x1574), (0xc57b, 0x1575), (0xc57c, 0x2de4), (0xc57d, 0x2de5), (0xc57e, 0x1576), (0xc57f, 0x1577),
    (0xc580, 0x2de6), (0xc581, 0x1578), (0xc582, 0x1579), (0xc583, 0x157a), (0xc584, 0x2de7), (0xc585, 0x157b),
    (0xc586, 0x157c), (0xc587, 0x2de8), (0xc588, 0x157d), (0xc589, 0x157e), (0xc58a, 0x157f), (0xc58b, 0x1580),
    (0xc58c, 0x2de9), (0xc58d, 0x2dea), (0xc58e, 0x1581), (0xc58f, 0x2deb), (0xc590, 0x1582), (0xc591, 0x2dec),
    (0xc592, 0x1583), (0xc593, 0x1584), (0xc594, 0x1585), (0xc595, 0x2ded), (0xc596, 0x1586), (0xc597, 0x2dee),
    (0xc598, 0x2def), (0xc599, 0x1587), (0xc59a, 0x1588), (0xc59b, 0x1589), (0xc59c, 0x2df0), (0xc59d, 0x158a),
    (0xc59e, 0x158b), (0xc59f, 0x158c), (0xc5a0, 0x2df1), (0xc5a1, 0x158d), (0xc5a2, 0x158e), (0xc5a3, 0x158f),
    (0xc5a4, 0x1590), (0xc5a5, 0x1591), (0xc5a6, 0x1592), (0xc5a7, 0x1593), (0xc5a8, 0x1594), (0xc5a9, 0x2df2),
    (0xc5aa, 0x1595), (0xc5ab, 0x1596), (0xc5ac, 0x1597), (0xc5ad, 0x1598), (0xc5ae, 0x1599), (0xc5af, 0x159a),
    (0xc5b0, 0x159b), (0xc5b1, 0x159c), (0xc5b2, 0x159d), (0xc5b3, 0x159e), (0xc5b4, 0x2df3), (0xc5b5, 0x2df4),
    (0xc5b6, 0x159f), (0xc5b7, 0x15a6), (0xc5b8, 0x2df5), (0xc5b9, 0x2df6), (0xc5ba, 0x15a7), (0xc5bb, 0x2df7),
    (0xc5bc, 0x2df8), (0xc5bd, 0x2df9), (0xc5be, 0x2dfa), (0xc5bf, 0x15a8), (0xc5c0, 0x15a9), (0xc5c1, 0x15aa),
    (0xc5c2, 0x15ab), (0xc5c3, 0x15ac), (0xc5c4, 0x2dfb), (0xc5c5, 0x2dfc), (0xc5c6, 0x2dfd), (0xc5c7, 0x2dfe),
    (0xc5c8, 0x2dff), (0xc5c9, 0x2e00), (0xc5ca, 0x2e01), (0xc5cb, 0x15ad), (0xc5cc, 0x2e02), (0xc5cd, 0x15ae),
    (0xc5ce, 0x2e03), (0xc5cf, 0x15af), (0xc5d0, 0x2e64), (0xc5d1, 0x2e65), (0xc5d2, 0x15b0), (0xc5d3, 0x15b1),
    (0xc5d4, 0x2e66), (0xc5d5, 0x15b2), (0xc5d6, 0x15b3), (0xc5d7, 0x15b4), (0xc5d8, 0x2e67), (0xc5d9, 0x15b5),
    (0xc5da, 0x15b6), (0xc5db, 0x15b7), (0xc5dc, 0x15b8), (0xc5dd, 0x15b9), (0xc5de, 0x15ba), (0xc5df, 0x15bb),
    (0xc5e0, 0x2e68), (0xc5e1, 0x2e69), (0xc5e2, 0x15bc), (0xc5e3, 0x2e6a), (0xc5e4, 0x15bd), (0xc5e5, 0x2e6b),
    (0xc5e6, 0x15be), (0xc5e7, 0x15bf), (0xc5e8, 0x15c6), (0xc5e9, 0x15c7), (0xc5ea, 0x15c8), (0xc5eb, 0x15c9),
    (0xc5ec, 0x2e6c), (0xc5ed, 0x2e6d), (0xc5ee, 0x2e6e), (0xc5ef, 0x15ca), (0xc5f0, 0x2e6f), (0xc5f1, 0x15cb),
    (0xc5f2, 0x15cc), (0xc5f3, 0x15cd), (0xc5f4, 0x2e70), (0xc5f5, 0x15ce), (0xc5f6, 0x2e71), (0xc5f7, 0x2e72),
    (0xc5f8, 0x15cf), (0xc5f9, 0x15d0), (0xc5fa, 0x15d1), (0xc5fb, 0x15d2), (0xc5fc, 0x2e73), (0xc5fd, 0x2e74),
    (0xc5fe, 0x2e75), (0xc5ff, 0x2e76), (0xc600, 0x2e77), (0xc601, 0x2e78), (0xc602, 0x15d3), (0xc603, 0x15d4),
    (0xc604, 0x15d5), (0xc605, 0x2e79), (0xc606, 0x2e7a), (0xc607, 0x2e7b), (0xc608, 0x2e7c), (0xc609, 0x15d6),
    (0xc60a, 0x15d7), (0xc60b, 0x15d8), (0xc60c, 0x2e7d), (0xc60d, 0x15d9), (0xc60e, 0x15da), (0xc60f, 0x15db),
    (0xc610, 0x2e7e), (0xc611, 0x15dc), (0xc612, 0x15dd), (0xc613, 0x15de), (0xc614, 0x15df), (0xc615, 0x15e0),
    (0xc616, 0x15e1), (0xc617, 0x15e2), (0xc618, 0x2e7f), (0xc619, 0x2e80), (0xc61a, 0x15e3), (0xc61b, 0x2e81),
    (0xc61c, 0x2e82), (0xc61d, 0x15e4), (0xc61e, 0x15e5), (0xc61f, 0x15e6), (0xc620, 0x15e7), (0xc621, 0x15e8),
    (0xc622, 0x15e9), (0xc623, 0x15ea), (0xc624, 0x2e83), (0xc625, 0x2e84), (0xc626, 0x15eb), (0xc627, 0x15ec),
    (0xc628, 0x2e85), (0xc629, 0x15ed), (0xc62a, 0x15ee), (0xc62b, 0x15ef), (0xc62c, 0x2e86), (0xc62d, 0x2e87),
    (0xc62e, 0x2e88), (0xc62f, 0x15f0), (0xc630, 0x2e89), (0xc631, 0x15f1), (0xc632, 0x15f2), (0xc633, 0x2e8a),
    (0xc634, 0x2e8b), (0xc635, 0x2e8c), (0xc636, 0x15f3), (0xc637, 0x2e8d), (0xc638, 0x15f4), (0xc639, 0x2e8e),
    (0xc63a, 0x15f5), (0xc63b, 0x2e8f), (0xc63c, 0x15f6), (0xc63d, 0x15f7), (0xc63e, 0x15f8), (0xc63f, 0x15f9),
    (0xc640, 0x2e90), (0xc641, 0x2e91), (0xc642, 0x15fa), (0xc643, 0x15fb), (0xc644, 0x2e92), (0xc645, 0x15fc),
    (0xc646, 0x15fd), (0xc647, 0x15fe), (0xc648, 0x2e93), (0xc649, 0x15ff), (0xc64a, 0x1600), (0xc64b, 0x1601),
    (0xc64c, 0x1602), (0xc64d, 0x1603), (0xc64e, 0x1604), (0xc64f, 0x1605), (0xc650, 0x2e94), (0xc651, 0x2e95),
    (0xc652, 0x1606), (0xc653, 0x2e96), (0xc654, 0x2e97), (0xc655, 0x2e98), (0xc656, 0x1607), (0xc657, 0x1608),
    (0xc658, 0x1609), (0xc659, 0x160a), (0xc65a, 0x160b), (0xc65b, 0x160c), (0xc65c, 0x2e99), (0xc65d, 0x2e9a),
    (0xc65e, 0x160d), (0xc65f, 0x160e), (0xc660, 0x2e9b), (0xc661, 0x160f), (0xc662, 0x1610), (0xc663, 0x1611),
    (0xc664, 0x1612), (0xc665, 0x1613), (0xc666, 0x1614), (0xc667, 0x1615), (0xc668, 0x1616), (0xc669, 0x1617),
    (0xc66a, 0x1618), (0xc66b, 0x1619), (0xc66c, 0x2e9c), (0xc66d, 0x161a), (0xc66e, 0x161b), (0xc66f, 0x2e9d),
    (0xc670, 0x161c), (0xc671, 0x2e9e), (0xc672, 0x161d), (0xc673, 0x161e), (0xc674, 0x161f), (0xc675, 0x1620),
    (0xc676, 0x1621), (0xc677, 0x1622), (0xc678, 0x2e9f), (0xc679, 0x2ea0), (0xc67a, 0x1623), (0xc67b, 0x1624),
    (0xc67c, 0x2ea1), (0xc67d, 0x1625), (0xc67e, 0x1626), (0xc67f, 0x1627), (0xc680, 0x2ea2), (0xc681, 0x1628),
    (0xc682, 0x1629), (0xc683, 0x162a), (0xc684, 0x162b), (0xc685, 0x162c), (0xc686, 0x162d), (0xc687, 0x162e),
    (0xc688, 0x2ea3), (0xc689, 0x2ea4), (0xc68a, 0x162f), (0xc68b, 0x2ea5), (0xc68c, 0x1630), (0xc68d, 0x2ea6),
    (0xc68e, 0x1631), (0xc68f, 0x1632), (0xc690, 0x1633), (0xc691, 0x1634), (0xc692, 0x1635), (0xc693, 0x1636),
    (0xc694, 0x2ea7), (0xc695, 0x2ea8), (0xc696, 0x1637), (0xc697, 0x1638), (0xc698, 0x2ea9), (0xc699, 0x1639),
    (0xc69a, 0x163a), (0xc69b, 0x163b), (0xc69c, 0x2eaa), (0xc69d, 0x163c), (0xc69e, 0x163d), (0xc69f, 0x163e),
    (0xc6a0, 0x163f), (0xc6a1, 0x1640), (0xc6a2, 0x1641), (0xc6a3, 0x1642), (0xc6a4, 0x2eab), (0xc6a5, 0x2eac),
    (0xc6a6, 0x1643), (0xc6a7, 0x2ead), (0xc6a8, 0x1644), (0xc6a9, 0x2eae), (0xc6aa, 0x1645), (0xc6ab, 0x1646),
    (0xc6ac, 0x1647), (0xc6ad, 0x1648), (0xc6ae, 0x1649), (0xc6af, 0x164a), (0xc6b0, 0x2eaf), (0xc6b1, 0x2eb0),
    (0xc6b2, 0x164b), (0xc6b3, 0x164c), (0xc6b4, 0x2eb1), (0xc6b5, 0x164d), (0xc6b6, 0x164e), (0xc6b7, 0x164f),
    (0xc6b8, 0x2eb2), (0xc6b9, 0x2eb3), (0xc6ba, 0x2eb4), (0xc6bb, 0x1650), (0xc6bc, 0x1651), (0xc6bd, 0x1652),
    (0xc6be, 0x1653), (0xc6bf, 0x1654), (0xc6c0, 0x2eb5), (0xc6c1, 0x2eb6), (0xc6c2, 0x1655), (0xc6c3, 0x2eb7),
    (0xc6c4, 0x1656), (0xc6c5, 0x2eb8), (0xc6c6, 0x1657), (0xc6c7, 0x1658), (0xc6c8, 0x1659), (0xc6c9, 0x165a),
    (0xc6ca, 0x165b), (0xc6cb, 0x165c), (0xc6cc, 0x2eb9), (0xc6cd, 0x2eba), (0xc6ce, 0x165d), (0xc6cf, 0x1664),
    (0xc6d0, 0x2ebb), (0xc6d1, 0x1665), (0xc6d2, 0x1666), (0xc6d3, 0x1667), (0xc6d4, 0x2ebc), (0xc6d5, 0x1668),
    (0xc6d6, 0x1669), (0xc6d7, 0x166a), (0xc6d8, 0x166b), (0xc6d9, 0x166c), (0xc6da, 0x166d), (0xc6db, 0x166e),
    (0xc6dc, 0x2ebd), (0xc6dd, 0x2ebe), (0xc6de, 0x166f), (0xc6df, 0x1670), (0xc6e0, 0x2ebf), (0xc6e1, 0x2ec0),
    (0xc6e2, 0x1671), (0xc6e3, 0x1672), (0xc6e4, 0x1673), (0xc6e5, 0x1674), (0xc6e6, 0x1675), (0xc6e7, 0x1676),
    (0xc6e8, 0x2ec1), (0xc6e9, 0x2f22), (0xc6ea, 0x1677), (0xc6eb, 0x1678), (0xc6ec, 0x2f23), (0xc6ed, 0x1679),
    (0xc6ee, 0x167a), (0xc6ef, 0x167b), (0xc6f0, 0x2f24), (0xc6f1, 0x167c), (0xc6f2, 0x167d), (0xc6f3, 0x1684),
    (0xc6f4, 0x1685), (0xc6f5, 0x1686), (0xc6f6, 0x1687), (0xc6f7, 0x1688), (0xc6f8, 0x2f25), (0xc6f9, 0x2f26),
    (0xc6fa, 0x1689), (0xc6fb, 0x168a), (0xc6fc, 0x168b), (0xc6fd, 0x2f27), (0xc6fe, 0x168c), (0xc6ff, 0x168d),
    (0xc700, 0x168e), (0xc701, 0x168f), (0xc702, 0x1690), (0xc703, 0x1691), (0xc704, 0x2f28), (0xc705, 0x2f29),
    (0xc706, 0x1692), (0xc707, 0x1693), (0xc708, 0x2f2a), (0xc709, 0x1694), (0xc70a, 0x1695), (0xc70b, 0x1696),
    (0xc70c, 0x2f2b), (0xc70d, 0x1697), (0xc70e, 0x1698), (0xc70f, 0x1699), (0xc710, 0x169a), (0xc711, 0x169b),
    (0xc712, 0x169c), (0xc713, 0x169d), (0xc714, 0x2f2c), (0xc715, 0x2f2d), (0xc716, 0x169e), (0xc717, 0x2f2e),
    (0xc718, 0x169f), (0xc719, 0x2f2f), (0xc71a, 0x16a0), (0xc71b, 0x16a1), (0xc71c, 0x16a2), (0xc71d, 0x16a3),
    (0xc71e, 0x16a4), (0xc71f, 0x16a5), (0xc720, 0x2f30), (0xc721, 0x2f31), (0xc722, 0x16a6), (0xc723, 0x16a7),
    (0xc724, 0x2f32), (0xc725, 0x16a8), (0xc726, 0x16a9), (0xc727, 0x16aa), (0xc728, 0x2f33), (0xc729, 0x16ab),
    (0xc72a, 0x16ac), (0xc72b, 0x16ad), (0xc72c, 0x16ae), (0xc72d, 0x16af), (0xc72e, 0x16b0), (0xc72f, 0x16b1),
    (0xc730, 0x2f34), (0xc731, 0x2f35), (0xc732, 0x16b2), (0xc733, 0x2f36), (0xc734, 0x16b3), (0xc735, 0x2f37),
    (0xc736, 0x16b4), (0xc737, 0x2f38), (0xc738, 0x16b5), (0xc739, 0x16b6), (0xc73a, 0x16b7), (0xc73b, 0x16b8),
    (0xc73c, 0x2f39), (0xc73d, 0x2f3a), (0xc73e, 0x16b9), (0xc73f, 0x16ba), (0xc740, 0x2f3b), (0xc741, 0x16bb),
    (0xc742, 0x16bc), (0xc743, 0x16bd), (0xc744, 0x2f3c), (0xc745, 0x16be), (0xc746, 0x16bf), (0xc747, 0x16c0),
    (0xc748, 0x16c1), (0xc749, 0x16c2), (0xc74a, 0x2f3d), (0xc74b, 0x16c3), (0xc74c, 0x2f3e), (0xc74d, 0x2f3f),
    (0xc74e, 0x16c4), (0xc74f, 0x2f40), (0xc750, 0x16c5), (0xc751, 0x2f41), (0xc752, 0x2f42), (0xc753, 0x2f43),
    (0xc754, 0x2f44), (0xc755, 0x2f45), (0xc756, 0x2f46), (0xc757, 0x2f47), (0xc758, 0x2f48), (0xc759, 0x16c6),
    (0xc75a, 0x16c7), (0xc75b, 0x16c8), (0xc75c, 0x2f49), (0xc75d, 0x16c9), (0xc75e, 0x16ca), (0xc75f, 0x16cb),
    (0xc760, 0x2f4a), (0xc761, 0x16cc), (0xc762, 0x16cd), (0xc763, 0x16ce), (0xc764, 0x16cf), (0xc765, 0x16d0),
    (0xc766, 0x16d1), (0xc767, 0x16d2), (0xc768, 0x2f4b), (0xc769, 0x16d3), (0xc76a, 0x16d4), (0xc76b, 0x2f4c),
    (0xc76c, 0x16d5), (0xc76d, 0x16d6), (0xc76e, 0x16d7), (0xc76f, 0x16d8), (0xc770, 0x16d9), (0xc771, 0x16da),
    (0xc772, 0x16db), (0xc773, 0x16dc), (0xc774, 0x2f4d), (0xc775, 0x2f4e), (0xc776, 0x16dd), (0xc777, 0x16de),
    (0xc778, 0x2f4f), (0xc779, 0x16df), (0xc77a, 0x16e0), (0xc77b, 0x16e1), (0xc77c, 0x2f50), (0xc77d, 0x2f51),
    (0xc77e, 0x2f52), (0xc77f, 0x16e2), (0xc780, 0x16e3), (0xc781, 0x16e4), (0xc782, 0x16e5), (0xc783, 0x2f53),
    (0xc784, 0x2f54), (0xc785, 0x2f55), (0xc786, 0x16e6), (0xc787, 0x2f56), (0xc788, 0x2f57), (0xc789, 0x2f58),
    (0xc78a, 0x2f59), (0xc78b, 0x16e7), (0xc78c, 0x16e8), (0xc78d, 0x16e9), (0xc78e, 0x2f5a), (0xc78f, 0x16ea),
    (0xc790, 0x2f5b), (0xc791, 0x2f5c), (0xc792, 0x16eb), (0xc793, 0x16ec), (0xc794, 0x2f5d), (0xc795, 0x16ed),
    (0xc796, 0x2f5e), (0xc797, 0x2f5f), (0xc798, 0x2f60), (0xc799, 0x16ee), (0xc79a, 0x2f61), (0xc79b, 0x16ef),
    (0xc79c, 0x16f0), (0xc79d, 0x16f1), (0xc79e, 0x16f2), (0xc79f, 0x16f3), (0xc7a0, 0x2f62), (0xc7a1, 0x2f63),
    (0xc7a2, 0x16f4), (0xc7a3, 0x2f64), (0xc7a4, 0x2f65), (0xc7a5, 0x2f66), (0xc7a6, 0x2f67), (0xc7a7, 0x16f5),
    (0xc7a8, 0x16f6), (0xc7a9, 0x16f7), (0xc7aa, 0x16f8), (0xc7ab, 0x16f9), (0xc7ac, 0x2f68), (0xc7ad, 0x2f69),
    (0xc7ae, 0x16fa), (0xc7af, 0x16fb), (0xc7b0, 0x2f6a), (0xc7b1, 0x16fc), (0xc7b2, 0x16fd), (0xc7b3, 0x16fe),
    (0xc7b4, 0x2f6b), (0xc7b5, 0x16ff), (0xc7b6, 0x1700), (0xc7b7, 0x1701), (0xc7b8, 0x1702), (0xc7b9, 0x1703),
    (0xc7ba, 0x1704), (0xc7bb, 0x1705), (0xc7bc, 0x2f6c), (0xc7bd, 0x2f6d), (0xc7be, 0x1706), (0xc7bf, 0x2f6e),
    (0xc7c0, 0x2f6f), (0xc7c1, 0x2f70), (0xc7c2, 0x1707), (0xc7c3, 0x1708), (0xc7c4, 0x1709), (0xc7c5, 0x170a),
    (0xc7c6, 0x170b), (0xc7c7, 0x170c), (0xc7c8, 0x2f71), (0xc7c9, 0x2f72), (0xc7ca, 0x170d), (0xc7cb, 0x170e),
    (0xc7cc, 0x2f73), (0xc7cd, 0x170f), (0xc7ce, 0x2f74), (0xc7cf, 0x1710), (0xc7d0, 0x2f75), (0xc7d1, 0x1711),
    (0xc7d2, 0x1712), (0xc7d3, 0x1713), (0xc7d4, 0x1714), (0xc7d5, 0x1715), (0xc7d6, 0x1716), (0xc7d7, 0x1717),
    (0xc7d8, 0x2f76), (0xc7d9, 0x1718), (0xc7da, 0x1719), (0xc7db, 0x171a), (0xc7dc, 0x171b), (0xc7dd, 0x2f77),
    (0xc7de, 0x1722), (0xc7df, 0x1723), (0xc7e0, 0x1724), (0xc7e1, 0x1725), (0xc7e2, 0x1726), (0xc7e3, 0x1727),
    (0xc7e4, 0x2f78), (0xc7e5, 0x1728), (0xc7e6, 0x1729), (0xc7e7, 0x172a), (0xc7e8, 0x2f79), (0xc7e9, 0x172b),
    (0xc7ea, 0x172c), (0xc7eb, 0x172d), (0xc7ec, 0x2f7a), (0xc7ed, 0x172e), (0xc7ee, 0x172f), (0xc7ef, 0x1730),
    (0xc7f0, 0x1731), (0xc7f1, 0x1732), (0xc7f2, 0x1733), (0xc7f3, 0x1734), (0xc7f4, 0x1735), (0xc7f5, 0x1736),
    (0xc7f6, 0x1737), (0xc7f7, 0x1738), (0xc7f8, 0x1739), (0xc7f9, 0x173a), (0xc7fa, 0x173b), (0xc7fb, 0x1742),
    (0xc7fc, 0x1743), (0xc7fd, 0x1744), (0xc7fe, 0x1745), (0xc7ff, 0x1746), (0xc800, 0x2f7b), (0xc801, 0x2f7c),
    (0xc802, 0x1747), (0xc803, 0x1748), (0xc804, 0x2f7d), (0xc805, 0x1749), (0xc806, 0x174a), (0xc807, 0x174b),
    (0xc808, 0x2f7e), (0xc809, 0x174c), (0xc80a, 0x2f7f), (0xc80b, 0x174d), (0xc80c, 0x174e), (0xc80d, 0x174f),
    (0xc80e, 0x1750), (0xc80f, 0x1751), (0xc810, 0x2fe0), (0xc811, 0x2fe1), (0xc812, 0x1752), (0xc813, 0x2fe2),
    (0xc814, 0x1753), (0xc815, 0x2fe3), (0xc816, 0x2fe4), (0xc817, 0x1754), (0xc818, 0x1755), (0xc819, 0x1756),
    (0xc81a, 0x1757), (0xc81b, 0x1758), (0xc81c, 0x2fe5), (0xc81d, 0x2fe6), (0xc81e, 0x1759), (0xc81f, 0x175a),
    (0xc820, 0x2fe7), (0xc821, 0x175b), (0xc822, 0x175c), (0xc823, 0x175d), (0xc824, 0x2fe8), (0xc825, 0x175e),
    (0xc826, 0x175f), (0xc827, 0x1760), (0xc828, 0x1761), (0xc829, 0x1762), (0xc82a, 0x1763), (0xc82b, 0x1764),
    (0xc82c, 0x2fe9), (0xc82d, 0x2fea), (0xc82e, 0x1765), (0xc82f, 0x2feb), (0xc830, 0x1766), (0xc831, 0x2fec),
    (0xc832, 0x1767), (0xc833, 0x1768), (0xc834, 0x1769), (0xc835, 0x176a), (0xc836, 0x176b), (0xc837, 0x176c),
    (0xc838, 0x2fed), (0xc839, 0x176d), (0xc83a, 0x176e), (0xc83b, 0x176f), (0xc83c, 0x2fee), (0xc83d, 0x1770),
    (0xc83e, 0x1771), (0xc83f, 0x1772), (0xc840, 0x2fef), (0xc841, 0x1773), (0xc842, 0x1774), (0xc843, 0x1775),
    (0xc844, 0x1776), (0xc845, 0x1777), (0xc846, 0x1778), (0xc847, 0x1779), (0xc848, 0x2ff0), (0xc849, 0x2ff1),
    (0xc84a, 0x177a), (0xc84b, 0x177b), (0xc84c, 0x2ff2), (0xc84d, 0x2ff3), (0xc84e, 0x177c), (0xc84f, 0x177d),
    (0xc850, 0x177e), (0xc851, 0x177f), (0xc852, 0x1780), (0xc853, 0x1781), (0xc854, 0x2ff4), (0xc855, 0x1782),
    (0xc856, 0x1783), (0xc857, 0x1784), (0xc858, 0x1785), (0xc859, 0x1786), (0xc85a, 0x1787), (0xc85b, 0x1788),
    (0xc85c, 0x1789), (0xc85d, 0x178a), (0xc85e, 0x178b), (0xc85f, 0x178c), (0xc860, 0x178d), (0xc861, 0x178e),
    (0xc862, 0x178f), (0xc863, 0x1790), (0xc864, 0x1791), (0xc865, 0x1792), (0xc866, 0x1793), (0xc867, 0x1794),
    (0xc868, 0x1795), (0xc869, 0x1796), (0xc86a, 0x1797), (0xc86b, 0x1798), (0xc86c, 0x1799), (0xc86d, 0x179a),
    (0xc86e, 0x179b), (0xc86f, 0x179c), (0xc870, 0x2ff5), (0xc871, 0x2ff6), (0xc872, 0x179d), (0xc873, 0x179e),
    (0xc874, 0x2ff7), (0xc875, 0x179f), (0xc876, 0x17a0), (0xc877, 0x17a1), (0xc878, 0x2ff8), (0xc879, 0x17a2),
    (0xc87a, 0x2ff9), (0xc87b, 0x17a3), (0xc87c, 0x17a4), (0xc87d, 0x17a5), (0xc87e, 0x17a6), (0xc87f, 0x17a7),
    (0xc880, 0x2ffa), (0xc881, 0x2ffb), (0xc882, 0x17a8), (0xc883, 0x2ffc), (0xc884, 0x17a9), (0xc885, 0x2ffd),
    (0xc886, 0x2ffe), (0xc887, 0x2fff), (0xc888, 0x17aa), (0xc889, 0x17ab), (0xc88a, 0x17ac), (0xc88b, 0x3000),
    (0xc88c, 0x3001), (0xc88d, 0x3002), (0xc88e, 0x17ad), (0xc88f, 0x17ae), (0xc890, 0x17af), (0xc891, 0x17b0),
    (0xc892, 0x17b1), (0xc893, 0x17b2), (0xc894, 0x3003), (0xc895, 0x17b3), (0xc896, 0x17b4), (0xc897, 0x17b5),
    (0xc898, 0x17b6), (0xc899, 0x17b7), (0xc89a, 0x17b8), (0xc89b, 0x17b9), (0xc89c, 0x17ba), (0xc89d, 0x3004),
    (0xc89e, 0x17bb), (0xc89f, 0x3005), (0xc8a0, 0x17bc), (0xc8a1, 0x3006), (0xc8a2, 0x17bd), (0xc8a3, 0x17be),
    (0xc8a4, 0x17bf), (0xc8a5, 0x17c0), (0xc8a6, 0x17c1), (0xc8a7, 0x17c2), (0xc8a8, 0x3007), (0xc8a9, 0x17c3),
    (0xc8aa, 0x17c4), (0xc8ab, 0x17c5), (0xc8ac, 0x17c6), (0xc8ad, 0x17c7), (0xc8ae, 0x17c8), (0xc8af, 0x17c9),
    (0xc8b0, 0x17ca), (0xc8b1, 0x17cb), (0xc8b2, 0x17cc), (0xc8b3, 0x17cd), (0xc8b4, 0x17ce), (0xc8b5, 0x17cf),
    (0xc8b6, 0x17d0), (0xc8b7, 0x17d1), (0xc8b8, 0x17d2), (0xc8b9, 0x17d3), (0xc8ba, 0x17d4), (0xc8bb, 0x17d5),
    (0xc8bc, 0x3008), (0xc8bd, 0x3009), (0xc8be, 0x17d6), (0xc8bf, 0x17d7), (0xc8c0, 0x17d8), (0xc8c1, 0x17d9),
    (0xc8c2, 0x17e0), (0xc8c3, 0x17e1), (0xc8c4, 0x300a), (0xc8c5, 0x17e2), (0xc8c6, 0x17e3), (0xc8c7, 0x17e4),
    (0xc8c8, 0x300b), (0xc8c9, 0x17e5), (0xc8ca, 0x17e6), (0xc8cb, 0x17e7), (0xc8cc, 0x300c), (0xc8cd, 0x17e8),
    (0xc8ce, 0x17e9), (0xc8cf, 0x17ea), (0xc8d0, 0x17eb), (0xc8d1, 0x17ec), (0xc8d2, 0x17ed), (0xc8d3, 0x17ee),
    (0xc8d4, 0x300d), (0xc8d5, 0x300e), (0xc8d6, 0x17ef), (0xc8d7, 0x300f), (0xc8d8, 0x17f0), (0xc8d9, 0x3010),
    (0xc8da, 0x17f1), (0xc8db, 0x17f2), (0xc8dc, 0x17f3), (0xc8dd, 0x17f4), (0xc8de, 0x17f5), (0xc8df, 0x17f6),
    (0xc8e0, 0x3011), (0xc8e1, 0x3012), (0xc8e2, 0x17f7), (0xc8e3, 0x17f8), (0xc8e4, 0x3013), (0xc8e5, 0x17f9),
    (0xc8e6, 0x1800), (0xc8e7, 0x1801), (0xc8e8, 0x1802), (0xc8e9, 0x1803), (0xc8ea, 0x1804), (0xc8eb, 0x1805),
    (0xc8ec, 0x1806), (0xc8ed, 0x1807), (0xc8ee, 0x1808), (0xc8ef, 0x1809), (0xc8f0, 0x180a), (0xc8f1, 0x180b),
    (0xc8f2, 0x180c), (0xc8f3, 0x180d), (0xc8f4, 0x180e), (0xc8f5, 0x3014), (0xc8f6, 0x180f), (0xc8f7, 0x1810),
    (0xc8f8, 0x1811), (0xc8f9, 0x1812), (0xc8fa, 0x1813), (0xc8fb, 0x1814), (0xc8fc, 0x3015), (0xc8fd, 0x3016),
    (0xc8fe, 0x1815), (0xc8ff, 0x1816), (0xc900, 0x3017), (0xc901, 0x1817), (0xc902, 0x1818), (0xc903, 0x1819),
    (0xc904, 0x3018), (0xc905, 0x3019), (0xc906, 0x301a), (0xc907, 0x181a), (0xc908, 0x181b), (0xc909, 0x181c),
    (0xc90a, 0x181d), (0xc90b, 0x181e), (0xc90c, 0x301b), (0xc90d, 0x301c), (0xc90e, 0x181f), (0xc90f, 0x301d),
    (0xc910, 0x187e), (0xc911, 0x301e), (0xc912, 0x187f), (0xc913, 0x1880), (0xc914, 0x1881), (0xc915, 0x1882),
    (0xc916, 0x1883), (0xc917, 0x1884), (0xc918, 0x301f), (0xc919, 0x1885), (0xc91a, 0x1886), (0xc91b, 0x1887),
    (0xc91c, 0x1888), (0xc91d, 0x1889), (0xc91e, 0x188a), (0xc91f, 0x188b), (0xc920, 0x188c), (0xc921, 0x188d),
    (0xc922, 0x188e), (0xc923, 0x188f), (0xc924, 0x1890), (0xc925, 0x1891), (0xc926, 0x1892), (0xc927, 0x1893),
    (0xc928, 0x1894), (0xc929, 0x1895), (0xc92a, 0x1896), (0xc92b, 0x1897), (0xc92c, 0x3020), (0xc92d, 0x189e),
    (0xc92e, 0x189f), (0xc92f, 0x18a0), (0xc930, 0x18a1), (0xc931, 0x18a2), (0xc932, 0x18a3), (0xc933, 0x18a4),
    (0xc934, 0x3021), (0xc935, 0x18a5), (0xc936, 0x18a6), (0xc937, 0x18a7), (0xc938, 0x18a8), (0xc939, 0x18a9),
    (0xc93a, 0x18aa), (0xc93b, 0x18ab), (0xc93c, 0x18ac), (0xc93d, 0x18ad), (0xc93e, 0x18ae), (0xc93f, 0x18af),
    (0xc940, 0x18b0), (0xc941, 0x18b1), (0xc942, 0x18b2), (0xc943, 0x18b3), (0xc944, 0x18b4), (0xc945, 0x18b5),
    (0xc946, 0x18b6), (0xc947, 0x18b7), (0xc948, 0x18be), (0xc949, 0x18bf), (0xc94a, 0x18c0), (0xc94b, 0x18c1),
    (0xc94c, 0x18c2), (0xc94d, 0x18c3), (0xc94e, 0x18c4), (0xc94f, 0x18c5), (0xc950, 0x3022), (0xc951, 0x3023),
    (0xc952, 0x18c6), (0xc953, 0x18c7), (0xc954, 0x3024), (0xc955, 0x18c8), (0xc956, 0x18c9), (0xc957, 0x18ca),
    (0xc958, 0x3025), (0xc959, 0x18cb), (0xc95a, 0x18cc), (0xc95b, 0x18cd), (0xc95c, 0x18ce), (0xc95d, 0x18cf),
    (0xc95e, 0x18d0), (0xc95f, 0x18d1), (0xc960, 0x3026), (0xc961, 0x3027), (0xc962, 0x18d2), (0xc963, 0x3028),
    (0xc964, 0x18d3), (0xc965, 0x18d4), (0xc966, 0x18d5), (0xc967, 0x18d6), (0xc968, 0x18d7), (0xc969, 0x18d8),
    (0xc96a, 0x18d9), (0xc96b, 0x18da), (0xc96c, 0x3029), (0xc96d, 0x18db), (0xc96e, 0x18dc), (0xc96f, 0x18dd),
    (0xc970, 0x302a), (0xc971, 0x193c), (0xc972, 0x193d), (0xc973, 0x193e), (0xc974, 0x302b), (0xc975, 0x193f),
    (0xc976, 0x1940), (0xc977, 0x1941), (0xc978, 0x1942), (0xc979, 0x1943), (0xc97a, 0x1944), (0xc97b, 0x1945),
    (0xc97c, 0x302c), (0xc97d, 0x1946), (0xc97e, 0x1947), (0xc97f, 0x1948), (0xc980, 0x1949), (0xc981, 0x194a),
    (0xc982, 0x194b), (0xc983, 0x194c), (0xc984, 0x194d), (0xc985, 0x194e), (0xc986, 0x194f), (0xc987, 0x1950),
    (0xc988, 0x302d), (0xc989, 0x302e), (0xc98a, 0x1951), (0xc98b, 0x1952), (0xc98c, 0x302f), (0xc98d, 0x1953),
    (0xc98e, 0x1954), (0xc98f, 0x1955), (0xc990, 0x3030), (0xc991, 0x195c), (0xc992, 0x195d), (0xc993, 0x195e),
    (0xc994, 0x195f), (0xc995, 0x1960), (0xc996, 0x1961), (0xc997, 0x1962), (0xc998, 0x3031), (0xc999, 0x3032),
    (0xc99a, 0x1963), (0xc99b, 0x3033), (0xc99c, 0x1964), (0xc99d, 0x3034), (0xc99e, 0x1965), (0xc99f, 0x1966),
    (0xc9a0, 0x1967), (0xc9a1, 0x1968), (0xc9a2, 0x1969), (0xc9a3, 0x196a), (0xc9a4, 0x196b), (0xc9a5, 0x196c),
    (0xc9a6, 0x196d), (0xc9a7, 0x196e), (0xc9a8, 0x196f), (0xc9a9, 0x1970), (0xc9aa, 0x1971), (0xc9ab, 0x1972),
    (0xc9ac, 0x1973), (0xc9ad, 0x1974), (0xc9ae, 0x1975), (0xc9af, 0x197c), (0xc9b0, 0x197d), (0xc9b1, 0x197e),
    (0xc9b2, 0x197f), (0xc9b3, 0x1980), (0xc9b4, 0x1981), (0xc9b5, 0x1982), (0xc9b6, 0x1983), (0xc9b7, 0x1984),
    (0xc9b8, 0x1985), (0xc9b9, 0x1986), (0xc9ba, 0x1987), (0xc9bb, 0x1988), (0xc9bc, 0x1989), (0xc9bd, 0x198a),
    (0xc9be, 0x198b), (0xc9bf, 0x198c), (0xc9c0, 0x3035), (0xc9c1, 0x3036), (0xc9c2, 0x198d), (0xc9c3, 0x198e),
    (0xc9c4, 0x3037), (0xc9c5, 0x198f), (0xc9c6, 0x1990), (0xc9c7, 0x3038), (0xc9c8, 0x3039), (0xc9c9, 0x1991),
    (0xc9ca, 0x303a), (0xc9cb, 0x1992), (0xc9cc, 0x1993), (0xc9cd, 0x1994), (0xc9ce, 0x1995), (0xc9cf, 0x1996),
    (0xc9d0, 0x303b), (0xc9d1, 0x303c), (0xc9d2, 0x1997), (0xc9d3, 0x303d), (0xc9d4, 0x1998), (0xc9d5, 0x309e),
    (0xc9d6, 0x309f), (0xc9d7, 0x1999), (0xc9d8, 0x199a), (0xc9d9, 0x30a0), (0xc9da, 0x30a1), (0xc9db, 0x199b),
    (0xc9dc, 0x30a2), (0xc9dd, 0x30a3), (0xc9de, 0x19fa), (0xc9df, 0x19fb), (0xc9e0, 0x30a4), (0xc9e1, 0x19fc),
    (0xc9e2, 0x30a5), (0xc9e3, 0x19fd), (0xc9e4, 0x30a6), (0xc9e5, 0x19fe), (0xc9e6, 0x19ff), (0xc9e7, 0x30a7),
    (0xc9e8, 0x1a00), (0xc9e9, 0x1a01), (0xc9ea, 0x1a02), (0xc9eb, 0x1a03), (0xc9ec, 0x30a8), (0xc9ed, 0x30a9),
    (0xc9ee, 0x1a04), (0xc9ef, 0x30aa), (0xc9f0, 0x30ab), (0xc9f1, 0x30ac), (0xc9f2, 0x1a05), (0xc9f3, 0x1a06),
    (0xc9f4, 0x1a07), (0xc9f5, 0x1a08), (0xc9f6, 0x1a09), (0xc9f7, 0x1a0a), (0xc9f8, 0x30ad), (0xc9f9, 0x30ae),
    (0xc9fa, 0x1a0b), (0xc9fb, 0x1a0c), (0xc9fc, 0x30af), (0xc9fd, 0x1a0d), (0xc9fe, 0x1a0e), (0xc9ff, 0x1a0f),
    (0xca00, 0x30b0), (0xca01, 0x1a10), (0xca02, 0x1a11), (0xca03, 0x1a12), (0xca04, 0x1a13), (0xca05, 0x1a1a),
    (0xca06, 0x1a1b), (0xca07, 0x1a1c), (0xca08, 0x30b1), (0xca09, 0x30b2), (0xca0a, 0x1a1d), (0xca0b, 0x30b3),
    (0xca0c, 0x30b4), (0xca0d, 0x30b5), (0xca0e, 0x1a1e), (0xca0f, 0x1a1f), (0xca10, 0x1a20), (0xca11, 0x1a21),
    (0xca12, 0x1a22), (0xca13, 0x1a23), (0xca14, 0x30b6), (0xca15, 0x1a24), (0xca16, 0x1a25), (0xca17, 0x1a26),
    (0xca18, 0x30b7), (0xca19, 0x1a27), (0xca1a, 0x1a28), (0xca1b, 0x1a29), (0xca1c, 0x1a2a), (0xca1d, 0x1a2b),
    (0xca1e, 0x1a2c), (0xca1f, 0x1a2d), (0xca20, 0x1a2e), (0xca21, 0x1a2f), (0xca22, 0x1a30), (0xca23, 0x1a31),
    (0xca24, 0x1a32), (0xca25, 0x1a33), (0xca26, 0x1a3a), (0xca27, 0x1a3b), (0xca28, 0x1a3c), (0xca29, 0x30b8),
    (0xca2a, 0x1a3d), (0xca2b, 0x1a3e), (0xca2c, 0x1a3f), (0xca2d, 0x1a40), (0xca2e, 0x1a41), (0xca2f, 0x1a42),
    (0xca30, 0x1a43), (0xca31, 0x1a44), (0xca32, 0x1a45), (0xca33, 0x1a46), (0xca34, 0x1a47), (0xca35, 0x1a48),
    (0xca36, 0x1a49), (0xca37, 0x1a4a), (0xca38, 0x1a4b), (0xca39, 0x1a4c), (0xca3a, 0x1a4d), (0xca3b, 0x1a4e),
    (0xca3c, 0x1a4f), (0xca3d, 0x1a50), (0xca3e, 0x1a51), (0xca3f, 0x1a52), (0xca40, 0x1a53), (0xca41, 0x1a54),
    (0xca42, 0x1a55), (0xca43, 0x1a56), (0xca44, 0x1a57), (0xca45, 0x1a58), (0xca46, 0x1a59), (0xca47, 0x1ab8),
    (0xca48, 0x1ab9), (0xca49, 0x1aba), (0xca4a, 0x1abb), (0xca4b, 0x1abc), (0xca4c, 0x30b9), (0xca4d, 0x30ba),
    (0xca4e, 0x1abd), (0xca4f, 0x1abe), (0xca50, 0x30bb), (0xca51, 0x1abf), (0xca52, 0x1ac0), (0xca53, 0x1ac1),
    (0xca54, 0x30bc), (0xca55, 0x1ac2), (0xca56, 0x1ac3), (0xca57, 0x1ac4), (0xca58, 0x1ac5), (0xca59, 0x1ac6),
    (0xca5a, 0x1ac7), (0xca5b, 0x1ac8), (0xca5c, 0x30bd), (0xca5d, 0x30be), (0xca5e, 0x1ac9), (0xca5f, 0x30bf),
    (0xca60, 0x30c0), (0xca61, 0x30c1), (0xca62, 0x1aca), (0xca63, 0x1acb), (0xca64, 0x1acc), (0xca65, 0x1acd),
    (0xca66, 0x1ace), (0xca67, 0x1acf), (0xca68, 0x30c2), (0xca69, 0x1ad0), (0xca6a, 0x1ad1), (0xca6b, 0x1ad8),
    (0xca6c, 0x1ad9), (0xca6d, 0x1ada), (0xca6e, 0x1adb), (0xca6f, 0x1adc), (0xca70, 0x1add), (0xca71, 0x1ade),
    (0xca72, 0x1adf), (0xca73, 0x1ae0), (0xca74, 0x1ae1), (0xca75, 0x1ae2), (0xca76, 0x1ae3), (0xca77, 0x1ae4),
    (0xca78, 0x1ae5), (0xca79, 0x1ae6), (0xca7a, 0x1ae7), (0xca7b, 0x1ae8), (0xca7c, 0x1ae9), (0xca7d, 0x30c3),
    (0xca7e, 0x1aea), (0xca7f, 0x1aeb), (0xca80, 0x1aec), (0xca81, 0x1aed), (0xca82, 0x1aee), (0xca83, 0x1aef),
    (0xca84, 0x30c4), (0xca85, 0x1af0), (0xca86, 0x1af1), (0xca87, 0x1af8), (0xca88, 0x1af9), (0xca89, 0x1afa),
    (0xca8a, 0x1afb), (0xca8b, 0x1afc), (0xca8c, 0x1afd), (0xca8d, 0x1afe), (0xca8e, 0x1aff), (0xca8f, 0x1b00),
    (0xca90, 0x1b01), (0xca91, 0x1b02), (0xca92, 0x1b03), (0xca93, 0x1b04), (0xca94, 0x1b05), (0xca95, 0x1b06),
    (0xca96, 0x1b07), (0xca97, 0x1b08), (0xca98, 0x30c5), (0xca99, 0x1b09), (0xca9a, 0x1b0a), (0xca9b, 0x1b0b),
    (0xca9c, 0x1b0c), (0xca9d, 0x1b0d), (0xca9e, 0x1b0e), (0xca9f, 0x1b0f), (0xcaa0, 0x1b10), (0xcaa1, 0x1b11),
    (0xcaa2, 0x1b12), (0xcaa3, 0x1b13), (0xcaa4, 0x1b14), (0xcaa5, 0x1b15), (0xcaa6, 0x1b16), (0xcaa7, 0x1b17),
    (0xcaa8, 0x1b76), (0xcaa9, 0x1b77), (0xcaaa, 0x1b78), (0xcaab, 0x1b79), (0xcaac, 0x1b7a), (0xcaad, 0x1b7b),
    (0xcaae, 0x1b7c), (0xcaaf, 0x1b7d), (0xcab0, 0x1b7e), (0xcab1, 0x1b7f), (0xcab2, 0x1b80), (0xcab3, 0x1b81),
    (0xcab4, 0x1b82), (0xcab5, 0x1b83), (0xcab6, 0x1b84), (0xcab7, 0x1b85), (0xcab8, 0x1b86), (0xcab9, 0x1b87),
    (0xcaba, 0x1b88), (0xcabb, 0x1b89), (0xcabc, 0x30c6), (0xcabd, 0x30c7), (0xcabe, 0x1b8a), (0xcabf, 0x1b8b),
    (0xcac0, 0x30c8), (0xcac1, 0x1b8c), (0xcac2, 0x1b8d), (0xcac3, 0x1b8e), (0xcac4, 0x30c9), (0xcac5, 0x1b8f),
    (0xcac6, 0x1b96), (0xcac7, 0x1b97), (0xcac8, 0x1b98), (0xcac9, 0x1b99), (0xcaca, 0x1b9a), (0xcacb, 0x1b9b),
    (0xcacc, 0x30ca), (0xcacd, 0x30cb), (0xcace, 0x1b9c), (0xcacf, 0x30cc), (0xcad0, 0x1b9d), (0xcad1, 0x30cd),
    (0xcad2, 0x1b9e), (0xcad3, 0x30ce), (0xcad4, 0x1b9f), (0xcad5, 0x1ba0), (0xcad6, 0x1ba1), (0xcad7, 0x1ba2),
    (0xcad8, 0x30cf), (0xcad9, 0x30d0), (0xcada, 0x1ba3), (0xcadb, 0x1ba4), (0xcadc, 0x1ba5), (0xcadd, 0x1ba6),
    (0xcade, 0x1ba7), (0xcadf, 0x1ba8), (0xcae0, 0x30d1), (0xcae1, 0x1ba9), (0xcae2, 0x1baa), (0xcae3, 0x1bab),
    (0xcae4, 0x1bac), (0xcae5, 0x1bad), (0xcae6, 0x1bae), (0xcae7, 0x1baf), (0xcae8, 0x1bb6), (0xcae9, 0x1bb7),
    (0xcaea, 0x1bb8), (0xcaeb, 0x1bb9), (0xcaec, 0x30d2), (0xcaed, 0x1bba), (0xcaee, 0x1bbb), (0xcaef, 0x1bbc),
    (0xcaf0, 0x1bbd), (0xcaf1, 0x1bbe), (0xcaf2, 0x1bbf), (0xcaf3, 0x1bc0), (0xcaf4, 0x30d3), (0xcaf5, 0x1bc1),
    (0xcaf6, 0x1bc2), (0xcaf7, 0x1bc3), (0xcaf8, 0x1bc4), (0xcaf9, 0x1bc5), (0xcafa, 0x1bc6), (0xcafb, 0x1bc7),
    (0xcafc, 0x1bc8), (0xcafd, 0x1bc9), (0xcafe, 0x1bca), (0xcaff, 0x1bcb), (0xcb00, 0x1bcc), (0xcb01, 0x1bcd),
    (0xcb02, 0x1bce), (0xcb03, 0x1bcf), (0xcb04, 0x1bd0), (0xcb05, 0x1bd1), (0xcb06, 0x1bd2), (0xcb07, 0x1bd3),
    (0xcb08, 0x30d4), (0xcb09, 0x1bd4), (0xcb0a, 0x1bd5), (0xcb0b, 0x1c34), (0xcb0c, 0x1c35), (0xcb0d, 0x1c36),
    (0xcb0e, 0x1c37), (0xcb0f, 0x1c38), (0xcb10, 0x30d5), (0xcb11, 0x1c39), (0xcb12, 0x1c3a), (0xcb13, 0x1c3b),
    (0xcb14, 0x30d6), (0xcb15, 0x1c3c), (0xcb16, 0x1c3d), (0xcb17, 0x1c3e), (0xcb18, 0x30d7), (0xcb19, 0x1c3f),
    (0xcb1a, 0x1c40), (0xcb1b, 0x1c41), (0xcb1c, 0x1c42), (0xcb1d, 0x1c43), (0xcb1e, 0x1c44), (0xcb1f, 0x1c45),
    (0xcb20, 0x30d8), (0xcb21, 0x30d9), (0xcb22, 0x1c46), (0xcb23, 0x1c47), (0xcb24, 0x1c48), (0xcb25, 0x1c49),
    (0xcb26, 0x1c4a), (0xcb27, 0x1c4b), (0xcb28, 0x1c4c), (0xcb29, 0x1c4d), (0xcb2a, 0x1c54), (0xcb2b, 0x1c55),
    (0xcb2c, 0x1c56), (0xcb2d, 0x1c57), (0xcb2e, 0x1c58), (0xcb2f, 0x1c59), (0xcb30, 0x1c5a), (0xcb31, 0x1c5b),
    (0xcb32, 0x1c5c), (0xcb33, 0x1c5d), (0xcb34, 0x1c5e), (0xcb35, 0x1c5f), (0xcb36, 0x1c60), (0xcb37, 0x1c61),
    (0xcb38, 0x1c62), (0xcb39, 0x1c63), (0xcb3a, 0x1c64), (0xcb3b, 0x1c65), (0xcb3c, 0x1c66), (0xcb3d, 0x1c67),
    (0xcb3e, 0x1c68), (0xcb3f, 0x1c69), (0xcb40, 0x1c6a), (0xcb41, 0x30da), (0xcb42, 0x1c6b), (0xcb43, 0x1c6c),
    (0xcb44, 0x1c6d), (0xcb45, 0x1c74), (0xcb46, 0x1c75), (0xcb47, 0x1c76), (0xcb48, 0x30db), (0xcb49, 0x30dc),
    (0xcb4a, 0x1c77), (0xcb4b, 0x1c78), (0xcb4c, 0x30dd), (0xcb4d, 0x1c79), (0xcb4e, 0x1c7a), (0xcb4f, 0x1c7b),
    (0xcb50, 0x30de), (0xcb51, 0x1c7c), (0xcb52, 0x1c7d), (0xcb53, 0x1c7e), (0xcb54, 0x1c7f), (0xcb55, 0x1c80),
    (0xcb56, 0x1c81), (0xcb57, 0x1c82), (0xcb58, 0x30df), (0xcb59, 0x30e0), (0xcb5a, 0x1c83), (0xcb5b, 0x1c84),
    (0xcb5c, 0x1c85), (0xcb5d, 0x30e1), (0xcb5e, 0x1c86), (0xcb5f, 0x1c87), (0xcb60, 0x1c88), (0xcb61, 0x1c89),
    (0xcb62, 0x1c8a), (0xcb63, 0x1c8b), (0xcb64, 0x30e2), (0xcb65, 0x1c8c), (0xcb66, 0x1c8d), (0xcb67, 0x1c8e),
    (0xcb68, 0x1c8f), (0xcb69, 0x1c90), (0xcb6a, 0x1c91), (0xcb6b, 0x1c92), (0xcb6c, 0x1c93), (0xcb6d, 0x1cf2),
    (0xcb6e, 0x1cf3), (0xcb6f, 0x1cf4), (0xcb70, 0x1cf5), (0xcb71, 0x1cf6), (0xcb72, 0x1cf7), (0xcb73, 0x1cf8),
    (0xcb74, 0x1cf9), (0xcb75, 0x1cfa), (0xcb76, 0x1cfb), (0xcb77, 0x1cfc), (0xcb78, 0x30e3), (0xcb79, 0x30e4),
    (0xcb7a, 0x1cfd), (0xcb7b, 0x1cfe), (0xcb7c, 0x1cff), (0xcb7d, 0x1d00), (0xcb7e, 0x1d01), (0xcb7f, 0x1d02),
    (0xcb80, 0x1d03), (0xcb81, 0x1d04), (0xcb82, 0x1d05), (0xcb83, 0x1d06), (0xcb84, 0x1d07), (0xcb85, 0x1d08),
    (0xcb86, 0x1d09), (0xcb87, 0x1d0a), (0xcb88, 0x1d0b), (0xcb89, 0x1d12), (0xcb8a, 0x1d13), (0xcb8b, 0x1d14),
    (0xcb8c, 0x1d15), (0xcb8d, 0x1d16), (0xcb8e, 0x1d17), (0xcb8f, 0x1d18), (0xcb90, 0x1d19), (0xcb91, 0x1d1a),
    (0xcb92, 0x1d1b), (0xcb93, 0x1d1c), (0xcb94, 0x1d1d), (0xcb95, 0x1d1e), (0xcb96, 0x1d1f), (0xcb97, 0x1d20),
    (0xcb98, 0x1d21), (0xcb99, 0x1d22), (0xcb9a, 0x1d23), (0xcb9b, 0x1d24), (0xcb9c, 0x30e5), (0xcb9d, 0x1d25),
    (0xcb9e, 0x1d26), (0xcb9f, 0x1d27), (0xcba0, 0x1d28), (0xcba1, 0x1d29), (0xcba2, 0x1d2a), (0xcba3, 0x1d2b),
    (0xcba4, 0x1d32), (0xcba5, 0x1d33), (0xcba6, 0x1d34), (0xcba7, 0x1d35), (0xcba8, 0x1d36), (0xcba9, 0x1d37),
    (0xcbaa, 0x1d38), (0xcbab, 0x1d39), (0xcbac, 0x1d3a), (0xcbad, 0x1d3b), (0xcbae, 0x1d3c), (0xcbaf, 0x1d3d),
    (0xcbb0, 0x1d3e), (0xcbb1, 0x1d3f), (0xcbb2, 0x1d40), (0xcbb3, 0x1d41), (0xcbb4, 0x1d42), (0xcbb5, 0x1d43),
    (0xcbb6, 0x1d44), (0xcbb7, 0x1d45), (0xcbb8, 0x30e6), (0xcbb9, 0x1d46), (0xcbba, 0x1d47), (0xcbbb, 0x1d48),
    (0xcbbc, 0x1d49), (0xcbbd, 0x1d4a), (0xcbbe, 0x1d4b), (0xcbbf, 0x1d4c), (0xcbc0, 0x1d4d), (0xcbc1, 0x1d4e),
    (0xcbc2, 0x1d4f), (0xcbc3, 0x1d50), (0xcbc4, 0x1d51), (0xcbc5, 0x1db0), (0xcbc6, 0x1db1), (0xcbc7, 0x1db2),
    (0xcbc8, 0x1db3), (0xcbc9, 0x1db4), (0xcbca, 0x1db5), (0xcbcb, 0x1db6), (0xcbcc, 0x1db7), (0xcbcd, 0x1db8),
    (0xcbce, 0x1db9), (0xcbcf, 0x1dba), (0xcbd0, 0x1dbb), (0xcbd1, 0x1dbc), (0xcbd2, 0x1dbd), (0xcbd3, 0x1dbe),
    (0xcbd4, 0x30e7), (0xcbd5, 0x1dbf), (0xcbd6, 0x1dc0), (0xcbd7, 0x1dc1), (0xcbd8, 0x1dc2), (0xcbd9, 0x1dc3),
    (0xcbda, 0x1dc4), (0xcbdb, 0x1dc5), (0xcbdc, 0x1dc6), (0xcbdd, 0x1dc7), (0xcbde, 0x1dc8), (0xcbdf, 0x1dc9),
    (0xcbe0, 0x1dd0), (0xcbe1, 0x1dd1), (0xcbe2, 0x1dd2), (0xcbe3, 0x1dd3), (0xcbe4, 0x30e8), (0xcbe5, 0x1dd4),
    (0xcbe6, 0x1dd5), (0xcbe7, 0x30e9), (0xcbe8, 0x1dd6), (0xcbe9, 0x30ea), (0xcbea, 0x1dd7), (0xcbeb, 0x1dd8),
    (0xcbec, 0x1dd9), (0xcbed, 0x1dda), (0xcbee, 0x1ddb), (0xcbef, 0x1ddc), (0xcbf0, 0x1ddd), (0xcbf1, 0x1dde),
    (0xcbf2, 0x1ddf), (0xcbf3, 0x1de0), (0xcbf4, 0x1de1), (0xcbf5, 0x1de2), (0xcbf6, 0x1de3), (0xcbf7, 0x1de4),
    (0xcbf8, 0x1de5), (0xcbf9, 0x1de6), (0xcbfa, 0x1de7), (0xcbfb, 0x1de8), (0xcbfc, 0x1de9), (0xcbfd, 0x1df0),
    (0xcbfe, 0x1df1), (0xcbff, 0x1df2), (0xcc00, 0x1df3), (0xcc01, 0x1df4), (0xcc02, 0x1df5), (0xcc03, 0x1df6),
    (0xcc04, 0x1df7), (0xcc05, 0x1df8), (0xcc06, 0x1df9), (0xcc07, 0x1dfa), (0xcc08, 0x1dfb), (0xcc09, 0x1dfc),
    (0xcc0a, 0x1dfd), (0xcc0b, 0x1dfe), (0xcc0c, 0x30eb), (0xcc0d, 0x30ec), (0xcc0e, 0x1dff), (0xcc0f, 0x1e00),
    (0xcc10, 0x30ed), (0xcc11, 0x1e01), (0xcc12, 0x1e02), (0xcc13, 0x1e03), (0xcc14, 0x30ee), (0xcc15, 0x1e04),
    (0xcc16, 0x1e05), (0xcc17, 0x1e06), (0xcc18, 0x1e07), (0xcc19, 0x1e08), (0xcc1a, 0x1e09), (0xcc1b, 0x1e0a),
    (0xcc1c, 0x30ef), (0xcc1d, 0x30f0), (0xcc1e, 0x1e0b), (0xcc1f, 0x1e0c), (0xcc20, 0x1e0d), (0xcc21, 0x30f1),
    (0xcc22, 0x30f2), (0xcc23, 0x1e0e), (0xcc24, 0x1e0f), (0xcc25, 0x1e6e), (0xcc26, 0x1e6f), (0xcc27, 0x30f3),
    (0xcc28, 0x30f4), (0xcc29, 0x30f5), (0xcc2a, 0x1e70), (0xcc2b, 0x1e71), (0xcc2c, 0x30f6), (0xcc2d, 0x1e72),
    (0xcc2e, 0x30f7), (0xcc2f, 0x1e73), (0xcc30, 0x30f8), (0xcc31, 0x1e74), (0xcc32, 0x1e75), (0xcc33, 0x1e76),
    (0xcc34, 0x1e77), (0xcc35, 0x1e78), (0xcc36, 0x1e79), (0xcc37, 0x1e7a), (0xcc38, 0x30f9), (0xcc39, 0x30fa),
    (0xcc3a, 0x1e7b), (0xcc3b, 0x30fb), (0xcc3c, 0x315c), (0xcc3d, 0x315d), (0xcc3e, 0x315e), (0xcc3f, 0x1e7c),
    (0xcc40, 0x1e7d), (0xcc41, 0x1e7e), (0xcc42, 0x1e7f), (0xcc43, 0x1e80), (0xcc44, 0x315f), (0xcc45, 0x3160),
    (0xcc46, 0x1e81), (0xcc47, 0x1e82), (0xcc48, 0x3161), (0xcc49, 0x1e83), (0xcc4a, 0x1e84), (0xcc4b, 0x1e85),
    (0xcc4c, 0x3162), (0xcc4d, 0x1e86), (0xcc4e, 0x1e87), (0xcc4f, 0x1e8e), (0xcc50, 0x1e8f), (0xcc51, 0x1e90),
    (0xcc52, 0x1e91), (0xcc53, 0x1e92), (0xcc54, 0x3163), (0xcc55, 0x3164), (0xcc56, 0x1e93), (0xcc57, 0x3165),
    (0xcc58, 0x3166), (0xcc59, 0x3167), (0xcc5a, 0x1e94), (0xcc5b, 0x1e95), (0xcc5c, 0x1e96), (0xcc5d, 0x1e97),
    (0xcc5e, 0x1e98), (0xcc5f, 0x1e99), (0xcc60, 0x3168), (0xcc61, 0x1e9a), (0xcc62, 0x1e9b), (0xcc63, 0x1e9c),
    (0xcc64, 0x3169), (0xcc65, 0x1e9d), (0xcc66, 0x316a), (0xcc67, 0x1e9e), (0xcc68, 0x316b), (0xcc69, 0x1e9f),
    (0xcc6a, 0x1ea0), (0xcc6b, 0x1ea1), (0xcc6c, 0x1ea2), (0xcc6d, 0x1ea3), (0xcc6e, 0x1ea4), (0xcc6f, 0x1ea5),
    (0xcc70, 0x316c), (0xcc71, 0x1ea6), (0xcc72, 0x1ea7), (0xcc73, 0x1eae), (0xcc74, 0x1eaf), (0xcc75, 0x316d),
    (0xcc76, 0x1eb0), (0xcc77, 0x1eb1), (0xcc78, 0x1eb2), (0xcc79, 0x1eb3), (0xcc7a, 0x1eb4), (0xcc7b, 0x1eb5),
    (0xcc7c, 0x1eb6), (0xcc7d, 0x1eb7), (0xcc7e, 0x1eb8), (0xcc7f, 0x1eb9), (0xcc80, 0x1eba), (0xcc81, 0x1ebb),
    (0xcc82, 0x1ebc), (0xcc83, 0x1ebd), (0xcc84, 0x1ebe), (0xcc85, 0x1ebf), (0xcc86, 0x1ec0), (0xcc87, 0x1ec1),
    (0xcc88, 0x1ec2), (0xcc89, 0x1ec3), (0xcc8a, 0x1ec4), (0xcc8b, 0x1ec5), (0xcc8c, 0x1ec6), (0xcc8d, 0x1ec7),
    (0xcc8e, 0x1ec8), (0xcc8f, 0x1ec9), (0xcc90, 0x1eca), (0xcc91, 0x1ecb), (0xcc92, 0x1ecc), (0xcc93, 0x1ecd),
    (0xcc94, 0x1f2c), (0xcc95, 0x1f2d), (0xcc96, 0x1f2e), (0xcc97, 0x1f2f), (0xcc98, 0x316e), (0xcc99, 0x316f),
    (0xcc9a, 0x1f30), (0xcc9b, 0x1f31), (0xcc9c, 0x3170), (0xcc9d, 0x1f32), (0xcc9e, 0x1f33), (0xcc9f, 0x1f34),
    (0xcca0, 0x3171), (0xcca1, 0x1f35), (0xcca2, 0x1f36), (0xcca3, 0x1f37), (0xcca4, 0x1f38), (0xcca5, 0x1f39),
    (0xcca6, 0x1f3a), (0xcca7, 0x1f3b), (0xcca8, 0x3172), (0xcca9, 0x3173), (0xccaa, 0x1f3c), (0xccab, 0x3174),
    (0xccac, 0x3175), (0xccad, 0x3176), (0xccae, 0x1f3d), (0xccaf, 0x1f3e), (0xccb0, 0x1f3f), (0xccb1, 0x1f40),
    (0xccb2, 0x1f41), (0xccb3, 0x1f42), (0xccb4, 0x3177), (0xccb5, 0x3178), (0xccb6, 0x1f43), (0xccb7, 0x1f44),
    (0xccb8, 0x3179), (0xccb9, 0x1f45), (0xccba, 0x1f4c), (0xccbb, 0x1f4d), (0xccbc, 0x317a), (0xccbd, 0x1f4e),
    (0xccbe, 0x1f4f), (0xccbf, 0x1f50), (0xccc0, 0x1f51), (0xccc1, 0x1f52), (0xccc2, 0x1f53), (0xccc3, 0x1f54),
    (0xccc4, 0x317b), (0xccc5, 0x317c), (0xccc6, 0x1f55), (0xccc7, 0x317d), (0xccc8, 0x1f56), (0xccc9, 0x317e),
    (0xccca, 0x1f57), (0xcccb, 0x1f58), (0xcccc, 0x1f59), (0xcccd, 0x1f5a), (0xccce, 0x1f5b), (0xcccf, 0x1f5c),
    (0xccd0, 0x317f), (0xccd1, 0x1f5d), (0xccd2, 0x1f5e), (0xccd3, 0x1f5f), (0xccd4, 0x3180), (0xccd5, 0x1f60),
    (0xccd6, 0x1f61), (0xccd7, 0x1f62), (0xccd8, 0x1f63), (0xccd9, 0x1f64), (0xccda, 0x1f65), (0xccdb, 0x1f6c),
    (0xccdc, 0x1f6d), (0xccdd, 0x1f6e), (0xccde, 0x1f6f), (0xccdf, 0x1f70), (0xcce0, 0x1f71), (0xcce1, 0x1f72),
    (0xcce2, 0x1f73), (0xcce3, 0x1f74), (0xcce4, 0x3181), (0xcce5, 0x1f75), (0xcce6, 0x1f76), (0xcce7, 0x1f77),
    (0xcce8, 0x1f78), (0xcce9, 0x1f79), (0xccea, 0x1f7a), (0xcceb, 0x1f7b), (0xccec, 0x3182), (0xcced, 0x1f7c),
    (0xccee, 0x1f7d), (0xccef, 0x1f7e), (0xccf0, 0x3183), (0xccf1, 0x1f7f), (0xccf2, 0x1f80), (0xccf3, 0x1f81),
    (0xccf4, 0x1f82), (0xccf5, 0x1f83), (0xccf6, 0x1f84), (0xccf7, 0x1f85), (0xccf8, 0x1f86), (0xccf9, 0x1f87),
    (0xccfa, 0x1f88), (0xccfb, 0x1f89), (0xccfc, 0x1f8a), (0xccfd, 0x1f8b), (0xccfe, 0x1fea), (0xccff, 0x1feb),
    (0xcd00, 0x1fec), (0xcd01, 0x3184), (0xcd02, 0x1fed), (0xcd03, 0x1fee), (0xcd04, 0x1fef), (0xcd05, 0x1ff0),
    (0xcd06, 0x1ff1), (0xcd07, 0x1ff2), (0xcd08, 0x3185), (0xcd09, 0x3186), (0xcd0a, 0x1ff3), (0xcd0b, 0x1ff4),
    (0xcd0c, 0x3187), (0xcd0d, 0x1ff5), (0xcd0e, 0x1ff6), (0xcd0f, 0x1ff7), (0xcd10, 0x3188), (0xcd11, 0x1ff8),
    (0xcd12, 0x1ff9), (0xcd13, 0x1ffa), (0xcd14, 0x1ffb), (0xcd15, 0x1ffc), (0xcd16, 0x1ffd), (0xcd17, 0x1ffe),
    (0xcd18, 0x3189), (0xcd19, 0x318a), (0xcd1a, 0x1fff), (0xcd1b, 0x318b), (0xcd1c, 0x2000), (0xcd1d, 0x318c),
    (0xcd1e, 0x2001), (0xcd1f, 0x2002), (0xcd20, 0x2003), (0xcd21, 0x200a), (0xcd22, 0x200b), (0xcd23, 0x200c),
    (0xcd24, 0x318d), (0xcd25, 0x200d), (0xcd26, 0x200e), (0xcd27, 0x200f), (0xcd28, 0x318e), (0xcd29, 0x2010),
    (0xcd2a, 0x2011), (0xcd2b, 0x2012), (0xcd2c, 0x318f), (0xcd2d, 0x2013), (0xcd2e, 0x2014), (0xcd2f, 0x2015),
    (0xcd30, 0x2016), (0xcd31, 0x2017), (0xcd32, 0x2018), (0xcd33, 0x2019), (0xcd34, 0x201a), (0xcd35, 0x201b),
    (0xcd36, 0x201c), (0xcd37, 0x201d), (0xcd38, 0x201e), (0xcd39, 0x3190), (0xcd3a, 0x201f), (0xcd3b, 0x2020),
    (0xcd3c, 0x2021), (0xcd3d, 0x2022), (0xcd3e, 0x2023), (0xcd3f, 0x202a), (0xcd40, 0x202b), (0xcd41, 0x202c),
    (0xcd42, 0x202d), (0xcd43, 0x202e), (0xcd44, 0x202f), (0xcd45, 0x2030), (0xcd46, 0x2031), (0xcd47, 0x2032),
    (0xcd48, 0x2033), (0xcd49, 0x2034), (0xcd4a, 0x2035), (0xcd4b, 0x2036), (0xcd4c, 0x2037), (0xcd4d, 0x2038),
    (0xcd4e, 0x2039), (0xcd4f, 0x203a), (0xcd50, 0x203b), (0xcd51, 0x203c), (0xcd52, 0x203d), (0xcd53, 0x203e),
    (0xcd54, 0x203f), (0xcd55, 0x2040), (0xcd56, 0x2041), (0xcd57, 0x2042), (0xcd58, 0x2043), (0xcd59, 0x2044),
    (0xcd5a, 0x2045), (0xcd5b, 0x2046), (0xcd5c, 0x3191), (0xcd5d, 0x2047), (0xcd5e, 0x2048), (0xcd5f, 0x2049),
    (0xcd60, 0x3192), (0xcd61, 0x20a8), (0xcd62, 0x20a9), (0xcd63, 0x20aa), (0xcd64, 0x3193), (0xcd65, 0x20ab),
    (0xcd66, 0x20ac), (0xcd67, 0x20ad), (0xcd68, 0x20ae), (0xcd69, 0x20af), (0xcd6a, 0x20b0), (0xcd6b, 0x20b1),
    (0xcd6c, 0x3194), (0xcd6d, 0x3195), (0xcd6e, 0x20b2), (0xcd6f, 0x3196), (0xcd70, 0x20b3), (0xcd71, 0x3197),
    (0xcd72, 0x20b4), (0xcd73, 0x20b5), (0xcd74, 0x20b6), (0xcd75, 0x20b7), (0xcd76, 0x20b8), (0xcd77, 0x20b9),
    (0xcd78, 0x3198), (0xcd79, 0x20ba), (0xcd7a, 0x20bb), (0xcd7b, 0x20bc), (0xcd7c, 0x20bd), (0xcd7d, 0x20be),
    (0xcd7e, 0x20bf), (0xcd7f, 0x20c0), (0xcd80, 0x20c1), (0xcd81, 0x20c8), (0xcd82, 0x20c9), (0xcd83, 0x20ca),
    (0xcd84, 0x20cb), (0xcd85, 0x20cc), (0xcd86, 0x20cd), (0xcd87, 0x20ce), (0xcd88, 0x3199), (0xcd89, 0x20cf),
    (0xcd8a, 0x20d0), (0xcd8b, 0x20d1), (0xcd8c, 0x20d2), (0xcd8d, 0x20d3), (0xcd8e, 0x20d4), (0xcd8f, 0x20d5),
    (0xcd90, 0x20d6), (0xcd91, 0x20d7), (0xcd92, 0x20d8), (0xcd93, 0x20d9), (0xcd94, 0x319a), (0xcd95, 0x319b),
    (0xcd96, 0x20da), (0xcd97, 0x20db), (0xcd98, 0x319c), (0xcd99, 0x20dc), (0xcd9a, 0x20dd), (0xcd9b, 0x20de),
    (0xcd9c, 0x319d), (0xcd9d, 0x20df), (0xcd9e, 0x20e0), (0xcd9f, 0x20e1), (0xcda0, 0x20e8), (0xcda1, 0x20e9),
    (0xcda2, 0x20ea), (0xcda3, 0x20eb), (0xcda4, 0x319e), (0xcda5, 0x319f), (0xcda6, 0x20ec), (0xcda7, 0x31a0),
    (0xcda8, 0x20ed), (0xcda9, 0x31a1), (0xcdaa, 0x20ee), (0xcdab, 0x20ef), (0xcdac, 0x20f0), (0xcdad, 0x20f1),
    (0xcdae, 0x20f2), (0xcdaf, 0x20f3), (0xcdb0, 0x31a2), (0xcdb1, 0x20f4), (0xcdb2, 0x20f5), (0xcdb3, 0x20f6),
    (0xcdb4, 0x20f7), (0xcdb5, 0x20f8), (0xcdb6, 0x20f9), (0xcdb7, 0x20fa), (0xcdb8, 0x20fb), (0xcdb9, 0x20fc),
    (0xcdba, 0x20fd), (0xcdbb, 0x20fe), (0xcdbc, 0x20ff), (0xcdbd, 0x2100), (0xcdbe, 0x2101), (0xcdbf, 0x2102),
    (0xcdc0, 0x2103), (0xcdc1, 0x2104), (0xcdc2, 0x2105), (0xcdc3, 0x2106), (0xcdc4, 0x31a3), (0xcdc5, 0x2107),
    (0xcdc6, 0x2166), (0xcdc7, 0x2167), (0xcdc8, 0x2168), (0xcdc9, 0x2169), (0xcdca, 0x216a), (0xcdcb, 0x216b),
    (0xcdcc, 0x31a4), (0xcdcd, 0x216c), (0xcdce, 0x216d), (0xcdcf, 0x216e), (0xcdd0, 0x31a5), (0xcdd1, 0x216f),
    (0xcdd2, 0x2170), (0xcdd3, 0x2171), (0xcdd4, 0x2172), (0xcdd5, 0x2173), (0xcdd6, 0x2174), (0xcdd7, 0x2175),
    (0xcdd8, 0x2176), (0xcdd9, 0x2177), (0xcdda, 0x2178), (0xcddb, 0x2179), (0xcddc, 0x217a), (0xcddd, 0x217b),
    (0xcdde, 0x217c), (0xcddf, 0x217d), (0xcde0, 0x217e), (0xcde1, 0x217f), (0xcde2, 0x2186), (0xcde3, 0x2187),
    (0xcde4, 0x2188), (0xcde5, 0x2189), (0xcde6, 0x218a), (0xcde7, 0x218b), (0xcde8, 0x31a6), (0xcde9, 0x218c),
    (0xcdea, 0x218d), (0xcdeb, 0x218e), (0xcdec, 0x31a7), (0xcded, 0x218f), (0xcdee, 0x2190), (0xcdef, 0x2191),
    (0xcdf0, 0x31a8), (0xcdf1, 0x2192), (0xcdf2, 0x2193), (0xcdf3, 0x2194), (0xcdf4, 0x2195), (0xcdf5, 0x2196),
    (0xcdf6, 0x2197), (0xcdf7, 0x2198), (0xcdf8, 0x31a9), (0xcdf9, 0x31aa), (0xcdfa, 0x2199), (0xcdfb, 0x31ab),
    (0xcdfc, 0x219a), (0xcdfd, 0x31ac), (0xcdfe, 0x219b), (0xcdff, 0x219c), (0xce00, 0x219d), (0xce01, 0x219e),
    (0xce02, 0x219f), (0xce03, 0x21a6), (0xce04, 0x31ad), (0xce05, 0x21a7), (0xce06, 0x21a8), (0xce07, 0x21a9),
    (0xce08, 0x31ae), (0xce09, 0x21aa), (0xce0a, 0x21ab), (0xce0b, 0x21ac), (0xce0c, 0x31af), (0xce0d, 0x21ad),
    (0xce0e, 0x21ae), (0xce0f, 0x21af), (0xce10, 0x21b0), (0xce11, 0x21b1), (0xce12, 0x21b2), (0xce13, 0x21b3),
    (0xce14, 0x31b0), (0xce15, 0x21b4), (0xce16, 0x21b5), (0xce17, 0x21b6), (0xce18, 0x21b7), (0xce19, 0x31b1),
    (0xce1a, 0x21b8), (0xce1b, 0x21b9), (0xce1c, 0x21ba), (0xce1d, 0x21bb), (0xce1e, 0x21bc), (0xce1f, 0x21bd),
    (0xce20, 0x31b2), (0xce21, 0x31b3), (0xce22, 0x21be), (0xce23, 0x21bf), (0xce24, 0x31b4), (0xce25, 0x21c0),
    (0xce26, 0x21c1), (0xce27, 0x21c2), (0xce28, 0x31b5), (0xce29, 0x21c3), (0xce2a, 0x21c4), (0xce2b, 0x21c5),
    (0xce2c, 0x2224), (0xce2d, 0x2225), (0xce2e, 0x2226), (0xce2f, 0x2227), (0xce30, 0x31b6), (0xce31, 0x31b7),
    (0xce32, 0x2228), (0xce33, 0x31b8), (0xce34, 0x2229), (0xce35, 0x31b9), (0xce36, 0x222a), (0xce37, 0x222b),
    (0xce38, 0x222c), (0xce39, 0x222d), (0xce3a, 0x222e), (0xce3b, 0x222f), (0xce3c, 0x2230), (0xce3d, 0x2231),
    (0xce3e, 0x2232), (0xce3f, 0x2233), (0xce40, 0x2234), (0xce41, 0x2235), (0xce42, 0x2236), (0xce43, 0x2237),
    (0xce44, 0x2238), (0xce45, 0x2239), (0xce46, 0x223a), (0xce47, 0x223b), (0xce48, 0x223c), (0xce49, 0x223d),
    (0xce4a, 0x2244), (0xce4b, 0x2245), (0xce4c, 0x2246), (0xce4d, 0x2247), (0xce4e, 0x2248), (0xce4f, 0x2249),
    (0xce50, 0x224a), (0xce51, 0x224b), (0xce52, 0x224c), (0xce53, 0x224d), (0xce54, 0x224e), (0xce55, 0x224f),
    (0xce56, 0x2250), (0xce57, 0x2251), (0xce58, 0x321a), (0xce59, 0x321b), (0xce5a, 0x2252), (0xce5b, 0x2253),
    (0xce5c, 0x321c), (0xce5d, 0x2254), (0xce5e, 0x2255), (0xce5f, 0x321d), (0xce60, 0x321e), (0xce61, 0x321f),
    (0xce62, 0x2256), (0xce63, 0x2257), (0xce64, 0x2258), (0xce65, 0x2259), (0xce66, 0x225a), (0xce67, 0x225b),
    (0xce68, 0x3220), (0xce69, 0x3221), (0xce6a, 0x225c), (0xce6b, 0x3222), (0xce6c, 0x225d), (0xce6d, 0x3223),
    (0xce6e, 0x2264), (0xce6f, 0x2265), (0xce70, 0x2266), (0xce71, 0x2267), (0xce72, 0x2268), (0xce73, 0x2269),
    (0xce74, 0x3224), (0xce75, 0x3225), (0xce76, 0x226a), (0xce77, 0x226b), (0xce78, 0x3226), (0xce79, 0x226c),
    (0xce7a, 0x226d), (0xce7b, 0x226e), (0xce7c, 0x3227), (0xce7d, 0x226f), (0xce7e, 0x2270), (0xce7f, 0x2271),
    (0xce80, 0x2272), (0xce81, 0x2273), (0xce82, 0x2274), (0xce83, 0x2275), (0xce84, 0x3228), (0xce85, 0x3229),
    (0xce86, 0x2276), (0xce87, 0x322a), (0xce88, 0x2277), (0xce89, 0x322b), (0xce8a, 0x2278), (0xce8b, 0x2279),
    (0xce8c, 0x227a), (0xce8d, 0x227b), (0xce8e, 0x227c), (0xce8f, 0x227d), (0xce90, 0x322c), (0xce91, 0x322d),
    (0xce92, 0x227e), (0xce93, 0x227f), (0xce94, 0x322e), (0xce95, 0x2280), (0xce96, 0x2281), (0xce97, 0x2282),
    (0xce98, 0x322f), (0xce99, 0x2283), (0xce9a, 0x22e2), (0xce9b, 0x22e3), (0xce9c, 0x22e4), (0xce9d, 0x22e5),
    (0xce9e, 0x22e6), (0xce9f, 0x22e7), (0xcea0, 0x3230), (0xcea1, 0x3231), (0xcea2, 0x22e8), (0xcea3, 0x3232),
    (0xcea4, 0x3233), (0xcea5, 0x3234), (0xcea6, 0x22e9), (0xcea7, 0x22ea), (0xcea8, 0x22eb), (0xcea9, 0x22ec),
    (0xceaa, 0x22ed), (0xceab, 0x22ee), (0xceac, 0x3235), (0xcead, 0x3236), (0xceae, 0x22ef), (0xceaf, 0x22f0),
    (0xceb0, 0x22f1), (0xceb1, 0x22f2), (0xceb2, 0x22f3), (0xceb3, 0x22f4), (0xceb4, 0x22f5), (0xceb5, 0x22f6),
    (0xceb6, 0x22f7), (0xceb7, 0x22f8), (0xceb8, 0x22f9), (0xceb9, 0x22fa), (0xceba, 0x22fb), (0xcebb, 0x2302),
    (0xcebc, 0x2303), (0xcebd, 0x2304), (0xcebe, 0x2305), (0xcebf, 0x2306), (0xcec0, 0x2307), (0xcec1, 0x3237),
    (0xcec2, 0x2308), (0xcec3, 0x2309), (0xcec4, 0x230a), (0xcec5, 0x230b), (0xcec6, 0x230c), (0xcec7, 0x230d),
    (0xcec8, 0x230e), (0xcec9, 0x230f), (0xceca, 0x2310), (0xcecb, 0x2311), (0xcecc, 0x2312), (0xcecd, 0x2313),
    (0xcece, 0x2314), (0xcecf, 0x2315), (0xced0, 0x2316), (0xced1, 0x2317), (0xced2, 0x2318), (0xced3, 0x2319),
    (0xced4, 0x231a), (0xced5, 0x231b), (0xced6, 0x2322), (0xced7, 0x2323), (0xced8, 0x2324), (0xced9, 0x2325),
    (0xceda, 0x2326), (0xcedb, 0x2327), (0xcedc, 0x2328), (0xcedd, 0x2329), (0xcede, 0x232a), (0xcedf, 0x232b),
    (0xcee0, 0x232c), (0xcee1, 0x232d), (0xcee2, 0x232e), (0xcee3, 0x232f), (0xcee4, 0x3238), (0xcee5, 0x3239),
    (0xcee6, 0x2330), (0xcee7, 0x2331), (0xcee8, 0x323a), (0xcee9, 0x2332), (0xceea, 0x2333), (0xceeb, 0x323b),
    (0xceec, 0x323c), (0xceed, 0x2334), (0xceee, 0x2335), (0xceef, 0x2336), (0xcef0, 0x2337), (0xcef1, 0x2338),
    (0xcef2, 0x2339), (0xcef3, 0x233a), (0xcef4, 0x323d), (0xcef5, 0x323e), (0xcef6, 0x233b), (0xcef7, 0x323f),
    (0xcef8, 0x3240), (0xcef9, 0x3241), (0xcefa, 0x233c), (0xcefb, 0x233d), (0xcefc, 0x233e), (0xcefd, 0x233f),
    (0xcefe, 0x2340), (0xceff, 0x2341), (0xcf00, 0x3242), (0xcf01, 0x3243), (0xcf02, 0x23a0), (0xcf03, 0x23a1),
    (0xcf04, 0x3244), (0xcf05, 0x23a2), (0xcf06, 0x23a3), (0xcf07, 0x23a4), (0xcf08, 0x3245), (0xcf09, 0x23a5),
    (0xcf0a, 0x23a6), (0xcf0b, 0x23a7), (0xcf0c, 0x23a8), (0xcf0d, 0x23a9), (0xcf0e, 0x23aa), (0xcf0f, 0x23ab),
    (0xcf10, 0x3246), (0xcf11, 0x3247), (0xcf12, 0x23ac), (0xcf13, 0x3248), (0xcf14, 0x23ad), (0xcf15, 0x3249),
    (0xcf16, 0x23ae), (0xcf17, 0x23af), (0xcf18, 0x23b0), (0xcf19, 0x23b1), (0xcf1a, 0x23b2), (0xcf1b, 0x23b3),
    (0xcf1c, 0x324a), (0xcf1d, 0x23b4), (0xcf1e, 0x23b5), (0xcf1f, 0x23b6), (0xcf20, 0x324b), (0xcf21, 0x23b7),
    (0xcf22, 0x23b8), (0xcf23, 0x23b9), (0xcf24, 0x324c), (0xcf25, 0x23c0), (0xcf26, 0x23c1), (0xcf27, 0x23c2),
    (0xcf28, 0x23c3), (0xcf29, 0x23c4), (0xcf2a, 0x23c5), (0xcf2b, 0x23c6), (0xcf2c, 0x324d), (0xcf2d, 0x324e),
    (0xcf2e, 0x23c7), (0xcf2f, 0x324f), (0xcf30, 0x3250), (0xcf31, 0x3251), (0xcf32, 0x23c8), (0xcf33, 0x23c9),
    (0xcf34, 0x23ca), (0xcf35, 0x23cb), (0xcf36, 0x23cc), (0xcf37, 0x23cd), (0xcf38, 0x3252), (0xcf39, 0x23ce),
    (0xcf3a, 0x23cf), (0xcf3b, 0x23d0), (0xcf3c, 0x23d1), (0xcf3d, 0x23d2), (0xcf3e, 0x23d3), (0xcf3f, 0x23d4),
    (0xcf40, 0x23d5), (0xcf41, 0x23d6), (0xcf42, 0x23d7), (0xcf43, 0x23d8), (0xcf44, 0x23d9), (0xcf45, 0x23e0),
    (0xcf46, 0x23e1), (0xcf47, 0x23e2), (0xcf48, 0x23e3), (0xcf49, 0x23e4), (0xcf4a, 0x23e5), (0xcf4b, 0x23e6),
    (0xcf4c, 0x23e7), (0xcf4d, 0x23e8), (0xcf4e, 0x23e9), (0xcf4f, 0x23ea), (0xcf50, 0x23eb), (0xcf51, 0x23ec),
    (0xcf52, 0x23ed), (0xcf53, 0x23ee), (0xcf54, 0x3253), (0xcf55, 0x3254), (0xcf56, 0x23ef), (0xcf57, 0x23f0),
    (0xcf58, 0x3255), (0xcf59, 0x23f1), (0xcf5a, 0x23f2), (0xcf5b, 0x23f3), (0xcf5c, 0x3256), (0xcf5d, 0x23f4),
    (0xcf5e, 0x23f5), (0xcf5f, 0x23f6), (0xcf60, 0x23f7), (0xcf61, 0x23f8), (0xcf62, 0x23f9), (0xcf63, 0x23fa),
    (0xcf64, 0x3257), (0xcf65, 0x3258), (0xcf66, 0x23fb), (0xcf67, 0x3259), (0xcf68, 0x23fc), (0xcf69, 0x325a),
    (0xcf6a, 0x23fd), (0xcf6b, 0x23fe), (0xcf6c, 0x23ff), (0xcf6d, 0x245e), (0xcf6e, 0x245f), (0xcf6f, 0x2460),
    (0xcf70, 0x325b), (0xcf71, 0x325c), (0xcf72, 0x2461), (0xcf73, 0x2462), (0xcf74, 0x325d), (0xcf75, 0x2463),
    (0xcf76, 0x2464), (0xcf77, 0x2465), (0xcf78, 0x325e), (0xcf79, 0x2466), (0xcf7a, 0x2467), (0xcf7b, 0x2468),
    (0xcf7c, 0x2469), (0xcf7d, 0x246a), (0xcf7e, 0x246b), (0xcf7f, 0x246c), (0xcf80, 0x325f), (0xcf81, 0x246d),
    (0xcf82, 0x246e), (0xcf83, 0x246f), (0xcf84, 0x2470), (0xcf85, 0x3260), (0xcf86, 0x2471), (0xcf87, 0x2472),
    (0xcf88, 0x2473), (0xcf89, 0x2474), (0xcf8a, 0x2475), (0xcf8b, 0x2476), (0xcf8c, 0x3261), (0xcf8d, 0x2477),
    (0xcf8e, 0x247e), (0xcf8f, 0x247f), (0xcf90, 0x2480), (0xcf91, 0x2481), (0xcf92, 0x2482), (0xcf93, 0x2483),
    (0xcf94, 0x2484), (0xcf95, 0x2485), (0xcf96, 0x2486), (0xcf97, 0x2487), (0xcf98, 0x2488), (0xcf99, 0x2489),
    (0xcf9a, 0x248a), (0xcf9b, 0x248b), (0xcf9c, 0x248c), (0xcf9d, 0x248d), (0xcf9e, 0x248e), (0xcf9f, 0x248f),
    (0xcfa0, 0x2490), (0xcfa1, 0x3262), (0xcfa2, 0x2491), (0xcfa3, 0x2492), (0xcfa4, 0x2493), (0xcfa5, 0x2494),
    (0xcfa6, 0x2495), (0xcfa7, 0x2496), (0xcfa8, 0x3263), (0xcfa9, 0x2497), (0xcfaa, 0x249e), (0xcfab, 0x249f),
    (0xcfac, 0x24a0), (0xcfad, 0x24a1), (0xcfae, 0x24a2), (0xcfaf, 0x24a3), (0xcfb0, 0x3264), (0xcfb1, 0x24a4),
    (0xcfb2, 0x24a5), (0xcfb3, 0x24a6), (0xcfb4, 0x24a7), (0xcfb5, 0x24a8), (0xcfb6, 0x24a9), (0xcfb7, 0x24aa),
    (0xcfb8, 0x24ab), (0xcfb9, 0x24ac), (0xcfba, 0x24ad), (0xcfbb, 0x24ae), (0xcfbc, 0x24af), (0xcfbd, 0x24b0),
    (0xcfbe, 0x24b1), (0xcfbf, 0x24b2), (0xcfc0, 0x24b3), (0xcfc1, 0x24b4), (0xcfc2, 0x24b5), (0xcfc3, 0x24b6),
    (0xcfc4, 0x3265), (0xcfc5, 0x24b7), (0xcfc6, 0x24b8), (0xcfc7, 0x24b9), (0xcfc8, 0x24ba), (0xcfc9, 0x24bb),
    (0xcfca, 0x24bc), (0xcfcb, 0x24bd), (0xcfcc, 0x251c), (0xcfcd, 0x251d), (0xcfce, 0x251e), (0xcfcf, 0x251f),
    (0xcfd0, 0x2520), (0xcfd1, 0x2521), (0xcfd2, 0x2522), (0xcfd3, 0x2523), (0xcfd4, 0x2524), (0xcfd5, 0x2525),
    (0xcfd6, 0x2526), (0xcfd7, 0x2527), (0xcfd8, 0x2528), (0xcfd9, 0x2529), (0xcfda, 0x252a), (0xcfdb, 0x252b),
    (0xcfdc, 0x252c), (0xcfdd, 0x252d), (0xcfde, 0x252e), (0xcfdf, 0x252f), (0xcfe0, 0x3266), (0xcfe1, 0x3267),
    (0xcfe2, 0x2530), (0xcfe3, 0x2531), (0xcfe4, 0x3268), (0xcfe5, 0x2532), (0xcfe6, 0x2533), (0xcfe7, 0x2534),
    (0xcfe8, 0x3269), (0xcfe9, 0x2535), (0xcfea, 0x253c), (0xcfeb, 0x253d), (0xcfec, 0x253e), (0xcfed, 0x253f),
    (0xcfee, 0x2540), (0xcfef, 0x2541), (0xcff0, 0x326a), (0xcff1, 0x326b), (0xcff2, 0x2542), (0xcff3, 0x326c),
    (0xcff4, 0x2543), (0xcff5, 0x326d), (0xcff6, 0x2544), (0xcff7, 0x2545), (0xcff8, 0x2546), (0xcff9, 0x2547),
    (0xcffa, 0x2548), (0xcffb, 0x2549), (0xcffc, 0x326e), (0xcffd, 0x254a), (0xcffe, 0x254b), (0xcfff, 0x254c),
    (0xd000, 0x326f), (0xd001, 0x254d), (0xd002, 0x254e), (0xd003, 0x254f), (0xd004, 0x3270), (0xd005, 0x2550),
    (0xd006, 0x2551), (0xd007, 0x2552), (0xd008, 0x2553), (0xd009, 0x2554), (0xd00a, 0x2555), (0xd00b, 0x255c),
    (0xd00c, 0x255d), (0xd00d, 0x255e), (0xd00e, 0x255f), (0xd00f, 0x2560), (0xd010, 0x2561), (0xd011, 0x3271),
    (0xd012, 0x2562), (0xd013, 0x2563), (0xd014, 0x2564), (0xd015, 0x2565), (0xd016, 0x2566), (0xd017, 0x2567),
    (0xd018, 0x3272), (0xd019, 0x2568), (0xd01a, 0x2569), (0xd01b, 0x256a), (0xd01c, 0x256b), (0xd01d, 0x256c),
    (0xd01e, 0x256d), (0xd01f, 0x256e), (0xd020, 0x256f), (0xd021, 0x2570), (0xd022, 0x2571), (0xd023, 0x2572),
    (0xd024, 0x2573), (0xd025, 0x2574), (0xd026, 0x2575), (0xd027, 0x2576), (0xd028, 0x2577), (0xd029, 0x2578),
    (0xd02a, 0x2579), (0xd02b, 0x257a), (0xd02c, 0x257b), (0xd02d, 0x3273), (0xd02e, 0x25da), (0xd02f, 0x25db),
    (0xd030, 0x25dc), (0xd031, 0x25dd), (0xd032, 0x25de), (0xd033, 0x25df), (0xd034, 0x3274), (0xd035, 0x3275),
    (0xd036, 0x25e0), (0xd037, 0x25e1), (0xd038, 0x3276), (0xd039, 0x25e2), (0xd03a, 0x25e3), (0xd03b, 0x25e4),
    (0xd03c, 0x3277), (0xd03d, 0x25e5), (0xd03e, 0x25e6), (0xd03f, 0x25e7), (0xd040, 0x25e8), (0xd041, 0x25e9),
    (0xd042, 0x25ea), (0xd043, 0x25eb), (0xd044, 0x32d8), (0xd045, 0x32d9), (0xd046, 0x25ec), (0xd047, 0x32da),
    (0xd048, 0x25ed), (0xd049, 0x32db), (0xd04a, 0x25ee), (0xd04b, 0x25ef), (0xd04c, 0x25f0), (0xd04d, 0x25f1),
    (0xd04e, 0x25f2), (0xd04f, 0x25f3), (0xd050, 0x32dc), (0xd051, 0x25fa), (0xd052, 0x25fb), (0xd053, 0x25fc),
    (0xd054, 0x32dd), (0xd055, 0x25fd), (0xd056, 0x25fe), (0xd057, 0x25ff), (0xd058, 0x32de), (0xd059, 0x2600),
    (0xd05a, 0x2601), (0xd05b, 0x2602), (0xd05c, 0x2603), (0xd05d, 0x2604), (0xd05e, 0x2605), (0xd05f, 0x2606),
    (0xd060, 0x32df), (0xd061, 0x2607), (0xd062, 0x2608), (0xd063, 0x2609), (0xd064, 0x260a), (0xd065, 0x260b),
    (0xd066, 0x260c), (0xd067, 0x260d), (0xd068, 0x260e), (0xd069, 0x260f), (0xd06a, 0x2610), (0xd06b, 0x2611),
    (0xd06c, 0x32e0), (0xd06d, 0x32e1), (0xd06e, 0x2612), (0xd06f, 0x2613), (0xd070, 0x32e2), (0xd071, 0x261a),
    (0xd072, 0x261b), (0xd073, 0x261c), (0xd074, 0x32e3), (0xd075, 0x261d), (0xd076, 0x261e), (0xd077, 0x261f),
    (0xd078, 0x2620), (0xd079, 0x2621), (0xd07a, 0x2622), (0xd07b, 0x2623), (0xd07c, 0x32e4), (0xd07d, 0x32e5),
    (0xd07e, 0x2624), (0xd07f, 0x2625), (0xd080, 0x2626), (0xd081, 0x32e6), (0xd082, 0x2627), (0xd083, 0x2628),
    (0xd084, 0x2629), (0xd085, 0x262a), (0xd086, 0x262b), (0xd087, 0x262c), (0xd088, 0x262d), (0xd089, 0x262e),
    (0xd08a, 0x262f), (0xd08b, 0x2630), (0xd08c, 0x2631), (0xd08d, 0x2632), (0xd08e, 0x2633), (0xd08f, 0x2634),
    (0xd090, 0x2635), (0xd091, 0x2636), (0xd092, 0x2637), (0xd093, 0x2638), (0xd094, 0x2639), (0xd095, 0x2698),
    (0xd096, 0x2699), (0xd097, 0x269a), (0xd098, 0x269b), (0xd099, 0x269c), (0xd09a, 0x269d), (0xd09b, 0x269e),
    (0xd09c, 0x269f), (0xd09d, 0x26a0), (0xd09e, 0x26a1), (0xd09f, 0x26a2), (0xd0a0, 0x26a3), (0xd0a1, 0x26a4),
    (0xd0a2, 0x26a5), (0xd0a3, 0x26a6), (0xd0a4, 0x32e7), (0xd0a5, 0x32e8), (0xd0a6, 0x26a7), (0xd0a7, 0x26a8),
    (0xd0a8, 0x32e9), (0xd0a9, 0x26a9), (0xd0aa, 0x26aa), (0xd0ab, 0x26ab), (0xd0ac, 0x32ea), (0xd0ad, 0x26ac),
    (0xd0ae, 0x26ad), (0xd0af, 0x26ae), (0xd0b0, 0x26af), (0xd0b1, 0x26b0), (0xd0b2, 0x26b1), (0xd0b3, 0x26b8),
    (0xd0b4, 0x32eb), (0xd0b5, 0x32ec), (0xd0b6, 0x26b9), (0xd0b7, 0x32ed), (0xd0b8, 0x26ba), (0xd0b9, 0x32ee),
    (0xd0ba, 0x26bb), (0xd0bb, 0x26bc), (0xd0bc, 0x26bd), (0xd0bd, 0x26be), (0xd0be, 0x26bf), (0xd0bf, 0x26c0),
    (0xd0c0, 0x32ef), (0xd0c1, 0x32f0), (0xd0c2, 0x26c1), (0xd0c3, 0x26c2), (0xd0c4, 0x32f1), (0xd0c5, 0x26c3),
    (0xd0c6, 0x26c4), (0xd0c7, 0x26c5), (0xd0c8, 0x32f2), (0xd0c9, 0x32f3), (0xd0ca, 0x26c6), (0xd0cb, 0x26c7),
    (0xd0cc, 0x26c8), (0xd0cd, 0x26c9), (0xd0ce, 0x26ca), (0xd0cf, 0x26cb), (0xd0d0, 0x32f4), (0xd0d1, 0x32f5),
    (0xd0d2, 0x26cc), (0xd0d3, 0x32f6), (0xd0d4, 0x32f7), (0xd0d5, 0x32f8), (0xd0d6, 0x26cd), (0xd0d7, 0x26ce),
    (0xd0d8, 0x26cf), (0xd0d9, 0x26d0), (0xd0da, 0x26d1), (0xd0db, 0x26d8), (0xd0dc, 0x32f9), (0xd0dd, 0x32fa),
    (0xd0de, 0x26d9), (0xd0df, 0x26da), (0xd0e0, 0x32fb), (0xd0e1, 0x26db), (0xd0e2, 0x26dc), (0xd0e3, 0x26dd),
    (0xd0e4, 0x32fc), (0xd0e5, 0x26de), (0xd0e6, 0x26df), (0xd0e7, 0x26e0), (0xd0e8, 0x26e1), (0xd0e9, 0x26e2),
    (0xd0ea, 0x26e3), (0xd0eb, 0x26e4), (0xd0ec, 0x32fd), (0xd0ed, 0x32fe), (0xd0ee, 0x26e5), (0xd0ef, 0x32ff),
    (0xd0f0, 0x3300), (0xd0f1, 0x3301), (0xd0f2, 0x26e6), (0xd0f3, 0x26e7), (0xd0f4, 0x26e8), (0xd0f5, 0x26e9),
    (0xd0f6, 0x26ea), (0xd0f7, 0x26eb), (0xd0f8, 0x3302), (0xd0f9, 0x26ec), (0xd0fa, 0x26ed), (0xd0fb, 0x26ee),
    (0xd0fc, 0x26ef), (0xd0fd, 0x26f0), (0xd0fe, 0x26f1), (0xd0ff, 0x26f2), (0xd100, 0x26f3), (0xd101, 0x26f4),
    (0xd102, 0x26f5), (0xd103, 0x26f6), (0xd104, 0x26f7), (0xd105, 0x2756), (0xd106, 0x2757), (0xd107, 0x2758),
    (0xd108, 0x2759), (0xd109, 0x275a), (0xd10a, 0x275b), (0xd10b, 0x275c), (0xd10c, 0x275d), (0xd10d, 0x3303),
    (0xd10e, 0x275e), (0xd10f, 0x275f), (0xd110, 0x2760), (0xd111, 0x2761), (0xd112, 0x2762), (0xd113, 0x2763),
    (0xd114, 0x2764), (0xd115, 0x2765), (0xd116, 0x2766), (0xd117, 0x2767), (0xd118, 0x2768), (0xd119, 0x2769),
    (0xd11a, 0x276a), (0xd11b, 0x276b), (0xd11c, 0x276c), (0xd11d, 0x276d), (0xd11e, 0x276e), (0xd11f, 0x276f),
    (0xd120, 0x2776), (0xd121, 0x2777), (0xd122, 0x2778), (0xd123, 0x2779), (0xd124, 0x277a), (0xd125, 0x277b),
    (0xd126, 0x277c), (0xd127, 0x277d), (0xd128, 0x277e), (0xd129, 0x277f), (0xd12a, 0x2780), (0xd12b, 0x2781),
    (0xd12c, 0x2782), (0xd12d, 0x2783), (0xd12e, 0x2784), (0xd12f, 0x2785), (0xd130, 0x3304), (0xd131, 0x3305),
    (0xd132, 0x2786), (0xd133, 0x2787), (0xd134, 0x3306), (0xd135, 0x2788), (0xd136, 0x2789), (0xd137, 0x278a),
    (0xd138, 0x3307), (0xd139, 0x278b), (0xd13a, 0x3308), (0xd13b, 0x278c), (0xd13c, 0x278d), (0xd13d, 0x278e),
    (0xd13e, 0x278f), (0xd13f, 0x2796), (0xd140, 0x3309), (0xd141, 0x330a), (0xd142, 0x2797), (0xd143, 0x330b),
    (0xd144, 0x330c), (0xd145, 0x330d), (0xd146, 0x2798), (0xd147, 0x2799), (0xd148, 0x279a), (0xd149, 0x279b),
    (0xd14a, 0x279c), (0xd14b, 0x279d), (0xd14c, 0x330e), (0xd14d, 0x330f), (0xd14e, 0x279e), (0xd14f, 0x279f),
    (0xd150, 0x3310), (0xd151, 0x27a0), (0xd152, 0x27a1), (0xd153, 0x27a2), (0xd154, 0x3311), (0xd155, 0x27a3),
    (0xd156, 0x27a4), (0xd157, 0x27a5), (0xd158, 0x27a6), (0xd159, 0x27a7), (0xd15a, 0x27a8), (0xd15b, 0x27a9),
    (0xd15c, 0x3312), (0xd15d, 0x3313), (0xd15e, 0x27aa), (0xd15f, 0x3314), (0xd160, 0x27ab), (0xd161, 0x3315),
    (0xd162, 0x27ac), (0xd163, 0x27ad), (0xd164, 0x27ae), (0xd165, 0x27af), (0xd166, 0x27b0), (0xd167, 0x27b1),
    (0xd168, 0x3316), (0xd169, 0x27b2), (0xd16a, 0x27b3), (0xd16b, 0x27b4), (0xd16c, 0x3317), (0xd16d, 0x27b5),
    (0xd16e, 0x2814), (0xd16f, 0x2815), (0xd170, 0x2816), (0xd171, 0x2817), (0xd172, 0x2818), (0xd173, 0x2819),
    (0xd174, 0x281a), (0xd175, 0x281b), (0xd176, 0x281c), (0xd177, 0x281d), (0xd178, 0x281e), (0xd179, 0x281f),
    (0xd17a, 0x2820), (0xd17b, 0x2821), (0xd17c, 0x3318), (0xd17d, 0x2822), (0xd17e, 0x2823), (0xd17f, 0x2824),
    (0xd180, 0x2825), (0xd181, 0x2826), (0xd182, 0x2827), (0xd183, 0x2828), (0xd184, 0x3319), (0xd185, 0x2829),
    (0xd186, 0x282a), (0xd187, 0x282b), (0xd188, 0x331a), (0xd189, 0x282c), (0xd18a, 0x282d), (0xd18b, 0x2834),
    (0xd18c, 0x2835), (0xd18d, 0x2836), (0xd18e, 0x2837), (0xd18f, 0x2838), (0xd190, 0x2839), (0xd191, 0x283a),
    (0xd192, 0x283b), (0xd193, 0x283c), (0xd194, 0x283d), (0xd195, 0x283e), (0xd196, 0x283f), (0xd197, 0x2840),
    (0xd198, 0x2841), (0xd199, 0x2842), (0xd19a, 0x2843), (0xd19b, 0x2844), (0xd19c, 0x2845), (0xd19d, 0x2846),
    (0xd19e, 0x2847), (0xd19f, 0x2848), (0xd1a0, 0x331b), (0xd1a1, 0x331c), (0xd1a2, 0x2849), (0xd1a3, 0x284a),
    (0xd1a4, 0x331d), (0xd1a5, 0x284b), (0xd1a6, 0x284c), (0xd1a7, 0x284d), (0xd1a8, 0x331e), (0xd1a9, 0x2854),
    (0xd1aa, 0x2855), (0xd1ab, 0x2856), (0xd1ac, 0x2857), (0xd1ad, 0x2858), (0xd1ae, 0x2859), (0xd1af, 0x285a),
    (0xd1b0, 0x331f), (0xd1b1, 0x3320), (0xd1b2, 0x285b), (0xd1b3, 0x3321), (0xd1b4, 0x285c), (0xd1b5, 0x3322),
    (0xd1b6, 0x285d), (0xd1b7, 0x285e), (0xd1b8, 0x285f), (0xd1b9, 0x2860), (0xd1ba, 0x3323), (0xd1bb, 0x2861),
    (0xd1bc, 0x3324), (0xd1bd, 0x2862), (0xd1be, 0x2863), (0xd1bf, 0x2864), (0xd1c0, 0x3325), (0xd1c1, 0x2865),
    (0xd1c2, 0x2866), (0xd1c3, 0x2867), (0xd1c4, 0x2868), (0xd1c5, 0x2869), (0xd1c6, 0x286a), (0xd1c7, 0x286b),
    (0xd1c8, 0x286c), (0xd1c9, 0x286d), (0xd1ca, 0x286e), (0xd1cb, 0x286f), (0xd1cc, 0x2870), (0xd1cd, 0x2871),
    (0xd1ce, 0x2872), (0xd1cf, 0x2873), (0xd1d0, 0x28d2), (0xd1d1, 0x28d3), (0xd1d2, 0x28d4), (0xd1d3, 0x28d5),
    (0xd1d4, 0x28d6), (0xd1d5, 0x28d7), (0xd1d6, 0x28d8), (0xd1d7, 0x28d9), (0xd1d8, 0x3326), (0xd1d9, 0x28da),
    (0xd1da, 0x28db), (0xd1db, 0x28dc), (0xd1dc, 0x28dd), (0xd1dd, 0x28de), (0xd1de, 0x28df), (0xd1df, 0x28e0),
    (0xd1e0, 0x28e1), (0xd1e1, 0x28e2), (0xd1e2, 0x28e3), (0xd1e3, 0x28e4), (0xd1e4, 0x28e5), (0xd1e5, 0x28e6),
    (0xd1e6, 0x28e7), (0xd1e7, 0x28e8), (0xd1e8, 0x28e9), (0xd1e9, 0x28ea), (0xd1ea, 0x28eb), (0xd1eb, 0x28f2),
    (0xd1ec, 0x28f3), (0xd1ed, 0x28f4), (0xd1ee, 0x28f5), (0xd1ef, 0x28f6), (0xd1f0, 0x28f7), (0xd1f1, 0x28f8),
    (0xd1f2, 0x28f9), (0xd1f3, 0x28fa), (0xd1f4, 0x3327), (0xd1f5, 0x28fb), (0xd1f6, 0x28fc), (0xd1f7, 0x28fd),
    (0xd1f8, 0x3328), (0xd1f9, 0x28fe), (0xd1fa, 0x28ff), (0xd1fb, 0x2900), (0xd1fc, 0x2901), (0xd1fd, 0x2902),
    (0xd1fe, 0x2903), (0xd1ff, 0x2904), (0xd200, 0x2905), (0xd201, 0x2906), (0xd202, 0x2907), (0xd203, 0x2908),
    (0xd204, 0x2909), (0xd205, 0x290a), (0xd206, 0x290b), (0xd207, 0x3329), (0xd208, 0x2912), (0xd209, 0x332a),
    (0xd20a, 0x2913), (0xd20b, 0x2914), (0xd20c, 0x2915), (0xd20d, 0x2916), (0xd20e, 0x2917), (0xd20f, 0x2918),
    (0xd210, 0x332b), (0xd211, 0x2919), (0xd212, 0x291a), (0xd213, 0x291b), (0xd214, 0x291c), (0xd215, 0x291d),
    (0xd216, 0x291e), (0xd217, 0x291f), (0xd218, 0x2920), (0xd219, 0x2921), (0xd21a, 0x2922), (0xd21b, 0x2923),
    (0xd21c, 0x2924), (0xd21d, 0x2925), (0xd21e, 0x2926), (0xd21f, 0x2927), (0xd220, 0x2928), (0xd221, 0x2929),
    (0xd222, 0x292a), (0xd223, 0x292b), (0xd224, 0x292c), (0xd225, 0x292d), (0xd226, 0x292e), (0xd227, 0x292f),
    (0xd228, 0x2930), (0xd229, 0x2931), (0xd22a, 0x2990), (0xd22b, 0x2991), (0xd22c, 0x332c), (0xd22d, 0x332d),
    (0xd22e, 0x2992), (0xd22f, 0x2993), (0xd230, 0x332e), (0xd231, 0x2994), (0xd232, 0x2995), (0xd233, 0x2996),
    (0xd234, 0x332f), (0xd235, 0x2997), (0xd236, 0x2998), (0xd237, 0x2999), (0xd238, 0x299a), (0xd239, 0x299b),
    (0xd23a, 0x299c), (0xd23b, 0x299d), (0xd23c, 0x3330), (0xd23d, 0x3331), (0xd23e, 0x299e), (0xd23f, 0x3332),
    (0xd240, 0x299f), (0xd241, 0x3333), (0xd242, 0x29a0), (0xd243, 0x29a1), (0xd244, 0x29a2), (0xd245, 0x29a3),
    (0xd246, 0x29a4), (0xd247, 0x29a5), (0xd248, 0x3334), (0xd249, 0x29a6), (0xd24a, 0x29a7), (0xd24b, 0x29a8),
    (0xd24c, 0x29a9), (0xd24d, 0x29b0), (0xd24e, 0x29b1), (0xd24f, 0x29b2), (0xd250, 0x29b3), (0xd251, 0x29b4),
    (0xd252, 0x29b5), (0xd253, 0x29b6), (0xd254, 0x29b7), (0xd255, 0x29b8), (0xd256, 0x29b9), (0xd257, 0x29ba),
    (0xd258, 0x29bb), (0xd259, 0x29bc), (0xd25a, 0x29bd), (0xd25b, 0x29be), (0xd25c, 0x3335), (0xd25d, 0x29bf),
    (0xd25e, 0x29c0), (0xd25f, 0x29c1), (0xd260, 0x29c2), (0xd261, 0x29c3), (0xd262, 0x29c4), (0xd263, 0x29c5),
    (0xd264, 0x3396), (0xd265, 0x29c6), (0xd266, 0x29c7), (0xd267, 0x29c8), (0xd268, 0x29c9), (0xd269, 0x29d0),
    (0xd26a, 0x29d1), (0xd26b, 0x29d2), (0xd26c, 0x29d3), (0xd26d, 0x29d4), (0xd26e, 0x29d5), (0xd26f, 0x29d6),
    (0xd270, 0x29d7), (0xd271, 0x29d8), (0xd272, 0x29d9), (0xd273, 0x29da), (0xd274, 0x29db), (0xd275, 0x29dc),
    (0xd276, 0x29dd), (0xd277, 0x29de), (0xd278, 0x29df), (0xd279, 0x29e0), (0xd27a, 0x29e1), (0xd27b, 0x29e2),
    (0xd27c, 0x29e3), (0xd27d, 0x29e4), (0xd27e, 0x29e5), (0xd27f, 0x29e6), (0xd280, 0x3397), (0xd281, 0x3398),
    (0xd282, 0x29e7), (0xd283, 0x29e8), (0xd284, 0x3399), (0xd285, 0x29e9), (0xd286, 0x29ea), (0xd287, 0x29eb),
    (0xd288, 0x339a), (0xd289, 0x29ec), (0xd28a, 0x29ed), (0xd28b, 0x29ee), (0xd28c, 0x29ef), (0xd28d, 0x2a4e),
    (0xd28e, 0x2a4f), (0xd28f, 0x2a50), (0xd290, 0x339b), (0xd291, 0x339c), (0xd292, 0x2a51), (0xd293, 0x2a52),
    (0xd294, 0x2a53), (0xd295, 0x339d), (0xd296, 0x2a54), (0xd297, 0x2a55), (0xd298, 0x2a56), (0xd299, 0x2a57),
    (0xd29a, 0x2a58), (0xd29b, 0x2a59), (0xd29c, 0x339e), (0xd29d, 0x2a5a), (0xd29e, 0x2a5b), (0xd29f, 0x2a5c),
    (0xd2a0, 0x339f), (0xd2a1, 0x2a5d), (0xd2a2, 0x2a5e), (0xd2a3, 0x2a5f), (0xd2a4, 0x33a0), (0xd2a5, 0x2a60),
    (0xd2a6, 0x2a61), (0xd2a7, 0x2a62), (0xd2a8, 0x2a63), (0xd2a9, 0x2a64), (0xd2aa, 0x2a65), (0xd2ab, 0x2a66),
    (0xd2ac, 0x33a1), (0xd2ad, 0x2a67), (0xd2ae, 0x2a6e), (0xd2af, 0x2a6f), (0xd2b0, 0x2a70), (0xd2b1, 0x33a2),
    (0xd2b2, 0x2a71), (0xd2b3, 0x2a72), (0xd2b4, 0x2a73), (0xd2b5, 0x2a74), (0xd2b6, 0x2a75), (0xd2b7, 0x2a76),
    (0xd2b8, 0x33a3), (0xd2b9, 0x33a4), (0xd2ba, 0x2a77), (0xd2bb, 0x2a78), (0xd2bc, 0x33a5), (0xd2bd, 0x2a79),
    (0xd2be, 0x2a7a), (0xd2bf, 0x33a6), (0xd2c0, 0x33a7), (0xd2c1, 0x2a7b), (0xd2c2, 0x33a8), (0xd2c3, 0x2a7c),
    (0xd2c4, 0x2a7d), (0xd2c5, 0x2a7e), (0xd2c6, 0x2a7f), (0xd2c7, 0x2a80), (0xd2c8, 0x33a9), (0xd2c9, 0x33aa),
    (0xd2ca, 0x2a81), (0xd2cb, 0x33ab), (0xd2cc, 0x2a82), (0xd2cd, 0x2a83), (0xd2ce, 0x2a84), (0xd2cf, 0x2a85),
    (0xd2d0, 0x2a86), (0xd2d1, 0x2a87), (0xd2d2, 0x2a8e), (0xd2d3, 0x2a8f), (0xd2d4, 0x33ac), (0xd2d5, 0x2a90),
    (0xd2d6, 0x2a91), (0xd2d7, 0x2a92), (0xd2d8, 0x33ad), (0xd2d9, 0x2a93), (0xd2da, 0x2a94), (0xd2db, 0x2a95),
    (0xd2dc, 0x33ae), (0xd2dd, 0x2a96), (0xd2de, 0x2a97), (0xd2df, 0x2a98), (0xd2e0, 0x2a99), (0xd2e1, 0x2a9a),
    (0xd2e2, 0x2a9b), (0xd2e3, 0x2a9c), (0xd2e4, 0x33af), (0xd2e5, 0x33b0), (0xd2e6, 0x2a9d), (0xd2e7, 0x2a9e),
    (0xd2e8, 0x2a9f), (0xd2e9, 0x2aa0), (0xd2ea, 0x2aa1), (0xd2eb, 0x2aa2), (0xd2ec, 0x2aa3), (0xd2ed, 0x2aa4),
    (0xd2ee, 0x2aa5), (0xd2ef, 0x2aa6), (0xd2f0, 0x33b1), (0xd2f1, 0x33b2), (0xd2f2, 0x2aa7), (0xd2f3, 0x2aa8),
    (0xd2f4, 0x33b3), (0xd2f5, 0x2aa9), (0xd2f6, 0x2aaa), (0xd2f7, 0x2aab), (0xd2f8, 0x33b4), (0xd2f9, 0x2aac),
    (0xd2fa, 0x2aad), (0xd2fb, 0x2b0c), (0xd2fc, 0x2b0d), (0xd2fd, 0x2b0e), (0xd2fe, 0x2b0f), (0xd2ff, 0x2b10),
    (0xd300, 0x33b5), (0xd301, 0x33b6), (0xd302, 0x2b11), (0xd303, 0x33b7), (0xd304, 0x2b12), (0xd305, 0x33b8),
    (0xd306, 0x2b13), (0xd307, 0x2b14), (0xd308, 0x2b15), (0xd309, 0x2b16), (0xd30a, 0x2b17), (0xd30b, 0x2b18),
    (0xd30c, 0x33b9), (0xd30d, 0x33ba), (0xd30e, 0x33bb), (0xd30f, 0x2b19), (0xd310, 0x33bc), (0xd311, 0x2b1a),
    (0xd312, 0x2b1b), (0xd313, 0x2b1c), (0xd314, 0x33bd), (0xd315, 0x2b1d), (0xd316, 0x33be), (0xd317, 0x2b1e),
    (0xd318, 0x2b1f), (0xd319, 0x2b20), (0xd31a, 0x2b21), (0xd31b, 0x2b22), (0xd31c, 0x33bf), (0xd31d, 0x33c0),
    (0xd31e, 0x2b23), (0xd31f, 0x33c1), (0xd320, 0x33c2), (0xd321, 0x33c3), (0xd322, 0x2b24), (0xd323, 0x2b25),
    (0xd324, 0x2b2c), (0xd325, 0x33c4), (0xd326, 0x2b2d), (0xd327, 0x2b2e), (0xd328, 0x33c5), (0xd329, 0x33c6),
    (0xd32a, 0x2b2f), (0xd32b, 0x2b30), (0xd32c, 0x33c7), (0xd32d, 0x2b31), (0xd32e, 0x2b32), (0xd32f, 0x2b33),
    (0xd330, 0x33c8), (0xd331, 0x2b34), (0xd332, 0x2b35), (0xd333, 0x2b36), (0xd334, 0x2b37), (0xd335, 0x2b38),
    (0xd336, 0x2b39), (0xd337, 0x2b3a), (0xd338, 0x33c9), (0xd339, 0x33ca), (0xd33a, 0x2b3b), (0xd33b, 0x33cb),
    (0xd33c, 0x33cc), (0xd33d, 0x33cd), (0xd33e, 0x2b3c), (0xd33f, 0x2b3d), (0xd340, 0x2b3e), (0xd341, 0x2b3f),
    (0xd342, 0x2b40), (0xd343, 0x2b41), (0xd344, 0x33ce), (0xd345, 0x33cf), (0xd346, 0x2b42), (0xd347, 0x2b43),
    (0xd348, 0x2b44), (0xd349, 0x2b45), (0xd34a, 0x2b4c), (0xd34b, 0x2b4d), (0xd34c, 0x2b4e), (0xd34d, 0x2b4f),
    (0xd34e, 0x2b50), (0xd34f, 0x2b51), (0xd350, 0x2b52), (0xd351, 0x2b53), (0xd352, 0x2b54), (0xd353, 0x2b55),
    (0xd354, 0x2b56), (0xd355, 0x2b57), (0xd356, 0x2b58), (0xd357, 0x2b59), (0xd358, 0x2b5a), (0xd359, 0x2b5b),
    (0xd35a, 0x2b5c), (0xd35b, 0x2b5d), (0xd35c, 0x2b5e), (0xd35d, 0x2b5f), (0xd35e, 0x2b60), (0xd35f, 0x2b61),
    (0xd360, 0x2b62), (0xd361, 0x2b63), (0xd362, 0x2b64), (0xd363, 0x2b65), (0xd364, 0x2b66), (0xd365, 0x2b67),
    (0xd366, 0x2b68), (0xd367, 0x2b69), (0xd368, 0x2b6a), (0xd369, 0x2b6b), (0xd36a, 0x2bca), (0xd36b, 0x2bcb),
    (0xd36c, 0x2bcc), (0xd36d, 0x2bcd), (0xd36e, 0x2bce), (0xd36f, 0x2bcf), (0xd370, 0x2bd0), (0xd371, 0x2bd1),
    (0xd372, 0x2bd2), (0xd373, 0x2bd3), (0xd374, 0x2bd4), (0xd375, 0x2bd5), (0xd376, 0x2bd6), (0xd377, 0x2bd7),
    (0xd378, 0x2bd8), (0xd379, 0x2bd9), (0xd37a, 0x2bda), (0xd37b, 0x2bdb), (0xd37c, 0x33d0), (0xd37d, 0x33d1),
    (0xd37e, 0x2bdc), (0xd37f, 0x2bdd), (0xd380, 0x33d2), (0xd381, 0x2bde), (0xd382, 0x2bdf), (0xd383, 0x2be0),
    (0xd384, 0x33d3), (0xd385, 0x2be1), (0xd386, 0x2be2), (0xd387, 0x2be3), (0xd388, 0x2bea), (0xd389, 0x2beb),
    (0xd38a, 0x2bec), (0xd38b, 0x2bed), (0xd38c, 0x33d4), (0xd38d, 0x33d5), (0xd38e, 0x2bee), (0xd38f, 0x33d6),
    (0xd390, 0x33d7), (0xd391, 0x33d8), (0xd392, 0x2bef), (0xd393, 0x2bf0), (0xd394, 0x2bf1), (0xd395, 0x2bf2),
    (0xd396, 0x2bf3), (0xd397, 0x2bf4), (0xd398, 0x33d9), (0xd399, 0x33da), (0xd39a, 0x2bf5), (0xd39b, 0x2bf6),
    (0xd39c, 0x33db), (0xd39d, 0x2bf7), (0xd39e, 0x2bf8), (0xd39f, 0x2bf9), (0xd3a0, 0x33dc), (0xd3a1, 0x2bfa),
    (0xd3a2, 0x2bfb), (0xd3a3, 0x2bfc), (0xd3a4, 0x2bfd), (0xd3a5, 0x2bfe), (0xd3a6, 0x2bff), (0xd3a7, 0x2c00),
    (0xd3a8, 0x33dd), (0xd3a9, 0x33de), (0xd3aa, 0x2c01), (0xd3ab, 0x33df), (0xd3ac, 0x2c02), (0xd3ad, 0x33e0),
    (0xd3ae, 0x2c03), (0xd3af, 0x2c0a), (0xd3b0, 0x2c0b), (0xd3b1, 0x2c0c), (0xd3b2, 0x2c0d), (0xd3b3, 0x2c0e),
    (0xd3b4, 0x33e1), (0xd3b5, 0x2c0f), (0xd3b6, 0x2c10), (0xd3b7, 0x2c11), (0xd3b8, 0x33e2), (0xd3b9, 0x2c12),
    (0xd3ba, 0x2c13), (0xd3bb, 0x2c14), (0xd3bc, 0x33e3), (0xd3bd, 0x2c15), (0xd3be, 0x2c16), (0xd3bf, 0x2c17),
    (0xd3c0, 0x2c18), (0xd3c1, 0x2c19), (0xd3c2, 0x2c1a), (0xd3c3, 0x2c1b), (0xd3c4, 0x33e4), (0xd3c5, 0x33e5),
    (0xd3c6, 0x2c1c), (0xd3c7, 0x2c1d), (0xd3c8, 0x33e6), (0xd3c9, 0x33e7), (0xd3ca, 0x2c1e), (0xd3cb, 0x2c1f),
    (0xd3cc, 0x2c20), (0xd3cd, 0x2c21), (0xd3ce, 0x2c22), (0xd3cf, 0x2c23), (0xd3d0, 0x33e8), (0xd3d1, 0x2c24),
    (0xd3d2, 0x2c25), (0xd3d3, 0x2c26), (0xd3d4, 0x2c27), (0xd3d5, 0x2c28), (0xd3d6, 0x2c29), (0xd3d7, 0x2c88),
    (0xd3d8, 0x33e9), (0xd3d9, 0x2c89), (0xd3da, 0x2c8a), (0xd3db, 0x2c8b), (0xd3dc, 0x2c8c), (0xd3dd, 0x2c8d),
    (0xd3de, 0x2c8e), (0xd3df, 0x2c8f), (0xd3e0, 0x2c90), (0xd3e1, 0x33ea), (0xd3e2, 0x2c91), (0xd3e3, 0x33eb),
    (0xd3e4, 0x2c92), (0xd3e5, 0x2c93), (0xd3e6, 0x2c94), (0xd3e7, 0x2c95), (0xd3e8, 0x2c96), (0xd3e9, 0x2c97),
    (0xd3ea, 0x2c98), (0xd3eb, 0x2c99), (0xd3ec, 0x33ec), (0xd3ed, 0x33ed), (0xd3ee, 0x2c9a), (0xd3ef, 0x2c9b),
    (0xd3f0, 0x33ee), (0xd3f1, 0x2c9c), (0xd3f2, 0x2c9d), (0xd3f3, 0x2c9e), (0xd3f4, 0x33ef), (0xd3f5, 0x2c9f),
    (0xd3f6, 0x2ca0), (0xd3f7, 0x2ca1), (0xd3f8, 0x2ca8), (0xd3f9, 0x2ca9), (0xd3fa, 0x2caa), (0xd3fb, 0x2cab),
    (0xd3fc, 0x33f0), (0xd3fd, 0x33f1), (0xd3fe, 0x2cac), (0xd3ff, 0x33f2), (0xd400, 0x2cad), (0xd401, 0x33f3),
    (0xd402, 0x2cae), (0xd403, 0x2caf), (0xd404, 0x2cb0), (0xd405, 0x2cb1), (0xd406, 0x2cb2), (0xd407, 0x2cb3),
    (0xd408, 0x3454), (0xd409, 0x2cb4), (0xd40a, 0x2cb5), (0xd40b, 0x2cb6), (0xd40c, 0x2cb7), (0xd40d, 0x2cb8),
    (0xd40e, 0x2cb9), (0xd40f, 0x2cba), (0xd410, 0x2cbb), (0xd411, 0x2cbc), (0xd412, 0x2cbd), (0xd413, 0x2cbe),
    (0xd414, 0x2cbf), (0xd415, 0x2cc0), (0xd416, 0x2cc1), (0xd417, 0x2cc8), (0xd418, 0x2cc9), (0xd419, 0x2cca),
    (0xd41a, 0x2ccb), (0xd41b, 0x2ccc), (0xd41c, 0x2ccd), (0xd41d, 0x3455), (0xd41e, 0x2cce), (0xd41f, 0x2ccf),
    (0xd420, 0x2cd0), (0xd421, 0x2cd1), (0xd422, 0x2cd2), (0xd423, 0x2cd3), (0xd424, 0x2cd4), (0xd425, 0x2cd5),
    (0xd426, 0x2cd6), (0xd427, 0x2cd7), (0xd428, 0x2cd8), (0xd429, 0x2cd9), (0xd42a, 0x2cda), (0xd42b, 0x2cdb),
    (0xd42c, 0x2cdc), (0xd42d, 0x2cdd), (0xd42e, 0x2cde), (0xd42f, 0x2cdf), (0xd430, 0x2ce0), (0xd431, 0x2ce1),
    (0xd432, 0x2ce2), (0xd433, 0x2ce3), (0xd434, 0x2ce4), (0xd435, 0x2ce5), (0xd436, 0x2ce6), (0xd437, 0x2ce7),
    (0xd438, 0x2d46), (0xd439, 0x2d47), (0xd43a, 0x2d48), (0xd43b, 0x2d49), (0xd43c, 0x2d4a), (0xd43d, 0x2d4b),
    (0xd43e, 0x2d4c), (0xd43f, 0x2d4d), (0xd440, 0x3456), (0xd441, 0x2d4e), (0xd442, 0x2d4f), (0xd443, 0x2d50),
    (0xd444, 0x3457), (0xd445, 0x2d51), (0xd446, 0x2d52), (0xd447, 0x2d53), (0xd448, 0x2d54), (0xd449, 0x2d55),
    (0xd44a, 0x2d56), (0xd44b, 0x2d57), (0xd44c, 0x2d58), (0xd44d, 0x2d59), (0xd44e, 0x2d5a), (0xd44f, 0x2d5b),
    (0xd450, 0x2d5c), (0xd451, 0x2d5d), (0xd452, 0x2d5e), (0xd453, 0x2d5f), (0xd454, 0x2d66), (0xd455, 0x2d67),
    (0xd456, 0x2d68), (0xd457, 0x2d69), (0xd458, 0x2d6a), (0xd459, 0x2d6b), (0xd45a, 0x2d6c), (0xd45b, 0x2d6d),
    (0xd45c, 0x3458), (0xd45d, 0x2d6e), (0xd45e, 0x2d6f), (0xd45f, 0x2d70), (0xd460, 0x3459), (0xd461, 0x2d71),
    (0xd462, 0x2d72), (0xd463, 0x2d73), (0xd464, 0x345a), (0xd465, 0x2d74), (0xd466, 0x2d75), (0xd467, 0x2d76),
    (0xd468, 0x2d77), (0xd469, 0x2d78), (0xd46a, 0x2d79), (0xd46b, 0x2d7a), (0xd46c, 0x2d7b), (0xd46d, 0x345b),
    (0xd46e, 0x2d7c), (0xd46f, 0x345c), (0xd470, 0x2d7d), (0xd471, 0x2d7e), (0xd472, 0x2d7f), (0xd473, 0x2d86),
    (0xd474, 0x2d87), (0xd475, 0x2d88), (0xd476, 0x2d89), (0xd477, 0x2d8a), (0xd478, 0x345d), (0xd479, 0x345e),
    (0xd47a, 0x2d8b), (0xd47b, 0x2d8c), (0xd47c, 0x345f), (0xd47d, 0x2d8d), (0xd47e, 0x2d8e), (0xd47f, 0x3460),
    (0xd480, 0x3461), (0xd481, 0x2d8f), (0xd482, 0x3462), (0xd483, 0x2d90), (0xd484, 0x2d91), (0xd485, 0x2d92),
    (0xd486, 0x2d93), (0xd487, 0x2d94), (0xd488, 0x3463), (0xd489, 0x3464), (0xd48a, 0x2d95), (0xd48b, 0x3465),
    (0xd48c, 0x2d96), (0xd48d, 0x3466), (0xd48e, 0x2d97), (0xd48f, 0x2d98), (0xd490, 0x2d99), (0xd491, 0x2d9a),
    (0xd492, 0x2d9b), (0xd493, 0x2d9c), (0xd494, 0x3467), (0xd495, 0x2d9d), (0xd496, 0x2d9e), (0xd497, 0x2d9f),
    (0xd498, 0x2da0), (0xd499, 0x2da1), (0xd49a, 0x2da2), (0xd49b, 0x2da3), (0xd49c, 0x2da4), (0xd49d, 0x2da5),
    (0xd49e, 0x2e04), (0xd49f, 0x2e05), (0xd4a0, 0x2e06), (0xd4a1, 0x2e07), (0xd4a2, 0x2e08), (0xd4a3, 0x2e09),
    (0xd4a4, 0x2e0a), (0xd4a5, 0x2e0b), (0xd4a6, 0x2e0c), (0xd4a7, 0x2e0d), (0xd4a8, 0x2e0e), (0xd4a9, 0x3468),
    (0xd4aa, 0x2e0f), (0xd4ab, 0x2e10), (0xd4ac, 0x2e11), (0xd4ad, 0x2e12), (0xd4ae, 0x2e13), (0xd4af, 0x2e14),
    (0xd4b0, 0x2e15), (0xd4b1, 0x2e16), (0xd4b2, 0x2e17), (0xd4b3, 0x2e18), (0xd4b4, 0x2e19), (0xd4b5, 0x2e1a),
    (0xd4b6, 0x2e1b), (0xd4b7, 0x2e1c), (0xd4b8, 0x2e1d), (0xd4b9, 0x2e24), (0xd4ba, 0x2e25), (0xd4bb, 0x2e26),
    (0xd4bc, 0x2e27), (0xd4bd, 0x2e28), (0xd4be, 0x2e29), (0xd4bf, 0x2e2a), (0xd4c0, 0x2e2b), (0xd4c1, 0x2e2c),
    (0xd4c2, 0x2e2d), (0xd4c3, 0x2e2e), (0xd4c4, 0x2e2f), (0xd4c5, 0x2e30), (0xd4c6, 0x2e31), (0xd4c7, 0x2e32),
    (0xd4c8, 0x2e33), (0xd4c9, 0x2e34), (0xd4ca, 0x2e35), (0xd4cb, 0x2e36), (0xd4cc, 0x3469), (0xd4cd, 0x2e37),
    (0xd4ce, 0x2e38), (0xd4cf, 0x2e39), (0xd4d0, 0x346a), (0xd4d1, 0x2e3a), (0xd4d2, 0x2e3b), (0xd4d3, 0x2e3c),
    (0xd4d4, 0x346b), (0xd4d5, 0x2e3d), (0xd4d6, 0x2e44), (0xd4d7, 0x2e45), (0xd4d8, 0x2e46), (0xd4d9, 0x2e47),
    (0xd4da, 0x2e48), (0xd4db, 0x2e49), (0xd4dc, 0x346c), (0xd4dd, 0x2e4a), (0xd4de, 0x2e4b), (0xd4df, 0x346d),
    (0xd4e0, 0x2e4c), (0xd4e1, 0x2e4d), (0xd4e2, 0x2e4e), (0xd4e3, 0x2e4f), (0xd4e4, 0x2e50), (0xd4e5, 0x2e51),
    (0xd4e6, 0x2e52), (0xd4e7, 0x2e53), (0xd4e8, 0x346e), (0xd4e9, 0x2e54), (0xd4ea, 0x2e55), (0xd4eb, 0x2e56),
    (0xd4ec, 0x346f), (0xd4ed, 0x2e57), (0xd4ee, 0x2e58), (0xd4ef, 0x2e59), (0xd4f0, 0x3470), (0xd4f1, 0x2e5a),
    (0xd4f2, 0x2e5b), (0xd4f3, 0x2e5c), (0xd4f4, 0x2e5d), (0xd4f5, 0x2e5e), (0xd4f6, 0x2e5f), (0xd4f7, 0x2e60),
    (0xd4f8, 0x3471), (0xd4f9, 0x2e61), (0xd4fa, 0x2e62), (0xd4fb, 0x3472), (0xd4fc, 0x2e63), (0xd4fd, 0x3473),
    (0xd4fe, 0x2ec2), (0xd4ff, 0x2ec3), (0xd500, 0x2ec4), (0xd501, 0x2ec5), (0xd502, 0x2ec6), (0xd503, 0x2ec7),
    (0xd504, 0x3474), (0xd505, 0x2ec8), (0xd506, 0x2ec9), (0xd507, 0x2eca), (0xd508, 0x3475), (0xd509, 0x2ecb),
    (0xd50a, 0x2ecc), (0xd50b, 0x2ecd), (0xd50c, 0x3476), (0xd50d, 0x2ece), (0xd50e, 0x2ecf), (0xd50f, 0x2ed0),
    (0xd510, 0x2ed1), (0xd511, 0x2ed2), (0xd512, 0x2ed3), (0xd513, 0x2ed4), (0xd514, 0x3477), (0xd515, 0x3478),
    (0xd516, 0x2ed5), (0xd517, 0x3479), (0xd518, 0x2ed6), (0xd519, 0x2ed7), (0xd51a, 0x2ed8), (0xd51b, 0x2ed9),
    (0xd51c, 0x2eda), (0xd51d, 0x2edb), (0xd51e, 0x2ee2), (0xd51f, 0x2ee3), (0xd520, 0x2ee4), (0xd521, 0x2ee5),
    (0xd522, 0x2ee6), (0xd523, 0x2ee7), (0xd524, 0x2ee8), (0xd525, 0x2ee9), (0xd526, 0x2eea), (0xd527, 0x2eeb),
    (0xd528, 0x2eec), (0xd529, 0x2eed), (0xd52a, 0x2eee), (0xd52b, 0x2eef), (0xd52c, 0x2ef0), (0xd52d, 0x2ef1),
    (0xd52e, 0x2ef2), (0xd52f, 0x2ef3), (0xd530, 0x2ef4), (0xd531, 0x2ef5), (0xd532, 0x2ef6), (0xd533, 0x2ef7),
    (0xd534, 0x2ef8), (0xd535, 0x2ef9), (0xd536, 0x2efa), (0xd537, 0x2efb), (0xd538, 0x2f02), (0xd539, 0x2f03),
    (0xd53a, 0x2f04), (0xd53b, 0x2f05), (0xd53c, 0x347a), (0xd53d, 0x347b), (0xd53e, 0x2f06), (0xd53f, 0x2f07),
    (0xd540, 0x347c), (0xd541, 0x2f08), (0xd542, 0x2f09), (0xd543, 0x2f0a), (0xd544, 0x347d), (0xd545, 0x2f0b),
    (0xd546, 0x2f0c), (0xd547, 0x2f0d), (0xd548, 0x2f0e), (0xd549, 0x2f0f), (0xd54a, 0x2f10), (0xd54b, 0x2f11),
    (0xd54c, 0x347e), (0xd54d, 0x347f), (0xd54e, 0x2f12), (0xd54f, 0x3480), (0xd550, 0x2f13), (0xd551, 0x3481),
    (0xd552, 0x2f14), (0xd553, 0x2f15), (0xd554, 0x2f16), (0xd555, 0x2f17), (0xd556, 0x2f18), (0xd557, 0x2f19),
    (0xd558, 0x3482), (0xd559, 0x3483), (0xd55a, 0x2f1a), (0xd55b, 0x2f1b), (0xd55c, 0x3484), (0xd55d, 0x2f1c),
    (0xd55e, 0x2f1d), (0xd55f, 0x2f1e), (0xd560, 0x3485), (0xd561, 0x2f1f), (0xd562, 0x2f20), (0xd563, 0x2f21),
    (0xd564, 0x2f80), (0xd565, 0x3486), (0xd566, 0x2f81), (0xd567, 0x2f82), (0xd568, 0x3487), (0xd569, 0x3488),
    (0xd56a, 0x2f83), (0xd56b, 0x3489), (0xd56c, 0x2f84), (0xd56d, 0x348a), (0xd56e, 0x2f85), (0xd56f, 0x2f86),
    (0xd570, 0x2f87), (0xd571, 0x2f88), (0xd572, 0x2f89), (0xd573, 0x2f8a), (0xd574, 0x348b), (0xd575, 0x348c),
    (0xd576, 0x2f8b), (0xd577, 0x2f8c), (0xd578, 0x348d), (0xd579, 0x2f8d), (0xd57a, 0x2f8e), (0xd57b, 0x2f8f),
    (0xd57c, 0x348e), (0xd57d, 0x2f90), (0xd57e, 0x2f91), (0xd57f, 0x2f92), (0xd580, 0x2f93), (0xd581, 0x2f94),
    (0xd582, 0x2f95), (0xd583, 0x2f96), (0xd584, 0x348f), (0xd585, 0x3490), (0xd586, 0x2f97), (0xd587, 0x3491),
    (0xd588, 0x3492), (0xd589, 0x3493), (0xd58a, 0x2f98), (0xd58b, 0x2f99), (0xd58c, 0x2fa0), (0xd58d, 0x2fa1),
    (0xd58e, 0x2fa2), (0xd58f, 0x2fa3), (0xd590, 0x3494), (0xd591, 0x2fa4), (0xd592, 0x2fa5), (0xd593, 0x2fa6),
    (0xd594, 0x2fa7), (0xd595, 0x2fa8), (0xd596, 0x2fa9), (0xd597, 0x2faa), (0xd598, 0x2fab), (0xd599, 0x2fac),
    (0xd59a, 0x2fad), (0xd59b, 0x2fae), (0xd59c, 0x2faf), (0xd59d, 0x2fb0), (0xd59e, 0x2fb1), (0xd59f, 0x2fb2),
    (0xd5a0, 0x2fb3), (0xd5a1, 0x2fb4), (0xd5a2, 0x2fb5), (0xd5a3, 0x2fb6), (0xd5a4, 0x2fb7), (0xd5a5, 0x3495),
    (0xd5a6, 0x2fb8), (0xd5a7, 0x2fb9), (0xd5a8, 0x2fc0), (0xd5a9, 0x2fc1), (0xd5aa, 0x2fc2), (0xd5ab, 0x2fc3),
    (0xd5ac, 0x2fc4), (0xd5ad, 0x2fc5), (0xd5ae, 0x2fc6), (0xd5af, 0x2fc7), (0xd5b0, 0x2fc8), (0xd5b1, 0x2fc9),
    (0xd5b2, 0x2fca), (0xd5b3, 0x2fcb), (0xd5b4, 0x2fcc), (0xd5b5, 0x2fcd), (0xd5b6, 0x2fce), (0xd5b7, 0x2fcf),
    (0xd5b8, 0x2fd0), (0xd5b9, 0x2fd1), (0xd5ba, 0x2fd2), (0xd5bb, 0x2fd3), (0xd5bc, 0x2fd4), (0xd5bd, 0x2fd5),
    (0xd5be, 0x2fd6), (0xd5bf, 0x2fd7), (0xd5c0, 0x2fd8), (0xd5c1, 0x2fd9), (0xd5c2, 0x2fda), (0xd5c3, 0x2fdb),
    (0xd5c4, 0x2fdc), (0xd5c5, 0x2fdd), (0xd5c6, 0x2fde), (0xd5c7, 0x2fdf), (0xd5c8, 0x3496), (0xd5c9, 0x3497),
    (0xd5ca, 0x303e), (0xd5cb, 0x303f), (0xd5cc, 0x3498), (0xd5cd, 0x3040), (0xd5ce, 0x3041), (0xd5cf, 0x3042),
    (0xd5d0, 0x3499), (0xd5d1, 0x3043), (0xd5d2, 0x349a), (0xd5d3, 0x3044), (0xd5d4, 0x3045), (0xd5d5, 0x3046),
    (0xd5d6, 0x3047), (0xd5d7, 0x3048), (0xd5d8, 0x349b), (0xd5d9, 0x349c), (0xd5da, 0x3049), (0xd5db, 0x349d),
    (0xd5dc, 0x304a), (0xd5dd, 0x349e), (0xd5de, 0x304b), (0xd5df, 0x304c), (0xd5e0, 0x304d), (0xd5e1, 0x304e),
    (0xd5e2, 0x304f), (0xd5e3, 0x3050), (0xd5e4, 0x349f), (0xd5e5, 0x34a0), (0xd5e6, 0x3051), (0xd5e7, 0x3052),
    (0xd5e8, 0x34a1), (0xd5e9, 0x3053), (0xd5ea, 0x3054), (0xd5eb, 0x3055), (0xd5ec, 0x34a2), (0xd5ed, 0x3056),
    (0xd5ee, 0x3057), (0xd5ef, 0x305e), (0xd5f0, 0x305f), (0xd5f1, 0x3060), (0xd5f2, 0x3061), (0xd5f3, 0x3062),
    (0xd5f4, 0x34a3), (0xd5f5, 0x34a4), (0xd5f6, 0x3063), (0xd5f7, 0x34a5), (0xd5f8, 0x3064), (0xd5f9, 0x34a6),
    (0xd5fa, 0x3065), (0xd5fb, 0x3066), (0xd5fc, 0x3067), (0xd5fd, 0x3068), (0xd5fe, 0x3069), (0xd5ff, 0x306a),
    (0xd600, 0x34a7), (0xd601, 0x34a8), (0xd602, 0x306b), (0xd603, 0x306c), (0xd604, 0x34a9), (0xd605, 0x306d),
    (0xd606, 0x306e), (0xd607, 0x306f), (0xd608, 0x34aa), (0xd609, 0x3070), (0xd60a, 0x3071), (0xd60b, 0x3072),
    (0xd60c, 0x3073), (0xd60d, 0x3074), (0xd60e, 0x3075), (0xd60f, 0x3076), (0xd610, 0x34ab), (0xd611, 0x34ac),
    (0xd612, 0x3077), (0xd613, 0x34ad), (0xd614, 0x34ae), (0xd615, 0x34af), (0xd616, 0x307e), (0xd617, 0x307f),
    (0xd618, 0x3080), (0xd619, 0x3081), (0xd61a, 0x3082), (0xd61b, 0x3083), (0xd61c, 0x34b0), (0xd61d, 0x3084),
    (0xd61e, 0x3085), (0xd61f, 0x3086), (0xd620, 0x34b1), (0xd621, 0x3087), (0xd622, 0x3088), (0xd623, 0x3089),
    (0xd624, 0x3512), (0xd625, 0x308a), (0xd626, 0x308b), (0xd627, 0x308c), (0xd628, 0x308d), (0xd629, 0x308e),
    (0xd62a, 0x308f), (0xd62b, 0x3090), (0xd62c, 0x3091), (0xd62d, 0x3513), (0xd62e, 0x3092), (0xd62f, 0x3093),
    (0xd630, 0x3094), (0xd631, 0x3095), (0xd632, 0x3096), (0xd633, 0x3097), (0xd634, 0x3098), (0xd635, 0x3099),
    (0xd636, 0x309a), (0xd637, 0x309b), (0xd638, 0x3514), (0xd639, 0x3515), (0xd63a, 0x309c), (0xd63b, 0x309d),
    (0xd63c, 0x3516), (0xd63d, 0x30fc), (0xd63e, 0x30fd), (0xd63f, 0x30fe), (0xd640, 0x3517), (0xd641, 0x30ff),
    (0xd642, 0x3100), (0xd643, 0x3101), (0xd644, 0x3102), (0xd645, 0x3518), (0xd646, 0x3103), (0xd647, 0x3104),
    (0xd648, 0x3519), (0xd649, 0x351a), (0xd64a, 0x3105), (0xd64b, 0x351b), (0xd64c, 0x3106), (0xd64d, 0x351c),
    (0xd64e, 0x3107), (0xd64f, 0x3108), (0xd650, 0x3109), (0xd651, 0x351d), (0xd652, 0x310a), (0xd653, 0x310b),
    (0xd654, 0x351e), (0xd655, 0x351f), (0xd656, 0x310c), (0xd657, 0x310d), (0xd658, 0x3520), (0xd659, 0x310e),
    (0xd65a, 0x310f), (0xd65b, 0x3110), (0xd65c, 0x3521), (0xd65d, 0x3111), (0xd65e, 0x3112), (0xd65f, 0x3113),
    (0xd660, 0x3114), (0xd661, 0x3115), (0xd662, 0x311c), (0xd663, 0x311d), (0xd664, 0x311e), (0xd665, 0x311f),
    (0xd666, 0x3120), (0xd667, 0x3522), (0xd668, 0x3121), (0xd669, 0x3523), (0xd66a, 0x3122), (0xd66b, 0x3123),
    (0xd66c, 0x3124), (0xd66d, 0x3125), (0xd66e, 0x3126), (0xd66f, 0x3127), (0xd670, 0x3524), (0xd671, 0x3525),
    (0xd672, 0x3128), (0xd673, 0x3129), (0xd674, 0x3526), (0xd675, 0x312a), (0xd676, 0x312b), (0xd677, 0x312c),
    (0xd678, 0x312d), (0xd679, 0x312e), (0xd67a, 0x312f), (0xd67b, 0x3130), (0xd67c, 0x3131), (0xd67d, 0x3132),
    (0xd67e, 0x3133), (0xd67f, 0x3134), (0xd680, 0x3135), (0xd681, 0x313c), (0xd682, 0x313d), (0xd683, 0x3527),
    (0xd684, 0x313e), (0xd685, 0x3528), (0xd686, 0x313f), (0xd687, 0x3140), (0xd688, 0x3141), (0xd689, 0x3142),
    (0xd68a, 0x3143), (0xd68b, 0x3144), (0xd68c, 0x3529), (0xd68d, 0x352a), (0xd68e, 0x3145), (0xd68f, 0x3146),
    (0xd690, 0x352b), (0xd691, 0x3147), (0xd692, 0x3148), (0xd693, 0x3149), (0xd694, 0x352c), (0xd695, 0x314a),
    (0xd696, 0x314b), (0xd697, 0x314c), (0xd698, 0x314d), (0xd699, 0x314e), (0xd69a, 0x314f), (0xd69b, 0x3150),
    (0xd69c, 0x3151), (0xd69d, 0x352d), (0xd69e, 0x3152), (0xd69f, 0x352e), (0xd6a0, 0x3153), (0xd6a1, 0x352f),
    (0xd6a2, 0x3154), (0xd6a3, 0x3155), (0xd6a4, 0x3156), (0xd6a5, 0x3157), (0xd6a6, 0x3158), (0xd6a7, 0x3159),
    (0xd6a8, 0x3530), (0xd6a9, 0x315a), (0xd6aa, 0x315b), (0xd6ab, 0x31ba), (0xd6ac, 0x3531), (0xd6ad, 0x31bb),
    (0xd6ae, 0x31bc), (0xd6af, 0x31bd), (0xd6b0, 0x3532), (0xd6b1, 0x31be), (0xd6b2, 0x31bf), (0xd6b3, 0x31c0),
    (0xd6b4, 0x31c1), (0xd6b5, 0x31c2), (0xd6b6, 0x31c3), (0xd6b7, 0x31c4), (0xd6b8, 0x31c5), (0xd6b9, 0x3533),
    (0xd6ba, 0x31c6), (0xd6bb, 0x3534), (0xd6bc, 0x31c7), (0xd6bd, 0x31c8), (0xd6be, 0x31c9), (0xd6bf, 0x31ca),
    (0xd6c0, 0x31cb), (0xd6c1, 0x31cc), (0xd6c2, 0x31cd), (0xd6c3, 0x31ce), (0xd6c4, 0x3535), (0xd6c5, 0x3536),
    (0xd6c6, 0x31cf), (0xd6c7, 0x31d0), (0xd6c8, 0x3537), (0xd6c9, 0x31d1), (0xd6ca, 0x31d2), (0xd6cb, 0x31d3),
    (0xd6cc, 0x3538), (0xd6cd, 0x31da), (0xd6ce, 0x31db), (0xd6cf, 0x31dc), (0xd6d0, 0x31dd), (0xd6d1, 0x3539),
    (0xd6d2, 0x31de), (0xd6d3, 0x31df), (0xd6d4, 0x353a), (0xd6d5, 0x31e0), (0xd6d6, 0x31e1), (0xd6d7, 0x353b),
    (0xd6d8, 0x31e2), (0xd6d9, 0x353c), (0xd6da, 0x31e3), (0xd6db, 0x31e4), (0xd6dc, 0x31e5), (0xd6dd, 0x31e6),
    (0xd6de, 0x31e7), (0xd6df, 0x31e8), (0xd6e0, 0x353d), (0xd6e1, 0x31e9), (0xd6e2, 0x31ea), (0xd6e3, 0x31eb),
    (0xd6e4, 0x353e), (0xd6e5, 0x31ec), (0xd6e6, 0x31ed), (0xd6e7, 0x31ee), (0xd6e8, 0x353f), (0xd6e9, 0x31ef),
    (0xd6ea, 0x31f0), (0xd6eb, 0x31f1), (0xd6ec, 0x31f2), (0xd6ed, 0x31f3), (0xd6ee, 0x31fa), (0xd6ef, 0x31fb),
    (0xd6f0, 0x3540), (0xd6f1, 0x31fc), (0xd6f2, 0x31fd), (0xd6f3, 0x31fe), (0xd6f4, 0x31ff), (0xd6f5, 0x3541),
    (0xd6f6, 0x3200), (0xd6f7, 0x3201), (0xd6f8, 0x3202), (0xd6f9, 0x3203), (0xd6fa, 0x3204), (0xd6fb, 0x3205),
    (0xd6fc, 0x3542), (0xd6fd, 0x3543), (0xd6fe, 0x3206), (0xd6ff, 0x3207), (0xd700, 0x3544), (0xd701, 0x3208),
    (0xd702, 0x3209), (0xd703, 0x320a), (0xd704, 0x3545), (0xd705, 0x320b), (0xd706, 0x320c), (0xd707, 0x320d),
    (0xd708, 0x320e), (0xd709, 0x320f), (0xd70a, 0x3210), (0xd70b, 0x3211), (0xd70c, 0x3212), (0xd70d, 0x3213),
    (0xd70e, 0x3214), (0xd70f, 0x3215), (0xd710, 0x3216), (0xd711, 0x3546), (0xd712, 0x3217), (0xd713, 0x3218),
    (0xd714, 0x3219), (0xd715, 0x3278), (0xd716, 0x3279), (0xd717, 0x327a), (0xd718, 0x3547), (0xd719, 0x3548),
    (0xd71a, 0x327b), (0xd71b, 0x327c), (0xd71c, 0x3549), (0xd71d, 0x327d), (0xd71e, 0x327e), (0xd71f, 0x327f),
    (0xd720, 0x354a), (0xd721, 0x3280), (0xd722, 0x3281), (0xd723, 0x3282), (0xd724, 0x3283), (0xd725, 0x3284),
    (0xd726, 0x3285), (0xd727, 0x3286), (0xd728, 0x354b), (0xd729, 0x354c), (0xd72a, 0x3287), (0xd72b, 0x354d),
    (0xd72c, 0x3288), (0xd72d, 0x354e), (0xd72e, 0x3289), (0xd72f, 0x328a), (0xd730, 0x328b), (0xd731, 0x328c),
    (0xd732, 0x328d), (0xd733, 0x328e), (0xd734, 0x354f), (0xd735, 0x3550), (0xd736, 0x328f), (0xd737, 0x3290),
    (0xd738, 0x3551), (0xd739, 0x3291), (0xd73a, 0x3298), (0xd73b, 0x3299), (0xd73c, 0x3552), (0xd73d, 0x329a),
    (0xd73e, 0x329b), (0xd73f, 0x329c), (0xd740, 0x329d), (0xd741, 0x329e), (0xd742, 0x329f), (0xd743, 0x32a0),
    (0xd744, 0x3553), (0xd745, 0x32a1), (0xd746, 0x32a2), (0xd747, 0x3554), (0xd748, 0x32a3), (0xd749, 0x3555),
    (0xd74a, 0x32a4), (0xd74b, 0x32a5), (0xd74c, 0x32a6), (0xd74d, 0x32a7), (0xd74e, 0x32a8), (0xd74f, 0x32a9),
    (0xd750, 0x3556), (0xd751, 0x3557), (0xd752, 0x32aa), (0xd753, 0x32ab), (0xd754, 0x3558), (0xd755, 0x32ac),
    (0xd756, 0x3559), (0xd757, 0x355a), (0xd758, 0x355b), (0xd759, 0x355c), (0xd75a, 0x32ad), (0xd75b, 0x32ae),
    (0xd75c, 0x32af), (0xd75d, 0x32b0), (0xd75e, 0x32b1), (0xd75f, 0x32b8), (0xd760, 0x355d), (0xd761, 0x355e),
    (0xd762, 0x32b9), (0xd763, 0x355f), (0xd764, 0x32ba), (0xd765, 0x3560), (0xd766, 0x32bb), (0xd767, 0x32bc),
    (0xd768, 0x32bd), (0xd769, 0x3561), (0xd76a, 0x32be), (0xd76b, 0x32bf), (0xd76c, 0x3562), (0xd76d, 0x32c0),
    (0xd76e, 0x32c1), (0xd76f, 0x32c2), (0xd770, 0x3563), (0xd771, 0x32c3), (0xd772, 0x32c4), (0xd773, 0x32c5),
    (0xd774, 0x3564), (0xd775, 0x32c6), (0xd776, 0x32c7), (0xd777, 0x32c8), (0xd778, 0x32c9), (0xd779, 0x32ca),
    (0xd77a, 0x32cb), (0xd77b, 0x32cc), (0xd77c, 0x3565), (0xd77d, 0x3566), (0xd77e, 0x32cd), (0xd77f, 0x32ce),
    (0xd780, 0x32cf), (0xd781, 0x3567), (0xd782, 0x32d0), (0xd783, 0x32d1), (0xd784, 0x32d2), (0xd785, 0x32d3),
    (0xd786, 0x32d4), (0xd787, 0x32d5), (0xd788, 0x3568), (0xd789, 0x3569), (0xd78a, 0x32d6), (0xd78b, 0x32d7),
    (0xd78c, 0x356a), (0xd78d, 0x3336), (0xd78e, 0x3337), (0xd78f, 0x3338), (0xd790, 0x356b), (0xd791, 0x3339),
    (0xd792, 0x333a), (0xd793, 0x333b), (0xd794, 0x333c), (0xd795, 0x333d), (0xd796, 0x333e), (0xd797, 0x333f),
    (0xd798, 0x356c), (0xd799, 0x356d), (0xd79a, 0x3340), (0xd79b, 0x356e), (0xd79c, 0x3341), (0xd79d, 0x356f),
    (0xd79e, 0x3342), (0xd79f, 0x3343), (0xd7a0, 0x3344), (0xd7a1, 0x3345), (0xd7a2, 0x3346), (0xd7a3, 0x3347),
    (0xf900, 0x377b), (0xf901, 0x3781), (0xf902, 0x3792), (0xf903, 0x38f6), (0xf904, 0x390f), (0xf905, 0x3992),
    (0xf906, 0x3a9e), (0xf907, 0x3b03), (0xf908, 0x3b19), (0xf909, 0x3b31), (0xf90a, 0x3b3e), (0xf90b, 0x3bf3),
    (0xf90c, 0x3bf4), (0xf90d, 0x3bf7), (0xf90e, 0x3bfa), (0xf90f, 0x3bfb), (0xf910, 0x3bfc), (0xf911, 0x3bfd),
    (0xf912, 0x3bfe), (0xf913, 0x3bff), (0xf914, 0x3c01), (0xf915, 0x3c02), (0xf916, 0x3c03), (0xf917, 0x3c04),
    (0xf918, 0x3c05), (0xf919, 0x3c07), (0xf91a, 0x3c08), (0xf91b, 0x3c09), (0xf91c, 0x3c0a), (0xf91d, 0x3c0c),
    (0xf91e, 0x3c0e), (0xf91f, 0x3c0f), (0xf920, 0x3c11), (0xf921, 0x3c15), (0xf922, 0x3c19), (0xf923, 0x3c1b),
    (0xf924, 0x3c1c), (0xf925, 0x3c1d), (0xf926, 0x3c7f), (0xf927, 0x3c80), (0xf928, 0x3c84), (0xf929, 0x3c85),
    (0xf92a, 0x3c86), (0xf92b, 0x3c87), (0xf92c, 0x3c88), (0xf92d, 0x3c8a), (0xf92e, 0x3c8f), (0xf92f, 0x3c9b),
    (0xf930, 0x3c9f), (0xf931, 0x3ca0), (0xf932, 0x3ca1), (0xf933, 0x3ca3), (0xf934, 0x3ca4), (0xf935, 0x3ca5),
    (0xf936, 0x3ca6), (0xf937, 0x3ca7), (0xf938, 0x3ca8), (0xf939, 0x3caa), (0xf93a, 0x3cab), (0xf93b, 0x3cac),
    (0xf93c, 0x3cad), (0xf93d, 0x3cae), (0xf93e, 0x3caf), (0xf93f, 0x3cb0), (0xf940, 0x3cb1), (0xf941, 0x3cb2),
    (0xf942, 0x3cb3), (0xf943, 0x3cb4), (0xf944, 0x3cb6), (0xf945, 0x3cb7), (0xf946, 0x3cbb), (0xf947, 0x3cbc),
    (0xf948, 0x3cbe), (0xf949, 0x3cbf), (0xf94a, 0x3cc1), (0xf94b, 0x3cc2), (0xf94c, 0x3cc3), (0xf94d, 0x3cc4),
    (0xf94e, 0x3cc5), (0xf94f, 0x3cc6), (0xf950, 0x3cc7), (0xf951, 0x3cc8), (0xf952, 0x3ccd), (0xf953, 0x3cce),
    (0xf954, 0x3ccf), (0xf955, 0x3cd0), (0xf956, 0x3cd1), (0xf957, 0x3cd2), (0xf958, 0x3cd4), (0xf959, 0x3cd5),
    (0xf95a, 0x3e3f), (0xf95b, 0x3e55), (0xf95c, 0x3ebc), (0xf95d, 0x3ec2), (0xf95e, 0x3ec5), (0xf95f, 0x3f8d),
    (0xf960, 0x3fa2), (0xf961, 0x405e), (0xf962, 0x4077), (0xf963, 0x4350), (0xf964, 0x436f), (0xf965, 0x43ee),
    (0xf966, 0x44ac), (0xf967, 0x44dc), (0xf968, 0x44fb), (0xf969, 0x45c1), (0xf96a, 0x45c3), (0xf96b, 0x4636),
    (0xf96c, 0x4664), (0xf96d, 0x466b), (0xf96e, 0x4732), (0xf96f, 0x47ac), (0xf970, 0x47ec), (0xf971, 0x4970),
    (0xf972, 0x49da), (0xf973, 0x49e2), (0xf974, 0x4aa5), (0xf975, 0x4aa8), (0xf976, 0x4aa9), (0xf977, 0x4ab0),
    (0xf978, 0x4ab2), (0xf979, 0x4ab3), (0xf97a, 0x4abb), (0xf97b, 0x4ac5), (0xf97c, 0x4ac7), (0xf97d, 0x4ac9),
    (0xf97e, 0x4acd), (0xf97f, 0x4af1), (0xf980, 0x4af2), (0xf981, 0x4af3), (0xf982, 0x4af5), (0xf983, 0x4b56),
    (0xf984, 0x4b59), (0xf985, 0x4b5c), (0xf986, 0x4b62), (0xf987, 0x4b64), (0xf988, 0x4b65), (0xf989, 0x4b66),
    (0xf98a, 0x4b68), (0xf98b, 0x4b6c), (0xf98c, 0x4b6d), (0xf98d, 0x4b71), (0xf98e, 0x4b79), (0xf98f, 0x4b7b),
    (0xf990, 0x4b7c), (0xf991, 0x4b7f), (0xf992, 0x4b87), (0xf993, 0x4b8b), (0xf994, 0x4b8e), (0xf995, 0x4b91),
    (0xf996, 0x4b94), (0xf997, 0x4b96), (0xf998, 0x4b99), (0xf999, 0x4b9a), (0xf99a, 0x4b9b), (0xf99b, 0x4b9d),
    (0xf99c, 0x4b9f), (0xf99d, 0x4ba0), (0xf99e, 0x4ba1), (0xf99f, 0x4ba4), (0xf9a0, 0x4ba6), (0xf9a1, 0x4ba7),
    (0xf9a2, 0x4baa), (0xf9a3, 0x4bab), (0xf9a4, 0x4bac), (0xf9a5, 0x4bae), (0xf9a6, 0x4c14), (0xf9a7, 0x4c19),
    (0xf9a8, 0x4c1c), (0xf9a9, 0x4c1d), (0xf9aa, 0x4c1f), (0xf9ab, 0x4c20), (0xf9ac, 0x4c23), (0xf9ad, 0x4c32),
    (0xf9ae, 0x4c34), (0xf9af, 0x4c39), (0xf9b0, 0x4c3a), (0xf9b1, 0x4c3e), (0xf9b2, 0x4c40), (0xf9b3, 0x4c42),
    (0xf9b4, 0x4c43), (0xf9b5, 0x4c46), (0xf9b6, 0x4c52), (0xf9b7, 0x4c57), (0xf9b8, 0x4c59), (0xf9b9, 0x4c6a),
    (0xf9ba, 0x4d18), (0xf9bb, 0x4d19), (0xf9bc, 0x4d21), (0xf9bd, 0x4d22), (0xf9be, 0x4d28), (0xf9bf, 0x4d2a),
    (0xf9c0, 0x4d2c), (0xf9c1, 0x4d2f), (0xf9c2, 0x4d96), (0xf9c3, 0x4d9b), (0xf9c4, 0x4dbb), (0xf9c5, 0x4de6),
    (0xf9c6, 0x4e6e), (0xf9c7, 0x4e92), (0xf9c8, 0x4ea1), (0xf9c9, 0x4ea4), (0xf9ca, 0x4ea9), (0xf9cb, 0x4eab),
    (0xf9cc, 0x4f0f), (0xf9cd, 0x4f12), (0xf9ce, 0x4f14), (0xf9cf, 0x4f15), (0xf9d0, 0x4f25), (0xf9d1, 0x4f26),
    (0xf9d2, 0x4f28), (0xf9d3, 0x4f2c), (0xf9d4, 0x4f2d), (0xf9d5, 0x4f31), (0xf9d6, 0x4f32), (0xf9d7, 0x4f37),
    (0xf9d8, 0x4f3a), (0xf9d9, 0x4f3b), (0xf9da, 0x4f3c), (0xf9db, 0x4f3d), (0xf9dc, 0x4f43), (0xf9dd, 0x4fcf),
    (0xf9de, 0x4fd0), (0xf9df, 0x4fd3), (0xf9e0, 0x4fd8), (0xf9e1, 0x4fd9), (0xf9e2, 0x4fda), (0xf9e3, 0x4fdb),
    (0xf9e4, 0x4fde), (0xf9e5, 0x4fe1), (0xf9e6, 0x4fe3), (0xf9e7, 0x4fe9), (0xf9e8, 0x4fea), (0xf9e9, 0x4fee),
    (0xf9ea, 0x4fef), (0xf9eb, 0x4ff2), (0xf9ec, 0x4ff3), (0xf9ed, 0x4ffe), (0xf9ee, 0x5006), (0xf9ef, 0x5007),
    (0xf9f0, 0x500a), (0xf9f1, 0x500d), (0xf9f2, 0x5010), (0xf9f3, 0x5011), (0xf9f4, 0x5020), (0xf9f5, 0x5021),
    (0xf9f6, 0x5023), (0xf9f7, 0x5088), (0xf9f8, 0x5089), (0xf9f9, 0x508a), (0xf9fa, 0x50d5), (0xf9fb, 0x5180),
    (0xf9fc, 0x545a), (0xf9fd, 0x5497), (0xf9fe, 0x550c), (0xf9ff, 0x55c0), (0xfa00, 0x5607), (0xfa01, 0x5789),
    (0xfa02, 0x578b), (0xfa03, 0x580b), (0xfa04, 0x581b), (0xfa05, 0x5826), (0xfa06, 0x58ec), (0xfa07, 0x5901),
    (0xfa08, 0x5a2e), (0xfa09, 0x5a2f), (0xfa0a, 0x5a73), (0xfa0b, 0x5bb2), (0xff01, 0x199c), (0xff02, 0x199d),
    (0xff03, 0x199e), (0xff04, 0x199f), (0xff05, 0x19a0), (0xff06, 0x19a1), (0xff07, 0x19a2), (0xff08, 0x19a3),
    (0xff09, 0x19a4), (0xff0a, 0x19a5), (0xff0b, 0x19a6), (0xff0c, 0x19a7), (0xff0d, 0x19a8), (0xff0e, 0x19a9),
    (0xff0f, 0x19aa), (0xff10, 0x19ab), (0xff11, 0x19ac), (0xff12, 0x19ad), (0xff13, 0x19ae), (0xff14, 0x19af),
    (0xff15, 0x19b0), (0xff16, 0x19b1), (0xff17, 0x19b2), (0xff18, 0x19b3), (0xff19, 0x19b4), (0xff1a, 0x19b5),
    (0xff1b, 0x19b6), (0xff1c, 0x19b7), (0xff1d, 0x19b8), (0xff1e, 0x19b9), (0xff1f, 0x19ba), (0xff20, 0x19bb),
    (0xff21, 0x19bc), (0xff22, 0x19bd), (0xff23, 0x19be), (0xff24, 0x19bf), (0xff25, 0x19c0), (0xff26, 0x19c1),
    (0xff27, 0x19c2), (0xff28, 0x19c3), (0xff29, 0x19c4), (0xff2a, 0x19c5), (0xff2b, 0x19c6), (0xff2c, 0x19c7),
    (0xff2d, 0x19c8), (0xff2e, 0x19c9), (0xff2f, 0x19ca), (0xff30, 0x19cb), (0xff31, 0x19cc), (0xff32, 0x19cd),
    (0xff33, 0x19ce), (0xff34, 0x19cf), (0xff35, 0x19d0), (0xff36, 0x19d1), (0xff37, 0x19d2), (0xff38, 0x19d3),
    (0xff39, 0x19d4), (0xff3a, 0x19d5), (0xff3b, 0x19d6), (0xff3c, 0x182b), (0xff3d, 0x19d8), (0xff3e, 0x19d9),
    (0xff3f, 0x19da), (0xff40, 0x19db), (0xff41, 0x19dc), (0xff42, 0x19dd), (0xff43, 0x19de), (0xff44, 0x19df),
    (0xff45, 0x19e0), (0xff46, 0x19e1), (0xff47, 0x19e2), (0xff48, 0x19e3), (0xff49, 0x19e4), (0xff4a, 0x19e5),
    (0xff4b, 0x19e6), (0xff4c, 0x19e7), (0xff4d, 0x19e8), (0xff4e, 0x19e9), (0xff4f, 0x19ea), (0xff50, 0x19eb),
    (0xff51, 0x19ec), (0xff52, 0x19ed), (0xff53, 0x19ee), (0xff54, 0x19ef), (0xff55, 0x19f0), (0xff56, 0x19f1),
    (0xff57, 0x19f2), (0xff58, 0x19f3), (0xff59, 0x19f4), (0xff5a, 0x19f5), (0xff5b, 0x19f6), (0xff5c, 0x19f7),
    (0xff5d, 0x19f8), (0xff5e, 0x18e3), (0xffe0, 0x184a), (0xffe1, 0x184b), (0xffe2, 0x187d), (0xffe3, 0x19f9),
    (0xffe5, 0x184c), (0xffe6, 0x19d7),
];

