// Generated by tools/gen_tables.py. Do not edit by hand.

pub static BIG5: [(u16, u32); 18398] = [
    (0x03ae, 0x043f0), (0x03af, 0x04c32), (0x03b0, 0x04603), (0x03b1, 0x045a6), (0x03b2, 0x04578), (0x03b3, 0x27267),
    (0x03b4, 0x04d77), (0x03b5, 0x045b3), (0x03b6, 0x27cb1), (0x03b7, 0x04ce2), (0x03b8, 0x27cc5), (0x03b9, 0x03b95),
    (0x03ba, 0x04736), (0x03bb, 0x04744), (0x03bc, 0x04c47), (0x03bd, 0x04c40), (0x03be, 0x242bf), (0x03bf, 0x23617),
    (0x03c0, 0x27352), (0x03c1, 0x26e8b), (0x03c2, 0x270d2), (0x03c3, 0x04c57), (0x03c4, 0x2a351), (0x03c5, 0x0474f),
    (0x03c6, 0x045da), (0x03c7, 0x04c85), (0x03c8, 0x27c6c), (0x03c9, 0x04d07), (0x03ca, 0x04aa4), (0x03cb, 0x046a1),
    (0x03cc, 0x26b23), (0x03cd, 0x07225), (0x03ce, 0x25a54), (0x03cf, 0x21a63), (0x03d0, 0x23e06), (0x03d1, 0x23f61),
    (0x03d2, 0x0664d), (0x03d3, 0x056fb), (0x03d5, 0x07d95), (0x03d6, 0x0591d), (0x03d7, 0x28bb9), (0x03d8, 0x03df4),
    (0x03d9, 0x09734), (0x03da, 0x27bef), (0x03db, 0x05bdb), (0x03dc, 0x21d5e), (0x03dd, 0x05aa4), (0x03de, 0x03625),
    (0x03df, 0x29eb0), (0x03e0, 0x05ad1), (0x03e1, 0x05bb7), (0x03e2, 0x05cfc), (0x03e3, 0x0676e), (0x03e4, 0x08593),
    (0x03e5, 0x29945), (0x03e6, 0x07461), (0x03e7, 0x0749d), (0x044b, 0x031c0), (0x044c, 0x031c1), (0x044d, 0x031c2),
    (0x044e, 0x031c3), (0x044f, 0x031c4), (0x0450, 0x2010c), (0x0451, 0x031c5), (0x0452, 0x200d1), (0x0453, 0x200cd),
    (0x0454, 0x031c6), (0x0455, 0x031c7), (0x0456, 0x200cb), (0x0457, 0x21fe8), (0x0458, 0x031c8), (0x0459, 0x200ca),
    (0x045a, 0x031c9), (0x045b, 0x031ca), (0x045c, 0x031cb), (0x045d, 0x031cc), (0x045e, 0x2010e), (0x045f, 0x031cd),
    (0x0460, 0x031ce), (0x0461, 0x00100), (0x0462, 0x000c1), (0x0463, 0x001cd), (0x0464, 0x000c0), (0x0465, 0x00112),
    (0x0466, 0x000c9), (0x0467, 0x0011a), (0x0468, 0x000c8), (0x0469, 0x0014c), (0x046a, 0x000d3), (0x046b, 0x001d1),
    (0x046c, 0x000d2), (0x046e, 0x01ebe), (0x0470, 0x01ec0), (0x0471, 0x000ca), (0x0472, 0x00101), (0x0473, 0x000e1),
    (0x0474, 0x001ce), (0x0475, 0x000e0), (0x0476, 0x00251), (0x0477, 0x00113), (0x0478, 0x000e9), (0x0479, 0x0011b),
    (0x047a, 0x000e8), (0x047b, 0x0012b), (0x047c, 0x000ed), (0x047d, 0x001d0), (0x047e, 0x000ec), (0x047f, 0x0014d),
    (0x0480, 0x000f3), (0x0481, 0x001d2), (0x0482, 0x000f2), (0x0483, 0x0016b), (0x0484, 0x000fa), (0x0485, 0x001d4),
    (0x0486, 0x000f9), (0x0487, 0x001d6), (0x0488, 0x001d8), (0x0489, 0x001da), (0x048a, 0x001dc), (0x048b, 0x000fc),
    (0x048d, 0x01ebf), (0x048f, 0x01ec1), (0x0490, 0x000ea), (0x0491, 0x00261), (0x0492, 0x023da), (0x0493, 0x023db),
    (0x04e8, 0x2a3a9), (0x04e9, 0x21145), (0x04eb, 0x0650a), (0x04ee, 0x04e3d), (0x04ef, 0x06edd), (0x04f0, 0x09d4e),
    (0x04f1, 0x091df), (0x04f4, 0x27735), (0x04f5, 0x06491), (0x04f6, 0x04f1a), (0x04f7, 0x04f28), (0x04f8, 0x04fa8),
    (0x04f9, 0x05156), (0x04fa, 0x05174), (0x04fb, 0x0519c), (0x04fc, 0x051e4), (0x04fd, 0x052a1), (0x04fe, 0x052a8),
    (0x04ff, 0x0533b), (0x0500, 0x0534e), (0x0501, 0x053d1), (0x0502, 0x053d8), (0x0503, 0x056e2), (0x0504, 0x058f0),
    (0x0505, 0x05904), (0x0506, 0x05907), (0x0507, 0x05932), (0x0508, 0x05934), (0x0509, 0x05b66), (0x050a, 0x05b9e),
    (0x050b, 0x05b9f), (0x050c, 0x05c9a), (0x050d, 0x05e86), (0x050e, 0x0603b), (0x050f, 0x06589), (0x0510, 0x067fe),
    (0x0511, 0x06804), (0x0512, 0x06865), (0x0513, 0x06d4e), (0x0514, 0x070bc), (0x0515, 0x07535), (0x0516, 0x07ea4),
    (0x0517, 0x07eac), (0x0518, 0x07eba), (0x0519, 0x07ec7), (0x051a, 0x07ecf), (0x051b, 0x07edf), (0x051c, 0x07f06),
    (0x051d, 0x07f37), (0x051e, 0x0827a), (0x051f, 0x082cf), (0x0520, 0x0836f), (0x0521, 0x089c6), (0x0522, 0x08bbe),
    (0x0523, 0x08be2), (0x0524, 0x08f66), (0x0525, 0x08f67), (0x0526, 0x08f6e), (0x0527, 0x07411), (0x0528, 0x07cfc),
    (0x0529, 0x07dcd), (0x052a, 0x06946), (0x052b, 0x07ac9), (0x052c, 0x05227), (0x0531, 0x0918c), (0x0532, 0x078b8),
    (0x0533, 0x0915e), (0x0534, 0x080bc), (0x0536, 0x08d0b), (0x0537, 0x080f6), (0x0538, 0x209e7), (0x053b, 0x0809f),
    (0x053c, 0x09ec7), (0x053d, 0x04ccd), (0x053e, 0x09dc9), (0x053f, 0x09e0c), (0x0540, 0x04c3e), (0x0541, 0x29df6),
    (0x0542, 0x2700e), (0x0543, 0x09e0a), (0x0544, 0x2a133), (0x0545, 0x035c1), (0x0547, 0x06e9a), (0x0548, 0x0823e),
    (0x0549, 0x07519), (0x054b, 0x04911), (0x054c, 0x09a6c), (0x054d, 0x09a8f), (0x054e, 0x09f99), (0x054f, 0x07987),
    (0x0550, 0x2846c), (0x0551, 0x21dca), (0x0552, 0x205d0), (0x0553, 0x22ae6), (0x0554, 0x04e24), (0x0555, 0x04e81),
    (0x0556, 0x04e80), (0x0557, 0x04e87), (0x0558, 0x04ebf), (0x0559, 0x04eeb), (0x055a, 0x04f37), (0x055b, 0x0344c),
    (0x055c, 0x04fbd), (0x055d, 0x03e48), (0x055e, 0x05003), (0x055f, 0x05088), (0x0560, 0x0347d), (0x0561, 0x03493),
    (0x0562, 0x034a5), (0x0563, 0x05186), (0x0564, 0x05905), (0x0565, 0x051db), (0x0566, 0x051fc), (0x0567, 0x05205),
    (0x0568, 0x04e89), (0x0569, 0x05279), (0x056a, 0x05290), (0x056b, 0x05327), (0x056c, 0x035c7), (0x056d, 0x053a9),
    (0x056e, 0x03551), (0x056f, 0x053b0), (0x0570, 0x03553), (0x0571, 0x053c2), (0x0572, 0x05423), (0x0573, 0x0356d),
    (0x0574, 0x03572), (0x0575, 0x03681), (0x0576, 0x05493), (0x0577, 0x054a3), (0x0578, 0x054b4), (0x0579, 0x054b9),
    (0x057a, 0x054d0), (0x057b, 0x054ef), (0x057c, 0x05518), (0x057d, 0x05523), (0x057e, 0x05528), (0x057f, 0x03598),
    (0x0580, 0x0553f), (0x0581, 0x035a5), (0x0582, 0x035bf), (0x0583, 0x055d7), (0x0584, 0x035c5), (0x0585, 0x27d84),
    (0x0586, 0x05525), (0x0588, 0x20c42), (0x0589, 0x20d15), (0x058a, 0x2512b), (0x058b, 0x05590), (0x058c, 0x22cc6),
    (0x058d, 0x039ec), (0x058e, 0x20341), (0x058f, 0x08e46), (0x0590, 0x24db8), (0x0591, 0x294e5), (0x0592, 0x04053),
    (0x0593, 0x280be), (0x0594, 0x0777a), (0x0595, 0x22c38), (0x0596, 0x03a34), (0x0597, 0x047d5), (0x0598, 0x2815d),
    (0x0599, 0x269f2), (0x059a, 0x24dea), (0x059b, 0x064dd), (0x059c, 0x20d7c), (0x059d, 0x20fb4), (0x059e, 0x20cd5),
    (0x059f, 0x210f4), (0x05a0, 0x0648d), (0x05a1, 0x08e7e), (0x05a2, 0x20e96), (0x05a3, 0x20c0b), (0x05a4, 0x20f64),
    (0x05a5, 0x22ca9), (0x05a6, 0x28256), (0x05a7, 0x244d3), (0x05a9, 0x20d46), (0x05aa, 0x29a4d), (0x05ab, 0x280e9),
    (0x05ac, 0x047f4), (0x05ad, 0x24ea7), (0x05ae, 0x22cc2), (0x05af, 0x09ab2), (0x05b0, 0x03a67), (0x05b1, 0x295f4),
    (0x05b2, 0x03fed), (0x05b3, 0x03506), (0x05b4, 0x252c7), (0x05b5, 0x297d4), (0x05b6, 0x278c8), (0x05b7, 0x22d44),
    (0x05b8, 0x09d6e), (0x05b9, 0x09815), (0x05bb, 0x043d9), (0x05bc, 0x260a5), (0x05bd, 0x064b4), (0x05be, 0x054e3),
    (0x05bf, 0x22d4c), (0x05c0, 0x22bca), (0x05c1, 0x21077), (0x05c2, 0x039fb), (0x05c3, 0x2106f), (0x05c4, 0x266da),
    (0x05c5, 0x26716), (0x05c6, 0x279a0), (0x05c7, 0x064ea), (0x05c8, 0x25052), (0x05c9, 0x20c43), (0x05ca, 0x08e68),
    (0x05cb, 0x221a1), (0x05cc, 0x28b4c), (0x05cd, 0x20731), (0x05cf, 0x0480b), (0x05d0, 0x201a9), (0x05d1, 0x03ffa),
    (0x05d2, 0x05873), (0x05d3, 0x22d8d), (0x05d5, 0x245c8), (0x05d6, 0x204fc), (0x05d7, 0x26097), (0x05d8, 0x20f4c),
    (0x05d9, 0x20d96), (0x05da, 0x05579), (0x05db, 0x040bb), (0x05dc, 0x043ba), (0x05de, 0x04ab4), (0x05df, 0x22a66),
    (0x05e0, 0x2109d), (0x05e1, 0x081aa), (0x05e2, 0x098f5), (0x05e3, 0x20d9c), (0x05e4, 0x06379), (0x05e5, 0x039fe),
    (0x05e6, 0x22775), (0x05e7, 0x08dc0), (0x05e8, 0x056a1), (0x05e9, 0x0647c), (0x05ea, 0x03e43), (0x05ec, 0x2a601),
    (0x05ed, 0x20e09), (0x05ee, 0x22acf), (0x05ef, 0x22cc9), (0x05f1, 0x210c8), (0x05f2, 0x239c2), (0x05f3, 0x03992),
    (0x05f4, 0x03a06), (0x05f5, 0x2829b), (0x05f6, 0x03578), (0x05f7, 0x25e49), (0x05f8, 0x220c7), (0x05f9, 0x05652),
    (0x05fa, 0x20f31), (0x05fb, 0x22cb2), (0x05fc, 0x29720), (0x05fd, 0x034bc), (0x05fe, 0x06c3d), (0x05ff, 0x24e3b),
    (0x0602, 0x27574), (0x0603, 0x22e8b), (0x0604, 0x22208), (0x0605, 0x2a65b), (0x0606, 0x28ccd), (0x0607, 0x20e7a),
    (0x0608, 0x20c34), (0x0609, 0x2681c), (0x060a, 0x07f93), (0x060b, 0x210cf), (0x060c, 0x22803), (0x060d, 0x22939),
    (0x060e, 0x035fb), (0x060f, 0x251e3), (0x0610, 0x20e8c), (0x0611, 0x20f8d), (0x0612, 0x20eaa), (0x0613, 0x03f93),
    (0x0614, 0x20f30), (0x0615, 0x20d47), (0x0616, 0x2114f), (0x0617, 0x20e4c), (0x0619, 0x20eab), (0x061a, 0x20ba9),
    (0x061b, 0x20d48), (0x061c, 0x210c0), (0x061d, 0x2113d), (0x061e, 0x03ff9), (0x061f, 0x22696), (0x0620, 0x06432),
    (0x0621, 0x20fad), (0x0622, 0x233f4), (0x0623, 0x27639), (0x0624, 0x22bce), (0x0625, 0x20d7e), (0x0626, 0x20d7f),
    (0x0627, 0x22c51), (0x0628, 0x22c55), (0x0629, 0x03a18), (0x062a, 0x20e98), (0x062b, 0x210c7), (0x062c, 0x20f2e),
    (0x062d, 0x2a632), (0x062e, 0x26b50), (0x062f, 0x28cd2), (0x0630, 0x28d99), (0x0631, 0x28cca), (0x0632, 0x095aa),
    (0x0633, 0x054cc), (0x0634, 0x082c4), (0x0635, 0x055b9), (0x0637, 0x29ec3), (0x0638, 0x09c26), (0x0639, 0x09ab6),
    (0x063a, 0x2775e), (0x063b, 0x22dee), (0x063c, 0x07140), (0x063d, 0x0816d), (0x063e, 0x080ec), (0x063f, 0x05c1c),
    (0x0640, 0x26572), (0x0641, 0x08134), (0x0642, 0x03797), (0x0643, 0x0535f), (0x0644, 0x280bd), (0x0645, 0x091b6),
    (0x0646, 0x20efa), (0x0647, 0x20e0f), (0x0648, 0x20e77), (0x0649, 0x20efb), (0x064a, 0x035dd), (0x064b, 0x24deb),
    (0x064c, 0x03609), (0x064d, 0x20cd6), (0x064e, 0x056af), (0x064f, 0x227b5), (0x0650, 0x210c9), (0x0651, 0x20e10),
    (0x0652, 0x20e78), (0x0653, 0x21078), (0x0654, 0x21148), (0x0655, 0x28207), (0x0656, 0x21455), (0x0657, 0x20e79),
    (0x0658, 0x24e50), (0x0659, 0x22da4), (0x065a, 0x05a54), (0x065b, 0x2101d), (0x065c, 0x2101e), (0x065d, 0x210f5),
    (0x065e, 0x210f6), (0x065f, 0x0579c), (0x0660, 0x20e11), (0x0661, 0x27694), (0x0662, 0x282cd), (0x0663, 0x20fb5),
    (0x0664, 0x20e7b), (0x0665, 0x2517e), (0x0666, 0x03703), (0x0667, 0x20fb6), (0x0668, 0x21180), (0x0669, 0x252d8),
    (0x066a, 0x2a2bd), (0x066b, 0x249da), (0x066c, 0x2183a), (0x066d, 0x24177), (0x066e, 0x2827c), (0x066f, 0x05899),
    (0x0670, 0x05268), (0x0671, 0x0361a), (0x0672, 0x2573d), (0x0673, 0x07bb2), (0x0674, 0x05b68), (0x0675, 0x04800),
    (0x0676, 0x04b2c), (0x0677, 0x09f27), (0x0678, 0x049e7), (0x0679, 0x09c1f), (0x067a, 0x09b8d), (0x067b, 0x25b74),
    (0x067c, 0x2313d), (0x067d, 0x055fb), (0x067e, 0x035f2), (0x067f, 0x05689), (0x0680, 0x04e28), (0x0681, 0x05902),
    (0x0682, 0x21bc1), (0x0683, 0x2f878), (0x0684, 0x09751), (0x0685, 0x20086), (0x0686, 0x04e5b), (0x0687, 0x04ebb),
    (0x0688, 0x0353e), (0x0689, 0x05c23), (0x068a, 0x05f51), (0x068b, 0x05fc4), (0x068c, 0x038fa), (0x068d, 0x0624c),
    (0x068e, 0x06535), (0x068f, 0x06b7a), (0x0690, 0x06c35), (0x0691, 0x06c3a), (0x0692, 0x0706c), (0x0693, 0x0722b),
    (0x0694, 0x04e2c), (0x0695, 0x072ad), (0x0696, 0x248e9), (0x0697, 0x07f52), (0x0698, 0x0793b), (0x0699, 0x07cf9),
    (0x069a, 0x07f53), (0x069b, 0x2626a), (0x069c, 0x034c1), (0x069e, 0x2634b), (0x069f, 0x08002), (0x06a0, 0x08080),
    (0x06a1, 0x26612), (0x06a2, 0x26951), (0x06a3, 0x0535d), (0x06a4, 0x08864), (0x06a5, 0x089c1), (0x06a6, 0x278b2),
    (0x06a7, 0x08ba0), (0x06a8, 0x08d1d), (0x06a9, 0x09485), (0x06aa, 0x09578), (0x06ab, 0x0957f), (0x06ac, 0x095e8),
    (0x06ad, 0x28e0f), (0x06ae, 0x097e6), (0x06af, 0x09875), (0x06b0, 0x098ce), (0x06b1, 0x098de), (0x06b2, 0x09963),
    (0x06b3, 0x29810), (0x06b4, 0x09c7c), (0x06b5, 0x09e1f), (0x06b6, 0x09ec4), (0x06b7, 0x06b6f), (0x06b8, 0x0f907),
    (0x06b9, 0x04e37), (0x06ba, 0x20087), (0x06bb, 0x0961d), (0x06bc, 0x06237), (0x06bd, 0x094a2), (0x06bf, 0x0503b),
    (0x06c0, 0x06dfe), (0x06c1, 0x29c73), (0x06c2, 0x09fa6), (0x06c3, 0x03dc9), (0x06c4, 0x0888f), (0x06c5, 0x2414e),
    (0x06c6, 0x07077), (0x06c7, 0x05cf5), (0x06c8, 0x04b20), (0x06c9, 0x251cd), (0x06ca, 0x03559), (0x06cb, 0x25d30),
    (0x06cc, 0x06122), (0x06cd, 0x28a32), (0x06ce, 0x08fa7), (0x06cf, 0x091f6), (0x06d0, 0x07191), (0x06d1, 0x06719),
    (0x06d2, 0x073ba), (0x06d3, 0x23281), (0x06d4, 0x2a107), (0x06d5, 0x03c8b), (0x06d6, 0x21980), (0x06d7, 0x04b10),
    (0x06d8, 0x078e4), (0x06d9, 0x07402), (0x06da, 0x051ae), (0x06db, 0x2870f), (0x06dc, 0x04009), (0x06dd, 0x06a63),
    (0x06de, 0x2a2ba), (0x06df, 0x04223), (0x06e0, 0x0860f), (0x06e1, 0x20a6f), (0x06e2, 0x07a2a), (0x06e3, 0x29947),
    (0x06e4, 0x28aea), (0x06e5, 0x09755), (0x06e6, 0x0704d), (0x06e7, 0x05324), (0x06e8, 0x2207e), (0x06e9, 0x093f4),
    (0x06ea, 0x076d9), (0x06eb, 0x289e3), (0x06ec, 0x09fa7), (0x06ed, 0x077dd), (0x06ee, 0x04ea3), (0x06ef, 0x04ff0),
    (0x06f0, 0x050bc), (0x06f1, 0x04e2f), (0x06f2, 0x04f17), (0x06f3, 0x09fa8), (0x06f4, 0x05434), (0x06f5, 0x07d8b),
    (0x06f6, 0x05892), (0x06f7, 0x058d0), (0x06f8, 0x21db6), (0x06f9, 0x05e92), (0x06fa, 0x05e99), (0x06fb, 0x05fc2),
    (0x06fc, 0x22712), (0x06fd, 0x0658b), (0x06fe, 0x233f9), (0x06ff, 0x06919), (0x0700, 0x06a43), (0x0701, 0x23c63),
    (0x0702, 0x06cff), (0x0704, 0x07200), (0x0705, 0x24505), (0x0706, 0x0738c), (0x0707, 0x03edb), (0x0708, 0x24a13),
    (0x0709, 0x05b15), (0x070a, 0x074b9), (0x070b, 0x08b83), (0x070c, 0x25ca4), (0x070d, 0x25695), (0x070e, 0x07a93),
    (0x070f, 0x07bec), (0x0710, 0x07cc3), (0x0711, 0x07e6c), (0x0712, 0x082f8), (0x0713, 0x08597), (0x0714, 0x09fa9),
    (0x0715, 0x08890), (0x0716, 0x09faa), (0x0717, 0x08eb9), (0x0718, 0x09fab), (0x0719, 0x08fcf), (0x071a, 0x0855f),
    (0x071b, 0x099e0), (0x071c, 0x09221), (0x071d, 0x09fac), (0x071e, 0x28db9), (0x071f, 0x2143f), (0x0720, 0x04071),
    (0x0721, 0x042a2), (0x0722, 0x05a1a), (0x0726, 0x09868), (0x0727, 0x0676b), (0x0728, 0x04276), (0x0729, 0x0573d),
    (0x072b, 0x085d6), (0x072c, 0x2497b), (0x072d, 0x082bf), (0x072e, 0x2710d), (0x072f, 0x04c81), (0x0730, 0x26d74),
    (0x0731, 0x05d7b), (0x0732, 0x26b15), (0x0733, 0x26fbe), (0x0734, 0x09fad), (0x0735, 0x09fae), (0x0736, 0x05b96),
    (0x0737, 0x09faf), (0x0738, 0x066e7), (0x0739, 0x07e5b), (0x073a, 0x06e57), (0x073b, 0x079ca), (0x073c, 0x03d88),
    (0x073d, 0x044c3), (0x073e, 0x23256), (0x073f, 0x22796), (0x0740, 0x0439a), (0x0741, 0x04536), (0x0743, 0x05cd5),
    (0x0744, 0x23b1a), (0x0745, 0x08af9), (0x0746, 0x05c78), (0x0747, 0x03d12), (0x0748, 0x23551), (0x0749, 0x05d78),
    (0x074a, 0x09fb2), (0x074b, 0x07157), (0x074c, 0x04558), (0x074d, 0x240ec), (0x074e, 0x21e23), (0x074f, 0x04c77),
    (0x0750, 0x03978), (0x0751, 0x0344a), (0x0752, 0x201a4), (0x0753, 0x26c41), (0x0754, 0x08acc), (0x0755, 0x04fb4),
    (0x0756, 0x20239), (0x0757, 0x059bf), (0x0758, 0x0816c), (0x0759, 0x09856), (0x075a, 0x298fa), (0x075b, 0x05f3b),
    (0x075c, 0x20b9f), (0x075e, 0x221c1), (0x075f, 0x2896d), (0x0760, 0x04102), (0x0761, 0x046bb), (0x0762, 0x29079),
    (0x0763, 0x03f07), (0x0764, 0x09fb3), (0x0765, 0x2a1b5), (0x0766, 0x040f8), (0x0767, 0x037d6), (0x0768, 0x046f7),
    (0x0769, 0x26c46), (0x076a, 0x0417c), (0x076b, 0x286b2), (0x076c, 0x273ff), (0x076d, 0x0456d), (0x076e, 0x038d4),
    (0x076f, 0x2549a), (0x0770, 0x04561), (0x0771, 0x0451b), (0x0772, 0x04d89), (0x0773, 0x04c7b), (0x0774, 0x04d76),
    (0x0775, 0x045ea), (0x0776, 0x03fc8), (0x0777, 0x24b0f), (0x0778, 0x03661), (0x0779, 0x044de), (0x077a, 0x044bd),
    (0x077b, 0x041ed), (0x077c, 0x05d3e), (0x077d, 0x05d48), (0x077e, 0x05d56), (0x077f, 0x03dfc), (0x0780, 0x0380f),
    (0x0781, 0x05da4), (0x0782, 0x05db9), (0x0783, 0x03820), (0x0784, 0x03838), (0x0785, 0x05e42), (0x0786, 0x05ebd),
    (0x0787, 0x05f25), (0x0788, 0x05f83), (0x0789, 0x03908), (0x078a, 0x03914), (0x078b, 0x0393f), (0x078c, 0x0394d),
    (0x078d, 0x060d7), (0x078e, 0x0613d), (0x078f, 0x05ce5), (0x0790, 0x03989), (0x0791, 0x061b7), (0x0792, 0x061b9),
    (0x0793, 0x061cf), (0x0794, 0x039b8), (0x0795, 0x0622c), (0x0796, 0x06290), (0x0797, 0x062e5), (0x0798, 0x06318),
    (0x0799, 0x039f8), (0x079a, 0x056b1), (0x079b, 0x03a03), (0x079c, 0x063e2), (0x079d, 0x063fb), (0x079e, 0x06407),
    (0x079f, 0x0645a), (0x07a0, 0x03a4b), (0x07a1, 0x064c0), (0x07a2, 0x05d15), (0x07a3, 0x05621), (0x07a4, 0x09f9f),
    (0x07a5, 0x03a97), (0x07a6, 0x06586), (0x07a7, 0x03abd), (0x07a8, 0x065ff), (0x07a9, 0x06653), (0x07aa, 0x03af2),
    (0x07ab, 0x06692), (0x07ac, 0x03b22), (0x07ad, 0x06716), (0x07ae, 0x03b42), (0x07af, 0x067a4), (0x07b0, 0x06800),
    (0x07b1, 0x03b58), (0x07b2, 0x0684a), (0x07b3, 0x06884), (0x07b4, 0x03b72), (0x07b5, 0x03b71), (0x07b6, 0x03b7b),
    (0x07b7, 0x06909), (0x07b8, 0x06943), (0x07b9, 0x0725c), (0x07ba, 0x06964), (0x07bb, 0x0699f), (0x07bc, 0x06985),
    (0x07bd, 0x03bbc), (0x07be, 0x069d6), (0x07bf, 0x03bdd), (0x07c0, 0x06a65), (0x07c1, 0x06a74), (0x07c2, 0x06a71),
    (0x07c3, 0x06a82), (0x07c4, 0x03bec), (0x07c5, 0x06a99), (0x07c6, 0x03bf2), (0x07c7, 0x06aab), (0x07c8, 0x06ab5),
    (0x07c9, 0x06ad4), (0x07ca, 0x06af6), (0x07cb, 0x06b81), (0x07cc, 0x06bc1), (0x07cd, 0x06bea), (0x07ce, 0x06c75),
    (0x07cf, 0x06caa), (0x07d0, 0x03ccb), (0x07d1, 0x06d02), (0x07d2, 0x06d06), (0x07d3, 0x06d26), (0x07d4, 0x06d81),
    (0x07d5, 0x03cef), (0x07d6, 0x06da4), (0x07d7, 0x06db1), (0x07d8, 0x06e15), (0x07d9, 0x06e18), (0x07da, 0x06e29),
    (0x07db, 0x06e86), (0x07dc, 0x289c0), (0x07dd, 0x06ebb), (0x07de, 0x06ee2), (0x07df, 0x06eda), (0x07e0, 0x09f7f),
    (0x07e1, 0x06ee8), (0x07e2, 0x06ee9), (0x07e3, 0x06f24), (0x07e4, 0x06f34), (0x07e5, 0x03d46), (0x07e6, 0x23f41),
    (0x07e7, 0x06f81), (0x07e8, 0x06fbe), (0x07e9, 0x03d6a), (0x07ea, 0x03d75), (0x07eb, 0x071b7), (0x07ec, 0x05c99),
    (0x07ed, 0x03d8a), (0x07ee, 0x0702c), (0x07ef, 0x03d91), (0x07f0, 0x07050), (0x07f1, 0x07054), (0x07f2, 0x0706f),
    (0x07f3, 0x0707f), (0x07f4, 0x07089), (0x07f5, 0x20325), (0x07f6, 0x043c1), (0x07f7, 0x035f1), (0x07f8, 0x20ed8),
    (0x07f9, 0x23ed7), (0x07fa, 0x057be), (0x07fb, 0x26ed3), (0x07fc, 0x0713e), (0x07fd, 0x257e0), (0x07fe, 0x0364e),
    (0x07ff, 0x069a2), (0x0800, 0x28be9), (0x0801, 0x05b74), (0x0802, 0x07a49), (0x0803, 0x258e1), (0x0804, 0x294d9),
    (0x0805, 0x07a65), (0x0806, 0x07a7d), (0x0807, 0x259ac), (0x0808, 0x07abb), (0x0809, 0x07ab0), (0x080a, 0x07ac2),
    (0x080b, 0x07ac3), (0x080c, 0x071d1), (0x080d, 0x2648d), (0x080e, 0x041ca), (0x080f, 0x07ada), (0x0810, 0x07add),
    (0x0811, 0x07aea), (0x0812, 0x041ef), (0x0813, 0x054b2), (0x0814, 0x25c01), (0x0815, 0x07b0b), (0x0816, 0x07b55),
    (0x0817, 0x07b29), (0x0818, 0x2530e), (0x0819, 0x25cfe), (0x081a, 0x07ba2), (0x081b, 0x07b6f), (0x081c, 0x0839c),
    (0x081d, 0x25bb4), (0x081e, 0x26c7f), (0x081f, 0x07bd0), (0x0820, 0x08421), (0x0821, 0x07b92), (0x0823, 0x25d20),
    (0x0824, 0x03dad), (0x0825, 0x25c65), (0x0826, 0x08492), (0x0827, 0x07bfa), (0x0829, 0x07c35), (0x082a, 0x25cc1),
    (0x082b, 0x07c44), (0x082c, 0x07c83), (0x082d, 0x24882), (0x082e, 0x07ca6), (0x082f, 0x0667d), (0x0830, 0x24578),
    (0x0831, 0x07cc9), (0x0832, 0x07cc7), (0x0833, 0x07ce6), (0x0834, 0x07c74), (0x0835, 0x07cf3), (0x0836, 0x07cf5),
    (0x0838, 0x07e67), (0x0839, 0x0451d), (0x083a, 0x26e44), (0x083b, 0x07d5d), (0x083c, 0x26ed6), (0x083d, 0x0748d),
    (0x083e, 0x07d89), (0x083f, 0x07dab), (0x0840, 0x07135), (0x0841, 0x07db3), (0x0843, 0x24057), (0x0844, 0x26029),
    (0x0845, 0x07de4), (0x0846, 0x03d13), (0x0847, 0x07df5), (0x0848, 0x217f9), (0x0849, 0x07de5), (0x084a, 0x2836d),
    (0x084c, 0x26121), (0x084d, 0x2615a), (0x084e, 0x07e6e), (0x084f, 0x07e92), (0x0850, 0x0432b), (0x0851, 0x0946c),
    (0x0852, 0x07e27), (0x0853, 0x07f40), (0x0854, 0x07f41), (0x0855, 0x07f47), (0x0856, 0x07936), (0x0857, 0x262d0),
    (0x0858, 0x099e1), (0x0859, 0x07f97), (0x085a, 0x26351), (0x085b, 0x07fa3), (0x085c, 0x21661), (0x085d, 0x20068),
    (0x085e, 0x0455c), (0x085f, 0x23766), (0x0860, 0x04503), (0x0861, 0x2833a), (0x0862, 0x07ffa), (0x0863, 0x26489),
    (0x0865, 0x08008), (0x0866, 0x0801d), (0x0868, 0x0802f), (0x0869, 0x2a087), (0x086a, 0x26cc3), (0x086b, 0x0803b),
    (0x086c, 0x0803c), (0x086d, 0x08061), (0x086e, 0x22714), (0x086f, 0x04989), (0x0870, 0x26626), (0x0871, 0x23de3),
    (0x0872, 0x266e8), (0x0873, 0x06725), (0x0874, 0x080a7), (0x0875, 0x28a48), (0x0876, 0x08107), (0x0877, 0x0811a),
    (0x0878, 0x058b0), (0x0879, 0x226f6), (0x087a, 0x06c7f), (0x087b, 0x26498), (0x087c, 0x24fb8), (0x087d, 0x064e7),
    (0x087e, 0x2148a), (0x087f, 0x08218), (0x0880, 0x2185e), (0x0881, 0x06a53), (0x0882, 0x24a65), (0x0883, 0x24a95),
    (0x0884, 0x0447a), (0x0885, 0x08229), (0x0886, 0x20b0d), (0x0887, 0x26a52), (0x0888, 0x23d7e), (0x0889, 0x04ff9),
    (0x088a, 0x214fd), (0x088b, 0x084e2), (0x088c, 0x08362), (0x088d, 0x26b0a), (0x088e, 0x249a7), (0x088f, 0x23530),
    (0x0890, 0x21773), (0x0891, 0x23df8), (0x0892, 0x082aa), (0x0893, 0x0691b), (0x0894, 0x2f994), (0x0895, 0x041db),
    (0x0896, 0x0854b), (0x0897, 0x082d0), (0x0898, 0x0831a), (0x0899, 0x20e16), (0x089a, 0x217b4), (0x089b, 0x036c1),
    (0x089c, 0x2317d), (0x089d, 0x2355a), (0x089e, 0x0827b), (0x089f, 0x082e2), (0x08a0, 0x08318), (0x08a1, 0x23e8b),
    (0x08a2, 0x26da3), (0x08a3, 0x26b05), (0x08a4, 0x26b97), (0x08a5, 0x235ce), (0x08a6, 0x03dbf), (0x08a7, 0x0831d),
    (0x08a8, 0x055ec), (0x08a9, 0x08385), (0x08aa, 0x0450b), (0x08ab, 0x26da5), (0x08ac, 0x083ac), (0x08ae, 0x083d3),
    (0x08af, 0x0347e), (0x08b0, 0x26ed4), (0x08b1, 0x06a57), (0x08b2, 0x0855a), (0x08b3, 0x03496), (0x08b4, 0x26e42),
    (0x08b5, 0x22eef), (0x08b6, 0x08458), (0x08b7, 0x25be4), (0x08b8, 0x08471), (0x08b9, 0x03dd3), (0x08ba, 0x044e4),
    (0x08bb, 0x06aa7), (0x08bc, 0x0844a), (0x08bd, 0x23cb5), (0x08be, 0x07958), (0x08c0, 0x26b96), (0x08c1, 0x26e77),
    (0x08c2, 0x26e43), (0x08c3, 0x084de), (0x08c5, 0x08391), (0x08c6, 0x044a0), (0x08c7, 0x08493), (0x08c8, 0x084e4),
    (0x08c9, 0x25c91), (0x08ca, 0x04240), (0x08cb, 0x25cc0), (0x08cc, 0x04543), (0x08cd, 0x08534), (0x08ce, 0x05af2),
    (0x08cf, 0x26e99), (0x08d0, 0x04527), (0x08d1, 0x08573), (0x08d2, 0x04516), (0x08d3, 0x067bf), (0x08d4, 0x08616),
    (0x08d5, 0x28625), (0x08d6, 0x2863b), (0x08d7, 0x085c1), (0x08d8, 0x27088), (0x08d9, 0x08602), (0x08da, 0x21582),
    (0x08db, 0x270cd), (0x08dc, 0x2f9b2), (0x08dd, 0x0456a), (0x08de, 0x08628), (0x08df, 0x03648), (0x08e0, 0x218a2),
    (0x08e1, 0x053f7), (0x08e2, 0x2739a), (0x08e3, 0x0867e), (0x08e4, 0x08771), (0x08e5, 0x2a0f8), (0x08e6, 0x087ee),
    (0x08e7, 0x22c27), (0x08e8, 0x087b1), (0x08e9, 0x087da), (0x08ea, 0x0880f), (0x08eb, 0x05661), (0x08ec, 0x0866c),
    (0x08ed, 0x06856), (0x08ee, 0x0460f), (0x08ef, 0x08845), (0x08f0, 0x08846), (0x08f1, 0x275e0), (0x08f2, 0x23db9),
    (0x08f3, 0x275e4), (0x08f4, 0x0885e), (0x08f5, 0x0889c), (0x08f6, 0x0465b), (0x08f7, 0x088b4), (0x08f8, 0x088b5),
    (0x08f9, 0x063c1), (0x08fa, 0x088c5), (0x08fb, 0x07777), (0x08fc, 0x2770f), (0x08fd, 0x08987), (0x08fe, 0x0898a),
    (0x0901, 0x089a7), (0x0902, 0x089bc), (0x0903, 0x28a25), (0x0904, 0x089e7), (0x0905, 0x27924), (0x0906, 0x27abd),
    (0x0907, 0x08a9c), (0x0908, 0x07793), (0x0909, 0x091fe), (0x090a, 0x08a90), (0x090b, 0x27a59), (0x090c, 0x07ae9),
    (0x090d, 0x27b3a), (0x090e, 0x23f8f), (0x090f, 0x04713), (0x0910, 0x27b38), (0x0911, 0x0717c), (0x0912, 0x08b0c),
    (0x0913, 0x08b1f), (0x0914, 0x25430), (0x0915, 0x25565), (0x0916, 0x08b3f), (0x0917, 0x08b4c), (0x0918, 0x08b4d),
    (0x0919, 0x08aa9), (0x091a, 0x24a7a), (0x091b, 0x08b90), (0x091c, 0x08b9b), (0x091d, 0x08aaf), (0x091e, 0x216df),
    (0x091f, 0x04615), (0x0920, 0x0884f), (0x0921, 0x08c9b), (0x0922, 0x27d54), (0x0923, 0x27d8f), (0x0924, 0x2f9d4),
    (0x0925, 0x03725), (0x0926, 0x27d53), (0x0927, 0x08cd6), (0x0928, 0x27d98), (0x0929, 0x27dbd), (0x092a, 0x08d12),
    (0x092b, 0x08d03), (0x092c, 0x21910), (0x092d, 0x08cdb), (0x092e, 0x0705c), (0x092f, 0x08d11), (0x0930, 0x24cc9),
    (0x0931, 0x03ed0), (0x0933, 0x08da9), (0x0934, 0x28002), (0x0935, 0x21014), (0x0936, 0x2498a), (0x0937, 0x03b7c),
    (0x0938, 0x281bc), (0x0939, 0x2710c), (0x093a, 0x07ae7), (0x093b, 0x08ead), (0x093c, 0x08eb6), (0x093d, 0x08ec3),
    (0x093e, 0x092d4), (0x093f, 0x08f19), (0x0940, 0x08f2d), (0x0941, 0x28365), (0x0942, 0x28412), (0x0943, 0x08fa5),
    (0x0944, 0x09303), (0x0945, 0x2a29f), (0x0946, 0x20a50), (0x0947, 0x08fb3), (0x0948, 0x0492a), (0x0949, 0x289de),
    (0x094a, 0x2853d), (0x094b, 0x23dbb), (0x094c, 0x05ef8), (0x094d, 0x23262), (0x094e, 0x08ff9), (0x094f, 0x2a014),
    (0x0950, 0x286bc), (0x0951, 0x28501), (0x0952, 0x22325), (0x0953, 0x03980), (0x0954, 0x26ed7), (0x0955, 0x09037),
    (0x0956, 0x2853c), (0x0957, 0x27abe), (0x0958, 0x09061), (0x0959, 0x2856c), (0x095a, 0x2860b), (0x095b, 0x090a8),
    (0x095c, 0x28713), (0x095d, 0x090c4), (0x095e, 0x286e6), (0x095f, 0x090ae), (0x0961, 0x09167), (0x0962, 0x03af0),
    (0x0963, 0x091a9), (0x0964, 0x091c4), (0x0965, 0x07cac), (0x0966, 0x28933), (0x0967, 0x21e89), (0x0968, 0x0920e),
    (0x0969, 0x06c9f), (0x096a, 0x09241), (0x096b, 0x09262), (0x096c, 0x255b9), (0x096e, 0x28ac6), (0x096f, 0x23c9b),
    (0x0970, 0x28b0c), (0x0971, 0x255db), (0x0972, 0x20d31), (0x0973, 0x0932c), (0x0974, 0x0936b), (0x0975, 0x28ae1),
    (0x0976, 0x28beb), (0x0977, 0x0708f), (0x0978, 0x05ac3), (0x0979, 0x28ae2), (0x097a, 0x28ae5), (0x097b, 0x04965),
    (0x097c, 0x09244), (0x097d, 0x28bec), (0x097e, 0x28c39), (0x097f, 0x28bff), (0x0980, 0x09373), (0x0981, 0x0945b),
    (0x0982, 0x08ebc), (0x0983, 0x09585), (0x0984, 0x095a6), (0x0985, 0x09426), (0x0986, 0x095a0), (0x0987, 0x06ff6),
    (0x0988, 0x042b9), (0x0989, 0x2267a), (0x098a, 0x286d8), (0x098b, 0x2127c), (0x098c, 0x23e2e), (0x098d, 0x049df),
    (0x098e, 0x06c1c), (0x098f, 0x0967b), (0x0990, 0x09696), (0x0991, 0x0416c), (0x0992, 0x096a3), (0x0993, 0x26ed5),
    (0x0994, 0x061da), (0x0995, 0x096b6), (0x0996, 0x078f5), (0x0997, 0x28ae0), (0x0998, 0x096bd), (0x0999, 0x053cc),
    (0x099a, 0x049a1), (0x099b, 0x26cb8), (0x099c, 0x20274), (0x099d, 0x26410), (0x099e, 0x290af), (0x099f, 0x290e5),
    (0x09a0, 0x24ad1), (0x09a1, 0x21915), (0x09a2, 0x2330a), (0x09a3, 0x09731), (0x09a4, 0x08642), (0x09a5, 0x09736),
    (0x09a6, 0x04a0f), (0x09a7, 0x0453d), (0x09a8, 0x04585), (0x09a9, 0x24ae9), (0x09aa, 0x07075), (0x09ab, 0x05b41),
    (0x09ac, 0x0971b), (0x09ae, 0x291d5), (0x09af, 0x09757), (0x09b0, 0x05b4a), (0x09b1, 0x291eb), (0x09b2, 0x0975f),
    (0x09b3, 0x09425), (0x09b4, 0x050d0), (0x09b5, 0x230b7), (0x09b6, 0x230bc), (0x09b7, 0x09789), (0x09b8, 0x0979f),
    (0x09b9, 0x097b1), (0x09ba, 0x097be), (0x09bb, 0x097c0), (0x09bc, 0x097d2), (0x09bd, 0x097e0), (0x09be, 0x2546c),
    (0x09bf, 0x097ee), (0x09c0, 0x0741c), (0x09c1, 0x29433), (0x09c3, 0x097f5), (0x09c4, 0x2941d), (0x09c5, 0x2797a),
    (0x09c6, 0x04ad1), (0x09c7, 0x09834), (0x09c8, 0x09833), (0x09c9, 0x0984b), (0x09ca, 0x09866), (0x09cb, 0x03b0e),
    (0x09cc, 0x27175), (0x09cd, 0x03d51), (0x09ce, 0x20630), (0x09cf, 0x2415c), (0x09d0, 0x25706), (0x09d1, 0x098ca),
    (0x09d2, 0x098b7), (0x09d3, 0x098c8), (0x09d4, 0x098c7), (0x09d5, 0x04aff), (0x09d6, 0x26d27), (0x09d7, 0x216d3),
    (0x09d8, 0x055b0), (0x09d9, 0x098e1), (0x09da, 0x098e6), (0x09db, 0x098ec), (0x09dc, 0x09378), (0x09dd, 0x09939),
    (0x09de, 0x24a29), (0x09df, 0x04b72), (0x09e0, 0x29857), (0x09e1, 0x29905), (0x09e2, 0x099f5), (0x09e3, 0x09a0c),
    (0x09e4, 0x09a3b), (0x09e5, 0x09a10), (0x09e6, 0x09a58), (0x09e7, 0x25725), (0x09e8, 0x036c4), (0x09e9, 0x290b1),
    (0x09ea, 0x29bd5), (0x09eb, 0x09ae0), (0x09ec, 0x09ae2), (0x09ed, 0x29b05), (0x09ee, 0x09af4), (0x09ef, 0x04c0e),
    (0x09f0, 0x09b14), (0x09f1, 0x09b2d), (0x09f2, 0x28600), (0x09f3, 0x05034), (0x09f4, 0x09b34), (0x09f5, 0x269a8),
    (0x09f6, 0x038c3), (0x09f7, 0x2307d), (0x09f8, 0x09b50), (0x09f9, 0x09b40), (0x09fa, 0x29d3e), (0x09fb, 0x05a45),
    (0x09fc, 0x21863), (0x09fd, 0x09b8e), (0x09fe, 0x2424b), (0x09ff, 0x09c02), (0x0a00, 0x09bff), (0x0a01, 0x09c0c),
    (0x0a02, 0x29e68), (0x0a03, 0x09dd4), (0x0a04, 0x29fb7), (0x0a05, 0x2a192), (0x0a06, 0x2a1ab), (0x0a07, 0x2a0e1),
    (0x0a08, 0x2a123), (0x0a09, 0x2a1df), (0x0a0a, 0x09d7e), (0x0a0b, 0x09d83), (0x0a0c, 0x2a134), (0x0a0d, 0x09e0e),
    (0x0a0e, 0x06888), (0x0a0f, 0x09dc4), (0x0a10, 0x2215b), (0x0a11, 0x2a193), (0x0a12, 0x2a220), (0x0a13, 0x2193b),
    (0x0a14, 0x2a233), (0x0a15, 0x09d39), (0x0a16, 0x2a0b9), (0x0a17, 0x2a2b4), (0x0a18, 0x09e90), (0x0a19, 0x09e95),
    (0x0a1a, 0x09e9e), (0x0a1b, 0x09ea2), (0x0a1c, 0x04d34), (0x0a1d, 0x09eaa), (0x0a1e, 0x09eaf), (0x0a1f, 0x24364),
    (0x0a20, 0x09ec1), (0x0a21, 0x03b60), (0x0a22, 0x039e5), (0x0a23, 0x03d1d), (0x0a24, 0x04f32), (0x0a25, 0x037be),
    (0x0a26, 0x28c2b), (0x0a27, 0x09f02), (0x0a28, 0x09f08), (0x0a29, 0x04b96), (0x0a2a, 0x09424), (0x0a2b, 0x26da2),
    (0x0a2c, 0x09f17), (0x0a2e, 0x09f39), (0x0a2f, 0x0569f), (0x0a30, 0x0568a), (0x0a31, 0x09f45), (0x0a32, 0x099b8),
    (0x0a33, 0x2908b), (0x0a34, 0x097f2), (0x0a35, 0x0847f), (0x0a36, 0x09f62), (0x0a37, 0x09f69), (0x0a38, 0x07adc),
    (0x0a39, 0x09f8e), (0x0a3a, 0x07216), (0x0a3b, 0x04bbe), (0x0a3c, 0x24975), (0x0a3d, 0x249bb), (0x0a3e, 0x07177),
    (0x0a3f, 0x249f8), (0x0a40, 0x24348), (0x0a41, 0x24a51), (0x0a42, 0x0739e), (0x0a43, 0x28bda), (0x0a44, 0x218fa),
    (0x0a45, 0x0799f), (0x0a46, 0x2897e), (0x0a47, 0x28e36), (0x0a48, 0x09369), (0x0a49, 0x093f3), (0x0a4a, 0x28a44),
    (0x0a4b, 0x092ec), (0x0a4c, 0x09381), (0x0a4d, 0x093cb), (0x0a4e, 0x2896c), (0x0a4f, 0x244b9), (0x0a50, 0x07217),
    (0x0a51, 0x03eeb), (0x0a52, 0x07772), (0x0a53, 0x07a43), (0x0a54, 0x070d0), (0x0a55, 0x24473), (0x0a56, 0x243f8),
    (0x0a57, 0x0717e), (0x0a58, 0x217ef), (0x0a59, 0x070a3), (0x0a5a, 0x218be), (0x0a5b, 0x23599), (0x0a5c, 0x03ec7),
    (0x0a5d, 0x21885), (0x0a5e, 0x2542f), (0x0a5f, 0x217f8), (0x0a60, 0x03722), (0x0a61, 0x216fb), (0x0a62, 0x21839),
    (0x0a63, 0x036e1), (0x0a64, 0x21774), (0x0a65, 0x218d1), (0x0a66, 0x25f4b), (0x0a67, 0x03723), (0x0a68, 0x216c0),
    (0x0a69, 0x0575b), (0x0a6a, 0x24a25), (0x0a6b, 0x213fe), (0x0a6c, 0x212a8), (0x0a6d, 0x213c6), (0x0a6e, 0x214b6),
    (0x0a6f, 0x08503), (0x0a70, 0x236a6), (0x0a72, 0x08455), (0x0a73, 0x24994), (0x0a74, 0x27165), (0x0a75, 0x23e31),
    (0x0a76, 0x2555c), (0x0a77, 0x23efb), (0x0a78, 0x27052), (0x0a79, 0x044f4), (0x0a7a, 0x236ee), (0x0a7b, 0x2999d),
    (0x0a7c, 0x26f26), (0x0a7d, 0x067f9), (0x0a7e, 0x03733), (0x0a7f, 0x03c15), (0x0a80, 0x03de7), (0x0a81, 0x0586c),
    (0x0a82, 0x21922), (0x0a83, 0x06810), (0x0a84, 0x04057), (0x0a85, 0x2373f), (0x0a86, 0x240e1), (0x0a87, 0x2408b),
    (0x0a88, 0x2410f), (0x0a89, 0x26c21), (0x0a8a, 0x054cb), (0x0a8b, 0x0569e), (0x0a8c, 0x266b1), (0x0a8d, 0x05692),
    (0x0a8e, 0x20fdf), (0x0a8f, 0x20ba8), (0x0a90, 0x20e0d), (0x0a91, 0x093c6), (0x0a92, 0x28b13), (0x0a93, 0x0939c),
    (0x0a94, 0x04ef8), (0x0a95, 0x0512b), (0x0a96, 0x03819), (0x0a97, 0x24436), (0x0a98, 0x04ebc), (0x0a99, 0x20465),
    (0x0a9a, 0x2037f), (0x0a9b, 0x04f4b), (0x0a9c, 0x04f8a), (0x0a9d, 0x25651), (0x0a9e, 0x05a68), (0x0a9f, 0x201ab),
    (0x0aa0, 0x203cb), (0x0aa1, 0x03999), (0x0aa2, 0x2030a), (0x0aa3, 0x20414), (0x0aa4, 0x03435), (0x0aa5, 0x04f29),
    (0x0aa6, 0x202c0), (0x0aa7, 0x28eb3), (0x0aa8, 0x20275), (0x0aa9, 0x08ada), (0x0aaa, 0x2020c), (0x0aab, 0x04e98),
    (0x0aac, 0x050cd), (0x0aad, 0x0510d), (0x0aae, 0x04fa2), (0x0aaf, 0x04f03), (0x0ab0, 0x24a0e), (0x0ab1, 0x23e8a),
    (0x0ab2, 0x04f42), (0x0ab3, 0x0502e), (0x0ab4, 0x0506c), (0x0ab5, 0x05081), (0x0ab6, 0x04fcc), (0x0ab7, 0x04fe5),
    (0x0ab8, 0x05058), (0x0ab9, 0x050fc), (0x0abe, 0x06e76), (0x0abf, 0x23595), (0x0ac0, 0x23e39), (0x0ac1, 0x23ebf),
    (0x0ac2, 0x06d72), (0x0ac3, 0x21884), (0x0ac4, 0x23e89), (0x0ac5, 0x051a8), (0x0ac6, 0x051c3), (0x0ac7, 0x205e0),
    (0x0ac8, 0x044dd), (0x0ac9, 0x204a3), (0x0aca, 0x20492), (0x0acb, 0x20491), (0x0acc, 0x08d7a), (0x0acd, 0x28a9c),
    (0x0ace, 0x2070e), (0x0acf, 0x05259), (0x0ad0, 0x052a4), (0x0ad1, 0x20873), (0x0ad2, 0x052e1), (0x0ad4, 0x0467a),
    (0x0ad5, 0x0718c), (0x0ad6, 0x2438c), (0x0ad7, 0x20c20), (0x0ad8, 0x249ac), (0x0ad9, 0x210e4), (0x0ada, 0x069d1),
    (0x0adb, 0x20e1d), (0x0add, 0x03ede), (0x0ade, 0x07499), (0x0adf, 0x07414), (0x0ae0, 0x07456), (0x0ae1, 0x07398),
    (0x0ae2, 0x04b8e), (0x0ae3, 0x24abc), (0x0ae4, 0x2408d), (0x0ae5, 0x053d0), (0x0ae6, 0x03584), (0x0ae7, 0x0720f),
    (0x0ae8, 0x240c9), (0x0ae9, 0x055b4), (0x0aea, 0x20345), (0x0aeb, 0x054cd), (0x0aec, 0x20bc6), (0x0aed, 0x0571d),
    (0x0aee, 0x0925d), (0x0aef, 0x096f4), (0x0af0, 0x09366), (0x0af1, 0x057dd), (0x0af2, 0x0578d), (0x0af3, 0x0577f),
    (0x0af4, 0x0363e), (0x0af5, 0x058cb), (0x0af6, 0x05a99), (0x0af7, 0x28a46), (0x0af8, 0x216fa), (0x0af9, 0x2176f),
    (0x0afa, 0x21710), (0x0afb, 0x05a2c), (0x0afc, 0x059b8), (0x0afd, 0x0928f), (0x0afe, 0x05a7e), (0x0aff, 0x05acf),
    (0x0b00, 0x05a12), (0x0b01, 0x25946), (0x0b02, 0x219f3), (0x0b03, 0x21861), (0x0b04, 0x24295), (0x0b05, 0x036f5),
    (0x0b06, 0x06d05), (0x0b07, 0x07443), (0x0b08, 0x05a21), (0x0b09, 0x25e83), (0x0b0a, 0x05a81), (0x0b0b, 0x28bd7),
    (0x0b0c, 0x20413), (0x0b0d, 0x093e0), (0x0b0e, 0x0748c), (0x0b0f, 0x21303), (0x0b10, 0x07105), (0x0b11, 0x04972),
    (0x0b12, 0x09408), (0x0b13, 0x289fb), (0x0b14, 0x093bd), (0x0b15, 0x037a0), (0x0b16, 0x05c1e), (0x0b17, 0x05c9e),
    (0x0b18, 0x05e5e), (0x0b19, 0x05e48), (0x0b1a, 0x21996), (0x0b1b, 0x2197c), (0x0b1c, 0x23aee), (0x0b1d, 0x05ecd),
    (0x0b1e, 0x05b4f), (0x0b1f, 0x21903), (0x0b20, 0x21904), (0x0b21, 0x03701), (0x0b22, 0x218a0), (0x0b23, 0x036dd),
    (0x0b24, 0x216fe), (0x0b25, 0x036d3), (0x0b26, 0x0812a), (0x0b27, 0x28a47), (0x0b28, 0x21dba), (0x0b29, 0x23472),
    (0x0b2a, 0x289a8), (0x0b2b, 0x05f0c), (0x0b2c, 0x05f0e), (0x0b2d, 0x21927), (0x0b2e, 0x217ab), (0x0b2f, 0x05a6b),
    (0x0b30, 0x2173b), (0x0b31, 0x05b44), (0x0b32, 0x08614), (0x0b33, 0x275fd), (0x0b34, 0x08860), (0x0b35, 0x0607e),
    (0x0b36, 0x22860), (0x0b37, 0x2262b), (0x0b38, 0x05fdb), (0x0b39, 0x03eb8), (0x0b3a, 0x225af), (0x0b3b, 0x225be),
    (0x0b3c, 0x29088), (0x0b3d, 0x26f73), (0x0b3e, 0x061c0), (0x0b3f, 0x2003e), (0x0b40, 0x20046), (0x0b41, 0x2261b),
    (0x0b42, 0x06199), (0x0b43, 0x06198), (0x0b44, 0x06075), (0x0b45, 0x22c9b), (0x0b46, 0x22d07), (0x0b47, 0x246d4),
    (0x0b48, 0x2914d), (0x0b49, 0x06471), (0x0b4a, 0x24665), (0x0b4b, 0x22b6a), (0x0b4c, 0x03a29), (0x0b4d, 0x22b22),
    (0x0b4e, 0x23450), (0x0b4f, 0x298ea), (0x0b50, 0x22e78), (0x0b51, 0x06337), (0x0b52, 0x2a45b), (0x0b53, 0x064b6),
    (0x0b54, 0x06331), (0x0b55, 0x063d1), (0x0b56, 0x249e3), (0x0b57, 0x22d67), (0x0b58, 0x062a4), (0x0b59, 0x22ca1),
    (0x0b5a, 0x0643b), (0x0b5b, 0x0656b), (0x0b5c, 0x06972), (0x0b5d, 0x03bf4), (0x0b5e, 0x2308e), (0x0b5f, 0x232ad),
    (0x0b60, 0x24989), (0x0b61, 0x232ab), (0x0b62, 0x0550d), (0x0b63, 0x232e0), (0x0b64, 0x218d9), (0x0b65, 0x2943f),
    (0x0b66, 0x066ce), (0x0b67, 0x23289), (0x0b68, 0x231b3), (0x0b69, 0x03ae0), (0x0b6a, 0x04190), (0x0b6b, 0x25584),
    (0x0b6c, 0x28b22), (0x0b6d, 0x2558f), (0x0b6e, 0x216fc), (0x0b6f, 0x2555b), (0x0b70, 0x25425), (0x0b71, 0x078ee),
    (0x0b72, 0x23103), (0x0b73, 0x2182a), (0x0b74, 0x23234), (0x0b75, 0x03464), (0x0b76, 0x2320f), (0x0b77, 0x23182),
    (0x0b78, 0x242c9), (0x0b79, 0x0668e), (0x0b7a, 0x26d24), (0x0b7b, 0x0666b), (0x0b7c, 0x04b93), (0x0b7d, 0x06630),
    (0x0b7e, 0x27870), (0x0b7f, 0x21deb), (0x0b80, 0x06663), (0x0b81, 0x232d2), (0x0b82, 0x232e1), (0x0b83, 0x0661e),
    (0x0b84, 0x25872), (0x0b85, 0x038d1), (0x0b86, 0x2383a), (0x0b87, 0x237bc), (0x0b88, 0x03b99), (0x0b89, 0x237a2),
    (0x0b8a, 0x233fe), (0x0b8b, 0x074d0), (0x0b8c, 0x03b96), (0x0b8d, 0x0678f), (0x0b8e, 0x2462a), (0x0b8f, 0x068b6),
    (0x0b90, 0x0681e), (0x0b91, 0x03bc4), (0x0b92, 0x06abe), (0x0b93, 0x03863), (0x0b94, 0x237d5), (0x0b95, 0x24487),
    (0x0b96, 0x06a33), (0x0b97, 0x06a52), (0x0b98, 0x06ac9), (0x0b99, 0x06b05), (0x0b9a, 0x21912), (0x0b9b, 0x06511),
    (0x0b9c, 0x06898), (0x0b9d, 0x06a4c), (0x0b9e, 0x03bd7), (0x0b9f, 0x06a7a), (0x0ba0, 0x06b57), (0x0ba1, 0x23fc0),
    (0x0ba2, 0x23c9a), (0x0ba3, 0x093a0), (0x0ba4, 0x092f2), (0x0ba5, 0x28bea), (0x0ba6, 0x28acb), (0x0ba7, 0x09289),
    (0x0ba8, 0x2801e), (0x0ba9, 0x289dc), (0x0baa, 0x09467), (0x0bab, 0x06da5), (0x0bac, 0x06f0b), (0x0bad, 0x249ec),
    (0x0baf, 0x23f7f), (0x0bb0, 0x03d8f), (0x0bb1, 0x06e04), (0x0bb2, 0x2403c), (0x0bb3, 0x05a3d), (0x0bb4, 0x06e0a),
    (0x0bb5, 0x05847), (0x0bb6, 0x06d24), (0x0bb7, 0x07842), (0x0bb8, 0x0713b), (0x0bb9, 0x2431a), (0x0bba, 0x24276),
    (0x0bbb, 0x070f1), (0x0bbc, 0x07250), (0x0bbd, 0x07287), (0x0bbe, 0x07294), (0x0bbf, 0x2478f), (0x0bc0, 0x24725),
    (0x0bc1, 0x05179), (0x0bc2, 0x24aa4), (0x0bc3, 0x205eb), (0x0bc4, 0x0747a), (0x0bc5, 0x23ef8), (0x0bc6, 0x2365f),
    (0x0bc7, 0x24a4a), (0x0bc8, 0x24917), (0x0bc9, 0x25fe1), (0x0bca, 0x03f06), (0x0bcb, 0x03eb1), (0x0bcc, 0x24adf),
    (0x0bcd, 0x28c23), (0x0bce, 0x23f35), (0x0bcf, 0x060a7), (0x0bd0, 0x03ef3), (0x0bd1, 0x074cc), (0x0bd2, 0x0743c),
    (0x0bd3, 0x09387), (0x0bd4, 0x07437), (0x0bd5, 0x0449f), (0x0bd6, 0x26dea), (0x0bd7, 0x04551), (0x0bd8, 0x07583),
    (0x0bd9, 0x03f63), (0x0bda, 0x24cd9), (0x0bdb, 0x24d06), (0x0bdc, 0x03f58), (0x0bdd, 0x07555), (0x0bde, 0x07673),
    (0x0bdf, 0x2a5c6), (0x0be0, 0x03b19), (0x0be1, 0x07468), (0x0be2, 0x28acc), (0x0be3, 0x249ab), (0x0be4, 0x2498e),
    (0x0be5, 0x03afb), (0x0be6, 0x03dcd), (0x0be7, 0x24a4e), (0x0be8, 0x03eff), (0x0be9, 0x249c5), (0x0bea, 0x248f3),
    (0x0beb, 0x091fa), (0x0bec, 0x05732), (0x0bed, 0x09342), (0x0bee, 0x28ae3), (0x0bef, 0x21864), (0x0bf0, 0x050df),
    (0x0bf1, 0x25221), (0x0bf2, 0x251e7), (0x0bf3, 0x07778), (0x0bf4, 0x23232), (0x0bf5, 0x0770e), (0x0bf6, 0x0770f),
    (0x0bf7, 0x0777b), (0x0bf8, 0x24697), (0x0bf9, 0x23781), (0x0bfa, 0x03a5e), (0x0bfb, 0x248f0), (0x0bfc, 0x07438),
    (0x0bfd, 0x0749b), (0x0bfe, 0x03ebf), (0x0bff, 0x24aba), (0x0c00, 0x24ac7), (0x0c01, 0x040c8), (0x0c02, 0x24a96),
    (0x0c03, 0x261ae), (0x0c04, 0x09307), (0x0c05, 0x25581), (0x0c06, 0x0781e), (0x0c07, 0x0788d), (0x0c08, 0x07888),
    (0x0c09, 0x078d2), (0x0c0a, 0x073d0), (0x0c0b, 0x07959), (0x0c0c, 0x27741), (0x0c0d, 0x256e3), (0x0c0e, 0x0410e),
    (0x0c10, 0x08496), (0x0c11, 0x079a5), (0x0c12, 0x06a2d), (0x0c13, 0x23efa), (0x0c14, 0x07a3a), (0x0c15, 0x079f4),
    (0x0c16, 0x0416e), (0x0c17, 0x216e6), (0x0c18, 0x04132), (0x0c19, 0x09235), (0x0c1a, 0x079f1), (0x0c1b, 0x20d4c),
    (0x0c1c, 0x2498c), (0x0c1d, 0x20299), (0x0c1e, 0x23dba), (0x0c1f, 0x2176e), (0x0c20, 0x03597), (0x0c21, 0x0556b),
    (0x0c22, 0x03570), (0x0c23, 0x036aa), (0x0c24, 0x201d4), (0x0c25, 0x20c0d), (0x0c26, 0x07ae2), (0x0c27, 0x05a59),
    (0x0c28, 0x226f5), (0x0c29, 0x25aaf), (0x0c2a, 0x25a9c), (0x0c2b, 0x05a0d), (0x0c2c, 0x2025b), (0x0c2d, 0x078f0),
    (0x0c2e, 0x05a2a), (0x0c2f, 0x25bc6), (0x0c30, 0x07afe), (0x0c31, 0x041f9), (0x0c32, 0x07c5d), (0x0c33, 0x07c6d),
    (0x0c34, 0x04211), (0x0c35, 0x25bb3), (0x0c36, 0x25ebc), (0x0c37, 0x25ea6), (0x0c38, 0x07ccd), (0x0c39, 0x249f9),
    (0x0c3a, 0x217b0), (0x0c3b, 0x07c8e), (0x0c3c, 0x07c7c), (0x0c3d, 0x07cae), (0x0c3e, 0x06ab2), (0x0c3f, 0x07ddc),
    (0x0c40, 0x07e07), (0x0c41, 0x07dd3), (0x0c42, 0x07f4e), (0x0c43, 0x26261), (0x0c44, 0x2615c), (0x0c45, 0x27b48),
    (0x0c46, 0x07d97), (0x0c47, 0x25e82), (0x0c48, 0x0426a), (0x0c49, 0x26b75), (0x0c4a, 0x20916), (0x0c4b, 0x067d6),
    (0x0c4c, 0x2004e), (0x0c4d, 0x235cf), (0x0c4e, 0x057c4), (0x0c4f, 0x26412), (0x0c50, 0x263f8), (0x0c51, 0x24962),
    (0x0c52, 0x07fdd), (0x0c53, 0x07b27), (0x0c54, 0x2082c), (0x0c55, 0x25ae9), (0x0c56, 0x25d43), (0x0c57, 0x07b0c),
    (0x0c58, 0x25e0e), (0x0c59, 0x099e6), (0x0c5a, 0x08645), (0x0c5b, 0x09a63), (0x0c5c, 0x06a1c), (0x0c5d, 0x2343f),
    (0x0c5e, 0x039e2), (0x0c5f, 0x249f7), (0x0c60, 0x265ad), (0x0c61, 0x09a1f), (0x0c62, 0x265a0), (0x0c63, 0x08480),
    (0x0c64, 0x27127), (0x0c65, 0x26cd1), (0x0c66, 0x044ea), (0x0c67, 0x08137), (0x0c68, 0x04402), (0x0c69, 0x080c6),
    (0x0c6a, 0x08109), (0x0c6b, 0x08142), (0x0c6c, 0x267b4), (0x0c6d, 0x098c3), (0x0c6e, 0x26a42), (0x0c6f, 0x08262),
    (0x0c70, 0x08265), (0x0c71, 0x26a51), (0x0c72, 0x08453), (0x0c73, 0x26da7), (0x0c74, 0x08610), (0x0c75, 0x2721b),
    (0x0c76, 0x05a86), (0x0c77, 0x0417f), (0x0c78, 0x21840), (0x0c79, 0x05b2b), (0x0c7a, 0x218a1), (0x0c7b, 0x05ae4),
    (0x0c7c, 0x218d8), (0x0c7d, 0x086a0), (0x0c7e, 0x2f9bc), (0x0c7f, 0x23d8f), (0x0c80, 0x0882d), (0x0c81, 0x27422),
    (0x0c82, 0x05a02), (0x0c83, 0x0886e), (0x0c84, 0x04f45), (0x0c85, 0x08887), (0x0c86, 0x088bf), (0x0c87, 0x088e6),
    (0x0c88, 0x08965), (0x0c89, 0x0894d), (0x0c8a, 0x25683), (0x0c8b, 0x08954), (0x0c8c, 0x27785), (0x0c8d, 0x27784),
    (0x0c8e, 0x28bf5), (0x0c8f, 0x28bd9), (0x0c90, 0x28b9c), (0x0c91, 0x289f9), (0x0c92, 0x03ead), (0x0c93, 0x084a3),
    (0x0c94, 0x046f5), (0x0c95, 0x046cf), (0x0c96, 0x037f2), (0x0c97, 0x08a3d), (0x0c98, 0x08a1c), (0x0c99, 0x29448),
    (0x0c9a, 0x05f4d), (0x0c9b, 0x0922b), (0x0c9c, 0x24284), (0x0c9d, 0x065d4), (0x0c9e, 0x07129), (0x0c9f, 0x070c4),
    (0x0ca0, 0x21845), (0x0ca1, 0x09d6d), (0x0ca2, 0x08c9f), (0x0ca3, 0x08ce9), (0x0ca4, 0x27ddc), (0x0ca5, 0x0599a),
    (0x0ca6, 0x077c3), (0x0ca7, 0x059f0), (0x0ca8, 0x0436e), (0x0ca9, 0x036d4), (0x0caa, 0x08e2a), (0x0cab, 0x08ea7),
    (0x0cac, 0x24c09), (0x0cad, 0x08f30), (0x0cae, 0x08f4a), (0x0caf, 0x042f4), (0x0cb0, 0x06c58), (0x0cb1, 0x06fbb),
    (0x0cb2, 0x22321), (0x0cb3, 0x0489b), (0x0cb4, 0x06f79), (0x0cb5, 0x06e8b), (0x0cb6, 0x217da), (0x0cb7, 0x09be9),
    (0x0cb8, 0x036b5), (0x0cb9, 0x2492f), (0x0cba, 0x090bb), (0x0cbc, 0x05571), (0x0cbd, 0x04906), (0x0cbe, 0x091bb),
    (0x0cbf, 0x09404), (0x0cc0, 0x28a4b), (0x0cc1, 0x04062), (0x0cc2, 0x28afc), (0x0cc3, 0x09427), (0x0cc4, 0x28c1d),
    (0x0cc5, 0x28c3b), (0x0cc6, 0x084e5), (0x0cc7, 0x08a2b), (0x0cc8, 0x09599), (0x0cc9, 0x095a7), (0x0cca, 0x09597),
    (0x0ccb, 0x09596), (0x0ccc, 0x28d34), (0x0ccd, 0x07445), (0x0cce, 0x03ec2), (0x0ccf, 0x248ff), (0x0cd0, 0x24a42),
    (0x0cd1, 0x243ea), (0x0cd2, 0x03ee7), (0x0cd3, 0x23225), (0x0cd4, 0x0968f), (0x0cd5, 0x28ee7), (0x0cd6, 0x28e66),
    (0x0cd7, 0x28e65), (0x0cd8, 0x03ecc), (0x0cd9, 0x249ed), (0x0cda, 0x24a78), (0x0cdb, 0x23fee), (0x0cdc, 0x07412),
    (0x0cdd, 0x0746b), (0x0cde, 0x03efc), (0x0cdf, 0x09741), (0x0ce0, 0x290b0), (0x0ce1, 0x06847), (0x0ce2, 0x04a1d),
    (0x0ce3, 0x29093), (0x0ce4, 0x257df), (0x0ce6, 0x09368), (0x0ce7, 0x28989), (0x0ce8, 0x28c26), (0x0ce9, 0x28b2f),
    (0x0cea, 0x263be), (0x0ceb, 0x092ba), (0x0cec, 0x05b11), (0x0ced, 0x08b69), (0x0cee, 0x0493c), (0x0cef, 0x073f9),
    (0x0cf0, 0x2421b), (0x0cf1, 0x0979b), (0x0cf2, 0x09771), (0x0cf3, 0x09938), (0x0cf4, 0x20f26), (0x0cf5, 0x05dc1),
    (0x0cf6, 0x28bc5), (0x0cf7, 0x24ab2), (0x0cf8, 0x0981f), (0x0cf9, 0x294da), (0x0cfa, 0x092f6), (0x0cfb, 0x295d7),
    (0x0cfc, 0x091e5), (0x0cfd, 0x044c0), (0x0cfe, 0x28b50), (0x0cff, 0x24a67), (0x0d00, 0x28b64), (0x0d01, 0x098dc),
    (0x0d02, 0x28a45), (0x0d03, 0x03f00), (0x0d04, 0x0922a), (0x0d05, 0x04925), (0x0d06, 0x08414), (0x0d07, 0x0993b),
    (0x0d08, 0x0994d), (0x0d09, 0x27b06), (0x0d0a, 0x03dfd), (0x0d0b, 0x0999b), (0x0d0c, 0x04b6f), (0x0d0d, 0x099aa),
    (0x0d0e, 0x09a5c), (0x0d0f, 0x28b65), (0x0d10, 0x258c8), (0x0d11, 0x06a8f), (0x0d12, 0x09a21), (0x0d13, 0x05afe),
    (0x0d14, 0x09a2f), (0x0d15, 0x298f1), (0x0d16, 0x04b90), (0x0d17, 0x29948), (0x0d18, 0x099bc), (0x0d19, 0x04bbd),
    (0x0d1a, 0x04b97), (0x0d1b, 0x0937d), (0x0d1c, 0x05872), (0x0d1d, 0x21302), (0x0d1e, 0x05822), (0x0d1f, 0x249b8),
    (0x0d20, 0x214e8), (0x0d21, 0x07844), (0x0d22, 0x2271f), (0x0d23, 0x23db8), (0x0d24, 0x068c5), (0x0d25, 0x03d7d),
    (0x0d26, 0x09458), (0x0d27, 0x03927), (0x0d28, 0x06150), (0x0d29, 0x22781), (0x0d2a, 0x2296b), (0x0d2b, 0x06107),
    (0x0d2c, 0x09c4f), (0x0d2d, 0x09c53), (0x0d2e, 0x09c7b), (0x0d2f, 0x09c35), (0x0d30, 0x09c10), (0x0d31, 0x09b7f),
    (0x0d32, 0x09bcf), (0x0d33, 0x29e2d), (0x0d34, 0x09b9f), (0x0d35, 0x2a1f5), (0x0d36, 0x2a0fe), (0x0d37, 0x09d21),
    (0x0d38, 0x04cae), (0x0d39, 0x24104), (0x0d3a, 0x09e18), (0x0d3b, 0x04cb0), (0x0d3c, 0x09d0c), (0x0d3d, 0x2a1b4),
    (0x0d3e, 0x2a0ed), (0x0d3f, 0x2a0f3), (0x0d40, 0x2992f), (0x0d41, 0x09da5), (0x0d42, 0x084bd), (0x0d43, 0x26e12),
    (0x0d44, 0x26fdf), (0x0d45, 0x26b82), (0x0d46, 0x085fc), (0x0d47, 0x04533), (0x0d48, 0x26da4), (0x0d49, 0x26e84),
    (0x0d4a, 0x26df0), (0x0d4b, 0x08420), (0x0d4c, 0x085ee), (0x0d4d, 0x26e00), (0x0d4e, 0x237d7), (0x0d4f, 0x26064),
    (0x0d50, 0x079e2), (0x0d51, 0x2359c), (0x0d52, 0x23640), (0x0d53, 0x0492d), (0x0d54, 0x249de), (0x0d55, 0x03d62),
    (0x0d56, 0x093db), (0x0d57, 0x092be), (0x0d58, 0x09348), (0x0d59, 0x202bf), (0x0d5a, 0x078b9), (0x0d5b, 0x09277),
    (0x0d5c, 0x0944d), (0x0d5d, 0x04fe4), (0x0d5e, 0x03440), (0x0d5f, 0x09064), (0x0d60, 0x2555d), (0x0d61, 0x0783d),
    (0x0d62, 0x07854), (0x0d63, 0x078b6), (0x0d64, 0x0784b), (0x0d65, 0x21757), (0x0d66, 0x231c9), (0x0d67, 0x24941),
    (0x0d68, 0x0369a), (0x0d69, 0x04f72), (0x0d6a, 0x06fda), (0x0d6b, 0x06fd9), (0x0d6d, 0x0701e), (0x0d6e, 0x05414),
    (0x0d6f, 0x241b5), (0x0d70, 0x057bb), (0x0d71, 0x058f3), (0x0d72, 0x0578a), (0x0d73, 0x09d16), (0x0d74, 0x057d7),
    (0x0d75, 0x07134), (0x0d76, 0x034af), (0x0d77, 0x241ac), (0x0d78, 0x071eb), (0x0d79, 0x26c40), (0x0d7a, 0x24f97),
    (0x0d7c, 0x217b5), (0x0d7d, 0x28a49), (0x0d7e, 0x0610c), (0x0d7f, 0x05ace), (0x0d80, 0x05a0b), (0x0d81, 0x042bc),
    (0x0d82, 0x24488), (0x0d83, 0x0372c), (0x0d84, 0x04b7b), (0x0d85, 0x289fc), (0x0d86, 0x093bb), (0x0d87, 0x093b8),
    (0x0d88, 0x218d6), (0x0d89, 0x20f1d), (0x0d8a, 0x08472), (0x0d8b, 0x26cc0), (0x0d8c, 0x21413), (0x0d8d, 0x242fa),
    (0x0d8e, 0x22c26), (0x0d8f, 0x243c1), (0x0d90, 0x05994), (0x0d91, 0x23db7), (0x0d92, 0x26741), (0x0d93, 0x07da8),
    (0x0d94, 0x2615b), (0x0d95, 0x260a4), (0x0d96, 0x249b9), (0x0d97, 0x2498b), (0x0d98, 0x289fa), (0x0d99, 0x092e5),
    (0x0d9a, 0x073e2), (0x0d9b, 0x03ee9), (0x0d9c, 0x074b4), (0x0d9d, 0x28b63), (0x0d9e, 0x2189f), (0x0d9f, 0x03ee1),
    (0x0da0, 0x24ab3), (0x0da1, 0x06ad8), (0x0da2, 0x073f3), (0x0da3, 0x073fb), (0x0da4, 0x03ed6), (0x0da5, 0x24a3e),
    (0x0da6, 0x24a94), (0x0da7, 0x217d9), (0x0da8, 0x24a66), (0x0da9, 0x203a7), (0x0daa, 0x21424), (0x0dab, 0x249e5),
    (0x0dac, 0x07448), (0x0dad, 0x24916), (0x0dae, 0x070a5), (0x0daf, 0x24976), (0x0db0, 0x09284), (0x0db1, 0x073e6),
    (0x0db2, 0x0935f), (0x0db3, 0x204fe), (0x0db4, 0x09331), (0x0db5, 0x28ace), (0x0db6, 0x28a16), (0x0db7, 0x09386),
    (0x0db8, 0x28be7), (0x0db9, 0x255d5), (0x0dba, 0x04935), (0x0dbb, 0x28a82), (0x0dbc, 0x0716b), (0x0dbd, 0x24943),
    (0x0dbe, 0x20cff), (0x0dbf, 0x056a4), (0x0dc0, 0x2061a), (0x0dc1, 0x20beb), (0x0dc2, 0x20cb8), (0x0dc3, 0x05502),
    (0x0dc4, 0x079c4), (0x0dc5, 0x217fa), (0x0dc6, 0x07dfe), (0x0dc7, 0x216c2), (0x0dc8, 0x24a50), (0x0dc9, 0x21852),
    (0x0dca, 0x0452e), (0x0dcb, 0x09401), (0x0dcc, 0x0370a), (0x0dcd, 0x28ac0), (0x0dce, 0x249ad), (0x0dcf, 0x059b0),
    (0x0dd0, 0x218bf), (0x0dd1, 0x21883), (0x0dd2, 0x27484), (0x0dd3, 0x05aa1), (0x0dd4, 0x036e2), (0x0dd5, 0x23d5b),
    (0x0dd6, 0x036b0), (0x0dd7, 0x0925f), (0x0dd8, 0x05a79), (0x0dd9, 0x28a81), (0x0dda, 0x21862), (0x0ddb, 0x09374),
    (0x0ddc, 0x03ccd), (0x0ddd, 0x20ab4), (0x0dde, 0x04a96), (0x0ddf, 0x0398a), (0x0de0, 0x050f4), (0x0de1, 0x03d69),
    (0x0de2, 0x03d4c), (0x0de3, 0x2139c), (0x0de4, 0x07175), (0x0de5, 0x042fb), (0x0de6, 0x28218), (0x0de7, 0x06e0f),
    (0x0de8, 0x290e4), (0x0de9, 0x044eb), (0x0dea, 0x06d57), (0x0deb, 0x27e4f), (0x0dec, 0x07067), (0x0ded, 0x06caf),
    (0x0dee, 0x03cd6), (0x0def, 0x23fed), (0x0df0, 0x23e2d), (0x0df1, 0x06e02), (0x0df2, 0x06f0c), (0x0df3, 0x03d6f),
    (0x0df4, 0x203f5), (0x0df5, 0x07551), (0x0df6, 0x036bc), (0x0df7, 0x034c8), (0x0df8, 0x04680), (0x0df9, 0x03eda),
    (0x0dfa, 0x04871), (0x0dfb, 0x059c4), (0x0dfc, 0x0926e), (0x0dfd, 0x0493e), (0x0dfe, 0x08f41), (0x0dff, 0x28c1c),
    (0x0e00, 0x26bc0), (0x0e01, 0x05812), (0x0e02, 0x057c8), (0x0e03, 0x036d6), (0x0e04, 0x21452), (0x0e05, 0x070fe),
    (0x0e06, 0x24362), (0x0e07, 0x24a71), (0x0e08, 0x22fe3), (0x0e09, 0x212b0), (0x0e0a, 0x223bd), (0x0e0b, 0x068b9),
    (0x0e0c, 0x06967), (0x0e0d, 0x21398), (0x0e0e, 0x234e5), (0x0e0f, 0x27bf4), (0x0e10, 0x236df), (0x0e11, 0x28a83),
    (0x0e12, 0x237d6), (0x0e13, 0x233fa), (0x0e14, 0x24c9f), (0x0e15, 0x06a1a), (0x0e16, 0x236ad), (0x0e17, 0x26cb7),
    (0x0e18, 0x0843e), (0x0e19, 0x044df), (0x0e1a, 0x044ce), (0x0e1b, 0x26d26), (0x0e1c, 0x26d51), (0x0e1d, 0x26c82),
    (0x0e1e, 0x26fde), (0x0e1f, 0x06f17), (0x0e20, 0x27109), (0x0e21, 0x0833d), (0x0e22, 0x2173a), (0x0e23, 0x083ed),
    (0x0e24, 0x26c80), (0x0e25, 0x27053), (0x0e26, 0x217db), (0x0e27, 0x05989), (0x0e28, 0x05a82), (0x0e29, 0x217b3),
    (0x0e2a, 0x05a61), (0x0e2b, 0x05a71), (0x0e2c, 0x21905), (0x0e2d, 0x241fc), (0x0e2e, 0x0372d), (0x0e2f, 0x059ef),
    (0x0e30, 0x2173c), (0x0e31, 0x036c7), (0x0e32, 0x0718e), (0x0e33, 0x09390), (0x0e34, 0x0669a), (0x0e35, 0x242a5),
    (0x0e36, 0x05a6e), (0x0e37, 0x05a2b), (0x0e38, 0x24293), (0x0e39, 0x06a2b), (0x0e3a, 0x23ef9), (0x0e3b, 0x27736),
    (0x0e3c, 0x2445b), (0x0e3d, 0x242ca), (0x0e3e, 0x0711d), (0x0e3f, 0x24259), (0x0e40, 0x289e1), (0x0e41, 0x04fb0),
    (0x0e42, 0x26d28), (0x0e43, 0x05cc2), (0x0e44, 0x244ce), (0x0e45, 0x27e4d), (0x0e46, 0x243bd), (0x0e47, 0x06a0c),
    (0x0e48, 0x24256), (0x0e49, 0x21304), (0x0e4a, 0x070a6), (0x0e4b, 0x07133), (0x0e4c, 0x243e9), (0x0e4d, 0x03da5),
    (0x0e4e, 0x06cdf), (0x0e4f, 0x2f825), (0x0e50, 0x24a4f), (0x0e51, 0x07e65), (0x0e52, 0x059eb), (0x0e53, 0x05d2f),
    (0x0e54, 0x03df3), (0x0e55, 0x05f5c), (0x0e56, 0x24a5d), (0x0e57, 0x217df), (0x0e58, 0x07da4), (0x0e59, 0x08426),
    (0x0e5a, 0x05485), (0x0e5b, 0x23afa), (0x0e5c, 0x23300), (0x0e5d, 0x20214), (0x0e5e, 0x0577e), (0x0e5f, 0x208d5),
    (0x0e60, 0x20619), (0x0e61, 0x03fe5), (0x0e62, 0x21f9e), (0x0e63, 0x2a2b6), (0x0e64, 0x07003), (0x0e65, 0x2915b),
    (0x0e66, 0x05d70), (0x0e67, 0x0738f), (0x0e68, 0x07cd3), (0x0e69, 0x28a59), (0x0e6a, 0x29420), (0x0e6b, 0x04fc8),
    (0x0e6c, 0x07fe7), (0x0e6d, 0x072cd), (0x0e6e, 0x07310), (0x0e6f, 0x27af4), (0x0e70, 0x07338), (0x0e71, 0x07339),
    (0x0e72, 0x256f6), (0x0e73, 0x07341), (0x0e74, 0x07348), (0x0e75, 0x03ea9), (0x0e76, 0x27b18), (0x0e77, 0x0906c),
    (0x0e78, 0x071f5), (0x0e79, 0x248f2), (0x0e7a, 0x073e1), (0x0e7b, 0x081f6), (0x0e7c, 0x03eca), (0x0e7d, 0x0770c),
    (0x0e7e, 0x03ed1), (0x0e7f, 0x06ca2), (0x0e80, 0x056fd), (0x0e81, 0x07419), (0x0e82, 0x0741e), (0x0e83, 0x0741f),
    (0x0e84, 0x03ee2), (0x0e85, 0x03ef0), (0x0e86, 0x03ef4), (0x0e87, 0x03efa), (0x0e88, 0x074d3), (0x0e89, 0x03f0e),
    (0x0e8a, 0x03f53), (0x0e8b, 0x07542), (0x0e8c, 0x0756d), (0x0e8d, 0x07572), (0x0e8e, 0x0758d), (0x0e8f, 0x03f7c),
    (0x0e90, 0x075c8), (0x0e91, 0x075dc), (0x0e92, 0x03fc0), (0x0e93, 0x0764d), (0x0e94, 0x03fd7), (0x0e95, 0x07674),
    (0x0e96, 0x03fdc), (0x0e97, 0x0767a), (0x0e98, 0x24f5c), (0x0e99, 0x07188), (0x0e9a, 0x05623), (0x0e9b, 0x08980),
    (0x0e9c, 0x05869), (0x0e9d, 0x0401d), (0x0e9e, 0x07743), (0x0e9f, 0x04039), (0x0ea0, 0x06761), (0x0ea1, 0x04045),
    (0x0ea2, 0x035db), (0x0ea3, 0x07798), (0x0ea4, 0x0406a), (0x0ea5, 0x0406f), (0x0ea6, 0x05c5e), (0x0ea7, 0x077be),
    (0x0ea8, 0x077cb), (0x0ea9, 0x058f2), (0x0eaa, 0x07818), (0x0eab, 0x070b9), (0x0eac, 0x0781c), (0x0ead, 0x040a8),
    (0x0eae, 0x07839), (0x0eaf, 0x07847), (0x0eb0, 0x07851), (0x0eb1, 0x07866), (0x0eb2, 0x08448), (0x0eb3, 0x25535),
    (0x0eb4, 0x07933), (0x0eb5, 0x06803), (0x0eb6, 0x07932), (0x0eb7, 0x04103), (0x0eb8, 0x04109), (0x0eb9, 0x07991),
    (0x0eba, 0x07999), (0x0ebb, 0x08fbb), (0x0ebc, 0x07a06), (0x0ebd, 0x08fbc), (0x0ebe, 0x04167), (0x0ebf, 0x07a91),
    (0x0ec0, 0x041b2), (0x0ec1, 0x07abc), (0x0ec2, 0x08279), (0x0ec3, 0x041c4), (0x0ec4, 0x07acf), (0x0ec5, 0x07adb),
    (0x0ec6, 0x041cf), (0x0ec7, 0x04e21), (0x0ec8, 0x07b62), (0x0ec9, 0x07b6c), (0x0eca, 0x07b7b), (0x0ecb, 0x07c12),
    (0x0ecc, 0x07c1b), (0x0ecd, 0x04260), (0x0ece, 0x0427a), (0x0ecf, 0x07c7b), (0x0ed0, 0x07c9c), (0x0ed1, 0x0428c),
    (0x0ed2, 0x07cb8), (0x0ed3, 0x04294), (0x0ed4, 0x07ced), (0x0ed5, 0x08f93), (0x0ed6, 0x070c0), (0x0ed7, 0x20ccf),
    (0x0ed8, 0x07dcf), (0x0ed9, 0x07dd4), (0x0eda, 0x07dd0), (0x0edb, 0x07dfd), (0x0edc, 0x07fae), (0x0edd, 0x07fb4),
    (0x0ede, 0x0729f), (0x0edf, 0x04397), (0x0ee0, 0x08020), (0x0ee1, 0x08025), (0x0ee2, 0x07b39), (0x0ee3, 0x0802e),
    (0x0ee4, 0x08031), (0x0ee5, 0x08054), (0x0ee6, 0x03dcc), (0x0ee7, 0x057b4), (0x0ee8, 0x070a0), (0x0ee9, 0x080b7),
    (0x0eea, 0x080e9), (0x0eeb, 0x043ed), (0x0eec, 0x0810c), (0x0eed, 0x0732a), (0x0eee, 0x0810e), (0x0eef, 0x08112),
    (0x0ef0, 0x07560), (0x0ef1, 0x08114), (0x0ef2, 0x04401), (0x0ef3, 0x03b39), (0x0ef4, 0x08156), (0x0ef5, 0x08159),
    (0x0ef6, 0x0815a), (0x0ef7, 0x04413), (0x0ef8, 0x0583a), (0x0ef9, 0x0817c), (0x0efa, 0x08184), (0x0efb, 0x04425),
    (0x0efc, 0x08193), (0x0efd, 0x0442d), (0x0efe, 0x081a5), (0x0eff, 0x057ef), (0x0f00, 0x081c1), (0x0f01, 0x081e4),
    (0x0f02, 0x08254), (0x0f03, 0x0448f), (0x0f04, 0x082a6), (0x0f05, 0x08276), (0x0f06, 0x082ca), (0x0f07, 0x082d8),
    (0x0f08, 0x082ff), (0x0f09, 0x044b0), (0x0f0a, 0x08357), (0x0f0b, 0x09669), (0x0f0c, 0x0698a), (0x0f0d, 0x08405),
    (0x0f0e, 0x070f5), (0x0f0f, 0x08464), (0x0f10, 0x060e3), (0x0f11, 0x08488), (0x0f12, 0x04504), (0x0f13, 0x084be),
    (0x0f14, 0x084e1), (0x0f15, 0x084f8), (0x0f16, 0x08510), (0x0f17, 0x08538), (0x0f18, 0x08552), (0x0f19, 0x0453b),
    (0x0f1a, 0x0856f), (0x0f1b, 0x08570), (0x0f1c, 0x085e0), (0x0f1d, 0x04577), (0x0f1e, 0x08672), (0x0f1f, 0x08692),
    (0x0f20, 0x086b2), (0x0f21, 0x086ef), (0x0f22, 0x09645), (0x0f23, 0x0878b), (0x0f24, 0x04606), (0x0f25, 0x04617),
    (0x0f26, 0x088ae), (0x0f27, 0x088ff), (0x0f28, 0x08924), (0x0f29, 0x08947), (0x0f2a, 0x08991), (0x0f2b, 0x27967),
    (0x0f2c, 0x08a29), (0x0f2d, 0x08a38), (0x0f2e, 0x08a94), (0x0f2f, 0x08ab4), (0x0f30, 0x08c51), (0x0f31, 0x08cd4),
    (0x0f32, 0x08cf2), (0x0f33, 0x08d1c), (0x0f34, 0x04798), (0x0f35, 0x0585f), (0x0f36, 0x08dc3), (0x0f37, 0x047ed),
    (0x0f38, 0x04eee), (0x0f39, 0x08e3a), (0x0f3a, 0x055d8), (0x0f3b, 0x05754), (0x0f3c, 0x08e71), (0x0f3d, 0x055f5),
    (0x0f3e, 0x08eb0), (0x0f3f, 0x04837), (0x0f40, 0x08ece), (0x0f41, 0x08ee2), (0x0f42, 0x08ee4), (0x0f43, 0x08eed),
    (0x0f44, 0x08ef2), (0x0f45, 0x08fb7), (0x0f46, 0x08fc1), (0x0f47, 0x08fca), (0x0f48, 0x08fcc), (0x0f49, 0x09033),
    (0x0f4a, 0x099c4), (0x0f4b, 0x048ad), (0x0f4c, 0x098e0), (0x0f4d, 0x09213), (0x0f4e, 0x0491e), (0x0f4f, 0x09228),
    (0x0f50, 0x09258), (0x0f51, 0x0926b), (0x0f52, 0x092b1), (0x0f53, 0x092ae), (0x0f54, 0x092bf), (0x0f55, 0x092e3),
    (0x0f56, 0x092eb), (0x0f57, 0x092f3), (0x0f58, 0x092f4), (0x0f59, 0x092fd), (0x0f5a, 0x09343), (0x0f5b, 0x09384),
    (0x0f5c, 0x093ad), (0x0f5d, 0x04945), (0x0f5e, 0x04951), (0x0f5f, 0x09ebf), (0x0f60, 0x09417), (0x0f61, 0x05301),
    (0x0f62, 0x0941d), (0x0f63, 0x0942d), (0x0f64, 0x0943e), (0x0f65, 0x0496a), (0x0f66, 0x09454), (0x0f67, 0x09479),
    (0x0f68, 0x0952d), (0x0f69, 0x095a2), (0x0f6a, 0x049a7), (0x0f6b, 0x095f4), (0x0f6c, 0x09633), (0x0f6d, 0x049e5),
    (0x0f6e, 0x067a0), (0x0f6f, 0x04a24), (0x0f70, 0x09740), (0x0f71, 0x04a35), (0x0f72, 0x097b2), (0x0f73, 0x097c2),
    (0x0f74, 0x05654), (0x0f75, 0x04ae4), (0x0f76, 0x060e8), (0x0f77, 0x098b9), (0x0f78, 0x04b19), (0x0f79, 0x098f1),
    (0x0f7a, 0x05844), (0x0f7b, 0x0990e), (0x0f7c, 0x09919), (0x0f7d, 0x051b4), (0x0f7e, 0x0991c), (0x0f7f, 0x09937),
    (0x0f80, 0x09942), (0x0f81, 0x0995d), (0x0f82, 0x09962), (0x0f83, 0x04b70), (0x0f84, 0x099c5), (0x0f85, 0x04b9d),
    (0x0f86, 0x09a3c), (0x0f87, 0x09b0f), (0x0f88, 0x07a83), (0x0f89, 0x09b69), (0x0f8a, 0x09b81), (0x0f8b, 0x09bdd),
    (0x0f8c, 0x09bf1), (0x0f8d, 0x09bf4), (0x0f8e, 0x04c6d), (0x0f8f, 0x09c20), (0x0f90, 0x0376f), (0x0f91, 0x21bc2),
    (0x0f92, 0x09d49), (0x0f93, 0x09c3a), (0x0f94, 0x09efe), (0x0f95, 0x05650), (0x0f96, 0x09d93), (0x0f97, 0x09dbd),
    (0x0f98, 0x09dc0), (0x0f99, 0x09dfc), (0x0f9a, 0x094f6), (0x0f9b, 0x08fb6), (0x0f9c, 0x09e7b), (0x0f9d, 0x09eac),
    (0x0f9e, 0x09eb1), (0x0f9f, 0x09ebd), (0x0fa0, 0x09ec6), (0x0fa1, 0x094dc), (0x0fa2, 0x09ee2), (0x0fa3, 0x09ef1),
    (0x0fa4, 0x09ef8), (0x0fa5, 0x07ac8), (0x0fa6, 0x09f44), (0x0fa7, 0x20094), (0x0fa8, 0x202b7), (0x0fa9, 0x203a0),
    (0x0faa, 0x0691a), (0x0fab, 0x094c3), (0x0fac, 0x059ac), (0x0fad, 0x204d7), (0x0fae, 0x05840), (0x0faf, 0x094c1),
    (0x0fb0, 0x037b9), (0x0fb1, 0x205d5), (0x0fb2, 0x20615), (0x0fb3, 0x20676), (0x0fb4, 0x216ba), (0x0fb5, 0x05757),
    (0x0fb6, 0x07173), (0x0fb7, 0x20ac2), (0x0fb8, 0x20acd), (0x0fb9, 0x20bbf), (0x0fba, 0x0546a), (0x0fbb, 0x2f83b),
    (0x0fbc, 0x20bcb), (0x0fbd, 0x0549e), (0x0fbe, 0x20bfb), (0x0fbf, 0x20c3b), (0x0fc0, 0x20c53), (0x0fc1, 0x20c65),
    (0x0fc2, 0x20c7c), (0x0fc3, 0x060e7), (0x0fc4, 0x20c8d), (0x0fc5, 0x0567a), (0x0fc6, 0x20cb5), (0x0fc7, 0x20cdd),
    (0x0fc8, 0x20ced), (0x0fc9, 0x20d6f), (0x0fca, 0x20db2), (0x0fcb, 0x20dc8), (0x0fcc, 0x06955), (0x0fcd, 0x09c2f),
    (0x0fce, 0x087a5), (0x0fcf, 0x20e04), (0x0fd0, 0x20e0e), (0x0fd1, 0x20ed7), (0x0fd2, 0x20f90), (0x0fd3, 0x20f2d),
    (0x0fd4, 0x20e73), (0x0fd5, 0x05c20), (0x0fd6, 0x20fbc), (0x0fd7, 0x05e0b), (0x0fd8, 0x2105c), (0x0fd9, 0x2104f),
    (0x0fda, 0x21076), (0x0fdb, 0x0671e), (0x0fdc, 0x2107b), (0x0fdd, 0x21088), (0x0fde, 0x21096), (0x0fdf, 0x03647),
    (0x0fe0, 0x210bf), (0x0fe1, 0x210d3), (0x0fe2, 0x2112f), (0x0fe3, 0x2113b), (0x0fe4, 0x05364), (0x0fe5, 0x084ad),
    (0x0fe6, 0x212e3), (0x0fe7, 0x21375), (0x0fe8, 0x21336), (0x0fe9, 0x08b81), (0x0fea, 0x21577), (0x0feb, 0x21619),
    (0x0fec, 0x217c3), (0x0fed, 0x217c7), (0x0fee, 0x04e78), (0x0fef, 0x070bb), (0x0ff0, 0x2182d), (0x0ff1, 0x2196a),
    (0x0ff2, 0x21a2d), (0x0ff3, 0x21a45), (0x0ff4, 0x21c2a), (0x0ff5, 0x21c70), (0x0ff6, 0x21cac), (0x0ff7, 0x21ec8),
    (0x0ff8, 0x062c3), (0x0ff9, 0x21ed5), (0x0ffa, 0x21f15), (0x0ffb, 0x07198), (0x0ffc, 0x06855), (0x0ffd, 0x22045),
    (0x0ffe, 0x069e9), (0x0fff, 0x036c8), (0x1000, 0x2227c), (0x1001, 0x223d7), (0x1002, 0x223fa), (0x1003, 0x2272a),
    (0x1004, 0x22871), (0x1005, 0x2294f), (0x1006, 0x082fd), (0x1007, 0x22967), (0x1008, 0x22993), (0x1009, 0x22ad5),
    (0x100a, 0x089a5), (0x100b, 0x22ae8), (0x100c, 0x08fa0), (0x100d, 0x22b0e), (0x100e, 0x097b8), (0x100f, 0x22b3f),
    (0x1010, 0x09847), (0x1011, 0x09abd), (0x1012, 0x22c4c), (0x1014, 0x22c88), (0x1015, 0x22cb7), (0x1016, 0x25be8),
    (0x1017, 0x22d08), (0x1018, 0x22d12), (0x1019, 0x22db7), (0x101a, 0x22d95), (0x101b, 0x22e42), (0x101c, 0x22f74),
    (0x101d, 0x22fcc), (0x101e, 0x23033), (0x101f, 0x23066), (0x1020, 0x2331f), (0x1021, 0x233de), (0x1022, 0x05fb1),
    (0x1023, 0x06648), (0x1024, 0x066bf), (0x1025, 0x27a79), (0x1026, 0x23567), (0x1027, 0x235f3), (0x1029, 0x249ba),
    (0x102b, 0x2361a), (0x102c, 0x23716), (0x102e, 0x20346), (0x102f, 0x058b5), (0x1030, 0x0670e), (0x1031, 0x06918),
    (0x1032, 0x23aa7), (0x1033, 0x27657), (0x1034, 0x25fe2), (0x1035, 0x23e11), (0x1036, 0x23eb9), (0x1037, 0x275fe),
    (0x1038, 0x2209a), (0x1039, 0x048d0), (0x103a, 0x04ab8), (0x103b, 0x24119), (0x103c, 0x28a9a), (0x103d, 0x242ee),
    (0x103e, 0x2430d), (0x103f, 0x2403b), (0x1040, 0x24334), (0x1041, 0x24396), (0x1042, 0x24a45), (0x1043, 0x205ca),
    (0x1044, 0x051d2), (0x1045, 0x20611), (0x1046, 0x0599f), (0x1047, 0x21ea8), (0x1048, 0x03bbe), (0x1049, 0x23cff),
    (0x104a, 0x24404), (0x104b, 0x244d6), (0x104c, 0x05788), (0x104d, 0x24674), (0x104e, 0x0399b), (0x104f, 0x2472f),
    (0x1050, 0x285e8), (0x1051, 0x299c9), (0x1052, 0x03762), (0x1053, 0x221c3), (0x1054, 0x08b5e), (0x1055, 0x28b4e),
    (0x1057, 0x24812), (0x1058, 0x248fb), (0x1059, 0x24a15), (0x105a, 0x07209), (0x105b, 0x24ac0), (0x105c, 0x20c78),
    (0x105d, 0x05965), (0x105e, 0x24ea5), (0x105f, 0x24f86), (0x1060, 0x20779), (0x1061, 0x08eda), (0x1062, 0x2502c),
    (0x1063, 0x0528f), (0x1064, 0x0573f), (0x1065, 0x07171), (0x1066, 0x25299), (0x1067, 0x25419), (0x1068, 0x23f4a),
    (0x1069, 0x24aa7), (0x106a, 0x055bc), (0x106b, 0x25446), (0x106c, 0x2546e), (0x106d, 0x26b52), (0x106f, 0x03473),
    (0x1070, 0x2553f), (0x1071, 0x27632), (0x1072, 0x2555e), (0x1073, 0x04718), (0x1074, 0x25562), (0x1075, 0x25566),
    (0x1076, 0x257c7), (0x1077, 0x2493f), (0x1078, 0x2585d), (0x1079, 0x05066), (0x107a, 0x034fb), (0x107b, 0x233cc),
    (0x107d, 0x25903), (0x107e, 0x0477c), (0x107f, 0x28948), (0x1080, 0x25aae), (0x1081, 0x25b89), (0x1082, 0x25c06),
    (0x1083, 0x21d90), (0x1084, 0x057a1), (0x1085, 0x07151), (0x1087, 0x26102), (0x1088, 0x27c12), (0x1089, 0x09056),
    (0x108a, 0x261b2), (0x108b, 0x24f9a), (0x108c, 0x08b62), (0x108d, 0x26402), (0x108e, 0x2644a), (0x108f, 0x05d5b),
    (0x1090, 0x26bf7), (0x1092, 0x26484), (0x1093, 0x2191c), (0x1094, 0x08aea), (0x1095, 0x249f6), (0x1096, 0x26488),
    (0x1097, 0x23fef), (0x1098, 0x26512), (0x1099, 0x04bc0), (0x109a, 0x265bf), (0x109b, 0x266b5), (0x109c, 0x2271b),
    (0x109d, 0x09465), (0x109e, 0x257e1), (0x109f, 0x06195), (0x10a0, 0x05a27), (0x10a1, 0x2f8cd), (0x10a3, 0x056b9),
    (0x10a4, 0x24521), (0x10a5, 0x266fc), (0x10a6, 0x04e6a), (0x10a7, 0x24934), (0x10a8, 0x09656), (0x10a9, 0x06d8f),
    (0x10aa, 0x26cbd), (0x10ab, 0x03618), (0x10ac, 0x08977), (0x10ad, 0x26799), (0x10ae, 0x2686e), (0x10af, 0x26411),
    (0x10b0, 0x2685e), (0x10b2, 0x268c7), (0x10b3, 0x07b42), (0x10b4, 0x290c0), (0x10b5, 0x20a11), (0x10b6, 0x26926),
    (0x10b8, 0x26939), (0x10b9, 0x07a45), (0x10bb, 0x269fa), (0x10bc, 0x09a26), (0x10bd, 0x26a2d), (0x10be, 0x0365f),
    (0x10bf, 0x26469), (0x10c0, 0x20021), (0x10c1, 0x07983), (0x10c2, 0x26a34), (0x10c3, 0x26b5b), (0x10c4, 0x05d2c),
    (0x10c5, 0x23519), (0x10c7, 0x26b9d), (0x10c8, 0x046d0), (0x10c9, 0x26ca4), (0x10ca, 0x0753b), (0x10cb, 0x08865),
    (0x10cc, 0x26dae), (0x10cd, 0x058b6), (0x10ce, 0x0371c), (0x10cf, 0x2258d), (0x10d0, 0x2704b), (0x10d1, 0x271cd),
    (0x10d2, 0x03c54), (0x10d3, 0x27280), (0x10d4, 0x27285), (0x10d5, 0x09281), (0x10d6, 0x2217a), (0x10d7, 0x2728b),
    (0x10d8, 0x09330), (0x10d9, 0x272e6), (0x10da, 0x249d0), (0x10db, 0x06c39), (0x10dc, 0x0949f), (0x10dd, 0x27450),
    (0x10de, 0x20ef8), (0x10df, 0x08827), (0x10e0, 0x088f5), (0x10e1, 0x22926), (0x10e2, 0x28473), (0x10e3, 0x217b1),
    (0x10e4, 0x06eb8), (0x10e5, 0x24a2a), (0x10e6, 0x21820), (0x10e7, 0x039a4), (0x10e8, 0x036b9), (0x10eb, 0x0453f),
    (0x10ec, 0x066b6), (0x10ed, 0x29cad), (0x10ee, 0x298a4), (0x10ef, 0x08943), (0x10f0, 0x277cc), (0x10f1, 0x27858),
    (0x10f2, 0x056d6), (0x10f3, 0x040df), (0x10f4, 0x2160a), (0x10f5, 0x039a1), (0x10f6, 0x2372f), (0x10f7, 0x280e8),
    (0x10f8, 0x213c5), (0x10f9, 0x071ad), (0x10fa, 0x08366), (0x10fb, 0x279dd), (0x10fc, 0x291a8), (0x10fe, 0x04cb7),
    (0x10ff, 0x270af), (0x1100, 0x289ab), (0x1101, 0x279fd), (0x1102, 0x27a0a), (0x1103, 0x27b0b), (0x1104, 0x27d66),
    (0x1105, 0x2417a), (0x1106, 0x07b43), (0x1107, 0x0797e), (0x1108, 0x28009), (0x1109, 0x06fb5), (0x110a, 0x2a2df),
    (0x110b, 0x06a03), (0x110c, 0x28318), (0x110d, 0x053a2), (0x110e, 0x26e07), (0x110f, 0x093bf), (0x1110, 0x06836),
    (0x1111, 0x0975d), (0x1112, 0x2816f), (0x1113, 0x28023), (0x1114, 0x269b5), (0x1115, 0x213ed), (0x1116, 0x2322f),
    (0x1117, 0x28048), (0x1118, 0x05d85), (0x1119, 0x28c30), (0x111a, 0x28083), (0x111b, 0x05715), (0x111c, 0x09823),
    (0x111d, 0x28949), (0x111e, 0x05dab), (0x111f, 0x24988), (0x1120, 0x065be), (0x1121, 0x069d5), (0x1122, 0x053d2),
    (0x1123, 0x24aa5), (0x1124, 0x23f81), (0x1125, 0x03c11), (0x1126, 0x06736), (0x1127, 0x28090), (0x1128, 0x280f4),
    (0x1129, 0x2812e), (0x112a, 0x21fa1), (0x112b, 0x2814f), (0x112c, 0x28189), (0x112d, 0x281af), (0x112e, 0x2821a),
    (0x112f, 0x28306), (0x1130, 0x2832f), (0x1131, 0x2838a), (0x1132, 0x035ca), (0x1133, 0x28468), (0x1134, 0x286aa),
    (0x1135, 0x048fa), (0x1136, 0x063e6), (0x1137, 0x28956), (0x1138, 0x07808), (0x1139, 0x09255), (0x113a, 0x289b8),
    (0x113b, 0x043f2), (0x113c, 0x289e7), (0x113d, 0x043df), (0x113e, 0x289e8), (0x113f, 0x28b46), (0x1140, 0x28bd4),
    (0x1141, 0x059f8), (0x1142, 0x28c09), (0x1144, 0x28fc5), (0x1145, 0x290ec), (0x1147, 0x29110), (0x1148, 0x2913c),
    (0x1149, 0x03df7), (0x114a, 0x2915e), (0x114b, 0x24aca), (0x114c, 0x08fd0), (0x114d, 0x0728f), (0x114e, 0x0568b),
    (0x114f, 0x294e7), (0x1150, 0x295e9), (0x1151, 0x295b0), (0x1152, 0x295b8), (0x1153, 0x29732), (0x1154, 0x298d1),
    (0x1155, 0x29949), (0x1156, 0x2996a), (0x1157, 0x299c3), (0x1158, 0x29a28), (0x1159, 0x29b0e), (0x115a, 0x29d5a),
    (0x115b, 0x29d9b), (0x115c, 0x07e9f), (0x115d, 0x29ef8), (0x115e, 0x29f23), (0x115f, 0x04ca4), (0x1160, 0x09547),
    (0x1161, 0x2a293), (0x1162, 0x071a2), (0x1163, 0x2a2ff), (0x1164, 0x04d91), (0x1165, 0x09012), (0x1166, 0x2a5cb),
    (0x1167, 0x04d9c), (0x1168, 0x20c9c), (0x1169, 0x08fbe), (0x116a, 0x055c1), (0x116b, 0x08fba), (0x116c, 0x224b0),
    (0x116d, 0x08fb9), (0x116e, 0x24a93), (0x116f, 0x04509), (0x1170, 0x07e7f), (0x1171, 0x06f56), (0x1172, 0x06ab1),
    (0x1173, 0x04eea), (0x1174, 0x034e4), (0x1175, 0x28b2c), (0x1176, 0x2789d), (0x1177, 0x0373a), (0x1178, 0x08e80),
    (0x1179, 0x217f5), (0x117a, 0x28024), (0x117b, 0x28b6c), (0x117c, 0x28b99), (0x117d, 0x27a3e), (0x117e, 0x266af),
    (0x117f, 0x03deb), (0x1180, 0x27655), (0x1181, 0x23cb7), (0x1182, 0x25635), (0x1183, 0x25956), (0x1184, 0x04e9a),
    (0x1185, 0x25e81), (0x1186, 0x26258), (0x1187, 0x056bf), (0x1188, 0x20e6d), (0x1189, 0x08e0e), (0x118a, 0x05b6d),
    (0x118b, 0x23e88), (0x118c, 0x24c9e), (0x118d, 0x063de), (0x118f, 0x217f6), (0x1190, 0x2187b), (0x1191, 0x06530),
    (0x1192, 0x0562d), (0x1193, 0x25c4a), (0x1194, 0x0541a), (0x1195, 0x25311), (0x1196, 0x03dc6), (0x1197, 0x29d98),
    (0x1198, 0x04c7d), (0x1199, 0x05622), (0x119a, 0x0561e), (0x119b, 0x07f49), (0x119c, 0x25ed8), (0x119d, 0x05975),
    (0x119e, 0x23d40), (0x119f, 0x08770), (0x11a0, 0x04e1c), (0x11a1, 0x20fea), (0x11a2, 0x20d49), (0x11a3, 0x236ba),
    (0x11a4, 0x08117), (0x11a5, 0x09d5e), (0x11a6, 0x08d18), (0x11a7, 0x0763b), (0x11a8, 0x09c45), (0x11a9, 0x0764e),
    (0x11aa, 0x077b9), (0x11ab, 0x09345), (0x11ac, 0x05432), (0x11ad, 0x08148), (0x11ae, 0x082f7), (0x11af, 0x05625),
    (0x11b0, 0x08132), (0x11b1, 0x08418), (0x11b2, 0x080bd), (0x11b3, 0x055ea), (0x11b4, 0x07962), (0x11b5, 0x05643),
    (0x11b6, 0x05416), (0x11b7, 0x20e9d), (0x11b8, 0x035ce), (0x11b9, 0x05605), (0x11ba, 0x055f1), (0x11bb, 0x066f1),
    (0x11bc, 0x282e2), (0x11bd, 0x0362d), (0x11be, 0x07534), (0x11bf, 0x055f0), (0x11c0, 0x055ba), (0x11c1, 0x05497),
    (0x11c2, 0x05572), (0x11c3, 0x20c41), (0x11c4, 0x20c96), (0x11c5, 0x05ed0), (0x11c6, 0x25148), (0x11c7, 0x20e76),
    (0x11c8, 0x22c62), (0x11c9, 0x20ea2), (0x11ca, 0x09eab), (0x11cb, 0x07d5a), (0x11cc, 0x055de), (0x11cd, 0x21075),
    (0x11ce, 0x0629d), (0x11cf, 0x0976d), (0x11d0, 0x05494), (0x11d1, 0x08ccd), (0x11d2, 0x071f6), (0x11d3, 0x09176),
    (0x11d4, 0x063fc), (0x11d5, 0x063b9), (0x11d6, 0x063fe), (0x11d7, 0x05569), (0x11d8, 0x22b43), (0x11d9, 0x09c72),
    (0x11da, 0x22eb3), (0x11db, 0x0519a), (0x11dc, 0x034df), (0x11dd, 0x20da7), (0x11de, 0x051a7), (0x11df, 0x0544d),
    (0x11e0, 0x0551e), (0x11e1, 0x05513), (0x11e2, 0x07666), (0x11e3, 0x08e2d), (0x11e4, 0x2688a), (0x11e5, 0x075b1),
    (0x11e6, 0x080b6), (0x11e7, 0x08804), (0x11e8, 0x08786), (0x11e9, 0x088c7), (0x11ea, 0x081b6), (0x11eb, 0x0841c),
    (0x11ec, 0x210c1), (0x11ed, 0x044ec), (0x11ee, 0x07304), (0x11ef, 0x24706), (0x11f0, 0x05b90), (0x11f1, 0x0830b),
    (0x11f2, 0x26893), (0x11f3, 0x0567b), (0x11f4, 0x226f4), (0x11f5, 0x27d2f), (0x11f6, 0x241a3), (0x11f7, 0x27d73),
    (0x11f8, 0x26ed0), (0x11f9, 0x272b6), (0x11fa, 0x09170), (0x11fb, 0x211d9), (0x11fc, 0x09208), (0x11fd, 0x23cfc),
    (0x11fe, 0x2a6a9), (0x11ff, 0x20eac), (0x1200, 0x20ef9), (0x1201, 0x07266), (0x1202, 0x21ca2), (0x1203, 0x0474e),
    (0x1204, 0x24fc2), (0x1205, 0x27ff9), (0x1206, 0x20feb), (0x1207, 0x040fa), (0x1208, 0x09c5d), (0x1209, 0x0651f),
    (0x120a, 0x22da0), (0x120b, 0x048f3), (0x120c, 0x247e0), (0x120d, 0x29d7c), (0x120e, 0x20fec), (0x120f, 0x20e0a),
    (0x1211, 0x275a3), (0x1212, 0x20fed), (0x1214, 0x26048), (0x1215, 0x21187), (0x1216, 0x071a3), (0x1217, 0x07e8e),
    (0x1218, 0x09d50), (0x1219, 0x04e1a), (0x121a, 0x04e04), (0x121b, 0x03577), (0x121c, 0x05b0d), (0x121d, 0x06cb2),
    (0x121e, 0x05367), (0x121f, 0x036ac), (0x1220, 0x039dc), (0x1221, 0x0537d), (0x1222, 0x036a5), (0x1223, 0x24618),
    (0x1224, 0x0589a), (0x1225, 0x24b6e), (0x1226, 0x0822d), (0x1227, 0x0544b), (0x1228, 0x057aa), (0x1229, 0x25a95),
    (0x122a, 0x20979), (0x122c, 0x03a52), (0x122d, 0x22465), (0x122e, 0x07374), (0x122f, 0x29eac), (0x1230, 0x04d09),
    (0x1231, 0x09bed), (0x1232, 0x23cfe), (0x1233, 0x29f30), (0x1234, 0x04c5b), (0x1235, 0x24fa9), (0x1236, 0x2959e),
    (0x1237, 0x29fde), (0x1238, 0x0845c), (0x1239, 0x23db6), (0x123a, 0x272b2), (0x123b, 0x267b3), (0x123c, 0x23720),
    (0x123d, 0x0632e), (0x123e, 0x07d25), (0x123f, 0x23ef7), (0x1240, 0x23e2c), (0x1241, 0x03a2a), (0x1242, 0x09008),
    (0x1243, 0x052cc), (0x1244, 0x03e74), (0x1245, 0x0367a), (0x1246, 0x045e9), (0x1247, 0x2048e), (0x1248, 0x07640),
    (0x1249, 0x05af0), (0x124a, 0x20eb6), (0x124b, 0x0787a), (0x124c, 0x27f2e), (0x124d, 0x058a7), (0x124e, 0x040bf),
    (0x124f, 0x0567c), (0x1250, 0x09b8b), (0x1251, 0x05d74), (0x1252, 0x07654), (0x1253, 0x2a434), (0x1254, 0x09e85),
    (0x1255, 0x04ce1), (0x1257, 0x037fb), (0x1258, 0x06119), (0x1259, 0x230da), (0x125a, 0x243f2), (0x125c, 0x0565d),
    (0x125d, 0x212a9), (0x125e, 0x057a7), (0x125f, 0x24963), (0x1260, 0x29e06), (0x1261, 0x05234), (0x1262, 0x270ae),
    (0x1263, 0x035ad), (0x1265, 0x09d7c), (0x1266, 0x07c56), (0x1267, 0x09b39), (0x1268, 0x057de), (0x1269, 0x2176c),
    (0x126a, 0x05c53), (0x126b, 0x064d3), (0x126c, 0x294d0), (0x126d, 0x26335), (0x126e, 0x27164), (0x126f, 0x086ad),
    (0x1270, 0x20d28), (0x1271, 0x26d22), (0x1272, 0x24ae2), (0x1273, 0x20d71), (0x1275, 0x051fe), (0x1276, 0x21f0f),
    (0x1277, 0x05d8e), (0x1278, 0x09703), (0x1279, 0x21dd1), (0x127a, 0x09e81), (0x127b, 0x0904c), (0x127c, 0x07b1f),
    (0x127d, 0x09b02), (0x127e, 0x05cd1), (0x127f, 0x07ba3), (0x1280, 0x06268), (0x1281, 0x06335), (0x1282, 0x09aff),
    (0x1283, 0x07bcf), (0x1284, 0x09b2a), (0x1285, 0x07c7e), (0x1287, 0x07c42), (0x1288, 0x07c86), (0x1289, 0x09c15),
    (0x128a, 0x07bfc), (0x128b, 0x09b09), (0x128d, 0x09c1b), (0x128e, 0x2493e), (0x128f, 0x09f5a), (0x1290, 0x05573),
    (0x1291, 0x05bc3), (0x1292, 0x04ffd), (0x1293, 0x09e98), (0x1294, 0x04ff2), (0x1295, 0x05260), (0x1296, 0x03e06),
    (0x1297, 0x052d1), (0x1298, 0x05767), (0x1299, 0x05056), (0x129a, 0x059b7), (0x129b, 0x05e12), (0x129c, 0x097c8),
    (0x129d, 0x09dab), (0x129e, 0x08f5c), (0x129f, 0x05469), (0x12a0, 0x097b4), (0x12a1, 0x09940), (0x12a2, 0x097ba),
    (0x12a3, 0x0532c), (0x12a4, 0x06130), (0x12a5, 0x0692c), (0x12a6, 0x053da), (0x12a7, 0x09c0a), (0x12a8, 0x09d02),
    (0x12a9, 0x04c3b), (0x12aa, 0x09641), (0x12ab, 0x06980), (0x12ac, 0x050a6), (0x12ad, 0x07546), (0x12ae, 0x2176d),
    (0x12af, 0x099da), (0x12b0, 0x05273), (0x12b2, 0x09159), (0x12b3, 0x09681), (0x12b4, 0x0915c), (0x12b6, 0x09151),
    (0x12b7, 0x28e97), (0x12b8, 0x0637f), (0x12b9, 0x26d23), (0x12ba, 0x06aca), (0x12bb, 0x05611), (0x12bc, 0x0918e),
    (0x12bd, 0x0757a), (0x12be, 0x06285), (0x12bf, 0x203fc), (0x12c0, 0x0734f), (0x12c1, 0x07c70), (0x12c2, 0x25c21),
    (0x12c3, 0x23cfd), (0x12c5, 0x24919), (0x12c6, 0x076d6), (0x12c7, 0x09b9d), (0x12c8, 0x04e2a), (0x12c9, 0x20cd4),
    (0x12ca, 0x083be), (0x12cb, 0x08842), (0x12cd, 0x05c4a), (0x12ce, 0x069c0), (0x12d0, 0x0577a), (0x12d1, 0x0521f),
    (0x12d2, 0x05df5), (0x12d3, 0x04ece), (0x12d4, 0x06c31), (0x12d5, 0x201f2), (0x12d6, 0x04f39), (0x12d7, 0x0549c),
    (0x12d8, 0x054da), (0x12d9, 0x0529a), (0x12da, 0x08d82), (0x12db, 0x035fe), (0x12dd, 0x035f3), (0x12df, 0x06b52),
    (0x12e0, 0x0917c), (0x12e1, 0x09fa5), (0x12e2, 0x09b97), (0x12e3, 0x0982e), (0x12e4, 0x098b4), (0x12e5, 0x09aba),
    (0x12e6, 0x09ea8), (0x12e7, 0x09e84), (0x12e8, 0x0717a), (0x12e9, 0x07b14), (0x12eb, 0x06bfa), (0x12ec, 0x08818),
    (0x12ed, 0x07f78), (0x12ef, 0x05620), (0x12f0, 0x2a64a), (0x12f1, 0x08e77), (0x12f2, 0x09f53), (0x12f4, 0x08dd4),
    (0x12f5, 0x08e4f), (0x12f6, 0x09e1c), (0x12f7, 0x08e01), (0x12f8, 0x06282), (0x12f9, 0x2837d), (0x12fa, 0x08e28),
    (0x12fb, 0x08e75), (0x12fc, 0x07ad3), (0x12fd, 0x24a77), (0x12fe, 0x07a3e), (0x12ff, 0x078d8), (0x1300, 0x06cea),
    (0x1301, 0x08a67), (0x1302, 0x07607), (0x1303, 0x28a5a), (0x1304, 0x09f26), (0x1305, 0x06cce), (0x1306, 0x087d6),
    (0x1307, 0x075c3), (0x1308, 0x2a2b2), (0x1309, 0x07853), (0x130a, 0x2f840), (0x130b, 0x08d0c), (0x130c, 0x072e2),
    (0x130d, 0x07371), (0x130e, 0x08b2d), (0x130f, 0x07302), (0x1310, 0x074f1), (0x1311, 0x08ceb), (0x1312, 0x24abb),
    (0x1313, 0x0862f), (0x1314, 0x05fba), (0x1315, 0x088a0), (0x1316, 0x044b7), (0x1318, 0x2183b), (0x1319, 0x26e05),
    (0x131b, 0x08a7e), (0x131c, 0x2251b), (0x131e, 0x060fd), (0x131f, 0x07667), (0x1320, 0x09ad7), (0x1321, 0x09d44),
    (0x1322, 0x0936e), (0x1323, 0x09b8f), (0x1324, 0x087f5), (0x1327, 0x08cf7), (0x1328, 0x0732c), (0x1329, 0x09721),
    (0x132a, 0x09bb0), (0x132b, 0x035d6), (0x132c, 0x072b2), (0x132d, 0x04c07), (0x132e, 0x07c51), (0x132f, 0x0994a),
    (0x1330, 0x26159), (0x1331, 0x06159), (0x1332, 0x04c04), (0x1333, 0x09e96), (0x1334, 0x0617d), (0x1336, 0x0575f),
    (0x1337, 0x0616f), (0x1338, 0x062a6), (0x1339, 0x06239), (0x133b, 0x03a5c), (0x133c, 0x061e2), (0x133d, 0x053aa),
    (0x133e, 0x233f5), (0x133f, 0x06364), (0x1340, 0x06802), (0x1341, 0x035d2), (0x1342, 0x05d57), (0x1343, 0x28bc2),
    (0x1344, 0x08fda), (0x1345, 0x28e39), (0x1347, 0x050d9), (0x1348, 0x21d46), (0x1349, 0x07906), (0x134a, 0x05332),
    (0x134b, 0x09638), (0x134c, 0x20f3b), (0x134d, 0x04065), (0x134f, 0x077fe), (0x1351, 0x07cc2), (0x1352, 0x25f1a),
    (0x1353, 0x07cda), (0x1354, 0x07a2d), (0x1355, 0x08066), (0x1356, 0x08063), (0x1357, 0x07d4d), (0x1358, 0x07505),
    (0x1359, 0x074f2), (0x135a, 0x08994), (0x135b, 0x0821a), (0x135c, 0x0670c), (0x135d, 0x08062), (0x135e, 0x27486),
    (0x135f, 0x0805b), (0x1360, 0x074f0), (0x1361, 0x08103), (0x1362, 0x07724), (0x1363, 0x08989), (0x1364, 0x267cc),
    (0x1365, 0x07553), (0x1366, 0x26ed1), (0x1367, 0x087a9), (0x1368, 0x087ce), (0x1369, 0x081c8), (0x136a, 0x0878c),
    (0x136b, 0x08a49), (0x136c, 0x08cad), (0x136d, 0x08b43), (0x136e, 0x0772b), (0x136f, 0x074f8), (0x1370, 0x084da),
    (0x1371, 0x03635), (0x1372, 0x069b2), (0x1373, 0x08da6), (0x1375, 0x089a9), (0x1377, 0x06db9), (0x1378, 0x087c1),
    (0x1379, 0x24011), (0x137a, 0x074e7), (0x137b, 0x03ddb), (0x137c, 0x07176), (0x137d, 0x060a4), (0x137e, 0x0619c),
    (0x137f, 0x03cd1), (0x1381, 0x06077), (0x1383, 0x07f71), (0x1384, 0x28b2d), (0x1386, 0x060e9), (0x1387, 0x04b7e),
    (0x1388, 0x05220), (0x1389, 0x03c18), (0x138a, 0x23cc7), (0x138b, 0x25ed7), (0x138c, 0x27656), (0x138d, 0x25531),
    (0x138e, 0x21944), (0x138f, 0x212fe), (0x1390, 0x29903), (0x1391, 0x26ddc), (0x1392, 0x270ad), (0x1393, 0x05cc1),
    (0x1394, 0x261ad), (0x1395, 0x28a0f), (0x1396, 0x23677), (0x1397, 0x200ee), (0x1398, 0x26846), (0x1399, 0x24f0e),
    (0x139a, 0x04562), (0x139b, 0x05b1f), (0x139c, 0x2634c), (0x139d, 0x09f50), (0x139e, 0x09ea6), (0x139f, 0x2626b),
    (0x13a0, 0x03000), (0x13a1, 0x0ff0c), (0x13a2, 0x03001), (0x13a3, 0x03002), (0x13a4, 0x0ff0e), (0x13a5, 0x02022),
    (0x13a6, 0x0ff1b), (0x13a7, 0x0ff1a), (0x13a8, 0x0ff1f), (0x13a9, 0x0ff01), (0x13aa, 0x0fe30), (0x13ab, 0x02026),
    (0x13ac, 0x02025), (0x13ad, 0x0fe50), (0x13ae, 0x0ff64), (0x13af, 0x0fe52), (0x13b0, 0x000b7), (0x13b1, 0x0fe54),
    (0x13b2, 0x0fe55), (0x13b3, 0x0fe56), (0x13b4, 0x0fe57), (0x13b5, 0x0ff5c), (0x13b6, 0x02013), (0x13b7, 0x0fe31),
    (0x13b8, 0x02014), (0x13b9, 0x0fe33), (0x13ba, 0x02574), (0x13bb, 0x0fe34), (0x13bc, 0x0fe4f), (0x13bd, 0x0ff08),
    (0x13be, 0x0ff09), (0x13bf, 0x0fe35), (0x13c0, 0x0fe36), (0x13c1, 0x0ff5b), (0x13c2, 0x0ff5d), (0x13c3, 0x0fe37),
    (0x13c4, 0x0fe38), (0x13c5, 0x03014), (0x13c6, 0x03015), (0x13c7, 0x0fe39), (0x13c8, 0x0fe3a), (0x13c9, 0x03010),
    (0x13ca, 0x03011), (0x13cb, 0x0fe3b), (0x13cc, 0x0fe3c), (0x13cd, 0x0300a), (0x13ce, 0x0300b), (0x13cf, 0x0fe3d),
    (0x13d0, 0x0fe3e), (0x13d1, 0x03008), (0x13d2, 0x03009), (0x13d3, 0x0fe3f), (0x13d4, 0x0fe40), (0x13d5, 0x0300c),
    (0x13d6, 0x0300d), (0x13d7, 0x0fe41), (0x13d8, 0x0fe42), (0x13d9, 0x0300e), (0x13da, 0x0300f), (0x13db, 0x0fe43),
    (0x13dc, 0x0fe44), (0x13dd, 0x0fe59), (0x13de, 0x0fe5a), (0x13df, 0x0fe5b), (0x13e0, 0x0fe5c), (0x13e1, 0x0fe5d),
    (0x13e2, 0x0fe5e), (0x13e3, 0x02018), (0x13e4, 0x02019), (0x13e5, 0x0201c), (0x13e6, 0x0201d), (0x13e7, 0x0301d),
    (0x13e8, 0x0301e), (0x13e9, 0x02035), (0x13ea, 0x02032), (0x13eb, 0x0ff03), (0x13ec, 0x0ff06), (0x13ed, 0x0ff0a),
    (0x13ee, 0x0203b), (0x13ef, 0x000a7), (0x13f0, 0x03003), (0x13f1, 0x025cb), (0x13f2, 0x025cf), (0x13f3, 0x025b3),
    (0x13f4, 0x025b2), (0x13f5, 0x025ce), (0x13f6, 0x02606), (0x13f7, 0x02605), (0x13f8, 0x025c7), (0x13f9, 0x025c6),
    (0x13fa, 0x025a1), (0x13fb, 0x025a0), (0x13fc, 0x025bd), (0x13fd, 0x025bc), (0x13fe, 0x032a3), (0x13ff, 0x02105),
    (0x1400, 0x0203e), (0x1401, 0x0ffe3), (0x1402, 0x0ff3f), (0x1403, 0x002cd), (0x1404, 0x0fe49), (0x1405, 0x0fe4a),
    (0x1406, 0x0fe4d), (0x1407, 0x0fe4e), (0x1408, 0x0fe4b), (0x1409, 0x0fe4c), (0x140a, 0x0fe5f), (0x140b, 0x0fe60),
    (0x140c, 0x0fe61), (0x140d, 0x0ff0b), (0x140e, 0x0ff0d), (0x140f, 0x000d7), (0x1410, 0x000f7), (0x1411, 0x000b1),
    (0x1412, 0x0221a), (0x1413, 0x0ff1c), (0x1414, 0x0ff1e), (0x1415, 0x0ff1d), (0x1416, 0x02266), (0x1417, 0x02267),
    (0x1418, 0x02260), (0x1419, 0x0221e), (0x141a, 0x02252), (0x141b, 0x02261), (0x141c, 0x0fe62), (0x141d, 0x0fe63),
    (0x141e, 0x0fe64), (0x141f, 0x0fe65), (0x1420, 0x0fe66), (0x1421, 0x0223c), (0x1422, 0x02229), (0x1423, 0x0222a),
    (0x1424, 0x022a5), (0x1425, 0x02220), (0x1426, 0x0221f), (0x1427, 0x022bf), (0x1428, 0x033d2), (0x1429, 0x033d1),
    (0x142a, 0x0222b), (0x142b, 0x0222e), (0x142c, 0x02235), (0x142d, 0x02234), (0x142e, 0x02640), (0x142f, 0x02642),
    (0x1430, 0x02641), (0x1431, 0x02609), (0x1432, 0x02191), (0x1433, 0x02193), (0x1434, 0x02190), (0x1435, 0x02192),
    (0x1436, 0x02196), (0x1437, 0x02197), (0x1438, 0x02199), (0x1439, 0x02198), (0x143a, 0x02225), (0x143b, 0x02223),
    (0x143c, 0x0ff0f), (0x143d, 0x0ff3c), (0x143e, 0x0ff0f), (0x143f, 0x0ff3c), (0x1440, 0x0ff04), (0x1441, 0x000a5),
    (0x1442, 0x03012), (0x1443, 0x000a2), (0x1444, 0x000a3), (0x1445, 0x0ff05), (0x1446, 0x0ff20), (0x1447, 0x02103),
    (0x1448, 0x02109), (0x1449, 0x0fe69), (0x144a, 0x0fe6a), (0x144b, 0x0fe6b), (0x144c, 0x033d5), (0x144d, 0x0339c),
    (0x144e, 0x0339d), (0x144f, 0x0339e), (0x1450, 0x033ce), (0x1451, 0x033a1), (0x1452, 0x0338e), (0x1453, 0x0338f),
    (0x1454, 0x033c4), (0x1455, 0x000b0), (0x1456, 0x05159), (0x1457, 0x0515b), (0x1458, 0x0515e), (0x1459, 0x0515d),
    (0x145a, 0x05161), (0x145b, 0x05163), (0x145c, 0x055e7), (0x145d, 0x074e9), (0x145e, 0x07cce), (0x145f, 0x02581),
    (0x1460, 0x02582), (0x1461, 0x02583), (0x1462, 0x02584), (0x1463, 0x02585), (0x1464, 0x02586), (0x1465, 0x02587),
    (0x1466, 0x02588), (0x1467, 0x0258f), (0x1468, 0x0258e), (0x1469, 0x0258d), (0x146a, 0x0258c), (0x146b, 0x0258b),
    (0x146c, 0x0258a), (0x146d, 0x02589), (0x146e, 0x0253c), (0x146f, 0x02534), (0x1470, 0x0252c), (0x1471, 0x02524),
    (0x1472, 0x0251c), (0x1473, 0x02594), (0x1474, 0x02500), (0x1475, 0x02502), (0x1476, 0x02595), (0x1477, 0x0250c),
    (0x1478, 0x02510), (0x1479, 0x02514), (0x147a, 0x02518), (0x147b, 0x0256d), (0x147c, 0x0256e), (0x147d, 0x02570),
    (0x147e, 0x0256f), (0x147f, 0x02550), (0x1480, 0x0255e), (0x1481, 0x0256a), (0x1482, 0x02561), (0x1483, 0x025e2),
    (0x1484, 0x025e3), (0x1485, 0x025e5), (0x1486, 0x025e4), (0x1487, 0x02571), (0x1488, 0x02572), (0x1489, 0x02573),
    (0x148a, 0x0ff10), (0x148b, 0x0ff11), (0x148c, 0x0ff12), (0x148d, 0x0ff13), (0x148e, 0x0ff14), (0x148f, 0x0ff15),
    (0x1490, 0x0ff16), (0x1491, 0x0ff17), (0x1492, 0x0ff18), (0x1493, 0x0ff19), (0x1494, 0x02160), (0x1495, 0x02161),
    (0x1496, 0x02162), (0x1497, 0x02163), (0x1498, 0x02164), (0x1499, 0x02165), (0x149a, 0x02166), (0x149b, 0x02167),
    (0x149c, 0x02168), (0x149d, 0x02169), (0x149e, 0x03021), (0x149f, 0x03022), (0x14a0, 0x03023), (0x14a1, 0x03024),
    (0x14a2, 0x03025), (0x14a3, 0x03026), (0x14a4, 0x03027), (0x14a5, 0x03028), (0x14a6, 0x03029), (0x14a7, 0x05341),
    (0x14a8, 0x05344), (0x14a9, 0x05345), (0x14aa, 0x0ff21), (0x14ab, 0x0ff22), (0x14ac, 0x0ff23), (0x14ad, 0x0ff24),
    (0x14ae, 0x0ff25), (0x14af, 0x0ff26), (0x14b0, 0x0ff27), (0x14b1, 0x0ff28), (0x14b2, 0x0ff29), (0x14b3, 0x0ff2a),
    (0x14b4, 0x0ff2b), (0x14b5, 0x0ff2c), (0x14b6, 0x0ff2d), (0x14b7, 0x0ff2e), (0x14b8, 0x0ff2f), (0x14b9, 0x0ff30),
    (0x14ba, 0x0ff31), (0x14bb, 0x0ff32), (0x14bc, 0x0ff33), (0x14bd, 0x0ff34), (0x14be, 0x0ff35), (0x14bf, 0x0ff36),
    (0x14c0, 0x0ff37), (0x14c1, 0x0ff38), (0x14c2, 0x0ff39), (0x14c3, 0x0ff3a), (0x14c4, 0x0ff41), (0x14c5, 0x0ff42),
    (0x14c6, 0x0ff43), (0x14c7, 0x0ff44), (0x14c8, 0x0ff45), (0x14c9, 0x0ff46), (0x14ca, 0x0ff47), (0x14cb, 0x0ff48),
    (0x14cc, 0x0ff49), (0x14cd, 0x0ff4a), (0x14ce, 0x0ff4b), (0x14cf, 0x0ff4c), (0x14d0, 0x0ff4d), (0x14d1, 0x0ff4e),
    (0x14d2, 0x0ff4f), (0x14d3, 0x0ff50), (0x14d4, 0x0ff51), (0x14d5, 0x0ff52), (0x14d6, 0x0ff53), (0x14d7, 0x0ff54),
    (0x14d8, 0x0ff55), (0x14d9, 0x0ff56), (0x14da, 0x0ff57), (0x14db, 0x0ff58), (0x14dc, 0x0ff59), (0x14dd, 0x0ff5a),
    (0x14de, 0x00391), (0x14df, 0x00392), (0x14e0, 0x00393), (0x14e1, 0x00394), (0x14e2, 0x00395), (0x14e3, 0x00396),
    (0x14e4, 0x00397), (0x14e5, 0x00398), (0x14e6, 0x00399), (0x14e7, 0x0039a), (0x14e8, 0x0039b), (0x14e9, 0x0039c),
    (0x14ea, 0x0039d), (0x14eb, 0x0039e), (0x14ec, 0x0039f), (0x14ed, 0x003a0), (0x14ee, 0x003a1), (0x14ef, 0x003a3),
    (0x14f0, 0x003a4), (0x14f1, 0x003a5), (0x14f2, 0x003a6), (0x14f3, 0x003a7), (0x14f4, 0x003a8), (0x14f5, 0x003a9),
    (0x14f6, 0x003b1), (0x14f7, 0x003b2), (0x14f8, 0x003b3), (0x14f9, 0x003b4), (0x14fa, 0x003b5), (0x14fb, 0x003b6),
    (0x14fc, 0x003b7), (0x14fd, 0x003b8), (0x14fe, 0x003b9), (0x14ff, 0x003ba), (0x1500, 0x003bb), (0x1501, 0x003bc),
    (0x1502, 0x003bd), (0x1503, 0x003be), (0x1504, 0x003bf), (0x1505, 0x003c0), (0x1506, 0x003c1), (0x1507, 0x003c3),
    (0x1508, 0x003c4), (0x1509, 0x003c5), (0x150a, 0x003c6), (0x150b, 0x003c7), (0x150c, 0x003c8), (0x150d, 0x003c9),
    (0x150e, 0x03105), (0x150f, 0x03106), (0x1510, 0x03107), (0x1511, 0x03108), (0x1512, 0x03109), (0x1513, 0x0310a),
    (0x1514, 0x0310b), (0x1515, 0x0310c), (0x1516, 0x0310d), (0x1517, 0x0310e), (0x1518, 0x0310f), (0x1519, 0x03110),
    (0x151a, 0x03111), (0x151b, 0x03112), (0x151c, 0x03113), (0x151d, 0x03114), (0x151e, 0x03115), (0x151f, 0x03116),
    (0x1520, 0x03117), (0x1521, 0x03118), (0x1522, 0x03119), (0x1523, 0x0311a), (0x1524, 0x0311b), (0x1525, 0x0311c),
    (0x1526, 0x0311d), (0x1527, 0x0311e), (0x1528, 0x0311f), (0x1529, 0x03120), (0x152a, 0x03121), (0x152b, 0x03122),
    (0x152c, 0x03123), (0x152d, 0x03124), (0x152e, 0x03125), (0x152f, 0x03126), (0x1530, 0x03127), (0x1531, 0x03128),
    (0x1532, 0x03129), (0x1533, 0x002d9), (0x1534, 0x002c9), (0x1535, 0x002ca), (0x1536, 0x002c7), (0x1537, 0x002cb),
    (0x1577, 0x04e00), (0x1578, 0x04e59), (0x1579, 0x04e01), (0x157a, 0x04e03), (0x157b, 0x04e43), (0x157c, 0x04e5d),
    (0x157d, 0x04e86), (0x157e, 0x04e8c), (0x157f, 0x04eba), (0x1580, 0x0513f), (0x1581, 0x05165), (0x1582, 0x0516b),
    (0x1583, 0x051e0), (0x1584, 0x05200), (0x1585, 0x05201), (0x1586, 0x0529b), (0x1587, 0x05315), (0x1588, 0x05341),
    (0x1589, 0x0535c), (0x158a, 0x053c8), (0x158b, 0x04e09), (0x158c, 0x04e0b), (0x158d, 0x04e08), (0x158e, 0x04e0a),
    (0x158f, 0x04e2b), (0x1590, 0x04e38), (0x1591, 0x051e1), (0x1592, 0x04e45), (0x1593, 0x04e48), (0x1594, 0x04e5f),
    (0x1595, 0x04e5e), (0x1596, 0x04e8e), (0x1597, 0x04ea1), (0x1598, 0x05140), (0x1599, 0x05203), (0x159a, 0x052fa),
    (0x159b, 0x05343), (0x159c, 0x053c9), (0x159d, 0x053e3), (0x159e, 0x0571f), (0x159f, 0x058eb), (0x15a0, 0x05915),
    (0x15a1, 0x05927), (0x15a2, 0x05973), (0x15a3, 0x05b50), (0x15a4, 0x05b51), (0x15a5, 0x05b53), (0x15a6, 0x05bf8),
    (0x15a7, 0x05c0f), (0x15a8, 0x05c22), (0x15a9, 0x05c38), (0x15aa, 0x05c71), (0x15ab, 0x05ddd), (0x15ac, 0x05de5),
    (0x15ad, 0x05df1), (0x15ae, 0x05df2), (0x15af, 0x05df3), (0x15b0, 0x05dfe), (0x15b1, 0x05e72), (0x15b2, 0x05efe),
    (0x15b3, 0x05f0b), (0x15b4, 0x05f13), (0x15b5, 0x0624d), (0x15b6, 0x04e11), (0x15b7, 0x04e10), (0x15b8, 0x04e0d),
    (0x15b9, 0x04e2d), (0x15ba, 0x04e30), (0x15bb, 0x04e39), (0x15bc, 0x04e4b), (0x15bd, 0x05c39), (0x15be, 0x04e88),
    (0x15bf, 0x04e91), (0x15c0, 0x04e95), (0x15c1, 0x04e92), (0x15c2, 0x04e94), (0x15c3, 0x04ea2), (0x15c4, 0x04ec1),
    (0x15c5, 0x04ec0), (0x15c6, 0x04ec3), (0x15c7, 0x04ec6), (0x15c8, 0x04ec7), (0x15c9, 0x04ecd), (0x15ca, 0x04eca),
    (0x15cb, 0x04ecb), (0x15cc, 0x04ec4), (0x15cd, 0x05143), (0x15ce, 0x05141), (0x15cf, 0x05167), (0x15d0, 0x0516d),
    (0x15d1, 0x0516e), (0x15d2, 0x0516c), (0x15d3, 0x05197), (0x15d4, 0x051f6), (0x15d5, 0x05206), (0x15d6, 0x05207),
    (0x15d7, 0x05208), (0x15d8, 0x052fb), (0x15d9, 0x052fe), (0x15da, 0x052ff), (0x15db, 0x05316), (0x15dc, 0x05339),
    (0x15dd, 0x05348), (0x15de, 0x05347), (0x15df, 0x05345), (0x15e0, 0x0535e), (0x15e1, 0x05384), (0x15e2, 0x053cb),
    (0x15e3, 0x053ca), (0x15e4, 0x053cd), (0x15e5, 0x058ec), (0x15e6, 0x05929), (0x15e7, 0x0592b), (0x15e8, 0x0592a),
    (0x15e9, 0x0592d), (0x15ea, 0x05b54), (0x15eb, 0x05c11), (0x15ec, 0x05c24), (0x15ed, 0x05c3a), (0x15ee, 0x05c6f),
    (0x15ef, 0x05df4), (0x15f0, 0x05e7b), (0x15f1, 0x05eff), (0x15f2, 0x05f14), (0x15f3, 0x05f15), (0x15f4, 0x05fc3),
    (0x15f5, 0x06208), (0x15f6, 0x06236), (0x15f7, 0x0624b), (0x15f8, 0x0624e), (0x15f9, 0x0652f), (0x15fa, 0x06587),
    (0x15fb, 0x06597), (0x15fc, 0x065a4), (0x15fd, 0x065b9), (0x15fe, 0x065e5), (0x15ff, 0x066f0), (0x1600, 0x06708),
    (0x1601, 0x06728), (0x1602, 0x06b20), (0x1603, 0x06b62), (0x1604, 0x06b79), (0x1605, 0x06bcb), (0x1606, 0x06bd4),
    (0x1607, 0x06bdb), (0x1608, 0x06c0f), (0x1609, 0x06c34), (0x160a, 0x0706b), (0x160b, 0x0722a), (0x160c, 0x07236),
    (0x160d, 0x0723b), (0x160e, 0x07247), (0x160f, 0x07259), (0x1610, 0x0725b), (0x1611, 0x072ac), (0x1612, 0x0738b),
    (0x1613, 0x04e19), (0x1614, 0x04e16), (0x1615, 0x04e15), (0x1616, 0x04e14), (0x1617, 0x04e18), (0x1618, 0x04e3b),
    (0x1619, 0x04e4d), (0x161a, 0x04e4f), (0x161b, 0x04e4e), (0x161c, 0x04ee5), (0x161d, 0x04ed8), (0x161e, 0x04ed4),
    (0x161f, 0x04ed5), (0x1620, 0x04ed6), (0x1621, 0x04ed7), (0x1622, 0x04ee3), (0x1623, 0x04ee4), (0x1624, 0x04ed9),
    (0x1625, 0x04ede), (0x1626, 0x05145), (0x1627, 0x05144), (0x1628, 0x05189), (0x1629, 0x0518a), (0x162a, 0x051ac),
    (0x162b, 0x051f9), (0x162c, 0x051fa), (0x162d, 0x051f8), (0x162e, 0x0520a), (0x162f, 0x052a0), (0x1630, 0x0529f),
    (0x1631, 0x05305), (0x1632, 0x05306), (0x1633, 0x05317), (0x1634, 0x0531d), (0x1635, 0x04edf), (0x1636, 0x0534a),
    (0x1637, 0x05349), (0x1638, 0x05361), (0x1639, 0x05360), (0x163a, 0x0536f), (0x163b, 0x0536e), (0x163c, 0x053bb),
    (0x163d, 0x053ef), (0x163e, 0x053e4), (0x163f, 0x053f3), (0x1640, 0x053ec), (0x1641, 0x053ee), (0x1642, 0x053e9),
    (0x1643, 0x053e8), (0x1644, 0x053fc), (0x1645, 0x053f8), (0x1646, 0x053f5), (0x1647, 0x053eb), (0x1648, 0x053e6),
    (0x1649, 0x053ea), (0x164a, 0x053f2), (0x164b, 0x053f1), (0x164c, 0x053f0), (0x164d, 0x053e5), (0x164e, 0x053ed),
    (0x164f, 0x053fb), (0x1650, 0x056db), (0x1651, 0x056da), (0x1652, 0x05916), (0x1653, 0x0592e), (0x1654, 0x05931),
    (0x1655, 0x05974), (0x1656, 0x05976), (0x1657, 0x05b55), (0x1658, 0x05b83), (0x1659, 0x05c3c), (0x165a, 0x05de8),
    (0x165b, 0x05de7), (0x165c, 0x05de6), (0x165d, 0x05e02), (0x165e, 0x05e03), (0x165f, 0x05e73), (0x1660, 0x05e7c),
    (0x1661, 0x05f01), (0x1662, 0x05f18), (0x1663, 0x05f17), (0x1664, 0x05fc5), (0x1665, 0x0620a), (0x1666, 0x06253),
    (0x1667, 0x06254), (0x1668, 0x06252), (0x1669, 0x06251), (0x166a, 0x065a5), (0x166b, 0x065e6), (0x166c, 0x0672e),
    (0x166d, 0x0672c), (0x166e, 0x0672a), (0x166f, 0x0672b), (0x1670, 0x0672d), (0x1671, 0x06b63), (0x1672, 0x06bcd),
    (0x1673, 0x06c11), (0x1674, 0x06c10), (0x1675, 0x06c38), (0x1676, 0x06c41), (0x1677, 0x06c40), (0x1678, 0x06c3e),
    (0x1679, 0x072af), (0x167a, 0x07384), (0x167b, 0x07389), (0x167c, 0x074dc), (0x167d, 0x074e6), (0x167e, 0x07518),
    (0x167f, 0x0751f), (0x1680, 0x07528), (0x1681, 0x07529), (0x1682, 0x07530), (0x1683, 0x07531), (0x1684, 0x07532),
    (0x1685, 0x07533), (0x1686, 0x0758b), (0x1687, 0x0767d), (0x1688, 0x076ae), (0x1689, 0x076bf), (0x168a, 0x076ee),
    (0x168b, 0x077db), (0x168c, 0x077e2), (0x168d, 0x077f3), (0x168e, 0x0793a), (0x168f, 0x079be), (0x1690, 0x07a74),
    (0x1691, 0x07acb), (0x1692, 0x04e1e), (0x1693, 0x04e1f), (0x1694, 0x04e52), (0x1695, 0x04e53), (0x1696, 0x04e69),
    (0x1697, 0x04e99), (0x1698, 0x04ea4), (0x1699, 0x04ea6), (0x169a, 0x04ea5), (0x169b, 0x04eff), (0x169c, 0x04f09),
    (0x169d, 0x04f19), (0x169e, 0x04f0a), (0x169f, 0x04f15), (0x16a0, 0x04f0d), (0x16a1, 0x04f10), (0x16a2, 0x04f11),
    (0x16a3, 0x04f0f), (0x16a4, 0x04ef2), (0x16a5, 0x04ef6), (0x16a6, 0x04efb), (0x16a7, 0x04ef0), (0x16a8, 0x04ef3),
    (0x16a9, 0x04efd), (0x16aa, 0x04f01), (0x16ab, 0x04f0b), (0x16ac, 0x05149), (0x16ad, 0x05147), (0x16ae, 0x05146),
    (0x16af, 0x05148), (0x16b0, 0x05168), (0x16b1, 0x05171), (0x16b2, 0x0518d), (0x16b3, 0x051b0), (0x16b4, 0x05217),
    (0x16b5, 0x05211), (0x16b6, 0x05212), (0x16b7, 0x0520e), (0x16b8, 0x05216), (0x16b9, 0x052a3), (0x16ba, 0x05308),
    (0x16bb, 0x05321), (0x16bc, 0x05320), (0x16bd, 0x05370), (0x16be, 0x05371), (0x16bf, 0x05409), (0x16c0, 0x0540f),
    (0x16c1, 0x0540c), (0x16c2, 0x0540a), (0x16c3, 0x05410), (0x16c4, 0x05401), (0x16c5, 0x0540b), (0x16c6, 0x05404),
    (0x16c7, 0x05411), (0x16c8, 0x0540d), (0x16c9, 0x05408), (0x16ca, 0x05403), (0x16cb, 0x0540e), (0x16cc, 0x05406),
    (0x16cd, 0x05412), (0x16ce, 0x056e0), (0x16cf, 0x056de), (0x16d0, 0x056dd), (0x16d1, 0x05733), (0x16d2, 0x05730),
    (0x16d3, 0x05728), (0x16d4, 0x0572d), (0x16d5, 0x0572c), (0x16d6, 0x0572f), (0x16d7, 0x05729), (0x16d8, 0x05919),
    (0x16d9, 0x0591a), (0x16da, 0x05937), (0x16db, 0x05938), (0x16dc, 0x05984), (0x16dd, 0x05978), (0x16de, 0x05983),
    (0x16df, 0x0597d), (0x16e0, 0x05979), (0x16e1, 0x05982), (0x16e2, 0x05981), (0x16e3, 0x05b57), (0x16e4, 0x05b58),
    (0x16e5, 0x05b87), (0x16e6, 0x05b88), (0x16e7, 0x05b85), (0x16e8, 0x05b89), (0x16e9, 0x05bfa), (0x16ea, 0x05c16),
    (0x16eb, 0x05c79), (0x16ec, 0x05dde), (0x16ed, 0x05e06), (0x16ee, 0x05e76), (0x16ef, 0x05e74), (0x16f0, 0x05f0f),
    (0x16f1, 0x05f1b), (0x16f2, 0x05fd9), (0x16f3, 0x05fd6), (0x16f4, 0x0620e), (0x16f5, 0x0620c), (0x16f6, 0x0620d),
    (0x16f7, 0x06210), (0x16f8, 0x06263), (0x16f9, 0x0625b), (0x16fa, 0x06258), (0x16fb, 0x06536), (0x16fc, 0x065e9),
    (0x16fd, 0x065e8), (0x16fe, 0x065ec), (0x16ff, 0x065ed), (0x1700, 0x066f2), (0x1701, 0x066f3), (0x1702, 0x06709),
    (0x1703, 0x0673d), (0x1704, 0x06734), (0x1705, 0x06731), (0x1706, 0x06735), (0x1707, 0x06b21), (0x1708, 0x06b64),
    (0x1709, 0x06b7b), (0x170a, 0x06c16), (0x170b, 0x06c5d), (0x170c, 0x06c57), (0x170d, 0x06c59), (0x170e, 0x06c5f),
    (0x170f, 0x06c60), (0x1710, 0x06c50), (0x1711, 0x06c55), (0x1712, 0x06c61), (0x1713, 0x06c5b), (0x1714, 0x06c4d),
    (0x1715, 0x06c4e), (0x1716, 0x07070), (0x1717, 0x0725f), (0x1718, 0x0725d), (0x1719, 0x0767e), (0x171a, 0x07af9),
    (0x171b, 0x07c73), (0x171c, 0x07cf8), (0x171d, 0x07f36), (0x171e, 0x07f8a), (0x171f, 0x07fbd), (0x1720, 0x08001),
    (0x1721, 0x08003), (0x1722, 0x0800c), (0x1723, 0x08012), (0x1724, 0x08033), (0x1725, 0x0807f), (0x1726, 0x08089),
    (0x1727, 0x0808b), (0x1728, 0x0808c), (0x1729, 0x081e3), (0x172a, 0x081ea), (0x172b, 0x081f3), (0x172c, 0x081fc),
    (0x172d, 0x0820c), (0x172e, 0x0821b), (0x172f, 0x0821f), (0x1730, 0x0826e), (0x1731, 0x08272), (0x1732, 0x0827e),
    (0x1733, 0x0866b), (0x1734, 0x08840), (0x1735, 0x0884c), (0x1736, 0x08863), (0x1737, 0x0897f), (0x1738, 0x09621),
    (0x1739, 0x04e32), (0x173a, 0x04ea8), (0x173b, 0x04f4d), (0x173c, 0x04f4f), (0x173d, 0x04f47), (0x173e, 0x04f57),
    (0x173f, 0x04f5e), (0x1740, 0x04f34), (0x1741, 0x04f5b), (0x1742, 0x04f55), (0x1743, 0x04f30), (0x1744, 0x04f50),
    (0x1745, 0x04f51), (0x1746, 0x04f3d), (0x1747, 0x04f3a), (0x1748, 0x04f38), (0x1749, 0x04f43), (0x174a, 0x04f54),
    (0x174b, 0x04f3c), (0x174c, 0x04f46), (0x174d, 0x04f63), (0x174e, 0x04f5c), (0x174f, 0x04f60), (0x1750, 0x04f2f),
    (0x1751, 0x04f4e), (0x1752, 0x04f36), (0x1753, 0x04f59), (0x1754, 0x04f5d), (0x1755, 0x04f48), (0x1756, 0x04f5a),
    (0x1757, 0x0514c), (0x1758, 0x0514b), (0x1759, 0x0514d), (0x175a, 0x05175), (0x175b, 0x051b6), (0x175c, 0x051b7),
    (0x175d, 0x05225), (0x175e, 0x05224), (0x175f, 0x05229), (0x1760, 0x0522a), (0x1761, 0x05228), (0x1762, 0x052ab),
    (0x1763, 0x052a9), (0x1764, 0x052aa), (0x1765, 0x052ac), (0x1766, 0x05323), (0x1767, 0x05373), (0x1768, 0x05375),
    (0x1769, 0x0541d), (0x176a, 0x0542d), (0x176b, 0x0541e), (0x176c, 0x0543e), (0x176d, 0x05426), (0x176e, 0x0544e),
    (0x176f, 0x05427), (0x1770, 0x05446), (0x1771, 0x05443), (0x1772, 0x05433), (0x1773, 0x05448), (0x1774, 0x05442),
    (0x1775, 0x0541b), (0x1776, 0x05429), (0x1777, 0x0544a), (0x1778, 0x05439), (0x1779, 0x0543b), (0x177a, 0x05438),
    (0x177b, 0x0542e), (0x177c, 0x05435), (0x177d, 0x05436), (0x177e, 0x05420), (0x177f, 0x0543c), (0x1780, 0x05440),
    (0x1781, 0x05431), (0x1782, 0x0542b), (0x1783, 0x0541f), (0x1784, 0x0542c), (0x1785, 0x056ea), (0x1786, 0x056f0),
    (0x1787, 0x056e4), (0x1788, 0x056eb), (0x1789, 0x0574a), (0x178a, 0x05751), (0x178b, 0x05740), (0x178c, 0x0574d),
    (0x178d, 0x05747), (0x178e, 0x0574e), (0x178f, 0x0573e), (0x1790, 0x05750), (0x1791, 0x0574f), (0x1792, 0x0573b),
    (0x1793, 0x058ef), (0x1794, 0x0593e), (0x1795, 0x0599d), (0x1796, 0x05992), (0x1797, 0x059a8), (0x1798, 0x0599e),
    (0x1799, 0x059a3), (0x179a, 0x05999), (0x179b, 0x05996), (0x179c, 0x0598d), (0x179d, 0x059a4), (0x179e, 0x05993),
    (0x179f, 0x0598a), (0x17a0, 0x059a5), (0x17a1, 0x05b5d), (0x17a2, 0x05b5c), (0x17a3, 0x05b5a), (0x17a4, 0x05b5b),
    (0x17a5, 0x05b8c), (0x17a6, 0x05b8b), (0x17a7, 0x05b8f), (0x17a8, 0x05c2c), (0x17a9, 0x05c40), (0x17aa, 0x05c41),
    (0x17ab, 0x05c3f), (0x17ac, 0x05c3e), (0x17ad, 0x05c90), (0x17ae, 0x05c91), (0x17af, 0x05c94), (0x17b0, 0x05c8c),
    (0x17b1, 0x05deb), (0x17b2, 0x05e0c), (0x17b3, 0x05e8f), (0x17b4, 0x05e87), (0x17b5, 0x05e8a), (0x17b6, 0x05ef7),
    (0x17b7, 0x05f04), (0x17b8, 0x05f1f), (0x17b9, 0x05f64), (0x17ba, 0x05f62), (0x17bb, 0x05f77), (0x17bc, 0x05f79),
    (0x17bd, 0x05fd8), (0x17be, 0x05fcc), (0x17bf, 0x05fd7), (0x17c0, 0x05fcd), (0x17c1, 0x05ff1), (0x17c2, 0x05feb),
    (0x17c3, 0x05ff8), (0x17c4, 0x05fea), (0x17c5, 0x06212), (0x17c6, 0x06211), (0x17c7, 0x06284), (0x17c8, 0x06297),
    (0x17c9, 0x06296), (0x17ca, 0x06280), (0x17cb, 0x06276), (0x17cc, 0x06289), (0x17cd, 0x0626d), (0x17ce, 0x0628a),
    (0x17cf, 0x0627c), (0x17d0, 0x0627e), (0x17d1, 0x06279), (0x17d2, 0x06273), (0x17d3, 0x06292), (0x17d4, 0x0626f),
    (0x17d5, 0x06298), (0x17d6, 0x0626e), (0x17d7, 0x06295), (0x17d8, 0x06293), (0x17d9, 0x06291), (0x17da, 0x06286),
    (0x17db, 0x06539), (0x17dc, 0x0653b), (0x17dd, 0x06538), (0x17de, 0x065f1), (0x17df, 0x066f4), (0x17e0, 0x0675f),
    (0x17e1, 0x0674e), (0x17e2, 0x0674f), (0x17e3, 0x06750), (0x17e4, 0x06751), (0x17e5, 0x0675c), (0x17e6, 0x06756),
    (0x17e7, 0x0675e), (0x17e8, 0x06749), (0x17e9, 0x06746), (0x17ea, 0x06760), (0x17eb, 0x06753), (0x17ec, 0x06757),
    (0x17ed, 0x06b65), (0x17ee, 0x06bcf), (0x17ef, 0x06c42), (0x17f0, 0x06c5e), (0x17f1, 0x06c99), (0x17f2, 0x06c81),
    (0x17f3, 0x06c88), (0x17f4, 0x06c89), (0x17f5, 0x06c85), (0x17f6, 0x06c9b), (0x17f7, 0x06c6a), (0x17f8, 0x06c7a),
    (0x17f9, 0x06c90), (0x17fa, 0x06c70), (0x17fb, 0x06c8c), (0x17fc, 0x06c68), (0x17fd, 0x06c96), (0x17fe, 0x06c92),
    (0x17ff, 0x06c7d), (0x1800, 0x06c83), (0x1801, 0x06c72), (0x1802, 0x06c7e), (0x1803, 0x06c74), (0x1804, 0x06c86),
    (0x1805, 0x06c76), (0x1806, 0x06c8d), (0x1807, 0x06c94), (0x1808, 0x06c98), (0x1809, 0x06c82), (0x180a, 0x07076),
    (0x180b, 0x0707c), (0x180c, 0x0707d), (0x180d, 0x07078), (0x180e, 0x07262), (0x180f, 0x07261), (0x1810, 0x07260),
    (0x1811, 0x072c4), (0x1812, 0x072c2), (0x1813, 0x07396), (0x1814, 0x0752c), (0x1815, 0x0752b), (0x1816, 0x07537),
    (0x1817, 0x07538), (0x1818, 0x07682), (0x1819, 0x076ef), (0x181a, 0x077e3), (0x181b, 0x079c1), (0x181c, 0x079c0),
    (0x181d, 0x079bf), (0x181e, 0x07a76), (0x181f, 0x07cfb), (0x1820, 0x07f55), (0x1821, 0x08096), (0x1822, 0x08093),
    (0x1823, 0x0809d), (0x1824, 0x08098), (0x1825, 0x0809b), (0x1826, 0x0809a), (0x1827, 0x080b2), (0x1828, 0x0826f),
    (0x1829, 0x08292), (0x182a, 0x0828b), (0x182b, 0x0828d), (0x182c, 0x0898b), (0x182d, 0x089d2), (0x182e, 0x08a00),
    (0x182f, 0x08c37), (0x1830, 0x08c46), (0x1831, 0x08c55), (0x1832, 0x08c9d), (0x1833, 0x08d64), (0x1834, 0x08d70),
    (0x1835, 0x08db3), (0x1836, 0x08eab), (0x1837, 0x08eca), (0x1838, 0x08f9b), (0x1839, 0x08fb0), (0x183a, 0x08fc2),
    (0x183b, 0x08fc6), (0x183c, 0x08fc5), (0x183d, 0x08fc4), (0x183e, 0x05de1), (0x183f, 0x09091), (0x1840, 0x090a2),
    (0x1841, 0x090aa), (0x1842, 0x090a6), (0x1843, 0x090a3), (0x1844, 0x09149), (0x1845, 0x091c6), (0x1846, 0x091cc),
    (0x1847, 0x09632), (0x1848, 0x0962e), (0x1849, 0x09631), (0x184a, 0x0962a), (0x184b, 0x0962c), (0x184c, 0x04e26),
    (0x184d, 0x04e56), (0x184e, 0x04e73), (0x184f, 0x04e8b), (0x1850, 0x04e9b), (0x1851, 0x04e9e), (0x1852, 0x04eab),
    (0x1853, 0x04eac), (0x1854, 0x04f6f), (0x1855, 0x04f9d), (0x1856, 0x04f8d), (0x1857, 0x04f73), (0x1858, 0x04f7f),
    (0x1859, 0x04f6c), (0x185a, 0x04f9b), (0x185b, 0x04f8b), (0x185c, 0x04f86), (0x185d, 0x04f83), (0x185e, 0x04f70),
    (0x185f, 0x04f75), (0x1860, 0x04f88), (0x1861, 0x04f69), (0x1862, 0x04f7b), (0x1863, 0x04f96), (0x1864, 0x04f7e),
    (0x1865, 0x04f8f), (0x1866, 0x04f91), (0x1867, 0x04f7a), (0x1868, 0x05154), (0x1869, 0x05152), (0x186a, 0x05155),
    (0x186b, 0x05169), (0x186c, 0x05177), (0x186d, 0x05176), (0x186e, 0x05178), (0x186f, 0x051bd), (0x1870, 0x051fd),
    (0x1871, 0x0523b), (0x1872, 0x05238), (0x1873, 0x05237), (0x1874, 0x0523a), (0x1875, 0x05230), (0x1876, 0x0522e),
    (0x1877, 0x05236), (0x1878, 0x05241), (0x1879, 0x052be), (0x187a, 0x052bb), (0x187b, 0x05352), (0x187c, 0x05354),
    (0x187d, 0x05353), (0x187e, 0x05351), (0x187f, 0x05366), (0x1880, 0x05377), (0x1881, 0x05378), (0x1882, 0x05379),
    (0x1883, 0x053d6), (0x1884, 0x053d4), (0x1885, 0x053d7), (0x1886, 0x05473), (0x1887, 0x05475), (0x1888, 0x05496),
    (0x1889, 0x05478), (0x188a, 0x05495), (0x188b, 0x05480), (0x188c, 0x0547b), (0x188d, 0x05477), (0x188e, 0x05484),
    (0x188f, 0x05492), (0x1890, 0x05486), (0x1891, 0x0547c), (0x1892, 0x05490), (0x1893, 0x05471), (0x1894, 0x05476),
    (0x1895, 0x0548c), (0x1896, 0x0549a), (0x1897, 0x05462), (0x1898, 0x05468), (0x1899, 0x0548b), (0x189a, 0x0547d),
    (0x189b, 0x0548e), (0x189c, 0x056fa), (0x189d, 0x05783), (0x189e, 0x05777), (0x189f, 0x0576a), (0x18a0, 0x05769),
    (0x18a1, 0x05761), (0x18a2, 0x05766), (0x18a3, 0x05764), (0x18a4, 0x0577c), (0x18a5, 0x0591c), (0x18a6, 0x05949),
    (0x18a7, 0x05947), (0x18a8, 0x05948), (0x18a9, 0x05944), (0x18aa, 0x05954), (0x18ab, 0x059be), (0x18ac, 0x059bb),
    (0x18ad, 0x059d4), (0x18ae, 0x059b9), (0x18af, 0x059ae), (0x18b0, 0x059d1), (0x18b1, 0x059c6), (0x18b2, 0x059d0),
    (0x18b3, 0x059cd), (0x18b4, 0x059cb), (0x18b5, 0x059d3), (0x18b6, 0x059ca), (0x18b7, 0x059af), (0x18b8, 0x059b3),
    (0x18b9, 0x059d2), (0x18ba, 0x059c5), (0x18bb, 0x05b5f), (0x18bc, 0x05b64), (0x18bd, 0x05b63), (0x18be, 0x05b97),
    (0x18bf, 0x05b9a), (0x18c0, 0x05b98), (0x18c1, 0x05b9c), (0x18c2, 0x05b99), (0x18c3, 0x05b9b), (0x18c4, 0x05c1a),
    (0x18c5, 0x05c48), (0x18c6, 0x05c45), (0x18c7, 0x05c46), (0x18c8, 0x05cb7), (0x18c9, 0x05ca1), (0x18ca, 0x05cb8),
    (0x18cb, 0x05ca9), (0x18cc, 0x05cab), (0x18cd, 0x05cb1), (0x18ce, 0x05cb3), (0x18cf, 0x05e18), (0x18d0, 0x05e1a),
    (0x18d1, 0x05e16), (0x18d2, 0x05e15), (0x18d3, 0x05e1b), (0x18d4, 0x05e11), (0x18d5, 0x05e78), (0x18d6, 0x05e9a),
    (0x18d7, 0x05e97), (0x18d8, 0x05e9c), (0x18d9, 0x05e95), (0x18da, 0x05e96), (0x18db, 0x05ef6), (0x18dc, 0x05f26),
    (0x18dd, 0x05f27), (0x18de, 0x05f29), (0x18df, 0x05f80), (0x18e0, 0x05f81), (0x18e1, 0x05f7f), (0x18e2, 0x05f7c),
    (0x18e3, 0x05fdd), (0x18e4, 0x05fe0), (0x18e5, 0x05ffd), (0x18e6, 0x05ff5), (0x18e7, 0x05fff), (0x18e8, 0x0600f),
    (0x18e9, 0x06014), (0x18ea, 0x0602f), (0x18eb, 0x06035), (0x18ec, 0x06016), (0x18ed, 0x0602a), (0x18ee, 0x06015),
    (0x18ef, 0x06021), (0x18f0, 0x06027), (0x18f1, 0x06029), (0x18f2, 0x0602b), (0x18f3, 0x0601b), (0x18f4, 0x06216),
    (0x18f5, 0x06215), (0x18f6, 0x0623f), (0x18f7, 0x0623e), (0x18f8, 0x06240), (0x18f9, 0x0627f), (0x18fa, 0x062c9),
    (0x18fb, 0x062cc), (0x18fc, 0x062c4), (0x18fd, 0x062bf), (0x18fe, 0x062c2), (0x18ff, 0x062b9), (0x1900, 0x062d2),
    (0x1901, 0x062db), (0x1902, 0x062ab), (0x1903, 0x062d3), (0x1904, 0x062d4), (0x1905, 0x062cb), (0x1906, 0x062c8),
    (0x1907, 0x062a8), (0x1908, 0x062bd), (0x1909, 0x062bc), (0x190a, 0x062d0), (0x190b, 0x062d9), (0x190c, 0x062c7),
    (0x190d, 0x062cd), (0x190e, 0x062b5), (0x190f, 0x062da), (0x1910, 0x062b1), (0x1911, 0x062d8), (0x1912, 0x062d6),
    (0x1913, 0x062d7), (0x1914, 0x062c6), (0x1915, 0x062ac), (0x1916, 0x062ce), (0x1917, 0x0653e), (0x1918, 0x065a7),
    (0x1919, 0x065bc), (0x191a, 0x065fa), (0x191b, 0x06614), (0x191c, 0x06613), (0x191d, 0x0660c), (0x191e, 0x06606),
    (0x191f, 0x06602), (0x1920, 0x0660e), (0x1921, 0x06600), (0x1922, 0x0660f), (0x1923, 0x06615), (0x1924, 0x0660a),
    (0x1925, 0x06607), (0x1926, 0x0670d), (0x1927, 0x0670b), (0x1928, 0x0676d), (0x1929, 0x0678b), (0x192a, 0x06795),
    (0x192b, 0x06771), (0x192c, 0x0679c), (0x192d, 0x06773), (0x192e, 0x06777), (0x192f, 0x06787), (0x1930, 0x0679d),
    (0x1931, 0x06797), (0x1932, 0x0676f), (0x1933, 0x06770), (0x1934, 0x0677f), (0x1935, 0x06789), (0x1936, 0x0677e),
    (0x1937, 0x06790), (0x1938, 0x06775), (0x1939, 0x0679a), (0x193a, 0x06793), (0x193b, 0x0677c), (0x193c, 0x0676a),
    (0x193d, 0x06772), (0x193e, 0x06b23), (0x193f, 0x06b66), (0x1940, 0x06b67), (0x1941, 0x06b7f), (0x1942, 0x06c13),
    (0x1943, 0x06c1b), (0x1944, 0x06ce3), (0x1945, 0x06ce8), (0x1946, 0x06cf3), (0x1947, 0x06cb1), (0x1948, 0x06ccc),
    (0x1949, 0x06ce5), (0x194a, 0x06cb3), (0x194b, 0x06cbd), (0x194c, 0x06cbe), (0x194d, 0x06cbc), (0x194e, 0x06ce2),
    (0x194f, 0x06cab), (0x1950, 0x06cd5), (0x1951, 0x06cd3), (0x1952, 0x06cb8), (0x1953, 0x06cc4), (0x1954, 0x06cb9),
    (0x1955, 0x06cc1), (0x1956, 0x06cae), (0x1957, 0x06cd7), (0x1958, 0x06cc5), (0x1959, 0x06cf1), (0x195a, 0x06cbf),
    (0x195b, 0x06cbb), (0x195c, 0x06ce1), (0x195d, 0x06cdb), (0x195e, 0x06cca), (0x195f, 0x06cac), (0x1960, 0x06cef),
    (0x1961, 0x06cdc), (0x1962, 0x06cd6), (0x1963, 0x06ce0), (0x1964, 0x07095), (0x1965, 0x0708e), (0x1966, 0x07092),
    (0x1967, 0x0708a), (0x1968, 0x07099), (0x1969, 0x0722c), (0x196a, 0x0722d), (0x196b, 0x07238), (0x196c, 0x07248),
    (0x196d, 0x07267), (0x196e, 0x07269), (0x196f, 0x072c0), (0x1970, 0x072ce), (0x1971, 0x072d9), (0x1972, 0x072d7),
    (0x1973, 0x072d0), (0x1974, 0x073a9), (0x1975, 0x073a8), (0x1976, 0x0739f), (0x1977, 0x073ab), (0x1978, 0x073a5),
    (0x1979, 0x0753d), (0x197a, 0x0759d), (0x197b, 0x07599), (0x197c, 0x0759a), (0x197d, 0x07684), (0x197e, 0x076c2),
    (0x197f, 0x076f2), (0x1980, 0x076f4), (0x1981, 0x077e5), (0x1982, 0x077fd), (0x1983, 0x0793e), (0x1984, 0x07940),
    (0x1985, 0x07941), (0x1986, 0x079c9), (0x1987, 0x079c8), (0x1988, 0x07a7a), (0x1989, 0x07a79), (0x198a, 0x07afa),
    (0x198b, 0x07cfe), (0x198c, 0x07f54), (0x198d, 0x07f8c), (0x198e, 0x07f8b), (0x198f, 0x08005), (0x1990, 0x080ba),
    (0x1991, 0x080a5), (0x1992, 0x080a2), (0x1993, 0x080b1), (0x1994, 0x080a1), (0x1995, 0x080ab), (0x1996, 0x080a9),
    (0x1997, 0x080b4), (0x1998, 0x080aa), (0x1999, 0x080af), (0x199a, 0x081e5), (0x199b, 0x081fe), (0x199c, 0x0820d),
    (0x199d, 0x082b3), (0x199e, 0x0829d), (0x199f, 0x08299), (0x19a0, 0x082ad), (0x19a1, 0x082bd), (0x19a2, 0x0829f),
    (0x19a3, 0x082b9), (0x19a4, 0x082b1), (0x19a5, 0x082ac), (0x19a6, 0x082a5), (0x19a7, 0x082af), (0x19a8, 0x082b8),
    (0x19a9, 0x082a3), (0x19aa, 0x082b0), (0x19ab, 0x082be), (0x19ac, 0x082b7), (0x19ad, 0x0864e), (0x19ae, 0x08671),
    (0x19af, 0x0521d), (0x19b0, 0x08868), (0x19b1, 0x08ecb), (0x19b2, 0x08fce), (0x19b3, 0x08fd4), (0x19b4, 0x08fd1),
    (0x19b5, 0x090b5), (0x19b6, 0x090b8), (0x19b7, 0x090b1), (0x19b8, 0x090b6), (0x19b9, 0x091c7), (0x19ba, 0x091d1),
    (0x19bb, 0x09577), (0x19bc, 0x09580), (0x19bd, 0x0961c), (0x19be, 0x09640), (0x19bf, 0x0963f), (0x19c0, 0x0963b),
    (0x19c1, 0x09644), (0x19c2, 0x09642), (0x19c3, 0x096b9), (0x19c4, 0x096e8), (0x19c5, 0x09752), (0x19c6, 0x0975e),
    (0x19c7, 0x04e9f), (0x19c8, 0x04ead), (0x19c9, 0x04eae), (0x19ca, 0x04fe1), (0x19cb, 0x04fb5), (0x19cc, 0x04faf),
    (0x19cd, 0x04fbf), (0x19ce, 0x04fe0), (0x19cf, 0x04fd1), (0x19d0, 0x04fcf), (0x19d1, 0x04fdd), (0x19d2, 0x04fc3),
    (0x19d3, 0x04fb6), (0x19d4, 0x04fd8), (0x19d5, 0x04fdf), (0x19d6, 0x04fca), (0x19d7, 0x04fd7), (0x19d8, 0x04fae),
    (0x19d9, 0x04fd0), (0x19da, 0x04fc4), (0x19db, 0x04fc2), (0x19dc, 0x04fda), (0x19dd, 0x04fce), (0x19de, 0x04fde),
    (0x19df, 0x04fb7), (0x19e0, 0x05157), (0x19e1, 0x05192), (0x19e2, 0x05191), (0x19e3, 0x051a0), (0x19e4, 0x0524e),
    (0x19e5, 0x05243), (0x19e6, 0x0524a), (0x19e7, 0x0524d), (0x19e8, 0x0524c), (0x19e9, 0x0524b), (0x19ea, 0x05247),
    (0x19eb, 0x052c7), (0x19ec, 0x052c9), (0x19ed, 0x052c3), (0x19ee, 0x052c1), (0x19ef, 0x0530d), (0x19f0, 0x05357),
    (0x19f1, 0x0537b), (0x19f2, 0x0539a), (0x19f3, 0x053db), (0x19f4, 0x054ac), (0x19f5, 0x054c0), (0x19f6, 0x054a8),
    (0x19f7, 0x054ce), (0x19f8, 0x054c9), (0x19f9, 0x054b8), (0x19fa, 0x054a6), (0x19fb, 0x054b3), (0x19fc, 0x054c7),
    (0x19fd, 0x054c2), (0x19fe, 0x054bd), (0x19ff, 0x054aa), (0x1a00, 0x054c1), (0x1a01, 0x054c4), (0x1a02, 0x054c8),
    (0x1a03, 0x054af), (0x1a04, 0x054ab), (0x1a05, 0x054b1), (0x1a06, 0x054bb), (0x1a07, 0x054a9), (0x1a08, 0x054a7),
    (0x1a09, 0x054bf), (0x1a0a, 0x056ff), (0x1a0b, 0x05782), (0x1a0c, 0x0578b), (0x1a0d, 0x057a0), (0x1a0e, 0x057a3),
    (0x1a0f, 0x057a2), (0x1a10, 0x057ce), (0x1a11, 0x057ae), (0x1a12, 0x05793), (0x1a13, 0x05955), (0x1a14, 0x05951),
    (0x1a15, 0x0594f), (0x1a16, 0x0594e), (0x1a17, 0x05950), (0x1a18, 0x059dc), (0x1a19, 0x059d8), (0x1a1a, 0x059ff),
    (0x1a1b, 0x059e3), (0x1a1c, 0x059e8), (0x1a1d, 0x05a03), (0x1a1e, 0x059e5), (0x1a1f, 0x059ea), (0x1a20, 0x059da),
    (0x1a21, 0x059e6), (0x1a22, 0x05a01), (0x1a23, 0x059fb), (0x1a24, 0x05b69), (0x1a25, 0x05ba3), (0x1a26, 0x05ba6),
    (0x1a27, 0x05ba4), (0x1a28, 0x05ba2), (0x1a29, 0x05ba5), (0x1a2a, 0x05c01), (0x1a2b, 0x05c4e), (0x1a2c, 0x05c4f),
    (0x1a2d, 0x05c4d), (0x1a2e, 0x05c4b), (0x1a2f, 0x05cd9), (0x1a30, 0x05cd2), (0x1a31, 0x05df7), (0x1a32, 0x05e1d),
    (0x1a33, 0x05e25), (0x1a34, 0x05e1f), (0x1a35, 0x05e7d), (0x1a36, 0x05ea0), (0x1a37, 0x05ea6), (0x1a38, 0x05efa),
    (0x1a39, 0x05f08), (0x1a3a, 0x05f2d), (0x1a3b, 0x05f65), (0x1a3c, 0x05f88), (0x1a3d, 0x05f85), (0x1a3e, 0x05f8a),
    (0x1a3f, 0x05f8b), (0x1a40, 0x05f87), (0x1a41, 0x05f8c), (0x1a42, 0x05f89), (0x1a43, 0x06012), (0x1a44, 0x0601d),
    (0x1a45, 0x06020), (0x1a46, 0x06025), (0x1a47, 0x0600e), (0x1a48, 0x06028), (0x1a49, 0x0604d), (0x1a4a, 0x06070),
    (0x1a4b, 0x06068), (0x1a4c, 0x06062), (0x1a4d, 0x06046), (0x1a4e, 0x06043), (0x1a4f, 0x0606c), (0x1a50, 0x0606b),
    (0x1a51, 0x0606a), (0x1a52, 0x06064), (0x1a53, 0x06241), (0x1a54, 0x062dc), (0x1a55, 0x06316), (0x1a56, 0x06309),
    (0x1a57, 0x062fc), (0x1a58, 0x062ed), (0x1a59, 0x06301), (0x1a5a, 0x062ee), (0x1a5b, 0x062fd), (0x1a5c, 0x06307),
    (0x1a5d, 0x062f1), (0x1a5e, 0x062f7), (0x1a5f, 0x062ef), (0x1a60, 0x062ec), (0x1a61, 0x062fe), (0x1a62, 0x062f4),
    (0x1a63, 0x06311), (0x1a64, 0x06302), (0x1a65, 0x0653f), (0x1a66, 0x06545), (0x1a67, 0x065ab), (0x1a68, 0x065bd),
    (0x1a69, 0x065e2), (0x1a6a, 0x06625), (0x1a6b, 0x0662d), (0x1a6c, 0x06620), (0x1a6d, 0x06627), (0x1a6e, 0x0662f),
    (0x1a6f, 0x0661f), (0x1a70, 0x06628), (0x1a71, 0x06631), (0x1a72, 0x06624), (0x1a73, 0x066f7), (0x1a74, 0x067ff),
    (0x1a75, 0x067d3), (0x1a76, 0x067f1), (0x1a77, 0x067d4), (0x1a78, 0x067d0), (0x1a79, 0x067ec), (0x1a7a, 0x067b6),
    (0x1a7b, 0x067af), (0x1a7c, 0x067f5), (0x1a7d, 0x067e9), (0x1a7e, 0x067ef), (0x1a7f, 0x067c4), (0x1a80, 0x067d1),
    (0x1a81, 0x067b4), (0x1a82, 0x067da), (0x1a83, 0x067e5), (0x1a84, 0x067b8), (0x1a85, 0x067cf), (0x1a86, 0x067de),
    (0x1a87, 0x067f3), (0x1a88, 0x067b0), (0x1a89, 0x067d9), (0x1a8a, 0x067e2), (0x1a8b, 0x067dd), (0x1a8c, 0x067d2),
    (0x1a8d, 0x06b6a), (0x1a8e, 0x06b83), (0x1a8f, 0x06b86), (0x1a90, 0x06bb5), (0x1a91, 0x06bd2), (0x1a92, 0x06bd7),
    (0x1a93, 0x06c1f), (0x1a94, 0x06cc9), (0x1a95, 0x06d0b), (0x1a96, 0x06d32), (0x1a97, 0x06d2a), (0x1a98, 0x06d41),
    (0x1a99, 0x06d25), (0x1a9a, 0x06d0c), (0x1a9b, 0x06d31), (0x1a9c, 0x06d1e), (0x1a9d, 0x06d17), (0x1a9e, 0x06d3b),
    (0x1a9f, 0x06d3d), (0x1aa0, 0x06d3e), (0x1aa1, 0x06d36), (0x1aa2, 0x06d1b), (0x1aa3, 0x06cf5), (0x1aa4, 0x06d39),
    (0x1aa5, 0x06d27), (0x1aa6, 0x06d38), (0x1aa7, 0x06d29), (0x1aa8, 0x06d2e), (0x1aa9, 0x06d35), (0x1aaa, 0x06d0e),
    (0x1aab, 0x06d2b), (0x1aac, 0x070ab), (0x1aad, 0x070ba), (0x1aae, 0x070b3), (0x1aaf, 0x070ac), (0x1ab0, 0x070af),
    (0x1ab1, 0x070ad), (0x1ab2, 0x070b8), (0x1ab3, 0x070ae), (0x1ab4, 0x070a4), (0x1ab5, 0x07230), (0x1ab6, 0x07272),
    (0x1ab7, 0x0726f), (0x1ab8, 0x07274), (0x1ab9, 0x072e9), (0x1aba, 0x072e0), (0x1abb, 0x072e1), (0x1abc, 0x073b7),
    (0x1abd, 0x073ca), (0x1abe, 0x073bb), (0x1abf, 0x073b2), (0x1ac0, 0x073cd), (0x1ac1, 0x073c0), (0x1ac2, 0x073b3),
    (0x1ac3, 0x0751a), (0x1ac4, 0x0752d), (0x1ac5, 0x0754f), (0x1ac6, 0x0754c), (0x1ac7, 0x0754e), (0x1ac8, 0x0754b),
    (0x1ac9, 0x075ab), (0x1aca, 0x075a4), (0x1acb, 0x075a5), (0x1acc, 0x075a2), (0x1acd, 0x075a3), (0x1ace, 0x07678),
    (0x1acf, 0x07686), (0x1ad0, 0x07687), (0x1ad1, 0x07688), (0x1ad2, 0x076c8), (0x1ad3, 0x076c6), (0x1ad4, 0x076c3),
    (0x1ad5, 0x076c5), (0x1ad6, 0x07701), (0x1ad7, 0x076f9), (0x1ad8, 0x076f8), (0x1ad9, 0x07709), (0x1ada, 0x0770b),
    (0x1adb, 0x076fe), (0x1adc, 0x076fc), (0x1add, 0x07707), (0x1ade, 0x077dc), (0x1adf, 0x07802), (0x1ae0, 0x07814),
    (0x1ae1, 0x0780c), (0x1ae2, 0x0780d), (0x1ae3, 0x07946), (0x1ae4, 0x07949), (0x1ae5, 0x07948), (0x1ae6, 0x07947),
    (0x1ae7, 0x079b9), (0x1ae8, 0x079ba), (0x1ae9, 0x079d1), (0x1aea, 0x079d2), (0x1aeb, 0x079cb), (0x1aec, 0x07a7f),
    (0x1aed, 0x07a81), (0x1aee, 0x07aff), (0x1aef, 0x07afd), (0x1af0, 0x07c7d), (0x1af1, 0x07d02), (0x1af2, 0x07d05),
    (0x1af3, 0x07d00), (0x1af4, 0x07d09), (0x1af5, 0x07d07), (0x1af6, 0x07d04), (0x1af7, 0x07d06), (0x1af8, 0x07f38),
    (0x1af9, 0x07f8e), (0x1afa, 0x07fbf), (0x1afb, 0x08004), (0x1afc, 0x08010), (0x1afd, 0x0800d), (0x1afe, 0x08011),
    (0x1aff, 0x08036), (0x1b00, 0x080d6), (0x1b01, 0x080e5), (0x1b02, 0x080da), (0x1b03, 0x080c3), (0x1b04, 0x080c4),
    (0x1b05, 0x080cc), (0x1b06, 0x080e1), (0x1b07, 0x080db), (0x1b08, 0x080ce), (0x1b09, 0x080de), (0x1b0a, 0x080e4),
    (0x1b0b, 0x080dd), (0x1b0c, 0x081f4), (0x1b0d, 0x08222), (0x1b0e, 0x082e7), (0x1b0f, 0x08303), (0x1b10, 0x08305),
    (0x1b11, 0x082e3), (0x1b12, 0x082db), (0x1b13, 0x082e6), (0x1b14, 0x08304), (0x1b15, 0x082e5), (0x1b16, 0x08302),
    (0x1b17, 0x08309), (0x1b18, 0x082d2), (0x1b19, 0x082d7), (0x1b1a, 0x082f1), (0x1b1b, 0x08301), (0x1b1c, 0x082dc),
    (0x1b1d, 0x082d4), (0x1b1e, 0x082d1), (0x1b1f, 0x082de), (0x1b20, 0x082d3), (0x1b21, 0x082df), (0x1b22, 0x082ef),
    (0x1b23, 0x08306), (0x1b24, 0x08650), (0x1b25, 0x08679), (0x1b26, 0x0867b), (0x1b27, 0x0867a), (0x1b28, 0x0884d),
    (0x1b29, 0x0886b), (0x1b2a, 0x08981), (0x1b2b, 0x089d4), (0x1b2c, 0x08a08), (0x1b2d, 0x08a02), (0x1b2e, 0x08a03),
    (0x1b2f, 0x08c9e), (0x1b30, 0x08ca0), (0x1b31, 0x08d74), (0x1b32, 0x08d73), (0x1b33, 0x08db4), (0x1b34, 0x08ecd),
    (0x1b35, 0x08ecc), (0x1b36, 0x08ff0), (0x1b37, 0x08fe6), (0x1b38, 0x08fe2), (0x1b39, 0x08fea), (0x1b3a, 0x08fe5),
    (0x1b3b, 0x08fed), (0x1b3c, 0x08feb), (0x1b3d, 0x08fe4), (0x1b3e, 0x08fe8), (0x1b3f, 0x090ca), (0x1b40, 0x090ce),
    (0x1b41, 0x090c1), (0x1b42, 0x090c3), (0x1b43, 0x0914b), (0x1b44, 0x0914a), (0x1b45, 0x091cd), (0x1b46, 0x09582),
    (0x1b47, 0x09650), (0x1b48, 0x0964b), (0x1b49, 0x0964c), (0x1b4a, 0x0964d), (0x1b4b, 0x09762), (0x1b4c, 0x09769),
    (0x1b4d, 0x097cb), (0x1b4e, 0x097ed), (0x1b4f, 0x097f3), (0x1b50, 0x09801), (0x1b51, 0x098a8), (0x1b52, 0x098db),
    (0x1b53, 0x098df), (0x1b54, 0x09996), (0x1b55, 0x09999), (0x1b56, 0x04e58), (0x1b57, 0x04eb3), (0x1b58, 0x0500c),
    (0x1b59, 0x0500d), (0x1b5a, 0x05023), (0x1b5b, 0x04fef), (0x1b5c, 0x05026), (0x1b5d, 0x05025), (0x1b5e, 0x04ff8),
    (0x1b5f, 0x05029), (0x1b60, 0x05016), (0x1b61, 0x05006), (0x1b62, 0x0503c), (0x1b63, 0x0501f), (0x1b64, 0x0501a),
    (0x1b65, 0x05012), (0x1b66, 0x05011), (0x1b67, 0x04ffa), (0x1b68, 0x05000), (0x1b69, 0x05014), (0x1b6a, 0x05028),
    (0x1b6b, 0x04ff1), (0x1b6c, 0x05021), (0x1b6d, 0x0500b), (0x1b6e, 0x05019), (0x1b6f, 0x05018), (0x1b70, 0x04ff3),
    (0x1b71, 0x04fee), (0x1b72, 0x0502d), (0x1b73, 0x0502a), (0x1b74, 0x04ffe), (0x1b75, 0x0502b), (0x1b76, 0x05009),
    (0x1b77, 0x0517c), (0x1b78, 0x051a4), (0x1b79, 0x051a5), (0x1b7a, 0x051a2), (0x1b7b, 0x051cd), (0x1b7c, 0x051cc),
    (0x1b7d, 0x051c6), (0x1b7e, 0x051cb), (0x1b7f, 0x05256), (0x1b80, 0x0525c), (0x1b81, 0x05254), (0x1b82, 0x0525b),
    (0x1b83, 0x0525d), (0x1b84, 0x0532a), (0x1b85, 0x0537f), (0x1b86, 0x0539f), (0x1b87, 0x0539d), (0x1b88, 0x053df),
    (0x1b89, 0x054e8), (0x1b8a, 0x05510), (0x1b8b, 0x05501), (0x1b8c, 0x05537), (0x1b8d, 0x054fc), (0x1b8e, 0x054e5),
    (0x1b8f, 0x054f2), (0x1b90, 0x05506), (0x1b91, 0x054fa), (0x1b92, 0x05514), (0x1b93, 0x054e9), (0x1b94, 0x054ed),
    (0x1b95, 0x054e1), (0x1b96, 0x05509), (0x1b97, 0x054ee), (0x1b98, 0x054ea), (0x1b99, 0x054e6), (0x1b9a, 0x05527),
    (0x1b9b, 0x05507), (0x1b9c, 0x054fd), (0x1b9d, 0x0550f), (0x1b9e, 0x05703), (0x1b9f, 0x05704), (0x1ba0, 0x057c2),
    (0x1ba1, 0x057d4), (0x1ba2, 0x057cb), (0x1ba3, 0x057c3), (0x1ba4, 0x05809), (0x1ba5, 0x0590f), (0x1ba6, 0x05957),
    (0x1ba7, 0x05958), (0x1ba8, 0x0595a), (0x1ba9, 0x05a11), (0x1baa, 0x05a18), (0x1bab, 0x05a1c), (0x1bac, 0x05a1f),
    (0x1bad, 0x05a1b), (0x1bae, 0x05a13), (0x1baf, 0x059ec), (0x1bb0, 0x05a20), (0x1bb1, 0x05a23), (0x1bb2, 0x05a29),
    (0x1bb3, 0x05a25), (0x1bb4, 0x05a0c), (0x1bb5, 0x05a09), (0x1bb6, 0x05b6b), (0x1bb7, 0x05c58), (0x1bb8, 0x05bb0),
    (0x1bb9, 0x05bb3), (0x1bba, 0x05bb6), (0x1bbb, 0x05bb4), (0x1bbc, 0x05bae), (0x1bbd, 0x05bb5), (0x1bbe, 0x05bb9),
    (0x1bbf, 0x05bb8), (0x1bc0, 0x05c04), (0x1bc1, 0x05c51), (0x1bc2, 0x05c55), (0x1bc3, 0x05c50), (0x1bc4, 0x05ced),
    (0x1bc5, 0x05cfd), (0x1bc6, 0x05cfb), (0x1bc7, 0x05cea), (0x1bc8, 0x05ce8), (0x1bc9, 0x05cf0), (0x1bca, 0x05cf6),
    (0x1bcb, 0x05d01), (0x1bcc, 0x05cf4), (0x1bcd, 0x05dee), (0x1bce, 0x05e2d), (0x1bcf, 0x05e2b), (0x1bd0, 0x05eab),
    (0x1bd1, 0x05ead), (0x1bd2, 0x05ea7), (0x1bd3, 0x05f31), (0x1bd4, 0x05f92), (0x1bd5, 0x05f91), (0x1bd6, 0x05f90),
    (0x1bd7, 0x06059), (0x1bd8, 0x06063), (0x1bd9, 0x06065), (0x1bda, 0x06050), (0x1bdb, 0x06055), (0x1bdc, 0x0606d),
    (0x1bdd, 0x06069), (0x1bde, 0x0606f), (0x1bdf, 0x06084), (0x1be0, 0x0609f), (0x1be1, 0x0609a), (0x1be2, 0x0608d),
    (0x1be3, 0x06094), (0x1be4, 0x0608c), (0x1be5, 0x06085), (0x1be6, 0x06096), (0x1be7, 0x06247), (0x1be8, 0x062f3),
    (0x1be9, 0x06308), (0x1bea, 0x062ff), (0x1beb, 0x0634e), (0x1bec, 0x0633e), (0x1bed, 0x0632f), (0x1bee, 0x06355),
    (0x1bef, 0x06342), (0x1bf0, 0x06346), (0x1bf1, 0x0634f), (0x1bf2, 0x06349), (0x1bf3, 0x0633a), (0x1bf4, 0x06350),
    (0x1bf5, 0x0633d), (0x1bf6, 0x0632a), (0x1bf7, 0x0632b), (0x1bf8, 0x06328), (0x1bf9, 0x0634d), (0x1bfa, 0x0634c),
    (0x1bfb, 0x06548), (0x1bfc, 0x06549), (0x1bfd, 0x06599), (0x1bfe, 0x065c1), (0x1bff, 0x065c5), (0x1c00, 0x06642),
    (0x1c01, 0x06649), (0x1c02, 0x0664f), (0x1c03, 0x06643), (0x1c04, 0x06652), (0x1c05, 0x0664c), (0x1c06, 0x06645),
    (0x1c07, 0x06641), (0x1c08, 0x066f8), (0x1c09, 0x06714), (0x1c0a, 0x06715), (0x1c0b, 0x06717), (0x1c0c, 0x06821),
    (0x1c0d, 0x06838), (0x1c0e, 0x06848), (0x1c0f, 0x06846), (0x1c10, 0x06853), (0x1c11, 0x06839), (0x1c12, 0x06842),
    (0x1c13, 0x06854), (0x1c14, 0x06829), (0x1c15, 0x068b3), (0x1c16, 0x06817), (0x1c17, 0x0684c), (0x1c18, 0x06851),
    (0x1c19, 0x0683d), (0x1c1a, 0x067f4), (0x1c1b, 0x06850), (0x1c1c, 0x06840), (0x1c1d, 0x0683c), (0x1c1e, 0x06843),
    (0x1c1f, 0x0682a), (0x1c20, 0x06845), (0x1c21, 0x06813), (0x1c22, 0x06818), (0x1c23, 0x06841), (0x1c24, 0x06b8a),
    (0x1c25, 0x06b89), (0x1c26, 0x06bb7), (0x1c27, 0x06c23), (0x1c28, 0x06c27), (0x1c29, 0x06c28), (0x1c2a, 0x06c26),
    (0x1c2b, 0x06c24), (0x1c2c, 0x06cf0), (0x1c2d, 0x06d6a), (0x1c2e, 0x06d95), (0x1c2f, 0x06d88), (0x1c30, 0x06d87),
    (0x1c31, 0x06d66), (0x1c32, 0x06d78), (0x1c33, 0x06d77), (0x1c34, 0x06d59), (0x1c35, 0x06d93), (0x1c36, 0x06d6c),
    (0x1c37, 0x06d89), (0x1c38, 0x06d6e), (0x1c39, 0x06d5a), (0x1c3a, 0x06d74), (0x1c3b, 0x06d69), (0x1c3c, 0x06d8c),
    (0x1c3d, 0x06d8a), (0x1c3e, 0x06d79), (0x1c3f, 0x06d85), (0x1c40, 0x06d65), (0x1c41, 0x06d94), (0x1c42, 0x070ca),
    (0x1c43, 0x070d8), (0x1c44, 0x070e4), (0x1c45, 0x070d9), (0x1c46, 0x070c8), (0x1c47, 0x070cf), (0x1c48, 0x07239),
    (0x1c49, 0x07279), (0x1c4a, 0x072fc), (0x1c4b, 0x072f9), (0x1c4c, 0x072fd), (0x1c4d, 0x072f8), (0x1c4e, 0x072f7),
    (0x1c4f, 0x07386), (0x1c50, 0x073ed), (0x1c51, 0x07409), (0x1c52, 0x073ee), (0x1c53, 0x073e0), (0x1c54, 0x073ea),
    (0x1c55, 0x073de), (0x1c56, 0x07554), (0x1c57, 0x0755d), (0x1c58, 0x0755c), (0x1c59, 0x0755a), (0x1c5a, 0x07559),
    (0x1c5b, 0x075be), (0x1c5c, 0x075c5), (0x1c5d, 0x075c7), (0x1c5e, 0x075b2), (0x1c5f, 0x075b3), (0x1c60, 0x075bd),
    (0x1c61, 0x075bc), (0x1c62, 0x075b9), (0x1c63, 0x075c2), (0x1c64, 0x075b8), (0x1c65, 0x0768b), (0x1c66, 0x076b0),
    (0x1c67, 0x076ca), (0x1c68, 0x076cd), (0x1c69, 0x076ce), (0x1c6a, 0x07729), (0x1c6b, 0x0771f), (0x1c6c, 0x07720),
    (0x1c6d, 0x07728), (0x1c6e, 0x077e9), (0x1c6f, 0x07830), (0x1c70, 0x07827), (0x1c71, 0x07838), (0x1c72, 0x0781d),
    (0x1c73, 0x07834), (0x1c74, 0x07837), (0x1c75, 0x07825), (0x1c76, 0x0782d), (0x1c77, 0x07820), (0x1c78, 0x0781f),
    (0x1c79, 0x07832), (0x1c7a, 0x07955), (0x1c7b, 0x07950), (0x1c7c, 0x07960), (0x1c7d, 0x0795f), (0x1c7e, 0x07956),
    (0x1c7f, 0x0795e), (0x1c80, 0x0795d), (0x1c81, 0x07957), (0x1c82, 0x0795a), (0x1c83, 0x079e4), (0x1c84, 0x079e3),
    (0x1c85, 0x079e7), (0x1c86, 0x079df), (0x1c87, 0x079e6), (0x1c88, 0x079e9), (0x1c89, 0x079d8), (0x1c8a, 0x07a84),
    (0x1c8b, 0x07a88), (0x1c8c, 0x07ad9), (0x1c8d, 0x07b06), (0x1c8e, 0x07b11), (0x1c8f, 0x07c89), (0x1c90, 0x07d21),
    (0x1c91, 0x07d17), (0x1c92, 0x07d0b), (0x1c93, 0x07d0a), (0x1c94, 0x07d20), (0x1c95, 0x07d22), (0x1c96, 0x07d14),
    (0x1c97, 0x07d10), (0x1c98, 0x07d15), (0x1c99, 0x07d1a), (0x1c9a, 0x07d1c), (0x1c9b, 0x07d0d), (0x1c9c, 0x07d19),
    (0x1c9d, 0x07d1b), (0x1c9e, 0x07f3a), (0x1c9f, 0x07f5f), (0x1ca0, 0x07f94), (0x1ca1, 0x07fc5), (0x1ca2, 0x07fc1),
    (0x1ca3, 0x08006), (0x1ca4, 0x08018), (0x1ca5, 0x08015), (0x1ca6, 0x08019), (0x1ca7, 0x08017), (0x1ca8, 0x0803d),
    (0x1ca9, 0x0803f), (0x1caa, 0x080f1), (0x1cab, 0x08102), (0x1cac, 0x080f0), (0x1cad, 0x08105), (0x1cae, 0x080ed),
    (0x1caf, 0x080f4), (0x1cb0, 0x08106), (0x1cb1, 0x080f8), (0x1cb2, 0x080f3), (0x1cb3, 0x08108), (0x1cb4, 0x080fd),
    (0x1cb5, 0x0810a), (0x1cb6, 0x080fc), (0x1cb7, 0x080ef), (0x1cb8, 0x081ed), (0x1cb9, 0x081ec), (0x1cba, 0x08200),
    (0x1cbb, 0x08210), (0x1cbc, 0x0822a), (0x1cbd, 0x0822b), (0x1cbe, 0x08228), (0x1cbf, 0x0822c), (0x1cc0, 0x082bb),
    (0x1cc1, 0x0832b), (0x1cc2, 0x08352), (0x1cc3, 0x08354), (0x1cc4, 0x0834a), (0x1cc5, 0x08338), (0x1cc6, 0x08350),
    (0x1cc7, 0x08349), (0x1cc8, 0x08335), (0x1cc9, 0x08334), (0x1cca, 0x0834f), (0x1ccb, 0x08332), (0x1ccc, 0x08339),
    (0x1ccd, 0x08336), (0x1cce, 0x08317), (0x1ccf, 0x08340), (0x1cd0, 0x08331), (0x1cd1, 0x08328), (0x1cd2, 0x08343),
    (0x1cd3, 0x08654), (0x1cd4, 0x0868a), (0x1cd5, 0x086aa), (0x1cd6, 0x08693), (0x1cd7, 0x086a4), (0x1cd8, 0x086a9),
    (0x1cd9, 0x0868c), (0x1cda, 0x086a3), (0x1cdb, 0x0869c), (0x1cdc, 0x08870), (0x1cdd, 0x08877), (0x1cde, 0x08881),
    (0x1cdf, 0x08882), (0x1ce0, 0x0887d), (0x1ce1, 0x08879), (0x1ce2, 0x08a18), (0x1ce3, 0x08a10), (0x1ce4, 0x08a0e),
    (0x1ce5, 0x08a0c), (0x1ce6, 0x08a15), (0x1ce7, 0x08a0a), (0x1ce8, 0x08a17), (0x1ce9, 0x08a13), (0x1cea, 0x08a16),
    (0x1ceb, 0x08a0f), (0x1cec, 0x08a11), (0x1ced, 0x08c48), (0x1cee, 0x08c7a), (0x1cef, 0x08c79), (0x1cf0, 0x08ca1),
    (0x1cf1, 0x08ca2), (0x1cf2, 0x08d77), (0x1cf3, 0x08eac), (0x1cf4, 0x08ed2), (0x1cf5, 0x08ed4), (0x1cf6, 0x08ecf),
    (0x1cf7, 0x08fb1), (0x1cf8, 0x09001), (0x1cf9, 0x09006), (0x1cfa, 0x08ff7), (0x1cfb, 0x09000), (0x1cfc, 0x08ffa),
    (0x1cfd, 0x08ff4), (0x1cfe, 0x09003), (0x1cff, 0x08ffd), (0x1d00, 0x09005), (0x1d01, 0x08ff8), (0x1d02, 0x09095),
    (0x1d03, 0x090e1), (0x1d04, 0x090dd), (0x1d05, 0x090e2), (0x1d06, 0x09152), (0x1d07, 0x0914d), (0x1d08, 0x0914c),
    (0x1d09, 0x091d8), (0x1d0a, 0x091dd), (0x1d0b, 0x091d7), (0x1d0c, 0x091dc), (0x1d0d, 0x091d9), (0x1d0e, 0x09583),
    (0x1d0f, 0x09662), (0x1d10, 0x09663), (0x1d11, 0x09661), (0x1d12, 0x0965b), (0x1d13, 0x0965d), (0x1d14, 0x09664),
    (0x1d15, 0x09658), (0x1d16, 0x0965e), (0x1d17, 0x096bb), (0x1d18, 0x098e2), (0x1d19, 0x099ac), (0x1d1a, 0x09aa8),
    (0x1d1b, 0x09ad8), (0x1d1c, 0x09b25), (0x1d1d, 0x09b32), (0x1d1e, 0x09b3c), (0x1d1f, 0x04e7e), (0x1d20, 0x0507a),
    (0x1d21, 0x0507d), (0x1d22, 0x0505c), (0x1d23, 0x05047), (0x1d24, 0x05043), (0x1d25, 0x0504c), (0x1d26, 0x0505a),
    (0x1d27, 0x05049), (0x1d28, 0x05065), (0x1d29, 0x05076), (0x1d2a, 0x0504e), (0x1d2b, 0x05055), (0x1d2c, 0x05075),
    (0x1d2d, 0x05074), (0x1d2e, 0x05077), (0x1d2f, 0x0504f), (0x1d30, 0x0500f), (0x1d31, 0x0506f), (0x1d32, 0x0506d),
    (0x1d33, 0x0515c), (0x1d34, 0x05195), (0x1d35, 0x051f0), (0x1d36, 0x0526a), (0x1d37, 0x0526f), (0x1d38, 0x052d2),
    (0x1d39, 0x052d9), (0x1d3a, 0x052d8), (0x1d3b, 0x052d5), (0x1d3c, 0x05310), (0x1d3d, 0x0530f), (0x1d3e, 0x05319),
    (0x1d3f, 0x0533f), (0x1d40, 0x05340), (0x1d41, 0x0533e), (0x1d42, 0x053c3), (0x1d43, 0x066fc), (0x1d44, 0x05546),
    (0x1d45, 0x0556a), (0x1d46, 0x05566), (0x1d47, 0x05544), (0x1d48, 0x0555e), (0x1d49, 0x05561), (0x1d4a, 0x05543),
    (0x1d4b, 0x0554a), (0x1d4c, 0x05531), (0x1d4d, 0x05556), (0x1d4e, 0x0554f), (0x1d4f, 0x05555), (0x1d50, 0x0552f),
    (0x1d51, 0x05564), (0x1d52, 0x05538), (0x1d53, 0x0552e), (0x1d54, 0x0555c), (0x1d55, 0x0552c), (0x1d56, 0x05563),
    (0x1d57, 0x05533), (0x1d58, 0x05541), (0x1d59, 0x05557), (0x1d5a, 0x05708), (0x1d5b, 0x0570b), (0x1d5c, 0x05709),
    (0x1d5d, 0x057df), (0x1d5e, 0x05805), (0x1d5f, 0x0580a), (0x1d60, 0x05806), (0x1d61, 0x057e0), (0x1d62, 0x057e4),
    (0x1d63, 0x057fa), (0x1d64, 0x05802), (0x1d65, 0x05835), (0x1d66, 0x057f7), (0x1d67, 0x057f9), (0x1d68, 0x05920),
    (0x1d69, 0x05962), (0x1d6a, 0x05a36), (0x1d6b, 0x05a41), (0x1d6c, 0x05a49), (0x1d6d, 0x05a66), (0x1d6e, 0x05a6a),
    (0x1d6f, 0x05a40), (0x1d70, 0x05a3c), (0x1d71, 0x05a62), (0x1d72, 0x05a5a), (0x1d73, 0x05a46), (0x1d74, 0x05a4a),
    (0x1d75, 0x05b70), (0x1d76, 0x05bc7), (0x1d77, 0x05bc5), (0x1d78, 0x05bc4), (0x1d79, 0x05bc2), (0x1d7a, 0x05bbf),
    (0x1d7b, 0x05bc6), (0x1d7c, 0x05c09), (0x1d7d, 0x05c08), (0x1d7e, 0x05c07), (0x1d7f, 0x05c60), (0x1d80, 0x05c5c),
    (0x1d81, 0x05c5d), (0x1d82, 0x05d07), (0x1d83, 0x05d06), (0x1d84, 0x05d0e), (0x1d85, 0x05d1b), (0x1d86, 0x05d16),
    (0x1d87, 0x05d22), (0x1d88, 0x05d11), (0x1d89, 0x05d29), (0x1d8a, 0x05d14), (0x1d8b, 0x05d19), (0x1d8c, 0x05d24),
    (0x1d8d, 0x05d27), (0x1d8e, 0x05d17), (0x1d8f, 0x05de2), (0x1d90, 0x05e38), (0x1d91, 0x05e36), (0x1d92, 0x05e33),
    (0x1d93, 0x05e37), (0x1d94, 0x05eb7), (0x1d95, 0x05eb8), (0x1d96, 0x05eb6), (0x1d97, 0x05eb5), (0x1d98, 0x05ebe),
    (0x1d99, 0x05f35), (0x1d9a, 0x05f37), (0x1d9b, 0x05f57), (0x1d9c, 0x05f6c), (0x1d9d, 0x05f69), (0x1d9e, 0x05f6b),
    (0x1d9f, 0x05f97), (0x1da0, 0x05f99), (0x1da1, 0x05f9e), (0x1da2, 0x05f98), (0x1da3, 0x05fa1), (0x1da4, 0x05fa0),
    (0x1da5, 0x05f9c), (0x1da6, 0x0607f), (0x1da7, 0x060a3), (0x1da8, 0x06089), (0x1da9, 0x060a0), (0x1daa, 0x060a8),
    (0x1dab, 0x060cb), (0x1dac, 0x060b4), (0x1dad, 0x060e6), (0x1dae, 0x060bd), (0x1daf, 0x060c5), (0x1db0, 0x060bb),
    (0x1db1, 0x060b5), (0x1db2, 0x060dc), (0x1db3, 0x060bc), (0x1db4, 0x060d8), (0x1db5, 0x060d5), (0x1db6, 0x060c6),
    (0x1db7, 0x060df), (0x1db8, 0x060b8), (0x1db9, 0x060da), (0x1dba, 0x060c7), (0x1dbb, 0x0621a), (0x1dbc, 0x0621b),
    (0x1dbd, 0x06248), (0x1dbe, 0x063a0), (0x1dbf, 0x063a7), (0x1dc0, 0x06372), (0x1dc1, 0x06396), (0x1dc2, 0x063a2),
    (0x1dc3, 0x063a5), (0x1dc4, 0x06377), (0x1dc5, 0x06367), (0x1dc6, 0x06398), (0x1dc7, 0x063aa), (0x1dc8, 0x06371),
    (0x1dc9, 0x063a9), (0x1dca, 0x06389), (0x1dcb, 0x06383), (0x1dcc, 0x0639b), (0x1dcd, 0x0636b), (0x1dce, 0x063a8),
    (0x1dcf, 0x06384), (0x1dd0, 0x06388), (0x1dd1, 0x06399), (0x1dd2, 0x063a1), (0x1dd3, 0x063ac), (0x1dd4, 0x06392),
    (0x1dd5, 0x0638f), (0x1dd6, 0x06380), (0x1dd7, 0x0637b), (0x1dd8, 0x06369), (0x1dd9, 0x06368), (0x1dda, 0x0637a),
    (0x1ddb, 0x0655d), (0x1ddc, 0x06556), (0x1ddd, 0x06551), (0x1dde, 0x06559), (0x1ddf, 0x06557), (0x1de0, 0x0555f),
    (0x1de1, 0x0654f), (0x1de2, 0x06558), (0x1de3, 0x06555), (0x1de4, 0x06554), (0x1de5, 0x0659c), (0x1de6, 0x0659b),
    (0x1de7, 0x065ac), (0x1de8, 0x065cf), (0x1de9, 0x065cb), (0x1dea, 0x065cc), (0x1deb, 0x065ce), (0x1dec, 0x0665d),
    (0x1ded, 0x0665a), (0x1dee, 0x06664), (0x1def, 0x06668), (0x1df0, 0x06666), (0x1df1, 0x0665e), (0x1df2, 0x066f9),
    (0x1df3, 0x052d7), (0x1df4, 0x0671b), (0x1df5, 0x06881), (0x1df6, 0x068af), (0x1df7, 0x068a2), (0x1df8, 0x06893),
    (0x1df9, 0x068b5), (0x1dfa, 0x0687f), (0x1dfb, 0x06876), (0x1dfc, 0x068b1), (0x1dfd, 0x068a7), (0x1dfe, 0x06897),
    (0x1dff, 0x068b0), (0x1e00, 0x06883), (0x1e01, 0x068c4), (0x1e02, 0x068ad), (0x1e03, 0x06886), (0x1e04, 0x06885),
    (0x1e05, 0x06894), (0x1e06, 0x0689d), (0x1e07, 0x068a8), (0x1e08, 0x0689f), (0x1e09, 0x068a1), (0x1e0a, 0x06882),
    (0x1e0b, 0x06b32), (0x1e0c, 0x06bba), (0x1e0d, 0x06beb), (0x1e0e, 0x06bec), (0x1e0f, 0x06c2b), (0x1e10, 0x06d8e),
    (0x1e11, 0x06dbc), (0x1e12, 0x06df3), (0x1e13, 0x06dd9), (0x1e14, 0x06db2), (0x1e15, 0x06de1), (0x1e16, 0x06dcc),
    (0x1e17, 0x06de4), (0x1e18, 0x06dfb), (0x1e19, 0x06dfa), (0x1e1a, 0x06e05), (0x1e1b, 0x06dc7), (0x1e1c, 0x06dcb),
    (0x1e1d, 0x06daf), (0x1e1e, 0x06dd1), (0x1e1f, 0x06dae), (0x1e20, 0x06dde), (0x1e21, 0x06df9), (0x1e22, 0x06db8),
    (0x1e23, 0x06df7), (0x1e24, 0x06df5), (0x1e25, 0x06dc5), (0x1e26, 0x06dd2), (0x1e27, 0x06e1a), (0x1e28, 0x06db5),
    (0x1e29, 0x06dda), (0x1e2a, 0x06deb), (0x1e2b, 0x06dd8), (0x1e2c, 0x06dea), (0x1e2d, 0x06df1), (0x1e2e, 0x06dee),
    (0x1e2f, 0x06de8), (0x1e30, 0x06dc6), (0x1e31, 0x06dc4), (0x1e32, 0x06daa), (0x1e33, 0x06dec), (0x1e34, 0x06dbf),
    (0x1e35, 0x06de6), (0x1e36, 0x070f9), (0x1e37, 0x07109), (0x1e38, 0x0710a), (0x1e39, 0x070fd), (0x1e3a, 0x070ef),
    (0x1e3b, 0x0723d), (0x1e3c, 0x0727d), (0x1e3d, 0x07281), (0x1e3e, 0x0731c), (0x1e3f, 0x0731b), (0x1e40, 0x07316),
    (0x1e41, 0x07313), (0x1e42, 0x07319), (0x1e43, 0x07387), (0x1e44, 0x07405), (0x1e45, 0x0740a), (0x1e46, 0x07403),
    (0x1e47, 0x07406), (0x1e48, 0x073fe), (0x1e49, 0x0740d), (0x1e4a, 0x074e0), (0x1e4b, 0x074f6), (0x1e4c, 0x074f7),
    (0x1e4d, 0x0751c), (0x1e4e, 0x07522), (0x1e4f, 0x07565), (0x1e50, 0x07566), (0x1e51, 0x07562), (0x1e52, 0x07570),
    (0x1e53, 0x0758f), (0x1e54, 0x075d4), (0x1e55, 0x075d5), (0x1e56, 0x075b5), (0x1e57, 0x075ca), (0x1e58, 0x075cd),
    (0x1e59, 0x0768e), (0x1e5a, 0x076d4), (0x1e5b, 0x076d2), (0x1e5c, 0x076db), (0x1e5d, 0x07737), (0x1e5e, 0x0773e),
    (0x1e5f, 0x0773c), (0x1e60, 0x07736), (0x1e61, 0x07738), (0x1e62, 0x0773a), (0x1e63, 0x0786b), (0x1e64, 0x07843),
    (0x1e65, 0x0784e), (0x1e66, 0x07965), (0x1e67, 0x07968), (0x1e68, 0x0796d), (0x1e69, 0x079fb), (0x1e6a, 0x07a92),
    (0x1e6b, 0x07a95), (0x1e6c, 0x07b20), (0x1e6d, 0x07b28), (0x1e6e, 0x07b1b), (0x1e6f, 0x07b2c), (0x1e70, 0x07b26),
    (0x1e71, 0x07b19), (0x1e72, 0x07b1e), (0x1e73, 0x07b2e), (0x1e74, 0x07c92), (0x1e75, 0x07c97), (0x1e76, 0x07c95),
    (0x1e77, 0x07d46), (0x1e78, 0x07d43), (0x1e79, 0x07d71), (0x1e7a, 0x07d2e), (0x1e7b, 0x07d39), (0x1e7c, 0x07d3c),
    (0x1e7d, 0x07d40), (0x1e7e, 0x07d30), (0x1e7f, 0x07d33), (0x1e80, 0x07d44), (0x1e81, 0x07d2f), (0x1e82, 0x07d42),
    (0x1e83, 0x07d32), (0x1e84, 0x07d31), (0x1e85, 0x07f3d), (0x1e86, 0x07f9e), (0x1e87, 0x07f9a), (0x1e88, 0x07fcc),
    (0x1e89, 0x07fce), (0x1e8a, 0x07fd2), (0x1e8b, 0x0801c), (0x1e8c, 0x0804a), (0x1e8d, 0x08046), (0x1e8e, 0x0812f),
    (0x1e8f, 0x08116), (0x1e90, 0x08123), (0x1e91, 0x0812b), (0x1e92, 0x08129), (0x1e93, 0x08130), (0x1e94, 0x08124),
    (0x1e95, 0x08202), (0x1e96, 0x08235), (0x1e97, 0x08237), (0x1e98, 0x08236), (0x1e99, 0x08239), (0x1e9a, 0x0838e),
    (0x1e9b, 0x0839e), (0x1e9c, 0x08398), (0x1e9d, 0x08378), (0x1e9e, 0x083a2), (0x1e9f, 0x08396), (0x1ea0, 0x083bd),
    (0x1ea1, 0x083ab), (0x1ea2, 0x08392), (0x1ea3, 0x0838a), (0x1ea4, 0x08393), (0x1ea5, 0x08389), (0x1ea6, 0x083a0),
    (0x1ea7, 0x08377), (0x1ea8, 0x0837b), (0x1ea9, 0x0837c), (0x1eaa, 0x08386), (0x1eab, 0x083a7), (0x1eac, 0x08655),
    (0x1ead, 0x05f6a), (0x1eae, 0x086c7), (0x1eaf, 0x086c0), (0x1eb0, 0x086b6), (0x1eb1, 0x086c4), (0x1eb2, 0x086b5),
    (0x1eb3, 0x086c6), (0x1eb4, 0x086cb), (0x1eb5, 0x086b1), (0x1eb6, 0x086af), (0x1eb7, 0x086c9), (0x1eb8, 0x08853),
    (0x1eb9, 0x0889e), (0x1eba, 0x08888), (0x1ebb, 0x088ab), (0x1ebc, 0x08892), (0x1ebd, 0x08896), (0x1ebe, 0x0888d),
    (0x1ebf, 0x0888b), (0x1ec0, 0x08993), (0x1ec1, 0x0898f), (0x1ec2, 0x08a2a), (0x1ec3, 0x08a1d), (0x1ec4, 0x08a23),
    (0x1ec5, 0x08a25), (0x1ec6, 0x08a31), (0x1ec7, 0x08a2d), (0x1ec8, 0x08a1f), (0x1ec9, 0x08a1b), (0x1eca, 0x08a22),
    (0x1ecb, 0x08c49), (0x1ecc, 0x08c5a), (0x1ecd, 0x08ca9), (0x1ece, 0x08cac), (0x1ecf, 0x08cab), (0x1ed0, 0x08ca8),
    (0x1ed1, 0x08caa), (0x1ed2, 0x08ca7), (0x1ed3, 0x08d67), (0x1ed4, 0x08d66), (0x1ed5, 0x08dbe), (0x1ed6, 0x08dba),
    (0x1ed7, 0x08edb), (0x1ed8, 0x08edf), (0x1ed9, 0x09019), (0x1eda, 0x0900d), (0x1edb, 0x0901a), (0x1edc, 0x09017),
    (0x1edd, 0x09023), (0x1ede, 0x0901f), (0x1edf, 0x0901d), (0x1ee0, 0x09010), (0x1ee1, 0x09015), (0x1ee2, 0x0901e),
    (0x1ee3, 0x09020), (0x1ee4, 0x0900f), (0x1ee5, 0x09022), (0x1ee6, 0x09016), (0x1ee7, 0x0901b), (0x1ee8, 0x09014),
    (0x1ee9, 0x090e8), (0x1eea, 0x090ed), (0x1eeb, 0x090fd), (0x1eec, 0x09157), (0x1eed, 0x091ce), (0x1eee, 0x091f5),
    (0x1eef, 0x091e6), (0x1ef0, 0x091e3), (0x1ef1, 0x091e7), (0x1ef2, 0x091ed), (0x1ef3, 0x091e9), (0x1ef4, 0x09589),
    (0x1ef5, 0x0966a), (0x1ef6, 0x09675), (0x1ef7, 0x09673), (0x1ef8, 0x09678), (0x1ef9, 0x09670), (0x1efa, 0x09674),
    (0x1efb, 0x09676), (0x1efc, 0x09677), (0x1efd, 0x0966c), (0x1efe, 0x096c0), (0x1eff, 0x096ea), (0x1f00, 0x096e9),
    (0x1f01, 0x07ae0), (0x1f02, 0x07adf), (0x1f03, 0x09802), (0x1f04, 0x09803), (0x1f05, 0x09b5a), (0x1f06, 0x09ce5),
    (0x1f07, 0x09e75), (0x1f08, 0x09e7f), (0x1f09, 0x09ea5), (0x1f0a, 0x09ebb), (0x1f0b, 0x050a2), (0x1f0c, 0x0508d),
    (0x1f0d, 0x05085), (0x1f0e, 0x05099), (0x1f0f, 0x05091), (0x1f10, 0x05080), (0x1f11, 0x05096), (0x1f12, 0x05098),
    (0x1f13, 0x0509a), (0x1f14, 0x06700), (0x1f15, 0x051f1), (0x1f16, 0x05272), (0x1f17, 0x05274), (0x1f18, 0x05275),
    (0x1f19, 0x05269), (0x1f1a, 0x052de), (0x1f1b, 0x052dd), (0x1f1c, 0x052db), (0x1f1d, 0x0535a), (0x1f1e, 0x053a5),
    (0x1f1f, 0x0557b), (0x1f20, 0x05580), (0x1f21, 0x055a7), (0x1f22, 0x0557c), (0x1f23, 0x0558a), (0x1f24, 0x0559d),
    (0x1f25, 0x05598), (0x1f26, 0x05582), (0x1f27, 0x0559c), (0x1f28, 0x055aa), (0x1f29, 0x05594), (0x1f2a, 0x05587),
    (0x1f2b, 0x0558b), (0x1f2c, 0x05583), (0x1f2d, 0x055b3), (0x1f2e, 0x055ae), (0x1f2f, 0x0559f), (0x1f30, 0x0553e),
    (0x1f31, 0x055b2), (0x1f32, 0x0559a), (0x1f33, 0x055bb), (0x1f34, 0x055ac), (0x1f35, 0x055b1), (0x1f36, 0x0557e),
    (0x1f37, 0x05589), (0x1f38, 0x055ab), (0x1f39, 0x05599), (0x1f3a, 0x0570d), (0x1f3b, 0x0582f), (0x1f3c, 0x0582a),
    (0x1f3d, 0x05834), (0x1f3e, 0x05824), (0x1f3f, 0x05830), (0x1f40, 0x05831), (0x1f41, 0x05821), (0x1f42, 0x0581d),
    (0x1f43, 0x05820), (0x1f44, 0x058f9), (0x1f45, 0x058fa), (0x1f46, 0x05960), (0x1f47, 0x05a77), (0x1f48, 0x05a9a),
    (0x1f49, 0x05a7f), (0x1f4a, 0x05a92), (0x1f4b, 0x05a9b), (0x1f4c, 0x05aa7), (0x1f4d, 0x05b73), (0x1f4e, 0x05b71),
    (0x1f4f, 0x05bd2), (0x1f50, 0x05bcc), (0x1f51, 0x05bd3), (0x1f52, 0x05bd0), (0x1f53, 0x05c0a), (0x1f54, 0x05c0b),
    (0x1f55, 0x05c31), (0x1f56, 0x05d4c), (0x1f57, 0x05d50), (0x1f58, 0x05d34), (0x1f59, 0x05d47), (0x1f5a, 0x05dfd),
    (0x1f5b, 0x05e45), (0x1f5c, 0x05e3d), (0x1f5d, 0x05e40), (0x1f5e, 0x05e43), (0x1f5f, 0x05e7e), (0x1f60, 0x05eca),
    (0x1f61, 0x05ec1), (0x1f62, 0x05ec2), (0x1f63, 0x05ec4), (0x1f64, 0x05f3c), (0x1f65, 0x05f6d), (0x1f66, 0x05fa9),
    (0x1f67, 0x05faa), (0x1f68, 0x05fa8), (0x1f69, 0x060d1), (0x1f6a, 0x060e1), (0x1f6b, 0x060b2), (0x1f6c, 0x060b6),
    (0x1f6d, 0x060e0), (0x1f6e, 0x0611c), (0x1f6f, 0x06123), (0x1f70, 0x060fa), (0x1f71, 0x06115), (0x1f72, 0x060f0),
    (0x1f73, 0x060fb), (0x1f74, 0x060f4), (0x1f75, 0x06168), (0x1f76, 0x060f1), (0x1f77, 0x0610e), (0x1f78, 0x060f6),
    (0x1f79, 0x06109), (0x1f7a, 0x06100), (0x1f7b, 0x06112), (0x1f7c, 0x0621f), (0x1f7d, 0x06249), (0x1f7e, 0x063a3),
    (0x1f7f, 0x0638c), (0x1f80, 0x063cf), (0x1f81, 0x063c0), (0x1f82, 0x063e9), (0x1f83, 0x063c9), (0x1f84, 0x063c6),
    (0x1f85, 0x063cd), (0x1f86, 0x063d2), (0x1f87, 0x063e3), (0x1f88, 0x063d0), (0x1f89, 0x063e1), (0x1f8a, 0x063d6),
    (0x1f8b, 0x063ed), (0x1f8c, 0x063ee), (0x1f8d, 0x06376), (0x1f8e, 0x063f4), (0x1f8f, 0x063ea), (0x1f90, 0x063db),
    (0x1f91, 0x06452), (0x1f92, 0x063da), (0x1f93, 0x063f9), (0x1f94, 0x0655e), (0x1f95, 0x06566), (0x1f96, 0x06562),
    (0x1f97, 0x06563), (0x1f98, 0x06591), (0x1f99, 0x06590), (0x1f9a, 0x065af), (0x1f9b, 0x0666e), (0x1f9c, 0x06670),
    (0x1f9d, 0x06674), (0x1f9e, 0x06676), (0x1f9f, 0x0666f), (0x1fa0, 0x06691), (0x1fa1, 0x0667a), (0x1fa2, 0x0667e),
    (0x1fa3, 0x06677), (0x1fa4, 0x066fe), (0x1fa5, 0x066ff), (0x1fa6, 0x0671f), (0x1fa7, 0x0671d), (0x1fa8, 0x068fa),
    (0x1fa9, 0x068d5), (0x1faa, 0x068e0), (0x1fab, 0x068d8), (0x1fac, 0x068d7), (0x1fad, 0x06905), (0x1fae, 0x068df),
    (0x1faf, 0x068f5), (0x1fb0, 0x068ee), (0x1fb1, 0x068e7), (0x1fb2, 0x068f9), (0x1fb3, 0x068d2), (0x1fb4, 0x068f2),
    (0x1fb5, 0x068e3), (0x1fb6, 0x068cb), (0x1fb7, 0x068cd), (0x1fb8, 0x0690d), (0x1fb9, 0x06912), (0x1fba, 0x0690e),
    (0x1fbb, 0x068c9), (0x1fbc, 0x068da), (0x1fbd, 0x0696e), (0x1fbe, 0x068fb), (0x1fbf, 0x06b3e), (0x1fc0, 0x06b3a),
    (0x1fc1, 0x06b3d), (0x1fc2, 0x06b98), (0x1fc3, 0x06b96), (0x1fc4, 0x06bbc), (0x1fc5, 0x06bef), (0x1fc6, 0x06c2e),
    (0x1fc7, 0x06c2f), (0x1fc8, 0x06c2c), (0x1fc9, 0x06e2f), (0x1fca, 0x06e38), (0x1fcb, 0x06e54), (0x1fcc, 0x06e21),
    (0x1fcd, 0x06e32), (0x1fce, 0x06e67), (0x1fcf, 0x06e4a), (0x1fd0, 0x06e20), (0x1fd1, 0x06e25), (0x1fd2, 0x06e23),
    (0x1fd3, 0x06e1b), (0x1fd4, 0x06e5b), (0x1fd5, 0x06e58), (0x1fd6, 0x06e24), (0x1fd7, 0x06e56), (0x1fd8, 0x06e6e),
    (0x1fd9, 0x06e2d), (0x1fda, 0x06e26), (0x1fdb, 0x06e6f), (0x1fdc, 0x06e34), (0x1fdd, 0x06e4d), (0x1fde, 0x06e3a),
    (0x1fdf, 0x06e2c), (0x1fe0, 0x06e43), (0x1fe1, 0x06e1d), (0x1fe2, 0x06e3e), (0x1fe3, 0x06ecb), (0x1fe4, 0x06e89),
    (0x1fe5, 0x06e19), (0x1fe6, 0x06e4e), (0x1fe7, 0x06e63), (0x1fe8, 0x06e44), (0x1fe9, 0x06e72), (0x1fea, 0x06e69),
    (0x1feb, 0x06e5f), (0x1fec, 0x07119), (0x1fed, 0x0711a), (0x1fee, 0x07126), (0x1fef, 0x07130), (0x1ff0, 0x07121),
    (0x1ff1, 0x07136), (0x1ff2, 0x0716e), (0x1ff3, 0x0711c), (0x1ff4, 0x0724c), (0x1ff5, 0x07284), (0x1ff6, 0x07280),
    (0x1ff7, 0x07336), (0x1ff8, 0x07325), (0x1ff9, 0x07334), (0x1ffa, 0x07329), (0x1ffb, 0x0743a), (0x1ffc, 0x0742a),
    (0x1ffd, 0x07433), (0x1ffe, 0x07422), (0x1fff, 0x07425), (0x2000, 0x07435), (0x2001, 0x07436), (0x2002, 0x07434),
    (0x2003, 0x0742f), (0x2004, 0x0741b), (0x2005, 0x07426), (0x2006, 0x07428), (0x2007, 0x07525), (0x2008, 0x07526),
    (0x2009, 0x0756b), (0x200a, 0x0756a), (0x200b, 0x075e2), (0x200c, 0x075db), (0x200d, 0x075e3), (0x200e, 0x075d9),
    (0x200f, 0x075d8), (0x2010, 0x075de), (0x2011, 0x075e0), (0x2012, 0x0767b), (0x2013, 0x0767c), (0x2014, 0x07696),
    (0x2015, 0x07693), (0x2016, 0x076b4), (0x2017, 0x076dc), (0x2018, 0x0774f), (0x2019, 0x077ed), (0x201a, 0x0785d),
    (0x201b, 0x0786c), (0x201c, 0x0786f), (0x201d, 0x07a0d), (0x201e, 0x07a08), (0x201f, 0x07a0b), (0x2020, 0x07a05),
    (0x2021, 0x07a00), (0x2022, 0x07a98), (0x2023, 0x07a97), (0x2024, 0x07a96), (0x2025, 0x07ae5), (0x2026, 0x07ae3),
    (0x2027, 0x07b49), (0x2028, 0x07b56), (0x2029, 0x07b46), (0x202a, 0x07b50), (0x202b, 0x07b52), (0x202c, 0x07b54),
    (0x202d, 0x07b4d), (0x202e, 0x07b4b), (0x202f, 0x07b4f), (0x2030, 0x07b51), (0x2031, 0x07c9f), (0x2032, 0x07ca5),
    (0x2033, 0x07d5e), (0x2034, 0x07d50), (0x2035, 0x07d68), (0x2036, 0x07d55), (0x2037, 0x07d2b), (0x2038, 0x07d6e),
    (0x2039, 0x07d72), (0x203a, 0x07d61), (0x203b, 0x07d66), (0x203c, 0x07d62), (0x203d, 0x07d70), (0x203e, 0x07d73),
    (0x203f, 0x05584), (0x2040, 0x07fd4), (0x2041, 0x07fd5), (0x2042, 0x0800b), (0x2043, 0x08052), (0x2044, 0x08085),
    (0x2045, 0x08155), (0x2046, 0x08154), (0x2047, 0x0814b), (0x2048, 0x08151), (0x2049, 0x0814e), (0x204a, 0x08139),
    (0x204b, 0x08146), (0x204c, 0x0813e), (0x204d, 0x0814c), (0x204e, 0x08153), (0x204f, 0x08174), (0x2050, 0x08212),
    (0x2051, 0x0821c), (0x2052, 0x083e9), (0x2053, 0x08403), (0x2054, 0x083f8), (0x2055, 0x0840d), (0x2056, 0x083e0),
    (0x2057, 0x083c5), (0x2058, 0x0840b), (0x2059, 0x083c1), (0x205a, 0x083ef), (0x205b, 0x083f1), (0x205c, 0x083f4),
    (0x205d, 0x08457), (0x205e, 0x0840a), (0x205f, 0x083f0), (0x2060, 0x0840c), (0x2061, 0x083cc), (0x2062, 0x083fd),
    (0x2063, 0x083f2), (0x2064, 0x083ca), (0x2065, 0x08438), (0x2066, 0x0840e), (0x2067, 0x08404), (0x2068, 0x083dc),
    (0x2069, 0x08407), (0x206a, 0x083d4), (0x206b, 0x083df), (0x206c, 0x0865b), (0x206d, 0x086df), (0x206e, 0x086d9),
    (0x206f, 0x086ed), (0x2070, 0x086d4), (0x2071, 0x086db), (0x2072, 0x086e4), (0x2073, 0x086d0), (0x2074, 0x086de),
    (0x2075, 0x08857), (0x2076, 0x088c1), (0x2077, 0x088c2), (0x2078, 0x088b1), (0x2079, 0x08983), (0x207a, 0x08996),
    (0x207b, 0x08a3b), (0x207c, 0x08a60), (0x207d, 0x08a55), (0x207e, 0x08a5e), (0x207f, 0x08a3c), (0x2080, 0x08a41),
    (0x2081, 0x08a54), (0x2082, 0x08a5b), (0x2083, 0x08a50), (0x2084, 0x08a46), (0x2085, 0x08a34), (0x2086, 0x08a3a),
    (0x2087, 0x08a36), (0x2088, 0x08a56), (0x2089, 0x08c61), (0x208a, 0x08c82), (0x208b, 0x08caf), (0x208c, 0x08cbc),
    (0x208d, 0x08cb3), (0x208e, 0x08cbd), (0x208f, 0x08cc1), (0x2090, 0x08cbb), (0x2091, 0x08cc0), (0x2092, 0x08cb4),
    (0x2093, 0x08cb7), (0x2094, 0x08cb6), (0x2095, 0x08cbf), (0x2096, 0x08cb8), (0x2097, 0x08d8a), (0x2098, 0x08d85),
    (0x2099, 0x08d81), (0x209a, 0x08dce), (0x209b, 0x08ddd), (0x209c, 0x08dcb), (0x209d, 0x08dda), (0x209e, 0x08dd1),
    (0x209f, 0x08dcc), (0x20a0, 0x08ddb), (0x20a1, 0x08dc6), (0x20a2, 0x08efb), (0x20a3, 0x08ef8), (0x20a4, 0x08efc),
    (0x20a5, 0x08f9c), (0x20a6, 0x0902e), (0x20a7, 0x09035), (0x20a8, 0x09031), (0x20a9, 0x09038), (0x20aa, 0x09032),
    (0x20ab, 0x09036), (0x20ac, 0x09102), (0x20ad, 0x090f5), (0x20ae, 0x09109), (0x20af, 0x090fe), (0x20b0, 0x09163),
    (0x20b1, 0x09165), (0x20b2, 0x091cf), (0x20b3, 0x09214), (0x20b4, 0x09215), (0x20b5, 0x09223), (0x20b6, 0x09209),
    (0x20b7, 0x0921e), (0x20b8, 0x0920d), (0x20b9, 0x09210), (0x20ba, 0x09207), (0x20bb, 0x09211), (0x20bc, 0x09594),
    (0x20bd, 0x0958f), (0x20be, 0x0958b), (0x20bf, 0x09591), (0x20c0, 0x09593), (0x20c1, 0x09592), (0x20c2, 0x0958e),
    (0x20c3, 0x0968a), (0x20c4, 0x0968e), (0x20c5, 0x0968b), (0x20c6, 0x0967d), (0x20c7, 0x09685), (0x20c8, 0x09686),
    (0x20c9, 0x0968d), (0x20ca, 0x09672), (0x20cb, 0x09684), (0x20cc, 0x096c1), (0x20cd, 0x096c5), (0x20ce, 0x096c4),
    (0x20cf, 0x096c6), (0x20d0, 0x096c7), (0x20d1, 0x096ef), (0x20d2, 0x096f2), (0x20d3, 0x097cc), (0x20d4, 0x09805),
    (0x20d5, 0x09806), (0x20d6, 0x09808), (0x20d7, 0x098e7), (0x20d8, 0x098ea), (0x20d9, 0x098ef), (0x20da, 0x098e9),
    (0x20db, 0x098f2), (0x20dc, 0x098ed), (0x20dd, 0x099ae), (0x20de, 0x099ad), (0x20df, 0x09ec3), (0x20e0, 0x09ecd),
    (0x20e1, 0x09ed1), (0x20e2, 0x04e82), (0x20e3, 0x050ad), (0x20e4, 0x050b5), (0x20e5, 0x050b2), (0x20e6, 0x050b3),
    (0x20e7, 0x050c5), (0x20e8, 0x050be), (0x20e9, 0x050ac), (0x20ea, 0x050b7), (0x20eb, 0x050bb), (0x20ec, 0x050af),
    (0x20ed, 0x050c7), (0x20ee, 0x0527f), (0x20ef, 0x05277), (0x20f0, 0x0527d), (0x20f1, 0x052df), (0x20f2, 0x052e6),
    (0x20f3, 0x052e4), (0x20f4, 0x052e2), (0x20f5, 0x052e3), (0x20f6, 0x0532f), (0x20f7, 0x055df), (0x20f8, 0x055e8),
    (0x20f9, 0x055d3), (0x20fa, 0x055e6), (0x20fb, 0x055ce), (0x20fc, 0x055dc), (0x20fd, 0x055c7), (0x20fe, 0x055d1),
    (0x20ff, 0x055e3), (0x2100, 0x055e4), (0x2101, 0x055ef), (0x2102, 0x055da), (0x2103, 0x055e1), (0x2104, 0x055c5),
    (0x2105, 0x055c6), (0x2106, 0x055e5), (0x2107, 0x055c9), (0x2108, 0x05712), (0x2109, 0x05713), (0x210a, 0x0585e),
    (0x210b, 0x05851), (0x210c, 0x05858), (0x210d, 0x05857), (0x210e, 0x0585a), (0x210f, 0x05854), (0x2110, 0x0586b),
    (0x2111, 0x0584c), (0x2112, 0x0586d), (0x2113, 0x0584a), (0x2114, 0x05862), (0x2115, 0x05852), (0x2116, 0x0584b),
    (0x2117, 0x05967), (0x2118, 0x05ac1), (0x2119, 0x05ac9), (0x211a, 0x05acc), (0x211b, 0x05abe), (0x211c, 0x05abd),
    (0x211d, 0x05abc), (0x211e, 0x05ab3), (0x211f, 0x05ac2), (0x2120, 0x05ab2), (0x2121, 0x05d69), (0x2122, 0x05d6f),
    (0x2123, 0x05e4c), (0x2124, 0x05e79), (0x2125, 0x05ec9), (0x2126, 0x05ec8), (0x2127, 0x05f12), (0x2128, 0x05f59),
    (0x2129, 0x05fac), (0x212a, 0x05fae), (0x212b, 0x0611a), (0x212c, 0x0610f), (0x212d, 0x06148), (0x212e, 0x0611f),
    (0x212f, 0x060f3), (0x2130, 0x0611b), (0x2131, 0x060f9), (0x2132, 0x06101), (0x2133, 0x06108), (0x2134, 0x0614e),
    (0x2135, 0x0614c), (0x2136, 0x06144), (0x2137, 0x0614d), (0x2138, 0x0613e), (0x2139, 0x06134), (0x213a, 0x06127),
    (0x213b, 0x0610d), (0x213c, 0x06106), (0x213d, 0x06137), (0x213e, 0x06221), (0x213f, 0x06222), (0x2140, 0x06413),
    (0x2141, 0x0643e), (0x2142, 0x0641e), (0x2143, 0x0642a), (0x2144, 0x0642d), (0x2145, 0x0643d), (0x2146, 0x0642c),
    (0x2147, 0x0640f), (0x2148, 0x0641c), (0x2149, 0x06414), (0x214a, 0x0640d), (0x214b, 0x06436), (0x214c, 0x06416),
    (0x214d, 0x06417), (0x214e, 0x06406), (0x214f, 0x0656c), (0x2150, 0x0659f), (0x2151, 0x065b0), (0x2152, 0x06697),
    (0x2153, 0x06689), (0x2154, 0x06687), (0x2155, 0x06688), (0x2156, 0x06696), (0x2157, 0x06684), (0x2158, 0x06698),
    (0x2159, 0x0668d), (0x215a, 0x06703), (0x215b, 0x06994), (0x215c, 0x0696d), (0x215d, 0x0695a), (0x215e, 0x06977),
    (0x215f, 0x06960), (0x2160, 0x06954), (0x2161, 0x06975), (0x2162, 0x06930), (0x2163, 0x06982), (0x2164, 0x0694a),
    (0x2165, 0x06968), (0x2166, 0x0696b), (0x2167, 0x0695e), (0x2168, 0x06953), (0x2169, 0x06979), (0x216a, 0x06986),
    (0x216b, 0x0695d), (0x216c, 0x06963), (0x216d, 0x0695b), (0x216e, 0x06b47), (0x216f, 0x06b72), (0x2170, 0x06bc0),
    (0x2171, 0x06bbf), (0x2172, 0x06bd3), (0x2173, 0x06bfd), (0x2174, 0x06ea2), (0x2175, 0x06eaf), (0x2176, 0x06ed3),
    (0x2177, 0x06eb6), (0x2178, 0x06ec2), (0x2179, 0x06e90), (0x217a, 0x06e9d), (0x217b, 0x06ec7), (0x217c, 0x06ec5),
    (0x217d, 0x06ea5), (0x217e, 0x06e98), (0x217f, 0x06ebc), (0x2180, 0x06eba), (0x2181, 0x06eab), (0x2182, 0x06ed1),
    (0x2183, 0x06e96), (0x2184, 0x06e9c), (0x2185, 0x06ec4), (0x2186, 0x06ed4), (0x2187, 0x06eaa), (0x2188, 0x06ea7),
    (0x2189, 0x06eb4), (0x218a, 0x0714e), (0x218b, 0x07159), (0x218c, 0x07169), (0x218d, 0x07164), (0x218e, 0x07149),
    (0x218f, 0x07167), (0x2190, 0x0715c), (0x2191, 0x0716c), (0x2192, 0x07166), (0x2193, 0x0714c), (0x2194, 0x07165),
    (0x2195, 0x0715e), (0x2196, 0x07146), (0x2197, 0x07168), (0x2198, 0x07156), (0x2199, 0x0723a), (0x219a, 0x07252),
    (0x219b, 0x07337), (0x219c, 0x07345), (0x219d, 0x0733f), (0x219e, 0x0733e), (0x219f, 0x0746f), (0x21a0, 0x0745a),
    (0x21a1, 0x07455), (0x21a2, 0x0745f), (0x21a3, 0x0745e), (0x21a4, 0x07441), (0x21a5, 0x0743f), (0x21a6, 0x07459),
    (0x21a7, 0x0745b), (0x21a8, 0x0745c), (0x21a9, 0x07576), (0x21aa, 0x07578), (0x21ab, 0x07600), (0x21ac, 0x075f0),
    (0x21ad, 0x07601), (0x21ae, 0x075f2), (0x21af, 0x075f1), (0x21b0, 0x075fa), (0x21b1, 0x075ff), (0x21b2, 0x075f4),
    (0x21b3, 0x075f3), (0x21b4, 0x076de), (0x21b5, 0x076df), (0x21b6, 0x0775b), (0x21b7, 0x0776b), (0x21b8, 0x07766),
    (0x21b9, 0x0775e), (0x21ba, 0x07763), (0x21bb, 0x07779), (0x21bc, 0x0776a), (0x21bd, 0x0776c), (0x21be, 0x0775c),
    (0x21bf, 0x07765), (0x21c0, 0x07768), (0x21c1, 0x07762), (0x21c2, 0x077ee), (0x21c3, 0x0788e), (0x21c4, 0x078b0),
    (0x21c5, 0x07897), (0x21c6, 0x07898), (0x21c7, 0x0788c), (0x21c8, 0x07889), (0x21c9, 0x0787c), (0x21ca, 0x07891),
    (0x21cb, 0x07893), (0x21cc, 0x0787f), (0x21cd, 0x0797a), (0x21ce, 0x0797f), (0x21cf, 0x07981), (0x21d0, 0x0842c),
    (0x21d1, 0x079bd), (0x21d2, 0x07a1c), (0x21d3, 0x07a1a), (0x21d4, 0x07a20), (0x21d5, 0x07a14), (0x21d6, 0x07a1f),
    (0x21d7, 0x07a1e), (0x21d8, 0x07a9f), (0x21d9, 0x07aa0), (0x21da, 0x07b77), (0x21db, 0x07bc0), (0x21dc, 0x07b60),
    (0x21dd, 0x07b6e), (0x21de, 0x07b67), (0x21df, 0x07cb1), (0x21e0, 0x07cb3), (0x21e1, 0x07cb5), (0x21e2, 0x07d93),
    (0x21e3, 0x07d79), (0x21e4, 0x07d91), (0x21e5, 0x07d81), (0x21e6, 0x07d8f), (0x21e7, 0x07d5b), (0x21e8, 0x07f6e),
    (0x21e9, 0x07f69), (0x21ea, 0x07f6a), (0x21eb, 0x07f72), (0x21ec, 0x07fa9), (0x21ed, 0x07fa8), (0x21ee, 0x07fa4),
    (0x21ef, 0x08056), (0x21f0, 0x08058), (0x21f1, 0x08086), (0x21f2, 0x08084), (0x21f3, 0x08171), (0x21f4, 0x08170),
    (0x21f5, 0x08178), (0x21f6, 0x08165), (0x21f7, 0x0816e), (0x21f8, 0x08173), (0x21f9, 0x0816b), (0x21fa, 0x08179),
    (0x21fb, 0x0817a), (0x21fc, 0x08166), (0x21fd, 0x08205), (0x21fe, 0x08247), (0x21ff, 0x08482), (0x2200, 0x08477),
    (0x2201, 0x0843d), (0x2202, 0x08431), (0x2203, 0x08475), (0x2204, 0x08466), (0x2205, 0x0846b), (0x2206, 0x08449),
    (0x2207, 0x0846c), (0x2208, 0x0845b), (0x2209, 0x0843c), (0x220a, 0x08435), (0x220b, 0x08461), (0x220c, 0x08463),
    (0x220d, 0x08469), (0x220e, 0x0846d), (0x220f, 0x08446), (0x2210, 0x0865e), (0x2211, 0x0865c), (0x2212, 0x0865f),
    (0x2213, 0x086f9), (0x2214, 0x08713), (0x2215, 0x08708), (0x2216, 0x08707), (0x2217, 0x08700), (0x2218, 0x086fe),
    (0x2219, 0x086fb), (0x221a, 0x08702), (0x221b, 0x08703), (0x221c, 0x08706), (0x221d, 0x0870a), (0x221e, 0x08859),
    (0x221f, 0x088df), (0x2220, 0x088d4), (0x2221, 0x088d9), (0x2222, 0x088dc), (0x2223, 0x088d8), (0x2224, 0x088dd),
    (0x2225, 0x088e1), (0x2226, 0x088ca), (0x2227, 0x088d5), (0x2228, 0x088d2), (0x2229, 0x0899c), (0x222a, 0x089e3),
    (0x222b, 0x08a6b), (0x222c, 0x08a72), (0x222d, 0x08a73), (0x222e, 0x08a66), (0x222f, 0x08a69), (0x2230, 0x08a70),
    (0x2231, 0x08a87), (0x2232, 0x08a7c), (0x2233, 0x08a63), (0x2234, 0x08aa0), (0x2235, 0x08a71), (0x2236, 0x08a85),
    (0x2237, 0x08a6d), (0x2238, 0x08a62), (0x2239, 0x08a6e), (0x223a, 0x08a6c), (0x223b, 0x08a79), (0x223c, 0x08a7b),
    (0x223d, 0x08a3e), (0x223e, 0x08a68), (0x223f, 0x08c62), (0x2240, 0x08c8a), (0x2241, 0x08c89), (0x2242, 0x08cca),
    (0x2243, 0x08cc7), (0x2244, 0x08cc8), (0x2245, 0x08cc4), (0x2246, 0x08cb2), (0x2247, 0x08cc3), (0x2248, 0x08cc2),
    (0x2249, 0x08cc5), (0x224a, 0x08de1), (0x224b, 0x08ddf), (0x224c, 0x08de8), (0x224d, 0x08def), (0x224e, 0x08df3),
    (0x224f, 0x08dfa), (0x2250, 0x08dea), (0x2251, 0x08de4), (0x2252, 0x08de6), (0x2253, 0x08eb2), (0x2254, 0x08f03),
    (0x2255, 0x08f09), (0x2256, 0x08efe), (0x2257, 0x08f0a), (0x2258, 0x08f9f), (0x2259, 0x08fb2), (0x225a, 0x0904b),
    (0x225b, 0x0904a), (0x225c, 0x09053), (0x225d, 0x09042), (0x225e, 0x09054), (0x225f, 0x0903c), (0x2260, 0x09055),
    (0x2261, 0x09050), (0x2262, 0x09047), (0x2263, 0x0904f), (0x2264, 0x0904e), (0x2265, 0x0904d), (0x2266, 0x09051),
    (0x2267, 0x0903e), (0x2268, 0x09041), (0x2269, 0x09112), (0x226a, 0x09117), (0x226b, 0x0916c), (0x226c, 0x0916a),
    (0x226d, 0x09169), (0x226e, 0x091c9), (0x226f, 0x09237), (0x2270, 0x09257), (0x2271, 0x09238), (0x2272, 0x0923d),
    (0x2273, 0x09240), (0x2274, 0x0923e), (0x2275, 0x0925b), (0x2276, 0x0924b), (0x2277, 0x09264), (0x2278, 0x09251),
    (0x2279, 0x09234), (0x227a, 0x09249), (0x227b, 0x0924d), (0x227c, 0x09245), (0x227d, 0x09239), (0x227e, 0x0923f),
    (0x227f, 0x0925a), (0x2280, 0x09598), (0x2281, 0x09698), (0x2282, 0x09694), (0x2283, 0x09695), (0x2284, 0x096cd),
    (0x2285, 0x096cb), (0x2286, 0x096c9), (0x2287, 0x096ca), (0x2288, 0x096f7), (0x2289, 0x096fb), (0x228a, 0x096f9),
    (0x228b, 0x096f6), (0x228c, 0x09756), (0x228d, 0x09774), (0x228e, 0x09776), (0x228f, 0x09810), (0x2290, 0x09811),
    (0x2291, 0x09813), (0x2292, 0x0980a), (0x2293, 0x09812), (0x2294, 0x0980c), (0x2295, 0x098fc), (0x2296, 0x098f4),
    (0x2297, 0x098fd), (0x2298, 0x098fe), (0x2299, 0x099b3), (0x229a, 0x099b1), (0x229b, 0x099b4), (0x229c, 0x09ae1),
    (0x229d, 0x09ce9), (0x229e, 0x09e82), (0x229f, 0x09f0e), (0x22a0, 0x09f13), (0x22a1, 0x09f20), (0x22a2, 0x050e7),
    (0x22a3, 0x050ee), (0x22a4, 0x050e5), (0x22a5, 0x050d6), (0x22a6, 0x050ed), (0x22a7, 0x050da), (0x22a8, 0x050d5),
    (0x22a9, 0x050cf), (0x22aa, 0x050d1), (0x22ab, 0x050f1), (0x22ac, 0x050ce), (0x22ad, 0x050e9), (0x22ae, 0x05162),
    (0x22af, 0x051f3), (0x22b0, 0x05283), (0x22b1, 0x05282), (0x22b2, 0x05331), (0x22b3, 0x053ad), (0x22b4, 0x055fe),
    (0x22b5, 0x05600), (0x22b6, 0x0561b), (0x22b7, 0x05617), (0x22b8, 0x055fd), (0x22b9, 0x05614), (0x22ba, 0x05606),
    (0x22bb, 0x05609), (0x22bc, 0x0560d), (0x22bd, 0x0560e), (0x22be, 0x055f7), (0x22bf, 0x05616), (0x22c0, 0x0561f),
    (0x22c1, 0x05608), (0x22c2, 0x05610), (0x22c3, 0x055f6), (0x22c4, 0x05718), (0x22c5, 0x05716), (0x22c6, 0x05875),
    (0x22c7, 0x0587e), (0x22c8, 0x05883), (0x22c9, 0x05893), (0x22ca, 0x0588a), (0x22cb, 0x05879), (0x22cc, 0x05885),
    (0x22cd, 0x0587d), (0x22ce, 0x058fd), (0x22cf, 0x05925), (0x22d0, 0x05922), (0x22d1, 0x05924), (0x22d2, 0x0596a),
    (0x22d3, 0x05969), (0x22d4, 0x05ae1), (0x22d5, 0x05ae6), (0x22d6, 0x05ae9), (0x22d7, 0x05ad7), (0x22d8, 0x05ad6),
    (0x22d9, 0x05ad8), (0x22da, 0x05ae3), (0x22db, 0x05b75), (0x22dc, 0x05bde), (0x22dd, 0x05be7), (0x22de, 0x05be1),
    (0x22df, 0x05be5), (0x22e0, 0x05be6), (0x22e1, 0x05be8), (0x22e2, 0x05be2), (0x22e3, 0x05be4), (0x22e4, 0x05bdf),
    (0x22e5, 0x05c0d), (0x22e6, 0x05c62), (0x22e7, 0x05d84), (0x22e8, 0x05d87), (0x22e9, 0x05e5b), (0x22ea, 0x05e63),
    (0x22eb, 0x05e55), (0x22ec, 0x05e57), (0x22ed, 0x05e54), (0x22ee, 0x05ed3), (0x22ef, 0x05ed6), (0x22f0, 0x05f0a),
    (0x22f1, 0x05f46), (0x22f2, 0x05f70), (0x22f3, 0x05fb9), (0x22f4, 0x06147), (0x22f5, 0x0613f), (0x22f6, 0x0614b),
    (0x22f7, 0x06177), (0x22f8, 0x06162), (0x22f9, 0x06163), (0x22fa, 0x0615f), (0x22fb, 0x0615a), (0x22fc, 0x06158),
    (0x22fd, 0x06175), (0x22fe, 0x0622a), (0x22ff, 0x06487), (0x2300, 0x06458), (0x2301, 0x06454), (0x2302, 0x064a4),
    (0x2303, 0x06478), (0x2304, 0x0645f), (0x2305, 0x0647a), (0x2306, 0x06451), (0x2307, 0x06467), (0x2308, 0x06434),
    (0x2309, 0x0646d), (0x230a, 0x0647b), (0x230b, 0x06572), (0x230c, 0x065a1), (0x230d, 0x065d7), (0x230e, 0x065d6),
    (0x230f, 0x066a2), (0x2310, 0x066a8), (0x2311, 0x0669d), (0x2312, 0x0699c), (0x2313, 0x069a8), (0x2314, 0x06995),
    (0x2315, 0x069c1), (0x2316, 0x069ae), (0x2317, 0x069d3), (0x2318, 0x069cb), (0x2319, 0x0699b), (0x231a, 0x069b7),
    (0x231b, 0x069bb), (0x231c, 0x069ab), (0x231d, 0x069b4), (0x231e, 0x069d0), (0x231f, 0x069cd), (0x2320, 0x069ad),
    (0x2321, 0x069cc), (0x2322, 0x069a6), (0x2323, 0x069c3), (0x2324, 0x069a3), (0x2325, 0x06b49), (0x2326, 0x06b4c),
    (0x2327, 0x06c33), (0x2328, 0x06f33), (0x2329, 0x06f14), (0x232a, 0x06efe), (0x232b, 0x06f13), (0x232c, 0x06ef4),
    (0x232d, 0x06f29), (0x232e, 0x06f3e), (0x232f, 0x06f20), (0x2330, 0x06f2c), (0x2331, 0x06f0f), (0x2332, 0x06f02),
    (0x2333, 0x06f22), (0x2334, 0x06eff), (0x2335, 0x06eef), (0x2336, 0x06f06), (0x2337, 0x06f31), (0x2338, 0x06f38),
    (0x2339, 0x06f32), (0x233a, 0x06f23), (0x233b, 0x06f15), (0x233c, 0x06f2b), (0x233d, 0x06f2f), (0x233e, 0x06f88),
    (0x233f, 0x06f2a), (0x2340, 0x06eec), (0x2341, 0x06f01), (0x2342, 0x06ef2), (0x2343, 0x06ecc), (0x2344, 0x06ef7),
    (0x2345, 0x07194), (0x2346, 0x07199), (0x2347, 0x0717d), (0x2348, 0x0718a), (0x2349, 0x07184), (0x234a, 0x07192),
    (0x234b, 0x0723e), (0x234c, 0x07292), (0x234d, 0x07296), (0x234e, 0x07344), (0x234f, 0x07350), (0x2350, 0x07464),
    (0x2351, 0x07463), (0x2352, 0x0746a), (0x2353, 0x07470), (0x2354, 0x0746d), (0x2355, 0x07504), (0x2356, 0x07591),
    (0x2357, 0x07627), (0x2358, 0x0760d), (0x2359, 0x0760b), (0x235a, 0x07609), (0x235b, 0x07613), (0x235c, 0x076e1),
    (0x235d, 0x076e3), (0x235e, 0x07784), (0x235f, 0x0777d), (0x2360, 0x0777f), (0x2361, 0x07761), (0x2362, 0x078c1),
    (0x2363, 0x0789f), (0x2364, 0x078a7), (0x2365, 0x078b3), (0x2366, 0x078a9), (0x2367, 0x078a3), (0x2368, 0x0798e),
    (0x2369, 0x0798f), (0x236a, 0x0798d), (0x236b, 0x07a2e), (0x236c, 0x07a31), (0x236d, 0x07aaa), (0x236e, 0x07aa9),
    (0x236f, 0x07aed), (0x2370, 0x07aef), (0x2371, 0x07ba1), (0x2372, 0x07b95), (0x2373, 0x07b8b), (0x2374, 0x07b75),
    (0x2375, 0x07b97), (0x2376, 0x07b9d), (0x2377, 0x07b94), (0x2378, 0x07b8f), (0x2379, 0x07bb8), (0x237a, 0x07b87),
    (0x237b, 0x07b84), (0x237c, 0x07cb9), (0x237d, 0x07cbd), (0x237e, 0x07cbe), (0x237f, 0x07dbb), (0x2380, 0x07db0),
    (0x2381, 0x07d9c), (0x2382, 0x07dbd), (0x2383, 0x07dbe), (0x2384, 0x07da0), (0x2385, 0x07dca), (0x2386, 0x07db4),
    (0x2387, 0x07db2), (0x2388, 0x07db1), (0x2389, 0x07dba), (0x238a, 0x07da2), (0x238b, 0x07dbf), (0x238c, 0x07db5),
    (0x238d, 0x07db8), (0x238e, 0x07dad), (0x238f, 0x07dd2), (0x2390, 0x07dc7), (0x2391, 0x07dac), (0x2392, 0x07f70),
    (0x2393, 0x07fe0), (0x2394, 0x07fe1), (0x2395, 0x07fdf), (0x2396, 0x0805e), (0x2397, 0x0805a), (0x2398, 0x08087),
    (0x2399, 0x08150), (0x239a, 0x08180), (0x239b, 0x0818f), (0x239c, 0x08188), (0x239d, 0x0818a), (0x239e, 0x0817f),
    (0x239f, 0x08182), (0x23a0, 0x081e7), (0x23a1, 0x081fa), (0x23a2, 0x08207), (0x23a3, 0x08214), (0x23a4, 0x0821e),
    (0x23a5, 0x0824b), (0x23a6, 0x084c9), (0x23a7, 0x084bf), (0x23a8, 0x084c6), (0x23a9, 0x084c4), (0x23aa, 0x08499),
    (0x23ab, 0x0849e), (0x23ac, 0x084b2), (0x23ad, 0x0849c), (0x23ae, 0x084cb), (0x23af, 0x084b8), (0x23b0, 0x084c0),
    (0x23b1, 0x084d3), (0x23b2, 0x08490), (0x23b3, 0x084bc), (0x23b4, 0x084d1), (0x23b5, 0x084ca), (0x23b6, 0x0873f),
    (0x23b7, 0x0871c), (0x23b8, 0x0873b), (0x23b9, 0x08722), (0x23ba, 0x08725), (0x23bb, 0x08734), (0x23bc, 0x08718),
    (0x23bd, 0x08755), (0x23be, 0x08737), (0x23bf, 0x08729), (0x23c0, 0x088f3), (0x23c1, 0x08902), (0x23c2, 0x088f4),
    (0x23c3, 0x088f9), (0x23c4, 0x088f8), (0x23c5, 0x088fd), (0x23c6, 0x088e8), (0x23c7, 0x0891a), (0x23c8, 0x088ef),
    (0x23c9, 0x08aa6), (0x23ca, 0x08a8c), (0x23cb, 0x08a9e), (0x23cc, 0x08aa3), (0x23cd, 0x08a8d), (0x23ce, 0x08aa1),
    (0x23cf, 0x08a93), (0x23d0, 0x08aa4), (0x23d1, 0x08aaa), (0x23d2, 0x08aa5), (0x23d3, 0x08aa8), (0x23d4, 0x08a98),
    (0x23d5, 0x08a91), (0x23d6, 0x08a9a), (0x23d7, 0x08aa7), (0x23d8, 0x08c6a), (0x23d9, 0x08c8d), (0x23da, 0x08c8c),
    (0x23db, 0x08cd3), (0x23dc, 0x08cd1), (0x23dd, 0x08cd2), (0x23de, 0x08d6b), (0x23df, 0x08d99), (0x23e0, 0x08d95),
    (0x23e1, 0x08dfc), (0x23e2, 0x08f14), (0x23e3, 0x08f12), (0x23e4, 0x08f15), (0x23e5, 0x08f13), (0x23e6, 0x08fa3),
    (0x23e7, 0x09060), (0x23e8, 0x09058), (0x23e9, 0x0905c), (0x23ea, 0x09063), (0x23eb, 0x09059), (0x23ec, 0x0905e),
    (0x23ed, 0x09062), (0x23ee, 0x0905d), (0x23ef, 0x0905b), (0x23f0, 0x09119), (0x23f1, 0x09118), (0x23f2, 0x0911e),
    (0x23f3, 0x09175), (0x23f4, 0x09178), (0x23f5, 0x09177), (0x23f6, 0x09174), (0x23f7, 0x09278), (0x23f8, 0x09280),
    (0x23f9, 0x09285), (0x23fa, 0x09298), (0x23fb, 0x09296), (0x23fc, 0x0927b), (0x23fd, 0x09293), (0x23fe, 0x0929c),
    (0x23ff, 0x092a8), (0x2400, 0x0927c), (0x2401, 0x09291), (0x2402, 0x095a1), (0x2403, 0x095a8), (0x2404, 0x095a9),
    (0x2405, 0x095a3), (0x2406, 0x095a5), (0x2407, 0x095a4), (0x2408, 0x09699), (0x2409, 0x0969c), (0x240a, 0x0969b),
    (0x240b, 0x096cc), (0x240c, 0x096d2), (0x240d, 0x09700), (0x240e, 0x0977c), (0x240f, 0x09785), (0x2410, 0x097f6),
    (0x2411, 0x09817), (0x2412, 0x09818), (0x2413, 0x098af), (0x2414, 0x098b1), (0x2415, 0x09903), (0x2416, 0x09905),
    (0x2417, 0x0990c), (0x2418, 0x09909), (0x2419, 0x099c1), (0x241a, 0x09aaf), (0x241b, 0x09ab0), (0x241c, 0x09ae6),
    (0x241d, 0x09b41), (0x241e, 0x09b42), (0x241f, 0x09cf4), (0x2420, 0x09cf6), (0x2421, 0x09cf3), (0x2422, 0x09ebc),
    (0x2423, 0x09f3b), (0x2424, 0x09f4a), (0x2425, 0x05104), (0x2426, 0x05100), (0x2427, 0x050fb), (0x2428, 0x050f5),
    (0x2429, 0x050f9), (0x242a, 0x05102), (0x242b, 0x05108), (0x242c, 0x05109), (0x242d, 0x05105), (0x242e, 0x051dc),
    (0x242f, 0x05287), (0x2430, 0x05288), (0x2431, 0x05289), (0x2432, 0x0528d), (0x2433, 0x0528a), (0x2434, 0x052f0),
    (0x2435, 0x053b2), (0x2436, 0x0562e), (0x2437, 0x0563b), (0x2438, 0x05639), (0x2439, 0x05632), (0x243a, 0x0563f),
    (0x243b, 0x05634), (0x243c, 0x05629), (0x243d, 0x05653), (0x243e, 0x0564e), (0x243f, 0x05657), (0x2440, 0x05674),
    (0x2441, 0x05636), (0x2442, 0x0562f), (0x2443, 0x05630), (0x2444, 0x05880), (0x2445, 0x0589f), (0x2446, 0x0589e),
    (0x2447, 0x058b3), (0x2448, 0x0589c), (0x2449, 0x058ae), (0x244a, 0x058a9), (0x244b, 0x058a6), (0x244c, 0x0596d),
    (0x244d, 0x05b09), (0x244e, 0x05afb), (0x244f, 0x05b0b), (0x2450, 0x05af5), (0x2451, 0x05b0c), (0x2452, 0x05b08),
    (0x2453, 0x05bee), (0x2454, 0x05bec), (0x2455, 0x05be9), (0x2456, 0x05beb), (0x2457, 0x05c64), (0x2458, 0x05c65),
    (0x2459, 0x05d9d), (0x245a, 0x05d94), (0x245b, 0x05e62), (0x245c, 0x05e5f), (0x245d, 0x05e61), (0x245e, 0x05ee2),
    (0x245f, 0x05eda), (0x2460, 0x05edf), (0x2461, 0x05edd), (0x2462, 0x05ee3), (0x2463, 0x05ee0), (0x2464, 0x05f48),
    (0x2465, 0x05f71), (0x2466, 0x05fb7), (0x2467, 0x05fb5), (0x2468, 0x06176), (0x2469, 0x06167), (0x246a, 0x0616e),
    (0x246b, 0x0615d), (0x246c, 0x06155), (0x246d, 0x06182), (0x246e, 0x0617c), (0x246f, 0x06170), (0x2470, 0x0616b),
    (0x2471, 0x0617e), (0x2472, 0x061a7), (0x2473, 0x06190), (0x2474, 0x061ab), (0x2475, 0x0618e), (0x2476, 0x061ac),
    (0x2477, 0x0619a), (0x2478, 0x061a4), (0x2479, 0x06194), (0x247a, 0x061ae), (0x247b, 0x0622e), (0x247c, 0x06469),
    (0x247d, 0x0646f), (0x247e, 0x06479), (0x247f, 0x0649e), (0x2480, 0x064b2), (0x2481, 0x06488), (0x2482, 0x06490),
    (0x2483, 0x064b0), (0x2484, 0x064a5), (0x2485, 0x06493), (0x2486, 0x06495), (0x2487, 0x064a9), (0x2488, 0x06492),
    (0x2489, 0x064ae), (0x248a, 0x064ad), (0x248b, 0x064ab), (0x248c, 0x0649a), (0x248d, 0x064ac), (0x248e, 0x06499),
    (0x248f, 0x064a2), (0x2490, 0x064b3), (0x2491, 0x06575), (0x2492, 0x06577), (0x2493, 0x06578), (0x2494, 0x066ae),
    (0x2495, 0x066ab), (0x2496, 0x066b4), (0x2497, 0x066b1), (0x2498, 0x06a23), (0x2499, 0x06a1f), (0x249a, 0x069e8),
    (0x249b, 0x06a01), (0x249c, 0x06a1e), (0x249d, 0x06a19), (0x249e, 0x069fd), (0x249f, 0x06a21), (0x24a0, 0x06a13),
    (0x24a1, 0x06a0a), (0x24a2, 0x069f3), (0x24a3, 0x06a02), (0x24a4, 0x06a05), (0x24a5, 0x069ed), (0x24a6, 0x06a11),
    (0x24a7, 0x06b50), (0x24a8, 0x06b4e), (0x24a9, 0x06ba4), (0x24aa, 0x06bc5), (0x24ab, 0x06bc6), (0x24ac, 0x06f3f),
    (0x24ad, 0x06f7c), (0x24ae, 0x06f84), (0x24af, 0x06f51), (0x24b0, 0x06f66), (0x24b1, 0x06f54), (0x24b2, 0x06f86),
    (0x24b3, 0x06f6d), (0x24b4, 0x06f5b), (0x24b5, 0x06f78), (0x24b6, 0x06f6e), (0x24b7, 0x06f8e), (0x24b8, 0x06f7a),
    (0x24b9, 0x06f70), (0x24ba, 0x06f64), (0x24bb, 0x06f97), (0x24bc, 0x06f58), (0x24bd, 0x06ed5), (0x24be, 0x06f6f),
    (0x24bf, 0x06f60), (0x24c0, 0x06f5f), (0x24c1, 0x0719f), (0x24c2, 0x071ac), (0x24c3, 0x071b1), (0x24c4, 0x071a8),
    (0x24c5, 0x07256), (0x24c6, 0x0729b), (0x24c7, 0x0734e), (0x24c8, 0x07357), (0x24c9, 0x07469), (0x24ca, 0x0748b),
    (0x24cb, 0x07483), (0x24cc, 0x0747e), (0x24cd, 0x07480), (0x24ce, 0x0757f), (0x24cf, 0x07620), (0x24d0, 0x07629),
    (0x24d1, 0x0761f), (0x24d2, 0x07624), (0x24d3, 0x07626), (0x24d4, 0x07621), (0x24d5, 0x07622), (0x24d6, 0x0769a),
    (0x24d7, 0x076ba), (0x24d8, 0x076e4), (0x24d9, 0x0778e), (0x24da, 0x07787), (0x24db, 0x0778c), (0x24dc, 0x07791),
    (0x24dd, 0x0778b), (0x24de, 0x078cb), (0x24df, 0x078c5), (0x24e0, 0x078ba), (0x24e1, 0x078ca), (0x24e2, 0x078be),
    (0x24e3, 0x078d5), (0x24e4, 0x078bc), (0x24e5, 0x078d0), (0x24e6, 0x07a3f), (0x24e7, 0x07a3c), (0x24e8, 0x07a40),
    (0x24e9, 0x07a3d), (0x24ea, 0x07a37), (0x24eb, 0x07a3b), (0x24ec, 0x07aaf), (0x24ed, 0x07aae), (0x24ee, 0x07bad),
    (0x24ef, 0x07bb1), (0x24f0, 0x07bc4), (0x24f1, 0x07bb4), (0x24f2, 0x07bc6), (0x24f3, 0x07bc7), (0x24f4, 0x07bc1),
    (0x24f5, 0x07ba0), (0x24f6, 0x07bcc), (0x24f7, 0x07cca), (0x24f8, 0x07de0), (0x24f9, 0x07df4), (0x24fa, 0x07def),
    (0x24fb, 0x07dfb), (0x24fc, 0x07dd8), (0x24fd, 0x07dec), (0x24fe, 0x07ddd), (0x24ff, 0x07de8), (0x2500, 0x07de3),
    (0x2501, 0x07dda), (0x2502, 0x07dde), (0x2503, 0x07de9), (0x2504, 0x07d9e), (0x2505, 0x07dd9), (0x2506, 0x07df2),
    (0x2507, 0x07df9), (0x2508, 0x07f75), (0x2509, 0x07f77), (0x250a, 0x07faf), (0x250b, 0x07fe9), (0x250c, 0x08026),
    (0x250d, 0x0819b), (0x250e, 0x0819c), (0x250f, 0x0819d), (0x2510, 0x081a0), (0x2511, 0x0819a), (0x2512, 0x08198),
    (0x2513, 0x08517), (0x2514, 0x0853d), (0x2515, 0x0851a), (0x2516, 0x084ee), (0x2517, 0x0852c), (0x2518, 0x0852d),
    (0x2519, 0x08513), (0x251a, 0x08511), (0x251b, 0x08523), (0x251c, 0x08521), (0x251d, 0x08514), (0x251e, 0x084ec),
    (0x251f, 0x08525), (0x2520, 0x084ff), (0x2521, 0x08506), (0x2522, 0x08782), (0x2523, 0x08774), (0x2524, 0x08776),
    (0x2525, 0x08760), (0x2526, 0x08766), (0x2527, 0x08778), (0x2528, 0x08768), (0x2529, 0x08759), (0x252a, 0x08757),
    (0x252b, 0x0874c), (0x252c, 0x08753), (0x252d, 0x0885b), (0x252e, 0x0885d), (0x252f, 0x08910), (0x2530, 0x08907),
    (0x2531, 0x08912), (0x2532, 0x08913), (0x2533, 0x08915), (0x2534, 0x0890a), (0x2535, 0x08abc), (0x2536, 0x08ad2),
    (0x2537, 0x08ac7), (0x2538, 0x08ac4), (0x2539, 0x08a95), (0x253a, 0x08acb), (0x253b, 0x08af8), (0x253c, 0x08ab2),
    (0x253d, 0x08ac9), (0x253e, 0x08ac2), (0x253f, 0x08abf), (0x2540, 0x08ab0), (0x2541, 0x08ad6), (0x2542, 0x08acd),
    (0x2543, 0x08ab6), (0x2544, 0x08ab9), (0x2545, 0x08adb), (0x2546, 0x08c4c), (0x2547, 0x08c4e), (0x2548, 0x08c6c),
    (0x2549, 0x08ce0), (0x254a, 0x08cde), (0x254b, 0x08ce6), (0x254c, 0x08ce4), (0x254d, 0x08cec), (0x254e, 0x08ced),
    (0x254f, 0x08ce2), (0x2550, 0x08ce3), (0x2551, 0x08cdc), (0x2552, 0x08cea), (0x2553, 0x08ce1), (0x2554, 0x08d6d),
    (0x2555, 0x08d9f), (0x2556, 0x08da3), (0x2557, 0x08e2b), (0x2558, 0x08e10), (0x2559, 0x08e1d), (0x255a, 0x08e22),
    (0x255b, 0x08e0f), (0x255c, 0x08e29), (0x255d, 0x08e1f), (0x255e, 0x08e21), (0x255f, 0x08e1e), (0x2560, 0x08eba),
    (0x2561, 0x08f1d), (0x2562, 0x08f1b), (0x2563, 0x08f1f), (0x2564, 0x08f29), (0x2565, 0x08f26), (0x2566, 0x08f2a),
    (0x2567, 0x08f1c), (0x2568, 0x08f1e), (0x2569, 0x08f25), (0x256a, 0x09069), (0x256b, 0x0906e), (0x256c, 0x09068),
    (0x256d, 0x0906d), (0x256e, 0x09077), (0x256f, 0x09130), (0x2570, 0x0912d), (0x2571, 0x09127), (0x2572, 0x09131),
    (0x2573, 0x09187), (0x2574, 0x09189), (0x2575, 0x0918b), (0x2576, 0x09183), (0x2577, 0x092c5), (0x2578, 0x092bb),
    (0x2579, 0x092b7), (0x257a, 0x092ea), (0x257b, 0x092ac), (0x257c, 0x092e4), (0x257d, 0x092c1), (0x257e, 0x092b3),
    (0x257f, 0x092bc), (0x2580, 0x092d2), (0x2581, 0x092c7), (0x2582, 0x092f0), (0x2583, 0x092b2), (0x2584, 0x095ad),
    (0x2585, 0x095b1), (0x2586, 0x09704), (0x2587, 0x09706), (0x2588, 0x09707), (0x2589, 0x09709), (0x258a, 0x09760),
    (0x258b, 0x0978d), (0x258c, 0x0978b), (0x258d, 0x0978f), (0x258e, 0x09821), (0x258f, 0x0982b), (0x2590, 0x0981c),
    (0x2591, 0x098b3), (0x2592, 0x0990a), (0x2593, 0x09913), (0x2594, 0x09912), (0x2595, 0x09918), (0x2596, 0x099dd),
    (0x2597, 0x099d0), (0x2598, 0x099df), (0x2599, 0x099db), (0x259a, 0x099d1), (0x259b, 0x099d5), (0x259c, 0x099d2),
    (0x259d, 0x099d9), (0x259e, 0x09ab7), (0x259f, 0x09aee), (0x25a0, 0x09aef), (0x25a1, 0x09b27), (0x25a2, 0x09b45),
    (0x25a3, 0x09b44), (0x25a4, 0x09b77), (0x25a5, 0x09b6f), (0x25a6, 0x09d06), (0x25a7, 0x09d09), (0x25a8, 0x09d03),
    (0x25a9, 0x09ea9), (0x25aa, 0x09ebe), (0x25ab, 0x09ece), (0x25ac, 0x058a8), (0x25ad, 0x09f52), (0x25ae, 0x05112),
    (0x25af, 0x05118), (0x25b0, 0x05114), (0x25b1, 0x05110), (0x25b2, 0x05115), (0x25b3, 0x05180), (0x25b4, 0x051aa),
    (0x25b5, 0x051dd), (0x25b6, 0x05291), (0x25b7, 0x05293), (0x25b8, 0x052f3), (0x25b9, 0x05659), (0x25ba, 0x0566b),
    (0x25bb, 0x05679), (0x25bc, 0x05669), (0x25bd, 0x05664), (0x25be, 0x05678), (0x25bf, 0x0566a), (0x25c0, 0x05668),
    (0x25c1, 0x05665), (0x25c2, 0x05671), (0x25c3, 0x0566f), (0x25c4, 0x0566c), (0x25c5, 0x05662), (0x25c6, 0x05676),
    (0x25c7, 0x058c1), (0x25c8, 0x058be), (0x25c9, 0x058c7), (0x25ca, 0x058c5), (0x25cb, 0x0596e), (0x25cc, 0x05b1d),
    (0x25cd, 0x05b34), (0x25ce, 0x05b78), (0x25cf, 0x05bf0), (0x25d0, 0x05c0e), (0x25d1, 0x05f4a), (0x25d2, 0x061b2),
    (0x25d3, 0x06191), (0x25d4, 0x061a9), (0x25d5, 0x0618a), (0x25d6, 0x061cd), (0x25d7, 0x061b6), (0x25d8, 0x061be),
    (0x25d9, 0x061ca), (0x25da, 0x061c8), (0x25db, 0x06230), (0x25dc, 0x064c5), (0x25dd, 0x064c1), (0x25de, 0x064cb),
    (0x25df, 0x064bb), (0x25e0, 0x064bc), (0x25e1, 0x064da), (0x25e2, 0x064c4), (0x25e3, 0x064c7), (0x25e4, 0x064c2),
    (0x25e5, 0x064cd), (0x25e6, 0x064bf), (0x25e7, 0x064d2), (0x25e8, 0x064d4), (0x25e9, 0x064be), (0x25ea, 0x06574),
    (0x25eb, 0x066c6), (0x25ec, 0x066c9), (0x25ed, 0x066b9), (0x25ee, 0x066c4), (0x25ef, 0x066c7), (0x25f0, 0x066b8),
    (0x25f1, 0x06a3d), (0x25f2, 0x06a38), (0x25f3, 0x06a3a), (0x25f4, 0x06a59), (0x25f5, 0x06a6b), (0x25f6, 0x06a58),
    (0x25f7, 0x06a39), (0x25f8, 0x06a44), (0x25f9, 0x06a62), (0x25fa, 0x06a61), (0x25fb, 0x06a4b), (0x25fc, 0x06a47),
    (0x25fd, 0x06a35), (0x25fe, 0x06a5f), (0x25ff, 0x06a48), (0x2600, 0x06b59), (0x2601, 0x06b77), (0x2602, 0x06c05),
    (0x2603, 0x06fc2), (0x2604, 0x06fb1), (0x2605, 0x06fa1), (0x2606, 0x06fc3), (0x2607, 0x06fa4), (0x2608, 0x06fc1),
    (0x2609, 0x06fa7), (0x260a, 0x06fb3), (0x260b, 0x06fc0), (0x260c, 0x06fb9), (0x260d, 0x06fb6), (0x260e, 0x06fa6),
    (0x260f, 0x06fa0), (0x2610, 0x06fb4), (0x2611, 0x071be), (0x2612, 0x071c9), (0x2613, 0x071d0), (0x2614, 0x071d2),
    (0x2615, 0x071c8), (0x2616, 0x071d5), (0x2617, 0x071b9), (0x2618, 0x071ce), (0x2619, 0x071d9), (0x261a, 0x071dc),
    (0x261b, 0x071c3), (0x261c, 0x071c4), (0x261d, 0x07368), (0x261e, 0x0749c), (0x261f, 0x074a3), (0x2620, 0x07498),
    (0x2621, 0x0749f), (0x2622, 0x0749e), (0x2623, 0x074e2), (0x2624, 0x0750c), (0x2625, 0x0750d), (0x2626, 0x07634),
    (0x2627, 0x07638), (0x2628, 0x0763a), (0x2629, 0x076e7), (0x262a, 0x076e5), (0x262b, 0x077a0), (0x262c, 0x0779e),
    (0x262d, 0x0779f), (0x262e, 0x077a5), (0x262f, 0x078e8), (0x2630, 0x078da), (0x2631, 0x078ec), (0x2632, 0x078e7),
    (0x2633, 0x079a6), (0x2634, 0x07a4d), (0x2635, 0x07a4e), (0x2636, 0x07a46), (0x2637, 0x07a4c), (0x2638, 0x07a4b),
    (0x2639, 0x07aba), (0x263a, 0x07bd9), (0x263b, 0x07c11), (0x263c, 0x07bc9), (0x263d, 0x07be4), (0x263e, 0x07bdb),
    (0x263f, 0x07be1), (0x2640, 0x07be9), (0x2641, 0x07be6), (0x2642, 0x07cd5), (0x2643, 0x07cd6), (0x2644, 0x07e0a),
    (0x2645, 0x07e11), (0x2646, 0x07e08), (0x2647, 0x07e1b), (0x2648, 0x07e23), (0x2649, 0x07e1e), (0x264a, 0x07e1d),
    (0x264b, 0x07e09), (0x264c, 0x07e10), (0x264d, 0x07f79), (0x264e, 0x07fb2), (0x264f, 0x07ff0), (0x2650, 0x07ff1),
    (0x2651, 0x07fee), (0x2652, 0x08028), (0x2653, 0x081b3), (0x2654, 0x081a9), (0x2655, 0x081a8), (0x2656, 0x081fb),
    (0x2657, 0x08208), (0x2658, 0x08258), (0x2659, 0x08259), (0x265a, 0x0854a), (0x265b, 0x08559), (0x265c, 0x08548),
    (0x265d, 0x08568), (0x265e, 0x08569), (0x265f, 0x08543), (0x2660, 0x08549), (0x2661, 0x0856d), (0x2662, 0x0856a),
    (0x2663, 0x0855e), (0x2664, 0x08783), (0x2665, 0x0879f), (0x2666, 0x0879e), (0x2667, 0x087a2), (0x2668, 0x0878d),
    (0x2669, 0x08861), (0x266a, 0x0892a), (0x266b, 0x08932), (0x266c, 0x08925), (0x266d, 0x0892b), (0x266e, 0x08921),
    (0x266f, 0x089aa), (0x2670, 0x089a6), (0x2671, 0x08ae6), (0x2672, 0x08afa), (0x2673, 0x08aeb), (0x2674, 0x08af1),
    (0x2675, 0x08b00), (0x2676, 0x08adc), (0x2677, 0x08ae7), (0x2678, 0x08aee), (0x2679, 0x08afe), (0x267a, 0x08b01),
    (0x267b, 0x08b02), (0x267c, 0x08af7), (0x267d, 0x08aed), (0x267e, 0x08af3), (0x267f, 0x08af6), (0x2680, 0x08afc),
    (0x2681, 0x08c6b), (0x2682, 0x08c6d), (0x2683, 0x08c93), (0x2684, 0x08cf4), (0x2685, 0x08e44), (0x2686, 0x08e31),
    (0x2687, 0x08e34), (0x2688, 0x08e42), (0x2689, 0x08e39), (0x268a, 0x08e35), (0x268b, 0x08f3b), (0x268c, 0x08f2f),
    (0x268d, 0x08f38), (0x268e, 0x08f33), (0x268f, 0x08fa8), (0x2690, 0x08fa6), (0x2691, 0x09075), (0x2692, 0x09074),
    (0x2693, 0x09078), (0x2694, 0x09072), (0x2695, 0x0907c), (0x2696, 0x0907a), (0x2697, 0x09134), (0x2698, 0x09192),
    (0x2699, 0x09320), (0x269a, 0x09336), (0x269b, 0x092f8), (0x269c, 0x09333), (0x269d, 0x0932f), (0x269e, 0x09322),
    (0x269f, 0x092fc), (0x26a0, 0x0932b), (0x26a1, 0x09304), (0x26a2, 0x0931a), (0x26a3, 0x09310), (0x26a4, 0x09326),
    (0x26a5, 0x09321), (0x26a6, 0x09315), (0x26a7, 0x0932e), (0x26a8, 0x09319), (0x26a9, 0x095bb), (0x26aa, 0x096a7),
    (0x26ab, 0x096a8), (0x26ac, 0x096aa), (0x26ad, 0x096d5), (0x26ae, 0x0970e), (0x26af, 0x09711), (0x26b0, 0x09716),
    (0x26b1, 0x0970d), (0x26b2, 0x09713), (0x26b3, 0x0970f), (0x26b4, 0x0975b), (0x26b5, 0x0975c), (0x26b6, 0x09766),
    (0x26b7, 0x09798), (0x26b8, 0x09830), (0x26b9, 0x09838), (0x26ba, 0x0983b), (0x26bb, 0x09837), (0x26bc, 0x0982d),
    (0x26bd, 0x09839), (0x26be, 0x09824), (0x26bf, 0x09910), (0x26c0, 0x09928), (0x26c1, 0x0991e), (0x26c2, 0x0991b),
    (0x26c3, 0x09921), (0x26c4, 0x0991a), (0x26c5, 0x099ed), (0x26c6, 0x099e2), (0x26c7, 0x099f1), (0x26c8, 0x09ab8),
    (0x26c9, 0x09abc), (0x26ca, 0x09afb), (0x26cb, 0x09aed), (0x26cc, 0x09b28), (0x26cd, 0x09b91), (0x26ce, 0x09d15),
    (0x26cf, 0x09d23), (0x26d0, 0x09d26), (0x26d1, 0x09d28), (0x26d2, 0x09d12), (0x26d3, 0x09d1b), (0x26d4, 0x09ed8),
    (0x26d5, 0x09ed4), (0x26d6, 0x09f8d), (0x26d7, 0x09f9c), (0x26d8, 0x0512a), (0x26d9, 0x0511f), (0x26da, 0x05121),
    (0x26db, 0x05132), (0x26dc, 0x052f5), (0x26dd, 0x0568e), (0x26de, 0x05680), (0x26df, 0x05690), (0x26e0, 0x05685),
    (0x26e1, 0x05687), (0x26e2, 0x0568f), (0x26e3, 0x058d5), (0x26e4, 0x058d3), (0x26e5, 0x058d1), (0x26e6, 0x058ce),
    (0x26e7, 0x05b30), (0x26e8, 0x05b2a), (0x26e9, 0x05b24), (0x26ea, 0x05b7a), (0x26eb, 0x05c37), (0x26ec, 0x05c68),
    (0x26ed, 0x05dbc), (0x26ee, 0x05dba), (0x26ef, 0x05dbd), (0x26f0, 0x05db8), (0x26f1, 0x05e6b), (0x26f2, 0x05f4c),
    (0x26f3, 0x05fbd), (0x26f4, 0x061c9), (0x26f5, 0x061c2), (0x26f6, 0x061c7), (0x26f7, 0x061e6), (0x26f8, 0x061cb),
    (0x26f9, 0x06232), (0x26fa, 0x06234), (0x26fb, 0x064ce), (0x26fc, 0x064ca), (0x26fd, 0x064d8), (0x26fe, 0x064e0),
    (0x26ff, 0x064f0), (0x2700, 0x064e6), (0x2701, 0x064ec), (0x2702, 0x064f1), (0x2703, 0x064e2), (0x2704, 0x064ed),
    (0x2705, 0x06582), (0x2706, 0x06583), (0x2707, 0x066d9), (0x2708, 0x066d6), (0x2709, 0x06a80), (0x270a, 0x06a94),
    (0x270b, 0x06a84), (0x270c, 0x06aa2), (0x270d, 0x06a9c), (0x270e, 0x06adb), (0x270f, 0x06aa3), (0x2710, 0x06a7e),
    (0x2711, 0x06a97), (0x2712, 0x06a90), (0x2713, 0x06aa0), (0x2714, 0x06b5c), (0x2715, 0x06bae), (0x2716, 0x06bda),
    (0x2717, 0x06c08), (0x2718, 0x06fd8), (0x2719, 0x06ff1), (0x271a, 0x06fdf), (0x271b, 0x06fe0), (0x271c, 0x06fdb),
    (0x271d, 0x06fe4), (0x271e, 0x06feb), (0x271f, 0x06fef), (0x2720, 0x06f80), (0x2721, 0x06fec), (0x2722, 0x06fe1),
    (0x2723, 0x06fe9), (0x2724, 0x06fd5), (0x2725, 0x06fee), (0x2726, 0x06ff0), (0x2727, 0x071e7), (0x2728, 0x071df),
    (0x2729, 0x071ee), (0x272a, 0x071e6), (0x272b, 0x071e5), (0x272c, 0x071ed), (0x272d, 0x071ec), (0x272e, 0x071f4),
    (0x272f, 0x071e0), (0x2730, 0x07235), (0x2731, 0x07246), (0x2732, 0x07370), (0x2733, 0x07372), (0x2734, 0x074a9),
    (0x2735, 0x074b0), (0x2736, 0x074a6), (0x2737, 0x074a8), (0x2738, 0x07646), (0x2739, 0x07642), (0x273a, 0x0764c),
    (0x273b, 0x076ea), (0x273c, 0x077b3), (0x273d, 0x077aa), (0x273e, 0x077b0), (0x273f, 0x077ac), (0x2740, 0x077a7),
    (0x2741, 0x077ad), (0x2742, 0x077ef), (0x2743, 0x078f7), (0x2744, 0x078fa), (0x2745, 0x078f4), (0x2746, 0x078ef),
    (0x2747, 0x07901), (0x2748, 0x079a7), (0x2749, 0x079aa), (0x274a, 0x07a57), (0x274b, 0x07abf), (0x274c, 0x07c07),
    (0x274d, 0x07c0d), (0x274e, 0x07bfe), (0x274f, 0x07bf7), (0x2750, 0x07c0c), (0x2751, 0x07be0), (0x2752, 0x07ce0),
    (0x2753, 0x07cdc), (0x2754, 0x07cde), (0x2755, 0x07ce2), (0x2756, 0x07cdf), (0x2757, 0x07cd9), (0x2758, 0x07cdd),
    (0x2759, 0x07e2e), (0x275a, 0x07e3e), (0x275b, 0x07e46), (0x275c, 0x07e37), (0x275d, 0x07e32), (0x275e, 0x07e43),
    (0x275f, 0x07e2b), (0x2760, 0x07e3d), (0x2761, 0x07e31), (0x2762, 0x07e45), (0x2763, 0x07e41), (0x2764, 0x07e34),
    (0x2765, 0x07e39), (0x2766, 0x07e48), (0x2767, 0x07e35), (0x2768, 0x07e3f), (0x2769, 0x07e2f), (0x276a, 0x07f44),
    (0x276b, 0x07ff3), (0x276c, 0x07ffc), (0x276d, 0x08071), (0x276e, 0x08072), (0x276f, 0x08070), (0x2770, 0x0806f),
    (0x2771, 0x08073), (0x2772, 0x081c6), (0x2773, 0x081c3), (0x2774, 0x081ba), (0x2775, 0x081c2), (0x2776, 0x081c0),
    (0x2777, 0x081bf), (0x2778, 0x081bd), (0x2779, 0x081c9), (0x277a, 0x081be), (0x277b, 0x081e8), (0x277c, 0x08209),
    (0x277d, 0x08271), (0x277e, 0x085aa), (0x277f, 0x08584), (0x2780, 0x0857e), (0x2781, 0x0859c), (0x2782, 0x08591),
    (0x2783, 0x08594), (0x2784, 0x085af), (0x2785, 0x0859b), (0x2786, 0x08587), (0x2787, 0x085a8), (0x2788, 0x0858a),
    (0x2789, 0x08667), (0x278a, 0x087c0), (0x278b, 0x087d1), (0x278c, 0x087b3), (0x278d, 0x087d2), (0x278e, 0x087c6),
    (0x278f, 0x087ab), (0x2790, 0x087bb), (0x2791, 0x087ba), (0x2792, 0x087c8), (0x2793, 0x087cb), (0x2794, 0x0893b),
    (0x2795, 0x08936), (0x2796, 0x08944), (0x2797, 0x08938), (0x2798, 0x0893d), (0x2799, 0x089ac), (0x279a, 0x08b0e),
    (0x279b, 0x08b17), (0x279c, 0x08b19), (0x279d, 0x08b1b), (0x279e, 0x08b0a), (0x279f, 0x08b20), (0x27a0, 0x08b1d),
    (0x27a1, 0x08b04), (0x27a2, 0x08b10), (0x27a3, 0x08c41), (0x27a4, 0x08c3f), (0x27a5, 0x08c73), (0x27a6, 0x08cfa),
    (0x27a7, 0x08cfd), (0x27a8, 0x08cfc), (0x27a9, 0x08cf8), (0x27aa, 0x08cfb), (0x27ab, 0x08da8), (0x27ac, 0x08e49),
    (0x27ad, 0x08e4b), (0x27ae, 0x08e48), (0x27af, 0x08e4a), (0x27b0, 0x08f44), (0x27b1, 0x08f3e), (0x27b2, 0x08f42),
    (0x27b3, 0x08f45), (0x27b4, 0x08f3f), (0x27b5, 0x0907f), (0x27b6, 0x0907d), (0x27b7, 0x09084), (0x27b8, 0x09081),
    (0x27b9, 0x09082), (0x27ba, 0x09080), (0x27bb, 0x09139), (0x27bc, 0x091a3), (0x27bd, 0x0919e), (0x27be, 0x0919c),
    (0x27bf, 0x0934d), (0x27c0, 0x09382), (0x27c1, 0x09328), (0x27c2, 0x09375), (0x27c3, 0x0934a), (0x27c4, 0x09365),
    (0x27c5, 0x0934b), (0x27c6, 0x09318), (0x27c7, 0x0937e), (0x27c8, 0x0936c), (0x27c9, 0x0935b), (0x27ca, 0x09370),
    (0x27cb, 0x0935a), (0x27cc, 0x09354), (0x27cd, 0x095ca), (0x27ce, 0x095cb), (0x27cf, 0x095cc), (0x27d0, 0x095c8),
    (0x27d1, 0x095c6), (0x27d2, 0x096b1), (0x27d3, 0x096b8), (0x27d4, 0x096d6), (0x27d5, 0x0971c), (0x27d6, 0x0971e),
    (0x27d7, 0x097a0), (0x27d8, 0x097d3), (0x27d9, 0x09846), (0x27da, 0x098b6), (0x27db, 0x09935), (0x27dc, 0x09a01),
    (0x27dd, 0x099ff), (0x27de, 0x09bae), (0x27df, 0x09bab), (0x27e0, 0x09baa), (0x27e1, 0x09bad), (0x27e2, 0x09d3b),
    (0x27e3, 0x09d3f), (0x27e4, 0x09e8b), (0x27e5, 0x09ecf), (0x27e6, 0x09ede), (0x27e7, 0x09edc), (0x27e8, 0x09edd),
    (0x27e9, 0x09edb), (0x27ea, 0x09f3e), (0x27eb, 0x09f4b), (0x27ec, 0x053e2), (0x27ed, 0x05695), (0x27ee, 0x056ae),
    (0x27ef, 0x058d9), (0x27f0, 0x058d8), (0x27f1, 0x05b38), (0x27f2, 0x05f5d), (0x27f3, 0x061e3), (0x27f4, 0x06233),
    (0x27f5, 0x064f4), (0x27f6, 0x064f2), (0x27f7, 0x064fe), (0x27f8, 0x06506), (0x27f9, 0x064fa), (0x27fa, 0x064fb),
    (0x27fb, 0x064f7), (0x27fc, 0x065b7), (0x27fd, 0x066dc), (0x27fe, 0x06726), (0x27ff, 0x06ab3), (0x2800, 0x06aac),
    (0x2801, 0x06ac3), (0x2802, 0x06abb), (0x2803, 0x06ab8), (0x2804, 0x06ac2), (0x2805, 0x06aae), (0x2806, 0x06aaf),
    (0x2807, 0x06b5f), (0x2808, 0x06b78), (0x2809, 0x06baf), (0x280a, 0x07009), (0x280b, 0x0700b), (0x280c, 0x06ffe),
    (0x280d, 0x07006), (0x280e, 0x06ffa), (0x280f, 0x07011), (0x2810, 0x0700f), (0x2811, 0x071fb), (0x2812, 0x071fc),
    (0x2813, 0x071fe), (0x2814, 0x071f8), (0x2815, 0x07377), (0x2816, 0x07375), (0x2817, 0x074a7), (0x2818, 0x074bf),
    (0x2819, 0x07515), (0x281a, 0x07656), (0x281b, 0x07658), (0x281c, 0x07652), (0x281d, 0x077bd), (0x281e, 0x077bf),
    (0x281f, 0x077bb), (0x2820, 0x077bc), (0x2821, 0x0790e), (0x2822, 0x079ae), (0x2823, 0x07a61), (0x2824, 0x07a62),
    (0x2825, 0x07a60), (0x2826, 0x07ac4), (0x2827, 0x07ac5), (0x2828, 0x07c2b), (0x2829, 0x07c27), (0x282a, 0x07c2a),
    (0x282b, 0x07c1e), (0x282c, 0x07c23), (0x282d, 0x07c21), (0x282e, 0x07ce7), (0x282f, 0x07e54), (0x2830, 0x07e55),
    (0x2831, 0x07e5e), (0x2832, 0x07e5a), (0x2833, 0x07e61), (0x2834, 0x07e52), (0x2835, 0x07e59), (0x2836, 0x07f48),
    (0x2837, 0x07ff9), (0x2838, 0x07ffb), (0x2839, 0x08077), (0x283a, 0x08076), (0x283b, 0x081cd), (0x283c, 0x081cf),
    (0x283d, 0x0820a), (0x283e, 0x085cf), (0x283f, 0x085a9), (0x2840, 0x085cd), (0x2841, 0x085d0), (0x2842, 0x085c9),
    (0x2843, 0x085b0), (0x2844, 0x085ba), (0x2845, 0x085b9), (0x2846, 0x085a6), (0x2847, 0x087ef), (0x2848, 0x087ec),
    (0x2849, 0x087f2), (0x284a, 0x087e0), (0x284b, 0x08986), (0x284c, 0x089b2), (0x284d, 0x089f4), (0x284e, 0x08b28),
    (0x284f, 0x08b39), (0x2850, 0x08b2c), (0x2851, 0x08b2b), (0x2852, 0x08c50), (0x2853, 0x08d05), (0x2854, 0x08e59),
    (0x2855, 0x08e63), (0x2856, 0x08e66), (0x2857, 0x08e64), (0x2858, 0x08e5f), (0x2859, 0x08e55), (0x285a, 0x08ec0),
    (0x285b, 0x08f49), (0x285c, 0x08f4d), (0x285d, 0x09087), (0x285e, 0x09083), (0x285f, 0x09088), (0x2860, 0x091ab),
    (0x2861, 0x091ac), (0x2862, 0x091d0), (0x2863, 0x09394), (0x2864, 0x0938a), (0x2865, 0x09396), (0x2866, 0x093a2),
    (0x2867, 0x093b3), (0x2868, 0x093ae), (0x2869, 0x093ac), (0x286a, 0x093b0), (0x286b, 0x09398), (0x286c, 0x0939a),
    (0x286d, 0x09397), (0x286e, 0x095d4), (0x286f, 0x095d6), (0x2870, 0x095d0), (0x2871, 0x095d5), (0x2872, 0x096e2),
    (0x2873, 0x096dc), (0x2874, 0x096d9), (0x2875, 0x096db), (0x2876, 0x096de), (0x2877, 0x09724), (0x2878, 0x097a3),
    (0x2879, 0x097a6), (0x287a, 0x097ad), (0x287b, 0x097f9), (0x287c, 0x0984d), (0x287d, 0x0984f), (0x287e, 0x0984c),
    (0x287f, 0x0984e), (0x2880, 0x09853), (0x2881, 0x098ba), (0x2882, 0x0993e), (0x2883, 0x0993f), (0x2884, 0x0993d),
    (0x2885, 0x0992e), (0x2886, 0x099a5), (0x2887, 0x09a0e), (0x2888, 0x09ac1), (0x2889, 0x09b03), (0x288a, 0x09b06),
    (0x288b, 0x09b4f), (0x288c, 0x09b4e), (0x288d, 0x09b4d), (0x288e, 0x09bca), (0x288f, 0x09bc9), (0x2890, 0x09bfd),
    (0x2891, 0x09bc8), (0x2892, 0x09bc0), (0x2893, 0x09d51), (0x2894, 0x09d5d), (0x2895, 0x09d60), (0x2896, 0x09ee0),
    (0x2897, 0x09f15), (0x2898, 0x09f2c), (0x2899, 0x05133), (0x289a, 0x056a5), (0x289b, 0x058de), (0x289c, 0x058df),
    (0x289d, 0x058e2), (0x289e, 0x05bf5), (0x289f, 0x09f90), (0x28a0, 0x05eec), (0x28a1, 0x061f2), (0x28a2, 0x061f7),
    (0x28a3, 0x061f6), (0x28a4, 0x061f5), (0x28a5, 0x06500), (0x28a6, 0x0650f), (0x28a7, 0x066e0), (0x28a8, 0x066dd),
    (0x28a9, 0x06ae5), (0x28aa, 0x06add), (0x28ab, 0x06ada), (0x28ac, 0x06ad3), (0x28ad, 0x0701b), (0x28ae, 0x0701f),
    (0x28af, 0x07028), (0x28b0, 0x0701a), (0x28b1, 0x0701d), (0x28b2, 0x07015), (0x28b3, 0x07018), (0x28b4, 0x07206),
    (0x28b5, 0x0720d), (0x28b6, 0x07258), (0x28b7, 0x072a2), (0x28b8, 0x07378), (0x28b9, 0x0737a), (0x28ba, 0x074bd),
    (0x28bb, 0x074ca), (0x28bc, 0x074e3), (0x28bd, 0x07587), (0x28be, 0x07586), (0x28bf, 0x0765f), (0x28c0, 0x07661),
    (0x28c1, 0x077c7), (0x28c2, 0x07919), (0x28c3, 0x079b1), (0x28c4, 0x07a6b), (0x28c5, 0x07a69), (0x28c6, 0x07c3e),
    (0x28c7, 0x07c3f), (0x28c8, 0x07c38), (0x28c9, 0x07c3d), (0x28ca, 0x07c37), (0x28cb, 0x07c40), (0x28cc, 0x07e6b),
    (0x28cd, 0x07e6d), (0x28ce, 0x07e79), (0x28cf, 0x07e69), (0x28d0, 0x07e6a), (0x28d1, 0x07f85), (0x28d2, 0x07e73),
    (0x28d3, 0x07fb6), (0x28d4, 0x07fb9), (0x28d5, 0x07fb8), (0x28d6, 0x081d8), (0x28d7, 0x085e9), (0x28d8, 0x085dd),
    (0x28d9, 0x085ea), (0x28da, 0x085d5), (0x28db, 0x085e4), (0x28dc, 0x085e5), (0x28dd, 0x085f7), (0x28de, 0x087fb),
    (0x28df, 0x08805), (0x28e0, 0x0880d), (0x28e1, 0x087f9), (0x28e2, 0x087fe), (0x28e3, 0x08960), (0x28e4, 0x0895f),
    (0x28e5, 0x08956), (0x28e6, 0x0895e), (0x28e7, 0x08b41), (0x28e8, 0x08b5c), (0x28e9, 0x08b58), (0x28ea, 0x08b49),
    (0x28eb, 0x08b5a), (0x28ec, 0x08b4e), (0x28ed, 0x08b4f), (0x28ee, 0x08b46), (0x28ef, 0x08b59), (0x28f0, 0x08d08),
    (0x28f1, 0x08d0a), (0x28f2, 0x08e7c), (0x28f3, 0x08e72), (0x28f4, 0x08e87), (0x28f5, 0x08e76), (0x28f6, 0x08e6c),
    (0x28f7, 0x08e7a), (0x28f8, 0x08e74), (0x28f9, 0x08f54), (0x28fa, 0x08f4e), (0x28fb, 0x08fad), (0x28fc, 0x0908a),
    (0x28fd, 0x0908b), (0x28fe, 0x091b1), (0x28ff, 0x091ae), (0x2900, 0x093e1), (0x2901, 0x093d1), (0x2902, 0x093df),
    (0x2903, 0x093c3), (0x2904, 0x093c8), (0x2905, 0x093dc), (0x2906, 0x093dd), (0x2907, 0x093d6), (0x2908, 0x093e2),
    (0x2909, 0x093cd), (0x290a, 0x093d8), (0x290b, 0x093e4), (0x290c, 0x093d7), (0x290d, 0x093e8), (0x290e, 0x095dc),
    (0x290f, 0x096b4), (0x2910, 0x096e3), (0x2911, 0x0972a), (0x2912, 0x09727), (0x2913, 0x09761), (0x2914, 0x097dc),
    (0x2915, 0x097fb), (0x2916, 0x0985e), (0x2917, 0x09858), (0x2918, 0x0985b), (0x2919, 0x098bc), (0x291a, 0x09945),
    (0x291b, 0x09949), (0x291c, 0x09a16), (0x291d, 0x09a19), (0x291e, 0x09b0d), (0x291f, 0x09be8), (0x2920, 0x09be7),
    (0x2921, 0x09bd6), (0x2922, 0x09bdb), (0x2923, 0x09d89), (0x2924, 0x09d61), (0x2925, 0x09d72), (0x2926, 0x09d6a),
    (0x2927, 0x09d6c), (0x2928, 0x09e92), (0x2929, 0x09e97), (0x292a, 0x09e93), (0x292b, 0x09eb4), (0x292c, 0x052f8),
    (0x292d, 0x056a8), (0x292e, 0x056b7), (0x292f, 0x056b6), (0x2930, 0x056b4), (0x2931, 0x056bc), (0x2932, 0x058e4),
    (0x2933, 0x05b40), (0x2934, 0x05b43), (0x2935, 0x05b7d), (0x2936, 0x05bf6), (0x2937, 0x05dc9), (0x2938, 0x061f8),
    (0x2939, 0x061fa), (0x293a, 0x06518), (0x293b, 0x06514), (0x293c, 0x06519), (0x293d, 0x066e6), (0x293e, 0x06727),
    (0x293f, 0x06aec), (0x2940, 0x0703e), (0x2941, 0x07030), (0x2942, 0x07032), (0x2943, 0x07210), (0x2944, 0x0737b),
    (0x2945, 0x074cf), (0x2946, 0x07662), (0x2947, 0x07665), (0x2948, 0x07926), (0x2949, 0x0792a), (0x294a, 0x0792c),
    (0x294b, 0x0792b), (0x294c, 0x07ac7), (0x294d, 0x07af6), (0x294e, 0x07c4c), (0x294f, 0x07c43), (0x2950, 0x07c4d),
    (0x2951, 0x07cef), (0x2952, 0x07cf0), (0x2953, 0x08fae), (0x2954, 0x07e7d), (0x2955, 0x07e7c), (0x2956, 0x07e82),
    (0x2957, 0x07f4c), (0x2958, 0x08000), (0x2959, 0x081da), (0x295a, 0x08266), (0x295b, 0x085fb), (0x295c, 0x085f9),
    (0x295d, 0x08611), (0x295e, 0x085fa), (0x295f, 0x08606), (0x2960, 0x0860b), (0x2961, 0x08607), (0x2962, 0x0860a),
    (0x2963, 0x08814), (0x2964, 0x08815), (0x2965, 0x08964), (0x2966, 0x089ba), (0x2967, 0x089f8), (0x2968, 0x08b70),
    (0x2969, 0x08b6c), (0x296a, 0x08b66), (0x296b, 0x08b6f), (0x296c, 0x08b5f), (0x296d, 0x08b6b), (0x296e, 0x08d0f),
    (0x296f, 0x08d0d), (0x2970, 0x08e89), (0x2971, 0x08e81), (0x2972, 0x08e85), (0x2973, 0x08e82), (0x2974, 0x091b4),
    (0x2975, 0x091cb), (0x2976, 0x09418), (0x2977, 0x09403), (0x2978, 0x093fd), (0x2979, 0x095e1), (0x297a, 0x09730),
    (0x297b, 0x098c4), (0x297c, 0x09952), (0x297d, 0x09951), (0x297e, 0x099a8), (0x297f, 0x09a2b), (0x2980, 0x09a30),
    (0x2981, 0x09a37), (0x2982, 0x09a35), (0x2983, 0x09c13), (0x2984, 0x09c0d), (0x2985, 0x09e79), (0x2986, 0x09eb5),
    (0x2987, 0x09ee8), (0x2988, 0x09f2f), (0x2989, 0x09f5f), (0x298a, 0x09f63), (0x298b, 0x09f61), (0x298c, 0x05137),
    (0x298d, 0x05138), (0x298e, 0x056c1), (0x298f, 0x056c0), (0x2990, 0x056c2), (0x2991, 0x05914), (0x2992, 0x05c6c),
    (0x2993, 0x05dcd), (0x2994, 0x061fc), (0x2995, 0x061fe), (0x2996, 0x0651d), (0x2997, 0x0651c), (0x2998, 0x06595),
    (0x2999, 0x066e9), (0x299a, 0x06afb), (0x299b, 0x06b04), (0x299c, 0x06afa), (0x299d, 0x06bb2), (0x299e, 0x0704c),
    (0x299f, 0x0721b), (0x29a0, 0x072a7), (0x29a1, 0x074d6), (0x29a2, 0x074d4), (0x29a3, 0x07669), (0x29a4, 0x077d3),
    (0x29a5, 0x07c50), (0x29a6, 0x07e8f), (0x29a7, 0x07e8c), (0x29a8, 0x07fbc), (0x29a9, 0x08617), (0x29aa, 0x0862d),
    (0x29ab, 0x0861a), (0x29ac, 0x08823), (0x29ad, 0x08822), (0x29ae, 0x08821), (0x29af, 0x0881f), (0x29b0, 0x0896a),
    (0x29b1, 0x0896c), (0x29b2, 0x089bd), (0x29b3, 0x08b74), (0x29b4, 0x08b77), (0x29b5, 0x08b7d), (0x29b6, 0x08d13),
    (0x29b7, 0x08e8a), (0x29b8, 0x08e8d), (0x29b9, 0x08e8b), (0x29ba, 0x08f5f), (0x29bb, 0x08faf), (0x29bc, 0x091ba),
    (0x29bd, 0x0942e), (0x29be, 0x09433), (0x29bf, 0x09435), (0x29c0, 0x0943a), (0x29c1, 0x09438), (0x29c2, 0x09432),
    (0x29c3, 0x0942b), (0x29c4, 0x095e2), (0x29c5, 0x09738), (0x29c6, 0x09739), (0x29c7, 0x09732), (0x29c8, 0x097ff),
    (0x29c9, 0x09867), (0x29ca, 0x09865), (0x29cb, 0x09957), (0x29cc, 0x09a45), (0x29cd, 0x09a43), (0x29ce, 0x09a40),
    (0x29cf, 0x09a3e), (0x29d0, 0x09acf), (0x29d1, 0x09b54), (0x29d2, 0x09b51), (0x29d3, 0x09c2d), (0x29d4, 0x09c25),
    (0x29d5, 0x09daf), (0x29d6, 0x09db4), (0x29d7, 0x09dc2), (0x29d8, 0x09db8), (0x29d9, 0x09e9d), (0x29da, 0x09eef),
    (0x29db, 0x09f19), (0x29dc, 0x09f5c), (0x29dd, 0x09f66), (0x29de, 0x09f67), (0x29df, 0x0513c), (0x29e0, 0x0513b),
    (0x29e1, 0x056c8), (0x29e2, 0x056ca), (0x29e3, 0x056c9), (0x29e4, 0x05b7f), (0x29e5, 0x05dd4), (0x29e6, 0x05dd2),
    (0x29e7, 0x05f4e), (0x29e8, 0x061ff), (0x29e9, 0x06524), (0x29ea, 0x06b0a), (0x29eb, 0x06b61), (0x29ec, 0x07051),
    (0x29ed, 0x07058), (0x29ee, 0x07380), (0x29ef, 0x074e4), (0x29f0, 0x0758a), (0x29f1, 0x0766e), (0x29f2, 0x0766c),
    (0x29f3, 0x079b3), (0x29f4, 0x07c60), (0x29f5, 0x07c5f), (0x29f6, 0x0807e), (0x29f7, 0x0807d), (0x29f8, 0x081df),
    (0x29f9, 0x08972), (0x29fa, 0x0896f), (0x29fb, 0x089fc), (0x29fc, 0x08b80), (0x29fd, 0x08d16), (0x29fe, 0x08d17),
    (0x29ff, 0x08e91), (0x2a00, 0x08e93), (0x2a01, 0x08f61), (0x2a02, 0x09148), (0x2a03, 0x09444), (0x2a04, 0x09451),
    (0x2a05, 0x09452), (0x2a06, 0x0973d), (0x2a07, 0x0973e), (0x2a08, 0x097c3), (0x2a09, 0x097c1), (0x2a0a, 0x0986b),
    (0x2a0b, 0x09955), (0x2a0c, 0x09a55), (0x2a0d, 0x09a4d), (0x2a0e, 0x09ad2), (0x2a0f, 0x09b1a), (0x2a10, 0x09c49),
    (0x2a11, 0x09c31), (0x2a12, 0x09c3e), (0x2a13, 0x09c3b), (0x2a14, 0x09dd3), (0x2a15, 0x09dd7), (0x2a16, 0x09f34),
    (0x2a17, 0x09f6c), (0x2a18, 0x09f6a), (0x2a19, 0x09f94), (0x2a1a, 0x056cc), (0x2a1b, 0x05dd6), (0x2a1c, 0x06200),
    (0x2a1d, 0x06523), (0x2a1e, 0x0652b), (0x2a1f, 0x0652a), (0x2a20, 0x066ec), (0x2a21, 0x06b10), (0x2a22, 0x074da),
    (0x2a23, 0x07aca), (0x2a24, 0x07c64), (0x2a25, 0x07c63), (0x2a26, 0x07c65), (0x2a27, 0x07e93), (0x2a28, 0x07e96),
    (0x2a29, 0x07e94), (0x2a2a, 0x081e2), (0x2a2b, 0x08638), (0x2a2c, 0x0863f), (0x2a2d, 0x08831), (0x2a2e, 0x08b8a),
    (0x2a2f, 0x09090), (0x2a30, 0x0908f), (0x2a31, 0x09463), (0x2a32, 0x09460), (0x2a33, 0x09464), (0x2a34, 0x09768),
    (0x2a35, 0x0986f), (0x2a36, 0x0995c), (0x2a37, 0x09a5a), (0x2a38, 0x09a5b), (0x2a39, 0x09a57), (0x2a3a, 0x09ad3),
    (0x2a3b, 0x09ad4), (0x2a3c, 0x09ad1), (0x2a3d, 0x09c54), (0x2a3e, 0x09c57), (0x2a3f, 0x09c56), (0x2a40, 0x09de5),
    (0x2a41, 0x09e9f), (0x2a42, 0x09ef4), (0x2a43, 0x056d1), (0x2a44, 0x058e9), (0x2a45, 0x0652c), (0x2a46, 0x0705e),
    (0x2a47, 0x07671), (0x2a48, 0x07672), (0x2a49, 0x077d7), (0x2a4a, 0x07f50), (0x2a4b, 0x07f88), (0x2a4c, 0x08836),
    (0x2a4d, 0x08839), (0x2a4e, 0x08862), (0x2a4f, 0x08b93), (0x2a50, 0x08b92), (0x2a51, 0x08b96), (0x2a52, 0x08277),
    (0x2a53, 0x08d1b), (0x2a54, 0x091c0), (0x2a55, 0x0946a), (0x2a56, 0x09742), (0x2a57, 0x09748), (0x2a58, 0x09744),
    (0x2a59, 0x097c6), (0x2a5a, 0x09870), (0x2a5b, 0x09a5f), (0x2a5c, 0x09b22), (0x2a5d, 0x09b58), (0x2a5e, 0x09c5f),
    (0x2a5f, 0x09df9), (0x2a60, 0x09dfa), (0x2a61, 0x09e7c), (0x2a62, 0x09e7d), (0x2a63, 0x09f07), (0x2a64, 0x09f77),
    (0x2a65, 0x09f72), (0x2a66, 0x05ef3), (0x2a67, 0x06b16), (0x2a68, 0x07063), (0x2a69, 0x07c6c), (0x2a6a, 0x07c6e),
    (0x2a6b, 0x0883b), (0x2a6c, 0x089c0), (0x2a6d, 0x08ea1), (0x2a6e, 0x091c1), (0x2a6f, 0x09472), (0x2a70, 0x09470),
    (0x2a71, 0x09871), (0x2a72, 0x0995e), (0x2a73, 0x09ad6), (0x2a74, 0x09b23), (0x2a75, 0x09ecc), (0x2a76, 0x07064),
    (0x2a77, 0x077da), (0x2a78, 0x08b9a), (0x2a79, 0x09477), (0x2a7a, 0x097c9), (0x2a7b, 0x09a62), (0x2a7c, 0x09a65),
    (0x2a7d, 0x07e9c), (0x2a7e, 0x08b9c), (0x2a7f, 0x08eaa), (0x2a80, 0x091c5), (0x2a81, 0x0947d), (0x2a82, 0x0947e),
    (0x2a83, 0x0947c), (0x2a84, 0x09c77), (0x2a85, 0x09c78), (0x2a86, 0x09ef7), (0x2a87, 0x08c54), (0x2a88, 0x0947f),
    (0x2a89, 0x09e1a), (0x2a8a, 0x07228), (0x2a8b, 0x09a6a), (0x2a8c, 0x09b31), (0x2a8d, 0x09e1b), (0x2a8e, 0x09e1e),
    (0x2a8f, 0x07c72), (0x2a90, 0x02460), (0x2a91, 0x02461), (0x2a92, 0x02462), (0x2a93, 0x02463), (0x2a94, 0x02464),
    (0x2a95, 0x02465), (0x2a96, 0x02466), (0x2a97, 0x02467), (0x2a98, 0x02468), (0x2a99, 0x02469), (0x2a9a, 0x02474),
    (0x2a9b, 0x02475), (0x2a9c, 0x02476), (0x2a9d, 0x02477), (0x2a9e, 0x02478), (0x2a9f, 0x02479), (0x2aa0, 0x0247a),
    (0x2aa1, 0x0247b), (0x2aa2, 0x0247c), (0x2aa3, 0x0247d), (0x2aa4, 0x02170), (0x2aa5, 0x02171), (0x2aa6, 0x02172),
    (0x2aa7, 0x02173), (0x2aa8, 0x02174), (0x2aa9, 0x02175), (0x2aaa, 0x02176), (0x2aab, 0x02177), (0x2aac, 0x02178),
    (0x2aad, 0x02179), (0x2aae, 0x04e36), (0x2aaf, 0x04e3f), (0x2ab0, 0x04e85), (0x2ab1, 0x04ea0), (0x2ab2, 0x05182),
    (0x2ab3, 0x05196), (0x2ab4, 0x051ab), (0x2ab5, 0x052f9), (0x2ab6, 0x05338), (0x2ab7, 0x05369), (0x2ab8, 0x053b6),
    (0x2ab9, 0x0590a), (0x2aba, 0x05b80), (0x2abb, 0x05ddb), (0x2abc, 0x02f33), (0x2abd, 0x05e7f), (0x2abf, 0x05f50),
    (0x2ac0, 0x05f61), (0x2ac1, 0x06534), (0x2ac3, 0x07592), (0x2ac5, 0x08fb5), (0x2ac7, 0x000a8), (0x2ac8, 0x002c6),
    (0x2ac9, 0x030fd), (0x2aca, 0x030fe), (0x2acb, 0x0309d), (0x2acc, 0x0309e), (0x2acf, 0x03005), (0x2ad0, 0x03006),
    (0x2ad1, 0x03007), (0x2ad2, 0x030fc), (0x2ad3, 0x0ff3b), (0x2ad4, 0x0ff3d), (0x2ad5, 0x0273d), (0x2ad6, 0x03041),
    (0x2ad7, 0x03042), (0x2ad8, 0x03043), (0x2ad9, 0x03044), (0x2ada, 0x03045), (0x2adb, 0x03046), (0x2adc, 0x03047),
    (0x2add, 0x03048), (0x2ade, 0x03049), (0x2adf, 0x0304a), (0x2ae0, 0x0304b), (0x2ae1, 0x0304c), (0x2ae2, 0x0304d),
    (0x2ae3, 0x0304e), (0x2ae4, 0x0304f), (0x2ae5, 0x03050), (0x2ae6, 0x03051), (0x2ae7, 0x03052), (0x2ae8, 0x03053),
    (0x2ae9, 0x03054), (0x2aea, 0x03055), (0x2aeb, 0x03056), (0x2aec, 0x03057), (0x2aed, 0x03058), (0x2aee, 0x03059),
    (0x2aef, 0x0305a), (0x2af0, 0x0305b), (0x2af1, 0x0305c), (0x2af2, 0x0305d), (0x2af3, 0x0305e), (0x2af4, 0x0305f),
    (0x2af5, 0x03060), (0x2af6, 0x03061), (0x2af7, 0x03062), (0x2af8, 0x03063), (0x2af9, 0x03064), (0x2afa, 0x03065),
    (0x2afb, 0x03066), (0x2afc, 0x03067), (0x2afd, 0x03068), (0x2afe, 0x03069), (0x2aff, 0x0306a), (0x2b00, 0x0306b),
    (0x2b01, 0x0306c), (0x2b02, 0x0306d), (0x2b03, 0x0306e), (0x2b04, 0x0306f), (0x2b05, 0x03070), (0x2b06, 0x03071),
    (0x2b07, 0x03072), (0x2b08, 0x03073), (0x2b09, 0x03074), (0x2b0a, 0x03075), (0x2b0b, 0x03076), (0x2b0c, 0x03077),
    (0x2b0d, 0x03078), (0x2b0e, 0x03079), (0x2b0f, 0x0307a), (0x2b10, 0x0307b), (0x2b11, 0x0307c), (0x2b12, 0x0307d),
    (0x2b13, 0x0307e), (0x2b14, 0x0307f), (0x2b15, 0x03080), (0x2b16, 0x03081), (0x2b17, 0x03082), (0x2b18, 0x03083),
    (0x2b19, 0x03084), (0x2b1a, 0x03085), (0x2b1b, 0x03086), (0x2b1c, 0x03087), (0x2b1d, 0x03088), (0x2b1e, 0x03089),
    (0x2b1f, 0x0308a), (0x2b20, 0x0308b), (0x2b21, 0x0308c), (0x2b22, 0x0308d), (0x2b23, 0x0308e), (0x2b24, 0x0308f),
    (0x2b25, 0x03090), (0x2b26, 0x03091), (0x2b27, 0x03092), (0x2b28, 0x03093), (0x2b29, 0x030a1), (0x2b2a, 0x030a2),
    (0x2b2b, 0x030a3), (0x2b2c, 0x030a4), (0x2b2d, 0x030a5), (0x2b2e, 0x030a6), (0x2b2f, 0x030a7), (0x2b30, 0x030a8),
    (0x2b31, 0x030a9), (0x2b32, 0x030aa), (0x2b33, 0x030ab), (0x2b34, 0x030ac), (0x2b35, 0x030ad), (0x2b36, 0x030ae),
    (0x2b37, 0x030af), (0x2b38, 0x030b0), (0x2b39, 0x030b1), (0x2b3a, 0x030b2), (0x2b3b, 0x030b3), (0x2b3c, 0x030b4),
    (0x2b3d, 0x030b5), (0x2b3e, 0x030b6), (0x2b3f, 0x030b7), (0x2b40, 0x030b8), (0x2b41, 0x030b9), (0x2b42, 0x030ba),
    (0x2b43, 0x030bb), (0x2b44, 0x030bc), (0x2b45, 0x030bd), (0x2b46, 0x030be), (0x2b47, 0x030bf), (0x2b48, 0x030c0),
    (0x2b49, 0x030c1), (0x2b4a, 0x030c2), (0x2b4b, 0x030c3), (0x2b4c, 0x030c4), (0x2b4d, 0x030c5), (0x2b4e, 0x030c6),
    (0x2b4f, 0x030c7), (0x2b50, 0x030c8), (0x2b51, 0x030c9), (0x2b52, 0x030ca), (0x2b53, 0x030cb), (0x2b54, 0x030cc),
    (0x2b55, 0x030cd), (0x2b56, 0x030ce), (0x2b57, 0x030cf), (0x2b58, 0x030d0), (0x2b59, 0x030d1), (0x2b5a, 0x030d2),
    (0x2b5b, 0x030d3), (0x2b5c, 0x030d4), (0x2b5d, 0x030d5), (0x2b5e, 0x030d6), (0x2b5f, 0x030d7), (0x2b60, 0x030d8),
    (0x2b61, 0x030d9), (0x2b62, 0x030da), (0x2b63, 0x030db), (0x2b64, 0x030dc), (0x2b65, 0x030dd), (0x2b66, 0x030de),
    (0x2b67, 0x030df), (0x2b68, 0x030e0), (0x2b69, 0x030e1), (0x2b6a, 0x030e2), (0x2b6b, 0x030e3), (0x2b6c, 0x030e4),
    (0x2b6d, 0x030e5), (0x2b6e, 0x030e6), (0x2b6f, 0x030e7), (0x2b70, 0x030e8), (0x2b71, 0x030e9), (0x2b72, 0x030ea),
    (0x2b73, 0x030eb), (0x2b74, 0x030ec), (0x2b75, 0x030ed), (0x2b76, 0x030ee), (0x2b77, 0x030ef), (0x2b78, 0x030f0),
    (0x2b79, 0x030f1), (0x2b7a, 0x030f2), (0x2b7b, 0x030f3), (0x2b7c, 0x030f4), (0x2b7d, 0x030f5), (0x2b7e, 0x030f6),
    (0x2b7f, 0x00410), (0x2b80, 0x00411), (0x2b81, 0x00412), (0x2b82, 0x00413), (0x2b83, 0x00414), (0x2b84, 0x00415),
    (0x2b85, 0x00401), (0x2b86, 0x00416), (0x2b87, 0x00417), (0x2b88, 0x00418), (0x2b89, 0x00419), (0x2b8a, 0x0041a),
    (0x2b8b, 0x0041b), (0x2b8c, 0x0041c), (0x2b8d, 0x0041d), (0x2b8e, 0x0041e), (0x2b8f, 0x0041f), (0x2b90, 0x00420),
    (0x2b91, 0x00421), (0x2b92, 0x00422), (0x2b93, 0x00423), (0x2b94, 0x00424), (0x2b95, 0x00425), (0x2b96, 0x00426),
    (0x2b97, 0x00427), (0x2b98, 0x00428), (0x2b99, 0x00429), (0x2b9a, 0x0042a), (0x2b9b, 0x0042b), (0x2b9c, 0x0042c),
    (0x2b9d, 0x0042d), (0x2b9e, 0x0042e), (0x2b9f, 0x0042f), (0x2ba0, 0x00430), (0x2ba1, 0x00431), (0x2ba2, 0x00432),
    (0x2ba3, 0x00433), (0x2ba4, 0x00434), (0x2ba5, 0x00435), (0x2ba6, 0x00451), (0x2ba7, 0x00436), (0x2ba8, 0x00437),
    (0x2ba9, 0x00438), (0x2baa, 0x00439), (0x2bab, 0x0043a), (0x2bac, 0x0043b), (0x2bad, 0x0043c), (0x2bae, 0x0043d),
    (0x2baf, 0x0043e), (0x2bb0, 0x0043f), (0x2bb1, 0x00440), (0x2bb2, 0x00441), (0x2bb3, 0x00442), (0x2bb4, 0x00443),
    (0x2bb5, 0x00444), (0x2bb6, 0x00445), (0x2bb7, 0x00446), (0x2bb8, 0x00447), (0x2bb9, 0x00448), (0x2bba, 0x00449),
    (0x2bbb, 0x0044a), (0x2bbc, 0x0044b), (0x2bbd, 0x0044c), (0x2bbe, 0x0044d), (0x2bbf, 0x0044e), (0x2bc0, 0x0044f),
    (0x2bc1, 0x021e7), (0x2bc2, 0x021b8), (0x2bc3, 0x021b9), (0x2bc4, 0x031cf), (0x2bc5, 0x200cc), (0x2bc6, 0x04e5a),
    (0x2bc7, 0x2008a), (0x2bc8, 0x05202), (0x2bc9, 0x04491), (0x2bca, 0x09fb0), (0x2bcb, 0x05188), (0x2bcc, 0x09fb1),
    (0x2bcd, 0x27607), (0x2bf6, 0x0ffe2), (0x2bf7, 0x0ffe4), (0x2bf8, 0x0ff07), (0x2bf9, 0x0ff02), (0x2bfa, 0x03231),
    (0x2bfb, 0x02116), (0x2bfc, 0x02121), (0x2bfd, 0x0309b), (0x2bfe, 0x0309c), (0x2bff, 0x02e80), (0x2c00, 0x02e84),
    (0x2c01, 0x02e86), (0x2c02, 0x02e87), (0x2c03, 0x02e88), (0x2c04, 0x02e8a), (0x2c05, 0x02e8c), (0x2c06, 0x02e8d),
    (0x2c07, 0x02e95), (0x2c08, 0x02e9c), (0x2c09, 0x02e9d), (0x2c0a, 0x02ea5), (0x2c0b, 0x02ea7), (0x2c0c, 0x02eaa),
    (0x2c0d, 0x02eac), (0x2c0e, 0x02eae), (0x2c0f, 0x02eb6), (0x2c10, 0x02ebc), (0x2c11, 0x02ebe), (0x2c12, 0x02ec6),
    (0x2c13, 0x02eca), (0x2c14, 0x02ecc), (0x2c15, 0x02ecd), (0x2c16, 0x02ecf), (0x2c17, 0x02ed6), (0x2c18, 0x02ed7),
    (0x2c19, 0x02ede), (0x2c1a, 0x02ee3), (0x2c1e, 0x00283), (0x2c1f, 0x00250), (0x2c20, 0x0025b), (0x2c21, 0x00254),
    (0x2c22, 0x00275), (0x2c23, 0x00153), (0x2c24, 0x000f8), (0x2c25, 0x0014b), (0x2c26, 0x0028a), (0x2c27, 0x0026a),
    (0x2c28, 0x04e42), (0x2c29, 0x04e5c), (0x2c2a, 0x051f5), (0x2c2b, 0x0531a), (0x2c2c, 0x05382), (0x2c2d, 0x04e07),
    (0x2c2e, 0x04e0c), (0x2c2f, 0x04e47), (0x2c30, 0x04e8d), (0x2c31, 0x056d7), (0x2c32, 0x0fa0c), (0x2c33, 0x05c6e),
    (0x2c34, 0x05f73), (0x2c35, 0x04e0f), (0x2c36, 0x05187), (0x2c37, 0x04e0e), (0x2c38, 0x04e2e), (0x2c39, 0x04e93),
    (0x2c3a, 0x04ec2), (0x2c3b, 0x04ec9), (0x2c3c, 0x04ec8), (0x2c3d, 0x05198), (0x2c3e, 0x052fc), (0x2c3f, 0x0536c),
    (0x2c40, 0x053b9), (0x2c41, 0x05720), (0x2c42, 0x05903), (0x2c43, 0x0592c), (0x2c44, 0x05c10), (0x2c45, 0x05dff),
    (0x2c46, 0x065e1), (0x2c47, 0x06bb3), (0x2c48, 0x06bcc), (0x2c49, 0x06c14), (0x2c4a, 0x0723f), (0x2c4b, 0x04e31),
    (0x2c4c, 0x04e3c), (0x2c4d, 0x04ee8), (0x2c4e, 0x04edc), (0x2c4f, 0x04ee9), (0x2c50, 0x04ee1), (0x2c51, 0x04edd),
    (0x2c52, 0x04eda), (0x2c53, 0x0520c), (0x2c54, 0x0531c), (0x2c55, 0x0534c), (0x2c56, 0x05722), (0x2c57, 0x05723),
    (0x2c58, 0x05917), (0x2c59, 0x0592f), (0x2c5a, 0x05b81), (0x2c5b, 0x05b84), (0x2c5c, 0x05c12), (0x2c5d, 0x05c3b),
    (0x2c5e, 0x05c74), (0x2c5f, 0x05c73), (0x2c60, 0x05e04), (0x2c61, 0x05e80), (0x2c62, 0x05e82), (0x2c63, 0x05fc9),
    (0x2c64, 0x06209), (0x2c65, 0x06250), (0x2c66, 0x06c15), (0x2c67, 0x06c36), (0x2c68, 0x06c43), (0x2c69, 0x06c3f),
    (0x2c6a, 0x06c3b), (0x2c6b, 0x072ae), (0x2c6c, 0x072b0), (0x2c6d, 0x0738a), (0x2c6e, 0x079b8), (0x2c6f, 0x0808a),
    (0x2c70, 0x0961e), (0x2c71, 0x04f0e), (0x2c72, 0x04f18), (0x2c73, 0x04f2c), (0x2c74, 0x04ef5), (0x2c75, 0x04f14),
    (0x2c76, 0x04ef1), (0x2c77, 0x04f00), (0x2c78, 0x04ef7), (0x2c79, 0x04f08), (0x2c7a, 0x04f1d), (0x2c7b, 0x04f02),
    (0x2c7c, 0x04f05), (0x2c7d, 0x04f22), (0x2c7e, 0x04f13), (0x2c7f, 0x04f04), (0x2c80, 0x04ef4), (0x2c81, 0x04f12),
    (0x2c82, 0x051b1), (0x2c83, 0x05213), (0x2c84, 0x05209), (0x2c85, 0x05210), (0x2c86, 0x052a6), (0x2c87, 0x05322),
    (0x2c88, 0x0531f), (0x2c89, 0x0534d), (0x2c8a, 0x0538a), (0x2c8b, 0x05407), (0x2c8c, 0x056e1), (0x2c8d, 0x056df),
    (0x2c8e, 0x0572e), (0x2c8f, 0x0572a), (0x2c90, 0x05734), (0x2c91, 0x0593c), (0x2c92, 0x05980), (0x2c93, 0x0597c),
    (0x2c94, 0x05985), (0x2c95, 0x0597b), (0x2c96, 0x0597e), (0x2c97, 0x05977), (0x2c98, 0x0597f), (0x2c99, 0x05b56),
    (0x2c9a, 0x05c15), (0x2c9b, 0x05c25), (0x2c9c, 0x05c7c), (0x2c9d, 0x05c7a), (0x2c9e, 0x05c7b), (0x2c9f, 0x05c7e),
    (0x2ca0, 0x05ddf), (0x2ca1, 0x05e75), (0x2ca2, 0x05e84), (0x2ca3, 0x05f02), (0x2ca4, 0x05f1a), (0x2ca5, 0x05f74),
    (0x2ca6, 0x05fd5), (0x2ca7, 0x05fd4), (0x2ca8, 0x05fcf), (0x2ca9, 0x0625c), (0x2caa, 0x0625e), (0x2cab, 0x06264),
    (0x2cac, 0x06261), (0x2cad, 0x06266), (0x2cae, 0x06262), (0x2caf, 0x06259), (0x2cb0, 0x06260), (0x2cb1, 0x0625a),
    (0x2cb2, 0x06265), (0x2cb3, 0x065ef), (0x2cb4, 0x065ee), (0x2cb5, 0x0673e), (0x2cb6, 0x06739), (0x2cb7, 0x06738),
    (0x2cb8, 0x0673b), (0x2cb9, 0x0673a), (0x2cba, 0x0673f), (0x2cbb, 0x0673c), (0x2cbc, 0x06733), (0x2cbd, 0x06c18),
    (0x2cbe, 0x06c46), (0x2cbf, 0x06c52), (0x2cc0, 0x06c5c), (0x2cc1, 0x06c4f), (0x2cc2, 0x06c4a), (0x2cc3, 0x06c54),
    (0x2cc4, 0x06c4b), (0x2cc5, 0x06c4c), (0x2cc6, 0x07071), (0x2cc7, 0x0725e), (0x2cc8, 0x072b4), (0x2cc9, 0x072b5),
    (0x2cca, 0x0738e), (0x2ccb, 0x0752a), (0x2ccc, 0x0767f), (0x2ccd, 0x07a75), (0x2cce, 0x07f51), (0x2ccf, 0x08278),
    (0x2cd0, 0x0827c), (0x2cd1, 0x08280), (0x2cd2, 0x0827d), (0x2cd3, 0x0827f), (0x2cd4, 0x0864d), (0x2cd5, 0x0897e),
    (0x2cd6, 0x09099), (0x2cd7, 0x09097), (0x2cd8, 0x09098), (0x2cd9, 0x0909b), (0x2cda, 0x09094), (0x2cdb, 0x09622),
    (0x2cdc, 0x09624), (0x2cdd, 0x09620), (0x2cde, 0x09623), (0x2cdf, 0x04f56), (0x2ce0, 0x04f3b), (0x2ce1, 0x04f62),
    (0x2ce2, 0x04f49), (0x2ce3, 0x04f53), (0x2ce4, 0x04f64), (0x2ce5, 0x04f3e), (0x2ce6, 0x04f67), (0x2ce7, 0x04f52),
    (0x2ce8, 0x04f5f), (0x2ce9, 0x04f41), (0x2cea, 0x04f58), (0x2ceb, 0x04f2d), (0x2cec, 0x04f33), (0x2ced, 0x04f3f),
    (0x2cee, 0x04f61), (0x2cef, 0x0518f), (0x2cf0, 0x051b9), (0x2cf1, 0x0521c), (0x2cf2, 0x0521e), (0x2cf3, 0x05221),
    (0x2cf4, 0x052ad), (0x2cf5, 0x052ae), (0x2cf6, 0x05309), (0x2cf7, 0x05363), (0x2cf8, 0x05372), (0x2cf9, 0x0538e),
    (0x2cfa, 0x0538f), (0x2cfb, 0x05430), (0x2cfc, 0x05437), (0x2cfd, 0x0542a), (0x2cfe, 0x05454), (0x2cff, 0x05445),
    (0x2d00, 0x05419), (0x2d01, 0x0541c), (0x2d02, 0x05425), (0x2d03, 0x05418), (0x2d04, 0x0543d), (0x2d05, 0x0544f),
    (0x2d06, 0x05441), (0x2d07, 0x05428), (0x2d08, 0x05424), (0x2d09, 0x05447), (0x2d0a, 0x056ee), (0x2d0b, 0x056e7),
    (0x2d0c, 0x056e5), (0x2d0d, 0x05741), (0x2d0e, 0x05745), (0x2d0f, 0x0574c), (0x2d10, 0x05749), (0x2d11, 0x0574b),
    (0x2d12, 0x05752), (0x2d13, 0x05906), (0x2d14, 0x05940), (0x2d15, 0x059a6), (0x2d16, 0x05998), (0x2d17, 0x059a0),
    (0x2d18, 0x05997), (0x2d19, 0x0598e), (0x2d1a, 0x059a2), (0x2d1b, 0x05990), (0x2d1c, 0x0598f), (0x2d1d, 0x059a7),
    (0x2d1e, 0x059a1), (0x2d1f, 0x05b8e), (0x2d20, 0x05b92), (0x2d21, 0x05c28), (0x2d22, 0x05c2a), (0x2d23, 0x05c8d),
    (0x2d24, 0x05c8f), (0x2d25, 0x05c88), (0x2d26, 0x05c8b), (0x2d27, 0x05c89), (0x2d28, 0x05c92), (0x2d29, 0x05c8a),
    (0x2d2a, 0x05c86), (0x2d2b, 0x05c93), (0x2d2c, 0x05c95), (0x2d2d, 0x05de0), (0x2d2e, 0x05e0a), (0x2d2f, 0x05e0e),
    (0x2d30, 0x05e8b), (0x2d31, 0x05e89), (0x2d32, 0x05e8c), (0x2d33, 0x05e88), (0x2d34, 0x05e8d), (0x2d35, 0x05f05),
    (0x2d36, 0x05f1d), (0x2d37, 0x05f78), (0x2d38, 0x05f76), (0x2d39, 0x05fd2), (0x2d3a, 0x05fd1), (0x2d3b, 0x05fd0),
    (0x2d3c, 0x05fed), (0x2d3d, 0x05fe8), (0x2d3e, 0x05fee), (0x2d3f, 0x05ff3), (0x2d40, 0x05fe1), (0x2d41, 0x05fe4),
    (0x2d42, 0x05fe3), (0x2d43, 0x05ffa), (0x2d44, 0x05fef), (0x2d45, 0x05ff7), (0x2d46, 0x05ffb), (0x2d47, 0x06000),
    (0x2d48, 0x05ff4), (0x2d49, 0x0623a), (0x2d4a, 0x06283), (0x2d4b, 0x0628c), (0x2d4c, 0x0628e), (0x2d4d, 0x0628f),
    (0x2d4e, 0x06294), (0x2d4f, 0x06287), (0x2d50, 0x06271), (0x2d51, 0x0627b), (0x2d52, 0x0627a), (0x2d53, 0x06270),
    (0x2d54, 0x06281), (0x2d55, 0x06288), (0x2d56, 0x06277), (0x2d57, 0x0627d), (0x2d58, 0x06272), (0x2d59, 0x06274),
    (0x2d5a, 0x06537), (0x2d5b, 0x065f0), (0x2d5c, 0x065f4), (0x2d5d, 0x065f3), (0x2d5e, 0x065f2), (0x2d5f, 0x065f5),
    (0x2d60, 0x06745), (0x2d61, 0x06747), (0x2d62, 0x06759), (0x2d63, 0x06755), (0x2d64, 0x0674c), (0x2d65, 0x06748),
    (0x2d66, 0x0675d), (0x2d67, 0x0674d), (0x2d68, 0x0675a), (0x2d69, 0x0674b), (0x2d6a, 0x06bd0), (0x2d6b, 0x06c19),
    (0x2d6c, 0x06c1a), (0x2d6d, 0x06c78), (0x2d6e, 0x06c67), (0x2d6f, 0x06c6b), (0x2d70, 0x06c84), (0x2d71, 0x06c8b),
    (0x2d72, 0x06c8f), (0x2d73, 0x06c71), (0x2d74, 0x06c6f), (0x2d75, 0x06c69), (0x2d76, 0x06c9a), (0x2d77, 0x06c6d),
    (0x2d78, 0x06c87), (0x2d79, 0x06c95), (0x2d7a, 0x06c9c), (0x2d7b, 0x06c66), (0x2d7c, 0x06c73), (0x2d7d, 0x06c65),
    (0x2d7e, 0x06c7b), (0x2d7f, 0x06c8e), (0x2d80, 0x07074), (0x2d81, 0x0707a), (0x2d82, 0x07263), (0x2d83, 0x072bf),
    (0x2d84, 0x072bd), (0x2d85, 0x072c3), (0x2d86, 0x072c6), (0x2d87, 0x072c1), (0x2d88, 0x072ba), (0x2d89, 0x072c5),
    (0x2d8a, 0x07395), (0x2d8b, 0x07397), (0x2d8c, 0x07393), (0x2d8d, 0x07394), (0x2d8e, 0x07392), (0x2d8f, 0x0753a),
    (0x2d90, 0x07539), (0x2d91, 0x07594), (0x2d92, 0x07595), (0x2d93, 0x07681), (0x2d94, 0x0793d), (0x2d95, 0x08034),
    (0x2d96, 0x08095), (0x2d97, 0x08099), (0x2d98, 0x08090), (0x2d99, 0x08092), (0x2d9a, 0x0809c), (0x2d9b, 0x08290),
    (0x2d9c, 0x0828f), (0x2d9d, 0x08285), (0x2d9e, 0x0828e), (0x2d9f, 0x08291), (0x2da0, 0x08293), (0x2da1, 0x0828a),
    (0x2da2, 0x08283), (0x2da3, 0x08284), (0x2da4, 0x08c78), (0x2da5, 0x08fc9), (0x2da6, 0x08fbf), (0x2da7, 0x0909f),
    (0x2da8, 0x090a1), (0x2da9, 0x090a5), (0x2daa, 0x0909e), (0x2dab, 0x090a7), (0x2dac, 0x090a0), (0x2dad, 0x09630),
    (0x2dae, 0x09628), (0x2daf, 0x0962f), (0x2db0, 0x0962d), (0x2db1, 0x04e33), (0x2db2, 0x04f98), (0x2db3, 0x04f7c),
    (0x2db4, 0x04f85), (0x2db5, 0x04f7d), (0x2db6, 0x04f80), (0x2db7, 0x04f87), (0x2db8, 0x04f76), (0x2db9, 0x04f74),
    (0x2dba, 0x04f89), (0x2dbb, 0x04f84), (0x2dbc, 0x04f77), (0x2dbd, 0x04f4c), (0x2dbe, 0x04f97), (0x2dbf, 0x04f6a),
    (0x2dc0, 0x04f9a), (0x2dc1, 0x04f79), (0x2dc2, 0x04f81), (0x2dc3, 0x04f78), (0x2dc4, 0x04f90), (0x2dc5, 0x04f9c),
    (0x2dc6, 0x04f94), (0x2dc7, 0x04f9e), (0x2dc8, 0x04f92), (0x2dc9, 0x04f82), (0x2dca, 0x04f95), (0x2dcb, 0x04f6b),
    (0x2dcc, 0x04f6e), (0x2dcd, 0x0519e), (0x2dce, 0x051bc), (0x2dcf, 0x051be), (0x2dd0, 0x05235), (0x2dd1, 0x05232),
    (0x2dd2, 0x05233), (0x2dd3, 0x05246), (0x2dd4, 0x05231), (0x2dd5, 0x052bc), (0x2dd6, 0x0530a), (0x2dd7, 0x0530b),
    (0x2dd8, 0x0533c), (0x2dd9, 0x05392), (0x2dda, 0x05394), (0x2ddb, 0x05487), (0x2ddc, 0x0547f), (0x2ddd, 0x05481),
    (0x2dde, 0x05491), (0x2ddf, 0x05482), (0x2de0, 0x05488), (0x2de1, 0x0546b), (0x2de2, 0x0547a), (0x2de3, 0x0547e),
    (0x2de4, 0x05465), (0x2de5, 0x0546c), (0x2de6, 0x05474), (0x2de7, 0x05466), (0x2de8, 0x0548d), (0x2de9, 0x0546f),
    (0x2dea, 0x05461), (0x2deb, 0x05460), (0x2dec, 0x05498), (0x2ded, 0x05463), (0x2dee, 0x05467), (0x2def, 0x05464),
    (0x2df0, 0x056f7), (0x2df1, 0x056f9), (0x2df2, 0x0576f), (0x2df3, 0x05772), (0x2df4, 0x0576d), (0x2df5, 0x0576b),
    (0x2df6, 0x05771), (0x2df7, 0x05770), (0x2df8, 0x05776), (0x2df9, 0x05780), (0x2dfa, 0x05775), (0x2dfb, 0x0577b),
    (0x2dfc, 0x05773), (0x2dfd, 0x05774), (0x2dfe, 0x05762), (0x2dff, 0x05768), (0x2e00, 0x0577d), (0x2e01, 0x0590c),
    (0x2e02, 0x05945), (0x2e03, 0x059b5), (0x2e04, 0x059ba), (0x2e05, 0x059cf), (0x2e06, 0x059ce), (0x2e07, 0x059b2),
    (0x2e08, 0x059cc), (0x2e09, 0x059c1), (0x2e0a, 0x059b6), (0x2e0b, 0x059bc), (0x2e0c, 0x059c3), (0x2e0d, 0x059d6),
    (0x2e0e, 0x059b1), (0x2e0f, 0x059bd), (0x2e10, 0x059c0), (0x2e11, 0x059c8), (0x2e12, 0x059b4), (0x2e13, 0x059c7),
    (0x2e14, 0x05b62), (0x2e15, 0x05b65), (0x2e16, 0x05b93), (0x2e17, 0x05b95), (0x2e18, 0x05c44), (0x2e19, 0x05c47),
    (0x2e1a, 0x05cae), (0x2e1b, 0x05ca4), (0x2e1c, 0x05ca0), (0x2e1d, 0x05cb5), (0x2e1e, 0x05caf), (0x2e1f, 0x05ca8),
    (0x2e20, 0x05cac), (0x2e21, 0x05c9f), (0x2e22, 0x05ca3), (0x2e23, 0x05cad), (0x2e24, 0x05ca2), (0x2e25, 0x05caa),
    (0x2e26, 0x05ca7), (0x2e27, 0x05c9d), (0x2e28, 0x05ca5), (0x2e29, 0x05cb6), (0x2e2a, 0x05cb0), (0x2e2b, 0x05ca6),
    (0x2e2c, 0x05e17), (0x2e2d, 0x05e14), (0x2e2e, 0x05e19), (0x2e2f, 0x05f28), (0x2e30, 0x05f22), (0x2e31, 0x05f23),
    (0x2e32, 0x05f24), (0x2e33, 0x05f54), (0x2e34, 0x05f82), (0x2e35, 0x05f7e), (0x2e36, 0x05f7d), (0x2e37, 0x05fde),
    (0x2e38, 0x05fe5), (0x2e39, 0x0602d), (0x2e3a, 0x06026), (0x2e3b, 0x06019), (0x2e3c, 0x06032), (0x2e3d, 0x0600b),
    (0x2e3e, 0x06034), (0x2e3f, 0x0600a), (0x2e40, 0x06017), (0x2e41, 0x06033), (0x2e42, 0x0601a), (0x2e43, 0x0601e),
    (0x2e44, 0x0602c), (0x2e45, 0x06022), (0x2e46, 0x0600d), (0x2e47, 0x06010), (0x2e48, 0x0602e), (0x2e49, 0x06013),
    (0x2e4a, 0x06011), (0x2e4b, 0x0600c), (0x2e4c, 0x06009), (0x2e4d, 0x0601c), (0x2e4e, 0x06214), (0x2e4f, 0x0623d),
    (0x2e50, 0x062ad), (0x2e51, 0x062b4), (0x2e52, 0x062d1), (0x2e53, 0x062be), (0x2e54, 0x062aa), (0x2e55, 0x062b6),
    (0x2e56, 0x062ca), (0x2e57, 0x062ae), (0x2e58, 0x062b3), (0x2e59, 0x062af), (0x2e5a, 0x062bb), (0x2e5b, 0x062a9),
    (0x2e5c, 0x062b0), (0x2e5d, 0x062b8), (0x2e5e, 0x0653d), (0x2e5f, 0x065a8), (0x2e60, 0x065bb), (0x2e61, 0x06609),
    (0x2e62, 0x065fc), (0x2e63, 0x06604), (0x2e64, 0x06612), (0x2e65, 0x06608), (0x2e66, 0x065fb), (0x2e67, 0x06603),
    (0x2e68, 0x0660b), (0x2e69, 0x0660d), (0x2e6a, 0x06605), (0x2e6b, 0x065fd), (0x2e6c, 0x06611), (0x2e6d, 0x06610),
    (0x2e6e, 0x066f6), (0x2e6f, 0x0670a), (0x2e70, 0x06785), (0x2e71, 0x0676c), (0x2e72, 0x0678e), (0x2e73, 0x06792),
    (0x2e74, 0x06776), (0x2e75, 0x0677b), (0x2e76, 0x06798), (0x2e77, 0x06786), (0x2e78, 0x06784), (0x2e79, 0x06774),
    (0x2e7a, 0x0678d), (0x2e7b, 0x0678c), (0x2e7c, 0x0677a), (0x2e7d, 0x0679f), (0x2e7e, 0x06791), (0x2e7f, 0x06799),
    (0x2e80, 0x06783), (0x2e81, 0x0677d), (0x2e82, 0x06781), (0x2e83, 0x06778), (0x2e84, 0x06779), (0x2e85, 0x06794),
    (0x2e86, 0x06b25), (0x2e87, 0x06b80), (0x2e88, 0x06b7e), (0x2e89, 0x06bde), (0x2e8a, 0x06c1d), (0x2e8b, 0x06c93),
    (0x2e8c, 0x06cec), (0x2e8d, 0x06ceb), (0x2e8e, 0x06cee), (0x2e8f, 0x06cd9), (0x2e90, 0x06cb6), (0x2e91, 0x06cd4),
    (0x2e92, 0x06cad), (0x2e93, 0x06ce7), (0x2e94, 0x06cb7), (0x2e95, 0x06cd0), (0x2e96, 0x06cc2), (0x2e97, 0x06cba),
    (0x2e98, 0x06cc3), (0x2e99, 0x06cc6), (0x2e9a, 0x06ced), (0x2e9b, 0x06cf2), (0x2e9c, 0x06cd2), (0x2e9d, 0x06cdd),
    (0x2e9e, 0x06cb4), (0x2e9f, 0x06c8a), (0x2ea0, 0x06c9d), (0x2ea1, 0x06c80), (0x2ea2, 0x06cde), (0x2ea3, 0x06cc0),
    (0x2ea4, 0x06d30), (0x2ea5, 0x06ccd), (0x2ea6, 0x06cc7), (0x2ea7, 0x06cb0), (0x2ea8, 0x06cf9), (0x2ea9, 0x06ccf),
    (0x2eaa, 0x06ce9), (0x2eab, 0x06cd1), (0x2eac, 0x07094), (0x2ead, 0x07098), (0x2eae, 0x07085), (0x2eaf, 0x07093),
    (0x2eb0, 0x07086), (0x2eb1, 0x07084), (0x2eb2, 0x07091), (0x2eb3, 0x07096), (0x2eb4, 0x07082), (0x2eb5, 0x0709a),
    (0x2eb6, 0x07083), (0x2eb7, 0x0726a), (0x2eb8, 0x072d6), (0x2eb9, 0x072cb), (0x2eba, 0x072d8), (0x2ebb, 0x072c9),
    (0x2ebc, 0x072dc), (0x2ebd, 0x072d2), (0x2ebe, 0x072d4), (0x2ebf, 0x072da), (0x2ec0, 0x072cc), (0x2ec1, 0x072d1),
    (0x2ec2, 0x073a4), (0x2ec3, 0x073a1), (0x2ec4, 0x073ad), (0x2ec5, 0x073a6), (0x2ec6, 0x073a2), (0x2ec7, 0x073a0),
    (0x2ec8, 0x073ac), (0x2ec9, 0x0739d), (0x2eca, 0x074dd), (0x2ecb, 0x074e8), (0x2ecc, 0x0753f), (0x2ecd, 0x07540),
    (0x2ece, 0x0753e), (0x2ecf, 0x0758c), (0x2ed0, 0x07598), (0x2ed1, 0x076af), (0x2ed2, 0x076f3), (0x2ed3, 0x076f1),
    (0x2ed4, 0x076f0), (0x2ed5, 0x076f5), (0x2ed6, 0x077f8), (0x2ed7, 0x077fc), (0x2ed8, 0x077f9), (0x2ed9, 0x077fb),
    (0x2eda, 0x077fa), (0x2edb, 0x077f7), (0x2edc, 0x07942), (0x2edd, 0x0793f), (0x2ede, 0x079c5), (0x2edf, 0x07a78),
    (0x2ee0, 0x07a7b), (0x2ee1, 0x07afb), (0x2ee2, 0x07c75), (0x2ee3, 0x07cfd), (0x2ee4, 0x08035), (0x2ee5, 0x0808f),
    (0x2ee6, 0x080ae), (0x2ee7, 0x080a3), (0x2ee8, 0x080b8), (0x2ee9, 0x080b5), (0x2eea, 0x080ad), (0x2eeb, 0x08220),
    (0x2eec, 0x082a0), (0x2eed, 0x082c0), (0x2eee, 0x082ab), (0x2eef, 0x0829a), (0x2ef0, 0x08298), (0x2ef1, 0x0829b),
    (0x2ef2, 0x082b5), (0x2ef3, 0x082a7), (0x2ef4, 0x082ae), (0x2ef5, 0x082bc), (0x2ef6, 0x0829e), (0x2ef7, 0x082ba),
    (0x2ef8, 0x082b4), (0x2ef9, 0x082a8), (0x2efa, 0x082a1), (0x2efb, 0x082a9), (0x2efc, 0x082c2), (0x2efd, 0x082a4),
    (0x2efe, 0x082c3), (0x2eff, 0x082b6), (0x2f00, 0x082a2), (0x2f01, 0x08670), (0x2f02, 0x0866f), (0x2f03, 0x0866d),
    (0x2f04, 0x0866e), (0x2f05, 0x08c56), (0x2f06, 0x08fd2), (0x2f07, 0x08fcb), (0x2f08, 0x08fd3), (0x2f09, 0x08fcd),
    (0x2f0a, 0x08fd6), (0x2f0b, 0x08fd5), (0x2f0c, 0x08fd7), (0x2f0d, 0x090b2), (0x2f0e, 0x090b4), (0x2f0f, 0x090af),
    (0x2f10, 0x090b3), (0x2f11, 0x090b0), (0x2f12, 0x09639), (0x2f13, 0x0963d), (0x2f14, 0x0963c), (0x2f15, 0x0963a),
    (0x2f16, 0x09643), (0x2f17, 0x04fcd), (0x2f18, 0x04fc5), (0x2f19, 0x04fd3), (0x2f1a, 0x04fb2), (0x2f1b, 0x04fc9),
    (0x2f1c, 0x04fcb), (0x2f1d, 0x04fc1), (0x2f1e, 0x04fd4), (0x2f1f, 0x04fdc), (0x2f20, 0x04fd9), (0x2f21, 0x04fbb),
    (0x2f22, 0x04fb3), (0x2f23, 0x04fdb), (0x2f24, 0x04fc7), (0x2f25, 0x04fd6), (0x2f26, 0x04fba), (0x2f27, 0x04fc0),
    (0x2f28, 0x04fb9), (0x2f29, 0x04fec), (0x2f2a, 0x05244), (0x2f2b, 0x05249), (0x2f2c, 0x052c0), (0x2f2d, 0x052c2),
    (0x2f2e, 0x0533d), (0x2f2f, 0x0537c), (0x2f30, 0x05397), (0x2f31, 0x05396), (0x2f32, 0x05399), (0x2f33, 0x05398),
    (0x2f34, 0x054ba), (0x2f35, 0x054a1), (0x2f36, 0x054ad), (0x2f37, 0x054a5), (0x2f38, 0x054cf), (0x2f39, 0x054c3),
    (0x2f3a, 0x0830d), (0x2f3b, 0x054b7), (0x2f3c, 0x054ae), (0x2f3d, 0x054d6), (0x2f3e, 0x054b6), (0x2f3f, 0x054c5),
    (0x2f40, 0x054c6), (0x2f41, 0x054a0), (0x2f42, 0x05470), (0x2f43, 0x054bc), (0x2f44, 0x054a2), (0x2f45, 0x054be),
    (0x2f46, 0x05472), (0x2f47, 0x054de), (0x2f48, 0x054b0), (0x2f49, 0x057b5), (0x2f4a, 0x0579e), (0x2f4b, 0x0579f),
    (0x2f4c, 0x057a4), (0x2f4d, 0x0578c), (0x2f4e, 0x05797), (0x2f4f, 0x0579d), (0x2f50, 0x0579b), (0x2f51, 0x05794),
    (0x2f52, 0x05798), (0x2f53, 0x0578f), (0x2f54, 0x05799), (0x2f55, 0x057a5), (0x2f56, 0x0579a), (0x2f57, 0x05795),
    (0x2f58, 0x058f4), (0x2f59, 0x0590d), (0x2f5a, 0x05953), (0x2f5b, 0x059e1), (0x2f5c, 0x059de), (0x2f5d, 0x059ee),
    (0x2f5e, 0x05a00), (0x2f5f, 0x059f1), (0x2f60, 0x059dd), (0x2f61, 0x059fa), (0x2f62, 0x059fd), (0x2f63, 0x059fc),
    (0x2f64, 0x059f6), (0x2f65, 0x059e4), (0x2f66, 0x059f2), (0x2f67, 0x059f7), (0x2f68, 0x059db), (0x2f69, 0x059e9),
    (0x2f6a, 0x059f3), (0x2f6b, 0x059f5), (0x2f6c, 0x059e0), (0x2f6d, 0x059fe), (0x2f6e, 0x059f4), (0x2f6f, 0x059ed),
    (0x2f70, 0x05ba8), (0x2f71, 0x05c4c), (0x2f72, 0x05cd0), (0x2f73, 0x05cd8), (0x2f74, 0x05ccc), (0x2f75, 0x05cd7),
    (0x2f76, 0x05ccb), (0x2f77, 0x05cdb), (0x2f78, 0x05cde), (0x2f79, 0x05cda), (0x2f7a, 0x05cc9), (0x2f7b, 0x05cc7),
    (0x2f7c, 0x05cca), (0x2f7d, 0x05cd6), (0x2f7e, 0x05cd3), (0x2f7f, 0x05cd4), (0x2f80, 0x05ccf), (0x2f81, 0x05cc8),
    (0x2f82, 0x05cc6), (0x2f83, 0x05cce), (0x2f84, 0x05cdf), (0x2f85, 0x05cf8), (0x2f86, 0x05df9), (0x2f87, 0x05e21),
    (0x2f88, 0x05e22), (0x2f89, 0x05e23), (0x2f8a, 0x05e20), (0x2f8b, 0x05e24), (0x2f8c, 0x05eb0), (0x2f8d, 0x05ea4),
    (0x2f8e, 0x05ea2), (0x2f8f, 0x05e9b), (0x2f90, 0x05ea3), (0x2f91, 0x05ea5), (0x2f92, 0x05f07), (0x2f93, 0x05f2e),
    (0x2f94, 0x05f56), (0x2f95, 0x05f86), (0x2f96, 0x06037), (0x2f97, 0x06039), (0x2f98, 0x06054), (0x2f99, 0x06072),
    (0x2f9a, 0x0605e), (0x2f9b, 0x06045), (0x2f9c, 0x06053), (0x2f9d, 0x06047), (0x2f9e, 0x06049), (0x2f9f, 0x0605b),
    (0x2fa0, 0x0604c), (0x2fa1, 0x06040), (0x2fa2, 0x06042), (0x2fa3, 0x0605f), (0x2fa4, 0x06024), (0x2fa5, 0x06044),
    (0x2fa6, 0x06058), (0x2fa7, 0x06066), (0x2fa8, 0x0606e), (0x2fa9, 0x06242), (0x2faa, 0x06243), (0x2fab, 0x062cf),
    (0x2fac, 0x0630d), (0x2fad, 0x0630b), (0x2fae, 0x062f5), (0x2faf, 0x0630e), (0x2fb0, 0x06303), (0x2fb1, 0x062eb),
    (0x2fb2, 0x062f9), (0x2fb3, 0x0630f), (0x2fb4, 0x0630c), (0x2fb5, 0x062f8), (0x2fb6, 0x062f6), (0x2fb7, 0x06300),
    (0x2fb8, 0x06313), (0x2fb9, 0x06314), (0x2fba, 0x062fa), (0x2fbb, 0x06315), (0x2fbc, 0x062fb), (0x2fbd, 0x062f0),
    (0x2fbe, 0x06541), (0x2fbf, 0x06543), (0x2fc0, 0x065aa), (0x2fc1, 0x065bf), (0x2fc2, 0x06636), (0x2fc3, 0x06621),
    (0x2fc4, 0x06632), (0x2fc5, 0x06635), (0x2fc6, 0x0661c), (0x2fc7, 0x06626), (0x2fc8, 0x06622), (0x2fc9, 0x06633),
    (0x2fca, 0x0662b), (0x2fcb, 0x0663a), (0x2fcc, 0x0661d), (0x2fcd, 0x06634), (0x2fce, 0x06639), (0x2fcf, 0x0662e),
    (0x2fd0, 0x0670f), (0x2fd1, 0x06710), (0x2fd2, 0x067c1), (0x2fd3, 0x067f2), (0x2fd4, 0x067c8), (0x2fd5, 0x067ba),
    (0x2fd6, 0x067dc), (0x2fd7, 0x067bb), (0x2fd8, 0x067f8), (0x2fd9, 0x067d8), (0x2fda, 0x067c0), (0x2fdb, 0x067b7),
    (0x2fdc, 0x067c5), (0x2fdd, 0x067eb), (0x2fde, 0x067e4), (0x2fdf, 0x067df), (0x2fe0, 0x067b5), (0x2fe1, 0x067cd),
    (0x2fe2, 0x067b3), (0x2fe3, 0x067f7), (0x2fe4, 0x067f6), (0x2fe5, 0x067ee), (0x2fe6, 0x067e3), (0x2fe7, 0x067c2),
    (0x2fe8, 0x067b9), (0x2fe9, 0x067ce), (0x2fea, 0x067e7), (0x2feb, 0x067f0), (0x2fec, 0x067b2), (0x2fed, 0x067fc),
    (0x2fee, 0x067c6), (0x2fef, 0x067ed), (0x2ff0, 0x067cc), (0x2ff1, 0x067ae), (0x2ff2, 0x067e6), (0x2ff3, 0x067db),
    (0x2ff4, 0x067fa), (0x2ff5, 0x067c9), (0x2ff6, 0x067ca), (0x2ff7, 0x067c3), (0x2ff8, 0x067ea), (0x2ff9, 0x067cb),
    (0x2ffa, 0x06b28), (0x2ffb, 0x06b82), (0x2ffc, 0x06b84), (0x2ffd, 0x06bb6), (0x2ffe, 0x06bd6), (0x2fff, 0x06bd8),
    (0x3000, 0x06be0), (0x3001, 0x06c20), (0x3002, 0x06c21), (0x3003, 0x06d28), (0x3004, 0x06d34), (0x3005, 0x06d2d),
    (0x3006, 0x06d1f), (0x3007, 0x06d3c), (0x3008, 0x06d3f), (0x3009, 0x06d12), (0x300a, 0x06d0a), (0x300b, 0x06cda),
    (0x300c, 0x06d33), (0x300d, 0x06d04), (0x300e, 0x06d19), (0x300f, 0x06d3a), (0x3010, 0x06d1a), (0x3011, 0x06d11),
    (0x3012, 0x06d00), (0x3013, 0x06d1d), (0x3014, 0x06d42), (0x3015, 0x06d01), (0x3016, 0x06d18), (0x3017, 0x06d37),
    (0x3018, 0x06d03), (0x3019, 0x06d0f), (0x301a, 0x06d40), (0x301b, 0x06d07), (0x301c, 0x06d20), (0x301d, 0x06d2c),
    (0x301e, 0x06d08), (0x301f, 0x06d22), (0x3020, 0x06d09), (0x3021, 0x06d10), (0x3022, 0x070b7), (0x3023, 0x0709f),
    (0x3024, 0x070be), (0x3025, 0x070b1), (0x3026, 0x070b0), (0x3027, 0x070a1), (0x3028, 0x070b4), (0x3029, 0x070b5),
    (0x302a, 0x070a9), (0x302b, 0x07241), (0x302c, 0x07249), (0x302d, 0x0724a), (0x302e, 0x0726c), (0x302f, 0x07270),
    (0x3030, 0x07273), (0x3031, 0x0726e), (0x3032, 0x072ca), (0x3033, 0x072e4), (0x3034, 0x072e8), (0x3035, 0x072eb),
    (0x3036, 0x072df), (0x3037, 0x072ea), (0x3038, 0x072e6), (0x3039, 0x072e3), (0x303a, 0x07385), (0x303b, 0x073cc),
    (0x303c, 0x073c2), (0x303d, 0x073c8), (0x303e, 0x073c5), (0x303f, 0x073b9), (0x3040, 0x073b6), (0x3041, 0x073b5),
    (0x3042, 0x073b4), (0x3043, 0x073eb), (0x3044, 0x073bf), (0x3045, 0x073c7), (0x3046, 0x073be), (0x3047, 0x073c3),
    (0x3048, 0x073c6), (0x3049, 0x073b8), (0x304a, 0x073cb), (0x304b, 0x074ec), (0x304c, 0x074ee), (0x304d, 0x0752e),
    (0x304e, 0x07547), (0x304f, 0x07548), (0x3050, 0x075a7), (0x3051, 0x075aa), (0x3052, 0x07679), (0x3053, 0x076c4),
    (0x3054, 0x07708), (0x3055, 0x07703), (0x3056, 0x07704), (0x3057, 0x07705), (0x3058, 0x0770a), (0x3059, 0x076f7),
    (0x305a, 0x076fb), (0x305b, 0x076fa), (0x305c, 0x077e7), (0x305d, 0x077e8), (0x305e, 0x07806), (0x305f, 0x07811),
    (0x3060, 0x07812), (0x3061, 0x07805), (0x3062, 0x07810), (0x3063, 0x0780f), (0x3064, 0x0780e), (0x3065, 0x07809),
    (0x3066, 0x07803), (0x3067, 0x07813), (0x3068, 0x0794a), (0x3069, 0x0794c), (0x306a, 0x0794b), (0x306b, 0x07945),
    (0x306c, 0x07944), (0x306d, 0x079d5), (0x306e, 0x079cd), (0x306f, 0x079cf), (0x3070, 0x079d6), (0x3071, 0x079ce),
    (0x3072, 0x07a80), (0x3073, 0x07a7e), (0x3074, 0x07ad1), (0x3075, 0x07b00), (0x3076, 0x07b01), (0x3077, 0x07c7a),
    (0x3078, 0x07c78), (0x3079, 0x07c79), (0x307a, 0x07c7f), (0x307b, 0x07c80), (0x307c, 0x07c81), (0x307d, 0x07d03),
    (0x307e, 0x07d08), (0x307f, 0x07d01), (0x3080, 0x07f58), (0x3081, 0x07f91), (0x3082, 0x07f8d), (0x3083, 0x07fbe),
    (0x3084, 0x08007), (0x3085, 0x0800e), (0x3086, 0x0800f), (0x3087, 0x08014), (0x3088, 0x08037), (0x3089, 0x080d8),
    (0x308a, 0x080c7), (0x308b, 0x080e0), (0x308c, 0x080d1), (0x308d, 0x080c8), (0x308e, 0x080c2), (0x308f, 0x080d0),
    (0x3090, 0x080c5), (0x3091, 0x080e3), (0x3092, 0x080d9), (0x3093, 0x080dc), (0x3094, 0x080ca), (0x3095, 0x080d5),
    (0x3096, 0x080c9), (0x3097, 0x080cf), (0x3098, 0x080d7), (0x3099, 0x080e6), (0x309a, 0x080cd), (0x309b, 0x081ff),
    (0x309c, 0x08221), (0x309d, 0x08294), (0x309e, 0x082d9), (0x309f, 0x082fe), (0x30a0, 0x082f9), (0x30a1, 0x08307),
    (0x30a2, 0x082e8), (0x30a3, 0x08300), (0x30a4, 0x082d5), (0x30a5, 0x0833a), (0x30a6, 0x082eb), (0x30a7, 0x082d6),
    (0x30a8, 0x082f4), (0x30a9, 0x082ec), (0x30aa, 0x082e1), (0x30ab, 0x082f2), (0x30ac, 0x082f5), (0x30ad, 0x0830c),
    (0x30ae, 0x082fb), (0x30af, 0x082f6), (0x30b0, 0x082f0), (0x30b1, 0x082ea), (0x30b2, 0x082e4), (0x30b3, 0x082e0),
    (0x30b4, 0x082fa), (0x30b5, 0x082f3), (0x30b6, 0x082ed), (0x30b7, 0x08677), (0x30b8, 0x08674), (0x30b9, 0x0867c),
    (0x30ba, 0x08673), (0x30bb, 0x08841), (0x30bc, 0x0884e), (0x30bd, 0x08867), (0x30be, 0x0886a), (0x30bf, 0x08869),
    (0x30c0, 0x089d3), (0x30c1, 0x08a04), (0x30c2, 0x08a07), (0x30c3, 0x08d72), (0x30c4, 0x08fe3), (0x30c5, 0x08fe1),
    (0x30c6, 0x08fee), (0x30c7, 0x08fe0), (0x30c8, 0x090f1), (0x30c9, 0x090bd), (0x30ca, 0x090bf), (0x30cb, 0x090d5),
    (0x30cc, 0x090c5), (0x30cd, 0x090be), (0x30ce, 0x090c7), (0x30cf, 0x090cb), (0x30d0, 0x090c8), (0x30d1, 0x091d4),
    (0x30d2, 0x091d3), (0x30d3, 0x09654), (0x30d4, 0x0964f), (0x30d5, 0x09651), (0x30d6, 0x09653), (0x30d7, 0x0964a),
    (0x30d8, 0x0964e), (0x30d9, 0x0501e), (0x30da, 0x05005), (0x30db, 0x05007), (0x30dc, 0x05013), (0x30dd, 0x05022),
    (0x30de, 0x05030), (0x30df, 0x0501b), (0x30e0, 0x04ff5), (0x30e1, 0x04ff4), (0x30e2, 0x05033), (0x30e3, 0x05037),
    (0x30e4, 0x0502c), (0x30e5, 0x04ff6), (0x30e6, 0x04ff7), (0x30e7, 0x05017), (0x30e8, 0x0501c), (0x30e9, 0x05020),
    (0x30ea, 0x05027), (0x30eb, 0x05035), (0x30ec, 0x0502f), (0x30ed, 0x05031), (0x30ee, 0x0500e), (0x30ef, 0x0515a),
    (0x30f0, 0x05194), (0x30f1, 0x05193), (0x30f2, 0x051ca), (0x30f3, 0x051c4), (0x30f4, 0x051c5), (0x30f5, 0x051c8),
    (0x30f6, 0x051ce), (0x30f7, 0x05261), (0x30f8, 0x0525a), (0x30f9, 0x05252), (0x30fa, 0x0525e), (0x30fb, 0x0525f),
    (0x30fc, 0x05255), (0x30fd, 0x05262), (0x30fe, 0x052cd), (0x30ff, 0x0530e), (0x3100, 0x0539e), (0x3101, 0x05526),
    (0x3102, 0x054e2), (0x3103, 0x05517), (0x3104, 0x05512), (0x3105, 0x054e7), (0x3106, 0x054f3), (0x3107, 0x054e4),
    (0x3108, 0x0551a), (0x3109, 0x054ff), (0x310a, 0x05504), (0x310b, 0x05508), (0x310c, 0x054eb), (0x310d, 0x05511),
    (0x310e, 0x05505), (0x310f, 0x054f1), (0x3110, 0x0550a), (0x3111, 0x054fb), (0x3112, 0x054f7), (0x3113, 0x054f8),
    (0x3114, 0x054e0), (0x3115, 0x0550e), (0x3116, 0x05503), (0x3117, 0x0550b), (0x3118, 0x05701), (0x3119, 0x05702),
    (0x311a, 0x057cc), (0x311b, 0x05832), (0x311c, 0x057d5), (0x311d, 0x057d2), (0x311e, 0x057ba), (0x311f, 0x057c6),
    (0x3120, 0x057bd), (0x3121, 0x057bc), (0x3122, 0x057b8), (0x3123, 0x057b6), (0x3124, 0x057bf), (0x3125, 0x057c7),
    (0x3126, 0x057d0), (0x3127, 0x057b9), (0x3128, 0x057c1), (0x3129, 0x0590e), (0x312a, 0x0594a), (0x312b, 0x05a19),
    (0x312c, 0x05a16), (0x312d, 0x05a2d), (0x312e, 0x05a2e), (0x312f, 0x05a15), (0x3130, 0x05a0f), (0x3131, 0x05a17),
    (0x3132, 0x05a0a), (0x3133, 0x05a1e), (0x3134, 0x05a33), (0x3135, 0x05b6c), (0x3136, 0x05ba7), (0x3137, 0x05bad),
    (0x3138, 0x05bac), (0x3139, 0x05c03), (0x313a, 0x05c56), (0x313b, 0x05c54), (0x313c, 0x05cec), (0x313d, 0x05cff),
    (0x313e, 0x05cee), (0x313f, 0x05cf1), (0x3140, 0x05cf7), (0x3141, 0x05d00), (0x3142, 0x05cf9), (0x3143, 0x05e29),
    (0x3144, 0x05e28), (0x3145, 0x05ea8), (0x3146, 0x05eae), (0x3147, 0x05eaa), (0x3148, 0x05eac), (0x3149, 0x05f33),
    (0x314a, 0x05f30), (0x314b, 0x05f67), (0x314c, 0x0605d), (0x314d, 0x0605a), (0x314e, 0x06067), (0x314f, 0x06041),
    (0x3150, 0x060a2), (0x3151, 0x06088), (0x3152, 0x06080), (0x3153, 0x06092), (0x3154, 0x06081), (0x3155, 0x0609d),
    (0x3156, 0x06083), (0x3157, 0x06095), (0x3158, 0x0609b), (0x3159, 0x06097), (0x315a, 0x06087), (0x315b, 0x0609c),
    (0x315c, 0x0608e), (0x315d, 0x06219), (0x315e, 0x06246), (0x315f, 0x062f2), (0x3160, 0x06310), (0x3161, 0x06356),
    (0x3162, 0x0632c), (0x3163, 0x06344), (0x3164, 0x06345), (0x3165, 0x06336), (0x3166, 0x06343), (0x3167, 0x063e4),
    (0x3168, 0x06339), (0x3169, 0x0634b), (0x316a, 0x0634a), (0x316b, 0x0633c), (0x316c, 0x06329), (0x316d, 0x06341),
    (0x316e, 0x06334), (0x316f, 0x06358), (0x3170, 0x06354), (0x3171, 0x06359), (0x3172, 0x0632d), (0x3173, 0x06347),
    (0x3174, 0x06333), (0x3175, 0x0635a), (0x3176, 0x06351), (0x3177, 0x06338), (0x3178, 0x06357), (0x3179, 0x06340),
    (0x317a, 0x06348), (0x317b, 0x0654a), (0x317c, 0x06546), (0x317d, 0x065c6), (0x317e, 0x065c3), (0x317f, 0x065c4),
    (0x3180, 0x065c2), (0x3181, 0x0664a), (0x3182, 0x0665f), (0x3183, 0x06647), (0x3184, 0x06651), (0x3185, 0x06712),
    (0x3186, 0x06713), (0x3187, 0x0681f), (0x3188, 0x0681a), (0x3189, 0x06849), (0x318a, 0x06832), (0x318b, 0x06833),
    (0x318c, 0x0683b), (0x318d, 0x0684b), (0x318e, 0x0684f), (0x318f, 0x06816), (0x3190, 0x06831), (0x3191, 0x0681c),
    (0x3192, 0x06835), (0x3193, 0x0682b), (0x3194, 0x0682d), (0x3195, 0x0682f), (0x3196, 0x0684e), (0x3197, 0x06844),
    (0x3198, 0x06834), (0x3199, 0x0681d), (0x319a, 0x06812), (0x319b, 0x06814), (0x319c, 0x06826), (0x319d, 0x06828),
    (0x319e, 0x0682e), (0x319f, 0x0684d), (0x31a0, 0x0683a), (0x31a1, 0x06825), (0x31a2, 0x06820), (0x31a3, 0x06b2c),
    (0x31a4, 0x06b2f), (0x31a5, 0x06b2d), (0x31a6, 0x06b31), (0x31a7, 0x06b34), (0x31a8, 0x06b6d), (0x31a9, 0x08082),
    (0x31aa, 0x06b88), (0x31ab, 0x06be6), (0x31ac, 0x06be4), (0x31ad, 0x06be8), (0x31ae, 0x06be3), (0x31af, 0x06be2),
    (0x31b0, 0x06be7), (0x31b1, 0x06c25), (0x31b2, 0x06d7a), (0x31b3, 0x06d63), (0x31b4, 0x06d64), (0x31b5, 0x06d76),
    (0x31b6, 0x06d0d), (0x31b7, 0x06d61), (0x31b8, 0x06d92), (0x31b9, 0x06d58), (0x31ba, 0x06d62), (0x31bb, 0x06d6d),
    (0x31bc, 0x06d6f), (0x31bd, 0x06d91), (0x31be, 0x06d8d), (0x31bf, 0x06def), (0x31c0, 0x06d7f), (0x31c1, 0x06d86),
    (0x31c2, 0x06d5e), (0x31c3, 0x06d67), (0x31c4, 0x06d60), (0x31c5, 0x06d97), (0x31c6, 0x06d70), (0x31c7, 0x06d7c),
    (0x31c8, 0x06d5f), (0x31c9, 0x06d82), (0x31ca, 0x06d98), (0x31cb, 0x06d2f), (0x31cc, 0x06d68), (0x31cd, 0x06d8b),
    (0x31ce, 0x06d7e), (0x31cf, 0x06d80), (0x31d0, 0x06d84), (0x31d1, 0x06d16), (0x31d2, 0x06d83), (0x31d3, 0x06d7b),
    (0x31d4, 0x06d7d), (0x31d5, 0x06d75), (0x31d6, 0x06d90), (0x31d7, 0x070dc), (0x31d8, 0x070d3), (0x31d9, 0x070d1),
    (0x31da, 0x070dd), (0x31db, 0x070cb), (0x31dc, 0x07f39), (0x31dd, 0x070e2), (0x31de, 0x070d7), (0x31df, 0x070d2),
    (0x31e0, 0x070de), (0x31e1, 0x070e0), (0x31e2, 0x070d4), (0x31e3, 0x070cd), (0x31e4, 0x070c5), (0x31e5, 0x070c6),
    (0x31e6, 0x070c7), (0x31e7, 0x070da), (0x31e8, 0x070ce), (0x31e9, 0x070e1), (0x31ea, 0x07242), (0x31eb, 0x07278),
    (0x31ec, 0x07277), (0x31ed, 0x07276), (0x31ee, 0x07300), (0x31ef, 0x072fa), (0x31f0, 0x072f4), (0x31f1, 0x072fe),
    (0x31f2, 0x072f6), (0x31f3, 0x072f3), (0x31f4, 0x072fb), (0x31f5, 0x07301), (0x31f6, 0x073d3), (0x31f7, 0x073d9),
    (0x31f8, 0x073e5), (0x31f9, 0x073d6), (0x31fa, 0x073bc), (0x31fb, 0x073e7), (0x31fc, 0x073e3), (0x31fd, 0x073e9),
    (0x31fe, 0x073dc), (0x31ff, 0x073d2), (0x3200, 0x073db), (0x3201, 0x073d4), (0x3202, 0x073dd), (0x3203, 0x073da),
    (0x3204, 0x073d7), (0x3205, 0x073d8), (0x3206, 0x073e8), (0x3207, 0x074de), (0x3208, 0x074df), (0x3209, 0x074f4),
    (0x320a, 0x074f5), (0x320b, 0x07521), (0x320c, 0x0755b), (0x320d, 0x0755f), (0x320e, 0x075b0), (0x320f, 0x075c1),
    (0x3210, 0x075bb), (0x3211, 0x075c4), (0x3212, 0x075c0), (0x3213, 0x075bf), (0x3214, 0x075b6), (0x3215, 0x075ba),
    (0x3216, 0x0768a), (0x3217, 0x076c9), (0x3218, 0x0771d), (0x3219, 0x0771b), (0x321a, 0x07710), (0x321b, 0x07713),
    (0x321c, 0x07712), (0x321d, 0x07723), (0x321e, 0x07711), (0x321f, 0x07715), (0x3220, 0x07719), (0x3221, 0x0771a),
    (0x3222, 0x07722), (0x3223, 0x07727), (0x3224, 0x07823), (0x3225, 0x0782c), (0x3226, 0x07822), (0x3227, 0x07835),
    (0x3228, 0x0782f), (0x3229, 0x07828), (0x322a, 0x0782e), (0x322b, 0x0782b), (0x322c, 0x07821), (0x322d, 0x07829),
    (0x322e, 0x07833), (0x322f, 0x0782a), (0x3230, 0x07831), (0x3231, 0x07954), (0x3232, 0x0795b), (0x3233, 0x0794f),
    (0x3234, 0x0795c), (0x3235, 0x07953), (0x3236, 0x07952), (0x3237, 0x07951), (0x3238, 0x079eb), (0x3239, 0x079ec),
    (0x323a, 0x079e0), (0x323b, 0x079ee), (0x323c, 0x079ed), (0x323d, 0x079ea), (0x323e, 0x079dc), (0x323f, 0x079de),
    (0x3240, 0x079dd), (0x3241, 0x07a86), (0x3242, 0x07a89), (0x3243, 0x07a85), (0x3244, 0x07a8b), (0x3245, 0x07a8c),
    (0x3246, 0x07a8a), (0x3247, 0x07a87), (0x3248, 0x07ad8), (0x3249, 0x07b10), (0x324a, 0x07b04), (0x324b, 0x07b13),
    (0x324c, 0x07b05), (0x324d, 0x07b0f), (0x324e, 0x07b08), (0x324f, 0x07b0a), (0x3250, 0x07b0e), (0x3251, 0x07b09),
    (0x3252, 0x07b12), (0x3253, 0x07c84), (0x3254, 0x07c91), (0x3255, 0x07c8a), (0x3256, 0x07c8c), (0x3257, 0x07c88),
    (0x3258, 0x07c8d), (0x3259, 0x07c85), (0x325a, 0x07d1e), (0x325b, 0x07d1d), (0x325c, 0x07d11), (0x325d, 0x07d0e),
    (0x325e, 0x07d18), (0x325f, 0x07d16), (0x3260, 0x07d13), (0x3261, 0x07d1f), (0x3262, 0x07d12), (0x3263, 0x07d0f),
    (0x3264, 0x07d0c), (0x3265, 0x07f5c), (0x3266, 0x07f61), (0x3267, 0x07f5e), (0x3268, 0x07f60), (0x3269, 0x07f5d),
    (0x326a, 0x07f5b), (0x326b, 0x07f96), (0x326c, 0x07f92), (0x326d, 0x07fc3), (0x326e, 0x07fc2), (0x326f, 0x07fc0),
    (0x3270, 0x08016), (0x3271, 0x0803e), (0x3272, 0x08039), (0x3273, 0x080fa), (0x3274, 0x080f2), (0x3275, 0x080f9),
    (0x3276, 0x080f5), (0x3277, 0x08101), (0x3278, 0x080fb), (0x3279, 0x08100), (0x327a, 0x08201), (0x327b, 0x0822f),
    (0x327c, 0x08225), (0x327d, 0x08333), (0x327e, 0x0832d), (0x327f, 0x08344), (0x3280, 0x08319), (0x3281, 0x08351),
    (0x3282, 0x08325), (0x3283, 0x08356), (0x3284, 0x0833f), (0x3285, 0x08341), (0x3286, 0x08326), (0x3287, 0x0831c),
    (0x3288, 0x08322), (0x3289, 0x08342), (0x328a, 0x0834e), (0x328b, 0x0831b), (0x328c, 0x0832a), (0x328d, 0x08308),
    (0x328e, 0x0833c), (0x328f, 0x0834d), (0x3290, 0x08316), (0x3291, 0x08324), (0x3292, 0x08320), (0x3293, 0x08337),
    (0x3294, 0x0832f), (0x3295, 0x08329), (0x3296, 0x08347), (0x3297, 0x08345), (0x3298, 0x0834c), (0x3299, 0x08353),
    (0x329a, 0x0831e), (0x329b, 0x0832c), (0x329c, 0x0834b), (0x329d, 0x08327), (0x329e, 0x08348), (0x329f, 0x08653),
    (0x32a0, 0x08652), (0x32a1, 0x086a2), (0x32a2, 0x086a8), (0x32a3, 0x08696), (0x32a4, 0x0868d), (0x32a5, 0x08691),
    (0x32a6, 0x0869e), (0x32a7, 0x08687), (0x32a8, 0x08697), (0x32a9, 0x08686), (0x32aa, 0x0868b), (0x32ab, 0x0869a),
    (0x32ac, 0x08685), (0x32ad, 0x086a5), (0x32ae, 0x08699), (0x32af, 0x086a1), (0x32b0, 0x086a7), (0x32b1, 0x08695),
    (0x32b2, 0x08698), (0x32b3, 0x0868e), (0x32b4, 0x0869d), (0x32b5, 0x08690), (0x32b6, 0x08694), (0x32b7, 0x08843),
    (0x32b8, 0x08844), (0x32b9, 0x0886d), (0x32ba, 0x08875), (0x32bb, 0x08876), (0x32bc, 0x08872), (0x32bd, 0x08880),
    (0x32be, 0x08871), (0x32bf, 0x0887f), (0x32c0, 0x0886f), (0x32c1, 0x08883), (0x32c2, 0x0887e), (0x32c3, 0x08874),
    (0x32c4, 0x0887c), (0x32c5, 0x08a12), (0x32c6, 0x08c47), (0x32c7, 0x08c57), (0x32c8, 0x08c7b), (0x32c9, 0x08ca4),
    (0x32ca, 0x08ca3), (0x32cb, 0x08d76), (0x32cc, 0x08d78), (0x32cd, 0x08db5), (0x32ce, 0x08db7), (0x32cf, 0x08db6),
    (0x32d0, 0x08ed1), (0x32d1, 0x08ed3), (0x32d2, 0x08ffe), (0x32d3, 0x08ff5), (0x32d4, 0x09002), (0x32d5, 0x08fff),
    (0x32d6, 0x08ffb), (0x32d7, 0x09004), (0x32d8, 0x08ffc), (0x32d9, 0x08ff6), (0x32da, 0x090d6), (0x32db, 0x090e0),
    (0x32dc, 0x090d9), (0x32dd, 0x090da), (0x32de, 0x090e3), (0x32df, 0x090df), (0x32e0, 0x090e5), (0x32e1, 0x090d8),
    (0x32e2, 0x090db), (0x32e3, 0x090d7), (0x32e4, 0x090dc), (0x32e5, 0x090e4), (0x32e6, 0x09150), (0x32e7, 0x0914e),
    (0x32e8, 0x0914f), (0x32e9, 0x091d5), (0x32ea, 0x091e2), (0x32eb, 0x091da), (0x32ec, 0x0965c), (0x32ed, 0x0965f),
    (0x32ee, 0x096bc), (0x32ef, 0x098e3), (0x32f0, 0x09adf), (0x32f1, 0x09b2f), (0x32f2, 0x04e7f), (0x32f3, 0x05070),
    (0x32f4, 0x0506a), (0x32f5, 0x05061), (0x32f6, 0x0505e), (0x32f7, 0x05060), (0x32f8, 0x05053), (0x32f9, 0x0504b),
    (0x32fa, 0x0505d), (0x32fb, 0x05072), (0x32fc, 0x05048), (0x32fd, 0x0504d), (0x32fe, 0x05041), (0x32ff, 0x0505b),
    (0x3300, 0x0504a), (0x3301, 0x05062), (0x3302, 0x05015), (0x3303, 0x05045), (0x3304, 0x0505f), (0x3305, 0x05069),
    (0x3306, 0x0506b), (0x3307, 0x05063), (0x3308, 0x05064), (0x3309, 0x05046), (0x330a, 0x05040), (0x330b, 0x0506e),
    (0x330c, 0x05073), (0x330d, 0x05057), (0x330e, 0x05051), (0x330f, 0x051d0), (0x3310, 0x0526b), (0x3311, 0x0526d),
    (0x3312, 0x0526c), (0x3313, 0x0526e), (0x3314, 0x052d6), (0x3315, 0x052d3), (0x3316, 0x0532d), (0x3317, 0x0539c),
    (0x3318, 0x05575), (0x3319, 0x05576), (0x331a, 0x0553c), (0x331b, 0x0554d), (0x331c, 0x05550), (0x331d, 0x05534),
    (0x331e, 0x0552a), (0x331f, 0x05551), (0x3320, 0x05562), (0x3321, 0x05536), (0x3322, 0x05535), (0x3323, 0x05530),
    (0x3324, 0x05552), (0x3325, 0x05545), (0x3326, 0x0550c), (0x3327, 0x05532), (0x3328, 0x05565), (0x3329, 0x0554e),
    (0x332a, 0x05539), (0x332b, 0x05548), (0x332c, 0x0552d), (0x332d, 0x0553b), (0x332e, 0x05540), (0x332f, 0x0554b),
    (0x3330, 0x0570a), (0x3331, 0x05707), (0x3332, 0x057fb), (0x3333, 0x05814), (0x3334, 0x057e2), (0x3335, 0x057f6),
    (0x3336, 0x057dc), (0x3337, 0x057f4), (0x3338, 0x05800), (0x3339, 0x057ed), (0x333a, 0x057fd), (0x333b, 0x05808),
    (0x333c, 0x057f8), (0x333d, 0x0580b), (0x333e, 0x057f3), (0x333f, 0x057cf), (0x3340, 0x05807), (0x3341, 0x057ee),
    (0x3342, 0x057e3), (0x3343, 0x057f2), (0x3344, 0x057e5), (0x3345, 0x057ec), (0x3346, 0x057e1), (0x3347, 0x0580e),
    (0x3348, 0x057fc), (0x3349, 0x05810), (0x334a, 0x057e7), (0x334b, 0x05801), (0x334c, 0x0580c), (0x334d, 0x057f1),
    (0x334e, 0x057e9), (0x334f, 0x057f0), (0x3350, 0x0580d), (0x3351, 0x05804), (0x3352, 0x0595c), (0x3353, 0x05a60),
    (0x3354, 0x05a58), (0x3355, 0x05a55), (0x3356, 0x05a67), (0x3357, 0x05a5e), (0x3358, 0x05a38), (0x3359, 0x05a35),
    (0x335a, 0x05a6d), (0x335b, 0x05a50), (0x335c, 0x05a5f), (0x335d, 0x05a65), (0x335e, 0x05a6c), (0x335f, 0x05a53),
    (0x3360, 0x05a64), (0x3361, 0x05a57), (0x3362, 0x05a43), (0x3363, 0x05a5d), (0x3364, 0x05a52), (0x3365, 0x05a44),
    (0x3366, 0x05a5b), (0x3367, 0x05a48), (0x3368, 0x05a8e), (0x3369, 0x05a3e), (0x336a, 0x05a4d), (0x336b, 0x05a39),
    (0x336c, 0x05a4c), (0x336d, 0x05a70), (0x336e, 0x05a69), (0x336f, 0x05a47), (0x3370, 0x05a51), (0x3371, 0x05a56),
    (0x3372, 0x05a42), (0x3373, 0x05a5c), (0x3374, 0x05b72), (0x3375, 0x05b6e), (0x3376, 0x05bc1), (0x3377, 0x05bc0),
    (0x3378, 0x05c59), (0x3379, 0x05d1e), (0x337a, 0x05d0b), (0x337b, 0x05d1d), (0x337c, 0x05d1a), (0x337d, 0x05d20),
    (0x337e, 0x05d0c), (0x337f, 0x05d28), (0x3380, 0x05d0d), (0x3381, 0x05d26), (0x3382, 0x05d25), (0x3383, 0x05d0f),
    (0x3384, 0x05d30), (0x3385, 0x05d12), (0x3386, 0x05d23), (0x3387, 0x05d1f), (0x3388, 0x05d2e), (0x3389, 0x05e3e),
    (0x338a, 0x05e34), (0x338b, 0x05eb1), (0x338c, 0x05eb4), (0x338d, 0x05eb9), (0x338e, 0x05eb2), (0x338f, 0x05eb3),
    (0x3390, 0x05f36), (0x3391, 0x05f38), (0x3392, 0x05f9b), (0x3393, 0x05f96), (0x3394, 0x05f9f), (0x3395, 0x0608a),
    (0x3396, 0x06090), (0x3397, 0x06086), (0x3398, 0x060be), (0x3399, 0x060b0), (0x339a, 0x060ba), (0x339b, 0x060d3),
    (0x339c, 0x060d4), (0x339d, 0x060cf), (0x339e, 0x060e4), (0x339f, 0x060d9), (0x33a0, 0x060dd), (0x33a1, 0x060c8),
    (0x33a2, 0x060b1), (0x33a3, 0x060db), (0x33a4, 0x060b7), (0x33a5, 0x060ca), (0x33a6, 0x060bf), (0x33a7, 0x060c3),
    (0x33a8, 0x060cd), (0x33a9, 0x060c0), (0x33aa, 0x06332), (0x33ab, 0x06365), (0x33ac, 0x0638a), (0x33ad, 0x06382),
    (0x33ae, 0x0637d), (0x33af, 0x063bd), (0x33b0, 0x0639e), (0x33b1, 0x063ad), (0x33b2, 0x0639d), (0x33b3, 0x06397),
    (0x33b4, 0x063ab), (0x33b5, 0x0638e), (0x33b6, 0x0636f), (0x33b7, 0x06387), (0x33b8, 0x06390), (0x33b9, 0x0636e),
    (0x33ba, 0x063af), (0x33bb, 0x06375), (0x33bc, 0x0639c), (0x33bd, 0x0636d), (0x33be, 0x063ae), (0x33bf, 0x0637c),
    (0x33c0, 0x063a4), (0x33c1, 0x0633b), (0x33c2, 0x0639f), (0x33c3, 0x06378), (0x33c4, 0x06385), (0x33c5, 0x06381),
    (0x33c6, 0x06391), (0x33c7, 0x0638d), (0x33c8, 0x06370), (0x33c9, 0x06553), (0x33ca, 0x065cd), (0x33cb, 0x06665),
    (0x33cc, 0x06661), (0x33cd, 0x0665b), (0x33ce, 0x06659), (0x33cf, 0x0665c), (0x33d0, 0x06662), (0x33d1, 0x06718),
    (0x33d2, 0x06879), (0x33d3, 0x06887), (0x33d4, 0x06890), (0x33d5, 0x0689c), (0x33d6, 0x0686d), (0x33d7, 0x0686e),
    (0x33d8, 0x068ae), (0x33d9, 0x068ab), (0x33da, 0x06956), (0x33db, 0x0686f), (0x33dc, 0x068a3), (0x33dd, 0x068ac),
    (0x33de, 0x068a9), (0x33df, 0x06875), (0x33e0, 0x06874), (0x33e1, 0x068b2), (0x33e2, 0x0688f), (0x33e3, 0x06877),
    (0x33e4, 0x06892), (0x33e5, 0x0687c), (0x33e6, 0x0686b), (0x33e7, 0x06872), (0x33e8, 0x068aa), (0x33e9, 0x06880),
    (0x33ea, 0x06871), (0x33eb, 0x0687e), (0x33ec, 0x0689b), (0x33ed, 0x06896), (0x33ee, 0x0688b), (0x33ef, 0x068a0),
    (0x33f0, 0x06889), (0x33f1, 0x068a4), (0x33f2, 0x06878), (0x33f3, 0x0687b), (0x33f4, 0x06891), (0x33f5, 0x0688c),
    (0x33f6, 0x0688a), (0x33f7, 0x0687d), (0x33f8, 0x06b36), (0x33f9, 0x06b33), (0x33fa, 0x06b37), (0x33fb, 0x06b38),
    (0x33fc, 0x06b91), (0x33fd, 0x06b8f), (0x33fe, 0x06b8d), (0x33ff, 0x06b8e), (0x3400, 0x06b8c), (0x3401, 0x06c2a),
    (0x3402, 0x06dc0), (0x3403, 0x06dab), (0x3404, 0x06db4), (0x3405, 0x06db3), (0x3406, 0x06e74), (0x3407, 0x06dac),
    (0x3408, 0x06de9), (0x3409, 0x06de2), (0x340a, 0x06db7), (0x340b, 0x06df6), (0x340c, 0x06dd4), (0x340d, 0x06e00),
    (0x340e, 0x06dc8), (0x340f, 0x06de0), (0x3410, 0x06ddf), (0x3411, 0x06dd6), (0x3412, 0x06dbe), (0x3413, 0x06de5),
    (0x3414, 0x06ddc), (0x3415, 0x06ddd), (0x3416, 0x06ddb), (0x3417, 0x06df4), (0x3418, 0x06dca), (0x3419, 0x06dbd),
    (0x341a, 0x06ded), (0x341b, 0x06df0), (0x341c, 0x06dba), (0x341d, 0x06dd5), (0x341e, 0x06dc2), (0x341f, 0x06dcf),
    (0x3420, 0x06dc9), (0x3421, 0x06dd0), (0x3422, 0x06df2), (0x3423, 0x06dd3), (0x3424, 0x06dfd), (0x3425, 0x06dd7),
    (0x3426, 0x06dcd), (0x3427, 0x06de3), (0x3428, 0x06dbb), (0x3429, 0x070fa), (0x342a, 0x0710d), (0x342b, 0x070f7),
    (0x342c, 0x07117), (0x342d, 0x070f4), (0x342e, 0x0710c), (0x342f, 0x070f0), (0x3430, 0x07104), (0x3431, 0x070f3),
    (0x3432, 0x07110), (0x3433, 0x070fc), (0x3434, 0x070ff), (0x3435, 0x07106), (0x3436, 0x07113), (0x3437, 0x07100),
    (0x3438, 0x070f8), (0x3439, 0x070f6), (0x343a, 0x0710b), (0x343b, 0x07102), (0x343c, 0x0710e), (0x343d, 0x0727e),
    (0x343e, 0x0727b), (0x343f, 0x0727c), (0x3440, 0x0727f), (0x3441, 0x0731d), (0x3442, 0x07317), (0x3443, 0x07307),
    (0x3444, 0x07311), (0x3445, 0x07318), (0x3446, 0x0730a), (0x3447, 0x07308), (0x3448, 0x072ff), (0x3449, 0x0730f),
    (0x344a, 0x0731e), (0x344b, 0x07388), (0x344c, 0x073f6), (0x344d, 0x073f8), (0x344e, 0x073f5), (0x344f, 0x07404),
    (0x3450, 0x07401), (0x3451, 0x073fd), (0x3452, 0x07407), (0x3453, 0x07400), (0x3454, 0x073fa), (0x3455, 0x073fc),
    (0x3456, 0x073ff), (0x3457, 0x0740c), (0x3458, 0x0740b), (0x3459, 0x073f4), (0x345a, 0x07408), (0x345b, 0x07564),
    (0x345c, 0x07563), (0x345d, 0x075ce), (0x345e, 0x075d2), (0x345f, 0x075cf), (0x3460, 0x075cb), (0x3461, 0x075cc),
    (0x3462, 0x075d1), (0x3463, 0x075d0), (0x3464, 0x0768f), (0x3465, 0x07689), (0x3466, 0x076d3), (0x3467, 0x07739),
    (0x3468, 0x0772f), (0x3469, 0x0772d), (0x346a, 0x07731), (0x346b, 0x07732), (0x346c, 0x07734), (0x346d, 0x07733),
    (0x346e, 0x0773d), (0x346f, 0x07725), (0x3470, 0x0773b), (0x3471, 0x07735), (0x3472, 0x07848), (0x3473, 0x07852),
    (0x3474, 0x07849), (0x3475, 0x0784d), (0x3476, 0x0784a), (0x3477, 0x0784c), (0x3478, 0x07826), (0x3479, 0x07845),
    (0x347a, 0x07850), (0x347b, 0x07964), (0x347c, 0x07967), (0x347d, 0x07969), (0x347e, 0x0796a), (0x347f, 0x07963),
    (0x3480, 0x0796b), (0x3481, 0x07961), (0x3482, 0x079bb), (0x3483, 0x079fa), (0x3484, 0x079f8), (0x3485, 0x079f6),
    (0x3486, 0x079f7), (0x3487, 0x07a8f), (0x3488, 0x07a94), (0x3489, 0x07a90), (0x348a, 0x07b35), (0x348b, 0x07b47),
    (0x348c, 0x07b34), (0x348d, 0x07b25), (0x348e, 0x07b30), (0x348f, 0x07b22), (0x3490, 0x07b24), (0x3491, 0x07b33),
    (0x3492, 0x07b18), (0x3493, 0x07b2a), (0x3494, 0x07b1d), (0x3495, 0x07b31), (0x3496, 0x07b2b), (0x3497, 0x07b2d),
    (0x3498, 0x07b2f), (0x3499, 0x07b32), (0x349a, 0x07b38), (0x349b, 0x07b1a), (0x349c, 0x07b23), (0x349d, 0x07c94),
    (0x349e, 0x07c98), (0x349f, 0x07c96), (0x34a0, 0x07ca3), (0x34a1, 0x07d35), (0x34a2, 0x07d3d), (0x34a3, 0x07d38),
    (0x34a4, 0x07d36), (0x34a5, 0x07d3a), (0x34a6, 0x07d45), (0x34a7, 0x07d2c), (0x34a8, 0x07d29), (0x34a9, 0x07d41),
    (0x34aa, 0x07d47), (0x34ab, 0x07d3e), (0x34ac, 0x07d3f), (0x34ad, 0x07d4a), (0x34ae, 0x07d3b), (0x34af, 0x07d28),
    (0x34b0, 0x07f63), (0x34b1, 0x07f95), (0x34b2, 0x07f9c), (0x34b3, 0x07f9d), (0x34b4, 0x07f9b), (0x34b5, 0x07fca),
    (0x34b6, 0x07fcb), (0x34b7, 0x07fcd), (0x34b8, 0x07fd0), (0x34b9, 0x07fd1), (0x34ba, 0x07fc7), (0x34bb, 0x07fcf),
    (0x34bc, 0x07fc9), (0x34bd, 0x0801f), (0x34be, 0x0801e), (0x34bf, 0x0801b), (0x34c0, 0x08047), (0x34c1, 0x08043),
    (0x34c2, 0x08048), (0x34c3, 0x08118), (0x34c4, 0x08125), (0x34c5, 0x08119), (0x34c6, 0x0811b), (0x34c7, 0x0812d),
    (0x34c8, 0x0811f), (0x34c9, 0x0812c), (0x34ca, 0x0811e), (0x34cb, 0x08121), (0x34cc, 0x08115), (0x34cd, 0x08127),
    (0x34ce, 0x0811d), (0x34cf, 0x08122), (0x34d0, 0x08211), (0x34d1, 0x08238), (0x34d2, 0x08233), (0x34d3, 0x0823a),
    (0x34d4, 0x08234), (0x34d5, 0x08232), (0x34d6, 0x08274), (0x34d7, 0x08390), (0x34d8, 0x083a3), (0x34d9, 0x083a8),
    (0x34da, 0x0838d), (0x34db, 0x0837a), (0x34dc, 0x08373), (0x34dd, 0x083a4), (0x34de, 0x08374), (0x34df, 0x0838f),
    (0x34e0, 0x08381), (0x34e1, 0x08395), (0x34e2, 0x08399), (0x34e3, 0x08375), (0x34e4, 0x08394), (0x34e5, 0x083a9),
    (0x34e6, 0x0837d), (0x34e7, 0x08383), (0x34e8, 0x0838c), (0x34e9, 0x0839d), (0x34ea, 0x0839b), (0x34eb, 0x083aa),
    (0x34ec, 0x0838b), (0x34ed, 0x0837e), (0x34ee, 0x083a5), (0x34ef, 0x083af), (0x34f0, 0x08388), (0x34f1, 0x08397),
    (0x34f2, 0x083b0), (0x34f3, 0x0837f), (0x34f4, 0x083a6), (0x34f5, 0x08387), (0x34f6, 0x083ae), (0x34f7, 0x08376),
    (0x34f8, 0x0839a), (0x34f9, 0x08659), (0x34fa, 0x08656), (0x34fb, 0x086bf), (0x34fc, 0x086b7), (0x34fd, 0x086c2),
    (0x34fe, 0x086c1), (0x34ff, 0x086c5), (0x3500, 0x086ba), (0x3501, 0x086b0), (0x3502, 0x086c8), (0x3503, 0x086b9),
    (0x3504, 0x086b3), (0x3505, 0x086b8), (0x3506, 0x086cc), (0x3507, 0x086b4), (0x3508, 0x086bb), (0x3509, 0x086bc),
    (0x350a, 0x086c3), (0x350b, 0x086bd), (0x350c, 0x086be), (0x350d, 0x08852), (0x350e, 0x08889), (0x350f, 0x08895),
    (0x3510, 0x088a8), (0x3511, 0x088a2), (0x3512, 0x088aa), (0x3513, 0x0889a), (0x3514, 0x08891), (0x3515, 0x088a1),
    (0x3516, 0x0889f), (0x3517, 0x08898), (0x3518, 0x088a7), (0x3519, 0x08899), (0x351a, 0x0889b), (0x351b, 0x08897),
    (0x351c, 0x088a4), (0x351d, 0x088ac), (0x351e, 0x0888c), (0x351f, 0x08893), (0x3520, 0x0888e), (0x3521, 0x08982),
    (0x3522, 0x089d6), (0x3523, 0x089d9), (0x3524, 0x089d5), (0x3525, 0x08a30), (0x3526, 0x08a27), (0x3527, 0x08a2c),
    (0x3528, 0x08a1e), (0x3529, 0x08c39), (0x352a, 0x08c3b), (0x352b, 0x08c5c), (0x352c, 0x08c5d), (0x352d, 0x08c7d),
    (0x352e, 0x08ca5), (0x352f, 0x08d7d), (0x3530, 0x08d7b), (0x3531, 0x08d79), (0x3532, 0x08dbc), (0x3533, 0x08dc2),
    (0x3534, 0x08db9), (0x3535, 0x08dbf), (0x3536, 0x08dc1), (0x3537, 0x08ed8), (0x3538, 0x08ede), (0x3539, 0x08edd),
    (0x353a, 0x08edc), (0x353b, 0x08ed7), (0x353c, 0x08ee0), (0x353d, 0x08ee1), (0x353e, 0x09024), (0x353f, 0x0900b),
    (0x3540, 0x09011), (0x3541, 0x0901c), (0x3542, 0x0900c), (0x3543, 0x09021), (0x3544, 0x090ef), (0x3545, 0x090ea),
    (0x3546, 0x090f0), (0x3547, 0x090f4), (0x3548, 0x090f2), (0x3549, 0x090f3), (0x354a, 0x090d4), (0x354b, 0x090eb),
    (0x354c, 0x090ec), (0x354d, 0x090e9), (0x354e, 0x09156), (0x354f, 0x09158), (0x3550, 0x0915a), (0x3551, 0x09153),
    (0x3552, 0x09155), (0x3553, 0x091ec), (0x3554, 0x091f4), (0x3555, 0x091f1), (0x3556, 0x091f3), (0x3557, 0x091f8),
    (0x3558, 0x091e4), (0x3559, 0x091f9), (0x355a, 0x091ea), (0x355b, 0x091eb), (0x355c, 0x091f7), (0x355d, 0x091e8),
    (0x355e, 0x091ee), (0x355f, 0x0957a), (0x3560, 0x09586), (0x3561, 0x09588), (0x3562, 0x0967c), (0x3563, 0x0966d),
    (0x3564, 0x0966b), (0x3565, 0x09671), (0x3566, 0x0966f), (0x3567, 0x096bf), (0x3568, 0x0976a), (0x3569, 0x09804),
    (0x356a, 0x098e5), (0x356b, 0x09997), (0x356c, 0x0509b), (0x356d, 0x05095), (0x356e, 0x05094), (0x356f, 0x0509e),
    (0x3570, 0x0508b), (0x3571, 0x050a3), (0x3572, 0x05083), (0x3573, 0x0508c), (0x3574, 0x0508e), (0x3575, 0x0509d),
    (0x3576, 0x05068), (0x3577, 0x0509c), (0x3578, 0x05092), (0x3579, 0x05082), (0x357a, 0x05087), (0x357b, 0x0515f),
    (0x357c, 0x051d4), (0x357d, 0x05312), (0x357e, 0x05311), (0x357f, 0x053a4), (0x3580, 0x053a7), (0x3581, 0x05591),
    (0x3582, 0x055a8), (0x3583, 0x055a5), (0x3584, 0x055ad), (0x3585, 0x05577), (0x3586, 0x05645), (0x3587, 0x055a2),
    (0x3588, 0x05593), (0x3589, 0x05588), (0x358a, 0x0558f), (0x358b, 0x055b5), (0x358c, 0x05581), (0x358d, 0x055a3),
    (0x358e, 0x05592), (0x358f, 0x055a4), (0x3590, 0x0557d), (0x3591, 0x0558c), (0x3592, 0x055a6), (0x3593, 0x0557f),
    (0x3594, 0x05595), (0x3595, 0x055a1), (0x3596, 0x0558e), (0x3597, 0x0570c), (0x3598, 0x05829), (0x3599, 0x05837),
    (0x359a, 0x05819), (0x359b, 0x0581e), (0x359c, 0x05827), (0x359d, 0x05823), (0x359e, 0x05828), (0x359f, 0x057f5),
    (0x35a0, 0x05848), (0x35a1, 0x05825), (0x35a2, 0x0581c), (0x35a3, 0x0581b), (0x35a4, 0x05833), (0x35a5, 0x0583f),
    (0x35a6, 0x05836), (0x35a7, 0x0582e), (0x35a8, 0x05839), (0x35a9, 0x05838), (0x35aa, 0x0582d), (0x35ab, 0x0582c),
    (0x35ac, 0x0583b), (0x35ad, 0x05961), (0x35ae, 0x05aaf), (0x35af, 0x05a94), (0x35b0, 0x05a9f), (0x35b1, 0x05a7a),
    (0x35b2, 0x05aa2), (0x35b3, 0x05a9e), (0x35b4, 0x05a78), (0x35b5, 0x05aa6), (0x35b6, 0x05a7c), (0x35b7, 0x05aa5),
    (0x35b8, 0x05aac), (0x35b9, 0x05a95), (0x35ba, 0x05aae), (0x35bb, 0x05a37), (0x35bc, 0x05a84), (0x35bd, 0x05a8a),
    (0x35be, 0x05a97), (0x35bf, 0x05a83), (0x35c0, 0x05a8b), (0x35c1, 0x05aa9), (0x35c2, 0x05a7b), (0x35c3, 0x05a7d),
    (0x35c4, 0x05a8c), (0x35c5, 0x05a9c), (0x35c6, 0x05a8f), (0x35c7, 0x05a93), (0x35c8, 0x05a9d), (0x35c9, 0x05bea),
    (0x35ca, 0x05bcd), (0x35cb, 0x05bcb), (0x35cc, 0x05bd4), (0x35cd, 0x05bd1), (0x35ce, 0x05bca), (0x35cf, 0x05bce),
    (0x35d0, 0x05c0c), (0x35d1, 0x05c30), (0x35d2, 0x05d37), (0x35d3, 0x05d43), (0x35d4, 0x05d6b), (0x35d5, 0x05d41),
    (0x35d6, 0x05d4b), (0x35d7, 0x05d3f), (0x35d8, 0x05d35), (0x35d9, 0x05d51), (0x35da, 0x05d4e), (0x35db, 0x05d55),
    (0x35dc, 0x05d33), (0x35dd, 0x05d3a), (0x35de, 0x05d52), (0x35df, 0x05d3d), (0x35e0, 0x05d31), (0x35e1, 0x05d59),
    (0x35e2, 0x05d42), (0x35e3, 0x05d39), (0x35e4, 0x05d49), (0x35e5, 0x05d38), (0x35e6, 0x05d3c), (0x35e7, 0x05d32),
    (0x35e8, 0x05d36), (0x35e9, 0x05d40), (0x35ea, 0x05d45), (0x35eb, 0x05e44), (0x35ec, 0x05e41), (0x35ed, 0x05f58),
    (0x35ee, 0x05fa6), (0x35ef, 0x05fa5), (0x35f0, 0x05fab), (0x35f1, 0x060c9), (0x35f2, 0x060b9), (0x35f3, 0x060cc),
    (0x35f4, 0x060e2), (0x35f5, 0x060ce), (0x35f6, 0x060c4), (0x35f7, 0x06114), (0x35f8, 0x060f2), (0x35f9, 0x0610a),
    (0x35fa, 0x06116), (0x35fb, 0x06105), (0x35fc, 0x060f5), (0x35fd, 0x06113), (0x35fe, 0x060f8), (0x35ff, 0x060fc),
    (0x3600, 0x060fe), (0x3601, 0x060c1), (0x3602, 0x06103), (0x3603, 0x06118), (0x3604, 0x0611d), (0x3605, 0x06110),
    (0x3606, 0x060ff), (0x3607, 0x06104), (0x3608, 0x0610b), (0x3609, 0x0624a), (0x360a, 0x06394), (0x360b, 0x063b1),
    (0x360c, 0x063b0), (0x360d, 0x063ce), (0x360e, 0x063e5), (0x360f, 0x063e8), (0x3610, 0x063ef), (0x3611, 0x063c3),
    (0x3612, 0x0649d), (0x3613, 0x063f3), (0x3614, 0x063ca), (0x3615, 0x063e0), (0x3616, 0x063f6), (0x3617, 0x063d5),
    (0x3618, 0x063f2), (0x3619, 0x063f5), (0x361a, 0x06461), (0x361b, 0x063df), (0x361c, 0x063be), (0x361d, 0x063dd),
    (0x361e, 0x063dc), (0x361f, 0x063c4), (0x3620, 0x063d8), (0x3621, 0x063d3), (0x3622, 0x063c2), (0x3623, 0x063c7),
    (0x3624, 0x063cc), (0x3625, 0x063cb), (0x3626, 0x063c8), (0x3627, 0x063f0), (0x3628, 0x063d7), (0x3629, 0x063d9),
    (0x362a, 0x06532), (0x362b, 0x06567), (0x362c, 0x0656a), (0x362d, 0x06564), (0x362e, 0x0655c), (0x362f, 0x06568),
    (0x3630, 0x06565), (0x3631, 0x0658c), (0x3632, 0x0659d), (0x3633, 0x0659e), (0x3634, 0x065ae), (0x3635, 0x065d0),
    (0x3636, 0x065d2), (0x3637, 0x0667c), (0x3638, 0x0666c), (0x3639, 0x0667b), (0x363a, 0x06680), (0x363b, 0x06671),
    (0x363c, 0x06679), (0x363d, 0x0666a), (0x363e, 0x06672), (0x363f, 0x06701), (0x3640, 0x0690c), (0x3641, 0x068d3),
    (0x3642, 0x06904), (0x3643, 0x068dc), (0x3644, 0x0692a), (0x3645, 0x068ec), (0x3646, 0x068ea), (0x3647, 0x068f1),
    (0x3648, 0x0690f), (0x3649, 0x068d6), (0x364a, 0x068f7), (0x364b, 0x068eb), (0x364c, 0x068e4), (0x364d, 0x068f6),
    (0x364e, 0x06913), (0x364f, 0x06910), (0x3650, 0x068f3), (0x3651, 0x068e1), (0x3652, 0x06907), (0x3653, 0x068cc),
    (0x3654, 0x06908), (0x3655, 0x06970), (0x3656, 0x068b4), (0x3657, 0x06911), (0x3658, 0x068ef), (0x3659, 0x068c6),
    (0x365a, 0x06914), (0x365b, 0x068f8), (0x365c, 0x068d0), (0x365d, 0x068fd), (0x365e, 0x068fc), (0x365f, 0x068e8),
    (0x3660, 0x0690b), (0x3661, 0x0690a), (0x3662, 0x06917), (0x3663, 0x068ce), (0x3664, 0x068c8), (0x3665, 0x068dd),
    (0x3666, 0x068de), (0x3667, 0x068e6), (0x3668, 0x068f4), (0x3669, 0x068d1), (0x366a, 0x06906), (0x366b, 0x068d4),
    (0x366c, 0x068e9), (0x366d, 0x06915), (0x366e, 0x06925), (0x366f, 0x068c7), (0x3670, 0x06b39), (0x3671, 0x06b3b),
    (0x3672, 0x06b3f), (0x3673, 0x06b3c), (0x3674, 0x06b94), (0x3675, 0x06b97), (0x3676, 0x06b99), (0x3677, 0x06b95),
    (0x3678, 0x06bbd), (0x3679, 0x06bf0), (0x367a, 0x06bf2), (0x367b, 0x06bf3), (0x367c, 0x06c30), (0x367d, 0x06dfc),
    (0x367e, 0x06e46), (0x367f, 0x06e47), (0x3680, 0x06e1f), (0x3681, 0x06e49), (0x3682, 0x06e88), (0x3683, 0x06e3c),
    (0x3684, 0x06e3d), (0x3685, 0x06e45), (0x3686, 0x06e62), (0x3687, 0x06e2b), (0x3688, 0x06e3f), (0x3689, 0x06e41),
    (0x368a, 0x06e5d), (0x368b, 0x06e73), (0x368c, 0x06e1c), (0x368d, 0x06e33), (0x368e, 0x06e4b), (0x368f, 0x06e40),
    (0x3690, 0x06e51), (0x3691, 0x06e3b), (0x3692, 0x06e03), (0x3693, 0x06e2e), (0x3694, 0x06e5e), (0x3695, 0x06e68),
    (0x3696, 0x06e5c), (0x3697, 0x06e61), (0x3698, 0x06e31), (0x3699, 0x06e28), (0x369a, 0x06e60), (0x369b, 0x06e71),
    (0x369c, 0x06e6b), (0x369d, 0x06e39), (0x369e, 0x06e22), (0x369f, 0x06e30), (0x36a0, 0x06e53), (0x36a1, 0x06e65),
    (0x36a2, 0x06e27), (0x36a3, 0x06e78), (0x36a4, 0x06e64), (0x36a5, 0x06e77), (0x36a6, 0x06e55), (0x36a7, 0x06e79),
    (0x36a8, 0x06e52), (0x36a9, 0x06e66), (0x36aa, 0x06e35), (0x36ab, 0x06e36), (0x36ac, 0x06e5a), (0x36ad, 0x07120),
    (0x36ae, 0x0711e), (0x36af, 0x0712f), (0x36b0, 0x070fb), (0x36b1, 0x0712e), (0x36b2, 0x07131), (0x36b3, 0x07123),
    (0x36b4, 0x07125), (0x36b5, 0x07122), (0x36b6, 0x07132), (0x36b7, 0x0711f), (0x36b8, 0x07128), (0x36b9, 0x0713a),
    (0x36ba, 0x0711b), (0x36bb, 0x0724b), (0x36bc, 0x0725a), (0x36bd, 0x07288), (0x36be, 0x07289), (0x36bf, 0x07286),
    (0x36c0, 0x07285), (0x36c1, 0x0728b), (0x36c2, 0x07312), (0x36c3, 0x0730b), (0x36c4, 0x07330), (0x36c5, 0x07322),
    (0x36c6, 0x07331), (0x36c7, 0x07333), (0x36c8, 0x07327), (0x36c9, 0x07332), (0x36ca, 0x0732d), (0x36cb, 0x07326),
    (0x36cc, 0x07323), (0x36cd, 0x07335), (0x36ce, 0x0730c), (0x36cf, 0x0742e), (0x36d0, 0x0742c), (0x36d1, 0x07430),
    (0x36d2, 0x0742b), (0x36d3, 0x07416), (0x36d4, 0x0741a), (0x36d5, 0x07421), (0x36d6, 0x0742d), (0x36d7, 0x07431),
    (0x36d8, 0x07424), (0x36d9, 0x07423), (0x36da, 0x0741d), (0x36db, 0x07429), (0x36dc, 0x07420), (0x36dd, 0x07432),
    (0x36de, 0x074fb), (0x36df, 0x0752f), (0x36e0, 0x0756f), (0x36e1, 0x0756c), (0x36e2, 0x075e7), (0x36e3, 0x075da),
    (0x36e4, 0x075e1), (0x36e5, 0x075e6), (0x36e6, 0x075dd), (0x36e7, 0x075df), (0x36e8, 0x075e4), (0x36e9, 0x075d7),
    (0x36ea, 0x07695), (0x36eb, 0x07692), (0x36ec, 0x076da), (0x36ed, 0x07746), (0x36ee, 0x07747), (0x36ef, 0x07744),
    (0x36f0, 0x0774d), (0x36f1, 0x07745), (0x36f2, 0x0774a), (0x36f3, 0x0774e), (0x36f4, 0x0774b), (0x36f5, 0x0774c),
    (0x36f6, 0x077de), (0x36f7, 0x077ec), (0x36f8, 0x07860), (0x36f9, 0x07864), (0x36fa, 0x07865), (0x36fb, 0x0785c),
    (0x36fc, 0x0786d), (0x36fd, 0x07871), (0x36fe, 0x0786a), (0x36ff, 0x0786e), (0x3700, 0x07870), (0x3701, 0x07869),
    (0x3702, 0x07868), (0x3703, 0x0785e), (0x3704, 0x07862), (0x3705, 0x07974), (0x3706, 0x07973), (0x3707, 0x07972),
    (0x3708, 0x07970), (0x3709, 0x07a02), (0x370a, 0x07a0a), (0x370b, 0x07a03), (0x370c, 0x07a0c), (0x370d, 0x07a04),
    (0x370e, 0x07a99), (0x370f, 0x07ae6), (0x3710, 0x07ae4), (0x3711, 0x07b4a), (0x3712, 0x07b3b), (0x3713, 0x07b44),
    (0x3714, 0x07b48), (0x3715, 0x07b4c), (0x3716, 0x07b4e), (0x3717, 0x07b40), (0x3718, 0x07b58), (0x3719, 0x07b45),
    (0x371a, 0x07ca2), (0x371b, 0x07c9e), (0x371c, 0x07ca8), (0x371d, 0x07ca1), (0x371e, 0x07d58), (0x371f, 0x07d6f),
    (0x3720, 0x07d63), (0x3721, 0x07d53), (0x3722, 0x07d56), (0x3723, 0x07d67), (0x3724, 0x07d6a), (0x3725, 0x07d4f),
    (0x3726, 0x07d6d), (0x3727, 0x07d5c), (0x3728, 0x07d6b), (0x3729, 0x07d52), (0x372a, 0x07d54), (0x372b, 0x07d69),
    (0x372c, 0x07d51), (0x372d, 0x07d5f), (0x372e, 0x07d4e), (0x372f, 0x07f3e), (0x3730, 0x07f3f), (0x3731, 0x07f65),
    (0x3732, 0x07f66), (0x3733, 0x07fa2), (0x3734, 0x07fa0), (0x3735, 0x07fa1), (0x3736, 0x07fd7), (0x3737, 0x08051),
    (0x3738, 0x0804f), (0x3739, 0x08050), (0x373a, 0x080fe), (0x373b, 0x080d4), (0x373c, 0x08143), (0x373d, 0x0814a),
    (0x373e, 0x08152), (0x373f, 0x0814f), (0x3740, 0x08147), (0x3741, 0x0813d), (0x3742, 0x0814d), (0x3743, 0x0813a),
    (0x3744, 0x081e6), (0x3745, 0x081ee), (0x3746, 0x081f7), (0x3747, 0x081f8), (0x3748, 0x081f9), (0x3749, 0x08204),
    (0x374a, 0x0823c), (0x374b, 0x0823d), (0x374c, 0x0823f), (0x374d, 0x08275), (0x374e, 0x0833b), (0x374f, 0x083cf),
    (0x3750, 0x083f9), (0x3751, 0x08423), (0x3752, 0x083c0), (0x3753, 0x083e8), (0x3754, 0x08412), (0x3755, 0x083e7),
    (0x3756, 0x083e4), (0x3757, 0x083fc), (0x3758, 0x083f6), (0x3759, 0x08410), (0x375a, 0x083c6), (0x375b, 0x083c8),
    (0x375c, 0x083eb), (0x375d, 0x083e3), (0x375e, 0x083bf), (0x375f, 0x08401), (0x3760, 0x083dd), (0x3761, 0x083e5),
    (0x3762, 0x083d8), (0x3763, 0x083ff), (0x3764, 0x083e1), (0x3765, 0x083cb), (0x3766, 0x083ce), (0x3767, 0x083d6),
    (0x3768, 0x083f5), (0x3769, 0x083c9), (0x376a, 0x08409), (0x376b, 0x0840f), (0x376c, 0x083de), (0x376d, 0x08411),
    (0x376e, 0x08406), (0x376f, 0x083c2), (0x3770, 0x083f3), (0x3771, 0x083d5), (0x3772, 0x083fa), (0x3773, 0x083c7),
    (0x3774, 0x083d1), (0x3775, 0x083ea), (0x3776, 0x08413), (0x3777, 0x083c3), (0x3778, 0x083ec), (0x3779, 0x083ee),
    (0x377a, 0x083c4), (0x377b, 0x083fb), (0x377c, 0x083d7), (0x377d, 0x083e2), (0x377e, 0x0841b), (0x377f, 0x083db),
    (0x3780, 0x083fe), (0x3781, 0x086d8), (0x3782, 0x086e2), (0x3783, 0x086e6), (0x3784, 0x086d3), (0x3785, 0x086e3),
    (0x3786, 0x086da), (0x3787, 0x086ea), (0x3788, 0x086dd), (0x3789, 0x086eb), (0x378a, 0x086dc), (0x378b, 0x086ec),
    (0x378c, 0x086e9), (0x378d, 0x086d7), (0x378e, 0x086e8), (0x378f, 0x086d1), (0x3790, 0x08848), (0x3791, 0x08856),
    (0x3792, 0x08855), (0x3793, 0x088ba), (0x3794, 0x088d7), (0x3795, 0x088b9), (0x3796, 0x088b8), (0x3797, 0x088c0),
    (0x3798, 0x088be), (0x3799, 0x088b6), (0x379a, 0x088bc), (0x379b, 0x088b7), (0x379c, 0x088bd), (0x379d, 0x088b2),
    (0x379e, 0x08901), (0x379f, 0x088c9), (0x37a0, 0x08995), (0x37a1, 0x08998), (0x37a2, 0x08997), (0x37a3, 0x089dd),
    (0x37a4, 0x089da), (0x37a5, 0x089db), (0x37a6, 0x08a4e), (0x37a7, 0x08a4d), (0x37a8, 0x08a39), (0x37a9, 0x08a59),
    (0x37aa, 0x08a40), (0x37ab, 0x08a57), (0x37ac, 0x08a58), (0x37ad, 0x08a44), (0x37ae, 0x08a45), (0x37af, 0x08a52),
    (0x37b0, 0x08a48), (0x37b1, 0x08a51), (0x37b2, 0x08a4a), (0x37b3, 0x08a4c), (0x37b4, 0x08a4f), (0x37b5, 0x08c5f),
    (0x37b6, 0x08c81), (0x37b7, 0x08c80), (0x37b8, 0x08cba), (0x37b9, 0x08cbe), (0x37ba, 0x08cb0), (0x37bb, 0x08cb9),
    (0x37bc, 0x08cb5), (0x37bd, 0x08d84), (0x37be, 0x08d80), (0x37bf, 0x08d89), (0x37c0, 0x08dd8), (0x37c1, 0x08dd3),
    (0x37c2, 0x08dcd), (0x37c3, 0x08dc7), (0x37c4, 0x08dd6), (0x37c5, 0x08ddc), (0x37c6, 0x08dcf), (0x37c7, 0x08dd5),
    (0x37c8, 0x08dd9), (0x37c9, 0x08dc8), (0x37ca, 0x08dd7), (0x37cb, 0x08dc5), (0x37cc, 0x08eef), (0x37cd, 0x08ef7),
    (0x37ce, 0x08efa), (0x37cf, 0x08ef9), (0x37d0, 0x08ee6), (0x37d1, 0x08eee), (0x37d2, 0x08ee5), (0x37d3, 0x08ef5),
    (0x37d4, 0x08ee7), (0x37d5, 0x08ee8), (0x37d6, 0x08ef6), (0x37d7, 0x08eeb), (0x37d8, 0x08ef1), (0x37d9, 0x08eec),
    (0x37da, 0x08ef4), (0x37db, 0x08ee9), (0x37dc, 0x0902d), (0x37dd, 0x09034), (0x37de, 0x0902f), (0x37df, 0x09106),
    (0x37e0, 0x0912c), (0x37e1, 0x09104), (0x37e2, 0x090ff), (0x37e3, 0x090fc), (0x37e4, 0x09108), (0x37e5, 0x090f9),
    (0x37e6, 0x090fb), (0x37e7, 0x09101), (0x37e8, 0x09100), (0x37e9, 0x09107), (0x37ea, 0x09105), (0x37eb, 0x09103),
    (0x37ec, 0x09161), (0x37ed, 0x09164), (0x37ee, 0x0915f), (0x37ef, 0x09162), (0x37f0, 0x09160), (0x37f1, 0x09201),
    (0x37f2, 0x0920a), (0x37f3, 0x09225), (0x37f4, 0x09203), (0x37f5, 0x0921a), (0x37f6, 0x09226), (0x37f7, 0x0920f),
    (0x37f8, 0x0920c), (0x37f9, 0x09200), (0x37fa, 0x09212), (0x37fb, 0x091ff), (0x37fc, 0x091fd), (0x37fd, 0x09206),
    (0x37fe, 0x09204), (0x37ff, 0x09227), (0x3800, 0x09202), (0x3801, 0x0921c), (0x3802, 0x09224), (0x3803, 0x09219),
    (0x3804, 0x09217), (0x3805, 0x09205), (0x3806, 0x09216), (0x3807, 0x0957b), (0x3808, 0x0958d), (0x3809, 0x0958c),
    (0x380a, 0x09590), (0x380b, 0x09687), (0x380c, 0x0967e), (0x380d, 0x09688), (0x380e, 0x09689), (0x380f, 0x09683),
    (0x3810, 0x09680), (0x3811, 0x096c2), (0x3812, 0x096c8), (0x3813, 0x096c3), (0x3814, 0x096f1), (0x3815, 0x096f0),
    (0x3816, 0x0976c), (0x3817, 0x09770), (0x3818, 0x0976e), (0x3819, 0x09807), (0x381a, 0x098a9), (0x381b, 0x098eb),
    (0x381c, 0x09ce6), (0x381d, 0x09ef9), (0x381e, 0x04e83), (0x381f, 0x04e84), (0x3820, 0x04eb6), (0x3821, 0x050bd),
    (0x3822, 0x050bf), (0x3823, 0x050c6), (0x3824, 0x050ae), (0x3825, 0x050c4), (0x3826, 0x050ca), (0x3827, 0x050b4),
    (0x3828, 0x050c8), (0x3829, 0x050c2), (0x382a, 0x050b0), (0x382b, 0x050c1), (0x382c, 0x050ba), (0x382d, 0x050b1),
    (0x382e, 0x050cb), (0x382f, 0x050c9), (0x3830, 0x050b6), (0x3831, 0x050b8), (0x3832, 0x051d7), (0x3833, 0x0527a),
    (0x3834, 0x05278), (0x3835, 0x0527b), (0x3836, 0x0527c), (0x3837, 0x055c3), (0x3838, 0x055db), (0x3839, 0x055cc),
    (0x383a, 0x055d0), (0x383b, 0x055cb), (0x383c, 0x055ca), (0x383d, 0x055dd), (0x383e, 0x055c0), (0x383f, 0x055d4),
    (0x3840, 0x055c4), (0x3841, 0x055e9), (0x3842, 0x055bf), (0x3843, 0x055d2), (0x3844, 0x0558d), (0x3845, 0x055cf),
    (0x3846, 0x055d5), (0x3847, 0x055e2), (0x3848, 0x055d6), (0x3849, 0x055c8), (0x384a, 0x055f2), (0x384b, 0x055cd),
    (0x384c, 0x055d9), (0x384d, 0x055c2), (0x384e, 0x05714), (0x384f, 0x05853), (0x3850, 0x05868), (0x3851, 0x05864),
    (0x3852, 0x0584f), (0x3853, 0x0584d), (0x3854, 0x05849), (0x3855, 0x0586f), (0x3856, 0x05855), (0x3857, 0x0584e),
    (0x3858, 0x0585d), (0x3859, 0x05859), (0x385a, 0x05865), (0x385b, 0x0585b), (0x385c, 0x0583d), (0x385d, 0x05863),
    (0x385e, 0x05871), (0x385f, 0x058fc), (0x3860, 0x05ac7), (0x3861, 0x05ac4), (0x3862, 0x05acb), (0x3863, 0x05aba),
    (0x3864, 0x05ab8), (0x3865, 0x05ab1), (0x3866, 0x05ab5), (0x3867, 0x05ab0), (0x3868, 0x05abf), (0x3869, 0x05ac8),
    (0x386a, 0x05abb), (0x386b, 0x05ac6), (0x386c, 0x05ab7), (0x386d, 0x05ac0), (0x386e, 0x05aca), (0x386f, 0x05ab4),
    (0x3870, 0x05ab6), (0x3871, 0x05acd), (0x3872, 0x05ab9), (0x3873, 0x05a90), (0x3874, 0x05bd6), (0x3875, 0x05bd8),
    (0x3876, 0x05bd9), (0x3877, 0x05c1f), (0x3878, 0x05c33), (0x3879, 0x05d71), (0x387a, 0x05d63), (0x387b, 0x05d4a),
    (0x387c, 0x05d65), (0x387d, 0x05d72), (0x387e, 0x05d6c), (0x387f, 0x05d5e), (0x3880, 0x05d68), (0x3881, 0x05d67),
    (0x3882, 0x05d62), (0x3883, 0x05df0), (0x3884, 0x05e4f), (0x3885, 0x05e4e), (0x3886, 0x05e4a), (0x3887, 0x05e4d),
    (0x3888, 0x05e4b), (0x3889, 0x05ec5), (0x388a, 0x05ecc), (0x388b, 0x05ec6), (0x388c, 0x05ecb), (0x388d, 0x05ec7),
    (0x388e, 0x05f40), (0x388f, 0x05faf), (0x3890, 0x05fad), (0x3891, 0x060f7), (0x3892, 0x06149), (0x3893, 0x0614a),
    (0x3894, 0x0612b), (0x3895, 0x06145), (0x3896, 0x06136), (0x3897, 0x06132), (0x3898, 0x0612e), (0x3899, 0x06146),
    (0x389a, 0x0612f), (0x389b, 0x0614f), (0x389c, 0x06129), (0x389d, 0x06140), (0x389e, 0x06220), (0x389f, 0x09168),
    (0x38a0, 0x06223), (0x38a1, 0x06225), (0x38a2, 0x06224), (0x38a3, 0x063c5), (0x38a4, 0x063f1), (0x38a5, 0x063eb),
    (0x38a6, 0x06410), (0x38a7, 0x06412), (0x38a8, 0x06409), (0x38a9, 0x06420), (0x38aa, 0x06424), (0x38ab, 0x06433),
    (0x38ac, 0x06443), (0x38ad, 0x0641f), (0x38ae, 0x06415), (0x38af, 0x06418), (0x38b0, 0x06439), (0x38b1, 0x06437),
    (0x38b2, 0x06422), (0x38b3, 0x06423), (0x38b4, 0x0640c), (0x38b5, 0x06426), (0x38b6, 0x06430), (0x38b7, 0x06428),
    (0x38b8, 0x06441), (0x38b9, 0x06435), (0x38ba, 0x0642f), (0x38bb, 0x0640a), (0x38bc, 0x0641a), (0x38bd, 0x06440),
    (0x38be, 0x06425), (0x38bf, 0x06427), (0x38c0, 0x0640b), (0x38c1, 0x063e7), (0x38c2, 0x0641b), (0x38c3, 0x0642e),
    (0x38c4, 0x06421), (0x38c5, 0x0640e), (0x38c6, 0x0656f), (0x38c7, 0x06592), (0x38c8, 0x065d3), (0x38c9, 0x06686),
    (0x38ca, 0x0668c), (0x38cb, 0x06695), (0x38cc, 0x06690), (0x38cd, 0x0668b), (0x38ce, 0x0668a), (0x38cf, 0x06699),
    (0x38d0, 0x06694), (0x38d1, 0x06678), (0x38d2, 0x06720), (0x38d3, 0x06966), (0x38d4, 0x0695f), (0x38d5, 0x06938),
    (0x38d6, 0x0694e), (0x38d7, 0x06962), (0x38d8, 0x06971), (0x38d9, 0x0693f), (0x38da, 0x06945), (0x38db, 0x0696a),
    (0x38dc, 0x06939), (0x38dd, 0x06942), (0x38de, 0x06957), (0x38df, 0x06959), (0x38e0, 0x0697a), (0x38e1, 0x06948),
    (0x38e2, 0x06949), (0x38e3, 0x06935), (0x38e4, 0x0696c), (0x38e5, 0x06933), (0x38e6, 0x0693d), (0x38e7, 0x06965),
    (0x38e8, 0x068f0), (0x38e9, 0x06978), (0x38ea, 0x06934), (0x38eb, 0x06969), (0x38ec, 0x06940), (0x38ed, 0x0696f),
    (0x38ee, 0x06944), (0x38ef, 0x06976), (0x38f0, 0x06958), (0x38f1, 0x06941), (0x38f2, 0x06974), (0x38f3, 0x0694c),
    (0x38f4, 0x0693b), (0x38f5, 0x0694b), (0x38f6, 0x06937), (0x38f7, 0x0695c), (0x38f8, 0x0694f), (0x38f9, 0x06951),
    (0x38fa, 0x06932), (0x38fb, 0x06952), (0x38fc, 0x0692f), (0x38fd, 0x0697b), (0x38fe, 0x0693c), (0x38ff, 0x06b46),
    (0x3900, 0x06b45), (0x3901, 0x06b43), (0x3902, 0x06b42), (0x3903, 0x06b48), (0x3904, 0x06b41), (0x3905, 0x06b9b),
    (0x3906, 0x0fa0d), (0x3907, 0x06bfb), (0x3908, 0x06bfc), (0x3909, 0x06bf9), (0x390a, 0x06bf7), (0x390b, 0x06bf8),
    (0x390c, 0x06e9b), (0x390d, 0x06ed6), (0x390e, 0x06ec8), (0x390f, 0x06e8f), (0x3910, 0x06ec0), (0x3911, 0x06e9f),
    (0x3912, 0x06e93), (0x3913, 0x06e94), (0x3914, 0x06ea0), (0x3915, 0x06eb1), (0x3916, 0x06eb9), (0x3917, 0x06ec6),
    (0x3918, 0x06ed2), (0x3919, 0x06ebd), (0x391a, 0x06ec1), (0x391b, 0x06e9e), (0x391c, 0x06ec9), (0x391d, 0x06eb7),
    (0x391e, 0x06eb0), (0x391f, 0x06ecd), (0x3920, 0x06ea6), (0x3921, 0x06ecf), (0x3922, 0x06eb2), (0x3923, 0x06ebe),
    (0x3924, 0x06ec3), (0x3925, 0x06edc), (0x3926, 0x06ed8), (0x3927, 0x06e99), (0x3928, 0x06e92), (0x3929, 0x06e8e),
    (0x392a, 0x06e8d), (0x392b, 0x06ea4), (0x392c, 0x06ea1), (0x392d, 0x06ebf), (0x392e, 0x06eb3), (0x392f, 0x06ed0),
    (0x3930, 0x06eca), (0x3931, 0x06e97), (0x3932, 0x06eae), (0x3933, 0x06ea3), (0x3934, 0x07147), (0x3935, 0x07154),
    (0x3936, 0x07152), (0x3937, 0x07163), (0x3938, 0x07160), (0x3939, 0x07141), (0x393a, 0x0715d), (0x393b, 0x07162),
    (0x393c, 0x07172), (0x393d, 0x07178), (0x393e, 0x0716a), (0x393f, 0x07161), (0x3940, 0x07142), (0x3941, 0x07158),
    (0x3942, 0x07143), (0x3943, 0x0714b), (0x3944, 0x07170), (0x3945, 0x0715f), (0x3946, 0x07150), (0x3947, 0x07153),
    (0x3948, 0x07144), (0x3949, 0x0714d), (0x394a, 0x0715a), (0x394b, 0x0724f), (0x394c, 0x0728d), (0x394d, 0x0728c),
    (0x394e, 0x07291), (0x394f, 0x07290), (0x3950, 0x0728e), (0x3951, 0x0733c), (0x3952, 0x07342), (0x3953, 0x0733b),
    (0x3954, 0x0733a), (0x3955, 0x07340), (0x3956, 0x0734a), (0x3957, 0x07349), (0x3958, 0x07444), (0x3959, 0x0744a),
    (0x395a, 0x0744b), (0x395b, 0x07452), (0x395c, 0x07451), (0x395d, 0x07457), (0x395e, 0x07440), (0x395f, 0x0744f),
    (0x3960, 0x07450), (0x3961, 0x0744e), (0x3962, 0x07442), (0x3963, 0x07446), (0x3964, 0x0744d), (0x3965, 0x07454),
    (0x3966, 0x074e1), (0x3967, 0x074ff), (0x3968, 0x074fe), (0x3969, 0x074fd), (0x396a, 0x0751d), (0x396b, 0x07579),
    (0x396c, 0x07577), (0x396d, 0x06983), (0x396e, 0x075ef), (0x396f, 0x0760f), (0x3970, 0x07603), (0x3971, 0x075f7),
    (0x3972, 0x075fe), (0x3973, 0x075fc), (0x3974, 0x075f9), (0x3975, 0x075f8), (0x3976, 0x07610), (0x3977, 0x075fb),
    (0x3978, 0x075f6), (0x3979, 0x075ed), (0x397a, 0x075f5), (0x397b, 0x075fd), (0x397c, 0x07699), (0x397d, 0x076b5),
    (0x397e, 0x076dd), (0x397f, 0x07755), (0x3980, 0x0775f), (0x3981, 0x07760), (0x3982, 0x07752), (0x3983, 0x07756),
    (0x3984, 0x0775a), (0x3985, 0x07769), (0x3986, 0x07767), (0x3987, 0x07754), (0x3988, 0x07759), (0x3989, 0x0776d),
    (0x398a, 0x077e0), (0x398b, 0x07887), (0x398c, 0x0789a), (0x398d, 0x07894), (0x398e, 0x0788f), (0x398f, 0x07884),
    (0x3990, 0x07895), (0x3991, 0x07885), (0x3992, 0x07886), (0x3993, 0x078a1), (0x3994, 0x07883), (0x3995, 0x07879),
    (0x3996, 0x07899), (0x3997, 0x07880), (0x3998, 0x07896), (0x3999, 0x0787b), (0x399a, 0x0797c), (0x399b, 0x07982),
    (0x399c, 0x0797d), (0x399d, 0x07979), (0x399e, 0x07a11), (0x399f, 0x07a18), (0x39a0, 0x07a19), (0x39a1, 0x07a12),
    (0x39a2, 0x07a17), (0x39a3, 0x07a15), (0x39a4, 0x07a22), (0x39a5, 0x07a13), (0x39a6, 0x07a1b), (0x39a7, 0x07a10),
    (0x39a8, 0x07aa3), (0x39a9, 0x07aa2), (0x39aa, 0x07a9e), (0x39ab, 0x07aeb), (0x39ac, 0x07b66), (0x39ad, 0x07b64),
    (0x39ae, 0x07b6d), (0x39af, 0x07b74), (0x39b0, 0x07b69), (0x39b1, 0x07b72), (0x39b2, 0x07b65), (0x39b3, 0x07b73),
    (0x39b4, 0x07b71), (0x39b5, 0x07b70), (0x39b6, 0x07b61), (0x39b7, 0x07b78), (0x39b8, 0x07b76), (0x39b9, 0x07b63),
    (0x39ba, 0x07cb2), (0x39bb, 0x07cb4), (0x39bc, 0x07caf), (0x39bd, 0x07d88), (0x39be, 0x07d86), (0x39bf, 0x07d80),
    (0x39c0, 0x07d8d), (0x39c1, 0x07d7f), (0x39c2, 0x07d85), (0x39c3, 0x07d7a), (0x39c4, 0x07d8e), (0x39c5, 0x07d7b),
    (0x39c6, 0x07d83), (0x39c7, 0x07d7c), (0x39c8, 0x07d8c), (0x39c9, 0x07d94), (0x39ca, 0x07d84), (0x39cb, 0x07d7d),
    (0x39cc, 0x07d92), (0x39cd, 0x07f6d), (0x39ce, 0x07f6b), (0x39cf, 0x07f67), (0x39d0, 0x07f68), (0x39d1, 0x07f6c),
    (0x39d2, 0x07fa6), (0x39d3, 0x07fa5), (0x39d4, 0x07fa7), (0x39d5, 0x07fdb), (0x39d6, 0x07fdc), (0x39d7, 0x08021),
    (0x39d8, 0x08164), (0x39d9, 0x08160), (0x39da, 0x08177), (0x39db, 0x0815c), (0x39dc, 0x08169), (0x39dd, 0x0815b),
    (0x39de, 0x08162), (0x39df, 0x08172), (0x39e0, 0x06721), (0x39e1, 0x0815e), (0x39e2, 0x08176), (0x39e3, 0x08167),
    (0x39e4, 0x0816f), (0x39e5, 0x08144), (0x39e6, 0x08161), (0x39e7, 0x0821d), (0x39e8, 0x08249), (0x39e9, 0x08244),
    (0x39ea, 0x08240), (0x39eb, 0x08242), (0x39ec, 0x08245), (0x39ed, 0x084f1), (0x39ee, 0x0843f), (0x39ef, 0x08456),
    (0x39f0, 0x08476), (0x39f1, 0x08479), (0x39f2, 0x0848f), (0x39f3, 0x0848d), (0x39f4, 0x08465), (0x39f5, 0x08451),
    (0x39f6, 0x08440), (0x39f7, 0x08486), (0x39f8, 0x08467), (0x39f9, 0x08430), (0x39fa, 0x0844d), (0x39fb, 0x0847d),
    (0x39fc, 0x0845a), (0x39fd, 0x08459), (0x39fe, 0x08474), (0x39ff, 0x08473), (0x3a00, 0x0845d), (0x3a01, 0x08507),
    (0x3a02, 0x0845e), (0x3a03, 0x08437), (0x3a04, 0x0843a), (0x3a05, 0x08434), (0x3a06, 0x0847a), (0x3a07, 0x08443),
    (0x3a08, 0x08478), (0x3a09, 0x08432), (0x3a0a, 0x08445), (0x3a0b, 0x08429), (0x3a0c, 0x083d9), (0x3a0d, 0x0844b),
    (0x3a0e, 0x0842f), (0x3a0f, 0x08442), (0x3a10, 0x0842d), (0x3a11, 0x0845f), (0x3a12, 0x08470), (0x3a13, 0x08439),
    (0x3a14, 0x0844e), (0x3a15, 0x0844c), (0x3a16, 0x08452), (0x3a17, 0x0846f), (0x3a18, 0x084c5), (0x3a19, 0x0848e),
    (0x3a1a, 0x0843b), (0x3a1b, 0x08447), (0x3a1c, 0x08436), (0x3a1d, 0x08433), (0x3a1e, 0x08468), (0x3a1f, 0x0847e),
    (0x3a20, 0x08444), (0x3a21, 0x0842b), (0x3a22, 0x08460), (0x3a23, 0x08454), (0x3a24, 0x0846e), (0x3a25, 0x08450),
    (0x3a26, 0x0870b), (0x3a27, 0x08704), (0x3a28, 0x086f7), (0x3a29, 0x0870c), (0x3a2a, 0x086fa), (0x3a2b, 0x086d6),
    (0x3a2c, 0x086f5), (0x3a2d, 0x0874d), (0x3a2e, 0x086f8), (0x3a2f, 0x0870e), (0x3a30, 0x08709), (0x3a31, 0x08701),
    (0x3a32, 0x086f6), (0x3a33, 0x0870d), (0x3a34, 0x08705), (0x3a35, 0x088d6), (0x3a36, 0x088cb), (0x3a37, 0x088cd),
    (0x3a38, 0x088ce), (0x3a39, 0x088de), (0x3a3a, 0x088db), (0x3a3b, 0x088da), (0x3a3c, 0x088cc), (0x3a3d, 0x088d0),
    (0x3a3e, 0x08985), (0x3a3f, 0x0899b), (0x3a40, 0x089df), (0x3a41, 0x089e5), (0x3a42, 0x089e4), (0x3a43, 0x089e1),
    (0x3a44, 0x089e0), (0x3a45, 0x089e2), (0x3a46, 0x089dc), (0x3a47, 0x089e6), (0x3a48, 0x08a76), (0x3a49, 0x08a86),
    (0x3a4a, 0x08a7f), (0x3a4b, 0x08a61), (0x3a4c, 0x08a3f), (0x3a4d, 0x08a77), (0x3a4e, 0x08a82), (0x3a4f, 0x08a84),
    (0x3a50, 0x08a75), (0x3a51, 0x08a83), (0x3a52, 0x08a81), (0x3a53, 0x08a74), (0x3a54, 0x08a7a), (0x3a55, 0x08c3c),
    (0x3a56, 0x08c4b), (0x3a57, 0x08c4a), (0x3a58, 0x08c65), (0x3a59, 0x08c64), (0x3a5a, 0x08c66), (0x3a5b, 0x08c86),
    (0x3a5c, 0x08c84), (0x3a5d, 0x08c85), (0x3a5e, 0x08ccc), (0x3a5f, 0x08d68), (0x3a60, 0x08d69), (0x3a61, 0x08d91),
    (0x3a62, 0x08d8c), (0x3a63, 0x08d8e), (0x3a64, 0x08d8f), (0x3a65, 0x08d8d), (0x3a66, 0x08d93), (0x3a67, 0x08d94),
    (0x3a68, 0x08d90), (0x3a69, 0x08d92), (0x3a6a, 0x08df0), (0x3a6b, 0x08de0), (0x3a6c, 0x08dec), (0x3a6d, 0x08df1),
    (0x3a6e, 0x08dee), (0x3a6f, 0x08dd0), (0x3a70, 0x08de9), (0x3a71, 0x08de3), (0x3a72, 0x08de2), (0x3a73, 0x08de7),
    (0x3a74, 0x08df2), (0x3a75, 0x08deb), (0x3a76, 0x08df4), (0x3a77, 0x08f06), (0x3a78, 0x08eff), (0x3a79, 0x08f01),
    (0x3a7a, 0x08f00), (0x3a7b, 0x08f05), (0x3a7c, 0x08f07), (0x3a7d, 0x08f08), (0x3a7e, 0x08f02), (0x3a7f, 0x08f0b),
    (0x3a80, 0x09052), (0x3a81, 0x0903f), (0x3a82, 0x09044), (0x3a83, 0x09049), (0x3a84, 0x0903d), (0x3a85, 0x09110),
    (0x3a86, 0x0910d), (0x3a87, 0x0910f), (0x3a88, 0x09111), (0x3a89, 0x09116), (0x3a8a, 0x09114), (0x3a8b, 0x0910b),
    (0x3a8c, 0x0910e), (0x3a8d, 0x0916e), (0x3a8e, 0x0916f), (0x3a8f, 0x09248), (0x3a90, 0x09252), (0x3a91, 0x09230),
    (0x3a92, 0x0923a), (0x3a93, 0x09266), (0x3a94, 0x09233), (0x3a95, 0x09265), (0x3a96, 0x0925e), (0x3a97, 0x09283),
    (0x3a98, 0x0922e), (0x3a99, 0x0924a), (0x3a9a, 0x09246), (0x3a9b, 0x0926d), (0x3a9c, 0x0926c), (0x3a9d, 0x0924f),
    (0x3a9e, 0x09260), (0x3a9f, 0x09267), (0x3aa0, 0x0926f), (0x3aa1, 0x09236), (0x3aa2, 0x09261), (0x3aa3, 0x09270),
    (0x3aa4, 0x09231), (0x3aa5, 0x09254), (0x3aa6, 0x09263), (0x3aa7, 0x09250), (0x3aa8, 0x09272), (0x3aa9, 0x0924e),
    (0x3aaa, 0x09253), (0x3aab, 0x0924c), (0x3aac, 0x09256), (0x3aad, 0x09232), (0x3aae, 0x0959f), (0x3aaf, 0x0959c),
    (0x3ab0, 0x0959e), (0x3ab1, 0x0959b), (0x3ab2, 0x09692), (0x3ab3, 0x09693), (0x3ab4, 0x09691), (0x3ab5, 0x09697),
    (0x3ab6, 0x096ce), (0x3ab7, 0x096fa), (0x3ab8, 0x096fd), (0x3ab9, 0x096f8), (0x3aba, 0x096f5), (0x3abb, 0x09773),
    (0x3abc, 0x09777), (0x3abd, 0x09778), (0x3abe, 0x09772), (0x3abf, 0x0980f), (0x3ac0, 0x0980d), (0x3ac1, 0x0980e),
    (0x3ac2, 0x098ac), (0x3ac3, 0x098f6), (0x3ac4, 0x098f9), (0x3ac5, 0x099af), (0x3ac6, 0x099b2), (0x3ac7, 0x099b0),
    (0x3ac8, 0x099b5), (0x3ac9, 0x09aad), (0x3aca, 0x09aab), (0x3acb, 0x09b5b), (0x3acc, 0x09cea), (0x3acd, 0x09ced),
    (0x3ace, 0x09ce7), (0x3acf, 0x09e80), (0x3ad0, 0x09efd), (0x3ad1, 0x050e6), (0x3ad2, 0x050d4), (0x3ad3, 0x050d7),
    (0x3ad4, 0x050e8), (0x3ad5, 0x050f3), (0x3ad6, 0x050db), (0x3ad7, 0x050ea), (0x3ad8, 0x050dd), (0x3ad9, 0x050e4),
    (0x3ada, 0x050d3), (0x3adb, 0x050ec), (0x3adc, 0x050f0), (0x3add, 0x050ef), (0x3ade, 0x050e3), (0x3adf, 0x050e0),
    (0x3ae0, 0x051d8), (0x3ae1, 0x05280), (0x3ae2, 0x05281), (0x3ae3, 0x052e9), (0x3ae4, 0x052eb), (0x3ae5, 0x05330),
    (0x3ae6, 0x053ac), (0x3ae7, 0x05627), (0x3ae8, 0x05615), (0x3ae9, 0x0560c), (0x3aea, 0x05612), (0x3aeb, 0x055fc),
    (0x3aec, 0x0560f), (0x3aed, 0x0561c), (0x3aee, 0x05601), (0x3aef, 0x05613), (0x3af0, 0x05602), (0x3af1, 0x055fa),
    (0x3af2, 0x0561d), (0x3af3, 0x05604), (0x3af4, 0x055ff), (0x3af5, 0x055f9), (0x3af6, 0x05889), (0x3af7, 0x0587c),
    (0x3af8, 0x05890), (0x3af9, 0x05898), (0x3afa, 0x05886), (0x3afb, 0x05881), (0x3afc, 0x0587f), (0x3afd, 0x05874),
    (0x3afe, 0x0588b), (0x3aff, 0x0587a), (0x3b00, 0x05887), (0x3b01, 0x05891), (0x3b02, 0x0588e), (0x3b03, 0x05876),
    (0x3b04, 0x05882), (0x3b05, 0x05888), (0x3b06, 0x0587b), (0x3b07, 0x05894), (0x3b08, 0x0588f), (0x3b09, 0x058fe),
    (0x3b0a, 0x0596b), (0x3b0b, 0x05adc), (0x3b0c, 0x05aee), (0x3b0d, 0x05ae5), (0x3b0e, 0x05ad5), (0x3b0f, 0x05aea),
    (0x3b10, 0x05ada), (0x3b11, 0x05aed), (0x3b12, 0x05aeb), (0x3b13, 0x05af3), (0x3b14, 0x05ae2), (0x3b15, 0x05ae0),
    (0x3b16, 0x05adb), (0x3b17, 0x05aec), (0x3b18, 0x05ade), (0x3b19, 0x05add), (0x3b1a, 0x05ad9), (0x3b1b, 0x05ae8),
    (0x3b1c, 0x05adf), (0x3b1d, 0x05b77), (0x3b1e, 0x05be0), (0x3b1f, 0x05be3), (0x3b20, 0x05c63), (0x3b21, 0x05d82),
    (0x3b22, 0x05d80), (0x3b23, 0x05d7d), (0x3b24, 0x05d86), (0x3b25, 0x05d7a), (0x3b26, 0x05d81), (0x3b27, 0x05d77),
    (0x3b28, 0x05d8a), (0x3b29, 0x05d89), (0x3b2a, 0x05d88), (0x3b2b, 0x05d7e), (0x3b2c, 0x05d7c), (0x3b2d, 0x05d8d),
    (0x3b2e, 0x05d79), (0x3b2f, 0x05d7f), (0x3b30, 0x05e58), (0x3b31, 0x05e59), (0x3b32, 0x05e53), (0x3b33, 0x05ed8),
    (0x3b34, 0x05ed1), (0x3b35, 0x05ed7), (0x3b36, 0x05ece), (0x3b37, 0x05edc), (0x3b38, 0x05ed5), (0x3b39, 0x05ed9),
    (0x3b3a, 0x05ed2), (0x3b3b, 0x05ed4), (0x3b3c, 0x05f44), (0x3b3d, 0x05f43), (0x3b3e, 0x05f6f), (0x3b3f, 0x05fb6),
    (0x3b40, 0x0612c), (0x3b41, 0x06128), (0x3b42, 0x06141), (0x3b43, 0x0615e), (0x3b44, 0x06171), (0x3b45, 0x06173),
    (0x3b46, 0x06152), (0x3b47, 0x06153), (0x3b48, 0x06172), (0x3b49, 0x0616c), (0x3b4a, 0x06180), (0x3b4b, 0x06174),
    (0x3b4c, 0x06154), (0x3b4d, 0x0617a), (0x3b4e, 0x0615b), (0x3b4f, 0x06165), (0x3b50, 0x0613b), (0x3b51, 0x0616a),
    (0x3b52, 0x06161), (0x3b53, 0x06156), (0x3b54, 0x06229), (0x3b55, 0x06227), (0x3b56, 0x0622b), (0x3b57, 0x0642b),
    (0x3b58, 0x0644d), (0x3b59, 0x0645b), (0x3b5a, 0x0645d), (0x3b5b, 0x06474), (0x3b5c, 0x06476), (0x3b5d, 0x06472),
    (0x3b5e, 0x06473), (0x3b5f, 0x0647d), (0x3b60, 0x06475), (0x3b61, 0x06466), (0x3b62, 0x064a6), (0x3b63, 0x0644e),
    (0x3b64, 0x06482), (0x3b65, 0x0645e), (0x3b66, 0x0645c), (0x3b67, 0x0644b), (0x3b68, 0x06453), (0x3b69, 0x06460),
    (0x3b6a, 0x06450), (0x3b6b, 0x0647f), (0x3b6c, 0x0643f), (0x3b6d, 0x0646c), (0x3b6e, 0x0646b), (0x3b6f, 0x06459),
    (0x3b70, 0x06465), (0x3b71, 0x06477), (0x3b72, 0x06573), (0x3b73, 0x065a0), (0x3b74, 0x066a1), (0x3b75, 0x066a0),
    (0x3b76, 0x0669f), (0x3b77, 0x06705), (0x3b78, 0x06704), (0x3b79, 0x06722), (0x3b7a, 0x069b1), (0x3b7b, 0x069b6),
    (0x3b7c, 0x069c9), (0x3b7d, 0x069a0), (0x3b7e, 0x069ce), (0x3b7f, 0x06996), (0x3b80, 0x069b0), (0x3b81, 0x069ac),
    (0x3b82, 0x069bc), (0x3b83, 0x06991), (0x3b84, 0x06999), (0x3b85, 0x0698e), (0x3b86, 0x069a7), (0x3b87, 0x0698d),
    (0x3b88, 0x069a9), (0x3b89, 0x069be), (0x3b8a, 0x069af), (0x3b8b, 0x069bf), (0x3b8c, 0x069c4), (0x3b8d, 0x069bd),
    (0x3b8e, 0x069a4), (0x3b8f, 0x069d4), (0x3b90, 0x069b9), (0x3b91, 0x069ca), (0x3b92, 0x0699a), (0x3b93, 0x069cf),
    (0x3b94, 0x069b3), (0x3b95, 0x06993), (0x3b96, 0x069aa), (0x3b97, 0x069a1), (0x3b98, 0x0699e), (0x3b99, 0x069d9),
    (0x3b9a, 0x06997), (0x3b9b, 0x06990), (0x3b9c, 0x069c2), (0x3b9d, 0x069b5), (0x3b9e, 0x069a5), (0x3b9f, 0x069c6),
    (0x3ba0, 0x06b4a), (0x3ba1, 0x06b4d), (0x3ba2, 0x06b4b), (0x3ba3, 0x06b9e), (0x3ba4, 0x06b9f), (0x3ba5, 0x06ba0),
    (0x3ba6, 0x06bc3), (0x3ba7, 0x06bc4), (0x3ba8, 0x06bfe), (0x3ba9, 0x06ece), (0x3baa, 0x06ef5), (0x3bab, 0x06ef1),
    (0x3bac, 0x06f03), (0x3bad, 0x06f25), (0x3bae, 0x06ef8), (0x3baf, 0x06f37), (0x3bb0, 0x06efb), (0x3bb1, 0x06f2e),
    (0x3bb2, 0x06f09), (0x3bb3, 0x06f4e), (0x3bb4, 0x06f19), (0x3bb5, 0x06f1a), (0x3bb6, 0x06f27), (0x3bb7, 0x06f18),
    (0x3bb8, 0x06f3b), (0x3bb9, 0x06f12), (0x3bba, 0x06eed), (0x3bbb, 0x06f0a), (0x3bbc, 0x06f36), (0x3bbd, 0x06f73),
    (0x3bbe, 0x06ef9), (0x3bbf, 0x06eee), (0x3bc0, 0x06f2d), (0x3bc1, 0x06f40), (0x3bc2, 0x06f30), (0x3bc3, 0x06f3c),
    (0x3bc4, 0x06f35), (0x3bc5, 0x06eeb), (0x3bc6, 0x06f07), (0x3bc7, 0x06f0e), (0x3bc8, 0x06f43), (0x3bc9, 0x06f05),
    (0x3bca, 0x06efd), (0x3bcb, 0x06ef6), (0x3bcc, 0x06f39), (0x3bcd, 0x06f1c), (0x3bce, 0x06efc), (0x3bcf, 0x06f3a),
    (0x3bd0, 0x06f1f), (0x3bd1, 0x06f0d), (0x3bd2, 0x06f1e), (0x3bd3, 0x06f08), (0x3bd4, 0x06f21), (0x3bd5, 0x07187),
    (0x3bd6, 0x07190), (0x3bd7, 0x07189), (0x3bd8, 0x07180), (0x3bd9, 0x07185), (0x3bda, 0x07182), (0x3bdb, 0x0718f),
    (0x3bdc, 0x0717b), (0x3bdd, 0x07186), (0x3bde, 0x07181), (0x3bdf, 0x07197), (0x3be0, 0x07244), (0x3be1, 0x07253),
    (0x3be2, 0x07297), (0x3be3, 0x07295), (0x3be4, 0x07293), (0x3be5, 0x07343), (0x3be6, 0x0734d), (0x3be7, 0x07351),
    (0x3be8, 0x0734c), (0x3be9, 0x07462), (0x3bea, 0x07473), (0x3beb, 0x07471), (0x3bec, 0x07475), (0x3bed, 0x07472),
    (0x3bee, 0x07467), (0x3bef, 0x0746e), (0x3bf0, 0x07500), (0x3bf1, 0x07502), (0x3bf2, 0x07503), (0x3bf3, 0x0757d),
    (0x3bf4, 0x07590), (0x3bf5, 0x07616), (0x3bf6, 0x07608), (0x3bf7, 0x0760c), (0x3bf8, 0x07615), (0x3bf9, 0x07611),
    (0x3bfa, 0x0760a), (0x3bfb, 0x07614), (0x3bfc, 0x076b8), (0x3bfd, 0x07781), (0x3bfe, 0x0777c), (0x3bff, 0x07785),
    (0x3c00, 0x07782), (0x3c01, 0x0776e), (0x3c02, 0x07780), (0x3c03, 0x0776f), (0x3c04, 0x0777e), (0x3c05, 0x07783),
    (0x3c06, 0x078b2), (0x3c07, 0x078aa), (0x3c08, 0x078b4), (0x3c09, 0x078ad), (0x3c0a, 0x078a8), (0x3c0b, 0x0787e),
    (0x3c0c, 0x078ab), (0x3c0d, 0x0789e), (0x3c0e, 0x078a5), (0x3c0f, 0x078a0), (0x3c10, 0x078ac), (0x3c11, 0x078a2),
    (0x3c12, 0x078a4), (0x3c13, 0x07998), (0x3c14, 0x0798a), (0x3c15, 0x0798b), (0x3c16, 0x07996), (0x3c17, 0x07995),
    (0x3c18, 0x07994), (0x3c19, 0x07993), (0x3c1a, 0x07997), (0x3c1b, 0x07988), (0x3c1c, 0x07992), (0x3c1d, 0x07990),
    (0x3c1e, 0x07a2b), (0x3c1f, 0x07a4a), (0x3c20, 0x07a30), (0x3c21, 0x07a2f), (0x3c22, 0x07a28), (0x3c23, 0x07a26),
    (0x3c24, 0x07aa8), (0x3c25, 0x07aab), (0x3c26, 0x07aac), (0x3c27, 0x07aee), (0x3c28, 0x07b88), (0x3c29, 0x07b9c),
    (0x3c2a, 0x07b8a), (0x3c2b, 0x07b91), (0x3c2c, 0x07b90), (0x3c2d, 0x07b96), (0x3c2e, 0x07b8d), (0x3c2f, 0x07b8c),
    (0x3c30, 0x07b9b), (0x3c31, 0x07b8e), (0x3c32, 0x07b85), (0x3c33, 0x07b98), (0x3c34, 0x05284), (0x3c35, 0x07b99),
    (0x3c36, 0x07ba4), (0x3c37, 0x07b82), (0x3c38, 0x07cbb), (0x3c39, 0x07cbf), (0x3c3a, 0x07cbc), (0x3c3b, 0x07cba),
    (0x3c3c, 0x07da7), (0x3c3d, 0x07db7), (0x3c3e, 0x07dc2), (0x3c3f, 0x07da3), (0x3c40, 0x07daa), (0x3c41, 0x07dc1),
    (0x3c42, 0x07dc0), (0x3c43, 0x07dc5), (0x3c44, 0x07d9d), (0x3c45, 0x07dce), (0x3c46, 0x07dc4), (0x3c47, 0x07dc6),
    (0x3c48, 0x07dcb), (0x3c49, 0x07dcc), (0x3c4a, 0x07daf), (0x3c4b, 0x07db9), (0x3c4c, 0x07d96), (0x3c4d, 0x07dbc),
    (0x3c4e, 0x07d9f), (0x3c4f, 0x07da6), (0x3c50, 0x07dae), (0x3c51, 0x07da9), (0x3c52, 0x07da1), (0x3c53, 0x07dc9),
    (0x3c54, 0x07f73), (0x3c55, 0x07fe2), (0x3c56, 0x07fe3), (0x3c57, 0x07fe5), (0x3c58, 0x07fde), (0x3c59, 0x08024),
    (0x3c5a, 0x0805d), (0x3c5b, 0x0805c), (0x3c5c, 0x08189), (0x3c5d, 0x08186), (0x3c5e, 0x08183), (0x3c5f, 0x08187),
    (0x3c60, 0x0818d), (0x3c61, 0x0818c), (0x3c62, 0x0818b), (0x3c63, 0x08215), (0x3c64, 0x08497), (0x3c65, 0x084a4),
    (0x3c66, 0x084a1), (0x3c67, 0x0849f), (0x3c68, 0x084ba), (0x3c69, 0x084ce), (0x3c6a, 0x084c2), (0x3c6b, 0x084ac),
    (0x3c6c, 0x084ae), (0x3c6d, 0x084ab), (0x3c6e, 0x084b9), (0x3c6f, 0x084b4), (0x3c70, 0x084c1), (0x3c71, 0x084cd),
    (0x3c72, 0x084aa), (0x3c73, 0x0849a), (0x3c74, 0x084b1), (0x3c75, 0x084d0), (0x3c76, 0x0849d), (0x3c77, 0x084a7),
    (0x3c78, 0x084bb), (0x3c79, 0x084a2), (0x3c7a, 0x08494), (0x3c7b, 0x084c7), (0x3c7c, 0x084cc), (0x3c7d, 0x0849b),
    (0x3c7e, 0x084a9), (0x3c7f, 0x084af), (0x3c80, 0x084a8), (0x3c81, 0x084d6), (0x3c82, 0x08498), (0x3c83, 0x084b6),
    (0x3c84, 0x084cf), (0x3c85, 0x084a0), (0x3c86, 0x084d7), (0x3c87, 0x084d4), (0x3c88, 0x084d2), (0x3c89, 0x084db),
    (0x3c8a, 0x084b0), (0x3c8b, 0x08491), (0x3c8c, 0x08661), (0x3c8d, 0x08733), (0x3c8e, 0x08723), (0x3c8f, 0x08728),
    (0x3c90, 0x0876b), (0x3c91, 0x08740), (0x3c92, 0x0872e), (0x3c93, 0x0871e), (0x3c94, 0x08721), (0x3c95, 0x08719),
    (0x3c96, 0x0871b), (0x3c97, 0x08743), (0x3c98, 0x0872c), (0x3c99, 0x08741), (0x3c9a, 0x0873e), (0x3c9b, 0x08746),
    (0x3c9c, 0x08720), (0x3c9d, 0x08732), (0x3c9e, 0x0872a), (0x3c9f, 0x0872d), (0x3ca0, 0x0873c), (0x3ca1, 0x08712),
    (0x3ca2, 0x0873a), (0x3ca3, 0x08731), (0x3ca4, 0x08735), (0x3ca5, 0x08742), (0x3ca6, 0x08726), (0x3ca7, 0x08727),
    (0x3ca8, 0x08738), (0x3ca9, 0x08724), (0x3caa, 0x0871a), (0x3cab, 0x08730), (0x3cac, 0x08711), (0x3cad, 0x088f7),
    (0x3cae, 0x088e7), (0x3caf, 0x088f1), (0x3cb0, 0x088f2), (0x3cb1, 0x088fa), (0x3cb2, 0x088fe), (0x3cb3, 0x088ee),
    (0x3cb4, 0x088fc), (0x3cb5, 0x088f6), (0x3cb6, 0x088fb), (0x3cb7, 0x088f0), (0x3cb8, 0x088ec), (0x3cb9, 0x088eb),
    (0x3cba, 0x0899d), (0x3cbb, 0x089a1), (0x3cbc, 0x0899f), (0x3cbd, 0x0899e), (0x3cbe, 0x089e9), (0x3cbf, 0x089eb),
    (0x3cc0, 0x089e8), (0x3cc1, 0x08aab), (0x3cc2, 0x08a99), (0x3cc3, 0x08a8b), (0x3cc4, 0x08a92), (0x3cc5, 0x08a8f),
    (0x3cc6, 0x08a96), (0x3cc7, 0x08c3d), (0x3cc8, 0x08c68), (0x3cc9, 0x08c69), (0x3cca, 0x08cd5), (0x3ccb, 0x08ccf),
    (0x3ccc, 0x08cd7), (0x3ccd, 0x08d96), (0x3cce, 0x08e09), (0x3ccf, 0x08e02), (0x3cd0, 0x08dff), (0x3cd1, 0x08e0d),
    (0x3cd2, 0x08dfd), (0x3cd3, 0x08e0a), (0x3cd4, 0x08e03), (0x3cd5, 0x08e07), (0x3cd6, 0x08e06), (0x3cd7, 0x08e05),
    (0x3cd8, 0x08dfe), (0x3cd9, 0x08e00), (0x3cda, 0x08e04), (0x3cdb, 0x08f10), (0x3cdc, 0x08f11), (0x3cdd, 0x08f0e),
    (0x3cde, 0x08f0d), (0x3cdf, 0x09123), (0x3ce0, 0x0911c), (0x3ce1, 0x09120), (0x3ce2, 0x09122), (0x3ce3, 0x0911f),
    (0x3ce4, 0x0911d), (0x3ce5, 0x0911a), (0x3ce6, 0x09124), (0x3ce7, 0x09121), (0x3ce8, 0x0911b), (0x3ce9, 0x0917a),
    (0x3cea, 0x09172), (0x3ceb, 0x09179), (0x3cec, 0x09173), (0x3ced, 0x092a5), (0x3cee, 0x092a4), (0x3cef, 0x09276),
    (0x3cf0, 0x0929b), (0x3cf1, 0x0927a), (0x3cf2, 0x092a0), (0x3cf3, 0x09294), (0x3cf4, 0x092aa), (0x3cf5, 0x0928d),
    (0x3cf6, 0x092a6), (0x3cf7, 0x0929a), (0x3cf8, 0x092ab), (0x3cf9, 0x09279), (0x3cfa, 0x09297), (0x3cfb, 0x0927f),
    (0x3cfc, 0x092a3), (0x3cfd, 0x092ee), (0x3cfe, 0x0928e), (0x3cff, 0x09282), (0x3d00, 0x09295), (0x3d01, 0x092a2),
    (0x3d02, 0x0927d), (0x3d03, 0x09288), (0x3d04, 0x092a1), (0x3d05, 0x0928a), (0x3d06, 0x09286), (0x3d07, 0x0928c),
    (0x3d08, 0x09299), (0x3d09, 0x092a7), (0x3d0a, 0x0927e), (0x3d0b, 0x09287), (0x3d0c, 0x092a9), (0x3d0d, 0x0929d),
    (0x3d0e, 0x0928b), (0x3d0f, 0x0922d), (0x3d10, 0x0969e), (0x3d11, 0x096a1), (0x3d12, 0x096ff), (0x3d13, 0x09758),
    (0x3d14, 0x0977d), (0x3d15, 0x0977a), (0x3d16, 0x0977e), (0x3d17, 0x09783), (0x3d18, 0x09780), (0x3d19, 0x09782),
    (0x3d1a, 0x0977b), (0x3d1b, 0x09784), (0x3d1c, 0x09781), (0x3d1d, 0x0977f), (0x3d1e, 0x097ce), (0x3d1f, 0x097cd),
    (0x3d20, 0x09816), (0x3d21, 0x098ad), (0x3d22, 0x098ae), (0x3d23, 0x09902), (0x3d24, 0x09900), (0x3d25, 0x09907),
    (0x3d26, 0x0999d), (0x3d27, 0x0999c), (0x3d28, 0x099c3), (0x3d29, 0x099b9), (0x3d2a, 0x099bb), (0x3d2b, 0x099ba),
    (0x3d2c, 0x099c2), (0x3d2d, 0x099bd), (0x3d2e, 0x099c7), (0x3d2f, 0x09ab1), (0x3d30, 0x09ae3), (0x3d31, 0x09ae7),
    (0x3d32, 0x09b3e), (0x3d33, 0x09b3f), (0x3d34, 0x09b60), (0x3d35, 0x09b61), (0x3d36, 0x09b5f), (0x3d37, 0x09cf1),
    (0x3d38, 0x09cf2), (0x3d39, 0x09cf5), (0x3d3a, 0x09ea7), (0x3d3b, 0x050ff), (0x3d3c, 0x05103), (0x3d3d, 0x05130),
    (0x3d3e, 0x050f8), (0x3d3f, 0x05106), (0x3d40, 0x05107), (0x3d41, 0x050f6), (0x3d42, 0x050fe), (0x3d43, 0x0510b),
    (0x3d44, 0x0510c), (0x3d45, 0x050fd), (0x3d46, 0x0510a), (0x3d47, 0x0528b), (0x3d48, 0x0528c), (0x3d49, 0x052f1),
    (0x3d4a, 0x052ef), (0x3d4b, 0x05648), (0x3d4c, 0x05642), (0x3d4d, 0x0564c), (0x3d4e, 0x05635), (0x3d4f, 0x05641),
    (0x3d50, 0x0564a), (0x3d51, 0x05649), (0x3d52, 0x05646), (0x3d53, 0x05658), (0x3d54, 0x0565a), (0x3d55, 0x05640),
    (0x3d56, 0x05633), (0x3d57, 0x0563d), (0x3d58, 0x0562c), (0x3d59, 0x0563e), (0x3d5a, 0x05638), (0x3d5b, 0x0562a),
    (0x3d5c, 0x0563a), (0x3d5d, 0x0571a), (0x3d5e, 0x058ab), (0x3d5f, 0x0589d), (0x3d60, 0x058b1), (0x3d61, 0x058a0),
    (0x3d62, 0x058a3), (0x3d63, 0x058af), (0x3d64, 0x058ac), (0x3d65, 0x058a5), (0x3d66, 0x058a1), (0x3d67, 0x058ff),
    (0x3d68, 0x05aff), (0x3d69, 0x05af4), (0x3d6a, 0x05afd), (0x3d6b, 0x05af7), (0x3d6c, 0x05af6), (0x3d6d, 0x05b03),
    (0x3d6e, 0x05af8), (0x3d6f, 0x05b02), (0x3d70, 0x05af9), (0x3d71, 0x05b01), (0x3d72, 0x05b07), (0x3d73, 0x05b05),
    (0x3d74, 0x05b0f), (0x3d75, 0x05c67), (0x3d76, 0x05d99), (0x3d77, 0x05d97), (0x3d78, 0x05d9f), (0x3d79, 0x05d92),
    (0x3d7a, 0x05da2), (0x3d7b, 0x05d93), (0x3d7c, 0x05d95), (0x3d7d, 0x05da0), (0x3d7e, 0x05d9c), (0x3d7f, 0x05da1),
    (0x3d80, 0x05d9a), (0x3d81, 0x05d9e), (0x3d82, 0x05e69), (0x3d83, 0x05e5d), (0x3d84, 0x05e60), (0x3d85, 0x05e5c),
    (0x3d86, 0x07df3), (0x3d87, 0x05edb), (0x3d88, 0x05ede), (0x3d89, 0x05ee1), (0x3d8a, 0x05f49), (0x3d8b, 0x05fb2),
    (0x3d8c, 0x0618b), (0x3d8d, 0x06183), (0x3d8e, 0x06179), (0x3d8f, 0x061b1), (0x3d90, 0x061b0), (0x3d91, 0x061a2),
    (0x3d92, 0x06189), (0x3d93, 0x0619b), (0x3d94, 0x06193), (0x3d95, 0x061af), (0x3d96, 0x061ad), (0x3d97, 0x0619f),
    (0x3d98, 0x06192), (0x3d99, 0x061aa), (0x3d9a, 0x061a1), (0x3d9b, 0x0618d), (0x3d9c, 0x06166), (0x3d9d, 0x061b3),
    (0x3d9e, 0x0622d), (0x3d9f, 0x0646e), (0x3da0, 0x06470), (0x3da1, 0x06496), (0x3da2, 0x064a0), (0x3da3, 0x06485),
    (0x3da4, 0x06497), (0x3da5, 0x0649c), (0x3da6, 0x0648f), (0x3da7, 0x0648b), (0x3da8, 0x0648a), (0x3da9, 0x0648c),
    (0x3daa, 0x064a3), (0x3dab, 0x0649f), (0x3dac, 0x06468), (0x3dad, 0x064b1), (0x3dae, 0x06498), (0x3daf, 0x06576),
    (0x3db0, 0x0657a), (0x3db1, 0x06579), (0x3db2, 0x0657b), (0x3db3, 0x065b2), (0x3db4, 0x065b3), (0x3db5, 0x066b5),
    (0x3db6, 0x066b0), (0x3db7, 0x066a9), (0x3db8, 0x066b2), (0x3db9, 0x066b7), (0x3dba, 0x066aa), (0x3dbb, 0x066af),
    (0x3dbc, 0x06a00), (0x3dbd, 0x06a06), (0x3dbe, 0x06a17), (0x3dbf, 0x069e5), (0x3dc0, 0x069f8), (0x3dc1, 0x06a15),
    (0x3dc2, 0x069f1), (0x3dc3, 0x069e4), (0x3dc4, 0x06a20), (0x3dc5, 0x069ff), (0x3dc6, 0x069ec), (0x3dc7, 0x069e2),
    (0x3dc8, 0x06a1b), (0x3dc9, 0x06a1d), (0x3dca, 0x069fe), (0x3dcb, 0x06a27), (0x3dcc, 0x069f2), (0x3dcd, 0x069ee),
    (0x3dce, 0x06a14), (0x3dcf, 0x069f7), (0x3dd0, 0x069e7), (0x3dd1, 0x06a40), (0x3dd2, 0x06a08), (0x3dd3, 0x069e6),
    (0x3dd4, 0x069fb), (0x3dd5, 0x06a0d), (0x3dd6, 0x069fc), (0x3dd7, 0x069eb), (0x3dd8, 0x06a09), (0x3dd9, 0x06a04),
    (0x3dda, 0x06a18), (0x3ddb, 0x06a25), (0x3ddc, 0x06a0f), (0x3ddd, 0x069f6), (0x3dde, 0x06a26), (0x3ddf, 0x06a07),
    (0x3de0, 0x069f4), (0x3de1, 0x06a16), (0x3de2, 0x06b51), (0x3de3, 0x06ba5), (0x3de4, 0x06ba3), (0x3de5, 0x06ba2),
    (0x3de6, 0x06ba6), (0x3de7, 0x06c01), (0x3de8, 0x06c00), (0x3de9, 0x06bff), (0x3dea, 0x06c02), (0x3deb, 0x06f41),
    (0x3dec, 0x06f26), (0x3ded, 0x06f7e), (0x3dee, 0x06f87), (0x3def, 0x06fc6), (0x3df0, 0x06f92), (0x3df1, 0x06f8d),
    (0x3df2, 0x06f89), (0x3df3, 0x06f8c), (0x3df4, 0x06f62), (0x3df5, 0x06f4f), (0x3df6, 0x06f85), (0x3df7, 0x06f5a),
    (0x3df8, 0x06f96), (0x3df9, 0x06f76), (0x3dfa, 0x06f6c), (0x3dfb, 0x06f82), (0x3dfc, 0x06f55), (0x3dfd, 0x06f72),
    (0x3dfe, 0x06f52), (0x3dff, 0x06f50), (0x3e00, 0x06f57), (0x3e01, 0x06f94), (0x3e02, 0x06f93), (0x3e03, 0x06f5d),
    (0x3e04, 0x06f00), (0x3e05, 0x06f61), (0x3e06, 0x06f6b), (0x3e07, 0x06f7d), (0x3e08, 0x06f67), (0x3e09, 0x06f90),
    (0x3e0a, 0x06f53), (0x3e0b, 0x06f8b), (0x3e0c, 0x06f69), (0x3e0d, 0x06f7f), (0x3e0e, 0x06f95), (0x3e0f, 0x06f63),
    (0x3e10, 0x06f77), (0x3e11, 0x06f6a), (0x3e12, 0x06f7b), (0x3e13, 0x071b2), (0x3e14, 0x071af), (0x3e15, 0x0719b),
    (0x3e16, 0x071b0), (0x3e17, 0x071a0), (0x3e18, 0x0719a), (0x3e19, 0x071a9), (0x3e1a, 0x071b5), (0x3e1b, 0x0719d),
    (0x3e1c, 0x071a5), (0x3e1d, 0x0719e), (0x3e1e, 0x071a4), (0x3e1f, 0x071a1), (0x3e20, 0x071aa), (0x3e21, 0x0719c),
    (0x3e22, 0x071a7), (0x3e23, 0x071b3), (0x3e24, 0x07298), (0x3e25, 0x0729a), (0x3e26, 0x07358), (0x3e27, 0x07352),
    (0x3e28, 0x0735e), (0x3e29, 0x0735f), (0x3e2a, 0x07360), (0x3e2b, 0x0735d), (0x3e2c, 0x0735b), (0x3e2d, 0x07361),
    (0x3e2e, 0x0735a), (0x3e2f, 0x07359), (0x3e30, 0x07362), (0x3e31, 0x07487), (0x3e32, 0x07489), (0x3e33, 0x0748a),
    (0x3e34, 0x07486), (0x3e35, 0x07481), (0x3e36, 0x0747d), (0x3e37, 0x07485), (0x3e38, 0x07488), (0x3e39, 0x0747c),
    (0x3e3a, 0x07479), (0x3e3b, 0x07508), (0x3e3c, 0x07507), (0x3e3d, 0x0757e), (0x3e3e, 0x07625), (0x3e3f, 0x0761e),
    (0x3e40, 0x07619), (0x3e41, 0x0761d), (0x3e42, 0x0761c), (0x3e43, 0x07623), (0x3e44, 0x0761a), (0x3e45, 0x07628),
    (0x3e46, 0x0761b), (0x3e47, 0x0769c), (0x3e48, 0x0769d), (0x3e49, 0x0769e), (0x3e4a, 0x0769b), (0x3e4b, 0x0778d),
    (0x3e4c, 0x0778f), (0x3e4d, 0x07789), (0x3e4e, 0x07788), (0x3e4f, 0x078cd), (0x3e50, 0x078bb), (0x3e51, 0x078cf),
    (0x3e52, 0x078cc), (0x3e53, 0x078d1), (0x3e54, 0x078ce), (0x3e55, 0x078d4), (0x3e56, 0x078c8), (0x3e57, 0x078c3),
    (0x3e58, 0x078c4), (0x3e59, 0x078c9), (0x3e5a, 0x0799a), (0x3e5b, 0x079a1), (0x3e5c, 0x079a0), (0x3e5d, 0x0799c),
    (0x3e5e, 0x079a2), (0x3e5f, 0x0799b), (0x3e60, 0x06b76), (0x3e61, 0x07a39), (0x3e62, 0x07ab2), (0x3e63, 0x07ab4),
    (0x3e64, 0x07ab3), (0x3e65, 0x07bb7), (0x3e66, 0x07bcb), (0x3e67, 0x07bbe), (0x3e68, 0x07bac), (0x3e69, 0x07bce),
    (0x3e6a, 0x07baf), (0x3e6b, 0x07bb9), (0x3e6c, 0x07bca), (0x3e6d, 0x07bb5), (0x3e6e, 0x07cc5), (0x3e6f, 0x07cc8),
    (0x3e70, 0x07ccc), (0x3e71, 0x07ccb), (0x3e72, 0x07df7), (0x3e73, 0x07ddb), (0x3e74, 0x07dea), (0x3e75, 0x07de7),
    (0x3e76, 0x07dd7), (0x3e77, 0x07de1), (0x3e78, 0x07e03), (0x3e79, 0x07dfa), (0x3e7a, 0x07de6), (0x3e7b, 0x07df6),
    (0x3e7c, 0x07df1), (0x3e7d, 0x07df0), (0x3e7e, 0x07dee), (0x3e7f, 0x07ddf), (0x3e80, 0x07f76), (0x3e81, 0x07fac),
    (0x3e82, 0x07fb0), (0x3e83, 0x07fad), (0x3e84, 0x07fed), (0x3e85, 0x07feb), (0x3e86, 0x07fea), (0x3e87, 0x07fec),
    (0x3e88, 0x07fe6), (0x3e89, 0x07fe8), (0x3e8a, 0x08064), (0x3e8b, 0x08067), (0x3e8c, 0x081a3), (0x3e8d, 0x0819f),
    (0x3e8e, 0x0819e), (0x3e8f, 0x08195), (0x3e90, 0x081a2), (0x3e91, 0x08199), (0x3e92, 0x08197), (0x3e93, 0x08216),
    (0x3e94, 0x0824f), (0x3e95, 0x08253), (0x3e96, 0x08252), (0x3e97, 0x08250), (0x3e98, 0x0824e), (0x3e99, 0x08251),
    (0x3e9a, 0x08524), (0x3e9b, 0x0853b), (0x3e9c, 0x0850f), (0x3e9d, 0x08500), (0x3e9e, 0x08529), (0x3e9f, 0x0850e),
    (0x3ea0, 0x08509), (0x3ea1, 0x0850d), (0x3ea2, 0x0851f), (0x3ea3, 0x0850a), (0x3ea4, 0x08527), (0x3ea5, 0x0851c),
    (0x3ea6, 0x084fb), (0x3ea7, 0x0852b), (0x3ea8, 0x084fa), (0x3ea9, 0x08508), (0x3eaa, 0x0850c), (0x3eab, 0x084f4),
    (0x3eac, 0x0852a), (0x3ead, 0x084f2), (0x3eae, 0x08515), (0x3eaf, 0x084f7), (0x3eb0, 0x084eb), (0x3eb1, 0x084f3),
    (0x3eb2, 0x084fc), (0x3eb3, 0x08512), (0x3eb4, 0x084ea), (0x3eb5, 0x084e9), (0x3eb6, 0x08516), (0x3eb7, 0x084fe),
    (0x3eb8, 0x08528), (0x3eb9, 0x0851d), (0x3eba, 0x0852e), (0x3ebb, 0x08502), (0x3ebc, 0x084fd), (0x3ebd, 0x0851e),
    (0x3ebe, 0x084f6), (0x3ebf, 0x08531), (0x3ec0, 0x08526), (0x3ec1, 0x084e7), (0x3ec2, 0x084e8), (0x3ec3, 0x084f0),
    (0x3ec4, 0x084ef), (0x3ec5, 0x084f9), (0x3ec6, 0x08518), (0x3ec7, 0x08520), (0x3ec8, 0x08530), (0x3ec9, 0x0850b),
    (0x3eca, 0x08519), (0x3ecb, 0x0852f), (0x3ecc, 0x08662), (0x3ecd, 0x08756), (0x3ece, 0x08763), (0x3ecf, 0x08764),
    (0x3ed0, 0x08777), (0x3ed1, 0x087e1), (0x3ed2, 0x08773), (0x3ed3, 0x08758), (0x3ed4, 0x08754), (0x3ed5, 0x0875b),
    (0x3ed6, 0x08752), (0x3ed7, 0x08761), (0x3ed8, 0x0875a), (0x3ed9, 0x08751), (0x3eda, 0x0875e), (0x3edb, 0x0876d),
    (0x3edc, 0x0876a), (0x3edd, 0x08750), (0x3ede, 0x0874e), (0x3edf, 0x0875f), (0x3ee0, 0x0875d), (0x3ee1, 0x0876f),
    (0x3ee2, 0x0876c), (0x3ee3, 0x0877a), (0x3ee4, 0x0876e), (0x3ee5, 0x0875c), (0x3ee6, 0x08765), (0x3ee7, 0x0874f),
    (0x3ee8, 0x0877b), (0x3ee9, 0x08775), (0x3eea, 0x08762), (0x3eeb, 0x08767), (0x3eec, 0x08769), (0x3eed, 0x0885a),
    (0x3eee, 0x08905), (0x3eef, 0x0890c), (0x3ef0, 0x08914), (0x3ef1, 0x0890b), (0x3ef2, 0x08917), (0x3ef3, 0x08918),
    (0x3ef4, 0x08919), (0x3ef5, 0x08906), (0x3ef6, 0x08916), (0x3ef7, 0x08911), (0x3ef8, 0x0890e), (0x3ef9, 0x08909),
    (0x3efa, 0x089a2), (0x3efb, 0x089a4), (0x3efc, 0x089a3), (0x3efd, 0x089ed), (0x3efe, 0x089f0), (0x3eff, 0x089ec),
    (0x3f00, 0x08acf), (0x3f01, 0x08ac6), (0x3f02, 0x08ab8), (0x3f03, 0x08ad3), (0x3f04, 0x08ad1), (0x3f05, 0x08ad4),
    (0x3f06, 0x08ad5), (0x3f07, 0x08abb), (0x3f08, 0x08ad7), (0x3f09, 0x08abe), (0x3f0a, 0x08ac0), (0x3f0b, 0x08ac5),
    (0x3f0c, 0x08ad8), (0x3f0d, 0x08ac3), (0x3f0e, 0x08aba), (0x3f0f, 0x08abd), (0x3f10, 0x08ad9), (0x3f11, 0x08c3e),
    (0x3f12, 0x08c4d), (0x3f13, 0x08c8f), (0x3f14, 0x08ce5), (0x3f15, 0x08cdf), (0x3f16, 0x08cd9), (0x3f17, 0x08ce8),
    (0x3f18, 0x08cda), (0x3f19, 0x08cdd), (0x3f1a, 0x08ce7), (0x3f1b, 0x08da0), (0x3f1c, 0x08d9c), (0x3f1d, 0x08da1),
    (0x3f1e, 0x08d9b), (0x3f1f, 0x08e20), (0x3f20, 0x08e23), (0x3f21, 0x08e25), (0x3f22, 0x08e24), (0x3f23, 0x08e2e),
    (0x3f24, 0x08e15), (0x3f25, 0x08e1b), (0x3f26, 0x08e16), (0x3f27, 0x08e11), (0x3f28, 0x08e19), (0x3f29, 0x08e26),
    (0x3f2a, 0x08e27), (0x3f2b, 0x08e14), (0x3f2c, 0x08e12), (0x3f2d, 0x08e18), (0x3f2e, 0x08e13), (0x3f2f, 0x08e1c),
    (0x3f30, 0x08e17), (0x3f31, 0x08e1a), (0x3f32, 0x08f2c), (0x3f33, 0x08f24), (0x3f34, 0x08f18), (0x3f35, 0x08f1a),
    (0x3f36, 0x08f20), (0x3f37, 0x08f23), (0x3f38, 0x08f16), (0x3f39, 0x08f17), (0x3f3a, 0x09073), (0x3f3b, 0x09070),
    (0x3f3c, 0x0906f), (0x3f3d, 0x09067), (0x3f3e, 0x0906b), (0x3f3f, 0x0912f), (0x3f40, 0x0912b), (0x3f41, 0x09129),
    (0x3f42, 0x0912a), (0x3f43, 0x09132), (0x3f44, 0x09126), (0x3f45, 0x0912e), (0x3f46, 0x09185), (0x3f47, 0x09186),
    (0x3f48, 0x0918a), (0x3f49, 0x09181), (0x3f4a, 0x09182), (0x3f4b, 0x09184), (0x3f4c, 0x09180), (0x3f4d, 0x092d0),
    (0x3f4e, 0x092c3), (0x3f4f, 0x092c4), (0x3f50, 0x092c0), (0x3f51, 0x092d9), (0x3f52, 0x092b6), (0x3f53, 0x092cf),
    (0x3f54, 0x092f1), (0x3f55, 0x092df), (0x3f56, 0x092d8), (0x3f57, 0x092e9), (0x3f58, 0x092d7), (0x3f59, 0x092dd),
    (0x3f5a, 0x092cc), (0x3f5b, 0x092ef), (0x3f5c, 0x092c2), (0x3f5d, 0x092e8), (0x3f5e, 0x092ca), (0x3f5f, 0x092c8),
    (0x3f60, 0x092ce), (0x3f61, 0x092e6), (0x3f62, 0x092cd), (0x3f63, 0x092d5), (0x3f64, 0x092c9), (0x3f65, 0x092e0),
    (0x3f66, 0x092de), (0x3f67, 0x092e7), (0x3f68, 0x092d1), (0x3f69, 0x092d3), (0x3f6a, 0x092b5), (0x3f6b, 0x092e1),
    (0x3f6c, 0x092c6), (0x3f6d, 0x092b4), (0x3f6e, 0x0957c), (0x3f6f, 0x095ac), (0x3f70, 0x095ab), (0x3f71, 0x095ae),
    (0x3f72, 0x095b0), (0x3f73, 0x096a4), (0x3f74, 0x096a2), (0x3f75, 0x096d3), (0x3f76, 0x09705), (0x3f77, 0x09708),
    (0x3f78, 0x09702), (0x3f79, 0x0975a), (0x3f7a, 0x0978a), (0x3f7b, 0x0978e), (0x3f7c, 0x09788), (0x3f7d, 0x097d0),
    (0x3f7e, 0x097cf), (0x3f7f, 0x0981e), (0x3f80, 0x0981d), (0x3f81, 0x09826), (0x3f82, 0x09829), (0x3f83, 0x09828),
    (0x3f84, 0x09820), (0x3f85, 0x0981b), (0x3f86, 0x09827), (0x3f87, 0x098b2), (0x3f88, 0x09908), (0x3f89, 0x098fa),
    (0x3f8a, 0x09911), (0x3f8b, 0x09914), (0x3f8c, 0x09916), (0x3f8d, 0x09917), (0x3f8e, 0x09915), (0x3f8f, 0x099dc),
    (0x3f90, 0x099cd), (0x3f91, 0x099cf), (0x3f92, 0x099d3), (0x3f93, 0x099d4), (0x3f94, 0x099ce), (0x3f95, 0x099c9),
    (0x3f96, 0x099d6), (0x3f97, 0x099d8), (0x3f98, 0x099cb), (0x3f99, 0x099d7), (0x3f9a, 0x099cc), (0x3f9b, 0x09ab3),
    (0x3f9c, 0x09aec), (0x3f9d, 0x09aeb), (0x3f9e, 0x09af3), (0x3f9f, 0x09af2), (0x3fa0, 0x09af1), (0x3fa1, 0x09b46),
    (0x3fa2, 0x09b43), (0x3fa3, 0x09b67), (0x3fa4, 0x09b74), (0x3fa5, 0x09b71), (0x3fa6, 0x09b66), (0x3fa7, 0x09b76),
    (0x3fa8, 0x09b75), (0x3fa9, 0x09b70), (0x3faa, 0x09b68), (0x3fab, 0x09b64), (0x3fac, 0x09b6c), (0x3fad, 0x09cfc),
    (0x3fae, 0x09cfa), (0x3faf, 0x09cfd), (0x3fb0, 0x09cff), (0x3fb1, 0x09cf7), (0x3fb2, 0x09d07), (0x3fb3, 0x09d00),
    (0x3fb4, 0x09cf9), (0x3fb5, 0x09cfb), (0x3fb6, 0x09d08), (0x3fb7, 0x09d05), (0x3fb8, 0x09d04), (0x3fb9, 0x09e83),
    (0x3fba, 0x09ed3), (0x3fbb, 0x09f0f), (0x3fbc, 0x09f10), (0x3fbd, 0x0511c), (0x3fbe, 0x05113), (0x3fbf, 0x05117),
    (0x3fc0, 0x0511a), (0x3fc1, 0x05111), (0x3fc2, 0x051de), (0x3fc3, 0x05334), (0x3fc4, 0x053e1), (0x3fc5, 0x05670),
    (0x3fc6, 0x05660), (0x3fc7, 0x0566e), (0x3fc8, 0x05673), (0x3fc9, 0x05666), (0x3fca, 0x05663), (0x3fcb, 0x0566d),
    (0x3fcc, 0x05672), (0x3fcd, 0x0565e), (0x3fce, 0x05677), (0x3fcf, 0x0571c), (0x3fd0, 0x0571b), (0x3fd1, 0x058c8),
    (0x3fd2, 0x058bd), (0x3fd3, 0x058c9), (0x3fd4, 0x058bf), (0x3fd5, 0x058ba), (0x3fd6, 0x058c2), (0x3fd7, 0x058bc),
    (0x3fd8, 0x058c6), (0x3fd9, 0x05b17), (0x3fda, 0x05b19), (0x3fdb, 0x05b1b), (0x3fdc, 0x05b21), (0x3fdd, 0x05b14),
    (0x3fde, 0x05b13), (0x3fdf, 0x05b10), (0x3fe0, 0x05b16), (0x3fe1, 0x05b28), (0x3fe2, 0x05b1a), (0x3fe3, 0x05b20),
    (0x3fe4, 0x05b1e), (0x3fe5, 0x05bef), (0x3fe6, 0x05dac), (0x3fe7, 0x05db1), (0x3fe8, 0x05da9), (0x3fe9, 0x05da7),
    (0x3fea, 0x05db5), (0x3feb, 0x05db0), (0x3fec, 0x05dae), (0x3fed, 0x05daa), (0x3fee, 0x05da8), (0x3fef, 0x05db2),
    (0x3ff0, 0x05dad), (0x3ff1, 0x05daf), (0x3ff2, 0x05db4), (0x3ff3, 0x05e67), (0x3ff4, 0x05e68), (0x3ff5, 0x05e66),
    (0x3ff6, 0x05e6f), (0x3ff7, 0x05ee9), (0x3ff8, 0x05ee7), (0x3ff9, 0x05ee6), (0x3ffa, 0x05ee8), (0x3ffb, 0x05ee5),
    (0x3ffc, 0x05f4b), (0x3ffd, 0x05fbc), (0x3ffe, 0x0619d), (0x3fff, 0x061a8), (0x4000, 0x06196), (0x4001, 0x061c5),
    (0x4002, 0x061b4), (0x4003, 0x061c6), (0x4004, 0x061c1), (0x4005, 0x061cc), (0x4006, 0x061ba), (0x4007, 0x061bf),
    (0x4008, 0x061b8), (0x4009, 0x0618c), (0x400a, 0x064d7), (0x400b, 0x064d6), (0x400c, 0x064d0), (0x400d, 0x064cf),
    (0x400e, 0x064c9), (0x400f, 0x064bd), (0x4010, 0x06489), (0x4011, 0x064c3), (0x4012, 0x064db), (0x4013, 0x064f3),
    (0x4014, 0x064d9), (0x4015, 0x06533), (0x4016, 0x0657f), (0x4017, 0x0657c), (0x4018, 0x065a2), (0x4019, 0x066c8),
    (0x401a, 0x066be), (0x401b, 0x066c0), (0x401c, 0x066ca), (0x401d, 0x066cb), (0x401e, 0x066cf), (0x401f, 0x066bd),
    (0x4020, 0x066bb), (0x4021, 0x066ba), (0x4022, 0x066cc), (0x4023, 0x06723), (0x4024, 0x06a34), (0x4025, 0x06a66),
    (0x4026, 0x06a49), (0x4027, 0x06a67), (0x4028, 0x06a32), (0x4029, 0x06a68), (0x402a, 0x06a3e), (0x402b, 0x06a5d),
    (0x402c, 0x06a6d), (0x402d, 0x06a76), (0x402e, 0x06a5b), (0x402f, 0x06a51), (0x4030, 0x06a28), (0x4031, 0x06a5a),
    (0x4032, 0x06a3b), (0x4033, 0x06a3f), (0x4034, 0x06a41), (0x4035, 0x06a6a), (0x4036, 0x06a64), (0x4037, 0x06a50),
    (0x4038, 0x06a4f), (0x4039, 0x06a54), (0x403a, 0x06a6f), (0x403b, 0x06a69), (0x403c, 0x06a60), (0x403d, 0x06a3c),
    (0x403e, 0x06a5e), (0x403f, 0x06a56), (0x4040, 0x06a55), (0x4041, 0x06a4d), (0x4042, 0x06a4e), (0x4043, 0x06a46),
    (0x4044, 0x06b55), (0x4045, 0x06b54), (0x4046, 0x06b56), (0x4047, 0x06ba7), (0x4048, 0x06baa), (0x4049, 0x06bab),
    (0x404a, 0x06bc8), (0x404b, 0x06bc7), (0x404c, 0x06c04), (0x404d, 0x06c03), (0x404e, 0x06c06), (0x404f, 0x06fad),
    (0x4050, 0x06fcb), (0x4051, 0x06fa3), (0x4052, 0x06fc7), (0x4053, 0x06fbc), (0x4054, 0x06fce), (0x4055, 0x06fc8),
    (0x4056, 0x06f5e), (0x4057, 0x06fc4), (0x4058, 0x06fbd), (0x4059, 0x06f9e), (0x405a, 0x06fca), (0x405b, 0x06fa8),
    (0x405c, 0x07004), (0x405d, 0x06fa5), (0x405e, 0x06fae), (0x405f, 0x06fba), (0x4060, 0x06fac), (0x4061, 0x06faa),
    (0x4062, 0x06fcf), (0x4063, 0x06fbf), (0x4064, 0x06fb8), (0x4065, 0x06fa2), (0x4066, 0x06fc9), (0x4067, 0x06fab),
    (0x4068, 0x06fcd), (0x4069, 0x06faf), (0x406a, 0x06fb2), (0x406b, 0x06fb0), (0x406c, 0x071c5), (0x406d, 0x071c2),
    (0x406e, 0x071bf), (0x406f, 0x071b8), (0x4070, 0x071d6), (0x4071, 0x071c0), (0x4072, 0x071c1), (0x4073, 0x071cb),
    (0x4074, 0x071d4), (0x4075, 0x071ca), (0x4076, 0x071c7), (0x4077, 0x071cf), (0x4078, 0x071bd), (0x4079, 0x071d8),
    (0x407a, 0x071bc), (0x407b, 0x071c6), (0x407c, 0x071da), (0x407d, 0x071db), (0x407e, 0x0729d), (0x407f, 0x0729e),
    (0x4080, 0x07369), (0x4081, 0x07366), (0x4082, 0x07367), (0x4083, 0x0736c), (0x4084, 0x07365), (0x4085, 0x0736b),
    (0x4086, 0x0736a), (0x4087, 0x0747f), (0x4088, 0x0749a), (0x4089, 0x074a0), (0x408a, 0x07494), (0x408b, 0x07492),
    (0x408c, 0x07495), (0x408d, 0x074a1), (0x408e, 0x0750b), (0x408f, 0x07580), (0x4090, 0x0762f), (0x4091, 0x0762d),
    (0x4092, 0x07631), (0x4093, 0x0763d), (0x4094, 0x07633), (0x4095, 0x0763c), (0x4096, 0x07635), (0x4097, 0x07632),
    (0x4098, 0x07630), (0x4099, 0x076bb), (0x409a, 0x076e6), (0x409b, 0x0779a), (0x409c, 0x0779d), (0x409d, 0x077a1),
    (0x409e, 0x0779c), (0x409f, 0x0779b), (0x40a0, 0x077a2), (0x40a1, 0x077a3), (0x40a2, 0x07795), (0x40a3, 0x07799),
    (0x40a4, 0x07797), (0x40a5, 0x078dd), (0x40a6, 0x078e9), (0x40a7, 0x078e5), (0x40a8, 0x078ea), (0x40a9, 0x078de),
    (0x40aa, 0x078e3), (0x40ab, 0x078db), (0x40ac, 0x078e1), (0x40ad, 0x078e2), (0x40ae, 0x078ed), (0x40af, 0x078df),
    (0x40b0, 0x078e0), (0x40b1, 0x079a4), (0x40b2, 0x07a44), (0x40b3, 0x07a48), (0x40b4, 0x07a47), (0x40b5, 0x07ab6),
    (0x40b6, 0x07ab8), (0x40b7, 0x07ab5), (0x40b8, 0x07ab1), (0x40b9, 0x07ab7), (0x40ba, 0x07bde), (0x40bb, 0x07be3),
    (0x40bc, 0x07be7), (0x40bd, 0x07bdd), (0x40be, 0x07bd5), (0x40bf, 0x07be5), (0x40c0, 0x07bda), (0x40c1, 0x07be8),
    (0x40c2, 0x07bf9), (0x40c3, 0x07bd4), (0x40c4, 0x07bea), (0x40c5, 0x07be2), (0x40c6, 0x07bdc), (0x40c7, 0x07beb),
    (0x40c8, 0x07bd8), (0x40c9, 0x07bdf), (0x40ca, 0x07cd2), (0x40cb, 0x07cd4), (0x40cc, 0x07cd7), (0x40cd, 0x07cd0),
    (0x40ce, 0x07cd1), (0x40cf, 0x07e12), (0x40d0, 0x07e21), (0x40d1, 0x07e17), (0x40d2, 0x07e0c), (0x40d3, 0x07e1f),
    (0x40d4, 0x07e20), (0x40d5, 0x07e13), (0x40d6, 0x07e0e), (0x40d7, 0x07e1c), (0x40d8, 0x07e15), (0x40d9, 0x07e1a),
    (0x40da, 0x07e22), (0x40db, 0x07e0b), (0x40dc, 0x07e0f), (0x40dd, 0x07e16), (0x40de, 0x07e0d), (0x40df, 0x07e14),
    (0x40e0, 0x07e25), (0x40e1, 0x07e24), (0x40e2, 0x07f43), (0x40e3, 0x07f7b), (0x40e4, 0x07f7c), (0x40e5, 0x07f7a),
    (0x40e6, 0x07fb1), (0x40e7, 0x07fef), (0x40e8, 0x0802a), (0x40e9, 0x08029), (0x40ea, 0x0806c), (0x40eb, 0x081b1),
    (0x40ec, 0x081a6), (0x40ed, 0x081ae), (0x40ee, 0x081b9), (0x40ef, 0x081b5), (0x40f0, 0x081ab), (0x40f1, 0x081b0),
    (0x40f2, 0x081ac), (0x40f3, 0x081b4), (0x40f4, 0x081b2), (0x40f5, 0x081b7), (0x40f6, 0x081a7), (0x40f7, 0x081f2),
    (0x40f8, 0x08255), (0x40f9, 0x08256), (0x40fa, 0x08257), (0x40fb, 0x08556), (0x40fc, 0x08545), (0x40fd, 0x0856b),
    (0x40fe, 0x0854d), (0x40ff, 0x08553), (0x4100, 0x08561), (0x4101, 0x08558), (0x4102, 0x08540), (0x4103, 0x08546),
    (0x4104, 0x08564), (0x4105, 0x08541), (0x4106, 0x08562), (0x4107, 0x08544), (0x4108, 0x08551), (0x4109, 0x08547),
    (0x410a, 0x08563), (0x410b, 0x0853e), (0x410c, 0x0855b), (0x410d, 0x08571), (0x410e, 0x0854e), (0x410f, 0x0856e),
    (0x4110, 0x08575), (0x4111, 0x08555), (0x4112, 0x08567), (0x4113, 0x08560), (0x4114, 0x0858c), (0x4115, 0x08566),
    (0x4116, 0x0855d), (0x4117, 0x08554), (0x4118, 0x08565), (0x4119, 0x0856c), (0x411a, 0x08663), (0x411b, 0x08665),
    (0x411c, 0x08664), (0x411d, 0x0879b), (0x411e, 0x0878f), (0x411f, 0x08797), (0x4120, 0x08793), (0x4121, 0x08792),
    (0x4122, 0x08788), (0x4123, 0x08781), (0x4124, 0x08796), (0x4125, 0x08798), (0x4126, 0x08779), (0x4127, 0x08787),
    (0x4128, 0x087a3), (0x4129, 0x08785), (0x412a, 0x08790), (0x412b, 0x08791), (0x412c, 0x0879d), (0x412d, 0x08784),
    (0x412e, 0x08794), (0x412f, 0x0879c), (0x4130, 0x0879a), (0x4131, 0x08789), (0x4132, 0x0891e), (0x4133, 0x08926),
    (0x4134, 0x08930), (0x4135, 0x0892d), (0x4136, 0x0892e), (0x4137, 0x08927), (0x4138, 0x08931), (0x4139, 0x08922),
    (0x413a, 0x08929), (0x413b, 0x08923), (0x413c, 0x0892f), (0x413d, 0x0892c), (0x413e, 0x0891f), (0x413f, 0x089f1),
    (0x4140, 0x08ae0), (0x4141, 0x08ae2), (0x4142, 0x08af2), (0x4143, 0x08af4), (0x4144, 0x08af5), (0x4145, 0x08add),
    (0x4146, 0x08b14), (0x4147, 0x08ae4), (0x4148, 0x08adf), (0x4149, 0x08af0), (0x414a, 0x08ac8), (0x414b, 0x08ade),
    (0x414c, 0x08ae1), (0x414d, 0x08ae8), (0x414e, 0x08aff), (0x414f, 0x08aef), (0x4150, 0x08afb), (0x4151, 0x08c91),
    (0x4152, 0x08c92), (0x4153, 0x08c90), (0x4154, 0x08cf5), (0x4155, 0x08cee), (0x4156, 0x08cf1), (0x4157, 0x08cf0),
    (0x4158, 0x08cf3), (0x4159, 0x08d6c), (0x415a, 0x08d6e), (0x415b, 0x08da5), (0x415c, 0x08da7), (0x415d, 0x08e33),
    (0x415e, 0x08e3e), (0x415f, 0x08e38), (0x4160, 0x08e40), (0x4161, 0x08e45), (0x4162, 0x08e36), (0x4163, 0x08e3c),
    (0x4164, 0x08e3d), (0x4165, 0x08e41), (0x4166, 0x08e30), (0x4167, 0x08e3f), (0x4168, 0x08ebd), (0x4169, 0x08f36),
    (0x416a, 0x08f2e), (0x416b, 0x08f35), (0x416c, 0x08f32), (0x416d, 0x08f39), (0x416e, 0x08f37), (0x416f, 0x08f34),
    (0x4170, 0x09076), (0x4171, 0x09079), (0x4172, 0x0907b), (0x4173, 0x09086), (0x4174, 0x090fa), (0x4175, 0x09133),
    (0x4176, 0x09135), (0x4177, 0x09136), (0x4178, 0x09193), (0x4179, 0x09190), (0x417a, 0x09191), (0x417b, 0x0918d),
    (0x417c, 0x0918f), (0x417d, 0x09327), (0x417e, 0x0931e), (0x417f, 0x09308), (0x4180, 0x0931f), (0x4181, 0x09306),
    (0x4182, 0x0930f), (0x4183, 0x0937a), (0x4184, 0x09338), (0x4185, 0x0933c), (0x4186, 0x0931b), (0x4187, 0x09323),
    (0x4188, 0x09312), (0x4189, 0x09301), (0x418a, 0x09346), (0x418b, 0x0932d), (0x418c, 0x0930e), (0x418d, 0x0930d),
    (0x418e, 0x092cb), (0x418f, 0x0931d), (0x4190, 0x092fa), (0x4191, 0x09325), (0x4192, 0x09313), (0x4193, 0x092f9),
    (0x4194, 0x092f7), (0x4195, 0x09334), (0x4196, 0x09302), (0x4197, 0x09324), (0x4198, 0x092ff), (0x4199, 0x09329),
    (0x419a, 0x09339), (0x419b, 0x09335), (0x419c, 0x0932a), (0x419d, 0x09314), (0x419e, 0x0930c), (0x419f, 0x0930b),
    (0x41a0, 0x092fe), (0x41a1, 0x09309), (0x41a2, 0x09300), (0x41a3, 0x092fb), (0x41a4, 0x09316), (0x41a5, 0x095bc),
    (0x41a6, 0x095cd), (0x41a7, 0x095be), (0x41a8, 0x095b9), (0x41a9, 0x095ba), (0x41aa, 0x095b6), (0x41ab, 0x095bf),
    (0x41ac, 0x095b5), (0x41ad, 0x095bd), (0x41ae, 0x096a9), (0x41af, 0x096d4), (0x41b0, 0x0970b), (0x41b1, 0x09712),
    (0x41b2, 0x09710), (0x41b3, 0x09799), (0x41b4, 0x09797), (0x41b5, 0x09794), (0x41b6, 0x097f0), (0x41b7, 0x097f8),
    (0x41b8, 0x09835), (0x41b9, 0x0982f), (0x41ba, 0x09832), (0x41bb, 0x09924), (0x41bc, 0x0991f), (0x41bd, 0x09927),
    (0x41be, 0x09929), (0x41bf, 0x0999e), (0x41c0, 0x099ee), (0x41c1, 0x099ec), (0x41c2, 0x099e5), (0x41c3, 0x099e4),
    (0x41c4, 0x099f0), (0x41c5, 0x099e3), (0x41c6, 0x099ea), (0x41c7, 0x099e9), (0x41c8, 0x099e7), (0x41c9, 0x09ab9),
    (0x41ca, 0x09abf), (0x41cb, 0x09ab4), (0x41cc, 0x09abb), (0x41cd, 0x09af6), (0x41ce, 0x09afa), (0x41cf, 0x09af9),
    (0x41d0, 0x09af7), (0x41d1, 0x09b33), (0x41d2, 0x09b80), (0x41d3, 0x09b85), (0x41d4, 0x09b87), (0x41d5, 0x09b7c),
    (0x41d6, 0x09b7e), (0x41d7, 0x09b7b), (0x41d8, 0x09b82), (0x41d9, 0x09b93), (0x41da, 0x09b92), (0x41db, 0x09b90),
    (0x41dc, 0x09b7a), (0x41dd, 0x09b95), (0x41de, 0x09b7d), (0x41df, 0x09b88), (0x41e0, 0x09d25), (0x41e1, 0x09d17),
    (0x41e2, 0x09d20), (0x41e3, 0x09d1e), (0x41e4, 0x09d14), (0x41e5, 0x09d29), (0x41e6, 0x09d1d), (0x41e7, 0x09d18),
    (0x41e8, 0x09d22), (0x41e9, 0x09d10), (0x41ea, 0x09d19), (0x41eb, 0x09d1f), (0x41ec, 0x09e88), (0x41ed, 0x09e86),
    (0x41ee, 0x09e87), (0x41ef, 0x09eae), (0x41f0, 0x09ead), (0x41f1, 0x09ed5), (0x41f2, 0x09ed6), (0x41f3, 0x09efa),
    (0x41f4, 0x09f12), (0x41f5, 0x09f3d), (0x41f6, 0x05126), (0x41f7, 0x05125), (0x41f8, 0x05122), (0x41f9, 0x05124),
    (0x41fa, 0x05120), (0x41fb, 0x05129), (0x41fc, 0x052f4), (0x41fd, 0x05693), (0x41fe, 0x0568c), (0x41ff, 0x0568d),
    (0x4200, 0x05686), (0x4201, 0x05684), (0x4202, 0x05683), (0x4203, 0x0567e), (0x4204, 0x05682), (0x4205, 0x0567f),
    (0x4206, 0x05681), (0x4207, 0x058d6), (0x4208, 0x058d4), (0x4209, 0x058cf), (0x420a, 0x058d2), (0x420b, 0x05b2d),
    (0x420c, 0x05b25), (0x420d, 0x05b32), (0x420e, 0x05b23), (0x420f, 0x05b2c), (0x4210, 0x05b27), (0x4211, 0x05b26),
    (0x4212, 0x05b2f), (0x4213, 0x05b2e), (0x4214, 0x05b7b), (0x4215, 0x05bf1), (0x4216, 0x05bf2), (0x4217, 0x05db7),
    (0x4218, 0x05e6c), (0x4219, 0x05e6a), (0x421a, 0x05fbe), (0x421b, 0x05fbb), (0x421c, 0x061c3), (0x421d, 0x061b5),
    (0x421e, 0x061bc), (0x421f, 0x061e7), (0x4220, 0x061e0), (0x4221, 0x061e5), (0x4222, 0x061e4), (0x4223, 0x061e8),
    (0x4224, 0x061de), (0x4225, 0x064ef), (0x4226, 0x064e9), (0x4227, 0x064e3), (0x4228, 0x064eb), (0x4229, 0x064e4),
    (0x422a, 0x064e8), (0x422b, 0x06581), (0x422c, 0x06580), (0x422d, 0x065b6), (0x422e, 0x065da), (0x422f, 0x066d2),
    (0x4230, 0x06a8d), (0x4231, 0x06a96), (0x4232, 0x06a81), (0x4233, 0x06aa5), (0x4234, 0x06a89), (0x4235, 0x06a9f),
    (0x4236, 0x06a9b), (0x4237, 0x06aa1), (0x4238, 0x06a9e), (0x4239, 0x06a87), (0x423a, 0x06a93), (0x423b, 0x06a8e),
    (0x423c, 0x06a95), (0x423d, 0x06a83), (0x423e, 0x06aa8), (0x423f, 0x06aa4), (0x4240, 0x06a91), (0x4241, 0x06a7f),
    (0x4242, 0x06aa6), (0x4243, 0x06a9a), (0x4244, 0x06a85), (0x4245, 0x06a8c), (0x4246, 0x06a92), (0x4247, 0x06b5b),
    (0x4248, 0x06bad), (0x4249, 0x06c09), (0x424a, 0x06fcc), (0x424b, 0x06fa9), (0x424c, 0x06ff4), (0x424d, 0x06fd4),
    (0x424e, 0x06fe3), (0x424f, 0x06fdc), (0x4250, 0x06fed), (0x4251, 0x06fe7), (0x4252, 0x06fe6), (0x4253, 0x06fde),
    (0x4254, 0x06ff2), (0x4255, 0x06fdd), (0x4256, 0x06fe2), (0x4257, 0x06fe8), (0x4258, 0x071e1), (0x4259, 0x071f1),
    (0x425a, 0x071e8), (0x425b, 0x071f2), (0x425c, 0x071e4), (0x425d, 0x071f0), (0x425e, 0x071e2), (0x425f, 0x07373),
    (0x4260, 0x0736e), (0x4261, 0x0736f), (0x4262, 0x07497), (0x4263, 0x074b2), (0x4264, 0x074ab), (0x4265, 0x07490),
    (0x4266, 0x074aa), (0x4267, 0x074ad), (0x4268, 0x074b1), (0x4269, 0x074a5), (0x426a, 0x074af), (0x426b, 0x07510),
    (0x426c, 0x07511), (0x426d, 0x07512), (0x426e, 0x0750f), (0x426f, 0x07584), (0x4270, 0x07643), (0x4271, 0x07648),
    (0x4272, 0x07649), (0x4273, 0x07647), (0x4274, 0x076a4), (0x4275, 0x076e9), (0x4276, 0x077b5), (0x4277, 0x077ab),
    (0x4278, 0x077b2), (0x4279, 0x077b7), (0x427a, 0x077b6), (0x427b, 0x077b4), (0x427c, 0x077b1), (0x427d, 0x077a8),
    (0x427e, 0x077f0), (0x427f, 0x078f3), (0x4280, 0x078fd), (0x4281, 0x07902), (0x4282, 0x078fb), (0x4283, 0x078fc),
    (0x4284, 0x078f2), (0x4285, 0x07905), (0x4286, 0x078f9), (0x4287, 0x078fe), (0x4288, 0x07904), (0x4289, 0x079ab),
    (0x428a, 0x079a8), (0x428b, 0x07a5c), (0x428c, 0x07a5b), (0x428d, 0x07a56), (0x428e, 0x07a58), (0x428f, 0x07a54),
    (0x4290, 0x07a5a), (0x4291, 0x07abe), (0x4292, 0x07ac0), (0x4293, 0x07ac1), (0x4294, 0x07c05), (0x4295, 0x07c0f),
    (0x4296, 0x07bf2), (0x4297, 0x07c00), (0x4298, 0x07bff), (0x4299, 0x07bfb), (0x429a, 0x07c0e), (0x429b, 0x07bf4),
    (0x429c, 0x07c0b), (0x429d, 0x07bf3), (0x429e, 0x07c02), (0x429f, 0x07c09), (0x42a0, 0x07c03), (0x42a1, 0x07c01),
    (0x42a2, 0x07bf8), (0x42a3, 0x07bfd), (0x42a4, 0x07c06), (0x42a5, 0x07bf0), (0x42a6, 0x07bf1), (0x42a7, 0x07c10),
    (0x42a8, 0x07c0a), (0x42a9, 0x07ce8), (0x42aa, 0x07e2d), (0x42ab, 0x07e3c), (0x42ac, 0x07e42), (0x42ad, 0x07e33),
    (0x42ae, 0x09848), (0x42af, 0x07e38), (0x42b0, 0x07e2a), (0x42b1, 0x07e49), (0x42b2, 0x07e40), (0x42b3, 0x07e47),
    (0x42b4, 0x07e29), (0x42b5, 0x07e4c), (0x42b6, 0x07e30), (0x42b7, 0x07e3b), (0x42b8, 0x07e36), (0x42b9, 0x07e44),
    (0x42ba, 0x07e3a), (0x42bb, 0x07f45), (0x42bc, 0x07f7f), (0x42bd, 0x07f7e), (0x42be, 0x07f7d), (0x42bf, 0x07ff4),
    (0x42c0, 0x07ff2), (0x42c1, 0x0802c), (0x42c2, 0x081bb), (0x42c3, 0x081c4), (0x42c4, 0x081cc), (0x42c5, 0x081ca),
    (0x42c6, 0x081c5), (0x42c7, 0x081c7), (0x42c8, 0x081bc), (0x42c9, 0x081e9), (0x42ca, 0x0825b), (0x42cb, 0x0825a),
    (0x42cc, 0x0825c), (0x42cd, 0x08583), (0x42ce, 0x08580), (0x42cf, 0x0858f), (0x42d0, 0x085a7), (0x42d1, 0x08595),
    (0x42d2, 0x085a0), (0x42d3, 0x0858b), (0x42d4, 0x085a3), (0x42d5, 0x0857b), (0x42d6, 0x085a4), (0x42d7, 0x0859a),
    (0x42d8, 0x0859e), (0x42d9, 0x08577), (0x42da, 0x0857c), (0x42db, 0x08589), (0x42dc, 0x085a1), (0x42dd, 0x0857a),
    (0x42de, 0x08578), (0x42df, 0x08557), (0x42e0, 0x0858e), (0x42e1, 0x08596), (0x42e2, 0x08586), (0x42e3, 0x0858d),
    (0x42e4, 0x08599), (0x42e5, 0x0859d), (0x42e6, 0x08581), (0x42e7, 0x085a2), (0x42e8, 0x08582), (0x42e9, 0x08588),
    (0x42ea, 0x08585), (0x42eb, 0x08579), (0x42ec, 0x08576), (0x42ed, 0x08598), (0x42ee, 0x08590), (0x42ef, 0x0859f),
    (0x42f0, 0x08668), (0x42f1, 0x087be), (0x42f2, 0x087aa), (0x42f3, 0x087ad), (0x42f4, 0x087c5), (0x42f5, 0x087b0),
    (0x42f6, 0x087ac), (0x42f7, 0x087b9), (0x42f8, 0x087b5), (0x42f9, 0x087bc), (0x42fa, 0x087ae), (0x42fb, 0x087c9),
    (0x42fc, 0x087c3), (0x42fd, 0x087c2), (0x42fe, 0x087cc), (0x42ff, 0x087b7), (0x4300, 0x087af), (0x4301, 0x087c4),
    (0x4302, 0x087ca), (0x4303, 0x087b4), (0x4304, 0x087b6), (0x4305, 0x087bf), (0x4306, 0x087b8), (0x4307, 0x087bd),
    (0x4308, 0x087de), (0x4309, 0x087b2), (0x430a, 0x08935), (0x430b, 0x08933), (0x430c, 0x0893c), (0x430d, 0x0893e),
    (0x430e, 0x08941), (0x430f, 0x08952), (0x4310, 0x08937), (0x4311, 0x08942), (0x4312, 0x089ad), (0x4313, 0x089af),
    (0x4314, 0x089ae), (0x4315, 0x089f2), (0x4316, 0x089f3), (0x4317, 0x08b1e), (0x4318, 0x08b18), (0x4319, 0x08b16),
    (0x431a, 0x08b11), (0x431b, 0x08b05), (0x431c, 0x08b0b), (0x431d, 0x08b22), (0x431e, 0x08b0f), (0x431f, 0x08b12),
    (0x4320, 0x08b15), (0x4321, 0x08b07), (0x4322, 0x08b0d), (0x4323, 0x08b08), (0x4324, 0x08b06), (0x4325, 0x08b1c),
    (0x4326, 0x08b13), (0x4327, 0x08b1a), (0x4328, 0x08c4f), (0x4329, 0x08c70), (0x432a, 0x08c72), (0x432b, 0x08c71),
    (0x432c, 0x08c6f), (0x432d, 0x08c95), (0x432e, 0x08c94), (0x432f, 0x08cf9), (0x4330, 0x08d6f), (0x4331, 0x08e4e),
    (0x4332, 0x08e4d), (0x4333, 0x08e53), (0x4334, 0x08e50), (0x4335, 0x08e4c), (0x4336, 0x08e47), (0x4337, 0x08f43),
    (0x4338, 0x08f40), (0x4339, 0x09085), (0x433a, 0x0907e), (0x433b, 0x09138), (0x433c, 0x0919a), (0x433d, 0x091a2),
    (0x433e, 0x0919b), (0x433f, 0x09199), (0x4340, 0x0919f), (0x4341, 0x091a1), (0x4342, 0x0919d), (0x4343, 0x091a0),
    (0x4344, 0x093a1), (0x4345, 0x09383), (0x4346, 0x093af), (0x4347, 0x09364), (0x4348, 0x09356), (0x4349, 0x09347),
    (0x434a, 0x0937c), (0x434b, 0x09358), (0x434c, 0x0935c), (0x434d, 0x09376), (0x434e, 0x09349), (0x434f, 0x09350),
    (0x4350, 0x09351), (0x4351, 0x09360), (0x4352, 0x0936d), (0x4353, 0x0938f), (0x4354, 0x0934c), (0x4355, 0x0936a),
    (0x4356, 0x09379), (0x4357, 0x09357), (0x4358, 0x09355), (0x4359, 0x09352), (0x435a, 0x0934f), (0x435b, 0x09371),
    (0x435c, 0x09377), (0x435d, 0x0937b), (0x435e, 0x09361), (0x435f, 0x0935e), (0x4360, 0x09363), (0x4361, 0x09367),
    (0x4362, 0x09380), (0x4363, 0x0934e), (0x4364, 0x09359), (0x4365, 0x095c7), (0x4366, 0x095c0), (0x4367, 0x095c9),
    (0x4368, 0x095c3), (0x4369, 0x095c5), (0x436a, 0x095b7), (0x436b, 0x096ae), (0x436c, 0x096b0), (0x436d, 0x096ac),
    (0x436e, 0x09720), (0x436f, 0x0971f), (0x4370, 0x09718), (0x4371, 0x0971d), (0x4372, 0x09719), (0x4373, 0x0979a),
    (0x4374, 0x097a1), (0x4375, 0x0979c), (0x4376, 0x0979e), (0x4377, 0x0979d), (0x4378, 0x097d5), (0x4379, 0x097d4),
    (0x437a, 0x097f1), (0x437b, 0x09841), (0x437c, 0x09844), (0x437d, 0x0984a), (0x437e, 0x09849), (0x437f, 0x09845),
    (0x4380, 0x09843), (0x4381, 0x09925), (0x4382, 0x0992b), (0x4383, 0x0992c), (0x4384, 0x0992a), (0x4385, 0x09933),
    (0x4386, 0x09932), (0x4387, 0x0992f), (0x4388, 0x0992d), (0x4389, 0x09931), (0x438a, 0x09930), (0x438b, 0x09998),
    (0x438c, 0x099a3), (0x438d, 0x099a1), (0x438e, 0x09a02), (0x438f, 0x099fa), (0x4390, 0x099f4), (0x4391, 0x099f7),
    (0x4392, 0x099f9), (0x4393, 0x099f8), (0x4394, 0x099f6), (0x4395, 0x099fb), (0x4396, 0x099fd), (0x4397, 0x099fe),
    (0x4398, 0x099fc), (0x4399, 0x09a03), (0x439a, 0x09abe), (0x439b, 0x09afe), (0x439c, 0x09afd), (0x439d, 0x09b01),
    (0x439e, 0x09afc), (0x439f, 0x09b48), (0x43a0, 0x09b9a), (0x43a1, 0x09ba8), (0x43a2, 0x09b9e), (0x43a3, 0x09b9b),
    (0x43a4, 0x09ba6), (0x43a5, 0x09ba1), (0x43a6, 0x09ba5), (0x43a7, 0x09ba4), (0x43a8, 0x09b86), (0x43a9, 0x09ba2),
    (0x43aa, 0x09ba0), (0x43ab, 0x09baf), (0x43ac, 0x09d33), (0x43ad, 0x09d41), (0x43ae, 0x09d67), (0x43af, 0x09d36),
    (0x43b0, 0x09d2e), (0x43b1, 0x09d2f), (0x43b2, 0x09d31), (0x43b3, 0x09d38), (0x43b4, 0x09d30), (0x43b5, 0x09d45),
    (0x43b6, 0x09d42), (0x43b7, 0x09d43), (0x43b8, 0x09d3e), (0x43b9, 0x09d37), (0x43ba, 0x09d40), (0x43bb, 0x09d3d),
    (0x43bc, 0x07ff5), (0x43bd, 0x09d2d), (0x43be, 0x09e8a), (0x43bf, 0x09e89), (0x43c0, 0x09e8d), (0x43c1, 0x09eb0),
    (0x43c2, 0x09ec8), (0x43c3, 0x09eda), (0x43c4, 0x09efb), (0x43c5, 0x09eff), (0x43c6, 0x09f24), (0x43c7, 0x09f23),
    (0x43c8, 0x09f22), (0x43c9, 0x09f54), (0x43ca, 0x09fa0), (0x43cb, 0x05131), (0x43cc, 0x0512d), (0x43cd, 0x0512e),
    (0x43ce, 0x05698), (0x43cf, 0x0569c), (0x43d0, 0x05697), (0x43d1, 0x0569a), (0x43d2, 0x0569d), (0x43d3, 0x05699),
    (0x43d4, 0x05970), (0x43d5, 0x05b3c), (0x43d6, 0x05c69), (0x43d7, 0x05c6a), (0x43d8, 0x05dc0), (0x43d9, 0x05e6d),
    (0x43da, 0x05e6e), (0x43db, 0x061d8), (0x43dc, 0x061df), (0x43dd, 0x061ed), (0x43de, 0x061ee), (0x43df, 0x061f1),
    (0x43e0, 0x061ea), (0x43e1, 0x061f0), (0x43e2, 0x061eb), (0x43e3, 0x061d6), (0x43e4, 0x061e9), (0x43e5, 0x064ff),
    (0x43e6, 0x06504), (0x43e7, 0x064fd), (0x43e8, 0x064f8), (0x43e9, 0x06501), (0x43ea, 0x06503), (0x43eb, 0x064fc),
    (0x43ec, 0x06594), (0x43ed, 0x065db), (0x43ee, 0x066da), (0x43ef, 0x066db), (0x43f0, 0x066d8), (0x43f1, 0x06ac5),
    (0x43f2, 0x06ab9), (0x43f3, 0x06abd), (0x43f4, 0x06ae1), (0x43f5, 0x06ac6), (0x43f6, 0x06aba), (0x43f7, 0x06ab6),
    (0x43f8, 0x06ab7), (0x43f9, 0x06ac7), (0x43fa, 0x06ab4), (0x43fb, 0x06aad), (0x43fc, 0x06b5e), (0x43fd, 0x06bc9),
    (0x43fe, 0x06c0b), (0x43ff, 0x07007), (0x4400, 0x0700c), (0x4401, 0x0700d), (0x4402, 0x07001), (0x4403, 0x07005),
    (0x4404, 0x07014), (0x4405, 0x0700e), (0x4406, 0x06fff), (0x4407, 0x07000), (0x4408, 0x06ffb), (0x4409, 0x07026),
    (0x440a, 0x06ffc), (0x440b, 0x06ff7), (0x440c, 0x0700a), (0x440d, 0x07201), (0x440e, 0x071ff), (0x440f, 0x071f9),
    (0x4410, 0x07203), (0x4411, 0x071fd), (0x4412, 0x07376), (0x4413, 0x074b8), (0x4414, 0x074c0), (0x4415, 0x074b5),
    (0x4416, 0x074c1), (0x4417, 0x074be), (0x4418, 0x074b6), (0x4419, 0x074bb), (0x441a, 0x074c2), (0x441b, 0x07514),
    (0x441c, 0x07513), (0x441d, 0x0765c), (0x441e, 0x07664), (0x441f, 0x07659), (0x4420, 0x07650), (0x4421, 0x07653),
    (0x4422, 0x07657), (0x4423, 0x0765a), (0x4424, 0x076a6), (0x4425, 0x076bd), (0x4426, 0x076ec), (0x4427, 0x077c2),
    (0x4428, 0x077ba), (0x4429, 0x078ff), (0x442a, 0x0790c), (0x442b, 0x07913), (0x442c, 0x07914), (0x442d, 0x07909),
    (0x442e, 0x07910), (0x442f, 0x07912), (0x4430, 0x07911), (0x4431, 0x079ad), (0x4432, 0x079ac), (0x4433, 0x07a5f),
    (0x4434, 0x07c1c), (0x4435, 0x07c29), (0x4436, 0x07c19), (0x4437, 0x07c20), (0x4438, 0x07c1f), (0x4439, 0x07c2d),
    (0x443a, 0x07c1d), (0x443b, 0x07c26), (0x443c, 0x07c28), (0x443d, 0x07c22), (0x443e, 0x07c25), (0x443f, 0x07c30),
    (0x4440, 0x07e5c), (0x4441, 0x07e50), (0x4442, 0x07e56), (0x4443, 0x07e63), (0x4444, 0x07e58), (0x4445, 0x07e62),
    (0x4446, 0x07e5f), (0x4447, 0x07e51), (0x4448, 0x07e60), (0x4449, 0x07e57), (0x444a, 0x07e53), (0x444b, 0x07fb5),
    (0x444c, 0x07fb3), (0x444d, 0x07ff7), (0x444e, 0x07ff8), (0x444f, 0x08075), (0x4450, 0x081d1), (0x4451, 0x081d2),
    (0x4452, 0x081d0), (0x4453, 0x0825f), (0x4454, 0x0825e), (0x4455, 0x085b4), (0x4456, 0x085c6), (0x4457, 0x085c0),
    (0x4458, 0x085c3), (0x4459, 0x085c2), (0x445a, 0x085b3), (0x445b, 0x085b5), (0x445c, 0x085bd), (0x445d, 0x085c7),
    (0x445e, 0x085c4), (0x445f, 0x085bf), (0x4460, 0x085cb), (0x4461, 0x085ce), (0x4462, 0x085c8), (0x4463, 0x085c5),
    (0x4464, 0x085b1), (0x4465, 0x085b6), (0x4466, 0x085d2), (0x4467, 0x08624), (0x4468, 0x085b8), (0x4469, 0x085b7),
    (0x446a, 0x085be), (0x446b, 0x08669), (0x446c, 0x087e7), (0x446d, 0x087e6), (0x446e, 0x087e2), (0x446f, 0x087db),
    (0x4470, 0x087eb), (0x4471, 0x087ea), (0x4472, 0x087e5), (0x4473, 0x087df), (0x4474, 0x087f3), (0x4475, 0x087e4),
    (0x4476, 0x087d4), (0x4477, 0x087dc), (0x4478, 0x087d3), (0x4479, 0x087ed), (0x447a, 0x087d8), (0x447b, 0x087e3),
    (0x447c, 0x087a4), (0x447d, 0x087d7), (0x447e, 0x087d9), (0x447f, 0x08801), (0x4480, 0x087f4), (0x4481, 0x087e8),
    (0x4482, 0x087dd), (0x4483, 0x08953), (0x4484, 0x0894b), (0x4485, 0x0894f), (0x4486, 0x0894c), (0x4487, 0x08946),
    (0x4488, 0x08950), (0x4489, 0x08951), (0x448a, 0x08949), (0x448b, 0x08b2a), (0x448c, 0x08b27), (0x448d, 0x08b23),
    (0x448e, 0x08b33), (0x448f, 0x08b30), (0x4490, 0x08b35), (0x4491, 0x08b47), (0x4492, 0x08b2f), (0x4493, 0x08b3c),
    (0x4494, 0x08b3e), (0x4495, 0x08b31), (0x4496, 0x08b25), (0x4497, 0x08b37), (0x4498, 0x08b26), (0x4499, 0x08b36),
    (0x449a, 0x08b2e), (0x449b, 0x08b24), (0x449c, 0x08b3b), (0x449d, 0x08b3d), (0x449e, 0x08b3a), (0x449f, 0x08c42),
    (0x44a0, 0x08c75), (0x44a1, 0x08c99), (0x44a2, 0x08c98), (0x44a3, 0x08c97), (0x44a4, 0x08cfe), (0x44a5, 0x08d04),
    (0x44a6, 0x08d02), (0x44a7, 0x08d00), (0x44a8, 0x08e5c), (0x44a9, 0x08e62), (0x44aa, 0x08e60), (0x44ab, 0x08e57),
    (0x44ac, 0x08e56), (0x44ad, 0x08e5e), (0x44ae, 0x08e65), (0x44af, 0x08e67), (0x44b0, 0x08e5b), (0x44b1, 0x08e5a),
    (0x44b2, 0x08e61), (0x44b3, 0x08e5d), (0x44b4, 0x08e69), (0x44b5, 0x08e54), (0x44b6, 0x08f46), (0x44b7, 0x08f47),
    (0x44b8, 0x08f48), (0x44b9, 0x08f4b), (0x44ba, 0x09128), (0x44bb, 0x0913a), (0x44bc, 0x0913b), (0x44bd, 0x0913e),
    (0x44be, 0x091a8), (0x44bf, 0x091a5), (0x44c0, 0x091a7), (0x44c1, 0x091af), (0x44c2, 0x091aa), (0x44c3, 0x093b5),
    (0x44c4, 0x0938c), (0x44c5, 0x09392), (0x44c6, 0x093b7), (0x44c7, 0x0939b), (0x44c8, 0x0939d), (0x44c9, 0x09389),
    (0x44ca, 0x093a7), (0x44cb, 0x0938e), (0x44cc, 0x093aa), (0x44cd, 0x0939e), (0x44ce, 0x093a6), (0x44cf, 0x09395),
    (0x44d0, 0x09388), (0x44d1, 0x09399), (0x44d2, 0x0939f), (0x44d3, 0x0938d), (0x44d4, 0x093b1), (0x44d5, 0x09391),
    (0x44d6, 0x093b2), (0x44d7, 0x093a4), (0x44d8, 0x093a8), (0x44d9, 0x093b4), (0x44da, 0x093a3), (0x44db, 0x093a5),
    (0x44dc, 0x095d2), (0x44dd, 0x095d3), (0x44de, 0x095d1), (0x44df, 0x096b3), (0x44e0, 0x096d7), (0x44e1, 0x096da),
    (0x44e2, 0x05dc2), (0x44e3, 0x096df), (0x44e4, 0x096d8), (0x44e5, 0x096dd), (0x44e6, 0x09723), (0x44e7, 0x09722),
    (0x44e8, 0x09725), (0x44e9, 0x097ac), (0x44ea, 0x097ae), (0x44eb, 0x097a8), (0x44ec, 0x097ab), (0x44ed, 0x097a4),
    (0x44ee, 0x097aa), (0x44ef, 0x097a2), (0x44f0, 0x097a5), (0x44f1, 0x097d7), (0x44f2, 0x097d9), (0x44f3, 0x097d6),
    (0x44f4, 0x097d8), (0x44f5, 0x097fa), (0x44f6, 0x09850), (0x44f7, 0x09851), (0x44f8, 0x09852), (0x44f9, 0x098b8),
    (0x44fa, 0x09941), (0x44fb, 0x0993c), (0x44fc, 0x0993a), (0x44fd, 0x09a0f), (0x44fe, 0x09a0b), (0x44ff, 0x09a09),
    (0x4500, 0x09a0d), (0x4501, 0x09a04), (0x4502, 0x09a11), (0x4503, 0x09a0a), (0x4504, 0x09a05), (0x4505, 0x09a07),
    (0x4506, 0x09a06), (0x4507, 0x09ac0), (0x4508, 0x09adc), (0x4509, 0x09b08), (0x450a, 0x09b04), (0x450b, 0x09b05),
    (0x450c, 0x09b29), (0x450d, 0x09b35), (0x450e, 0x09b4a), (0x450f, 0x09b4c), (0x4510, 0x09b4b), (0x4511, 0x09bc7),
    (0x4512, 0x09bc6), (0x4513, 0x09bc3), (0x4514, 0x09bbf), (0x4515, 0x09bc1), (0x4516, 0x09bb5), (0x4517, 0x09bb8),
    (0x4518, 0x09bd3), (0x4519, 0x09bb6), (0x451a, 0x09bc4), (0x451b, 0x09bb9), (0x451c, 0x09bbd), (0x451d, 0x09d5c),
    (0x451e, 0x09d53), (0x451f, 0x09d4f), (0x4520, 0x09d4a), (0x4521, 0x09d5b), (0x4522, 0x09d4b), (0x4523, 0x09d59),
    (0x4524, 0x09d56), (0x4525, 0x09d4c), (0x4526, 0x09d57), (0x4527, 0x09d52), (0x4528, 0x09d54), (0x4529, 0x09d5f),
    (0x452a, 0x09d58), (0x452b, 0x09d5a), (0x452c, 0x09e8e), (0x452d, 0x09e8c), (0x452e, 0x09edf), (0x452f, 0x09f01),
    (0x4530, 0x09f00), (0x4531, 0x09f16), (0x4532, 0x09f25), (0x4533, 0x09f2b), (0x4534, 0x09f2a), (0x4535, 0x09f29),
    (0x4536, 0x09f28), (0x4537, 0x09f4c), (0x4538, 0x09f55), (0x4539, 0x05134), (0x453a, 0x05135), (0x453b, 0x05296),
    (0x453c, 0x052f7), (0x453d, 0x053b4), (0x453e, 0x056ab), (0x453f, 0x056ad), (0x4540, 0x056a6), (0x4541, 0x056a7),
    (0x4542, 0x056aa), (0x4543, 0x056ac), (0x4544, 0x058da), (0x4545, 0x058dd), (0x4546, 0x058db), (0x4547, 0x05912),
    (0x4548, 0x05b3d), (0x4549, 0x05b3e), (0x454a, 0x05b3f), (0x454b, 0x05dc3), (0x454c, 0x05e70), (0x454d, 0x05fbf),
    (0x454e, 0x061fb), (0x454f, 0x06507), (0x4550, 0x06510), (0x4551, 0x0650d), (0x4552, 0x06509), (0x4553, 0x0650c),
    (0x4554, 0x0650e), (0x4555, 0x06584), (0x4556, 0x065de), (0x4557, 0x065dd), (0x4558, 0x066de), (0x4559, 0x06ae7),
    (0x455a, 0x06ae0), (0x455b, 0x06acc), (0x455c, 0x06ad1), (0x455d, 0x06ad9), (0x455e, 0x06acb), (0x455f, 0x06adf),
    (0x4560, 0x06adc), (0x4561, 0x06ad0), (0x4562, 0x06aeb), (0x4563, 0x06acf), (0x4564, 0x06acd), (0x4565, 0x06ade),
    (0x4566, 0x06b60), (0x4567, 0x06bb0), (0x4568, 0x06c0c), (0x4569, 0x07019), (0x456a, 0x07027), (0x456b, 0x07020),
    (0x456c, 0x07016), (0x456d, 0x0702b), (0x456e, 0x07021), (0x456f, 0x07022), (0x4570, 0x07023), (0x4571, 0x07029),
    (0x4572, 0x07017), (0x4573, 0x07024), (0x4574, 0x0701c), (0x4575, 0x0702a), (0x4576, 0x0720c), (0x4577, 0x0720a),
    (0x4578, 0x07207), (0x4579, 0x07202), (0x457a, 0x07205), (0x457b, 0x072a5), (0x457c, 0x072a6), (0x457d, 0x072a4),
    (0x457e, 0x072a3), (0x457f, 0x072a1), (0x4580, 0x074cb), (0x4581, 0x074c5), (0x4582, 0x074b7), (0x4583, 0x074c3),
    (0x4584, 0x07516), (0x4585, 0x07660), (0x4586, 0x077c9), (0x4587, 0x077ca), (0x4588, 0x077c4), (0x4589, 0x077f1),
    (0x458a, 0x0791d), (0x458b, 0x0791b), (0x458c, 0x07921), (0x458d, 0x0791c), (0x458e, 0x07917), (0x458f, 0x0791e),
    (0x4590, 0x079b0), (0x4591, 0x07a67), (0x4592, 0x07a68), (0x4593, 0x07c33), (0x4594, 0x07c3c), (0x4595, 0x07c39),
    (0x4596, 0x07c2c), (0x4597, 0x07c3b), (0x4598, 0x07cec), (0x4599, 0x07cea), (0x459a, 0x07e76), (0x459b, 0x07e75),
    (0x459c, 0x07e78), (0x459d, 0x07e70), (0x459e, 0x07e77), (0x459f, 0x07e6f), (0x45a0, 0x07e7a), (0x45a1, 0x07e72),
    (0x45a2, 0x07e74), (0x45a3, 0x07e68), (0x45a4, 0x07f4b), (0x45a5, 0x07f4a), (0x45a6, 0x07f83), (0x45a7, 0x07f86),
    (0x45a8, 0x07fb7), (0x45a9, 0x07ffd), (0x45aa, 0x07ffe), (0x45ab, 0x08078), (0x45ac, 0x081d7), (0x45ad, 0x081d5),
    (0x45ae, 0x08264), (0x45af, 0x08261), (0x45b0, 0x08263), (0x45b1, 0x085eb), (0x45b2, 0x085f1), (0x45b3, 0x085ed),
    (0x45b4, 0x085d9), (0x45b5, 0x085e1), (0x45b6, 0x085e8), (0x45b7, 0x085da), (0x45b8, 0x085d7), (0x45b9, 0x085ec),
    (0x45ba, 0x085f2), (0x45bb, 0x085f8), (0x45bc, 0x085d8), (0x45bd, 0x085df), (0x45be, 0x085e3), (0x45bf, 0x085dc),
    (0x45c0, 0x085d1), (0x45c1, 0x085f0), (0x45c2, 0x085e6), (0x45c3, 0x085ef), (0x45c4, 0x085de), (0x45c5, 0x085e2),
    (0x45c6, 0x08800), (0x45c7, 0x087fa), (0x45c8, 0x08803), (0x45c9, 0x087f6), (0x45ca, 0x087f7), (0x45cb, 0x08809),
    (0x45cc, 0x0880c), (0x45cd, 0x0880b), (0x45ce, 0x08806), (0x45cf, 0x087fc), (0x45d0, 0x08808), (0x45d1, 0x087ff),
    (0x45d2, 0x0880a), (0x45d3, 0x08802), (0x45d4, 0x08962), (0x45d5, 0x0895a), (0x45d6, 0x0895b), (0x45d7, 0x08957),
    (0x45d8, 0x08961), (0x45d9, 0x0895c), (0x45da, 0x08958), (0x45db, 0x0895d), (0x45dc, 0x08959), (0x45dd, 0x08988),
    (0x45de, 0x089b7), (0x45df, 0x089b6), (0x45e0, 0x089f6), (0x45e1, 0x08b50), (0x45e2, 0x08b48), (0x45e3, 0x08b4a),
    (0x45e4, 0x08b40), (0x45e5, 0x08b53), (0x45e6, 0x08b56), (0x45e7, 0x08b54), (0x45e8, 0x08b4b), (0x45e9, 0x08b55),
    (0x45ea, 0x08b51), (0x45eb, 0x08b42), (0x45ec, 0x08b52), (0x45ed, 0x08b57), (0x45ee, 0x08c43), (0x45ef, 0x08c77),
    (0x45f0, 0x08c76), (0x45f1, 0x08c9a), (0x45f2, 0x08d06), (0x45f3, 0x08d07), (0x45f4, 0x08d09), (0x45f5, 0x08dac),
    (0x45f6, 0x08daa), (0x45f7, 0x08dad), (0x45f8, 0x08dab), (0x45f9, 0x08e6d), (0x45fa, 0x08e78), (0x45fb, 0x08e73),
    (0x45fc, 0x08e6a), (0x45fd, 0x08e6f), (0x45fe, 0x08e7b), (0x45ff, 0x08ec2), (0x4600, 0x08f52), (0x4601, 0x08f51),
    (0x4602, 0x08f4f), (0x4603, 0x08f50), (0x4604, 0x08f53), (0x4605, 0x08fb4), (0x4606, 0x09140), (0x4607, 0x0913f),
    (0x4608, 0x091b0), (0x4609, 0x091ad), (0x460a, 0x093de), (0x460b, 0x093c7), (0x460c, 0x093cf), (0x460d, 0x093c2),
    (0x460e, 0x093da), (0x460f, 0x093d0), (0x4610, 0x093f9), (0x4611, 0x093ec), (0x4612, 0x093cc), (0x4613, 0x093d9),
    (0x4614, 0x093a9), (0x4615, 0x093e6), (0x4616, 0x093ca), (0x4617, 0x093d4), (0x4618, 0x093ee), (0x4619, 0x093e3),
    (0x461a, 0x093d5), (0x461b, 0x093c4), (0x461c, 0x093ce), (0x461d, 0x093c0), (0x461e, 0x093d2), (0x461f, 0x093e7),
    (0x4620, 0x0957d), (0x4621, 0x095da), (0x4622, 0x095db), (0x4623, 0x096e1), (0x4624, 0x09729), (0x4625, 0x0972b),
    (0x4626, 0x0972c), (0x4627, 0x09728), (0x4628, 0x09726), (0x4629, 0x097b3), (0x462a, 0x097b7), (0x462b, 0x097b6),
    (0x462c, 0x097dd), (0x462d, 0x097de), (0x462e, 0x097df), (0x462f, 0x0985c), (0x4630, 0x09859), (0x4631, 0x0985d),
    (0x4632, 0x09857), (0x4633, 0x098bf), (0x4634, 0x098bd), (0x4635, 0x098bb), (0x4636, 0x098be), (0x4637, 0x09948),
    (0x4638, 0x09947), (0x4639, 0x09943), (0x463a, 0x099a6), (0x463b, 0x099a7), (0x463c, 0x09a1a), (0x463d, 0x09a15),
    (0x463e, 0x09a25), (0x463f, 0x09a1d), (0x4640, 0x09a24), (0x4641, 0x09a1b), (0x4642, 0x09a22), (0x4643, 0x09a20),
    (0x4644, 0x09a27), (0x4645, 0x09a23), (0x4646, 0x09a1e), (0x4647, 0x09a1c), (0x4648, 0x09a14), (0x4649, 0x09ac2),
    (0x464a, 0x09b0b), (0x464b, 0x09b0a), (0x464c, 0x09b0e), (0x464d, 0x09b0c), (0x464e, 0x09b37), (0x464f, 0x09bea),
    (0x4650, 0x09beb), (0x4651, 0x09be0), (0x4652, 0x09bde), (0x4653, 0x09be4), (0x4654, 0x09be6), (0x4655, 0x09be2),
    (0x4656, 0x09bf0), (0x4657, 0x09bd4), (0x4658, 0x09bd7), (0x4659, 0x09bec), (0x465a, 0x09bdc), (0x465b, 0x09bd9),
    (0x465c, 0x09be5), (0x465d, 0x09bd5), (0x465e, 0x09be1), (0x465f, 0x09bda), (0x4660, 0x09d77), (0x4661, 0x09d81),
    (0x4662, 0x09d8a), (0x4663, 0x09d84), (0x4664, 0x09d88), (0x4665, 0x09d71), (0x4666, 0x09d80), (0x4667, 0x09d78),
    (0x4668, 0x09d86), (0x4669, 0x09d8b), (0x466a, 0x09d8c), (0x466b, 0x09d7d), (0x466c, 0x09d6b), (0x466d, 0x09d74),
    (0x466e, 0x09d75), (0x466f, 0x09d70), (0x4670, 0x09d69), (0x4671, 0x09d85), (0x4672, 0x09d73), (0x4673, 0x09d7b),
    (0x4674, 0x09d82), (0x4675, 0x09d6f), (0x4676, 0x09d79), (0x4677, 0x09d7f), (0x4678, 0x09d87), (0x4679, 0x09d68),
    (0x467a, 0x09e94), (0x467b, 0x09e91), (0x467c, 0x09ec0), (0x467d, 0x09efc), (0x467e, 0x09f2d), (0x467f, 0x09f40),
    (0x4680, 0x09f41), (0x4681, 0x09f4d), (0x4682, 0x09f56), (0x4683, 0x09f57), (0x4684, 0x09f58), (0x4685, 0x05337),
    (0x4686, 0x056b2), (0x4687, 0x056b5), (0x4688, 0x056b3), (0x4689, 0x058e3), (0x468a, 0x05b45), (0x468b, 0x05dc6),
    (0x468c, 0x05dc7), (0x468d, 0x05eee), (0x468e, 0x05eef), (0x468f, 0x05fc0), (0x4690, 0x05fc1), (0x4691, 0x061f9),
    (0x4692, 0x06517), (0x4693, 0x06516), (0x4694, 0x06515), (0x4695, 0x06513), (0x4696, 0x065df), (0x4697, 0x066e8),
    (0x4698, 0x066e3), (0x4699, 0x066e4), (0x469a, 0x06af3), (0x469b, 0x06af0), (0x469c, 0x06aea), (0x469d, 0x06ae8),
    (0x469e, 0x06af9), (0x469f, 0x06af1), (0x46a0, 0x06aee), (0x46a1, 0x06aef), (0x46a2, 0x0703c), (0x46a3, 0x07035),
    (0x46a4, 0x0702f), (0x46a5, 0x07037), (0x46a6, 0x07034), (0x46a7, 0x07031), (0x46a8, 0x07042), (0x46a9, 0x07038),
    (0x46aa, 0x0703f), (0x46ab, 0x0703a), (0x46ac, 0x07039), (0x46ad, 0x07040), (0x46ae, 0x0703b), (0x46af, 0x07033),
    (0x46b0, 0x07041), (0x46b1, 0x07213), (0x46b2, 0x07214), (0x46b3, 0x072a8), (0x46b4, 0x0737d), (0x46b5, 0x0737c),
    (0x46b6, 0x074ba), (0x46b7, 0x076ab), (0x46b8, 0x076aa), (0x46b9, 0x076be), (0x46ba, 0x076ed), (0x46bb, 0x077cc),
    (0x46bc, 0x077ce), (0x46bd, 0x077cf), (0x46be, 0x077cd), (0x46bf, 0x077f2), (0x46c0, 0x07925), (0x46c1, 0x07923),
    (0x46c2, 0x07927), (0x46c3, 0x07928), (0x46c4, 0x07924), (0x46c5, 0x07929), (0x46c6, 0x079b2), (0x46c7, 0x07a6e),
    (0x46c8, 0x07a6c), (0x46c9, 0x07a6d), (0x46ca, 0x07af7), (0x46cb, 0x07c49), (0x46cc, 0x07c48), (0x46cd, 0x07c4a),
    (0x46ce, 0x07c47), (0x46cf, 0x07c45), (0x46d0, 0x07cee), (0x46d1, 0x07e7b), (0x46d2, 0x07e7e), (0x46d3, 0x07e81),
    (0x46d4, 0x07e80), (0x46d5, 0x07fba), (0x46d6, 0x07fff), (0x46d7, 0x08079), (0x46d8, 0x081db), (0x46d9, 0x081d9),
    (0x46da, 0x0820b), (0x46db, 0x08268), (0x46dc, 0x08269), (0x46dd, 0x08622), (0x46de, 0x085ff), (0x46df, 0x08601),
    (0x46e0, 0x085fe), (0x46e1, 0x0861b), (0x46e2, 0x08600), (0x46e3, 0x085f6), (0x46e4, 0x08604), (0x46e5, 0x08609),
    (0x46e6, 0x08605), (0x46e7, 0x0860c), (0x46e8, 0x085fd), (0x46e9, 0x08819), (0x46ea, 0x08810), (0x46eb, 0x08811),
    (0x46ec, 0x08817), (0x46ed, 0x08813), (0x46ee, 0x08816), (0x46ef, 0x08963), (0x46f0, 0x08966), (0x46f1, 0x089b9),
    (0x46f2, 0x089f7), (0x46f3, 0x08b60), (0x46f4, 0x08b6a), (0x46f5, 0x08b5d), (0x46f6, 0x08b68), (0x46f7, 0x08b63),
    (0x46f8, 0x08b65), (0x46f9, 0x08b67), (0x46fa, 0x08b6d), (0x46fb, 0x08dae), (0x46fc, 0x08e86), (0x46fd, 0x08e88),
    (0x46fe, 0x08e84), (0x46ff, 0x08f59), (0x4700, 0x08f56), (0x4701, 0x08f57), (0x4702, 0x08f55), (0x4703, 0x08f58),
    (0x4704, 0x08f5a), (0x4705, 0x0908d), (0x4706, 0x09143), (0x4707, 0x09141), (0x4708, 0x091b7), (0x4709, 0x091b5),
    (0x470a, 0x091b2), (0x470b, 0x091b3), (0x470c, 0x0940b), (0x470d, 0x09413), (0x470e, 0x093fb), (0x470f, 0x09420),
    (0x4710, 0x0940f), (0x4711, 0x09414), (0x4712, 0x093fe), (0x4713, 0x09415), (0x4714, 0x09410), (0x4715, 0x09428),
    (0x4716, 0x09419), (0x4717, 0x0940d), (0x4718, 0x093f5), (0x4719, 0x09400), (0x471a, 0x093f7), (0x471b, 0x09407),
    (0x471c, 0x0940e), (0x471d, 0x09416), (0x471e, 0x09412), (0x471f, 0x093fa), (0x4720, 0x09409), (0x4721, 0x093f8),
    (0x4722, 0x0940a), (0x4723, 0x093ff), (0x4724, 0x093fc), (0x4725, 0x0940c), (0x4726, 0x093f6), (0x4727, 0x09411),
    (0x4728, 0x09406), (0x4729, 0x095de), (0x472a, 0x095e0), (0x472b, 0x095df), (0x472c, 0x0972e), (0x472d, 0x0972f),
    (0x472e, 0x097b9), (0x472f, 0x097bb), (0x4730, 0x097fd), (0x4731, 0x097fe), (0x4732, 0x09860), (0x4733, 0x09862),
    (0x4734, 0x09863), (0x4735, 0x0985f), (0x4736, 0x098c1), (0x4737, 0x098c2), (0x4738, 0x09950), (0x4739, 0x0994e),
    (0x473a, 0x09959), (0x473b, 0x0994c), (0x473c, 0x0994b), (0x473d, 0x09953), (0x473e, 0x09a32), (0x473f, 0x09a34),
    (0x4740, 0x09a31), (0x4741, 0x09a2c), (0x4742, 0x09a2a), (0x4743, 0x09a36), (0x4744, 0x09a29), (0x4745, 0x09a2e),
    (0x4746, 0x09a38), (0x4747, 0x09a2d), (0x4748, 0x09ac7), (0x4749, 0x09aca), (0x474a, 0x09ac6), (0x474b, 0x09b10),
    (0x474c, 0x09b12), (0x474d, 0x09b11), (0x474e, 0x09c0b), (0x474f, 0x09c08), (0x4750, 0x09bf7), (0x4751, 0x09c05),
    (0x4752, 0x09c12), (0x4753, 0x09bf8), (0x4754, 0x09c40), (0x4755, 0x09c07), (0x4756, 0x09c0e), (0x4757, 0x09c06),
    (0x4758, 0x09c17), (0x4759, 0x09c14), (0x475a, 0x09c09), (0x475b, 0x09d9f), (0x475c, 0x09d99), (0x475d, 0x09da4),
    (0x475e, 0x09d9d), (0x475f, 0x09d92), (0x4760, 0x09d98), (0x4761, 0x09d90), (0x4762, 0x09d9b), (0x4763, 0x09da0),
    (0x4764, 0x09d94), (0x4765, 0x09d9c), (0x4766, 0x09daa), (0x4767, 0x09d97), (0x4768, 0x09da1), (0x4769, 0x09d9a),
    (0x476a, 0x09da2), (0x476b, 0x09da8), (0x476c, 0x09d9e), (0x476d, 0x09da3), (0x476e, 0x09dbf), (0x476f, 0x09da9),
    (0x4770, 0x09d96), (0x4771, 0x09da6), (0x4772, 0x09da7), (0x4773, 0x09e99), (0x4774, 0x09e9b), (0x4775, 0x09e9a),
    (0x4776, 0x09ee5), (0x4777, 0x09ee4), (0x4778, 0x09ee7), (0x4779, 0x09ee6), (0x477a, 0x09f30), (0x477b, 0x09f2e),
    (0x477c, 0x09f5b), (0x477d, 0x09f60), (0x477e, 0x09f5e), (0x477f, 0x09f5d), (0x4780, 0x09f59), (0x4781, 0x09f91),
    (0x4782, 0x0513a), (0x4783, 0x05139), (0x4784, 0x05298), (0x4785, 0x05297), (0x4786, 0x056c3), (0x4787, 0x056bd),
    (0x4788, 0x056be), (0x4789, 0x05b48), (0x478a, 0x05b47), (0x478b, 0x05dcb), (0x478c, 0x05dcf), (0x478d, 0x05ef1),
    (0x478e, 0x061fd), (0x478f, 0x0651b), (0x4790, 0x06b02), (0x4791, 0x06afc), (0x4792, 0x06b03), (0x4793, 0x06af8),
    (0x4794, 0x06b00), (0x4795, 0x07043), (0x4796, 0x07044), (0x4797, 0x0704a), (0x4798, 0x07048), (0x4799, 0x07049),
    (0x479a, 0x07045), (0x479b, 0x07046), (0x479c, 0x0721d), (0x479d, 0x0721a), (0x479e, 0x07219), (0x479f, 0x0737e),
    (0x47a0, 0x07517), (0x47a1, 0x0766a), (0x47a2, 0x077d0), (0x47a3, 0x0792d), (0x47a4, 0x07931), (0x47a5, 0x0792f),
    (0x47a6, 0x07c54), (0x47a7, 0x07c53), (0x47a8, 0x07cf2), (0x47a9, 0x07e8a), (0x47aa, 0x07e87), (0x47ab, 0x07e88),
    (0x47ac, 0x07e8b), (0x47ad, 0x07e86), (0x47ae, 0x07e8d), (0x47af, 0x07f4d), (0x47b0, 0x07fbb), (0x47b1, 0x08030),
    (0x47b2, 0x081dd), (0x47b3, 0x08618), (0x47b4, 0x0862a), (0x47b5, 0x08626), (0x47b6, 0x0861f), (0x47b7, 0x08623),
    (0x47b8, 0x0861c), (0x47b9, 0x08619), (0x47ba, 0x08627), (0x47bb, 0x0862e), (0x47bc, 0x08621), (0x47bd, 0x08620),
    (0x47be, 0x08629), (0x47bf, 0x0861e), (0x47c0, 0x08625), (0x47c1, 0x08829), (0x47c2, 0x0881d), (0x47c3, 0x0881b),
    (0x47c4, 0x08820), (0x47c5, 0x08824), (0x47c6, 0x0881c), (0x47c7, 0x0882b), (0x47c8, 0x0884a), (0x47c9, 0x0896d),
    (0x47ca, 0x08969), (0x47cb, 0x0896e), (0x47cc, 0x0896b), (0x47cd, 0x089fa), (0x47ce, 0x08b79), (0x47cf, 0x08b78),
    (0x47d0, 0x08b45), (0x47d1, 0x08b7a), (0x47d2, 0x08b7b), (0x47d3, 0x08d10), (0x47d4, 0x08d14), (0x47d5, 0x08daf),
    (0x47d6, 0x08e8e), (0x47d7, 0x08e8c), (0x47d8, 0x08f5e), (0x47d9, 0x08f5b), (0x47da, 0x08f5d), (0x47db, 0x09146),
    (0x47dc, 0x09144), (0x47dd, 0x09145), (0x47de, 0x091b9), (0x47df, 0x0943f), (0x47e0, 0x0943b), (0x47e1, 0x09436),
    (0x47e2, 0x09429), (0x47e3, 0x0943d), (0x47e4, 0x0943c), (0x47e5, 0x09430), (0x47e6, 0x09439), (0x47e7, 0x0942a),
    (0x47e8, 0x09437), (0x47e9, 0x0942c), (0x47ea, 0x09440), (0x47eb, 0x09431), (0x47ec, 0x095e5), (0x47ed, 0x095e4),
    (0x47ee, 0x095e3), (0x47ef, 0x09735), (0x47f0, 0x0973a), (0x47f1, 0x097bf), (0x47f2, 0x097e1), (0x47f3, 0x09864),
    (0x47f4, 0x098c9), (0x47f5, 0x098c6), (0x47f6, 0x098c0), (0x47f7, 0x09958), (0x47f8, 0x09956), (0x47f9, 0x09a39),
    (0x47fa, 0x09a3d), (0x47fb, 0x09a46), (0x47fc, 0x09a44), (0x47fd, 0x09a42), (0x47fe, 0x09a41), (0x47ff, 0x09a3a),
    (0x4800, 0x09a3f), (0x4801, 0x09acd), (0x4802, 0x09b15), (0x4803, 0x09b17), (0x4804, 0x09b18), (0x4805, 0x09b16),
    (0x4806, 0x09b3a), (0x4807, 0x09b52), (0x4808, 0x09c2b), (0x4809, 0x09c1d), (0x480a, 0x09c1c), (0x480b, 0x09c2c),
    (0x480c, 0x09c23), (0x480d, 0x09c28), (0x480e, 0x09c29), (0x480f, 0x09c24), (0x4810, 0x09c21), (0x4811, 0x09db7),
    (0x4812, 0x09db6), (0x4813, 0x09dbc), (0x4814, 0x09dc1), (0x4815, 0x09dc7), (0x4816, 0x09dca), (0x4817, 0x09dcf),
    (0x4818, 0x09dbe), (0x4819, 0x09dc5), (0x481a, 0x09dc3), (0x481b, 0x09dbb), (0x481c, 0x09db5), (0x481d, 0x09dce),
    (0x481e, 0x09db9), (0x481f, 0x09dba), (0x4820, 0x09dac), (0x4821, 0x09dc8), (0x4822, 0x09db1), (0x4823, 0x09dad),
    (0x4824, 0x09dcc), (0x4825, 0x09db3), (0x4826, 0x09dcd), (0x4827, 0x09db2), (0x4828, 0x09e7a), (0x4829, 0x09e9c),
    (0x482a, 0x09eeb), (0x482b, 0x09eee), (0x482c, 0x09eed), (0x482d, 0x09f1b), (0x482e, 0x09f18), (0x482f, 0x09f1a),
    (0x4830, 0x09f31), (0x4831, 0x09f4e), (0x4832, 0x09f65), (0x4833, 0x09f64), (0x4834, 0x09f92), (0x4835, 0x04eb9),
    (0x4836, 0x056c6), (0x4837, 0x056c5), (0x4838, 0x056cb), (0x4839, 0x05971), (0x483a, 0x05b4b), (0x483b, 0x05b4c),
    (0x483c, 0x05dd5), (0x483d, 0x05dd1), (0x483e, 0x05ef2), (0x483f, 0x06521), (0x4840, 0x06520), (0x4841, 0x06526),
    (0x4842, 0x06522), (0x4843, 0x06b0b), (0x4844, 0x06b08), (0x4845, 0x06b09), (0x4846, 0x06c0d), (0x4847, 0x07055),
    (0x4848, 0x07056), (0x4849, 0x07057), (0x484a, 0x07052), (0x484b, 0x0721e), (0x484c, 0x0721f), (0x484d, 0x072a9),
    (0x484e, 0x0737f), (0x484f, 0x074d8), (0x4850, 0x074d5), (0x4851, 0x074d9), (0x4852, 0x074d7), (0x4853, 0x0766d),
    (0x4854, 0x076ad), (0x4855, 0x07935), (0x4856, 0x079b4), (0x4857, 0x07a70), (0x4858, 0x07a71), (0x4859, 0x07c57),
    (0x485a, 0x07c5c), (0x485b, 0x07c59), (0x485c, 0x07c5b), (0x485d, 0x07c5a), (0x485e, 0x07cf4), (0x485f, 0x07cf1),
    (0x4860, 0x07e91), (0x4861, 0x07f4f), (0x4862, 0x07f87), (0x4863, 0x081de), (0x4864, 0x0826b), (0x4865, 0x08634),
    (0x4866, 0x08635), (0x4867, 0x08633), (0x4868, 0x0862c), (0x4869, 0x08632), (0x486a, 0x08636), (0x486b, 0x0882c),
    (0x486c, 0x08828), (0x486d, 0x08826), (0x486e, 0x0882a), (0x486f, 0x08825), (0x4870, 0x08971), (0x4871, 0x089bf),
    (0x4872, 0x089be), (0x4873, 0x089fb), (0x4874, 0x08b7e), (0x4875, 0x08b84), (0x4876, 0x08b82), (0x4877, 0x08b86),
    (0x4878, 0x08b85), (0x4879, 0x08b7f), (0x487a, 0x08d15), (0x487b, 0x08e95), (0x487c, 0x08e94), (0x487d, 0x08e9a),
    (0x487e, 0x08e92), (0x487f, 0x08e90), (0x4880, 0x08e96), (0x4881, 0x08e97), (0x4882, 0x08f60), (0x4883, 0x08f62),
    (0x4884, 0x09147), (0x4885, 0x0944c), (0x4886, 0x09450), (0x4887, 0x0944a), (0x4888, 0x0944b), (0x4889, 0x0944f),
    (0x488a, 0x09447), (0x488b, 0x09445), (0x488c, 0x09448), (0x488d, 0x09449), (0x488e, 0x09446), (0x488f, 0x0973f),
    (0x4890, 0x097e3), (0x4891, 0x0986a), (0x4892, 0x09869), (0x4893, 0x098cb), (0x4894, 0x09954), (0x4895, 0x0995b),
    (0x4896, 0x09a4e), (0x4897, 0x09a53), (0x4898, 0x09a54), (0x4899, 0x09a4c), (0x489a, 0x09a4f), (0x489b, 0x09a48),
    (0x489c, 0x09a4a), (0x489d, 0x09a49), (0x489e, 0x09a52), (0x489f, 0x09a50), (0x48a0, 0x09ad0), (0x48a1, 0x09b19),
    (0x48a2, 0x09b2b), (0x48a3, 0x09b3b), (0x48a4, 0x09b56), (0x48a5, 0x09b55), (0x48a6, 0x09c46), (0x48a7, 0x09c48),
    (0x48a8, 0x09c3f), (0x48a9, 0x09c44), (0x48aa, 0x09c39), (0x48ab, 0x09c33), (0x48ac, 0x09c41), (0x48ad, 0x09c3c),
    (0x48ae, 0x09c37), (0x48af, 0x09c34), (0x48b0, 0x09c32), (0x48b1, 0x09c3d), (0x48b2, 0x09c36), (0x48b3, 0x09ddb),
    (0x48b4, 0x09dd2), (0x48b5, 0x09dde), (0x48b6, 0x09dda), (0x48b7, 0x09dcb), (0x48b8, 0x09dd0), (0x48b9, 0x09ddc),
    (0x48ba, 0x09dd1), (0x48bb, 0x09ddf), (0x48bc, 0x09de9), (0x48bd, 0x09dd9), (0x48be, 0x09dd8), (0x48bf, 0x09dd6),
    (0x48c0, 0x09df5), (0x48c1, 0x09dd5), (0x48c2, 0x09ddd), (0x48c3, 0x09eb6), (0x48c4, 0x09ef0), (0x48c5, 0x09f35),
    (0x48c6, 0x09f33), (0x48c7, 0x09f32), (0x48c8, 0x09f42), (0x48c9, 0x09f6b), (0x48ca, 0x09f95), (0x48cb, 0x09fa2),
    (0x48cc, 0x0513d), (0x48cd, 0x05299), (0x48ce, 0x058e8), (0x48cf, 0x058e7), (0x48d0, 0x05972), (0x48d1, 0x05b4d),
    (0x48d2, 0x05dd8), (0x48d3, 0x0882f), (0x48d4, 0x05f4f), (0x48d5, 0x06201), (0x48d6, 0x06203), (0x48d7, 0x06204),
    (0x48d8, 0x06529), (0x48d9, 0x06525), (0x48da, 0x06596), (0x48db, 0x066eb), (0x48dc, 0x06b11), (0x48dd, 0x06b12),
    (0x48de, 0x06b0f), (0x48df, 0x06bca), (0x48e0, 0x0705b), (0x48e1, 0x0705a), (0x48e2, 0x07222), (0x48e3, 0x07382),
    (0x48e4, 0x07381), (0x48e5, 0x07383), (0x48e6, 0x07670), (0x48e7, 0x077d4), (0x48e8, 0x07c67), (0x48e9, 0x07c66),
    (0x48ea, 0x07e95), (0x48eb, 0x0826c), (0x48ec, 0x0863a), (0x48ed, 0x08640), (0x48ee, 0x08639), (0x48ef, 0x0863c),
    (0x48f0, 0x08631), (0x48f1, 0x0863b), (0x48f2, 0x0863e), (0x48f3, 0x08830), (0x48f4, 0x08832), (0x48f5, 0x0882e),
    (0x48f6, 0x08833), (0x48f7, 0x08976), (0x48f8, 0x08974), (0x48f9, 0x08973), (0x48fa, 0x089fe), (0x48fb, 0x08b8c),
    (0x48fc, 0x08b8e), (0x48fd, 0x08b8b), (0x48fe, 0x08b88), (0x48ff, 0x08c45), (0x4900, 0x08d19), (0x4901, 0x08e98),
    (0x4902, 0x08f64), (0x4903, 0x08f63), (0x4904, 0x091bc), (0x4905, 0x09462), (0x4906, 0x09455), (0x4907, 0x0945d),
    (0x4908, 0x09457), (0x4909, 0x0945e), (0x490a, 0x097c4), (0x490b, 0x097c5), (0x490c, 0x09800), (0x490d, 0x09a56),
    (0x490e, 0x09a59), (0x490f, 0x09b1e), (0x4910, 0x09b1f), (0x4911, 0x09b20), (0x4912, 0x09c52), (0x4913, 0x09c58),
    (0x4914, 0x09c50), (0x4915, 0x09c4a), (0x4916, 0x09c4d), (0x4917, 0x09c4b), (0x4918, 0x09c55), (0x4919, 0x09c59),
    (0x491a, 0x09c4c), (0x491b, 0x09c4e), (0x491c, 0x09dfb), (0x491d, 0x09df7), (0x491e, 0x09def), (0x491f, 0x09de3),
    (0x4920, 0x09deb), (0x4921, 0x09df8), (0x4922, 0x09de4), (0x4923, 0x09df6), (0x4924, 0x09de1), (0x4925, 0x09dee),
    (0x4926, 0x09de6), (0x4927, 0x09df2), (0x4928, 0x09df0), (0x4929, 0x09de2), (0x492a, 0x09dec), (0x492b, 0x09df4),
    (0x492c, 0x09df3), (0x492d, 0x09de8), (0x492e, 0x09ded), (0x492f, 0x09ec2), (0x4930, 0x09ed0), (0x4931, 0x09ef2),
    (0x4932, 0x09ef3), (0x4933, 0x09f06), (0x4934, 0x09f1c), (0x4935, 0x09f38), (0x4936, 0x09f37), (0x4937, 0x09f36),
    (0x4938, 0x09f43), (0x4939, 0x09f4f), (0x493a, 0x09f71), (0x493b, 0x09f70), (0x493c, 0x09f6e), (0x493d, 0x09f6f),
    (0x493e, 0x056d3), (0x493f, 0x056cd), (0x4940, 0x05b4e), (0x4941, 0x05c6d), (0x4942, 0x0652d), (0x4943, 0x066ed),
    (0x4944, 0x066ee), (0x4945, 0x06b13), (0x4946, 0x0705f), (0x4947, 0x07061), (0x4948, 0x0705d), (0x4949, 0x07060),
    (0x494a, 0x07223), (0x494b, 0x074db), (0x494c, 0x074e5), (0x494d, 0x077d5), (0x494e, 0x07938), (0x494f, 0x079b7),
    (0x4950, 0x079b6), (0x4951, 0x07c6a), (0x4952, 0x07e97), (0x4953, 0x07f89), (0x4954, 0x0826d), (0x4955, 0x08643),
    (0x4956, 0x08838), (0x4957, 0x08837), (0x4958, 0x08835), (0x4959, 0x0884b), (0x495a, 0x08b94), (0x495b, 0x08b95),
    (0x495c, 0x08e9e), (0x495d, 0x08e9f), (0x495e, 0x08ea0), (0x495f, 0x08e9d), (0x4960, 0x091be), (0x4961, 0x091bd),
    (0x4962, 0x091c2), (0x4963, 0x0946b), (0x4964, 0x09468), (0x4965, 0x09469), (0x4966, 0x096e5), (0x4967, 0x09746),
    (0x4968, 0x09743), (0x4969, 0x09747), (0x496a, 0x097c7), (0x496b, 0x097e5), (0x496c, 0x09a5e), (0x496d, 0x09ad5),
    (0x496e, 0x09b59), (0x496f, 0x09c63), (0x4970, 0x09c67), (0x4971, 0x09c66), (0x4972, 0x09c62), (0x4973, 0x09c5e),
    (0x4974, 0x09c60), (0x4975, 0x09e02), (0x4976, 0x09dfe), (0x4977, 0x09e07), (0x4978, 0x09e03), (0x4979, 0x09e06),
    (0x497a, 0x09e05), (0x497b, 0x09e00), (0x497c, 0x09e01), (0x497d, 0x09e09), (0x497e, 0x09dff), (0x497f, 0x09dfd),
    (0x4980, 0x09e04), (0x4981, 0x09ea0), (0x4982, 0x09f1e), (0x4983, 0x09f46), (0x4984, 0x09f74), (0x4985, 0x09f75),
    (0x4986, 0x09f76), (0x4987, 0x056d4), (0x4988, 0x0652e), (0x4989, 0x065b8), (0x498a, 0x06b18), (0x498b, 0x06b19),
    (0x498c, 0x06b17), (0x498d, 0x06b1a), (0x498e, 0x07062), (0x498f, 0x07226), (0x4990, 0x072aa), (0x4991, 0x077d8),
    (0x4992, 0x077d9), (0x4993, 0x07939), (0x4994, 0x07c69), (0x4995, 0x07c6b), (0x4996, 0x07cf6), (0x4997, 0x07e9a),
    (0x4998, 0x07e98), (0x4999, 0x07e9b), (0x499a, 0x07e99), (0x499b, 0x081e0), (0x499c, 0x081e1), (0x499d, 0x08646),
    (0x499e, 0x08647), (0x499f, 0x08648), (0x49a0, 0x08979), (0x49a1, 0x0897a), (0x49a2, 0x0897c), (0x49a3, 0x0897b),
    (0x49a4, 0x089ff), (0x49a5, 0x08b98), (0x49a6, 0x08b99), (0x49a7, 0x08ea5), (0x49a8, 0x08ea4), (0x49a9, 0x08ea3),
    (0x49aa, 0x0946e), (0x49ab, 0x0946d), (0x49ac, 0x0946f), (0x49ad, 0x09471), (0x49ae, 0x09473), (0x49af, 0x09749),
    (0x49b0, 0x09872), (0x49b1, 0x0995f), (0x49b2, 0x09c68), (0x49b3, 0x09c6e), (0x49b4, 0x09c6d), (0x49b5, 0x09e0b),
    (0x49b6, 0x09e0d), (0x49b7, 0x09e10), (0x49b8, 0x09e0f), (0x49b9, 0x09e12), (0x49ba, 0x09e11), (0x49bb, 0x09ea1),
    (0x49bc, 0x09ef5), (0x49bd, 0x09f09), (0x49be, 0x09f47), (0x49bf, 0x09f78), (0x49c0, 0x09f7b), (0x49c1, 0x09f7a),
    (0x49c2, 0x09f79), (0x49c3, 0x0571e), (0x49c4, 0x07066), (0x49c5, 0x07c6f), (0x49c6, 0x0883c), (0x49c7, 0x08db2),
    (0x49c8, 0x08ea6), (0x49c9, 0x091c3), (0x49ca, 0x09474), (0x49cb, 0x09478), (0x49cc, 0x09476), (0x49cd, 0x09475),
    (0x49ce, 0x09a60), (0x49cf, 0x09c74), (0x49d0, 0x09c73), (0x49d1, 0x09c71), (0x49d2, 0x09c75), (0x49d3, 0x09e14),
    (0x49d4, 0x09e13), (0x49d5, 0x09ef6), (0x49d6, 0x09f0a), (0x49d7, 0x09fa4), (0x49d8, 0x07068), (0x49d9, 0x07065),
    (0x49da, 0x07cf7), (0x49db, 0x0866a), (0x49dc, 0x0883e), (0x49dd, 0x0883d), (0x49de, 0x0883f), (0x49df, 0x08b9e),
    (0x49e0, 0x08c9c), (0x49e1, 0x08ea9), (0x49e2, 0x08ec9), (0x49e3, 0x0974b), (0x49e4, 0x09873), (0x49e5, 0x09874),
    (0x49e6, 0x098cc), (0x49e7, 0x09961), (0x49e8, 0x099ab), (0x49e9, 0x09a64), (0x49ea, 0x09a66), (0x49eb, 0x09a67),
    (0x49ec, 0x09b24), (0x49ed, 0x09e15), (0x49ee, 0x09e17), (0x49ef, 0x09f48), (0x49f0, 0x06207), (0x49f1, 0x06b1e),
    (0x49f2, 0x07227), (0x49f3, 0x0864c), (0x49f4, 0x08ea8), (0x49f5, 0x09482), (0x49f6, 0x09480), (0x49f7, 0x09481),
    (0x49f8, 0x09a69), (0x49f9, 0x09a68), (0x49fa, 0x09b2e), (0x49fb, 0x09e19), (0x49fc, 0x07229), (0x49fd, 0x0864b),
    (0x49fe, 0x08b9f), (0x49ff, 0x09483), (0x4a00, 0x09c79), (0x4a01, 0x09eb7), (0x4a02, 0x07675), (0x4a03, 0x09a6b),
    (0x4a04, 0x09c7a), (0x4a05, 0x09e1d), (0x4a06, 0x07069), (0x4a07, 0x0706a), (0x4a08, 0x09ea4), (0x4a09, 0x09f7e),
    (0x4a0a, 0x09f49), (0x4a0b, 0x09f98), (0x4a0c, 0x07881), (0x4a0d, 0x092b9), (0x4a0e, 0x088cf), (0x4a0f, 0x058bb),
    (0x4a10, 0x06052), (0x4a11, 0x07ca7), (0x4a12, 0x05afa), (0x4a13, 0x02554), (0x4a14, 0x02566), (0x4a15, 0x02557),
    (0x4a16, 0x02560), (0x4a17, 0x0256c), (0x4a18, 0x02563), (0x4a19, 0x0255a), (0x4a1a, 0x02569), (0x4a1b, 0x0255d),
    (0x4a1c, 0x02552), (0x4a1d, 0x02564), (0x4a1e, 0x02555), (0x4a1f, 0x0255e), (0x4a20, 0x0256a), (0x4a21, 0x02561),
    (0x4a22, 0x02558), (0x4a23, 0x02567), (0x4a24, 0x0255b), (0x4a25, 0x02553), (0x4a26, 0x02565), (0x4a27, 0x02556),
    (0x4a28, 0x0255f), (0x4a29, 0x0256b), (0x4a2a, 0x02562), (0x4a2b, 0x02559), (0x4a2c, 0x02568), (0x4a2d, 0x0255c),
    (0x4a2e, 0x02551), (0x4a2f, 0x02550), (0x4a30, 0x0256d), (0x4a31, 0x0256e), (0x4a32, 0x02570), (0x4a33, 0x0256f),
    (0x4a34, 0x0ffed), (0x4a35, 0x20547), (0x4a36, 0x092db), (0x4a37, 0x205df), (0x4a38, 0x23fc5), (0x4a39, 0x0854c),
    (0x4a3a, 0x042b5), (0x4a3b, 0x073ef), (0x4a3c, 0x051b5), (0x4a3d, 0x03649), (0x4a3e, 0x24942), (0x4a3f, 0x289e4),
    (0x4a40, 0x09344), (0x4a41, 0x219db), (0x4a42, 0x082ee), (0x4a43, 0x23cc8), (0x4a44, 0x0783c), (0x4a45, 0x06744),
    (0x4a46, 0x062df), (0x4a47, 0x24933), (0x4a48, 0x289aa), (0x4a49, 0x202a0), (0x4a4a, 0x26bb3), (0x4a4b, 0x21305),
    (0x4a4c, 0x04fab), (0x4a4d, 0x224ed), (0x4a4e, 0x05008), (0x4a4f, 0x26d29), (0x4a50, 0x27a84), (0x4a51, 0x23600),
    (0x4a52, 0x24ab1), (0x4a53, 0x22513), (0x4a55, 0x2037e), (0x4a56, 0x05fa4), (0x4a57, 0x20380), (0x4a58, 0x20347),
    (0x4a59, 0x06edb), (0x4a5a, 0x2041f), (0x4a5c, 0x05101), (0x4a5d, 0x0347a), (0x4a5e, 0x0510e), (0x4a5f, 0x0986c),
    (0x4a60, 0x03743), (0x4a61, 0x08416), (0x4a62, 0x249a4), (0x4a63, 0x20487), (0x4a64, 0x05160), (0x4a65, 0x233b4),
    (0x4a66, 0x0516a), (0x4a67, 0x20bff), (0x4a68, 0x220fc), (0x4a69, 0x202e5), (0x4a6a, 0x22530), (0x4a6b, 0x2058e),
    (0x4a6c, 0x23233), (0x4a6d, 0x21983), (0x4a6e, 0x05b82), (0x4a6f, 0x0877d), (0x4a70, 0x205b3), (0x4a71, 0x23c99),
    (0x4a72, 0x051b2), (0x4a73, 0x051b8), (0x4a74, 0x09d34), (0x4a75, 0x051c9), (0x4a76, 0x051cf), (0x4a77, 0x051d1),
    (0x4a78, 0x03cdc), (0x4a79, 0x051d3), (0x4a7a, 0x24aa6), (0x4a7b, 0x051b3), (0x4a7c, 0x051e2), (0x4a7d, 0x05342),
    (0x4a7e, 0x051ed), (0x4a7f, 0x083cd), (0x4a80, 0x0693e), (0x4a81, 0x2372d), (0x4a82, 0x05f7b), (0x4a83, 0x0520b),
    (0x4a84, 0x05226), (0x4a85, 0x0523c), (0x4a86, 0x052b5), (0x4a87, 0x05257), (0x4a88, 0x05294), (0x4a89, 0x052b9),
    (0x4a8a, 0x052c5), (0x4a8b, 0x07c15), (0x4a8c, 0x08542), (0x4a8d, 0x052e0), (0x4a8e, 0x0860d), (0x4a8f, 0x26b13),
    (0x4a91, 0x28ade), (0x4a92, 0x05549), (0x4a93, 0x06ed9), (0x4a94, 0x23f80), (0x4a95, 0x20954), (0x4a96, 0x23fec),
    (0x4a97, 0x05333), (0x4a99, 0x20be2), (0x4a9a, 0x06ccb), (0x4a9b, 0x21726), (0x4a9c, 0x0681b), (0x4a9d, 0x073d5),
    (0x4a9e, 0x0604a), (0x4a9f, 0x03eaa), (0x4aa0, 0x038cc), (0x4aa1, 0x216e8), (0x4aa2, 0x071dd), (0x4aa3, 0x044a2),
    (0x4aa4, 0x0536d), (0x4aa5, 0x05374), (0x4aa6, 0x286ab), (0x4aa7, 0x0537e), (0x4aa9, 0x21596), (0x4aaa, 0x21613),
    (0x4aab, 0x077e6), (0x4aac, 0x05393), (0x4aad, 0x28a9b), (0x4aae, 0x053a0), (0x4aaf, 0x053ab), (0x4ab0, 0x053ae),
    (0x4ab1, 0x073a7), (0x4ab2, 0x25772), (0x4ab3, 0x03f59), (0x4ab4, 0x0739c), (0x4ab5, 0x053c1), (0x4ab6, 0x053c5),
    (0x4ab7, 0x06c49), (0x4ab8, 0x04e49), (0x4ab9, 0x057fe), (0x4aba, 0x053d9), (0x4abb, 0x03aab), (0x4abc, 0x20b8f),
    (0x4abd, 0x053e0), (0x4abe, 0x23feb), (0x4abf, 0x22da3), (0x4ac0, 0x053f6), (0x4ac1, 0x20c77), (0x4ac2, 0x05413),
    (0x4ac3, 0x07079), (0x4ac4, 0x0552b), (0x4ac5, 0x06657), (0x4ac6, 0x06d5b), (0x4ac7, 0x0546d), (0x4ac8, 0x26b53),
    (0x4ac9, 0x20d74), (0x4aca, 0x0555d), (0x4acb, 0x0548f), (0x4acc, 0x054a4), (0x4acd, 0x047a6), (0x4ace, 0x2170d),
    (0x4acf, 0x20edd), (0x4ad0, 0x03db4), (0x4ad1, 0x20d4d), (0x4ad2, 0x289bc), (0x4ad3, 0x22698), (0x4ad4, 0x05547),
    (0x4ad5, 0x04ced), (0x4ad6, 0x0542f), (0x4ad7, 0x07417), (0x4ad8, 0x05586), (0x4ad9, 0x055a9), (0x4adb, 0x218d7),
    (0x4adc, 0x2403a), (0x4add, 0x04552), (0x4ade, 0x24435), (0x4adf, 0x066b3), (0x4ae0, 0x210b4), (0x4ae1, 0x05637),
    (0x4ae2, 0x066cd), (0x4ae3, 0x2328a), (0x4ae4, 0x066a4), (0x4ae5, 0x066ad), (0x4ae6, 0x0564d), (0x4ae7, 0x0564f),
    (0x4ae8, 0x078f1), (0x4ae9, 0x056f1), (0x4aea, 0x09787), (0x4aeb, 0x053fe), (0x4aec, 0x05700), (0x4aed, 0x056ef),
    (0x4aee, 0x056ed), (0x4aef, 0x28b66), (0x4af0, 0x03623), (0x4af1, 0x2124f), (0x4af2, 0x05746), (0x4af3, 0x241a5),
    (0x4af4, 0x06c6e), (0x4af5, 0x0708b), (0x4af6, 0x05742), (0x4af7, 0x036b1), (0x4af8, 0x26c7e), (0x4af9, 0x057e6),
    (0x4afa, 0x21416), (0x4afb, 0x05803), (0x4afc, 0x21454), (0x4afd, 0x24363), (0x4afe, 0x05826), (0x4aff, 0x24bf5),
    (0x4b00, 0x0585c), (0x4b01, 0x058aa), (0x4b02, 0x03561), (0x4b03, 0x058e0), (0x4b04, 0x058dc), (0x4b05, 0x2123c),
    (0x4b06, 0x058fb), (0x4b07, 0x05bff), (0x4b08, 0x05743), (0x4b09, 0x2a150), (0x4b0a, 0x24278), (0x4b0b, 0x093d3),
    (0x4b0c, 0x035a1), (0x4b0d, 0x0591f), (0x4b0e, 0x068a6), (0x4b0f, 0x036c3), (0x4b10, 0x06e59), (0x4b11, 0x2163e),
    (0x4b12, 0x05a24), (0x4b13, 0x05553), (0x4b14, 0x21692), (0x4b15, 0x08505), (0x4b16, 0x059c9), (0x4b17, 0x20d4e),
    (0x4b18, 0x26c81), (0x4b19, 0x26d2a), (0x4b1a, 0x217dc), (0x4b1b, 0x059d9), (0x4b1c, 0x217fb), (0x4b1d, 0x217b2),
    (0x4b1e, 0x26da6), (0x4b1f, 0x06d71), (0x4b20, 0x21828), (0x4b21, 0x216d5), (0x4b22, 0x059f9), (0x4b23, 0x26e45),
    (0x4b24, 0x05aab), (0x4b25, 0x05a63), (0x4b26, 0x036e6), (0x4b27, 0x249a9), (0x4b29, 0x03708), (0x4b2a, 0x05a96),
    (0x4b2b, 0x07465), (0x4b2c, 0x05ad3), (0x4b2d, 0x26fa1), (0x4b2e, 0x22554), (0x4b2f, 0x03d85), (0x4b30, 0x21911),
    (0x4b31, 0x03732), (0x4b32, 0x216b8), (0x4b33, 0x05e83), (0x4b34, 0x052d0), (0x4b35, 0x05b76), (0x4b36, 0x06588),
    (0x4b37, 0x05b7c), (0x4b38, 0x27a0e), (0x4b39, 0x04004), (0x4b3a, 0x0485d), (0x4b3b, 0x20204), (0x4b3c, 0x05bd5),
    (0x4b3d, 0x06160), (0x4b3e, 0x21a34), (0x4b3f, 0x259cc), (0x4b40, 0x205a5), (0x4b41, 0x05bf3), (0x4b42, 0x05b9d),
    (0x4b43, 0x04d10), (0x4b44, 0x05c05), (0x4b45, 0x21b44), (0x4b46, 0x05c13), (0x4b47, 0x073ce), (0x4b48, 0x05c14),
    (0x4b49, 0x21ca5), (0x4b4a, 0x26b28), (0x4b4b, 0x05c49), (0x4b4c, 0x048dd), (0x4b4d, 0x05c85), (0x4b4e, 0x05ce9),
    (0x4b4f, 0x05cef), (0x4b50, 0x05d8b), (0x4b51, 0x21df9), (0x4b52, 0x21e37), (0x4b53, 0x05d10), (0x4b54, 0x05d18),
    (0x4b55, 0x05d46), (0x4b56, 0x21ea4), (0x4b57, 0x05cba), (0x4b58, 0x05dd7), (0x4b59, 0x082fc), (0x4b5a, 0x0382d),
    (0x4b5b, 0x24901), (0x4b5c, 0x22049), (0x4b5d, 0x22173), (0x4b5e, 0x08287), (0x4b5f, 0x03836), (0x4b60, 0x03bc2),
    (0x4b61, 0x05e2e), (0x4b62, 0x06a8a), (0x4b64, 0x05e7a), (0x4b65, 0x244bc), (0x4b66, 0x20cd3), (0x4b67, 0x053a6),
    (0x4b68, 0x04eb7), (0x4b6a, 0x053a8), (0x4b6b, 0x21771), (0x4b6c, 0x05e09), (0x4b6d, 0x05ef4), (0x4b6e, 0x28482),
    (0x4b6f, 0x05ef9), (0x4b70, 0x05efb), (0x4b71, 0x038a0), (0x4b72, 0x05efc), (0x4b73, 0x0683e), (0x4b74, 0x0941b),
    (0x4b75, 0x05f0d), (0x4b76, 0x201c1), (0x4b77, 0x2f894), (0x4b78, 0x03ade), (0x4b79, 0x048ae), (0x4b7a, 0x2133a),
    (0x4b7b, 0x05f3a), (0x4b7c, 0x26888), (0x4b7d, 0x223d0), (0x4b7f, 0x22471), (0x4b80, 0x05f63), (0x4b81, 0x097bd),
    (0x4b82, 0x26e6e), (0x4b83, 0x05f72), (0x4b84, 0x09340), (0x4b85, 0x28a36), (0x4b86, 0x05fa7), (0x4b87, 0x05db6),
    (0x4b88, 0x03d5f), (0x4b89, 0x25250), (0x4b8a, 0x21f6a), (0x4b8b, 0x270f8), (0x4b8c, 0x22668), (0x4b8d, 0x091d6),
    (0x4b8e, 0x2029e), (0x4b8f, 0x28a29), (0x4b90, 0x06031), (0x4b91, 0x06685), (0x4b92, 0x21877), (0x4b93, 0x03963),
    (0x4b94, 0x03dc7), (0x4b95, 0x03639), (0x4b96, 0x05790), (0x4b97, 0x227b4), (0x4b98, 0x07971), (0x4b99, 0x03e40),
    (0x4b9a, 0x0609e), (0x4b9c, 0x060b3), (0x4b9d, 0x24982), (0x4b9e, 0x2498f), (0x4b9f, 0x27a53), (0x4ba0, 0x074a4),
    (0x4ba1, 0x050e1), (0x4ba2, 0x05aa0), (0x4ba3, 0x06164), (0x4ba4, 0x08424), (0x4ba5, 0x06142), (0x4ba6, 0x2f8a6),
    (0x4ba7, 0x26ed2), (0x4ba8, 0x06181), (0x4ba9, 0x051f4), (0x4baa, 0x20656), (0x4bab, 0x06187), (0x4bac, 0x05baa),
    (0x4bad, 0x23fb7), (0x4bae, 0x2285f), (0x4baf, 0x061d3), (0x4bb0, 0x28b9d), (0x4bb1, 0x2995d), (0x4bb2, 0x061d0),
    (0x4bb3, 0x03932), (0x4bb4, 0x22980), (0x4bb5, 0x228c1), (0x4bb6, 0x06023), (0x4bb7, 0x0615c), (0x4bb8, 0x0651e),
    (0x4bb9, 0x0638b), (0x4bba, 0x20118), (0x4bbb, 0x062c5), (0x4bbc, 0x21770), (0x4bbd, 0x062d5), (0x4bbe, 0x22e0d),
    (0x4bbf, 0x0636c), (0x4bc0, 0x249df), (0x4bc1, 0x03a17), (0x4bc2, 0x06438), (0x4bc3, 0x063f8), (0x4bc4, 0x2138e),
    (0x4bc5, 0x217fc), (0x4bc7, 0x06f8a), (0x4bc8, 0x22e36), (0x4bc9, 0x09814), (0x4bca, 0x2408c), (0x4bcb, 0x2571d),
    (0x4bcc, 0x064e1), (0x4bcd, 0x064e5), (0x4bce, 0x0947b), (0x4bcf, 0x03a66), (0x4bd0, 0x0643a), (0x4bd1, 0x03a57),
    (0x4bd2, 0x0654d), (0x4bd3, 0x06f16), (0x4bd4, 0x24a28), (0x4bd5, 0x24a23), (0x4bd6, 0x06585), (0x4bd7, 0x0656d),
    (0x4bd8, 0x0655f), (0x4bd9, 0x2307e), (0x4bda, 0x065b5), (0x4bdb, 0x24940), (0x4bdc, 0x04b37), (0x4bdd, 0x065d1),
    (0x4bde, 0x040d8), (0x4bdf, 0x21829), (0x4be0, 0x065e0), (0x4be1, 0x065e3), (0x4be2, 0x05fdf), (0x4be3, 0x23400),
    (0x4be4, 0x06618), (0x4be5, 0x231f7), (0x4be6, 0x231f8), (0x4be7, 0x06644), (0x4be8, 0x231a4), (0x4be9, 0x231a5),
    (0x4bea, 0x0664b), (0x4beb, 0x20e75), (0x4bec, 0x06667), (0x4bed, 0x251e6), (0x4bee, 0x06673), (0x4bf0, 0x21e3d),
    (0x4bf1, 0x23231), (0x4bf2, 0x285f4), (0x4bf3, 0x231c8), (0x4bf4, 0x25313), (0x4bf5, 0x077c5), (0x4bf6, 0x228f7),
    (0x4bf7, 0x099a4), (0x4bf8, 0x06702), (0x4bf9, 0x2439c), (0x4bfa, 0x24a21), (0x4bfb, 0x03b2b), (0x4bfc, 0x069fa),
    (0x4bfd, 0x237c2), (0x4bff, 0x06767), (0x4c00, 0x06762), (0x4c01, 0x241cd), (0x4c02, 0x290ed), (0x4c03, 0x067d7),
    (0x4c04, 0x044e9), (0x4c05, 0x06822), (0x4c06, 0x06e50), (0x4c07, 0x0923c), (0x4c08, 0x06801), (0x4c09, 0x233e6),
    (0x4c0a, 0x26da0), (0x4c0b, 0x0685d), (0x4c0c, 0x2346f), (0x4c0d, 0x069e1), (0x4c0e, 0x06a0b), (0x4c0f, 0x28adf),
    (0x4c10, 0x06973), (0x4c11, 0x068c3), (0x4c12, 0x235cd), (0x4c13, 0x06901), (0x4c14, 0x06900), (0x4c15, 0x03d32),
    (0x4c16, 0x03a01), (0x4c17, 0x2363c), (0x4c18, 0x03b80), (0x4c19, 0x067ac), (0x4c1a, 0x06961), (0x4c1b, 0x28a4a),
    (0x4c1c, 0x042fc), (0x4c1d, 0x06936), (0x4c1e, 0x06998), (0x4c1f, 0x03ba1), (0x4c20, 0x203c9), (0x4c21, 0x08363),
    (0x4c22, 0x05090), (0x4c23, 0x069f9), (0x4c24, 0x23659), (0x4c25, 0x2212a), (0x4c26, 0x06a45), (0x4c27, 0x23703),
    (0x4c28, 0x06a9d), (0x4c29, 0x03bf3), (0x4c2a, 0x067b1), (0x4c2b, 0x06ac8), (0x4c2c, 0x2919c), (0x4c2d, 0x03c0d),
    (0x4c2e, 0x06b1d), (0x4c2f, 0x20923), (0x4c30, 0x060de), (0x4c31, 0x06b35), (0x4c32, 0x06b74), (0x4c33, 0x227cd),
    (0x4c34, 0x06eb5), (0x4c35, 0x23adb), (0x4c36, 0x203b5), (0x4c37, 0x21958), (0x4c38, 0x03740), (0x4c39, 0x05421),
    (0x4c3a, 0x23b5a), (0x4c3b, 0x06be1), (0x4c3c, 0x23efc), (0x4c3d, 0x06bdc), (0x4c3e, 0x06c37), (0x4c3f, 0x2248b),
    (0x4c40, 0x248f1), (0x4c41, 0x26b51), (0x4c42, 0x06c5a), (0x4c43, 0x08226), (0x4c44, 0x06c79), (0x4c45, 0x23dbc),
    (0x4c46, 0x044c5), (0x4c47, 0x23dbd), (0x4c48, 0x241a4), (0x4c49, 0x2490c), (0x4c4a, 0x24900), (0x4c4b, 0x23cc9),
    (0x4c4c, 0x036e5), (0x4c4d, 0x03ceb), (0x4c4e, 0x20d32), (0x4c4f, 0x09b83), (0x4c50, 0x231f9), (0x4c51, 0x22491),
    (0x4c52, 0x07f8f), (0x4c53, 0x06837), (0x4c54, 0x26d25), (0x4c55, 0x26da1), (0x4c56, 0x26deb), (0x4c57, 0x06d96),
    (0x4c58, 0x06d5c), (0x4c59, 0x06e7c), (0x4c5a, 0x06f04), (0x4c5b, 0x2497f), (0x4c5c, 0x24085), (0x4c5d, 0x26e72),
    (0x4c5e, 0x08533), (0x4c5f, 0x26f74), (0x4c60, 0x051c7), (0x4c63, 0x0842e), (0x4c64, 0x28b21), (0x4c66, 0x23e2f),
    (0x4c67, 0x07453), (0x4c68, 0x23f82), (0x4c69, 0x079cc), (0x4c6a, 0x06e4f), (0x4c6b, 0x05a91), (0x4c6c, 0x2304b),
    (0x4c6d, 0x06ff8), (0x4c6e, 0x0370d), (0x4c6f, 0x06f9d), (0x4c70, 0x23e30), (0x4c71, 0x06efa), (0x4c72, 0x21497),
    (0x4c73, 0x2403d), (0x4c74, 0x04555), (0x4c75, 0x093f0), (0x4c76, 0x06f44), (0x4c77, 0x06f5c), (0x4c78, 0x03d4e),
    (0x4c79, 0x06f74), (0x4c7a, 0x29170), (0x4c7b, 0x03d3b), (0x4c7c, 0x06f9f), (0x4c7d, 0x24144), (0x4c7e, 0x06fd3),
    (0x4c7f, 0x24091), (0x4c80, 0x24155), (0x4c81, 0x24039), (0x4c82, 0x23ff0), (0x4c83, 0x23fb4), (0x4c84, 0x2413f),
    (0x4c85, 0x051df), (0x4c86, 0x24156), (0x4c87, 0x24157), (0x4c88, 0x24140), (0x4c89, 0x261dd), (0x4c8a, 0x0704b),
    (0x4c8b, 0x0707e), (0x4c8c, 0x070a7), (0x4c8d, 0x07081), (0x4c8e, 0x070cc), (0x4c8f, 0x070d5), (0x4c90, 0x070d6),
    (0x4c91, 0x070df), (0x4c92, 0x04104), (0x4c93, 0x03de8), (0x4c94, 0x071b4), (0x4c95, 0x07196), (0x4c96, 0x24277),
    (0x4c97, 0x0712b), (0x4c98, 0x07145), (0x4c99, 0x05a88), (0x4c9a, 0x0714a), (0x4c9c, 0x05c9c), (0x4c9d, 0x24365),
    (0x4c9e, 0x0714f), (0x4c9f, 0x09362), (0x4ca0, 0x242c1), (0x4ca1, 0x0712c), (0x4ca2, 0x2445a), (0x4ca3, 0x24a27),
    (0x4ca4, 0x24a22), (0x4ca5, 0x071ba), (0x4ca6, 0x28be8), (0x4ca7, 0x070bd), (0x4ca8, 0x0720e), (0x4ca9, 0x09442),
    (0x4caa, 0x07215), (0x4cab, 0x05911), (0x4cac, 0x09443), (0x4cad, 0x07224), (0x4cae, 0x09341), (0x4caf, 0x25605),
    (0x4cb0, 0x0722e), (0x4cb1, 0x07240), (0x4cb2, 0x24974), (0x4cb3, 0x068bd), (0x4cb4, 0x07255), (0x4cb5, 0x07257),
    (0x4cb6, 0x03e55), (0x4cb7, 0x23044), (0x4cb8, 0x0680d), (0x4cb9, 0x06f3d), (0x4cba, 0x07282), (0x4cbc, 0x0732b),
    (0x4cbd, 0x24823), (0x4cbe, 0x2882b), (0x4cbf, 0x048ed), (0x4cc0, 0x28804), (0x4cc1, 0x07328), (0x4cc2, 0x0732e),
    (0x4cc3, 0x073cf), (0x4cc4, 0x073aa), (0x4cc5, 0x20c3a), (0x4cc6, 0x26a2e), (0x4cc7, 0x073c9), (0x4cc8, 0x07449),
    (0x4cc9, 0x241e2), (0x4cca, 0x216e7), (0x4ccb, 0x24a24), (0x4ccc, 0x06623), (0x4ccd, 0x036c5), (0x4cce, 0x249b7),
    (0x4ccf, 0x2498d), (0x4cd0, 0x249fb), (0x4cd1, 0x073f7), (0x4cd2, 0x07415), (0x4cd3, 0x06903), (0x4cd4, 0x24a26),
    (0x4cd5, 0x07439), (0x4cd6, 0x205c3), (0x4cd7, 0x03ed7), (0x4cd9, 0x228ad), (0x4cda, 0x07460), (0x4cdb, 0x28eb2),
    (0x4cdc, 0x07447), (0x4cdd, 0x073e4), (0x4cde, 0x07476), (0x4cdf, 0x083b9), (0x4ce0, 0x0746c), (0x4ce1, 0x03730),
    (0x4ce2, 0x07474), (0x4ce3, 0x093f1), (0x4ce4, 0x06a2c), (0x4ce5, 0x07482), (0x4ce6, 0x04953), (0x4ce7, 0x24a8c),
    (0x4ce8, 0x2415f), (0x4ce9, 0x24a79), (0x4cea, 0x28b8f), (0x4ceb, 0x05b46), (0x4cec, 0x28c03), (0x4ced, 0x2189e),
    (0x4cee, 0x074c8), (0x4cef, 0x21988), (0x4cf0, 0x0750e), (0x4cf2, 0x0751e), (0x4cf3, 0x28ed9), (0x4cf4, 0x21a4b),
    (0x4cf5, 0x05bd7), (0x4cf6, 0x28eac), (0x4cf7, 0x09385), (0x4cf8, 0x0754d), (0x4cf9, 0x0754a), (0x4cfa, 0x07567),
    (0x4cfb, 0x0756e), (0x4cfc, 0x24f82), (0x4cfd, 0x03f04), (0x4cfe, 0x24d13), (0x4cff, 0x0758e), (0x4d00, 0x0745d),
    (0x4d01, 0x0759e), (0x4d02, 0x075b4), (0x4d03, 0x07602), (0x4d04, 0x0762c), (0x4d05, 0x07651), (0x4d06, 0x0764f),
    (0x4d07, 0x0766f), (0x4d08, 0x07676), (0x4d09, 0x263f5), (0x4d0a, 0x07690), (0x4d0b, 0x081ef), (0x4d0c, 0x037f8),
    (0x4d0d, 0x26911), (0x4d0e, 0x2690e), (0x4d0f, 0x076a1), (0x4d10, 0x076a5), (0x4d11, 0x076b7), (0x4d12, 0x076cc),
    (0x4d13, 0x26f9f), (0x4d14, 0x08462), (0x4d15, 0x2509d), (0x4d16, 0x2517d), (0x4d17, 0x21e1c), (0x4d18, 0x0771e),
    (0x4d19, 0x07726), (0x4d1a, 0x07740), (0x4d1b, 0x064af), (0x4d1c, 0x25220), (0x4d1d, 0x07758), (0x4d1e, 0x232ac),
    (0x4d1f, 0x077af), (0x4d20, 0x28964), (0x4d21, 0x28968), (0x4d22, 0x216c1), (0x4d23, 0x077f4), (0x4d25, 0x21376),
    (0x4d26, 0x24a12), (0x4d27, 0x068ca), (0x4d28, 0x078af), (0x4d29, 0x078c7), (0x4d2a, 0x078d3), (0x4d2b, 0x096a5),
    (0x4d2c, 0x0792e), (0x4d2d, 0x255e0), (0x4d2e, 0x078d7), (0x4d2f, 0x07934), (0x4d30, 0x078b1), (0x4d31, 0x2760c),
    (0x4d32, 0x08fb8), (0x4d33, 0x08884), (0x4d34, 0x28b2b), (0x4d35, 0x26083), (0x4d36, 0x2261c), (0x4d37, 0x07986),
    (0x4d38, 0x08900), (0x4d39, 0x06902), (0x4d3a, 0x07980), (0x4d3b, 0x25857), (0x4d3c, 0x0799d), (0x4d3d, 0x27b39),
    (0x4d3e, 0x0793c), (0x4d3f, 0x079a9), (0x4d40, 0x06e2a), (0x4d41, 0x27126), (0x4d42, 0x03ea8), (0x4d43, 0x079c6),
    (0x4d44, 0x2910d), (0x4d45, 0x079d4),
];

pub static BIG5_DOUBLES: [(u16, u32, u32); 4] = [
    (0x046d, 0x00ca, 0x0304),
    (0x046f, 0x00ca, 0x030c),
    (0x048c, 0x00ea, 0x0304),
    (0x048e, 0x00ea, 0x030c),
];

pub static BIG5_ENCODE: [(u32, u16); 14612] = [
    (0x000a2, 0x1443), (0x000a3, 0x1444), (0x000a5, 0x1441), (0x000a7, 0x13ef), (0x000a8, 0x2ac7), (0x000b0, 0x1455),
    (0x000b1, 0x1411), (0x000b7, 0x13b0), (0x000d7, 0x140f), (0x000f7, 0x1410), (0x000f8, 0x2c24), (0x0014b, 0x2c25),
    (0x00153, 0x2c23), (0x00250, 0x2c1f), (0x00254, 0x2c21), (0x0025b, 0x2c20), (0x0026a, 0x2c27), (0x00275, 0x2c22),
    (0x00283, 0x2c1e), (0x0028a, 0x2c26), (0x002c6, 0x2ac8), (0x002c7, 0x1536), (0x002c9, 0x1534), (0x002ca, 0x1535),
    (0x002cb, 0x1537), (0x002cd, 0x1403), (0x002d9, 0x1533), (0x00391, 0x14de), (0x00392, 0x14df), (0x00393, 0x14e0),
    (0x00394, 0x14e1), (0x00395, 0x14e2), (0x00396, 0x14e3), (0x00397, 0x14e4), (0x00398, 0x14e5), (0x00399, 0x14e6),
    (0x0039a, 0x14e7), (0x0039b, 0x14e8), (0x0039c, 0x14e9), (0x0039d, 0x14ea), (0x0039e, 0x14eb), (0x0039f, 0x14ec),
    (0x003a0, 0x14ed), (0x003a1, 0x14ee), (0x003a3, 0x14ef), (0x003a4, 0x14f0), (0x003a5, 0x14f1), (0x003a6, 0x14f2),
    (0x003a7, 0x14f3), (0x003a8, 0x14f4), (0x003a9, 0x14f5), (0x003b1, 0x14f6), (0x003b2, 0x14f7), (0x003b3, 0x14f8),
    (0x003b4, 0x14f9), (0x003b5, 0x14fa), (0x003b6, 0x14fb), (0x003b7, 0x14fc), (0x003b8, 0x14fd), (0x003b9, 0x14fe),
    (0x003ba, 0x14ff), (0x003bb, 0x1500), (0x003bc, 0x1501), (0x003bd, 0x1502), (0x003be, 0x1503), (0x003bf, 0x1504),
    (0x003c0, 0x1505), (0x003c1, 0x1506), (0x003c3, 0x1507), (0x003c4, 0x1508), (0x003c5, 0x1509), (0x003c6, 0x150a),
    (0x003c7, 0x150b), (0x003c8, 0x150c), (0x003c9, 0x150d), (0x00401, 0x2b85), (0x00410, 0x2b7f), (0x00411, 0x2b80),
    (0x00412, 0x2b81), (0x00413, 0x2b82), (0x00414, 0x2b83), (0x00415, 0x2b84), (0x00416, 0x2b86), (0x00417, 0x2b87),
    (0x00418, 0x2b88), (0x00419, 0x2b89), (0x0041a, 0x2b8a), (0x0041b, 0x2b8b), (0x0041c, 0x2b8c), (0x0041d, 0x2b8d),
    (0x0041e, 0x2b8e), (0x0041f, 0x2b8f), (0x00420, 0x2b90), (0x00421, 0x2b91), (0x00422, 0x2b92), (0x00423, 0x2b93),
    (0x00424, 0x2b94), (0x00425, 0x2b95), (0x00426, 0x2b96), (0x00427, 0x2b97), (0x00428, 0x2b98), (0x00429, 0x2b99),
    (0x0042a, 0x2b9a), (0x0042b, 0x2b9b), (0x0042c, 0x2b9c), (0x0042d, 0x2b9d), (0x0042e, 0x2b9e), (0x0042f, 0x2b9f),
    (0x00430, 0x2ba0), (0x00431, 0x2ba1), (0x00432, 0x2ba2), (0x00433, 0x2ba3), (0x00434, 0x2ba4), (0x00435, 0x2ba5),
    (0x00436, 0x2ba7), (0x00437, 0x2ba8), (0x00438, 0x2ba9), (0x00439, 0x2baa), (0x0043a, 0x2bab), (0x0043b, 0x2bac),
    (0x0043c, 0x2bad), (0x0043d, 0x2bae), (0x0043e, 0x2baf), (0x0043f, 0x2bb0), (0x00440, 0x2bb1), (0x00441, 0x2bb2),
    (0x00442, 0x2bb3), (0x00443, 0x2bb4), (0x00444, 0x2bb5), (0x00445, 0x2bb6), (0x00446, 0x2bb7), (0x00447, 0x2bb8),
    (0x00448, 0x2bb9), (0x00449, 0x2bba), (0x0044a, 0x2bbb), (0x0044b, 0x2bbc), (0x0044c, 0x2bbd), (0x0044d, 0x2bbe),
    (0x0044e, 0x2bbf), (0x0044f, 0x2bc0), (0x00451, 0x2ba6), (0x02013, 0x13b6), (0x02014, 0x13b8), (0x02018, 0x13e3),
    (0x02019, 0x13e4), (0x0201c, 0x13e5), (0x0201d, 0x13e6), (0x02022, 0x13a5), (0x02025, 0x13ac), (0x02026, 0x13ab),
    (0x02032, 0x13ea), (0x02035, 0x13e9), (0x0203b, 0x13ee), (0x0203e, 0x1400), (0x02103, 0x1447), (0x02105, 0x13ff),
    (0x02109, 0x1448), (0x02116, 0x2bfb), (0x02121, 0x2bfc), (0x02160, 0x1494), (0x02161, 0x1495), (0x02162, 0x1496),
    (0x02163, 0x1497), (0x02164, 0x1498), (0x02165, 0x1499), (0x02166, 0x149a), (0x02167, 0x149b), (0x02168, 0x149c),
    (0x02169, 0x149d), (0x02170, 0x2aa4), (0x02171, 0x2aa5), (0x02172, 0x2aa6), (0x02173, 0x2aa7), (0x02174, 0x2aa8),
    (0x02175, 0x2aa9), (0x02176, 0x2aaa), (0x02177, 0x2aab), (0x02178, 0x2aac), (0x02179, 0x2aad), (0x02190, 0x1434),
    (0x02191, 0x1432), (0x02192, 0x1435), (0x02193, 0x1433), (0x02196, 0x1436), (0x02197, 0x1437), (0x02198, 0x1439),
    (0x02199, 0x1438), (0x021b8, 0x2bc2), (0x021b9, 0x2bc3), (0x021e7, 0x2bc1), (0x0221a, 0x1412), (0x0221e, 0x1419),
    (0x0221f, 0x1426), (0x02220, 0x1425), (0x02223, 0x143b), (0x02225, 0x143a), (0x02229, 0x1422), (0x0222a, 0x1423),
    (0x0222b, 0x142a), (0x0222e, 0x142b), (0x02234, 0x142d), (0x02235, 0x142c), (0x0223c, 0x1421), (0x02252, 0x141a),
    (0x02260, 0x1418), (0x02261, 0x141b), (0x02266, 0x1416), (0x02267, 0x1417), (0x022a5, 0x1424), (0x022bf, 0x1427),
    (0x02460, 0x2a90), (0x02461, 0x2a91), (0x02462, 0x2a92), (0x02463, 0x2a93), (0x02464, 0x2a94), (0x02465, 0x2a95),
    (0x02466, 0x2a96), (0x02467, 0x2a97), (0x02468, 0x2a98), (0x02469, 0x2a99), (0x02474, 0x2a9a), (0x02475, 0x2a9b),
    (0x02476, 0x2a9c), (0x02477, 0x2a9d), (0x02478, 0x2a9e), (0x02479, 0x2a9f), (0x0247a, 0x2aa0), (0x0247b, 0x2aa1),
    (0x0247c, 0x2aa2), (0x0247d, 0x2aa3), (0x02500, 0x1474), (0x02502, 0x1475), (0x0250c, 0x1477), (0x02510, 0x1478),
    (0x02514, 0x1479), (0x02518, 0x147a), (0x0251c, 0x1472), (0x02524, 0x1471), (0x0252c, 0x1470), (0x02534, 0x146f),
    (0x0253c, 0x146e), (0x02550, 0x4a2f), (0x02551, 0x4a2e), (0x02552, 0x4a1c), (0x02553, 0x4a25), (0x02554, 0x4a13),
    (0x02555, 0x4a1e), (0x02556, 0x4a27), (0x02557, 0x4a15), (0x02558, 0x4a22), (0x02559, 0x4a2b), (0x0255a, 0x4a19),
    (0x0255b, 0x4a24), (0x0255c, 0x4a2d), (0x0255d, 0x4a1b), (0x0255e, 0x4a1f), (0x0255f, 0x4a28), (0x02560, 0x4a16),
    (0x02561, 0x4a21), (0x02562, 0x4a2a), (0x02563, 0x4a18), (0x02564, 0x4a1d), (0x02565, 0x4a26), (0x02566, 0x4a14),
    (0x02567, 0x4a23), (0x02568, 0x4a2c), (0x02569, 0x4a1a), (0x0256a, 0x4a20), (0x0256b, 0x4a29), (0x0256c, 0x4a17),
    (0x0256d, 0x147b), (0x0256e, 0x147c), (0x0256f, 0x147e), (0x02570, 0x147d), (0x02571, 0x1487), (0x02572, 0x1488),
    (0x02573, 0x1489), (0x02574, 0x13ba), (0x02581, 0x145f), (0x02582, 0x1460), (0x02583, 0x1461), (0x02584, 0x1462),
    (0x02585, 0x1463), (0x02586, 0x1464), (0x02587, 0x1465), (0x02588, 0x1466), (0x02589, 0x146d), (0x0258a, 0x146c),
    (0x0258b, 0x146b), (0x0258c, 0x146a), (0x0258d, 0x1469), (0x0258e, 0x1468), (0x0258f, 0x1467), (0x02594, 0x1473),
    (0x02595, 0x1476), (0x025a0, 0x13fb), (0x025a1, 0x13fa), (0x025b2, 0x13f4), (0x025b3, 0x13f3), (0x025bc, 0x13fd),
    (0x025bd, 0x13fc), (0x025c6, 0x13f9), (0x025c7, 0x13f8), (0x025cb, 0x13f1), (0x025ce, 0x13f5), (0x025cf, 0x13f2),
    (0x025e2, 0x1483), (0x025e3, 0x1484), (0x025e4, 0x1486), (0x025e5, 0x1485), (0x02605, 0x13f7), (0x02606, 0x13f6),
    (0x02609, 0x1431), (0x02640, 0x142e), (0x02641, 0x1430), (0x02642, 0x142f), (0x0273d, 0x2ad5), (0x02e80, 0x2bff),
    (0x02e84, 0x2c00), (0x02e86, 0x2c01), (0x02e87, 0x2c02), (0x02e88, 0x2c03), (0x02e8a, 0x2c04), (0x02e8c, 0x2c05),
    (0x02e8d, 0x2c06), (0x02e95, 0x2c07), (0x02e9c, 0x2c08), (0x02e9d, 0x2c09), (0x02ea5, 0x2c0a), (0x02ea7, 0x2c0b),
    (0x02eaa, 0x2c0c), (0x02eac, 0x2c0d), (0x02eae, 0x2c0e), (0x02eb6, 0x2c0f), (0x02ebc, 0x2c10), (0x02ebe, 0x2c11),
    (0x02ec6, 0x2c12), (0x02eca, 0x2c13), (0x02ecc, 0x2c14), (0x02ecd, 0x2c15), (0x02ecf, 0x2c16), (0x02ed6, 0x2c17),
    (0x02ed7, 0x2c18), (0x02ede, 0x2c19), (0x02ee3, 0x2c1a), (0x02f33, 0x2abc), (0x03000, 0x13a0), (0x03001, 0x13a2),
    (0x03002, 0x13a3), (0x03003, 0x13f0), (0x03005, 0x2acf), (0x03006, 0x2ad0), (0x03007, 0x2ad1), (0x03008, 0x13d1),
    (0x03009, 0x13d2), (0x0300a, 0x13cd), (0x0300b, 0x13ce), (0x0300c, 0x13d5), (0x0300d, 0x13d6), (0x0300e, 0x13d9),
    (0x0300f, 0x13da), (0x03010, 0x13c9), (0x03011, 0x13ca), (0x03012, 0x1442), (0x03014, 0x13c5), (0x03015, 0x13c6),
    (0x0301d, 0x13e7), (0x0301e, 0x13e8), (0x03021, 0x149e), (0x03022, 0x149f), (0x03023, 0x14a0), (0x03024, 0x14a1),
    (0x03025, 0x14a2), (0x03026, 0x14a3), (0x03027, 0x14a4), (0x03028, 0x14a5), (0x03029, 0x14a6), (0x03041, 0x2ad6),
    (0x03042, 0x2ad7), (0x03043, 0x2ad8), (0x03044, 0x2ad9), (0x03045, 0x2ada), (0x03046, 0x2adb), (0x03047, 0x2adc),
    (0x03048, 0x2add), (0x03049, 0x2ade), (0x0304a, 0x2adf), (0x0304b, 0x2ae0), (0x0304c, 0x2ae1), (0x0304d, 0x2ae2),
    (0x0304e, 0x2ae3), (0x0304f, 0x2ae4), (0x03050, 0x2ae5), (0x03051, 0x2ae6), (0x03052, 0x2ae7), (0x03053, 0x2ae8),
    (0x03054, 0x2ae9), (0x03055, 0x2aea), (0x03056, 0x2aeb), (0x03057, 0x2aec), (0x03058, 0x2aed), (0x03059, 0x2aee),
    (0x0305a, 0x2aef), (0x0305b, 0x2af0), (0x0305c, 0x2af1), (0x0305d, 0x2af2), (0x0305e, 0x2af3), (0x0305f, 0x2af4),
    (0x03060, 0x2af5), (0x03061, 0x2af6), (0x03062, 0x2af7), (0x03063, 0x2af8), (0x03064, 0x2af9), (0x03065, 0x2afa),
    (0x03066, 0x2afb), (0x03067, 0x2afc), (0x03068, 0x2afd), (0x03069, 0x2afe), (0x0306a, 0x2aff), (0x0306b, 0x2b00),
    (0x0306c, 0x2b01), (0x0306d, 0x2b02), (0x0306e, 0x2b03), (0x0306f, 0x2b04), (0x03070, 0x2b05), (0x03071, 0x2b06),
    (0x03072, 0x2b07), (0x03073, 0x2b08), (0x03074, 0x2b09), (0x03075, 0x2b0a), (0x03076, 0x2b0b), (0x03077, 0x2b0c),
    (0x03078, 0x2b0d), (0x03079, 0x2b0e), (0x0307a, 0x2b0f), (0x0307b, 0x2b10), (0x0307c, 0x2b11), (0x0307d, 0x2b12),
    (0x0307e, 0x2b13), (0x0307f, 0x2b14), (0x03080, 0x2b15), (0x03081, 0x2b16), (0x03082, 0x2b17), (0x03083, 0x2b18),
    (0x03084, 0x2b19), (0x03085, 0x2b1a), (0x03086, 0x2b1b), (0x03087, 0x2b1c), (0x03088, 0x2b1d), (0x03089, 0x2b1e),
    (0x0308a, 0x2b1f), (0x0308b, 0x2b20), (0x0308c, 0x2b21), (0x0308d, 0x2b22), (0x0308e, 0x2b23), (0x0308f, 0x2b24),
    (0x03090, 0x2b25), (0x03091, 0x2b26), (0x03092, 0x2b27), (0x03093, 0x2b28), (0x0309b, 0x2bfd), (0x0309c, 0x2bfe),
    (0x0309d, 0x2acb), (0x0309e, 0x2acc), (0x030a1, 0x2b29), (0x030a2, 0x2b2a), (0x030a3, 0x2b2b), (0x030a4, 0x2b2c),
    (0x030a5, 0x2b2d), (0x030a6, 0x2b2e), (0x030a7, 0x2b2f), (0x030a8, 0x2b30), (0x030a9, 0x2b31), (0x030aa, 0x2b32),
    (0x030ab, 0x2b33), (0x030ac, 0x2b34), (0x030ad, 0x2b35), (0x030ae, 0x2b36), (0x030af, 0x2b37), (0x030b0, 0x2b38),
    (0x030b1, 0x2b39), (0x030b2, 0x2b3a), (0x030b3, 0x2b3b), (0x030b4, 0x2b3c), (0x030b5, 0x2b3d), (0x030b6, 0x2b3e),
    (0x030b7, 0x2b3f), (0x030b8, 0x2b40), (0x030b9, 0x2b41), (0x030ba, 0x2b42), (0x030bb, 0x2b43), (0x030bc, 0x2b44),
    (0x030bd, 0x2b45), (0x030be, 0x2b46), (0x030bf, 0x2b47), (0x030c0, 0x2b48), (0x030c1, 0x2b49), (0x030c2, 0x2b4a),
    (0x030c3, 0x2b4b), (0x030c4, 0x2b4c), (0x030c5, 0x2b4d), (0x030c6, 0x2b4e), (0x030c7, 0x2b4f), (0x030c8, 0x2b50),
    (0x030c9, 0x2b51), (0x030ca, 0x2b52), (0x030cb, 0x2b53), (0x030cc, 0x2b54), (0x030cd, 0x2b55), (0x030ce, 0x2b56),
    (0x030cf, 0x2b57), (0x030d0, 0x2b58), (0x030d1, 0x2b59), (0x030d2, 0x2b5a), (0x030d3, 0x2b5b), (0x030d4, 0x2b5c),
    (0x030d5, 0x2b5d), (0x030d6, 0x2b5e), (0x030d7, 0x2b5f), (0x030d8, 0x2b60), (0x030d9, 0x2b61), (0x030da, 0x2b62),
    (0x030db, 0x2b63), (0x030dc, 0x2b64), (0x030dd, 0x2b65), (0x030de, 0x2b66), (0x030df, 0x2b67), (0x030e0, 0x2b68),
    (0x030e1, 0x2b69), (0x030e2, 0x2b6a), (0x030e3, 0x2b6b), (0x030e4, 0x2b6c), (0x030e5, 0x2b6d), (0x030e6, 0x2b6e),
    (0x030e7, 0x2b6f), (0x030e8, 0x2b70), (0x030e9, 0x2b71), (0x030ea, 0x2b72), (0x030eb, 0x2b73), (0x030ec, 0x2b74),
    (0x030ed, 0x2b75), (0x030ee, 0x2b76), (0x030ef, 0x2b77), (0x030f0, 0x2b78), (0x030f1, 0x2b79), (0x030f2, 0x2b7a),
    (0x030f3, 0x2b7b), (0x030f4, 0x2b7c), (0x030f5, 0x2b7d), (0x030f6, 0x2b7e), (0x030fc, 0x2ad2), (0x030fd, 0x2ac9),
    (0x030fe, 0x2aca), (0x03105, 0x150e), (0x03106, 0x150f), (0x03107, 0x1510), (0x03108, 0x1511), (0x03109, 0x1512),
    (0x0310a, 0x1513), (0x0310b, 0x1514), (0x0310c, 0x1515), (0x0310d, 0x1516), (0x0310e, 0x1517), (0x0310f, 0x1518),
    (0x03110, 0x1519), (0x03111, 0x151a), (0x03112, 0x151b), (0x03113, 0x151c), (0x03114, 0x151d), (0x03115, 0x151e),
    (0x03116, 0x151f), (0x03117, 0x1520), (0x03118, 0x1521), (0x03119, 0x1522), (0x0311a, 0x1523), (0x0311b, 0x1524),
    (0x0311c, 0x1525), (0x0311d, 0x1526), (0x0311e, 0x1527), (0x0311f, 0x1528), (0x03120, 0x1529), (0x03121, 0x152a),
    (0x03122, 0x152b), (0x03123, 0x152c), (0x03124, 0x152d), (0x03125, 0x152e), (0x03126, 0x152f), (0x03127, 0x1530),
    (0x03128, 0x1531), (0x03129, 0x1532), (0x031cf, 0x2bc4), (0x03231, 0x2bfa), (0x032a3, 0x13fe), (0x0338e, 0x1452),
    (0x0338f, 0x1453), (0x0339c, 0x144d), (0x0339d, 0x144e), (0x0339e, 0x144f), (0x033a1, 0x1451), (0x033c4, 0x1454),
    (0x033ce, 0x1450), (0x033d1, 0x1429), (0x033d2, 0x1428), (0x033d5, 0x144c), (0x0347a, 0x4a5d), (0x03561, 0x4b02),
    (0x035a1, 0x4b0c), (0x03623, 0x4af0), (0x03639, 0x4b95), (0x03649, 0x4a3d), (0x036b1, 0x4af7), (0x036c3, 0x4b0f),
    (0x036c5, 0x4ccd), (0x036e5, 0x4c4c), (0x036e6, 0x4b26), (0x03708, 0x4b29), (0x0370d, 0x4c6e), (0x03730, 0x4ce1),
    (0x03732, 0x4b31), (0x03740, 0x4c38), (0x03743, 0x4a60), (0x037f8, 0x4d0c), (0x0382d, 0x4b5a), (0x03836, 0x4b5f),
    (0x038a0, 0x4b71), (0x038cc, 0x4aa0), (0x03932, 0x4bb3), (0x03963, 0x4b93), (0x03a01, 0x4c16), (0x03a17, 0x4bc1),
    (0x03a57, 0x4bd1), (0x03a66, 0x4bcf), (0x03aab, 0x4abb), (0x03ade, 0x4b78), (0x03b2b, 0x4bfb), (0x03b80, 0x4c18),
    (0x03ba1, 0x4c1f), (0x03bc2, 0x4b60), (0x03bf3, 0x4c29), (0x03c0d, 0x4c2d), (0x03cdc, 0x4a78), (0x03ceb, 0x4c4d),
    (0x03d32, 0x4c15), (0x03d3b, 0x4c7b), (0x03d4e, 0x4c78), (0x03d5f, 0x4b88), (0x03d85, 0x4b2f), (0x03db4, 0x4ad0),
    (0x03dc7, 0x4b94), (0x03de8, 0x4c93), (0x03e40, 0x4b99), (0x03e55, 0x4cb6), (0x03ea8, 0x4d42), (0x03eaa, 0x4a9f),
    (0x03ed7, 0x4cd7), (0x03f04, 0x4cfd), (0x03f59, 0x4ab3), (0x04004, 0x4b39), (0x040d8, 0x4bde), (0x04104, 0x4c92),
    (0x042b5, 0x4a3a), (0x042fc, 0x4c1c), (0x04491, 0x2bc9), (0x044a2, 0x4aa3), (0x044c5, 0x4c46), (0x044e9, 0x4c04),
    (0x04552, 0x4add), (0x04555, 0x4c74), (0x047a6, 0x4acd), (0x0485d, 0x4b3a), (0x048ae, 0x4b79), (0x048dd, 0x4b4c),
    (0x048ed, 0x4cbf), (0x04953, 0x4ce6), (0x04b37, 0x4bdc), (0x04ced, 0x4ad5), (0x04d10, 0x4b43), (0x04e00, 0x1577),
    (0x04e01, 0x1579), (0x04e03, 0x157a), (0x04e07, 0x2c2d), (0x04e08, 0x158d), (0x04e09, 0x158b), (0x04e0a, 0x158e),
    (0x04e0b, 0x158c), (0x04e0c, 0x2c2e), (0x04e0d, 0x15b8), (0x04e0e, 0x2c37), (0x04e0f, 0x2c35), (0x04e10, 0x15b7),
    (0x04e11, 0x15b6), (0x04e14, 0x1616), (0x04e15, 0x1615), (0x04e16, 0x1614), (0x04e18, 0x1617), (0x04e19, 0x1613),
    (0x04e1e, 0x1692), (0x04e1f, 0x1693), (0x04e26, 0x184c), (0x04e2b, 0x158f), (0x04e2d, 0x15b9), (0x04e2e, 0x2c38),
    (0x04e30, 0x15ba), (0x04e31, 0x2c4b), (0x04e32, 0x1739), (0x04e33, 0x2db1), (0x04e36, 0x2aae), (0x04e38, 0x1590),
    (0x04e39, 0x15bb), (0x04e3b, 0x1618), (0x04e3c, 0x2c4c), (0x04e3f, 0x2aaf), (0x04e42, 0x2c28), (0x04e43, 0x157b),
    (0x04e45, 0x1592), (0x04e47, 0x2c2f), (0x04e48, 0x1593), (0x04e49, 0x4ab8), (0x04e4b, 0x15bc), (0x04e4d, 0x1619),
    (0x04e4e, 0x161b), (0x04e4f, 0x161a), (0x04e52, 0x1694), (0x04e53, 0x1695), (0x04e56, 0x184d), (0x04e58, 0x1b56),
    (0x04e59, 0x1578), (0x04e5a, 0x2bc6), (0x04e5c, 0x2c29), (0x04e5d, 0x157c), (0x04e5e, 0x1595), (0x04e5f, 0x1594),
    (0x04e69, 0x1696), (0x04e73, 0x184e), (0x04e7e, 0x1d1f), (0x04e7f, 0x32f2), (0x04e82, 0x20e2), (0x04e83, 0x381e),
    (0x04e84, 0x381f), (0x04e85, 0x2ab0), (0x04e86, 0x157d), (0x04e88, 0x15be), (0x04e8b, 0x184f), (0x04e8c, 0x157e),
    (0x04e8d, 0x2c30), (0x04e8e, 0x1596), (0x04e91, 0x15bf), (0x04e92, 0x15c1), (0x04e93, 0x2c39), (0x04e94, 0x15c2),
    (0x04e95, 0x15c0), (0x04e99, 0x1697), (0x04e9b, 0x1850), (0x04e9e, 0x1851), (0x04e9f, 0x19c7), (0x04ea0, 0x2ab1),
    (0x04ea1, 0x1597), (0x04ea2, 0x15c3), (0x04ea4, 0x1698), (0x04ea5, 0x169a), (0x04ea6, 0x1699), (0x04ea8, 0x173a),
    (0x04eab, 0x1852), (0x04eac, 0x1853), (0x04ead, 0x19c8), (0x04eae, 0x19c9), (0x04eb3, 0x1b57), (0x04eb6, 0x3820),
    (0x04eb7, 0x4b68), (0x04eb9, 0x4835), (0x04eba, 0x157f), (0x04ec0, 0x15c5), (0x04ec1, 0x15c4), (0x04ec2, 0x2c3a),
    (0x04ec3, 0x15c6), (0x04ec4, 0x15cc), (0x04ec6, 0x15c7), (0x04ec7, 0x15c8), (0x04ec8, 0x2c3c), (0x04ec9, 0x2c3b),
    (0x04eca, 0x15ca), (0x04ecb, 0x15cb), (0x04ecd, 0x15c9), (0x04ed4, 0x161e), (0x04ed5, 0x161f), (0x04ed6, 0x1620),
    (0x04ed7, 0x1621), (0x04ed8, 0x161d), (0x04ed9, 0x1624), (0x04eda, 0x2c52), (0x04edc, 0x2c4e), (0x04edd, 0x2c51),
    (0x04ede, 0x1625), (0x04edf, 0x1635), (0x04ee1, 0x2c50), (0x04ee3, 0x1622), (0x04ee4, 0x1623), (0x04ee5, 0x161c),
    (0x04ee8, 0x2c4d), (0x04ee9, 0x2c4f), (0x04ef0, 0x16a7), (0x04ef1, 0x2c76), (0x04ef2, 0x16a4), (0x04ef3, 0x16a8),
    (0x04ef4, 0x2c80), (0x04ef5, 0x2c74), (0x04ef6, 0x16a5), (0x04ef7, 0x2c78), (0x04efb, 0x16a6), (0x04efd, 0x16a9),
    (0x04eff, 0x169b), (0x04f00, 0x2c77), (0x04f01, 0x16aa), (0x04f02, 0x2c7b), (0x04f04, 0x2c7f), (0x04f05, 0x2c7c),
    (0x04f08, 0x2c79), (0x04f09, 0x169c), (0x04f0a, 0x169e), (0x04f0b, 0x16ab), (0x04f0d, 0x16a0), (0x04f0e, 0x2c71),
    (0x04f0f, 0x16a3), (0x04f10, 0x16a1), (0x04f11, 0x16a2), (0x04f12, 0x2c81), (0x04f13, 0x2c7e), (0x04f14, 0x2c75),
    (0x04f15, 0x169f), (0x04f18, 0x2c72), (0x04f19, 0x169d), (0x04f1d, 0x2c7a), (0x04f22, 0x2c7d), (0x04f2c, 0x2c73),
    (0x04f2d, 0x2ceb), (0x04f2f, 0x1750), (0x04f30, 0x1743), (0x04f33, 0x2cec), (0x04f34, 0x1740), (0x04f36, 0x1752),
    (0x04f38, 0x1748), (0x04f3a, 0x1747), (0x04f3b, 0x2ce0), (0x04f3c, 0x174b), (0x04f3d, 0x1746), (0x04f3e, 0x2ce5),
    (0x04f3f, 0x2ced), (0x04f41, 0x2ce9), (0x04f43, 0x1749), (0x04f46, 0x174c), (0x04f47, 0x173d), (0x04f48, 0x1755),
    (0x04f49, 0x2ce2), (0x04f4c, 0x2dbd), (0x04f4d, 0x173b), (0x04f4e, 0x1751), (0x04f4f, 0x173c), (0x04f50, 0x1744),
    (0x04f51, 0x1745), (0x04f52, 0x2ce7), (0x04f53, 0x2ce3), (0x04f54, 0x174a), (0x04f55, 0x1742), (0x04f56, 0x2cdf),
    (0x04f57, 0x173e), (0x04f58, 0x2cea), (0x04f59, 0x1753), (0x04f5a, 0x1756), (0x04f5b, 0x1741), (0x04f5c, 0x174e),
    (0x04f5d, 0x1754), (0x04f5e, 0x173f), (0x04f5f, 0x2ce8), (0x04f60, 0x174f), (0x04f61, 0x2cee), (0x04f62, 0x2ce1),
    (0x04f63, 0x174d), (0x04f64, 0x2ce4), (0x04f67, 0x2ce6), (0x04f69, 0x1861), (0x04f6a, 0x2dbf), (0x04f6b, 0x2dcb),
    (0x04f6c, 0x1859), (0x04f6e, 0x2dcc), (0x04f6f, 0x1854), (0x04f70, 0x185e), (0x04f73, 0x1857), (0x04f74, 0x2db9),
    (0x04f75, 0x185f), (0x04f76, 0x2db8), (0x04f77, 0x2dbc), (0x04f78, 0x2dc3), (0x04f79, 0x2dc1), (0x04f7a, 0x1867),
    (0x04f7b, 0x1862), (0x04f7c, 0x2db3), (0x04f7d, 0x2db5), (0x04f7e, 0x1864), (0x04f7f, 0x1858), (0x04f80, 0x2db6),
    (0x04f81, 0x2dc2), (0x04f82, 0x2dc9), (0x04f83, 0x185d), (0x04f84, 0x2dbb), (0x04f85, 0x2db4), (0x04f86, 0x185c),
    (0x04f87, 0x2db7), (0x04f88, 0x1860), (0x04f89, 0x2dba), (0x04f8b, 0x185b), (0x04f8d, 0x1856), (0x04f8f, 0x1865),
    (0x04f90, 0x2dc4), (0x04f91, 0x1866), (0x04f92, 0x2dc8), (0x04f94, 0x2dc6), (0x04f95, 0x2dca), (0x04f96, 0x1863),
    (0x04f97, 0x2dbe), (0x04f98, 0x2db2), (0x04f9a, 0x2dc0), (0x04f9b, 0x185a), (0x04f9c, 0x2dc5), (0x04f9d, 0x1855),
    (0x04f9e, 0x2dc7), (0x04fab, 0x4a4c), (0x04fae, 0x19d8), (0x04faf, 0x19cc), (0x04fb2, 0x2f1a), (0x04fb3, 0x2f22),
    (0x04fb5, 0x19cb), (0x04fb6, 0x19d3), (0x04fb7, 0x19df), (0x04fb9, 0x2f28), (0x04fba, 0x2f26), (0x04fbb, 0x2f21),
    (0x04fbf, 0x19cd), (0x04fc0, 0x2f27), (0x04fc1, 0x2f1d), (0x04fc2, 0x19db), (0x04fc3, 0x19d2), (0x04fc4, 0x19da),
    (0x04fc5, 0x2f18), (0x04fc7, 0x2f24), (0x04fc9, 0x2f1b), (0x04fca, 0x19d6), (0x04fcb, 0x2f1c), (0x04fcd, 0x2f17),
    (0x04fce, 0x19dd), (0x04fcf, 0x19d0), (0x04fd0, 0x19d9), (0x04fd1, 0x19cf), (0x04fd3, 0x2f19), (0x04fd4, 0x2f1e),
    (0x04fd6, 0x2f25), (0x04fd7, 0x19d7), (0x04fd8, 0x19d4), (0x04fd9, 0x2f20), (0x04fda, 0x19dc), (0x04fdb, 0x2f23),
    (0x04fdc, 0x2f1f), (0x04fdd, 0x19d1), (0x04fde, 0x19de), (0x04fdf, 0x19d5), (0x04fe0, 0x19ce), (0x04fe1, 0x19ca),
    (0x04fec, 0x2f29), (0x04fee, 0x1b71), (0x04fef, 0x1b5b), (0x04ff1, 0x1b6b), (0x04ff3, 0x1b70), (0x04ff4, 0x30e1),
    (0x04ff5, 0x30e0), (0x04ff6, 0x30e5), (0x04ff7, 0x30e6), (0x04ff8, 0x1b5e), (0x04ffa, 0x1b67), (0x04ffe, 0x1b74),
    (0x05000, 0x1b68), (0x05005, 0x30da), (0x05006, 0x1b61), (0x05007, 0x30db), (0x05008, 0x4a4e), (0x05009, 0x1b76),
    (0x0500b, 0x1b6d), (0x0500c, 0x1b58), (0x0500d, 0x1b59), (0x0500e, 0x30ee), (0x0500f, 0x1d30), (0x05011, 0x1b66),
    (0x05012, 0x1b65), (0x05013, 0x30dc), (0x05014, 0x1b69), (0x05015, 0x3302), (0x05016, 0x1b60), (0x05017, 0x30e7),
    (0x05018, 0x1b6f), (0x05019, 0x1b6e), (0x0501a, 0x1b64), (0x0501b, 0x30df), (0x0501c, 0x30e8), (0x0501e, 0x30d9),
    (0x0501f, 0x1b63), (0x05020, 0x30e9), (0x05021, 0x1b6c), (0x05022, 0x30dd), (0x05023, 0x1b5a), (0x05025, 0x1b5d),
    (0x05026, 0x1b5c), (0x05027, 0x30ea), (0x05028, 0x1b6a), (0x05029, 0x1b5f), (0x0502a, 0x1b73), (0x0502b, 0x1b75),
    (0x0502c, 0x30e4), (0x0502d, 0x1b72), (0x0502f, 0x30ec), (0x05030, 0x30de), (0x05031, 0x30ed), (0x05033, 0x30e2),
    (0x05035, 0x30eb), (0x05037, 0x30e3), (0x0503c, 0x1b62), (0x05040, 0x330a), (0x05041, 0x32fe), (0x05043, 0x1d24),
    (0x05045, 0x3303), (0x05046, 0x3309), (0x05047, 0x1d23), (0x05048, 0x32fc), (0x05049, 0x1d27), (0x0504a, 0x3300),
    (0x0504b, 0x32f9), (0x0504c, 0x1d25), (0x0504d, 0x32fd), (0x0504e, 0x1d2a), (0x0504f, 0x1d2f), (0x05051, 0x330e),
    (0x05053, 0x32f8), (0x05055, 0x1d2b), (0x05057, 0x330d), (0x0505a, 0x1d26), (0x0505b, 0x32ff), (0x0505c, 0x1d22),
    (0x0505d, 0x32fa), (0x0505e, 0x32f6), (0x0505f, 0x3304), (0x05060, 0x32f7), (0x05061, 0x32f5), (0x05062, 0x3301),
    (0x05063, 0x3307), (0x05064, 0x3308), (0x05065, 0x1d28), (0x05068, 0x3576), (0x05069, 0x3305), (0x0506a, 0x32f4),
    (0x0506b, 0x3306), (0x0506d, 0x1d32), (0x0506e, 0x330b), (0x0506f, 0x1d31), (0x05070, 0x32f3), (0x05072, 0x32fb),
    (0x05073, 0x330c), (0x05074, 0x1d2d), (0x05075, 0x1d2c), (0x05076, 0x1d29), (0x05077, 0x1d2e), (0x0507a, 0x1d20),
    (0x0507d, 0x1d21), (0x05080, 0x1f10), (0x05082, 0x3579), (0x05083, 0x3572), (0x05085, 0x1f0d), (0x05087, 0x357a),
    (0x0508b, 0x3570), (0x0508c, 0x3573), (0x0508d, 0x1f0c), (0x0508e, 0x3574), (0x05090, 0x4c22), (0x05091, 0x1f0f),
    (0x05092, 0x3578), (0x05094, 0x356e), (0x05095, 0x356d), (0x05096, 0x1f11), (0x05098, 0x1f12), (0x05099, 0x1f0e),
    (0x0509a, 0x1f13), (0x0509b, 0x356c), (0x0509c, 0x3577), (0x0509d, 0x3575), (0x0509e, 0x356f), (0x050a2, 0x1f0b),
    (0x050a3, 0x3571), (0x050ac, 0x20e9), (0x050ad, 0x20e3), (0x050ae, 0x3824), (0x050af, 0x20ec), (0x050b0, 0x382a),
    (0x050b1, 0x382d), (0x050b2, 0x20e5), (0x050b3, 0x20e6), (0x050b4, 0x3827), (0x050b5, 0x20e4), (0x050b6, 0x3830),
    (0x050b7, 0x20ea), (0x050b8, 0x3831), (0x050ba, 0x382c), (0x050bb, 0x20eb), (0x050bd, 0x3821), (0x050be, 0x20e8),
    (0x050bf, 0x3822), (0x050c1, 0x382b), (0x050c2, 0x3829), (0x050c4, 0x3825), (0x050c5, 0x20e7), (0x050c6, 0x3823),
    (0x050c7, 0x20ed), (0x050c8, 0x3828), (0x050c9, 0x382f), (0x050ca, 0x3826), (0x050cb, 0x382e), (0x050ce, 0x22ac),
    (0x050cf, 0x22a9), (0x050d1, 0x22aa), (0x050d3, 0x3ada), (0x050d4, 0x3ad2), (0x050d5, 0x22a8), (0x050d6, 0x22a5),
    (0x050d7, 0x3ad3), (0x050da, 0x22a7), (0x050db, 0x3ad6), (0x050dd, 0x3ad8), (0x050e0, 0x3adf), (0x050e1, 0x4ba1),
    (0x050e3, 0x3ade), (0x050e4, 0x3ad9), (0x050e5, 0x22a4), (0x050e6, 0x3ad1), (0x050e7, 0x22a2), (0x050e8, 0x3ad4),
    (0x050e9, 0x22ad), (0x050ea, 0x3ad7), (0x050ec, 0x3adb), (0x050ed, 0x22a6), (0x050ee, 0x22a3), (0x050ef, 0x3add),
    (0x050f0, 0x3adc), (0x050f1, 0x22ab), (0x050f3, 0x3ad5), (0x050f5, 0x2428), (0x050f6, 0x3d41), (0x050f8, 0x3d3e),
    (0x050f9, 0x2429), (0x050fb, 0x2427), (0x050fd, 0x3d45), (0x050fe, 0x3d42), (0x050ff, 0x3d3b), (0x05100, 0x2426),
    (0x05101, 0x4a5c), (0x05102, 0x242a), (0x05103, 0x3d3c), (0x05104, 0x2425), (0x05105, 0x242d), (0x05106, 0x3d3f),
    (0x05107, 0x3d40), (0x05108, 0x242b), (0x05109, 0x242c), (0x0510a, 0x3d46), (0x0510b, 0x3d43), (0x0510c, 0x3d44),
    (0x0510e, 0x4a5e), (0x05110, 0x25b1), (0x05111, 0x3fc1), (0x05112, 0x25ae), (0x05113, 0x3fbe), (0x05114, 0x25b0),
    (0x05115, 0x25b2), (0x05117, 0x3fbf), (0x05118, 0x25af), (0x0511a, 0x3fc0), (0x0511c, 0x3fbd), (0x0511f, 0x26d9),
    (0x05120, 0x41fa), (0x05121, 0x26da), (0x05122, 0x41f8), (0x05124, 0x41f9), (0x05125, 0x41f7), (0x05126, 0x41f6),
    (0x05129, 0x41fb), (0x0512a, 0x26d8), (0x0512d, 0x43cc), (0x0512e, 0x43cd), (0x05130, 0x3d3d), (0x05131, 0x43cb),
    (0x05132, 0x26db), (0x05133, 0x2899), (0x05134, 0x4539), (0x05135, 0x453a), (0x05137, 0x298c), (0x05138, 0x298d),
    (0x05139, 0x4783), (0x0513a, 0x4782), (0x0513b, 0x29e0), (0x0513c, 0x29df), (0x0513d, 0x48cc), (0x0513f, 0x1580),
    (0x05140, 0x1598), (0x05141, 0x15ce), (0x05143, 0x15cd), (0x05144, 0x1627), (0x05145, 0x1626), (0x05146, 0x16ae),
    (0x05147, 0x16ad), (0x05148, 0x16af), (0x05149, 0x16ac), (0x0514b, 0x1758), (0x0514c, 0x1757), (0x0514d, 0x1759),
    (0x05152, 0x1869), (0x05154, 0x1868), (0x05155, 0x186a), (0x05157, 0x19e0), (0x05159, 0x1456), (0x0515a, 0x30ef),
    (0x0515b, 0x1457), (0x0515c, 0x1d33), (0x0515d, 0x1459), (0x0515e, 0x1458), (0x0515f, 0x357b), (0x05160, 0x4a64),
    (0x05161, 0x145a), (0x05162, 0x22ae), (0x05163, 0x145b), (0x05165, 0x1581), (0x05167, 0x15cf), (0x05168, 0x16b0),
    (0x05169, 0x186b), (0x0516a, 0x4a66), (0x0516b, 0x1582), (0x0516c, 0x15d2), (0x0516d, 0x15d0), (0x0516e, 0x15d1),
    (0x05171, 0x16b1), (0x05175, 0x175a), (0x05176, 0x186d), (0x05177, 0x186c), (0x05178, 0x186e), (0x0517c, 0x1b77),
    (0x05180, 0x25b3), (0x05182, 0x2ab2), (0x05187, 0x2c36), (0x05188, 0x2bcb), (0x05189, 0x1628), (0x0518a, 0x1629),
    (0x0518d, 0x16b2), (0x0518f, 0x2cef), (0x05191, 0x19e2), (0x05192, 0x19e1), (0x05193, 0x30f1), (0x05194, 0x30f0),
    (0x05195, 0x1d34), (0x05196, 0x2ab3), (0x05197, 0x15d3), (0x05198, 0x2c3d), (0x0519e, 0x2dcd), (0x051a0, 0x19e3),
    (0x051a2, 0x1b7a), (0x051a4, 0x1b78), (0x051a5, 0x1b79), (0x051aa, 0x25b4), (0x051ab, 0x2ab4), (0x051ac, 0x162a),
    (0x051b0, 0x16b3), (0x051b1, 0x2c82), (0x051b2, 0x4a72), (0x051b3, 0x4a7b), (0x051b5, 0x4a3c), (0x051b6, 0x175b),
    (0x051b7, 0x175c), (0x051b8, 0x4a73), (0x051b9, 0x2cf0), (0x051bc, 0x2dce), (0x051bd, 0x186f), (0x051be, 0x2dcf),
    (0x051c4, 0x30f3), (0x051c5, 0x30f4), (0x051c6, 0x1b7d), (0x051c7, 0x4c60), (0x051c8, 0x30f5), (0x051c9, 0x4a75),
    (0x051ca, 0x30f2), (0x051cb, 0x1b7e), (0x051cc, 0x1b7c), (0x051cd, 0x1b7b), (0x051ce, 0x30f6), (0x051cf, 0x4a76),
    (0x051d0, 0x330f), (0x051d1, 0x4a77), (0x051d3, 0x4a79), (0x051d4, 0x357c), (0x051d7, 0x3832), (0x051d8, 0x3ae0),
    (0x051dc, 0x242e), (0x051dd, 0x25b5), (0x051de, 0x3fc2), (0x051df, 0x4c85), (0x051e0, 0x1583), (0x051e1, 0x1591),
    (0x051e2, 0x4a7c), (0x051ed, 0x4a7e), (0x051f0, 0x1d35), (0x051f1, 0x1f15), (0x051f3, 0x22af), (0x051f4, 0x4ba9),
    (0x051f5, 0x2c2a), (0x051f6, 0x15d4), (0x051f8, 0x162d), (0x051f9, 0x162b), (0x051fa, 0x162c), (0x051fd, 0x1870),
    (0x05200, 0x1584), (0x05201, 0x1585), (0x05202, 0x2bc8), (0x05203, 0x1599), (0x05206, 0x15d5), (0x05207, 0x15d6),
    (0x05208, 0x15d7), (0x05209, 0x2c84), (0x0520a, 0x162e), (0x0520b, 0x4a83), (0x0520c, 0x2c53), (0x0520e, 0x16b7),
    (0x05210, 0x2c85), (0x05211, 0x16b5), (0x05212, 0x16b6), (0x05213, 0x2c83), (0x05216, 0x16b8), (0x05217, 0x16b4),
    (0x0521c, 0x2cf1), (0x0521d, 0x19af), (0x0521e, 0x2cf2), (0x05221, 0x2cf3), (0x05224, 0x175e), (0x05225, 0x175d),
    (0x05226, 0x4a84), (0x05228, 0x1761), (0x05229, 0x175f), (0x0522a, 0x1760), (0x0522e, 0x1876), (0x05230, 0x1875),
    (0x05231, 0x2dd4), (0x05232, 0x2dd1), (0x05233, 0x2dd2), (0x05235, 0x2dd0), (0x05236, 0x1877), (0x05237, 0x1873),
    (0x05238, 0x1872), (0x0523a, 0x1874), (0x0523b, 0x1871), (0x0523c, 0x4a85), (0x05241, 0x1878), (0x05243, 0x19e5),
    (0x05244, 0x2f2a), (0x05246, 0x2dd3), (0x05247, 0x19ea), (0x05249, 0x2f2b), (0x0524a, 0x19e6), (0x0524b, 0x19e9),
    (0x0524c, 0x19e8), (0x0524d, 0x19e7), (0x0524e, 0x19e4), (0x05252, 0x30f9), (0x05254, 0x1b81), (0x05255, 0x30fc),
    (0x05256, 0x1b7f), (0x05257, 0x4a87), (0x0525a, 0x30f8), (0x0525b, 0x1b82), (0x0525c, 0x1b80), (0x0525d, 0x1b83),
    (0x0525e, 0x30fa), (0x0525f, 0x30fb), (0x05261, 0x30f7), (0x05262, 0x30fd), (0x05269, 0x1f19), (0x0526a, 0x1d36),
    (0x0526b, 0x3310), (0x0526c, 0x3312), (0x0526d, 0x3311), (0x0526e, 0x3313), (0x0526f, 0x1d37), (0x05272, 0x1f16),
    (0x05274, 0x1f17), (0x05275, 0x1f18), (0x05277, 0x20ef), (0x05278, 0x3834), (0x0527a, 0x3833), (0x0527b, 0x3835),
    (0x0527c, 0x3836), (0x0527d, 0x20f0), (0x0527f, 0x20ee), (0x05280, 0x3ae1), (0x05281, 0x3ae2), (0x05282, 0x22b1),
    (0x05283, 0x22b0), (0x05284, 0x3c34), (0x05287, 0x242f), (0x05288, 0x2430), (0x05289, 0x2431), (0x0528a, 0x2433),
    (0x0528b, 0x3d47), (0x0528c, 0x3d48), (0x0528d, 0x2432), (0x05291, 0x25b6), (0x05293, 0x25b7), (0x05294, 0x4a88),
    (0x05296, 0x453b), (0x05297, 0x4785), (0x05298, 0x4784), (0x05299, 0x48cd), (0x0529b, 0x1586), (0x0529f, 0x1630),
    (0x052a0, 0x162f), (0x052a3, 0x16b9), (0x052a6, 0x2c86), (0x052a9, 0x1763), (0x052aa, 0x1764), (0x052ab, 0x1762),
    (0x052ac, 0x1765), (0x052ad, 0x2cf4), (0x052ae, 0x2cf5), (0x052b5, 0x4a86), (0x052b9, 0x4a89), (0x052bb, 0x187a),
    (0x052bc, 0x2dd5), (0x052be, 0x1879), (0x052c0, 0x2f2c), (0x052c1, 0x19ee), (0x052c2, 0x2f2d), (0x052c3, 0x19ed),
    (0x052c5, 0x4a8a), (0x052c7, 0x19eb), (0x052c9, 0x19ec), (0x052cd, 0x30fe), (0x052d0, 0x4b34), (0x052d2, 0x1d38),
    (0x052d3, 0x3315), (0x052d5, 0x1d3b), (0x052d6, 0x3314), (0x052d7, 0x1df3), (0x052d8, 0x1d3a), (0x052d9, 0x1d39),
    (0x052db, 0x1f1c), (0x052dd, 0x1f1b), (0x052de, 0x1f1a), (0x052df, 0x20f1), (0x052e0, 0x4a8d), (0x052e2, 0x20f4),
    (0x052e3, 0x20f5), (0x052e4, 0x20f3), (0x052e6, 0x20f2), (0x052e9, 0x3ae3), (0x052eb, 0x3ae4), (0x052ef, 0x3d4a),
    (0x052f0, 0x2434), (0x052f1, 0x3d49), (0x052f3, 0x25b8), (0x052f4, 0x41fc), (0x052f5, 0x26dc), (0x052f7, 0x453c),
    (0x052f8, 0x292c), (0x052f9, 0x2ab5), (0x052fa, 0x159a), (0x052fb, 0x15d8), (0x052fc, 0x2c3e), (0x052fe, 0x15d9),
    (0x052ff, 0x15da), (0x05305, 0x1631), (0x05306, 0x1632), (0x05308, 0x16ba), (0x05309, 0x2cf6), (0x0530a, 0x2dd6),
    (0x0530b, 0x2dd7), (0x0530d, 0x19ef), (0x0530e, 0x30ff), (0x0530f, 0x1d3d), (0x05310, 0x1d3c), (0x05311, 0x357e),
    (0x05312, 0x357d), (0x05315, 0x1587), (0x05316, 0x15db), (0x05317, 0x1633), (0x05319, 0x1d3e), (0x0531a, 0x2c2b),
    (0x0531c, 0x2c54), (0x0531d, 0x1634), (0x0531f, 0x2c88), (0x05320, 0x16bc), (0x05321, 0x16bb), (0x05322, 0x2c87),
    (0x05323, 0x1766), (0x0532a, 0x1b84), (0x0532d, 0x3316), (0x0532f, 0x20f6), (0x05330, 0x3ae5), (0x05331, 0x22b2),
    (0x05333, 0x4a97), (0x05334, 0x3fc3), (0x05337, 0x4685), (0x05338, 0x2ab6), (0x05339, 0x15dc), (0x0533c, 0x2dd8),
    (0x0533d, 0x2f2e), (0x0533e, 0x1d41), (0x0533f, 0x1d3f), (0x05340, 0x1d40), (0x05341, 0x1588), (0x05342, 0x4a7d),
    (0x05343, 0x159b), (0x05344, 0x14a8), (0x05345, 0x15df), (0x05347, 0x15de), (0x05348, 0x15dd), (0x05349, 0x1637),
    (0x0534a, 0x1636), (0x0534c, 0x2c55), (0x0534d, 0x2c89), (0x05351, 0x187e), (0x05352, 0x187b), (0x05353, 0x187d),
    (0x05354, 0x187c), (0x05357, 0x19f0), (0x0535a, 0x1f1d), (0x0535c, 0x1589), (0x0535e, 0x15e0), (0x05360, 0x1639),
    (0x05361, 0x1638), (0x05363, 0x2cf7), (0x05366, 0x187f), (0x05369, 0x2ab7), (0x0536c, 0x2c3f), (0x0536d, 0x4aa4),
    (0x0536e, 0x163b), (0x0536f, 0x163a), (0x05370, 0x16bd), (0x05371, 0x16be), (0x05372, 0x2cf8), (0x05373, 0x1767),
    (0x05374, 0x4aa5), (0x05375, 0x1768), (0x05377, 0x1880), (0x05378, 0x1881), (0x05379, 0x1882), (0x0537b, 0x19f1),
    (0x0537c, 0x2f2f), (0x0537e, 0x4aa7), (0x0537f, 0x1b85), (0x05382, 0x2c2c), (0x05384, 0x15e1), (0x0538a, 0x2c8a),
    (0x0538e, 0x2cf9), (0x0538f, 0x2cfa), (0x05392, 0x2dd9), (0x05393, 0x4aac), (0x05394, 0x2dda), (0x05396, 0x2f31),
    (0x05397, 0x2f30), (0x05398, 0x2f33), (0x05399, 0x2f32), (0x0539a, 0x19f2), (0x0539c, 0x3317), (0x0539d, 0x1b87),
    (0x0539e, 0x3100), (0x0539f, 0x1b86), (0x053a0, 0x4aae), (0x053a4, 0x357f), (0x053a5, 0x1f1e), (0x053a6, 0x4b67),
    (0x053a7, 0x3580), (0x053a8, 0x4b6a), (0x053ab, 0x4aaf), (0x053ac, 0x3ae6), (0x053ad, 0x22b3), (0x053ae, 0x4ab0),
    (0x053b2, 0x2435), (0x053b4, 0x453d), (0x053b6, 0x2ab8), (0x053b9, 0x2c40), (0x053bb, 0x163c), (0x053c1, 0x4ab5),
    (0x053c3, 0x1d42), (0x053c5, 0x4ab6), (0x053c8, 0x158a), (0x053c9, 0x159c), (0x053ca, 0x15e3), (0x053cb, 0x15e2),
    (0x053cd, 0x15e4), (0x053d4, 0x1884), (0x053d6, 0x1883), (0x053d7, 0x1885), (0x053d9, 0x4aba), (0x053db, 0x19f3),
    (0x053df, 0x1b88), (0x053e0, 0x4abd), (0x053e1, 0x3fc4), (0x053e2, 0x27ec), (0x053e3, 0x159d), (0x053e4, 0x163e),
    (0x053e5, 0x164d), (0x053e6, 0x1648), (0x053e8, 0x1643), (0x053e9, 0x1642), (0x053ea, 0x1649), (0x053eb, 0x1647),
    (0x053ec, 0x1640), (0x053ed, 0x164e), (0x053ee, 0x1641), (0x053ef, 0x163d), (0x053f0, 0x164c), (0x053f1, 0x164b),
    (0x053f2, 0x164a), (0x053f3, 0x163f), (0x053f5, 0x1646), (0x053f6, 0x4ac0), (0x053f8, 0x1645), (0x053fb, 0x164f),
    (0x053fc, 0x1644), (0x053fe, 0x4aeb), (0x05401, 0x16c4), (0x05403, 0x16ca), (0x05404, 0x16c6), (0x05406, 0x16cc),
    (0x05407, 0x2c8b), (0x05408, 0x16c9), (0x05409, 0x16bf), (0x0540a, 0x16c2), (0x0540b, 0x16c5), (0x0540c, 0x16c1),
    (0x0540d, 0x16c8), (0x0540e, 0x16cb), (0x0540f, 0x16c0), (0x05410, 0x16c3), (0x05411, 0x16c7), (0x05412, 0x16cd),
    (0x05413, 0x4ac2), (0x05418, 0x2d03), (0x05419, 0x2d00), (0x0541b, 0x1775), (0x0541c, 0x2d01), (0x0541d, 0x1769),
    (0x0541e, 0x176b), (0x0541f, 0x1783), (0x05420, 0x177e), (0x05421, 0x4c39), (0x05424, 0x2d08), (0x05425, 0x2d02),
    (0x05426, 0x176d), (0x05427, 0x176f), (0x05428, 0x2d07), (0x05429, 0x1776), (0x0542a, 0x2cfd), (0x0542b, 0x1782),
    (0x0542c, 0x1784), (0x0542d, 0x176a), (0x0542e, 0x177b), (0x0542f, 0x4ad6), (0x05430, 0x2cfb), (0x05431, 0x1781),
    (0x05433, 0x1772), (0x05435, 0x177c), (0x05436, 0x177d), (0x05437, 0x2cfc), (0x05438, 0x177a), (0x05439, 0x1778),
    (0x0543b, 0x1779), (0x0543c, 0x177f), (0x0543d, 0x2d04), (0x0543e, 0x176c), (0x05440, 0x1780), (0x05441, 0x2d06),
    (0x05442, 0x1774), (0x05443, 0x1771), (0x05445, 0x2cff), (0x05446, 0x1770), (0x05447, 0x2d09), (0x05448, 0x1773),
    (0x0544a, 0x1777), (0x0544e, 0x176e), (0x0544f, 0x2d05), (0x05454, 0x2cfe), (0x05460, 0x2deb), (0x05461, 0x2dea),
    (0x05462, 0x1897), (0x05463, 0x2ded), (0x05464, 0x2def), (0x05465, 0x2de4), (0x05466, 0x2de7), (0x05467, 0x2dee),
    (0x05468, 0x1898), (0x0546b, 0x2de1), (0x0546c, 0x2de5), (0x0546d, 0x4ac7), (0x0546f, 0x2de9), (0x05470, 0x2f42),
    (0x05471, 0x1893), (0x05472, 0x2f46), (0x05473, 0x1886), (0x05474, 0x2de6), (0x05475, 0x1887), (0x05476, 0x1894),
    (0x05477, 0x188d), (0x05478, 0x1889), (0x0547a, 0x2de2), (0x0547b, 0x188c), (0x0547c, 0x1891), (0x0547d, 0x189a),
    (0x0547e, 0x2de3), (0x0547f, 0x2ddc), (0x05480, 0x188b), (0x05481, 0x2ddd), (0x05482, 0x2ddf), (0x05484, 0x188e),
    (0x05486, 0x1890), (0x05487, 0x2ddb), (0x05488, 0x2de0), (0x0548b, 0x1899), (0x0548c, 0x1895), (0x0548d, 0x2de8),
    (0x0548e, 0x189b), (0x0548f, 0x4acb), (0x05490, 0x1892), (0x05491, 0x2dde), (0x05492, 0x188f), (0x05495, 0x188a),
    (0x05496, 0x1888), (0x05498, 0x2dec), (0x0549a, 0x1896), (0x054a0, 0x2f41), (0x054a1, 0x2f35), (0x054a2, 0x2f44),
    (0x054a4, 0x4acc), (0x054a5, 0x2f37), (0x054a6, 0x19fa), (0x054a7, 0x1a08), (0x054a8, 0x19f6), (0x054a9, 0x1a07),
    (0x054aa, 0x19ff), (0x054ab, 0x1a04), (0x054ac, 0x19f4), (0x054ad, 0x2f36), (0x054ae, 0x2f3c), (0x054af, 0x1a03),
    (0x054b0, 0x2f48), (0x054b1, 0x1a05), (0x054b3, 0x19fb), (0x054b6, 0x2f3e), (0x054b7, 0x2f3b), (0x054b8, 0x19f9),
    (0x054ba, 0x2f34), (0x054bb, 0x1a06), (0x054bc, 0x2f43), (0x054bd, 0x19fe), (0x054be, 0x2f45), (0x054bf, 0x1a09),
    (0x054c0, 0x19f5), (0x054c1, 0x1a00), (0x054c2, 0x19fd), (0x054c3, 0x2f39), (0x054c4, 0x1a01), (0x054c5, 0x2f3f),
    (0x054c6, 0x2f40), (0x054c7, 0x19fc), (0x054c8, 0x1a02), (0x054c9, 0x19f8), (0x054ce, 0x19f7), (0x054cf, 0x2f38),
    (0x054d6, 0x2f3d), (0x054de, 0x2f47), (0x054e0, 0x3114), (0x054e1, 0x1b95), (0x054e2, 0x3102), (0x054e4, 0x3107),
    (0x054e5, 0x1b8e), (0x054e6, 0x1b99), (0x054e7, 0x3105), (0x054e8, 0x1b89), (0x054e9, 0x1b93), (0x054ea, 0x1b98),
    (0x054eb, 0x310c), (0x054ed, 0x1b94), (0x054ee, 0x1b97), (0x054f1, 0x310f), (0x054f2, 0x1b8f), (0x054f3, 0x3106),
    (0x054f7, 0x3112), (0x054f8, 0x3113), (0x054fa, 0x1b91), (0x054fb, 0x3111), (0x054fc, 0x1b8d), (0x054fd, 0x1b9c),
    (0x054ff, 0x3109), (0x05501, 0x1b8b), (0x05503, 0x3116), (0x05504, 0x310a), (0x05505, 0x310e), (0x05506, 0x1b90),
    (0x05507, 0x1b9b), (0x05508, 0x310b), (0x05509, 0x1b96), (0x0550a, 0x3110), (0x0550b, 0x3117), (0x0550c, 0x3326),
    (0x0550e, 0x3115), (0x0550f, 0x1b9d), (0x05510, 0x1b8a), (0x05511, 0x310d), (0x05512, 0x3104), (0x05514, 0x1b92),
    (0x05517, 0x3103), (0x0551a, 0x3108), (0x05526, 0x3101), (0x05527, 0x1b9a), (0x0552a, 0x331e), (0x0552b, 0x4ac4),
    (0x0552c, 0x1d55), (0x0552d, 0x332c), (0x0552e, 0x1d53), (0x0552f, 0x1d50), (0x05530, 0x3323), (0x05531, 0x1d4c),
    (0x05532, 0x3327), (0x05533, 0x1d57), (0x05534, 0x331d), (0x05535, 0x3322), (0x05536, 0x3321), (0x05537, 0x1b8c),
    (0x05538, 0x1d52), (0x05539, 0x332a), (0x0553b, 0x332d), (0x0553c, 0x331a), (0x0553e, 0x1f30), (0x05540, 0x332e),
    (0x05541, 0x1d58), (0x05543, 0x1d4a), (0x05544, 0x1d47), (0x05545, 0x3325), (0x05546, 0x1d44), (0x05547, 0x4ad4),
    (0x05548, 0x332b), (0x05549, 0x4a92), (0x0554a, 0x1d4b), (0x0554b, 0x332f), (0x0554d, 0x331b), (0x0554e, 0x3329),
    (0x0554f, 0x1d4e), (0x05550, 0x331c), (0x05551, 0x331f), (0x05552, 0x3324), (0x05553, 0x4b13), (0x05555, 0x1d4f),
    (0x05556, 0x1d4d), (0x05557, 0x1d59), (0x0555c, 0x1d54), (0x0555d, 0x4aca), (0x0555e, 0x1d48), (0x0555f, 0x1de0),
    (0x05561, 0x1d49), (0x05562, 0x3320), (0x05563, 0x1d56), (0x05564, 0x1d51), (0x05565, 0x3328), (0x05566, 0x1d46),
    (0x0556a, 0x1d45), (0x05575, 0x3318), (0x05576, 0x3319), (0x05577, 0x3585), (0x0557b, 0x1f1f), (0x0557c, 0x1f22),
    (0x0557d, 0x3590), (0x0557e, 0x1f36), (0x0557f, 0x3593), (0x05580, 0x1f20), (0x05581, 0x358c), (0x05582, 0x1f26),
    (0x05583, 0x1f2c), (0x05584, 0x203f), (0x05586, 0x4ad8), (0x05587, 0x1f2a), (0x05588, 0x3589), (0x05589, 0x1f37),
    (0x0558a, 0x1f23), (0x0558b, 0x1f2b), (0x0558c, 0x3591), (0x0558d, 0x3844), (0x0558e, 0x3596), (0x0558f, 0x358a),
    (0x05591, 0x3581), (0x05592, 0x358e), (0x05593, 0x3588), (0x05594, 0x1f29), (0x05595, 0x3594), (0x05598, 0x1f25),
    (0x05599, 0x1f39), (0x0559a, 0x1f32), (0x0559c, 0x1f27), (0x0559d, 0x1f24), (0x0559f, 0x1f2f), (0x055a1, 0x3595),
    (0x055a2, 0x3587), (0x055a3, 0x358d), (0x055a4, 0x358f), (0x055a5, 0x3583), (0x055a6, 0x3592), (0x055a7, 0x1f21),
    (0x055a8, 0x3582), (0x055a9, 0x4ad9), (0x055aa, 0x1f28), (0x055ab, 0x1f38), (0x055ac, 0x1f34), (0x055ad, 0x3584),
    (0x055ae, 0x1f2e), (0x055b1, 0x1f35), (0x055b2, 0x1f31), (0x055b3, 0x1f2d), (0x055b5, 0x358b), (0x055bb, 0x1f33),
    (0x055bf, 0x3842), (0x055c0, 0x383e), (0x055c2, 0x384d), (0x055c3, 0x3837), (0x055c4, 0x3840), (0x055c5, 0x2104),
    (0x055c6, 0x2105), (0x055c7, 0x20fd), (0x055c8, 0x3849), (0x055c9, 0x2107), (0x055ca, 0x383c), (0x055cb, 0x383b),
    (0x055cc, 0x3839), (0x055cd, 0x384b), (0x055ce, 0x20fb), (0x055cf, 0x3845), (0x055d0, 0x383a), (0x055d1, 0x20fe),
    (0x055d2, 0x3843), (0x055d3, 0x20f9), (0x055d4, 0x383f), (0x055d5, 0x3846), (0x055d6, 0x3848), (0x055d9, 0x384c),
    (0x055da, 0x2102), (0x055db, 0x3838), (0x055dc, 0x20fc), (0x055dd, 0x383d), (0x055df, 0x20f7), (0x055e1, 0x2103),
    (0x055e2, 0x3847), (0x055e3, 0x20ff), (0x055e4, 0x2100), (0x055e5, 0x2106), (0x055e6, 0x20fa), (0x055e7, 0x145c),
    (0x055e8, 0x20f8), (0x055e9, 0x3841), (0x055ef, 0x2101), (0x055f2, 0x384a), (0x055f6, 0x22c3), (0x055f7, 0x22be),
    (0x055f9, 0x3af5), (0x055fa, 0x3af1), (0x055fc, 0x3aeb), (0x055fd, 0x22b8), (0x055fe, 0x22b4), (0x055ff, 0x3af4),
    (0x05600, 0x22b5), (0x05601, 0x3aee), (0x05602, 0x3af0), (0x05604, 0x3af3), (0x05606, 0x22ba), (0x05608, 0x22c1),
    (0x05609, 0x22bb), (0x0560c, 0x3ae9), (0x0560d, 0x22bc), (0x0560e, 0x22bd), (0x0560f, 0x3aec), (0x05610, 0x22c2),
    (0x05612, 0x3aea), (0x05613, 0x3aef), (0x05614, 0x22b9), (0x05615, 0x3ae8), (0x05616, 0x22bf), (0x05617, 0x22b7),
    (0x0561b, 0x22b6), (0x0561c, 0x3aed), (0x0561d, 0x3af2), (0x0561f, 0x22c0), (0x05627, 0x3ae7), (0x05629, 0x243c),
    (0x0562a, 0x3d5b), (0x0562c, 0x3d58), (0x0562e, 0x2436), (0x0562f, 0x2442), (0x05630, 0x2443), (0x05632, 0x2439),
    (0x05633, 0x3d56), (0x05634, 0x243b), (0x05635, 0x3d4e), (0x05636, 0x2441), (0x05637, 0x4ae1), (0x05638, 0x3d5a),
    (0x05639, 0x2438), (0x0563a, 0x3d5c), (0x0563b, 0x2437), (0x0563d, 0x3d57), (0x0563e, 0x3d59), (0x0563f, 0x243a),
    (0x05640, 0x3d55), (0x05641, 0x3d4f), (0x05642, 0x3d4c), (0x05645, 0x3586), (0x05646, 0x3d52), (0x05648, 0x3d4b),
    (0x05649, 0x3d51), (0x0564a, 0x3d50), (0x0564c, 0x3d4d), (0x0564d, 0x4ae6), (0x0564e, 0x243e), (0x0564f, 0x4ae7),
    (0x05653, 0x243d), (0x05657, 0x243f), (0x05658, 0x3d53), (0x05659, 0x25b9), (0x0565a, 0x3d54), (0x0565e, 0x3fcd),
    (0x05660, 0x3fc6), (0x05662, 0x25c5), (0x05663, 0x3fca), (0x05664, 0x25bd), (0x05665, 0x25c1), (0x05666, 0x3fc9),
    (0x05668, 0x25c0), (0x05669, 0x25bc), (0x0566a, 0x25bf), (0x0566b, 0x25ba), (0x0566c, 0x25c4), (0x0566d, 0x3fcb),
    (0x0566e, 0x3fc7), (0x0566f, 0x25c3), (0x05670, 0x3fc5), (0x05671, 0x25c2), (0x05672, 0x3fcc), (0x05673, 0x3fc8),
    (0x05674, 0x2440), (0x05676, 0x25c6), (0x05677, 0x3fce), (0x05678, 0x25be), (0x05679, 0x25bb), (0x0567e, 0x4203),
    (0x0567f, 0x4205), (0x05680, 0x26de), (0x05681, 0x4206), (0x05682, 0x4204), (0x05683, 0x4202), (0x05684, 0x4201),
    (0x05685, 0x26e0), (0x05686, 0x4200), (0x05687, 0x26e1), (0x0568c, 0x41fe), (0x0568d, 0x41ff), (0x0568e, 0x26dd),
    (0x0568f, 0x26e2), (0x05690, 0x26df), (0x05693, 0x41fd), (0x05695, 0x27ed), (0x05697, 0x43d0), (0x05698, 0x43ce),
    (0x05699, 0x43d3), (0x0569a, 0x43d1), (0x0569c, 0x43cf), (0x0569d, 0x43d2), (0x056a5, 0x289a), (0x056a6, 0x4540),
    (0x056a7, 0x4541), (0x056a8, 0x292d), (0x056aa, 0x4542), (0x056ab, 0x453e), (0x056ac, 0x4543), (0x056ad, 0x453f),
    (0x056ae, 0x27ee), (0x056b2, 0x4686), (0x056b3, 0x4688), (0x056b4, 0x2930), (0x056b5, 0x4687), (0x056b6, 0x292f),
    (0x056b7, 0x292e), (0x056bc, 0x2931), (0x056bd, 0x4787), (0x056be, 0x4788), (0x056c0, 0x298f), (0x056c1, 0x298e),
    (0x056c2, 0x2990), (0x056c3, 0x4786), (0x056c5, 0x4837), (0x056c6, 0x4836), (0x056c8, 0x29e1), (0x056c9, 0x29e3),
    (0x056ca, 0x29e2), (0x056cb, 0x4838), (0x056cc, 0x2a1a), (0x056cd, 0x493f), (0x056d1, 0x2a43), (0x056d3, 0x493e),
    (0x056d4, 0x4987), (0x056d7, 0x2c31), (0x056da, 0x1651), (0x056db, 0x1650), (0x056dd, 0x16d0), (0x056de, 0x16cf),
    (0x056df, 0x2c8d), (0x056e0, 0x16ce), (0x056e1, 0x2c8c), (0x056e4, 0x1787), (0x056e5, 0x2d0c), (0x056e7, 0x2d0b),
    (0x056ea, 0x1785), (0x056eb, 0x1788), (0x056ed, 0x4aee), (0x056ee, 0x2d0a), (0x056ef, 0x4aed), (0x056f0, 0x1786),
    (0x056f1, 0x4ae9), (0x056f7, 0x2df0), (0x056f9, 0x2df1), (0x056fa, 0x189c), (0x056ff, 0x1a0a), (0x05700, 0x4aec),
    (0x05701, 0x3118), (0x05702, 0x3119), (0x05703, 0x1b9e), (0x05704, 0x1b9f), (0x05707, 0x3331), (0x05708, 0x1d5a),
    (0x05709, 0x1d5c), (0x0570a, 0x3330), (0x0570b, 0x1d5b), (0x0570c, 0x3597), (0x0570d, 0x1f3a), (0x05712, 0x2108),
    (0x05713, 0x2109), (0x05714, 0x384e), (0x05716, 0x22c5), (0x05718, 0x22c4), (0x0571a, 0x3d5d), (0x0571b, 0x3fd0),
    (0x0571c, 0x3fcf), (0x0571e, 0x49c3), (0x0571f, 0x159e), (0x05720, 0x2c41), (0x05722, 0x2c56), (0x05723, 0x2c57),
    (0x05728, 0x16d3), (0x05729, 0x16d7), (0x0572a, 0x2c8f), (0x0572c, 0x16d5), (0x0572d, 0x16d4), (0x0572e, 0x2c8e),
    (0x0572f, 0x16d6), (0x05730, 0x16d2), (0x05733, 0x16d1), (0x05734, 0x2c90), (0x0573b, 0x1792), (0x0573e, 0x178f),
    (0x05740, 0x178b), (0x05741, 0x2d0d), (0x05742, 0x4af6), (0x05743, 0x4b08), (0x05745, 0x2d0e), (0x05746, 0x4af2),
    (0x05747, 0x178d), (0x05749, 0x2d10), (0x0574a, 0x1789), (0x0574b, 0x2d11), (0x0574c, 0x2d0f), (0x0574d, 0x178c),
    (0x0574e, 0x178e), (0x0574f, 0x1791), (0x05750, 0x1790), (0x05751, 0x178a), (0x05752, 0x2d12), (0x05761, 0x18a1),
    (0x05762, 0x2dfe), (0x05764, 0x18a3), (0x05766, 0x18a2), (0x05768, 0x2dff), (0x05769, 0x18a0), (0x0576a, 0x189f),
    (0x0576b, 0x2df5), (0x0576d, 0x2df4), (0x0576f, 0x2df2), (0x05770, 0x2df7), (0x05771, 0x2df6), (0x05772, 0x2df3),
    (0x05773, 0x2dfc), (0x05774, 0x2dfd), (0x05775, 0x2dfa), (0x05776, 0x2df8), (0x05777, 0x189e), (0x0577b, 0x2dfb),
    (0x0577c, 0x18a4), (0x0577d, 0x2e00), (0x05780, 0x2df9), (0x05782, 0x1a0b), (0x05783, 0x189d), (0x0578b, 0x1a0c),
    (0x0578c, 0x2f4d), (0x0578f, 0x2f53), (0x05790, 0x4b96), (0x05793, 0x1a12), (0x05794, 0x2f51), (0x05795, 0x2f57),
    (0x05797, 0x2f4e), (0x05798, 0x2f52), (0x05799, 0x2f54), (0x0579a, 0x2f56), (0x0579b, 0x2f50), (0x0579d, 0x2f4f),
    (0x0579e, 0x2f4a), (0x0579f, 0x2f4b), (0x057a0, 0x1a0d), (0x057a2, 0x1a0f), (0x057a3, 0x1a0e), (0x057a4, 0x2f4c),
    (0x057a5, 0x2f55), (0x057ae, 0x1a11), (0x057b5, 0x2f49), (0x057b6, 0x3123), (0x057b8, 0x3122), (0x057b9, 0x3127),
    (0x057ba, 0x311e), (0x057bc, 0x3121), (0x057bd, 0x3120), (0x057bf, 0x3124), (0x057c1, 0x3128), (0x057c2, 0x1ba0),
    (0x057c3, 0x1ba3), (0x057c6, 0x311f), (0x057c7, 0x3125), (0x057cb, 0x1ba2), (0x057cc, 0x311a), (0x057ce, 0x1a10),
    (0x057cf, 0x333f), (0x057d0, 0x3126), (0x057d2, 0x311d), (0x057d4, 0x1ba1), (0x057d5, 0x311c), (0x057dc, 0x3336),
    (0x057df, 0x1d5d), (0x057e0, 0x1d61), (0x057e1, 0x3346), (0x057e2, 0x3334), (0x057e3, 0x3342), (0x057e4, 0x1d62),
    (0x057e5, 0x3344), (0x057e6, 0x4af9), (0x057e7, 0x334a), (0x057e9, 0x334e), (0x057ec, 0x3345), (0x057ed, 0x3339),
    (0x057ee, 0x3341), (0x057f0, 0x334f), (0x057f1, 0x334d), (0x057f2, 0x3343), (0x057f3, 0x333e), (0x057f4, 0x3337),
    (0x057f5, 0x359f), (0x057f6, 0x3335), (0x057f7, 0x1d66), (0x057f8, 0x333c), (0x057f9, 0x1d67), (0x057fa, 0x1d63),
    (0x057fb, 0x3332), (0x057fc, 0x3348), (0x057fd, 0x333a), (0x057fe, 0x4ab9), (0x05800, 0x3338), (0x05801, 0x334b),
    (0x05802, 0x1d64), (0x05803, 0x4afb), (0x05804, 0x3351), (0x05805, 0x1d5e), (0x05806, 0x1d60), (0x05807, 0x3340),
    (0x05808, 0x333b), (0x05809, 0x1ba4), (0x0580a, 0x1d5f), (0x0580b, 0x333d), (0x0580c, 0x334c), (0x0580d, 0x3350),
    (0x0580e, 0x3347), (0x05810, 0x3349), (0x05814, 0x3333), (0x05819, 0x359a), (0x0581b, 0x35a3), (0x0581c, 0x35a2),
    (0x0581d, 0x1f42), (0x0581e, 0x359b), (0x05820, 0x1f43), (0x05821, 0x1f41), (0x05823, 0x359d), (0x05824, 0x1f3e),
    (0x05825, 0x35a1), (0x05826, 0x4afe), (0x05827, 0x359c), (0x05828, 0x359e), (0x05829, 0x3598), (0x0582a, 0x1f3c),
    (0x0582c, 0x35ab), (0x0582d, 0x35aa), (0x0582e, 0x35a7), (0x0582f, 0x1f3b), (0x05830, 0x1f3f), (0x05831, 0x1f40),
    (0x05832, 0x311b), (0x05833, 0x35a4), (0x05834, 0x1f3d), (0x05835, 0x1d65), (0x05836, 0x35a6), (0x05837, 0x3599),
    (0x05838, 0x35a9), (0x05839, 0x35a8), (0x0583b, 0x35ac), (0x0583d, 0x385c), (0x0583f, 0x35a5), (0x05848, 0x35a0),
    (0x05849, 0x3854), (0x0584a, 0x2113), (0x0584b, 0x2116), (0x0584c, 0x2111), (0x0584d, 0x3853), (0x0584e, 0x3857),
    (0x0584f, 0x3852), (0x05851, 0x210b), (0x05852, 0x2115), (0x05853, 0x384f), (0x05854, 0x210f), (0x05855, 0x3856),
    (0x05857, 0x210d), (0x05858, 0x210c), (0x05859, 0x3859), (0x0585a, 0x210e), (0x0585b, 0x385b), (0x0585c, 0x4b00),
    (0x0585d, 0x3858), (0x0585e, 0x210a), (0x05862, 0x2114), (0x05863, 0x385d), (0x05864, 0x3851), (0x05865, 0x385a),
    (0x05868, 0x3850), (0x0586b, 0x2110), (0x0586d, 0x2112), (0x0586f, 0x3855), (0x05871, 0x385e), (0x05874, 0x3afd),
    (0x05875, 0x22c6), (0x05876, 0x3b03), (0x05879, 0x22cb), (0x0587a, 0x3aff), (0x0587b, 0x3b06), (0x0587c, 0x3af7),
    (0x0587d, 0x22cd), (0x0587e, 0x22c7), (0x0587f, 0x3afc), (0x05880, 0x2444), (0x05881, 0x3afb), (0x05882, 0x3b04),
    (0x05883, 0x22c8), (0x05885, 0x22cc), (0x05886, 0x3afa), (0x05887, 0x3b00), (0x05888, 0x3b05), (0x05889, 0x3af6),
    (0x0588a, 0x22ca), (0x0588b, 0x3afe), (0x0588e, 0x3b02), (0x0588f, 0x3b08), (0x05890, 0x3af8), (0x05891, 0x3b01),
    (0x05893, 0x22c9), (0x05894, 0x3b07), (0x05898, 0x3af9), (0x0589c, 0x2448), (0x0589d, 0x3d5f), (0x0589e, 0x2446),
    (0x0589f, 0x2445), (0x058a0, 0x3d61), (0x058a1, 0x3d66), (0x058a3, 0x3d62), (0x058a5, 0x3d65), (0x058a6, 0x244b),
    (0x058a8, 0x25ac), (0x058a9, 0x244a), (0x058aa, 0x4b01), (0x058ab, 0x3d5e), (0x058ac, 0x3d64), (0x058ae, 0x2449),
    (0x058af, 0x3d63), (0x058b1, 0x3d60), (0x058b3, 0x2447), (0x058ba, 0x3fd5), (0x058bb, 0x4a0f), (0x058bc, 0x3fd7),
    (0x058bd, 0x3fd2), (0x058be, 0x25c8), (0x058bf, 0x3fd4), (0x058c1, 0x25c7), (0x058c2, 0x3fd6), (0x058c5, 0x25ca),
    (0x058c6, 0x3fd8), (0x058c7, 0x25c9), (0x058c8, 0x3fd1), (0x058c9, 0x3fd3), (0x058ce, 0x26e6), (0x058cf, 0x4209),
    (0x058d1, 0x26e5), (0x058d2, 0x420a), (0x058d3, 0x26e4), (0x058d4, 0x4208), (0x058d5, 0x26e3), (0x058d6, 0x4207),
    (0x058d8, 0x27f0), (0x058d9, 0x27ef), (0x058da, 0x4544), (0x058db, 0x4546), (0x058dc, 0x4b04), (0x058dd, 0x4545),
    (0x058de, 0x289b), (0x058df, 0x289c), (0x058e0, 0x4b03), (0x058e2, 0x289d), (0x058e3, 0x4689), (0x058e4, 0x2932),
    (0x058e7, 0x48cf), (0x058e8, 0x48ce), (0x058e9, 0x2a44), (0x058eb, 0x159f), (0x058ec, 0x15e5), (0x058ef, 0x1793),
    (0x058f4, 0x2f58), (0x058f9, 0x1f44), (0x058fa, 0x1f45), (0x058fb, 0x4b06), (0x058fc, 0x385f), (0x058fd, 0x22ce),
    (0x058fe, 0x3b09), (0x058ff, 0x3d67), (0x05903, 0x2c42), (0x05906, 0x2d13), (0x0590a, 0x2ab9), (0x0590c, 0x2e01),
    (0x0590d, 0x2f59), (0x0590e, 0x3129), (0x0590f, 0x1ba5), (0x05911, 0x4cab), (0x05912, 0x4547), (0x05914, 0x2991),
    (0x05915, 0x15a0), (0x05916, 0x1652), (0x05917, 0x2c58), (0x05919, 0x16d8), (0x0591a, 0x16d9), (0x0591c, 0x18a5),
    (0x0591f, 0x4b0d), (0x05920, 0x1d68), (0x05922, 0x22d0), (0x05924, 0x22d1), (0x05925, 0x22cf), (0x05927, 0x15a1),
    (0x05929, 0x15e6), (0x0592a, 0x15e8), (0x0592b, 0x15e7), (0x0592c, 0x2c43), (0x0592d, 0x15e9), (0x0592e, 0x1653),
    (0x0592f, 0x2c59), (0x05931, 0x1654), (0x05937, 0x16da), (0x05938, 0x16db), (0x0593c, 0x2c91), (0x0593e, 0x1794),
    (0x05940, 0x2d14), (0x05944, 0x18a9), (0x05945, 0x2e02), (0x05947, 0x18a7), (0x05948, 0x18a8), (0x05949, 0x18a6),
    (0x0594a, 0x312a), (0x0594e, 0x1a16), (0x0594f, 0x1a15), (0x05950, 0x1a17), (0x05951, 0x1a14), (0x05953, 0x2f5a),
    (0x05954, 0x18aa), (0x05955, 0x1a13), (0x05957, 0x1ba6), (0x05958, 0x1ba7), (0x0595a, 0x1ba8), (0x0595c, 0x3352),
    (0x05960, 0x1f46), (0x05961, 0x35ad), (0x05962, 0x1d69), (0x05967, 0x2117), (0x05969, 0x22d3), (0x0596a, 0x22d2),
    (0x0596b, 0x3b0a), (0x0596d, 0x244c), (0x0596e, 0x25cb), (0x05970, 0x43d4), (0x05971, 0x4839), (0x05972, 0x48d0),
    (0x05973, 0x15a2), (0x05974, 0x1655), (0x05976, 0x1656), (0x05977, 0x2c97), (0x05978, 0x16dd), (0x05979, 0x16e0),
    (0x0597b, 0x2c95), (0x0597c, 0x2c93), (0x0597d, 0x16df), (0x0597e, 0x2c96), (0x0597f, 0x2c98), (0x05980, 0x2c92),
    (0x05981, 0x16e2), (0x05982, 0x16e1), (0x05983, 0x16de), (0x05984, 0x16dc), (0x05985, 0x2c94), (0x0598a, 0x179f),
    (0x0598d, 0x179c), (0x0598e, 0x2d19), (0x0598f, 0x2d1c), (0x05990, 0x2d1b), (0x05992, 0x1796), (0x05993, 0x179e),
    (0x05996, 0x179b), (0x05997, 0x2d18), (0x05998, 0x2d16), (0x05999, 0x179a), (0x0599d, 0x1795), (0x0599e, 0x1798),
    (0x059a0, 0x2d17), (0x059a1, 0x2d1e), (0x059a2, 0x2d1a), (0x059a3, 0x1799), (0x059a4, 0x179d), (0x059a5, 0x17a0),
    (0x059a6, 0x2d15), (0x059a7, 0x2d1d), (0x059a8, 0x1797), (0x059ae, 0x18af), (0x059af, 0x18b7), (0x059b1, 0x2e0e),
    (0x059b2, 0x2e07), (0x059b3, 0x18b8), (0x059b4, 0x2e12), (0x059b5, 0x2e03), (0x059b6, 0x2e0a), (0x059b9, 0x18ae),
    (0x059ba, 0x2e04), (0x059bb, 0x18ac), (0x059bc, 0x2e0b), (0x059bd, 0x2e0f), (0x059be, 0x18ab), (0x059c0, 0x2e10),
    (0x059c1, 0x2e09), (0x059c3, 0x2e0c), (0x059c5, 0x18ba), (0x059c6, 0x18b1), (0x059c7, 0x2e13), (0x059c8, 0x2e11),
    (0x059c9, 0x4b16), (0x059ca, 0x18b6), (0x059cb, 0x18b4), (0x059cc, 0x2e08), (0x059cd, 0x18b3), (0x059ce, 0x2e06),
    (0x059cf, 0x2e05), (0x059d0, 0x18b2), (0x059d1, 0x18b0), (0x059d2, 0x18b9), (0x059d3, 0x18b5), (0x059d4, 0x18ad),
    (0x059d6, 0x2e0d), (0x059d8, 0x1a19), (0x059d9, 0x4b1b), (0x059da, 0x1a20), (0x059db, 0x2f68), (0x059dc, 0x1a18),
    (0x059dd, 0x2f60), (0x059de, 0x2f5c), (0x059e0, 0x2f6c), (0x059e1, 0x2f5b), (0x059e3, 0x1a1b), (0x059e4, 0x2f65),
    (0x059e5, 0x1a1e), (0x059e6, 0x1a21), (0x059e8, 0x1a1c), (0x059e9, 0x2f69), (0x059ea, 0x1a1f), (0x059ec, 0x1baf),
    (0x059ed, 0x2f6f), (0x059ee, 0x2f5d), (0x059f1, 0x2f5f), (0x059f2, 0x2f66), (0x059f3, 0x2f6a), (0x059f4, 0x2f6e),
    (0x059f5, 0x2f6b), (0x059f6, 0x2f64), (0x059f7, 0x2f67), (0x059f9, 0x4b22), (0x059fa, 0x2f61), (0x059fb, 0x1a23),
    (0x059fc, 0x2f63), (0x059fd, 0x2f62), (0x059fe, 0x2f6d), (0x059ff, 0x1a1a), (0x05a00, 0x2f5e), (0x05a01, 0x1a22),
    (0x05a03, 0x1a1d), (0x05a09, 0x1bb5), (0x05a0a, 0x3132), (0x05a0c, 0x1bb4), (0x05a0f, 0x3130), (0x05a11, 0x1ba9),
    (0x05a13, 0x1bae), (0x05a15, 0x312f), (0x05a16, 0x312c), (0x05a17, 0x3131), (0x05a18, 0x1baa), (0x05a19, 0x312b),
    (0x05a1b, 0x1bad), (0x05a1c, 0x1bab), (0x05a1e, 0x3133), (0x05a1f, 0x1bac), (0x05a20, 0x1bb0), (0x05a23, 0x1bb1),
    (0x05a24, 0x4b12), (0x05a25, 0x1bb3), (0x05a29, 0x1bb2), (0x05a2d, 0x312d), (0x05a2e, 0x312e), (0x05a33, 0x3134),
    (0x05a35, 0x3359), (0x05a36, 0x1d6a), (0x05a37, 0x35bb), (0x05a38, 0x3358), (0x05a39, 0x336b), (0x05a3c, 0x1d70),
    (0x05a3e, 0x3369), (0x05a40, 0x1d6f), (0x05a41, 0x1d6b), (0x05a42, 0x3372), (0x05a43, 0x3362), (0x05a44, 0x3365),
    (0x05a46, 0x1d73), (0x05a47, 0x336f), (0x05a48, 0x3367), (0x05a49, 0x1d6c), (0x05a4a, 0x1d74), (0x05a4c, 0x336c),
    (0x05a4d, 0x336a), (0x05a50, 0x335b), (0x05a51, 0x3370), (0x05a52, 0x3364), (0x05a53, 0x335f), (0x05a55, 0x3355),
    (0x05a56, 0x3371), (0x05a57, 0x3361), (0x05a58, 0x3354), (0x05a5a, 0x1d72), (0x05a5b, 0x3366), (0x05a5c, 0x3373),
    (0x05a5d, 0x3363), (0x05a5e, 0x3357), (0x05a5f, 0x335c), (0x05a60, 0x3353), (0x05a62, 0x1d71), (0x05a63, 0x4b25),
    (0x05a64, 0x3360), (0x05a65, 0x335d), (0x05a66, 0x1d6d), (0x05a67, 0x3356), (0x05a69, 0x336e), (0x05a6a, 0x1d6e),
    (0x05a6c, 0x335e), (0x05a6d, 0x335a), (0x05a70, 0x336d), (0x05a77, 0x1f47), (0x05a78, 0x35b4), (0x05a7a, 0x35b1),
    (0x05a7b, 0x35c2), (0x05a7c, 0x35b6), (0x05a7d, 0x35c3), (0x05a7f, 0x1f49), (0x05a83, 0x35bf), (0x05a84, 0x35bc),
    (0x05a88, 0x4c99), (0x05a8a, 0x35bd), (0x05a8b, 0x35c0), (0x05a8c, 0x35c4), (0x05a8e, 0x3368), (0x05a8f, 0x35c6),
    (0x05a90, 0x3873), (0x05a91, 0x4c6b), (0x05a92, 0x1f4a), (0x05a93, 0x35c7), (0x05a94, 0x35af), (0x05a95, 0x35b9),
    (0x05a96, 0x4b2a), (0x05a97, 0x35be), (0x05a9a, 0x1f48), (0x05a9b, 0x1f4b), (0x05a9c, 0x35c5), (0x05a9d, 0x35c8),
    (0x05a9e, 0x35b3), (0x05a9f, 0x35b0), (0x05aa0, 0x4ba2), (0x05aa2, 0x35b2), (0x05aa5, 0x35b7), (0x05aa6, 0x35b5),
    (0x05aa7, 0x1f4c), (0x05aa9, 0x35c1), (0x05aab, 0x4b24), (0x05aac, 0x35b8), (0x05aae, 0x35ba), (0x05aaf, 0x35ae),
    (0x05ab0, 0x3867), (0x05ab1, 0x3865), (0x05ab2, 0x2120), (0x05ab3, 0x211e), (0x05ab4, 0x386f), (0x05ab5, 0x3866),
    (0x05ab6, 0x3870), (0x05ab7, 0x386c), (0x05ab8, 0x3864), (0x05ab9, 0x3872), (0x05aba, 0x3863), (0x05abb, 0x386a),
    (0x05abc, 0x211d), (0x05abd, 0x211c), (0x05abe, 0x211b), (0x05abf, 0x3868), (0x05ac0, 0x386d), (0x05ac1, 0x2118),
    (0x05ac2, 0x211f), (0x05ac4, 0x3861), (0x05ac6, 0x386b), (0x05ac7, 0x3860), (0x05ac8, 0x3869), (0x05ac9, 0x2119),
    (0x05aca, 0x386e), (0x05acb, 0x3862), (0x05acc, 0x211a), (0x05acd, 0x3871), (0x05ad3, 0x4b2c), (0x05ad5, 0x3b0e),
    (0x05ad6, 0x22d8), (0x05ad7, 0x22d7), (0x05ad8, 0x22d9), (0x05ad9, 0x3b1a), (0x05ada, 0x3b10), (0x05adb, 0x3b16),
    (0x05adc, 0x3b0b), (0x05add, 0x3b19), (0x05ade, 0x3b18), (0x05adf, 0x3b1c), (0x05ae0, 0x3b15), (0x05ae1, 0x22d4),
    (0x05ae2, 0x3b14), (0x05ae3, 0x22da), (0x05ae5, 0x3b0d), (0x05ae6, 0x22d5), (0x05ae8, 0x3b1b), (0x05ae9, 0x22d6),
    (0x05aea, 0x3b0f), (0x05aeb, 0x3b12), (0x05aec, 0x3b17), (0x05aed, 0x3b11), (0x05aee, 0x3b0c), (0x05af3, 0x3b13),
    (0x05af4, 0x3d69), (0x05af5, 0x2450), (0x05af6, 0x3d6c), (0x05af7, 0x3d6b), (0x05af8, 0x3d6e), (0x05af9, 0x3d70),
    (0x05afa, 0x4a12), (0x05afb, 0x244e), (0x05afd, 0x3d6a), (0x05aff, 0x3d68), (0x05b01, 0x3d71), (0x05b02, 0x3d6f),
    (0x05b03, 0x3d6d), (0x05b05, 0x3d73), (0x05b07, 0x3d72), (0x05b08, 0x2452), (0x05b09, 0x244d), (0x05b0b, 0x244f),
    (0x05b0c, 0x2451), (0x05b0f, 0x3d74), (0x05b10, 0x3fdf), (0x05b13, 0x3fde), (0x05b14, 0x3fdd), (0x05b16, 0x3fe0),
    (0x05b17, 0x3fd9), (0x05b19, 0x3fda), (0x05b1a, 0x3fe2), (0x05b1b, 0x3fdb), (0x05b1d, 0x25cc), (0x05b1e, 0x3fe4),
    (0x05b20, 0x3fe3), (0x05b21, 0x3fdc), (0x05b23, 0x420e), (0x05b24, 0x26e9), (0x05b25, 0x420c), (0x05b26, 0x4211),
    (0x05b27, 0x4210), (0x05b28, 0x3fe1), (0x05b2a, 0x26e8), (0x05b2c, 0x420f), (0x05b2d, 0x420b), (0x05b2e, 0x4213),
    (0x05b2f, 0x4212), (0x05b30, 0x26e7), (0x05b32, 0x420d), (0x05b34, 0x25cd), (0x05b38, 0x27f1), (0x05b3c, 0x43d5),
    (0x05b3d, 0x4548), (0x05b3e, 0x4549), (0x05b3f, 0x454a), (0x05b40, 0x2933), (0x05b43, 0x2934), (0x05b45, 0x468a),
    (0x05b46, 0x4ceb), (0x05b47, 0x478a), (0x05b48, 0x4789), (0x05b4b, 0x483a), (0x05b4c, 0x483b), (0x05b4d, 0x48d1),
    (0x05b4e, 0x4940), (0x05b50, 0x15a3), (0x05b51, 0x15a4), (0x05b53, 0x15a5), (0x05b54, 0x15ea), (0x05b55, 0x1657),
    (0x05b56, 0x2c99), (0x05b57, 0x16e3), (0x05b58, 0x16e4), (0x05b5a, 0x17a3), (0x05b5b, 0x17a4), (0x05b5c, 0x17a2),
    (0x05b5d, 0x17a1), (0x05b5f, 0x18bb), (0x05b62, 0x2e14), (0x05b63, 0x18bd), (0x05b64, 0x18bc), (0x05b65, 0x2e15),
    (0x05b69, 0x1a24), (0x05b6b, 0x1bb6), (0x05b6c, 0x3135), (0x05b6e, 0x3375), (0x05b70, 0x1d75), (0x05b71, 0x1f4e),
    (0x05b72, 0x3374), (0x05b73, 0x1f4d), (0x05b75, 0x22db), (0x05b76, 0x4b35), (0x05b77, 0x3b1d), (0x05b78, 0x25ce),
    (0x05b7a, 0x26ea), (0x05b7b, 0x4214), (0x05b7c, 0x4b37), (0x05b7d, 0x2935), (0x05b7f, 0x29e4), (0x05b80, 0x2aba),
    (0x05b81, 0x2c5a), (0x05b82, 0x4a6e), (0x05b83, 0x1658), (0x05b84, 0x2c5b), (0x05b85, 0x16e7), (0x05b87, 0x16e5),
    (0x05b88, 0x16e6), (0x05b89, 0x16e8), (0x05b8b, 0x17a6), (0x05b8c, 0x17a5), (0x05b8e, 0x2d1f), (0x05b8f, 0x17a7),
    (0x05b92, 0x2d20), (0x05b93, 0x2e16), (0x05b95, 0x2e17), (0x05b97, 0x18be), (0x05b98, 0x18c0), (0x05b99, 0x18c2),
    (0x05b9a, 0x18bf), (0x05b9b, 0x18c3), (0x05b9c, 0x18c1), (0x05b9d, 0x4b42), (0x05ba2, 0x1a28), (0x05ba3, 0x1a25),
    (0x05ba4, 0x1a27), (0x05ba5, 0x1a29), (0x05ba6, 0x1a26), (0x05ba7, 0x3136), (0x05ba8, 0x2f70), (0x05baa, 0x4bac),
    (0x05bac, 0x3138), (0x05bad, 0x3137), (0x05bae, 0x1bbc), (0x05bb0, 0x1bb8), (0x05bb3, 0x1bb9), (0x05bb4, 0x1bbb),
    (0x05bb5, 0x1bbd), (0x05bb6, 0x1bba), (0x05bb8, 0x1bbf), (0x05bb9, 0x1bbe), (0x05bbf, 0x1d7a), (0x05bc0, 0x3377),
    (0x05bc1, 0x3376), (0x05bc2, 0x1d79), (0x05bc4, 0x1d78), (0x05bc5, 0x1d77), (0x05bc6, 0x1d7b), (0x05bc7, 0x1d76),
    (0x05bca, 0x35ce), (0x05bcb, 0x35cb), (0x05bcc, 0x1f50), (0x05bcd, 0x35ca), (0x05bce, 0x35cf), (0x05bd0, 0x1f52),
    (0x05bd1, 0x35cd), (0x05bd2, 0x1f4f), (0x05bd3, 0x1f51), (0x05bd4, 0x35cc), (0x05bd5, 0x4b3c), (0x05bd6, 0x3874),
    (0x05bd7, 0x4cf5), (0x05bd8, 0x3875), (0x05bd9, 0x3876), (0x05bde, 0x22dc), (0x05bdf, 0x22e4), (0x05be0, 0x3b1e),
    (0x05be1, 0x22de), (0x05be2, 0x22e2), (0x05be3, 0x3b1f), (0x05be4, 0x22e3), (0x05be5, 0x22df), (0x05be6, 0x22e0),
    (0x05be7, 0x22dd), (0x05be8, 0x22e1), (0x05be9, 0x2455), (0x05bea, 0x35c9), (0x05beb, 0x2456), (0x05bec, 0x2454),
    (0x05bee, 0x2453), (0x05bef, 0x3fe5), (0x05bf0, 0x25cf), (0x05bf1, 0x4215), (0x05bf2, 0x4216), (0x05bf3, 0x4b41),
    (0x05bf5, 0x289e), (0x05bf6, 0x2936), (0x05bf8, 0x15a6), (0x05bfa, 0x16e9), (0x05bff, 0x4b07), (0x05c01, 0x1a2a),
    (0x05c03, 0x3139), (0x05c04, 0x1bc0), (0x05c05, 0x4b44), (0x05c07, 0x1d7e), (0x05c08, 0x1d7d), (0x05c09, 0x1d7c),
    (0x05c0a, 0x1f53), (0x05c0b, 0x1f54), (0x05c0c, 0x35d0), (0x05c0d, 0x22e5), (0x05c0e, 0x25d0), (0x05c0f, 0x15a7),
    (0x05c10, 0x2c44), (0x05c11, 0x15eb), (0x05c12, 0x2c5c), (0x05c13, 0x4b46), (0x05c14, 0x4b48), (0x05c15, 0x2c9a),
    (0x05c16, 0x16ea), (0x05c1a, 0x18c4), (0x05c1f, 0x3877), (0x05c22, 0x15a8), (0x05c24, 0x15ec), (0x05c25, 0x2c9b),
    (0x05c28, 0x2d21), (0x05c2a, 0x2d22), (0x05c2c, 0x17a8), (0x05c30, 0x35d1), (0x05c31, 0x1f55), (0x05c33, 0x3878),
    (0x05c37, 0x26eb), (0x05c38, 0x15a9), (0x05c39, 0x15bd), (0x05c3a, 0x15ed), (0x05c3b, 0x2c5d), (0x05c3c, 0x1659),
    (0x05c3e, 0x17ac), (0x05c3f, 0x17ab), (0x05c40, 0x17a9), (0x05c41, 0x17aa), (0x05c44, 0x2e18), (0x05c45, 0x18c6),
    (0x05c46, 0x18c7), (0x05c47, 0x2e19), (0x05c48, 0x18c5), (0x05c49, 0x4b4b), (0x05c4b, 0x1a2e), (0x05c4c, 0x2f71),
    (0x05c4d, 0x1a2d), (0x05c4e, 0x1a2b), (0x05c4f, 0x1a2c), (0x05c50, 0x1bc3), (0x05c51, 0x1bc1), (0x05c54, 0x313b),
    (0x05c55, 0x1bc2), (0x05c56, 0x313a), (0x05c58, 0x1bb7), (0x05c59, 0x3378), (0x05c5c, 0x1d80), (0x05c5d, 0x1d81),
    (0x05c60, 0x1d7f), (0x05c62, 0x22e6), (0x05c63, 0x3b20), (0x05c64, 0x2457), (0x05c65, 0x2458), (0x05c67, 0x3d75),
    (0x05c68, 0x26ec), (0x05c69, 0x43d6), (0x05c6a, 0x43d7), (0x05c6c, 0x2992), (0x05c6d, 0x4941), (0x05c6e, 0x2c33),
    (0x05c6f, 0x15ee), (0x05c71, 0x15aa), (0x05c73, 0x2c5f), (0x05c74, 0x2c5e), (0x05c79, 0x16eb), (0x05c7a, 0x2c9d),
    (0x05c7b, 0x2c9e), (0x05c7c, 0x2c9c), (0x05c7e, 0x2c9f), (0x05c85, 0x4b4d), (0x05c86, 0x2d2a), (0x05c88, 0x2d25),
    (0x05c89, 0x2d27), (0x05c8a, 0x2d29), (0x05c8b, 0x2d26), (0x05c8c, 0x17b0), (0x05c8d, 0x2d23), (0x05c8f, 0x2d24),
    (0x05c90, 0x17ad), (0x05c91, 0x17ae), (0x05c92, 0x2d28), (0x05c93, 0x2d2b), (0x05c94, 0x17af), (0x05c95, 0x2d2c),
    (0x05c9c, 0x4c9c), (0x05c9d, 0x2e27), (0x05c9f, 0x2e21), (0x05ca0, 0x2e1c), (0x05ca1, 0x18c9), (0x05ca2, 0x2e24),
    (0x05ca3, 0x2e22), (0x05ca4, 0x2e1b), (0x05ca5, 0x2e28), (0x05ca6, 0x2e2b), (0x05ca7, 0x2e26), (0x05ca8, 0x2e1f),
    (0x05ca9, 0x18cb), (0x05caa, 0x2e25), (0x05cab, 0x18cc), (0x05cac, 0x2e20), (0x05cad, 0x2e23), (0x05cae, 0x2e1a),
    (0x05caf, 0x2e1e), (0x05cb0, 0x2e2a), (0x05cb1, 0x18cd), (0x05cb3, 0x18ce), (0x05cb5, 0x2e1d), (0x05cb6, 0x2e29),
    (0x05cb7, 0x18c8), (0x05cb8, 0x18ca), (0x05cba, 0x4b57), (0x05cc6, 0x2f82), (0x05cc7, 0x2f7b), (0x05cc8, 0x2f81),
    (0x05cc9, 0x2f7a), (0x05cca, 0x2f7c), (0x05ccb, 0x2f76), (0x05ccc, 0x2f74), (0x05cce, 0x2f83), (0x05ccf, 0x2f80),
    (0x05cd0, 0x2f72), (0x05cd2, 0x1a30), (0x05cd3, 0x2f7e), (0x05cd4, 0x2f7f), (0x05cd6, 0x2f7d), (0x05cd7, 0x2f75),
    (0x05cd8, 0x2f73), (0x05cd9, 0x1a2f), (0x05cda, 0x2f79), (0x05cdb, 0x2f77), (0x05cde, 0x2f78), (0x05cdf, 0x2f84),
    (0x05ce8, 0x1bc8), (0x05ce9, 0x4b4e), (0x05cea, 0x1bc7), (0x05cec, 0x313c), (0x05ced, 0x1bc4), (0x05cee, 0x313e),
    (0x05cef, 0x4b4f), (0x05cf0, 0x1bc9), (0x05cf1, 0x313f), (0x05cf4, 0x1bcc), (0x05cf6, 0x1bca), (0x05cf7, 0x3140),
    (0x05cf8, 0x2f85), (0x05cf9, 0x3142), (0x05cfb, 0x1bc6), (0x05cfd, 0x1bc5), (0x05cff, 0x313d), (0x05d00, 0x3141),
    (0x05d01, 0x1bcb), (0x05d06, 0x1d83), (0x05d07, 0x1d82), (0x05d0b, 0x337a), (0x05d0c, 0x337e), (0x05d0d, 0x3380),
    (0x05d0e, 0x1d84), (0x05d0f, 0x3383), (0x05d10, 0x4b53), (0x05d11, 0x1d88), (0x05d12, 0x3385), (0x05d14, 0x1d8a),
    (0x05d16, 0x1d86), (0x05d17, 0x1d8e), (0x05d18, 0x4b54), (0x05d19, 0x1d8b), (0x05d1a, 0x337c), (0x05d1b, 0x1d85),
    (0x05d1d, 0x337b), (0x05d1e, 0x3379), (0x05d1f, 0x3387), (0x05d20, 0x337d), (0x05d22, 0x1d87), (0x05d23, 0x3386),
    (0x05d24, 0x1d8c), (0x05d25, 0x3382), (0x05d26, 0x3381), (0x05d27, 0x1d8d), (0x05d28, 0x337f), (0x05d29, 0x1d89),
    (0x05d2e, 0x3388), (0x05d30, 0x3384), (0x05d31, 0x35e0), (0x05d32, 0x35e7), (0x05d33, 0x35dc), (0x05d34, 0x1f58),
    (0x05d35, 0x35d8), (0x05d36, 0x35e8), (0x05d37, 0x35d2), (0x05d38, 0x35e5), (0x05d39, 0x35e3), (0x05d3a, 0x35dd),
    (0x05d3c, 0x35e6), (0x05d3d, 0x35df), (0x05d3f, 0x35d7), (0x05d40, 0x35e9), (0x05d41, 0x35d5), (0x05d42, 0x35e2),
    (0x05d43, 0x35d3), (0x05d45, 0x35ea), (0x05d46, 0x4b55), (0x05d47, 0x1f59), (0x05d49, 0x35e4), (0x05d4a, 0x387b),
    (0x05d4b, 0x35d6), (0x05d4c, 0x1f56), (0x05d4e, 0x35da), (0x05d50, 0x1f57), (0x05d51, 0x35d9), (0x05d52, 0x35de),
    (0x05d55, 0x35db), (0x05d59, 0x35e1), (0x05d5e, 0x387f), (0x05d62, 0x3882), (0x05d63, 0x387a), (0x05d65, 0x387c),
    (0x05d67, 0x3881), (0x05d68, 0x3880), (0x05d69, 0x2121), (0x05d6b, 0x35d4), (0x05d6c, 0x387e), (0x05d6f, 0x2122),
    (0x05d71, 0x3879), (0x05d72, 0x387d), (0x05d77, 0x3b27), (0x05d79, 0x3b2e), (0x05d7a, 0x3b25), (0x05d7c, 0x3b2c),
    (0x05d7d, 0x3b23), (0x05d7e, 0x3b2b), (0x05d7f, 0x3b2f), (0x05d80, 0x3b22), (0x05d81, 0x3b26), (0x05d82, 0x3b21),
    (0x05d84, 0x22e7), (0x05d86, 0x3b24), (0x05d87, 0x22e8), (0x05d88, 0x3b2a), (0x05d89, 0x3b29), (0x05d8a, 0x3b28),
    (0x05d8b, 0x4b50), (0x05d8d, 0x3b2d), (0x05d92, 0x3d79), (0x05d93, 0x3d7b), (0x05d94, 0x245a), (0x05d95, 0x3d7c),
    (0x05d97, 0x3d77), (0x05d99, 0x3d76), (0x05d9a, 0x3d80), (0x05d9c, 0x3d7e), (0x05d9d, 0x2459), (0x05d9e, 0x3d81),
    (0x05d9f, 0x3d78), (0x05da0, 0x3d7d), (0x05da1, 0x3d7f), (0x05da2, 0x3d7a), (0x05da7, 0x3fe9), (0x05da8, 0x3fee),
    (0x05da9, 0x3fe8), (0x05daa, 0x3fed), (0x05dac, 0x3fe6), (0x05dad, 0x3ff0), (0x05dae, 0x3fec), (0x05daf, 0x3ff1),
    (0x05db0, 0x3feb), (0x05db1, 0x3fe7), (0x05db2, 0x3fef), (0x05db4, 0x3ff2), (0x05db5, 0x3fea), (0x05db6, 0x4b87),
    (0x05db7, 0x4217), (0x05db8, 0x26f0), (0x05dba, 0x26ee), (0x05dbc, 0x26ed), (0x05dbd, 0x26ef), (0x05dc0, 0x43d8),
    (0x05dc2, 0x44e2), (0x05dc3, 0x454b), (0x05dc6, 0x468b), (0x05dc7, 0x468c), (0x05dc9, 0x2937), (0x05dcb, 0x478b),
    (0x05dcd, 0x2993), (0x05dcf, 0x478c), (0x05dd1, 0x483d), (0x05dd2, 0x29e6), (0x05dd4, 0x29e5), (0x05dd5, 0x483c),
    (0x05dd6, 0x2a1b), (0x05dd7, 0x4b58), (0x05dd8, 0x48d2), (0x05ddb, 0x2abb), (0x05ddd, 0x15ab), (0x05dde, 0x16ec),
    (0x05ddf, 0x2ca0), (0x05de0, 0x2d2d), (0x05de1, 0x183e), (0x05de2, 0x1d8f), (0x05de5, 0x15ac), (0x05de6, 0x165c),
    (0x05de7, 0x165b), (0x05de8, 0x165a), (0x05deb, 0x17b1), (0x05dee, 0x1bcd), (0x05df0, 0x3883), (0x05df1, 0x15ad),
    (0x05df2, 0x15ae), (0x05df3, 0x15af), (0x05df4, 0x15ef), (0x05df7, 0x1a31), (0x05df9, 0x2f86), (0x05dfd, 0x1f5a),
    (0x05dfe, 0x15b0), (0x05dff, 0x2c45), (0x05e02, 0x165d), (0x05e03, 0x165e), (0x05e04, 0x2c60), (0x05e06, 0x16ed),
    (0x05e09, 0x4b6c), (0x05e0a, 0x2d2e), (0x05e0c, 0x17b2), (0x05e0e, 0x2d2f), (0x05e11, 0x18d4), (0x05e14, 0x2e2d),
    (0x05e15, 0x18d2), (0x05e16, 0x18d1), (0x05e17, 0x2e2c), (0x05e18, 0x18cf), (0x05e19, 0x2e2e), (0x05e1a, 0x18d0),
    (0x05e1b, 0x18d3), (0x05e1d, 0x1a32), (0x05e1f, 0x1a34), (0x05e20, 0x2f8a), (0x05e21, 0x2f87), (0x05e22, 0x2f88),
    (0x05e23, 0x2f89), (0x05e24, 0x2f8b), (0x05e25, 0x1a33), (0x05e28, 0x3144), (0x05e29, 0x3143), (0x05e2b, 0x1bcf),
    (0x05e2d, 0x1bce), (0x05e2e, 0x4b61), (0x05e33, 0x1d92), (0x05e34, 0x338a), (0x05e36, 0x1d91), (0x05e37, 0x1d93),
    (0x05e38, 0x1d90), (0x05e3d, 0x1f5c), (0x05e3e, 0x3389), (0x05e40, 0x1f5d), (0x05e41, 0x35ec), (0x05e43, 0x1f5e),
    (0x05e44, 0x35eb), (0x05e45, 0x1f5b), (0x05e4a, 0x3886), (0x05e4b, 0x3888), (0x05e4c, 0x2123), (0x05e4d, 0x3887),
    (0x05e4e, 0x3885), (0x05e4f, 0x3884), (0x05e53, 0x3b32), (0x05e54, 0x22ed), (0x05e55, 0x22eb), (0x05e57, 0x22ec),
    (0x05e58, 0x3b30), (0x05e59, 0x3b31), (0x05e5b, 0x22e9), (0x05e5c, 0x3d85), (0x05e5d, 0x3d83), (0x05e5f, 0x245c),
    (0x05e60, 0x3d84), (0x05e61, 0x245d), (0x05e62, 0x245b), (0x05e63, 0x22ea), (0x05e66, 0x3ff5), (0x05e67, 0x3ff3),
    (0x05e68, 0x3ff4), (0x05e69, 0x3d82), (0x05e6a, 0x4219), (0x05e6b, 0x26f1), (0x05e6c, 0x4218), (0x05e6d, 0x43d9),
    (0x05e6e, 0x43da), (0x05e6f, 0x3ff6), (0x05e70, 0x454c), (0x05e72, 0x15b1), (0x05e73, 0x165f), (0x05e74, 0x16ef),
    (0x05e75, 0x2ca1), (0x05e76, 0x16ee), (0x05e78, 0x18d5), (0x05e79, 0x2124), (0x05e7a, 0x4b64), (0x05e7b, 0x15f0),
    (0x05e7c, 0x1660), (0x05e7d, 0x1a35), (0x05e7e, 0x1f5f), (0x05e7f, 0x2abd), (0x05e80, 0x2c61), (0x05e82, 0x2c62),
    (0x05e83, 0x4b33), (0x05e84, 0x2ca2), (0x05e87, 0x17b4), (0x05e88, 0x2d33), (0x05e89, 0x2d31), (0x05e8a, 0x17b5),
    (0x05e8b, 0x2d30), (0x05e8c, 0x2d32), (0x05e8d, 0x2d34), (0x05e8f, 0x17b3), (0x05e95, 0x18d9), (0x05e96, 0x18da),
    (0x05e97, 0x18d7), (0x05e9a, 0x18d6), (0x05e9b, 0x2f8f), (0x05e9c, 0x18d8), (0x05ea0, 0x1a36), (0x05ea2, 0x2f8e),
    (0x05ea3, 0x2f90), (0x05ea4, 0x2f8d), (0x05ea5, 0x2f91), (0x05ea6, 0x1a37), (0x05ea7, 0x1bd2), (0x05ea8, 0x3145),
    (0x05eaa, 0x3147), (0x05eab, 0x1bd0), (0x05eac, 0x3148), (0x05ead, 0x1bd1), (0x05eae, 0x3146), (0x05eb0, 0x2f8c),
    (0x05eb1, 0x338b), (0x05eb2, 0x338e), (0x05eb3, 0x338f), (0x05eb4, 0x338c), (0x05eb5, 0x1d97), (0x05eb6, 0x1d96),
    (0x05eb7, 0x1d94), (0x05eb8, 0x1d95), (0x05eb9, 0x338d), (0x05ebe, 0x1d98), (0x05ec1, 0x1f61), (0x05ec2, 0x1f62),
    (0x05ec4, 0x1f63), (0x05ec5, 0x3889), (0x05ec6, 0x388b), (0x05ec7, 0x388d), (0x05ec8, 0x2126), (0x05ec9, 0x2125),
    (0x05eca, 0x1f60), (0x05ecb, 0x388c), (0x05ecc, 0x388a), (0x05ece, 0x3b36), (0x05ed1, 0x3b34), (0x05ed2, 0x3b3a),
    (0x05ed3, 0x22ee), (0x05ed4, 0x3b3b), (0x05ed5, 0x3b38), (0x05ed6, 0x22ef), (0x05ed7, 0x3b35), (0x05ed8, 0x3b33),
    (0x05ed9, 0x3b39), (0x05eda, 0x245f), (0x05edb, 0x3d87), (0x05edc, 0x3b37), (0x05edd, 0x2461), (0x05ede, 0x3d88),
    (0x05edf, 0x2460), (0x05ee0, 0x2463), (0x05ee1, 0x3d89), (0x05ee2, 0x245e), (0x05ee3, 0x2462), (0x05ee5, 0x3ffb),
    (0x05ee6, 0x3ff9), (0x05ee7, 0x3ff8), (0x05ee8, 0x3ffa), (0x05ee9, 0x3ff7), (0x05eec, 0x28a0), (0x05eee, 0x468d),
    (0x05eef, 0x468e), (0x05ef1, 0x478d), (0x05ef2, 0x483e), (0x05ef3, 0x2a66), (0x05ef4, 0x4b6d), (0x05ef6, 0x18db),
    (0x05ef7, 0x17b6), (0x05ef9, 0x4b6f), (0x05efa, 0x1a38), (0x05efb, 0x4b70), (0x05efc, 0x4b72), (0x05efe, 0x15b2),
    (0x05eff, 0x15f1), (0x05f01, 0x1661), (0x05f02, 0x2ca3), (0x05f04, 0x17b7), (0x05f05, 0x2d35), (0x05f07, 0x2f92),
    (0x05f08, 0x1a39), (0x05f0a, 0x22f0), (0x05f0b, 0x15b3), (0x05f0d, 0x4b75), (0x05f0f, 0x16f0), (0x05f12, 0x2127),
    (0x05f13, 0x15b4), (0x05f14, 0x15f2), (0x05f15, 0x15f3), (0x05f17, 0x1663), (0x05f18, 0x1662), (0x05f1a, 0x2ca4),
    (0x05f1b, 0x16f1), (0x05f1d, 0x2d36), (0x05f1f, 0x17b8), (0x05f22, 0x2e30), (0x05f23, 0x2e31), (0x05f24, 0x2e32),
    (0x05f26, 0x18dc), (0x05f27, 0x18dd), (0x05f28, 0x2e2f), (0x05f29, 0x18de), (0x05f2d, 0x1a3a), (0x05f2e, 0x2f93),
    (0x05f30, 0x314a), (0x05f31, 0x1bd3), (0x05f33, 0x3149), (0x05f35, 0x1d99), (0x05f36, 0x3390), (0x05f37, 0x1d9a),
    (0x05f38, 0x3391), (0x05f3a, 0x4b7b), (0x05f3c, 0x1f64), (0x05f40, 0x388e), (0x05f43, 0x3b3d), (0x05f44, 0x3b3c),
    (0x05f46, 0x22f1), (0x05f48, 0x2464), (0x05f49, 0x3d8a), (0x05f4a, 0x25d1), (0x05f4b, 0x3ffc), (0x05f4c, 0x26f2),
    (0x05f4e, 0x29e7), (0x05f4f, 0x48d4), (0x05f50, 0x2abf), (0x05f54, 0x2e33), (0x05f56, 0x2f94), (0x05f57, 0x1d9b),
    (0x05f58, 0x35ed), (0x05f59, 0x2128), (0x05f5d, 0x27f2), (0x05f61, 0x2ac0), (0x05f62, 0x17ba), (0x05f63, 0x4b80),
    (0x05f64, 0x17b9), (0x05f65, 0x1a3b), (0x05f67, 0x314b), (0x05f69, 0x1d9d), (0x05f6a, 0x1ead), (0x05f6b, 0x1d9e),
    (0x05f6c, 0x1d9c), (0x05f6d, 0x1f65), (0x05f6f, 0x3b3e), (0x05f70, 0x22f2), (0x05f71, 0x2465), (0x05f72, 0x4b83),
    (0x05f73, 0x2c34), (0x05f74, 0x2ca5), (0x05f76, 0x2d38), (0x05f77, 0x17bb), (0x05f78, 0x2d37), (0x05f79, 0x17bc),
    (0x05f7b, 0x4a82), (0x05f7c, 0x18e2), (0x05f7d, 0x2e36), (0x05f7e, 0x2e35), (0x05f7f, 0x18e1), (0x05f80, 0x18df),
    (0x05f81, 0x18e0), (0x05f82, 0x2e34), (0x05f85, 0x1a3d), (0x05f86, 0x2f95), (0x05f87, 0x1a40), (0x05f88, 0x1a3c),
    (0x05f89, 0x1a42), (0x05f8a, 0x1a3e), (0x05f8b, 0x1a3f), (0x05f8c, 0x1a41), (0x05f90, 0x1bd6), (0x05f91, 0x1bd5),
    (0x05f92, 0x1bd4), (0x05f96, 0x3393), (0x05f97, 0x1d9f), (0x05f98, 0x1da2), (0x05f99, 0x1da0), (0x05f9b, 0x3392),
    (0x05f9c, 0x1da5), (0x05f9e, 0x1da1), (0x05f9f, 0x3394), (0x05fa0, 0x1da4), (0x05fa1, 0x1da3), (0x05fa4, 0x4a56),
    (0x05fa5, 0x35ef), (0x05fa6, 0x35ee), (0x05fa7, 0x4b86), (0x05fa8, 0x1f68), (0x05fa9, 0x1f66), (0x05faa, 0x1f67),
    (0x05fab, 0x35f0), (0x05fac, 0x2129), (0x05fad, 0x3890), (0x05fae, 0x212a), (0x05faf, 0x388f), (0x05fb2, 0x3d8b),
    (0x05fb5, 0x2467), (0x05fb6, 0x3b3f), (0x05fb7, 0x2466), (0x05fb9, 0x22f3), (0x05fbb, 0x421b), (0x05fbc, 0x3ffd),
    (0x05fbd, 0x26f3), (0x05fbe, 0x421a), (0x05fbf, 0x454d), (0x05fc0, 0x468f), (0x05fc1, 0x4690), (0x05fc3, 0x15f4),
    (0x05fc5, 0x1664), (0x05fc9, 0x2c63), (0x05fcc, 0x17be), (0x05fcd, 0x17c0), (0x05fcf, 0x2ca8), (0x05fd0, 0x2d3b),
    (0x05fd1, 0x2d3a), (0x05fd2, 0x2d39), (0x05fd4, 0x2ca7), (0x05fd5, 0x2ca6), (0x05fd6, 0x16f3), (0x05fd7, 0x17bf),
    (0x05fd8, 0x17bd), (0x05fd9, 0x16f2), (0x05fdd, 0x18e3), (0x05fde, 0x2e37), (0x05fdf, 0x4be2), (0x05fe0, 0x18e4),
    (0x05fe1, 0x2d40), (0x05fe3, 0x2d42), (0x05fe4, 0x2d41), (0x05fe5, 0x2e38), (0x05fe8, 0x2d3d), (0x05fea, 0x17c4),
    (0x05feb, 0x17c2), (0x05fed, 0x2d3c), (0x05fee, 0x2d3e), (0x05fef, 0x2d44), (0x05ff1, 0x17c1), (0x05ff3, 0x2d3f),
    (0x05ff4, 0x2d48), (0x05ff5, 0x18e6), (0x05ff7, 0x2d45), (0x05ff8, 0x17c3), (0x05ffa, 0x2d43), (0x05ffb, 0x2d46),
    (0x05ffd, 0x18e5), (0x05fff, 0x18e7), (0x06000, 0x2d47), (0x06009, 0x2e4c), (0x0600a, 0x2e3f), (0x0600b, 0x2e3d),
    (0x0600c, 0x2e4b), (0x0600d, 0x2e46), (0x0600e, 0x1a47), (0x0600f, 0x18e8), (0x06010, 0x2e47), (0x06011, 0x2e4a),
    (0x06012, 0x1a43), (0x06013, 0x2e49), (0x06014, 0x18e9), (0x06015, 0x18ee), (0x06016, 0x18ec), (0x06017, 0x2e40),
    (0x06019, 0x2e3b), (0x0601a, 0x2e42), (0x0601b, 0x18f3), (0x0601c, 0x2e4d), (0x0601d, 0x1a44), (0x0601e, 0x2e43),
    (0x06020, 0x1a45), (0x06021, 0x18ef), (0x06022, 0x2e45), (0x06023, 0x4bb6), (0x06024, 0x2fa4), (0x06025, 0x1a46),
    (0x06026, 0x2e3a), (0x06027, 0x18f0), (0x06028, 0x1a48), (0x06029, 0x18f1), (0x0602a, 0x18ed), (0x0602b, 0x18f2),
    (0x0602c, 0x2e44), (0x0602d, 0x2e39), (0x0602e, 0x2e48), (0x0602f, 0x18ea), (0x06031, 0x4b90), (0x06032, 0x2e3c),
    (0x06033, 0x2e41), (0x06034, 0x2e3e), (0x06035, 0x18eb), (0x06037, 0x2f96), (0x06039, 0x2f97), (0x06040, 0x2fa1),
    (0x06041, 0x314f), (0x06042, 0x2fa2), (0x06043, 0x1a4e), (0x06044, 0x2fa5), (0x06045, 0x2f9b), (0x06046, 0x1a4d),
    (0x06047, 0x2f9d), (0x06049, 0x2f9e), (0x0604a, 0x4a9e), (0x0604c, 0x2fa0), (0x0604d, 0x1a49), (0x06050, 0x1bda),
    (0x06052, 0x4a10), (0x06053, 0x2f9c), (0x06054, 0x2f98), (0x06055, 0x1bdb), (0x06058, 0x2fa6), (0x06059, 0x1bd7),
    (0x0605a, 0x314d), (0x0605b, 0x2f9f), (0x0605d, 0x314c), (0x0605e, 0x2f9a), (0x0605f, 0x2fa3), (0x06062, 0x1a4c),
    (0x06063, 0x1bd8), (0x06064, 0x1a52), (0x06065, 0x1bd9), (0x06066, 0x2fa7), (0x06067, 0x314e), (0x06068, 0x1a4b),
    (0x06069, 0x1bdd), (0x0606a, 0x1a51), (0x0606b, 0x1a50), (0x0606c, 0x1a4f), (0x0606d, 0x1bdc), (0x0606e, 0x2fa8),
    (0x0606f, 0x1bde), (0x06070, 0x1a4a), (0x06072, 0x2f99), (0x0607f, 0x1da6), (0x06080, 0x3152), (0x06081, 0x3154),
    (0x06083, 0x3156), (0x06084, 0x1bdf), (0x06085, 0x1be5), (0x06086, 0x3397), (0x06087, 0x315a), (0x06088, 0x3151),
    (0x06089, 0x1da8), (0x0608a, 0x3395), (0x0608c, 0x1be4), (0x0608d, 0x1be2), (0x0608e, 0x315c), (0x06090, 0x3396),
    (0x06092, 0x3153), (0x06094, 0x1be3), (0x06095, 0x3157), (0x06096, 0x1be6), (0x06097, 0x3159), (0x0609a, 0x1be1),
    (0x0609b, 0x3158), (0x0609c, 0x315b), (0x0609d, 0x3155), (0x0609e, 0x4b9a), (0x0609f, 0x1be0), (0x060a0, 0x1da9),
    (0x060a2, 0x3150), (0x060a3, 0x1da7), (0x060a8, 0x1daa), (0x060b0, 0x3399), (0x060b1, 0x33a2), (0x060b2, 0x1f6b),
    (0x060b3, 0x4b9c), (0x060b4, 0x1dac), (0x060b5, 0x1db1), (0x060b6, 0x1f6c), (0x060b7, 0x33a4), (0x060b8, 0x1db8),
    (0x060b9, 0x35f2), (0x060ba, 0x339a), (0x060bb, 0x1db0), (0x060bc, 0x1db3), (0x060bd, 0x1dae), (0x060be, 0x3398),
    (0x060bf, 0x33a6), (0x060c0, 0x33a9), (0x060c1, 0x3601), (0x060c3, 0x33a7), (0x060c4, 0x35f6), (0x060c5, 0x1daf),
    (0x060c6, 0x1db6), (0x060c7, 0x1dba), (0x060c8, 0x33a1), (0x060c9, 0x35f1), (0x060ca, 0x33a5), (0x060cb, 0x1dab),
    (0x060cc, 0x35f3), (0x060cd, 0x33a8), (0x060ce, 0x35f5), (0x060cf, 0x339d), (0x060d1, 0x1f69), (0x060d3, 0x339b),
    (0x060d4, 0x339c), (0x060d5, 0x1db5), (0x060d8, 0x1db4), (0x060d9, 0x339f), (0x060da, 0x1db9), (0x060db, 0x33a3),
    (0x060dc, 0x1db2), (0x060dd, 0x33a0), (0x060de, 0x4c30), (0x060df, 0x1db7), (0x060e0, 0x1f6d), (0x060e1, 0x1f6a),
    (0x060e2, 0x35f4), (0x060e4, 0x339e), (0x060e6, 0x1dad), (0x060f0, 0x1f72), (0x060f1, 0x1f76), (0x060f2, 0x35f8),
    (0x060f3, 0x212f), (0x060f4, 0x1f74), (0x060f5, 0x35fc), (0x060f6, 0x1f78), (0x060f7, 0x3891), (0x060f8, 0x35fe),
    (0x060f9, 0x2131), (0x060fa, 0x1f70), (0x060fb, 0x1f73), (0x060fc, 0x35ff), (0x060fe, 0x3600), (0x060ff, 0x3606),
    (0x06100, 0x1f7a), (0x06101, 0x2132), (0x06103, 0x3602), (0x06104, 0x3607), (0x06105, 0x35fb), (0x06106, 0x213c),
    (0x06108, 0x2133), (0x06109, 0x1f79), (0x0610a, 0x35f9), (0x0610b, 0x3608), (0x0610d, 0x213b), (0x0610e, 0x1f77),
    (0x0610f, 0x212c), (0x06110, 0x3605), (0x06112, 0x1f7b), (0x06113, 0x35fd), (0x06114, 0x35f7), (0x06115, 0x1f71),
    (0x06116, 0x35fa), (0x06118, 0x3603), (0x0611a, 0x212b), (0x0611b, 0x2130), (0x0611c, 0x1f6e), (0x0611d, 0x3604),
    (0x0611f, 0x212e), (0x06123, 0x1f6f), (0x06127, 0x213a), (0x06128, 0x3b41), (0x06129, 0x389c), (0x0612b, 0x3894),
    (0x0612c, 0x3b40), (0x0612e, 0x3898), (0x0612f, 0x389a), (0x06132, 0x3897), (0x06134, 0x2139), (0x06136, 0x3896),
    (0x06137, 0x213d), (0x0613b, 0x3b50), (0x0613e, 0x2138), (0x0613f, 0x22f5), (0x06140, 0x389d), (0x06141, 0x3b42),
    (0x06142, 0x4ba5), (0x06144, 0x2136), (0x06145, 0x3895), (0x06146, 0x3899), (0x06147, 0x22f4), (0x06148, 0x212d),
    (0x06149, 0x3892), (0x0614a, 0x3893), (0x0614b, 0x22f6), (0x0614c, 0x2135), (0x0614d, 0x2137), (0x0614e, 0x2134),
    (0x0614f, 0x389b), (0x06152, 0x3b46), (0x06153, 0x3b47), (0x06154, 0x3b4c), (0x06155, 0x246c), (0x06156, 0x3b53),
    (0x06158, 0x22fc), (0x0615a, 0x22fb), (0x0615b, 0x3b4e), (0x0615c, 0x4bb7), (0x0615d, 0x246b), (0x0615e, 0x3b43),
    (0x0615f, 0x22fa), (0x06160, 0x4b3d), (0x06161, 0x3b52), (0x06162, 0x22f8), (0x06163, 0x22f9), (0x06164, 0x4ba3),
    (0x06165, 0x3b4f), (0x06166, 0x3d9c), (0x06167, 0x2469), (0x06168, 0x1f75), (0x0616a, 0x3b51), (0x0616b, 0x2470),
    (0x0616c, 0x3b49), (0x0616e, 0x246a), (0x06170, 0x246f), (0x06171, 0x3b44), (0x06172, 0x3b48), (0x06173, 0x3b45),
    (0x06174, 0x3b4b), (0x06175, 0x22fd), (0x06176, 0x2468), (0x06177, 0x22f7), (0x06179, 0x3d8e), (0x0617a, 0x3b4d),
    (0x0617c, 0x246e), (0x0617e, 0x2471), (0x06180, 0x3b4a), (0x06181, 0x4ba8), (0x06182, 0x246d), (0x06183, 0x3d8d),
    (0x06187, 0x4bab), (0x06189, 0x3d92), (0x0618a, 0x25d5), (0x0618b, 0x3d8c), (0x0618c, 0x4009), (0x0618d, 0x3d9b),
    (0x0618e, 0x2475), (0x06190, 0x2473), (0x06191, 0x25d3), (0x06192, 0x3d98), (0x06193, 0x3d94), (0x06194, 0x2479),
    (0x06196, 0x4000), (0x0619a, 0x2477), (0x0619b, 0x3d93), (0x0619d, 0x3ffe), (0x0619f, 0x3d97), (0x061a1, 0x3d9a),
    (0x061a2, 0x3d91), (0x061a4, 0x2478), (0x061a7, 0x2472), (0x061a8, 0x3fff), (0x061a9, 0x25d4), (0x061aa, 0x3d99),
    (0x061ab, 0x2474), (0x061ac, 0x2476), (0x061ad, 0x3d96), (0x061ae, 0x247a), (0x061af, 0x3d95), (0x061b0, 0x3d90),
    (0x061b1, 0x3d8f), (0x061b2, 0x25d2), (0x061b3, 0x3d9d), (0x061b4, 0x4002), (0x061b5, 0x421d), (0x061b6, 0x25d7),
    (0x061b8, 0x4008), (0x061ba, 0x4006), (0x061bc, 0x421e), (0x061be, 0x25d8), (0x061bf, 0x4007), (0x061c1, 0x4004),
    (0x061c2, 0x26f5), (0x061c3, 0x421c), (0x061c5, 0x4001), (0x061c6, 0x4003), (0x061c7, 0x26f6), (0x061c8, 0x25da),
    (0x061c9, 0x26f4), (0x061ca, 0x25d9), (0x061cb, 0x26f8), (0x061cc, 0x4005), (0x061cd, 0x25d6), (0x061d0, 0x4bb2),
    (0x061d3, 0x4baf), (0x061d6, 0x43e3), (0x061d8, 0x43db), (0x061de, 0x4224), (0x061df, 0x43dc), (0x061e0, 0x4220),
    (0x061e3, 0x27f3), (0x061e4, 0x4222), (0x061e5, 0x4221), (0x061e6, 0x26f7), (0x061e7, 0x421f), (0x061e8, 0x4223),
    (0x061e9, 0x43e4), (0x061ea, 0x43e0), (0x061eb, 0x43e2), (0x061ed, 0x43dd), (0x061ee, 0x43de), (0x061f0, 0x43e1),
    (0x061f1, 0x43df), (0x061f2, 0x28a1), (0x061f5, 0x28a4), (0x061f6, 0x28a3), (0x061f7, 0x28a2), (0x061f8, 0x2938),
    (0x061f9, 0x4691), (0x061fa, 0x2939), (0x061fb, 0x454e), (0x061fc, 0x2994), (0x061fd, 0x478e), (0x061fe, 0x2995),
    (0x061ff, 0x29e8), (0x06200, 0x2a1c), (0x06201, 0x48d5), (0x06203, 0x48d6), (0x06204, 0x48d7), (0x06207, 0x49f0),
    (0x06208, 0x15f5), (0x06209, 0x2c64), (0x0620a, 0x1665), (0x0620c, 0x16f5), (0x0620d, 0x16f6), (0x0620e, 0x16f4),
    (0x06210, 0x16f7), (0x06211, 0x17c6), (0x06212, 0x17c5), (0x06214, 0x2e4e), (0x06215, 0x18f5), (0x06216, 0x18f4),
    (0x06219, 0x315d), (0x0621a, 0x1dbb), (0x0621b, 0x1dbc), (0x0621f, 0x1f7c), (0x06220, 0x389e), (0x06221, 0x213e),
    (0x06222, 0x213f), (0x06223, 0x38a0), (0x06224, 0x38a2), (0x06225, 0x38a1), (0x06227, 0x3b55), (0x06229, 0x3b54),
    (0x0622a, 0x22fe), (0x0622b, 0x3b56), (0x0622d, 0x3d9e), (0x0622e, 0x247b), (0x06230, 0x25db), (0x06232, 0x26f9),
    (0x06233, 0x27f4), (0x06234, 0x26fa), (0x06236, 0x15f6), (0x0623a, 0x2d49), (0x0623d, 0x2e4f), (0x0623e, 0x18f7),
    (0x0623f, 0x18f6), (0x06240, 0x18f8), (0x06241, 0x1a53), (0x06242, 0x2fa9), (0x06243, 0x2faa), (0x06246, 0x315e),
    (0x06247, 0x1be7), (0x06248, 0x1dbd), (0x06249, 0x1f7d), (0x0624a, 0x3609), (0x0624b, 0x15f7), (0x0624d, 0x15b5),
    (0x0624e, 0x15f8), (0x06250, 0x2c65), (0x06251, 0x1669), (0x06252, 0x1668), (0x06253, 0x1666), (0x06254, 0x1667),
    (0x06258, 0x16fa), (0x06259, 0x2caf), (0x0625a, 0x2cb1), (0x0625b, 0x16f9), (0x0625c, 0x2ca9), (0x0625e, 0x2caa),
    (0x06260, 0x2cb0), (0x06261, 0x2cac), (0x06262, 0x2cae), (0x06263, 0x16f8), (0x06264, 0x2cab), (0x06265, 0x2cb2),
    (0x06266, 0x2cad), (0x0626d, 0x17cd), (0x0626e, 0x17d6), (0x0626f, 0x17d4), (0x06270, 0x2d53), (0x06271, 0x2d50),
    (0x06272, 0x2d58), (0x06273, 0x17d2), (0x06274, 0x2d59), (0x06276, 0x17cb), (0x06277, 0x2d56), (0x06279, 0x17d1),
    (0x0627a, 0x2d52), (0x0627b, 0x2d51), (0x0627c, 0x17cf), (0x0627d, 0x2d57), (0x0627e, 0x17d0), (0x0627f, 0x18f9),
    (0x06280, 0x17ca), (0x06281, 0x2d54), (0x06283, 0x2d4a), (0x06284, 0x17c7), (0x06286, 0x17da), (0x06287, 0x2d4f),
    (0x06288, 0x2d55), (0x06289, 0x17cc), (0x0628a, 0x17ce), (0x0628c, 0x2d4b), (0x0628e, 0x2d4c), (0x0628f, 0x2d4d),
    (0x06291, 0x17d9), (0x06292, 0x17d3), (0x06293, 0x17d8), (0x06294, 0x2d4e), (0x06295, 0x17d7), (0x06296, 0x17c9),
    (0x06297, 0x17c8), (0x06298, 0x17d5), (0x062a8, 0x1907), (0x062a9, 0x2e5b), (0x062aa, 0x2e54), (0x062ab, 0x1902),
    (0x062ac, 0x1915), (0x062ad, 0x2e50), (0x062ae, 0x2e57), (0x062af, 0x2e59), (0x062b0, 0x2e5c), (0x062b1, 0x1910),
    (0x062b3, 0x2e58), (0x062b4, 0x2e51), (0x062b5, 0x190e), (0x062b6, 0x2e55), (0x062b8, 0x2e5d), (0x062b9, 0x18ff),
    (0x062bb, 0x2e5a), (0x062bc, 0x1909), (0x062bd, 0x1908), (0x062be, 0x2e53), (0x062bf, 0x18fd), (0x062c2, 0x18fe),
    (0x062c4, 0x18fc), (0x062c5, 0x4bbb), (0x062c6, 0x1914), (0x062c7, 0x190c), (0x062c8, 0x1906), (0x062c9, 0x18fa),
    (0x062ca, 0x2e56), (0x062cb, 0x1905), (0x062cc, 0x18fb), (0x062cd, 0x190d), (0x062ce, 0x1916), (0x062cf, 0x2fab),
    (0x062d0, 0x190a), (0x062d1, 0x2e52), (0x062d2, 0x1900), (0x062d3, 0x1903), (0x062d4, 0x1904), (0x062d5, 0x4bbd),
    (0x062d6, 0x1912), (0x062d7, 0x1913), (0x062d8, 0x1911), (0x062d9, 0x190b), (0x062da, 0x190f), (0x062db, 0x1901),
    (0x062dc, 0x1a54), (0x062df, 0x4a46), (0x062eb, 0x2fb1), (0x062ec, 0x1a60), (0x062ed, 0x1a58), (0x062ee, 0x1a5a),
    (0x062ef, 0x1a5f), (0x062f0, 0x2fbd), (0x062f1, 0x1a5d), (0x062f2, 0x315f), (0x062f3, 0x1be8), (0x062f4, 0x1a62),
    (0x062f5, 0x2fae), (0x062f6, 0x2fb6), (0x062f7, 0x1a5e), (0x062f8, 0x2fb5), (0x062f9, 0x2fb2), (0x062fa, 0x2fba),
    (0x062fb, 0x2fbc), (0x062fc, 0x1a57), (0x062fd, 0x1a5b), (0x062fe, 0x1a61), (0x062ff, 0x1bea), (0x06300, 0x2fb7),
    (0x06301, 0x1a59), (0x06302, 0x1a64), (0x06303, 0x2fb0), (0x06307, 0x1a5c), (0x06308, 0x1be9), (0x06309, 0x1a56),
    (0x0630b, 0x2fad), (0x0630c, 0x2fb4), (0x0630d, 0x2fac), (0x0630e, 0x2faf), (0x0630f, 0x2fb3), (0x06310, 0x3160),
    (0x06311, 0x1a63), (0x06313, 0x2fb8), (0x06314, 0x2fb9), (0x06315, 0x2fbb), (0x06316, 0x1a55), (0x06328, 0x1bf8),
    (0x06329, 0x316c), (0x0632a, 0x1bf6), (0x0632b, 0x1bf7), (0x0632c, 0x3162), (0x0632d, 0x3172), (0x0632f, 0x1bed),
    (0x06332, 0x33aa), (0x06333, 0x3174), (0x06334, 0x316e), (0x06336, 0x3165), (0x06338, 0x3177), (0x06339, 0x3168),
    (0x0633a, 0x1bf3), (0x0633b, 0x33c1), (0x0633c, 0x316b), (0x0633d, 0x1bf5), (0x0633e, 0x1bec), (0x06340, 0x3179),
    (0x06341, 0x316d), (0x06342, 0x1bef), (0x06343, 0x3166), (0x06344, 0x3163), (0x06345, 0x3164), (0x06346, 0x1bf0),
    (0x06347, 0x3173), (0x06348, 0x317a), (0x06349, 0x1bf2), (0x0634a, 0x316a), (0x0634b, 0x3169), (0x0634c, 0x1bfa),
    (0x0634d, 0x1bf9), (0x0634e, 0x1beb), (0x0634f, 0x1bf1), (0x06350, 0x1bf4), (0x06351, 0x3176), (0x06354, 0x3170),
    (0x06355, 0x1bee), (0x06356, 0x3161), (0x06357, 0x3178), (0x06358, 0x316f), (0x06359, 0x3171), (0x0635a, 0x3175),
    (0x06365, 0x33ab), (0x06367, 0x1dc5), (0x06368, 0x1dd9), (0x06369, 0x1dd8), (0x0636b, 0x1dcd), (0x0636c, 0x4bbf),
    (0x0636d, 0x33bd), (0x0636e, 0x33b9), (0x0636f, 0x33b6), (0x06370, 0x33c8), (0x06371, 0x1dc8), (0x06372, 0x1dc0),
    (0x06375, 0x33bb), (0x06376, 0x1f8d), (0x06377, 0x1dc4), (0x06378, 0x33c3), (0x0637a, 0x1dda), (0x0637b, 0x1dd7),
    (0x0637c, 0x33bf), (0x0637d, 0x33ae), (0x06380, 0x1dd6), (0x06381, 0x33c5), (0x06382, 0x33ad), (0x06383, 0x1dcb),
    (0x06384, 0x1dcf), (0x06385, 0x33c4), (0x06387, 0x33b7), (0x06388, 0x1dd0), (0x06389, 0x1dca), (0x0638a, 0x33ac),
    (0x0638b, 0x4bb9), (0x0638c, 0x1f7f), (0x0638d, 0x33c7), (0x0638e, 0x33b5), (0x0638f, 0x1dd5), (0x06390, 0x33b8),
    (0x06391, 0x33c6), (0x06392, 0x1dd4), (0x06394, 0x360a), (0x06396, 0x1dc1), (0x06397, 0x33b3), (0x06398, 0x1dc6),
    (0x06399, 0x1dd1), (0x0639b, 0x1dcc), (0x0639c, 0x33bc), (0x0639d, 0x33b2), (0x0639e, 0x33b0), (0x0639f, 0x33c2),
    (0x063a0, 0x1dbe), (0x063a1, 0x1dd2), (0x063a2, 0x1dc2), (0x063a3, 0x1f7e), (0x063a4, 0x33c0), (0x063a5, 0x1dc3),
    (0x063a7, 0x1dbf), (0x063a8, 0x1dce), (0x063a9, 0x1dc9), (0x063aa, 0x1dc7), (0x063ab, 0x33b4), (0x063ac, 0x1dd3),
    (0x063ad, 0x33b1), (0x063ae, 0x33be), (0x063af, 0x33ba), (0x063b0, 0x360c), (0x063b1, 0x360b), (0x063bd, 0x33af),
    (0x063be, 0x361c), (0x063c0, 0x1f81), (0x063c2, 0x3622), (0x063c3, 0x3611), (0x063c4, 0x361f), (0x063c5, 0x38a3),
    (0x063c6, 0x1f84), (0x063c7, 0x3623), (0x063c8, 0x3626), (0x063c9, 0x1f83), (0x063ca, 0x3614), (0x063cb, 0x3625),
    (0x063cc, 0x3624), (0x063cd, 0x1f85), (0x063ce, 0x360d), (0x063cf, 0x1f80), (0x063d0, 0x1f88), (0x063d2, 0x1f86),
    (0x063d3, 0x3621), (0x063d5, 0x3617), (0x063d6, 0x1f8a), (0x063d7, 0x3628), (0x063d8, 0x3620), (0x063d9, 0x3629),
    (0x063da, 0x1f92), (0x063db, 0x1f90), (0x063dc, 0x361e), (0x063dd, 0x361d), (0x063df, 0x361b), (0x063e0, 0x3615),
    (0x063e1, 0x1f89), (0x063e3, 0x1f87), (0x063e4, 0x3167), (0x063e5, 0x360e), (0x063e7, 0x38c1), (0x063e8, 0x360f),
    (0x063e9, 0x1f82), (0x063ea, 0x1f8f), (0x063eb, 0x38a5), (0x063ed, 0x1f8b), (0x063ee, 0x1f8c), (0x063ef, 0x3610),
    (0x063f0, 0x3627), (0x063f1, 0x38a4), (0x063f2, 0x3618), (0x063f3, 0x3613), (0x063f4, 0x1f8e), (0x063f5, 0x3619),
    (0x063f6, 0x3616), (0x063f8, 0x4bc3), (0x063f9, 0x1f93), (0x06406, 0x214e), (0x06409, 0x38a8), (0x0640a, 0x38bb),
    (0x0640b, 0x38c0), (0x0640c, 0x38b4), (0x0640d, 0x214a), (0x0640e, 0x38c5), (0x0640f, 0x2147), (0x06410, 0x38a6),
    (0x06412, 0x38a7), (0x06413, 0x2140), (0x06414, 0x2149), (0x06415, 0x38ae), (0x06416, 0x214c), (0x06417, 0x214d),
    (0x06418, 0x38af), (0x0641a, 0x38bc), (0x0641b, 0x38c2), (0x0641c, 0x2148), (0x0641e, 0x2142), (0x0641f, 0x38ad),
    (0x06420, 0x38a9), (0x06421, 0x38c4), (0x06422, 0x38b2), (0x06423, 0x38b3), (0x06424, 0x38aa), (0x06425, 0x38be),
    (0x06426, 0x38b5), (0x06427, 0x38bf), (0x06428, 0x38b7), (0x0642a, 0x2143), (0x0642b, 0x3b57), (0x0642c, 0x2146),
    (0x0642d, 0x2144), (0x0642e, 0x38c3), (0x0642f, 0x38ba), (0x06430, 0x38b6), (0x06433, 0x38ab), (0x06434, 0x2308),
    (0x06435, 0x38b9), (0x06436, 0x214b), (0x06437, 0x38b1), (0x06438, 0x4bc2), (0x06439, 0x38b0), (0x0643a, 0x4bd0),
    (0x0643d, 0x2145), (0x0643e, 0x2141), (0x0643f, 0x3b6c), (0x06440, 0x38bd), (0x06441, 0x38b8), (0x06443, 0x38ac),
    (0x0644b, 0x3b67), (0x0644d, 0x3b58), (0x0644e, 0x3b63), (0x06450, 0x3b6a), (0x06451, 0x2306), (0x06452, 0x1f91),
    (0x06453, 0x3b68), (0x06454, 0x2301), (0x06458, 0x2300), (0x06459, 0x3b6f), (0x0645b, 0x3b59), (0x0645c, 0x3b66),
    (0x0645d, 0x3b5a), (0x0645e, 0x3b65), (0x0645f, 0x2304), (0x06460, 0x3b69), (0x06461, 0x361a), (0x06465, 0x3b70),
    (0x06466, 0x3b61), (0x06467, 0x2307), (0x06468, 0x3dac), (0x06469, 0x247c), (0x0646b, 0x3b6e), (0x0646c, 0x3b6d),
    (0x0646d, 0x2309), (0x0646e, 0x3d9f), (0x0646f, 0x247d), (0x06470, 0x3da0), (0x06472, 0x3b5d), (0x06473, 0x3b5e),
    (0x06474, 0x3b5b), (0x06475, 0x3b60), (0x06476, 0x3b5c), (0x06477, 0x3b71), (0x06478, 0x2303), (0x06479, 0x247e),
    (0x0647a, 0x2305), (0x0647b, 0x230a), (0x0647d, 0x3b5f), (0x0647f, 0x3b6b), (0x06482, 0x3b64), (0x06485, 0x3da3),
    (0x06487, 0x22ff), (0x06488, 0x2481), (0x06489, 0x4010), (0x0648a, 0x3da8), (0x0648b, 0x3da7), (0x0648c, 0x3da9),
    (0x0648f, 0x3da6), (0x06490, 0x2482), (0x06492, 0x2488), (0x06493, 0x2485), (0x06495, 0x2486), (0x06496, 0x3da1),
    (0x06497, 0x3da4), (0x06498, 0x3dae), (0x06499, 0x248e), (0x0649a, 0x248c), (0x0649c, 0x3da5), (0x0649d, 0x3612),
    (0x0649e, 0x247f), (0x0649f, 0x3dab), (0x064a0, 0x3da2), (0x064a2, 0x248f), (0x064a3, 0x3daa), (0x064a4, 0x2302),
    (0x064a5, 0x2484), (0x064a6, 0x3b62), (0x064a9, 0x2487), (0x064ab, 0x248b), (0x064ac, 0x248d), (0x064ad, 0x248a),
    (0x064ae, 0x2489), (0x064af, 0x4d1b), (0x064b0, 0x2483), (0x064b1, 0x3dad), (0x064b2, 0x2480), (0x064b3, 0x2490),
    (0x064bb, 0x25df), (0x064bc, 0x25e0), (0x064bd, 0x400f), (0x064be, 0x25e9), (0x064bf, 0x25e6), (0x064c1, 0x25dd),
    (0x064c2, 0x25e4), (0x064c3, 0x4011), (0x064c4, 0x25e2), (0x064c5, 0x25dc), (0x064c7, 0x25e3), (0x064c9, 0x400e),
    (0x064ca, 0x26fc), (0x064cb, 0x25de), (0x064cd, 0x25e5), (0x064ce, 0x26fb), (0x064cf, 0x400d), (0x064d0, 0x400c),
    (0x064d2, 0x25e7), (0x064d4, 0x25e8), (0x064d6, 0x400b), (0x064d7, 0x400a), (0x064d8, 0x26fd), (0x064d9, 0x4014),
    (0x064da, 0x25e1), (0x064db, 0x4012), (0x064e0, 0x26fe), (0x064e1, 0x4bcc), (0x064e2, 0x2703), (0x064e3, 0x4227),
    (0x064e4, 0x4229), (0x064e5, 0x4bcd), (0x064e6, 0x2700), (0x064e8, 0x422a), (0x064e9, 0x4226), (0x064eb, 0x4228),
    (0x064ec, 0x2701), (0x064ed, 0x2704), (0x064ef, 0x4225), (0x064f0, 0x26ff), (0x064f1, 0x2702), (0x064f2, 0x27f6),
    (0x064f3, 0x4013), (0x064f4, 0x27f5), (0x064f7, 0x27fb), (0x064f8, 0x43e8), (0x064fa, 0x27f9), (0x064fb, 0x27fa),
    (0x064fc, 0x43eb), (0x064fd, 0x43e7), (0x064fe, 0x27f7), (0x064ff, 0x43e5), (0x06500, 0x28a5), (0x06501, 0x43e9),
    (0x06503, 0x43ea), (0x06504, 0x43e6), (0x06506, 0x27f8), (0x06507, 0x454f), (0x06509, 0x4552), (0x0650c, 0x4553),
    (0x0650d, 0x4551), (0x0650e, 0x4554), (0x0650f, 0x28a6), (0x06510, 0x4550), (0x06513, 0x4695), (0x06514, 0x293b),
    (0x06515, 0x4694), (0x06516, 0x4693), (0x06517, 0x4692), (0x06518, 0x293a), (0x06519, 0x293c), (0x0651b, 0x478f),
    (0x0651c, 0x2997), (0x0651d, 0x2996), (0x0651e, 0x4bb8), (0x06520, 0x4840), (0x06521, 0x483f), (0x06522, 0x4842),
    (0x06523, 0x2a1d), (0x06524, 0x29e9), (0x06525, 0x48d9), (0x06526, 0x4841), (0x06529, 0x48d8), (0x0652a, 0x2a1f),
    (0x0652b, 0x2a1e), (0x0652c, 0x2a45), (0x0652d, 0x4942), (0x0652e, 0x4988), (0x0652f, 0x15f9), (0x06532, 0x362a),
    (0x06533, 0x4015), (0x06534, 0x2ac1), (0x06536, 0x16fb), (0x06537, 0x2d5a), (0x06538, 0x17dd), (0x06539, 0x17db),
    (0x0653b, 0x17dc), (0x0653d, 0x2e5e), (0x0653e, 0x1917), (0x0653f, 0x1a65), (0x06541, 0x2fbe), (0x06543, 0x2fbf),
    (0x06545, 0x1a66), (0x06546, 0x317c), (0x06548, 0x1bfb), (0x06549, 0x1bfc), (0x0654a, 0x317b), (0x0654d, 0x4bd2),
    (0x0654f, 0x1de1), (0x06551, 0x1ddd), (0x06553, 0x33c9), (0x06554, 0x1de4), (0x06555, 0x1de3), (0x06556, 0x1ddc),
    (0x06557, 0x1ddf), (0x06558, 0x1de2), (0x06559, 0x1dde), (0x0655c, 0x362e), (0x0655d, 0x1ddb), (0x0655e, 0x1f94),
    (0x0655f, 0x4bd8), (0x06562, 0x1f96), (0x06563, 0x1f97), (0x06564, 0x362d), (0x06565, 0x3630), (0x06566, 0x1f95),
    (0x06567, 0x362b), (0x06568, 0x362f), (0x0656a, 0x362c), (0x0656c, 0x214f), (0x0656d, 0x4bd7), (0x0656f, 0x38c6),
    (0x06572, 0x230b), (0x06573, 0x3b72), (0x06574, 0x25ea), (0x06575, 0x2491), (0x06576, 0x3daf), (0x06577, 0x2492),
    (0x06578, 0x2493), (0x06579, 0x3db1), (0x0657a, 0x3db0), (0x0657b, 0x3db2), (0x0657c, 0x4017), (0x0657f, 0x4016),
    (0x06580, 0x422c), (0x06581, 0x422b), (0x06582, 0x2705), (0x06583, 0x2706), (0x06584, 0x4555), (0x06585, 0x4bd6),
    (0x06587, 0x15fa), (0x06588, 0x4b36), (0x0658c, 0x3631), (0x06590, 0x1f99), (0x06591, 0x1f98), (0x06592, 0x38c7),
    (0x06594, 0x43ec), (0x06595, 0x2998), (0x06596, 0x48da), (0x06597, 0x15fb), (0x06599, 0x1bfd), (0x0659b, 0x1de6),
    (0x0659c, 0x1de5), (0x0659d, 0x3632), (0x0659e, 0x3633), (0x0659f, 0x2150), (0x065a0, 0x3b73), (0x065a1, 0x230c),
    (0x065a2, 0x4018), (0x065a4, 0x15fc), (0x065a5, 0x166a), (0x065a7, 0x1918), (0x065a8, 0x2e5f), (0x065aa, 0x2fc0),
    (0x065ab, 0x1a67), (0x065ac, 0x1de7), (0x065ae, 0x3634), (0x065af, 0x1f9a), (0x065b0, 0x2151), (0x065b2, 0x3db3),
    (0x065b3, 0x3db4), (0x065b5, 0x4bda), (0x065b6, 0x422d), (0x065b7, 0x27fc), (0x065b8, 0x4989), (0x065b9, 0x15fd),
    (0x065bb, 0x2e60), (0x065bc, 0x1919), (0x065bd, 0x1a68), (0x065bf, 0x2fc1), (0x065c1, 0x1bfe), (0x065c2, 0x3180),
    (0x065c3, 0x317e), (0x065c4, 0x317f), (0x065c5, 0x1bff), (0x065c6, 0x317d), (0x065cb, 0x1de9), (0x065cc, 0x1dea),
    (0x065cd, 0x33ca), (0x065ce, 0x1deb), (0x065cf, 0x1de8), (0x065d0, 0x3635), (0x065d1, 0x4bdd), (0x065d2, 0x3636),
    (0x065d3, 0x38c8), (0x065d6, 0x230e), (0x065d7, 0x230d), (0x065da, 0x422e), (0x065db, 0x43ed), (0x065dd, 0x4557),
    (0x065de, 0x4556), (0x065df, 0x4696), (0x065e0, 0x4be0), (0x065e1, 0x2c46), (0x065e2, 0x1a69), (0x065e3, 0x4be1),
    (0x065e5, 0x15fe), (0x065e6, 0x166b), (0x065e8, 0x16fd), (0x065e9, 0x16fc), (0x065ec, 0x16fe), (0x065ed, 0x16ff),
    (0x065ee, 0x2cb4), (0x065ef, 0x2cb3), (0x065f0, 0x2d5b), (0x065f1, 0x17de), (0x065f2, 0x2d5e), (0x065f3, 0x2d5d),
    (0x065f4, 0x2d5c), (0x065f5, 0x2d5f), (0x065fa, 0x191a), (0x065fb, 0x2e66), (0x065fc, 0x2e62), (0x065fd, 0x2e6b),
    (0x06600, 0x1921), (0x06602, 0x191f), (0x06603, 0x2e67), (0x06604, 0x2e63), (0x06605, 0x2e6a), (0x06606, 0x191e),
    (0x06607, 0x1925), (0x06608, 0x2e65), (0x06609, 0x2e61), (0x0660a, 0x1924), (0x0660b, 0x2e68), (0x0660c, 0x191d),
    (0x0660d, 0x2e69), (0x0660e, 0x1920), (0x0660f, 0x1922), (0x06610, 0x2e6d), (0x06611, 0x2e6c), (0x06612, 0x2e64),
    (0x06613, 0x191c), (0x06614, 0x191b), (0x06615, 0x1923), (0x06618, 0x4be4), (0x0661c, 0x2fc6), (0x0661d, 0x2fcc),
    (0x0661f, 0x1a6f), (0x06620, 0x1a6c), (0x06621, 0x2fc3), (0x06622, 0x2fc8), (0x06623, 0x4ccc), (0x06624, 0x1a72),
    (0x06625, 0x1a6a), (0x06626, 0x2fc7), (0x06627, 0x1a6d), (0x06628, 0x1a70), (0x0662b, 0x2fca), (0x0662d, 0x1a6b),
    (0x0662e, 0x2fcf), (0x0662f, 0x1a6e), (0x06631, 0x1a71), (0x06632, 0x2fc4), (0x06633, 0x2fc9), (0x06634, 0x2fcd),
    (0x06635, 0x2fc5), (0x06636, 0x2fc2), (0x06639, 0x2fce), (0x0663a, 0x2fcb), (0x06641, 0x1c07), (0x06642, 0x1c00),
    (0x06643, 0x1c03), (0x06644, 0x4be7), (0x06645, 0x1c06), (0x06647, 0x3183), (0x06649, 0x1c01), (0x0664a, 0x3181),
    (0x0664b, 0x4bea), (0x0664c, 0x1c05), (0x0664f, 0x1c02), (0x06651, 0x3184), (0x06652, 0x1c04), (0x06657, 0x4ac5),
    (0x06659, 0x33ce), (0x0665a, 0x1ded), (0x0665b, 0x33cd), (0x0665c, 0x33cf), (0x0665d, 0x1dec), (0x0665e, 0x1df1),
    (0x0665f, 0x3182), (0x06661, 0x33cc), (0x06662, 0x33d0), (0x06664, 0x1dee), (0x06665, 0x33cb), (0x06666, 0x1df0),
    (0x06667, 0x4bec), (0x06668, 0x1def), (0x0666a, 0x363d), (0x0666c, 0x3638), (0x0666e, 0x1f9b), (0x0666f, 0x1f9f),
    (0x06670, 0x1f9c), (0x06671, 0x363b), (0x06672, 0x363e), (0x06673, 0x4bee), (0x06674, 0x1f9d), (0x06676, 0x1f9e),
    (0x06677, 0x1fa3), (0x06678, 0x38d1), (0x06679, 0x363c), (0x0667a, 0x1fa1), (0x0667b, 0x3639), (0x0667c, 0x3637),
    (0x0667e, 0x1fa2), (0x06680, 0x363a), (0x06684, 0x2157), (0x06685, 0x4b91), (0x06686, 0x38c9), (0x06687, 0x2154),
    (0x06688, 0x2155), (0x06689, 0x2153), (0x0668a, 0x38ce), (0x0668b, 0x38cd), (0x0668c, 0x38ca), (0x0668d, 0x2159),
    (0x06690, 0x38cc), (0x06691, 0x1fa0), (0x06694, 0x38d0), (0x06695, 0x38cb), (0x06696, 0x2156), (0x06697, 0x2152),
    (0x06698, 0x2158), (0x06699, 0x38cf), (0x0669d, 0x2311), (0x0669f, 0x3b76), (0x066a0, 0x3b75), (0x066a1, 0x3b74),
    (0x066a2, 0x230f), (0x066a4, 0x4ae4), (0x066a8, 0x2310), (0x066a9, 0x3db7), (0x066aa, 0x3dba), (0x066ab, 0x2495),
    (0x066ad, 0x4ae5), (0x066ae, 0x2494), (0x066af, 0x3dbb), (0x066b0, 0x3db6), (0x066b1, 0x2497), (0x066b2, 0x3db8),
    (0x066b3, 0x4adf), (0x066b4, 0x2496), (0x066b5, 0x3db5), (0x066b7, 0x3db9), (0x066b8, 0x25f0), (0x066b9, 0x25ed),
    (0x066ba, 0x4021), (0x066bb, 0x4020), (0x066bd, 0x401f), (0x066be, 0x401a), (0x066c0, 0x401b), (0x066c4, 0x25ee),
    (0x066c6, 0x25eb), (0x066c7, 0x25ef), (0x066c8, 0x4019), (0x066c9, 0x25ec), (0x066ca, 0x401c), (0x066cb, 0x401d),
    (0x066cc, 0x4022), (0x066cd, 0x4ae2), (0x066cf, 0x401e), (0x066d2, 0x422f), (0x066d6, 0x2708), (0x066d8, 0x43f0),
    (0x066d9, 0x2707), (0x066da, 0x43ee), (0x066db, 0x43ef), (0x066dc, 0x27fd), (0x066dd, 0x28a8), (0x066de, 0x4558),
    (0x066e0, 0x28a7), (0x066e3, 0x4698), (0x066e4, 0x4699), (0x066e6, 0x293d), (0x066e8, 0x4697), (0x066e9, 0x2999),
    (0x066eb, 0x48db), (0x066ec, 0x2a20), (0x066ed, 0x4943), (0x066ee, 0x4944), (0x066f0, 0x15ff), (0x066f2, 0x1700),
    (0x066f3, 0x1701), (0x066f4, 0x17df), (0x066f6, 0x2e6e), (0x066f7, 0x1a73), (0x066f8, 0x1c08), (0x066f9, 0x1df2),
    (0x066fc, 0x1d43), (0x066fe, 0x1fa4), (0x066ff, 0x1fa5), (0x06700, 0x1f14), (0x06701, 0x363f), (0x06702, 0x4bf8),
    (0x06703, 0x215a), (0x06704, 0x3b78), (0x06705, 0x3b77), (0x06708, 0x1600), (0x06709, 0x1702), (0x0670a, 0x2e6f),
    (0x0670b, 0x1927), (0x0670d, 0x1926), (0x0670f, 0x2fd0), (0x06710, 0x2fd1), (0x06712, 0x3185), (0x06713, 0x3186),
    (0x06714, 0x1c09), (0x06715, 0x1c0a), (0x06717, 0x1c0b), (0x06718, 0x33d1), (0x0671b, 0x1df4), (0x0671d, 0x1fa7),
    (0x0671f, 0x1fa6), (0x06720, 0x38d2), (0x06721, 0x39e0), (0x06722, 0x3b79), (0x06723, 0x4023), (0x06726, 0x27fe),
    (0x06727, 0x293e), (0x06728, 0x1601), (0x0672a, 0x166e), (0x0672b, 0x166f), (0x0672c, 0x166d), (0x0672d, 0x1670),
    (0x0672e, 0x166c), (0x06731, 0x1705), (0x06733, 0x2cbc), (0x06734, 0x1704), (0x06735, 0x1706), (0x06738, 0x2cb7),
    (0x06739, 0x2cb6), (0x0673a, 0x2cb9), (0x0673b, 0x2cb8), (0x0673c, 0x2cbb), (0x0673d, 0x1703), (0x0673e, 0x2cb5),
    (0x0673f, 0x2cba), (0x06744, 0x4a45), (0x06745, 0x2d60), (0x06746, 0x17e9), (0x06747, 0x2d61), (0x06748, 0x2d65),
    (0x06749, 0x17e8), (0x0674b, 0x2d69), (0x0674c, 0x2d64), (0x0674d, 0x2d67), (0x0674e, 0x17e1), (0x0674f, 0x17e2),
    (0x06750, 0x17e3), (0x06751, 0x17e4), (0x06753, 0x17eb), (0x06755, 0x2d63), (0x06756, 0x17e6), (0x06757, 0x17ec),
    (0x06759, 0x2d62), (0x0675a, 0x2d68), (0x0675c, 0x17e5), (0x0675d, 0x2d66), (0x0675e, 0x17e7), (0x0675f, 0x17e0),
    (0x06760, 0x17ea), (0x06762, 0x4c00), (0x06767, 0x4bff), (0x0676a, 0x193c), (0x0676c, 0x2e71), (0x0676d, 0x1928),
    (0x0676f, 0x1932), (0x06770, 0x1933), (0x06771, 0x192b), (0x06772, 0x193d), (0x06773, 0x192d), (0x06774, 0x2e79),
    (0x06775, 0x1938), (0x06776, 0x2e74), (0x06777, 0x192e), (0x06778, 0x2e83), (0x06779, 0x2e84), (0x0677a, 0x2e7c),
    (0x0677b, 0x2e75), (0x0677c, 0x193b), (0x0677d, 0x2e81), (0x0677e, 0x1936), (0x0677f, 0x1934), (0x06781, 0x2e82),
    (0x06783, 0x2e80), (0x06784, 0x2e78), (0x06785, 0x2e70), (0x06786, 0x2e77), (0x06787, 0x192f), (0x06789, 0x1935),
    (0x0678b, 0x1929), (0x0678c, 0x2e7b), (0x0678d, 0x2e7a), (0x0678e, 0x2e72), (0x06790, 0x1937), (0x06791, 0x2e7e),
    (0x06792, 0x2e73), (0x06793, 0x193a), (0x06794, 0x2e85), (0x06795, 0x192a), (0x06797, 0x1931), (0x06798, 0x2e76),
    (0x06799, 0x2e7f), (0x0679a, 0x1939), (0x0679c, 0x192c), (0x0679d, 0x1930), (0x0679f, 0x2e7d), (0x067ac, 0x4c19),
    (0x067ae, 0x2ff1), (0x067af, 0x1a7b), (0x067b0, 0x1a88), (0x067b1, 0x4c2a), (0x067b2, 0x2fec), (0x067b3, 0x2fe2),
    (0x067b4, 0x1a81), (0x067b5, 0x2fe0), (0x067b6, 0x1a7a), (0x067b7, 0x2fdb), (0x067b8, 0x1a84), (0x067b9, 0x2fe8),
    (0x067ba, 0x2fd5), (0x067bb, 0x2fd7), (0x067c0, 0x2fda), (0x067c1, 0x2fd2), (0x067c2, 0x2fe7), (0x067c3, 0x2ff7),
    (0x067c4, 0x1a7f), (0x067c5, 0x2fdc), (0x067c6, 0x2fee), (0x067c8, 0x2fd4), (0x067c9, 0x2ff5), (0x067ca, 0x2ff6),
    (0x067cb, 0x2ff9), (0x067cc, 0x2ff0), (0x067cd, 0x2fe1), (0x067ce, 0x2fe9), (0x067cf, 0x1a85), (0x067d0, 0x1a78),
    (0x067d1, 0x1a80), (0x067d2, 0x1a8c), (0x067d3, 0x1a75), (0x067d4, 0x1a77), (0x067d7, 0x4c03), (0x067d8, 0x2fd9),
    (0x067d9, 0x1a89), (0x067da, 0x1a82), (0x067db, 0x2ff3), (0x067dc, 0x2fd6), (0x067dd, 0x1a8b), (0x067de, 0x1a86),
    (0x067df, 0x2fdf), (0x067e2, 0x1a8a), (0x067e3, 0x2fe6), (0x067e4, 0x2fde), (0x067e5, 0x1a83), (0x067e6, 0x2ff2),
    (0x067e7, 0x2fea), (0x067e9, 0x1a7d), (0x067ea, 0x2ff8), (0x067eb, 0x2fdd), (0x067ec, 0x1a79), (0x067ed, 0x2fef),
    (0x067ee, 0x2fe5), (0x067ef, 0x1a7e), (0x067f0, 0x2feb), (0x067f1, 0x1a76), (0x067f2, 0x2fd3), (0x067f3, 0x1a87),
    (0x067f4, 0x1c1a), (0x067f5, 0x1a7c), (0x067f6, 0x2fe4), (0x067f7, 0x2fe3), (0x067f8, 0x2fd8), (0x067fa, 0x2ff4),
    (0x067fc, 0x2fed), (0x067ff, 0x1a74), (0x06801, 0x4c08), (0x0680d, 0x4cb8), (0x06812, 0x319a), (0x06813, 0x1c21),
    (0x06814, 0x319b), (0x06816, 0x318f), (0x06817, 0x1c16), (0x06818, 0x1c22), (0x0681a, 0x3188), (0x0681b, 0x4a9c),
    (0x0681c, 0x3191), (0x0681d, 0x3199), (0x0681f, 0x3187), (0x06820, 0x31a2), (0x06821, 0x1c0c), (0x06822, 0x4c05),
    (0x06825, 0x31a1), (0x06826, 0x319c), (0x06828, 0x319d), (0x06829, 0x1c14), (0x0682a, 0x1c1f), (0x0682b, 0x3193),
    (0x0682d, 0x3194), (0x0682e, 0x319e), (0x0682f, 0x3195), (0x06831, 0x3190), (0x06832, 0x318a), (0x06833, 0x318b),
    (0x06834, 0x3198), (0x06835, 0x3192), (0x06837, 0x4c53), (0x06838, 0x1c0d), (0x06839, 0x1c11), (0x0683a, 0x31a0),
    (0x0683b, 0x318c), (0x0683c, 0x1c1d), (0x0683d, 0x1c19), (0x0683e, 0x4b73), (0x06840, 0x1c1c), (0x06841, 0x1c23),
    (0x06842, 0x1c12), (0x06843, 0x1c1e), (0x06844, 0x3197), (0x06845, 0x1c20), (0x06846, 0x1c0f), (0x06848, 0x1c0e),
    (0x06849, 0x3189), (0x0684b, 0x318d), (0x0684c, 0x1c17), (0x0684d, 0x319f), (0x0684e, 0x3196), (0x0684f, 0x318e),
    (0x06850, 0x1c1b), (0x06851, 0x1c18), (0x06853, 0x1c10), (0x06854, 0x1c13), (0x0685d, 0x4c0b), (0x0686b, 0x33e6),
    (0x0686d, 0x33d6), (0x0686e, 0x33d7), (0x0686f, 0x33db), (0x06871, 0x33ea), (0x06872, 0x33e7), (0x06874, 0x33e0),
    (0x06875, 0x33df), (0x06876, 0x1dfb), (0x06877, 0x33e3), (0x06878, 0x33f2), (0x06879, 0x33d2), (0x0687b, 0x33f3),
    (0x0687c, 0x33e5), (0x0687d, 0x33f7), (0x0687e, 0x33eb), (0x0687f, 0x1dfa), (0x06880, 0x33e9), (0x06881, 0x1df5),
    (0x06882, 0x1e0a), (0x06883, 0x1e00), (0x06885, 0x1e04), (0x06886, 0x1e03), (0x06887, 0x33d3), (0x06889, 0x33f0),
    (0x0688a, 0x33f6), (0x0688b, 0x33ee), (0x0688c, 0x33f5), (0x0688f, 0x33e2), (0x06890, 0x33d4), (0x06891, 0x33f4),
    (0x06892, 0x33e4), (0x06893, 0x1df8), (0x06894, 0x1e05), (0x06896, 0x33ed), (0x06897, 0x1dfe), (0x0689b, 0x33ec),
    (0x0689c, 0x33d5), (0x0689d, 0x1e06), (0x0689f, 0x1e08), (0x068a0, 0x33ef), (0x068a1, 0x1e09), (0x068a2, 0x1df7),
    (0x068a3, 0x33dc), (0x068a4, 0x33f1), (0x068a6, 0x4b0e), (0x068a7, 0x1dfd), (0x068a8, 0x1e07), (0x068a9, 0x33de),
    (0x068aa, 0x33e8), (0x068ab, 0x33d9), (0x068ac, 0x33dd), (0x068ad, 0x1e02), (0x068ae, 0x33d8), (0x068af, 0x1df6),
    (0x068b0, 0x1dff), (0x068b1, 0x1dfc), (0x068b2, 0x33e1), (0x068b3, 0x1c15), (0x068b4, 0x3656), (0x068b5, 0x1df9),
    (0x068bd, 0x4cb3), (0x068c3, 0x4c11), (0x068c4, 0x1e01), (0x068c6, 0x3659), (0x068c7, 0x366f), (0x068c8, 0x3664),
    (0x068c9, 0x1fbb), (0x068ca, 0x4d27), (0x068cb, 0x1fb6), (0x068cc, 0x3653), (0x068cd, 0x1fb7), (0x068ce, 0x3663),
    (0x068d0, 0x365c), (0x068d1, 0x3669), (0x068d2, 0x1fb3), (0x068d3, 0x3641), (0x068d4, 0x366b), (0x068d5, 0x1fa9),
    (0x068d6, 0x3649), (0x068d7, 0x1fac), (0x068d8, 0x1fab), (0x068da, 0x1fbc), (0x068dc, 0x3643), (0x068dd, 0x3665),
    (0x068de, 0x3666), (0x068df, 0x1fae), (0x068e0, 0x1faa), (0x068e1, 0x3651), (0x068e3, 0x1fb5), (0x068e4, 0x364c),
    (0x068e6, 0x3667), (0x068e7, 0x1fb1), (0x068e8, 0x365f), (0x068e9, 0x366c), (0x068ea, 0x3646), (0x068eb, 0x364b),
    (0x068ec, 0x3645), (0x068ee, 0x1fb0), (0x068ef, 0x3658), (0x068f0, 0x38e8), (0x068f1, 0x3647), (0x068f2, 0x1fb4),
    (0x068f3, 0x3650), (0x068f4, 0x3668), (0x068f5, 0x1faf), (0x068f6, 0x364d), (0x068f7, 0x364a), (0x068f8, 0x365b),
    (0x068f9, 0x1fb2), (0x068fa, 0x1fa8), (0x068fb, 0x1fbe), (0x068fc, 0x365e), (0x068fd, 0x365d), (0x06900, 0x4c14),
    (0x06901, 0x4c13), (0x06902, 0x4d39), (0x06903, 0x4cd3), (0x06904, 0x3642), (0x06905, 0x1fad), (0x06906, 0x366a),
    (0x06907, 0x3652), (0x06908, 0x3654), (0x0690a, 0x3661), (0x0690b, 0x3660), (0x0690c, 0x3640), (0x0690d, 0x1fb8),
    (0x0690e, 0x1fba), (0x0690f, 0x3648), (0x06910, 0x364f), (0x06911, 0x3657), (0x06912, 0x1fb9), (0x06913, 0x364e),
    (0x06914, 0x365a), (0x06915, 0x366d), (0x06917, 0x3662), (0x06925, 0x366e), (0x0692a, 0x3644), (0x0692f, 0x38fc),
    (0x06930, 0x2162), (0x06932, 0x38fa), (0x06933, 0x38e5), (0x06934, 0x38ea), (0x06935, 0x38e3), (0x06936, 0x4c1d),
    (0x06937, 0x38f6), (0x06938, 0x38d5), (0x06939, 0x38dc), (0x0693b, 0x38f4), (0x0693c, 0x38fe), (0x0693d, 0x38e6),
    (0x0693e, 0x4a80), (0x0693f, 0x38d9), (0x06940, 0x38ec), (0x06941, 0x38f1), (0x06942, 0x38dd), (0x06944, 0x38ee),
    (0x06945, 0x38da), (0x06948, 0x38e1), (0x06949, 0x38e2), (0x0694a, 0x2164), (0x0694b, 0x38f5), (0x0694c, 0x38f3),
    (0x0694e, 0x38d6), (0x0694f, 0x38f8), (0x06951, 0x38f9), (0x06952, 0x38fb), (0x06953, 0x2168), (0x06954, 0x2160),
    (0x06956, 0x33da), (0x06957, 0x38de), (0x06958, 0x38f0), (0x06959, 0x38df), (0x0695a, 0x215d), (0x0695b, 0x216d),
    (0x0695c, 0x38f7), (0x0695d, 0x216b), (0x0695e, 0x2167), (0x0695f, 0x38d4), (0x06960, 0x215f), (0x06961, 0x4c1a),
    (0x06962, 0x38d7), (0x06963, 0x216c), (0x06965, 0x38e7), (0x06966, 0x38d3), (0x06968, 0x2165), (0x06969, 0x38eb),
    (0x0696a, 0x38db), (0x0696b, 0x2166), (0x0696c, 0x38e4), (0x0696d, 0x215c), (0x0696e, 0x1fbd), (0x0696f, 0x38ed),
    (0x06970, 0x3655), (0x06971, 0x38d8), (0x06973, 0x4c10), (0x06974, 0x38f2), (0x06975, 0x2161), (0x06976, 0x38ef),
    (0x06977, 0x215e), (0x06978, 0x38e9), (0x06979, 0x2169), (0x0697a, 0x38e0), (0x0697b, 0x38fd), (0x06982, 0x2163),
    (0x06983, 0x396d), (0x06986, 0x216a), (0x0698d, 0x3b87), (0x0698e, 0x3b85), (0x06990, 0x3b9b), (0x06991, 0x3b83),
    (0x06993, 0x3b95), (0x06994, 0x215b), (0x06995, 0x2314), (0x06996, 0x3b7f), (0x06997, 0x3b9a), (0x06998, 0x4c1e),
    (0x06999, 0x3b84), (0x0699a, 0x3b92), (0x0699b, 0x2319), (0x0699c, 0x2312), (0x0699e, 0x3b98), (0x069a0, 0x3b7d),
    (0x069a1, 0x3b97), (0x069a3, 0x2324), (0x069a4, 0x3b8e), (0x069a5, 0x3b9e), (0x069a6, 0x2322), (0x069a7, 0x3b86),
    (0x069a8, 0x2313), (0x069a9, 0x3b88), (0x069aa, 0x3b96), (0x069ab, 0x231c), (0x069ac, 0x3b81), (0x069ad, 0x2320),
    (0x069ae, 0x2316), (0x069af, 0x3b8a), (0x069b0, 0x3b80), (0x069b1, 0x3b7a), (0x069b3, 0x3b94), (0x069b4, 0x231d),
    (0x069b5, 0x3b9d), (0x069b6, 0x3b7b), (0x069b7, 0x231a), (0x069b9, 0x3b90), (0x069bb, 0x231b), (0x069bc, 0x3b82),
    (0x069bd, 0x3b8d), (0x069be, 0x3b89), (0x069bf, 0x3b8b), (0x069c1, 0x2315), (0x069c2, 0x3b9c), (0x069c3, 0x2323),
    (0x069c4, 0x3b8c), (0x069c6, 0x3b9f), (0x069c9, 0x3b7c), (0x069ca, 0x3b91), (0x069cb, 0x2318), (0x069cc, 0x2321),
    (0x069cd, 0x231f), (0x069ce, 0x3b7e), (0x069cf, 0x3b93), (0x069d0, 0x231e), (0x069d3, 0x2317), (0x069d4, 0x3b8f),
    (0x069d9, 0x3b99), (0x069e1, 0x4c0d), (0x069e2, 0x3dc7), (0x069e4, 0x3dc3), (0x069e5, 0x3dbf), (0x069e6, 0x3dd3),
    (0x069e7, 0x3dd0), (0x069e8, 0x249a), (0x069eb, 0x3dd7), (0x069ec, 0x3dc6), (0x069ed, 0x24a5), (0x069ee, 0x3dcd),
    (0x069f1, 0x3dc2), (0x069f2, 0x3dcc), (0x069f3, 0x24a2), (0x069f4, 0x3de0), (0x069f6, 0x3ddd), (0x069f7, 0x3dcf),
    (0x069f8, 0x3dc0), (0x069f9, 0x4c23), (0x069fa, 0x4bfc), (0x069fb, 0x3dd4), (0x069fc, 0x3dd6), (0x069fd, 0x249e),
    (0x069fe, 0x3dca), (0x069ff, 0x3dc5), (0x06a00, 0x3dbc), (0x06a01, 0x249b), (0x06a02, 0x24a3), (0x06a04, 0x3dd9),
    (0x06a05, 0x24a4), (0x06a06, 0x3dbd), (0x06a07, 0x3ddf), (0x06a08, 0x3dd2), (0x06a09, 0x3dd8), (0x06a0a, 0x24a1),
    (0x06a0b, 0x4c0e), (0x06a0d, 0x3dd5), (0x06a0f, 0x3ddc), (0x06a11, 0x24a6), (0x06a13, 0x24a0), (0x06a14, 0x3dce),
    (0x06a15, 0x3dc1), (0x06a16, 0x3de1), (0x06a17, 0x3dbe), (0x06a18, 0x3dda), (0x06a19, 0x249d), (0x06a1b, 0x3dc8),
    (0x06a1d, 0x3dc9), (0x06a1e, 0x249c), (0x06a1f, 0x2499), (0x06a20, 0x3dc4), (0x06a21, 0x249f), (0x06a23, 0x2498),
    (0x06a25, 0x3ddb), (0x06a26, 0x3dde), (0x06a27, 0x3dcb), (0x06a28, 0x4030), (0x06a2c, 0x4ce4), (0x06a32, 0x4028),
    (0x06a34, 0x4024), (0x06a35, 0x25fd), (0x06a38, 0x25f2), (0x06a39, 0x25f7), (0x06a3a, 0x25f3), (0x06a3b, 0x4032),
    (0x06a3c, 0x403d), (0x06a3d, 0x25f1), (0x06a3e, 0x402a), (0x06a3f, 0x4033), (0x06a40, 0x3dd1), (0x06a41, 0x4034),
    (0x06a44, 0x25f8), (0x06a45, 0x4c26), (0x06a46, 0x4043), (0x06a47, 0x25fc), (0x06a48, 0x25ff), (0x06a49, 0x4026),
    (0x06a4b, 0x25fb), (0x06a4d, 0x4041), (0x06a4e, 0x4042), (0x06a4f, 0x4038), (0x06a50, 0x4037), (0x06a51, 0x402f),
    (0x06a54, 0x4039), (0x06a55, 0x4040), (0x06a56, 0x403f), (0x06a58, 0x25f6), (0x06a59, 0x25f4), (0x06a5a, 0x4031),
    (0x06a5b, 0x402e), (0x06a5d, 0x402b), (0x06a5e, 0x403e), (0x06a5f, 0x25fe), (0x06a60, 0x403c), (0x06a61, 0x25fa),
    (0x06a62, 0x25f9), (0x06a64, 0x4036), (0x06a66, 0x4025), (0x06a67, 0x4027), (0x06a68, 0x4029), (0x06a69, 0x403b),
    (0x06a6a, 0x4035), (0x06a6b, 0x25f5), (0x06a6d, 0x402c), (0x06a6f, 0x403a), (0x06a76, 0x402d), (0x06a7e, 0x2710),
    (0x06a7f, 0x4241), (0x06a80, 0x2709), (0x06a81, 0x4232), (0x06a83, 0x423d), (0x06a84, 0x270b), (0x06a85, 0x4244),
    (0x06a87, 0x4239), (0x06a89, 0x4234), (0x06a8a, 0x4b62), (0x06a8c, 0x4245), (0x06a8d, 0x4230), (0x06a8e, 0x423b),
    (0x06a90, 0x2712), (0x06a91, 0x4240), (0x06a92, 0x4246), (0x06a93, 0x423a), (0x06a94, 0x270a), (0x06a95, 0x423c),
    (0x06a96, 0x4231), (0x06a97, 0x2711), (0x06a9a, 0x4243), (0x06a9b, 0x4236), (0x06a9c, 0x270d), (0x06a9d, 0x4c28),
    (0x06a9e, 0x4238), (0x06a9f, 0x4235), (0x06aa0, 0x2713), (0x06aa1, 0x4237), (0x06aa2, 0x270c), (0x06aa3, 0x270f),
    (0x06aa4, 0x423f), (0x06aa5, 0x4233), (0x06aa6, 0x4242), (0x06aa8, 0x423e), (0x06aac, 0x2800), (0x06aad, 0x43fb),
    (0x06aae, 0x2805), (0x06aaf, 0x2806), (0x06ab3, 0x27ff), (0x06ab4, 0x43fa), (0x06ab6, 0x43f7), (0x06ab7, 0x43f8),
    (0x06ab8, 0x2803), (0x06ab9, 0x43f2), (0x06aba, 0x43f6), (0x06abb, 0x2802), (0x06abd, 0x43f3), (0x06ac2, 0x2804),
    (0x06ac3, 0x2801), (0x06ac5, 0x43f1), (0x06ac6, 0x43f5), (0x06ac7, 0x43f9), (0x06ac8, 0x4c2b), (0x06acb, 0x455e),
    (0x06acc, 0x455b), (0x06acd, 0x4564), (0x06acf, 0x4563), (0x06ad0, 0x4561), (0x06ad1, 0x455c), (0x06ad3, 0x28ac),
    (0x06ad9, 0x455d), (0x06ada, 0x28ab), (0x06adb, 0x270e), (0x06adc, 0x4560), (0x06add, 0x28aa), (0x06ade, 0x4565),
    (0x06adf, 0x455f), (0x06ae0, 0x455a), (0x06ae1, 0x43f4), (0x06ae5, 0x28a9), (0x06ae7, 0x4559), (0x06ae8, 0x469d),
    (0x06aea, 0x469c), (0x06aeb, 0x4562), (0x06aec, 0x293f), (0x06aee, 0x46a0), (0x06aef, 0x46a1), (0x06af0, 0x469b),
    (0x06af1, 0x469f), (0x06af3, 0x469a), (0x06af8, 0x4793), (0x06af9, 0x469e), (0x06afa, 0x299c), (0x06afb, 0x299a),
    (0x06afc, 0x4791), (0x06b00, 0x4794), (0x06b02, 0x4790), (0x06b03, 0x4792), (0x06b04, 0x299b), (0x06b08, 0x4844),
    (0x06b09, 0x4845), (0x06b0a, 0x29ea), (0x06b0b, 0x4843), (0x06b0f, 0x48de), (0x06b10, 0x2a21), (0x06b11, 0x48dc),
    (0x06b12, 0x48dd), (0x06b13, 0x4945), (0x06b16, 0x2a67), (0x06b17, 0x498c), (0x06b18, 0x498a), (0x06b19, 0x498b),
    (0x06b1a, 0x498d), (0x06b1d, 0x4c2e), (0x06b1e, 0x49f1), (0x06b20, 0x1602), (0x06b21, 0x1707), (0x06b23, 0x193e),
    (0x06b25, 0x2e86), (0x06b28, 0x2ffa), (0x06b2c, 0x31a3), (0x06b2d, 0x31a5), (0x06b2f, 0x31a4), (0x06b31, 0x31a6),
    (0x06b32, 0x1e0b), (0x06b33, 0x33f9), (0x06b34, 0x31a7), (0x06b35, 0x4c31), (0x06b36, 0x33f8), (0x06b37, 0x33fa),
    (0x06b38, 0x33fb), (0x06b39, 0x3670), (0x06b3a, 0x1fc0), (0x06b3b, 0x3671), (0x06b3c, 0x3673), (0x06b3d, 0x1fc1),
    (0x06b3e, 0x1fbf), (0x06b3f, 0x3672), (0x06b41, 0x3904), (0x06b42, 0x3902), (0x06b43, 0x3901), (0x06b45, 0x3900),
    (0x06b46, 0x38ff), (0x06b47, 0x216e), (0x06b48, 0x3903), (0x06b49, 0x2325), (0x06b4a, 0x3ba0), (0x06b4b, 0x3ba2),
    (0x06b4c, 0x2326), (0x06b4d, 0x3ba1), (0x06b4e, 0x24a8), (0x06b50, 0x24a7), (0x06b51, 0x3de2), (0x06b54, 0x4045),
    (0x06b55, 0x4044), (0x06b56, 0x4046), (0x06b59, 0x2600), (0x06b5b, 0x4247), (0x06b5c, 0x2714), (0x06b5e, 0x43fc),
    (0x06b5f, 0x2807), (0x06b60, 0x4566), (0x06b61, 0x29eb), (0x06b62, 0x1603), (0x06b63, 0x1671), (0x06b64, 0x1708),
    (0x06b65, 0x17ed), (0x06b66, 0x193f), (0x06b67, 0x1940), (0x06b6a, 0x1a8d), (0x06b6d, 0x31a8), (0x06b72, 0x216f),
    (0x06b74, 0x4c32), (0x06b76, 0x3e60), (0x06b77, 0x2601), (0x06b78, 0x2808), (0x06b79, 0x1604), (0x06b7b, 0x1709),
    (0x06b7e, 0x2e88), (0x06b7f, 0x1941), (0x06b80, 0x2e87), (0x06b82, 0x2ffb), (0x06b83, 0x1a8e), (0x06b84, 0x2ffc),
    (0x06b86, 0x1a8f), (0x06b88, 0x31aa), (0x06b89, 0x1c25), (0x06b8a, 0x1c24), (0x06b8c, 0x3400), (0x06b8d, 0x33fe),
    (0x06b8e, 0x33ff), (0x06b8f, 0x33fd), (0x06b91, 0x33fc), (0x06b94, 0x3674), (0x06b95, 0x3677), (0x06b96, 0x1fc3),
    (0x06b97, 0x3675), (0x06b98, 0x1fc2), (0x06b99, 0x3676), (0x06b9b, 0x3905), (0x06b9e, 0x3ba3), (0x06b9f, 0x3ba4),
    (0x06ba0, 0x3ba5), (0x06ba2, 0x3de5), (0x06ba3, 0x3de4), (0x06ba4, 0x24a9), (0x06ba5, 0x3de3), (0x06ba6, 0x3de6),
    (0x06ba7, 0x4047), (0x06baa, 0x4048), (0x06bab, 0x4049), (0x06bad, 0x4248), (0x06bae, 0x2715), (0x06baf, 0x2809),
    (0x06bb0, 0x4567), (0x06bb2, 0x299d), (0x06bb3, 0x2c47), (0x06bb5, 0x1a90), (0x06bb6, 0x2ffd), (0x06bb7, 0x1c26),
    (0x06bba, 0x1e0c), (0x06bbc, 0x1fc4), (0x06bbd, 0x3678), (0x06bbf, 0x2171), (0x06bc0, 0x2170), (0x06bc3, 0x3ba6),
    (0x06bc4, 0x3ba7), (0x06bc5, 0x24aa), (0x06bc6, 0x24ab), (0x06bc7, 0x404b), (0x06bc8, 0x404a), (0x06bc9, 0x43fd),
    (0x06bca, 0x48df), (0x06bcb, 0x1605), (0x06bcc, 0x2c48), (0x06bcd, 0x1672), (0x06bcf, 0x17ee), (0x06bd0, 0x2d6a),
    (0x06bd2, 0x1a91), (0x06bd3, 0x2172), (0x06bd4, 0x1606), (0x06bd6, 0x2ffe), (0x06bd7, 0x1a92), (0x06bd8, 0x2fff),
    (0x06bda, 0x2716), (0x06bdb, 0x1607), (0x06bdc, 0x4c3d), (0x06bde, 0x2e89), (0x06be0, 0x3000), (0x06be1, 0x4c3b),
    (0x06be2, 0x31af), (0x06be3, 0x31ae), (0x06be4, 0x31ac), (0x06be6, 0x31ab), (0x06be7, 0x31b0), (0x06be8, 0x31ad),
    (0x06beb, 0x1e0d), (0x06bec, 0x1e0e), (0x06bef, 0x1fc5), (0x06bf0, 0x3679), (0x06bf2, 0x367a), (0x06bf3, 0x367b),
    (0x06bf7, 0x390a), (0x06bf8, 0x390b), (0x06bf9, 0x3909), (0x06bfb, 0x3907), (0x06bfc, 0x3908), (0x06bfd, 0x2173),
    (0x06bfe, 0x3ba8), (0x06bff, 0x3de9), (0x06c00, 0x3de8), (0x06c01, 0x3de7), (0x06c02, 0x3dea), (0x06c03, 0x404d),
    (0x06c04, 0x404c), (0x06c05, 0x2602), (0x06c06, 0x404e), (0x06c08, 0x2717), (0x06c09, 0x4249), (0x06c0b, 0x43fe),
    (0x06c0c, 0x4568), (0x06c0d, 0x4846), (0x06c0f, 0x1608), (0x06c10, 0x1674), (0x06c11, 0x1673), (0x06c13, 0x1942),
    (0x06c14, 0x2c49), (0x06c15, 0x2c66), (0x06c16, 0x170a), (0x06c18, 0x2cbd), (0x06c19, 0x2d6b), (0x06c1a, 0x2d6c),
    (0x06c1b, 0x1943), (0x06c1d, 0x2e8a), (0x06c1f, 0x1a93), (0x06c20, 0x3001), (0x06c21, 0x3002), (0x06c23, 0x1c27),
    (0x06c24, 0x1c2b), (0x06c25, 0x31b1), (0x06c26, 0x1c2a), (0x06c27, 0x1c28), (0x06c28, 0x1c29), (0x06c2a, 0x3401),
    (0x06c2b, 0x1e0f), (0x06c2c, 0x1fc8), (0x06c2e, 0x1fc6), (0x06c2f, 0x1fc7), (0x06c30, 0x367c), (0x06c33, 0x2327),
    (0x06c34, 0x1609), (0x06c36, 0x2c67), (0x06c37, 0x4c3e), (0x06c38, 0x1675), (0x06c3b, 0x2c6a), (0x06c3e, 0x1678),
    (0x06c3f, 0x2c69), (0x06c40, 0x1677), (0x06c41, 0x1676), (0x06c42, 0x17ef), (0x06c43, 0x2c68), (0x06c46, 0x2cbe),
    (0x06c49, 0x4ab7), (0x06c4a, 0x2cc2), (0x06c4b, 0x2cc4), (0x06c4c, 0x2cc5), (0x06c4d, 0x1714), (0x06c4e, 0x1715),
    (0x06c4f, 0x2cc1), (0x06c50, 0x1710), (0x06c52, 0x2cbf), (0x06c54, 0x2cc3), (0x06c55, 0x1711), (0x06c57, 0x170c),
    (0x06c59, 0x170d), (0x06c5a, 0x4c42), (0x06c5b, 0x1713), (0x06c5c, 0x2cc0), (0x06c5d, 0x170b), (0x06c5e, 0x17f0),
    (0x06c5f, 0x170e), (0x06c60, 0x170f), (0x06c61, 0x1712), (0x06c65, 0x2d7d), (0x06c66, 0x2d7b), (0x06c67, 0x2d6e),
    (0x06c68, 0x17fc), (0x06c69, 0x2d75), (0x06c6a, 0x17f7), (0x06c6b, 0x2d6f), (0x06c6d, 0x2d77), (0x06c6e, 0x4af4),
    (0x06c6f, 0x2d74), (0x06c70, 0x17fa), (0x06c71, 0x2d73), (0x06c72, 0x1801), (0x06c73, 0x2d7c), (0x06c74, 0x1803),
    (0x06c76, 0x1805), (0x06c78, 0x2d6d), (0x06c79, 0x4c44), (0x06c7a, 0x17f8), (0x06c7b, 0x2d7e), (0x06c7d, 0x17ff),
    (0x06c7e, 0x1802), (0x06c80, 0x2ea1), (0x06c81, 0x17f2), (0x06c82, 0x1809), (0x06c83, 0x1800), (0x06c84, 0x2d70),
    (0x06c85, 0x17f5), (0x06c86, 0x1804), (0x06c87, 0x2d78), (0x06c88, 0x17f3), (0x06c89, 0x17f4), (0x06c8a, 0x2e9f),
    (0x06c8b, 0x2d71), (0x06c8c, 0x17fb), (0x06c8d, 0x1806), (0x06c8e, 0x2d7f), (0x06c8f, 0x2d72), (0x06c90, 0x17f9),
    (0x06c92, 0x17fe), (0x06c93, 0x2e8b), (0x06c94, 0x1807), (0x06c95, 0x2d79), (0x06c96, 0x17fd), (0x06c98, 0x1808),
    (0x06c99, 0x17f1), (0x06c9a, 0x2d76), (0x06c9b, 0x17f6), (0x06c9c, 0x2d7a), (0x06c9d, 0x2ea0), (0x06cab, 0x194f),
    (0x06cac, 0x195f), (0x06cad, 0x2e92), (0x06cae, 0x1956), (0x06cb0, 0x2ea7), (0x06cb1, 0x1947), (0x06cb3, 0x194a),
    (0x06cb4, 0x2e9e), (0x06cb6, 0x2e90), (0x06cb7, 0x2e94), (0x06cb8, 0x1952), (0x06cb9, 0x1954), (0x06cba, 0x2e97),
    (0x06cbb, 0x195b), (0x06cbc, 0x194d), (0x06cbd, 0x194b), (0x06cbe, 0x194c), (0x06cbf, 0x195a), (0x06cc0, 0x2ea3),
    (0x06cc1, 0x1955), (0x06cc2, 0x2e96), (0x06cc3, 0x2e98), (0x06cc4, 0x1953), (0x06cc5, 0x1958), (0x06cc6, 0x2e99),
    (0x06cc7, 0x2ea6), (0x06cc9, 0x1a94), (0x06cca, 0x195e), (0x06ccb, 0x4a9a), (0x06ccc, 0x1948), (0x06ccd, 0x2ea5),
    (0x06ccf, 0x2ea9), (0x06cd0, 0x2e95), (0x06cd1, 0x2eab), (0x06cd2, 0x2e9c), (0x06cd3, 0x1951), (0x06cd4, 0x2e91),
    (0x06cd5, 0x1950), (0x06cd6, 0x1962), (0x06cd7, 0x1957), (0x06cd9, 0x2e8f), (0x06cda, 0x300b), (0x06cdb, 0x195d),
    (0x06cdc, 0x1961), (0x06cdd, 0x2e9d), (0x06cde, 0x2ea2), (0x06ce0, 0x1963), (0x06ce1, 0x195c), (0x06ce2, 0x194e),
    (0x06ce3, 0x1944), (0x06ce5, 0x1949), (0x06ce7, 0x2e93), (0x06ce8, 0x1945), (0x06ce9, 0x2eaa), (0x06ceb, 0x2e8d),
    (0x06cec, 0x2e8c), (0x06ced, 0x2e9a), (0x06cee, 0x2e8e), (0x06cef, 0x1960), (0x06cf0, 0x1c2c), (0x06cf1, 0x1959),
    (0x06cf2, 0x2e9b), (0x06cf3, 0x1946), (0x06cf5, 0x1aa3), (0x06cf9, 0x2ea8), (0x06d00, 0x3012), (0x06d01, 0x3015),
    (0x06d03, 0x3018), (0x06d04, 0x300d), (0x06d07, 0x301b), (0x06d08, 0x301e), (0x06d09, 0x3020), (0x06d0a, 0x300a),
    (0x06d0b, 0x1a95), (0x06d0c, 0x1a9a), (0x06d0d, 0x31b6), (0x06d0e, 0x1aaa), (0x06d0f, 0x3019), (0x06d10, 0x3021),
    (0x06d11, 0x3011), (0x06d12, 0x3009), (0x06d16, 0x31d1), (0x06d17, 0x1a9d), (0x06d18, 0x3016), (0x06d19, 0x300e),
    (0x06d1a, 0x3010), (0x06d1b, 0x1aa2), (0x06d1d, 0x3013), (0x06d1e, 0x1a9c), (0x06d1f, 0x3006), (0x06d20, 0x301c),
    (0x06d22, 0x301f), (0x06d25, 0x1a99), (0x06d27, 0x1aa5), (0x06d28, 0x3003), (0x06d29, 0x1aa7), (0x06d2a, 0x1a97),
    (0x06d2b, 0x1aab), (0x06d2c, 0x301d), (0x06d2d, 0x3005), (0x06d2e, 0x1aa8), (0x06d2f, 0x31cb), (0x06d30, 0x2ea4),
    (0x06d31, 0x1a9b), (0x06d32, 0x1a96), (0x06d33, 0x300c), (0x06d34, 0x3004), (0x06d35, 0x1aa9), (0x06d36, 0x1aa1),
    (0x06d37, 0x3017), (0x06d38, 0x1aa6), (0x06d39, 0x1aa4), (0x06d3a, 0x300f), (0x06d3b, 0x1a9e), (0x06d3c, 0x3007),
    (0x06d3d, 0x1a9f), (0x06d3e, 0x1aa0), (0x06d3f, 0x3008), (0x06d40, 0x301a), (0x06d41, 0x1a98), (0x06d42, 0x3014),
    (0x06d58, 0x31b9), (0x06d59, 0x1c34), (0x06d5a, 0x1c39), (0x06d5b, 0x4ac6), (0x06d5c, 0x4c58), (0x06d5e, 0x31c2),
    (0x06d5f, 0x31c8), (0x06d60, 0x31c4), (0x06d61, 0x31b7), (0x06d62, 0x31ba), (0x06d63, 0x31b3), (0x06d64, 0x31b4),
    (0x06d65, 0x1c40), (0x06d66, 0x1c31), (0x06d67, 0x31c3), (0x06d68, 0x31cc), (0x06d69, 0x1c3b), (0x06d6a, 0x1c2d),
    (0x06d6c, 0x1c36), (0x06d6d, 0x31bb), (0x06d6e, 0x1c38), (0x06d6f, 0x31bc), (0x06d70, 0x31c6), (0x06d71, 0x4b1f),
    (0x06d74, 0x1c3a), (0x06d75, 0x31d5), (0x06d76, 0x31b5), (0x06d77, 0x1c33), (0x06d78, 0x1c32), (0x06d79, 0x1c3e),
    (0x06d7a, 0x31b2), (0x06d7b, 0x31d3), (0x06d7c, 0x31c7), (0x06d7d, 0x31d4), (0x06d7e, 0x31ce), (0x06d7f, 0x31c0),
    (0x06d80, 0x31cf), (0x06d82, 0x31c9), (0x06d83, 0x31d2), (0x06d84, 0x31d0), (0x06d85, 0x1c3f), (0x06d86, 0x31c1),
    (0x06d87, 0x1c30), (0x06d88, 0x1c2f), (0x06d89, 0x1c37), (0x06d8a, 0x1c3d), (0x06d8b, 0x31cd), (0x06d8c, 0x1c3c),
    (0x06d8d, 0x31be), (0x06d8e, 0x1e10), (0x06d90, 0x31d6), (0x06d91, 0x31bd), (0x06d92, 0x31b8), (0x06d93, 0x1c35),
    (0x06d94, 0x1c41), (0x06d95, 0x1c2e), (0x06d96, 0x4c57), (0x06d97, 0x31c5), (0x06d98, 0x31ca), (0x06daa, 0x1e32),
    (0x06dab, 0x3403), (0x06dac, 0x3407), (0x06dae, 0x1e1f), (0x06daf, 0x1e1d), (0x06db2, 0x1e14), (0x06db3, 0x3405),
    (0x06db4, 0x3404), (0x06db5, 0x1e28), (0x06db7, 0x340a), (0x06db8, 0x1e22), (0x06dba, 0x341c), (0x06dbb, 0x3428),
    (0x06dbc, 0x1e11), (0x06dbd, 0x3419), (0x06dbe, 0x3412), (0x06dbf, 0x1e34), (0x06dc0, 0x3402), (0x06dc2, 0x341e),
    (0x06dc4, 0x1e31), (0x06dc5, 0x1e25), (0x06dc6, 0x1e30), (0x06dc7, 0x1e1b), (0x06dc8, 0x340e), (0x06dc9, 0x3420),
    (0x06dca, 0x3418), (0x06dcb, 0x1e1c), (0x06dcc, 0x1e16), (0x06dcd, 0x3426), (0x06dcf, 0x341f), (0x06dd0, 0x3421),
    (0x06dd1, 0x1e1e), (0x06dd2, 0x1e26), (0x06dd3, 0x3423), (0x06dd4, 0x340c), (0x06dd5, 0x341d), (0x06dd6, 0x3411),
    (0x06dd7, 0x3425), (0x06dd8, 0x1e2b), (0x06dd9, 0x1e13), (0x06dda, 0x1e29), (0x06ddb, 0x3416), (0x06ddc, 0x3414),
    (0x06ddd, 0x3415), (0x06dde, 0x1e20), (0x06ddf, 0x3410), (0x06de0, 0x340f), (0x06de1, 0x1e15), (0x06de2, 0x3409),
    (0x06de3, 0x3427), (0x06de4, 0x1e17), (0x06de5, 0x3413), (0x06de6, 0x1e35), (0x06de8, 0x1e2f), (0x06de9, 0x3408),
    (0x06dea, 0x1e2c), (0x06deb, 0x1e2a), (0x06dec, 0x1e33), (0x06ded, 0x341a), (0x06dee, 0x1e2e), (0x06def, 0x31bf),
    (0x06df0, 0x341b), (0x06df1, 0x1e2d), (0x06df2, 0x3422), (0x06df3, 0x1e12), (0x06df4, 0x3417), (0x06df5, 0x1e24),
    (0x06df6, 0x340b), (0x06df7, 0x1e23), (0x06df9, 0x1e21), (0x06dfa, 0x1e19), (0x06dfb, 0x1e18), (0x06dfc, 0x367d),
    (0x06dfd, 0x3424), (0x06e00, 0x340d), (0x06e03, 0x3692), (0x06e05, 0x1e1a), (0x06e19, 0x1fe5), (0x06e1a, 0x1e27),
    (0x06e1b, 0x1fd3), (0x06e1c, 0x368c), (0x06e1d, 0x1fe1), (0x06e1f, 0x3680), (0x06e20, 0x1fd0), (0x06e21, 0x1fcc),
    (0x06e22, 0x369e), (0x06e23, 0x1fd2), (0x06e24, 0x1fd6), (0x06e25, 0x1fd1), (0x06e26, 0x1fda), (0x06e27, 0x36a2),
    (0x06e28, 0x3699), (0x06e2a, 0x4d40), (0x06e2b, 0x3687), (0x06e2c, 0x1fdf), (0x06e2d, 0x1fd9), (0x06e2e, 0x3693),
    (0x06e2f, 0x1fc9), (0x06e30, 0x369f), (0x06e31, 0x3698), (0x06e32, 0x1fcd), (0x06e33, 0x368d), (0x06e34, 0x1fdc),
    (0x06e35, 0x36aa), (0x06e36, 0x36ab), (0x06e38, 0x1fca), (0x06e39, 0x369d), (0x06e3a, 0x1fde), (0x06e3b, 0x3691),
    (0x06e3c, 0x3683), (0x06e3d, 0x3684), (0x06e3e, 0x1fe2), (0x06e3f, 0x3688), (0x06e40, 0x368f), (0x06e41, 0x3689),
    (0x06e43, 0x1fe0), (0x06e44, 0x1fe8), (0x06e45, 0x3685), (0x06e46, 0x367e), (0x06e47, 0x367f), (0x06e49, 0x3681),
    (0x06e4a, 0x1fcf), (0x06e4b, 0x368e), (0x06e4d, 0x1fdd), (0x06e4e, 0x1fe6), (0x06e4f, 0x4c6a), (0x06e50, 0x4c06),
    (0x06e51, 0x3690), (0x06e52, 0x36a8), (0x06e53, 0x36a0), (0x06e54, 0x1fcb), (0x06e55, 0x36a6), (0x06e56, 0x1fd7),
    (0x06e58, 0x1fd5), (0x06e59, 0x4b10), (0x06e5a, 0x36ac), (0x06e5b, 0x1fd4), (0x06e5c, 0x3696), (0x06e5d, 0x368a),
    (0x06e5e, 0x3694), (0x06e5f, 0x1feb), (0x06e60, 0x369a), (0x06e61, 0x3697), (0x06e62, 0x3686), (0x06e63, 0x1fe7),
    (0x06e64, 0x36a4), (0x06e65, 0x36a1), (0x06e66, 0x36a9), (0x06e67, 0x1fce), (0x06e68, 0x3695), (0x06e69, 0x1fea),
    (0x06e6b, 0x369c), (0x06e6e, 0x1fd8), (0x06e6f, 0x1fdb), (0x06e71, 0x369b), (0x06e72, 0x1fe9), (0x06e73, 0x368b),
    (0x06e74, 0x3406), (0x06e77, 0x36a5), (0x06e78, 0x36a3), (0x06e79, 0x36a7), (0x06e7c, 0x4c59), (0x06e88, 0x3682),
    (0x06e89, 0x1fe4), (0x06e8d, 0x392a), (0x06e8e, 0x3929), (0x06e8f, 0x390f), (0x06e90, 0x2179), (0x06e92, 0x3928),
    (0x06e93, 0x3912), (0x06e94, 0x3913), (0x06e96, 0x2183), (0x06e97, 0x3931), (0x06e98, 0x217e), (0x06e99, 0x3927),
    (0x06e9b, 0x390c), (0x06e9c, 0x2184), (0x06e9d, 0x217a), (0x06e9e, 0x391b), (0x06e9f, 0x3911), (0x06ea0, 0x3914),
    (0x06ea1, 0x392c), (0x06ea2, 0x2174), (0x06ea3, 0x3933), (0x06ea4, 0x392b), (0x06ea5, 0x217d), (0x06ea6, 0x3920),
    (0x06ea7, 0x2188), (0x06eaa, 0x2187), (0x06eab, 0x2181), (0x06eae, 0x3932), (0x06eaf, 0x2175), (0x06eb0, 0x391e),
    (0x06eb1, 0x3915), (0x06eb2, 0x3922), (0x06eb3, 0x392e), (0x06eb4, 0x2189), (0x06eb5, 0x4c34), (0x06eb6, 0x2177),
    (0x06eb7, 0x391d), (0x06eb9, 0x3916), (0x06eba, 0x2180), (0x06ebc, 0x217f), (0x06ebd, 0x3919), (0x06ebe, 0x3923),
    (0x06ebf, 0x392d), (0x06ec0, 0x3910), (0x06ec1, 0x391a), (0x06ec2, 0x2178), (0x06ec3, 0x3924), (0x06ec4, 0x2185),
    (0x06ec5, 0x217c), (0x06ec6, 0x3917), (0x06ec7, 0x217b), (0x06ec8, 0x390e), (0x06ec9, 0x391c), (0x06eca, 0x3930),
    (0x06ecb, 0x1fe3), (0x06ecc, 0x2343), (0x06ecd, 0x391f), (0x06ece, 0x3ba9), (0x06ecf, 0x3921), (0x06ed0, 0x392f),
    (0x06ed1, 0x2182), (0x06ed2, 0x3918), (0x06ed3, 0x2176), (0x06ed4, 0x2186), (0x06ed5, 0x24bd), (0x06ed6, 0x390d),
    (0x06ed8, 0x3926), (0x06ed9, 0x4a93), (0x06edb, 0x4a59), (0x06edc, 0x3925), (0x06eeb, 0x3bc5), (0x06eec, 0x2340),
    (0x06eed, 0x3bba), (0x06eee, 0x3bbf), (0x06eef, 0x2335), (0x06ef1, 0x3bab), (0x06ef2, 0x2342), (0x06ef4, 0x232c),
    (0x06ef5, 0x3baa), (0x06ef6, 0x3bcb), (0x06ef7, 0x2344), (0x06ef8, 0x3bae), (0x06ef9, 0x3bbe), (0x06efa, 0x4c71),
    (0x06efb, 0x3bb0), (0x06efc, 0x3bce), (0x06efd, 0x3bca), (0x06efe, 0x232a), (0x06eff, 0x2334), (0x06f00, 0x3e04),
    (0x06f01, 0x2341), (0x06f02, 0x2332), (0x06f03, 0x3bac), (0x06f04, 0x4c5a), (0x06f05, 0x3bc9), (0x06f06, 0x2336),
    (0x06f07, 0x3bc6), (0x06f08, 0x3bd3), (0x06f09, 0x3bb2), (0x06f0a, 0x3bbb), (0x06f0d, 0x3bd1), (0x06f0e, 0x3bc7),
    (0x06f0f, 0x2331), (0x06f12, 0x3bb9), (0x06f13, 0x232b), (0x06f14, 0x2329), (0x06f15, 0x233b), (0x06f16, 0x4bd3),
    (0x06f18, 0x3bb7), (0x06f19, 0x3bb4), (0x06f1a, 0x3bb5), (0x06f1c, 0x3bcd), (0x06f1e, 0x3bd2), (0x06f1f, 0x3bd0),
    (0x06f20, 0x232f), (0x06f21, 0x3bd4), (0x06f22, 0x2333), (0x06f23, 0x233a), (0x06f25, 0x3bad), (0x06f26, 0x3dec),
    (0x06f27, 0x3bb6), (0x06f29, 0x232d), (0x06f2a, 0x233f), (0x06f2b, 0x233c), (0x06f2c, 0x2330), (0x06f2d, 0x3bc0),
    (0x06f2e, 0x3bb1), (0x06f2f, 0x233d), (0x06f30, 0x3bc2), (0x06f31, 0x2337), (0x06f32, 0x2339), (0x06f33, 0x2328),
    (0x06f35, 0x3bc4), (0x06f36, 0x3bbc), (0x06f37, 0x3baf), (0x06f38, 0x2338), (0x06f39, 0x3bcc), (0x06f3a, 0x3bcf),
    (0x06f3b, 0x3bb8), (0x06f3c, 0x3bc3), (0x06f3d, 0x4cb9), (0x06f3e, 0x232e), (0x06f3f, 0x24ac), (0x06f40, 0x3bc1),
    (0x06f41, 0x3deb), (0x06f43, 0x3bc8), (0x06f44, 0x4c76), (0x06f4e, 0x3bb3), (0x06f4f, 0x3df5), (0x06f50, 0x3dff),
    (0x06f51, 0x24af), (0x06f52, 0x3dfe), (0x06f53, 0x3e0a), (0x06f54, 0x24b1), (0x06f55, 0x3dfc), (0x06f57, 0x3e00),
    (0x06f58, 0x24bc), (0x06f5a, 0x3df7), (0x06f5b, 0x24b4), (0x06f5c, 0x4c77), (0x06f5d, 0x3e03), (0x06f5e, 0x4056),
    (0x06f5f, 0x24c0), (0x06f60, 0x24bf), (0x06f61, 0x3e05), (0x06f62, 0x3df4), (0x06f63, 0x3e0f), (0x06f64, 0x24ba),
    (0x06f66, 0x24b0), (0x06f67, 0x3e08), (0x06f69, 0x3e0c), (0x06f6a, 0x3e11), (0x06f6b, 0x3e06), (0x06f6c, 0x3dfa),
    (0x06f6d, 0x24b3), (0x06f6e, 0x24b6), (0x06f6f, 0x24be), (0x06f70, 0x24b9), (0x06f72, 0x3dfd), (0x06f73, 0x3bbd),
    (0x06f74, 0x4c79), (0x06f76, 0x3df9), (0x06f77, 0x3e10), (0x06f78, 0x24b5), (0x06f7a, 0x24b8), (0x06f7b, 0x3e12),
    (0x06f7c, 0x24ad), (0x06f7d, 0x3e07), (0x06f7e, 0x3ded), (0x06f7f, 0x3e0d), (0x06f80, 0x2720), (0x06f82, 0x3dfb),
    (0x06f84, 0x24ae), (0x06f85, 0x3df6), (0x06f86, 0x24b2), (0x06f87, 0x3dee), (0x06f88, 0x233e), (0x06f89, 0x3df2),
    (0x06f8a, 0x4bc7), (0x06f8b, 0x3e0b), (0x06f8c, 0x3df3), (0x06f8d, 0x3df1), (0x06f8e, 0x24b7), (0x06f90, 0x3e09),
    (0x06f92, 0x3df0), (0x06f93, 0x3e02), (0x06f94, 0x3e01), (0x06f95, 0x3e0e), (0x06f96, 0x3df8), (0x06f97, 0x24bb),
    (0x06f9d, 0x4c6f), (0x06f9e, 0x4059), (0x06f9f, 0x4c7c), (0x06fa0, 0x260f), (0x06fa1, 0x2605), (0x06fa2, 0x4065),
    (0x06fa3, 0x4051), (0x06fa4, 0x2607), (0x06fa5, 0x405d), (0x06fa6, 0x260e), (0x06fa7, 0x2609), (0x06fa8, 0x405b),
    (0x06fa9, 0x424b), (0x06faa, 0x4061), (0x06fab, 0x4067), (0x06fac, 0x4060), (0x06fad, 0x404f), (0x06fae, 0x405e),
    (0x06faf, 0x4069), (0x06fb0, 0x406b), (0x06fb1, 0x2604), (0x06fb2, 0x406a), (0x06fb3, 0x260a), (0x06fb4, 0x2610),
    (0x06fb6, 0x260d), (0x06fb8, 0x4064), (0x06fb9, 0x260c), (0x06fba, 0x405f), (0x06fbc, 0x4053), (0x06fbd, 0x4058),
    (0x06fbf, 0x4063), (0x06fc0, 0x260b), (0x06fc1, 0x2608), (0x06fc2, 0x2603), (0x06fc3, 0x2606), (0x06fc4, 0x4057),
    (0x06fc6, 0x3def), (0x06fc7, 0x4052), (0x06fc8, 0x4055), (0x06fc9, 0x4066), (0x06fca, 0x405a), (0x06fcb, 0x4050),
    (0x06fcc, 0x424a), (0x06fcd, 0x4068), (0x06fce, 0x4054), (0x06fcf, 0x4062), (0x06fd3, 0x4c7e), (0x06fd4, 0x424d),
    (0x06fd5, 0x2724), (0x06fd8, 0x2718), (0x06fdb, 0x271c), (0x06fdc, 0x424f), (0x06fdd, 0x4255), (0x06fde, 0x4253),
    (0x06fdf, 0x271a), (0x06fe0, 0x271b), (0x06fe1, 0x2722), (0x06fe2, 0x4256), (0x06fe3, 0x424e), (0x06fe4, 0x271d),
    (0x06fe6, 0x4252), (0x06fe7, 0x4251), (0x06fe8, 0x4257), (0x06fe9, 0x2723), (0x06feb, 0x271e), (0x06fec, 0x2721),
    (0x06fed, 0x4250), (0x06fee, 0x2725), (0x06fef, 0x271f), (0x06ff0, 0x2726), (0x06ff1, 0x2719), (0x06ff2, 0x4254),
    (0x06ff4, 0x424c), (0x06ff7, 0x440b), (0x06ff8, 0x4c6d), (0x06ffa, 0x280e), (0x06ffb, 0x4408), (0x06ffc, 0x440a),
    (0x06ffe, 0x280c), (0x06fff, 0x4406), (0x07000, 0x4407), (0x07001, 0x4402), (0x07004, 0x405c), (0x07005, 0x4403),
    (0x07006, 0x280d), (0x07007, 0x43ff), (0x07009, 0x280a), (0x0700a, 0x440c), (0x0700b, 0x280b), (0x0700c, 0x4400),
    (0x0700d, 0x4401), (0x0700e, 0x4405), (0x0700f, 0x2810), (0x07011, 0x280f), (0x07014, 0x4404), (0x07015, 0x28b2),
    (0x07016, 0x456c), (0x07017, 0x4572), (0x07018, 0x28b3), (0x07019, 0x4569), (0x0701a, 0x28b0), (0x0701b, 0x28ad),
    (0x0701c, 0x4574), (0x0701d, 0x28b1), (0x0701f, 0x28ae), (0x07020, 0x456b), (0x07021, 0x456e), (0x07022, 0x456f),
    (0x07023, 0x4570), (0x07024, 0x4573), (0x07026, 0x4409), (0x07027, 0x456a), (0x07028, 0x28af), (0x07029, 0x4571),
    (0x0702a, 0x4575), (0x0702b, 0x456d), (0x0702f, 0x46a4), (0x07030, 0x2941), (0x07031, 0x46a7), (0x07032, 0x2942),
    (0x07033, 0x46af), (0x07034, 0x46a6), (0x07035, 0x46a3), (0x07037, 0x46a5), (0x07038, 0x46a9), (0x07039, 0x46ac),
    (0x0703a, 0x46ab), (0x0703b, 0x46ae), (0x0703c, 0x46a2), (0x0703e, 0x2940), (0x0703f, 0x46aa), (0x07040, 0x46ad),
    (0x07041, 0x46b0), (0x07042, 0x46a8), (0x07043, 0x4795), (0x07044, 0x4796), (0x07045, 0x479a), (0x07046, 0x479b),
    (0x07048, 0x4798), (0x07049, 0x4799), (0x0704a, 0x4797), (0x0704b, 0x4c8a), (0x0704c, 0x299e), (0x07051, 0x29ec),
    (0x07052, 0x484a), (0x07055, 0x4847), (0x07056, 0x4848), (0x07057, 0x4849), (0x07058, 0x29ed), (0x0705a, 0x48e1),
    (0x0705b, 0x48e0), (0x0705d, 0x4948), (0x0705e, 0x2a46), (0x0705f, 0x4946), (0x07060, 0x4949), (0x07061, 0x4947),
    (0x07062, 0x498e), (0x07063, 0x2a68), (0x07064, 0x2a76), (0x07065, 0x49d9), (0x07066, 0x49c4), (0x07068, 0x49d8),
    (0x07069, 0x4a06), (0x0706a, 0x4a07), (0x0706b, 0x160a), (0x07070, 0x1716), (0x07071, 0x2cc6), (0x07074, 0x2d80),
    (0x07076, 0x180a), (0x07078, 0x180d), (0x07079, 0x4ac3), (0x0707a, 0x2d81), (0x0707c, 0x180b), (0x0707d, 0x180c),
    (0x0707e, 0x4c8b), (0x07081, 0x4c8d), (0x07082, 0x2eb4), (0x07083, 0x2eb6), (0x07084, 0x2eb1), (0x07085, 0x2eae),
    (0x07086, 0x2eb0), (0x0708a, 0x1967), (0x0708b, 0x4af5), (0x0708e, 0x1965), (0x07091, 0x2eb2), (0x07092, 0x1966),
    (0x07093, 0x2eaf), (0x07094, 0x2eac), (0x07095, 0x1964), (0x07096, 0x2eb3), (0x07098, 0x2ead), (0x07099, 0x1968),
    (0x0709a, 0x2eb5), (0x0709f, 0x3023), (0x070a1, 0x3027), (0x070a4, 0x1ab4), (0x070a7, 0x4c8c), (0x070a9, 0x302a),
    (0x070ab, 0x1aac), (0x070ac, 0x1aaf), (0x070ad, 0x1ab1), (0x070ae, 0x1ab3), (0x070af, 0x1ab0), (0x070b0, 0x3026),
    (0x070b1, 0x3025), (0x070b3, 0x1aae), (0x070b4, 0x3028), (0x070b5, 0x3029), (0x070b7, 0x3022), (0x070b8, 0x1ab2),
    (0x070ba, 0x1aad), (0x070bd, 0x4ca7), (0x070be, 0x3024), (0x070c5, 0x31e4), (0x070c6, 0x31e5), (0x070c7, 0x31e6),
    (0x070c8, 0x1c46), (0x070ca, 0x1c42), (0x070cb, 0x31db), (0x070cc, 0x4c8e), (0x070cd, 0x31e3), (0x070ce, 0x31e8),
    (0x070cf, 0x1c47), (0x070d1, 0x31d9), (0x070d2, 0x31df), (0x070d3, 0x31d8), (0x070d4, 0x31e2), (0x070d5, 0x4c8f),
    (0x070d6, 0x4c90), (0x070d7, 0x31de), (0x070d8, 0x1c43), (0x070d9, 0x1c45), (0x070da, 0x31e7), (0x070dc, 0x31d7),
    (0x070dd, 0x31da), (0x070de, 0x31e0), (0x070df, 0x4c91), (0x070e0, 0x31e1), (0x070e1, 0x31e9), (0x070e2, 0x31dd),
    (0x070e4, 0x1c44), (0x070ef, 0x1e3a), (0x070f0, 0x342f), (0x070f3, 0x3431), (0x070f4, 0x342d), (0x070f6, 0x3439),
    (0x070f7, 0x342b), (0x070f8, 0x3438), (0x070f9, 0x1e36), (0x070fa, 0x3429), (0x070fb, 0x36b0), (0x070fc, 0x3433),
    (0x070fd, 0x1e39), (0x070ff, 0x3434), (0x07100, 0x3437), (0x07102, 0x343b), (0x07104, 0x3430), (0x07106, 0x3435),
    (0x07109, 0x1e37), (0x0710a, 0x1e38), (0x0710b, 0x343a), (0x0710c, 0x342e), (0x0710d, 0x342a), (0x0710e, 0x343c),
    (0x07110, 0x3432), (0x07113, 0x3436), (0x07117, 0x342c), (0x07119, 0x1fec), (0x0711a, 0x1fed), (0x0711b, 0x36ba),
    (0x0711c, 0x1ff3), (0x0711e, 0x36ae), (0x0711f, 0x36b7), (0x07120, 0x36ad), (0x07121, 0x1ff0), (0x07122, 0x36b5),
    (0x07123, 0x36b3), (0x07125, 0x36b4), (0x07126, 0x1fee), (0x07128, 0x36b8), (0x0712b, 0x4c97), (0x0712c, 0x4ca1),
    (0x0712e, 0x36b1), (0x0712f, 0x36af), (0x07130, 0x1fef), (0x07131, 0x36b2), (0x07132, 0x36b6), (0x07136, 0x1ff1),
    (0x0713a, 0x36b9), (0x07141, 0x3939), (0x07142, 0x3940), (0x07143, 0x3942), (0x07144, 0x3948), (0x07145, 0x4c98),
    (0x07146, 0x2196), (0x07147, 0x3934), (0x07149, 0x218e), (0x0714a, 0x4c9a), (0x0714b, 0x3943), (0x0714c, 0x2193),
    (0x0714d, 0x3949), (0x0714e, 0x218a), (0x0714f, 0x4c9e), (0x07150, 0x3946), (0x07152, 0x3936), (0x07153, 0x3947),
    (0x07154, 0x3935), (0x07156, 0x2198), (0x07158, 0x3941), (0x07159, 0x218b), (0x0715a, 0x394a), (0x0715c, 0x2190),
    (0x0715d, 0x393a), (0x0715e, 0x2195), (0x0715f, 0x3945), (0x07160, 0x3938), (0x07161, 0x393f), (0x07162, 0x393b),
    (0x07163, 0x3937), (0x07164, 0x218d), (0x07165, 0x2194), (0x07166, 0x2192), (0x07167, 0x218f), (0x07168, 0x2197),
    (0x07169, 0x218c), (0x0716a, 0x393e), (0x0716c, 0x2191), (0x0716e, 0x1ff2), (0x07170, 0x3944), (0x07172, 0x393c),
    (0x07178, 0x393d), (0x0717b, 0x3bdc), (0x0717d, 0x2347), (0x07180, 0x3bd8), (0x07181, 0x3bde), (0x07182, 0x3bda),
    (0x07184, 0x2349), (0x07185, 0x3bd9), (0x07186, 0x3bdd), (0x07187, 0x3bd5), (0x07189, 0x3bd7), (0x0718a, 0x2348),
    (0x0718f, 0x3bdb), (0x07190, 0x3bd6), (0x07192, 0x234a), (0x07194, 0x2345), (0x07196, 0x4c95), (0x07197, 0x3bdf),
    (0x07199, 0x2346), (0x0719a, 0x3e18), (0x0719b, 0x3e15), (0x0719c, 0x3e21), (0x0719d, 0x3e1b), (0x0719e, 0x3e1d),
    (0x0719f, 0x24c1), (0x071a0, 0x3e17), (0x071a1, 0x3e1f), (0x071a4, 0x3e1e), (0x071a5, 0x3e1c), (0x071a7, 0x3e22),
    (0x071a8, 0x24c4), (0x071a9, 0x3e19), (0x071aa, 0x3e20), (0x071ac, 0x24c2), (0x071af, 0x3e14), (0x071b0, 0x3e16),
    (0x071b1, 0x24c3), (0x071b2, 0x3e13), (0x071b3, 0x3e23), (0x071b4, 0x4c94), (0x071b5, 0x3e1a), (0x071b8, 0x406f),
    (0x071b9, 0x2617), (0x071ba, 0x4ca5), (0x071bc, 0x407a), (0x071bd, 0x4078), (0x071be, 0x2611), (0x071bf, 0x406e),
    (0x071c0, 0x4071), (0x071c1, 0x4072), (0x071c2, 0x406d), (0x071c3, 0x261b), (0x071c4, 0x261c), (0x071c5, 0x406c),
    (0x071c6, 0x407b), (0x071c7, 0x4076), (0x071c8, 0x2615), (0x071c9, 0x2612), (0x071ca, 0x4075), (0x071cb, 0x4073),
    (0x071ce, 0x2618), (0x071cf, 0x4077), (0x071d0, 0x2613), (0x071d2, 0x2614), (0x071d4, 0x4074), (0x071d5, 0x2616),
    (0x071d6, 0x4070), (0x071d8, 0x4079), (0x071d9, 0x2619), (0x071da, 0x407c), (0x071db, 0x407d), (0x071dc, 0x261a),
    (0x071dd, 0x4aa2), (0x071df, 0x2728), (0x071e0, 0x272f), (0x071e1, 0x4258), (0x071e2, 0x425e), (0x071e4, 0x425c),
    (0x071e5, 0x272b), (0x071e6, 0x272a), (0x071e7, 0x2727), (0x071e8, 0x425a), (0x071ec, 0x272d), (0x071ed, 0x272c),
    (0x071ee, 0x2729), (0x071f0, 0x425d), (0x071f1, 0x4259), (0x071f2, 0x425b), (0x071f4, 0x272e), (0x071f8, 0x2814),
    (0x071f9, 0x440f), (0x071fb, 0x2811), (0x071fc, 0x2812), (0x071fd, 0x4411), (0x071fe, 0x2813), (0x071ff, 0x440e),
    (0x07201, 0x440d), (0x07202, 0x4579), (0x07203, 0x4410), (0x07205, 0x457a), (0x07206, 0x28b4), (0x07207, 0x4578),
    (0x0720a, 0x4577), (0x0720c, 0x4576), (0x0720d, 0x28b5), (0x0720e, 0x4ca8), (0x07210, 0x2943), (0x07213, 0x46b1),
    (0x07214, 0x46b2), (0x07215, 0x4caa), (0x07219, 0x479e), (0x0721a, 0x479d), (0x0721b, 0x299f), (0x0721d, 0x479c),
    (0x0721e, 0x484b), (0x0721f, 0x484c), (0x07222, 0x48e2), (0x07223, 0x494a), (0x07224, 0x4cad), (0x07226, 0x498f),
    (0x07227, 0x49f2), (0x07228, 0x2a8a), (0x07229, 0x49fc), (0x0722a, 0x160b), (0x0722c, 0x1969), (0x0722d, 0x196a),
    (0x0722e, 0x4cb0), (0x07230, 0x1ab5), (0x07235, 0x2730), (0x07236, 0x160c), (0x07238, 0x196b), (0x07239, 0x1c48),
    (0x0723a, 0x2199), (0x0723b, 0x160d), (0x0723d, 0x1e3b), (0x0723e, 0x234b), (0x0723f, 0x2c4a), (0x07240, 0x4cb1),
    (0x07241, 0x302b), (0x07242, 0x31ea), (0x07244, 0x3be0), (0x07246, 0x2731), (0x07247, 0x160e), (0x07248, 0x196c),
    (0x07249, 0x302c), (0x0724a, 0x302d), (0x0724b, 0x36bb), (0x0724c, 0x1ff4), (0x0724f, 0x394b), (0x07252, 0x219a),
    (0x07253, 0x3be1), (0x07255, 0x4cb4), (0x07256, 0x24c5), (0x07257, 0x4cb5), (0x07258, 0x28b6), (0x07259, 0x160f),
    (0x0725a, 0x36bc), (0x0725b, 0x1610), (0x0725d, 0x1718), (0x0725e, 0x2cc7), (0x0725f, 0x1717), (0x07260, 0x1810),
    (0x07261, 0x180f), (0x07262, 0x180e), (0x07263, 0x2d82), (0x07267, 0x196d), (0x07269, 0x196e), (0x0726a, 0x2eb7),
    (0x0726c, 0x302e), (0x0726e, 0x3031), (0x0726f, 0x1ab7), (0x07270, 0x302f), (0x07272, 0x1ab6), (0x07273, 0x3030),
    (0x07274, 0x1ab8), (0x07276, 0x31ed), (0x07277, 0x31ec), (0x07278, 0x31eb), (0x07279, 0x1c49), (0x0727b, 0x343e),
    (0x0727c, 0x343f), (0x0727d, 0x1e3c), (0x0727e, 0x343d), (0x0727f, 0x3440), (0x07280, 0x1ff6), (0x07281, 0x1e3d),
    (0x07282, 0x4cba), (0x07284, 0x1ff5), (0x07285, 0x36c0), (0x07286, 0x36bf), (0x07288, 0x36bd), (0x07289, 0x36be),
    (0x0728b, 0x36c1), (0x0728c, 0x394d), (0x0728d, 0x394c), (0x0728e, 0x3950), (0x07290, 0x394f), (0x07291, 0x394e),
    (0x07292, 0x234c), (0x07293, 0x3be4), (0x07295, 0x3be3), (0x07296, 0x234d), (0x07297, 0x3be2), (0x07298, 0x3e24),
    (0x0729a, 0x3e25), (0x0729b, 0x24c6), (0x0729d, 0x407e), (0x0729e, 0x407f), (0x072a1, 0x457f), (0x072a2, 0x28b7),
    (0x072a3, 0x457e), (0x072a4, 0x457d), (0x072a5, 0x457b), (0x072a6, 0x457c), (0x072a7, 0x29a0), (0x072a8, 0x46b3),
    (0x072a9, 0x484d), (0x072aa, 0x4990), (0x072ac, 0x1611), (0x072ae, 0x2c6b), (0x072af, 0x1679), (0x072b0, 0x2c6c),
    (0x072b4, 0x2cc8), (0x072b5, 0x2cc9), (0x072ba, 0x2d88), (0x072bd, 0x2d84), (0x072bf, 0x2d83), (0x072c0, 0x196f),
    (0x072c1, 0x2d87), (0x072c2, 0x1812), (0x072c3, 0x2d85), (0x072c4, 0x1811), (0x072c5, 0x2d89), (0x072c6, 0x2d86),
    (0x072c9, 0x2ebb), (0x072ca, 0x3032), (0x072cb, 0x2eb9), (0x072cc, 0x2ec0), (0x072ce, 0x1970), (0x072d0, 0x1973),
    (0x072d1, 0x2ec1), (0x072d2, 0x2ebd), (0x072d4, 0x2ebe), (0x072d6, 0x2eb8), (0x072d7, 0x1972), (0x072d8, 0x2eba),
    (0x072d9, 0x1971), (0x072da, 0x2ebf), (0x072dc, 0x2ebc), (0x072df, 0x3036), (0x072e0, 0x1aba), (0x072e1, 0x1abb),
    (0x072e3, 0x3039), (0x072e4, 0x3033), (0x072e6, 0x3038), (0x072e8, 0x3034), (0x072e9, 0x1ab9), (0x072ea, 0x3037),
    (0x072eb, 0x3035), (0x072f3, 0x31f3), (0x072f4, 0x31f0), (0x072f6, 0x31f2), (0x072f7, 0x1c4e), (0x072f8, 0x1c4d),
    (0x072f9, 0x1c4b), (0x072fa, 0x31ef), (0x072fb, 0x31f4), (0x072fc, 0x1c4a), (0x072fd, 0x1c4c), (0x072fe, 0x31f1),
    (0x072ff, 0x3448), (0x07300, 0x31ee), (0x07301, 0x31f5), (0x07307, 0x3443), (0x07308, 0x3447), (0x0730a, 0x3446),
    (0x0730b, 0x36c3), (0x0730c, 0x36ce), (0x0730f, 0x3449), (0x07311, 0x3444), (0x07312, 0x36c2), (0x07313, 0x1e41),
    (0x07316, 0x1e40), (0x07317, 0x3442), (0x07318, 0x3445), (0x07319, 0x1e42), (0x0731b, 0x1e3f), (0x0731c, 0x1e3e),
    (0x0731d, 0x3441), (0x0731e, 0x344a), (0x07322, 0x36c5), (0x07323, 0x36cc), (0x07325, 0x1ff8), (0x07326, 0x36cb),
    (0x07327, 0x36c8), (0x07328, 0x4cc1), (0x07329, 0x1ffa), (0x0732b, 0x4cbc), (0x0732d, 0x36ca), (0x0732e, 0x4cc2),
    (0x07330, 0x36c4), (0x07331, 0x36c6), (0x07332, 0x36c9), (0x07333, 0x36c7), (0x07334, 0x1ff9), (0x07335, 0x36cd),
    (0x07336, 0x1ff7), (0x07337, 0x219b), (0x0733a, 0x3954), (0x0733b, 0x3953), (0x0733c, 0x3951), (0x0733e, 0x219e),
    (0x0733f, 0x219d), (0x07340, 0x3955), (0x07342, 0x3952), (0x07343, 0x3be5), (0x07344, 0x234e), (0x07345, 0x219c),
    (0x07349, 0x3957), (0x0734a, 0x3956), (0x0734c, 0x3be8), (0x0734d, 0x3be6), (0x0734e, 0x24c7), (0x07350, 0x234f),
    (0x07351, 0x3be7), (0x07352, 0x3e27), (0x07357, 0x24c8), (0x07358, 0x3e26), (0x07359, 0x3e2f), (0x0735a, 0x3e2e),
    (0x0735b, 0x3e2c), (0x0735d, 0x3e2b), (0x0735e, 0x3e28), (0x0735f, 0x3e29), (0x07360, 0x3e2a), (0x07361, 0x3e2d),
    (0x07362, 0x3e30), (0x07365, 0x4084), (0x07366, 0x4081), (0x07367, 0x4082), (0x07368, 0x261d), (0x07369, 0x4080),
    (0x0736a, 0x4086), (0x0736b, 0x4085), (0x0736c, 0x4083), (0x0736e, 0x4260), (0x0736f, 0x4261), (0x07370, 0x2732),
    (0x07372, 0x2733), (0x07373, 0x425f), (0x07375, 0x2816), (0x07376, 0x4412), (0x07377, 0x2815), (0x07378, 0x28b8),
    (0x0737a, 0x28b9), (0x0737b, 0x2944), (0x0737c, 0x46b5), (0x0737d, 0x46b4), (0x0737e, 0x479f), (0x0737f, 0x484e),
    (0x07380, 0x29ee), (0x07381, 0x48e4), (0x07382, 0x48e3), (0x07383, 0x48e5), (0x07384, 0x167a), (0x07385, 0x303a),
    (0x07386, 0x1c4f), (0x07387, 0x1e43), (0x07388, 0x344b), (0x07389, 0x167b), (0x0738a, 0x2c6d), (0x0738b, 0x1612),
    (0x0738e, 0x2cca), (0x07392, 0x2d8e), (0x07393, 0x2d8c), (0x07394, 0x2d8d), (0x07395, 0x2d8a), (0x07396, 0x1813),
    (0x07397, 0x2d8b), (0x0739c, 0x4ab4), (0x0739d, 0x2ec9), (0x0739f, 0x1976), (0x073a0, 0x2ec7), (0x073a1, 0x2ec3),
    (0x073a2, 0x2ec6), (0x073a4, 0x2ec2), (0x073a5, 0x1978), (0x073a6, 0x2ec5), (0x073a7, 0x4ab1), (0x073a8, 0x1975),
    (0x073a9, 0x1974), (0x073aa, 0x4cc4), (0x073ab, 0x1977), (0x073ac, 0x2ec8), (0x073ad, 0x2ec4), (0x073b2, 0x1abf),
    (0x073b3, 0x1ac2), (0x073b4, 0x3042), (0x073b5, 0x3041), (0x073b6, 0x3040), (0x073b7, 0x1abc), (0x073b8, 0x3049),
    (0x073b9, 0x303f), (0x073bb, 0x1abe), (0x073bc, 0x31fa), (0x073be, 0x3046), (0x073bf, 0x3044), (0x073c0, 0x1ac1),
    (0x073c2, 0x303c), (0x073c3, 0x3047), (0x073c5, 0x303e), (0x073c6, 0x3048), (0x073c7, 0x3045), (0x073c8, 0x303d),
    (0x073c9, 0x4cc7), (0x073ca, 0x1abd), (0x073cb, 0x304a), (0x073cc, 0x303b), (0x073cd, 0x1ac0), (0x073ce, 0x4b47),
    (0x073cf, 0x4cc3), (0x073d2, 0x31ff), (0x073d3, 0x31f6), (0x073d4, 0x3201), (0x073d5, 0x4a9d), (0x073d6, 0x31f9),
    (0x073d7, 0x3204), (0x073d8, 0x3205), (0x073d9, 0x31f7), (0x073da, 0x3203), (0x073db, 0x3200), (0x073dc, 0x31fe),
    (0x073dd, 0x3202), (0x073de, 0x1c55), (0x073e0, 0x1c53), (0x073e3, 0x31fc), (0x073e4, 0x4cdd), (0x073e5, 0x31f8),
    (0x073e7, 0x31fb), (0x073e8, 0x3206), (0x073e9, 0x31fd), (0x073ea, 0x1c54), (0x073eb, 0x3043), (0x073ed, 0x1c50),
    (0x073ee, 0x1c52), (0x073ef, 0x4a3b), (0x073f4, 0x3459), (0x073f5, 0x344e), (0x073f6, 0x344c), (0x073f7, 0x4cd1),
    (0x073f8, 0x344d), (0x073fa, 0x3454), (0x073fc, 0x3455), (0x073fd, 0x3451), (0x073fe, 0x1e48), (0x073ff, 0x3456),
    (0x07400, 0x3453), (0x07401, 0x3450), (0x07403, 0x1e46), (0x07404, 0x344f), (0x07405, 0x1e44), (0x07406, 0x1e47),
    (0x07407, 0x3452), (0x07408, 0x345a), (0x07409, 0x1c51), (0x0740a, 0x1e45), (0x0740b, 0x3458), (0x0740c, 0x3457),
    (0x0740d, 0x1e49), (0x07415, 0x4cd2), (0x07416, 0x36d3), (0x07417, 0x4ad7), (0x0741a, 0x36d4), (0x0741b, 0x2004),
    (0x0741d, 0x36da), (0x07420, 0x36dc), (0x07421, 0x36d5), (0x07422, 0x1ffe), (0x07423, 0x36d9), (0x07424, 0x36d8),
    (0x07425, 0x1fff), (0x07426, 0x2005), (0x07428, 0x2006), (0x07429, 0x36db), (0x0742a, 0x1ffc), (0x0742b, 0x36d2),
    (0x0742c, 0x36d0), (0x0742d, 0x36d6), (0x0742e, 0x36cf), (0x0742f, 0x2003), (0x07430, 0x36d1), (0x07431, 0x36d7),
    (0x07432, 0x36dd), (0x07433, 0x1ffd), (0x07434, 0x2002), (0x07435, 0x2000), (0x07436, 0x2001), (0x07439, 0x4cd5),
    (0x0743a, 0x1ffb), (0x0743f, 0x21a5), (0x07440, 0x395e), (0x07441, 0x21a4), (0x07442, 0x3962), (0x07444, 0x3958),
    (0x07446, 0x3963), (0x07447, 0x4cdc), (0x07449, 0x4cc8), (0x0744a, 0x3959), (0x0744b, 0x395a), (0x0744d, 0x3964),
    (0x0744e, 0x3961), (0x0744f, 0x395f), (0x07450, 0x3960), (0x07451, 0x395c), (0x07452, 0x395b), (0x07453, 0x4c67),
    (0x07454, 0x3965), (0x07455, 0x21a1), (0x07457, 0x395d), (0x07459, 0x21a6), (0x0745a, 0x21a0), (0x0745b, 0x21a7),
    (0x0745c, 0x21a8), (0x0745d, 0x4d00), (0x0745e, 0x21a3), (0x0745f, 0x21a2), (0x07460, 0x4cda), (0x07462, 0x3be9),
    (0x07463, 0x2351), (0x07464, 0x2350), (0x07465, 0x4b2b), (0x07467, 0x3bee), (0x07469, 0x24c9), (0x0746a, 0x2352),
    (0x0746c, 0x4ce0), (0x0746d, 0x2354), (0x0746e, 0x3bef), (0x0746f, 0x219f), (0x07470, 0x2353), (0x07471, 0x3beb),
    (0x07472, 0x3bed), (0x07473, 0x3bea), (0x07474, 0x4ce2), (0x07475, 0x3bec), (0x07476, 0x4cde), (0x07479, 0x3e3a),
    (0x0747c, 0x3e39), (0x0747d, 0x3e36), (0x0747e, 0x24cc), (0x0747f, 0x4087), (0x07480, 0x24cd), (0x07481, 0x3e35),
    (0x07482, 0x4ce5), (0x07483, 0x24cb), (0x07485, 0x3e37), (0x07486, 0x3e34), (0x07487, 0x3e31), (0x07488, 0x3e38),
    (0x07489, 0x3e32), (0x0748a, 0x3e33), (0x0748b, 0x24ca), (0x07490, 0x4265), (0x07492, 0x408b), (0x07494, 0x408a),
    (0x07495, 0x408c), (0x07497, 0x4262), (0x07498, 0x2620), (0x0749a, 0x4088), (0x0749c, 0x261e), (0x0749e, 0x2622),
    (0x0749f, 0x2621), (0x074a0, 0x4089), (0x074a1, 0x408d), (0x074a3, 0x261f), (0x074a4, 0x4ba0), (0x074a5, 0x4269),
    (0x074a6, 0x2736), (0x074a7, 0x2817), (0x074a8, 0x2737), (0x074a9, 0x2734), (0x074aa, 0x4266), (0x074ab, 0x4264),
    (0x074ad, 0x4267), (0x074af, 0x426a), (0x074b0, 0x2735), (0x074b1, 0x4268), (0x074b2, 0x4263), (0x074b5, 0x4415),
    (0x074b6, 0x4418), (0x074b7, 0x4582), (0x074b8, 0x4413), (0x074ba, 0x46b6), (0x074bb, 0x4419), (0x074bd, 0x28ba),
    (0x074be, 0x4417), (0x074bf, 0x2818), (0x074c0, 0x4414), (0x074c1, 0x4416), (0x074c2, 0x441a), (0x074c3, 0x4583),
    (0x074c5, 0x4581), (0x074c8, 0x4cee), (0x074ca, 0x28bb), (0x074cb, 0x4580), (0x074cf, 0x2945), (0x074d4, 0x29a2),
    (0x074d5, 0x4850), (0x074d6, 0x29a1), (0x074d7, 0x4852), (0x074d8, 0x484f), (0x074d9, 0x4851), (0x074da, 0x2a22),
    (0x074db, 0x494b), (0x074dc, 0x167c), (0x074dd, 0x2eca), (0x074de, 0x3207), (0x074df, 0x3208), (0x074e0, 0x1e4a),
    (0x074e1, 0x3966), (0x074e2, 0x2623), (0x074e3, 0x28bc), (0x074e4, 0x29ef), (0x074e5, 0x494c), (0x074e6, 0x167d),
    (0x074e8, 0x2ecb), (0x074e9, 0x145d), (0x074ec, 0x304b), (0x074ee, 0x304c), (0x074f4, 0x3209), (0x074f5, 0x320a),
    (0x074f6, 0x1e4b), (0x074f7, 0x1e4c), (0x074fb, 0x36de), (0x074fd, 0x3969), (0x074fe, 0x3968), (0x074ff, 0x3967),
    (0x07500, 0x3bf0), (0x07502, 0x3bf1), (0x07503, 0x3bf2), (0x07504, 0x2355), (0x07507, 0x3e3c), (0x07508, 0x3e3b),
    (0x0750b, 0x408e), (0x0750c, 0x2624), (0x0750d, 0x2625), (0x0750e, 0x4cf0), (0x0750f, 0x426e), (0x07510, 0x426b),
    (0x07511, 0x426c), (0x07512, 0x426d), (0x07513, 0x441c), (0x07514, 0x441b), (0x07515, 0x2819), (0x07516, 0x4584),
    (0x07517, 0x47a0), (0x07518, 0x167e), (0x0751a, 0x1ac3), (0x0751c, 0x1e4d), (0x0751d, 0x396a), (0x0751e, 0x4cf2),
    (0x0751f, 0x167f), (0x07521, 0x320b), (0x07522, 0x1e4e), (0x07525, 0x2007), (0x07526, 0x2008), (0x07528, 0x1680),
    (0x07529, 0x1681), (0x0752a, 0x2ccb), (0x0752b, 0x1815), (0x0752c, 0x1814), (0x0752d, 0x1ac4), (0x0752e, 0x304d),
    (0x0752f, 0x36df), (0x07530, 0x1682), (0x07531, 0x1683), (0x07532, 0x1684), (0x07533, 0x1685), (0x07537, 0x1816),
    (0x07538, 0x1817), (0x07539, 0x2d90), (0x0753a, 0x2d8f), (0x0753d, 0x1979), (0x0753e, 0x2ece), (0x0753f, 0x2ecc),
    (0x07540, 0x2ecd), (0x07547, 0x304e), (0x07548, 0x304f), (0x0754a, 0x4cf9), (0x0754b, 0x1ac8), (0x0754c, 0x1ac6),
    (0x0754d, 0x4cf8), (0x0754e, 0x1ac7), (0x0754f, 0x1ac5), (0x07554, 0x1c56), (0x07559, 0x1c5a), (0x0755a, 0x1c59),
    (0x0755b, 0x320c), (0x0755c, 0x1c58), (0x0755d, 0x1c57), (0x0755f, 0x320d), (0x07562, 0x1e51), (0x07563, 0x345c),
    (0x07564, 0x345b), (0x07565, 0x1e4f), (0x07566, 0x1e50), (0x07567, 0x4cfa), (0x0756a, 0x200a), (0x0756b, 0x2009),
    (0x0756c, 0x36e1), (0x0756e, 0x4cfb), (0x0756f, 0x36e0), (0x07570, 0x1e52), (0x07576, 0x21a9), (0x07577, 0x396c),
    (0x07578, 0x21aa), (0x07579, 0x396b), (0x0757d, 0x3bf3), (0x0757e, 0x3e3d), (0x0757f, 0x24ce), (0x07580, 0x408f),
    (0x07584, 0x426f), (0x07586, 0x28be), (0x07587, 0x28bd), (0x0758a, 0x29f0), (0x0758b, 0x1686), (0x0758c, 0x2ecf),
    (0x0758e, 0x4cff), (0x0758f, 0x1e53), (0x07590, 0x3bf4), (0x07591, 0x2356), (0x07592, 0x2ac3), (0x07594, 0x2d91),
    (0x07595, 0x2d92), (0x07598, 0x2ed0), (0x07599, 0x197b), (0x0759a, 0x197c), (0x0759d, 0x197a), (0x0759e, 0x4d01),
    (0x075a2, 0x1acc), (0x075a3, 0x1acd), (0x075a4, 0x1aca), (0x075a5, 0x1acb), (0x075a7, 0x3050), (0x075aa, 0x3051),
    (0x075ab, 0x1ac9), (0x075b0, 0x320e), (0x075b2, 0x1c5e), (0x075b3, 0x1c5f), (0x075b4, 0x4d02), (0x075b5, 0x1e56),
    (0x075b6, 0x3214), (0x075b8, 0x1c64), (0x075b9, 0x1c62), (0x075ba, 0x3215), (0x075bb, 0x3210), (0x075bc, 0x1c61),
    (0x075bd, 0x1c60), (0x075be, 0x1c5b), (0x075bf, 0x3213), (0x075c0, 0x3212), (0x075c1, 0x320f), (0x075c2, 0x1c63),
    (0x075c4, 0x3211), (0x075c5, 0x1c5c), (0x075c7, 0x1c5d), (0x075ca, 0x1e57), (0x075cb, 0x3460), (0x075cc, 0x3461),
    (0x075cd, 0x1e58), (0x075ce, 0x345d), (0x075cf, 0x345f), (0x075d0, 0x3463), (0x075d1, 0x3462), (0x075d2, 0x345e),
    (0x075d4, 0x1e54), (0x075d5, 0x1e55), (0x075d7, 0x36e9), (0x075d8, 0x200f), (0x075d9, 0x200e), (0x075da, 0x36e3),
    (0x075db, 0x200c), (0x075dd, 0x36e6), (0x075de, 0x2010), (0x075df, 0x36e7), (0x075e0, 0x2011), (0x075e1, 0x36e4),
    (0x075e2, 0x200b), (0x075e3, 0x200d), (0x075e4, 0x36e8), (0x075e6, 0x36e5), (0x075e7, 0x36e2), (0x075ed, 0x3979),
    (0x075ef, 0x396e), (0x075f0, 0x21ac), (0x075f1, 0x21af), (0x075f2, 0x21ae), (0x075f3, 0x21b3), (0x075f4, 0x21b2),
    (0x075f5, 0x397a), (0x075f6, 0x3978), (0x075f7, 0x3971), (0x075f8, 0x3975), (0x075f9, 0x3974), (0x075fa, 0x21b0),
    (0x075fb, 0x3977), (0x075fc, 0x3973), (0x075fd, 0x397b), (0x075fe, 0x3972), (0x075ff, 0x21b1), (0x07600, 0x21ab),
    (0x07601, 0x21ad), (0x07602, 0x4d03), (0x07603, 0x3970), (0x07608, 0x3bf6), (0x07609, 0x235a), (0x0760a, 0x3bfa),
    (0x0760b, 0x2359), (0x0760c, 0x3bf7), (0x0760d, 0x2358), (0x0760f, 0x396f), (0x07610, 0x3976), (0x07611, 0x3bf9),
    (0x07613, 0x235b), (0x07614, 0x3bfb), (0x07615, 0x3bf8), (0x07616, 0x3bf5), (0x07619, 0x3e40), (0x0761a, 0x3e44),
    (0x0761b, 0x3e46), (0x0761c, 0x3e42), (0x0761d, 0x3e41), (0x0761e, 0x3e3f), (0x0761f, 0x24d1), (0x07620, 0x24cf),
    (0x07621, 0x24d4), (0x07622, 0x24d5), (0x07623, 0x3e43), (0x07624, 0x24d2), (0x07625, 0x3e3e), (0x07626, 0x24d3),
    (0x07627, 0x2357), (0x07628, 0x3e45), (0x07629, 0x24d0), (0x0762c, 0x4d04), (0x0762d, 0x4091), (0x0762f, 0x4090),
    (0x07630, 0x4098), (0x07631, 0x4092), (0x07632, 0x4097), (0x07633, 0x4094), (0x07634, 0x2626), (0x07635, 0x4096),
    (0x07638, 0x2627), (0x0763a, 0x2628), (0x0763c, 0x4095), (0x0763d, 0x4093), (0x07642, 0x2739), (0x07643, 0x4270),
    (0x07646, 0x2738), (0x07647, 0x4273), (0x07648, 0x4271), (0x07649, 0x4272), (0x0764c, 0x273a), (0x0764f, 0x4d06),
    (0x07650, 0x4420), (0x07651, 0x4d05), (0x07652, 0x281c), (0x07653, 0x4421), (0x07656, 0x281a), (0x07657, 0x4422),
    (0x07658, 0x281b), (0x07659, 0x441f), (0x0765a, 0x4423), (0x0765c, 0x441d), (0x0765f, 0x28bf), (0x07660, 0x4585),
    (0x07661, 0x28c0), (0x07662, 0x2946), (0x07664, 0x441e), (0x07665, 0x2947), (0x07669, 0x29a3), (0x0766a, 0x47a1),
    (0x0766c, 0x29f2), (0x0766d, 0x4853), (0x0766e, 0x29f1), (0x0766f, 0x4d07), (0x07670, 0x48e6), (0x07671, 0x2a47),
    (0x07672, 0x2a48), (0x07675, 0x4a02), (0x07676, 0x4d08), (0x07678, 0x1ace), (0x07679, 0x3052), (0x0767b, 0x2012),
    (0x0767c, 0x2013), (0x0767d, 0x1687), (0x0767e, 0x1719), (0x0767f, 0x2ccc), (0x07681, 0x2d93), (0x07682, 0x1818),
    (0x07684, 0x197d), (0x07686, 0x1acf), (0x07687, 0x1ad0), (0x07688, 0x1ad1), (0x07689, 0x3465), (0x0768a, 0x3216),
    (0x0768b, 0x1c65), (0x0768e, 0x1e59), (0x0768f, 0x3464), (0x07690, 0x4d0a), (0x07692, 0x36eb), (0x07693, 0x2015),
    (0x07695, 0x36ea), (0x07696, 0x2014), (0x07699, 0x397c), (0x0769a, 0x24d6), (0x0769b, 0x3e4a), (0x0769c, 0x3e47),
    (0x0769d, 0x3e48), (0x0769e, 0x3e49), (0x076a1, 0x4d0f), (0x076a4, 0x4274), (0x076a5, 0x4d10), (0x076a6, 0x4424),
    (0x076aa, 0x46b8), (0x076ab, 0x46b7), (0x076ad, 0x4854), (0x076ae, 0x1688), (0x076af, 0x2ed1), (0x076b0, 0x1c66),
    (0x076b4, 0x2016), (0x076b5, 0x397d), (0x076b7, 0x4d11), (0x076b8, 0x3bfc), (0x076ba, 0x24d7), (0x076bb, 0x4099),
    (0x076bd, 0x4425), (0x076be, 0x46b9), (0x076bf, 0x1689), (0x076c2, 0x197e), (0x076c3, 0x1ad4), (0x076c4, 0x3053),
    (0x076c5, 0x1ad5), (0x076c6, 0x1ad3), (0x076c8, 0x1ad2), (0x076c9, 0x3217), (0x076ca, 0x1c67), (0x076cc, 0x4d12),
    (0x076cd, 0x1c68), (0x076ce, 0x1c69), (0x076d2, 0x1e5b), (0x076d3, 0x3466), (0x076d4, 0x1e5a), (0x076da, 0x36ec),
    (0x076db, 0x1e5c), (0x076dc, 0x2017), (0x076dd, 0x397e), (0x076de, 0x21b4), (0x076df, 0x21b5), (0x076e1, 0x235c),
    (0x076e3, 0x235d), (0x076e4, 0x24d8), (0x076e5, 0x262a), (0x076e6, 0x409a), (0x076e7, 0x2629), (0x076e9, 0x4275),
    (0x076ea, 0x273b), (0x076ec, 0x4426), (0x076ed, 0x46ba), (0x076ee, 0x168a), (0x076ef, 0x1819), (0x076f0, 0x2ed4),
    (0x076f1, 0x2ed3), (0x076f2, 0x197f), (0x076f3, 0x2ed2), (0x076f4, 0x1980), (0x076f5, 0x2ed5), (0x076f7, 0x3059),
    (0x076f8, 0x1ad8), (0x076f9, 0x1ad7), (0x076fa, 0x305b), (0x076fb, 0x305a), (0x076fc, 0x1adc), (0x076fe, 0x1adb),
    (0x07701, 0x1ad6), (0x07703, 0x3055), (0x07704, 0x3056), (0x07705, 0x3057), (0x07707, 0x1add), (0x07708, 0x3054),
    (0x07709, 0x1ad9), (0x0770a, 0x3058), (0x0770b, 0x1ada), (0x07710, 0x321a), (0x07711, 0x321e), (0x07712, 0x321c),
    (0x07713, 0x321b), (0x07715, 0x321f), (0x07719, 0x3220), (0x0771a, 0x3221), (0x0771b, 0x3219), (0x0771d, 0x3218),
    (0x0771e, 0x4d18), (0x0771f, 0x1c6b), (0x07720, 0x1c6c), (0x07722, 0x3222), (0x07723, 0x321d), (0x07725, 0x346f),
    (0x07726, 0x4d19), (0x07727, 0x3223), (0x07728, 0x1c6d), (0x07729, 0x1c6a), (0x0772d, 0x3469), (0x0772f, 0x3468),
    (0x07731, 0x346a), (0x07732, 0x346b), (0x07733, 0x346d), (0x07734, 0x346c), (0x07735, 0x3471), (0x07736, 0x1e60),
    (0x07737, 0x1e5d), (0x07738, 0x1e61), (0x07739, 0x3467), (0x0773a, 0x1e62), (0x0773b, 0x3470), (0x0773c, 0x1e5f),
    (0x0773d, 0x346e), (0x0773e, 0x1e5e), (0x07740, 0x4d1a), (0x07744, 0x36ef), (0x07745, 0x36f1), (0x07746, 0x36ed),
    (0x07747, 0x36ee), (0x0774a, 0x36f2), (0x0774b, 0x36f4), (0x0774c, 0x36f5), (0x0774d, 0x36f0), (0x0774e, 0x36f3),
    (0x0774f, 0x2018), (0x07752, 0x3982), (0x07754, 0x3987), (0x07755, 0x397f), (0x07756, 0x3983), (0x07758, 0x4d1d),
    (0x07759, 0x3988), (0x0775a, 0x3984), (0x0775b, 0x21b6), (0x0775c, 0x21be), (0x0775e, 0x21b9), (0x0775f, 0x3980),
    (0x07760, 0x3981), (0x07761, 0x2361), (0x07762, 0x21c1), (0x07763, 0x21ba), (0x07765, 0x21bf), (0x07766, 0x21b8),
    (0x07767, 0x3986), (0x07768, 0x21c0), (0x07769, 0x3985), (0x0776a, 0x21bc), (0x0776b, 0x21b7), (0x0776c, 0x21bd),
    (0x0776d, 0x3989), (0x0776e, 0x3c01), (0x0776f, 0x3c03), (0x07779, 0x21bb), (0x0777c, 0x3bfe), (0x0777d, 0x235f),
    (0x0777e, 0x3c04), (0x0777f, 0x2360), (0x07780, 0x3c02), (0x07781, 0x3bfd), (0x07782, 0x3c00), (0x07783, 0x3c05),
    (0x07784, 0x235e), (0x07785, 0x3bff), (0x07787, 0x24da), (0x07788, 0x3e4e), (0x07789, 0x3e4d), (0x0778b, 0x24dd),
    (0x0778c, 0x24db), (0x0778d, 0x3e4b), (0x0778e, 0x24d9), (0x0778f, 0x3e4c), (0x07791, 0x24dc), (0x07795, 0x40a2),
    (0x07797, 0x40a4), (0x07799, 0x40a3), (0x0779a, 0x409b), (0x0779b, 0x409f), (0x0779c, 0x409e), (0x0779d, 0x409c),
    (0x0779e, 0x262c), (0x0779f, 0x262d), (0x077a0, 0x262b), (0x077a1, 0x409d), (0x077a2, 0x40a0), (0x077a3, 0x40a1),
    (0x077a5, 0x262e), (0x077a7, 0x2740), (0x077a8, 0x427d), (0x077aa, 0x273d), (0x077ab, 0x4277), (0x077ac, 0x273f),
    (0x077ad, 0x2741), (0x077af, 0x4d1f), (0x077b0, 0x273e), (0x077b1, 0x427c), (0x077b2, 0x4278), (0x077b3, 0x273c),
    (0x077b4, 0x427b), (0x077b5, 0x4276), (0x077b6, 0x427a), (0x077b7, 0x4279), (0x077ba, 0x4428), (0x077bb, 0x281f),
    (0x077bc, 0x2820), (0x077bd, 0x281d), (0x077bf, 0x281e), (0x077c2, 0x4427), (0x077c4, 0x4588), (0x077c5, 0x4bf5),
    (0x077c7, 0x28c1), (0x077c9, 0x4586), (0x077ca, 0x4587), (0x077cc, 0x46bb), (0x077cd, 0x46be), (0x077ce, 0x46bc),
    (0x077cf, 0x46bd), (0x077d0, 0x47a2), (0x077d3, 0x29a4), (0x077d4, 0x48e7), (0x077d5, 0x494d), (0x077d7, 0x2a49),
    (0x077d8, 0x4991), (0x077d9, 0x4992), (0x077da, 0x2a77), (0x077db, 0x168b), (0x077dc, 0x1ade), (0x077de, 0x36f6),
    (0x077e0, 0x398a), (0x077e2, 0x168c), (0x077e3, 0x181a), (0x077e5, 0x1981), (0x077e6, 0x4aab), (0x077e7, 0x305c),
    (0x077e8, 0x305d), (0x077e9, 0x1c6e), (0x077ec, 0x36f7), (0x077ed, 0x2019), (0x077ee, 0x21c2), (0x077ef, 0x2742),
    (0x077f0, 0x427e), (0x077f1, 0x4589), (0x077f2, 0x46bf), (0x077f3, 0x168d), (0x077f4, 0x4d23), (0x077f7, 0x2edb),
    (0x077f8, 0x2ed6), (0x077f9, 0x2ed8), (0x077fa, 0x2eda), (0x077fb, 0x2ed9), (0x077fc, 0x2ed7), (0x077fd, 0x1982),
    (0x07802, 0x1adf), (0x07803, 0x3066), (0x07805, 0x3061), (0x07806, 0x305e), (0x07809, 0x3065), (0x0780c, 0x1ae1),
    (0x0780d, 0x1ae2), (0x0780e, 0x3064), (0x0780f, 0x3063), (0x07810, 0x3062), (0x07811, 0x305f), (0x07812, 0x3060),
    (0x07813, 0x3067), (0x07814, 0x1ae0), (0x0781d, 0x1c72), (0x0781f, 0x1c78), (0x07820, 0x1c77), (0x07821, 0x322c),
    (0x07822, 0x3226), (0x07823, 0x3224), (0x07825, 0x1c75), (0x07826, 0x3478), (0x07827, 0x1c70), (0x07828, 0x3229),
    (0x07829, 0x322d), (0x0782a, 0x322f), (0x0782b, 0x322b), (0x0782c, 0x3225), (0x0782d, 0x1c76), (0x0782e, 0x322a),
    (0x0782f, 0x3228), (0x07830, 0x1c6f), (0x07831, 0x3230), (0x07832, 0x1c79), (0x07833, 0x322e), (0x07834, 0x1c73),
    (0x07835, 0x3227), (0x07837, 0x1c74), (0x07838, 0x1c71), (0x0783c, 0x4a44), (0x07843, 0x1e64), (0x07845, 0x3479),
    (0x07848, 0x3472), (0x07849, 0x3474), (0x0784a, 0x3476), (0x0784c, 0x3477), (0x0784d, 0x3475), (0x0784e, 0x1e65),
    (0x07850, 0x347a), (0x07852, 0x3473), (0x0785c, 0x36fb), (0x0785d, 0x201a), (0x0785e, 0x3703), (0x07860, 0x36f8),
    (0x07862, 0x3704), (0x07864, 0x36f9), (0x07865, 0x36fa), (0x07868, 0x3702), (0x07869, 0x3701), (0x0786a, 0x36fe),
    (0x0786b, 0x1e63), (0x0786c, 0x201b), (0x0786d, 0x36fc), (0x0786e, 0x36ff), (0x0786f, 0x201c), (0x07870, 0x3700),
    (0x07871, 0x36fd), (0x07879, 0x3995), (0x0787b, 0x3999), (0x0787c, 0x21c9), (0x0787e, 0x3c0b), (0x0787f, 0x21cc),
    (0x07880, 0x3997), (0x07881, 0x4a0c), (0x07883, 0x3994), (0x07884, 0x398f), (0x07885, 0x3991), (0x07886, 0x3992),
    (0x07887, 0x398b), (0x07889, 0x21c8), (0x0788c, 0x21c7), (0x0788e, 0x21c3), (0x0788f, 0x398e), (0x07891, 0x21ca),
    (0x07893, 0x21cb), (0x07894, 0x398d), (0x07895, 0x3990), (0x07896, 0x3998), (0x07897, 0x21c5), (0x07898, 0x21c6),
    (0x07899, 0x3996), (0x0789a, 0x398c), (0x0789e, 0x3c0d), (0x0789f, 0x2363), (0x078a0, 0x3c0f), (0x078a1, 0x3993),
    (0x078a2, 0x3c11), (0x078a3, 0x2367), (0x078a4, 0x3c12), (0x078a5, 0x3c0e), (0x078a7, 0x2364), (0x078a8, 0x3c0a),
    (0x078a9, 0x2366), (0x078aa, 0x3c07), (0x078ab, 0x3c0c), (0x078ac, 0x3c10), (0x078ad, 0x3c09), (0x078af, 0x4d28),
    (0x078b0, 0x21c4), (0x078b1, 0x4d30), (0x078b2, 0x3c06), (0x078b3, 0x2365), (0x078b4, 0x3c08), (0x078ba, 0x24e0),
    (0x078bb, 0x3e50), (0x078bc, 0x24e4), (0x078be, 0x24e2), (0x078c1, 0x2362), (0x078c3, 0x3e57), (0x078c4, 0x3e58),
    (0x078c5, 0x24df), (0x078c7, 0x4d29), (0x078c8, 0x3e56), (0x078c9, 0x3e59), (0x078ca, 0x24e1), (0x078cb, 0x24de),
    (0x078cc, 0x3e52), (0x078cd, 0x3e4f), (0x078ce, 0x3e54), (0x078cf, 0x3e51), (0x078d0, 0x24e5), (0x078d1, 0x3e53),
    (0x078d3, 0x4d2a), (0x078d4, 0x3e55), (0x078d5, 0x24e3), (0x078d7, 0x4d2e), (0x078da, 0x2630), (0x078db, 0x40ab),
    (0x078dd, 0x40a5), (0x078de, 0x40a9), (0x078df, 0x40af), (0x078e0, 0x40b0), (0x078e1, 0x40ac), (0x078e2, 0x40ad),
    (0x078e3, 0x40aa), (0x078e5, 0x40a7), (0x078e7, 0x2632), (0x078e8, 0x262f), (0x078e9, 0x40a6), (0x078ea, 0x40a8),
    (0x078ec, 0x2631), (0x078ed, 0x40ae), (0x078ef, 0x2746), (0x078f1, 0x4ae8), (0x078f2, 0x4284), (0x078f3, 0x427f),
    (0x078f4, 0x2745), (0x078f7, 0x2743), (0x078f9, 0x4286), (0x078fa, 0x2744), (0x078fb, 0x4282), (0x078fc, 0x4283),
    (0x078fd, 0x4280), (0x078fe, 0x4287), (0x078ff, 0x4429), (0x07901, 0x2747), (0x07902, 0x4281), (0x07904, 0x4288),
    (0x07905, 0x4285), (0x07909, 0x442d), (0x0790c, 0x442a), (0x0790e, 0x2821), (0x07910, 0x442e), (0x07911, 0x4430),
    (0x07912, 0x442f), (0x07913, 0x442b), (0x07914, 0x442c), (0x07917, 0x458e), (0x07919, 0x28c2), (0x0791b, 0x458b),
    (0x0791c, 0x458d), (0x0791d, 0x458a), (0x0791e, 0x458f), (0x07921, 0x458c), (0x07923, 0x46c1), (0x07924, 0x46c4),
    (0x07925, 0x46c0), (0x07926, 0x2948), (0x07927, 0x46c2), (0x07928, 0x46c3), (0x07929, 0x46c5), (0x0792a, 0x2949),
    (0x0792b, 0x294b), (0x0792c, 0x294a), (0x0792d, 0x47a3), (0x0792e, 0x4d2c), (0x0792f, 0x47a5), (0x07931, 0x47a4),
    (0x07934, 0x4d2f), (0x07935, 0x4855), (0x07938, 0x494e), (0x07939, 0x4993), (0x0793a, 0x168e), (0x0793c, 0x4d3e),
    (0x0793d, 0x2d94), (0x0793e, 0x1983), (0x0793f, 0x2edd), (0x07940, 0x1984), (0x07941, 0x1985), (0x07942, 0x2edc),
    (0x07944, 0x306c), (0x07945, 0x306b), (0x07946, 0x1ae3), (0x07947, 0x1ae6), (0x07948, 0x1ae5), (0x07949, 0x1ae4),
    (0x0794a, 0x3068), (0x0794b, 0x306a), (0x0794c, 0x3069), (0x0794f, 0x3233), (0x07950, 0x1c7b), (0x07951, 0x3237),
    (0x07952, 0x3236), (0x07953, 0x3235), (0x07954, 0x3231), (0x07955, 0x1c7a), (0x07956, 0x1c7e), (0x07957, 0x1c81),
    (0x0795a, 0x1c82), (0x0795b, 0x3232), (0x0795c, 0x3234), (0x0795d, 0x1c80), (0x0795e, 0x1c7f), (0x0795f, 0x1c7d),
    (0x07960, 0x1c7c), (0x07961, 0x3481), (0x07963, 0x347f), (0x07964, 0x347b), (0x07965, 0x1e66), (0x07967, 0x347c),
    (0x07968, 0x1e67), (0x07969, 0x347d), (0x0796a, 0x347e), (0x0796b, 0x3480), (0x0796d, 0x1e68), (0x07970, 0x3708),
    (0x07971, 0x4b98), (0x07972, 0x3707), (0x07973, 0x3706), (0x07974, 0x3705), (0x07979, 0x399d), (0x0797a, 0x21cd),
    (0x0797c, 0x399a), (0x0797d, 0x399c), (0x0797f, 0x21ce), (0x07980, 0x4d3a), (0x07981, 0x21cf), (0x07982, 0x399b),
    (0x07986, 0x4d37), (0x07988, 0x3c1b), (0x0798a, 0x3c14), (0x0798b, 0x3c15), (0x0798d, 0x236a), (0x0798e, 0x2368),
    (0x0798f, 0x2369), (0x07990, 0x3c1d), (0x07992, 0x3c1c), (0x07993, 0x3c19), (0x07994, 0x3c18), (0x07995, 0x3c17),
    (0x07996, 0x3c16), (0x07997, 0x3c1a), (0x07998, 0x3c13), (0x0799a, 0x3e5a), (0x0799b, 0x3e5f), (0x0799c, 0x3e5d),
    (0x0799d, 0x4d3c), (0x079a0, 0x3e5c), (0x079a1, 0x3e5b), (0x079a2, 0x3e5e), (0x079a4, 0x40b1), (0x079a6, 0x2633),
    (0x079a7, 0x2748), (0x079a8, 0x428a), (0x079a9, 0x4d3f), (0x079aa, 0x2749), (0x079ab, 0x4289), (0x079ac, 0x4432),
    (0x079ad, 0x4431), (0x079ae, 0x2822), (0x079b0, 0x4590), (0x079b1, 0x28c3), (0x079b2, 0x46c6), (0x079b3, 0x29f3),
    (0x079b4, 0x4856), (0x079b6, 0x4950), (0x079b7, 0x494f), (0x079b8, 0x2c6e), (0x079b9, 0x1ae7), (0x079ba, 0x1ae8),
    (0x079bb, 0x3482), (0x079bd, 0x21d1), (0x079be, 0x168f), (0x079bf, 0x181d), (0x079c0, 0x181c), (0x079c1, 0x181b),
    (0x079c5, 0x2ede), (0x079c6, 0x4d43), (0x079c8, 0x1987), (0x079c9, 0x1986), (0x079cb, 0x1aeb), (0x079cc, 0x4c69),
    (0x079cd, 0x306e), (0x079ce, 0x3071), (0x079cf, 0x306f), (0x079d1, 0x1ae9), (0x079d2, 0x1aea), (0x079d4, 0x4d45),
    (0x079d5, 0x306d), (0x079d6, 0x3070), (0x079d8, 0x1c89), (0x079dc, 0x323e), (0x079dd, 0x3240), (0x079de, 0x323f),
    (0x079df, 0x1c86), (0x079e0, 0x323a), (0x079e3, 0x1c84), (0x079e4, 0x1c83), (0x079e6, 0x1c87), (0x079e7, 0x1c85),
    (0x079e9, 0x1c88), (0x079ea, 0x323d), (0x079eb, 0x3238), (0x079ec, 0x3239), (0x079ed, 0x323c), (0x079ee, 0x323b),
    (0x079f6, 0x3485), (0x079f7, 0x3486), (0x079f8, 0x3484), (0x079fa, 0x3483), (0x079fb, 0x1e69), (0x07a00, 0x2021),
    (0x07a02, 0x3709), (0x07a03, 0x370b), (0x07a04, 0x370d), (0x07a05, 0x2020), (0x07a08, 0x201e), (0x07a0a, 0x370a),
    (0x07a0b, 0x201f), (0x07a0c, 0x370c), (0x07a0d, 0x201d), (0x07a10, 0x39a7), (0x07a11, 0x399e), (0x07a12, 0x39a1),
    (0x07a13, 0x39a5), (0x07a14, 0x21d5), (0x07a15, 0x39a3), (0x07a17, 0x39a2), (0x07a18, 0x399f), (0x07a19, 0x39a0),
    (0x07a1a, 0x21d3), (0x07a1b, 0x39a6), (0x07a1c, 0x21d2), (0x07a1e, 0x21d7), (0x07a1f, 0x21d6), (0x07a20, 0x21d4),
    (0x07a22, 0x39a4), (0x07a26, 0x3c23), (0x07a28, 0x3c22), (0x07a2b, 0x3c1e), (0x07a2e, 0x236b), (0x07a2f, 0x3c21),
    (0x07a30, 0x3c20), (0x07a31, 0x236c), (0x07a37, 0x24ea), (0x07a39, 0x3e61), (0x07a3b, 0x24eb), (0x07a3c, 0x24e7),
    (0x07a3d, 0x24e9), (0x07a3f, 0x24e6), (0x07a40, 0x24e8), (0x07a44, 0x40b2), (0x07a46, 0x2636), (0x07a47, 0x40b4),
    (0x07a48, 0x40b3), (0x07a4a, 0x3c1f), (0x07a4b, 0x2638), (0x07a4c, 0x2637), (0x07a4d, 0x2634), (0x07a4e, 0x2635),
    (0x07a54, 0x428f), (0x07a56, 0x428d), (0x07a57, 0x274a), (0x07a58, 0x428e), (0x07a5a, 0x4290), (0x07a5b, 0x428c),
    (0x07a5c, 0x428b), (0x07a5f, 0x4433), (0x07a60, 0x2825), (0x07a61, 0x2823), (0x07a62, 0x2824), (0x07a67, 0x4591),
    (0x07a68, 0x4592), (0x07a69, 0x28c5), (0x07a6b, 0x28c4), (0x07a6c, 0x46c8), (0x07a6d, 0x46c9), (0x07a6e, 0x46c7),
    (0x07a70, 0x4857), (0x07a71, 0x4858), (0x07a74, 0x1690), (0x07a75, 0x2ccd), (0x07a76, 0x181e), (0x07a78, 0x2edf),
    (0x07a79, 0x1989), (0x07a7a, 0x1988), (0x07a7b, 0x2ee0), (0x07a7e, 0x3073), (0x07a7f, 0x1aec), (0x07a80, 0x3072),
    (0x07a81, 0x1aed), (0x07a84, 0x1c8a), (0x07a85, 0x3243), (0x07a86, 0x3241), (0x07a87, 0x3247), (0x07a88, 0x1c8b),
    (0x07a89, 0x3242), (0x07a8a, 0x3246), (0x07a8b, 0x3244), (0x07a8c, 0x3245), (0x07a8f, 0x3487), (0x07a90, 0x3489),
    (0x07a92, 0x1e6a), (0x07a94, 0x3488), (0x07a95, 0x1e6b), (0x07a96, 0x2024), (0x07a97, 0x2023), (0x07a98, 0x2022),
    (0x07a99, 0x370e), (0x07a9e, 0x39aa), (0x07a9f, 0x21d8), (0x07aa0, 0x21d9), (0x07aa2, 0x39a9), (0x07aa3, 0x39a8),
    (0x07aa8, 0x3c24), (0x07aa9, 0x236e), (0x07aaa, 0x236d), (0x07aab, 0x3c25), (0x07aac, 0x3c26), (0x07aae, 0x24ed),
    (0x07aaf, 0x24ec), (0x07ab1, 0x40b8), (0x07ab2, 0x3e62), (0x07ab3, 0x3e64), (0x07ab4, 0x3e63), (0x07ab5, 0x40b7),
    (0x07ab6, 0x40b5), (0x07ab7, 0x40b9), (0x07ab8, 0x40b6), (0x07aba, 0x2639), (0x07abe, 0x4291), (0x07abf, 0x274b),
    (0x07ac0, 0x4292), (0x07ac1, 0x4293), (0x07ac4, 0x2826), (0x07ac5, 0x2827), (0x07ac7, 0x294c), (0x07aca, 0x2a23),
    (0x07acb, 0x1691), (0x07ad1, 0x3074), (0x07ad8, 0x3248), (0x07ad9, 0x1c8c), (0x07adf, 0x1f02), (0x07ae0, 0x1f01),
    (0x07ae3, 0x2026), (0x07ae4, 0x3710), (0x07ae5, 0x2025), (0x07ae6, 0x370f), (0x07aeb, 0x39ab), (0x07aed, 0x236f),
    (0x07aee, 0x3c27), (0x07aef, 0x2370), (0x07af6, 0x294d), (0x07af7, 0x46ca), (0x07af9, 0x171a), (0x07afa, 0x198a),
    (0x07afb, 0x2ee1), (0x07afd, 0x1aef), (0x07aff, 0x1aee), (0x07b00, 0x3075), (0x07b01, 0x3076), (0x07b04, 0x324a),
    (0x07b05, 0x324c), (0x07b06, 0x1c8d), (0x07b08, 0x324e), (0x07b09, 0x3251), (0x07b0a, 0x324f), (0x07b0e, 0x3250),
    (0x07b0f, 0x324d), (0x07b10, 0x3249), (0x07b11, 0x1c8e), (0x07b12, 0x3252), (0x07b13, 0x324b), (0x07b18, 0x3492),
    (0x07b19, 0x1e71), (0x07b1a, 0x349b), (0x07b1b, 0x1e6e), (0x07b1d, 0x3494), (0x07b1e, 0x1e72), (0x07b20, 0x1e6c),
    (0x07b22, 0x348f), (0x07b23, 0x349c), (0x07b24, 0x3490), (0x07b25, 0x348d), (0x07b26, 0x1e70), (0x07b28, 0x1e6d),
    (0x07b2a, 0x3493), (0x07b2b, 0x3496), (0x07b2c, 0x1e6f), (0x07b2d, 0x3497), (0x07b2e, 0x1e73), (0x07b2f, 0x3498),
    (0x07b30, 0x348e), (0x07b31, 0x3495), (0x07b32, 0x3499), (0x07b33, 0x3491), (0x07b34, 0x348c), (0x07b35, 0x348a),
    (0x07b38, 0x349a), (0x07b3b, 0x3712), (0x07b40, 0x3717), (0x07b44, 0x3713), (0x07b45, 0x3719), (0x07b46, 0x2029),
    (0x07b47, 0x348b), (0x07b48, 0x3714), (0x07b49, 0x2027), (0x07b4a, 0x3711), (0x07b4b, 0x202e), (0x07b4c, 0x3715),
    (0x07b4d, 0x202d), (0x07b4e, 0x3716), (0x07b4f, 0x202f), (0x07b50, 0x202a), (0x07b51, 0x2030), (0x07b52, 0x202b),
    (0x07b54, 0x202c), (0x07b56, 0x2028), (0x07b58, 0x3718), (0x07b60, 0x21dc), (0x07b61, 0x39b6), (0x07b63, 0x39b9),
    (0x07b64, 0x39ad), (0x07b65, 0x39b2), (0x07b66, 0x39ac), (0x07b67, 0x21de), (0x07b69, 0x39b0), (0x07b6d, 0x39ae),
    (0x07b6e, 0x21dd), (0x07b70, 0x39b5), (0x07b71, 0x39b4), (0x07b72, 0x39b1), (0x07b73, 0x39b3), (0x07b74, 0x39af),
    (0x07b75, 0x2374), (0x07b76, 0x39b8), (0x07b77, 0x21da), (0x07b78, 0x39b7), (0x07b82, 0x3c37), (0x07b84, 0x237b),
    (0x07b85, 0x3c32), (0x07b87, 0x237a), (0x07b88, 0x3c28), (0x07b8a, 0x3c2a), (0x07b8b, 0x2373), (0x07b8c, 0x3c2f),
    (0x07b8d, 0x3c2e), (0x07b8e, 0x3c31), (0x07b8f, 0x2378), (0x07b90, 0x3c2c), (0x07b91, 0x3c2b), (0x07b94, 0x2377),
    (0x07b95, 0x2372), (0x07b96, 0x3c2d), (0x07b97, 0x2375), (0x07b98, 0x3c33), (0x07b99, 0x3c35), (0x07b9b, 0x3c30),
    (0x07b9c, 0x3c29), (0x07b9d, 0x2376), (0x07ba0, 0x24f5), (0x07ba1, 0x2371), (0x07ba4, 0x3c36), (0x07bac, 0x3e68),
    (0x07bad, 0x24ee), (0x07baf, 0x3e6a), (0x07bb1, 0x24ef), (0x07bb4, 0x24f1), (0x07bb5, 0x3e6d), (0x07bb7, 0x3e65),
    (0x07bb8, 0x2379), (0x07bb9, 0x3e6b), (0x07bbe, 0x3e67), (0x07bc0, 0x21db), (0x07bc1, 0x24f4), (0x07bc4, 0x24f0),
    (0x07bc6, 0x24f2), (0x07bc7, 0x24f3), (0x07bc9, 0x263c), (0x07bca, 0x3e6c), (0x07bcb, 0x3e66), (0x07bcc, 0x24f6),
    (0x07bce, 0x3e69), (0x07bd4, 0x40c3), (0x07bd5, 0x40be), (0x07bd8, 0x40c8), (0x07bd9, 0x263a), (0x07bda, 0x40c0),
    (0x07bdb, 0x263e), (0x07bdc, 0x40c6), (0x07bdd, 0x40bd), (0x07bde, 0x40ba), (0x07bdf, 0x40c9), (0x07be0, 0x2751),
    (0x07be1, 0x263f), (0x07be2, 0x40c5), (0x07be3, 0x40bb), (0x07be4, 0x263d), (0x07be5, 0x40bf), (0x07be6, 0x2641),
    (0x07be7, 0x40bc), (0x07be8, 0x40c1), (0x07be9, 0x2640), (0x07bea, 0x40c4), (0x07beb, 0x40c7), (0x07bf0, 0x42a5),
    (0x07bf1, 0x42a6), (0x07bf2, 0x4296), (0x07bf3, 0x429d), (0x07bf4, 0x429b), (0x07bf7, 0x274f), (0x07bf8, 0x42a2),
    (0x07bf9, 0x40c2), (0x07bfb, 0x4299), (0x07bfd, 0x42a3), (0x07bfe, 0x274e), (0x07bff, 0x4298), (0x07c00, 0x4297),
    (0x07c01, 0x42a1), (0x07c02, 0x429e), (0x07c03, 0x42a0), (0x07c05, 0x4294), (0x07c06, 0x42a4), (0x07c07, 0x274c),
    (0x07c09, 0x429f), (0x07c0a, 0x42a8), (0x07c0b, 0x429c), (0x07c0c, 0x2750), (0x07c0d, 0x274d), (0x07c0e, 0x429a),
    (0x07c0f, 0x4295), (0x07c10, 0x42a7), (0x07c11, 0x263b), (0x07c15, 0x4a8b), (0x07c19, 0x4436), (0x07c1c, 0x4434),
    (0x07c1d, 0x443a), (0x07c1e, 0x282b), (0x07c1f, 0x4438), (0x07c20, 0x4437), (0x07c21, 0x282d), (0x07c22, 0x443d),
    (0x07c23, 0x282c), (0x07c25, 0x443e), (0x07c26, 0x443b), (0x07c27, 0x2829), (0x07c28, 0x443c), (0x07c29, 0x4435),
    (0x07c2a, 0x282a), (0x07c2b, 0x2828), (0x07c2c, 0x4596), (0x07c2d, 0x4439), (0x07c30, 0x443f), (0x07c33, 0x4593),
    (0x07c37, 0x28ca), (0x07c38, 0x28c8), (0x07c39, 0x4595), (0x07c3b, 0x4597), (0x07c3c, 0x4594), (0x07c3d, 0x28c9),
    (0x07c3e, 0x28c6), (0x07c3f, 0x28c7), (0x07c40, 0x28cb), (0x07c43, 0x294f), (0x07c45, 0x46cf), (0x07c47, 0x46ce),
    (0x07c48, 0x46cc), (0x07c49, 0x46cb), (0x07c4a, 0x46cd), (0x07c4c, 0x294e), (0x07c4d, 0x2950), (0x07c50, 0x29a5),
    (0x07c53, 0x47a7), (0x07c54, 0x47a6), (0x07c57, 0x4859), (0x07c59, 0x485b), (0x07c5a, 0x485d), (0x07c5b, 0x485c),
    (0x07c5c, 0x485a), (0x07c5f, 0x29f5), (0x07c60, 0x29f4), (0x07c63, 0x2a25), (0x07c64, 0x2a24), (0x07c65, 0x2a26),
    (0x07c66, 0x48e9), (0x07c67, 0x48e8), (0x07c69, 0x4994), (0x07c6a, 0x4951), (0x07c6b, 0x4995), (0x07c6c, 0x2a69),
    (0x07c6e, 0x2a6a), (0x07c6f, 0x49c5), (0x07c72, 0x2a8f), (0x07c73, 0x171b), (0x07c75, 0x2ee2), (0x07c78, 0x3078),
    (0x07c79, 0x3079), (0x07c7a, 0x3077), (0x07c7d, 0x1af0), (0x07c7f, 0x307a), (0x07c80, 0x307b), (0x07c81, 0x307c),
    (0x07c84, 0x3253), (0x07c85, 0x3259), (0x07c88, 0x3257), (0x07c89, 0x1c8f), (0x07c8a, 0x3255), (0x07c8c, 0x3256),
    (0x07c8d, 0x3258), (0x07c91, 0x3254), (0x07c92, 0x1e74), (0x07c94, 0x349d), (0x07c95, 0x1e76), (0x07c96, 0x349f),
    (0x07c97, 0x1e75), (0x07c98, 0x349e), (0x07c9e, 0x371b), (0x07c9f, 0x2031), (0x07ca1, 0x371d), (0x07ca2, 0x371a),
    (0x07ca3, 0x34a0), (0x07ca5, 0x2032), (0x07ca7, 0x4a11), (0x07ca8, 0x371c), (0x07caf, 0x39bc), (0x07cb1, 0x21df),
    (0x07cb2, 0x39ba), (0x07cb3, 0x21e0), (0x07cb4, 0x39bb), (0x07cb5, 0x21e1), (0x07cb9, 0x237c), (0x07cba, 0x3c3b),
    (0x07cbb, 0x3c38), (0x07cbc, 0x3c3a), (0x07cbd, 0x237d), (0x07cbe, 0x237e), (0x07cbf, 0x3c39), (0x07cc5, 0x3e6e),
    (0x07cc8, 0x3e6f), (0x07cca, 0x24f7), (0x07ccb, 0x3e71), (0x07ccc, 0x3e70), (0x07cce, 0x145e), (0x07cd0, 0x40cd),
    (0x07cd1, 0x40ce), (0x07cd2, 0x40ca), (0x07cd4, 0x40cb), (0x07cd5, 0x2642), (0x07cd6, 0x2643), (0x07cd7, 0x40cc),
    (0x07cd9, 0x2757), (0x07cdc, 0x2753), (0x07cdd, 0x2758), (0x07cde, 0x2754), (0x07cdf, 0x2756), (0x07ce0, 0x2752),
    (0x07ce2, 0x2755), (0x07ce7, 0x282e), (0x07ce8, 0x42a9), (0x07cea, 0x4599), (0x07cec, 0x4598), (0x07cee, 0x46d0),
    (0x07cef, 0x2951), (0x07cf0, 0x2952), (0x07cf1, 0x485f), (0x07cf2, 0x47a8), (0x07cf4, 0x485e), (0x07cf6, 0x4996),
    (0x07cf7, 0x49da), (0x07cf8, 0x171c), (0x07cfb, 0x181f), (0x07cfd, 0x2ee3), (0x07cfe, 0x198b), (0x07d00, 0x1af3),
    (0x07d01, 0x307f), (0x07d02, 0x1af1), (0x07d03, 0x307d), (0x07d04, 0x1af6), (0x07d05, 0x1af2), (0x07d06, 0x1af7),
    (0x07d07, 0x1af5), (0x07d08, 0x307e), (0x07d09, 0x1af4), (0x07d0a, 0x1c93), (0x07d0b, 0x1c92), (0x07d0c, 0x3264),
    (0x07d0d, 0x1c9b), (0x07d0e, 0x325d), (0x07d0f, 0x3263), (0x07d10, 0x1c97), (0x07d11, 0x325c), (0x07d12, 0x3262),
    (0x07d13, 0x3260), (0x07d14, 0x1c96), (0x07d15, 0x1c98), (0x07d16, 0x325f), (0x07d17, 0x1c91), (0x07d18, 0x325e),
    (0x07d19, 0x1c9c), (0x07d1a, 0x1c99), (0x07d1b, 0x1c9d), (0x07d1c, 0x1c9a), (0x07d1d, 0x325b), (0x07d1e, 0x325a),
    (0x07d1f, 0x3261), (0x07d20, 0x1c94), (0x07d21, 0x1c90), (0x07d22, 0x1c95), (0x07d28, 0x34af), (0x07d29, 0x34a8),
    (0x07d2b, 0x2037), (0x07d2c, 0x34a7), (0x07d2e, 0x1e7a), (0x07d2f, 0x1e81), (0x07d30, 0x1e7e), (0x07d31, 0x1e84),
    (0x07d32, 0x1e83), (0x07d33, 0x1e7f), (0x07d35, 0x34a1), (0x07d36, 0x34a4), (0x07d38, 0x34a3), (0x07d39, 0x1e7b),
    (0x07d3a, 0x34a5), (0x07d3b, 0x34ae), (0x07d3c, 0x1e7c), (0x07d3d, 0x34a2), (0x07d3e, 0x34ab), (0x07d3f, 0x34ac),
    (0x07d40, 0x1e7d), (0x07d41, 0x34a9), (0x07d42, 0x1e82), (0x07d43, 0x1e78), (0x07d44, 0x1e80), (0x07d45, 0x34a6),
    (0x07d46, 0x1e77), (0x07d47, 0x34aa), (0x07d4a, 0x34ad), (0x07d4e, 0x372e), (0x07d4f, 0x3725), (0x07d50, 0x2034),
    (0x07d51, 0x372c), (0x07d52, 0x3729), (0x07d53, 0x3721), (0x07d54, 0x372a), (0x07d55, 0x2036), (0x07d56, 0x3722),
    (0x07d58, 0x371e), (0x07d5b, 0x21e7), (0x07d5c, 0x3727), (0x07d5e, 0x2033), (0x07d5f, 0x372d), (0x07d61, 0x203a),
    (0x07d62, 0x203c), (0x07d63, 0x3720), (0x07d66, 0x203b), (0x07d67, 0x3723), (0x07d68, 0x2035), (0x07d69, 0x372b),
    (0x07d6a, 0x3724), (0x07d6b, 0x3728), (0x07d6d, 0x3726), (0x07d6e, 0x2038), (0x07d6f, 0x371f), (0x07d70, 0x203d),
    (0x07d71, 0x1e79), (0x07d72, 0x2039), (0x07d73, 0x203e), (0x07d79, 0x21e3), (0x07d7a, 0x39c3), (0x07d7b, 0x39c5),
    (0x07d7c, 0x39c7), (0x07d7d, 0x39cb), (0x07d7f, 0x39c1), (0x07d80, 0x39bf), (0x07d81, 0x21e5), (0x07d83, 0x39c6),
    (0x07d84, 0x39ca), (0x07d85, 0x39c2), (0x07d86, 0x39be), (0x07d88, 0x39bd), (0x07d8c, 0x39c8), (0x07d8d, 0x39c0),
    (0x07d8e, 0x39c4), (0x07d8f, 0x21e6), (0x07d91, 0x21e4), (0x07d92, 0x39cc), (0x07d93, 0x21e2), (0x07d94, 0x39c9),
    (0x07d96, 0x3c4c), (0x07d9c, 0x2381), (0x07d9d, 0x3c44), (0x07d9e, 0x2504), (0x07d9f, 0x3c4e), (0x07da0, 0x2384),
    (0x07da1, 0x3c52), (0x07da2, 0x238a), (0x07da3, 0x3c3f), (0x07da6, 0x3c4f), (0x07da7, 0x3c3c), (0x07da9, 0x3c51),
    (0x07daa, 0x3c40), (0x07dac, 0x2391), (0x07dad, 0x238e), (0x07dae, 0x3c50), (0x07daf, 0x3c4a), (0x07db0, 0x2380),
    (0x07db1, 0x2388), (0x07db2, 0x2387), (0x07db4, 0x2386), (0x07db5, 0x238c), (0x07db7, 0x3c3d), (0x07db8, 0x238d),
    (0x07db9, 0x3c4b), (0x07dba, 0x2389), (0x07dbb, 0x237f), (0x07dbc, 0x3c4d), (0x07dbd, 0x2382), (0x07dbe, 0x2383),
    (0x07dbf, 0x238b), (0x07dc0, 0x3c42), (0x07dc1, 0x3c41), (0x07dc2, 0x3c3e), (0x07dc4, 0x3c46), (0x07dc5, 0x3c43),
    (0x07dc6, 0x3c47), (0x07dc7, 0x2390), (0x07dc9, 0x3c53), (0x07dca, 0x2385), (0x07dcb, 0x3c48), (0x07dcc, 0x3c49),
    (0x07dce, 0x3c45), (0x07dd2, 0x238f), (0x07dd7, 0x3e76), (0x07dd8, 0x24fc), (0x07dd9, 0x2505), (0x07dda, 0x2501),
    (0x07ddb, 0x3e73), (0x07ddd, 0x24fe), (0x07dde, 0x2502), (0x07ddf, 0x3e7f), (0x07de0, 0x24f8), (0x07de1, 0x3e77),
    (0x07de3, 0x2500), (0x07de6, 0x3e7a), (0x07de7, 0x3e75), (0x07de8, 0x24ff), (0x07de9, 0x2503), (0x07dea, 0x3e74),
    (0x07dec, 0x24fd), (0x07dee, 0x3e7e), (0x07def, 0x24fa), (0x07df0, 0x3e7d), (0x07df1, 0x3e7c), (0x07df2, 0x2506),
    (0x07df3, 0x3d86), (0x07df4, 0x24f9), (0x07df6, 0x3e7b), (0x07df7, 0x3e72), (0x07df9, 0x2507), (0x07dfa, 0x3e79),
    (0x07dfb, 0x24fb), (0x07e03, 0x3e78), (0x07e08, 0x2646), (0x07e09, 0x264b), (0x07e0a, 0x2644), (0x07e0b, 0x40db),
    (0x07e0c, 0x40d2), (0x07e0d, 0x40de), (0x07e0e, 0x40d6), (0x07e0f, 0x40dc), (0x07e10, 0x264c), (0x07e11, 0x2645),
    (0x07e12, 0x40cf), (0x07e13, 0x40d5), (0x07e14, 0x40df), (0x07e15, 0x40d8), (0x07e16, 0x40dd), (0x07e17, 0x40d1),
    (0x07e1a, 0x40d9), (0x07e1b, 0x2647), (0x07e1c, 0x40d7), (0x07e1d, 0x264a), (0x07e1e, 0x2649), (0x07e1f, 0x40d3),
    (0x07e20, 0x40d4), (0x07e21, 0x40d0), (0x07e22, 0x40da), (0x07e23, 0x2648), (0x07e24, 0x40e1), (0x07e25, 0x40e0),
    (0x07e29, 0x42b4), (0x07e2a, 0x42b0), (0x07e2b, 0x275f), (0x07e2d, 0x42aa), (0x07e2e, 0x2759), (0x07e2f, 0x2769),
    (0x07e30, 0x42b6), (0x07e31, 0x2761), (0x07e32, 0x275d), (0x07e33, 0x42ad), (0x07e34, 0x2764), (0x07e35, 0x2767),
    (0x07e36, 0x42b8), (0x07e37, 0x275c), (0x07e38, 0x42af), (0x07e39, 0x2765), (0x07e3a, 0x42ba), (0x07e3b, 0x42b7),
    (0x07e3c, 0x42ab), (0x07e3d, 0x2760), (0x07e3e, 0x275a), (0x07e3f, 0x2768), (0x07e40, 0x42b2), (0x07e41, 0x2763),
    (0x07e42, 0x42ac), (0x07e43, 0x275e), (0x07e44, 0x42b9), (0x07e45, 0x2762), (0x07e46, 0x275b), (0x07e47, 0x42b3),
    (0x07e48, 0x2766), (0x07e49, 0x42b1), (0x07e4c, 0x42b5), (0x07e50, 0x4441), (0x07e51, 0x4447), (0x07e52, 0x2834),
    (0x07e53, 0x444a), (0x07e54, 0x282f), (0x07e55, 0x2830), (0x07e56, 0x4442), (0x07e57, 0x4449), (0x07e58, 0x4444),
    (0x07e59, 0x2835), (0x07e5a, 0x2832), (0x07e5c, 0x4440), (0x07e5e, 0x2831), (0x07e5f, 0x4446), (0x07e60, 0x4448),
    (0x07e61, 0x2833), (0x07e62, 0x4445), (0x07e63, 0x4443), (0x07e68, 0x45a3), (0x07e69, 0x28cf), (0x07e6a, 0x28d0),
    (0x07e6b, 0x28cc), (0x07e6d, 0x28cd), (0x07e6f, 0x459f), (0x07e70, 0x459d), (0x07e72, 0x45a1), (0x07e73, 0x28d2),
    (0x07e74, 0x45a2), (0x07e75, 0x459b), (0x07e76, 0x459a), (0x07e77, 0x459e), (0x07e78, 0x459c), (0x07e79, 0x28ce),
    (0x07e7a, 0x45a0), (0x07e7b, 0x46d1), (0x07e7c, 0x2955), (0x07e7d, 0x2954), (0x07e7e, 0x46d2), (0x07e80, 0x46d4),
    (0x07e81, 0x46d3), (0x07e82, 0x2956), (0x07e86, 0x47ad), (0x07e87, 0x47aa), (0x07e88, 0x47ab), (0x07e8a, 0x47a9),
    (0x07e8b, 0x47ac), (0x07e8c, 0x29a7), (0x07e8d, 0x47ae), (0x07e8f, 0x29a6), (0x07e91, 0x4860), (0x07e93, 0x2a27),
    (0x07e94, 0x2a29), (0x07e95, 0x48ea), (0x07e96, 0x2a28), (0x07e97, 0x4952), (0x07e98, 0x4998), (0x07e99, 0x499a),
    (0x07e9a, 0x4997), (0x07e9b, 0x4999), (0x07e9c, 0x2a7d), (0x07f36, 0x171d), (0x07f38, 0x1af8), (0x07f39, 0x31dc),
    (0x07f3a, 0x1c9e), (0x07f3d, 0x1e85), (0x07f3e, 0x372f), (0x07f3f, 0x3730), (0x07f43, 0x40e2), (0x07f44, 0x276a),
    (0x07f45, 0x42bb), (0x07f48, 0x2836), (0x07f4a, 0x45a5), (0x07f4b, 0x45a4), (0x07f4c, 0x2957), (0x07f4d, 0x47af),
    (0x07f4f, 0x4861), (0x07f50, 0x2a4a), (0x07f51, 0x2cce), (0x07f54, 0x198c), (0x07f55, 0x1820), (0x07f58, 0x3080),
    (0x07f5b, 0x326a), (0x07f5c, 0x3265), (0x07f5d, 0x3269), (0x07f5e, 0x3267), (0x07f5f, 0x1c9f), (0x07f60, 0x3268),
    (0x07f61, 0x3266), (0x07f63, 0x34b0), (0x07f65, 0x3731), (0x07f66, 0x3732), (0x07f67, 0x39cf), (0x07f68, 0x39d0),
    (0x07f69, 0x21e9), (0x07f6a, 0x21ea), (0x07f6b, 0x39ce), (0x07f6c, 0x39d1), (0x07f6d, 0x39cd), (0x07f6e, 0x21e8),
    (0x07f70, 0x2392), (0x07f72, 0x21eb), (0x07f73, 0x3c54), (0x07f75, 0x2508), (0x07f76, 0x3e80), (0x07f77, 0x2509),
    (0x07f79, 0x264d), (0x07f7a, 0x40e5), (0x07f7b, 0x40e3), (0x07f7c, 0x40e4), (0x07f7d, 0x42be), (0x07f7e, 0x42bd),
    (0x07f7f, 0x42bc), (0x07f83, 0x45a6), (0x07f85, 0x28d1), (0x07f86, 0x45a7), (0x07f87, 0x4862), (0x07f88, 0x2a4b),
    (0x07f89, 0x4953), (0x07f8a, 0x171e), (0x07f8b, 0x198e), (0x07f8c, 0x198d), (0x07f8d, 0x3082), (0x07f8e, 0x1af9),
    (0x07f8f, 0x4c52), (0x07f91, 0x3081), (0x07f92, 0x326c), (0x07f94, 0x1ca0), (0x07f95, 0x34b1), (0x07f96, 0x326b),
    (0x07f9a, 0x1e87), (0x07f9b, 0x34b4), (0x07f9c, 0x34b2), (0x07f9d, 0x34b3), (0x07f9e, 0x1e86), (0x07fa0, 0x3734),
    (0x07fa1, 0x3735), (0x07fa2, 0x3733), (0x07fa4, 0x21ee), (0x07fa5, 0x39d3), (0x07fa6, 0x39d2), (0x07fa7, 0x39d4),
    (0x07fa8, 0x21ed), (0x07fa9, 0x21ec), (0x07fac, 0x3e81), (0x07fad, 0x3e83), (0x07faf, 0x250a), (0x07fb0, 0x3e82),
    (0x07fb1, 0x40e6), (0x07fb2, 0x264e), (0x07fb3, 0x444c), (0x07fb5, 0x444b), (0x07fb6, 0x28d3), (0x07fb7, 0x45a8),
    (0x07fb8, 0x28d5), (0x07fb9, 0x28d4), (0x07fba, 0x46d5), (0x07fbb, 0x47b0), (0x07fbc, 0x29a8), (0x07fbd, 0x171f),
    (0x07fbe, 0x3083), (0x07fbf, 0x1afa), (0x07fc0, 0x326f), (0x07fc1, 0x1ca2), (0x07fc2, 0x326e), (0x07fc3, 0x326d),
    (0x07fc5, 0x1ca1), (0x07fc7, 0x34ba), (0x07fc9, 0x34bc), (0x07fca, 0x34b5), (0x07fcb, 0x34b6), (0x07fcc, 0x1e88),
    (0x07fcd, 0x34b7), (0x07fce, 0x1e89), (0x07fcf, 0x34bb), (0x07fd0, 0x34b8), (0x07fd1, 0x34b9), (0x07fd2, 0x1e8a),
    (0x07fd4, 0x2040), (0x07fd5, 0x2041), (0x07fd7, 0x3736), (0x07fdb, 0x39d5), (0x07fdc, 0x39d6), (0x07fde, 0x3c58),
    (0x07fdf, 0x2395), (0x07fe0, 0x2393), (0x07fe1, 0x2394), (0x07fe2, 0x3c55), (0x07fe3, 0x3c56), (0x07fe5, 0x3c57),
    (0x07fe6, 0x3e88), (0x07fe8, 0x3e89), (0x07fe9, 0x250b), (0x07fea, 0x3e86), (0x07feb, 0x3e85), (0x07fec, 0x3e87),
    (0x07fed, 0x3e84), (0x07fee, 0x2651), (0x07fef, 0x40e7), (0x07ff0, 0x264f), (0x07ff1, 0x2650), (0x07ff2, 0x42c0),
    (0x07ff3, 0x276b), (0x07ff4, 0x42bf), (0x07ff5, 0x43bc), (0x07ff7, 0x444d), (0x07ff8, 0x444e), (0x07ff9, 0x2837),
    (0x07ffb, 0x2838), (0x07ffc, 0x276c), (0x07ffd, 0x45a9), (0x07ffe, 0x45aa), (0x07fff, 0x46d6), (0x08000, 0x2958),
    (0x08001, 0x1720), (0x08003, 0x1721), (0x08004, 0x1afb), (0x08005, 0x198f), (0x08006, 0x1ca3), (0x08007, 0x3084),
    (0x0800b, 0x2042), (0x0800c, 0x1722), (0x0800d, 0x1afd), (0x0800e, 0x3085), (0x0800f, 0x3086), (0x08010, 0x1afc),
    (0x08011, 0x1afe), (0x08012, 0x1723), (0x08014, 0x3087), (0x08015, 0x1ca5), (0x08016, 0x3270), (0x08017, 0x1ca7),
    (0x08018, 0x1ca4), (0x08019, 0x1ca6), (0x0801b, 0x34bf), (0x0801c, 0x1e8b), (0x0801e, 0x34be), (0x0801f, 0x34bd),
    (0x08021, 0x39d7), (0x08024, 0x3c59), (0x08026, 0x250c), (0x08028, 0x2652), (0x08029, 0x40e9), (0x0802a, 0x40e8),
    (0x0802c, 0x42c1), (0x08030, 0x47b1), (0x08033, 0x1724), (0x08034, 0x2d95), (0x08035, 0x2ee4), (0x08036, 0x1aff),
    (0x08037, 0x3088), (0x08039, 0x3272), (0x0803d, 0x1ca8), (0x0803e, 0x3271), (0x0803f, 0x1ca9), (0x08043, 0x34c1),
    (0x08046, 0x1e8d), (0x08047, 0x34c0), (0x08048, 0x34c2), (0x0804a, 0x1e8c), (0x0804f, 0x3738), (0x08050, 0x3739),
    (0x08051, 0x3737), (0x08052, 0x2043), (0x08056, 0x21ef), (0x08058, 0x21f0), (0x0805a, 0x2397), (0x0805c, 0x3c5b),
    (0x0805d, 0x3c5a), (0x0805e, 0x2396), (0x08064, 0x3e8a), (0x08067, 0x3e8b), (0x0806c, 0x40ea), (0x0806f, 0x2770),
    (0x08070, 0x276f), (0x08071, 0x276d), (0x08072, 0x276e), (0x08073, 0x2771), (0x08075, 0x444f), (0x08076, 0x283a),
    (0x08077, 0x2839), (0x08078, 0x45ab), (0x08079, 0x46d7), (0x0807d, 0x29f7), (0x0807e, 0x29f6), (0x0807f, 0x1725),
    (0x08082, 0x31a9), (0x08084, 0x21f2), (0x08085, 0x2044), (0x08086, 0x21f1), (0x08087, 0x2398), (0x08089, 0x1726),
    (0x0808a, 0x2c6f), (0x0808b, 0x1727), (0x0808c, 0x1728), (0x0808f, 0x2ee5), (0x08090, 0x2d98), (0x08092, 0x2d99),
    (0x08093, 0x1822), (0x08095, 0x2d96), (0x08096, 0x1821), (0x08098, 0x1824), (0x08099, 0x2d97), (0x0809a, 0x1826),
    (0x0809b, 0x1825), (0x0809c, 0x2d9a), (0x0809d, 0x1823), (0x080a1, 0x1994), (0x080a2, 0x1992), (0x080a3, 0x2ee7),
    (0x080a5, 0x1991), (0x080a9, 0x1996), (0x080aa, 0x1998), (0x080ab, 0x1995), (0x080ad, 0x2eea), (0x080ae, 0x2ee6),
    (0x080af, 0x1999), (0x080b1, 0x1993), (0x080b2, 0x1827), (0x080b4, 0x1997), (0x080b5, 0x2ee9), (0x080b8, 0x2ee8),
    (0x080ba, 0x1990), (0x080c2, 0x308e), (0x080c3, 0x1b03), (0x080c4, 0x1b04), (0x080c5, 0x3090), (0x080c7, 0x308a),
    (0x080c8, 0x308d), (0x080c9, 0x3096), (0x080ca, 0x3094), (0x080cc, 0x1b05), (0x080cd, 0x309a), (0x080ce, 0x1b08),
    (0x080cf, 0x3097), (0x080d0, 0x308f), (0x080d1, 0x308c), (0x080d4, 0x373b), (0x080d5, 0x3095), (0x080d6, 0x1b00),
    (0x080d7, 0x3098), (0x080d8, 0x3089), (0x080d9, 0x3092), (0x080da, 0x1b02), (0x080db, 0x1b07), (0x080dc, 0x3093),
    (0x080dd, 0x1b0b), (0x080de, 0x1b09), (0x080e0, 0x308b), (0x080e1, 0x1b06), (0x080e3, 0x3091), (0x080e4, 0x1b0a),
    (0x080e5, 0x1b01), (0x080e6, 0x3099), (0x080ed, 0x1cae), (0x080ef, 0x1cb7), (0x080f0, 0x1cac), (0x080f1, 0x1caa),
    (0x080f2, 0x3274), (0x080f3, 0x1cb2), (0x080f4, 0x1caf), (0x080f5, 0x3276), (0x080f8, 0x1cb1), (0x080f9, 0x3275),
    (0x080fa, 0x3273), (0x080fb, 0x3278), (0x080fc, 0x1cb6), (0x080fd, 0x1cb4), (0x080fe, 0x373a), (0x08100, 0x3279),
    (0x08101, 0x3277), (0x08102, 0x1cab), (0x08105, 0x1cad), (0x08106, 0x1cb0), (0x08108, 0x1cb3), (0x0810a, 0x1cb5),
    (0x08115, 0x34cc), (0x08116, 0x1e8f), (0x08118, 0x34c3), (0x08119, 0x34c5), (0x0811b, 0x34c6), (0x0811d, 0x34ce),
    (0x0811e, 0x34ca), (0x0811f, 0x34c8), (0x08121, 0x34cb), (0x08122, 0x34cf), (0x08123, 0x1e90), (0x08124, 0x1e94),
    (0x08125, 0x34c4), (0x08127, 0x34cd), (0x08129, 0x1e92), (0x0812b, 0x1e91), (0x0812c, 0x34c9), (0x0812d, 0x34c7),
    (0x0812f, 0x1e8e), (0x08130, 0x1e93), (0x08139, 0x204a), (0x0813a, 0x3743), (0x0813d, 0x3741), (0x0813e, 0x204c),
    (0x08143, 0x373c), (0x08144, 0x39e5), (0x08146, 0x204b), (0x08147, 0x3740), (0x0814a, 0x373d), (0x0814b, 0x2047),
    (0x0814c, 0x204d), (0x0814d, 0x3742), (0x0814e, 0x2049), (0x0814f, 0x373f), (0x08150, 0x2399), (0x08151, 0x2048),
    (0x08152, 0x373e), (0x08153, 0x204e), (0x08154, 0x2046), (0x08155, 0x2045), (0x0815b, 0x39dd), (0x0815c, 0x39db),
    (0x0815e, 0x39e1), (0x08160, 0x39d9), (0x08161, 0x39e6), (0x08162, 0x39de), (0x08164, 0x39d8), (0x08165, 0x21f6),
    (0x08166, 0x21fc), (0x08167, 0x39e3), (0x08169, 0x39dc), (0x0816b, 0x21f9), (0x0816e, 0x21f7), (0x0816f, 0x39e4),
    (0x08170, 0x21f4), (0x08171, 0x21f3), (0x08172, 0x39df), (0x08173, 0x21f8), (0x08174, 0x204f), (0x08176, 0x39e2),
    (0x08177, 0x39da), (0x08178, 0x21f5), (0x08179, 0x21fa), (0x0817a, 0x21fb), (0x0817f, 0x239e), (0x08180, 0x239a),
    (0x08182, 0x239f), (0x08183, 0x3c5e), (0x08186, 0x3c5d), (0x08187, 0x3c5f), (0x08188, 0x239c), (0x08189, 0x3c5c),
    (0x0818a, 0x239d), (0x0818b, 0x3c62), (0x0818c, 0x3c61), (0x0818d, 0x3c60), (0x0818f, 0x239b), (0x08195, 0x3e8f),
    (0x08197, 0x3e92), (0x08198, 0x2512), (0x08199, 0x3e91), (0x0819a, 0x2511), (0x0819b, 0x250d), (0x0819c, 0x250e),
    (0x0819d, 0x250f), (0x0819e, 0x3e8e), (0x0819f, 0x3e8d), (0x081a0, 0x2510), (0x081a2, 0x3e90), (0x081a3, 0x3e8c),
    (0x081a6, 0x40ec), (0x081a7, 0x40f6), (0x081a8, 0x2655), (0x081a9, 0x2654), (0x081ab, 0x40f0), (0x081ac, 0x40f2),
    (0x081ae, 0x40ed), (0x081b0, 0x40f1), (0x081b1, 0x40eb), (0x081b2, 0x40f4), (0x081b3, 0x2653), (0x081b4, 0x40f3),
    (0x081b5, 0x40ef), (0x081b7, 0x40f5), (0x081b9, 0x40ee), (0x081ba, 0x2774), (0x081bb, 0x42c2), (0x081bc, 0x42c8),
    (0x081bd, 0x2778), (0x081be, 0x277a), (0x081bf, 0x2777), (0x081c0, 0x2776), (0x081c2, 0x2775), (0x081c3, 0x2773),
    (0x081c4, 0x42c3), (0x081c5, 0x42c6), (0x081c6, 0x2772), (0x081c7, 0x42c7), (0x081c9, 0x2779), (0x081ca, 0x42c5),
    (0x081cc, 0x42c4), (0x081cd, 0x283b), (0x081cf, 0x283c), (0x081d0, 0x4452), (0x081d1, 0x4450), (0x081d2, 0x4451),
    (0x081d5, 0x45ad), (0x081d7, 0x45ac), (0x081d8, 0x28d6), (0x081d9, 0x46d9), (0x081da, 0x2959), (0x081db, 0x46d8),
    (0x081dd, 0x47b2), (0x081de, 0x4863), (0x081df, 0x29f8), (0x081e0, 0x499b), (0x081e1, 0x499c), (0x081e2, 0x2a2a),
    (0x081e3, 0x1729), (0x081e5, 0x199a), (0x081e6, 0x3744), (0x081e7, 0x23a0), (0x081e8, 0x277b), (0x081e9, 0x42c9),
    (0x081ea, 0x172a), (0x081ec, 0x1cb9), (0x081ed, 0x1cb8), (0x081ee, 0x3745), (0x081ef, 0x4d0b), (0x081f2, 0x40f7),
    (0x081f3, 0x172b), (0x081f4, 0x1b0c), (0x081f7, 0x3746), (0x081f8, 0x3747), (0x081f9, 0x3748), (0x081fa, 0x23a1),
    (0x081fb, 0x2656), (0x081fc, 0x172c), (0x081fe, 0x199b), (0x081ff, 0x309b), (0x08200, 0x1cba), (0x08201, 0x327a),
    (0x08202, 0x1e95), (0x08204, 0x3749), (0x08205, 0x21fd), (0x08207, 0x23a2), (0x08208, 0x2657), (0x08209, 0x277c),
    (0x0820a, 0x283d), (0x0820b, 0x46da), (0x0820c, 0x172d), (0x0820d, 0x199c), (0x08210, 0x1cbb), (0x08211, 0x34d0),
    (0x08212, 0x2050), (0x08214, 0x23a3), (0x08215, 0x3c63), (0x08216, 0x3e93), (0x0821b, 0x172e), (0x0821c, 0x2051),
    (0x0821d, 0x39e7), (0x0821e, 0x23a4), (0x0821f, 0x172f), (0x08220, 0x2eeb), (0x08221, 0x309c), (0x08222, 0x1b0d),
    (0x08225, 0x327c), (0x08226, 0x4c43), (0x08228, 0x1cbe), (0x0822a, 0x1cbc), (0x0822b, 0x1cbd), (0x0822c, 0x1cbf),
    (0x0822f, 0x327b), (0x08232, 0x34d5), (0x08233, 0x34d2), (0x08234, 0x34d4), (0x08235, 0x1e96), (0x08236, 0x1e98),
    (0x08237, 0x1e97), (0x08238, 0x34d1), (0x08239, 0x1e99), (0x0823a, 0x34d3), (0x0823c, 0x374a), (0x0823d, 0x374b),
    (0x0823f, 0x374c), (0x08240, 0x39ea), (0x08242, 0x39eb), (0x08244, 0x39e9), (0x08245, 0x39ec), (0x08247, 0x21fe),
    (0x08249, 0x39e8), (0x0824b, 0x23a5), (0x0824e, 0x3e98), (0x0824f, 0x3e94), (0x08250, 0x3e97), (0x08251, 0x3e99),
    (0x08252, 0x3e96), (0x08253, 0x3e95), (0x08255, 0x40f8), (0x08256, 0x40f9), (0x08257, 0x40fa), (0x08258, 0x2658),
    (0x08259, 0x2659), (0x0825a, 0x42cb), (0x0825b, 0x42ca), (0x0825c, 0x42cc), (0x0825e, 0x4454), (0x0825f, 0x4453),
    (0x08261, 0x45af), (0x08263, 0x45b0), (0x08264, 0x45ae), (0x08266, 0x295a), (0x08268, 0x46db), (0x08269, 0x46dc),
    (0x0826b, 0x4864), (0x0826c, 0x48eb), (0x0826d, 0x4954), (0x0826e, 0x1730), (0x0826f, 0x1828), (0x08271, 0x277d),
    (0x08272, 0x1731), (0x08274, 0x34d6), (0x08275, 0x374d), (0x08277, 0x2a52), (0x08278, 0x2ccf), (0x0827c, 0x2cd0),
    (0x0827d, 0x2cd2), (0x0827e, 0x1732), (0x0827f, 0x2cd3), (0x08280, 0x2cd1), (0x08283, 0x2da2), (0x08284, 0x2da3),
    (0x08285, 0x2d9d), (0x08287, 0x4b5e), (0x0828a, 0x2da1), (0x0828b, 0x182a), (0x0828d, 0x182b), (0x0828e, 0x2d9e),
    (0x0828f, 0x2d9c), (0x08290, 0x2d9b), (0x08291, 0x2d9f), (0x08292, 0x1829), (0x08293, 0x2da0), (0x08294, 0x309d),
    (0x08298, 0x2ef0), (0x08299, 0x199f), (0x0829a, 0x2eef), (0x0829b, 0x2ef1), (0x0829d, 0x199e), (0x0829e, 0x2ef6),
    (0x0829f, 0x19a2), (0x082a0, 0x2eec), (0x082a1, 0x2efa), (0x082a2, 0x2f00), (0x082a3, 0x19a9), (0x082a4, 0x2efd),
    (0x082a5, 0x19a6), (0x082a7, 0x2ef3), (0x082a8, 0x2ef9), (0x082a9, 0x2efb), (0x082ab, 0x2eee), (0x082ac, 0x19a5),
    (0x082ad, 0x19a0), (0x082ae, 0x2ef4), (0x082af, 0x19a7), (0x082b0, 0x19aa), (0x082b1, 0x19a4), (0x082b3, 0x199d),
    (0x082b4, 0x2ef8), (0x082b5, 0x2ef2), (0x082b6, 0x2eff), (0x082b7, 0x19ac), (0x082b8, 0x19a8), (0x082b9, 0x19a3),
    (0x082ba, 0x2ef7), (0x082bb, 0x1cc0), (0x082bc, 0x2ef5), (0x082bd, 0x19a1), (0x082be, 0x19ab), (0x082c0, 0x2eed),
    (0x082c2, 0x2efc), (0x082c3, 0x2efe), (0x082d1, 0x1b1e), (0x082d2, 0x1b18), (0x082d3, 0x1b20), (0x082d4, 0x1b1d),
    (0x082d5, 0x30a4), (0x082d6, 0x30a7), (0x082d7, 0x1b19), (0x082d9, 0x309e), (0x082db, 0x1b12), (0x082dc, 0x1b1c),
    (0x082de, 0x1b1f), (0x082df, 0x1b21), (0x082e0, 0x30b3), (0x082e1, 0x30aa), (0x082e3, 0x1b11), (0x082e4, 0x30b2),
    (0x082e5, 0x1b15), (0x082e6, 0x1b13), (0x082e7, 0x1b0e), (0x082e8, 0x30a2), (0x082ea, 0x30b1), (0x082eb, 0x30a6),
    (0x082ec, 0x30a9), (0x082ed, 0x30b6), (0x082ee, 0x4a42), (0x082ef, 0x1b22), (0x082f0, 0x30b0), (0x082f1, 0x1b1a),
    (0x082f2, 0x30ab), (0x082f3, 0x30b5), (0x082f4, 0x30a8), (0x082f5, 0x30ac), (0x082f6, 0x30af), (0x082f9, 0x30a0),
    (0x082fa, 0x30b4), (0x082fb, 0x30ae), (0x082fc, 0x4b59), (0x082fe, 0x309f), (0x08300, 0x30a3), (0x08301, 0x1b1b),
    (0x08302, 0x1b16), (0x08303, 0x1b0f), (0x08304, 0x1b14), (0x08305, 0x1b10), (0x08306, 0x1b23), (0x08307, 0x30a1),
    (0x08308, 0x328d), (0x08309, 0x1b17), (0x0830c, 0x30ad), (0x0830d, 0x2f3a), (0x08316, 0x3290), (0x08317, 0x1cce),
    (0x08319, 0x3280), (0x0831b, 0x328b), (0x0831c, 0x3287), (0x0831e, 0x329a), (0x08320, 0x3292), (0x08322, 0x3288),
    (0x08324, 0x3291), (0x08325, 0x3282), (0x08326, 0x3286), (0x08327, 0x329d), (0x08328, 0x1cd1), (0x08329, 0x3295),
    (0x0832a, 0x328c), (0x0832b, 0x1cc1), (0x0832c, 0x329b), (0x0832d, 0x327e), (0x0832f, 0x3294), (0x08331, 0x1cd0),
    (0x08332, 0x1ccb), (0x08333, 0x327d), (0x08334, 0x1cc9), (0x08335, 0x1cc8), (0x08336, 0x1ccd), (0x08337, 0x3293),
    (0x08338, 0x1cc5), (0x08339, 0x1ccc), (0x0833a, 0x30a5), (0x0833b, 0x374e), (0x0833c, 0x328e), (0x0833f, 0x3284),
    (0x08340, 0x1ccf), (0x08341, 0x3285), (0x08342, 0x3289), (0x08343, 0x1cd2), (0x08344, 0x327f), (0x08345, 0x3297),
    (0x08347, 0x3296), (0x08348, 0x329e), (0x08349, 0x1cc7), (0x0834a, 0x1cc4), (0x0834b, 0x329c), (0x0834c, 0x3298),
    (0x0834d, 0x328f), (0x0834e, 0x328a), (0x0834f, 0x1cca), (0x08350, 0x1cc6), (0x08351, 0x3281), (0x08352, 0x1cc2),
    (0x08353, 0x3299), (0x08354, 0x1cc3), (0x08356, 0x3283), (0x08363, 0x4c21), (0x08373, 0x34dc), (0x08374, 0x34de),
    (0x08375, 0x34e3), (0x08376, 0x34f7), (0x08377, 0x1ea7), (0x08378, 0x1e9d), (0x0837a, 0x34db), (0x0837b, 0x1ea8),
    (0x0837c, 0x1ea9), (0x0837d, 0x34e6), (0x0837e, 0x34ed), (0x0837f, 0x34f3), (0x08381, 0x34e0), (0x08383, 0x34e7),
    (0x08386, 0x1eaa), (0x08387, 0x34f5), (0x08388, 0x34f0), (0x08389, 0x1ea5), (0x0838a, 0x1ea3), (0x0838b, 0x34ec),
    (0x0838c, 0x34e8), (0x0838d, 0x34da), (0x0838e, 0x1e9a), (0x0838f, 0x34df), (0x08390, 0x34d7), (0x08392, 0x1ea2),
    (0x08393, 0x1ea4), (0x08394, 0x34e4), (0x08395, 0x34e1), (0x08396, 0x1e9f), (0x08397, 0x34f1), (0x08398, 0x1e9c),
    (0x08399, 0x34e2), (0x0839a, 0x34f8), (0x0839b, 0x34ea), (0x0839d, 0x34e9), (0x0839e, 0x1e9b), (0x083a0, 0x1ea6),
    (0x083a2, 0x1e9e), (0x083a3, 0x34d8), (0x083a4, 0x34dd), (0x083a5, 0x34ee), (0x083a6, 0x34f4), (0x083a7, 0x1eab),
    (0x083a8, 0x34d9), (0x083a9, 0x34e5), (0x083aa, 0x34eb), (0x083ab, 0x1ea1), (0x083ae, 0x34f6), (0x083af, 0x34ef),
    (0x083b0, 0x34f2), (0x083b9, 0x4cdf), (0x083bd, 0x1ea0), (0x083bf, 0x375e), (0x083c0, 0x3752), (0x083c1, 0x2059),
    (0x083c2, 0x376f), (0x083c3, 0x3777), (0x083c4, 0x377a), (0x083c5, 0x2057), (0x083c6, 0x375a), (0x083c7, 0x3773),
    (0x083c8, 0x375b), (0x083c9, 0x3769), (0x083ca, 0x2064), (0x083cb, 0x3765), (0x083cc, 0x2061), (0x083cd, 0x4a7f),
    (0x083ce, 0x3766), (0x083cf, 0x374f), (0x083d1, 0x3774), (0x083d4, 0x206a), (0x083d5, 0x3771), (0x083d6, 0x3767),
    (0x083d7, 0x377c), (0x083d8, 0x3762), (0x083d9, 0x3a0c), (0x083db, 0x377f), (0x083dc, 0x2068), (0x083dd, 0x3760),
    (0x083de, 0x376c), (0x083df, 0x206b), (0x083e0, 0x2056), (0x083e1, 0x3764), (0x083e2, 0x377d), (0x083e3, 0x375d),
    (0x083e4, 0x3756), (0x083e5, 0x3761), (0x083e7, 0x3755), (0x083e8, 0x3753), (0x083e9, 0x2052), (0x083ea, 0x3775),
    (0x083eb, 0x375c), (0x083ec, 0x3778), (0x083ee, 0x3779), (0x083ef, 0x205a), (0x083f0, 0x205f), (0x083f1, 0x205b),
    (0x083f2, 0x2063), (0x083f3, 0x3770), (0x083f4, 0x205c), (0x083f5, 0x3768), (0x083f6, 0x3758), (0x083f8, 0x2054),
    (0x083f9, 0x3750), (0x083fa, 0x3772), (0x083fb, 0x377b), (0x083fc, 0x3757), (0x083fd, 0x2062), (0x083fe, 0x3780),
    (0x083ff, 0x3763), (0x08401, 0x375f), (0x08403, 0x2053), (0x08404, 0x2067), (0x08406, 0x376e), (0x08407, 0x2069),
    (0x08409, 0x376a), (0x0840a, 0x205e), (0x0840b, 0x2058), (0x0840c, 0x2060), (0x0840d, 0x2055), (0x0840e, 0x2066),
    (0x0840f, 0x376b), (0x08410, 0x3759), (0x08411, 0x376d), (0x08412, 0x3754), (0x08413, 0x3776), (0x08416, 0x4a61),
    (0x0841b, 0x377e), (0x08423, 0x3751), (0x08424, 0x4ba4), (0x08429, 0x3a0b), (0x0842b, 0x3a21), (0x0842c, 0x21d0),
    (0x0842d, 0x3a10), (0x0842e, 0x4c63), (0x0842f, 0x3a0e), (0x08430, 0x39f9), (0x08431, 0x2202), (0x08432, 0x3a09),
    (0x08433, 0x3a1d), (0x08434, 0x3a05), (0x08435, 0x220a), (0x08436, 0x3a1c), (0x08437, 0x3a03), (0x08438, 0x2065),
    (0x08439, 0x3a13), (0x0843a, 0x3a04), (0x0843b, 0x3a1a), (0x0843c, 0x2209), (0x0843d, 0x2201), (0x0843f, 0x39ee),
    (0x08440, 0x39f6), (0x08442, 0x3a0f), (0x08443, 0x3a07), (0x08444, 0x3a20), (0x08445, 0x3a0a), (0x08446, 0x220f),
    (0x08447, 0x3a1b), (0x08449, 0x2206), (0x0844b, 0x3a0d), (0x0844c, 0x3a15), (0x0844d, 0x39fa), (0x0844e, 0x3a14),
    (0x08450, 0x3a25), (0x08451, 0x39f5), (0x08452, 0x3a16), (0x08454, 0x3a23), (0x08456, 0x39ef), (0x08457, 0x205d),
    (0x08459, 0x39fd), (0x0845a, 0x39fc), (0x0845b, 0x2208), (0x0845d, 0x3a00), (0x0845e, 0x3a02), (0x0845f, 0x3a11),
    (0x08460, 0x3a22), (0x08461, 0x220b), (0x08462, 0x4d14), (0x08463, 0x220c), (0x08465, 0x39f4), (0x08466, 0x2204),
    (0x08467, 0x39f8), (0x08468, 0x3a1e), (0x08469, 0x220d), (0x0846b, 0x2205), (0x0846c, 0x2207), (0x0846d, 0x220e),
    (0x0846e, 0x3a24), (0x0846f, 0x3a17), (0x08470, 0x3a12), (0x08473, 0x39ff), (0x08474, 0x39fe), (0x08475, 0x2203),
    (0x08476, 0x39f0), (0x08477, 0x2200), (0x08478, 0x3a08), (0x08479, 0x39f1), (0x0847a, 0x3a06), (0x0847d, 0x39fb),
    (0x0847e, 0x3a1f), (0x08482, 0x21ff), (0x08486, 0x39f7), (0x0848d, 0x39f3), (0x0848e, 0x3a19), (0x0848f, 0x39f2),
    (0x08490, 0x23b2), (0x08491, 0x3c8b), (0x08494, 0x3c7a), (0x08497, 0x3c64), (0x08498, 0x3c82), (0x08499, 0x23aa),
    (0x0849a, 0x3c73), (0x0849b, 0x3c7d), (0x0849c, 0x23ad), (0x0849d, 0x3c76), (0x0849e, 0x23ab), (0x0849f, 0x3c67),
    (0x084a0, 0x3c85), (0x084a1, 0x3c66), (0x084a2, 0x3c79), (0x084a4, 0x3c65), (0x084a7, 0x3c77), (0x084a8, 0x3c80),
    (0x084a9, 0x3c7e), (0x084aa, 0x3c72), (0x084ab, 0x3c6d), (0x084ac, 0x3c6b), (0x084ae, 0x3c6c), (0x084af, 0x3c7f),
    (0x084b0, 0x3c8a), (0x084b1, 0x3c74), (0x084b2, 0x23ac), (0x084b4, 0x3c6f), (0x084b6, 0x3c83), (0x084b8, 0x23af),
    (0x084b9, 0x3c6e), (0x084ba, 0x3c68), (0x084bb, 0x3c78), (0x084bc, 0x23b3), (0x084bf, 0x23a7), (0x084c0, 0x23b0),
    (0x084c1, 0x3c70), (0x084c2, 0x3c6a), (0x084c4, 0x23a9), (0x084c5, 0x3a18), (0x084c6, 0x23a8), (0x084c7, 0x3c7b),
    (0x084c9, 0x23a6), (0x084ca, 0x23b5), (0x084cb, 0x23ae), (0x084cc, 0x3c7c), (0x084cd, 0x3c71), (0x084ce, 0x3c69),
    (0x084cf, 0x3c84), (0x084d0, 0x3c75), (0x084d1, 0x23b4), (0x084d2, 0x3c88), (0x084d3, 0x23b1), (0x084d4, 0x3c87),
    (0x084d6, 0x3c81), (0x084d7, 0x3c86), (0x084db, 0x3c89), (0x084e7, 0x3ec1), (0x084e8, 0x3ec2), (0x084e9, 0x3eb5),
    (0x084ea, 0x3eb4), (0x084eb, 0x3eb0), (0x084ec, 0x251e), (0x084ee, 0x2516), (0x084ef, 0x3ec4), (0x084f0, 0x3ec3),
    (0x084f1, 0x39ed), (0x084f2, 0x3ead), (0x084f3, 0x3eb1), (0x084f4, 0x3eab), (0x084f6, 0x3ebe), (0x084f7, 0x3eaf),
    (0x084f9, 0x3ec5), (0x084fa, 0x3ea8), (0x084fb, 0x3ea6), (0x084fc, 0x3eb2), (0x084fd, 0x3ebc), (0x084fe, 0x3eb7),
    (0x084ff, 0x2520), (0x08500, 0x3e9d), (0x08502, 0x3ebb), (0x08505, 0x4b15), (0x08506, 0x2521), (0x08507, 0x3a01),
    (0x08508, 0x3ea9), (0x08509, 0x3ea0), (0x0850a, 0x3ea3), (0x0850b, 0x3ec9), (0x0850c, 0x3eaa), (0x0850d, 0x3ea1),
    (0x0850e, 0x3e9f), (0x0850f, 0x3e9c), (0x08511, 0x251a), (0x08512, 0x3eb3), (0x08513, 0x2519), (0x08514, 0x251d),
    (0x08515, 0x3eae), (0x08516, 0x3eb6), (0x08517, 0x2513), (0x08518, 0x3ec6), (0x08519, 0x3eca), (0x0851a, 0x2515),
    (0x0851c, 0x3ea5), (0x0851d, 0x3eb9), (0x0851e, 0x3ebd), (0x0851f, 0x3ea2), (0x08520, 0x3ec7), (0x08521, 0x251c),
    (0x08523, 0x251b), (0x08524, 0x3e9a), (0x08525, 0x251f), (0x08526, 0x3ec0), (0x08527, 0x3ea4), (0x08528, 0x3eb8),
    (0x08529, 0x3e9e), (0x0852a, 0x3eac), (0x0852b, 0x3ea7), (0x0852c, 0x2517), (0x0852d, 0x2518), (0x0852e, 0x3eba),
    (0x0852f, 0x3ecb), (0x08530, 0x3ec8), (0x08531, 0x3ebf), (0x08533, 0x4c5e), (0x0853b, 0x3e9b), (0x0853d, 0x2514),
    (0x0853e, 0x410b), (0x08540, 0x4102), (0x08541, 0x4105), (0x08542, 0x4a8c), (0x08543, 0x265f), (0x08544, 0x4107),
    (0x08545, 0x40fc), (0x08546, 0x4103), (0x08547, 0x4109), (0x08548, 0x265c), (0x08549, 0x2660), (0x0854a, 0x265a),
    (0x0854c, 0x4a39), (0x0854d, 0x40fe), (0x0854e, 0x410e), (0x08551, 0x4108), (0x08553, 0x40ff), (0x08554, 0x4117),
    (0x08555, 0x4111), (0x08556, 0x40fb), (0x08557, 0x42df), (0x08558, 0x4101), (0x08559, 0x265b), (0x0855b, 0x410c),
    (0x0855d, 0x4116), (0x0855e, 0x2663), (0x08560, 0x4113), (0x08561, 0x4100), (0x08562, 0x4106), (0x08563, 0x410a),
    (0x08564, 0x4104), (0x08565, 0x4118), (0x08566, 0x4115), (0x08567, 0x4112), (0x08568, 0x265d), (0x08569, 0x265e),
    (0x0856a, 0x2662), (0x0856b, 0x40fd), (0x0856c, 0x4119), (0x0856d, 0x2661), (0x0856e, 0x410f), (0x08571, 0x410d),
    (0x08575, 0x4110), (0x08576, 0x42ec), (0x08577, 0x42d9), (0x08578, 0x42de), (0x08579, 0x42eb), (0x0857a, 0x42dd),
    (0x0857b, 0x42d5), (0x0857c, 0x42da), (0x0857e, 0x2780), (0x08580, 0x42ce), (0x08581, 0x42e6), (0x08582, 0x42e8),
    (0x08583, 0x42cd), (0x08584, 0x277f), (0x08585, 0x42ea), (0x08586, 0x42e2), (0x08587, 0x2786), (0x08588, 0x42e9),
    (0x08589, 0x42db), (0x0858a, 0x2788), (0x0858b, 0x42d3), (0x0858c, 0x4114), (0x0858d, 0x42e3), (0x0858e, 0x42e0),
    (0x0858f, 0x42cf), (0x08590, 0x42ee), (0x08591, 0x2782), (0x08594, 0x2783), (0x08595, 0x42d1), (0x08596, 0x42e1),
    (0x08598, 0x42ed), (0x08599, 0x42e4), (0x0859a, 0x42d7), (0x0859b, 0x2785), (0x0859c, 0x2781), (0x0859d, 0x42e5),
    (0x0859e, 0x42d8), (0x0859f, 0x42ef), (0x085a0, 0x42d2), (0x085a1, 0x42dc), (0x085a2, 0x42e7), (0x085a3, 0x42d4),
    (0x085a4, 0x42d6), (0x085a6, 0x2846), (0x085a7, 0x42d0), (0x085a8, 0x2787), (0x085a9, 0x283f), (0x085aa, 0x277e),
    (0x085af, 0x2784), (0x085b0, 0x2843), (0x085b1, 0x4464), (0x085b3, 0x445a), (0x085b4, 0x4455), (0x085b5, 0x445b),
    (0x085b6, 0x4465), (0x085b7, 0x4469), (0x085b8, 0x4468), (0x085b9, 0x2845), (0x085ba, 0x2844), (0x085bd, 0x445c),
    (0x085be, 0x446a), (0x085bf, 0x445f), (0x085c0, 0x4457), (0x085c2, 0x4459), (0x085c3, 0x4458), (0x085c4, 0x445e),
    (0x085c5, 0x4463), (0x085c6, 0x4456), (0x085c7, 0x445d), (0x085c8, 0x4462), (0x085c9, 0x2842), (0x085cb, 0x4460),
    (0x085cd, 0x2840), (0x085ce, 0x4461), (0x085cf, 0x283e), (0x085d0, 0x2841), (0x085d1, 0x45c0), (0x085d2, 0x4466),
    (0x085d5, 0x28da), (0x085d7, 0x45b8), (0x085d8, 0x45bc), (0x085d9, 0x45b4), (0x085da, 0x45b7), (0x085dc, 0x45bf),
    (0x085dd, 0x28d8), (0x085de, 0x45c4), (0x085df, 0x45bd), (0x085e1, 0x45b5), (0x085e2, 0x45c5), (0x085e3, 0x45be),
    (0x085e4, 0x28db), (0x085e5, 0x28dc), (0x085e6, 0x45c2), (0x085e8, 0x45b6), (0x085e9, 0x28d7), (0x085ea, 0x28d9),
    (0x085eb, 0x45b1), (0x085ec, 0x45b9), (0x085ed, 0x45b3), (0x085ef, 0x45c3), (0x085f0, 0x45c1), (0x085f1, 0x45b2),
    (0x085f2, 0x45ba), (0x085f6, 0x46e3), (0x085f7, 0x28dd), (0x085f8, 0x45bb), (0x085f9, 0x295c), (0x085fa, 0x295e),
    (0x085fb, 0x295b), (0x085fd, 0x46e8), (0x085fe, 0x46e0), (0x085ff, 0x46de), (0x08600, 0x46e2), (0x08601, 0x46df),
    (0x08604, 0x46e4), (0x08605, 0x46e6), (0x08606, 0x295f), (0x08607, 0x2961), (0x08609, 0x46e5), (0x0860a, 0x2962),
    (0x0860b, 0x2960), (0x0860c, 0x46e7), (0x0860d, 0x4a8e), (0x08611, 0x295d), (0x08617, 0x29a9), (0x08618, 0x47b3),
    (0x08619, 0x47b9), (0x0861a, 0x29ab), (0x0861b, 0x46e1), (0x0861c, 0x47b8), (0x0861e, 0x47bf), (0x0861f, 0x47b6),
    (0x08620, 0x47bd), (0x08621, 0x47bc), (0x08622, 0x46dd), (0x08623, 0x47b7), (0x08624, 0x4467), (0x08625, 0x47c0),
    (0x08626, 0x47b5), (0x08627, 0x47ba), (0x08629, 0x47be), (0x0862a, 0x47b4), (0x0862c, 0x4868), (0x0862d, 0x29aa),
    (0x0862e, 0x47bb), (0x08631, 0x48f0), (0x08632, 0x4869), (0x08633, 0x4867), (0x08634, 0x4865), (0x08635, 0x4866),
    (0x08636, 0x486a), (0x08638, 0x2a2b), (0x08639, 0x48ee), (0x0863a, 0x48ec), (0x0863b, 0x48f1), (0x0863c, 0x48ef),
    (0x0863e, 0x48f2), (0x0863f, 0x2a2c), (0x08640, 0x48ed), (0x08643, 0x4955), (0x08646, 0x499d), (0x08647, 0x499e),
    (0x08648, 0x499f), (0x0864b, 0x49fd), (0x0864c, 0x49f3), (0x0864d, 0x2cd4), (0x0864e, 0x19ad), (0x08650, 0x1b24),
    (0x08652, 0x32a0), (0x08653, 0x329f), (0x08654, 0x1cd3), (0x08655, 0x1eac), (0x08656, 0x34fa), (0x08659, 0x34f9),
    (0x0865b, 0x206c), (0x0865c, 0x2211), (0x0865e, 0x2210), (0x0865f, 0x2212), (0x08661, 0x3c8c), (0x08662, 0x3ecc),
    (0x08663, 0x411a), (0x08664, 0x411c), (0x08665, 0x411b), (0x08667, 0x2789), (0x08668, 0x42f0), (0x08669, 0x446b),
    (0x0866a, 0x49db), (0x0866b, 0x1733), (0x0866d, 0x2f03), (0x0866e, 0x2f04), (0x0866f, 0x2f02), (0x08670, 0x2f01),
    (0x08671, 0x19ae), (0x08673, 0x30ba), (0x08674, 0x30b8), (0x08677, 0x30b7), (0x08679, 0x1b25), (0x0867a, 0x1b27),
    (0x0867b, 0x1b26), (0x0867c, 0x30b9), (0x08685, 0x32ac), (0x08686, 0x32a9), (0x08687, 0x32a7), (0x0868a, 0x1cd4),
    (0x0868b, 0x32aa), (0x0868c, 0x1cd9), (0x0868d, 0x32a4), (0x0868e, 0x32b3), (0x08690, 0x32b5), (0x08691, 0x32a5),
    (0x08693, 0x1cd6), (0x08694, 0x32b6), (0x08695, 0x32b1), (0x08696, 0x32a3), (0x08697, 0x32a8), (0x08698, 0x32b2),
    (0x08699, 0x32ae), (0x0869a, 0x32ab), (0x0869c, 0x1cdb), (0x0869d, 0x32b4), (0x0869e, 0x32a6), (0x086a1, 0x32af),
    (0x086a2, 0x32a1), (0x086a3, 0x1cda), (0x086a4, 0x1cd7), (0x086a5, 0x32ad), (0x086a7, 0x32b0), (0x086a8, 0x32a2),
    (0x086a9, 0x1cd8), (0x086aa, 0x1cd5), (0x086af, 0x1eb6), (0x086b0, 0x3501), (0x086b1, 0x1eb5), (0x086b3, 0x3504),
    (0x086b4, 0x3507), (0x086b5, 0x1eb2), (0x086b6, 0x1eb0), (0x086b7, 0x34fc), (0x086b8, 0x3505), (0x086b9, 0x3503),
    (0x086ba, 0x3500), (0x086bb, 0x3508), (0x086bc, 0x3509), (0x086bd, 0x350b), (0x086be, 0x350c), (0x086bf, 0x34fb),
    (0x086c0, 0x1eaf), (0x086c1, 0x34fe), (0x086c2, 0x34fd), (0x086c3, 0x350a), (0x086c4, 0x1eb1), (0x086c5, 0x34ff),
    (0x086c6, 0x1eb3), (0x086c7, 0x1eae), (0x086c8, 0x3502), (0x086c9, 0x1eb7), (0x086cb, 0x1eb4), (0x086cc, 0x3506),
    (0x086d0, 0x2073), (0x086d1, 0x378f), (0x086d3, 0x3784), (0x086d4, 0x2070), (0x086d6, 0x3a2b), (0x086d7, 0x378d),
    (0x086d8, 0x3781), (0x086d9, 0x206e), (0x086da, 0x3786), (0x086db, 0x2071), (0x086dc, 0x378a), (0x086dd, 0x3788),
    (0x086de, 0x2074), (0x086df, 0x206d), (0x086e2, 0x3782), (0x086e3, 0x3785), (0x086e4, 0x2072), (0x086e6, 0x3783),
    (0x086e8, 0x378e), (0x086e9, 0x378c), (0x086ea, 0x3787), (0x086eb, 0x3789), (0x086ec, 0x378b), (0x086ed, 0x206f),
    (0x086f5, 0x3a2c), (0x086f6, 0x3a32), (0x086f7, 0x3a28), (0x086f8, 0x3a2e), (0x086f9, 0x2213), (0x086fa, 0x3a2a),
    (0x086fb, 0x2219), (0x086fe, 0x2218), (0x08700, 0x2217), (0x08701, 0x3a31), (0x08702, 0x221a), (0x08703, 0x221b),
    (0x08704, 0x3a27), (0x08705, 0x3a34), (0x08706, 0x221c), (0x08707, 0x2216), (0x08708, 0x2215), (0x08709, 0x3a30),
    (0x0870a, 0x221d), (0x0870b, 0x3a26), (0x0870c, 0x3a29), (0x0870d, 0x3a33), (0x0870e, 0x3a2f), (0x08711, 0x3cac),
    (0x08712, 0x3ca1), (0x08713, 0x2214), (0x08718, 0x23bc), (0x08719, 0x3c95), (0x0871a, 0x3caa), (0x0871b, 0x3c96),
    (0x0871c, 0x23b7), (0x0871e, 0x3c93), (0x08720, 0x3c9c), (0x08721, 0x3c94), (0x08722, 0x23b9), (0x08723, 0x3c8e),
    (0x08724, 0x3ca9), (0x08725, 0x23ba), (0x08726, 0x3ca6), (0x08727, 0x3ca7), (0x08728, 0x3c8f), (0x08729, 0x23bf),
    (0x0872a, 0x3c9e), (0x0872c, 0x3c98), (0x0872d, 0x3c9f), (0x0872e, 0x3c92), (0x08730, 0x3cab), (0x08731, 0x3ca3),
    (0x08732, 0x3c9d), (0x08733, 0x3c8d), (0x08734, 0x23bb), (0x08735, 0x3ca4), (0x08737, 0x23be), (0x08738, 0x3ca8),
    (0x0873a, 0x3ca2), (0x0873b, 0x23b8), (0x0873c, 0x3ca0), (0x0873e, 0x3c9a), (0x0873f, 0x23b6), (0x08740, 0x3c91),
    (0x08741, 0x3c99), (0x08742, 0x3ca5), (0x08743, 0x3c97), (0x08746, 0x3c9b), (0x0874c, 0x252b), (0x0874d, 0x3a2d),
    (0x0874e, 0x3ede), (0x0874f, 0x3ee7), (0x08750, 0x3edd), (0x08751, 0x3ed9), (0x08752, 0x3ed6), (0x08753, 0x252c),
    (0x08754, 0x3ed4), (0x08755, 0x23bd), (0x08756, 0x3ecd), (0x08757, 0x252a), (0x08758, 0x3ed3), (0x08759, 0x2529),
    (0x0875a, 0x3ed8), (0x0875b, 0x3ed5), (0x0875c, 0x3ee5), (0x0875d, 0x3ee0), (0x0875e, 0x3eda), (0x0875f, 0x3edf),
    (0x08760, 0x2525), (0x08761, 0x3ed7), (0x08762, 0x3eea), (0x08763, 0x3ece), (0x08764, 0x3ecf), (0x08765, 0x3ee6),
    (0x08766, 0x2526), (0x08767, 0x3eeb), (0x08768, 0x2528), (0x08769, 0x3eec), (0x0876a, 0x3edc), (0x0876b, 0x3c90),
    (0x0876c, 0x3ee2), (0x0876d, 0x3edb), (0x0876e, 0x3ee4), (0x0876f, 0x3ee1), (0x08773, 0x3ed2), (0x08774, 0x2523),
    (0x08775, 0x3ee9), (0x08776, 0x2524), (0x08777, 0x3ed0), (0x08778, 0x2527), (0x08779, 0x4126), (0x0877a, 0x3ee3),
    (0x0877b, 0x3ee8), (0x0877d, 0x4a6f), (0x08781, 0x4123), (0x08782, 0x2522), (0x08783, 0x2664), (0x08784, 0x412d),
    (0x08785, 0x4129), (0x08787, 0x4127), (0x08788, 0x4122), (0x08789, 0x4131), (0x0878d, 0x2668), (0x0878f, 0x411e),
    (0x08790, 0x412a), (0x08791, 0x412b), (0x08792, 0x4121), (0x08793, 0x4120), (0x08794, 0x412e), (0x08796, 0x4124),
    (0x08797, 0x411f), (0x08798, 0x4125), (0x0879a, 0x4130), (0x0879b, 0x411d), (0x0879c, 0x412f), (0x0879d, 0x412c),
    (0x0879e, 0x2666), (0x0879f, 0x2665), (0x087a2, 0x2667), (0x087a3, 0x4128), (0x087a4, 0x447c), (0x087aa, 0x42f2),
    (0x087ab, 0x278f), (0x087ac, 0x42f6), (0x087ad, 0x42f3), (0x087ae, 0x42fa), (0x087af, 0x4300), (0x087b0, 0x42f5),
    (0x087b2, 0x4309), (0x087b3, 0x278c), (0x087b4, 0x4303), (0x087b5, 0x42f8), (0x087b6, 0x4304), (0x087b7, 0x42ff),
    (0x087b8, 0x4306), (0x087b9, 0x42f7), (0x087ba, 0x2791), (0x087bb, 0x2790), (0x087bc, 0x42f9), (0x087bd, 0x4307),
    (0x087be, 0x42f1), (0x087bf, 0x4305), (0x087c0, 0x278a), (0x087c2, 0x42fd), (0x087c3, 0x42fc), (0x087c4, 0x4301),
    (0x087c5, 0x42f4), (0x087c6, 0x278e), (0x087c8, 0x2792), (0x087c9, 0x42fb), (0x087ca, 0x4302), (0x087cb, 0x2793),
    (0x087cc, 0x42fe), (0x087d1, 0x278b), (0x087d2, 0x278d), (0x087d3, 0x4478), (0x087d4, 0x4476), (0x087d7, 0x447d),
    (0x087d8, 0x447a), (0x087d9, 0x447e), (0x087db, 0x446f), (0x087dc, 0x4477), (0x087dd, 0x4482), (0x087de, 0x4308),
    (0x087df, 0x4473), (0x087e0, 0x284a), (0x087e1, 0x3ed1), (0x087e2, 0x446e), (0x087e3, 0x447b), (0x087e4, 0x4475),
    (0x087e5, 0x4472), (0x087e6, 0x446d), (0x087e7, 0x446c), (0x087e8, 0x4481), (0x087ea, 0x4471), (0x087eb, 0x4470),
    (0x087ec, 0x2848), (0x087ed, 0x4479), (0x087ef, 0x2847), (0x087f2, 0x2849), (0x087f3, 0x4474), (0x087f4, 0x4480),
    (0x087f6, 0x45c9), (0x087f7, 0x45ca), (0x087f9, 0x28e1), (0x087fa, 0x45c7), (0x087fb, 0x28de), (0x087fc, 0x45cf),
    (0x087fe, 0x28e2), (0x087ff, 0x45d1), (0x08800, 0x45c6), (0x08801, 0x447f), (0x08802, 0x45d3), (0x08803, 0x45c8),
    (0x08805, 0x28df), (0x08806, 0x45ce), (0x08808, 0x45d0), (0x08809, 0x45cb), (0x0880a, 0x45d2), (0x0880b, 0x45cd),
    (0x0880c, 0x45cc), (0x0880d, 0x28e0), (0x08810, 0x46ea), (0x08811, 0x46eb), (0x08813, 0x46ed), (0x08814, 0x2963),
    (0x08815, 0x2964), (0x08816, 0x46ee), (0x08817, 0x46ec), (0x08819, 0x46e9), (0x0881b, 0x47c3), (0x0881c, 0x47c6),
    (0x0881d, 0x47c2), (0x0881f, 0x29af), (0x08820, 0x47c4), (0x08821, 0x29ae), (0x08822, 0x29ad), (0x08823, 0x29ac),
    (0x08824, 0x47c5), (0x08825, 0x486f), (0x08826, 0x486d), (0x08828, 0x486c), (0x08829, 0x47c1), (0x0882a, 0x486e),
    (0x0882b, 0x47c7), (0x0882c, 0x486b), (0x0882e, 0x48f5), (0x0882f, 0x48d3), (0x08830, 0x48f3), (0x08831, 0x2a2d),
    (0x08832, 0x48f4), (0x08833, 0x48f6), (0x08835, 0x4958), (0x08836, 0x2a4c), (0x08837, 0x4957), (0x08838, 0x4956),
    (0x08839, 0x2a4d), (0x0883b, 0x2a6b), (0x0883c, 0x49c6), (0x0883d, 0x49dd), (0x0883e, 0x49dc), (0x0883f, 0x49de),
    (0x08840, 0x1734), (0x08841, 0x30bb), (0x08843, 0x32b7), (0x08844, 0x32b8), (0x08848, 0x3790), (0x0884a, 0x47c8),
    (0x0884b, 0x4959), (0x0884c, 0x1735), (0x0884d, 0x1b28), (0x0884e, 0x30bc), (0x08852, 0x350d), (0x08853, 0x1eb8),
    (0x08855, 0x3792), (0x08856, 0x3791), (0x08857, 0x2075), (0x08859, 0x221e), (0x0885a, 0x3eed), (0x0885b, 0x252d),
    (0x0885d, 0x252e), (0x08861, 0x2669), (0x08862, 0x2a4e), (0x08863, 0x1736), (0x08867, 0x30bd), (0x08868, 0x19b0),
    (0x08869, 0x30bf), (0x0886a, 0x30be), (0x0886b, 0x1b29), (0x0886d, 0x32b9), (0x0886f, 0x32c0), (0x08870, 0x1cdc),
    (0x08871, 0x32be), (0x08872, 0x32bc), (0x08874, 0x32c3), (0x08875, 0x32ba), (0x08876, 0x32bb), (0x08877, 0x1cdd),
    (0x08879, 0x1ce1), (0x0887c, 0x32c4), (0x0887d, 0x1ce0), (0x0887e, 0x32c2), (0x0887f, 0x32bf), (0x08880, 0x32bd),
    (0x08881, 0x1cde), (0x08882, 0x1cdf), (0x08883, 0x32c1), (0x08884, 0x4d33), (0x08888, 0x1eba), (0x08889, 0x350e),
    (0x0888b, 0x1ebf), (0x0888c, 0x351e), (0x0888d, 0x1ebe), (0x0888e, 0x3520), (0x08891, 0x3514), (0x08892, 0x1ebc),
    (0x08893, 0x351f), (0x08895, 0x350f), (0x08896, 0x1ebd), (0x08897, 0x351b), (0x08898, 0x3517), (0x08899, 0x3519),
    (0x0889a, 0x3513), (0x0889b, 0x351a), (0x0889e, 0x1eb9), (0x0889f, 0x3516), (0x088a1, 0x3515), (0x088a2, 0x3511),
    (0x088a4, 0x351c), (0x088a7, 0x3518), (0x088a8, 0x3510), (0x088aa, 0x3512), (0x088ab, 0x1ebb), (0x088ac, 0x351d),
    (0x088b1, 0x2078), (0x088b2, 0x379d), (0x088b6, 0x3799), (0x088b7, 0x379b), (0x088b8, 0x3796), (0x088b9, 0x3795),
    (0x088ba, 0x3793), (0x088bc, 0x379a), (0x088bd, 0x379c), (0x088be, 0x3798), (0x088c0, 0x3797), (0x088c1, 0x2076),
    (0x088c2, 0x2077), (0x088c9, 0x379f), (0x088ca, 0x2226), (0x088cb, 0x3a36), (0x088cc, 0x3a3c), (0x088cd, 0x3a37),
    (0x088ce, 0x3a38), (0x088cf, 0x4a0e), (0x088d0, 0x3a3d), (0x088d2, 0x2228), (0x088d4, 0x2220), (0x088d5, 0x2227),
    (0x088d6, 0x3a35), (0x088d7, 0x3794), (0x088d8, 0x2223), (0x088d9, 0x2221), (0x088da, 0x3a3b), (0x088db, 0x3a3a),
    (0x088dc, 0x2222), (0x088dd, 0x2224), (0x088de, 0x3a39), (0x088df, 0x221f), (0x088e1, 0x2225), (0x088e7, 0x3cae),
    (0x088e8, 0x23c6), (0x088eb, 0x3cb9), (0x088ec, 0x3cb8), (0x088ee, 0x3cb3), (0x088ef, 0x23c8), (0x088f0, 0x3cb7),
    (0x088f1, 0x3caf), (0x088f2, 0x3cb0), (0x088f3, 0x23c0), (0x088f4, 0x23c2), (0x088f6, 0x3cb5), (0x088f7, 0x3cad),
    (0x088f8, 0x23c4), (0x088f9, 0x23c3), (0x088fa, 0x3cb1), (0x088fb, 0x3cb6), (0x088fc, 0x3cb4), (0x088fd, 0x23c5),
    (0x088fe, 0x3cb2), (0x08900, 0x4d38), (0x08901, 0x379e), (0x08902, 0x23c1), (0x08905, 0x3eee), (0x08906, 0x3ef5),
    (0x08907, 0x2530), (0x08909, 0x3ef9), (0x0890a, 0x2534), (0x0890b, 0x3ef1), (0x0890c, 0x3eef), (0x0890e, 0x3ef8),
    (0x08910, 0x252f), (0x08911, 0x3ef7), (0x08912, 0x2531), (0x08913, 0x2532), (0x08914, 0x3ef0), (0x08915, 0x2533),
    (0x08916, 0x3ef6), (0x08917, 0x3ef2), (0x08918, 0x3ef3), (0x08919, 0x3ef4), (0x0891a, 0x23c7), (0x0891e, 0x4132),
    (0x0891f, 0x413e), (0x08921, 0x266e), (0x08922, 0x4139), (0x08923, 0x413b), (0x08925, 0x266c), (0x08926, 0x4133),
    (0x08927, 0x4137), (0x08929, 0x413a), (0x0892a, 0x266a), (0x0892b, 0x266d), (0x0892c, 0x413d), (0x0892d, 0x4135),
    (0x0892e, 0x4136), (0x0892f, 0x413c), (0x08930, 0x4134), (0x08931, 0x4138), (0x08932, 0x266b), (0x08933, 0x430b),
    (0x08935, 0x430a), (0x08936, 0x2795), (0x08937, 0x4310), (0x08938, 0x2797), (0x0893b, 0x2794), (0x0893c, 0x430c),
    (0x0893d, 0x2798), (0x0893e, 0x430d), (0x08941, 0x430e), (0x08942, 0x4311), (0x08944, 0x2796), (0x08946, 0x4487),
    (0x08949, 0x448a), (0x0894b, 0x4484), (0x0894c, 0x4486), (0x0894f, 0x4485), (0x08950, 0x4488), (0x08951, 0x4489),
    (0x08952, 0x430f), (0x08953, 0x4483), (0x08956, 0x28e5), (0x08957, 0x45d7), (0x08958, 0x45da), (0x08959, 0x45dc),
    (0x0895a, 0x45d5), (0x0895b, 0x45d6), (0x0895c, 0x45d9), (0x0895d, 0x45db), (0x0895e, 0x28e6), (0x0895f, 0x28e4),
    (0x08960, 0x28e3), (0x08961, 0x45d8), (0x08962, 0x45d4), (0x08963, 0x46ef), (0x08964, 0x2965), (0x08966, 0x46f0),
    (0x08969, 0x47ca), (0x0896a, 0x29b0), (0x0896b, 0x47cc), (0x0896c, 0x29b1), (0x0896d, 0x47c9), (0x0896e, 0x47cb),
    (0x0896f, 0x29fa), (0x08971, 0x4870), (0x08972, 0x29f9), (0x08973, 0x48f9), (0x08974, 0x48f8), (0x08976, 0x48f7),
    (0x08979, 0x49a0), (0x0897a, 0x49a1), (0x0897b, 0x49a3), (0x0897c, 0x49a2), (0x0897e, 0x2cd5), (0x0897f, 0x1737),
    (0x08981, 0x1b2a), (0x08982, 0x3521), (0x08983, 0x2079), (0x08985, 0x3a3e), (0x08986, 0x284b), (0x08988, 0x45dd),
    (0x0898b, 0x182c), (0x0898f, 0x1ec1), (0x08993, 0x1ec0), (0x08995, 0x37a0), (0x08996, 0x207a), (0x08997, 0x37a2),
    (0x08998, 0x37a1), (0x0899b, 0x3a3f), (0x0899c, 0x2229), (0x0899d, 0x3cba), (0x0899e, 0x3cbd), (0x0899f, 0x3cbc),
    (0x089a1, 0x3cbb), (0x089a2, 0x3efa), (0x089a3, 0x3efc), (0x089a4, 0x3efb), (0x089a6, 0x2670), (0x089aa, 0x266f),
    (0x089ac, 0x2799), (0x089ad, 0x4312), (0x089ae, 0x4314), (0x089af, 0x4313), (0x089b2, 0x284c), (0x089b6, 0x45df),
    (0x089b7, 0x45de), (0x089b9, 0x46f1), (0x089ba, 0x2966), (0x089bd, 0x29b2), (0x089be, 0x4872), (0x089bf, 0x4871),
    (0x089c0, 0x2a6c), (0x089d2, 0x182d), (0x089d3, 0x30c0), (0x089d4, 0x1b2b), (0x089d5, 0x3524), (0x089d6, 0x3522),
    (0x089d9, 0x3523), (0x089da, 0x37a4), (0x089db, 0x37a5), (0x089dc, 0x3a46), (0x089dd, 0x37a3), (0x089df, 0x3a40),
    (0x089e0, 0x3a44), (0x089e1, 0x3a43), (0x089e2, 0x3a45), (0x089e3, 0x222a), (0x089e4, 0x3a42), (0x089e5, 0x3a41),
    (0x089e6, 0x3a47), (0x089e8, 0x3cc0), (0x089e9, 0x3cbe), (0x089eb, 0x3cbf), (0x089ec, 0x3eff), (0x089ed, 0x3efd),
    (0x089f0, 0x3efe), (0x089f1, 0x413f), (0x089f2, 0x4315), (0x089f3, 0x4316), (0x089f4, 0x284d), (0x089f6, 0x45e0),
    (0x089f7, 0x46f2), (0x089f8, 0x2967), (0x089fa, 0x47cd), (0x089fb, 0x4873), (0x089fc, 0x29fb), (0x089fe, 0x48fa),
    (0x089ff, 0x49a4), (0x08a00, 0x182e), (0x08a02, 0x1b2d), (0x08a03, 0x1b2e), (0x08a04, 0x30c1), (0x08a07, 0x30c2),
    (0x08a08, 0x1b2c), (0x08a0a, 0x1ce7), (0x08a0c, 0x1ce5), (0x08a0e, 0x1ce4), (0x08a0f, 0x1ceb), (0x08a10, 0x1ce3),
    (0x08a11, 0x1cec), (0x08a12, 0x32c5), (0x08a13, 0x1ce9), (0x08a15, 0x1ce6), (0x08a16, 0x1cea), (0x08a17, 0x1ce8),
    (0x08a18, 0x1ce2), (0x08a1b, 0x1ec9), (0x08a1d, 0x1ec3), (0x08a1e, 0x3528), (0x08a1f, 0x1ec8), (0x08a22, 0x1eca),
    (0x08a23, 0x1ec4), (0x08a25, 0x1ec5), (0x08a27, 0x3526), (0x08a2a, 0x1ec2), (0x08a2c, 0x3527), (0x08a2d, 0x1ec7),
    (0x08a30, 0x3525), (0x08a31, 0x1ec6), (0x08a34, 0x2085), (0x08a36, 0x2087), (0x08a39, 0x37a8), (0x08a3a, 0x2086),
    (0x08a3b, 0x207b), (0x08a3c, 0x207f), (0x08a3e, 0x223d), (0x08a3f, 0x3a4c), (0x08a40, 0x37aa), (0x08a41, 0x2080),
    (0x08a44, 0x37ad), (0x08a45, 0x37ae), (0x08a46, 0x2084), (0x08a48, 0x37b0), (0x08a4a, 0x37b2), (0x08a4c, 0x37b3),
    (0x08a4d, 0x37a7), (0x08a4e, 0x37a6), (0x08a4f, 0x37b4), (0x08a50, 0x2083), (0x08a51, 0x37b1), (0x08a52, 0x37af),
    (0x08a54, 0x2081), (0x08a55, 0x207d), (0x08a56, 0x2088), (0x08a57, 0x37ab), (0x08a58, 0x37ac), (0x08a59, 0x37a9),
    (0x08a5b, 0x2082), (0x08a5e, 0x207e), (0x08a60, 0x207c), (0x08a61, 0x3a4b), (0x08a62, 0x2238), (0x08a63, 0x2233),
    (0x08a66, 0x222e), (0x08a68, 0x223e), (0x08a69, 0x222f), (0x08a6b, 0x222b), (0x08a6c, 0x223a), (0x08a6d, 0x2237),
    (0x08a6e, 0x2239), (0x08a70, 0x2230), (0x08a71, 0x2235), (0x08a72, 0x222c), (0x08a73, 0x222d), (0x08a74, 0x3a53),
    (0x08a75, 0x3a50), (0x08a76, 0x3a48), (0x08a77, 0x3a4d), (0x08a79, 0x223b), (0x08a7a, 0x3a54), (0x08a7b, 0x223c),
    (0x08a7c, 0x2232), (0x08a7f, 0x3a4a), (0x08a81, 0x3a52), (0x08a82, 0x3a4e), (0x08a83, 0x3a51), (0x08a84, 0x3a4f),
    (0x08a85, 0x2236), (0x08a86, 0x3a49), (0x08a87, 0x2231), (0x08a8b, 0x3cc3), (0x08a8c, 0x23ca), (0x08a8d, 0x23cd),
    (0x08a8f, 0x3cc5), (0x08a91, 0x23d5), (0x08a92, 0x3cc4), (0x08a93, 0x23cf), (0x08a95, 0x2539), (0x08a96, 0x3cc6),
    (0x08a98, 0x23d4), (0x08a99, 0x3cc2), (0x08a9a, 0x23d6), (0x08a9e, 0x23cb), (0x08aa0, 0x2234), (0x08aa1, 0x23ce),
    (0x08aa3, 0x23cc), (0x08aa4, 0x23d0), (0x08aa5, 0x23d2), (0x08aa6, 0x23c9), (0x08aa7, 0x23d7), (0x08aa8, 0x23d3),
    (0x08aaa, 0x23d1), (0x08aab, 0x3cc1), (0x08ab0, 0x2540), (0x08ab2, 0x253c), (0x08ab6, 0x2543), (0x08ab8, 0x3f02),
    (0x08ab9, 0x2544), (0x08aba, 0x3f0e), (0x08abb, 0x3f07), (0x08abc, 0x2535), (0x08abd, 0x3f0f), (0x08abe, 0x3f09),
    (0x08abf, 0x253f), (0x08ac0, 0x3f0a), (0x08ac2, 0x253e), (0x08ac3, 0x3f0d), (0x08ac4, 0x2538), (0x08ac5, 0x3f0b),
    (0x08ac6, 0x3f01), (0x08ac7, 0x2537), (0x08ac8, 0x414a), (0x08ac9, 0x253d), (0x08acb, 0x253a), (0x08acd, 0x2542),
    (0x08acf, 0x3f00), (0x08ad1, 0x3f04), (0x08ad2, 0x2536), (0x08ad3, 0x3f03), (0x08ad4, 0x3f05), (0x08ad5, 0x3f06),
    (0x08ad6, 0x2541), (0x08ad7, 0x3f08), (0x08ad8, 0x3f0c), (0x08ad9, 0x3f10), (0x08adb, 0x2545), (0x08adc, 0x2676),
    (0x08add, 0x4145), (0x08ade, 0x414b), (0x08adf, 0x4148), (0x08ae0, 0x4140), (0x08ae1, 0x414c), (0x08ae2, 0x4141),
    (0x08ae4, 0x4147), (0x08ae6, 0x2671), (0x08ae7, 0x2677), (0x08ae8, 0x414d), (0x08aeb, 0x2673), (0x08aed, 0x267d),
    (0x08aee, 0x2678), (0x08aef, 0x414f), (0x08af0, 0x4149), (0x08af1, 0x2674), (0x08af2, 0x4142), (0x08af3, 0x267e),
    (0x08af4, 0x4143), (0x08af5, 0x4144), (0x08af6, 0x267f), (0x08af7, 0x267c), (0x08af8, 0x253b), (0x08afa, 0x2672),
    (0x08afb, 0x4150), (0x08afc, 0x2680), (0x08afe, 0x2679), (0x08aff, 0x414e), (0x08b00, 0x2675), (0x08b01, 0x267a),
    (0x08b02, 0x267b), (0x08b04, 0x27a1), (0x08b05, 0x431b), (0x08b06, 0x4324), (0x08b07, 0x4321), (0x08b08, 0x4323),
    (0x08b0a, 0x279e), (0x08b0b, 0x431c), (0x08b0d, 0x4322), (0x08b0e, 0x279a), (0x08b0f, 0x431e), (0x08b10, 0x27a2),
    (0x08b11, 0x431a), (0x08b12, 0x431f), (0x08b13, 0x4326), (0x08b14, 0x4146), (0x08b15, 0x4320), (0x08b16, 0x4319),
    (0x08b17, 0x279b), (0x08b18, 0x4318), (0x08b19, 0x279c), (0x08b1a, 0x4327), (0x08b1b, 0x279d), (0x08b1c, 0x4325),
    (0x08b1d, 0x27a0), (0x08b1e, 0x4317), (0x08b20, 0x279f), (0x08b22, 0x431d), (0x08b23, 0x448d), (0x08b24, 0x449b),
    (0x08b25, 0x4496), (0x08b26, 0x4498), (0x08b27, 0x448c), (0x08b28, 0x284e), (0x08b2a, 0x448b), (0x08b2b, 0x2851),
    (0x08b2c, 0x2850), (0x08b2e, 0x449a), (0x08b2f, 0x4492), (0x08b30, 0x448f), (0x08b31, 0x4495), (0x08b33, 0x448e),
    (0x08b35, 0x4490), (0x08b36, 0x4499), (0x08b37, 0x4497), (0x08b39, 0x284f), (0x08b3a, 0x449e), (0x08b3b, 0x449c),
    (0x08b3c, 0x4493), (0x08b3d, 0x449d), (0x08b3e, 0x4494), (0x08b40, 0x45e4), (0x08b41, 0x28e7), (0x08b42, 0x45eb),
    (0x08b45, 0x47d0), (0x08b46, 0x28ee), (0x08b47, 0x4491), (0x08b48, 0x45e2), (0x08b49, 0x28ea), (0x08b4a, 0x45e3),
    (0x08b4b, 0x45e8), (0x08b4e, 0x28ec), (0x08b4f, 0x28ed), (0x08b50, 0x45e1), (0x08b51, 0x45ea), (0x08b52, 0x45ec),
    (0x08b53, 0x45e5), (0x08b54, 0x45e7), (0x08b55, 0x45e9), (0x08b56, 0x45e6), (0x08b57, 0x45ed), (0x08b58, 0x28e9),
    (0x08b59, 0x28ef), (0x08b5a, 0x28eb), (0x08b5c, 0x28e8), (0x08b5d, 0x46f5), (0x08b5f, 0x296c), (0x08b60, 0x46f3),
    (0x08b63, 0x46f7), (0x08b65, 0x46f8), (0x08b66, 0x296a), (0x08b67, 0x46f9), (0x08b68, 0x46f6), (0x08b6a, 0x46f4),
    (0x08b6b, 0x296d), (0x08b6c, 0x2969), (0x08b6d, 0x46fa), (0x08b6f, 0x296b), (0x08b70, 0x2968), (0x08b74, 0x29b3),
    (0x08b77, 0x29b4), (0x08b78, 0x47cf), (0x08b79, 0x47ce), (0x08b7a, 0x47d1), (0x08b7b, 0x47d2), (0x08b7d, 0x29b5),
    (0x08b7e, 0x4874), (0x08b7f, 0x4879), (0x08b80, 0x29fc), (0x08b82, 0x4876), (0x08b84, 0x4875), (0x08b85, 0x4878),
    (0x08b86, 0x4877), (0x08b88, 0x48fe), (0x08b8a, 0x2a2e), (0x08b8b, 0x48fd), (0x08b8c, 0x48fb), (0x08b8e, 0x48fc),
    (0x08b92, 0x2a50), (0x08b93, 0x2a4f), (0x08b94, 0x495a), (0x08b95, 0x495b), (0x08b96, 0x2a51), (0x08b98, 0x49a5),
    (0x08b99, 0x49a6), (0x08b9a, 0x2a78), (0x08b9c, 0x2a7e), (0x08b9e, 0x49df), (0x08b9f, 0x49fe), (0x08c37, 0x182f),
    (0x08c39, 0x3529), (0x08c3b, 0x352a), (0x08c3c, 0x3a55), (0x08c3d, 0x3cc7), (0x08c3e, 0x3f11), (0x08c3f, 0x27a4),
    (0x08c41, 0x27a3), (0x08c42, 0x449f), (0x08c43, 0x45ee), (0x08c45, 0x48ff), (0x08c46, 0x1830), (0x08c47, 0x32c6),
    (0x08c48, 0x1ced), (0x08c49, 0x1ecb), (0x08c4a, 0x3a57), (0x08c4b, 0x3a56), (0x08c4c, 0x2546), (0x08c4d, 0x3f12),
    (0x08c4e, 0x2547), (0x08c4f, 0x4328), (0x08c50, 0x2852), (0x08c54, 0x2a87), (0x08c55, 0x1831), (0x08c56, 0x2f05),
    (0x08c57, 0x32c7), (0x08c5a, 0x1ecc), (0x08c5c, 0x352b), (0x08c5d, 0x352c), (0x08c5f, 0x37b5), (0x08c61, 0x2089),
    (0x08c62, 0x223f), (0x08c64, 0x3a59), (0x08c65, 0x3a58), (0x08c66, 0x3a5a), (0x08c68, 0x3cc8), (0x08c69, 0x3cc9),
    (0x08c6a, 0x23d8), (0x08c6b, 0x2681), (0x08c6c, 0x2548), (0x08c6d, 0x2682), (0x08c6f, 0x432c), (0x08c70, 0x4329),
    (0x08c71, 0x432b), (0x08c72, 0x432a), (0x08c73, 0x27a5), (0x08c75, 0x44a0), (0x08c76, 0x45f0), (0x08c77, 0x45ef),
    (0x08c78, 0x2da4), (0x08c79, 0x1cef), (0x08c7a, 0x1cee), (0x08c7b, 0x32c8), (0x08c7d, 0x352d), (0x08c80, 0x37b7),
    (0x08c81, 0x37b6), (0x08c82, 0x208a), (0x08c84, 0x3a5c), (0x08c85, 0x3a5d), (0x08c86, 0x3a5b), (0x08c89, 0x2241),
    (0x08c8a, 0x2240), (0x08c8c, 0x23da), (0x08c8d, 0x23d9), (0x08c8f, 0x3f13), (0x08c90, 0x4153), (0x08c91, 0x4151),
    (0x08c92, 0x4152), (0x08c93, 0x2683), (0x08c94, 0x432e), (0x08c95, 0x432d), (0x08c97, 0x44a3), (0x08c98, 0x44a2),
    (0x08c99, 0x44a1), (0x08c9a, 0x45f1), (0x08c9c, 0x49e0), (0x08c9d, 0x1832), (0x08c9e, 0x1b2f), (0x08ca0, 0x1b30),
    (0x08ca1, 0x1cf0), (0x08ca2, 0x1cf1), (0x08ca3, 0x32ca), (0x08ca4, 0x32c9), (0x08ca5, 0x352e), (0x08ca7, 0x1ed2),
    (0x08ca8, 0x1ed0), (0x08ca9, 0x1ecd), (0x08caa, 0x1ed1), (0x08cab, 0x1ecf), (0x08cac, 0x1ece), (0x08caf, 0x208b),
    (0x08cb0, 0x37ba), (0x08cb2, 0x2246), (0x08cb3, 0x208d), (0x08cb4, 0x2092), (0x08cb5, 0x37bc), (0x08cb6, 0x2094),
    (0x08cb7, 0x2093), (0x08cb8, 0x2096), (0x08cb9, 0x37bb), (0x08cba, 0x37b8), (0x08cbb, 0x2090), (0x08cbc, 0x208c),
    (0x08cbd, 0x208e), (0x08cbe, 0x37b9), (0x08cbf, 0x2095), (0x08cc0, 0x2091), (0x08cc1, 0x208f), (0x08cc2, 0x2248),
    (0x08cc3, 0x2247), (0x08cc4, 0x2245), (0x08cc5, 0x2249), (0x08cc7, 0x2243), (0x08cc8, 0x2244), (0x08cca, 0x2242),
    (0x08ccc, 0x3a5e), (0x08ccf, 0x3ccb), (0x08cd1, 0x23dc), (0x08cd2, 0x23dd), (0x08cd3, 0x23db), (0x08cd5, 0x3cca),
    (0x08cd7, 0x3ccc), (0x08cd9, 0x3f16), (0x08cda, 0x3f18), (0x08cdc, 0x2551), (0x08cdd, 0x3f19), (0x08cde, 0x254a),
    (0x08cdf, 0x3f15), (0x08ce0, 0x2549), (0x08ce1, 0x2553), (0x08ce2, 0x254f), (0x08ce3, 0x2550), (0x08ce4, 0x254c),
    (0x08ce5, 0x3f14), (0x08ce6, 0x254b), (0x08ce7, 0x3f1a), (0x08ce8, 0x3f17), (0x08cea, 0x2552), (0x08cec, 0x254d),
    (0x08ced, 0x254e), (0x08cee, 0x4155), (0x08cf0, 0x4157), (0x08cf1, 0x4156), (0x08cf3, 0x4158), (0x08cf4, 0x2684),
    (0x08cf5, 0x4154), (0x08cf8, 0x27a9), (0x08cf9, 0x432f), (0x08cfa, 0x27a6), (0x08cfb, 0x27aa), (0x08cfc, 0x27a8),
    (0x08cfd, 0x27a7), (0x08cfe, 0x44a4), (0x08d00, 0x44a7), (0x08d02, 0x44a6), (0x08d04, 0x44a5), (0x08d05, 0x2853),
    (0x08d06, 0x45f2), (0x08d07, 0x45f3), (0x08d08, 0x28f0), (0x08d09, 0x45f4), (0x08d0a, 0x28f1), (0x08d0d, 0x296f),
    (0x08d0f, 0x296e), (0x08d10, 0x47d3), (0x08d13, 0x29b6), (0x08d14, 0x47d4), (0x08d15, 0x487a), (0x08d16, 0x29fd),
    (0x08d17, 0x29fe), (0x08d19, 0x4900), (0x08d1b, 0x2a53), (0x08d64, 0x1833), (0x08d66, 0x1ed4), (0x08d67, 0x1ed3),
    (0x08d68, 0x3a5f), (0x08d69, 0x3a60), (0x08d6b, 0x23de), (0x08d6c, 0x4159), (0x08d6d, 0x2554), (0x08d6e, 0x415a),
    (0x08d6f, 0x4330), (0x08d70, 0x1834), (0x08d72, 0x30c3), (0x08d73, 0x1b32), (0x08d74, 0x1b31), (0x08d76, 0x32cb),
    (0x08d77, 0x1cf2), (0x08d78, 0x32cc), (0x08d79, 0x3531), (0x08d7b, 0x3530), (0x08d7d, 0x352f), (0x08d80, 0x37be),
    (0x08d81, 0x2099), (0x08d84, 0x37bd), (0x08d85, 0x2098), (0x08d89, 0x37bf), (0x08d8a, 0x2097), (0x08d8c, 0x3a62),
    (0x08d8d, 0x3a65), (0x08d8e, 0x3a63), (0x08d8f, 0x3a64), (0x08d90, 0x3a68), (0x08d91, 0x3a61), (0x08d92, 0x3a69),
    (0x08d93, 0x3a66), (0x08d94, 0x3a67), (0x08d95, 0x23e0), (0x08d96, 0x3ccd), (0x08d99, 0x23df), (0x08d9b, 0x3f1e),
    (0x08d9c, 0x3f1c), (0x08d9f, 0x2555), (0x08da0, 0x3f1b), (0x08da1, 0x3f1d), (0x08da3, 0x2556), (0x08da5, 0x415b),
    (0x08da7, 0x415c), (0x08da8, 0x27ab), (0x08daa, 0x45f6), (0x08dab, 0x45f8), (0x08dac, 0x45f5), (0x08dad, 0x45f7),
    (0x08dae, 0x46fb), (0x08daf, 0x47d5), (0x08db2, 0x49c7), (0x08db3, 0x1835), (0x08db4, 0x1b33), (0x08db5, 0x32cd),
    (0x08db6, 0x32cf), (0x08db7, 0x32ce), (0x08db9, 0x3534), (0x08dba, 0x1ed6), (0x08dbc, 0x3532), (0x08dbe, 0x1ed5),
    (0x08dbf, 0x3535), (0x08dc1, 0x3536), (0x08dc2, 0x3533), (0x08dc5, 0x37cb), (0x08dc6, 0x20a1), (0x08dc7, 0x37c3),
    (0x08dc8, 0x37c9), (0x08dcb, 0x209c), (0x08dcc, 0x209f), (0x08dcd, 0x37c2), (0x08dce, 0x209a), (0x08dcf, 0x37c6),
    (0x08dd0, 0x3a6f), (0x08dd1, 0x209e), (0x08dd3, 0x37c1), (0x08dd5, 0x37c7), (0x08dd6, 0x37c4), (0x08dd7, 0x37ca),
    (0x08dd8, 0x37c0), (0x08dd9, 0x37c8), (0x08dda, 0x209d), (0x08ddb, 0x20a0), (0x08ddc, 0x37c5), (0x08ddd, 0x209b),
    (0x08ddf, 0x224b), (0x08de0, 0x3a6b), (0x08de1, 0x224a), (0x08de2, 0x3a72), (0x08de3, 0x3a71), (0x08de4, 0x2251),
    (0x08de6, 0x2252), (0x08de7, 0x3a73), (0x08de8, 0x224c), (0x08de9, 0x3a70), (0x08dea, 0x2250), (0x08deb, 0x3a75),
    (0x08dec, 0x3a6c), (0x08dee, 0x3a6e), (0x08def, 0x224d), (0x08df0, 0x3a6a), (0x08df1, 0x3a6d), (0x08df2, 0x3a74),
    (0x08df3, 0x224e), (0x08df4, 0x3a76), (0x08dfa, 0x224f), (0x08dfc, 0x23e1), (0x08dfd, 0x3cd2), (0x08dfe, 0x3cd8),
    (0x08dff, 0x3cd0), (0x08e00, 0x3cd9), (0x08e02, 0x3ccf), (0x08e03, 0x3cd4), (0x08e04, 0x3cda), (0x08e05, 0x3cd7),
    (0x08e06, 0x3cd6), (0x08e07, 0x3cd5), (0x08e09, 0x3cce), (0x08e0a, 0x3cd3), (0x08e0d, 0x3cd1), (0x08e0f, 0x255b),
    (0x08e10, 0x2558), (0x08e11, 0x3f27), (0x08e12, 0x3f2c), (0x08e13, 0x3f2e), (0x08e14, 0x3f2b), (0x08e15, 0x3f24),
    (0x08e16, 0x3f26), (0x08e17, 0x3f30), (0x08e18, 0x3f2d), (0x08e19, 0x3f28), (0x08e1a, 0x3f31), (0x08e1b, 0x3f25),
    (0x08e1c, 0x3f2f), (0x08e1d, 0x2559), (0x08e1e, 0x255f), (0x08e1f, 0x255d), (0x08e20, 0x3f1f), (0x08e21, 0x255e),
    (0x08e22, 0x255a), (0x08e23, 0x3f20), (0x08e24, 0x3f22), (0x08e25, 0x3f21), (0x08e26, 0x3f29), (0x08e27, 0x3f2a),
    (0x08e29, 0x255c), (0x08e2b, 0x2557), (0x08e2e, 0x3f23), (0x08e30, 0x4166), (0x08e31, 0x2686), (0x08e33, 0x415d),
    (0x08e34, 0x2687), (0x08e35, 0x268a), (0x08e36, 0x4162), (0x08e38, 0x415f), (0x08e39, 0x2689), (0x08e3c, 0x4163),
    (0x08e3d, 0x4164), (0x08e3e, 0x415e), (0x08e3f, 0x4167), (0x08e40, 0x4160), (0x08e41, 0x4165), (0x08e42, 0x2688),
    (0x08e44, 0x2685), (0x08e45, 0x4161), (0x08e47, 0x4336), (0x08e48, 0x27ae), (0x08e49, 0x27ac), (0x08e4a, 0x27af),
    (0x08e4b, 0x27ad), (0x08e4c, 0x4335), (0x08e4d, 0x4332), (0x08e4e, 0x4331), (0x08e50, 0x4334), (0x08e53, 0x4333),
    (0x08e54, 0x44b5), (0x08e55, 0x2859), (0x08e56, 0x44ac), (0x08e57, 0x44ab), (0x08e59, 0x2854), (0x08e5a, 0x44b1),
    (0x08e5b, 0x44b0), (0x08e5c, 0x44a8), (0x08e5d, 0x44b3), (0x08e5e, 0x44ad), (0x08e5f, 0x2858), (0x08e60, 0x44aa),
    (0x08e61, 0x44b2), (0x08e62, 0x44a9), (0x08e63, 0x2855), (0x08e64, 0x2857), (0x08e65, 0x44ae), (0x08e66, 0x2856),
    (0x08e67, 0x44af), (0x08e69, 0x44b4), (0x08e6a, 0x45fc), (0x08e6c, 0x28f6), (0x08e6d, 0x45f9), (0x08e6f, 0x45fd),
    (0x08e72, 0x28f3), (0x08e73, 0x45fb), (0x08e74, 0x28f8), (0x08e76, 0x28f5), (0x08e78, 0x45fa), (0x08e7a, 0x28f7),
    (0x08e7b, 0x45fe), (0x08e7c, 0x28f2), (0x08e81, 0x2971), (0x08e82, 0x2973), (0x08e84, 0x46fe), (0x08e85, 0x2972),
    (0x08e86, 0x46fc), (0x08e87, 0x28f4), (0x08e88, 0x46fd), (0x08e89, 0x2970), (0x08e8a, 0x29b7), (0x08e8b, 0x29b9),
    (0x08e8c, 0x47d7), (0x08e8d, 0x29b8), (0x08e8e, 0x47d6), (0x08e90, 0x487f), (0x08e91, 0x29ff), (0x08e92, 0x487e),
    (0x08e93, 0x2a00), (0x08e94, 0x487c), (0x08e95, 0x487b), (0x08e96, 0x4880), (0x08e97, 0x4881), (0x08e98, 0x4901),
    (0x08e9a, 0x487d), (0x08e9d, 0x495f), (0x08e9e, 0x495c), (0x08e9f, 0x495d), (0x08ea0, 0x495e), (0x08ea1, 0x2a6d),
    (0x08ea3, 0x49a9), (0x08ea4, 0x49a8), (0x08ea5, 0x49a7), (0x08ea6, 0x49c8), (0x08ea8, 0x49f4), (0x08ea9, 0x49e1),
    (0x08eaa, 0x2a7f), (0x08eab, 0x1836), (0x08eac, 0x1cf3), (0x08eb2, 0x2253), (0x08eba, 0x2560), (0x08ebd, 0x4168),
    (0x08ec0, 0x285a), (0x08ec2, 0x45ff), (0x08ec9, 0x49e2), (0x08eca, 0x1837), (0x08ecb, 0x19b1), (0x08ecc, 0x1b35),
    (0x08ecd, 0x1b34), (0x08ecf, 0x1cf6), (0x08ed1, 0x32d0), (0x08ed2, 0x1cf4), (0x08ed3, 0x32d1), (0x08ed4, 0x1cf5),
    (0x08ed7, 0x353b), (0x08ed8, 0x3537), (0x08edb, 0x1ed7), (0x08edc, 0x353a), (0x08edd, 0x3539), (0x08ede, 0x3538),
    (0x08edf, 0x1ed8), (0x08ee0, 0x353c), (0x08ee1, 0x353d), (0x08ee5, 0x37d2), (0x08ee6, 0x37d0), (0x08ee7, 0x37d4),
    (0x08ee8, 0x37d5), (0x08ee9, 0x37db), (0x08eeb, 0x37d7), (0x08eec, 0x37d9), (0x08eee, 0x37d1), (0x08eef, 0x37cc),
    (0x08ef1, 0x37d8), (0x08ef4, 0x37da), (0x08ef5, 0x37d3), (0x08ef6, 0x37d6), (0x08ef7, 0x37cd), (0x08ef8, 0x20a3),
    (0x08ef9, 0x37cf), (0x08efa, 0x37ce), (0x08efb, 0x20a2), (0x08efc, 0x20a4), (0x08efe, 0x2256), (0x08eff, 0x3a78),
    (0x08f00, 0x3a7a), (0x08f01, 0x3a79), (0x08f02, 0x3a7e), (0x08f03, 0x2254), (0x08f05, 0x3a7b), (0x08f06, 0x3a77),
    (0x08f07, 0x3a7c), (0x08f08, 0x3a7d), (0x08f09, 0x2255), (0x08f0a, 0x2257), (0x08f0b, 0x3a7f), (0x08f0d, 0x3cde),
    (0x08f0e, 0x3cdd), (0x08f10, 0x3cdb), (0x08f11, 0x3cdc), (0x08f12, 0x23e3), (0x08f13, 0x23e5), (0x08f14, 0x23e2),
    (0x08f15, 0x23e4), (0x08f16, 0x3f38), (0x08f17, 0x3f39), (0x08f18, 0x3f34), (0x08f1a, 0x3f35), (0x08f1b, 0x2562),
    (0x08f1c, 0x2567), (0x08f1d, 0x2561), (0x08f1e, 0x2568), (0x08f1f, 0x2563), (0x08f20, 0x3f36), (0x08f23, 0x3f37),
    (0x08f24, 0x3f33), (0x08f25, 0x2569), (0x08f26, 0x2565), (0x08f29, 0x2564), (0x08f2a, 0x2566), (0x08f2c, 0x3f32),
    (0x08f2e, 0x416a), (0x08f2f, 0x268c), (0x08f32, 0x416c), (0x08f33, 0x268e), (0x08f34, 0x416f), (0x08f35, 0x416b),
    (0x08f36, 0x4169), (0x08f37, 0x416e), (0x08f38, 0x268d), (0x08f39, 0x416d), (0x08f3b, 0x268b), (0x08f3e, 0x27b1),
    (0x08f3f, 0x27b4), (0x08f40, 0x4338), (0x08f42, 0x27b2), (0x08f43, 0x4337), (0x08f44, 0x27b0), (0x08f45, 0x27b3),
    (0x08f46, 0x44b6), (0x08f47, 0x44b7), (0x08f48, 0x44b8), (0x08f49, 0x285b), (0x08f4b, 0x44b9), (0x08f4d, 0x285c),
    (0x08f4e, 0x28fa), (0x08f4f, 0x4602), (0x08f50, 0x4603), (0x08f51, 0x4601), (0x08f52, 0x4600), (0x08f53, 0x4604),
    (0x08f54, 0x28f9), (0x08f55, 0x4702), (0x08f56, 0x4700), (0x08f57, 0x4701), (0x08f58, 0x4703), (0x08f59, 0x46ff),
    (0x08f5a, 0x4704), (0x08f5b, 0x47d9), (0x08f5d, 0x47da), (0x08f5e, 0x47d8), (0x08f5f, 0x29ba), (0x08f60, 0x4882),
    (0x08f61, 0x2a01), (0x08f62, 0x4883), (0x08f63, 0x4903), (0x08f64, 0x4902), (0x08f9b, 0x1838), (0x08f9c, 0x20a5),
    (0x08f9f, 0x2258), (0x08fa3, 0x23e6), (0x08fa6, 0x2690), (0x08fa8, 0x268f), (0x08fad, 0x28fb), (0x08fae, 0x2953),
    (0x08faf, 0x29bb), (0x08fb0, 0x1839), (0x08fb1, 0x1cf7), (0x08fb2, 0x2259), (0x08fb4, 0x4605), (0x08fb5, 0x2ac5),
    (0x08fb8, 0x4d32), (0x08fbf, 0x2da6), (0x08fc2, 0x183a), (0x08fc4, 0x183d), (0x08fc5, 0x183c), (0x08fc6, 0x183b),
    (0x08fc9, 0x2da5), (0x08fcb, 0x2f07), (0x08fcd, 0x2f09), (0x08fce, 0x19b2), (0x08fd1, 0x19b4), (0x08fd2, 0x2f06),
    (0x08fd3, 0x2f08), (0x08fd4, 0x19b3), (0x08fd5, 0x2f0b), (0x08fd6, 0x2f0a), (0x08fd7, 0x2f0c), (0x08fe0, 0x30c7),
    (0x08fe1, 0x30c5), (0x08fe2, 0x1b38), (0x08fe3, 0x30c4), (0x08fe4, 0x1b3d), (0x08fe5, 0x1b3a), (0x08fe6, 0x1b37),
    (0x08fe8, 0x1b3e), (0x08fea, 0x1b39), (0x08feb, 0x1b3c), (0x08fed, 0x1b3b), (0x08fee, 0x30c6), (0x08ff0, 0x1b36),
    (0x08ff4, 0x1cfd), (0x08ff5, 0x32d3), (0x08ff6, 0x32d9), (0x08ff7, 0x1cfa), (0x08ff8, 0x1d01), (0x08ffa, 0x1cfc),
    (0x08ffb, 0x32d6), (0x08ffc, 0x32d8), (0x08ffd, 0x1cff), (0x08ffe, 0x32d2), (0x08fff, 0x32d5), (0x09000, 0x1cfb),
    (0x09001, 0x1cf8), (0x09002, 0x32d4), (0x09003, 0x1cfe), (0x09004, 0x32d7), (0x09005, 0x1d00), (0x09006, 0x1cf9),
    (0x0900b, 0x353f), (0x0900c, 0x3542), (0x0900d, 0x1eda), (0x0900f, 0x1ee4), (0x09010, 0x1ee0), (0x09011, 0x3540),
    (0x09014, 0x1ee8), (0x09015, 0x1ee1), (0x09016, 0x1ee6), (0x09017, 0x1edc), (0x09019, 0x1ed9), (0x0901a, 0x1edb),
    (0x0901b, 0x1ee7), (0x0901c, 0x3541), (0x0901d, 0x1edf), (0x0901e, 0x1ee2), (0x0901f, 0x1ede), (0x09020, 0x1ee3),
    (0x09021, 0x3543), (0x09022, 0x1ee5), (0x09023, 0x1edd), (0x09024, 0x353e), (0x0902d, 0x37dc), (0x0902e, 0x20a6),
    (0x0902f, 0x37de), (0x09031, 0x20a8), (0x09032, 0x20aa), (0x09034, 0x37dd), (0x09035, 0x20a7), (0x09036, 0x20ab),
    (0x09038, 0x20a9), (0x0903c, 0x225f), (0x0903d, 0x3a84), (0x0903e, 0x2267), (0x0903f, 0x3a81), (0x09041, 0x2268),
    (0x09042, 0x225d), (0x09044, 0x3a82), (0x09047, 0x2262), (0x09049, 0x3a83), (0x0904a, 0x225b), (0x0904b, 0x225a),
    (0x0904d, 0x2265), (0x0904e, 0x2264), (0x0904f, 0x2263), (0x09050, 0x2261), (0x09051, 0x2266), (0x09052, 0x3a80),
    (0x09053, 0x225c), (0x09054, 0x225e), (0x09055, 0x2260), (0x09058, 0x23e8), (0x09059, 0x23eb), (0x0905b, 0x23ef),
    (0x0905c, 0x23e9), (0x0905d, 0x23ee), (0x0905e, 0x23ec), (0x09060, 0x23e7), (0x09062, 0x23ed), (0x09063, 0x23ea),
    (0x09067, 0x3f3d), (0x09068, 0x256c), (0x09069, 0x256a), (0x0906b, 0x3f3e), (0x0906d, 0x256d), (0x0906e, 0x256b),
    (0x0906f, 0x3f3c), (0x09070, 0x3f3b), (0x09072, 0x2694), (0x09073, 0x3f3a), (0x09074, 0x2692), (0x09075, 0x2691),
    (0x09076, 0x4170), (0x09077, 0x256e), (0x09078, 0x2693), (0x09079, 0x4171), (0x0907a, 0x2696), (0x0907b, 0x4172),
    (0x0907c, 0x2695), (0x0907d, 0x27b6), (0x0907e, 0x433a), (0x0907f, 0x27b5), (0x09080, 0x27ba), (0x09081, 0x27b8),
    (0x09082, 0x27b9), (0x09083, 0x285e), (0x09084, 0x27b7), (0x09085, 0x4339), (0x09086, 0x4173), (0x09087, 0x285d),
    (0x09088, 0x285f), (0x0908a, 0x28fc), (0x0908b, 0x28fd), (0x0908d, 0x4705), (0x0908f, 0x2a30), (0x09090, 0x2a2f),
    (0x09091, 0x183f), (0x09094, 0x2cda), (0x09095, 0x1d02), (0x09097, 0x2cd7), (0x09098, 0x2cd8), (0x09099, 0x2cd6),
    (0x0909b, 0x2cd9), (0x0909e, 0x2daa), (0x0909f, 0x2da7), (0x090a0, 0x2dac), (0x090a1, 0x2da8), (0x090a2, 0x1840),
    (0x090a3, 0x1843), (0x090a5, 0x2da9), (0x090a6, 0x1842), (0x090a7, 0x2dab), (0x090aa, 0x1841), (0x090af, 0x2f0f),
    (0x090b0, 0x2f11), (0x090b1, 0x19b7), (0x090b2, 0x2f0d), (0x090b3, 0x2f10), (0x090b4, 0x2f0e), (0x090b5, 0x19b5),
    (0x090b6, 0x19b8), (0x090b8, 0x19b6), (0x090bd, 0x30c9), (0x090be, 0x30cd), (0x090bf, 0x30ca), (0x090c1, 0x1b41),
    (0x090c3, 0x1b42), (0x090c5, 0x30cc), (0x090c7, 0x30ce), (0x090c8, 0x30d0), (0x090ca, 0x1b3f), (0x090cb, 0x30cf),
    (0x090ce, 0x1b40), (0x090d4, 0x354a), (0x090d5, 0x30cb), (0x090d6, 0x32da), (0x090d7, 0x32e3), (0x090d8, 0x32e1),
    (0x090d9, 0x32dc), (0x090da, 0x32dd), (0x090db, 0x32e2), (0x090dc, 0x32e4), (0x090dd, 0x1d04), (0x090df, 0x32df),
    (0x090e0, 0x32db), (0x090e1, 0x1d03), (0x090e2, 0x1d05), (0x090e3, 0x32de), (0x090e4, 0x32e5), (0x090e5, 0x32e0),
    (0x090e8, 0x1ee9), (0x090e9, 0x354d), (0x090ea, 0x3545), (0x090eb, 0x354b), (0x090ec, 0x354c), (0x090ed, 0x1eea),
    (0x090ef, 0x3544), (0x090f0, 0x3546), (0x090f1, 0x30c8), (0x090f2, 0x3548), (0x090f3, 0x3549), (0x090f4, 0x3547),
    (0x090f5, 0x20ad), (0x090f9, 0x37e5), (0x090fa, 0x4174), (0x090fb, 0x37e6), (0x090fc, 0x37e3), (0x090fd, 0x1eeb),
    (0x090fe, 0x20af), (0x090ff, 0x37e2), (0x09100, 0x37e8), (0x09101, 0x37e7), (0x09102, 0x20ac), (0x09103, 0x37eb),
    (0x09104, 0x37e1), (0x09105, 0x37ea), (0x09106, 0x37df), (0x09107, 0x37e9), (0x09108, 0x37e4), (0x09109, 0x20ae),
    (0x0910b, 0x3a8b), (0x0910d, 0x3a86), (0x0910e, 0x3a8c), (0x0910f, 0x3a87), (0x09110, 0x3a85), (0x09111, 0x3a88),
    (0x09112, 0x2269), (0x09114, 0x3a8a), (0x09116, 0x3a89), (0x09117, 0x226a), (0x09118, 0x23f1), (0x09119, 0x23f0),
    (0x0911a, 0x3ce5), (0x0911b, 0x3ce8), (0x0911c, 0x3ce0), (0x0911d, 0x3ce4), (0x0911e, 0x23f2), (0x0911f, 0x3ce3),
    (0x09120, 0x3ce1), (0x09121, 0x3ce7), (0x09122, 0x3ce2), (0x09123, 0x3cdf), (0x09124, 0x3ce6), (0x09126, 0x3f44),
    (0x09127, 0x2571), (0x09128, 0x44ba), (0x09129, 0x3f41), (0x0912a, 0x3f42), (0x0912b, 0x3f40), (0x0912c, 0x37e0),
    (0x0912d, 0x2570), (0x0912e, 0x3f45), (0x0912f, 0x3f3f), (0x09130, 0x256f), (0x09131, 0x2572), (0x09132, 0x3f43),
    (0x09133, 0x4175), (0x09134, 0x2697), (0x09135, 0x4176), (0x09136, 0x4177), (0x09138, 0x433b), (0x09139, 0x27bb),
    (0x0913a, 0x44bb), (0x0913b, 0x44bc), (0x0913e, 0x44bd), (0x0913f, 0x4607), (0x09140, 0x4606), (0x09141, 0x4707),
    (0x09143, 0x4706), (0x09144, 0x47dc), (0x09145, 0x47dd), (0x09146, 0x47db), (0x09147, 0x4884), (0x09148, 0x2a02),
    (0x09149, 0x1844), (0x0914a, 0x1b44), (0x0914b, 0x1b43), (0x0914c, 0x1d08), (0x0914d, 0x1d07), (0x0914e, 0x32e7),
    (0x0914f, 0x32e8), (0x09150, 0x32e6), (0x09152, 0x1d06), (0x09153, 0x3551), (0x09155, 0x3552), (0x09156, 0x354e),
    (0x09157, 0x1eec), (0x09158, 0x354f), (0x0915a, 0x3550), (0x0915f, 0x37ee), (0x09160, 0x37f0), (0x09161, 0x37ec),
    (0x09162, 0x37ef), (0x09163, 0x20b0), (0x09164, 0x37ed), (0x09165, 0x20b1), (0x09168, 0x389f), (0x09169, 0x226d),
    (0x0916a, 0x226c), (0x0916c, 0x226b), (0x0916e, 0x3a8d), (0x0916f, 0x3a8e), (0x09172, 0x3cea), (0x09173, 0x3cec),
    (0x09174, 0x23f6), (0x09175, 0x23f3), (0x09177, 0x23f5), (0x09178, 0x23f4), (0x09179, 0x3ceb), (0x0917a, 0x3ce9),
    (0x09180, 0x3f4c), (0x09181, 0x3f49), (0x09182, 0x3f4a), (0x09183, 0x2576), (0x09184, 0x3f4b), (0x09185, 0x3f46),
    (0x09186, 0x3f47), (0x09187, 0x2573), (0x09189, 0x2574), (0x0918a, 0x3f48), (0x0918b, 0x2575), (0x0918d, 0x417b),
    (0x0918f, 0x417c), (0x09190, 0x4179), (0x09191, 0x417a), (0x09192, 0x2698), (0x09193, 0x4178), (0x09199, 0x433f),
    (0x0919a, 0x433c), (0x0919b, 0x433e), (0x0919c, 0x27be), (0x0919d, 0x4342), (0x0919e, 0x27bd), (0x0919f, 0x4340),
    (0x091a0, 0x4343), (0x091a1, 0x4341), (0x091a2, 0x433d), (0x091a3, 0x27bc), (0x091a5, 0x44bf), (0x091a7, 0x44c0),
    (0x091a8, 0x44be), (0x091aa, 0x44c2), (0x091ab, 0x2860), (0x091ac, 0x2861), (0x091ad, 0x4609), (0x091ae, 0x28ff),
    (0x091af, 0x44c1), (0x091b0, 0x4608), (0x091b1, 0x28fe), (0x091b2, 0x470a), (0x091b3, 0x470b), (0x091b4, 0x2974),
    (0x091b5, 0x4709), (0x091b7, 0x4708), (0x091b9, 0x47de), (0x091ba, 0x29bc), (0x091bc, 0x4904), (0x091bd, 0x4961),
    (0x091be, 0x4960), (0x091c0, 0x2a54), (0x091c1, 0x2a6e), (0x091c2, 0x4962), (0x091c3, 0x49c9), (0x091c5, 0x2a80),
    (0x091c6, 0x1845), (0x091c7, 0x19b9), (0x091c9, 0x226e), (0x091cb, 0x2975), (0x091cc, 0x1846), (0x091cd, 0x1b45),
    (0x091ce, 0x1eed), (0x091cf, 0x20b2), (0x091d0, 0x2862), (0x091d1, 0x19ba), (0x091d3, 0x30d2), (0x091d4, 0x30d1),
    (0x091d5, 0x32e9), (0x091d6, 0x4b8d), (0x091d7, 0x1d0b), (0x091d8, 0x1d09), (0x091d9, 0x1d0d), (0x091da, 0x32eb),
    (0x091dc, 0x1d0c), (0x091dd, 0x1d0a), (0x091e2, 0x32ea), (0x091e3, 0x1ef0), (0x091e4, 0x3558), (0x091e6, 0x1eef),
    (0x091e7, 0x1ef1), (0x091e8, 0x355d), (0x091e9, 0x1ef3), (0x091ea, 0x355a), (0x091eb, 0x355b), (0x091ec, 0x3553),
    (0x091ed, 0x1ef2), (0x091ee, 0x355e), (0x091f1, 0x3555), (0x091f3, 0x3556), (0x091f4, 0x3554), (0x091f5, 0x1eee),
    (0x091f7, 0x355c), (0x091f8, 0x3557), (0x091f9, 0x3559), (0x091fd, 0x37fc), (0x091ff, 0x37fb), (0x09200, 0x37f9),
    (0x09201, 0x37f1), (0x09202, 0x3800), (0x09203, 0x37f4), (0x09204, 0x37fe), (0x09205, 0x3805), (0x09206, 0x37fd),
    (0x09207, 0x20ba), (0x09209, 0x20b6), (0x0920a, 0x37f2), (0x0920c, 0x37f8), (0x0920d, 0x20b8), (0x0920f, 0x37f7),
    (0x09210, 0x20b9), (0x09211, 0x20bb), (0x09212, 0x37fa), (0x09214, 0x20b3), (0x09215, 0x20b4), (0x09216, 0x3806),
    (0x09217, 0x3804), (0x09219, 0x3803), (0x0921a, 0x37f5), (0x0921c, 0x3801), (0x0921e, 0x20b7), (0x09223, 0x20b5),
    (0x09224, 0x3802), (0x09225, 0x37f3), (0x09226, 0x37f6), (0x09227, 0x37ff), (0x0922d, 0x3d0f), (0x0922e, 0x3a98),
    (0x09230, 0x3a91), (0x09231, 0x3aa4), (0x09232, 0x3aad), (0x09233, 0x3a94), (0x09234, 0x2279), (0x09236, 0x3aa1),
    (0x09237, 0x226f), (0x09238, 0x2271), (0x09239, 0x227d), (0x0923a, 0x3a92), (0x0923c, 0x4c07), (0x0923d, 0x2272),
    (0x0923e, 0x2274), (0x0923f, 0x227e), (0x09240, 0x2273), (0x09245, 0x227c), (0x09246, 0x3a9a), (0x09248, 0x3a8f),
    (0x09249, 0x227a), (0x0924a, 0x3a99), (0x0924b, 0x2276), (0x0924c, 0x3aab), (0x0924d, 0x227b), (0x0924e, 0x3aa9),
    (0x0924f, 0x3a9d), (0x09250, 0x3aa7), (0x09251, 0x2278), (0x09252, 0x3a90), (0x09253, 0x3aaa), (0x09254, 0x3aa5),
    (0x09256, 0x3aac), (0x09257, 0x2270), (0x0925a, 0x227f), (0x0925b, 0x2275), (0x0925e, 0x3a96), (0x09260, 0x3a9e),
    (0x09261, 0x3aa2), (0x09263, 0x3aa6), (0x09264, 0x2277), (0x09265, 0x3a95), (0x09266, 0x3a93), (0x09267, 0x3a9f),
    (0x0926c, 0x3a9c), (0x0926d, 0x3a9b), (0x0926f, 0x3aa0), (0x09270, 0x3aa3), (0x09272, 0x3aa8), (0x09276, 0x3cef),
    (0x09278, 0x23f7), (0x09279, 0x3cf9), (0x0927a, 0x3cf1), (0x0927b, 0x23fc), (0x0927c, 0x2400), (0x0927d, 0x3d02),
    (0x0927e, 0x3d0a), (0x0927f, 0x3cfb), (0x09280, 0x23f8), (0x09282, 0x3cff), (0x09283, 0x3a97), (0x09285, 0x23f9),
    (0x09286, 0x3d06), (0x09287, 0x3d0b), (0x09288, 0x3d03), (0x0928a, 0x3d05), (0x0928b, 0x3d0e), (0x0928c, 0x3d07),
    (0x0928d, 0x3cf5), (0x0928e, 0x3cfe), (0x09291, 0x2401), (0x09293, 0x23fd), (0x09294, 0x3cf3), (0x09295, 0x3d00),
    (0x09296, 0x23fb), (0x09297, 0x3cfa), (0x09298, 0x23fa), (0x09299, 0x3d08), (0x0929a, 0x3cf7), (0x0929b, 0x3cf0),
    (0x0929c, 0x23fe), (0x0929d, 0x3d0d), (0x092a0, 0x3cf2), (0x092a1, 0x3d04), (0x092a2, 0x3d01), (0x092a3, 0x3cfc),
    (0x092a4, 0x3cee), (0x092a5, 0x3ced), (0x092a6, 0x3cf6), (0x092a7, 0x3d09), (0x092a8, 0x23ff), (0x092a9, 0x3d0c),
    (0x092aa, 0x3cf4), (0x092ab, 0x3cf8), (0x092ac, 0x257b), (0x092b2, 0x2583), (0x092b3, 0x257e), (0x092b4, 0x3f6d),
    (0x092b5, 0x3f6a), (0x092b6, 0x3f52), (0x092b7, 0x2579), (0x092b9, 0x4a0d), (0x092bb, 0x2578), (0x092bc, 0x257f),
    (0x092c0, 0x3f50), (0x092c1, 0x257d), (0x092c2, 0x3f5c), (0x092c3, 0x3f4e), (0x092c4, 0x3f4f), (0x092c5, 0x2577),
    (0x092c6, 0x3f6c), (0x092c7, 0x2581), (0x092c8, 0x3f5f), (0x092c9, 0x3f64), (0x092ca, 0x3f5e), (0x092cb, 0x418e),
    (0x092cc, 0x3f5a), (0x092cd, 0x3f62), (0x092ce, 0x3f60), (0x092cf, 0x3f53), (0x092d0, 0x3f4d), (0x092d1, 0x3f68),
    (0x092d2, 0x2580), (0x092d3, 0x3f69), (0x092d5, 0x3f63), (0x092d7, 0x3f58), (0x092d8, 0x3f56), (0x092d9, 0x3f51),
    (0x092db, 0x4a36), (0x092dd, 0x3f59), (0x092de, 0x3f66), (0x092df, 0x3f55), (0x092e0, 0x3f65), (0x092e1, 0x3f6b),
    (0x092e4, 0x257c), (0x092e6, 0x3f61), (0x092e7, 0x3f67), (0x092e8, 0x3f5d), (0x092e9, 0x3f57), (0x092ea, 0x257a),
    (0x092ee, 0x3cfd), (0x092ef, 0x3f5b), (0x092f0, 0x2582), (0x092f1, 0x3f54), (0x092f7, 0x4194), (0x092f8, 0x269b),
    (0x092f9, 0x4193), (0x092fa, 0x4190), (0x092fb, 0x41a3), (0x092fc, 0x269f), (0x092fe, 0x41a0), (0x092ff, 0x4198),
    (0x09300, 0x41a2), (0x09301, 0x4189), (0x09302, 0x4196), (0x09304, 0x26a1), (0x09306, 0x4181), (0x09308, 0x417f),
    (0x09309, 0x41a1), (0x0930b, 0x419f), (0x0930c, 0x419e), (0x0930d, 0x418d), (0x0930e, 0x418c), (0x0930f, 0x4182),
    (0x09310, 0x26a3), (0x09312, 0x4188), (0x09313, 0x4192), (0x09314, 0x419d), (0x09315, 0x26a6), (0x09316, 0x41a4),
    (0x09318, 0x27c6), (0x09319, 0x26a8), (0x0931a, 0x26a2), (0x0931b, 0x4186), (0x0931d, 0x418f), (0x0931e, 0x417e),
    (0x0931f, 0x4180), (0x09320, 0x2699), (0x09321, 0x26a5), (0x09322, 0x269e), (0x09323, 0x4187), (0x09324, 0x4197),
    (0x09325, 0x4191), (0x09326, 0x26a4), (0x09327, 0x417d), (0x09328, 0x27c1), (0x09329, 0x4199), (0x0932a, 0x419c),
    (0x0932b, 0x26a0), (0x0932d, 0x418b), (0x0932e, 0x26a7), (0x0932f, 0x269d), (0x09333, 0x269c), (0x09334, 0x4195),
    (0x09335, 0x419b), (0x09336, 0x269a), (0x09338, 0x4184), (0x09339, 0x419a), (0x0933c, 0x4185), (0x09340, 0x4b84),
    (0x09341, 0x4cae), (0x09344, 0x4a40), (0x09346, 0x418a), (0x09347, 0x4349), (0x09349, 0x434e), (0x0934a, 0x27c3),
    (0x0934b, 0x27c5), (0x0934c, 0x4354), (0x0934d, 0x27bf), (0x0934e, 0x4363), (0x0934f, 0x435a), (0x09350, 0x434f),
    (0x09351, 0x4350), (0x09352, 0x4359), (0x09354, 0x27cc), (0x09355, 0x4358), (0x09356, 0x4348), (0x09357, 0x4357),
    (0x09358, 0x434b), (0x09359, 0x4364), (0x0935a, 0x27cb), (0x0935b, 0x27c9), (0x0935c, 0x434c), (0x0935e, 0x435f),
    (0x09360, 0x4351), (0x09361, 0x435e), (0x09362, 0x4c9f), (0x09363, 0x4360), (0x09364, 0x4347), (0x09365, 0x27c4),
    (0x09367, 0x4361), (0x0936a, 0x4355), (0x0936c, 0x27c8), (0x0936d, 0x4352), (0x09370, 0x27ca), (0x09371, 0x435b),
    (0x09375, 0x27c2), (0x09376, 0x434d), (0x09377, 0x435c), (0x09379, 0x4356), (0x0937a, 0x4183), (0x0937b, 0x435d),
    (0x0937c, 0x434a), (0x0937e, 0x27c7), (0x09380, 0x4362), (0x09382, 0x27c0), (0x09383, 0x4345), (0x09385, 0x4cf7),
    (0x09388, 0x44d0), (0x09389, 0x44c9), (0x0938a, 0x2864), (0x0938c, 0x44c4), (0x0938d, 0x44d3), (0x0938e, 0x44cb),
    (0x0938f, 0x4353), (0x09391, 0x44d5), (0x09392, 0x44c5), (0x09394, 0x2863), (0x09395, 0x44cf), (0x09396, 0x2865),
    (0x09397, 0x286d), (0x09398, 0x286b), (0x09399, 0x44d1), (0x0939a, 0x286c), (0x0939b, 0x44c7), (0x0939d, 0x44c8),
    (0x0939e, 0x44cd), (0x0939f, 0x44d2), (0x093a1, 0x4344), (0x093a2, 0x2866), (0x093a3, 0x44da), (0x093a4, 0x44d7),
    (0x093a5, 0x44db), (0x093a6, 0x44ce), (0x093a7, 0x44ca), (0x093a8, 0x44d8), (0x093a9, 0x4614), (0x093aa, 0x44cc),
    (0x093ac, 0x2869), (0x093ae, 0x2868), (0x093af, 0x4346), (0x093b0, 0x286a), (0x093b1, 0x44d4), (0x093b2, 0x44d6),
    (0x093b3, 0x2867), (0x093b4, 0x44d9), (0x093b5, 0x44c3), (0x093b7, 0x44c6), (0x093c0, 0x461d), (0x093c2, 0x460d),
    (0x093c3, 0x2903), (0x093c4, 0x461b), (0x093c7, 0x460b), (0x093c8, 0x2904), (0x093ca, 0x4616), (0x093cc, 0x4612),
    (0x093cd, 0x2909), (0x093ce, 0x461c), (0x093cf, 0x460c), (0x093d0, 0x460f), (0x093d1, 0x2901), (0x093d2, 0x461e),
    (0x093d3, 0x4b0b), (0x093d4, 0x4617), (0x093d5, 0x461a), (0x093d6, 0x2907), (0x093d7, 0x290c), (0x093d8, 0x290a),
    (0x093d9, 0x4613), (0x093da, 0x460e), (0x093dc, 0x2905), (0x093dd, 0x2906), (0x093de, 0x460a), (0x093df, 0x2902),
    (0x093e1, 0x2900), (0x093e2, 0x2908), (0x093e3, 0x4619), (0x093e4, 0x290b), (0x093e6, 0x4615), (0x093e7, 0x461f),
    (0x093e8, 0x290d), (0x093ec, 0x4611), (0x093ee, 0x4618), (0x093f0, 0x4c75), (0x093f1, 0x4ce3), (0x093f5, 0x4718),
    (0x093f6, 0x4726), (0x093f7, 0x471a), (0x093f8, 0x4721), (0x093f9, 0x4610), (0x093fa, 0x471f), (0x093fb, 0x470e),
    (0x093fc, 0x4724), (0x093fd, 0x2978), (0x093fe, 0x4712), (0x093ff, 0x4723), (0x09400, 0x4719), (0x09403, 0x2977),
    (0x09406, 0x4728), (0x09407, 0x471b), (0x09409, 0x4720), (0x0940a, 0x4722), (0x0940b, 0x470c), (0x0940c, 0x4725),
    (0x0940d, 0x4717), (0x0940e, 0x471c), (0x0940f, 0x4710), (0x09410, 0x4714), (0x09411, 0x4727), (0x09412, 0x471e),
    (0x09413, 0x470d), (0x09414, 0x4711), (0x09415, 0x4713), (0x09416, 0x471d), (0x09418, 0x2976), (0x09419, 0x4716),
    (0x0941b, 0x4b74), (0x09420, 0x470f), (0x09428, 0x4715), (0x09429, 0x47e2), (0x0942a, 0x47e7), (0x0942b, 0x29c3),
    (0x0942c, 0x47e9), (0x0942e, 0x29bd), (0x09430, 0x47e5), (0x09431, 0x47eb), (0x09432, 0x29c2), (0x09433, 0x29be),
    (0x09435, 0x29bf), (0x09436, 0x47e1), (0x09437, 0x47e8), (0x09438, 0x29c1), (0x09439, 0x47e6), (0x0943a, 0x29c0),
    (0x0943b, 0x47e0), (0x0943c, 0x47e4), (0x0943d, 0x47e3), (0x0943f, 0x47df), (0x09440, 0x47ea), (0x09442, 0x4ca9),
    (0x09443, 0x4cac), (0x09444, 0x2a03), (0x09445, 0x488b), (0x09446, 0x488e), (0x09447, 0x488a), (0x09448, 0x488c),
    (0x09449, 0x488d), (0x0944a, 0x4887), (0x0944b, 0x4888), (0x0944c, 0x4885), (0x0944f, 0x4889), (0x09450, 0x4886),
    (0x09451, 0x2a04), (0x09452, 0x2a05), (0x09455, 0x4906), (0x09457, 0x4908), (0x0945d, 0x4907), (0x0945e, 0x4909),
    (0x09460, 0x2a32), (0x09462, 0x4905), (0x09463, 0x2a31), (0x09464, 0x2a33), (0x09468, 0x4964), (0x09469, 0x4965),
    (0x0946a, 0x2a55), (0x0946b, 0x4963), (0x0946d, 0x49ab), (0x0946e, 0x49aa), (0x0946f, 0x49ac), (0x09470, 0x2a70),
    (0x09471, 0x49ad), (0x09472, 0x2a6f), (0x09473, 0x49ae), (0x09474, 0x49ca), (0x09475, 0x49cd), (0x09476, 0x49cc),
    (0x09477, 0x2a79), (0x09478, 0x49cb), (0x0947b, 0x4bce), (0x0947c, 0x2a83), (0x0947d, 0x2a81), (0x0947e, 0x2a82),
    (0x0947f, 0x2a88), (0x09480, 0x49f6), (0x09481, 0x49f7), (0x09482, 0x49f5), (0x09483, 0x49ff), (0x09577, 0x19bb),
    (0x0957a, 0x355f), (0x0957b, 0x3807), (0x0957c, 0x3f6e), (0x0957d, 0x4620), (0x09580, 0x19bc), (0x09582, 0x1b46),
    (0x09583, 0x1d0e), (0x09586, 0x3560), (0x09588, 0x3561), (0x09589, 0x1ef4), (0x0958b, 0x20be), (0x0958c, 0x3809),
    (0x0958d, 0x3808), (0x0958e, 0x20c2), (0x0958f, 0x20bd), (0x09590, 0x380a), (0x09591, 0x20bf), (0x09592, 0x20c1),
    (0x09593, 0x20c0), (0x09594, 0x20bc), (0x09598, 0x2280), (0x0959b, 0x3ab1), (0x0959c, 0x3aaf), (0x0959e, 0x3ab0),
    (0x0959f, 0x3aae), (0x095a1, 0x2402), (0x095a3, 0x2405), (0x095a4, 0x2407), (0x095a5, 0x2406), (0x095a8, 0x2403),
    (0x095a9, 0x2404), (0x095ab, 0x3f70), (0x095ac, 0x3f6f), (0x095ad, 0x2584), (0x095ae, 0x3f71), (0x095b0, 0x3f72),
    (0x095b1, 0x2585), (0x095b5, 0x41ac), (0x095b6, 0x41aa), (0x095b7, 0x436a), (0x095b9, 0x41a8), (0x095ba, 0x41a9),
    (0x095bb, 0x26a9), (0x095bc, 0x41a5), (0x095bd, 0x41ad), (0x095be, 0x41a7), (0x095bf, 0x41ab), (0x095c0, 0x4366),
    (0x095c3, 0x4368), (0x095c5, 0x4369), (0x095c6, 0x27d1), (0x095c7, 0x4365), (0x095c8, 0x27d0), (0x095c9, 0x4367),
    (0x095ca, 0x27cd), (0x095cb, 0x27ce), (0x095cc, 0x27cf), (0x095cd, 0x41a6), (0x095d0, 0x2870), (0x095d1, 0x44de),
    (0x095d2, 0x44dc), (0x095d3, 0x44dd), (0x095d4, 0x286e), (0x095d5, 0x2871), (0x095d6, 0x286f), (0x095da, 0x4621),
    (0x095db, 0x4622), (0x095dc, 0x290e), (0x095de, 0x4729), (0x095df, 0x472b), (0x095e0, 0x472a), (0x095e1, 0x2979),
    (0x095e2, 0x29c4), (0x095e3, 0x47ee), (0x095e4, 0x47ed), (0x095e5, 0x47ec), (0x0961c, 0x19bd), (0x0961e, 0x2c70),
    (0x09620, 0x2cdd), (0x09621, 0x1738), (0x09622, 0x2cdb), (0x09623, 0x2cde), (0x09624, 0x2cdc), (0x09628, 0x2dae),
    (0x0962a, 0x184a), (0x0962c, 0x184b), (0x0962d, 0x2db0), (0x0962e, 0x1848), (0x0962f, 0x2daf), (0x09630, 0x2dad),
    (0x09631, 0x1849), (0x09632, 0x1847), (0x09639, 0x2f12), (0x0963a, 0x2f15), (0x0963b, 0x19c0), (0x0963c, 0x2f14),
    (0x0963d, 0x2f13), (0x0963f, 0x19bf), (0x09640, 0x19be), (0x09642, 0x19c2), (0x09643, 0x2f16), (0x09644, 0x19c1),
    (0x0964a, 0x30d7), (0x0964b, 0x1b48), (0x0964c, 0x1b49), (0x0964d, 0x1b4a), (0x0964e, 0x30d8), (0x0964f, 0x30d4),
    (0x09650, 0x1b47), (0x09651, 0x30d5), (0x09653, 0x30d6), (0x09654, 0x30d3), (0x09658, 0x1d15), (0x0965b, 0x1d12),
    (0x0965c, 0x32ec), (0x0965d, 0x1d13), (0x0965e, 0x1d16), (0x0965f, 0x32ed), (0x09661, 0x1d11), (0x09662, 0x1d0f),
    (0x09663, 0x1d10), (0x09664, 0x1d14), (0x0966a, 0x1ef5), (0x0966b, 0x3564), (0x0966c, 0x1efd), (0x0966d, 0x3563),
    (0x0966f, 0x3566), (0x09670, 0x1ef9), (0x09671, 0x3565), (0x09672, 0x20ca), (0x09673, 0x1ef7), (0x09674, 0x1efa),
    (0x09675, 0x1ef6), (0x09676, 0x1efb), (0x09677, 0x1efc), (0x09678, 0x1ef8), (0x0967c, 0x3562), (0x0967d, 0x20c6),
    (0x0967e, 0x380c), (0x09680, 0x3810), (0x09683, 0x380f), (0x09684, 0x20cb), (0x09685, 0x20c7), (0x09686, 0x20c8),
    (0x09687, 0x380b), (0x09688, 0x380d), (0x09689, 0x380e), (0x0968a, 0x20c3), (0x0968b, 0x20c5), (0x0968d, 0x20c9),
    (0x0968e, 0x20c4), (0x09691, 0x3ab4), (0x09692, 0x3ab2), (0x09693, 0x3ab3), (0x09694, 0x2282), (0x09695, 0x2283),
    (0x09697, 0x3ab5), (0x09698, 0x2281), (0x09699, 0x2408), (0x0969b, 0x240a), (0x0969c, 0x2409), (0x0969e, 0x3d10),
    (0x096a1, 0x3d11), (0x096a2, 0x3f74), (0x096a4, 0x3f73), (0x096a5, 0x4d2b), (0x096a7, 0x26aa), (0x096a8, 0x26ab),
    (0x096a9, 0x41ae), (0x096aa, 0x26ac), (0x096ac, 0x436d), (0x096ae, 0x436b), (0x096b0, 0x436c), (0x096b1, 0x27d2),
    (0x096b3, 0x44df), (0x096b4, 0x290f), (0x096b8, 0x27d3), (0x096b9, 0x19c3), (0x096bb, 0x1d17), (0x096bc, 0x32ee),
    (0x096bf, 0x3567), (0x096c0, 0x1efe), (0x096c1, 0x20cc), (0x096c2, 0x3811), (0x096c3, 0x3813), (0x096c4, 0x20ce),
    (0x096c5, 0x20cd), (0x096c6, 0x20cf), (0x096c7, 0x20d0), (0x096c8, 0x3812), (0x096c9, 0x2286), (0x096ca, 0x2287),
    (0x096cb, 0x2285), (0x096cc, 0x240b), (0x096cd, 0x2284), (0x096ce, 0x3ab6), (0x096d2, 0x240c), (0x096d3, 0x3f75),
    (0x096d4, 0x41af), (0x096d5, 0x26ad), (0x096d6, 0x27d4), (0x096d7, 0x44e0), (0x096d8, 0x44e4), (0x096d9, 0x2874),
    (0x096da, 0x44e1), (0x096db, 0x2875), (0x096dc, 0x2873), (0x096dd, 0x44e5), (0x096de, 0x2876), (0x096df, 0x44e3),
    (0x096e1, 0x4623), (0x096e2, 0x2872), (0x096e3, 0x2910), (0x096e5, 0x4966), (0x096e8, 0x19c4), (0x096e9, 0x1f00),
    (0x096ea, 0x1eff), (0x096ef, 0x20d1), (0x096f0, 0x3815), (0x096f1, 0x3814), (0x096f2, 0x20d2), (0x096f5, 0x3aba),
    (0x096f6, 0x228b), (0x096f7, 0x2288), (0x096f8, 0x3ab9), (0x096f9, 0x228a), (0x096fa, 0x3ab7), (0x096fb, 0x2289),
    (0x096fd, 0x3ab8), (0x096ff, 0x3d12), (0x09700, 0x240d), (0x09702, 0x3f78), (0x09704, 0x2586), (0x09705, 0x3f76),
    (0x09706, 0x2587), (0x09707, 0x2588), (0x09708, 0x3f77), (0x09709, 0x2589), (0x0970b, 0x41b0), (0x0970d, 0x26b1),
    (0x0970e, 0x26ae), (0x0970f, 0x26b3), (0x09710, 0x41b2), (0x09711, 0x26af), (0x09712, 0x41b1), (0x09713, 0x26b2),
    (0x09716, 0x26b0), (0x09718, 0x4370), (0x09719, 0x4372), (0x0971c, 0x27d5), (0x0971d, 0x4371), (0x0971e, 0x27d6),
    (0x0971f, 0x436f), (0x09720, 0x436e), (0x09722, 0x44e7), (0x09723, 0x44e6), (0x09724, 0x2877), (0x09725, 0x44e8),
    (0x09726, 0x4628), (0x09727, 0x2912), (0x09728, 0x4627), (0x09729, 0x4624), (0x0972a, 0x2911), (0x0972b, 0x4625),
    (0x0972c, 0x4626), (0x0972e, 0x472c), (0x0972f, 0x472d), (0x09730, 0x297a), (0x09732, 0x29c7), (0x09735, 0x47ef),
    (0x09738, 0x29c5), (0x09739, 0x29c6), (0x0973a, 0x47f0), (0x0973d, 0x2a06), (0x0973e, 0x2a07), (0x0973f, 0x488f),
    (0x09742, 0x2a56), (0x09743, 0x4968), (0x09744, 0x2a58), (0x09746, 0x4967), (0x09747, 0x4969), (0x09748, 0x2a57),
    (0x09749, 0x49af), (0x0974b, 0x49e3), (0x09752, 0x19c5), (0x09756, 0x228c), (0x09758, 0x3d13), (0x0975a, 0x3f79),
    (0x0975b, 0x26b4), (0x0975c, 0x26b5), (0x0975e, 0x19c6), (0x09760, 0x258a), (0x09761, 0x2913), (0x09762, 0x1b4b),
    (0x09766, 0x26b6), (0x09768, 0x2a34), (0x09769, 0x1b4c), (0x0976a, 0x3568), (0x0976c, 0x3816), (0x0976e, 0x3818),
    (0x09770, 0x3817), (0x09772, 0x3abe), (0x09773, 0x3abb), (0x09774, 0x228d), (0x09776, 0x228e), (0x09777, 0x3abc),
    (0x09778, 0x3abd), (0x0977a, 0x3d15), (0x0977b, 0x3d1a), (0x0977c, 0x240e), (0x0977d, 0x3d14), (0x0977e, 0x3d16),
    (0x0977f, 0x3d1d), (0x09780, 0x3d18), (0x09781, 0x3d1c), (0x09782, 0x3d19), (0x09783, 0x3d17), (0x09784, 0x3d1b),
    (0x09785, 0x240f), (0x09787, 0x4aea), (0x09788, 0x3f7c), (0x0978a, 0x3f7a), (0x0978b, 0x258c), (0x0978d, 0x258b),
    (0x0978e, 0x3f7b), (0x0978f, 0x258d), (0x09794, 0x41b5), (0x09797, 0x41b4), (0x09798, 0x26b7), (0x09799, 0x41b3),
    (0x0979a, 0x4373), (0x0979c, 0x4375), (0x0979d, 0x4377), (0x0979e, 0x4376), (0x097a0, 0x27d7), (0x097a1, 0x4374),
    (0x097a2, 0x44ef), (0x097a3, 0x2878), (0x097a4, 0x44ed), (0x097a5, 0x44f0), (0x097a6, 0x2879), (0x097a8, 0x44eb),
    (0x097aa, 0x44ee), (0x097ab, 0x44ec), (0x097ac, 0x44e9), (0x097ad, 0x287a), (0x097ae, 0x44ea), (0x097b3, 0x4629),
    (0x097b6, 0x462b), (0x097b7, 0x462a), (0x097b9, 0x472e), (0x097bb, 0x472f), (0x097bd, 0x4b81), (0x097bf, 0x47f1),
    (0x097c1, 0x2a09), (0x097c3, 0x2a08), (0x097c4, 0x490a), (0x097c5, 0x490b), (0x097c6, 0x2a59), (0x097c7, 0x496a),
    (0x097c9, 0x2a7a), (0x097cb, 0x1b4d), (0x097cc, 0x20d3), (0x097cd, 0x3d1f), (0x097ce, 0x3d1e), (0x097cf, 0x3f7e),
    (0x097d0, 0x3f7d), (0x097d3, 0x27d8), (0x097d4, 0x4379), (0x097d5, 0x4378), (0x097d6, 0x44f3), (0x097d7, 0x44f1),
    (0x097d8, 0x44f4), (0x097d9, 0x44f2), (0x097dc, 0x2914), (0x097dd, 0x462c), (0x097de, 0x462d), (0x097df, 0x462e),
    (0x097e1, 0x47f2), (0x097e3, 0x4890), (0x097e5, 0x496b), (0x097ed, 0x1b4e), (0x097f0, 0x41b6), (0x097f1, 0x437a),
    (0x097f3, 0x1b4f), (0x097f6, 0x2410), (0x097f8, 0x41b7), (0x097f9, 0x287b), (0x097fa, 0x44f5), (0x097fb, 0x2915),
    (0x097fd, 0x4730), (0x097fe, 0x4731), (0x097ff, 0x29c8), (0x09800, 0x490c), (0x09801, 0x1b50), (0x09802, 0x1f03),
    (0x09803, 0x1f04), (0x09804, 0x3569), (0x09805, 0x20d4), (0x09806, 0x20d5), (0x09807, 0x3819), (0x09808, 0x20d6),
    (0x0980a, 0x2292), (0x0980c, 0x2294), (0x0980d, 0x3ac0), (0x0980e, 0x3ac1), (0x0980f, 0x3abf), (0x09810, 0x228f),
    (0x09811, 0x2290), (0x09812, 0x2293), (0x09813, 0x2291), (0x09814, 0x4bc9), (0x09816, 0x3d20), (0x09817, 0x2411),
    (0x09818, 0x2412), (0x0981b, 0x3f85), (0x0981c, 0x2590), (0x0981d, 0x3f80), (0x0981e, 0x3f7f), (0x09820, 0x3f84),
    (0x09821, 0x258e), (0x09824, 0x26be), (0x09826, 0x3f81), (0x09827, 0x3f86), (0x09828, 0x3f83), (0x09829, 0x3f82),
    (0x0982b, 0x258f), (0x0982d, 0x26bc), (0x0982f, 0x41b9), (0x09830, 0x26b8), (0x09832, 0x41ba), (0x09835, 0x41b8),
    (0x09837, 0x26bb), (0x09838, 0x26b9), (0x09839, 0x26bd), (0x0983b, 0x26ba), (0x09841, 0x437b), (0x09843, 0x4380),
    (0x09844, 0x437c), (0x09845, 0x437f), (0x09846, 0x27d9), (0x09848, 0x42ae), (0x09849, 0x437e), (0x0984a, 0x437d),
    (0x0984c, 0x287e), (0x0984d, 0x287c), (0x0984e, 0x287f), (0x0984f, 0x287d), (0x09850, 0x44f6), (0x09851, 0x44f7),
    (0x09852, 0x44f8), (0x09853, 0x2880), (0x09857, 0x4632), (0x09858, 0x2917), (0x09859, 0x4630), (0x0985b, 0x2918),
    (0x0985c, 0x462f), (0x0985d, 0x4631), (0x0985e, 0x2916), (0x0985f, 0x4735), (0x09860, 0x4732), (0x09862, 0x4733),
    (0x09863, 0x4734), (0x09864, 0x47f3), (0x09865, 0x29ca), (0x09867, 0x29c9), (0x09869, 0x4892), (0x0986a, 0x4891),
    (0x0986b, 0x2a0a), (0x0986c, 0x4a5f), (0x0986f, 0x2a35), (0x09870, 0x2a5a), (0x09871, 0x2a71), (0x09872, 0x49b0),
    (0x09873, 0x49e4), (0x09874, 0x49e5), (0x098a8, 0x1b51), (0x098a9, 0x381a), (0x098ac, 0x3ac2), (0x098ad, 0x3d21),
    (0x098ae, 0x3d22), (0x098af, 0x2413), (0x098b1, 0x2414), (0x098b2, 0x3f87), (0x098b3, 0x2591), (0x098b6, 0x27da),
    (0x098b8, 0x44f9), (0x098ba, 0x2881), (0x098bb, 0x4635), (0x098bc, 0x2919), (0x098bd, 0x4634), (0x098be, 0x4636),
    (0x098bf, 0x4633), (0x098c0, 0x47f6), (0x098c1, 0x4736), (0x098c2, 0x4737), (0x098c4, 0x297b), (0x098c6, 0x47f5),
    (0x098c9, 0x47f4), (0x098cb, 0x4893), (0x098cc, 0x49e6), (0x098db, 0x1b52), (0x098df, 0x1b53), (0x098e2, 0x1d18),
    (0x098e3, 0x32ef), (0x098e5, 0x356a), (0x098e7, 0x20d7), (0x098e9, 0x20da), (0x098ea, 0x20d8), (0x098eb, 0x381b),
    (0x098ed, 0x20dc), (0x098ef, 0x20d9), (0x098f2, 0x20db), (0x098f4, 0x2296), (0x098f6, 0x3ac3), (0x098f9, 0x3ac4),
    (0x098fa, 0x3f89), (0x098fc, 0x2295), (0x098fd, 0x2297), (0x098fe, 0x2298), (0x09900, 0x3d24), (0x09902, 0x3d23),
    (0x09903, 0x2415), (0x09905, 0x2416), (0x09907, 0x3d25), (0x09908, 0x3f88), (0x09909, 0x2418), (0x0990a, 0x2592),
    (0x0990c, 0x2417), (0x09910, 0x26bf), (0x09911, 0x3f8a), (0x09912, 0x2594), (0x09913, 0x2593), (0x09914, 0x3f8b),
    (0x09915, 0x3f8e), (0x09916, 0x3f8c), (0x09917, 0x3f8d), (0x09918, 0x2595), (0x0991a, 0x26c4), (0x0991b, 0x26c2),
    (0x0991e, 0x26c1), (0x0991f, 0x41bc), (0x09921, 0x26c3), (0x09924, 0x41bb), (0x09925, 0x4381), (0x09927, 0x41bd),
    (0x09928, 0x26c0), (0x09929, 0x41be), (0x0992a, 0x4384), (0x0992b, 0x4382), (0x0992c, 0x4383), (0x0992d, 0x4388),
    (0x0992e, 0x2885), (0x0992f, 0x4387), (0x09930, 0x438a), (0x09931, 0x4389), (0x09932, 0x4386), (0x09933, 0x4385),
    (0x09935, 0x27db), (0x0993a, 0x44fc), (0x0993c, 0x44fb), (0x0993d, 0x2884), (0x0993e, 0x2882), (0x0993f, 0x2883),
    (0x09941, 0x44fa), (0x09943, 0x4639), (0x09945, 0x291a), (0x09947, 0x4638), (0x09948, 0x4637), (0x09949, 0x291b),
    (0x0994b, 0x473c), (0x0994c, 0x473b), (0x0994e, 0x4739), (0x09950, 0x4738), (0x09951, 0x297d), (0x09952, 0x297c),
    (0x09953, 0x473d), (0x09954, 0x4894), (0x09955, 0x2a0b), (0x09956, 0x47f8), (0x09957, 0x29cb), (0x09958, 0x47f7),
    (0x09959, 0x473a), (0x0995b, 0x4895), (0x0995c, 0x2a36), (0x0995e, 0x2a72), (0x0995f, 0x49b1), (0x09961, 0x49e7),
    (0x09996, 0x1b54), (0x09997, 0x356b), (0x09998, 0x438b), (0x09999, 0x1b55), (0x0999c, 0x3d27), (0x0999d, 0x3d26),
    (0x0999e, 0x41bf), (0x099a1, 0x438d), (0x099a3, 0x438c), (0x099a4, 0x4bf7), (0x099a5, 0x2886), (0x099a6, 0x463a),
    (0x099a7, 0x463b), (0x099a8, 0x297e), (0x099ab, 0x49e8), (0x099ac, 0x1d19), (0x099ad, 0x20de), (0x099ae, 0x20dd),
    (0x099af, 0x3ac5), (0x099b0, 0x3ac7), (0x099b1, 0x229a), (0x099b2, 0x3ac6), (0x099b3, 0x2299), (0x099b4, 0x229b),
    (0x099b5, 0x3ac8), (0x099b9, 0x3d29), (0x099ba, 0x3d2b), (0x099bb, 0x3d2a), (0x099bd, 0x3d2d), (0x099c1, 0x2419),
    (0x099c2, 0x3d2c), (0x099c3, 0x3d28), (0x099c7, 0x3d2e), (0x099c9, 0x3f95), (0x099cb, 0x3f98), (0x099cc, 0x3f9a),
    (0x099cd, 0x3f90), (0x099ce, 0x3f94), (0x099cf, 0x3f91), (0x099d0, 0x2597), (0x099d1, 0x259a), (0x099d2, 0x259c),
    (0x099d3, 0x3f92), (0x099d4, 0x3f93), (0x099d5, 0x259b), (0x099d6, 0x3f96), (0x099d7, 0x3f99), (0x099d8, 0x3f97),
    (0x099d9, 0x259d), (0x099db, 0x2599), (0x099dc, 0x3f8f), (0x099dd, 0x2596), (0x099df, 0x2598), (0x099e2, 0x26c6),
    (0x099e3, 0x41c5), (0x099e4, 0x41c3), (0x099e5, 0x41c2), (0x099e7, 0x41c8), (0x099e9, 0x41c7), (0x099ea, 0x41c6),
    (0x099ec, 0x41c1), (0x099ed, 0x26c5), (0x099ee, 0x41c0), (0x099f0, 0x41c4), (0x099f1, 0x26c7), (0x099f4, 0x4390),
    (0x099f6, 0x4394), (0x099f7, 0x4391), (0x099f8, 0x4393), (0x099f9, 0x4392), (0x099fa, 0x438f), (0x099fb, 0x4395),
    (0x099fc, 0x4398), (0x099fd, 0x4396), (0x099fe, 0x4397), (0x099ff, 0x27dd), (0x09a01, 0x27dc), (0x09a02, 0x438e),
    (0x09a03, 0x4399), (0x09a04, 0x4501), (0x09a05, 0x4504), (0x09a06, 0x4506), (0x09a07, 0x4505), (0x09a09, 0x44ff),
    (0x09a0a, 0x4503), (0x09a0b, 0x44fe), (0x09a0d, 0x4500), (0x09a0e, 0x2887), (0x09a0f, 0x44fd), (0x09a11, 0x4502),
    (0x09a14, 0x4648), (0x09a15, 0x463d), (0x09a16, 0x291c), (0x09a19, 0x291d), (0x09a1a, 0x463c), (0x09a1b, 0x4641),
    (0x09a1c, 0x4647), (0x09a1d, 0x463f), (0x09a1e, 0x4646), (0x09a20, 0x4643), (0x09a22, 0x4642), (0x09a23, 0x4645),
    (0x09a24, 0x4640), (0x09a25, 0x463e), (0x09a27, 0x4644), (0x09a29, 0x4744), (0x09a2a, 0x4742), (0x09a2b, 0x297f),
    (0x09a2c, 0x4741), (0x09a2d, 0x4747), (0x09a2e, 0x4745), (0x09a30, 0x2980), (0x09a31, 0x4740), (0x09a32, 0x473e),
    (0x09a34, 0x473f), (0x09a35, 0x2982), (0x09a36, 0x4743), (0x09a37, 0x2981), (0x09a38, 0x4746), (0x09a39, 0x47f9),
    (0x09a3a, 0x47ff), (0x09a3d, 0x47fa), (0x09a3e, 0x29cf), (0x09a3f, 0x4800), (0x09a40, 0x29ce), (0x09a41, 0x47fe),
    (0x09a42, 0x47fd), (0x09a43, 0x29cd), (0x09a44, 0x47fc), (0x09a45, 0x29cc), (0x09a46, 0x47fb), (0x09a48, 0x489b),
    (0x09a49, 0x489d), (0x09a4a, 0x489c), (0x09a4c, 0x4899), (0x09a4d, 0x2a0d), (0x09a4e, 0x4896), (0x09a4f, 0x489a),
    (0x09a50, 0x489f), (0x09a52, 0x489e), (0x09a53, 0x4897), (0x09a54, 0x4898), (0x09a55, 0x2a0c), (0x09a56, 0x490d),
    (0x09a57, 0x2a39), (0x09a59, 0x490e), (0x09a5a, 0x2a37), (0x09a5b, 0x2a38), (0x09a5e, 0x496c), (0x09a5f, 0x2a5b),
    (0x09a60, 0x49ce), (0x09a62, 0x2a7b), (0x09a64, 0x49e9), (0x09a65, 0x2a7c), (0x09a66, 0x49ea), (0x09a67, 0x49eb),
    (0x09a68, 0x49f9), (0x09a69, 0x49f8), (0x09a6a, 0x2a8b), (0x09a6b, 0x4a03), (0x09aa8, 0x1d1a), (0x09aab, 0x3aca),
    (0x09aad, 0x3ac9), (0x09aaf, 0x241a), (0x09ab0, 0x241b), (0x09ab1, 0x3d2f), (0x09ab3, 0x3f9b), (0x09ab4, 0x41cb),
    (0x09ab7, 0x259e), (0x09ab8, 0x26c8), (0x09ab9, 0x41c9), (0x09abb, 0x41cc), (0x09abc, 0x26c9), (0x09abe, 0x439a),
    (0x09abf, 0x41ca), (0x09ac0, 0x4507), (0x09ac1, 0x2888), (0x09ac2, 0x4649), (0x09ac6, 0x474a), (0x09ac7, 0x4748),
    (0x09aca, 0x4749), (0x09acd, 0x4801), (0x09acf, 0x29d0), (0x09ad0, 0x48a0), (0x09ad1, 0x2a3c), (0x09ad2, 0x2a0e),
    (0x09ad3, 0x2a3a), (0x09ad4, 0x2a3b), (0x09ad5, 0x496d), (0x09ad6, 0x2a73), (0x09ad8, 0x1d1b), (0x09adc, 0x4508),
    (0x09adf, 0x32f0), (0x09ae1, 0x229c), (0x09ae3, 0x3d30), (0x09ae6, 0x241c), (0x09ae7, 0x3d31), (0x09aeb, 0x3f9d),
    (0x09aec, 0x3f9c), (0x09aed, 0x26cb), (0x09aee, 0x259f), (0x09aef, 0x25a0), (0x09af1, 0x3fa0), (0x09af2, 0x3f9f),
    (0x09af3, 0x3f9e), (0x09af6, 0x41cd), (0x09af7, 0x41d0), (0x09af9, 0x41cf), (0x09afa, 0x41ce), (0x09afb, 0x26ca),
    (0x09afc, 0x439e), (0x09afd, 0x439c), (0x09afe, 0x439b), (0x09b01, 0x439d), (0x09b03, 0x2889), (0x09b04, 0x450a),
    (0x09b05, 0x450b), (0x09b06, 0x288a), (0x09b08, 0x4509), (0x09b0a, 0x464b), (0x09b0b, 0x464a), (0x09b0c, 0x464d),
    (0x09b0d, 0x291e), (0x09b0e, 0x464c), (0x09b10, 0x474b), (0x09b11, 0x474d), (0x09b12, 0x474c), (0x09b15, 0x4802),
    (0x09b16, 0x4805), (0x09b17, 0x4803), (0x09b18, 0x4804), (0x09b19, 0x48a1), (0x09b1a, 0x2a0f), (0x09b1e, 0x490f),
    (0x09b1f, 0x4910), (0x09b20, 0x4911), (0x09b22, 0x2a5c), (0x09b23, 0x2a74), (0x09b24, 0x49ec), (0x09b25, 0x1d1c),
    (0x09b27, 0x25a1), (0x09b28, 0x26cc), (0x09b29, 0x450c), (0x09b2b, 0x48a2), (0x09b2e, 0x49fa), (0x09b2f, 0x32f1),
    (0x09b31, 0x2a8c), (0x09b32, 0x1d1d), (0x09b33, 0x41d1), (0x09b35, 0x450d), (0x09b37, 0x464e), (0x09b3a, 0x4806),
    (0x09b3b, 0x48a3), (0x09b3c, 0x1d1e), (0x09b3e, 0x3d32), (0x09b3f, 0x3d33), (0x09b41, 0x241d), (0x09b42, 0x241e),
    (0x09b43, 0x3fa2), (0x09b44, 0x25a3), (0x09b45, 0x25a2), (0x09b46, 0x3fa1), (0x09b48, 0x439f), (0x09b4a, 0x450e),
    (0x09b4b, 0x4510), (0x09b4c, 0x450f), (0x09b4d, 0x288d), (0x09b4e, 0x288c), (0x09b4f, 0x288b), (0x09b51, 0x29d2),
    (0x09b52, 0x4807), (0x09b54, 0x29d1), (0x09b55, 0x48a5), (0x09b56, 0x48a4), (0x09b58, 0x2a5d), (0x09b59, 0x496e),
    (0x09b5a, 0x1f05), (0x09b5b, 0x3acb), (0x09b5f, 0x3d36), (0x09b60, 0x3d34), (0x09b61, 0x3d35), (0x09b64, 0x3fab),
    (0x09b66, 0x3fa6), (0x09b67, 0x3fa3), (0x09b68, 0x3faa), (0x09b6c, 0x3fac), (0x09b6f, 0x25a5), (0x09b70, 0x3fa9),
    (0x09b71, 0x3fa5), (0x09b74, 0x3fa4), (0x09b75, 0x3fa8), (0x09b76, 0x3fa7), (0x09b77, 0x25a4), (0x09b7a, 0x41dc),
    (0x09b7b, 0x41d7), (0x09b7c, 0x41d5), (0x09b7d, 0x41de), (0x09b7e, 0x41d6), (0x09b80, 0x41d2), (0x09b82, 0x41d8),
    (0x09b83, 0x4c4f), (0x09b85, 0x41d3), (0x09b86, 0x43a8), (0x09b87, 0x41d4), (0x09b88, 0x41df), (0x09b90, 0x41db),
    (0x09b91, 0x26cd), (0x09b92, 0x41da), (0x09b93, 0x41d9), (0x09b95, 0x41dd), (0x09b9a, 0x43a0), (0x09b9b, 0x43a3),
    (0x09b9e, 0x43a2), (0x09ba0, 0x43aa), (0x09ba1, 0x43a5), (0x09ba2, 0x43a9), (0x09ba4, 0x43a7), (0x09ba5, 0x43a6),
    (0x09ba6, 0x43a4), (0x09ba8, 0x43a1), (0x09baa, 0x27e0), (0x09bab, 0x27df), (0x09bad, 0x27e1), (0x09bae, 0x27de),
    (0x09baf, 0x43ab), (0x09bb5, 0x4516), (0x09bb6, 0x4519), (0x09bb8, 0x4517), (0x09bb9, 0x451b), (0x09bbd, 0x451c),
    (0x09bbf, 0x4514), (0x09bc0, 0x2892), (0x09bc1, 0x4515), (0x09bc3, 0x4513), (0x09bc4, 0x451a), (0x09bc6, 0x4512),
    (0x09bc7, 0x4511), (0x09bc8, 0x2891), (0x09bc9, 0x288f), (0x09bca, 0x288e), (0x09bd3, 0x4518), (0x09bd4, 0x4657),
    (0x09bd5, 0x465d), (0x09bd6, 0x2921), (0x09bd7, 0x4658), (0x09bd9, 0x465b), (0x09bda, 0x465f), (0x09bdb, 0x2922),
    (0x09bdc, 0x465a), (0x09bde, 0x4652), (0x09be0, 0x4651), (0x09be1, 0x465e), (0x09be2, 0x4655), (0x09be4, 0x4653),
    (0x09be5, 0x465c), (0x09be6, 0x4654), (0x09be7, 0x2920), (0x09be8, 0x291f), (0x09bea, 0x464f), (0x09beb, 0x4650),
    (0x09bec, 0x4659), (0x09bf0, 0x4656), (0x09bf7, 0x4750), (0x09bf8, 0x4753), (0x09bfd, 0x2890), (0x09c05, 0x4751),
    (0x09c06, 0x4757), (0x09c07, 0x4755), (0x09c08, 0x474f), (0x09c09, 0x475a), (0x09c0b, 0x474e), (0x09c0d, 0x2984),
    (0x09c0e, 0x4756), (0x09c12, 0x4752), (0x09c13, 0x2983), (0x09c14, 0x4759), (0x09c17, 0x4758), (0x09c1c, 0x480a),
    (0x09c1d, 0x4809), (0x09c21, 0x4810), (0x09c23, 0x480c), (0x09c24, 0x480f), (0x09c25, 0x29d4), (0x09c28, 0x480d),
    (0x09c29, 0x480e), (0x09c2b, 0x4808), (0x09c2c, 0x480b), (0x09c2d, 0x29d3), (0x09c31, 0x2a11), (0x09c32, 0x48b0),
    (0x09c33, 0x48ab), (0x09c34, 0x48af), (0x09c36, 0x48b2), (0x09c37, 0x48ae), (0x09c39, 0x48aa), (0x09c3b, 0x2a13),
    (0x09c3c, 0x48ad), (0x09c3d, 0x48b1), (0x09c3e, 0x2a12), (0x09c3f, 0x48a8), (0x09c40, 0x4754), (0x09c41, 0x48ac),
    (0x09c44, 0x48a9), (0x09c46, 0x48a6), (0x09c48, 0x48a7), (0x09c49, 0x2a10), (0x09c4a, 0x4915), (0x09c4b, 0x4917),
    (0x09c4c, 0x491a), (0x09c4d, 0x4916), (0x09c4e, 0x491b), (0x09c50, 0x4914), (0x09c52, 0x4912), (0x09c54, 0x2a3d),
    (0x09c55, 0x4918), (0x09c56, 0x2a3f), (0x09c57, 0x2a3e), (0x09c58, 0x4913), (0x09c59, 0x4919), (0x09c5e, 0x4973),
    (0x09c5f, 0x2a5e), (0x09c60, 0x4974), (0x09c62, 0x4972), (0x09c63, 0x496f), (0x09c66, 0x4971), (0x09c67, 0x4970),
    (0x09c68, 0x49b2), (0x09c6d, 0x49b4), (0x09c6e, 0x49b3), (0x09c71, 0x49d1), (0x09c73, 0x49d0), (0x09c74, 0x49cf),
    (0x09c75, 0x49d2), (0x09c77, 0x2a84), (0x09c78, 0x2a85), (0x09c79, 0x4a00), (0x09c7a, 0x4a04), (0x09ce5, 0x1f06),
    (0x09ce6, 0x381c), (0x09ce7, 0x3ace), (0x09ce9, 0x229d), (0x09cea, 0x3acc), (0x09ced, 0x3acd), (0x09cf1, 0x3d37),
    (0x09cf2, 0x3d38), (0x09cf3, 0x2421), (0x09cf4, 0x241f), (0x09cf5, 0x3d39), (0x09cf6, 0x2420), (0x09cf7, 0x3fb1),
    (0x09cf9, 0x3fb4), (0x09cfa, 0x3fae), (0x09cfb, 0x3fb5), (0x09cfc, 0x3fad), (0x09cfd, 0x3faf), (0x09cff, 0x3fb0),
    (0x09d00, 0x3fb3), (0x09d03, 0x25a8), (0x09d04, 0x3fb8), (0x09d05, 0x3fb7), (0x09d06, 0x25a6), (0x09d07, 0x3fb2),
    (0x09d08, 0x3fb6), (0x09d09, 0x25a7), (0x09d10, 0x41e9), (0x09d12, 0x26d2), (0x09d14, 0x41e4), (0x09d15, 0x26ce),
    (0x09d17, 0x41e1), (0x09d18, 0x41e7), (0x09d19, 0x41ea), (0x09d1b, 0x26d3), (0x09d1d, 0x41e6), (0x09d1e, 0x41e3),
    (0x09d1f, 0x41eb), (0x09d20, 0x41e2), (0x09d22, 0x41e8), (0x09d23, 0x26cf), (0x09d25, 0x41e0), (0x09d26, 0x26d0),
    (0x09d28, 0x26d1), (0x09d29, 0x41e5), (0x09d2d, 0x43bd), (0x09d2e, 0x43b0), (0x09d2f, 0x43b1), (0x09d30, 0x43b4),
    (0x09d31, 0x43b2), (0x09d33, 0x43ac), (0x09d34, 0x4a74), (0x09d36, 0x43af), (0x09d37, 0x43b9), (0x09d38, 0x43b3),
    (0x09d3b, 0x27e2), (0x09d3d, 0x43bb), (0x09d3e, 0x43b8), (0x09d3f, 0x27e3), (0x09d40, 0x43ba), (0x09d41, 0x43ad),
    (0x09d42, 0x43b6), (0x09d43, 0x43b7), (0x09d45, 0x43b5), (0x09d4a, 0x4520), (0x09d4b, 0x4522), (0x09d4c, 0x4525),
    (0x09d4f, 0x451f), (0x09d51, 0x2893), (0x09d52, 0x4527), (0x09d53, 0x451e), (0x09d54, 0x4528), (0x09d56, 0x4524),
    (0x09d57, 0x4526), (0x09d58, 0x452a), (0x09d59, 0x4523), (0x09d5a, 0x452b), (0x09d5b, 0x4521), (0x09d5c, 0x451d),
    (0x09d5d, 0x2894), (0x09d5f, 0x4529), (0x09d60, 0x2895), (0x09d61, 0x2924), (0x09d67, 0x43ae), (0x09d68, 0x4679),
    (0x09d69, 0x4670), (0x09d6a, 0x2926), (0x09d6b, 0x466c), (0x09d6c, 0x2927), (0x09d6f, 0x4675), (0x09d70, 0x466f),
    (0x09d71, 0x4665), (0x09d72, 0x2925), (0x09d73, 0x4672), (0x09d74, 0x466d), (0x09d75, 0x466e), (0x09d77, 0x4660),
    (0x09d78, 0x4667), (0x09d79, 0x4676), (0x09d7b, 0x4673), (0x09d7d, 0x466b), (0x09d7f, 0x4677), (0x09d80, 0x4666),
    (0x09d81, 0x4661), (0x09d82, 0x4674), (0x09d84, 0x4663), (0x09d85, 0x4671), (0x09d86, 0x4668), (0x09d87, 0x4678),
    (0x09d88, 0x4664), (0x09d89, 0x2923), (0x09d8a, 0x4662), (0x09d8b, 0x4669), (0x09d8c, 0x466a), (0x09d90, 0x4761),
    (0x09d92, 0x475f), (0x09d94, 0x4764), (0x09d96, 0x4770), (0x09d97, 0x4767), (0x09d98, 0x4760), (0x09d99, 0x475c),
    (0x09d9a, 0x4769), (0x09d9b, 0x4762), (0x09d9c, 0x4765), (0x09d9d, 0x475e), (0x09d9e, 0x476c), (0x09d9f, 0x475b),
    (0x09da0, 0x4763), (0x09da1, 0x4768), (0x09da2, 0x476a), (0x09da3, 0x476d), (0x09da4, 0x475d), (0x09da6, 0x4771),
    (0x09da7, 0x4772), (0x09da8, 0x476b), (0x09da9, 0x476f), (0x09daa, 0x4766), (0x09dac, 0x4820), (0x09dad, 0x4823),
    (0x09daf, 0x29d5), (0x09db1, 0x4822), (0x09db2, 0x4827), (0x09db3, 0x4825), (0x09db4, 0x29d6), (0x09db5, 0x481c),
    (0x09db6, 0x4812), (0x09db7, 0x4811), (0x09db8, 0x29d8), (0x09db9, 0x481e), (0x09dba, 0x481f), (0x09dbb, 0x481b),
    (0x09dbc, 0x4813), (0x09dbe, 0x4818), (0x09dbf, 0x476e), (0x09dc1, 0x4814), (0x09dc2, 0x29d7), (0x09dc3, 0x481a),
    (0x09dc5, 0x4819), (0x09dc7, 0x4815), (0x09dc8, 0x4821), (0x09dca, 0x4816), (0x09dcb, 0x48b7), (0x09dcc, 0x4824),
    (0x09dcd, 0x4826), (0x09dce, 0x481d), (0x09dcf, 0x4817), (0x09dd0, 0x48b8), (0x09dd1, 0x48ba), (0x09dd2, 0x48b4),
    (0x09dd3, 0x2a14), (0x09dd5, 0x48c1), (0x09dd6, 0x48bf), (0x09dd7, 0x2a15), (0x09dd8, 0x48be), (0x09dd9, 0x48bd),
    (0x09dda, 0x48b6), (0x09ddb, 0x48b3), (0x09ddc, 0x48b9), (0x09ddd, 0x48c2), (0x09dde, 0x48b5), (0x09ddf, 0x48bb),
    (0x09de1, 0x4924), (0x09de2, 0x4929), (0x09de3, 0x491f), (0x09de4, 0x4922), (0x09de5, 0x2a40), (0x09de6, 0x4926),
    (0x09de8, 0x492d), (0x09de9, 0x48bc), (0x09deb, 0x4920), (0x09dec, 0x492a), (0x09ded, 0x492e), (0x09dee, 0x4925),
    (0x09def, 0x491e), (0x09df0, 0x4928), (0x09df2, 0x4927), (0x09df3, 0x492c), (0x09df4, 0x492b), (0x09df5, 0x48c0),
    (0x09df6, 0x4923), (0x09df7, 0x491d), (0x09df8, 0x4921), (0x09df9, 0x2a5f), (0x09dfa, 0x2a60), (0x09dfb, 0x491c),
    (0x09dfd, 0x497f), (0x09dfe, 0x4976), (0x09dff, 0x497e), (0x09e00, 0x497b), (0x09e01, 0x497c), (0x09e02, 0x4975),
    (0x09e03, 0x4978), (0x09e04, 0x4980), (0x09e05, 0x497a), (0x09e06, 0x4979), (0x09e07, 0x4977), (0x09e09, 0x497d),
    (0x09e0b, 0x49b5), (0x09e0d, 0x49b6), (0x09e0f, 0x49b8), (0x09e10, 0x49b7), (0x09e11, 0x49ba), (0x09e12, 0x49b9),
    (0x09e13, 0x49d4), (0x09e14, 0x49d3), (0x09e15, 0x49ed), (0x09e17, 0x49ee), (0x09e19, 0x49fb), (0x09e1a, 0x2a89),
    (0x09e1b, 0x2a8d), (0x09e1d, 0x4a05), (0x09e1e, 0x2a8e), (0x09e75, 0x1f07), (0x09e79, 0x2985), (0x09e7a, 0x4828),
    (0x09e7c, 0x2a61), (0x09e7d, 0x2a62), (0x09e7f, 0x1f08), (0x09e80, 0x3acf), (0x09e82, 0x229e), (0x09e83, 0x3fb9),
    (0x09e86, 0x41ed), (0x09e87, 0x41ee), (0x09e88, 0x41ec), (0x09e89, 0x43bf), (0x09e8a, 0x43be), (0x09e8b, 0x27e4),
    (0x09e8c, 0x452d), (0x09e8d, 0x43c0), (0x09e8e, 0x452c), (0x09e91, 0x467b), (0x09e92, 0x2928), (0x09e93, 0x292a),
    (0x09e94, 0x467a), (0x09e97, 0x2929), (0x09e99, 0x4773), (0x09e9a, 0x4775), (0x09e9b, 0x4774), (0x09e9c, 0x4829),
    (0x09e9d, 0x29d9), (0x09e9f, 0x2a41), (0x09ea0, 0x4981), (0x09ea1, 0x49bb), (0x09ea4, 0x4a08), (0x09ea5, 0x1f09),
    (0x09ea7, 0x3d3a), (0x09ea9, 0x25a9), (0x09ead, 0x41f0), (0x09eae, 0x41ef), (0x09eb0, 0x43c1), (0x09eb4, 0x292b),
    (0x09eb5, 0x2986), (0x09eb6, 0x48c3), (0x09eb7, 0x4a01), (0x09ebb, 0x1f0a), (0x09ebc, 0x2422), (0x09ebe, 0x25aa),
    (0x09ec0, 0x467c), (0x09ec2, 0x492f), (0x09ec3, 0x20df), (0x09ec8, 0x43c2), (0x09ecc, 0x2a75), (0x09ecd, 0x20e0),
    (0x09ece, 0x25ab), (0x09ecf, 0x27e5), (0x09ed0, 0x4930), (0x09ed1, 0x20e1), (0x09ed3, 0x3fba), (0x09ed4, 0x26d5),
    (0x09ed5, 0x41f1), (0x09ed6, 0x41f2), (0x09ed8, 0x26d4), (0x09eda, 0x43c3), (0x09edb, 0x27e9), (0x09edc, 0x27e7),
    (0x09edd, 0x27e8), (0x09ede, 0x27e6), (0x09edf, 0x452e), (0x09ee0, 0x2896), (0x09ee4, 0x4777), (0x09ee5, 0x4776),
    (0x09ee6, 0x4779), (0x09ee7, 0x4778), (0x09ee8, 0x2987), (0x09eeb, 0x482a), (0x09eed, 0x482c), (0x09eee, 0x482b),
    (0x09eef, 0x29da), (0x09ef0, 0x48c4), (0x09ef2, 0x4931), (0x09ef3, 0x4932), (0x09ef4, 0x2a42), (0x09ef5, 0x49bc),
    (0x09ef6, 0x49d5), (0x09ef7, 0x2a86), (0x09ef9, 0x381d), (0x09efa, 0x41f3), (0x09efb, 0x43c4), (0x09efc, 0x467d),
    (0x09efd, 0x3ad0), (0x09eff, 0x43c5), (0x09f00, 0x4530), (0x09f01, 0x452f), (0x09f06, 0x4933), (0x09f07, 0x2a63),
    (0x09f09, 0x49bd), (0x09f0a, 0x49d6), (0x09f0e, 0x229f), (0x09f0f, 0x3fbb), (0x09f10, 0x3fbc), (0x09f12, 0x41f4),
    (0x09f13, 0x22a0), (0x09f15, 0x2897), (0x09f16, 0x4531), (0x09f18, 0x482e), (0x09f19, 0x29db), (0x09f1a, 0x482f),
    (0x09f1b, 0x482d), (0x09f1c, 0x4934), (0x09f1e, 0x4982), (0x09f20, 0x22a1), (0x09f22, 0x43c8), (0x09f23, 0x43c7),
    (0x09f24, 0x43c6), (0x09f25, 0x4532), (0x09f28, 0x4536), (0x09f29, 0x4535), (0x09f2a, 0x4534), (0x09f2b, 0x4533),
    (0x09f2c, 0x2898), (0x09f2d, 0x467e), (0x09f2e, 0x477b), (0x09f2f, 0x2988), (0x09f30, 0x477a), (0x09f31, 0x4830),
    (0x09f32, 0x48c7), (0x09f33, 0x48c6), (0x09f34, 0x2a16), (0x09f35, 0x48c5), (0x09f36, 0x4937), (0x09f37, 0x4936),
    (0x09f38, 0x4935), (0x09f3b, 0x2423), (0x09f3d, 0x41f5), (0x09f3e, 0x27ea), (0x09f40, 0x467f), (0x09f41, 0x4680),
    (0x09f42, 0x48c8), (0x09f43, 0x4938), (0x09f46, 0x4983), (0x09f47, 0x49be), (0x09f48, 0x49ef), (0x09f49, 0x4a0a),
    (0x09f4a, 0x2424), (0x09f4b, 0x27eb), (0x09f4c, 0x4537), (0x09f4d, 0x4681), (0x09f4e, 0x4831), (0x09f4f, 0x4939),
    (0x09f52, 0x25ad), (0x09f54, 0x43c9), (0x09f55, 0x4538), (0x09f56, 0x4682), (0x09f57, 0x4683), (0x09f58, 0x4684),
    (0x09f59, 0x4780), (0x09f5b, 0x477c), (0x09f5c, 0x29dc), (0x09f5d, 0x477f), (0x09f5e, 0x477e), (0x09f5f, 0x2989),
    (0x09f60, 0x477d), (0x09f61, 0x298b), (0x09f63, 0x298a), (0x09f64, 0x4833), (0x09f65, 0x4832), (0x09f66, 0x29dd),
    (0x09f67, 0x29de), (0x09f6a, 0x2a18), (0x09f6b, 0x48c9), (0x09f6c, 0x2a17), (0x09f6e, 0x493c), (0x09f6f, 0x493d),
    (0x09f70, 0x493b), (0x09f71, 0x493a), (0x09f72, 0x2a65), (0x09f74, 0x4984), (0x09f75, 0x4985), (0x09f76, 0x4986),
    (0x09f77, 0x2a64), (0x09f78, 0x49bf), (0x09f79, 0x49c2), (0x09f7a, 0x49c1), (0x09f7b, 0x49c0), (0x09f7e, 0x4a09),
    (0x09f8d, 0x26d6), (0x09f90, 0x289f), (0x09f91, 0x4781), (0x09f92, 0x4834), (0x09f94, 0x2a19), (0x09f95, 0x48ca),
    (0x09f98, 0x4a0b), (0x09f9c, 0x26d7), (0x09fa0, 0x43ca), (0x09fa2, 0x48cb), (0x09fa4, 0x49d7), (0x09fb0, 0x2bca),
    (0x09fb1, 0x2bcc), (0x0fa0c, 0x2c32), (0x0fa0d, 0x3906), (0x0fe30, 0x13aa), (0x0fe31, 0x13b7), (0x0fe33, 0x13b9),
    (0x0fe34, 0x13bb), (0x0fe35, 0x13bf), (0x0fe36, 0x13c0), (0x0fe37, 0x13c3), (0x0fe38, 0x13c4), (0x0fe39, 0x13c7),
    (0x0fe3a, 0x13c8), (0x0fe3b, 0x13cb), (0x0fe3c, 0x13cc), (0x0fe3d, 0x13cf), (0x0fe3e, 0x13d0), (0x0fe3f, 0x13d3),
    (0x0fe40, 0x13d4), (0x0fe41, 0x13d7), (0x0fe42, 0x13d8), (0x0fe43, 0x13db), (0x0fe44, 0x13dc), (0x0fe49, 0x1404),
    (0x0fe4a, 0x1405), (0x0fe4b, 0x1408), (0x0fe4c, 0x1409), (0x0fe4d, 0x1406), (0x0fe4e, 0x1407), (0x0fe4f, 0x13bc),
    (0x0fe50, 0x13ad), (0x0fe52, 0x13af), (0x0fe54, 0x13b1), (0x0fe55, 0x13b2), (0x0fe56, 0x13b3), (0x0fe57, 0x13b4),
    (0x0fe59, 0x13dd), (0x0fe5a, 0x13de), (0x0fe5b, 0x13df), (0x0fe5c, 0x13e0), (0x0fe5d, 0x13e1), (0x0fe5e, 0x13e2),
    (0x0fe5f, 0x140a), (0x0fe60, 0x140b), (0x0fe61, 0x140c), (0x0fe62, 0x141c), (0x0fe63, 0x141d), (0x0fe64, 0x141e),
    (0x0fe65, 0x141f), (0x0fe66, 0x1420), (0x0fe69, 0x1449), (0x0fe6a, 0x144a), (0x0fe6b, 0x144b), (0x0ff01, 0x13a9),
    (0x0ff02, 0x2bf9), (0x0ff03, 0x13eb), (0x0ff04, 0x1440), (0x0ff05, 0x1445), (0x0ff06, 0x13ec), (0x0ff07, 0x2bf8),
    (0x0ff08, 0x13bd), (0x0ff09, 0x13be), (0x0ff0a, 0x13ed), (0x0ff0b, 0x140d), (0x0ff0c, 0x13a1), (0x0ff0d, 0x140e),
    (0x0ff0e, 0x13a4), (0x0ff0f, 0x143c), (0x0ff10, 0x148a), (0x0ff11, 0x148b), (0x0ff12, 0x148c), (0x0ff13, 0x148d),
    (0x0ff14, 0x148e), (0x0ff15, 0x148f), (0x0ff16, 0x1490), (0x0ff17, 0x1491), (0x0ff18, 0x1492), (0x0ff19, 0x1493),
    (0x0ff1a, 0x13a7), (0x0ff1b, 0x13a6), (0x0ff1c, 0x1413), (0x0ff1d, 0x1415), (0x0ff1e, 0x1414), (0x0ff1f, 0x13a8),
    (0x0ff20, 0x1446), (0x0ff21, 0x14aa), (0x0ff22, 0x14ab), (0x0ff23, 0x14ac), (0x0ff24, 0x14ad), (0x0ff25, 0x14ae),
    (0x0ff26, 0x14af), (0x0ff27, 0x14b0), (0x0ff28, 0x14b1), (0x0ff29, 0x14b2), (0x0ff2a, 0x14b3), (0x0ff2b, 0x14b4),
    (0x0ff2c, 0x14b5), (0x0ff2d, 0x14b6), (0x0ff2e, 0x14b7), (0x0ff2f, 0x14b8), (0x0ff30, 0x14b9), (0x0ff31, 0x14ba),
    (0x0ff32, 0x14bb), (0x0ff33, 0x14bc), (0x0ff34, 0x14bd), (0x0ff35, 0x14be), (0x0ff36, 0x14bf), (0x0ff37, 0x14c0),
    (0x0ff38, 0x14c1), (0x0ff39, 0x14c2), (0x0ff3a, 0x14c3), (0x0ff3b, 0x2ad3), (0x0ff3c, 0x143d), (0x0ff3d, 0x2ad4),
    (0x0ff3f, 0x1402), (0x0ff41, 0x14c4), (0x0ff42, 0x14c5), (0x0ff43, 0x14c6), (0x0ff44, 0x14c7), (0x0ff45, 0x14c8),
    (0x0ff46, 0x14c9), (0x0ff47, 0x14ca), (0x0ff48, 0x14cb), (0x0ff49, 0x14cc), (0x0ff4a, 0x14cd), (0x0ff4b, 0x14ce),
    (0x0ff4c, 0x14cf), (0x0ff4d, 0x14d0), (0x0ff4e, 0x14d1), (0x0ff4f, 0x14d2), (0x0ff50, 0x14d3), (0x0ff51, 0x14d4),
    (0x0ff52, 0x14d5), (0x0ff53, 0x14d6), (0x0ff54, 0x14d7), (0x0ff55, 0x14d8), (0x0ff56, 0x14d9), (0x0ff57, 0x14da),
    (0x0ff58, 0x14db), (0x0ff59, 0x14dc), (0x0ff5a, 0x14dd), (0x0ff5b, 0x13c1), (0x0ff5c, 0x13b5), (0x0ff5d, 0x13c2),
    (0x0ff64, 0x13ae), (0x0ffe2, 0x2bf6), (0x0ffe3, 0x1401), (0x0ffe4, 0x2bf7), (0x0ffed, 0x4a34), (0x2008a, 0x2bc7),
    (0x200cc, 0x2bc5), (0x20118, 0x4bba), (0x201c1, 0x4b76), (0x20204, 0x4b3b), (0x2029e, 0x4b8e), (0x202a0, 0x4a49),
    (0x202e5, 0x4a69), (0x20347, 0x4a58), (0x2037e, 0x4a55), (0x20380, 0x4a57), (0x203b5, 0x4c36), (0x203c9, 0x4c20),
    (0x2041f, 0x4a5a), (0x20487, 0x4a63), (0x20547, 0x4a35), (0x2058e, 0x4a6b), (0x205a5, 0x4b40), (0x205b3, 0x4a70),
    (0x205c3, 0x4cd6), (0x205df, 0x4a37), (0x20656, 0x4baa), (0x20923, 0x4c2f), (0x20954, 0x4a95), (0x20b8f, 0x4abc),
    (0x20be2, 0x4a99), (0x20bff, 0x4a67), (0x20c3a, 0x4cc5), (0x20c77, 0x4ac1), (0x20cd3, 0x4b66), (0x20d32, 0x4c4e),
    (0x20d4d, 0x4ad1), (0x20d4e, 0x4b17), (0x20d74, 0x4ac9), (0x20e75, 0x4beb), (0x20edd, 0x4acf), (0x210b4, 0x4ae0),
    (0x2123c, 0x4b05), (0x2124f, 0x4af1), (0x21305, 0x4a4b), (0x2133a, 0x4b7a), (0x21376, 0x4d25), (0x2138e, 0x4bc4),
    (0x21416, 0x4afa), (0x21454, 0x4afc), (0x21497, 0x4c72), (0x21596, 0x4aa9), (0x21613, 0x4aaa), (0x2163e, 0x4b11),
    (0x21692, 0x4b14), (0x216b8, 0x4b32), (0x216c1, 0x4d22), (0x216d5, 0x4b21), (0x216e7, 0x4cca), (0x216e8, 0x4aa1),
    (0x2170d, 0x4ace), (0x21726, 0x4a9b), (0x21770, 0x4bbc), (0x21771, 0x4b6b), (0x217b2, 0x4b1d), (0x217dc, 0x4b1a),
    (0x217fb, 0x4b1c), (0x217fc, 0x4bc5), (0x21828, 0x4b20), (0x21829, 0x4bdf), (0x21877, 0x4b92), (0x2189e, 0x4ced),
    (0x218d7, 0x4adb), (0x21911, 0x4b30), (0x21958, 0x4c37), (0x21983, 0x4a6d), (0x21988, 0x4cef), (0x219db, 0x4a41),
    (0x21a34, 0x4b3e), (0x21a4b, 0x4cf4), (0x21b44, 0x4b45), (0x21ca5, 0x4b49), (0x21df9, 0x4b51), (0x21e1c, 0x4d17),
    (0x21e37, 0x4b52), (0x21e3d, 0x4bf0), (0x21ea4, 0x4b56), (0x21f6a, 0x4b8a), (0x22049, 0x4b5c), (0x220fc, 0x4a68),
    (0x2212a, 0x4c25), (0x22173, 0x4b5d), (0x223d0, 0x4b7d), (0x22471, 0x4b7f), (0x2248b, 0x4c3f), (0x22491, 0x4c51),
    (0x224ed, 0x4a4d), (0x22513, 0x4a53), (0x22530, 0x4a6a), (0x22554, 0x4b2e), (0x2261c, 0x4d36), (0x22668, 0x4b8c),
    (0x22698, 0x4ad3), (0x227b4, 0x4b97), (0x227cd, 0x4c33), (0x2285f, 0x4bae), (0x228ad, 0x4cd9), (0x228c1, 0x4bb5),
    (0x228f7, 0x4bf6), (0x22980, 0x4bb4), (0x22da3, 0x4abf), (0x22e0d, 0x4bbe), (0x22e36, 0x4bc8), (0x23044, 0x4cb7),
    (0x2304b, 0x4c6c), (0x2307e, 0x4bd9), (0x231a4, 0x4be8), (0x231a5, 0x4be9), (0x231c8, 0x4bf3), (0x231f7, 0x4be5),
    (0x231f8, 0x4be6), (0x231f9, 0x4c50), (0x23231, 0x4bf1), (0x23233, 0x4a6c), (0x2328a, 0x4ae3), (0x232ac, 0x4d1e),
    (0x233b4, 0x4a65), (0x233e6, 0x4c09), (0x23400, 0x4be3), (0x2346f, 0x4c0c), (0x235cd, 0x4c12), (0x23600, 0x4a51),
    (0x2363c, 0x4c17), (0x23659, 0x4c24), (0x23703, 0x4c27), (0x2372d, 0x4a81), (0x237c2, 0x4bfd), (0x23adb, 0x4c35),
    (0x23b5a, 0x4c3a), (0x23c99, 0x4a71), (0x23cc8, 0x4a43), (0x23cc9, 0x4c4b), (0x23dbc, 0x4c45), (0x23dbd, 0x4c47),
    (0x23e2f, 0x4c66), (0x23e30, 0x4c70), (0x23efc, 0x4c3c), (0x23f80, 0x4a94), (0x23f82, 0x4c68), (0x23fb4, 0x4c83),
    (0x23fb7, 0x4bad), (0x23fc5, 0x4a38), (0x23feb, 0x4abe), (0x23fec, 0x4a96), (0x23ff0, 0x4c82), (0x24039, 0x4c81),
    (0x2403a, 0x4adc), (0x2403d, 0x4c73), (0x24085, 0x4c5c), (0x2408c, 0x4bca), (0x24091, 0x4c7f), (0x2413f, 0x4c84),
    (0x24140, 0x4c88), (0x24144, 0x4c7d), (0x24155, 0x4c80), (0x24156, 0x4c86), (0x24157, 0x4c87), (0x2415f, 0x4ce8),
    (0x241a4, 0x4c48), (0x241a5, 0x4af3), (0x241cd, 0x4c01), (0x241e2, 0x4cc9), (0x24277, 0x4c96), (0x24278, 0x4b0a),
    (0x242c1, 0x4ca0), (0x24363, 0x4afd), (0x24365, 0x4c9d), (0x2439c, 0x4bf9), (0x24435, 0x4ade), (0x2445a, 0x4ca2),
    (0x244bc, 0x4b65), (0x24823, 0x4cbd), (0x248f1, 0x4c40), (0x24900, 0x4c4a), (0x24901, 0x4b5b), (0x2490c, 0x4c49),
    (0x24933, 0x4a47), (0x24940, 0x4bdb), (0x24942, 0x4a3e), (0x24974, 0x4cb2), (0x2497f, 0x4c5b), (0x24982, 0x4b9d),
    (0x2498d, 0x4ccf), (0x2498f, 0x4b9e), (0x249a4, 0x4a62), (0x249a9, 0x4b27), (0x249b7, 0x4cce), (0x249df, 0x4bc0),
    (0x249fb, 0x4cd0), (0x24a12, 0x4d26), (0x24a21, 0x4bfa), (0x24a22, 0x4ca4), (0x24a23, 0x4bd5), (0x24a24, 0x4ccb),
    (0x24a26, 0x4cd4), (0x24a27, 0x4ca3), (0x24a28, 0x4bd4), (0x24a79, 0x4ce9), (0x24a8c, 0x4ce7), (0x24aa6, 0x4a7a),
    (0x24ab1, 0x4a52), (0x24bf5, 0x4aff), (0x24d13, 0x4cfe), (0x24f82, 0x4cfc), (0x2509d, 0x4d15), (0x2517d, 0x4d16),
    (0x251e6, 0x4bed), (0x25220, 0x4d1c), (0x25250, 0x4b89), (0x25313, 0x4bf4), (0x255e0, 0x4d2d), (0x25605, 0x4caf),
    (0x2571d, 0x4bcb), (0x25772, 0x4ab2), (0x25857, 0x4d3b), (0x259cc, 0x4b3f), (0x26083, 0x4d35), (0x261dd, 0x4c89),
    (0x263f5, 0x4d09), (0x26888, 0x4b7c), (0x2690e, 0x4d0e), (0x26911, 0x4d0d), (0x26a2e, 0x4cc6), (0x26b13, 0x4a8f),
    (0x26b28, 0x4b4a), (0x26b51, 0x4c41), (0x26b53, 0x4ac8), (0x26bb3, 0x4a4a), (0x26c7e, 0x4af8), (0x26c81, 0x4b18),
    (0x26d25, 0x4c54), (0x26d29, 0x4a4f), (0x26d2a, 0x4b19), (0x26da0, 0x4c0a), (0x26da1, 0x4c55), (0x26da6, 0x4b1e),
    (0x26deb, 0x4c56), (0x26e45, 0x4b23), (0x26e6e, 0x4b82), (0x26e72, 0x4c5d), (0x26ed2, 0x4ba7), (0x26f74, 0x4c5f),
    (0x26f9f, 0x4d13), (0x26fa1, 0x4b2d), (0x270f8, 0x4b8b), (0x27126, 0x4d41), (0x27607, 0x2bcd), (0x2760c, 0x4d31),
    (0x27a0e, 0x4b38), (0x27a53, 0x4b9f), (0x27a84, 0x4a50), (0x27b39, 0x4d3d), (0x28482, 0x4b6e), (0x285f4, 0x4bf2),
    (0x286ab, 0x4aa6), (0x28804, 0x4cc0), (0x2882b, 0x4cbe), (0x28964, 0x4d20), (0x28968, 0x4d21), (0x289aa, 0x4a48),
    (0x289bc, 0x4ad2), (0x289e4, 0x4a3f), (0x28a29, 0x4b8f), (0x28a36, 0x4b85), (0x28a4a, 0x4c1b), (0x28a9b, 0x4aad),
    (0x28ade, 0x4a91), (0x28adf, 0x4c0f), (0x28b21, 0x4c64), (0x28b2b, 0x4d34), (0x28b66, 0x4aef), (0x28b8f, 0x4cea),
    (0x28b9d, 0x4bb0), (0x28be8, 0x4ca6), (0x28c03, 0x4cec), (0x28eac, 0x4cf6), (0x28eb2, 0x4cdb), (0x28ed9, 0x4cf3),
    (0x290ed, 0x4c02), (0x2910d, 0x4d44), (0x29170, 0x4c7a), (0x2919c, 0x4c2c), (0x2995d, 0x4bb1), (0x2a150, 0x4b09),
    (0x2f894, 0x4b77), (0x2f8a6, 0x4ba6),
];

