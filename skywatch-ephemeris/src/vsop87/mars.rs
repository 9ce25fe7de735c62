//! Mars, VSOP87-D truncated series.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(6.20347711581, 0.00000000000, 0.00000000000),
    t(0.18656368093, 5.05037100270, 3340.61242669980),
    t(0.01108216816, 5.40099836344, 6681.22485339960),
    t(0.00091798406, 5.75478744667, 10021.83728009940),
    t(0.00027744987, 5.97049513147, 3.52311834900),
    t(0.00012315897, 0.84956094002, 2810.92146160520),
    t(0.00010610235, 2.93958560338, 2281.23049651060),
    t(0.00008926784, 4.15697846427, 0.01725365220),
    t(0.00008715691, 6.11005153139, 13362.44970679920),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(3340.61242700512, 0.00000000000, 0.00000000000),
    t(0.01458227051, 3.60426053609, 3340.61242669980),
    t(0.00164901343, 3.92631250962, 6681.22485339960),
    t(0.00019963338, 4.26594061030, 10021.83728009940),
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    t(0.00058152577, 2.04961712429, 3340.61242669980),
    t(0.00013459579, 2.45738706163, 6681.22485339960),
    t(0.00002432575, 2.79737979284, 10021.83728009940),
];

#[rustfmt::skip]
const L3: &[VsopTerm] = &[
    t(0.00001467867, 0.44434694876, 3340.61242669980),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.03197134986, 3.76832042431, 3340.61242669980),
    t(0.00298033234, 4.10616996305, 6681.22485339960),
    t(0.00289104742, 0.00000000000, 0.00000000000),
    t(0.00031365539, 4.44651053090, 10021.83728009940),
    t(0.00003484100, 4.78812549260, 13362.44970679920),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00217310991, 6.04472194776, 3340.61242669980),
    t(0.00020976948, 3.14159265359, 0.00000000000),
    t(0.00012834709, 1.60810667915, 6681.22485339960),
];

#[rustfmt::skip]
const B2: &[VsopTerm] = &[
    t(0.00013467779, 0.60440988684, 3340.61242669980),
    t(0.00000685324, 4.06491257416, 6681.22485339960),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(1.53033488271, 0.00000000000, 0.00000000000),
    t(0.14184953160, 3.47971283528, 3340.61242669980),
    t(0.00660776362, 3.81783443019, 6681.22485339960),
    t(0.00046179117, 4.15595316782, 10021.83728009940),
    t(0.00008109733, 5.55958416318, 2810.92146160520),
    t(0.00007485318, 1.77239078402, 5621.84292321040),
    t(0.00005523191, 1.36436303770, 2281.23049651060),
    t(0.00003825160, 4.49407183687, 13362.44970679920),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.01107433345, 2.03250524857, 3340.61242669980),
    t(0.00103175887, 2.37071847807, 6681.22485339960),
    t(0.00012877200, 0.00000000000, 0.00000000000),
    t(0.00010815880, 2.70888095665, 10021.83728009940),
];

#[rustfmt::skip]
const R2: &[VsopTerm] = &[
    t(0.00044242249, 0.47930604954, 3340.61242669980),
    t(0.00008138042, 0.86998389204, 6681.22485339960),
];

pub const MARS: VsopSeries = VsopSeries {
    name: "Mars",
    longitude: [L0, L1, L2, L3, &[], &[]],
    latitude: [B0, B1, B2, &[], &[], &[]],
    radius: [R0, R1, R2, &[], &[], &[]],
};
