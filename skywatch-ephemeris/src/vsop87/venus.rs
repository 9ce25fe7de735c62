//! Venus, VSOP87-D truncated series.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(3.17614666774, 0.00000000000, 0.00000000000),
    t(0.01353968419, 5.59313319619, 10213.28554621100),
    t(0.00089891645, 5.30650047764, 20426.57109242200),
    t(0.00005477194, 4.41630661466, 7860.41939243920),
    t(0.00003455741, 2.69964447820, 11790.62908865880),
    t(0.00002372061, 2.99377542079, 3930.20969621960),
    t(0.00001317168, 5.18668228402, 26.29831979980),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(10213.28554621638, 0.00000000000, 0.00000000000),
    t(0.00095617813, 2.46406511110, 10213.28554621100),
    t(0.00007787201, 0.62478482220, 20426.57109242200),
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    t(0.00003894209, 0.34514360047, 10213.28554621100),
    t(0.00000595403, 2.01169607957, 20426.57109242200),
    t(0.00000287868, 0.00000000000, 0.00000000000),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.05923638472, 0.26702775812, 10213.28554621100),
    t(0.00040107978, 1.14737178112, 20426.57109242200),
    t(0.00032814918, 3.14159265359, 0.00000000000),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00287821243, 1.88964962838, 10213.28554621100),
    t(0.00003499578, 3.71117560516, 20426.57109242200),
];

#[rustfmt::skip]
const B2: &[VsopTerm] = &[
    t(0.00012157745, 3.34796457029, 10213.28554621100),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(0.72334820905, 0.00000000000, 0.00000000000),
    t(0.00489824185, 4.02151832268, 10213.28554621100),
    t(0.00001658058, 4.90206728012, 20426.57109242200),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.00034551039, 0.89198710598, 10213.28554621100),
    t(0.00000234203, 1.77224942714, 20426.57109242200),
];

#[rustfmt::skip]
const R2: &[VsopTerm] = &[
    t(0.00001406587, 5.06366395190, 10213.28554621100),
];

pub const VENUS: VsopSeries = VsopSeries {
    name: "Venus",
    longitude: [L0, L1, L2, &[], &[], &[]],
    latitude: [B0, B1, B2, &[], &[], &[]],
    radius: [R0, R1, R2, &[], &[], &[]],
};
