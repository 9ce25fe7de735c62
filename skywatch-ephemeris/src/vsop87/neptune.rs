//! Neptune, VSOP87-D truncated series.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(5.31188633046, 0.00000000000, 0.00000000000),
    t(0.01798475530, 2.90101273890, 38.13303563780),
    t(0.01019727652, 0.48580922867, 1.48447270830),
    t(0.00124531845, 4.83008090676, 36.64856292950),
    t(0.00042064466, 5.41054993053, 2.96894541660),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(38.13303563957, 0.00000000000, 0.00000000000),
    t(0.00016604172, 4.86323329249, 1.48447270830),
    t(0.00015744045, 2.27887427527, 38.13303563780),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.03088622933, 1.44104372644, 38.13303563780),
    t(0.00027780087, 5.91271884599, 76.26607127560),
    t(0.00027623609, 0.00000000000, 0.00000000000),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00227279214, 3.80793089870, 38.13303563780),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(30.07013205828, 0.00000000000, 0.00000000000),
    t(0.27062259632, 1.32999459377, 38.13303563780),
    t(0.01691764014, 3.25186135653, 36.64856292950),
    t(0.00807830950, 5.18592878704, 1.48447270830),
    t(0.00537760510, 4.52113935896, 41.10198105440),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.00236338502, 0.70498011235, 38.13303563780),
    t(0.00013220279, 3.32015499895, 1.48447270830),
];

pub const NEPTUNE: VsopSeries = VsopSeries {
    name: "Neptune",
    longitude: [L0, L1, &[], &[], &[], &[]],
    latitude: [B0, B1, &[], &[], &[], &[]],
    radius: [R0, R1, &[], &[], &[], &[]],
};
