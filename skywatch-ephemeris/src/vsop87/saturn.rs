//! Saturn, VSOP87-D truncated series.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(0.87401354025, 0.00000000000, 0.00000000000),
    t(0.11107659762, 3.96205090159, 213.29909543800),
    t(0.01414150957, 4.58581516874, 7.11354700080),
    t(0.00398379389, 0.52112032699, 206.18554843720),
    t(0.00350769243, 3.30329907896, 426.59819087600),
    t(0.00206816305, 0.24658372002, 103.09277421860),
    t(0.00079271300, 3.84007056878, 220.41264243880),
    t(0.00023990355, 4.66976924553, 110.20632121940),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(213.29909521690, 0.00000000000, 0.00000000000),
    t(0.01297370862, 1.82834923978, 213.29909543800),
    t(0.00564345393, 2.88499717272, 7.11354700080),
    t(0.00107674962, 2.27769131009, 206.18554843720),
    t(0.00093734369, 1.06311793502, 426.59819087600),
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    t(0.00116441330, 1.17988132879, 7.11354700080),
    t(0.00091841837, 0.07325195840, 213.29909543800),
    t(0.00036661728, 0.00000000000, 0.00000000000),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.04330678039, 3.60284428399, 213.29909543800),
    t(0.00240348302, 2.85238489373, 426.59819087600),
    t(0.00084745939, 0.00000000000, 0.00000000000),
    t(0.00034116062, 0.57297307557, 206.18554843720),
    t(0.00030863357, 3.48441504555, 220.41264243880),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00198927992, 4.93901017903, 213.29909543800),
    t(0.00036947916, 3.14159265359, 0.00000000000),
    t(0.00017966989, 0.51979431110, 426.59819087600),
];

#[rustfmt::skip]
const B2: &[VsopTerm] = &[
    t(0.00013884264, 0.75704381890, 213.29909543800),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(9.55758135486, 0.00000000000, 0.00000000000),
    t(0.52921382865, 2.39226219573, 213.29909543800),
    t(0.01873679867, 5.23549604660, 206.18554843720),
    t(0.01464663929, 1.64763042902, 426.59819087600),
    t(0.00821891141, 5.93520042303, 316.39186965660),
    t(0.00547506923, 5.01532618980, 103.09277421860),
    t(0.00371684650, 2.27114821115, 220.41264243880),
    t(0.00361778765, 3.13904301847, 7.11354700080),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.06182981340, 0.25843511480, 213.29909543800),
    t(0.00506577242, 0.71114625261, 206.18554843720),
    t(0.00341394029, 5.79635741658, 426.59819087600),
    t(0.00188491195, 0.47215589652, 220.41264243880),
];

#[rustfmt::skip]
const R2: &[VsopTerm] = &[
    t(0.00436902572, 4.78671677509, 213.29909543800),
    t(0.00071922498, 2.50070243124, 206.18554843720),
];

pub const SATURN: VsopSeries = VsopSeries {
    name: "Saturn",
    longitude: [L0, L1, L2, &[], &[], &[]],
    latitude: [B0, B1, B2, &[], &[], &[]],
    radius: [R0, R1, R2, &[], &[], &[]],
};
