//! Uranus, VSOP87-D truncated series.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(5.48129294297, 0.00000000000, 0.00000000000),
    t(0.09260408234, 0.89106421507, 74.78159856730),
    t(0.01504247898, 3.62719260920, 1.48447270830),
    t(0.00365981674, 1.89962179044, 73.29712585900),
    t(0.00272328168, 3.35823706307, 149.56319713460),
    t(0.00070328461, 5.39254450063, 63.73589830340),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(74.78159860910, 0.00000000000, 0.00000000000),
    t(0.00154332863, 5.24158770553, 74.78159856730),
    t(0.00024456474, 1.71260334156, 1.48447270830),
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    t(0.00002349469, 2.26708640433, 74.78159856730),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.01346277648, 2.61877810547, 74.78159856730),
    t(0.00062341400, 5.08111189648, 149.56319713460),
    t(0.00061601196, 3.14159265359, 0.00000000000),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00206366162, 4.12394311407, 74.78159856730),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(19.21264847206, 0.00000000000, 0.00000000000),
    t(0.88784984413, 5.60377527014, 74.78159856730),
    t(0.03440836062, 0.32836099706, 73.29712585900),
    t(0.02055653860, 1.78295159330, 149.56319713460),
    t(0.00649322410, 4.52247285911, 76.26607127827),
    t(0.00602247865, 3.86003823674, 63.73589830340),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.01479896629, 3.67205697578, 74.78159856730),
    t(0.00071212143, 6.22600975161, 63.73589830340),
];

pub const URANUS: VsopSeries = VsopSeries {
    name: "Uranus",
    longitude: [L0, L1, L2, &[], &[], &[]],
    latitude: [B0, B1, &[], &[], &[], &[]],
    radius: [R0, R1, &[], &[], &[], &[]],
};
