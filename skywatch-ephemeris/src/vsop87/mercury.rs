//! Mercury, VSOP87-D truncated series.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(4.40250710144, 0.00000000000, 0.00000000000),
    t(0.40989414977, 1.48302034195, 26087.90314157420),
    t(0.05046294200, 4.47785489551, 52175.80628314840),
    t(0.00855346844, 1.16520322351, 78263.70942472259),
    t(0.00165590362, 4.11969163423, 104351.61256629678),
    t(0.00034561897, 0.77930768443, 130439.51570787099),
    t(0.00007583476, 3.71348404924, 156527.41884944518),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(26087.90313685529, 0.00000000000, 0.00000000000),
    t(0.01126007832, 6.21703970996, 26087.90314157420),
    t(0.00303471395, 3.05565472363, 52175.80628314840),
    t(0.00080538452, 6.10454743366, 78263.70942472259),
    t(0.00021245035, 2.83531934452, 104351.61256629678),
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    t(0.00053049845, 0.00000000000, 0.00000000000),
    t(0.00016903658, 4.69072300649, 26087.90314157420),
    t(0.00007396711, 1.34735624669, 52175.80628314840),
];

#[rustfmt::skip]
const L3: &[VsopTerm] = &[
    t(0.00000188077, 0.03466830117, 52175.80628314840),
    t(0.00000142152, 3.12505452369, 26087.90314157420),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.11737528961, 1.98357498767, 26087.90314157420),
    t(0.02388076996, 5.03738959686, 52175.80628314840),
    t(0.01222839532, 3.14159265359, 0.00000000000),
    t(0.00543251810, 1.79644363964, 78263.70942472259),
    t(0.00129778770, 4.83232503958, 104351.61256629678),
    t(0.00031866927, 1.58088495658, 130439.51570787099),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00429151362, 3.50169780393, 26087.90314157420),
    t(0.00146233668, 3.14159265359, 0.00000000000),
    t(0.00022675295, 0.01515366880, 52175.80628314840),
    t(0.00010894981, 0.48540174006, 78263.70942472259),
];

#[rustfmt::skip]
const B2: &[VsopTerm] = &[
    t(0.00011830934, 4.79065586784, 26087.90314157420),
    t(0.00001913516, 0.00000000000, 0.00000000000),
    t(0.00001044801, 1.21216540536, 52175.80628314840),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(0.39528271651, 0.00000000000, 0.00000000000),
    t(0.07834131818, 6.19233722598, 26087.90314157420),
    t(0.00795525558, 2.95989690104, 52175.80628314840),
    t(0.00121281764, 6.01064153797, 78263.70942472259),
    t(0.00021921969, 2.77820093972, 104351.61256629678),
    t(0.00004354065, 5.82894543774, 130439.51570787099),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.00217347740, 4.65617158665, 26087.90314157420),
    t(0.00044141826, 1.42385544001, 52175.80628314840),
    t(0.00010094479, 4.47466326327, 78263.70942472259),
];

#[rustfmt::skip]
const R2: &[VsopTerm] = &[
    t(0.00003117867, 3.08231840294, 26087.90314157420),
    t(0.00001245397, 6.15183317423, 52175.80628314840),
];

pub const MERCURY: VsopSeries = VsopSeries {
    name: "Mercury",
    longitude: [L0, L1, L2, L3, &[], &[]],
    latitude: [B0, B1, B2, &[], &[], &[]],
    radius: [R0, R1, R2, &[], &[], &[]],
};
