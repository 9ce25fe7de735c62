//! Jupiter, VSOP87-D truncated series.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(0.59954691494, 0.00000000000, 0.00000000000),
    t(0.09695898719, 5.06191793158, 529.69096509460),
    t(0.00573610142, 1.44406205629, 7.11354700080),
    t(0.00306389205, 5.41734730184, 1059.38193018920),
    t(0.00097178296, 4.14264726552, 632.78373931320),
    t(0.00072903078, 3.64042916389, 522.57741809380),
    t(0.00064263975, 3.41145165351, 103.09277421860),
    t(0.00039806064, 2.29376740788, 419.48464387520),
    t(0.00038857767, 1.27231755835, 316.39186965660),
    t(0.00027964629, 1.78454591820, 536.80451209540),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(529.69096508814, 0.00000000000, 0.00000000000),
    t(0.00489503243, 4.22082939470, 529.69096509460),
    t(0.00228917222, 6.02646855621, 7.11354700080),
    t(0.00030099479, 4.54540782858, 1059.38193018920),
    t(0.00020720920, 5.45943156902, 522.57741809380),
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    t(0.00047233601, 4.32148536482, 7.11354700080),
    t(0.00030649436, 2.92977788700, 529.69096509460),
    t(0.00014837605, 3.14159265359, 0.00000000000),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.02268615702, 3.55852606721, 529.69096509460),
    t(0.00109971634, 3.90809347197, 1059.38193018920),
    t(0.00110090358, 0.00000000000, 0.00000000000),
    t(0.00008101428, 3.60509572885, 522.57741809380),
    t(0.00006043996, 4.25883108794, 1589.07289528380),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00078203446, 1.52377859742, 529.69096509460),
    t(0.00007202125, 0.36617932722, 1059.38193018920),
];

#[rustfmt::skip]
const B2: &[VsopTerm] = &[
    t(0.00003779173, 2.82679952887, 529.69096509460),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(5.20887429326, 0.00000000000, 0.00000000000),
    t(0.25209327119, 3.49108639871, 529.69096509460),
    t(0.00610599976, 3.84115365948, 1059.38193018920),
    t(0.00282029458, 2.57419881293, 632.78373931320),
    t(0.00187647346, 2.07590383214, 522.57741809380),
    t(0.00086792905, 0.71001145545, 419.48464387520),
    t(0.00072062974, 0.21465724607, 536.80451209540),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.01271801520, 2.64937512894, 529.69096509460),
    t(0.00061661816, 3.00076460387, 1059.38193018920),
    t(0.00053443713, 3.89717383175, 7.11354700080),
];

#[rustfmt::skip]
const R2: &[VsopTerm] = &[
    t(0.00079644957, 1.35966560020, 529.69096509460),
    t(0.00008251645, 5.77771858050, 522.57741809380),
];

pub const JUPITER: VsopSeries = VsopSeries {
    name: "Jupiter",
    longitude: [L0, L1, L2, &[], &[], &[]],
    latitude: [B0, B1, B2, &[], &[], &[]],
    radius: [R0, R1, R2, &[], &[], &[]],
};
