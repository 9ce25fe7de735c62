//! Earth, VSOP87-D truncated series.
//!
//! Earth's own heliocentric position feeds the geocentric step for every
//! planet, so this table keeps a few more longitude/radius terms than
//! the others.

use super::{VsopSeries, VsopTerm};

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm::new(a, b, c)
}

#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    t(1.75347045673, 0.00000000000, 0.00000000000),
    t(0.03341656456, 4.66925680417, 6283.07584999140),
    t(0.00034894275, 4.62610241759, 12566.15169998280),
    t(0.00003497056, 2.74411800971, 5753.38488489680),
    t(0.00003417571, 2.82886579606, 3.52311834900),
    t(0.00003135896, 3.62767041758, 77713.77146812050),
    t(0.00002676218, 4.41808351397, 7860.41939243920),
    t(0.00002342687, 6.13516237631, 3930.20969621960),
    t(0.00001324292, 0.74246356352, 11506.76976979360),
    t(0.00001273166, 2.03709655772, 529.69096509460),
    t(0.00001199167, 1.10962944315, 1577.34354244780),
    t(0.00000990250, 5.23268129594, 5884.92684658320),
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    t(6283.31966747491, 0.00000000000, 0.00000000000),
    t(0.00206058863, 2.67823455584, 6283.07584999140),
    t(0.00004303430, 2.63512650414, 12566.15169998280),
    t(0.00000425264, 1.59046980729, 3.52311834900),
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    t(0.00052918870, 0.00000000000, 0.00000000000),
    t(0.00008719837, 1.07209665242, 6283.07584999140),
    t(0.00000309125, 0.86728818832, 12566.15169998280),
];

#[rustfmt::skip]
const L3: &[VsopTerm] = &[
    t(0.00000289226, 5.84384198723, 6283.07584999140),
    t(0.00000034955, 0.00000000000, 0.00000000000),
];

#[rustfmt::skip]
const L4: &[VsopTerm] = &[
    t(0.00000114084, 3.14159265359, 0.00000000000),
];

#[rustfmt::skip]
const B0: &[VsopTerm] = &[
    t(0.00000279620, 3.19870156017, 84334.66158130829),
    t(0.00000101643, 5.42248619256, 5507.55323866740),
    t(0.00000080445, 3.88013204458, 5223.69391980220),
];

#[rustfmt::skip]
const B1: &[VsopTerm] = &[
    t(0.00000009030, 3.89729061890, 5507.55323866740),
    t(0.00000006177, 1.73038850355, 5223.69391980220),
];

#[rustfmt::skip]
const R0: &[VsopTerm] = &[
    t(1.00013988784, 0.00000000000, 0.00000000000),
    t(0.01670699632, 3.09846350258, 6283.07584999140),
    t(0.00013956024, 3.05524609456, 12566.15169998280),
    t(0.00003083720, 5.19846674381, 77713.77146812050),
    t(0.00001628463, 1.17387558054, 5753.38488489680),
    t(0.00001575572, 2.84685214877, 7860.41939243920),
    t(0.00000924799, 5.45292236722, 11506.76976979360),
    t(0.00000542439, 4.56409151453, 3930.20969621960),
    t(0.00000472110, 3.66100022149, 5884.92684658320),
];

#[rustfmt::skip]
const R1: &[VsopTerm] = &[
    t(0.00103018607, 1.10748968172, 6283.07584999140),
    t(0.00001721238, 1.06442300386, 12566.15169998280),
    t(0.00000702217, 3.14159265359, 0.00000000000),
];

#[rustfmt::skip]
const R2: &[VsopTerm] = &[
    t(0.00004359385, 5.78455133808, 6283.07584999140),
    t(0.00000123633, 5.57935427994, 12566.15169998280),
];

#[rustfmt::skip]
const R3: &[VsopTerm] = &[
    t(0.00000144595, 4.27319433901, 6283.07584999140),
];

pub const EARTH: VsopSeries = VsopSeries {
    name: "Earth",
    longitude: [L0, L1, L2, L3, L4, &[]],
    latitude: [B0, B1, &[], &[], &[], &[]],
    radius: [R0, R1, R2, R3, &[], &[]],
};
