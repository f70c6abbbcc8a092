//! Truncated VSOP87D coefficient tables
//!
//! Heliocentric spherical series for the eight major planets on the mean
//! ecliptic and equinox of date: longitude L, latitude B, and radius R,
//! each a sum of polynomial orders in Julian millennia of periodic terms
//! `a cos(b + c t)`. Amplitudes are in units of 1e-8 radian (L, B) and
//! 1e-8 AU (R), phases in radians, frequencies in radians per millennium,
//! exactly as published. The truncation keeps terms down to roughly the
//! 1e-6 rad / 1e-7 AU level for the inner planets and tapers off for the
//! outer ones.

/// One planet's series: six polynomial orders per spherical variable,
/// higher orders left empty where the truncation drops them.
pub(super) struct Vsop87Series {
    pub(super) l: [&'static [[f64; 3]]; 6],
    pub(super) b: [&'static [[f64; 3]]; 6],
    pub(super) r: [&'static [[f64; 3]]; 6],
}

const NONE: &[[f64; 3]] = &[];

pub(super) const TABLES: [&Vsop87Series; 8] = [
    &MERCURY, &VENUS, &EARTH, &MARS, &JUPITER, &SATURN, &URANUS, &NEPTUNE,
];

#[rustfmt::skip]
const MERCURY_L0: &[[f64; 3]] = &[
    [440250710.0, 0.0,        0.0],
    [ 40989415.0, 1.48302034, 26087.90314157],
    [  5046294.0, 4.47785490, 52175.80628315],
    [   855347.0, 1.16520322, 78263.70942472],
    [   165590.0, 4.11969164, 104351.61256630],
    [    34562.0, 0.77931,    130439.51571],
    [     7583.0, 3.71348,    156527.41899],
    [     3560.0, 1.51202,    1109.37855],
    [     1803.0, 4.10333,    5661.33205],
    [     1726.0, 0.35832,    182615.32200],
    [     1590.0, 2.99510,    25028.52121],
    [     1365.0, 4.59918,    27197.28169],
    [     1017.0, 0.88031,    31749.23519],
    [      714.0, 1.541,      24978.525],
    [      644.0, 5.303,      21535.950],
];

#[rustfmt::skip]
const MERCURY_L1: &[[f64; 3]] = &[
    [2608814706223.0, 0.0,     0.0],
    [      1126008.0, 6.21703971, 26087.90314157],
    [       303471.0, 3.05565472, 52175.80628315],
    [        80538.0, 6.10455, 78263.70942],
    [        21245.0, 2.83532, 104351.61257],
    [         5592.0, 5.82682, 130439.51571],
    [         1472.0, 2.51845, 156527.41899],
];

#[rustfmt::skip]
const MERCURY_L2: &[[f64; 3]] = &[
    [53050.0, 0.0,     0.0],
    [16904.0, 4.69072, 26087.90314],
    [ 7397.0, 1.34735, 52175.80628],
    [ 3018.0, 4.45643, 78263.70942],
    [ 1107.0, 1.26226, 104351.61257],
];

#[rustfmt::skip]
const MERCURY_L3: &[[f64; 3]] = &[
    [188.0, 0.035, 52175.806],
    [142.0, 3.125, 26087.903],
    [ 97.0, 3.00,  78263.709],
    [ 44.0, 6.02,  104351.613],
];

#[rustfmt::skip]
const MERCURY_B0: &[[f64; 3]] = &[
    [11737529.0, 1.98357499, 26087.90314157],
    [ 2388077.0, 5.03738959, 52175.80628315],
    [ 1222840.0, 3.14159265, 0.0],
    [  543252.0, 1.79644363, 78263.70942472],
    [  129779.0, 4.83232503, 104351.61256630],
    [   31867.0, 1.58088,    130439.51571],
    [    7963.0, 4.60972,    156527.41899],
    [    2014.0, 1.35324,    182615.32200],
];

#[rustfmt::skip]
const MERCURY_B1: &[[f64; 3]] = &[
    [429151.0, 3.50169780, 26087.90314157],
    [146234.0, 3.14159265, 0.0],
    [ 22675.0, 0.01515,    52175.80628],
    [ 10895.0, 0.48540,    78263.70942],
    [  6353.0, 3.42942,    104351.61257],
    [  2496.0, 0.16051,    130439.51571],
];

#[rustfmt::skip]
const MERCURY_B2: &[[f64; 3]] = &[
    [11831.0, 4.79066, 26087.90314],
    [ 1914.0, 0.0,     0.0],
    [ 1045.0, 1.21216, 52175.80628],
    [  266.0, 4.434,   78263.709],
    [  170.0, 1.623,   104351.613],
];

#[rustfmt::skip]
const MERCURY_B3: &[[f64; 3]] = &[
    [235.0, 0.354, 26087.903],
    [161.0, 0.0,   0.0],
    [ 19.0, 4.36,  52175.81],
];

#[rustfmt::skip]
const MERCURY_R0: &[[f64; 3]] = &[
    [39528272.0, 0.0,        0.0],
    [ 7834132.0, 6.19233723, 26087.90314157],
    [  795526.0, 2.95989690, 52175.80628315],
    [  121282.0, 6.01064154, 78263.70942472],
    [   21922.0, 2.77820093, 104351.61256630],
    [    4354.0, 5.82894,    130439.51571],
    [     918.0, 2.59650,    156527.41899],
    [     290.0, 1.424,      25028.521],
    [     260.0, 3.028,      27197.282],
    [     202.0, 5.647,      182615.322],
];

#[rustfmt::skip]
const MERCURY_R1: &[[f64; 3]] = &[
    [217348.0, 4.65617159, 26087.90314157],
    [ 44142.0, 1.42385544, 52175.80628315],
    [ 10094.0, 4.47466326, 78263.70942472],
    [  2433.0, 1.24226,    104351.61257],
    [  1624.0, 0.0,        0.0],
];

#[rustfmt::skip]
const MERCURY_R2: &[[f64; 3]] = &[
    [3118.0, 3.08231, 26087.90314],
    [1245.0, 6.15183, 52175.80628],
    [ 425.0, 2.926,   78263.709],
    [ 136.0, 5.980,   104351.613],
];

#[rustfmt::skip]
const MERCURY_R3: &[[f64; 3]] = &[
    [33.0, 1.68, 26087.90],
    [24.0, 4.63, 52175.81],
    [12.0, 1.39, 78263.71],
];

const MERCURY: Vsop87Series = Vsop87Series {
    l: [MERCURY_L0, MERCURY_L1, MERCURY_L2, MERCURY_L3, NONE, NONE],
    b: [MERCURY_B0, MERCURY_B1, MERCURY_B2, MERCURY_B3, NONE, NONE],
    r: [MERCURY_R0, MERCURY_R1, MERCURY_R2, MERCURY_R3, NONE, NONE],
};

#[rustfmt::skip]
const VENUS_L0: &[[f64; 3]] = &[
    [317614667.0, 0.0,        0.0],
    [  1353968.0, 5.59313319, 10213.28554621],
    [    89892.0, 5.30650,    20426.57109],
    [     5477.0, 4.41630,    7860.41939],
    [     3456.0, 2.69964,    11790.62909],
    [     2372.0, 2.99377,    3930.20970],
    [     1664.0, 4.25019,    1577.34354],
    [     1438.0, 4.15745,    9683.59458],
    [     1317.0, 5.18668,    26.29832],
    [     1201.0, 6.15357,    30639.85664],
    [      769.0, 0.816,      9437.763],
    [      761.0, 1.950,      529.691],
    [      708.0, 1.065,      775.523],
    [      585.0, 3.998,      191.448],
];

#[rustfmt::skip]
const VENUS_L1: &[[f64; 3]] = &[
    [1021352943053.0, 0.0,     0.0],
    [        95708.0, 2.46424, 10213.28555],
    [        14445.0, 0.51625, 20426.57109],
    [          213.0, 1.795,   30639.857],
    [          174.0, 2.655,   26.298],
    [          152.0, 6.106,   1577.344],
];

#[rustfmt::skip]
const VENUS_L2: &[[f64; 3]] = &[
    [54127.0, 0.0,     0.0],
    [ 3891.0, 0.34514, 10213.28555],
    [ 1338.0, 2.02011, 20426.57109],
    [   24.0, 2.05,    26.30],
    [   19.0, 3.54,    30639.86],
];

#[rustfmt::skip]
const VENUS_L3: &[[f64; 3]] = &[
    [136.0, 4.804, 10213.286],
    [ 78.0, 3.67,  20426.57],
    [ 26.0, 0.0,   0.0],
];

#[rustfmt::skip]
const VENUS_L4: &[[f64; 3]] = &[
    [114.0, 3.1416, 0.0],
    [  3.0, 5.21,   20426.57],
    [  2.0, 2.51,   10213.29],
];

#[rustfmt::skip]
const VENUS_B0: &[[f64; 3]] = &[
    [5923638.0, 0.26702775, 10213.28554621],
    [  40108.0, 1.14737,    20426.57109],
    [  32815.0, 3.14159,    0.0],
    [   1011.0, 1.08946,    30639.85664],
    [    149.0, 6.254,      18073.705],
    [    138.0, 0.860,      1577.344],
    [    130.0, 3.672,      9437.763],
    [    120.0, 3.705,      2352.866],
    [    108.0, 4.539,      22003.915],
];

#[rustfmt::skip]
const VENUS_B1: &[[f64; 3]] = &[
    [513348.0, 1.80364310, 10213.28554621],
    [  4380.0, 3.38618,    20426.57109],
    [   199.0, 0.0,        0.0],
    [   197.0, 2.530,      30639.857],
];

#[rustfmt::skip]
const VENUS_B2: &[[f64; 3]] = &[
    [22378.0, 3.38509, 10213.28555],
    [  282.0, 0.0,     0.0],
    [  173.0, 5.256,   20426.571],
    [   27.0, 3.87,    30639.86],
];

#[rustfmt::skip]
const VENUS_B3: &[[f64; 3]] = &[
    [647.0, 4.992, 10213.286],
    [ 20.0, 3.14,  0.0],
    [  6.0, 0.77,  20426.57],
    [  3.0, 5.44,  30639.86],
];

#[rustfmt::skip]
const VENUS_B4: &[[f64; 3]] = &[
    [14.0, 0.32, 10213.29],
];

#[rustfmt::skip]
const VENUS_R0: &[[f64; 3]] = &[
    [72334821.0, 0.0,        0.0],
    [  489824.0, 4.02151832, 10213.28554621],
    [    1658.0, 4.90206,    20426.57109],
    [    1632.0, 2.84548,    7860.41939],
    [    1378.0, 1.12846,    11790.62909],
    [     498.0, 2.587,      9683.595],
    [     374.0, 1.423,      3930.210],
    [     264.0, 5.529,      9437.763],
    [     237.0, 2.551,      15720.839],
    [     222.0, 2.013,      19367.189],
];

#[rustfmt::skip]
const VENUS_R1: &[[f64; 3]] = &[
    [34551.0, 0.89199, 10213.28555],
    [  234.0, 1.772,   20426.571],
    [  234.0, 3.142,   0.0],
];

#[rustfmt::skip]
const VENUS_R2: &[[f64; 3]] = &[
    [1407.0, 5.06366, 10213.28555],
    [  16.0, 5.47,    20426.57],
    [  13.0, 0.0,     0.0],
];

#[rustfmt::skip]
const VENUS_R3: &[[f64; 3]] = &[
    [50.0, 3.22, 10213.29],
];

const VENUS: Vsop87Series = Vsop87Series {
    l: [VENUS_L0, VENUS_L1, VENUS_L2, VENUS_L3, VENUS_L4, NONE],
    b: [VENUS_B0, VENUS_B1, VENUS_B2, VENUS_B3, VENUS_B4, NONE],
    r: [VENUS_R0, VENUS_R1, VENUS_R2, VENUS_R3, NONE, NONE],
};

#[rustfmt::skip]
const EARTH_L0: &[[f64; 3]] = &[
    [175347046.0, 0.0,       0.0],
    [  3341656.0, 4.6692568, 6283.0758500],
    [    34894.0, 4.62610,   12566.15170],
    [     3497.0, 2.7441,    5753.3849],
    [     3418.0, 2.8289,    3.5231],
    [     3136.0, 3.6277,    77713.7715],
    [     2676.0, 4.4181,    7860.4194],
    [     2343.0, 6.1352,    3930.2097],
    [     1324.0, 0.7425,    11506.7698],
    [     1273.0, 2.0371,    529.6910],
    [     1199.0, 1.1096,    1577.3435],
    [      990.0, 5.233,     5884.927],
    [      902.0, 2.045,     26.298],
    [      857.0, 3.508,     398.149],
    [      780.0, 1.179,     5223.694],
    [      753.0, 2.533,     5507.553],
    [      505.0, 4.583,     18849.228],
    [      492.0, 4.205,     775.523],
    [      357.0, 2.920,     0.067],
    [      317.0, 5.849,     11790.629],
    [      284.0, 1.899,     796.298],
    [      271.0, 0.315,     10977.079],
    [      243.0, 0.345,     5486.778],
    [      206.0, 4.806,     2544.314],
    [      205.0, 1.869,     5573.143],
    [      202.0, 2.458,     6069.777],
];

#[rustfmt::skip]
const EARTH_L1: &[[f64; 3]] = &[
    [628331966747.0, 0.0,      0.0],
    [      206059.0, 2.678235, 6283.075850],
    [        4303.0, 2.63512,  12566.15170],
    [         425.0, 1.590,    3.523],
    [         119.0, 5.796,    26.298],
    [         109.0, 2.966,    1577.344],
    [          93.0, 2.59,     18849.23],
    [          72.0, 1.14,     529.69],
    [          68.0, 1.87,     398.15],
    [          67.0, 4.41,     5507.55],
    [          59.0, 2.89,     5223.69],
];

#[rustfmt::skip]
const EARTH_L2: &[[f64; 3]] = &[
    [52919.0, 0.0,    0.0],
    [ 8720.0, 1.0721, 6283.0758],
    [  309.0, 0.867,  12566.152],
    [   27.0, 0.05,   3.52],
    [   16.0, 5.19,   26.30],
    [   16.0, 3.68,   155.42],
];

#[rustfmt::skip]
const EARTH_L3: &[[f64; 3]] = &[
    [289.0, 5.844, 6283.076],
    [ 35.0, 0.0,   0.0],
    [ 17.0, 5.49,  12566.15],
];

#[rustfmt::skip]
const EARTH_L4: &[[f64; 3]] = &[
    [114.0, 3.142, 0.0],
    [  8.0, 5.84,  6283.08],
];

#[rustfmt::skip]
const EARTH_L5: &[[f64; 3]] = &[
    [1.0, 3.14, 0.0],
];

#[rustfmt::skip]
const EARTH_B0: &[[f64; 3]] = &[
    [280.0, 3.199, 84334.662],
    [102.0, 5.422, 5507.553],
    [ 80.0, 3.88,  5223.69],
    [ 44.0, 3.70,  2352.87],
    [ 32.0, 4.00,  1577.34],
];

#[rustfmt::skip]
const EARTH_B1: &[[f64; 3]] = &[
    [9.0, 3.90, 5507.55],
    [6.0, 1.73, 5223.69],
];

#[rustfmt::skip]
const EARTH_R0: &[[f64; 3]] = &[
    [100013989.0, 0.0,       0.0],
    [  1670700.0, 3.0984635, 6283.0758500],
    [    13956.0, 3.05525,   12566.15170],
    [     3084.0, 5.19847,   77713.77150],
    [     1628.0, 1.17388,   5753.38490],
    [     1576.0, 2.84685,   7860.41940],
    [      925.0, 5.453,     11506.770],
    [      542.0, 4.564,     3930.210],
    [      472.0, 3.661,     5884.927],
    [      346.0, 0.964,     5507.553],
    [      329.0, 5.900,     5223.694],
    [      307.0, 0.299,     5573.143],
    [      243.0, 4.273,     11790.629],
    [      212.0, 5.847,     1577.344],
    [      186.0, 5.022,     10977.079],
    [      175.0, 3.012,     18849.228],
    [      110.0, 5.055,     5486.778],
    [       98.0, 0.890,     6069.780],
    [       86.0, 5.690,     15720.840],
    [       86.0, 1.270,     161000.690],
    [       65.0, 0.270,     17260.150],
    [       63.0, 0.920,     529.690],
];

#[rustfmt::skip]
const EARTH_R1: &[[f64; 3]] = &[
    [103019.0, 1.107490, 6283.075850],
    [  1721.0, 1.06442,  12566.15170],
    [   702.0, 3.142,    0.0],
    [    32.0, 1.02,     18849.23],
    [    31.0, 2.84,     5507.55],
    [    25.0, 1.32,     5223.69],
];

#[rustfmt::skip]
const EARTH_R2: &[[f64; 3]] = &[
    [4359.0, 5.7846, 6283.0758],
    [ 124.0, 5.579,  12566.152],
    [  12.0, 3.14,   0.0],
    [   9.0, 3.63,   77713.77],
];

#[rustfmt::skip]
const EARTH_R3: &[[f64; 3]] = &[
    [145.0, 4.273, 6283.076],
    [  7.0, 3.92,  12566.15],
];

#[rustfmt::skip]
const EARTH_R4: &[[f64; 3]] = &[
    [4.0, 2.56, 6283.08],
];

const EARTH: Vsop87Series = Vsop87Series {
    l: [EARTH_L0, EARTH_L1, EARTH_L2, EARTH_L3, EARTH_L4, EARTH_L5],
    b: [EARTH_B0, EARTH_B1, NONE, NONE, NONE, NONE],
    r: [EARTH_R0, EARTH_R1, EARTH_R2, EARTH_R3, EARTH_R4, NONE],
};

#[rustfmt::skip]
const MARS_L0: &[[f64; 3]] = &[
    [620347712.0, 0.0,        0.0],
    [ 18656368.0, 5.05037100, 3340.61242670],
    [  1108217.0, 5.40099836, 6681.22485340],
    [    91798.0, 5.75479,    10021.83728],
    [    27745.0, 5.97050,    3.52312],
    [    12316.0, 0.84956,    2810.92146],
    [    10610.0, 2.93959,    2281.23050],
    [     8927.0, 4.15697,    0.01725],
    [     8716.0, 6.11005,    13362.44971],
    [     7775.0, 3.33968,    5621.84292],
    [     6798.0, 0.36462,    398.14900],
    [     4161.0, 0.22815,    2942.46342],
    [     3575.0, 1.66186,    2544.31442],
    [     3075.0, 0.85697,    191.44826],
    [     2938.0, 6.07893,    0.06731],
    [     2628.0, 0.64806,    3337.08931],
    [     2580.0, 0.02996,    3344.13555],
    [     2389.0, 5.03896,    796.29801],
    [     1799.0, 0.65634,    529.69097],
    [     1546.0, 2.91580,    1751.53953],
    [     1528.0, 1.14979,    6151.53389],
];

#[rustfmt::skip]
const MARS_L1: &[[f64; 3]] = &[
    [334085627474.0, 0.0,        0.0],
    [      1458227.0, 3.60426054, 3340.61242670],
    [       164901.0, 3.92631250, 6681.22485340],
    [        19963.0, 4.26594,    10021.83728],
    [         3452.0, 4.73210,    3.52312],
    [         2485.0, 4.61277,    13362.44971],
    [          842.0, 4.459,      2281.230],
    [          538.0, 5.016,      398.149],
    [          521.0, 4.994,      3344.136],
    [          433.0, 2.561,      191.448],
    [          430.0, 5.316,      155.420],
    [          382.0, 3.539,      796.298],
];

#[rustfmt::skip]
const MARS_L2: &[[f64; 3]] = &[
    [58016.0, 2.04979, 3340.61243],
    [54188.0, 0.0,     0.0],
    [13908.0, 2.45742, 6681.22485],
    [ 2465.0, 2.80000, 10021.83728],
    [  398.0, 3.141,   13362.450],
    [  222.0, 3.194,   3.523],
    [  121.0, 0.543,   155.420],
];

#[rustfmt::skip]
const MARS_L3: &[[f64; 3]] = &[
    [1482.0, 0.44435, 3340.61243],
    [ 662.0, 0.885,   6681.225],
    [ 188.0, 1.288,   10021.837],
    [  41.0, 1.55,    13362.45],
    [  26.0, 0.0,     0.0],
];

#[rustfmt::skip]
const MARS_L4: &[[f64; 3]] = &[
    [114.0, 3.1416, 0.0],
    [ 29.0, 5.64,   6681.22],
    [ 24.0, 5.14,   3340.61],
];

#[rustfmt::skip]
const MARS_B0: &[[f64; 3]] = &[
    [3197135.0, 3.76832042, 3340.61242670],
    [ 298033.0, 4.10616996, 6681.22485340],
    [ 289105.0, 0.0,        0.0],
    [  31366.0, 4.44651,    10021.83728],
    [   3484.0, 4.78813,    13362.44971],
    [    443.0, 5.026,      3344.136],
    [    443.0, 5.652,      3337.089],
    [    399.0, 5.131,      16703.062],
    [    293.0, 3.793,      2281.230],
    [    182.0, 6.136,      6151.534],
];

#[rustfmt::skip]
const MARS_B1: &[[f64; 3]] = &[
    [350069.0, 5.36847836, 3340.61242670],
    [ 14116.0, 3.14159,    0.0],
    [  9671.0, 5.47878,    6681.22485],
    [  1472.0, 3.20206,    10021.83728],
    [   426.0, 3.408,      13362.450],
    [   102.0, 0.776,      3337.089],
];

#[rustfmt::skip]
const MARS_B2: &[[f64; 3]] = &[
    [16727.0, 0.60221, 3340.61243],
    [ 4987.0, 3.14159, 0.0],
    [  302.0, 5.559,   6681.225],
    [   26.0, 1.90,    13362.45],
    [   21.0, 0.92,    10021.84],
];

#[rustfmt::skip]
const MARS_B3: &[[f64; 3]] = &[
    [607.0, 1.981, 3340.612],
    [ 43.0, 0.0,   0.0],
    [ 14.0, 1.80,  6681.22],
];

#[rustfmt::skip]
const MARS_B4: &[[f64; 3]] = &[
    [13.0, 0.0,  0.0],
    [11.0, 3.46, 3340.61],
];

#[rustfmt::skip]
const MARS_R0: &[[f64; 3]] = &[
    [153033488.0, 0.0,        0.0],
    [ 14184953.0, 3.47971284, 3340.61242670],
    [   660776.0, 3.81783443, 6681.22485340],
    [    46179.0, 4.15595,    10021.83728],
    [     8110.0, 5.55958,    2810.92146],
    [     7485.0, 1.77239,    5621.84292],
    [     5523.0, 1.36436,    2281.23050],
    [     3825.0, 4.49407,    13362.44971],
    [     2484.0, 4.92545,    2942.46342],
    [     2307.0, 0.09081,    2544.31442],
    [     1999.0, 5.36059,    3337.08931],
    [     1960.0, 4.74249,    3344.13555],
    [     1167.0, 2.11260,    5092.15196],
    [     1103.0, 5.00908,    398.14900],
    [      992.0, 5.839,      6151.534],
    [      899.0, 4.408,      529.691],
    [      807.0, 2.102,      1059.382],
    [      798.0, 3.448,      796.298],
    [      741.0, 1.499,      2146.165],
    [      726.0, 1.245,      8432.764],
];

#[rustfmt::skip]
const MARS_R1: &[[f64; 3]] = &[
    [1107433.0, 2.03250524, 3340.61242670],
    [ 103176.0, 2.37071847, 6681.22485340],
    [  12877.0, 0.0,        0.0],
    [  10816.0, 2.70888,    10021.83728],
    [   1195.0, 3.04702,    13362.44971],
    [    439.0, 2.888,      2281.230],
    [    396.0, 3.423,      3344.136],
];

#[rustfmt::skip]
const MARS_R2: &[[f64; 3]] = &[
    [44242.0, 0.47931, 3340.61243],
    [ 8138.0, 0.86998, 6681.22485],
    [ 1275.0, 1.22594, 10021.83728],
    [  187.0, 1.573,   13362.450],
    [   52.0, 3.14,    0.0],
    [   41.0, 1.97,    3344.14],
];

#[rustfmt::skip]
const MARS_R3: &[[f64; 3]] = &[
    [1113.0, 5.14987, 3340.61243],
    [ 424.0, 5.613,   6681.225],
    [ 100.0, 5.997,   10021.837],
    [  20.0, 0.08,    13362.45],
];

#[rustfmt::skip]
const MARS_R4: &[[f64; 3]] = &[
    [20.0, 3.58, 3340.61],
    [16.0, 4.05, 6681.22],
];

const MARS: Vsop87Series = Vsop87Series {
    l: [MARS_L0, MARS_L1, MARS_L2, MARS_L3, MARS_L4, NONE],
    b: [MARS_B0, MARS_B1, MARS_B2, MARS_B3, MARS_B4, NONE],
    r: [MARS_R0, MARS_R1, MARS_R2, MARS_R3, MARS_R4, NONE],
};

#[rustfmt::skip]
const JUPITER_L0: &[[f64; 3]] = &[
    [59954691.0, 0.0,        0.0],
    [ 9695899.0, 5.06191793, 529.69096509],
    [  573610.0, 1.44406206, 7.11354700],
    [  306389.0, 5.41734730, 1059.38193019],
    [   97178.0, 4.14265,    632.78374],
    [   72903.0, 3.64043,    522.57742],
    [   64264.0, 3.41145,    103.09277],
    [   39806.0, 2.29377,    419.48464],
    [   38858.0, 1.27232,    316.39187],
    [   27965.0, 1.78455,    536.80451],
    [   13590.0, 5.77481,    1589.07290],
    [    8769.0, 3.63000,    949.17561],
    [    8246.0, 3.58227,    206.18555],
    [    7610.0, 5.39098,    735.87651],
    [    6778.0, 3.22558,    1052.26838],
    [    6466.0, 0.30629,    988.53246],
    [    5850.0, 1.55410,    1194.44701],
];

#[rustfmt::skip]
const JUPITER_L1: &[[f64; 3]] = &[
    [52993480757.0, 0.0,        0.0],
    [     489741.0, 4.22066689, 529.69096509],
    [     228919.0, 6.02647464, 7.11354700],
    [      27655.0, 4.57266,    1059.38193],
    [      20721.0, 5.45939,    522.57742],
    [      12106.0, 0.16986,    536.80451],
    [       6068.0, 4.42424,    103.09277],
    [       5434.0, 3.98478,    419.48464],
    [       4238.0, 5.89009,    14.22709],
];

#[rustfmt::skip]
const JUPITER_L2: &[[f64; 3]] = &[
    [47234.0, 4.32148, 7.11355],
    [38966.0, 0.0,     0.0],
    [30629.0, 2.93021, 529.69097],
    [ 3189.0, 1.05500, 522.57742],
    [ 2729.0, 4.84545, 536.80451],
    [ 2723.0, 3.41411, 1059.38193],
    [ 1721.0, 4.18734, 14.22709],
];

#[rustfmt::skip]
const JUPITER_L3: &[[f64; 3]] = &[
    [6502.0, 2.59862, 7.11355],
    [1357.0, 1.34635, 529.69097],
    [ 471.0, 2.475,   14.227],
    [ 417.0, 3.245,   536.805],
    [ 353.0, 2.974,   522.577],
    [ 155.0, 2.076,   1059.382],
];

#[rustfmt::skip]
const JUPITER_L4: &[[f64; 3]] = &[
    [669.0, 0.853, 7.114],
    [114.0, 3.142, 0.0],
    [100.0, 0.742, 14.227],
    [ 50.0, 1.65,  536.80],
    [ 44.0, 5.82,  529.69],
];

#[rustfmt::skip]
const JUPITER_L5: &[[f64; 3]] = &[
    [50.0, 5.26, 7.11],
    [16.0, 5.25, 14.23],
];

#[rustfmt::skip]
const JUPITER_B0: &[[f64; 3]] = &[
    [2268616.0, 3.55852606, 529.69096509],
    [ 110090.0, 0.0,        0.0],
    [ 109972.0, 3.90809347, 1059.38193019],
    [   8101.0, 3.60509,    522.57742],
    [   6438.0, 0.30627,    988.53246],
    [   6044.0, 4.25883,    1589.07290],
    [   1107.0, 2.98534,    1162.47470],
    [    944.0, 1.675,      426.598],
    [    942.0, 2.936,      1052.268],
    [    894.0, 1.754,      7.114],
    [    836.0, 5.179,      103.093],
    [    767.0, 2.155,      632.784],
];

#[rustfmt::skip]
const JUPITER_B1: &[[f64; 3]] = &[
    [177352.0, 5.70166, 529.69097],
    [  3230.0, 5.77941, 1059.38193],
    [  3081.0, 5.47464, 522.57742],
    [  2212.0, 4.73477, 536.80451],
    [  1694.0, 3.14159, 0.0],
    [   346.0, 4.746,   1052.268],
];

#[rustfmt::skip]
const JUPITER_B2: &[[f64; 3]] = &[
    [8094.0, 1.46322, 529.69097],
    [ 813.0, 3.1416,  0.0],
    [ 742.0, 0.957,   522.577],
    [ 399.0, 2.899,   536.805],
    [ 342.0, 1.447,   1059.382],
];

#[rustfmt::skip]
const JUPITER_B3: &[[f64; 3]] = &[
    [252.0, 3.381, 529.691],
    [122.0, 2.733, 522.577],
    [ 49.0, 1.04,  536.80],
];

#[rustfmt::skip]
const JUPITER_B4: &[[f64; 3]] = &[
    [15.0, 4.53, 522.58],
    [ 5.0, 4.47, 529.69],
];

#[rustfmt::skip]
const JUPITER_R0: &[[f64; 3]] = &[
    [520887429.0, 0.0,        0.0],
    [ 25209327.0, 3.49108640, 529.69096509],
    [   610600.0, 3.84115365, 1059.38193019],
    [   282029.0, 2.57419881, 632.78373931],
    [   187647.0, 2.07590383, 522.57741809],
    [    86793.0, 0.71001,    419.48464],
    [    72063.0, 0.21466,    536.80451],
    [    65517.0, 5.97996,    316.39187],
    [    30135.0, 2.16132,    949.17561],
    [    29135.0, 1.67759,    103.09277],
    [    23947.0, 0.27458,    7.11355],
    [    23453.0, 3.54023,    735.87651],
    [    22284.0, 4.19363,    1589.07290],
    [    13033.0, 2.96043,    1162.47470],
];

#[rustfmt::skip]
const JUPITER_R1: &[[f64; 3]] = &[
    [1271802.0, 2.64937512, 529.69096509],
    [  61662.0, 3.00076,    1059.38193],
    [  53444.0, 3.89718,    522.57742],
    [  41390.0, 0.0,        0.0],
    [  31185.0, 4.88277,    536.80451],
    [  11847.0, 2.41330,    419.48464],
    [   9166.0, 4.75980,    7.11355],
    [   3404.0, 3.34689,    1589.07290],
    [   3203.0, 5.21083,    735.87651],
    [   3176.0, 2.79297,    103.09277],
];

#[rustfmt::skip]
const JUPITER_R2: &[[f64; 3]] = &[
    [79645.0, 1.35866, 529.69097],
    [ 8252.0, 5.77773, 522.57742],
    [ 7030.0, 3.27476, 536.80451],
    [ 5314.0, 1.83835, 1059.38193],
    [ 1861.0, 2.97682, 7.11355],
    [  964.0, 5.480,   515.464],
    [  836.0, 4.199,   419.485],
];

#[rustfmt::skip]
const JUPITER_R3: &[[f64; 3]] = &[
    [3519.0, 6.05800, 529.69097],
    [1073.0, 1.67321, 536.80451],
    [ 916.0, 1.413,   522.577],
    [ 342.0, 0.523,   1059.382],
    [ 255.0, 1.196,   7.114],
    [ 222.0, 0.952,   515.464],
];

#[rustfmt::skip]
const JUPITER_R4: &[[f64; 3]] = &[
    [129.0, 0.084, 536.805],
    [113.0, 4.249, 529.691],
    [ 83.0, 3.30,  522.58],
    [ 38.0, 2.73,  515.46],
];

#[rustfmt::skip]
const JUPITER_R5: &[[f64; 3]] = &[
    [11.0, 4.75, 536.80],
    [ 4.0, 5.92, 522.58],
];

const JUPITER: Vsop87Series = Vsop87Series {
    l: [JUPITER_L0, JUPITER_L1, JUPITER_L2, JUPITER_L3, JUPITER_L4, JUPITER_L5],
    b: [JUPITER_B0, JUPITER_B1, JUPITER_B2, JUPITER_B3, JUPITER_B4, NONE],
    r: [JUPITER_R0, JUPITER_R1, JUPITER_R2, JUPITER_R3, JUPITER_R4, JUPITER_R5],
};

#[rustfmt::skip]
const SATURN_L0: &[[f64; 3]] = &[
    [87401354.0, 0.0,        0.0],
    [11107660.0, 3.96205090, 213.29909544],
    [ 1414151.0, 4.58581886, 7.11354700],
    [  398379.0, 0.52112025, 206.18554843],
    [  350769.0, 3.30329903, 426.59819088],
    [  206816.0, 0.24658366, 103.09277421],
    [   79271.0, 3.84007,    220.41264],
    [   23990.0, 4.66977,    110.20632],
    [   16574.0, 0.43719,    419.48464],
    [   15820.0, 0.93809,    632.78374],
    [   15054.0, 2.71670,    639.89729],
    [   14907.0, 5.76903,    316.39187],
    [   14610.0, 1.56519,    3.93215],
    [   13160.0, 4.44891,    14.22709],
    [   13005.0, 5.98119,    11.04570],
    [   10725.0, 3.12940,    202.25340],
    [    6126.0, 1.76329,    277.03499],
    [    5863.0, 0.23658,    529.69097],
    [    5228.0, 4.20783,    3.18139],
    [    5020.0, 3.17788,    433.71174],
    [    4593.0, 0.61977,    199.07200],
    [    4006.0, 2.24480,    63.73590],
    [    3874.0, 3.22283,    138.51750],
    [    3269.0, 0.77493,    949.17561],
    [    2954.0, 0.98281,    95.97923],
    [    2461.0, 2.03164,    735.87651],
];

#[rustfmt::skip]
const SATURN_L1: &[[f64; 3]] = &[
    [21354295596.0, 0.0,        0.0],
    [    1296855.0, 1.82820545, 213.29909544],
    [     564348.0, 2.88500136, 7.11354700],
    [     107679.0, 2.27769912, 206.18554843],
    [      98323.0, 1.08070,    426.59819],
    [      40255.0, 2.04128,    220.41264],
    [      19942.0, 1.27955,    103.09277],
    [      10512.0, 2.74880,    14.22709],
    [       6939.0, 0.40493,    639.89729],
    [       4803.0, 2.44194,    419.48464],
    [       4056.0, 2.92166,    110.20632],
    [       3769.0, 3.64965,    3.93215],
    [       3385.0, 2.41694,    3.18139],
    [       3302.0, 1.26256,    433.71174],
    [       3071.0, 2.32739,    199.07200],
];

#[rustfmt::skip]
const SATURN_L2: &[[f64; 3]] = &[
    [116441.0, 1.17988, 7.11355],
    [ 91921.0, 0.07425, 213.29910],
    [ 90592.0, 0.0,     0.0],
    [ 15277.0, 4.06492, 206.18555],
    [ 10631.0, 0.25778, 220.41264],
    [ 10605.0, 5.40964, 426.59819],
    [  4265.0, 1.04600, 14.22709],
    [  1216.0, 2.91860, 103.09277],
    [  1165.0, 4.60943, 639.89729],
    [  1082.0, 5.69130, 433.71174],
    [  1045.0, 4.04206, 199.07200],
    [  1020.0, 0.63370, 3.18139],
];

#[rustfmt::skip]
const SATURN_L3: &[[f64; 3]] = &[
    [16039.0, 5.73945, 7.11355],
    [ 4250.0, 4.58540, 213.29910],
    [ 1907.0, 4.76082, 220.41264],
    [ 1466.0, 5.91326, 206.18555],
    [ 1162.0, 5.61974, 14.22709],
    [ 1067.0, 3.60816, 426.59819],
    [  239.0, 3.861,   433.712],
    [  237.0, 5.768,   199.072],
    [  166.0, 5.116,   3.181],
];

#[rustfmt::skip]
const SATURN_L4: &[[f64; 3]] = &[
    [1662.0, 3.99826, 7.11355],
    [ 257.0, 2.984,   220.413],
    [ 236.0, 3.902,   14.227],
    [ 149.0, 2.741,   213.299],
];

#[rustfmt::skip]
const SATURN_L5: &[[f64; 3]] = &[
    [124.0, 2.259, 7.114],
    [ 34.0, 2.16,  14.23],
];

#[rustfmt::skip]
const SATURN_B0: &[[f64; 3]] = &[
    [4330678.0, 3.60284428, 213.29909544],
    [ 240348.0, 2.85238489, 426.59819088],
    [  84746.0, 0.0,        0.0],
    [  34116.0, 0.57297,    206.18555],
    [  30863.0, 3.48442,    220.41264],
    [  14734.0, 2.11847,    639.89729],
    [   9917.0, 5.79003,    419.48464],
    [   6994.0, 4.73604,    7.11355],
    [   4808.0, 5.43305,    316.39187],
    [   4788.0, 4.96512,    110.20632],
    [   3432.0, 2.73255,    433.71174],
    [   1506.0, 6.01304,    103.09277],
];

#[rustfmt::skip]
const SATURN_B1: &[[f64; 3]] = &[
    [397555.0, 5.33290000, 213.29909544],
    [ 49479.0, 3.14159,    0.0],
    [ 18572.0, 6.09919,    426.59819],
    [ 14801.0, 2.30586,    206.18555],
    [  9644.0, 1.69675,    220.41264],
    [  3757.0, 1.25429,    419.48464],
    [  2717.0, 5.91166,    639.89729],
    [  1455.0, 0.85161,    433.71174],
];

#[rustfmt::skip]
const SATURN_B2: &[[f64; 3]] = &[
    [20630.0, 0.50482, 213.29910],
    [ 3720.0, 3.99833, 206.18555],
    [ 1627.0, 6.18190, 220.41264],
    [ 1346.0, 0.0,     0.0],
    [  706.0, 3.039,   419.485],
    [  365.0, 5.099,   426.598],
    [  330.0, 5.279,   433.712],
];

#[rustfmt::skip]
const SATURN_B3: &[[f64; 3]] = &[
    [666.0, 1.990, 213.299],
    [632.0, 5.698, 206.186],
    [398.0, 0.0,   0.0],
    [188.0, 4.338, 220.413],
    [ 92.0, 4.84,  419.48],
    [ 52.0, 3.42,  433.71],
];

#[rustfmt::skip]
const SATURN_B4: &[[f64; 3]] = &[
    [80.0, 1.12, 206.19],
    [32.0, 3.12, 213.30],
    [17.0, 2.48, 220.41],
];

#[rustfmt::skip]
const SATURN_R0: &[[f64; 3]] = &[
    [955758136.0, 0.0,        0.0],
    [ 52921382.0, 2.39226220, 213.29909544],
    [  1873680.0, 5.23549605, 206.18554843],
    [  1464664.0, 1.64763045, 426.59819088],
    [   821891.0, 5.93520042, 316.39186965],
    [   547507.0, 5.01532618, 103.09277421],
    [   371684.0, 2.27114821, 220.41264244],
    [   361778.0, 3.13904301, 7.11354700],
    [   140618.0, 5.70406606, 632.78373931],
    [   108975.0, 3.29313390, 110.20632121],
    [    69007.0, 5.94100,    419.48464],
    [    61053.0, 0.94038,    639.89729],
    [    48913.0, 1.55733,    202.25340],
    [    34144.0, 0.19519,    277.03499],
    [    32402.0, 5.47085,    949.17561],
    [    20937.0, 0.46349,    735.87651],
    [    20839.0, 1.52103,    433.71174],
    [    20747.0, 5.33256,    199.07200],
];

#[rustfmt::skip]
const SATURN_R1: &[[f64; 3]] = &[
    [6182981.0, 0.25843515, 213.29909544],
    [ 506578.0, 0.71114650, 206.18554843],
    [ 341394.0, 5.79635774, 426.59819088],
    [ 188491.0, 0.47215719, 220.41264244],
    [ 186262.0, 3.14159265, 0.0],
    [ 143891.0, 1.40744864, 7.11354700],
    [  49621.0, 6.01744,    103.09277],
    [  20928.0, 5.09246,    639.89729],
    [  19953.0, 1.17560,    419.48464],
    [  18840.0, 1.60820,    110.20632],
    [  13877.0, 0.75886,    199.07200],
];

#[rustfmt::skip]
const SATURN_R2: &[[f64; 3]] = &[
    [436902.0, 4.78671677, 213.29909544],
    [ 71923.0, 2.50070,    206.18555],
    [ 49767.0, 4.97168,    220.41264],
    [ 43221.0, 3.86940,    426.59819],
    [ 29646.0, 5.96310,    7.11355],
    [  4721.0, 2.47528,    199.07200],
    [  4142.0, 4.10670,    433.71174],
    [  3789.0, 3.09771,    639.89729],
    [  2964.0, 1.37206,    103.09277],
];

#[rustfmt::skip]
const SATURN_R3: &[[f64; 3]] = &[
    [20315.0, 3.02187, 213.29910],
    [ 8924.0, 3.19144, 220.41264],
    [ 6909.0, 4.35175, 206.18555],
    [ 4087.0, 4.22406, 7.11355],
    [ 3879.0, 2.01056, 426.59819],
    [ 1071.0, 4.20360, 199.07200],
    [  907.0, 2.283,   433.712],
];

#[rustfmt::skip]
const SATURN_R4: &[[f64; 3]] = &[
    [1202.0, 1.41499, 220.41264],
    [ 708.0, 1.162,   213.299],
    [ 516.0, 6.240,   206.186],
    [ 427.0, 2.469,   7.114],
    [ 268.0, 5.813,   426.598],
];

#[rustfmt::skip]
const SATURN_R5: &[[f64; 3]] = &[
    [129.0, 5.913, 220.413],
    [ 32.0, 0.69,  7.11],
];

const SATURN: Vsop87Series = Vsop87Series {
    l: [SATURN_L0, SATURN_L1, SATURN_L2, SATURN_L3, SATURN_L4, SATURN_L5],
    b: [SATURN_B0, SATURN_B1, SATURN_B2, SATURN_B3, SATURN_B4, NONE],
    r: [SATURN_R0, SATURN_R1, SATURN_R2, SATURN_R3, SATURN_R4, SATURN_R5],
};

#[rustfmt::skip]
const URANUS_L0: &[[f64; 3]] = &[
    [548129294.0, 0.0,        0.0],
    [  9260408.0, 0.89106421, 74.78159857],
    [  1504248.0, 3.62719262, 1.48447271],
    [   365982.0, 1.89962175, 73.29712585],
    [   272328.0, 3.35823741, 149.56319713],
    [    70328.0, 5.39254,    63.73590],
    [    68893.0, 6.09292,    76.26607],
    [    61999.0, 2.26952,    2.96895],
    [    61950.0, 2.85099,    11.04570],
    [    26469.0, 3.14152,    71.81265],
    [    25711.0, 6.11380,    454.90937],
    [    21079.0, 4.36059,    148.07872],
    [    17819.0, 1.74437,    36.64856],
    [    14613.0, 4.73732,    3.93215],
    [    11163.0, 5.82682,    224.34480],
    [    10998.0, 0.48865,    138.51750],
    [     9527.0, 2.95517,    35.16409],
    [     7546.0, 5.23626,    109.94569],
];

#[rustfmt::skip]
const URANUS_L1: &[[f64; 3]] = &[
    [7502543122.0, 0.0,        0.0],
    [    154458.0, 5.24201658, 74.78159857],
    [     24456.0, 1.71256,    1.48447],
    [      9258.0, 0.42844,    11.04570],
    [      8266.0, 1.50220,    63.73590],
    [      7842.0, 1.31983,    149.56320],
    [      3899.0, 0.46483,    3.93215],
    [      2284.0, 4.17367,    76.26607],
    [      1927.0, 0.53013,    2.96895],
    [      1233.0, 1.58634,    70.84945],
];

#[rustfmt::skip]
const URANUS_L2: &[[f64; 3]] = &[
    [53033.0, 0.0,     0.0],
    [ 2358.0, 2.26014, 74.78160],
    [  769.0, 4.526,   11.046],
    [  552.0, 3.258,   63.736],
    [  542.0, 2.276,   3.932],
    [  529.0, 4.923,   1.484],
    [  258.0, 3.691,   3.181],
];

#[rustfmt::skip]
const URANUS_L3: &[[f64; 3]] = &[
    [121.0, 0.024, 74.782],
    [ 68.0, 4.12,  3.93],
    [ 53.0, 2.39,  11.05],
    [ 46.0, 0.0,   0.0],
];

#[rustfmt::skip]
const URANUS_B0: &[[f64; 3]] = &[
    [1346278.0, 2.61877811, 74.78159857],
    [  62341.0, 5.08111,    149.56320],
    [  61601.0, 3.14159,    0.0],
    [   9964.0, 1.61603,    76.26607],
    [   9926.0, 0.57630,    73.29713],
    [   3259.0, 1.26119,    224.34480],
    [   2972.0, 2.24367,    1.48447],
    [   2010.0, 6.05550,    148.07872],
    [   1522.0, 0.27960,    63.73590],
];

#[rustfmt::skip]
const URANUS_B1: &[[f64; 3]] = &[
    [206366.0, 4.12394311, 74.78159857],
    [  8563.0, 0.33820,    149.56320],
    [  1726.0, 2.12193,    73.29713],
    [  1374.0, 0.0,        0.0],
    [  1369.0, 3.06861,    76.26607],
    [   451.0, 3.777,      1.484],
];

#[rustfmt::skip]
const URANUS_B2: &[[f64; 3]] = &[
    [9212.0, 5.80044, 74.78160],
    [ 557.0, 0.0,     0.0],
    [ 286.0, 2.177,   149.563],
    [  95.0, 3.84,    73.30],
];

#[rustfmt::skip]
const URANUS_B3: &[[f64; 3]] = &[
    [268.0, 1.251, 74.782],
    [ 11.0, 3.14,  0.0],
    [  6.0, 4.01,  149.56],
];

#[rustfmt::skip]
const URANUS_R0: &[[f64; 3]] = &[
    [1921264848.0, 0.0,        0.0],
    [  88784984.0, 5.60377527, 74.78159857],
    [   3440836.0, 0.32836099, 73.29712585],
    [   2055653.0, 1.78295159, 149.56319713],
    [    649322.0, 4.52247298, 76.26607127],
    [    602248.0, 3.86003820, 63.73589830],
    [    496404.0, 1.40139935, 454.90936652],
    [    338526.0, 1.58002683, 138.51749687],
    [    243508.0, 1.57086606, 71.81265315],
    [    190522.0, 1.99809394, 1.48447271],
    [    161858.0, 2.79137863, 148.07872443],
    [    143706.0, 1.38368574, 11.04570026],
    [     93192.0, 0.17437,    36.64856],
    [     89806.0, 3.66105,    109.94569],
    [     71424.0, 4.24509,    224.34480],
];

#[rustfmt::skip]
const URANUS_R1: &[[f64; 3]] = &[
    [1479896.0, 3.67205697, 74.78159857],
    [  71212.0, 6.22601,    63.73590],
    [  68627.0, 6.13411,    149.56320],
    [  24060.0, 3.14159,    0.0],
    [  21468.0, 2.60177,    76.26607],
    [  20857.0, 5.24625,    11.04570],
    [  11405.0, 0.01848,    70.84945],
    [   7497.0, 0.42360,    73.29713],
];

#[rustfmt::skip]
const URANUS_R2: &[[f64; 3]] = &[
    [22440.0, 0.69953, 74.78160],
    [ 4727.0, 1.69900, 63.73590],
    [ 1682.0, 4.64830, 70.84945],
    [ 1650.0, 3.09660, 11.04570],
    [ 1434.0, 3.52120, 149.56320],
    [  770.0, 0.0,     0.0],
];

#[rustfmt::skip]
const URANUS_R3: &[[f64; 3]] = &[
    [1164.0, 4.73453, 74.78160],
    [ 212.0, 3.343,   63.736],
    [ 196.0, 2.980,   70.849],
    [ 105.0, 0.958,   11.046],
];

#[rustfmt::skip]
const URANUS_R4: &[[f64; 3]] = &[
    [53.0, 3.009, 74.782],
];

const URANUS: Vsop87Series = Vsop87Series {
    l: [URANUS_L0, URANUS_L1, URANUS_L2, URANUS_L3, NONE, NONE],
    b: [URANUS_B0, URANUS_B1, URANUS_B2, URANUS_B3, NONE, NONE],
    r: [URANUS_R0, URANUS_R1, URANUS_R2, URANUS_R3, URANUS_R4, NONE],
};

#[rustfmt::skip]
const NEPTUNE_L0: &[[f64; 3]] = &[
    [531188633.0, 0.0,        0.0],
    [  1798476.0, 2.90101273, 38.13303564],
    [  1019728.0, 0.48580922, 36.64856292],
    [    42064.0, 5.41055,    2.96895],
    [    37715.0, 6.09222,    35.16409],
    [    33785.0, 1.24489,    76.26607],
    [    16483.0, 0.00008,    491.55793],
    [     9199.0, 4.93758,    39.61751],
    [     8994.0, 0.27462,    175.16606],
    [     4216.0, 1.98712,    73.29713],
    [     3365.0, 1.03590,    33.67962],
    [     2285.0, 4.20606,    4.45342],
];

#[rustfmt::skip]
const NEPTUNE_L1: &[[f64; 3]] = &[
    [3837687717.0, 0.0,     0.0],
    [     16604.0, 4.86319, 1.48447],
    [     15807.0, 2.27923, 38.13304],
    [      3335.0, 3.68200, 76.26607],
    [      1306.0, 3.67320, 2.96895],
    [       605.0, 1.50477, 35.16409],
    [       179.0, 3.453,   39.618],
    [       107.0, 2.451,   37.612],
];

#[rustfmt::skip]
const NEPTUNE_L2: &[[f64; 3]] = &[
    [53893.0, 0.0,   0.0],
    [  296.0, 1.855, 1.484],
    [  281.0, 1.191, 38.133],
    [  270.0, 5.721, 76.266],
    [   23.0, 1.21,  2.97],
];

#[rustfmt::skip]
const NEPTUNE_L3: &[[f64; 3]] = &[
    [31.0, 0.0,  0.0],
    [15.0, 1.35, 76.27],
    [12.0, 6.04, 1.48],
    [12.0, 6.11, 38.13],
];

#[rustfmt::skip]
const NEPTUNE_B0: &[[f64; 3]] = &[
    [3088623.0, 1.44104372, 38.13303564],
    [  27780.0, 5.91272,    76.26607],
    [  27624.0, 0.0,        0.0],
    [  15448.0, 3.50877,    39.61751],
    [  15355.0, 2.52124,    36.64856],
    [   2000.0, 1.51000,    74.78160],
    [   1968.0, 4.37778,    1.48447],
    [   1015.0, 3.21561,    35.16409],
];

#[rustfmt::skip]
const NEPTUNE_B1: &[[f64; 3]] = &[
    [227279.0, 3.80793090, 38.13303564],
    [  1803.0, 1.97576,    76.26607],
    [  1433.0, 3.14159,    0.0],
    [  1386.0, 4.82556,    36.64856],
    [  1073.0, 6.08054,    39.61751],
    [   148.0, 3.858,      74.782],
];

#[rustfmt::skip]
const NEPTUNE_B2: &[[f64; 3]] = &[
    [9691.0, 5.57124, 38.13304],
    [  79.0, 3.63,    76.27],
    [  72.0, 0.45,    36.65],
    [  59.0, 3.14,    0.0],
];

#[rustfmt::skip]
const NEPTUNE_B3: &[[f64; 3]] = &[
    [273.0, 1.017, 38.133],
    [  2.0, 0.0,   0.0],
];

#[rustfmt::skip]
const NEPTUNE_R0: &[[f64; 3]] = &[
    [3007013206.0, 0.0,        0.0],
    [  27062259.0, 1.32999459, 38.13303564],
    [   1691764.0, 3.25186138, 36.64856292],
    [    807831.0, 5.18592836, 1.48447271],
    [    537761.0, 4.52113902, 35.16409022],
    [    495726.0, 1.57105641, 491.55792945],
    [    274572.0, 1.84552258, 175.16605980],
    [    135134.0, 3.37220609, 39.61750834],
    [    121802.0, 5.79754444, 76.26607127],
    [    100895.0, 0.37702724, 73.29712585],
    [     69792.0, 3.79616219, 2.96894542],
    [     46688.0, 5.74938034, 33.67961751],
    [     24594.0, 0.50802,    109.94569],
    [     16939.0, 1.59423,    71.81265],
    [     14230.0, 1.07786,    74.78160],
];

#[rustfmt::skip]
const NEPTUNE_R1: &[[f64; 3]] = &[
    [236339.0, 0.70498011, 38.13303564],
    [ 13220.0, 3.32015,    1.48447],
    [  8622.0, 6.21629,    35.16409],
    [  2702.0, 1.88141,    39.61751],
    [  2155.0, 2.09431,    2.96895],
    [  2153.0, 5.16874,    76.26607],
    [  1603.0, 0.0,        0.0],
];

#[rustfmt::skip]
const NEPTUNE_R2: &[[f64; 3]] = &[
    [4247.0, 5.89911, 38.13304],
    [ 218.0, 0.345,   1.484],
    [ 163.0, 2.239,   168.053],
    [ 156.0, 4.594,   182.280],
    [ 127.0, 2.848,   35.164],
];

#[rustfmt::skip]
const NEPTUNE_R3: &[[f64; 3]] = &[
    [166.0, 4.552, 38.133],
];

const NEPTUNE: Vsop87Series = Vsop87Series {
    l: [NEPTUNE_L0, NEPTUNE_L1, NEPTUNE_L2, NEPTUNE_L3, NONE, NONE],
    b: [NEPTUNE_B0, NEPTUNE_B1, NEPTUNE_B2, NEPTUNE_B3, NONE, NONE],
    r: [NEPTUNE_R0, NEPTUNE_R1, NEPTUNE_R2, NEPTUNE_R3, NONE, NONE],
};

