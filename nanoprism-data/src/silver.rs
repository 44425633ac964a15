//! Silver optical constants from P. B. Johnson and R. W. Christy,
//! Phys. Rev. B 6, 4370 (1972).

use crate::{OpticalConstantRecord, r};

/// `(energy eV, n, k)` in ascending energy order.
pub static SILVER_JOHNSON_CHRISTY: [OpticalConstantRecord; 49] = [
    r(0.64, 0.24, 14.080),
    r(0.77, 0.15, 11.85),
    r(0.89, 0.13, 10.10),
    r(1.02, 0.09, 8.828),
    r(1.14, 0.04, 7.795),
    r(1.26, 0.04, 6.992),
    r(1.39, 0.04, 6.312),
    r(1.51, 0.04, 5.727),
    r(1.64, 0.03, 5.242),
    r(1.76, 0.04, 4.838),
    r(1.88, 0.05, 4.483),
    r(2.01, 0.06, 4.152),
    r(2.13, 0.05, 3.858),
    r(2.26, 0.06, 3.586),
    r(2.38, 0.05, 3.324),
    r(2.50, 0.05, 3.093),
    r(2.63, 0.05, 2.869),
    r(2.75, 0.04, 2.657),
    r(2.88, 0.04, 2.462),
    r(3.00, 0.05, 2.275),
    r(3.12, 0.05, 2.070),
    r(3.25, 0.05, 1.864),
    r(3.37, 0.07, 1.657),
    r(3.50, 0.10, 1.419),
    r(3.62, 0.14, 1.142),
    r(3.74, 0.17, 0.829),
    r(3.87, 0.81, 0.392),
    r(3.99, 1.13, 0.616),
    r(4.12, 1.34, 0.964),
    r(4.24, 1.39, 1.161),
    r(4.36, 1.41, 1.264),
    r(4.49, 1.41, 1.331),
    r(4.61, 1.38, 1.372),
    r(4.74, 1.35, 1.387),
    r(4.86, 1.33, 1.393),
    r(4.98, 1.31, 1.389),
    r(5.11, 1.30, 1.378),
    r(5.23, 1.28, 1.367),
    r(5.36, 1.28, 1.357),
    r(5.48, 1.26, 1.344),
    r(5.60, 1.25, 1.342),
    r(5.73, 1.22, 1.336),
    r(5.85, 1.20, 1.325),
    r(5.98, 1.18, 1.312),
    r(6.10, 1.15, 1.296),
    r(6.22, 1.14, 1.277),
    r(6.35, 1.12, 1.255),
    r(6.47, 1.10, 1.232),
    r(6.60, 1.07, 1.212),
];
