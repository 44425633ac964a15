//! Gold optical constants from R. L. Olmon, B. Slovick, T. W. Johnson, D. Shelton,
//! S.-H. Oh, G. D. Boreman and M. B. Raschke, Phys. Rev. B 86, 235147 (2012).

use crate::{OpticalConstantRecord, r};

/// `(energy eV, n, k)` in ascending energy order.
pub static GOLD_OLMON: [OpticalConstantRecord; 448] = [
    r(0.0497329, 42.79, 137.5),
    r(0.0516601, 40.92, 133.9),
    r(0.0535569, 39.16, 130.4),
    r(0.0554739, 37.49, 127.1),
    r(0.0574001, 35.91, 124.0),
    r(0.0592942, 34.41, 121.0),
    r(0.0612268, 33.0, 118.2),
    r(0.0631284, 31.66, 115.5),
    r(0.0650494, 30.39, 112.9),
    r(0.0669461, 29.19, 110.4),
    r(0.0688801, 28.05, 108.1),
    r(0.0707672, 26.97, 105.8),
    r(0.0726754, 25.94, 103.6),
    r(0.0745994, 24.97, 101.5),
    r(0.0765334, 24.04, 99.47),
    r(0.0784214, 23.17, 97.52),
    r(0.0803527, 22.33, 95.64),
    r(0.0822722, 21.54, 93.83),
    r(0.0841712, 20.78, 92.08),
    r(0.0861001, 20.06, 90.39),
    r(0.0879944, 19.38, 88.76),
    r(0.0899088, 18.72, 87.18),
    r(0.0918401, 18.1, 85.66),
    r(0.0937144, 17.51, 84.18),
    r(0.0956668, 16.94, 82.76),
    r(0.0975485, 16.4, 81.37),
    r(0.0995058, 15.88, 80.03),
    r(0.101377, 15.38, 78.73),
    r(0.10332, 14.91, 77.47),
    r(0.10525, 14.46, 76.25),
    r(0.10716, 14.02, 75.07),
    r(0.109045, 13.61, 73.91),
    r(0.110997, 13.21, 72.8),
    r(0.112815, 12.83, 71.71),
    r(0.1148, 12.46, 70.65),
    r(0.116636, 12.11, 69.63),
    r(0.118645, 11.77, 68.63),
    r(0.12049, 11.45, 67.65),
    r(0.122393, 11.14, 66.71),
    r(0.124345, 10.84, 65.78),
    r(0.126257, 10.55, 64.89),
    r(0.128176, 10.27, 64.01),
    r(0.130085, 10.01, 63.16),
    r(0.131996, 9.749, 62.33),
    r(0.133907, 9.502, 61.52),
    r(0.135828, 9.263, 60.73),
    r(0.13773, 9.034, 59.96),
    r(0.139653, 8.812, 59.2),
    r(0.141567, 8.598, 58.47),
    r(0.143467, 8.392, 57.75),
    r(0.145385, 8.193, 57.05),
    r(0.147302, 8.0, 56.37),
    r(0.149217, 7.814, 55.7),
    r(0.151126, 7.634, 55.04),
    r(0.153048, 7.461, 54.4),
    r(0.154961, 7.293, 53.78),
    r(0.156863, 7.13, 53.17),
    r(0.158771, 6.973, 52.57),
    r(0.160685, 6.82, 51.98),
    r(0.162602, 6.673, 51.41),
    r(0.164523, 6.53, 50.85),
    r(0.166422, 6.392, 50.3),
    r(0.168342, 6.258, 49.76),
    r(0.170261, 6.127, 49.24),
    r(0.172176, 6.001, 48.72),
    r(0.174086, 5.879, 48.21),
    r(0.175989, 5.76, 47.72),
    r(0.177908, 5.645, 47.23),
    r(0.179818, 5.533, 46.76),
    r(0.181742, 5.424, 46.29),
    r(0.183653, 5.319, 45.83),
    r(0.18555, 5.216, 45.38),
    r(0.187486, 5.117, 44.94),
    r(0.189376, 5.02, 44.51),
    r(0.191304, 4.926, 44.08),
    r(0.193212, 4.834, 43.67),
    r(0.195128, 4.745, 43.26),
    r(0.197051, 4.658, 42.85),
    r(0.198948, 4.574, 42.46),
    r(0.200849, 4.492, 42.07),
    r(0.202787, 4.412, 41.69),
    r(0.204696, 4.334, 41.32),
    r(0.206606, 4.258, 40.95),
    r(0.208517, 4.184, 40.59),
    r(0.210428, 4.112, 40.23),
    r(0.212338, 4.042, 39.88),
    r(0.214246, 3.973, 39.54),
    r(0.216151, 3.906, 39.2),
    r(0.21809, 3.841, 38.87),
    r(0.219986, 3.778, 38.54),
    r(0.221915, 3.716, 38.22),
    r(0.223839, 3.655, 37.9),
    r(0.225713, 3.596, 37.59),
    r(0.227661, 3.539, 37.29),
    r(0.229558, 3.482, 36.98),
    r(0.231487, 3.427, 36.69),
    r(0.233404, 3.374, 36.4),
    r(0.235309, 3.321, 36.11),
    r(0.237199, 3.27, 35.82),
    r(0.239121, 3.22, 35.55),
    r(0.241027, 3.171, 35.27),
    r(0.242963, 3.123, 35.0),
    r(0.244883, 3.077, 34.73),
    r(0.246784, 3.031, 34.47),
    r(0.248665, 2.986, 34.21),
    r(0.250625, 2.942, 33.96),
    r(0.252514, 2.899, 33.71),
    r(0.254431, 2.858, 33.46),
    r(0.256325, 2.817, 33.21),
    r(0.258247, 2.776, 32.97),
    r(0.260143, 2.737, 32.74),
    r(0.262068, 2.699, 32.5),
    r(0.263965, 2.661, 32.27),
    r(0.265889, 2.624, 32.04),
    r(0.267842, 2.588, 31.82),
    r(0.269707, 2.553, 31.6),
    r(0.271657, 2.518, 31.38),
    r(0.273575, 2.484, 31.16),
    r(0.275459, 2.451, 30.95),
    r(0.27737, 2.418, 30.74),
    r(0.279307, 2.386, 30.53),
    r(0.281207, 2.355, 30.33),
    r(0.283134, 2.324, 30.13),
    r(0.285021, 2.294, 29.93),
    r(0.286934, 2.264, 29.73),
    r(0.288873, 2.235, 29.54),
    r(0.29077, 2.207, 29.34),
    r(0.292692, 2.179, 29.15),
    r(0.294569, 2.152, 28.97),
    r(0.296542, 2.125, 28.78),
    r(0.298398, 2.098, 28.6),
    r(0.300349, 2.072, 28.42),
    r(0.302253, 2.047, 28.24),
    r(0.304181, 2.022, 28.07),
    r(0.306058, 1.998, 27.89),
    r(0.307959, 1.974, 27.72),
    r(0.309883, 1.95, 27.55),
    r(0.311831, 1.927, 27.38),
    r(0.313725, 1.904, 27.22),
    r(0.315642, 1.881, 27.06),
    r(0.317582, 1.859, 26.89),
    r(0.319465, 1.838, 26.73),
    r(0.321369, 1.817, 26.58),
    r(0.323296, 1.796, 26.42),
    r(0.325247, 1.775, 26.27),
    r(0.327135, 1.755, 26.11),
    r(0.329045, 1.735, 25.96),
    r(0.330978, 1.716, 25.81),
    r(0.332843, 1.697, 25.67),
    r(0.334731, 1.678, 25.52),
    r(0.336639, 1.659, 25.38),
    r(0.33857, 1.641, 25.23),
    r(0.340522, 1.623, 25.09),
    r(0.342403, 1.605, 24.95),
    r(0.344305, 1.588, 24.81),
    r(0.346228, 1.571, 24.68),
    r(0.348172, 1.554, 24.54),
    r(0.35004, 1.538, 24.41),
    r(0.352028, 1.521, 24.28),
    r(0.353937, 1.505, 24.14),
    r(0.355765, 1.49, 24.01),
    r(0.357715, 1.474, 23.89),
    r(0.359687, 1.459, 23.76),
    r(0.361575, 1.444, 23.63),
    r(0.363483, 1.429, 23.51),
    r(0.365412, 1.414, 23.39),
    r(0.367252, 1.4, 23.26),
    r(0.36922, 1.386, 23.14),
    r(0.371099, 1.372, 23.02),
    r(0.372997, 1.358, 22.91),
    r(0.374914, 1.345, 22.79),
    r(0.376852, 1.331, 22.67),
    r(0.378809, 1.318, 22.56),
    r(0.38067, 1.305, 22.45),
    r(0.382549, 1.293, 22.33),
    r(0.384566, 1.28, 22.22),
    r(0.386364, 1.268, 22.11),
    r(0.3883, 1.256, 22.0),
    r(0.390256, 1.244, 21.89),
    r(0.392107, 1.232, 21.79),
    r(0.394101, 1.22, 21.68),
    r(0.395989, 1.209, 21.57),
    r(0.397895, 1.197, 21.47),
    r(0.39982, 1.186, 21.37),
    r(0.401763, 1.175, 21.26),
    r(0.403594, 1.164, 21.16),
    r(0.405575, 1.153, 21.06),
    r(0.407441, 1.143, 20.96),
    r(0.409324, 1.132, 20.86),
    r(0.411224, 1.122, 20.77),
    r(0.413143, 1.112, 20.67),
    r(0.415079, 1.102, 20.57),
    r(0.417034, 1.092, 20.48),
    r(0.419007, 1.082, 20.38),
    r(0.420856, 1.073, 20.29),
    r(0.422721, 1.063, 20.2),
    r(0.424749, 1.054, 20.11),
    r(0.426649, 1.045, 20.02),
    r(0.428566, 1.036, 19.93),
    r(0.430351, 1.027, 19.84),
    r(0.432302, 1.018, 19.75),
    r(0.43427, 1.009, 19.66),
    r(0.436103, 1.0, 19.57),
    r(0.438107, 0.9919, 19.49),
    r(0.439972, 0.9835, 19.4),
    r(0.441854, 0.9752, 19.32),
    r(0.443752, 0.967, 19.23),
    r(0.445666, 0.9589, 19.15),
    r(0.447596, 0.9509, 19.06),
    r(0.449544, 0.943, 18.98),
    r(0.451508, 0.9352, 18.9),
    r(0.453324, 0.9275, 18.82),
    r(0.455322, 0.9199, 18.74),
    r(0.457169, 0.9123, 18.66),
    r(0.459031, 0.9049, 18.58),
    r(0.461079, 0.8976, 18.5),
    r(0.462973, 0.8904, 18.43),
    r(0.464883, 0.8832, 18.35),
    r(0.466808, 0.8761, 18.27),
    r(0.468749, 0.8692, 18.2),
    r(0.470528, 0.8623, 18.12),
    r(0.472501, 0.8554, 18.05),
    r(0.47449, 0.8487, 17.97),
    r(0.476313, 0.8421, 17.9),
    r(0.47815, 0.8355, 17.83),
    r(0.480187, 0.829, 17.75),
    r(0.482054, 0.8226, 17.68),
    r(0.483935, 0.8162, 17.61),
    r(0.485831, 0.8099, 17.54),
    r(0.487743, 0.8037, 17.47),
    r(0.489669, 0.7976, 17.4),
    r(0.491611, 0.7916, 17.33),
    r(0.493568, 0.7856, 17.26),
    r(0.49554, 0.7797, 17.2),
    r(0.497329, 0.7738, 17.13),
    r(0.499332, 0.768, 17.06),
    r(0.501149, 0.7623, 17.0),
    r(0.503183, 0.7566, 16.93),
    r(0.505027, 0.7511, 16.86),
    r(0.506885, 0.7455, 16.8),
    r(0.508757, 0.7401, 16.73),
    r(0.510854, 0.7347, 16.67),
    r(0.512755, 0.7293, 16.61),
    r(0.514671, 0.724, 16.54),
    r(0.518329, 0.7136, 16.42),
    r(0.520286, 0.7085, 16.36),
    r(0.522259, 0.7034, 16.3),
    r(0.524246, 0.6984, 16.24),
    r(0.526025, 0.6935, 16.17),
    r(0.528042, 0.6886, 16.11),
    r(0.529847, 0.6837, 16.06),
    r(0.533724, 0.6742, 15.94),
    r(0.535569, 0.6695, 15.88),
    r(0.537426, 0.6649, 15.82),
    r(0.539531, 0.6603, 15.76),
    r(0.543314, 0.6512, 15.65),
    r(0.545225, 0.6468, 15.59),
    r(0.54715, 0.6423, 15.54),
    r(0.549088, 0.638, 15.48),
    r(0.55276, 0.6294, 15.37),
    r(0.554739, 0.6252, 15.32),
    r(0.556732, 0.621, 15.26),
    r(0.558487, 0.6168, 15.21),
    r(0.562287, 0.6087, 15.1),
    r(0.564334, 0.6047, 15.05),
    r(0.566138, 0.6007, 15.0),
    r(0.570042, 0.5929, 14.89),
    r(0.571883, 0.589, 14.84),
    r(0.575867, 0.5814, 14.74),
    r(0.577745, 0.5776, 14.69),
    r(0.579636, 0.5739, 14.64),
    r(0.583455, 0.5666, 14.54),
    r(0.585383, 0.563, 14.49),
    r(0.589278, 0.5559, 14.39),
    r(0.590964, 0.5524, 14.35),
    r(0.594934, 0.5455, 14.25),
    r(0.596939, 0.5421, 14.2),
    r(0.600699, 0.5354, 14.11),
    r(0.60245, 0.5321, 14.06),
    r(0.60628, 0.5256, 13.97),
    r(0.608362, 0.5224, 13.93),
    r(0.612268, 0.516, 13.84),
    r(0.614087, 0.5129, 13.79),
    r(0.617759, 0.5068, 13.7),
    r(0.619921, 0.5031, 13.65),
    r(0.623036, 0.4989, 13.59),
    r(0.626183, 0.4942, 13.52),
    r(0.629361, 0.4896, 13.46),
    r(0.632572, 0.4851, 13.39),
    r(0.635816, 0.4805, 13.32),
    r(0.639094, 0.476, 13.25),
    r(0.642405, 0.4715, 13.19),
    r(0.645751, 0.4671, 13.12),
    r(0.649132, 0.4627, 13.05),
    r(0.652548, 0.4583, 12.99),
    r(0.656001, 0.454, 12.92),
    r(0.65949, 0.4497, 12.85),
    r(0.663017, 0.4454, 12.78),
    r(0.666582, 0.4412, 12.72),
    r(0.670185, 0.4369, 12.65),
    r(0.673827, 0.4328, 12.58),
    r(0.677509, 0.4286, 12.52),
    r(0.681232, 0.4245, 12.45),
    r(0.684995, 0.4204, 12.38),
    r(0.688801, 0.4163, 12.31),
    r(0.692649, 0.4123, 12.25),
    r(0.69654, 0.4082, 12.18),
    r(0.700476, 0.4042, 12.11),
    r(0.704456, 0.4003, 12.04),
    r(0.708481, 0.3963, 11.98),
    r(0.712553, 0.3924, 11.91),
    r(0.716672, 0.3885, 11.84),
    r(0.720838, 0.3847, 11.77),
    r(0.725054, 0.3808, 11.71),
    r(0.729319, 0.377, 11.64),
    r(0.733634, 0.3732, 11.57),
    r(0.738001, 0.3695, 11.5),
    r(0.74242, 0.3657, 11.44),
    r(0.746893, 0.362, 11.37),
    r(0.751419, 0.3583, 11.3),
    r(0.756001, 0.3546, 11.23),
    r(0.760639, 0.351, 11.16),
    r(0.765334, 0.3474, 11.1),
    r(0.770088, 0.3437, 11.03),
    r(0.774901, 0.3402, 10.96),
    r(0.779775, 0.3366, 10.89),
    r(0.78471, 0.3331, 10.82),
    r(0.789708, 0.3295, 10.76),
    r(0.79477, 0.326, 10.69),
    r(0.799898, 0.3226, 10.62),
    r(0.805092, 0.3191, 10.55),
    r(0.810354, 0.3157, 10.48),
    r(0.815685, 0.3123, 10.41),
    r(0.821087, 0.3089, 10.35),
    r(0.826561, 0.3055, 10.28),
    r(0.832109, 0.3021, 10.21),
    r(0.837731, 0.2988, 10.14),
    r(0.84343, 0.2955, 10.07),
    r(0.849207, 0.2922, 10.0),
    r(0.855063, 0.2889, 9.934),
    r(0.861001, 0.2857, 9.865),
    r(0.867022, 0.2824, 9.796),
    r(0.918401, 0.2551, 9.214),
    r(0.925255, 0.252, 9.145),
    r(0.932212, 0.249, 9.075),
    r(0.939274, 0.246, 9.005),
    r(0.946444, 0.243, 8.935),
    r(0.953724, 0.24, 8.865),
    r(0.961118, 0.2371, 8.795),
    r(0.968626, 0.2342, 8.725),
    r(0.976253, 0.2313, 8.655),
    r(0.984001, 0.2281, 8.581),
    r(0.991873, 0.225, 8.506),
    r(0.999872, 0.2218, 8.432),
    r(1.008, 0.2187, 8.358),
    r(1.01626, 0.2157, 8.283),
    r(1.02466, 0.2126, 8.208),
    r(1.0332, 0.2096, 8.134),
    r(1.04188, 0.2066, 8.059),
    r(1.05071, 0.2036, 7.984),
    r(1.05969, 0.2007, 7.909),
    r(1.06883, 0.1978, 7.834),
    r(1.07812, 0.1949, 7.759),
    r(1.08758, 0.1921, 7.683),
    r(1.09721, 0.1893, 7.608),
    r(1.107, 0.1865, 7.532),
    r(1.11697, 0.1837, 7.456),
    r(1.12713, 0.181, 7.38),
    r(1.13747, 0.1783, 7.304),
    r(1.148, 0.1757, 7.228),
    r(1.15873, 0.1731, 7.152),
    r(1.16966, 0.1705, 7.075),
    r(1.1808, 0.168, 6.999),
    r(1.19216, 0.1655, 6.922),
    r(1.20373, 0.163, 6.845),
    r(1.21553, 0.1606, 6.768),
    r(1.22757, 0.1582, 6.69),
    r(1.23984, 0.1559, 6.613),
    r(1.25237, 0.1536, 6.535),
    r(1.26514, 0.1514, 6.457),
    r(1.27819, 0.1493, 6.379),
    r(1.2915, 0.1471, 6.301),
    r(1.3051, 0.1451, 6.222),
    r(1.31898, 0.1431, 6.143),
    r(1.33316, 0.1412, 6.064),
    r(1.34765, 0.1393, 5.985),
    r(1.36246, 0.1375, 5.905),
    r(1.3776, 0.1358, 5.825),
    r(1.39308, 0.1342, 5.745),
    r(1.40891, 0.1326, 5.664),
    r(1.42511, 0.1312, 5.583),
    r(1.44168, 0.1298, 5.501),
    r(1.45864, 0.1286, 5.42),
    r(1.476, 0.1275, 5.338),
    r(1.49379, 0.1265, 5.255),
    r(1.512, 0.1256, 5.172),
    r(1.53067, 0.1249, 5.088),
    r(1.5498, 0.1244, 5.004),
    r(1.56942, 0.124, 4.92),
    r(1.58954, 0.1239, 4.834),
    r(1.61018, 0.1239, 4.749),
    r(1.63137, 0.1242, 4.662),
    r(1.65312, 0.1248, 4.575),
    r(1.67546, 0.1257, 4.487),
    r(1.69841, 0.1268, 4.398),
    r(1.722, 0.1284, 4.308),
    r(1.74626, 0.1304, 4.217),
    r(1.7712, 0.1328, 4.126),
    r(1.79687, 0.1358, 4.033),
    r(1.8233, 0.1394, 3.938),
    r(1.85051, 0.1436, 3.843),
    r(1.87855, 0.1487, 3.746),
    r(1.90745, 0.1546, 3.647),
    r(1.93725, 0.1616, 3.547),
    r(1.968, 0.1698, 3.444),
    r(1.99974, 0.1794, 3.34),
    r(2.03253, 0.1908, 3.232),
    r(2.0664, 0.2041, 3.122),
    r(2.10143, 0.2199, 3.009),
    r(2.13766, 0.2388, 2.891),
    r(2.17516, 0.2617, 2.769),
    r(2.214, 0.2899, 2.641),
    r(2.25426, 0.3256, 2.507),
    r(2.296, 0.3724, 2.364),
    r(2.33932, 0.4363, 2.213),
    r(2.38431, 0.5263, 2.058),
    r(2.43106, 0.6527, 1.908),
    r(2.47968, 0.8197, 1.787),
    r(2.53029, 1.011, 1.72),
    r(2.583, 1.193, 1.716),
    r(2.63796, 1.333, 1.758),
    r(2.69531, 1.422, 1.812),
    r(2.7552, 1.472, 1.855),
    r(2.81782, 1.505, 1.877),
    r(2.88335, 1.537, 1.887),
    r(2.952, 1.567, 1.898),
    r(3.024, 1.585, 1.911),
    r(3.0996, 1.588, 1.915),
    r(3.17908, 1.585, 1.904),
    r(3.26274, 1.588, 1.877),
    r(3.35092, 1.606, 1.846),
    r(3.444, 1.637, 1.825),
    r(3.54241, 1.671, 1.821),
    r(3.64659, 1.695, 1.835),
    r(3.7571, 1.701, 1.858),
    r(3.87451, 1.685, 1.881),
    r(3.99949, 1.649, 1.895),
    r(4.13281, 1.596, 1.888),
];
