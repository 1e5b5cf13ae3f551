pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE: f64 = 11000.0; // m

// CS-VLA 337 limit manoeuvring load factors
pub const MIN_POSITIVE_LIMIT_LOAD_FACTOR: f64 = 3.8;
pub const MAX_NEGATIVE_LIMIT_LOAD_FACTOR: f64 = -1.5;

// CS-VLA 335 design airspeeds
pub const CRUISE_SPEED_COEFFICIENT: f64 = 2.4; // Vc >= 2.4 sqrt(W/S), W/S in Pa
pub const CRUISE_SPEED_VH_FRACTION: f64 = 0.9; // Vc need not exceed 0.9 Vh
pub const DIVE_SPEED_VC_MIN_FACTOR: f64 = 1.4; // Vd >= 1.4 Vc_min
pub const DIVE_SPEED_VC_FACTOR: f64 = 1.25; // Vd >= 1.25 Vc

// CS-VLA 333(c) / 341 gust envelope
pub const GUST_VELOCITY_AT_VC: f64 = 15.24; // m/s
pub const GUST_VELOCITY_AT_VD: f64 = 7.62; // m/s
pub const GUST_ALLEVIATION_NUMERATOR: f64 = 0.88;
pub const GUST_ALLEVIATION_OFFSET: f64 = 5.3;

// Envelope construction
pub const LOAD_FACTOR_SAMPLES: usize = 250;
pub const LANDMARK_TOLERANCE: f64 = 1e-2;

pub const DEFAULT_SPANWISE_STATIONS: usize = 1000;
