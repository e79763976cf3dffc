//! ECMWFのローカル・パラメーター表160
//!
//! 作成中枢がECMWF（98）で、パラメーター表の版番号が160のGRIB1メッセージで使用する。
use crate::tables::{ParameterEntry, ParameterTable, NUMBER_OF_PARAMETERS, UNDEFINED_DESCRIPTION};

/// ECMWFの作成中枢識別子
pub const ECMWF_CENTRE: u8 = 98;

/// パラメーター表の版番号
pub const TABLE_NUMBER: u8 = 160;

/// 割り当てられたパラメーターのエントリーを構築する。
///
/// 説明は、名前と単位を空白で連結した文字列となる。
macro_rules! parameter {
    ($mnemonic:literal, $name:literal, $units:literal) => {
        ParameterEntry {
            mnemonic: $mnemonic,
            description: concat!($name, " ", $units),
            name: $name,
            units: $units,
        }
    };
}

/// 割り当てられていないパラメーターのエントリーを構築する。
macro_rules! undefined {
    ($code:literal) => {
        ParameterEntry {
            mnemonic: concat!("var", $code),
            description: UNDEFINED_DESCRIPTION,
            name: UNDEFINED_DESCRIPTION,
            units: "",
        }
    };
}

/// ECMWFローカル・パラメーター表160のエントリー
///
/// 配列のインデックスがパラメーター番号を示す。
pub static ECMWF_160_ENTRIES: [ParameterEntry; NUMBER_OF_PARAMETERS] = [
    undefined!(0),
    undefined!(1),
    undefined!(2),
    undefined!(3),
    undefined!(4),
    undefined!(5),
    undefined!(6),
    undefined!(7),
    undefined!(8),
    undefined!(9),
    undefined!(10),
    undefined!(11),
    undefined!(12),
    undefined!(13),
    undefined!(14),
    undefined!(15),
    undefined!(16),
    undefined!(17),
    undefined!(18),
    undefined!(19),
    undefined!(20),
    undefined!(21),
    undefined!(22),
    undefined!(23),
    undefined!(24),
    undefined!(25),
    undefined!(26),
    undefined!(27),
    undefined!(28),
    undefined!(29),
    undefined!(30),
    undefined!(31),
    undefined!(32),
    undefined!(33),
    undefined!(34),
    undefined!(35),
    undefined!(36),
    undefined!(37),
    undefined!(38),
    undefined!(39),
    undefined!(40),
    undefined!(41),
    undefined!(42),
    undefined!(43),
    undefined!(44),
    undefined!(45),
    undefined!(46),
    undefined!(47),
    undefined!(48),
    undefined!(49),
    undefined!(50),
    undefined!(51),
    undefined!(52),
    undefined!(53),
    undefined!(54),
    undefined!(55),
    undefined!(56),
    undefined!(57),
    undefined!(58),
    undefined!(59),
    undefined!(60),
    undefined!(61),
    undefined!(62),
    undefined!(63),
    undefined!(64),
    undefined!(65),
    undefined!(66),
    undefined!(67),
    undefined!(68),
    undefined!(69),
    undefined!(70),
    undefined!(71),
    undefined!(72),
    undefined!(73),
    undefined!(74),
    undefined!(75),
    undefined!(76),
    undefined!(77),
    undefined!(78),
    undefined!(79),
    undefined!(80),
    undefined!(81),
    undefined!(82),
    undefined!(83),
    undefined!(84),
    undefined!(85),
    undefined!(86),
    undefined!(87),
    undefined!(88),
    undefined!(89),
    undefined!(90),
    undefined!(91),
    undefined!(92),
    undefined!(93),
    undefined!(94),
    undefined!(95),
    undefined!(96),
    undefined!(97),
    undefined!(98),
    undefined!(99),
    undefined!(100),
    undefined!(101),
    undefined!(102),
    undefined!(103),
    undefined!(104),
    undefined!(105),
    undefined!(106),
    undefined!(107),
    undefined!(108),
    undefined!(109),
    undefined!(110),
    undefined!(111),
    undefined!(112),
    undefined!(113),
    undefined!(114),
    undefined!(115),
    undefined!(116),
    undefined!(117),
    undefined!(118),
    undefined!(119),
    undefined!(120),
    undefined!(121),
    undefined!(122),
    undefined!(123),
    undefined!(124),
    undefined!(125),
    undefined!(126),
    parameter!("AT", "Atmospheric tide+", "-"),                // 127
    parameter!("BV", "Budget values+", "-"),                   // 128
    parameter!("Z", "Geopotential / orography", "m**2 s**-2"), // 129
    parameter!("T", "Temperature", "K"),                       // 130
    parameter!("U", "U-velocity", "m s**-1"),                  // 131
    parameter!("V", "V-velocity", "m s**-1"),                  // 132
    parameter!("Q", "Specific humidity", "kg kg**-1"),         // 133
    parameter!("SP", "Surface pressure", "Pa"),                // 134
    parameter!("W", "Vertical velocity", "Pa s**-1"),          // 135
    undefined!(136),
    parameter!("PWC", "Precipitable water content", "kg m**-2"),      // 137
    parameter!("VO", "Vorticity (relative)", "s**-1"),                // 138
    parameter!("STL1", "Soil temperature level 1", "K"),              // 139
    parameter!("SWL1", "Soil wetness level 1", "m"),                  // 140
    parameter!("SD", "Snow depth", "m (of water)"),                   // 141
    parameter!("LSP", "Large scale precipitation", "kg m**-2 s**-1"), // 142
    parameter!("CP", "Convective precipitation", "kg m**-2 s**-1"),   // 143
    parameter!("SF", "Snow fall", "kg m**-2 s**-1"),                  // 144
    parameter!("BLD", "Boundary layer dissipation", "W m**-2"),       // 145
    parameter!("SSHF", "Surface sensible heat flux", "W m**-2"),      // 146
    parameter!("SLHF", "Surface latent heat flux", "W m**-2"),        // 147
    undefined!(148),
    undefined!(149),
    undefined!(150),
    parameter!("MSL", "Mean sea level pressure", "Pa"), // 151
    parameter!("LNSP", "Ln surface pressure", "-"),     // 152
    undefined!(153),
    undefined!(154),
    parameter!("D", "Divergence", "s**-1"),                        // 155
    parameter!("GH", "Height (geopotential)", "m"),                // 156
    parameter!("R", "Relative humidity", "(0 - 1)"),               // 157
    parameter!("TSP", "Tendency of surface pressure", "Pa s**-1"), // 158
    undefined!(159),
    undefined!(160),
    undefined!(161),
    undefined!(162),
    undefined!(163),
    parameter!("TCC", "Total cloud cover", "(0 - 1)"),         // 164
    parameter!("10U", "10 metre u wind component", "m s**-1"), // 165
    parameter!("10V", "10 metre v wind component", "m s**-1"), // 166
    parameter!("2T", "2 metre temperature", "K"),              // 167
    parameter!("2D", "2 metre dewpoint temperature", "K"),     // 168
    undefined!(169),
    parameter!("STL2", "Soil temperature level 2", "K"), // 170
    parameter!("SWL2", "Soil wetness level 2", "m"),     // 171
    parameter!("LSM", "Land/sea mask", "(0 - 1)"),       // 172
    parameter!("SR", "Surface roughness", "m"),          // 173
    parameter!("AL", "Albedo", "(0 - 1)"),               // 174
    undefined!(175),
    parameter!("SSR", "Surface solar radiation", "W m**-2"),           // 176
    parameter!("STR", "Surface thermal radiation", "W m**-2"),         // 177
    parameter!("TSR", "Top solar radiation", "W m**-2"),               // 178
    parameter!("TTR", "Top thermal radiation", "W m**-2"),             // 179
    parameter!("EWSS", "East/west surface stress", "N m**-2 s**-1"),   // 180
    parameter!("NSSS", "North/south surface stress", "N m**-2 s**-1"), // 181
    parameter!("E", "Evaporation", "kg m**-2 s**-1"),                  // 182
    parameter!("STL3", "Soil temperature level 3", "K"),               // 183
    parameter!("SWL3", "Soil wetness level 3", "m"),                   // 184
    parameter!("CCC", "Convective cloud cover", "(0 - 1)"),            // 185
    parameter!("LCC", "Low cloud cover", "(0 - 1)"),                   // 186
    parameter!("MCC", "Medium cloud cover", "(0 - 1)"),                // 187
    parameter!("HCC", "High cloud cover", "(0 - 1)"),                  // 188
    undefined!(189),
    parameter!("EWOV", "EW component of sub-grid scale orographic variance", "m**2"), // 190
    parameter!("NSOV", "NS component of sub-grid scale orographic variance", "m**2"), // 191
    parameter!("NWOV", "NWSE component sub-grid scale orographic variance", "m**2"),  // 192
    parameter!("NEOV", "NESW component sub-grid scale orographic variance", "m**2"),  // 193
    undefined!(194),
    parameter!("LGWS", "Latitudinal component of gravity wave stress", "N m**-2 s"), // 195
    parameter!("MGWS", "Meridional component of gravity wave stress", "N m**-2 s"),  // 196
    parameter!("GWD", "Gravity wave dissipation", "W m**-2 s"),                      // 197
    parameter!("SRC", "Skin reservoir content", "m (of water)"),                     // 198
    parameter!("VEG", "Percentage of vegetation", "%"),                              // 199
    parameter!("VSO", "Variance of sub-grid scale orography", "m**2"),               // 200
    parameter!("MX2T", "Max temp.2m during averaging time", "K"),                    // 201
    parameter!("MN2T", "Min temp.2m during averaging time", "K"),                    // 202
    undefined!(203),
    parameter!("PAW", "Precip. analysis weights", "-"),                // 204
    parameter!("RO", "Runoff", "kg m**-2 s**-1"),                      // 205
    parameter!("ZZ", "St.Dev. of Geopotential", "m**2 s**-2"),         // 206
    parameter!("TZ", "Covar Temp & Geopotential", "K m**2 s**-2"),     // 207
    parameter!("TT", "St.Dev. of Temperature", "K"),                   // 208
    parameter!("QZ", "Covar Sp.Hum. & Geopotential", "m**2 s**-2"),    // 209
    parameter!("QT", "Covar Sp.Hum & Temp.", "K"),                     // 210
    parameter!("QQ", "St.Dev. of Specific humidity", "(0 - 1)"),       // 211
    parameter!("UZ", "Covar U-comp. & Geopotential", "m**3 s**-3"),    // 212
    parameter!("UT", "Covar U-comp. & Temp.", "K m s**-1"),            // 213
    parameter!("UQ", "Covar U-comp. & Sp.Hum.", "m s**-1"),            // 214
    parameter!("UU", "St.Dev. of U-velocity", "m s**-1"),              // 215
    parameter!("VZ", "Covar V-comp. & Geopotential", "m**3 s**-3"),    // 216
    parameter!("VT", "Covar V-comp. & Temp.", "K m s**-1"),            // 217
    parameter!("VQ", "Covar V-comp. & Sp.Hum.", "m s**-1"),            // 218
    parameter!("VU", "Covar V-comp. & U-comp", "m**2 s**-2"),          // 219
    parameter!("VV", "St.Dev. of V-comp", "m s**-1"),                  // 220
    parameter!("WZ", "Covar W-comp. & Geopotential", "Pa m**2 s**-3"), // 221
    parameter!("WT", "Covar W-comp. & Temp.", "K Pa s**-1"),           // 222
    parameter!("WQ", "Covar W-comp. & Sp.Hum.", "Pa s**-1"),           // 223
    parameter!("WU", "Covar W-comp. & U-comp.", "Pa m s**-2"),         // 224
    parameter!("WV", "Covar W-comp. & V-comp.", "Pa m s**-2"),         // 225
    parameter!("WW", "St.Dev. of Vertical velocity", "Pa s**-1"),      // 226
    undefined!(227),
    parameter!("TP", "Total precipitation", "m"),                                    // 228
    parameter!("IEWS", "Instantaneous X surface stress", "N m**-2"),                 // 229
    parameter!("INSS", "Instantaneous Y surface stress", "N m**-2"),                 // 230
    parameter!("ISHF", "Instantaneous surface Heat Flux", "W m**-2"),                // 231
    parameter!("IE", "Instantaneous Moisture Flux (evaporation)", "kg m**-2 s**-1"), // 232
    parameter!("ASQ", "Apparent Surface Humidity", "kg kg**-1"),                     // 233
    parameter!("LSRH", "Logarithm of surface roughness length for heat.", "-"),      // 234
    parameter!("SKT", "Skin Temperature", "K"),                                      // 235
    parameter!("STL4", "Soil temperature level 4", "K"),                             // 236
    parameter!("SWL4", "Soil wetness level 4", "m"),                                 // 237
    parameter!("TSN", "Temperature of snow layer", "K"),                             // 238
    parameter!("CSF", "Convective snow-fall", "kg m**-2 s**-1"),                     // 239
    parameter!("LSF", "Large scale snow-fall", "kg m**-2 s**-1"),                    // 240
    parameter!("CLWC", "Cloud liquid water content", "kg kg**-1"),                   // 241
    parameter!("CC", "Cloud cover (at given level)", "(0 - 1)"),                     // 242
    parameter!("FAL", "Forecast albedo", "-"),                                       // 243
    parameter!("FSR", "Forecast surface roughness", "m"),                            // 244
    parameter!("FLSR", "Forecast logarithm of surface roughness for heat.", "-"),    // 245
    parameter!("10WS", "10m. Windspeed (irresp of dir.)", "m s**-1"),                // 246
    parameter!("MOFL", "Momentum flux (irresp of dir.)", "N m**-2"),                 // 247
    parameter!("HSD", "Heaviside (beta) function", "(0 - 1)"),                       // 248
    undefined!(249),
    undefined!(250),
    undefined!(251),
    undefined!(252),
    undefined!(253),
    undefined!(254),
    undefined!(255),
];

static ECMWF_TABLE_160: ParameterTable = ParameterTable::new(
    "ECMWF local table 160",
    ECMWF_CENTRE,
    TABLE_NUMBER,
    &ECMWF_160_ENTRIES,
);

/// ECMWFローカル・パラメーター表160を返す。
pub fn ecmwf_table_160() -> &'static ParameterTable {
    &ECMWF_TABLE_160
}
