//! Batting resources remaining, 20-over reference table.
//!
//! Row = whole overs remaining (1..=20), column = wickets lost (0..=9).
//! Values are percentages of a full innings, one decimal place.
//! Shorter formats index this table directly by overs remaining; longer
//! formats rescale onto it. That reuse is an approximation, not a
//! published table for those formats.

pub const MAX_OVERS: u32 = 20;
pub const WICKET_COLUMNS: usize = 10;

#[rustfmt::skip]
const TABLE: [[f64; WICKET_COLUMNS]; MAX_OVERS as usize] = [
    //  0      1      2      3      4      5      6      7      8      9
    [  7.2,   7.1,   7.1,   7.0,   6.9,   6.8,   6.6,   6.3,   5.6,   3.9], //  1
    [ 14.0,  13.8,  13.6,  13.4,  13.1,  12.7,  12.1,  11.1,   9.1,   5.5], //  2
    [ 20.4,  20.1,  19.8,  19.3,  18.7,  18.0,  16.9,  15.2,  11.7,   6.6], //  3
    [ 26.4,  26.0,  25.5,  24.8,  24.0,  22.9,  21.3,  18.7,  13.7,   7.2], //  4
    [ 32.6,  32.0,  31.3,  30.4,  29.2,  27.8,  25.5,  22.0,  15.5,   7.8], //  5
    [ 38.5,  38.3,  37.2,  35.9,  34.3,  32.3,  29.3,  24.8,  16.8,   8.0], //  6
    [ 43.1,  42.1,  41.1,  39.7,  38.0,  35.6,  32.2,  26.8,  17.6,   8.1], //  7
    [ 48.1,  47.8,  46.6,  45.0,  42.8,  39.9,  35.6,  28.9,  18.4,   8.2], //  8
    [ 53.0,  51.8,  50.4,  48.6,  46.1,  42.8,  37.8,  30.2,  18.9,   8.2], //  9
    [ 57.9,  56.5,  54.8,  52.8,  50.1,  46.1,  40.3,  31.6,  19.4,   8.3], // 10
    [ 62.3,  60.8,  59.1,  56.7,  53.7,  49.1,  42.4,  32.7,  19.8,   8.3], // 11
    [ 66.8,  65.2,  63.3,  60.6,  57.1,  51.9,  44.3,  33.6,  20.1,   8.3], // 12
    [ 71.2,  69.5,  67.3,  64.5,  60.4,  54.4,  46.1,  34.5,  20.3,   8.3], // 13
    [ 75.6,  73.7,  71.5,  68.0,  63.4,  56.9,  47.7,  35.2,  20.5,   8.3], // 14
    [ 79.9,  77.9,  75.2,  71.4,  66.4,  59.2,  49.1,  35.7,  20.7,   8.3], // 15
    [ 84.1,  81.8,  79.0,  74.7,  69.1,  61.3,  50.4,  36.2,  20.8,   8.3], // 16
    [ 88.2,  85.7,  82.5,  77.9,  71.7,  63.3,  51.6,  36.6,  21.0,   8.3], // 17
    [ 92.2,  89.6,  85.9,  81.1,  74.2,  65.0,  52.7,  36.9,  21.1,   8.3], // 18
    [ 96.1,  93.3,  89.2,  83.9,  76.7,  66.6,  53.5,  37.3,  21.2,   8.3], // 19
    [100.0,  96.8,  92.6,  86.7,  78.8,  68.2,  54.4,  37.5,  21.3,   8.3], // 20
];

/// Table entry for whole overs remaining and wickets lost.
/// None outside 1..=20 overs or 0..=9 wickets.
pub fn lookup(overs_remaining: u32, wickets_lost: u32) -> Option<f64> {
    if overs_remaining == 0 {
        return None;
    }
    TABLE
        .get(overs_remaining as usize - 1)
        .and_then(|row| row.get(wickets_lost as usize))
        .copied()
}
