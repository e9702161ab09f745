// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emoji-presentation scalar classification.
//!
//! A scalar has *emoji presentation* when it renders as a color glyph by
//! default (the `Emoji_Presentation` property of UTS #51). Pillbox accepts an
//! emoji attachment only when every scalar of its single grapheme is in this
//! set; text-presentation symbols like `©` are rejected rather than rendered
//! as monochrome glyphs.

/// Inclusive scalar ranges with `Emoji_Presentation=Yes`, sorted by start.
///
/// Derived from the UTS #51 `emoji-data.txt` table.
const EMOJI_PRESENTATION_RANGES: &[(u32, u32)] = &[
    (0x231A, 0x231B),   // watch .. hourglass
    (0x23E9, 0x23EC),   // media transport arrows
    (0x23F0, 0x23F0),   // alarm clock
    (0x23F3, 0x23F3),   // hourglass with flowing sand
    (0x25FD, 0x25FE),   // small squares
    (0x2614, 0x2615),   // umbrella with rain drops .. hot beverage
    (0x2648, 0x2653),   // zodiac
    (0x267F, 0x267F),   // wheelchair symbol
    (0x2693, 0x2693),   // anchor
    (0x26A1, 0x26A1),   // high voltage
    (0x26AA, 0x26AB),   // circles
    (0x26BD, 0x26BE),   // soccer ball .. baseball
    (0x26C4, 0x26C5),   // snowman .. sun behind cloud
    (0x26CE, 0x26CE),   // ophiuchus
    (0x26D4, 0x26D4),   // no entry
    (0x26EA, 0x26EA),   // church
    (0x26F2, 0x26F3),   // fountain .. flag in hole
    (0x26F5, 0x26F5),   // sailboat
    (0x26FA, 0x26FA),   // tent
    (0x26FD, 0x26FD),   // fuel pump
    (0x2705, 0x2705),   // check mark button
    (0x270A, 0x270B),   // raised fist .. raised hand
    (0x2728, 0x2728),   // sparkles
    (0x274C, 0x274C),   // cross mark
    (0x274E, 0x274E),   // cross mark button
    (0x2753, 0x2755),   // question/exclamation marks
    (0x2757, 0x2757),   // exclamation mark
    (0x2795, 0x2797),   // heavy arithmetic signs
    (0x27B0, 0x27B0),   // curly loop
    (0x27BF, 0x27BF),   // double curly loop
    (0x2B1B, 0x2B1C),   // large squares
    (0x2B50, 0x2B50),   // star
    (0x2B55, 0x2B55),   // hollow red circle
    (0x1F004, 0x1F004), // mahjong red dragon
    (0x1F0CF, 0x1F0CF), // joker
    (0x1F18E, 0x1F18E), // AB button
    (0x1F191, 0x1F19A), // squared latin letters
    (0x1F1E6, 0x1F1FF), // regional indicators
    (0x1F201, 0x1F201), // squared katakana koko
    (0x1F21A, 0x1F21A), // squared CJK free
    (0x1F22F, 0x1F22F), // squared CJK reserved
    (0x1F232, 0x1F236), // squared CJK ideographs
    (0x1F238, 0x1F23A), // squared CJK ideographs
    (0x1F250, 0x1F251), // circled ideographs
    (0x1F300, 0x1F320), // weather and landscape
    (0x1F32D, 0x1F335), // food and plants
    (0x1F337, 0x1F37C), // plants, food, drink
    (0x1F37E, 0x1F393), // celebration
    (0x1F3A0, 0x1F3CA), // activities
    (0x1F3CF, 0x1F3D3), // sport equipment
    (0x1F3E0, 0x1F3F0), // buildings
    (0x1F3F4, 0x1F3F4), // waving black flag
    (0x1F3F8, 0x1F43E), // sport, objects, animals
    (0x1F440, 0x1F440), // eyes
    (0x1F442, 0x1F4FC), // body parts, people, objects
    (0x1F4FF, 0x1F53D), // objects and symbols
    (0x1F54B, 0x1F54E), // religious buildings and symbols
    (0x1F550, 0x1F567), // clock faces
    (0x1F57A, 0x1F57A), // man dancing
    (0x1F595, 0x1F596), // hand gestures
    (0x1F5A4, 0x1F5A4), // black heart
    (0x1F5FB, 0x1F64F), // places, faces, people
    (0x1F680, 0x1F6C5), // transport and map symbols
    (0x1F6CC, 0x1F6CC), // person in bed
    (0x1F6D0, 0x1F6D2), // place of worship .. shopping cart
    (0x1F6D5, 0x1F6D7), // hindu temple .. elevator
    (0x1F6DC, 0x1F6DF), // wireless .. ring buoy
    (0x1F6EB, 0x1F6EC), // airplane departure/arrival
    (0x1F6F4, 0x1F6FC), // scooter .. roller skate
    (0x1F7E0, 0x1F7EB), // colored circles and squares
    (0x1F7F0, 0x1F7F0), // heavy equals sign
    (0x1F90C, 0x1F93A), // faces and gestures
    (0x1F93C, 0x1F945), // sports
    (0x1F947, 0x1F9FF), // medals, people, objects
    (0x1FA70, 0x1FA7C), // objects
    (0x1FA80, 0x1FA89), // toys and tools
    (0x1FA8F, 0x1FAC6), // animals, people, objects
    (0x1FACE, 0x1FADC), // animals and food
    (0x1FADF, 0x1FAE9), // faces and gestures
    (0x1FAF0, 0x1FAF8), // hand gestures
];

/// Returns `true` if `c` has emoji presentation by default.
#[must_use]
pub fn is_emoji_presentation(c: char) -> bool {
    let code = c as u32;
    EMOJI_PRESENTATION_RANGES
        .binary_search_by(|&(start, end)| {
            if code < start {
                core::cmp::Ordering::Greater
            } else if code > end {
                core::cmp::Ordering::Less
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}
