//! English word rendering of integers.
//!
//! Numbers are split into base-1000 groups. Each non-zero group is rendered
//! as hundreds, then teens or tens and units, then its scale word. Groups are
//! joined most significant first.

const UNITS: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 9] = [
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// u64::MAX has seven groups of three digits.
const SCALES: [&str; 7] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
];

/// Renders `n` as English words.
///
/// # Examples
///
/// ```
/// use roman_calc::words::to_words;
///
/// assert_eq!(to_words(0), "Zero");
/// assert_eq!(to_words(-21), "Negative Twenty One");
/// assert_eq!(to_words(1994), "One Thousand Nine Hundred Ninety Four");
/// ```
pub fn to_words(n: i64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let magnitude = magnitude_words(n.unsigned_abs());
    if n < 0 {
        format!("Negative {}", magnitude)
    } else {
        magnitude
    }
}

fn magnitude_words(mut n: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    let mut place = 0;

    while n > 0 {
        let chunk = (n % 1000) as usize;
        if chunk > 0 {
            let mut words = group_words(chunk);
            if place > 0 {
                words.push(SCALES[place]);
            }
            groups.push(words.join(" "));
        }
        n /= 1000;
        place += 1;
    }

    groups.reverse();
    groups.join(" ")
}

/// Words for a value in `1..=999`, without a scale word.
fn group_words(chunk: usize) -> Vec<&'static str> {
    let mut words = Vec::new();

    let hundreds = chunk / 100;
    if hundreds > 0 {
        words.push(UNITS[hundreds]);
        words.push("Hundred");
    }

    let remainder = chunk % 100;
    if (11..=19).contains(&remainder) {
        words.push(TEENS[remainder - 11]);
    } else {
        if remainder / 10 > 0 {
            words.push(TENS[remainder / 10]);
        }
        if remainder % 10 > 0 {
            words.push(UNITS[remainder % 10]);
        }
    }

    words
}
