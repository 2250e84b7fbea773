//! Форматирование чисел с фиксированным числом знаков

/// Дробных знаков достаточно для точной записи любого f64
const EXACT_FRACTION_DIGITS: usize = 1080;

/// Округляет до `decimals` знаков после точки, половину от нуля.
///
/// `format!("{:.N}")` при точной половине округляет к чётному, браузер
/// (`Number::toFixed`) вверх. Здесь поведение браузера: 0.53125 → "0.5313".
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let nearest = format!("{:.*}", decimals, value);

    // полное десятичное разложение f64 короче EXACT_FRACTION_DIGITS знаков
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let Some((integer, fraction)) = exact.split_once('.') else {
        return nearest;
    };
    let (kept, rest) = fraction.split_at(decimals.min(fraction.len()));
    let is_exact_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_exact_tie {
        return nearest;
    }

    if kept.is_empty() {
        increment_last_digit(integer)
    } else {
        increment_last_digit(&format!("{}.{}", integer, kept))
    }
}

/// Прибавляет единицу к последнему разряду модуля десятичной строки
fn increment_last_digit(number: &str) -> String {
    let mut digits: Vec<char> = number.chars().collect();
    let mut carry = true;

    for c in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        match c.to_digit(10) {
            Some(9) => *c = '0',
            Some(d) => {
                *c = char::from_digit(d + 1, 10).unwrap_or('0');
                carry = false;
            }
            // точка и знак пропускаются
            None => {}
        }
    }

    let mut result: String = digits.into_iter().collect();
    if carry {
        let sign_len = usize::from(result.starts_with('-'));
        result.insert(sign_len, '1');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(format_fixed(0.53125, 4), "0.5313");
        assert_eq!(format_fixed(53.125, 2), "53.13");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_ties_with_odd_digit_unchanged() {
        assert_eq!(format_fixed(0.375, 2), "0.38");
        assert_eq!(format_fixed(1.5, 0), "2");
    }

    #[test]
    fn test_tie_carries_into_integer_part() {
        assert_eq!(format_fixed(99.875, 2), "99.88");
        assert_eq!(format_fixed(0.9375, 3), "0.938");
        assert_eq!(format_fixed(9.5, 0), "10");
        assert_eq!(format_fixed(99.5, 0), "100");
        assert_eq!(format_fixed(0.96875, 4), "0.9688");
    }

    #[test]
    fn test_inexact_values_use_nearest() {
        // 1.005 и 99.995 хранятся чуть меньше половины
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(99.995, 2), "99.99");
        assert_eq!(format_fixed(0.8734, 4), "0.8734");
        assert_eq!(format_fixed(87.34, 2), "87.34");
        assert_eq!(format_fixed(15.0, 2), "15.00");
    }

    #[test]
    fn test_negative_tie_rounds_away_from_zero() {
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
    }
}
