/// Formatear precio para mostrar (siempre dos decimales)
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Parsear precio desde un input de formulario
pub fn parse_price(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parsear cantidad (entero no negativo) desde un input de formulario
pub fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(2.5), "$2.50");
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(0.999), "$1.00");
    }

    #[test]
    fn test_parse_price_rejects_negative_and_garbage() {
        assert_eq!(parse_price("2.50"), Some(2.5));
        assert_eq!(parse_price(" 3 "), Some(3.0));
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity("-3"), None);
        assert_eq!(parse_quantity("3.5"), None);
    }
}
