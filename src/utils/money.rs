// Utilitários para manipulação de valores monetários

/// Converte um valor em reais para centavos, arredondando para o centavo mais próximo.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn format_currency(amount: f64) -> String {
    format!("R${:.2}", amount)
}
