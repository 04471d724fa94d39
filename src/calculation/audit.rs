//! Audit step builders shared by the calculation stages.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Records `amount = gross_salary x rate`.
pub(crate) fn rate_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    gross_salary: Decimal,
    rate: Decimal,
    amount: Decimal,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: single_field(rule_id, amount),
        reasoning: format!(
            "{} x {} = {}",
            gross_salary.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    }
}

/// Records `total = sum(parts)`.
pub(crate) fn sum_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    parts: &[(&str, Decimal)],
    total: Decimal,
) -> AuditStep {
    let input: serde_json::Map<String, serde_json::Value> = parts
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                serde_json::Value::String(value.normalize().to_string()),
            )
        })
        .collect();
    let terms: Vec<String> = parts
        .iter()
        .map(|(_, value)| value.normalize().to_string())
        .collect();

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::Value::Object(input),
        output: single_field(rule_id, total),
        reasoning: format!("{} = {}", terms.join(" + "), total.normalize()),
    }
}

fn single_field(name: &str, value: Decimal) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert(
        name.to_string(),
        serde_json::Value::String(value.normalize().to_string()),
    );
    serde_json::Value::Object(map)
}
