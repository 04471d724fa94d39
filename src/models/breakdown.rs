//! The labelled cost breakdown shown under a calculation.
//!
//! Groups the result's individual costs into the employer social-security
//! block and the hidden-costs block, each item carrying its display label,
//! a short description and the formatted amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_currency;

use super::CalculationResult;

/// One line of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    /// Stable identifier of the item.
    pub id: String,
    /// Display label.
    pub label: String,
    /// One-line explanation shown under the label.
    pub description: String,
    /// The raw amount.
    pub amount: Decimal,
    /// The amount formatted as `es-ES` currency.
    pub display: String,
}

/// A titled group of cost items with its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostGroup {
    /// Group title.
    pub title: String,
    /// Qualifier shown next to the title.
    pub subtitle: String,
    /// The group total as computed by the calculator.
    pub total: Decimal,
    /// The total formatted as `es-ES` currency.
    pub total_display: String,
    /// Items in display order.
    pub items: Vec<CostItem>,
}

/// The two breakdown groups for a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Employer social-security contributions.
    pub social_security: CostGroup,
    /// Costs no payslip shows.
    pub hidden_costs: CostGroup,
}

fn item(id: &str, label: &str, description: &str, amount: Decimal) -> CostItem {
    CostItem {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        amount,
        display: format_currency(amount),
    }
}

fn group(title: &str, subtitle: &str, total: Decimal, items: Vec<CostItem>) -> CostGroup {
    CostGroup {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        total,
        total_display: format_currency(total),
        items,
    }
}

impl CostBreakdown {
    /// Builds the breakdown for a result.
    ///
    /// # Examples
    ///
    /// ```
    /// use employer_cost_engine::calculation::compute;
    /// use employer_cost_engine::models::{CostBreakdown, GrossSalary};
    /// use rust_decimal::Decimal;
    ///
    /// let salary = GrossSalary::new(Decimal::new(35000, 0)).unwrap();
    /// let result = compute(salary, Decimal::new(15, 3));
    /// let breakdown = CostBreakdown::from_result(&result);
    ///
    /// assert_eq!(breakdown.social_security.items.len(), 6);
    /// assert_eq!(breakdown.hidden_costs.items[1].display, "2500\u{a0}€");
    /// ```
    pub fn from_result(result: &CalculationResult) -> Self {
        let social_security = group(
            "Seguridad Social",
            "(Empresa)",
            result.total_social_security,
            vec![
                item(
                    "contingencias",
                    "Contingencias Comunes",
                    "Por si te pones malo o te jubilas (spoiler: tarde)",
                    result.contingencias_comunes,
                ),
                item(
                    "desempleo",
                    "Desempleo",
                    "El colchón para cuando te despidan",
                    result.desempleo,
                ),
                item(
                    "fogasa",
                    "FOGASA",
                    "Fondo de Garantía Salarial (por si tu empresa quiebra)",
                    result.fogasa,
                ),
                item(
                    "formacion",
                    "Formación Profesional",
                    "Para cursos que probablemente nunca harás",
                    result.formacion_profesional,
                ),
                item(
                    "meei",
                    "MEEI (Mecanismo de Equidad)",
                    "El nuevo impuesto 'solidario' de 2026",
                    result.meei,
                ),
                item(
                    "sectorial",
                    "Contingencias Profesionales",
                    "Riesgo del sector (accidentes laborales)",
                    result.sector_risk,
                ),
            ],
        );

        let hidden_costs = group(
            "Costes Ocultos",
            "(Los que nadie cuenta)",
            result.total_hidden_costs,
            vec![
                item(
                    "vacaciones",
                    "Vacaciones y Festivos",
                    "Te paga por estar en la playita (30 días + festivos)",
                    result.vacations_cost,
                ),
                item(
                    "oficina",
                    "Gastos Operativos",
                    "Tu silla rota, el PC lento, las licencias de software...",
                    result.operating_costs,
                ),
                item(
                    "absentismo",
                    "Provisión Bajas",
                    "Reserva por si te da la gripe o el lumbago",
                    result.absentism_cost,
                ),
            ],
        );

        Self {
            social_security,
            hidden_costs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;
    use crate::models::GrossSalary;

    fn breakdown_for(salary: i64) -> (CalculationResult, CostBreakdown) {
        let salary = GrossSalary::new(Decimal::new(salary, 0)).unwrap();
        let result = compute(salary, Decimal::new(15, 3));
        let breakdown = CostBreakdown::from_result(&result);
        (result, breakdown)
    }

    #[test]
    fn test_group_items_sum_to_group_totals() {
        let (result, breakdown) = breakdown_for(48_750);

        let ss_sum: Decimal = breakdown.social_security.items.iter().map(|i| i.amount).sum();
        assert_eq!(ss_sum, result.total_social_security);

        let hidden_sum: Decimal = breakdown.hidden_costs.items.iter().map(|i| i.amount).sum();
        assert_eq!(hidden_sum, result.total_hidden_costs);
    }

    #[test]
    fn test_item_order_and_ids() {
        let (_, breakdown) = breakdown_for(35_000);

        let ss_ids: Vec<&str> = breakdown
            .social_security
            .items
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(
            ss_ids,
            vec!["contingencias", "desempleo", "fogasa", "formacion", "meei", "sectorial"]
        );

        let hidden_ids: Vec<&str> = breakdown
            .hidden_costs
            .items
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(hidden_ids, vec!["vacaciones", "oficina", "absentismo"]);
    }

    #[test]
    fn test_displays_are_rounded_currency() {
        let (_, breakdown) = breakdown_for(35_000);

        // 262.5 rounds half away from zero
        assert_eq!(breakdown.social_security.items[4].display, "263\u{a0}€");
        assert_eq!(breakdown.social_security.total_display, "11.253\u{a0}€");
        assert_eq!(breakdown.hidden_costs.total_display, "7750\u{a0}€");
    }
}
