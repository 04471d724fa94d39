//! The downloadable salary-negotiation argument sheet.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_date_es, format_fixed, format_multiplier};
use crate::models::CalculationResult;

use super::Confirmation;

/// File name offered for the download.
pub const EXPORT_FILE_NAME: &str = "argumentario-subida-sueldo.txt";

/// MIME type of the download.
pub const EXPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Site credited in the footer of the sheet.
const GENERATED_AT: &str = "cuantolecuestoamijefe.com";

const RULE: &str = "═══════════════════════════════════════════════════════════════";

/// A ready-to-download text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSheet {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File body.
    pub content: String,
}

impl ArgumentSheet {
    /// Builds the sheet for a result, stamped with `date`.
    pub fn new(result: &CalculationResult, date: NaiveDate) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            content_type: EXPORT_CONTENT_TYPE.to_string(),
            content: build_argument_sheet(result, date),
        }
    }

    /// The message shown once the download has been triggered.
    pub fn confirmation() -> Confirmation {
        Confirmation {
            title: "¡Argumentario descargado!".to_string(),
            description: "Ahora ve y pide ese aumento con datos reales.".to_string(),
        }
    }
}

/// Renders the argument sheet text.
///
/// The sheet lists gross, estimated net and total employer cost, the
/// multiplier (`total / net`, two decimals), four negotiation arguments and
/// the generation date.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::derive;
/// use employer_cost_engine::export::build_argument_sheet;
/// use chrono::NaiveDate;
///
/// let result = derive("35000", "office").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let text = build_argument_sheet(&result, date);
///
/// assert!(text.contains("MULTIPLICADOR: x2.22"));
/// assert!(text.contains("Fecha: 18/10/2026"));
/// ```
pub fn build_argument_sheet(result: &CalculationResult, date: NaiveDate) -> String {
    let gross = result.gross_salary;
    let net = result.estimated_net_salary;
    let total = result.total_employer_cost;

    let multiplier = format_multiplier(total, net);
    let raise = gross * Decimal::new(1, 1);
    let raise_share = format_fixed(raise / total * Decimal::ONE_HUNDRED, 1);

    let gross = format_currency(gross);
    let net = format_currency(net);
    let total = format_currency(total);
    let raise = format_currency(raise);
    let date = format_date_es(date);

    let lines = [
        "╔══════════════════════════════════════════════════════════════╗".to_string(),
        "║     ARGUMENTARIO PARA TU SUBIDA DE SUELDO - 2026            ║".to_string(),
        "╚══════════════════════════════════════════════════════════════╝".to_string(),
        String::new(),
        "📊 DATOS DE TU COSTE REAL:".to_string(),
        String::new(),
        format!("Salario Bruto Anual: {gross}"),
        format!("Tu Salario Neto Estimado: {net}"),
        format!("Coste REAL para la empresa: {total}"),
        String::new(),
        format!("📈 MULTIPLICADOR: x{multiplier}"),
        format!("Por cada euro que tú ves, la empresa paga {multiplier}€"),
        String::new(),
        RULE.to_string(),
        String::new(),
        "🎯 ARGUMENTOS PARA LA NEGOCIACIÓN:".to_string(),
        String::new(),
        format!("1. \"Mi coste real para la empresa es {total},"),
        format!("   no los {gross} que aparecen en mi nómina.\""),
        String::new(),
        format!("2. \"Un aumento del 10% en mi bruto ({raise})"),
        format!("   representa solo un {raise_share}%"),
        "   de aumento en mi coste total.\"".to_string(),
        String::new(),
        "3. \"Considerando la inflación y el aumento de cotizaciones de 2026,".to_string(),
        "   mantener mi poder adquisitivo requiere una revisión salarial.\"".to_string(),
        String::new(),
        "4. \"Los costes ocultos (vacaciones, equipamiento, bajas) ya están".to_string(),
        "   presupuestados. Mi aumento no los incrementa proporcionalmente.\"".to_string(),
        String::new(),
        RULE.to_string(),
        String::new(),
        "💡 CONSEJO FINAL:".to_string(),
        "No negocies tu neto, negocia tu bruto.".to_string(),
        "El neto es lo que queda después del saqueo.".to_string(),
        String::new(),
        format!("Generado en: {GENERATED_AT}"),
        format!("Fecha: {date}"),
    ];

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
