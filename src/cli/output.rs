use anyhow::Result;
use msel::SelectionOutcome;
use serde_json::json;

const FALLBACK_FIELD: &str = "selection";

fn field_name(outcome: &SelectionOutcome) -> &str {
	outcome.field_name.as_deref().unwrap_or(FALLBACK_FIELD)
}

/// Form-style line, `field=value1,value2`.
pub(crate) fn format_plain(outcome: &SelectionOutcome) -> String {
	if !outcome.accepted {
		return "Selection cancelled".to_string();
	}
	format!("{}={}", field_name(outcome), outcome.value)
}

pub(crate) fn print_plain(outcome: &SelectionOutcome) {
	println!("{}", format_plain(outcome));
}

pub(crate) fn format_outcome_json(outcome: &SelectionOutcome) -> Result<String> {
	let payload = json!({
		"field": field_name(outcome),
		"accepted": outcome.accepted,
		"value": outcome.value,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &SelectionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use msel::core::OptionItem;
	use serde_json::Value;

	use super::*;

	fn outcome(accepted: bool) -> SelectionOutcome {
		SelectionOutcome {
			accepted,
			field_name: Some("department".into()),
			value: "it,sales".into(),
			selection: vec![
				OptionItem::new("IT", "it"),
				OptionItem::new("Sales", "sales"),
			],
		}
	}

	#[test]
	fn plain_format_is_a_form_line() {
		assert_eq!(format_plain(&outcome(true)), "department=it,sales");
		assert_eq!(format_plain(&outcome(false)), "Selection cancelled");

		let unnamed = SelectionOutcome {
			field_name: None,
			value: String::new(),
			selection: Vec::new(),
			..outcome(true)
		};
		assert_eq!(format_plain(&unnamed), "selection=");
	}

	#[test]
	fn json_format_lists_selected_options() {
		let json = format_outcome_json(&outcome(true)).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["field"], "department");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["value"], "it,sales");
		assert_eq!(value["selection"][1]["name"], "Sales");
		assert_eq!(value["selection"][1]["value"], "sales");
	}
}
