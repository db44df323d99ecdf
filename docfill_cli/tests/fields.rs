mod common;

use docfill_core::AnyEmptyResult;
use serde_json::Value;

#[test]
fn fields_lists_placeholders_with_default_labels() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("contract.txt");

	std::fs::write(
		&template,
		"Agreement between {{company_name}} and {{client_name}}, signed {{date}}.",
	)?;

	let mut cmd = common::docfill_cmd();
	let _ = cmd
		.arg("fields")
		.arg(&template)
		.assert()
		.success()
		.stdout(predicates::str::contains("company_name"))
		.stdout(predicates::str::contains("Имя клиента"))
		.stdout(predicates::str::contains("3 field(s) found"));

	Ok(())
}

#[test]
fn fields_reports_first_occurrence_order_once_per_name() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("dup.txt");

	std::fs::write(&template, "A {{b}} C {{a}} D {{b}}")?;

	let mut cmd = common::docfill_cmd();
	let output = cmd.arg("fields").arg(&template).assert().success();
	let stdout = String::from_utf8(output.get_output().stdout.clone())?;

	assert!(stdout.contains("2 field(s) found"));
	let b_position = stdout.find("b").ok_or("missing field b")?;
	let a_position = stdout.find("a").ok_or("missing field a")?;
	assert!(b_position < a_position);

	Ok(())
}

#[test]
fn fields_json_output_is_parseable() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("letter.txt");

	std::fs::write(&template, "Dear {{client_name}}, re: {{subject_line}}")?;

	let mut cmd = common::docfill_cmd();
	let output = cmd
		.arg("fields")
		.arg(&template)
		.arg("--format")
		.arg("json")
		.assert()
		.success();

	let parsed: Value = serde_json::from_slice(&output.get_output().stdout)?;
	let fields = parsed["fields"].as_array().ok_or("fields is not an array")?;

	assert_eq!(fields.len(), 2);
	assert_eq!(fields[0]["name"], "client_name");
	assert_eq!(fields[0]["label"], "Имя клиента");
	assert_eq!(fields[1]["name"], "subject_line");
	assert_eq!(fields[1]["label"], "subject line");

	Ok(())
}

#[test]
fn fields_fails_when_no_placeholders_found() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("plain.txt");

	std::fs::write(&template, "no placeholders here")?;

	let mut cmd = common::docfill_cmd();
	let _ = cmd
		.arg("fields")
		.arg(&template)
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("no placeholders"));

	Ok(())
}

#[test]
fn fields_fails_on_missing_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::docfill_cmd();
	let _ = cmd
		.arg("fields")
		.arg(tmp.path().join("does-not-exist.txt"))
		.assert()
		.failure()
		.code(2);

	Ok(())
}
