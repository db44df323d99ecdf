//! Default display labels for common placeholder names.

use std::collections::HashMap;

/// Resolve the default display label for a placeholder name.
///
/// The name is lowercased and looked up in a fixed dictionary of common
/// field names. On a miss the original (non-lowercased) name is returned
/// with underscores replaced by spaces, so `unknown_field_42` becomes
/// `unknown field 42`.
pub fn default_label(name: &str) -> String {
	match name.to_lowercase().as_str() {
		"name" => "Имя".to_string(),
		"surname" => "Фамилия".to_string(),
		"lastname" => "Отчество".to_string(),
		"company" => "Компания".to_string(),
		"company_name" => "Название компании".to_string(),
		"client" => "Клиент".to_string(),
		"client_name" => "Имя клиента".to_string(),
		"date" => "Дата".to_string(),
		"address" => "Адрес".to_string(),
		"phone" => "Телефон".to_string(),
		"email" => "Email".to_string(),
		"sum" => "Сумма".to_string(),
		"amount" => "Количество".to_string(),
		"price" => "Цена".to_string(),
		"position" => "Должность".to_string(),
		"passport" => "Паспорт".to_string(),
		"inn" => "ИНН".to_string(),
		_ => name.replace('_', " "),
	}
}

/// Seed a label map with the default label for each placeholder. Runs once
/// at template-creation time; user overrides are applied on top of this map
/// before the template is committed to the store.
pub fn default_labels(placeholders: &[String]) -> HashMap<String, String> {
	placeholders
		.iter()
		.map(|name| (name.clone(), default_label(name)))
		.collect()
}
