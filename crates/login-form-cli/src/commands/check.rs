use anyhow::Result;
use colored::Colorize;
use login_form::validation::Field;
use login_form::{FormConfig, LoginForm};
use serde_json::json;

use super::print_field_errors;

pub fn execute(config: FormConfig, email: String, password: String, json: bool) -> Result<bool> {
    let form = LoginForm::builder().config(config).build();
    form.set_email(email);
    form.set_password(password);

    let errors = form.validate_all();

    if json {
        let report = json!({
            "valid": errors.is_empty(),
            "errors": {
                "email": errors.message(Field::Email),
                "password": errors.message(Field::Password),
            },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if errors.is_empty() {
            println!("{}", "Credentials are valid".green().bold());
        } else {
            println!("{}", "Credentials are invalid".red().bold());
        }
        print_field_errors(&errors);
    }

    Ok(errors.is_empty())
}
