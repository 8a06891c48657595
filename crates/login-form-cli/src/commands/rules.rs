use colored::Colorize;
use login_form::validation::ValidationSchema;
use login_form::FormConfig;

pub fn execute(config: &FormConfig) {
    let schema = ValidationSchema::from_settings(&config.validation);

    println!("{}", "Validation rules (first failure wins)".green().bold());
    for (field, rules) in schema.describe() {
        println!();
        println!("{}", field.cyan());
        for (position, rule) in rules.iter().enumerate() {
            println!("  {}. {}", position + 1, rule);
        }
    }
}
