use crate::config::Config;

pub const TITLE: &str = "LeninKart Frontend Fixer";
pub const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Follow-up commands for the operator. They are printed, never run.
pub fn next_steps(config: &Config, tag: i64) -> Vec<String> {
    let image = &config.image;
    vec![
        "NEXT STEPS:".to_string(),
        String::new(),
        "1. Build new Docker image:".to_string(),
        format!("   docker build -t {image}:{tag} ."),
        String::new(),
        "2. Push to Docker Hub:".to_string(),
        format!("   docker push {image}:{tag}"),
        String::new(),
        format!("3. Update infra repo {}:", config.values_file),
        format!("   Change image.tag to '{tag}'"),
        String::new(),
        "4. Commit frontend changes:".to_string(),
        "   git add .".to_string(),
        format!("   git commit -m '{}'", config.commit_message),
        format!("   git push origin {}", config.branch),
    ]
}
