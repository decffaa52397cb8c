//! Skill-gap analysis against a fixed table of role requirements.

use std::collections::BTreeSet;

use crate::error::{CatalystError, CatalystResult};
use crate::stats::{percent, Tier};

pub const DEFAULT_ROLE: &str = "full stack developer";

pub struct RoleRequirements {
    pub must_have: &'static [&'static str],
    pub good_to_have: &'static [&'static str],
    pub bonus: &'static [&'static str],
}

impl RoleRequirements {
    fn sections(&self) -> [(&'static str, &'static [&'static str]); 3] {
        [
            ("Must Have (Critical)", self.must_have),
            ("Good to Have (Competitive Edge)", self.good_to_have),
            ("Bonus (Stand Out)", self.bonus),
        ]
    }

    fn total(&self) -> usize {
        self.must_have.len() + self.good_to_have.len() + self.bonus.len()
    }
}

/// Requirements for `role` (lower-cased), falling back to a generic
/// software-engineering profile.
pub fn requirements_for(role: &str) -> &'static RoleRequirements {
    match role {
        "frontend developer" => &RoleRequirements {
            must_have: &["HTML", "CSS", "JavaScript", "React or Vue or Angular", "Git"],
            good_to_have: &["TypeScript", "Testing (Jest/Cypress)", "Webpack/Vite", "REST APIs", "Responsive Design"],
            bonus: &["Next.js/Nuxt.js", "GraphQL", "CI/CD", "Performance Optimization", "Accessibility (a11y)"],
        },
        "backend developer" => &RoleRequirements {
            must_have: &["Python or Java or Node.js", "SQL", "REST APIs", "Git", "Database Design"],
            good_to_have: &["Docker", "Cloud (AWS/GCP/Azure)", "Redis/Caching", "Testing", "Message Queues"],
            bonus: &["Kubernetes", "Microservices", "GraphQL", "CI/CD", "System Design"],
        },
        "full stack developer" => &RoleRequirements {
            must_have: &["HTML/CSS/JavaScript", "Backend Language (Python/Java/Node.js)", "SQL", "REST APIs", "Git"],
            good_to_have: &["React or Vue", "Docker", "Cloud Basics", "Testing", "Authentication/Security"],
            bonus: &["TypeScript", "CI/CD", "Kubernetes", "System Design", "DevOps"],
        },
        "data scientist" => &RoleRequirements {
            must_have: &["Python", "SQL", "Statistics", "Pandas/NumPy", "Machine Learning Basics"],
            good_to_have: &["Scikit-learn", "Data Visualization", "Deep Learning", "Feature Engineering", "Git"],
            bonus: &["MLOps", "Spark/Big Data", "Cloud ML Services", "A/B Testing", "NLP/CV"],
        },
        "devops engineer" => &RoleRequirements {
            must_have: &["Linux", "Docker", "CI/CD", "Cloud (AWS/GCP/Azure)", "Scripting (Bash/Python)"],
            good_to_have: &["Kubernetes", "Terraform/IaC", "Monitoring (Prometheus/Grafana)", "Networking", "Git"],
            bonus: &["Service Mesh", "Security (DevSecOps)", "Cost Optimization", "Multi-cloud", "GitOps"],
        },
        "mobile developer" => &RoleRequirements {
            must_have: &["Kotlin/Swift or React Native/Flutter", "REST APIs", "Git", "UI/UX Basics", "State Management"],
            good_to_have: &["Testing", "CI/CD", "Push Notifications", "Offline Storage", "App Store Deployment"],
            bonus: &["Performance Profiling", "Native Modules", "GraphQL", "Accessibility", "Analytics"],
        },
        _ => &RoleRequirements {
            must_have: &["Programming Language", "Data Structures & Algorithms", "Git", "Problem Solving", "Communication"],
            good_to_have: &["SQL", "REST APIs", "Testing", "Cloud Basics", "Docker"],
            bonus: &["System Design", "CI/CD", "Open Source Contributions", "Technical Writing", "Leadership"],
        },
    }
}

/// A requirement is met when any of its `" or "` alternatives equals a
/// user skill or appears inside one.
pub fn has_skill(requirement: &str, user_skills: &BTreeSet<String>) -> bool {
    requirement
        .split(" or ")
        .map(|v| v.trim().to_lowercase())
        .any(|variant| {
            user_skills.contains(&variant) || user_skills.iter().any(|s| s.contains(&variant))
        })
}

/// Parse a comma-separated skill list into a lower-cased set.
pub fn parse_skills(current_skills: &str) -> BTreeSet<String> {
    current_skills
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Percentage of `reqs` matched by `user_skills`.
pub fn readiness(reqs: &RoleRequirements, user_skills: &BTreeSet<String>) -> i64 {
    let matched = reqs
        .sections()
        .iter()
        .flat_map(|(_, skills)| skills.iter())
        .filter(|skill| has_skill(skill, user_skills))
        .count();
    percent(matched as f64, reqs.total() as f64)
}

pub fn analyze_skill_gap(current_skills: &str, target_role: &str) -> CatalystResult<String> {
    if current_skills.trim().is_empty() {
        return Err(CatalystError::Invalid(
            "Please provide your current skills as a comma-separated list (e.g., 'Python, SQL, Git')."
                .into(),
        ));
    }
    let role = match target_role.trim() {
        "" => DEFAULT_ROLE.to_string(),
        r => r.to_lowercase(),
    };

    let user_skills = parse_skills(current_skills);
    if user_skills.is_empty() {
        return Err(CatalystError::Invalid(
            "No valid skills found. Please provide skills separated by commas.".into(),
        ));
    }

    let reqs = requirements_for(&role);
    let mut lines = vec![
        format!("Skill Gap Analysis for: {}\n", title_case(&role)),
        format!(
            "Your skills: {}\n",
            user_skills.iter().cloned().collect::<Vec<_>>().join(", ")
        ),
    ];

    for (label, skills) in reqs.sections() {
        lines.push(format!("**{label}:**"));
        for skill in skills {
            let icon = if has_skill(skill, &user_skills) {
                "[HAVE]"
            } else {
                "[NEED]"
            };
            lines.push(format!("  {icon} {skill}"));
        }
        lines.push(String::new());
    }

    let score = readiness(reqs, &user_skills);
    lines.push(format!("**Readiness Score: {score}%**"));
    lines.push(
        match Tier::of(score) {
            Tier::Strong => "You're strongly qualified! Focus on bonus skills to stand out.",
            Tier::Good => "Good foundation! Fill the 'Must Have' gaps first, then 'Good to Have'.",
            Tier::Fair => {
                "Decent start. Prioritize the 'Must Have' skills - these are non-negotiable."
            }
            Tier::Low => "Early stage - focus 100% on 'Must Have' skills before anything else.",
        }
        .to_string(),
    );
    lines.push(
        "\n**Action Plan:**\n\
         \x20 1. Fill all [NEED] items in 'Must Have' first\n\
         \x20 2. Build a project that demonstrates 3+ skills together\n\
         \x20 3. Move to 'Good to Have' skills to beat other candidates\n\
         \x20 4. Contribute to open source to show real-world experience"
            .to_string(),
    );

    Ok(lines.join("\n"))
}

/// Upper-case each letter that follows a non-letter, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_letter = false;
    for c in s.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}
