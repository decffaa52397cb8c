use tracing::info;

use catalyst_core::{
    next_id, Application, ApplicationStatus, CatalystError, CatalystResult, Clock, Collection,
    RecordStore,
};

use crate::{id_arg, optional_text, required_text};

/// Job application tracker over `applications.json`.
pub struct ApplicationTracker<'a, S> {
    store: &'a S,
    clock: &'a dyn Clock,
}

impl<'a, S: RecordStore> ApplicationTracker<'a, S> {
    pub fn new(store: &'a S, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn add(
        &self,
        company: &str,
        role: &str,
        status: &str,
        notes: &str,
    ) -> CatalystResult<String> {
        let company = required_text(company, "Company name is required.")?;
        let role = required_text(role, "Role/position is required.")?;
        let status = match status.trim() {
            "" => ApplicationStatus::Applied,
            s => s.parse()?,
        };

        let mut apps: Vec<Application> = self.store.load(Collection::Applications);
        let app = Application {
            id: next_id(&apps),
            company: company.to_string(),
            role: role.to_string(),
            status,
            notes: optional_text(notes),
            applied_date: self.clock.date_string(),
            last_updated: self.clock.stamp(),
        };
        let reply = format!(
            "Application #{} added!\n  Company: {}\n  Role: {}\n  Status: {}\n  Date: {}",
            app.id, app.company, app.role, app.status, app.applied_date
        );
        info!("added application #{}: {} at {}", app.id, app.role, app.company);
        apps.push(app);
        self.store.save(Collection::Applications, &apps)?;

        Ok(reply)
    }

    pub fn update(&self, application_id: i64, status: &str, notes: &str) -> CatalystResult<String> {
        let id = id_arg(
            application_id,
            "Please provide a valid application ID (positive number).",
        )?;
        let status: ApplicationStatus = status.parse()?;

        let mut apps: Vec<Application> = self.store.load(Collection::Applications);
        let app = apps
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalystError::NotFound(format!("Application #{id}")))?;

        let old_status = app.status;
        app.status = status;
        app.last_updated = self.clock.stamp();
        if !notes.trim().is_empty() {
            app.notes = notes.trim().to_string();
        }
        let reply = format!(
            "Application #{id} updated!\n  {} - {}\n  Status: {old_status} -> {status}",
            app.company, app.role
        );
        self.store.save(Collection::Applications, &apps)?;

        info!("updated application #{id}: {old_status} -> {status}");
        Ok(reply)
    }

    pub fn list(&self, status_filter: &str) -> CatalystResult<String> {
        let filter = match status_filter.trim() {
            "" => None,
            f => Some(f.parse::<ApplicationStatus>().map_err(|_| {
                CatalystError::Invalid(format!(
                    "Invalid filter '{}'. Must be one of: {}",
                    f.to_lowercase(),
                    ApplicationStatus::allowed()
                ))
            })?),
        };

        let mut apps: Vec<Application> = self.store.load(Collection::Applications);
        if apps.is_empty() {
            return Ok("No applications tracked yet. Use add_application to start tracking!".into());
        }
        if let Some(f) = filter {
            apps.retain(|a| a.status == f);
            if apps.is_empty() {
                return Ok(format!("No applications with status '{f}'."));
            }
        }

        let mut lines = vec![format!("Job Applications ({} total):\n", apps.len())];
        for status in ApplicationStatus::ALL {
            let group: Vec<&Application> = apps.iter().filter(|a| a.status == *status).collect();
            if group.is_empty() {
                continue;
            }
            lines.push(format!(
                "**{}** ({}):",
                status.as_str().to_uppercase(),
                group.len()
            ));
            for app in group {
                let notes = if app.notes.is_empty() {
                    String::new()
                } else {
                    format!(" | Notes: {}", app.notes)
                };
                lines.push(format!(
                    "  #{} {} - {} (applied: {}){notes}",
                    app.id, app.company, app.role, app.applied_date
                ));
            }
            lines.push(String::new());
        }

        let active = apps.iter().filter(|a| a.status.is_active()).count();
        let offers = apps
            .iter()
            .filter(|a| a.status == ApplicationStatus::Offer)
            .count();
        lines.push(format!(
            "Summary: {} total | {active} active | {offers} offers",
            apps.len()
        ));

        Ok(lines.join("\n"))
    }
}
