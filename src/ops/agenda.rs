/// Quick agenda scheduled from a calendar cell. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgendaForm {
    pub agenda: String,
    pub person: String,
    /// `HH:00`, prefilled from the clicked cell
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgendaError {
    #[error("Please fill in all fields")]
    MissingFields,
}

impl AgendaForm {
    /// Empty form for the cell at `hour`
    pub fn for_hour(hour: u32) -> Self {
        AgendaForm {
            time: format!("{:02}:00", hour),
            ..Default::default()
        }
    }

    /// Confirmation text: `<agenda> with <person> at <time>`
    pub fn submit(&self) -> Result<String, AgendaError> {
        if self.agenda.is_empty() || self.person.is_empty() || self.time.is_empty() {
            return Err(AgendaError::MissingFields);
        }
        Ok(format!("{} with {} at {}", self.agenda, self.person, self.time))
    }
}
