use std::collections::HashMap;

use fairshare_domain::{Participant, ParticipantId};

use crate::ledger::Ledger;

/// Resolves participant ids to display names for rendering.
///
/// Renderers fall back to a placeholder when resolution fails, so an
/// id missing from the directory can never break output generation.
pub trait ParticipantDirectory {
    fn display_name(&self, id: ParticipantId) -> Option<&str>;
}

impl ParticipantDirectory for Vec<Participant> {
    fn display_name(&self, id: ParticipantId) -> Option<&str> {
        self.iter()
            .find(|participant| participant.id == id)
            .map(|participant| participant.name.as_str())
    }
}

impl ParticipantDirectory for HashMap<ParticipantId, String> {
    fn display_name(&self, id: ParticipantId) -> Option<&str> {
        self.get(&id).map(String::as_str)
    }
}

impl ParticipantDirectory for Ledger {
    fn display_name(&self, id: ParticipantId) -> Option<&str> {
        self.participants()
            .iter()
            .find(|participant| participant.id == id)
            .map(|participant| participant.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_directory_resolves_known_ids_only() {
        let id = ParticipantId::new();
        let directory = vec![Participant {
            id,
            name: "Alice".to_string(),
        }];

        assert_eq!(directory.display_name(id), Some("Alice"));
        assert_eq!(directory.display_name(ParticipantId::new()), None);
    }

    #[test]
    fn map_directory_resolves_known_ids_only() {
        let id = ParticipantId::new();
        let mut directory = HashMap::new();
        directory.insert(id, "Bob".to_string());

        assert_eq!(directory.display_name(id), Some("Bob"));
        assert_eq!(directory.display_name(ParticipantId::new()), None);
    }

    #[test]
    fn ledger_directory_resolves_its_participants() {
        let mut ledger = Ledger::new();
        let id = ledger.add_participant("Carol").expect("valid name");

        assert_eq!(ledger.display_name(id), Some("Carol"));
        assert_eq!(ledger.display_name(ParticipantId::new()), None);
    }
}
