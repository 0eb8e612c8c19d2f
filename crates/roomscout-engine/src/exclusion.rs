//! Room eligibility filtering, independent of time.
//!
//! Some rooms are never bookable through the finder (labs, offices, foyers)
//! or belong to organizations that manage their rooms elsewhere. The
//! denylists are injected configuration so deployments can adjust them;
//! [`ExclusionRules::default`] carries the standard set.

use std::collections::HashSet;

use crate::model::Room;

/// Denylist-based eligibility rules for rooms.
///
/// Matching is exact and case-sensitive: the lists hold display strings as
/// the directory serves them, not normalized forms.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    excluded_orgnames: HashSet<String>,
    excluded_room_names: HashSet<String>,
}

impl ExclusionRules {
    /// Build rules from explicit denylists.
    pub fn new<O, R>(excluded_orgnames: O, excluded_room_names: R) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            excluded_orgnames: excluded_orgnames.into_iter().map(Into::into).collect(),
            excluded_room_names: excluded_room_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Rules that exclude nothing.
    pub fn permissive() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    /// Whether `room` stays in consideration. All of these must hold:
    ///
    /// - the organizational owner is not denylisted,
    /// - the display name is not denylisted,
    /// - the display name is non-empty,
    /// - with `min_size` given, capacity is at least that large.
    pub fn retains(&self, room: &Room, min_size: Option<u32>) -> bool {
        if self.excluded_orgnames.contains(&room.orgname) {
            return false;
        }
        if self.excluded_room_names.contains(&room.name) {
            return false;
        }
        if room.name.is_empty() {
            return false;
        }
        if let Some(min) = min_size {
            if room.size < min {
                return false;
            }
        }
        true
    }
}

impl Default for ExclusionRules {
    /// The standard deployment denylists: organizations whose rooms are not
    /// generally bookable, and room names that designate offices, labs, and
    /// other non-bookable spaces.
    fn default() -> Self {
        Self::new(
            [
                "Fachvertretung für Didaktik der Kunst",
                "Lehrstuhl für Musikpädagogik und Musikdidaktik",
                "Bamberg Graduate School of Social Sciences (BAGSS)",
                "Institut für Psychologie",
            ],
            [
                "Tower Lounge WIAI",
                "PC-Labor",
                "PC-Labor 1",
                "PC-Labor 2",
                "EFDA",
                "Dienstzimmer",
                "Foyer",
                "Dienstzimmer Neutestamentliche Wissenschaften",
                "ehem. Senatssaal",
                "Sitzungszimmer Dekanat GuK",
                "WAP-Raum",
                "Sprachlernstudio",
                "Besprechungsraum",
                "Seminar- und Videokonferenzraum",
                "Prüfungsraum",
                "Raum Diathek",
                "Kartensammlung",
                "Sekretariat",
                "Büro Sprachlernstudio",
                "Dozentenzimmer",
                "Labor",
                "Multimedialabor",
                "Sporthalle",
                "Lehrstuhl für Englische Literaturwissenschaft/Dienstzimmer",
                "Besprechungsraum - IADK",
                "Lernwerkstatt",
                "Sitzungszimmer Fakultät GuK",
                "Lehrredaktion",
                "Arbeits-, und Materialraum",
            ],
        )
    }
}
