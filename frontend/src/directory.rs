//! Read-only registry of the people who run the practice.
//!
//! The records are plain `'static` data: the registry is built at compile
//! time, lives for the whole process and is only reachable through
//! [`Directory::find_by_id`] and [`Directory::all`].

#[derive(Debug, PartialEq, Eq)]
pub struct LeaderRecord {
    /// Stable identifier, used in `/leader/:id` URLs.
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
    pub photo: &'static str,
    /// Paragraphs in reading order.
    pub bio: &'static [&'static str],
    /// `None` means the profile has no such section at all.
    pub qualifications: Option<&'static [&'static str]>,
    pub achievements: Option<&'static [&'static str]>,
    pub specialties: Option<&'static [&'static str]>,
}

pub struct Directory {
    leaders: &'static [LeaderRecord],
}

impl Directory {
    pub const fn new(leaders: &'static [LeaderRecord]) -> Self {
        Self { leaders }
    }

    /// Exact match on `id`. Any string is a valid query.
    pub fn find_by_id(&self, id: &str) -> Option<&'static LeaderRecord> {
        let leaders: &'static [LeaderRecord] = self.leaders;
        leaders.iter().find(|leader| leader.id == id)
    }

    pub fn all(&self) -> impl Iterator<Item = &'static LeaderRecord> {
        let leaders: &'static [LeaderRecord] = self.leaders;
        leaders.iter()
    }
}

static LEADERS: [LeaderRecord; 3] = [
    LeaderRecord {
        id: "1",
        name: "Dr. Amara Okafor",
        title: "Founder & Clinical Director",
        role: "Leads clinical standards and therapist training",
        experience: "18 years in clinical practice",
        photo: "/assets/leaders/amara-okafor.svg",
        bio: &[
            "Amara started Mindbridge after a decade in community mental health, where she watched people wait months for a first appointment.",
            "She designs the assessment that every new client takes and personally reviews how therapists are matched to the people they see.",
            "Outside of work she volunteers with a peer-support line and is an unapologetically slow marathon runner.",
        ],
        qualifications: Some(&[
            "PsyD, Clinical Psychology",
            "Licensed Clinical Psychologist",
            "Certified EMDR Therapist",
        ]),
        achievements: Some(&[
            "Built a community clinic serving 4,000 clients a year",
            "Published research on stepped-care models for anxiety",
        ]),
        specialties: Some(&["Trauma", "Anxiety disorders", "Clinical supervision"]),
    },
    LeaderRecord {
        id: "2",
        name: "Daniel Reyes",
        title: "Co-founder & Chief Executive",
        role: "Runs operations, partnerships and the client experience",
        experience: "12 years in digital health",
        photo: "/assets/leaders/daniel-reyes.svg",
        bio: &[
            "Daniel spent his early career building scheduling and records software for hospital networks.",
            "At Mindbridge he focuses on making care affordable and removing every step between deciding to get help and talking to someone.",
        ],
        qualifications: Some(&["MBA, Healthcare Management", "BSc, Computer Science"]),
        achievements: Some(&[
            "Scaled a telehealth platform to 300 clinicians",
            "Advisor to two state mental-health parity initiatives",
        ]),
        specialties: None,
    },
    LeaderRecord {
        id: "3",
        name: "Dr. Lena Fischer",
        title: "Head of Therapist Network",
        role: "Recruits, credentials and supports our therapists",
        experience: "15 years as a licensed therapist",
        photo: "/assets/leaders/lena-fischer.svg",
        bio: &[
            "Lena has worked in private practice, university counselling centers and an inpatient eating-disorder unit.",
            "She interviews every therapist who joins the network and runs the weekly peer consultation groups.",
        ],
        qualifications: Some(&[
            "PhD, Counselling Psychology",
            "Licensed Marriage and Family Therapist",
        ]),
        achievements: None,
        specialties: Some(&[
            "Eating disorders",
            "Couples therapy",
            "Life transitions",
        ]),
    },
];

static DIRECTORY: Directory = Directory::new(&LEADERS);

pub fn directory() -> &'static Directory {
    &DIRECTORY
}

pub fn find_by_id(id: &str) -> Option<&'static LeaderRecord> {
    DIRECTORY.find_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn every_registered_id_resolves_to_its_own_record() {
        for leader in directory().all() {
            let found = find_by_id(leader.id).expect("registered id must resolve");
            assert!(std::ptr::eq(found, leader));
        }
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let ids: HashSet<&str> = directory().all().map(|leader| leader.id).collect();
        assert_eq!(ids.len(), directory().all().count());
    }

    #[test]
    fn lookup_returns_the_stored_record() {
        let leader = find_by_id("2").expect("leader 2 exists");
        assert_eq!(leader.name, "Daniel Reyes");
        assert_eq!(leader.id, "2");
    }

    #[test]
    fn unknown_ids_are_absent() {
        for id in ["4", "", " 1", "1 ", "12", "01", "nonexistent-id", "#1"] {
            assert_eq!(find_by_id(id), None, "id {id:?} should not resolve");
        }
    }

    #[test]
    fn substrings_and_superstrings_of_real_ids_miss() {
        static LONG_IDS: [LeaderRecord; 1] = [LeaderRecord {
            id: "amara-okafor",
            name: "Amara",
            title: "",
            role: "",
            experience: "",
            photo: "",
            bio: &[],
            qualifications: None,
            achievements: None,
            specialties: None,
        }];
        let directory = Directory::new(&LONG_IDS);

        assert!(directory.find_by_id("amara-okafor").is_some());
        assert_eq!(directory.find_by_id("amara"), None);
        assert_eq!(directory.find_by_id("amara-okafor-2"), None);
        assert_eq!(directory.find_by_id("AMARA-OKAFOR"), None);
    }

    #[test]
    fn missing_and_empty_sections_stay_distinct() {
        let daniel = find_by_id("2").expect("leader 2 exists");
        assert_eq!(daniel.specialties, None);

        let lena = find_by_id("3").expect("leader 3 exists");
        assert_eq!(lena.achievements, None);
        assert_eq!(lena.specialties.map(<[_]>::len), Some(3));
    }

    #[test]
    fn bio_paragraphs_keep_their_order() {
        let amara = find_by_id("1").expect("leader 1 exists");
        assert_eq!(amara.bio.len(), 3);
        assert!(amara.bio[0].starts_with("Amara started Mindbridge"));
        assert!(amara.bio[2].contains("marathon"));
    }

    #[test]
    fn every_photo_is_shipped_with_the_site() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for leader in directory().all() {
            let relative = leader.photo.trim_start_matches('/');
            assert!(
                root.join(relative).is_file(),
                "missing photo {} for {}",
                leader.photo,
                leader.name
            );
        }
    }
}
