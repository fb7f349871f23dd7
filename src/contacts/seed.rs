//! Demo data generation.

use crate::contacts::model::NewContact;
use crate::contacts::repository::ContactRepository;

const FIRST_NAMES: &[&str] = &[
    "Adam", "Beata", "Cyril", "Dana", "Erik", "Frida", "Gustav", "Hana", "Igor", "Jana",
    "Karol", "Lucia", "Marek", "Nina", "Oskar", "Petra",
];

const LAST_NAMES: &[&str] = &[
    "Novak", "Horvath", "Kovac", "Varga", "Toth", "Nagy", "Balaz", "Molnar", "Simko", "Urban",
];

const DOMAINS: &[&str] = &["example.com", "mail.test", "contacts.local"];

/// Generate `count` plausible contacts.
///
/// The same `rng_seed` always yields the same contacts.
pub fn generate(count: usize, rng_seed: Option<u64>) -> Vec<NewContact> {
    let mut rng = match rng_seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    (0..count)
        .map(|_| {
            let first = FIRST_NAMES[rng.usize(..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.usize(..LAST_NAMES.len())];
            let domain = DOMAINS[rng.usize(..DOMAINS.len())];
            NewContact {
                name: format!("{} {}", first, last),
                email: format!(
                    "{}.{}{}@{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    rng.u16(1..1000),
                    domain
                ),
            }
        })
        .collect()
}

/// Populate the repository with generated contacts through the normal add path.
pub fn seed(repo: &dyn ContactRepository, count: usize, rng_seed: Option<u64>) {
    for contact in generate(count, rng_seed) {
        if repo.add(contact).is_none() {
            break;
        }
    }
    tracing::info!(count, total = repo.len(), "Seeded contact store");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::InMemoryContactRepository;

    #[test]
    fn test_seed_assigns_sequential_ids() {
        let repo = InMemoryContactRepository::new();
        seed(&repo, 10, Some(7));

        let ids: Vec<_> = repo.get_all().iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_generation_is_reproducible() {
        assert_eq!(generate(5, Some(42)), generate(5, Some(42)));
        assert!(generate(0, None).is_empty());
    }

    #[test]
    fn test_generated_email_shape() {
        for contact in generate(20, Some(1)) {
            assert!(contact.name.contains(' '));
            assert!(contact.email.contains('@'));
        }
    }
}
