// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Synthetic profile generation.
//!
//! Produces batches of random profile records from fixed pools of names,
//! cities, jobs, bios, and tags. The gesture engine treats everything here
//! as opaque display payload; only the identifier matters to it.

use rand::{Rng, RngExt, rng, seq::IndexedRandom};
use xxhash_rust::xxh3::xxh3_64;

use crate::model::Profile;

const TAGS: &[&str] = &[
    "Coffee", "Hiking", "Movies", "Live Music", "Board Games", "Cats", "Dogs", "Traveler",
    "Foodie", "Tech", "Art", "Runner", "Climbing", "Books", "Yoga", "Photography",
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Sam", "Jordan", "Taylor", "Casey", "Avery", "Riley", "Morgan", "Quinn", "Cameron",
    "Jamie", "Drew", "Parker", "Reese", "Emerson", "Rowan", "Shawn", "Harper", "Skyler", "Devon",
];

const CITIES: &[&str] = &[
    "Brooklyn", "Manhattan", "Queens", "Jersey City", "Hoboken", "Astoria",
    "Williamsburg", "Bushwick", "Harlem", "Lower East Side",
];

const JOBS: &[&str] = &[
    "Product Designer", "Software Engineer", "Data Analyst", "Barista", "Teacher",
    "Photographer", "Architect", "Chef", "Nurse", "Marketing Manager", "UX Researcher",
];

const BIOS: &[&str] = &[
    "Weekend hikes and weekday lattes.",
    "Dog parent. Amateur chef. Karaoke enthusiast.",
    "Trying every taco in the city — for science.",
    "Bookstore browser and movie quote machine.",
    "Gym sometimes, Netflix always.",
    "Looking for the best slice in town.",
    "Will beat you at Mario Kart.",
    "Currently planning the next trip.",
];

const PHOTO_SEEDS: &[&str] = &[
    "1515462277126-2b47b9fa09e6",
    "1520975916090-3105956dac38",
    "1519340241574-2cec6aef0c01",
    "1554151228-14d9def656e4",
    "1548142813-c348350df52b",
    "1517841905240-472988babdf9",
    "1535713875002-d1d0cf377fde",
    "1545996124-0501ebae84d0",
    "1524504388940-b1c1722653e1",
    "1531123897727-8f129e1688ce",
];

const TAG_SAMPLES: usize = 4;

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 40;

/// Generates a batch of `count` random profiles with unique identifiers.
pub(crate) fn generate_profiles(count: usize) -> Vec<Profile> {
    let mut rng = rng();
    let nonce: u64 = rng.random();

    (0..count)
        .map(|index| {
            let name = *FIRST_NAMES.choose(&mut rng).unwrap();
            Profile {
                id: profile_id(index, nonce),
                name: name.to_string(),
                age: rng.random_range(MIN_AGE..MAX_AGE),
                city: CITIES.choose(&mut rng).unwrap().to_string(),
                title: JOBS.choose(&mut rng).unwrap().to_string(),
                bio: BIOS.choose(&mut rng).unwrap().to_string(),
                tags: pick_tags(&mut rng),
                img: photo_url(PHOTO_SEEDS.choose(&mut rng).unwrap()),
            }
        })
        .collect()
}

/// Samples up to [`TAG_SAMPLES`] tags, collapsing duplicates while keeping
/// first-seen order.
fn pick_tags(rng: &mut impl Rng) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(TAG_SAMPLES);
    for _ in 0..TAG_SAMPLES {
        let tag = TAGS.choose(rng).unwrap().to_string();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Builds a batch-unique identifier from the index and a per-batch nonce.
fn profile_id(index: usize, nonce: u64) -> String {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&nonce.to_le_bytes());
    bytes[8..].copy_from_slice(&(index as u64).to_le_bytes());
    format!("p_{}_{:08x}", index, xxh3_64(&bytes) as u32)
}

fn photo_url(seed: &str) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w=1200&q=80",
        seed
    )
}
