use crate::helper::{require, HelperError};
use crate::models::generator_models::{Slogan, SloganRequest, SloganTone};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

const SLOGANS: [&str; 20] = [
    "Progress That Matters",
    "Together We Rise",
    "Building Tomorrow Today",
    "Your Voice, Our Mission",
    "Unity Through Action",
    "Change You Can Trust",
    "Forward Together",
    "Community First",
    "Real Results, Real Change",
    "Stronger Together",
    "Hope in Action",
    "The Future is Now",
    "Empowering Every Voice",
    "Leadership That Listens",
    "Making a Difference",
    "United for Progress",
    "Building Bridges",
    "Inspiring Change",
    "Committed to Community",
    "Your Future, Our Focus",
];

const SLOGAN_ID_LEN: usize = 9;

/// Emotional 30%, Authoritative 42% (60% of the remainder), Inspirational 28%.
fn pick_tone<R: Rng>(rng: &mut R) -> SloganTone {
    if rng.gen::<f64>() > 0.7 {
        SloganTone::Emotional
    } else if rng.gen::<f64>() > 0.4 {
        SloganTone::Authoritative
    } else {
        SloganTone::Inspirational
    }
}

fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..SLOGAN_ID_LEN].to_string()
}

/// The full slogan bank in random order, each tagged with a tone.
pub fn generate_slogans<R: Rng>(request: &SloganRequest, rng: &mut R) -> Result<Vec<Slogan>, HelperError> {
    require(&request.core_message, "Core message")?;

    let mut texts = SLOGANS.to_vec();
    texts.shuffle(rng);

    Ok(texts
        .into_iter()
        .map(|text| Slogan {
            id: short_id(),
            text: text.to_string(),
            tone: pick_tone(rng),
        })
        .collect())
}
