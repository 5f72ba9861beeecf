use std::collections::HashMap;

use async_trait::async_trait;
use marquee_model::{CatalogItem, CatalogPage, Category};

use super::{CatalogError, CatalogRequest, CatalogSource};

/// In-memory catalog used for demo mode and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    listings: HashMap<Category, Vec<CatalogItem>>,
}

impl StaticCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(
        mut self,
        category: Category,
        items: Vec<CatalogItem>,
    ) -> Self {
        self.listings.insert(category, items);
        self
    }

    /// A small built-in catalog so the browser runs without an API key.
    pub fn demo() -> Self {
        Self::new()
            .with_category(Category::MovieNowPlaying, demo_movies())
            .with_category(Category::TvOnTheAir, demo_series())
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch(
        &self,
        request: &CatalogRequest,
    ) -> Result<CatalogPage, CatalogError> {
        let items = self
            .listings
            .get(&request.category)
            .ok_or(CatalogError::NotFound)?;
        tracing::debug!(
            category = %request.category,
            results = items.len(),
            "serving fixture listing"
        );
        Ok(CatalogPage::single(items.clone()))
    }
}

fn demo_movies() -> Vec<CatalogItem> {
    [
        (
            1022789,
            "Inside Out 2",
            "Teenager Riley's mind headquarters is undergoing a sudden demolition to make room for something entirely unexpected: new Emotions!",
        ),
        (
            653346,
            "Kingdom of the Planet of the Apes",
            "Several generations in the future following Caesar's reign, apes are now the dominant species and live harmoniously while humans have been reduced to living in the shadows.",
        ),
        (
            573435,
            "Bad Boys: Ride or Die",
            "After their late former Captain is framed, Lowrey and Burnett try to clear his name, only to end up on the run themselves.",
        ),
        (
            786892,
            "Furiosa: A Mad Max Saga",
            "As the world fell, young Furiosa is snatched from the Green Place of Many Mothers and falls into the hands of a great Biker Horde.",
        ),
        (
            1001311,
            "Under Paris",
            "In the Summer of 2024, Paris is hosting the World Triathlon Championships on the Seine for the first time.",
        ),
        (
            929590,
            "Civil War",
            "In the near future, a group of war journalists attempt to survive while reporting the truth as the United States stands on the brink of civil war.",
        ),
        (
            823464,
            "Godzilla x Kong: The New Empire",
            "Following their explosive showdown, Godzilla and Kong must reunite against a colossal undiscovered threat hidden within our world.",
        ),
        (
            746036,
            "The Fall Guy",
            "Fresh off an almost career-ending accident, stuntman Colt Seavers has to track down a missing movie star, solve a conspiracy and try to win back the love of his life.",
        ),
        (
            1011985,
            "Kung Fu Panda 4",
            "Po is gearing up to become the spiritual leader of his Valley of Peace, but also needs someone to take his place as Dragon Warrior.",
        ),
        (
            693134,
            "Dune: Part Two",
            "Follow the mythic journey of Paul Atreides as he unites with Chani and the Fremen while on a path of revenge against the conspirators who destroyed his family.",
        ),
        (
            940551,
            "Migration",
            "After a migrating duck family alights on their pond with thrilling tales of far-flung places, the Mallard family embarks on a family road trip.",
        ),
        (
            1111873,
            "Abigail",
            "A group of would-be criminals kidnap the 12-year-old ballerina daughter of a powerful underworld figure.",
        ),
        (
            1094138,
            "Jackpot!",
            "In the near future, a 'Grand Lottery' has been established - the catch: kill the winner before sundown to legally claim their multi-billion dollar jackpot.",
        ),
        (
            639720,
            "IF",
            "A young girl who goes through a difficult experience begins to see everyone's imaginary friends who have been left behind.",
        ),
        (
            614933,
            "Atlas",
            "A brilliant counterterrorism analyst with a deep distrust of AI discovers it might be her only hope when a mission to capture a renegade robot goes awry.",
        ),
        (
            1086747,
            "The Watchers",
            "A young artist gets stranded in an extensive, immaculate forest in western Ireland, where she is stalked by mysterious creatures each night.",
        ),
        (
            719221,
            "Tarot",
            "When a group of friends recklessly violate the sacred rule of Tarot readings, they unknowingly unleash an unspeakable evil trapped within the cursed cards.",
        ),
        (
            1041613,
            "Immaculate",
            "An American nun embarks on a new journey when she joins a remote convent in the Italian countryside.",
        ),
        (
            831815,
            "Saltburn",
            "Struggling to find his place at Oxford University, student Oliver Quick finds himself drawn into the world of the charming and aristocratic Felix Catton.",
        ),
        (
            1096197,
            "No Way Up",
            "Characters from different backgrounds are thrown together when the plane they're travelling on crashes into the Pacific Ocean.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (id, title, overview))| {
        CatalogItem::new(id, title)
            .with_overview(overview)
            .with_backdrop(format!("/demo-backdrop-{idx:02}.jpg"))
            .with_poster(format!("/demo-poster-{idx:02}.jpg"))
    })
    .collect()
}

fn demo_series() -> Vec<CatalogItem> {
    [
        (
            94997,
            "House of the Dragon",
            "The Targaryen dynasty is at the absolute apex of its power, with more than 15 dragons under their yoke.",
        ),
        (
            1399,
            "Game of Thrones",
            "Seven noble families fight for control of the mythical land of Westeros.",
        ),
        (
            76479,
            "The Boys",
            "A group of vigilantes known informally as \"The Boys\" set out to take down corrupt superheroes with no more than blue-collar grit.",
        ),
        (
            84773,
            "The Lord of the Rings: The Rings of Power",
            "Beginning in a time of relative peace, we follow an ensemble cast of characters as they confront the re-emergence of evil to Middle-earth.",
        ),
        (
            136315,
            "The Bear",
            "Carmy, a young fine-dining chef, comes home to Chicago to run his late brother's Italian beef sandwich shop.",
        ),
        (
            100088,
            "The Last of Us",
            "Twenty years after modern civilization has been destroyed, Joel is hired to smuggle Ellie out of an oppressive quarantine zone.",
        ),
        (
            95396,
            "Severance",
            "Mark leads a team of office workers whose memories have been surgically divided between their work and personal lives.",
        ),
        (
            119051,
            "Wednesday",
            "Wednesday Addams sets out to investigate a murder spree while making new friends and foes at Nevermore Academy.",
        ),
    ]
    .into_iter()
    .map(|(id, title, overview)| {
        CatalogItem::new(id, title).with_overview(overview)
    })
    .collect()
}
