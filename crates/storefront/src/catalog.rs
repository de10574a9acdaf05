//! Static product catalog.
//!
//! The catalog is a compiled-in, read-only lookup table. In a larger
//! deployment this would come from a commerce API; here the store sells a
//! fixed shelf of games, so the records live in the binary and every query
//! is a scan over a couple dozen entries.
//!
//! The cart trusts these records as-is: prices, names, and categories are
//! never revalidated downstream.

use pixel_paradise_core::{CurrencyCode, Price, Product, ProductId};

/// Maximum number of search results returned to the autocomplete.
const SEARCH_RESULT_LIMIT: usize = 10;

/// The product catalog.
#[derive(Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog from the built-in seed data.
    #[must_use]
    pub fn new() -> Self {
        Self { products: seed() }
    }

    /// All products in shelf order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Category names in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// All products in one category, in shelf order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Whether the category exists.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.products.iter().any(|p| p.category == category)
    }

    /// Case-insensitive substring search over product names.
    ///
    /// Returns at most ten results; a blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .take(SEARCH_RESULT_LIMIT)
            .collect()
    }
}

fn game(
    id: &str,
    name: &str,
    cents: i64,
    category: &str,
    image: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents, CurrencyCode::USD),
        category: category.to_owned(),
        image: image.to_owned(),
        description: description.to_owned(),
    }
}

#[allow(clippy::too_many_lines)]
fn seed() -> Vec<Product> {
    vec![
        // RPG
        game(
            "game-elden",
            "Elden Ring",
            5999,
            "RPG",
            "https://image.api.playstation.com/vulcan/ap/rnd/202110/2000/aGhopp3MHppi7kooGE2Dtt8C.png",
            "A vast open-world action RPG where exploration, tense combat, and discovery intertwine. Create your build, face legendary bosses, and uncover secrets across a mysterious, ruined realm.",
        ),
        game(
            "game-baldurs-gate-3",
            "Baldur's Gate 3",
            5999,
            "RPG",
            "https://image.api.playstation.com/vulcan/ap/rnd/202302/2321/3098481c9164bb5f33069b37e49fba1a572ea3b89971ee7b.jpg",
            "A story-rich party RPG driven by choice and consequence. Gather allies, master turn-based tactics, and shape the fate of your adventure with every dialogue and decision.",
        ),
        game(
            "game-witcher-3",
            "The Witcher 3",
            3999,
            "RPG",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/292030/header.jpg",
            "A sprawling fantasy journey as a monster hunter for hire. Track contracts, navigate politics, and follow a personal story through richly detailed regions full of side quests.",
        ),
        game(
            "game-skyrim",
            "Skyrim Special Edition",
            3999,
            "RPG",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/489830/header.jpg",
            "An open-world epic where you forge your own path. Explore ancient ruins, learn powerful shouts, and develop your character through quests, crafting, and combat.",
        ),
        game(
            "game-divinity-2",
            "Divinity: Original Sin 2",
            4499,
            "RPG",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/435150/header.jpg",
            "A tactical RPG built around creative interactions and clever combos. Build a party, experiment with elemental effects, and approach battles with freedom and strategy.",
        ),
        game(
            "game-final-fantasy-7",
            "Final Fantasy VII Remake",
            6999,
            "RPG",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/1462040/header.jpg",
            "A modern reimagining of a classic story with cinematic action combat. Follow a band of rebels as they confront a powerful corporation and uncover deeper mysteries.",
        ),
        game(
            "game-cyberpunk",
            "Cyberpunk 2077",
            4999,
            "RPG",
            "https://image.api.playstation.com/vulcan/ap/rnd/202111/3013/cKZ4tKNFj9C00giTzYtH8PF1.png",
            "A futuristic RPG set in a neon-drenched metropolis. Customize your character, choose your playstyle, and take on missions that shift your reputation and relationships.",
        ),
        game(
            "game-persona-5",
            "Persona 5 Royal",
            5999,
            "RPG",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/1687950/header.jpg",
            "A stylish RPG blending dungeon crawling with daily life management. Build friendships, plan your schedule, and fight through surreal palaces to change corrupted hearts.",
        ),
        // Indie
        game(
            "game-hades",
            "Hades",
            2499,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/1145360/header.jpg",
            "A fast-paced roguelike where each escape attempt makes you stronger. Mix weapons and upgrades, meet memorable characters, and uncover story beats between runs.",
        ),
        game(
            "game-stardew",
            "Stardew Valley",
            1499,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/413150/header.jpg",
            "A cozy farming and life sim with relaxing progression. Grow crops, raise animals, explore mines, and build relationships in a charming small town.",
        ),
        game(
            "game-celeste",
            "Celeste",
            1999,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/504230/header.jpg",
            "A tight platformer focused on precise movement and perseverance. Climb a mountain through challenging levels, with an uplifting story about resilience.",
        ),
        game(
            "game-undertale",
            "Undertale",
            999,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/391540/header.jpg",
            "A quirky RPG where choices truly matter. Fight, talk, or spare your way through encounters and experience wildly different outcomes based on your approach.",
        ),
        game(
            "game-dead-cells",
            "Dead Cells",
            2499,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/588650/header.jpg",
            "A kinetic action platformer with roguelike progression. Chain attacks, try new builds, and push deeper into a shifting labyrinth packed with tough enemies.",
        ),
        game(
            "game-cuphead",
            "Cuphead",
            1999,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/268910/header.jpg",
            "A run-and-gun classic with hand-drawn animation and demanding boss fights. Learn patterns, time your dodges, and enjoy a jazzy retro cartoon vibe.",
        ),
        game(
            "game-terraria",
            "Terraria",
            999,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/105600/header.jpg",
            "A sandbox adventure where you mine, craft, and battle. Dig deep for rare materials, build elaborate bases, and face escalating bosses in a living world.",
        ),
        game(
            "game-ori",
            "Ori and the Will of the Wisps",
            2999,
            "Indie",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/1057090/header.jpg",
            "A beautiful action-platformer with fluid movement and emotional storytelling. Explore connected biomes, unlock abilities, and overcome challenging set pieces.",
        ),
        // Action
        game(
            "game-doom-eternal",
            "DOOM Eternal",
            3999,
            "Action",
            "https://image.api.playstation.com/vulcan/ap/rnd/202010/0114/ERNPc4gFqeRDG1tYQIfOKQtM.png",
            "An intense, high-speed shooter built around aggressive combat flow. Swap weapons constantly, manage resources, and tear through arenas packed with demons.",
        ),
        game(
            "game-hollow-knight",
            "Hollow Knight",
            1499,
            "Action",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/367520/header.jpg",
            "A moody action-adventure set in a vast underground kingdom. Explore interconnected areas, master tight combat, and uncover lore hidden in quiet corners.",
        ),
        game(
            "game-god-of-war",
            "God of War",
            4999,
            "Action",
            "https://image.api.playstation.com/vulcan/ap/rnd/202207/1210/4xJ8XB3bi888QTLZYdl7Oi0s.png",
            "A cinematic action journey through mythic realms. Experience visceral combat, discover secrets, and follow a powerful story about family and redemption.",
        ),
        game(
            "game-sekiro",
            "Sekiro: Shadows Die Twice",
            5999,
            "Action",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/814380/header.jpg",
            "A precision-focused action game centered on timing and parries. Study enemy moves, break defenses, and win duels through mastery rather than grinding.",
        ),
        game(
            "game-devil-may-cry-5",
            "Devil May Cry 5",
            2999,
            "Action",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/601150/header.jpg",
            "A stylish hack-and-slash built for flashy combos. Switch characters, experiment with weapons, and chase higher ranks with expressive, momentum-driven combat.",
        ),
        game(
            "game-spider-man",
            "Spider-Man Remastered",
            5999,
            "Action",
            "https://cdn.cloudflare.steamstatic.com/steam/apps/1817070/header.jpg",
            "Swing through a vibrant city and fight crime with acrobatic flair. Combine gadgets and web abilities, complete missions, and follow a superhero story.",
        ),
        game(
            "game-ghost-of-tsushima",
            "Ghost of Tsushima",
            5999,
            "Action",
            "https://image.api.playstation.com/vulcan/ap/rnd/202010/0222/b3iB2zf2xHj9shC0XDTULxND.png",
            "A samurai action adventure across sweeping landscapes. Choose stealth or honorable duels, refine your stance-based combat, and explore side tales.",
        ),
        game(
            "game-resident-evil-4",
            "Resident Evil 4 Remake",
            5999,
            "Action",
            "https://image.api.playstation.com/vulcan/ap/rnd/202210/0706/EVWyZD63pahuh95eKloFaJuC.png",
            "A tense survival-action experience with modernized pacing and atmosphere. Manage resources, face relentless threats, and push forward through hostile territory.",
        ),
    ]
}
