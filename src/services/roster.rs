use crate::models::{InfluencerProfile, SocialLink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Immutable roster of influencer profiles
///
/// Built once at startup and never mutated afterwards; the scoring engine
/// and directory filters borrow it read-only. Two construction paths:
/// a curated fixture set and a deterministic seeded generator for larger
/// rosters.
pub struct ProfileStore {
    profiles: Vec<InfluencerProfile>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<InfluencerProfile>) -> Self {
        Self { profiles }
    }

    /// The curated marketplace roster
    pub fn curated() -> Self {
        Self::new(curated_profiles())
    }

    /// Generate `count` profiles deterministically from `seed`
    ///
    /// Identical (count, seed) pairs always produce identical rosters, so
    /// tests and benchmarks never depend on ambient randomness.
    pub fn generated(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let profiles = (0..count)
            .map(|i| {
                let first = pick(&mut rng, FIRST_NAMES);
                let last = pick(&mut rng, LAST_NAMES);
                let niche = pick(&mut rng, NICHES);
                let city = pick(&mut rng, CITIES);
                let handle = format!(
                    "@{}{}",
                    first.to_lowercase(),
                    rng.gen_range(100..1000)
                );

                InfluencerProfile {
                    id: format!("{}-{}-{}", first.to_lowercase(), last.to_lowercase(), i),
                    name: format!("{} {}", first, last),
                    avatar: format!("/creators/generated/{}.jpg", i),
                    city: city.to_string(),
                    niche: niche.to_string(),
                    followers: rng.gen_range(50..3000) * 1_000,
                    rating: (rng.gen_range(35..50) as f32) / 10.0,
                    bio: format!(
                        "{} creator from {} sharing {} content and collaborations.",
                        niche,
                        city,
                        niche.to_lowercase()
                    ),
                    languages: vec![
                        pick(&mut rng, LANGUAGES).to_string(),
                        "English".to_string(),
                    ],
                    audience_type: pick(&mut rng, AUDIENCE_TYPES).to_string(),
                    region: "India".to_string(),
                    social_links: vec![SocialLink {
                        platform: "Instagram".to_string(),
                        url: format!("https://www.instagram.com/{}", &handle[1..]),
                        handle,
                    }],
                    past_brands: vec![pick(&mut rng, BRANDS).to_string()],
                }
            })
            .collect();

        Self::new(profiles)
    }

    pub fn profiles(&self) -> &[InfluencerProfile] {
        &self.profiles
    }

    pub fn get(&self, id: &str) -> Option<&InfluencerProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai", "Kolkata", "Pune", "Ahmedabad",
    "Jaipur", "Lucknow", "Chandigarh", "Kochi", "Indore", "Goa", "Surat",
];

const NICHES: &[&str] = &[
    "Fashion", "Beauty", "Fitness", "Travel", "Food", "Tech", "Lifestyle", "Photography",
    "Gaming", "Education", "Finance", "Health", "Parenting", "Music", "Comedy", "Sports",
];

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Priya", "Rohit", "Ananya", "Vikram", "Ishita", "Arjun", "Neha", "Karan", "Diya",
    "Raj", "Meera", "Aditya", "Kavya", "Siddharth", "Riya", "Varun", "Tanvi", "Nikhil", "Shruti",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Singh", "Kumar", "Gupta", "Reddy", "Nair", "Verma", "Iyer", "Joshi",
];

const LANGUAGES: &[&str] = &[
    "Hindi", "Telugu", "Tamil", "Bengali", "Marathi", "Gujarati", "Kannada", "Malayalam",
];

const AUDIENCE_TYPES: &[&str] = &[
    "Gen Z", "Millennials", "Parents", "Professionals", "Students", "Women 18-35",
];

const BRANDS: &[&str] = &[
    "Nike", "Zara", "Samsung", "Lakme", "Myntra", "Flipkart", "Nykaa", "Boat", "MamaEarth",
    "Puma", "Swiggy",
];

fn profile(
    id: &str,
    name: &str,
    avatar: &str,
    city: &str,
    niche: &str,
    followers: u64,
    rating: f32,
    bio: &str,
    languages: &[&str],
    audience_type: &str,
    region: &str,
    links: &[(&str, &str, &str)],
    past_brands: &[&str],
) -> InfluencerProfile {
    InfluencerProfile {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        city: city.to_string(),
        niche: niche.to_string(),
        followers,
        rating,
        bio: bio.to_string(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        audience_type: audience_type.to_string(),
        region: region.to_string(),
        social_links: links
            .iter()
            .map(|(platform, url, handle)| SocialLink {
                platform: platform.to_string(),
                url: url.to_string(),
                handle: handle.to_string(),
            })
            .collect(),
        past_brands: past_brands.iter().map(|s| s.to_string()).collect(),
    }
}

fn curated_profiles() -> Vec<InfluencerProfile> {
    vec![
        // Fitness
        profile(
            "pavan-hari",
            "Pavan Hari",
            "/creators/pavan-hari.jpg",
            "Hyderabad",
            "Fitness",
            450_000,
            4.6,
            "Fitness enthusiast and content creator focused on bodybuilding and lifestyle vlogs.",
            &["Telugu", "English"],
            "Gen Z",
            "South India",
            &[
                ("YouTube", "https://youtube.com/@pavanhari000", "Pavan Hari"),
                ("Instagram", "https://www.instagram.com/_pavanhari000__", "@_pavanhari000__"),
            ],
            &["Nike", "Fast&Up"],
        ),
        profile(
            "tarun-kumar",
            "Tarun Kumar",
            "/creators/tarun-kumar.png",
            "Hyderabad",
            "Fitness",
            320_000,
            4.5,
            "Sharing fitness journeys and workout routines to inspire health and wellness.",
            &["Telugu", "English"],
            "Millennials",
            "South India",
            &[
                ("YouTube", "https://youtube.com/@mr.tarunkumar", "Mr. Tarun Kumar"),
                ("Instagram", "https://www.instagram.com/mr.tarunkumar7", "@mr.tarunkumar7"),
            ],
            &["Reebok"],
        ),
        profile(
            "mehaboob",
            "Mehaboob",
            "/creators/mehaboob.jpg",
            "Hyderabad",
            "Fitness",
            2_400_000,
            4.9,
            "Dancer, fitness icon, and lifestyle creator known for high-energy content.",
            &["Telugu", "Hindi", "English"],
            "Gen Z",
            "India",
            &[
                ("YouTube", "https://youtube.com/@mehaboobdilse", "Mehaboob Dilse"),
                ("Instagram", "https://www.instagram.com/mehaboobdilse", "@mehaboobdilse"),
            ],
            &["Samsung", "Adidas"],
        ),
        profile(
            "mallika-raghavender",
            "Mallika Raghavender",
            "/creators/mallika-raghavender.png",
            "Hyderabad",
            "Fitness",
            650_000,
            4.8,
            "Dedicated to fitness, health, and empowering women through wellness content.",
            &["Telugu", "English"],
            "Women 18-35",
            "India",
            &[
                ("YouTube", "https://youtube.com/@mallikaraghavender", "Mallika Raghavender"),
                ("Instagram", "https://www.instagram.com/mallika_raghavender_official_", "@mallika_raghavender_official_"),
            ],
            &["cult.fit", "Ajio"],
        ),
        // Fashion
        profile(
            "demon-pavan",
            "Demon Pavan",
            "/creators/demon-pavan.webp",
            "Hyderabad",
            "Fashion",
            850_000,
            4.7,
            "Bold fashion and lifestyle icon blending high-intensity fitness with cutting-edge streetwear.",
            &["Telugu", "Hindi", "English"],
            "Gen Z",
            "India",
            &[("YouTube", "https://youtube.com/@demon_pavan", "Demon_Pavan_Official")],
            &["Zara", "H&M"],
        ),
        profile(
            "ananya-sharma",
            "Ananya Sharma",
            "/creators/ananya-sharma.jpg",
            "Mumbai",
            "Fashion",
            1_100_000,
            4.8,
            "Fashion creator focusing on traditional wear, sarees, and festive styling.",
            &["Hindi", "English"],
            "Women 18-35",
            "West India",
            &[("Instagram", "https://www.instagram.com/ananyastyles", "@ananyastyles")],
            &["Myntra", "Nykaa"],
        ),
        // Food
        profile(
            "vismai",
            "Vismai",
            "/creators/vismai.jpg",
            "Hyderabad",
            "Food",
            1_200_000,
            4.9,
            "Food creator sharing recipes, cooking tips, and Telugu cuisine favorites.",
            &["Telugu", "English"],
            "Parents",
            "India",
            &[("YouTube", "https://youtube.com/@vismai", "Vismai")],
            &["Swiggy"],
        ),
        profile(
            "naa-anvesana",
            "Naa Anvesana",
            "/creators/naa-anvesana.jpg",
            "Hyderabad",
            "Food",
            780_000,
            4.7,
            "Telugu food vlogs exploring street food, restaurants, and homemade pickles.",
            &["Telugu"],
            "Millennials",
            "South India",
            &[("YouTube", "https://youtube.com/@naaanvesana", "Naa Anvesana")],
            &[],
        ),
        // Travel
        profile(
            "riya-kapoor",
            "Riya Kapoor",
            "/creators/riya-kapoor.jpg",
            "Delhi",
            "Travel",
            560_000,
            4.5,
            "Travel vlogger exploring offbeat destinations, resorts, and budget itineraries.",
            &["Hindi", "English"],
            "Millennials",
            "North India",
            &[("Instagram", "https://www.instagram.com/riyatravels", "@riyatravels")],
            &["MakeMyTrip"],
        ),
        profile(
            "akash-trails",
            "Akash Verma",
            "/creators/akash-verma.jpg",
            "Hyderabad",
            "Travel",
            340_000,
            4.4,
            "Travel vlogger from Hyderabad covering weekend getaways and resort stays.",
            &["Telugu", "Hindi"],
            "Students",
            "South India",
            &[("YouTube", "https://youtube.com/@akashtrails", "Akash Trails")],
            &[],
        ),
        // Comedy
        profile(
            "harsha-comedy",
            "Harsha Chemudu",
            "/creators/harsha-chemudu.jpg",
            "Hyderabad",
            "Comedy",
            1_900_000,
            4.8,
            "Comedy creator known for viral skits, brand campaign collaborations, and relatable humor.",
            &["Telugu", "English"],
            "Gen Z",
            "India",
            &[("Instagram", "https://www.instagram.com/viva_harsha", "@viva_harsha")],
            &["Amazon", "Boat"],
        ),
        // Tech
        profile(
            "tech-nikhil",
            "Nikhil Rao",
            "/creators/nikhil-rao.jpg",
            "Bangalore",
            "Tech",
            920_000,
            4.6,
            "Tech reviewer covering smartphones, gadgets, and consumer electronics.",
            &["English", "Kannada"],
            "Professionals",
            "South India",
            &[("YouTube", "https://youtube.com/@technikhil", "Tech Nikhil")],
            &["Samsung", "Boat"],
        ),
        // Beauty
        profile(
            "meera-glow",
            "Meera Iyer",
            "/creators/meera-iyer.jpg",
            "Chennai",
            "Beauty",
            710_000,
            4.7,
            "Beauty and skincare creator with honest reviews and tutorials.",
            &["Tamil", "English"],
            "Women 18-35",
            "South India",
            &[("Instagram", "https://www.instagram.com/meeraglow", "@meeraglow")],
            &["Lakme", "Sugar Cosmetics"],
        ),
        // Lifestyle
        profile(
            "siri-hanumanth",
            "Siri Hanumanth",
            "/creators/siri-hanumanth.jpg",
            "Hyderabad",
            "Lifestyle",
            300_000,
            4.6,
            "Lifestyle creator sharing daily vlogs, relatable content, and trend videos.",
            &["Telugu", "English"],
            "Gen Z",
            "South India",
            &[("Instagram", "https://www.instagram.com/sirihanumanth", "@sirihanumanth")],
            &[],
        ),
    ]
}
