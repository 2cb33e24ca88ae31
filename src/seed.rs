use crate::models::{Club, Member, Plan};

pub fn clubs() -> Vec<Club> {
    vec![
        Club {
            id: "1".to_string(),
            name: "Skybar Lounge".to_string(),
            image: "https://images.unsplash.com/photo-1566417713940-fe7c737a9ef2?w=800".to_string(),
            rating: 4.5,
            entry_price: 1500,
            location: "Downtown, Mumbai".to_string(),
            timings: "8 PM - 3 AM".to_string(),
            phone: "+91 98765 43210".to_string(),
            whatsapp: "+91 98765 43210".to_string(),
            website: "https://skybarlounge.com".to_string(),
            description: "Premium rooftop lounge with stunning city views".to_string(),
            offers: Some("Ladies Night on Wednesday - Free entry for ladies".to_string()),
        },
        Club {
            id: "2".to_string(),
            name: "Neon Nights".to_string(),
            image: "https://images.unsplash.com/photo-1571266028243-d220c6e2e5e4?w=800".to_string(),
            rating: 4.7,
            entry_price: 2000,
            location: "Bandra West, Mumbai".to_string(),
            timings: "9 PM - 4 AM".to_string(),
            phone: "+91 98765 43211".to_string(),
            whatsapp: "+91 98765 43211".to_string(),
            website: "https://neonnights.com".to_string(),
            description: "EDM and House music paradise".to_string(),
            offers: Some("Happy Hours: 9-11 PM - 50% off on drinks".to_string()),
        },
        Club {
            id: "3".to_string(),
            name: "The Velvet Room".to_string(),
            image: "https://images.unsplash.com/photo-1514933651103-005eec06c04b?w=800".to_string(),
            rating: 4.3,
            entry_price: 1200,
            location: "Andheri, Mumbai".to_string(),
            timings: "7 PM - 2 AM".to_string(),
            phone: "+91 98765 43212".to_string(),
            whatsapp: "+91 98765 43212".to_string(),
            website: "https://velvetroom.com".to_string(),
            description: "Elegant lounge with live music".to_string(),
            offers: Some("Couples Entry: ₹2000 for two with complimentary drinks".to_string()),
        },
        Club {
            id: "4".to_string(),
            name: "Bass Factory".to_string(),
            image: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?w=800".to_string(),
            rating: 4.8,
            entry_price: 2500,
            location: "Lower Parel, Mumbai".to_string(),
            timings: "10 PM - 5 AM".to_string(),
            phone: "+91 98765 43213".to_string(),
            whatsapp: "+91 98765 43213".to_string(),
            website: "https://bassfactory.com".to_string(),
            description: "Underground techno and bass music club".to_string(),
            offers: Some("Early Bird: Entry before 11 PM - ₹1500".to_string()),
        },
    ]
}

// Plans shown on the home feed before anyone creates one.
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "1".to_string(),
            title: "Saturday Night at Skybar".to_string(),
            venue: "Skybar Lounge".to_string(),
            date: "2025-12-01".to_string(),
            time: "9:00 PM".to_string(),
            budget: 3000,
            description: "Rooftop party with amazing views!".to_string(),
            is_public: true,
            creator: Member::new("1", "Rahul Sharma", "https://i.pravatar.cc/150?img=12"),
            participants: vec![
                Member::new("2", "Priya", "https://i.pravatar.cc/150?img=5"),
                Member::new("3", "Arjun", "https://i.pravatar.cc/150?img=13"),
            ],
        },
        Plan {
            id: "2".to_string(),
            title: "EDM Night - Neon Nights".to_string(),
            venue: "Neon Nights".to_string(),
            date: "2025-12-02".to_string(),
            time: "10:00 PM".to_string(),
            budget: 4000,
            description: "Best EDM night in town! Join us!".to_string(),
            is_public: true,
            creator: Member::new("4", "Sneha Patel", "https://i.pravatar.cc/150?img=9"),
            participants: vec![
                Member::new("5", "Vikram", "https://i.pravatar.cc/150?img=15"),
                Member::new("6", "Neha", "https://i.pravatar.cc/150?img=20"),
                Member::new("7", "Karan", "https://i.pravatar.cc/150?img=33"),
            ],
        },
        Plan {
            id: "3".to_string(),
            title: "Chill Friday at Velvet".to_string(),
            venue: "The Velvet Room".to_string(),
            date: "2025-11-30".to_string(),
            time: "8:00 PM".to_string(),
            budget: 2500,
            description: "Live music and good vibes".to_string(),
            is_public: true,
            creator: Member::new("8", "Amit Kumar", "https://i.pravatar.cc/150?img=51"),
            participants: vec![Member::new("9", "Riya", "https://i.pravatar.cc/150?img=16")],
        },
    ]
}
