//! Compiled-in content used to seed an empty document store.

use super::{
    AboutData, AboutFeature, BoardMember, Department, EventItem, HeroData, Lead, PastTenure,
    Podcast, PrivacyData, RecruitmentData, SocialLinks, Testimonial,
};

pub fn hero() -> HeroData {
    HeroData {
        title: "VOICE IT".to_string(),
        subtitle_p1: "Feel the".to_string(),
        subtitle_highlight: "rhythm.".to_string(),
        description: "The Official Radio & Podcasting Club of VIT Chennai. Amplifying stories, one frequency at a time.".to_string(),
    }
}

const PRIVACY_POLICY: &str = "1. Introduction
Welcome to VoiceIt VIT Chennai. We value your privacy and are committed to protecting your personal data. This privacy policy explains how we handle information when you visit our website or interact with our club activities.

2. Information We Collect
We may collect the following types of information:
- Recruitment Data: Name, registration number, phone number, and email address when you apply for club recruitment via our forms.
- Usage Data: Information about how you use our website, including access times and pages viewed (via basic analytics).

3. How We Use Your Information
- To manage club recruitments and auditions.
- To communicate with you regarding events, workshops, and club updates.
- To improve the performance and user experience of our website.

4. Data Sharing
We do not sell, trade, or rent your personal identification information to others. Data is strictly used for internal club administration and is accessible only to the current Board Members and Faculty Coordinators of VoiceIt.

5. Third-Party Links
Our website may contain links to third-party websites (e.g., Spotify, Instagram, YouTube). We are not responsible for the privacy practices or content of these external sites.

6. Changes to This Policy
VoiceIt reserves the right to update this privacy policy at any time. We encourage users to check this page frequently for any changes.

7. Contact Us
If you have any questions about this Privacy Policy, please contact us via our social media handles or email.";

pub fn privacy() -> PrivacyData {
    PrivacyData {
        last_updated: "October 24, 2024".to_string(),
        content: PRIVACY_POLICY.to_string(),
    }
}

fn feature(id: &str, icon: &str, title: &str, text: &str) -> AboutFeature {
    AboutFeature {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        icon: icon.to_string(),
    }
}

pub fn about() -> AboutData {
    AboutData {
        section_title: "Who We Are".to_string(),
        main_title: "Amplifying Voices Across Campus".to_string(),
        description: "VoiceIt is the premier media body of VIT Chennai, dedicated to the art of radio, podcasting, and audio storytelling. We are a diverse community of creators who believe in the power of the spoken word.".to_string(),
        features: vec![
            feature("1", "Globe", "Multilingual", "Podcasts in Tamil, English, Telugu, Malayalam, and Kannada."),
            feature("2", "Users", "Vibrant Community", "A family of RJs, editors, writers, and designers."),
            feature("3", "Music", "Campus Culture", "Setting the vibe for every major event at VIT Chennai."),
            feature("4", "Mic", "Professional Gear", "Hands-on experience with studio-grade audio equipment."),
        ],
        images: vec![
            "https://picsum.photos/400/500?random=1".to_string(),
            "https://picsum.photos/400/400?random=2".to_string(),
            "https://picsum.photos/400/400?random=3".to_string(),
            "https://picsum.photos/400/500?random=4".to_string(),
        ],
    }
}

fn department(id: &str, name: &str, icon: &str, color: &str, description: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department("rj-eng", "RJ English", "Mic", "text-neon-orange", "The English voice of the club, hosting flagship shows and interviews."),
        department("rj-tam", "RJ Tamil", "Radio", "text-neon-red", "Bringing local flavor and energy through Tamil commentary and shows."),
        department("rj-reg", "RJ Regional", "Languages", "text-neon-amber", "Celebrating diversity with Telugu, Malayalam, and Kannada content."),
        department("media", "Camera Team", "Video", "text-white", "Capturing moments and producing high-quality video coverage."),
        department("edit", "Editing", "Edit", "text-orange-400", "The wizards behind the seamless audio and video cuts."),
        department("content", "Content", "PenTool", "text-yellow-200", "Scripting stories, planning shows, and crafting narratives."),
        department("social", "Social Media", "Share2", "text-red-400", "Managing our digital presence and engaging the audience."),
        department("tech", "Tech & Sound", "Activity", "text-blue-400", "Managing the live streams, equipment, and audio engineering."),
    ]
}

fn event(
    id: &str,
    title: &str,
    year: &str,
    icon: &str,
    description: &str,
    image: &str,
    long_description: &str,
) -> EventItem {
    EventItem {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        image: Some(image.to_string()),
        long_description: Some(long_description.to_string()),
    }
}

pub fn events() -> Vec<EventItem> {
    vec![
        event(
            "1",
            "Auditions 2024",
            "2024",
            "Mic",
            "The hunt for the next voice of VITC. Over 500 participants showcased their talent.",
            "https://images.unsplash.com/photo-1516280440614-6697288d5d38?q=80&w=2070&auto=format&fit=crop",
            "The 2024 Auditions were a massive success, marking one of our largest turnouts in history. Students from every school in VIT Chennai came forward to test their vocal mettle. The process involved three rigorous rounds: a 60-second elevator pitch, an improv round to test wit and spontaneity, and a final studio simulation where candidates managed a live console while speaking. We discovered some truly unique voices that will define the sound of the campus for the next year.",
        ),
        event(
            "2",
            "Vibrance Radio",
            "2023",
            "Music4",
            "Live radio booth during the cultural fest, streaming non-stop for 3 days.",
            "https://images.unsplash.com/photo-1478737270239-2f02b77ac6d5?q=80&w=2066&auto=format&fit=crop",
            "Vibrance is the heartbeat of VIT Chennai, and VoiceIt was right at the center of it. We set up a glass-walled live radio booth in the middle of the food street. For 72 hours, our RJs kept the energy high with track requests, live dedications, and impromptu interviews with guest artists and celebrities. The \"Vibrance After Hours\" segment became an instant hit, featuring acoustic jams and ghost stories that gathered a massive crowd around the booth.",
        ),
        event(
            "3",
            "Spooktober Podcast",
            "2023",
            "Sparkles",
            "A horror special series released on Spotify featuring student stories.",
            "https://images.unsplash.com/photo-1509248961158-e54f6934749c?q=80&w=2037&auto=format&fit=crop",
            "Our Spooktober special pushed the boundaries of audio storytelling. We crowdsourced real paranormal experiences from students living in the hostels and turned them into a highly produced audio drama. The sound design team used binaural audio techniques to create an immersive 3D soundscape. Listening with headphones was mandatory, and terrifying. The series topped the campus charts for 3 weeks straight.",
        ),
        event(
            "4",
            "TechnoVIT Coverage",
            "2023",
            "Calendar",
            "Official media partners for the tech fest, covering 50+ events.",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=2070&auto=format&fit=crop",
            "As the official media partners for TechnoVIT, our camera and reporting teams were everywhere. We produced daily recap reels that were edited and uploaded within 2 hours of the events concluding. Our \"Tech Talk\" corner featured quick-fire interviews with hackathon winners and guest speakers from the industry, bridging the gap between technical jargon and entertainment.",
        ),
        event(
            "5",
            "Open Mic Night",
            "2022",
            "Radio",
            "Showcasing raw talent from the campus in an intimate acoustic setting.",
            "https://images.unsplash.com/photo-1525268323446-0505b6fe7778?q=80&w=2072&auto=format&fit=crop",
            "Held at the Amphitheatre under the stars, Open Mic Night 2022 was a celebration of vulnerability and art. We provided the stage, the mic, and the vibe; the students provided the magic. From poetry and stand-up comedy to beatboxing and classical singing, the variety was astounding. It was a reminder that VoiceIt isn't just about us talking; it's about giving everyone a platform to be heard.",
        ),
    ]
}

fn board_member(id: &str, name: &str, role: &str, image: &str) -> BoardMember {
    BoardMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        image: image.to_string(),
    }
}

pub fn board_members() -> Vec<BoardMember> {
    vec![
        board_member("1", "Arjun Das", "President", "https://picsum.photos/300/300?random=10"),
        board_member("2", "Sara Khan", "Vice President", "https://picsum.photos/300/300?random=11"),
        board_member("3", "Vikram R", "General Secretary", "https://picsum.photos/300/300?random=12"),
        board_member("4", "Priya S", "Design Head", "https://picsum.photos/300/300?random=13"),
    ]
}

fn lead(
    id: &str,
    name: &str,
    designation: &str,
    department: &str,
    image: &str,
    quote: &str,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        department: department.to_string(),
        image: image.to_string(),
        quote: Some(quote.to_string()),
    }
}

pub fn leads() -> Vec<Lead> {
    vec![
        lead(
            "1",
            "Rohan Sharma",
            "Head of English RJ",
            "RJ English",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=600&fit=crop&q=80",
            "Leading the voice of the campus involves curating shows that resonate with every student's heartbeat.",
        ),
        lead(
            "2",
            "Kavya Reddy",
            "Head of Events",
            "Events",
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&h=600&fit=crop&q=80",
            "Every event is a story waiting to unfold. We ensure the stage is set for magic to happen.",
        ),
        lead(
            "3",
            "Siddharth M",
            "Technical Lead",
            "Tech",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=600&fit=crop&q=80",
            "Behind every seamless broadcast is a complex web of cables and code that we manage with pride.",
        ),
        lead(
            "4",
            "Nithya V",
            "Content Chief",
            "Content",
            "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?w=400&h=600&fit=crop&q=80",
            "Words have power. Our team crafts narratives that inspire, inform, and entertain.",
        ),
        lead(
            "5",
            "Meera Nair",
            "Social Media Manager",
            "Social",
            "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?w=400&h=600&fit=crop&q=80",
            "Connecting the digital world with our on-ground energy, one post at a time.",
        ),
    ]
}

fn podcast(id: &str, title: &str, host: &str, duration: &str, image: &str) -> Podcast {
    Podcast {
        id: id.to_string(),
        title: title.to_string(),
        host: host.to_string(),
        duration: duration.to_string(),
        image: image.to_string(),
        link: None,
    }
}

pub fn podcasts() -> Vec<Podcast> {
    vec![
        podcast("1", "Midnight Tales Ep. 4", "RJ Nithya", "24m", "https://picsum.photos/400/400?random=50"),
        podcast("2", "Campus Life 101", "RJ Sam", "15m", "https://picsum.photos/400/400?random=51"),
        podcast("3", "Tech Talk Weekly", "Tech Team", "45m", "https://picsum.photos/400/400?random=52"),
        podcast("4", "Music Theory & Chill", "RJ Karthik", "32m", "https://picsum.photos/400/400?random=53"),
    ]
}

pub fn past_tenures() -> Vec<PastTenure> {
    vec![
        PastTenure {
            id: "1".to_string(),
            year: "2023-24".to_string(),
            members: vec![
                board_member("p1", "Rahul V", "President", "https://picsum.photos/300/300?random=60"),
                board_member("p2", "Sneha M", "Vice President", "https://picsum.photos/300/300?random=61"),
                board_member("p3", "Amit K", "General Secretary", "https://picsum.photos/300/300?random=62"),
            ],
        },
        PastTenure {
            id: "2".to_string(),
            year: "2022-23".to_string(),
            members: vec![
                board_member("p4", "Karthik S", "President", "https://picsum.photos/300/300?random=63"),
                board_member("p5", "Pooja R", "Vice President", "https://picsum.photos/300/300?random=64"),
            ],
        },
    ]
}

fn testimonial(id: &str, quote: &str, name: &str, designation: &str, src: &str) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        quote: quote.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        src: src.to_string(),
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "1",
            "VoiceIt taught me that my voice matters. From a shy fresher to hosting the university's biggest fest, the journey was surreal.",
            "Ananya Gupta",
            "Alumni, Batch of 2023",
            "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80&w=3560&auto=format&fit=crop",
        ),
        testimonial(
            "2",
            "The technical team here is on another level. I learned more about audio engineering in 6 months here than I did in 2 years online.",
            "David Chen",
            "Tech Lead, 2022",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=3560&auto=format&fit=crop",
        ),
        testimonial(
            "3",
            "Joining VoiceIt was the best decision of my college life. It's not just a club, it's a family that pushes you to be your best creative self.",
            "James Watson",
            "RJ English",
            "https://images.unsplash.com/photo-1623582854588-d60de57fa33f?q=80&w=3560&auto=format&fit=crop",
        ),
        testimonial(
            "4",
            "The exposure you get here is unmatched. Interviewing celebrities and managing live crowds gave me skills I use in my corporate job today.",
            "Emily Davis",
            "Former President",
            "https://images.unsplash.com/photo-1633332755192-727a05c4013d?q=80&w=3560&auto=format&fit=crop",
        ),
    ]
}

pub fn recruitment() -> RecruitmentData {
    RecruitmentData {
        is_open: false,
        link: String::new(),
    }
}

pub fn social_links() -> SocialLinks {
    SocialLinks {
        instagram: "https://www.instagram.com/voiceit_vitcc/".to_string(),
        youtube: "https://youtube.com".to_string(),
        linkedin: "https://linkedin.com".to_string(),
    }
}
