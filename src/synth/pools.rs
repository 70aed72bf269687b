//! Fixed text pools the synthesizer draws from.

pub const SOURCES: &[&str] = &[
    "The Hindu",
    "Deccan Chronicle",
    "Eenadu",
    "Andhra Jyothy",
    "Sakshi",
    "Andhra Pradesh Today",
];

pub const DISTRICTS: &[&str] = &[
    "Visakhapatnam",
    "Anakapalli",
    "Amalapuram",
    "Srikakulam",
    "Yellamanchilli",
    "Sompeta",
    "Kadapa",
    "Tirupati",
    "Rajamahendravaram",
    "Kakinada",
    "Bhimavaram",
    "Vijayawada",
];

pub const CATEGORIES: &[&str] = &[
    "Crime Investigation",
    "Traffic Management",
    "Public Safety",
    "Community Policing",
    "Emergency Response",
    "Cyber Crime",
    "Drug Enforcement",
    "Women Safety",
];

pub const ARTICLE_TITLES: &[&str] = &[
    "Traffic Management Initiative Reduces Congestion in Visakhapatnam",
    "Community Policing Program Shows Success in Vijayawada",
    "Drug Enforcement Operation Yields Major Arrests in Tirupati",
    "Emergency Response Training Conducted in Kakinada",
    "Cyber Crime Awareness Campaign Launched in Srikakulam",
    "Women Safety Initiative Expands to Rural Areas of Kadapa",
    "Anti-Smuggling Operation Successful at Bhimavaram Port",
    "Public Safety Meeting Addresses Concerns in Anakapalli",
    "Technology Integration Enhances Investigation Capabilities",
    "Youth Engagement Program Reduces Crime in Rajamahendravaram",
    "Coastal Security Enhanced Along Sompeta Shoreline",
    "Rural Policing Initiative Strengthens Yellamanchilli Coverage",
    "Inter-District Coordination Improves Response Times",
    "Digital Evidence Lab Established in Amalapuram",
    "Community Watch Program Prevents Property Crimes",
];

pub const ARTICLE_CONTENTS: &[&str] = &[
    "Comprehensive analysis reveals significant improvement in traffic flow and reduced accident rates following implementation of smart traffic management systems.",
    "Community engagement initiatives demonstrate measurable enhancement in public trust and cooperation with law enforcement agencies.",
    "Multi-agency operation targeting drug trafficking networks results in seizure of contraband worth several crores and multiple arrests.",
    "Specialized emergency response training enhances department capabilities in disaster management and crisis intervention.",
    "Educational outreach programs create awareness about cyber threats and digital safety among citizens and businesses.",
    "Women safety initiatives including patrol enhancement and helpline services show positive impact on crime prevention.",
    "Coordinated anti-smuggling operations at coastal areas result in significant seizures and disruption of illegal trade networks.",
    "Public consultation meetings provide valuable feedback on safety concerns and help prioritize resource allocation.",
    "Advanced forensic technology and digital investigation tools improve case resolution rates and evidence quality.",
    "Youth mentorship and skill development programs create positive alternatives and reduce juvenile delinquency rates.",
    "Enhanced coastal surveillance and patrolling strengthen security along vulnerable shoreline areas.",
    "Rural policing initiatives improve law enforcement presence and response capabilities in remote areas.",
    "Inter-district communication systems and joint operations enhance coordination and resource sharing.",
    "State-of-the-art digital forensics laboratory enhances investigation capabilities for cyber and financial crimes.",
    "Community participation in neighborhood watch programs significantly reduces property crime incidents.",
];

pub const KEYWORDS: &[&str] = &[
    "operation",
    "investigation",
    "community",
    "safety",
    "enforcement",
];

pub const CRIME_TAGS: &[&str] = &[
    "investigation",
    "prevention",
    "enforcement",
    "surveillance",
    "community safety",
    "traffic violation",
    "cyber security",
];

pub const OFFICERS: &[&str] = &[
    "SI Ramesh Kumar",
    "CI Lakshmi Devi",
    "DSP Venkata Rao",
    "SP Priya Sharma",
    "ASI Suresh Babu",
];

pub const CLUSTER_TITLES: &[&str] = &[
    "Traffic Safety & Management Operations",
    "Community Policing & Engagement",
    "Drug Enforcement & Anti-Narcotics",
    "Emergency Response & Disaster Management",
    "Cyber Crime Investigation & Prevention",
    "Women Safety & Protection Initiatives",
    "Coastal Security & Anti-Smuggling",
    "Rural Policing & Remote Area Coverage",
    "Technology Integration & Modernization",
    "Youth Crime Prevention Programs",
    "Inter-District Coordination Activities",
    "Public Safety & Crime Prevention",
];

pub const CLUSTER_SUMMARIES: &[&str] = &[
    "Coordinated traffic management operations across multiple districts show significant improvement in road safety and congestion reduction.",
    "Community engagement programs strengthen police-public relations and enhance cooperative crime prevention efforts.",
    "Anti-narcotics operations targeting drug trafficking networks demonstrate effective inter-agency coordination and enforcement.",
    "Emergency preparedness and disaster response capabilities enhanced through specialized training and equipment upgrades.",
    "Cyber crime investigation units tackle digital threats with advanced technology and specialized expertise.",
    "Women safety initiatives including enhanced patrolling and support services show positive impact on crime prevention.",
    "Coastal security operations strengthen surveillance and anti-smuggling efforts along Andhra Pradesh shoreline.",
    "Rural policing initiatives improve law enforcement presence and community safety in remote areas.",
    "Technology integration enhances investigation capabilities and operational efficiency across departments.",
    "Youth engagement programs create positive alternatives and reduce juvenile crime through mentorship and skills development.",
    "Inter-district coordination improves resource sharing and joint operation effectiveness.",
    "Comprehensive public safety measures address community concerns and enhance overall security.",
];

pub const ACTION_ITEMS: &[&str] = &[
    "Increase patrol frequency in high-traffic areas",
    "Coordinate with district collectors for community meetings",
    "Deploy additional surveillance equipment at strategic locations",
    "Schedule inter-agency coordination meetings",
    "Implement enhanced training protocols for personnel",
    "Review and update standard operating procedures",
    "Establish community liaison officer programs",
    "Conduct follow-up investigations on pending cases",
    "Allocate additional resources to priority districts",
    "Develop prevention strategies with local organizations",
];

pub const WEATHER_CONDITIONS: &[&str] = &[
    "Clear",
    "Monsoon",
    "Partly Cloudy",
    "Thunderstorms",
    "Humid",
];

pub const WEATHER_RECOMMENDATIONS: &[&str] = &[
    "Increase patrol visibility in coastal areas during monsoon",
    "Monitor weather-related incidents and traffic disruptions",
    "Prepare emergency response protocols for severe weather",
    "Coordinate with disaster management authorities",
    "Enhance communication systems during adverse weather",
];

pub const TOP_DISTRICTS: &[&str] = &["Visakhapatnam", "Vijayawada", "Tirupati"];

/// Headquarters coordinates the article locations scatter around.
pub const HQ_LAT: f64 = 17.6868;
pub const HQ_LNG: f64 = 83.2185;
