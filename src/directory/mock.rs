//! Deterministic stand-in for a GST registry lookup
//!
//! Generates plausible party details from the PAN embedded in a GSTIN so
//! forms can be exercised without network access. The same GSTIN always
//! yields the same details.

use async_trait::async_trait;

use crate::tax::gstin::Gstin;
use crate::traits::{GstDetails, GstLookup};
use crate::types::InvoiceResult;

static BUSINESS_NAMES: [[&str; 4]; 26] = [
    ["Agarwal", "Apex", "Alpha", "Ashoka"],
    ["Bharat", "Bajaj", "Blue Star", "Birla"],
    ["Choudhary", "Crown", "City", "Capital"],
    ["Dalmia", "Divine", "Diamond", "Dewan"],
    ["Excel", "East India", "Express", "Eagle"],
    ["Future", "Falcon", "First Choice", "Fortune"],
    ["Godrej", "Global", "Galaxy", "Greenfield"],
    ["Hindustan", "Horizon", "Heritage", "Hightech"],
    ["Indian", "Infosys", "Indigo", "Imperial"],
    ["Jindal", "Jain", "Jupiter", "Jaguar"],
    ["Kumar", "Kingfisher", "Kohinoor", "Kesar"],
    ["Laxmi", "Lotus", "Lion", "Liberty"],
    ["Mahindra", "Modern", "Marvel", "Metro"],
    ["National", "New Age", "Noble", "Narmada"],
    ["Orient", "Omega", "Orchid", "Olympic"],
    ["Patil", "Premier", "Pioneer", "Prime"],
    ["Quality", "Quest", "Quantum", "Quick"],
    ["Reliance", "Royal", "Rajesh", "Rainbow"],
    ["Singh", "Sharma", "Supreme", "Silver"],
    ["Tata", "Tristar", "Tiger", "Tech"],
    ["United", "Universal", "Ultra", "Union"],
    ["Verma", "Vision", "Vimal", "Victory"],
    ["Western", "World", "Wonder", "White"],
    ["Xenon", "Xpress", "Xcel", "X-Factor"],
    ["Yadav", "Young", "Yellow", "Yuva"],
    ["Zenith", "Zoom", "Zodiac", "Zest"],
];

static BUSINESS_SUFFIXES: [&str; 7] = [
    "Enterprises",
    "Industries",
    "Limited",
    "Pvt Ltd",
    "Trading Co",
    "Solutions",
    "Corporation",
];

static FIRST_NAMES: [[&str; 4]; 26] = [
    ["Amit", "Anil", "Ajay", "Arun"],
    ["Baldev", "Bharat", "Brijesh", "Bikram"],
    ["Chetan", "Chirag", "Chandan", "Chinmay"],
    ["Deepak", "Dinesh", "Dhruv", "Dev"],
    ["Ekant", "Eshaan", "Eshan", "Eshwar"],
    ["Farhan", "Faiz", "Faisal", "Fahad"],
    ["Gaurav", "Govind", "Girish", "Ganesh"],
    ["Harish", "Himanshu", "Harsh", "Hitesh"],
    ["Ishaan", "Imran", "Inderjeet", "Irfan"],
    ["Jatin", "Jai", "Jayant", "Jagdish"],
    ["Karan", "Kunal", "Kamal", "Krishan"],
    ["Lalit", "Lokesh", "Lakshman", "Laxman"],
    ["Mohit", "Manish", "Manoj", "Mukesh"],
    ["Nitin", "Naveen", "Neeraj", "Nitesh"],
    ["Om", "Omkar", "Onkar", "Omansh"],
    ["Pradeep", "Pankaj", "Prakash", "Praveen"],
    ["Qadir", "Qasim", "Qureshi", "Qamar"],
    ["Rahul", "Raj", "Rakesh", "Rajesh"],
    ["Sanjay", "Suresh", "Sandeep", "Sunil"],
    ["Tarun", "Tushar", "Trilok", "Tejinder"],
    ["Umesh", "Uday", "Ujjwal", "Udayan"],
    ["Vijay", "Vikram", "Varun", "Vinod"],
    ["Wasim", "Waqar", "Wahid", "Wali"],
    ["Xavier", "Xander", "Xerxes", "Ximun"],
    ["Yash", "Yogesh", "Yuvraj", "Yatin"],
    ["Zubin", "Zaheer", "Zeeshan", "Zubair"],
];

static SURNAMES: [[&str; 4]; 26] = [
    ["Agarwal", "Arora", "Ahuja", "Anand"],
    ["Bansal", "Bhatia", "Bhalla", "Bajaj"],
    ["Chopra", "Chadha", "Chauhan", "Chawla"],
    ["Dhawan", "Duggal", "Dutta", "Dalal"],
    ["Eshwaran", "Ezhil", "Emmanuel", "Easwaran"],
    ["Fotedar", "Farooqui", "Fazal", "Fernandez"],
    ["Gupta", "Goel", "Garg", "Gandhi"],
    ["Hora", "Hegde", "Handa", "Hans"],
    ["Iyengar", "Iyer", "Israni", "Ibrahim"],
    ["Joshi", "Jain", "Johar", "Juneja"],
    ["Kumar", "Khanna", "Kapoor", "Kaur"],
    ["Luthra", "Lamba", "Lal", "Lakhanpal"],
    ["Mehta", "Malhotra", "Malik", "Mathur"],
    ["Nair", "Nanda", "Nagpal", "Narang"],
    ["Oberoi", "Oommen", "Om", "Ojha"],
    ["Patel", "Prasad", "Patil", "Pandey"],
    ["Qureshi", "Quadri", "Qazi", "Quresh"],
    ["Rao", "Reddy", "Rathore", "Roy"],
    ["Sharma", "Singh", "Shah", "Saxena"],
    ["Tiwari", "Tandon", "Thapar", "Thakur"],
    ["Upadhyay", "Uppal", "Uttamchandani", "Usgaonkar"],
    ["Verma", "Vyas", "Venkatesh", "Vora"],
    ["Wadhwa", "Walia", "Wadekar", "Wagh"],
    ["Xavier", "Xalxo", "Xess", "Xaxa"],
    ["Yadav", "Yogi", "Yohannan", "Yagnik"],
    ["Zaveri", "Zaidi", "Zubin", "Zutshi"],
];

static CITIES: &[(&str, &[&str])] = &[
    ("Delhi", &["Delhi", "New Delhi"]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur"]),
    ("Karnataka", &["Bangalore", "Mysore", "Hubli"]),
    ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai"]),
    ("Gujarat", &["Ahmedabad", "Surat", "Vadodara"]),
    ("Telangana", &["Hyderabad", "Warangal", "Nizamabad"]),
    ("Rajasthan", &["Jaipur", "Jodhpur", "Udaipur"]),
];

const UNKNOWN_CITY: &str = "Unknown City";

/// GST lookup that fabricates details from the GSTIN itself
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGstDirectory;

impl MockGstDirectory {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous form of [`GstLookup::lookup`]
    pub fn details_for(&self, gstin: &str) -> Option<GstDetails> {
        let gstin = Gstin::parse(gstin)?;
        let pan = gstin.pan().as_bytes();
        let state = gstin.state();

        // The first five PAN characters and the last are letters in a valid GSTIN
        let letter = |i: usize| usize::from(pan[i] - b'A');
        let pick = |i: usize, len: usize| usize::from(pan[i]) % len;

        let business = BUSINESS_NAMES[letter(0)][pick(2, 4)];
        let suffix = BUSINESS_SUFFIXES[pick(9, BUSINESS_SUFFIXES.len())];
        let name = FIRST_NAMES[letter(0)][pick(3, 4)];
        let surname = SURNAMES[letter(1)][pick(4, 4)];

        let city = CITIES
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, cities)| cities[pick(9, cities.len())])
            .unwrap_or(UNKNOWN_CITY);

        Some(GstDetails {
            name: name.to_string(),
            surname: surname.to_string(),
            business_name: format!("{} {}", business, suffix),
            state: state.to_string(),
            city: city.to_string(),
        })
    }
}

#[async_trait]
impl GstLookup for MockGstDirectory {
    async fn lookup(&self, gstin: &str) -> InvoiceResult<Option<GstDetails>> {
        Ok(self.details_for(gstin))
    }
}
