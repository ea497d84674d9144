//! Static page text.

pub const APP_TITLE: &str = "Airline Satisfaction Prediction";

pub const HOME_TITLE: &str = "Airline Satisfaction Prediction Project ✈";
pub const HOME_WELCOME: &str = "Welcome!";
pub const HOME_DESCRIPTION: &str = "The dataset used in this project is the \"Airline Passenger \
Satisfaction\" dataset, which can be downloaded from Kaggle. The dataset contains information \
about airline passengers, including features such as flight distance, seat comfort, inflight \
entertainment, and more.";
pub const HOME_IMAGE_HEADING: &str = "Upload and Display an Image";
pub const IMAGE_CAPTION: &str = "Uploaded Image";

pub const OVERVIEW_TITLE: &str = "Data Overview";
pub const OVERVIEW_ABOUT: &str = "About the Dataset";
pub const OVERVIEW_INTRO: &str =
    "This dataset includes information about airline passengers, such as:";
pub const PREVIEW_HEADING: &str = "Preview of the Dataset:";
pub const SUMMARY_HEADING: &str = "Summary Statistics:";

/// (attribute, description) pairs for the "About the Dataset" list.
pub const COLUMN_GUIDE: [(&str, &str); 23] = [
    ("Gender", "Gender of the passengers (Female, Male)"),
    ("Customer Type", "The customer type (Loyal customer, disloyal customer)"),
    ("Age", "The actual age of the passengers"),
    (
        "Type of Travel",
        "Purpose of the flight of the passengers (Personal Travel, Business Travel)",
    ),
    ("Class", "Travel class in the plane of the passengers (Business, Eco, Eco Plus)"),
    ("Flight distance", "The flight distance of this journey"),
    (
        "Inflight wifi service",
        "Satisfaction level of the inflight wifi service (0: Not Applicable; 1-5)",
    ),
    (
        "Departure/Arrival time convenient",
        "Satisfaction level of Departure/Arrival time convenience",
    ),
    ("Ease of Online booking", "Satisfaction level of online booking"),
    ("Gate location", "Satisfaction level of Gate location"),
    ("Food and drink", "Satisfaction level of Food and drink"),
    ("Online boarding", "Satisfaction level of online boarding"),
    ("Seat comfort", "Satisfaction level of Seat comfort"),
    ("Inflight entertainment", "Satisfaction level of inflight entertainment"),
    ("On-board service", "Satisfaction level of On-board service"),
    ("Leg room service", "Satisfaction level of Leg room service"),
    ("Baggage handling", "Satisfaction level of baggage handling"),
    ("Check-in service", "Satisfaction level of Check-in service"),
    ("Inflight service", "Satisfaction level of inflight service"),
    ("Cleanliness", "Satisfaction level of Cleanliness"),
    ("Departure Delay in Minutes", "Minutes delayed when departure"),
    ("Arrival Delay in Minutes", "Minutes delayed when Arrival"),
    ("Satisfaction", "Airline satisfaction level (Satisfaction, neutral or dissatisfaction)"),
];

pub const EDA_TITLE: &str = "Exploratory Data Analysis 📊";
pub const EDA_SELECT_HEADING: &str = "Select a Visualization:";
pub const EDA_SELECT_LABEL: &str = "Choose visualization(s):";

pub const EXTRAS_TITLE: &str = "Useful Information";
pub const EXTRAS_HEADLINE: &str = "Airline Demand-Supply Imbalance is Good for Revenue, Tough on \
Customer Experience, Says J.D. Power";
pub const EXTRAS_BODY: [&str; 2] = [
    "ROY, Mich.: 10 May 2023 - A combination of soaring demand, limited supply, and surging \
airfares have helped airlines book record revenues during the past two quarters, but this \
golden age of enhanced revenues is coming at the expense of customer satisfaction. According to \
the J.D. Power 2023 North America Airline Satisfaction Study, customer satisfaction with major \
airlines is down significantly for a second consecutive year, introducing the risk of possible \
brand damage if the current pattern of price hikes, staffing shortages, and reduced routes \
continues.",
    "“If yield management were the only metric airlines needed to be successful in the long \
term, this would be a banner year for the industry because they are operating at peak economic \
efficiency,” said Michael Taylor, travel intelligence lead at J.D. Power. “From the customer \
perspective, however, that means planes are crowded, tickets are expensive, and flight \
availability is constrained.”",
];

pub const SIDEBAR_PAGE_LABEL: &str = "Select a Page";
pub const SIDEBAR_UPLOAD_LABEL: &str = "Upload your Airline Excel file";
pub const SIDEBAR_UPLOAD_ERROR: &str =
    "Error: Unable to read the uploaded file. Please upload a valid Excel file.";
pub const AWAITING_DATA: &str =
    "Upload an Airline Excel file from the sidebar to view this page.";
