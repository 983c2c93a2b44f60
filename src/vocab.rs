//! Controlled Vocabulary Module
//! Hand-curated lookup tables: crime-description -> severity category, and
//! victim-descent code -> long-form name. Built once at process start;
//! lookups are exact-match only, with a documented fallback.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::data::schema::UNKNOWN;

/// Fallback category for descriptions outside the vocabulary.
pub const OTHER_CATEGORY: &str = "Other";

/// Map a crime description to its severity category.
///
/// Case-sensitive, verbatim keys as they appear in the source feed; any
/// description not in the vocabulary is "Other".
pub fn crime_category(description: &str) -> &'static str {
    CRIME_CATEGORY_MAP
        .get(description)
        .copied()
        .unwrap_or(OTHER_CATEGORY)
}

/// Map a one-letter victim-descent code to its long-form name.
///
/// Closed vocabulary: codes outside the table come back as "Unknown".
pub fn descent_name(code: &str) -> &'static str {
    DESCENT_MAP.get(code).copied().unwrap_or(UNKNOWN)
}

lazy_static! {
    static ref DESCENT_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("A", "Other Asian"),
        ("B", "Black"),
        ("C", "Chinese"),
        ("D", "Cambodian"),
        ("F", "Filipino"),
        ("G", "Guamanian"),
        ("H", "Hispanic/Latin/Mexican"),
        ("I", "American Indian/Alaskan Native"),
        ("J", "Japanese"),
        ("K", "Korean"),
        ("L", "Laotian"),
        ("O", "Other"),
        ("P", "Pacific Islander"),
        ("S", "Samoan"),
        ("U", "Hawaiian"),
        ("V", "Vietnamese"),
        ("W", "White"),
        ("X", "Unknown"),
        ("Z", "Asian Indian"),
    ]);
    static ref CRIME_CATEGORY_MAP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();

        // Violent crimes
        for desc in [
            "BATTERY - SIMPLE ASSAULT",
            "ASSAULT WITH DEADLY WEAPON, AGGRAVATED ASSAULT",
            "INTIMATE PARTNER - SIMPLE ASSAULT",
            "INTIMATE PARTNER - AGGRAVATED ASSAULT",
            "BATTERY POLICE (SIMPLE)",
            "BATTERY WITH SEXUAL CONTACT",
            "ASSAULT WITH DEADLY WEAPON ON POLICE OFFICER",
            "CRIMINAL THREATS - NO WEAPON DISPLAYED",
            "CRIMINAL HOMICIDE",
            "ATTEMPTED ROBBERY",
            "ROBBERY",
            "OTHER ASSAULT",
            "KIDNAPPING",
            "KIDNAPPING - GRAND ATTEMPT",
            "CHILD ABUSE (PHYSICAL) - SIMPLE ASSAULT",
            "CHILD ABUSE (PHYSICAL) - AGGRAVATED ASSAULT",
            "CRM AGNST CHLD (13 OR UNDER) (14-15 & SUSP 10 YRS OLDER)",
            "RESISTING ARREST",
        ] {
            map.insert(desc, "Violent Crime");
        }

        // Property crimes
        for desc in [
            "VEHICLE - STOLEN",
            "BURGLARY FROM VEHICLE",
            "BURGLARY",
            "THEFT PLAIN - PETTY ($950 & UNDER)",
            "THEFT FROM MOTOR VEHICLE - PETTY ($950 & UNDER)",
            "THEFT FROM MOTOR VEHICLE - GRAND ($950.01 AND OVER)",
            "THEFT-GRAND ($950.01 & OVER)EXCPT,GUNS,FOWL,LIVESTK,PROD",
            "SHOPLIFTING - PETTY THEFT ($950 & UNDER)",
            "SHOPLIFTING-GRAND THEFT ($950.01 & OVER)",
            "BURGLARY, ATTEMPTED",
            "VEHICLE - ATTEMPT STOLEN",
            "BIKE - STOLEN",
            "BIKE - ATTEMPTED STOLEN",
            "THEFT, PERSON",
            "BURGLARY FROM VEHICLE, ATTEMPTED",
            "THEFT FROM MOTOR VEHICLE - ATTEMPT",
            "BOAT - STOLEN",
            "PICKPOCKET",
            "PICKPOCKET, ATTEMPT",
            "PURSE SNATCHING",
            "PURSE SNATCHING - ATTEMPT",
            "TILL TAP - PETTY ($950 & UNDER)",
            "TILL TAP - GRAND THEFT ($950.01 & OVER)",
            "THEFT, COIN MACHINE - PETTY ($950 & UNDER)",
            "THEFT, COIN MACHINE - GRAND ($950.01 & OVER)",
            "THEFT, COIN MACHINE - ATTEMPT",
            "THEFT PLAIN - ATTEMPT",
            "SHOPLIFTING - ATTEMPT",
            "EMBEZZLEMENT, PETTY THEFT ($950 & UNDER)",
            "DRIVING WITHOUT OWNER CONSENT (DWOC)",
            "ARSON",
        ] {
            map.insert(desc, "Property Crime");
        }

        // Public order crimes
        for desc in [
            "VANDALISM - FELONY ($400 & OVER, ALL CHURCH VANDALISMS)",
            "VANDALISM - MISDEAMEANOR ($399 OR UNDER)",
            "TRESPASSING",
            "BRANDISH WEAPON",
            "DISTURBING THE PEACE",
            "DISCHARGE FIREARMS/SHOTS FIRED",
            "SHOTS FIRED AT INHABITED DWELLING",
            "SHOTS FIRED AT MOVING VEHICLE, TRAIN OR AIRCRAFT",
            "THROWING OBJECT AT MOVING VEHICLE",
            "ILLEGAL DUMPING",
            "BLOCKING DOOR INDUCTION CENTER",
            "FAILURE TO YIELD",
            "FAILURE TO DISPERSE",
            "PEEPING TOM",
            "PROWLER",
            "DISRUPT SCHOOL",
            "WEAPONS POSSESSION/BOMBING",
            "FIREARMS EMERGENCY PROTECTIVE ORDER (FIREARMS EPO)",
            "FIREARMS RESTRAINING ORDER (FIREARMS RO)",
        ] {
            map.insert(desc, "Public Order Crime");
        }

        // Sexual offenses
        for desc in [
            "RAPE, FORCIBLE",
            "RAPE, ATTEMPTED",
            "ORAL COPULATION",
            "SODOMY/SEXUAL CONTACT B/W PENIS OF ONE PERS TO ANUS OTH",
            "SEXUAL PENETRATION W/FOREIGN OBJECT",
            "SEX,UNLAWFUL(INC MUTUAL CONSENT, PENETRATION W/ FRGN OBJ",
            "LEWD/LASCIVIOUS ACTS WITH CHILD",
            "LEWD CONDUCT",
            "CHILD ANNOYING (17YRS & UNDER)",
            "INDECENT EXPOSURE",
            "INCEST (SEXUAL ACTS BETWEEN BLOOD RELATIVES)",
            "BEASTIALITY, CRIME AGAINST NATURE SEXUAL ASSLT WITH ANIM",
        ] {
            map.insert(desc, "Sexual Offense");
        }

        // White collar crimes
        for desc in [
            "THEFT OF IDENTITY",
            "CREDIT CARDS, FRAUD USE ($950.01 & OVER)",
            "CREDIT CARDS, FRAUD USE ($950 & UNDER",
            "BUNCO, GRAND THEFT",
            "BUNCO, PETTY THEFT",
            "BUNCO, ATTEMPT",
            "DOCUMENT FORGERY / STOLEN FELONY",
            "DOCUMENT WORTHLESS ($200.01 & OVER)",
            "DOCUMENT WORTHLESS ($200 & UNDER)",
            "DISHONEST EMPLOYEE - GRAND THEFT",
            "DISHONEST EMPLOYEE - PETTY THEFT",
            "DISHONEST EMPLOYEE ATTEMPTED THEFT",
            "DEFRAUDING INNKEEPER/THEFT OF SERVICES, $950 & UNDER",
            "DEFRAUDING INNKEEPER/THEFT OF SERVICES, OVER $950.01",
            "EXTORTION",
            "EMBEZZLEMENT, GRAND THEFT ($950.01 & OVER)",
            "COUNTERFEIT",
            "FORGERY",
            "UNAUTHORIZED COMPUTER ACCESS",
            "GRAND THEFT / INSURANCE FRAUD",
        ] {
            map.insert(desc, "White Collar Crime");
        }

        // Miscellaneous descriptions mapped explicitly to Other
        for desc in [
            "OTHER MISCELLANEOUS CRIME",
            "VIOLATION OF RESTRAINING ORDER",
            "VIOLATION OF TEMPORARY RESTRAINING ORDER",
            "VIOLATION OF COURT ORDER",
            "SEX OFFENDER REGISTRANT OUT OF COMPLIANCE",
            "CHILD NEGLECT (SEE 300 W.I.C.)",
            "CHILD STEALING",
            "CHILD ABANDONMENT",
            "CHILD PORNOGRAPHY",
            "FALSE IMPRISONMENT",
            "FALSE POLICE REPORT",
            "CONTEMPT OF COURT",
            "THREATENING PHONE CALLS/LETTERS",
            "LYNCHING",
            "LYNCHING - ATTEMPTED",
            "HUMAN TRAFFICKING - COMMERCIAL SEX ACTS",
            "HUMAN TRAFFICKING - INVOLUNTARY SERVITUDE",
            "PANDERING",
            "PIMPING",
            "CONSPIRACY",
            "CONTRIBUTING",
            "BIGAMY",
            "BRIBERY",
            "TRAIN WRECKING",
            "DRUGS, TO A MINOR",
            "REPLICA FIREARMS(SALE,DISPLAY,MANUFACTURE OR DISTRIBUTE)",
            "DRUNK ROLL",
            "DRUNK ROLL - ATTEMPT",
        ] {
            map.insert(desc, OTHER_CATEGORY);
        }

        map
    };
}
