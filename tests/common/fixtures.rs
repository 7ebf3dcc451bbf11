#![allow(dead_code)]

/// Two rows under one section, the smallest complete checklist.
pub const BEFORE_START: &str = "\
// Aircraft Type = C172
// Checklist Type = Normal
#Before Start
-Battery..ON
-Avionics..ON
";

/// Every line kind the markup knows.
pub const FULL_C172: &str = "\
// Aircraft Type = C172
// Checklist Type = Normal
// Checklist Version = 2.1
// page_size = A5

#Before Start
-Preflight Inspection..COMPLETE
-Seats, Belts..ADJUST, LOCK
-Brakes..TEST, SET
+Parking Brake..SET
*Circuit Breakers
+Avionics..OFF
-Fuel Selector..BOTH

#Engine Start
=Cold Engine
-Mixture..RICH
-Throttle..OPEN 1/4 INCH
-Master Switch..ON
**Prime as required
+Primer..3 STROKES
-Beacon..ON
=Warm Engine
-Mixture..RICH

#Before Takeoff
-Flight Controls..FREE, CORRECT
-Instruments..CHECK
";

/// A header block followed by `sections`, each `(name, row count)`.
pub fn checklist_markup(header: &str, sections: &[(&str, usize)]) -> String {
    let mut markup = String::from(header);
    for (name, rows) in sections {
        markup.push_str(&format!("#{}\n", name));
        for i in 0..*rows {
            markup.push_str(&format!("-Item {}..CHECK\n", i + 1));
        }
    }
    markup
}
