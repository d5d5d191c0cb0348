//! Embedded reference tables.
//!
//! Two independent tables, mirroring the two external references the tool
//! depends on: the ISO 3166-1 alpha-2 registry (code to display name) and
//! the country-to-continent mapping. The continent table deliberately omits
//! a handful of territories (Antarctic dependencies, Western Sahara, and a
//! few small territories) that the upstream mapping does not classify, so a
//! code can be known to the registry and still fail continent resolution.

use super::Continent;

/// ISO 3166-1 alpha-2 code to country display name.
pub(super) const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("AE", "United Arab Emirates"),
    ("AF", "Afghanistan"),
    ("AG", "Antigua and Barbuda"),
    ("AI", "Anguilla"),
    ("AL", "Albania"),
    ("AM", "Armenia"),
    ("AO", "Angola"),
    ("AQ", "Antarctica"),
    ("AR", "Argentina"),
    ("AS", "American Samoa"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("AW", "Aruba"),
    ("AX", "\u{c5}land Islands"),
    ("AZ", "Azerbaijan"),
    ("BA", "Bosnia and Herzegovina"),
    ("BB", "Barbados"),
    ("BD", "Bangladesh"),
    ("BE", "Belgium"),
    ("BF", "Burkina Faso"),
    ("BG", "Bulgaria"),
    ("BH", "Bahrain"),
    ("BI", "Burundi"),
    ("BJ", "Benin"),
    ("BL", "Saint Barth\u{e9}lemy"),
    ("BM", "Bermuda"),
    ("BN", "Brunei Darussalam"),
    ("BO", "Bolivia, Plurinational State of"),
    ("BQ", "Bonaire, Sint Eustatius and Saba"),
    ("BR", "Brazil"),
    ("BS", "Bahamas"),
    ("BT", "Bhutan"),
    ("BV", "Bouvet Island"),
    ("BW", "Botswana"),
    ("BY", "Belarus"),
    ("BZ", "Belize"),
    ("CA", "Canada"),
    ("CC", "Cocos (Keeling) Islands"),
    ("CD", "Congo, The Democratic Republic of the"),
    ("CF", "Central African Republic"),
    ("CG", "Congo"),
    ("CH", "Switzerland"),
    ("CI", "C\u{f4}te d'Ivoire"),
    ("CK", "Cook Islands"),
    ("CL", "Chile"),
    ("CM", "Cameroon"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CU", "Cuba"),
    ("CV", "Cabo Verde"),
    ("CW", "Cura\u{e7}ao"),
    ("CX", "Christmas Island"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DJ", "Djibouti"),
    ("DK", "Denmark"),
    ("DM", "Dominica"),
    ("DO", "Dominican Republic"),
    ("DZ", "Algeria"),
    ("EC", "Ecuador"),
    ("EE", "Estonia"),
    ("EG", "Egypt"),
    ("EH", "Western Sahara"),
    ("ER", "Eritrea"),
    ("ES", "Spain"),
    ("ET", "Ethiopia"),
    ("FI", "Finland"),
    ("FJ", "Fiji"),
    ("FK", "Falkland Islands (Malvinas)"),
    ("FM", "Micronesia, Federated States of"),
    ("FO", "Faroe Islands"),
    ("FR", "France"),
    ("GA", "Gabon"),
    ("GB", "United Kingdom"),
    ("GD", "Grenada"),
    ("GE", "Georgia"),
    ("GF", "French Guiana"),
    ("GG", "Guernsey"),
    ("GH", "Ghana"),
    ("GI", "Gibraltar"),
    ("GL", "Greenland"),
    ("GM", "Gambia"),
    ("GN", "Guinea"),
    ("GP", "Guadeloupe"),
    ("GQ", "Equatorial Guinea"),
    ("GR", "Greece"),
    ("GS", "South Georgia and the South Sandwich Islands"),
    ("GT", "Guatemala"),
    ("GU", "Guam"),
    ("GW", "Guinea-Bissau"),
    ("GY", "Guyana"),
    ("HK", "Hong Kong"),
    ("HM", "Heard Island and McDonald Islands"),
    ("HN", "Honduras"),
    ("HR", "Croatia"),
    ("HT", "Haiti"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IM", "Isle of Man"),
    ("IN", "India"),
    ("IO", "British Indian Ocean Territory"),
    ("IQ", "Iraq"),
    ("IR", "Iran, Islamic Republic of"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JE", "Jersey"),
    ("JM", "Jamaica"),
    ("JO", "Jordan"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KG", "Kyrgyzstan"),
    ("KH", "Cambodia"),
    ("KI", "Kiribati"),
    ("KM", "Comoros"),
    ("KN", "Saint Kitts and Nevis"),
    ("KP", "Korea, Democratic People's Republic of"),
    ("KR", "Korea, Republic of"),
    ("KW", "Kuwait"),
    ("KY", "Cayman Islands"),
    ("KZ", "Kazakhstan"),
    ("LA", "Lao People's Democratic Republic"),
    ("LB", "Lebanon"),
    ("LC", "Saint Lucia"),
    ("LI", "Liechtenstein"),
    ("LK", "Sri Lanka"),
    ("LR", "Liberia"),
    ("LS", "Lesotho"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("LY", "Libya"),
    ("MA", "Morocco"),
    ("MC", "Monaco"),
    ("MD", "Moldova, Republic of"),
    ("ME", "Montenegro"),
    ("MF", "Saint Martin (French part)"),
    ("MG", "Madagascar"),
    ("MH", "Marshall Islands"),
    ("MK", "North Macedonia"),
    ("ML", "Mali"),
    ("MM", "Myanmar"),
    ("MN", "Mongolia"),
    ("MO", "Macao"),
    ("MP", "Northern Mariana Islands"),
    ("MQ", "Martinique"),
    ("MR", "Mauritania"),
    ("MS", "Montserrat"),
    ("MT", "Malta"),
    ("MU", "Mauritius"),
    ("MV", "Maldives"),
    ("MW", "Malawi"),
    ("MX", "Mexico"),
    ("MY", "Malaysia"),
    ("MZ", "Mozambique"),
    ("NA", "Namibia"),
    ("NC", "New Caledonia"),
    ("NE", "Niger"),
    ("NF", "Norfolk Island"),
    ("NG", "Nigeria"),
    ("NI", "Nicaragua"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NP", "Nepal"),
    ("NR", "Nauru"),
    ("NU", "Niue"),
    ("NZ", "New Zealand"),
    ("OM", "Oman"),
    ("PA", "Panama"),
    ("PE", "Peru"),
    ("PF", "French Polynesia"),
    ("PG", "Papua New Guinea"),
    ("PH", "Philippines"),
    ("PK", "Pakistan"),
    ("PL", "Poland"),
    ("PM", "Saint Pierre and Miquelon"),
    ("PN", "Pitcairn"),
    ("PR", "Puerto Rico"),
    ("PS", "Palestine, State of"),
    ("PT", "Portugal"),
    ("PW", "Palau"),
    ("PY", "Paraguay"),
    ("QA", "Qatar"),
    ("RE", "R\u{e9}union"),
    ("RO", "Romania"),
    ("RS", "Serbia"),
    ("RU", "Russian Federation"),
    ("RW", "Rwanda"),
    ("SA", "Saudi Arabia"),
    ("SB", "Solomon Islands"),
    ("SC", "Seychelles"),
    ("SD", "Sudan"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("SH", "Saint Helena, Ascension and Tristan da Cunha"),
    ("SI", "Slovenia"),
    ("SJ", "Svalbard and Jan Mayen"),
    ("SK", "Slovakia"),
    ("SL", "Sierra Leone"),
    ("SM", "San Marino"),
    ("SN", "Senegal"),
    ("SO", "Somalia"),
    ("SR", "Suriname"),
    ("SS", "South Sudan"),
    ("ST", "Sao Tome and Principe"),
    ("SV", "El Salvador"),
    ("SX", "Sint Maarten (Dutch part)"),
    ("SY", "Syrian Arab Republic"),
    ("SZ", "Eswatini"),
    ("TC", "Turks and Caicos Islands"),
    ("TD", "Chad"),
    ("TF", "French Southern Territories"),
    ("TG", "Togo"),
    ("TH", "Thailand"),
    ("TJ", "Tajikistan"),
    ("TK", "Tokelau"),
    ("TL", "Timor-Leste"),
    ("TM", "Turkmenistan"),
    ("TN", "Tunisia"),
    ("TO", "Tonga"),
    ("TR", "Turkey"),
    ("TT", "Trinidad and Tobago"),
    ("TV", "Tuvalu"),
    ("TW", "Taiwan, Province of China"),
    ("TZ", "Tanzania, United Republic of"),
    ("UA", "Ukraine"),
    ("UG", "Uganda"),
    ("UM", "United States Minor Outlying Islands"),
    ("US", "United States"),
    ("UY", "Uruguay"),
    ("UZ", "Uzbekistan"),
    ("VA", "Holy See (Vatican City State)"),
    ("VC", "Saint Vincent and the Grenadines"),
    ("VE", "Venezuela, Bolivarian Republic of"),
    ("VG", "Virgin Islands, British"),
    ("VI", "Virgin Islands, U.S."),
    ("VN", "Viet Nam"),
    ("VU", "Vanuatu"),
    ("WF", "Wallis and Futuna"),
    ("WS", "Samoa"),
    ("YE", "Yemen"),
    ("YT", "Mayotte"),
    ("ZA", "South Africa"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];

/// ISO 3166-1 alpha-2 code to continent.
pub(super) const COUNTRY_CONTINENTS: &[(&str, Continent)] = &[
    ("AD", Continent::Europe),
    ("AE", Continent::Asia),
    ("AF", Continent::Asia),
    ("AG", Continent::NorthAmerica),
    ("AI", Continent::NorthAmerica),
    ("AL", Continent::Europe),
    ("AM", Continent::Asia),
    ("AO", Continent::Africa),
    ("AR", Continent::SouthAmerica),
    ("AS", Continent::Oceania),
    ("AT", Continent::Europe),
    ("AU", Continent::Oceania),
    ("AW", Continent::NorthAmerica),
    ("AX", Continent::Europe),
    ("AZ", Continent::Asia),
    ("BA", Continent::Europe),
    ("BB", Continent::NorthAmerica),
    ("BD", Continent::Asia),
    ("BE", Continent::Europe),
    ("BF", Continent::Africa),
    ("BG", Continent::Europe),
    ("BH", Continent::Asia),
    ("BI", Continent::Africa),
    ("BJ", Continent::Africa),
    ("BL", Continent::NorthAmerica),
    ("BM", Continent::NorthAmerica),
    ("BN", Continent::Asia),
    ("BO", Continent::SouthAmerica),
    ("BQ", Continent::NorthAmerica),
    ("BR", Continent::SouthAmerica),
    ("BS", Continent::NorthAmerica),
    ("BT", Continent::Asia),
    ("BW", Continent::Africa),
    ("BY", Continent::Europe),
    ("BZ", Continent::NorthAmerica),
    ("CA", Continent::NorthAmerica),
    ("CC", Continent::Asia),
    ("CD", Continent::Africa),
    ("CF", Continent::Africa),
    ("CG", Continent::Africa),
    ("CH", Continent::Europe),
    ("CI", Continent::Africa),
    ("CK", Continent::Oceania),
    ("CL", Continent::SouthAmerica),
    ("CM", Continent::Africa),
    ("CN", Continent::Asia),
    ("CO", Continent::SouthAmerica),
    ("CR", Continent::NorthAmerica),
    ("CU", Continent::NorthAmerica),
    ("CV", Continent::Africa),
    ("CW", Continent::NorthAmerica),
    ("CX", Continent::Asia),
    ("CY", Continent::Asia),
    ("CZ", Continent::Europe),
    ("DE", Continent::Europe),
    ("DJ", Continent::Africa),
    ("DK", Continent::Europe),
    ("DM", Continent::NorthAmerica),
    ("DO", Continent::NorthAmerica),
    ("DZ", Continent::Africa),
    ("EC", Continent::SouthAmerica),
    ("EE", Continent::Europe),
    ("EG", Continent::Africa),
    ("ER", Continent::Africa),
    ("ES", Continent::Europe),
    ("ET", Continent::Africa),
    ("FI", Continent::Europe),
    ("FJ", Continent::Oceania),
    ("FK", Continent::SouthAmerica),
    ("FM", Continent::Oceania),
    ("FO", Continent::Europe),
    ("FR", Continent::Europe),
    ("GA", Continent::Africa),
    ("GB", Continent::Europe),
    ("GD", Continent::NorthAmerica),
    ("GE", Continent::Asia),
    ("GF", Continent::SouthAmerica),
    ("GG", Continent::Europe),
    ("GH", Continent::Africa),
    ("GI", Continent::Europe),
    ("GL", Continent::NorthAmerica),
    ("GM", Continent::Africa),
    ("GN", Continent::Africa),
    ("GP", Continent::NorthAmerica),
    ("GQ", Continent::Africa),
    ("GR", Continent::Europe),
    ("GT", Continent::NorthAmerica),
    ("GU", Continent::Oceania),
    ("GW", Continent::Africa),
    ("GY", Continent::SouthAmerica),
    ("HK", Continent::Asia),
    ("HN", Continent::NorthAmerica),
    ("HR", Continent::Europe),
    ("HT", Continent::NorthAmerica),
    ("HU", Continent::Europe),
    ("ID", Continent::Asia),
    ("IE", Continent::Europe),
    ("IL", Continent::Asia),
    ("IM", Continent::Europe),
    ("IN", Continent::Asia),
    ("IO", Continent::Asia),
    ("IQ", Continent::Asia),
    ("IR", Continent::Asia),
    ("IS", Continent::Europe),
    ("IT", Continent::Europe),
    ("JE", Continent::Europe),
    ("JM", Continent::NorthAmerica),
    ("JO", Continent::Asia),
    ("JP", Continent::Asia),
    ("KE", Continent::Africa),
    ("KG", Continent::Asia),
    ("KH", Continent::Asia),
    ("KI", Continent::Oceania),
    ("KM", Continent::Africa),
    ("KN", Continent::NorthAmerica),
    ("KP", Continent::Asia),
    ("KR", Continent::Asia),
    ("KW", Continent::Asia),
    ("KY", Continent::NorthAmerica),
    ("KZ", Continent::Asia),
    ("LA", Continent::Asia),
    ("LB", Continent::Asia),
    ("LC", Continent::NorthAmerica),
    ("LI", Continent::Europe),
    ("LK", Continent::Asia),
    ("LR", Continent::Africa),
    ("LS", Continent::Africa),
    ("LT", Continent::Europe),
    ("LU", Continent::Europe),
    ("LV", Continent::Europe),
    ("LY", Continent::Africa),
    ("MA", Continent::Africa),
    ("MC", Continent::Europe),
    ("MD", Continent::Europe),
    ("ME", Continent::Europe),
    ("MF", Continent::NorthAmerica),
    ("MG", Continent::Africa),
    ("MH", Continent::Oceania),
    ("MK", Continent::Europe),
    ("ML", Continent::Africa),
    ("MM", Continent::Asia),
    ("MN", Continent::Asia),
    ("MO", Continent::Asia),
    ("MP", Continent::Oceania),
    ("MQ", Continent::NorthAmerica),
    ("MR", Continent::Africa),
    ("MS", Continent::NorthAmerica),
    ("MT", Continent::Europe),
    ("MU", Continent::Africa),
    ("MV", Continent::Asia),
    ("MW", Continent::Africa),
    ("MX", Continent::NorthAmerica),
    ("MY", Continent::Asia),
    ("MZ", Continent::Africa),
    ("NA", Continent::Africa),
    ("NC", Continent::Oceania),
    ("NE", Continent::Africa),
    ("NF", Continent::Oceania),
    ("NG", Continent::Africa),
    ("NI", Continent::NorthAmerica),
    ("NL", Continent::Europe),
    ("NO", Continent::Europe),
    ("NP", Continent::Asia),
    ("NR", Continent::Oceania),
    ("NU", Continent::Oceania),
    ("NZ", Continent::Oceania),
    ("OM", Continent::Asia),
    ("PA", Continent::NorthAmerica),
    ("PE", Continent::SouthAmerica),
    ("PF", Continent::Oceania),
    ("PG", Continent::Oceania),
    ("PH", Continent::Asia),
    ("PK", Continent::Asia),
    ("PL", Continent::Europe),
    ("PM", Continent::NorthAmerica),
    ("PR", Continent::NorthAmerica),
    ("PS", Continent::Asia),
    ("PT", Continent::Europe),
    ("PW", Continent::Oceania),
    ("PY", Continent::SouthAmerica),
    ("QA", Continent::Asia),
    ("RE", Continent::Africa),
    ("RO", Continent::Europe),
    ("RS", Continent::Europe),
    ("RU", Continent::Europe),
    ("RW", Continent::Africa),
    ("SA", Continent::Asia),
    ("SB", Continent::Oceania),
    ("SC", Continent::Africa),
    ("SD", Continent::Africa),
    ("SE", Continent::Europe),
    ("SG", Continent::Asia),
    ("SH", Continent::Africa),
    ("SI", Continent::Europe),
    ("SJ", Continent::Europe),
    ("SK", Continent::Europe),
    ("SL", Continent::Africa),
    ("SM", Continent::Europe),
    ("SN", Continent::Africa),
    ("SO", Continent::Africa),
    ("SR", Continent::SouthAmerica),
    ("SS", Continent::Africa),
    ("ST", Continent::Africa),
    ("SV", Continent::NorthAmerica),
    ("SY", Continent::Asia),
    ("SZ", Continent::Africa),
    ("TC", Continent::NorthAmerica),
    ("TD", Continent::Africa),
    ("TG", Continent::Africa),
    ("TH", Continent::Asia),
    ("TJ", Continent::Asia),
    ("TK", Continent::Oceania),
    ("TM", Continent::Asia),
    ("TN", Continent::Africa),
    ("TO", Continent::Oceania),
    ("TR", Continent::Asia),
    ("TT", Continent::NorthAmerica),
    ("TV", Continent::Oceania),
    ("TW", Continent::Asia),
    ("TZ", Continent::Africa),
    ("UA", Continent::Europe),
    ("UG", Continent::Africa),
    ("US", Continent::NorthAmerica),
    ("UY", Continent::SouthAmerica),
    ("UZ", Continent::Asia),
    ("VC", Continent::NorthAmerica),
    ("VE", Continent::SouthAmerica),
    ("VG", Continent::NorthAmerica),
    ("VI", Continent::NorthAmerica),
    ("VN", Continent::Asia),
    ("VU", Continent::Oceania),
    ("WF", Continent::Oceania),
    ("WS", Continent::Oceania),
    ("YE", Continent::Asia),
    ("YT", Continent::Africa),
    ("ZA", Continent::Africa),
    ("ZM", Continent::Africa),
    ("ZW", Continent::Africa),
];
