// src/translations.rs
//! Localized labels for the two supported CV languages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Polish,
    English,
}

impl Language {
    pub const DEFAULT: Language = Language::Polish;

    /// Parse a language code; `None` for anything unsupported.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "pl" => Some(Language::Polish),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Like [`Language::from_code`] but falls back to the default language.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::English => "en",
        }
    }

    pub fn translation(&self) -> &'static Translation {
        match self {
            Language::Polish => &POLISH,
            Language::English => &ENGLISH,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub why: &'static str,
    pub education: &'static str,
    pub dates: &'static str,
    pub education_header: &'static str,
    pub skills: &'static str,
    pub certifications: &'static str,
    pub languages: &'static str,
    pub experience: &'static str,
    pub company_name: &'static str,
    pub position: &'static str,
    pub responsibilities: &'static str,
    pub technologies: &'static str,
    pub blind_name: &'static str,
    /// Company phrase used in blind mode; `{industry}` is substituted.
    pub blind_company: &'static str,
    pub rodo: &'static str,
}

impl Translation {
    pub fn for_code(code: &str) -> &'static Translation {
        Language::resolve(code).translation()
    }

    pub fn blind_company_for(&self, industry: &str) -> String {
        self.blind_company.replace("{industry}", industry)
    }
}

pub static POLISH: Translation = Translation {
    why: "DLACZEGO",
    education: "EDUKACJA",
    dates: "Daty",
    education_header: "Edukacja",
    skills: "UMIEJĘTNOŚCI",
    certifications: "CERTYFIKATY",
    languages: "JĘZYKI",
    experience: "DOŚWIADCZENIE",
    company_name: "Nazwa firmy:",
    position: "Stanowisko:",
    responsibilities: "Zakres obowiązków:",
    technologies: "Technologie:",
    blind_name: "Kandydat",
    blind_company: "Firma z branży {industry}",
    rodo: concat!(
        "Wyrażam zgodę na przetwarzanie moich danych osobowych zawartych w przekazanych ",
        "przeze mnie dokumentach przez B2B.net S.A. w celach związanych z moim udziałem ",
        "w niniejszym procesie rekrutacyjnym. Ponadto przyjmuję do wiadomości i oświadczam, ",
        "że zrozumiałem/am, iż administratorem moich danych osobowych zebranych na podstawie ",
        "niniejszej zgody jest B2B.net S.A. z siedzibą w Warszawie, Al. Jerozolimskie 180, ",
        "02-486 Warszawa. Dane będą przetwarzane zgodnie z przepisami Rozporządzenia Parlamentu ",
        "Europejskiego i Rady (UE) 2016/679 z dnia 27 kwietnia 2016 r. w sprawie ochrony osób ",
        "fizycznych w związku z przetwarzaniem danych osobowych i w sprawie swobodnego przepływu ",
        "takich danych (dalej „RODO\"). Dane przekazałem/am dobrowolnie, przy czym przysługuje mi ",
        "prawo do cofnięcia zgody na przetwarzanie danych w dowolnym momencie poprzez wysłanie ",
        "żądania na adres: rekrutacja@b2bnetwork.pl. Podanie danych jest niezbędne do realizacji ",
        "ww. celu, dlatego żądanie ich usunięcia jest równoznaczne z rezygnacją z dalszego udziału ",
        "w procesie rekrutacyjnym. Przysługuje mi również prawo dostępu do treści moich danych oraz ",
        "ich poprawiania w każdym czasie. Jestem również świadomy/świadoma, że odbiorcami moich danych ",
        "osobowych mogą być wyłącznie podmioty upoważnione na podstawie przepisów prawa, a także ",
        "upoważnione na podstawie umów zawartych przez B2B.net S.A., w szczególności z klientami."
    ),
};

pub static ENGLISH: Translation = Translation {
    why: "WHY",
    education: "EDUCATION",
    dates: "Dates",
    education_header: "Education",
    skills: "SKILLS",
    certifications: "CERTIFICATIONS",
    languages: "LANGUAGES",
    experience: "EXPERIENCE",
    company_name: "Company:",
    position: "Position:",
    responsibilities: "Responsibilities:",
    technologies: "Technologies:",
    blind_name: "Candidate",
    blind_company: "Company from {industry} industry",
    rodo: concat!(
        "I hereby consent to the processing of my personal data contained in the documents ",
        "submitted by me by B2B.net S.A. for purposes related to my participation in this ",
        "recruitment process. Furthermore, I acknowledge and declare that I have understood ",
        "that the administrator of my personal data collected on the basis of this consent is ",
        "B2B.net S.A. with its registered office in Warsaw, Al. Jerozolimskie 180, 02-486 Warsaw. ",
        "The data will be processed in accordance with the provisions of Regulation (EU) 2016/679 ",
        "of the European Parliament and of the Council of 27 April 2016 on the protection of natural ",
        "persons with regard to the processing of personal data and on the free movement of such data ",
        "(hereinafter \"GDPR\"). I have provided the data voluntarily, and I have the right to withdraw ",
        "my consent to data processing at any time by sending a request to: rekrutacja@b2bnetwork.pl. ",
        "The provision of data is necessary for the realization of the above purpose, therefore requesting ",
        "their deletion is tantamount to resignation from further participation in the recruitment process. ",
        "I also have the right to access the content of my data and to correct them at any time. I am also ",
        "aware that the recipients of my personal data may only be entities authorized under the law, as well ",
        "as authorized under contracts concluded by B2B.net S.A., in particular with customers."
    ),
};
