//! Work timeline, oldest first.

use super::WorkExperience;

macro_rules! logo {
    ($path:literal) => {
        concat!(
            "https://res.cloudinary.com/glovooker/image/upload/h_65/",
            $path
        )
    };
}

/// Timeline entries in chronological order.
pub static WORK_EXPERIENCE: &[WorkExperience] = &[
    WorkExperience {
        key: "threePillar",
        company: "3Pillar Global",
        year: "2021",
        logo: logo!("v1702810865/portfolio/clients/3pillar.png"),
    },
    WorkExperience {
        key: "ucenfotec",
        company: "UCenfotec",
        year: "2022 - Present",
        logo: logo!("v1702812111/portfolio/clients/cenfotec.png"),
    },
    WorkExperience {
        key: "mobydyg",
        company: "MobyDyg",
        year: "2022",
        logo: logo!("v1702810689/portfolio/clients/mobydyg.png"),
    },
    WorkExperience {
        key: "noir",
        company: "NOIR Technologies",
        year: "2022",
        logo: logo!("v1702811356/portfolio/clients/noir.png"),
    },
    WorkExperience {
        key: "mawi",
        company: "Mawi",
        year: "2022",
        logo: logo!("v1702811762/portfolio/clients/mawi.png"),
    },
    WorkExperience {
        key: "elViejo",
        company: "El Viejo",
        year: "2023",
        logo: logo!("v1702811225/portfolio/clients/azv.png"),
    },
    WorkExperience {
        key: "ivacus",
        company: "Ivacus",
        year: "2023",
        logo: logo!("v1702812223/portfolio/clients/ivacus.png"),
    },
    WorkExperience {
        key: "ibm",
        company: "IBM",
        year: "2023 - Present",
        logo: logo!("v1702810428/portfolio/clients/ibm.png"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const LOGO_BASE: &str = "https://res.cloudinary.com/glovooker/image/upload/h_65";

    #[test]
    fn test_logos_share_base() {
        for entry in WORK_EXPERIENCE {
            assert!(entry.logo.starts_with(LOGO_BASE), "{}", entry.company);
        }
    }
}
