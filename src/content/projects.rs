//! The project showcase, in display order.

use super::tags::{
    ANGULAR, APOLLO, AWS, BOOTSTRAP, CSHARP, CSS, DGRAPH, DOTNET, FIGMA, FIREBASE, GRAPHQL, HTML,
    JAVA, JAVASCRIPT, LIBGDX, MATERIAL_UI, MATHEMATICA, MONGODB, MYSQL, NODE, PHP, REACT,
    REACT_NATIVE, REDUX, SQL_SERVER, TYPESCRIPT,
};
use super::{Category, Project, ProjectLinks};

const OWNER: &[&str] = &["glovooker"];

/// Every showcased project. Indices are public addresses; append only.
pub static PROJECTS: &[Project] = &[
    Project {
        key: "engage360",
        category: Category::WebApp,
        tags: &[REACT, TYPESCRIPT, MATERIAL_UI, GRAPHQL, DGRAPH, APOLLO],
        cover: "portfolio/projects/engage360.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "easylist",
        category: Category::WebApp,
        tags: &[HTML, CSS, JAVASCRIPT, BOOTSTRAP, CSHARP, DOTNET, SQL_SERVER],
        cover: "portfolio/projects/easylist.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "cenfotecoKingdoms",
        category: Category::Game,
        tags: &[JAVA, LIBGDX],
        cover: "portfolio/projects/cenfotecoKingdoms.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "elViejo",
        category: Category::MobileApp,
        tags: &[REACT, TYPESCRIPT, REDUX, REACT_NATIVE, MATERIAL_UI, MATHEMATICA],
        cover: "portfolio/projects/elViejo.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "mawi",
        category: Category::WebApp,
        tags: &[REACT, TYPESCRIPT],
        cover: "portfolio/projects/mawi.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "staries",
        category: Category::WebApp,
        tags: &[PHP, NODE, FIREBASE, REACT, TYPESCRIPT],
        cover: "portfolio/projects/staries.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "mobydygSite",
        category: Category::Website,
        tags: &[ANGULAR, TYPESCRIPT, FIGMA],
        cover: "portfolio/projects/mobydygSite.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "mobydygCore",
        category: Category::WebApp,
        tags: &[ANGULAR, TYPESCRIPT, AWS, MYSQL],
        cover: "portfolio/projects/mobydygCore.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "mobydygBackoffice",
        category: Category::WebApp,
        tags: &[ANGULAR, TYPESCRIPT, AWS, MYSQL, FIGMA],
        cover: "portfolio/projects/mobydygBackoffice.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "tournament",
        category: Category::WebApp,
        tags: &[REACT, DOTNET, CSHARP, SQL_SERVER, FIGMA],
        cover: "portfolio/projects/tournament.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "moka",
        category: Category::WebApp,
        tags: &[HTML, CSS, JAVASCRIPT, NODE, MONGODB, FIGMA],
        cover: "portfolio/projects/moka.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "tummy",
        category: Category::WebApp,
        tags: &[HTML, CSS, JAVASCRIPT, PHP],
        cover: "portfolio/projects/tummy.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "cleverSolutions",
        category: Category::Website,
        tags: &[HTML, CSS, JAVASCRIPT],
        cover: "portfolio/projects/cleverSolutions.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "personalBrand",
        category: Category::Branding,
        tags: &[FIGMA],
        cover: "portfolio/projects/personalBrand.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "iki",
        category: Category::UiDesign,
        tags: &[FIGMA],
        cover: "portfolio/projects/iki.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
    Project {
        key: "findingTheMeaning",
        category: Category::Branding,
        tags: &[FIGMA],
        cover: "portfolio/projects/findingTheMeaning.png",
        links: ProjectLinks::NONE,
        contributors: OWNER,
    },
];
