//! People credited on projects, in the order they are listed.

use super::Contributor;

/// Collaborators shown on the home page.
pub static CONTRIBUTORS: &[Contributor] = &[
    Contributor {
        key: "glovooker",
        name: "Gabriel Lobo",
        handle: "thegabrielobo",
        avatar: "portfolio/contributors/gabrielLobo.jpg",
        link: "https://www.linkedin.com/in/glovooker/",
    },
    Contributor {
        key: "woodsoul",
        name: "Franklin Castro",
        handle: "woodsoul",
        avatar: "portfolio/contributors/franklinCastro.jpg",
        link: "https://www.linkedin.com/in/franklin-castro-rodr%C3%ADguez/",
    },
    Contributor {
        key: "saturnxs",
        name: "Thomas Bermúdez",
        handle: "saturnxs",
        avatar: "portfolio/contributors/thomasBermudez.jpg",
        link: "https://www.linkedin.com/in/thomas-bermudez-mora/",
    },
    Contributor {
        key: "bistec",
        name: "Josías Hidalgo",
        handle: "bistec",
        avatar: "portfolio/contributors/josiasHidalgo.jpg",
        link: "https://www.linkedin.com/in/josias-hidalgo-b3238b21a/",
    },
    Contributor {
        key: "forlucho",
        name: "Luis Monge",
        handle: "forlucho",
        avatar: "portfolio/contributors/luisMonge.jpg",
        link: "https://www.linkedin.com/in/luis-monge-cort%C3%A9s-15574a211/",
    },
    Contributor {
        key: "anderlyn",
        name: "André López",
        handle: "anderlyn",
        avatar: "portfolio/contributors/andreLopez.jpg",
        link: "https://www.linkedin.com/in/alstoria/",
    },
    Contributor {
        key: "fabianMena",
        name: "Fabián Mena",
        handle: "fabianMena",
        avatar: "portfolio/contributors/fabianMena.jpg",
        link: "https://www.linkedin.com/in/fabi%C3%A1n-mena-garro-b25233202/",
    },
    Contributor {
        key: "eduardoFont",
        name: "Eduardo Font",
        handle: "eduardoFont",
        avatar: "portfolio/contributors/eduardoFont.jpg",
        link: "https://www.linkedin.com/in/eduardo-font-0ab75895/",
    },
    Contributor {
        key: "estefaniaRegidor",
        name: "Estefanía Regidor",
        handle: "estefaniaRegidor",
        avatar: "portfolio/contributors/estefaniaRegidor.jpg",
        link: "https://www.linkedin.com/in/estefania-regidor-1971a680/",
    },
    Contributor {
        key: "jocselynAguilar",
        name: "Jocselyn Aguilar",
        handle: "jocselynAguilar",
        avatar: "portfolio/contributors/jocselynAguilar.jpg",
        link: "https://www.linkedin.com/in/jocselyn-aguilar-a85749251/",
    },
    Contributor {
        key: "anabelleVelasquez",
        name: "Anabelle Velásquez",
        handle: "anabelleVelasquez",
        avatar: "portfolio/contributors/anabelleVelasquez.jpg",
        link: "https://www.linkedin.com/in/anabellevg/",
    },
    Contributor {
        key: "jeremyVillegas",
        name: "Jeremy Villegas",
        handle: "jeremyVillegas",
        avatar: "portfolio/contributors/jeremyVillegas.jpg",
        link: "https://www.linkedin.com/in/jeremy-alejandro-villegas-rodriguez-a60bab218/",
    },
    Contributor {
        key: "alvaroCastillo",
        name: "Álvaro Castillo",
        handle: "alvaroCastillo",
        avatar: "portfolio/contributors/alvaroCastillo.jpg",
        link: "https://github.com/lvroc",
    },
    Contributor {
        key: "andreyVillalobos",
        name: "Andrey Villalobos",
        handle: "andreyVillalobos",
        avatar: "portfolio/contributors/andreyVillalobos.jpg",
        link: "https://github.com/andrey2620",
    },
    Contributor {
        key: "brandonLen",
        name: "Brandon Len",
        handle: "brandonLen",
        avatar: "portfolio/contributors/brandonLen.jpg",
        link: "https://github.com/LenVr",
    },
    Contributor {
        key: "keylorGomez",
        name: "Keylor Gomez",
        handle: "keylorGomez",
        avatar: "portfolio/contributors/keylorGomez.jpg",
        link: "https://www.linkedin.com/in/keylorgomez/",
    },
    Contributor {
        key: "isaacSandoval",
        name: "Isaac Sandoval",
        handle: "isaacSandoval",
        avatar: "portfolio/contributors/isaacSandoval.jpg",
        link: "https://github.com/Zhepyrinus",
    },
    Contributor {
        key: "marcosSaenz",
        name: "Marcos Sáenz",
        handle: "marcosSaenz",
        avatar: "portfolio/contributors/marcosSaenz.jpg",
        link: "https://www.linkedin.com/in/msaenz97/",
    },
    Contributor {
        key: "sebastianLopez",
        name: "Sebastian López",
        handle: "sebastianLopez",
        avatar: "portfolio/contributors/sebastianLopez.jpg",
        link: "https://github.com/Nanez17",
    },
    Contributor {
        key: "monseSandi",
        name: "Monserrat Sandí",
        handle: "monseSandi",
        avatar: "portfolio/contributors/monseSandi.jpg",
        link: "https://www.linkedin.com/in/monserrat-sand%C3%AD-fonseca-ab7536230/",
    },
    Contributor {
        key: "luciaManzanares",
        name: "Lucía Manzanares",
        handle: "luciaManzanares",
        avatar: "portfolio/contributors/luciaManzanares.jpg",
        link: "https://www.linkedin.com/in/luc%C3%ADa-manzanares-ram%C3%ADrez-2931a9211/",
    },
    Contributor {
        key: "marceloAlbacete",
        name: "Marcelo Albacete de la Cruz",
        handle: "marceloAlbacete",
        avatar: "portfolio/contributors/marceloAlbacete.jpg",
        link: "https://www.linkedin.com/in/marceloalbacetedelacruz/",
    },
    Contributor {
        key: "arielMontero",
        name: "Ariel Montero",
        handle: "arielMontero",
        avatar: "portfolio/contributors/arielMontero.jpg",
        link: "https://www.linkedin.com/in/ariel-montero-monestel-74a337186/",
    },
    Contributor {
        key: "sergioMonge",
        name: "Sergio Monge",
        handle: "sergioMonge",
        avatar: "portfolio/contributors/sergioMonge.jpg",
        link: "https://www.linkedin.com/in/sergio-monge-49363050/",
    },
    Contributor {
        key: "luisNaranjo",
        name: "Luis Naranjo",
        handle: "luisNaranjo",
        avatar: "portfolio/contributors/luisNaranjo.jpg",
        link: "https://www.linkedin.com/in/luisnaranjozeledon/",
    },
    Contributor {
        key: "tomasDeCamino",
        name: "Tomás De Camino Beck",
        handle: "tomasDeCamino",
        avatar: "portfolio/contributors/tomasDeCamino.jpg",
        link: "https://www.linkedin.com/in/tomas-de-camino-beck-ph-d-a64887102/",
    },
];
