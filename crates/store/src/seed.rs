//! Built-in sample corpus.
//!
//! Intentionally partial: each book states its full canonical chapter count
//! but only a few chapters, and a sparse selection of verses, are populated.

use scripture_common::Testament;

use crate::model::{Book, Chapter};

pub(crate) fn books() -> Vec<Book> {
    vec![
        genesis(),
        exodus(),
        psalms(),
        isaiah(),
        matthew(),
        john(),
        romans(),
    ]
}

fn genesis() -> Book {
    Book::new("Genesis", Testament::Old, "Law", 50)
        .with_summary(
            "The beginnings of the world, humanity, sin, and the covenant family of Abraham.",
        )
        .with_author("Moses")
        .with_date_written("c. 1445-1405 BC")
        .with_chapter(
            Chapter::new(
                1,
                "God creates the heavens, the earth, and all living things in six days.",
            )
            .with_themes(["Creation", "Sovereignty of God", "Humanity"])
            .with_key_verses([1, 27])
            .with_verse(1, "In the beginning God created the heavens and the earth.")
            .with_verse(
                2,
                "Now the earth was formless and empty, darkness was over the surface of the deep, and the Spirit of God was hovering over the waters.",
            )
            .with_verse(3, "And God said, \"Let there be light,\" and there was light.")
            .with_verse(
                26,
                "Then God said, \"Let us make mankind in our image, in our likeness.\"",
            )
            .with_verse(
                27,
                "So God created mankind in his own image, in the image of God he created them; male and female he created them.",
            )
            .with_verse(31, "God saw all that he had made, and it was very good."),
        )
        .with_chapter(
            Chapter::new(
                3,
                "The serpent's temptation, the first sin, and the promise of a deliverer.",
            )
            .with_themes(["Sin", "Temptation", "Promise"])
            .with_key_verses([15])
            .with_verse(
                6,
                "When the woman saw that the fruit of the tree was good for food and pleasing to the eye, she took some and ate it.",
            )
            .with_verse(
                15,
                "And I will put enmity between you and the woman, and between your offspring and hers; he will crush your head, and you will strike his heel.",
            ),
        )
}

fn exodus() -> Book {
    Book::new("Exodus", Testament::Old, "Law", 40)
        .with_summary("Israel's deliverance from Egypt and the giving of the law at Sinai.")
        .with_author("Moses")
        .with_date_written("c. 1445-1405 BC")
        .with_chapter(
            Chapter::new(20, "The Ten Commandments are given at Mount Sinai.")
                .with_themes(["Law", "Covenant", "Worship"])
                .with_key_verses([2, 3])
                .with_verse(
                    2,
                    "I am the Lord your God, who brought you out of Egypt, out of the land of slavery.",
                )
                .with_verse(3, "You shall have no other gods before me.")
                .with_verse(12, "Honor your father and your mother."),
        )
}

fn psalms() -> Book {
    Book::new("Psalms", Testament::Old, "Poetry", 150)
        .with_summary("Israel's songs and prayers of praise, lament, and trust.")
        .with_author("David and others")
        .with_date_written("c. 1440-586 BC")
        .with_chapter(
            Chapter::new(23, "The Lord as shepherd, guide, and host.")
                .with_themes(["Trust", "Provision", "Comfort"])
                .with_key_verses([1, 4])
                .with_verse(1, "The Lord is my shepherd, I lack nothing.")
                .with_verse(
                    2,
                    "He makes me lie down in green pastures, he leads me beside quiet waters.",
                )
                .with_verse(
                    3,
                    "He refreshes my soul. He guides me along the right paths for his name's sake.",
                )
                .with_verse(
                    4,
                    "Even though I walk through the darkest valley, I will fear no evil, for you are with me.",
                )
                .with_verse(
                    6,
                    "Surely your goodness and love will follow me all the days of my life, and I will dwell in the house of the Lord forever.",
                ),
        )
}

fn isaiah() -> Book {
    Book::new("Isaiah", Testament::Old, "Major Prophets", 66)
        .with_summary("Judgment and hope for Judah, and the promise of the suffering servant.")
        .with_author("Isaiah")
        .with_date_written("c. 700-681 BC")
        .with_chapter(
            Chapter::new(53, "The suffering servant bears the sins of many.")
                .with_themes(["Atonement", "Suffering", "Messiah"])
                .with_key_verses([5])
                .with_verse(
                    5,
                    "But he was pierced for our transgressions, he was crushed for our iniquities; the punishment that brought us peace was on him, and by his wounds we are healed.",
                )
                .with_verse(
                    6,
                    "We all, like sheep, have gone astray, each of us has turned to our own way.",
                ),
        )
}

fn matthew() -> Book {
    Book::new("Matthew", Testament::New, "Gospels", 28)
        .with_summary("Jesus presented as the promised Messiah and King.")
        .with_author("Matthew")
        .with_date_written("c. AD 50-70")
        .with_chapter(
            Chapter::new(5, "The Sermon on the Mount begins with the Beatitudes.")
                .with_themes(["Kingdom of Heaven", "Discipleship", "Blessing"])
                .with_key_verses([3, 14])
                .with_verse(
                    3,
                    "Blessed are the poor in spirit, for theirs is the kingdom of heaven.",
                )
                .with_verse(
                    9,
                    "Blessed are the peacemakers, for they will be called children of God.",
                )
                .with_verse(
                    14,
                    "You are the light of the world. A town built on a hill cannot be hidden.",
                )
                .with_verse(
                    16,
                    "In the same way, let your light shine before others, that they may see your good deeds and glorify your Father in heaven.",
                ),
        )
        .with_chapter(
            Chapter::new(28, "The resurrection and the Great Commission.")
                .with_themes(["Resurrection", "Mission"])
                .with_key_verses([19])
                .with_verse(6, "He is not here; he has risen, just as he said.")
                .with_verse(
                    19,
                    "Therefore go and make disciples of all nations, baptizing them in the name of the Father and of the Son and of the Holy Spirit.",
                )
                .with_verse(20, "And surely I am with you always, to the very end of the age."),
        )
}

fn john() -> Book {
    Book::new("John", Testament::New, "Gospels", 21)
        .with_summary("Signs and discourses revealing Jesus as the Son of God.")
        .with_author("John")
        .with_date_written("c. AD 85-95")
        .with_chapter(
            Chapter::new(1, "The Word made flesh.")
                .with_themes(["Incarnation", "Creation", "Light"])
                .with_key_verses([1, 14])
                .with_verse(
                    1,
                    "In the beginning was the Word, and the Word was with God, and the Word was God.",
                )
                .with_verse(
                    14,
                    "The Word became flesh and made his dwelling among us. We have seen his glory.",
                ),
        )
        .with_chapter(
            Chapter::new(3, "Jesus teaches Nicodemus about new birth.")
                .with_themes(["Salvation", "New Birth", "Love"])
                .with_key_verses([16])
                .with_verse(
                    3,
                    "Very truly I tell you, no one can see the kingdom of God unless they are born again.",
                )
                .with_verse(
                    16,
                    "For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.",
                )
                .with_verse(
                    17,
                    "For God did not send his Son into the world to condemn the world, but to save the world through him.",
                ),
        )
}

fn romans() -> Book {
    Book::new("Romans", Testament::New, "Pauline Epistles", 16)
        .with_summary("The gospel of righteousness by faith, for Jew and Gentile alike.")
        .with_author("Paul")
        .with_date_written("c. AD 57")
        .with_chapter(
            Chapter::new(8, "Life in the Spirit and the security of God's love.")
                .with_themes(["Assurance", "Holy Spirit", "Love"])
                .with_key_verses([28, 38])
                .with_verse(
                    1,
                    "Therefore, there is now no condemnation for those who are in Christ Jesus.",
                )
                .with_verse(
                    28,
                    "And we know that in all things God works for the good of those who love him, who have been called according to his purpose.",
                )
                .with_verse(
                    38,
                    "For I am convinced that neither death nor life, neither angels nor demons, neither the present nor the future, nor any powers,",
                )
                .with_verse(
                    39,
                    "neither height nor depth, nor anything else in all creation, will be able to separate us from the love of God that is in Christ Jesus our Lord.",
                ),
        )
}
