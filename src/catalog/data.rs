use super::{DrinkCategory, DrinkItem, GalleryImage, MenuCategory, MenuItem, Price};

const fn p(cents: u32) -> Price {
    Price::from_cents(cents)
}

const fn drink(name: &'static str, cents: u32) -> DrinkItem {
    DrinkItem { name, price: p(cents) }
}

pub static MENU_CATEGORIES: &[MenuCategory] = &[
    MenuCategory {
        name: "Beef Grill 소고이",
        description: None,
        items: &[
            MenuItem { name: "B1. Sirloin Cap", korean: Some("새우살"), weight: Some("180g"), price: p(3299), description: Some("A tender and juicy cut, prized for its rich flavor and perfect marbling. Available in limited daily quantity.") },
            MenuItem { name: "B2. Chuck Flap Tail", korean: Some("살치살"), weight: Some("180g"), price: p(2799), description: Some("Delicately marbled beef chuck flap tail, prized for its tenderness and savory taste.") },
            MenuItem { name: "B3. Boneless Short Rib", korean: Some("갈비살"), weight: Some("180g"), price: p(2699), description: Some("Flavorful meat from between the short ribs, tender with a rich and savory flavor.") },
            MenuItem { name: "B4. Striploin", korean: Some("채끝살"), weight: Some("180g"), price: p(2699), description: Some("A tender and flavorful cut from the sirloin end, well-marbled and juicy with a rich beef taste.") },
            MenuItem { name: "B5. Galbi Jumulok (Marinated)", korean: Some("누들목"), weight: Some("200g"), price: p(2799), description: Some("Tender slices of boneless beef short rib marinated in Korean-style sauce.") },
            MenuItem { name: "B6. Yukhwe (Beef Tartare)", korean: Some("육회"), weight: Some("150g"), price: p(1799), description: Some("Fresh raw beef seasoned with spicy-savory gochujang, garlic, sesame oil and scallion.") },
        ],
    },
    MenuCategory {
        name: "Pork Grill 돼지구이",
        description: None,
        items: &[
            MenuItem { name: "P1. Pork Belly", korean: Some("삼겹살"), weight: Some("180g"), price: p(2199), description: Some("Juicy pork belly with layers of meat and fat.") },
            MenuItem { name: "P2. Pork Shoulder", korean: Some("목살"), weight: Some("180g"), price: p(2199), description: Some("Flavorful and tender cut, great for table grilling.") },
            MenuItem { name: "P3. Pork Jowl", korean: Some("항정살"), weight: Some("180g"), price: p(2299), description: Some("Richly marbled pork with a juicy and chewy texture.") },
            MenuItem { name: "P4. Pork Shoulder (Marinated)", korean: Some("양념목살"), weight: Some("200g"), price: p(2299), description: Some("Tender pork neck slices marinated in a sweet & savory Korean-style sauce.") },
        ],
    },
    MenuCategory {
        name: "Chicken Grill 닭구이",
        description: None,
        items: &[
            MenuItem { name: "G1. Chicken Thigh", korean: Some("순살닭갈비"), weight: Some("200g"), price: p(2299), description: Some("Chicken dark meat marinated in special soy sauce.") },
        ],
    },
    MenuCategory {
        name: "Hansang - Sot Bap",
        description: Some("A full Korean Entree served on one tray. Includes rice, soup, a main dish, and tasty banchan."),
        items: &[
            MenuItem { name: "H1. Bulgogi Sotbap", korean: Some("불고기"), weight: None, price: p(2299), description: Some("Marinated beef in a savory-sweet sauce, grilled with vegetables, served over hot pot rice.") },
            MenuItem { name: "H2. Spicy Sotbap", korean: Some("매운 솥밥"), weight: None, price: p(2099), description: Some("Spicy pork OR Spicy chicken stir-fried with vegetables, served over hot pot rice.") },
            MenuItem { name: "H3. Veggie Sotbap", korean: Some("야채 솥밥"), weight: None, price: p(2099), description: Some("Tofu, mushrooms, and vegetables stir-fried, served over hot pot rice.") },
            MenuItem { name: "H4. Eel Sotbap", korean: Some("장어 솥밥"), weight: None, price: p(2299), description: Some("Grilled eel on rice, topped with stir-fried seasonal vegetables and sweet soy-based sauce.") },
        ],
    },
    MenuCategory {
        name: "Soup & Stew",
        description: None,
        items: &[
            MenuItem { name: "T1. Seolleong Tang", korean: Some("설렁탕"), weight: None, price: p(2199), description: Some("Traditional Korean beef bone soup, slow-cooked for a rich and milky broth, served with sliced beef and noodles.") },
            MenuItem { name: "T2. Galbi Tang", korean: Some("갈비탕"), weight: None, price: p(2799), description: Some("Beef short rib soup with radish, glass noodles, and egg garnish.") },
            MenuItem { name: "T3. Deulkkae Soft Tofu Jjigae", korean: Some("들깨 순두부"), weight: None, price: p(2199), description: Some("A comforting Korean stew with soft tofu, nutty perilla seeds, mushrooms, and vegetables.") },
            MenuItem { name: "T4. Kimchi Jjigae", korean: Some("김치찌개"), weight: None, price: p(2099), description: Some("Traditional Korean kimchi stew with pork, tofu, and vegetables.") },
            MenuItem { name: "T5. Soon Tofu Jjigae", korean: Some("순두부 찌개"), weight: None, price: p(2099), description: Some("Traditional Korean soybean paste stew with tofu and vegetables.") },
        ],
    },
    MenuCategory {
        name: "Noodles",
        description: None,
        items: &[
            MenuItem { name: "N1. Mul Naengmyeon", korean: Some("물냉면"), weight: None, price: p(2199), description: Some("Cold buckwheat noodles served in a refreshing icy beef broth, topped with sliced beef, cucumber, radish, and boiled egg.") },
            MenuItem { name: "N2. Bibim Naengmyeon", korean: Some("비빔냉면"), weight: None, price: p(2199), description: Some("Chewy buckwheat noodles served cold and tossed in a spicy-sweet chili sauce, topped with sliced beef, cucumber, radish, and boiled egg.") },
            MenuItem { name: "N3. Spicy Bibim Noodle", korean: Some("제비빔면"), weight: None, price: p(2199), description: Some("Chewy noodles topped with spicy stir-fried pork and vegetables in a savory sauce. (Chicken option available)") },
        ],
    },
    MenuCategory {
        name: "Jeongol 전골",
        description: Some("Your choice of protein, simmered with glass noodles and vegetables in a savoury Korean broth. Served in a hot pot that keeps simmering at your table."),
        items: &[
            MenuItem { name: "J1. Beef", korean: Some("소고기"), weight: None, price: p(3499), description: Some("Korean-style beef hot pot in a light, non-spicy broth with assorted vegetables and glass noodles.") },
            MenuItem { name: "J2. Pork", korean: Some("돼지고기"), weight: None, price: p(3299), description: Some("Korean-style pork hot pot in a spicy broth with assorted vegetables and glass noodles.") },
            MenuItem { name: "J3. Chicken", korean: Some("닭고기"), weight: None, price: p(3299), description: Some("Korean-style chicken hot pot in a spicy broth with assorted vegetables and glass noodles.") },
            MenuItem { name: "J4. Vegetable", korean: Some("채소"), weight: None, price: p(3299), description: Some("Korean-style vegetable hot pot in a light, non-spicy broth with assorted vegetables and glass noodles.") },
        ],
    },
    MenuCategory {
        name: "Side Menu 곁들이",
        description: None,
        items: &[
            MenuItem { name: "S1. Naengmyeon", korean: Some("냉면"), weight: None, price: p(1199), description: Some("Cold buckwheat noodles served in a refreshing icy beef broth.") },
            MenuItem { name: "S2. Bibim Naengmyeon", korean: Some("비빔냉면"), weight: None, price: p(1199), description: Some("Chewy buckwheat noodles served cold and tossed in a spicy-sweet chili sauce.") },
            MenuItem { name: "S3. Yukhwe Bibimbap", korean: Some("육회비빔밥"), weight: None, price: p(1399), description: Some("Traditional Korean rice bowl featuring finely seasoned raw beef (yukhoe), assorted fresh vegetables.") },
            MenuItem { name: "S4. Steamed Egg", korean: Some("계란찜"), weight: None, price: p(899), description: Some("A fluffy Korean-style steamed egg, served piping hot in a hot bowl, topped with melted mozzarella cheese.") },
            MenuItem { name: "S5. Corn Cheese", korean: Some("콘치즈"), weight: None, price: p(699), description: Some("Sweet corn mixed with melted cheese, served hot and bubbly.") },
            MenuItem { name: "S6. Dwenjang Jjigae", korean: Some("된장찌개"), weight: None, price: p(799), description: Some("Soybean paste stew with vegetables, tofu, and beef.") },
            MenuItem { name: "S7. Spicy Ramyun", korean: Some("소고기라면"), weight: None, price: p(899), description: Some("Spicy Korean style ramyun with beef.") },
        ],
    },
    MenuCategory {
        name: "3 Person Combo",
        description: None,
        items: &[
            MenuItem { name: "C1. Beef Combo", korean: Some("소고기"), weight: None, price: p(8999), description: Some("Chuck Flap Tail (180g), Boneless Short Rib (180g), Striploin (180g). Comes with Corn Cheese & Dwenjang Jjigae.") },
            MenuItem { name: "C2. Pork Combo", korean: Some("돼지고기"), weight: None, price: p(7299), description: Some("Pork Belly (180g), Pork Shoulder (180g), Pork Jowl (180g). Comes with Corn Cheese & Dwenjang Jjigae.") },
        ],
    },
    MenuCategory {
        name: "Extra Bites 추가",
        description: None,
        items: &[
            MenuItem { name: "E1. Bowl of Rice", korean: None, weight: None, price: p(249), description: None },
            MenuItem { name: "E2. Extra Banchan", korean: None, weight: None, price: p(99), description: Some("Additional serving of side dishes.") },
            MenuItem { name: "E3. Rice Cakes", korean: None, weight: None, price: p(399), description: None },
            MenuItem { name: "E4. Glass Noodles", korean: None, weight: None, price: p(399), description: None },
            MenuItem { name: "E5. Mozzarella Cheese", korean: None, weight: None, price: p(399), description: None },
            MenuItem { name: "E6. Lettuce Wraps", korean: None, weight: None, price: p(399), description: None },
        ],
    },
    MenuCategory {
        name: "Dessert 디저트",
        description: None,
        items: &[
            MenuItem { name: "Ddukffle", korean: None, weight: None, price: p(799), description: Some("Korean-style waffle made with chewy rice cake, served warm with a scoop of homemade banana pudding. May contain Peanuts and Treenuts.") },
            MenuItem { name: "Hotteok", korean: None, weight: None, price: p(699), description: Some("A warm Korean sweet pancake with a melting sugar-cinnamon center, perfectly matched with cold, creamy ice cream. Contains Peanuts and Treenuts.") },
        ],
    },
];

pub static DRINK_CATEGORIES: &[DrinkCategory] = &[
    DrinkCategory {
        name: "Alcoholic",
        items: &[
            drink("High Ball - Omiberry", 1099),
            drink("High Ball - Green Plum", 1099),
            drink("Makguli Original", 1799),
            drink("Soju Original", 1999),
            drink("Soju Green Grape", 1999),
            drink("Terra Beer (500ml)", 999),
            drink("Corona (330ml)", 749),
            drink("Sapporo Draft", 949),
            drink("Stella Draft", 949),
            drink("Red Wine - Dog House (Glass)", 899),
            drink("Red Wine - Dog House (Bottle)", 3499),
            drink("White Wine - Pinot Grigio (Glass)", 899),
            drink("White Wine - Pinot Grigio (Bottle)", 3499),
        ],
    },
    DrinkCategory {
        name: "Non-Alcoholic",
        items: &[
            drink("Original Coke", 299),
            drink("Coke Zero", 299),
            drink("Sprite", 299),
            drink("Ginger Ale", 299),
            drink("Iced Tea", 299),
            drink("Banana Milk", 349),
            drink("High Ball - Omiberry (NA)", 799),
            drink("High Ball - Green Plum (NA)", 799),
            drink("Korean Coffee (Hot)", 599),
            drink("Korean Coffee (Iced)", 599),
            drink("Jasmine Tea (Hot)", 300),
            drink("Green Plum Tea (Hot)", 399),
            drink("Citron Yuzu Tea (Hot)", 399),
        ],
    },
];

pub static GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/photo1.png", alt: "BBQ table spread with grilling meat and banchan" },
    GalleryImage { src: "/photo2.png", alt: "Full Korean BBQ table setup" },
    GalleryImage { src: "/photo3.png", alt: "Sapporo beer and refreshing drinks" },
    GalleryImage { src: "/photo4.png", alt: "Premium beef cuts on wooden board" },
    GalleryImage { src: "/photo5.png", alt: "Meat platter with drinks and banchan" },
    GalleryImage { src: "/photo6.png", alt: "Korean BBQ dining experience" },
    GalleryImage { src: "/photo7.png", alt: "Grilled meats and side dishes" },
];
