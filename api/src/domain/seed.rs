//! Canonical seed catalog
//!
//! The fixed record set every fresh store is populated with, plus the
//! markers used to decide whether persisted data must be replaced.

use serde::Serialize;

use super::entities::{NewGuide, NewPartner, NewPet, NewProduct, NewStory, NewTip};

/// Version of the canonical catalog below. Bump whenever seed content changes
/// so durable stores replace their copy on next boot.
pub const SEED_VERSION: i32 = 2;

/// Image host used by an early catalog. Rows pointing at it predate seed
/// version stamps and are always replaced.
pub const PLACEHOLDER_IMAGE_HOST: &str = "picsum.photos";

/// The seeded catalog collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Pets,
    Stories,
    Tips,
    Products,
    Guides,
    Partners,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Pets,
        Collection::Partners,
        Collection::Products,
        Collection::Guides,
        Collection::Stories,
        Collection::Tips,
    ];

    /// Table / key name
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Pets => "pets",
            Collection::Stories => "stories",
            Collection::Tips => "tips",
            Collection::Products => "products",
            Collection::Guides => "guides",
            Collection::Partners => "partners",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a store reports about one collection before seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionStatus {
    pub count: u64,
    /// Any image or logo reference contains [`PLACEHOLDER_IMAGE_HOST`]
    pub has_placeholder_images: bool,
    /// Version stamped by the last reseed, if any
    pub seed_version: Option<i32>,
}

/// Why a collection gets replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReseedReason {
    Empty,
    VersionMismatch,
    PlaceholderImages,
}

impl std::fmt::Display for ReseedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReseedReason::Empty => write!(f, "empty"),
            ReseedReason::VersionMismatch => write!(f, "seed version mismatch"),
            ReseedReason::PlaceholderImages => write!(f, "placeholder images"),
        }
    }
}

impl CollectionStatus {
    /// Decide whether the collection must be cleared and rewritten
    pub fn reseed_reason(&self, expected_version: i32) -> Option<ReseedReason> {
        if self.count == 0 {
            Some(ReseedReason::Empty)
        } else if self.has_placeholder_images {
            Some(ReseedReason::PlaceholderImages)
        } else if self.seed_version != Some(expected_version) {
            Some(ReseedReason::VersionMismatch)
        } else {
            None
        }
    }
}

/// Every seeded collection, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCatalog {
    pub pets: Vec<NewPet>,
    pub stories: Vec<NewStory>,
    pub tips: Vec<NewTip>,
    pub products: Vec<NewProduct>,
    pub guides: Vec<NewGuide>,
    pub partners: Vec<NewPartner>,
}

impl SeedCatalog {
    /// Number of records seeded into `collection`
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Pets => self.pets.len(),
            Collection::Stories => self.stories.len(),
            Collection::Tips => self.tips.len(),
            Collection::Products => self.products.len(),
            Collection::Guides => self.guides.len(),
            Collection::Partners => self.partners.len(),
        }
    }

    pub fn canonical() -> Self {
        Self {
            pets: canonical_pets(),
            stories: canonical_stories(),
            tips: canonical_tips(),
            products: canonical_products(),
            guides: canonical_guides(),
            partners: canonical_partners(),
        }
    }
}

fn unsplash(photo: &str, width: u32) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&q=80&w={}",
        photo, width
    )
}

fn pet(
    name: &str,
    species: &str,
    breed: &str,
    age: &str,
    gender: &str,
    description: &str,
    photo: &str,
) -> NewPet {
    NewPet {
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.to_string(),
        age: age.to_string(),
        gender: gender.to_string(),
        description: description.to_string(),
        image_url: unsplash(photo, 800),
    }
}

fn canonical_pets() -> Vec<NewPet> {
    vec![
        pet("豆豆", "狗", "金毛", "2岁", "公", "性格温顺，喜欢玩球，已经打过疫苗。", "1552053831-71594a27632d"),
        pet("咪咪", "猫", "狸花猫", "1岁", "母", "活泼好动，非常亲人，寻找温暖的家。", "1533738363-b7f9aef128ce"),
        pet("雪球", "狗", "萨摩耶", "3岁", "公", "微笑天使，需要较大的活动空间。", "1529429617329-8a737053918e"),
        pet("花花", "猫", "三花猫", "6个月", "母", "文静的小猫，适合室内饲养。", "1573865668131-97417071f295"),
        pet("阿黄", "狗", "中华田园犬", "4岁", "公", "非常忠诚，看家护院的好手。", "1583511655857-d19b40a7a54e"),
        pet("小白", "猫", "波斯猫", "2岁", "母", "高冷优雅，喜欢安静的环境。", "1514888286974-6c03e2ca1dba"),
        pet("黑米", "狗", "拉布拉多", "1.5岁", "公", "聪明好学，适合作为导盲犬培养。", "1537151608828-ea2b11777ee8"),
        pet("汤姆", "猫", "英短蓝猫", "3岁", "公", "胖乎乎的，非常懒散，喜欢睡觉。", "1513245538231-15454f746438"),
        pet("可乐", "狗", "柯基", "1岁", "公", "腿短志气大，性格开朗，是大家的开心果。", "1513284499445-5da23aa25bc0"),
        pet("芝麻", "猫", "英短金渐层", "2岁", "母", "性格安静，喜欢晒太阳，非常温顺。", "1511044568932-338cba0ad803"),
        pet("大白", "狗", "大白熊犬", "3岁", "公", "体型巨大但内心温柔，是个可靠的守护者。", "1520560321666-4b36560e79f9"),
        pet("布丁", "猫", "布偶猫", "1.5岁", "母", "颜值担当，性格像小狗一样粘人。", "1548247416-ec66f4900b2e"),
        pet("旺财", "狗", "柴犬", "2岁", "公", "行走的表情包，性格独立且忠诚。", "1583511655826-05700d52f4d9"),
        pet("露露", "猫", "暹罗猫", "4岁", "母", "话痨属性，喜欢和主人交流，非常聪明。", "1557246565-8a3d3ab5d7f6"),
        pet("多多", "狗", "贵宾犬", "5岁", "母", "不掉毛，聪明伶俐，已经学会很多指令。", "1516734212186-a967f81ad0d7"),
        pet("糯米", "猫", "波斯猫", "1岁", "公", "毛发雪白，像个小雪球，喜欢安静地呆着。", "1518791841217-8f162f1e1131"),
        pet("哈利", "狗", "边境牧羊犬", "2.5岁", "公", "智商担当，精力充沛，需要大量的运动。", "1503256207526-0d5d80fa2f47"),
        pet("团团", "猫", "矮脚猫", "8个月", "母", "超级可爱，虽然腿短但跑得很快。", "1592194996308-7b43878e84a6"),
    ]
}

fn canonical_stories() -> Vec<NewStory> {
    [
        ("豆豆的新家", "张女士领养了豆豆后，家里充满了欢声笑语。豆豆现在每天都会陪张女士散步。", "豆豆", "1552053831-71594a27632d"),
        ("咪咪的幸福生活", "咪咪被一个温馨的家庭领养了，现在它有了一个漂亮的小窝和很多玩具。", "咪咪", "1533738363-b7f9aef128ce"),
    ]
    .into_iter()
    .map(|(title, content, pet_name, photo)| NewStory {
        title: title.to_string(),
        content: content.to_string(),
        pet_name: pet_name.to_string(),
        image_url: unsplash(photo, 800),
    })
    .collect()
}

fn canonical_tips() -> Vec<NewTip> {
    [
        ("养狗知识", "如何给狗狗洗澡", "洗澡前要准备好专用的沐浴露，水温要适中...", "1516734212186-a967f81ad0d7"),
        ("养猫知识", "猫咪的饮食禁忌", "猫咪不能吃巧克力、洋葱等食物...", "1514888286974-6c03e2ca1dba"),
        ("健康护理", "宠物驱虫的重要性", "定期驱虫可以预防多种疾病，保护宠物健康...", "1537151608828-ea2b11777ee8"),
    ]
    .into_iter()
    .map(|(category, title, content, photo)| NewTip {
        category: category.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        image_url: unsplash(photo, 800),
    })
    .collect()
}

fn canonical_products() -> Vec<NewProduct> {
    [
        ("公益帆布袋", 39.0, "印有救助中心Logo的环保帆布袋，所得款项全额用于宠物医疗。", "1544816153-16ad461465c8", "生活用品"),
        ("定制宠物项圈", 25.0, "手工编织的宠物项圈，舒适耐用。", "1601758228041-f3b2795255f1", "宠物用品"),
        ("爱心明信片套装", 15.0, "一套12张，记录了救助中心宠物的感人瞬间。", "1534353436294-0dbd4bdac845", "文创周边"),
        ("宠物陶瓷碗", 45.0, "高品质陶瓷，防滑设计，呵护宠物颈椎。", "1583337130417-3346a1be7dee", "宠物用品"),
    ]
    .into_iter()
    .map(|(name, price, description, photo, category)| NewProduct {
        name: name.to_string(),
        price,
        description: description.to_string(),
        image_url: unsplash(photo, 800),
        category: category.to_string(),
    })
    .collect()
}

fn canonical_guides() -> Vec<NewGuide> {
    [
        ("领养条件", "年满22周岁，有稳定的工作和收入，家人同意，能够提供适宜的居住环境。", "UserCheck"),
        ("领养流程", "1. 在线提交申请 -> 2. 电话初筛 -> 3. 线下见面 -> 4. 签署领养协议 -> 5. 开启幸福生活。", "ClipboardList"),
        ("准备工作", "准备好宠物粮食、水碗、牵引绳、猫砂盆等基础用品，并对家里进行必要的安全加固。", "Home"),
        ("回访制度", "领养后的第一、三、六个月，我们会通过微信或电话进行回访，了解宠物的适应情况。", "PhoneCall"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, content, icon), order_num)| NewGuide {
        title: title.to_string(),
        content: content.to_string(),
        icon: icon.to_string(),
        order_num,
    })
    .collect()
}

fn canonical_partners() -> Vec<NewPartner> {
    [
        ("爱宠宠物医院", "1584132967334-10e028bd69f7", "提供专业的医疗支持与绿色通道。"),
        ("萌宠食品有限公司", "1589923188900-85dae523342b", "长期捐赠高品质宠物粮食。"),
        ("温暖社区基金会", "1532629345422-7515f3d16bb8", "提供救助资金支持与社区宣传。"),
    ]
    .into_iter()
    .map(|(name, photo, description)| NewPartner {
        name: name.to_string(),
        logo_url: unsplash(photo, 200),
        description: description.to_string(),
        website: "https://example.com".to_string(),
    })
    .collect()
}
