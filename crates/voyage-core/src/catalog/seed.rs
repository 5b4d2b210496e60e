//! Catalog records shipped with the site.

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{ItineraryDay, LocalizedText, Rate, Region, Tour, TourCategory};

fn text(zh: &str, en: &str) -> LocalizedText {
    LocalizedText::new(zh, en)
}

fn day(day: u32, title: (&str, &str), description: (&str, &str)) -> ItineraryDay {
    ItineraryDay {
        day,
        title: text(title.0, title.1),
        description: text(description.0, description.1),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The three packaged tours.
pub fn seed_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "t1".to_string(),
            category: TourCategory::Study,
            title: text(
                "西安古都穿越记：兵马俑修复体验",
                "Xi’an Ancient Capital: Terracotta Warriors Restoration",
            ),
            subtitle: text(
                "亲手制作兵马俑，夜游大唐不夜城",
                "Hand-craft warriors and explore the Great Tang All Day Mall",
            ),
            location: text("中国西安", "Xi’an, China"),
            description: text(
                "深度体验秦汉文化，对话考古学家。不仅仅是参观，更是一次穿越千年的对话。适合10-15岁青少年及家庭。",
                "Deeply experience Qin and Han culture and talk to archaeologists. Not just a visit, but a dialogue across thousands of years. Suitable for teenagers aged 10-15 and families.",
            ),
            features: vec![
                text("考古专家讲座", "Archaeologist Lecture"),
                text("兵马俑手作体验", "Terracotta DIY"),
                text("大唐不夜城VIP", "Tang Paradise VIP"),
                text("陕历博绿色通道", "Museum Fast Track"),
            ],
            itinerary: vec![
                day(
                    1,
                    ("抵达西安", "Arrive in Xi’an"),
                    ("入住城墙边特色酒店，开营仪式。", "Check into hotel near City Wall, Opening Ceremony."),
                ),
                day(
                    2,
                    ("兵马俑博物馆", "Terracotta Warriors"),
                    ("VIP通道参观，并在修复师指导下体验陶俑修复。", "VIP access and restoration workshop with experts."),
                ),
                day(
                    3,
                    ("大唐不夜城", "Great Tang Mall"),
                    ("汉服体验，沉浸式夜游。", "Hanfu costume experience and immersive night tour."),
                ),
            ],
            group_price: Money::from_major(6800),
            private_price: Money::from_major(8500),
            original_price: Money::from_major(7500),
            days: 5,
            image_url: "https://images.unsplash.com/photo-1599571234909-29ed5d1321d6?q=80&w=2070&auto=format&fit=crop".to_string(),
            min_group_size: 10,
            current_group_size: 8,
            max_group_size: 20,
            start_date: date(2024, 7, 15),
            cashback_rate: Rate::from_bps(500),
            commission_rate: Rate::from_bps(300),
        },
        Tour {
            id: "t2".to_string(),
            category: TourCategory::Business,
            title: text("上海杭州数字经济考察团", "Shanghai & Hangzhou Digital Economy Delegation"),
            subtitle: text("深入阿里巴巴总部，探访特斯拉超级工厂", "Visit Alibaba HQ and Tesla Gigafactory"),
            location: text("上海 & 杭州", "Shanghai & Hangzhou"),
            description: text(
                "高端商务局。与行业高管面对面交流，探寻中国数字经济发展的底层逻辑。适合企业家、创业者及投资人。",
                "High-end business delegation. Face-to-face exchanges with industry executives on the underlying logic of China's digital economy. Suitable for entrepreneurs and investors.",
            ),
            features: vec![
                text("阿里总部参访", "Alibaba HQ Visit"),
                text("特斯拉工厂流水线", "Tesla Gigafactory"),
                text("高管闭门交流会", "Executive Closed-door Meeting"),
                text("五星级行政酒廊社交", "5-Star Networking"),
            ],
            itinerary: vec![
                day(
                    1,
                    ("上海金融中心", "Shanghai Financial Center"),
                    ("陆家嘴金融考察与欢迎晚宴。", "Lujiazui tour and welcome dinner."),
                ),
                day(
                    2,
                    ("特斯拉超级工厂", "Tesla Gigafactory"),
                    ("实地观摩自动化生产线。", "On-site observation of automated production lines."),
                ),
                day(
                    3,
                    ("杭州阿里巴巴", "Alibaba Hangzhou"),
                    ("数字生态系统深度解析。", "Deep analysis of the digital ecosystem."),
                ),
            ],
            group_price: Money::from_major(12800),
            private_price: Money::from_major(16800),
            original_price: Money::from_major(15800),
            days: 4,
            image_url: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070&auto=format&fit=crop".to_string(),
            min_group_size: 15,
            current_group_size: 12,
            max_group_size: 25,
            start_date: date(2024, 9, 10),
            cashback_rate: Rate::from_bps(500),
            commission_rate: Rate::from_bps(500),
        },
        Tour {
            id: "t3".to_string(),
            category: TourCategory::Tourism,
            title: text("桂林山水：画中骑行之旅", "Guilin Landscape: Cycling in a Painting"),
            subtitle: text(
                "避开人流的私家路线，遇龙河竹筏漂流",
                "Private route avoiding crowds, bamboo rafting on Yulong River",
            ),
            location: text("桂林 & 阳朔", "Guilin & Yangshuo"),
            description: text(
                "纯玩无购物。在山水画卷中骑行，体验地道的白族扎染，享受阳朔的慢生活。",
                "Pure travel, no shopping stops. Cycling through the landscape painting, authentic tie-dye, and the slow life of Yangshuo.",
            ),
            features: vec![
                text("悦榕庄或同级酒店", "Banyan Tree or similar"),
                text("私人竹筏", "Private Bamboo Raft"),
                text("田园骑行", "Countryside Cycling"),
                text("印象刘三姐VIP席", "Impression Sanjie Liu VIP"),
            ],
            itinerary: vec![
                day(
                    1,
                    ("抵达桂林", "Arrive in Guilin"),
                    ("象鼻山与两江四湖夜景。", "Elephant Trunk Hill and Night Cruise."),
                ),
                day(
                    2,
                    ("漓江精华段", "Li River Core"),
                    ("兴坪古镇与20元人民币背景打卡。", "Xingping Ancient Town and 20 RMB scenery."),
                ),
            ],
            group_price: Money::from_major(3200),
            private_price: Money::from_major(4200),
            original_price: Money::from_major(4500),
            days: 4,
            image_url: "https://images.unsplash.com/photo-1548266652-99cf27701ced?q=80&w=2000&auto=format&fit=crop".to_string(),
            min_group_size: 8,
            current_group_size: 2,
            max_group_size: 16,
            start_date: date(2024, 6, 20),
            cashback_rate: Rate::from_bps(300),
            commission_rate: Rate::from_bps(200),
        },
    ]
}

/// The five map regions.
pub fn seed_regions() -> Vec<Region> {
    vec![
        Region {
            id: "r_xian".to_string(),
            name: text("西安", "Xi’an"),
            x: 48,
            y: 45,
            description: text(
                "十三朝古都，中华文明的摇篮。这里有兵马俑的肃穆，也有大唐不夜城的繁华。",
                "The ancient capital of 13 dynasties. Home to the Terracotta Warriors and the glorious Tang culture.",
            ),
            culture_tag: text("秦汉风骨", "Qin & Han Dynasty"),
            image_url: "https://images.unsplash.com/photo-1599571234909-29ed5d1321d6?q=80&w=2070".to_string(),
            linked_tour_ids: vec!["t1".to_string()],
        },
        Region {
            id: "r_shanghai".to_string(),
            name: text("上海", "Shanghai"),
            x: 82,
            y: 55,
            description: text(
                "东方明珠，魔都魅力。这里是中国经济的心脏，融合了海派文化与现代科技。",
                "The Pearl of the Orient. The economic heart of China, blending Haipai culture with modern technology.",
            ),
            culture_tag: text("摩登东方", "Modern Orient"),
            image_url: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070".to_string(),
            linked_tour_ids: vec!["t2".to_string()],
        },
        Region {
            id: "r_guilin".to_string(),
            name: text("桂林", "Guilin"),
            x: 62,
            y: 75,
            description: text(
                "千峰环野立，一水抱城流。漓江的山水是国画的现实写照。",
                "The finest scenery under heaven. The Li River landscape is a real-life Chinese painting.",
            ),
            culture_tag: text("山水甲天下", "Karst Landscape"),
            image_url: "https://images.unsplash.com/photo-1548266652-99cf27701ced?q=80&w=2000".to_string(),
            linked_tour_ids: vec!["t3".to_string()],
        },
        Region {
            id: "r_beijing".to_string(),
            name: text("北京", "Beijing"),
            x: 72,
            y: 28,
            description: text(
                "紫禁城的威严，长城的雄伟，胡同的烟火气。",
                "The majesty of the Forbidden City, the grandeur of the Great Wall, and the life of the Hutongs.",
            ),
            culture_tag: text("皇城气象", "Imperial City"),
            image_url: "https://images.unsplash.com/photo-1508804185872-d7badad00f7d?q=80&w=2070".to_string(),
            linked_tour_ids: Vec::new(),
        },
        Region {
            id: "r_chengdu".to_string(),
            name: text("成都", "Chengdu"),
            x: 42,
            y: 60,
            description: text(
                "熊猫的故乡，火锅的源头。一座来了就不想走的城市。",
                "Hometown of Pandas and Hotpot. A city you never want to leave.",
            ),
            culture_tag: text("天府之国", "Land of Abundance"),
            image_url: "https://images.unsplash.com/photo-1540397106260-e24a595a84ca?q=80&w=2000".to_string(),
            linked_tour_ids: Vec::new(),
        },
    ]
}
