use crate::core::{FontRole, PlaceholderSpec, Shape};
use image::Rgb;

pub const CANVAS_SIZE: u32 = 400;

const BACKGROUND: Rgb<u8> = Rgb([0xE8, 0xE8, 0xE8]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
const GOLD: Rgb<u8> = Rgb([0xFF, 0xD7, 0x00]);
const SADDLE_BROWN: Rgb<u8> = Rgb([0x8B, 0x45, 0x13]);
const SIENNA: Rgb<u8> = Rgb([0xA0, 0x52, 0x2D]);
const DARK_BROWN: Rgb<u8> = Rgb([0x65, 0x43, 0x21]);
const MONEY_GREEN: Rgb<u8> = Rgb([0x00, 0xAA, 0x00]);

fn text(center: (i32, i32), text: &str, fill: Rgb<u8>, font: FontRole) -> Shape {
    Shape::Text {
        center,
        text: text.to_string(),
        fill,
        font,
    }
}

fn placeholder(name: &str, shapes: Vec<Shape>) -> PlaceholderSpec {
    PlaceholderSpec {
        name: name.to_string(),
        file_name: format!("{}.jpeg", name),
        width: CANVAS_SIZE,
        height: CANVAS_SIZE,
        background: BACKGROUND,
        shapes,
    }
}

pub fn sunglasses() -> PlaceholderSpec {
    placeholder(
        "sunglasses",
        vec![
            // 鏡片
            Shape::Ellipse {
                bbox: [60, 130, 180, 230],
                fill: BLACK,
            },
            Shape::Ellipse {
                bbox: [220, 130, 340, 230],
                fill: BLACK,
            },
            // 鼻樑
            Shape::Arc {
                bbox: [180, 170, 220, 190],
                start: 0.0,
                end: 180.0,
                fill: BLACK,
                width: 5,
            },
            // 鏡腳
            Shape::Rectangle {
                bbox: [40, 175, 60, 185],
                fill: BLACK,
            },
            Shape::Rectangle {
                bbox: [340, 175, 360, 185],
                fill: BLACK,
            },
            text((200, 280), "SUNGLASSES", BLACK, FontRole::Title),
            text((200, 320), "Designer Shades", GRAY, FontRole::Subtitle),
            Shape::Rectangle {
                bbox: [10, 10, 390, 30],
                fill: GOLD,
            },
            text((200, 20), "🕶️ SUNGLASSES IMAGE", BLACK, FontRole::Banner),
        ],
    )
}

pub fn wallet() -> PlaceholderSpec {
    placeholder(
        "wallet",
        vec![
            Shape::Rectangle {
                bbox: [100, 120, 300, 260],
                fill: SADDLE_BROWN,
            },
            Shape::Rectangle {
                bbox: [105, 125, 295, 255],
                fill: SIENNA,
            },
            // 卡槽
            Shape::Rectangle {
                bbox: [120, 140, 180, 170],
                fill: DARK_BROWN,
            },
            Shape::Rectangle {
                bbox: [190, 140, 250, 170],
                fill: DARK_BROWN,
            },
            Shape::Rectangle {
                bbox: [120, 180, 180, 210],
                fill: DARK_BROWN,
            },
            text((200, 195), "$$$", MONEY_GREEN, FontRole::Title),
            text((200, 290), "WALLET", BLACK, FontRole::Title),
            text((200, 330), "Premium Leather", GRAY, FontRole::Subtitle),
            Shape::Rectangle {
                bbox: [10, 10, 390, 30],
                fill: SADDLE_BROWN,
            },
            text((200, 20), "💼 WALLET IMAGE", WHITE, FontRole::Banner),
        ],
    )
}

pub fn all() -> Vec<PlaceholderSpec> {
    vec![sunglasses(), wallet()]
}
