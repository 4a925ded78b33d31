//! Static gallery content.

#[cfg(test)]
#[path = "memes_test.rs"]
mod memes_test;

/// Image shown when a meme fails to load.
pub const FALLBACK_SRC: &str = "https://placehold.co/400x400?text=Imagem+Nao+Encontrada";
/// Alt text paired with [`FALLBACK_SRC`].
pub const FALLBACK_ALT: &str = "Imagem não encontrada - placeholder de erro";

/// One gallery entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Meme {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
}

impl Meme {
    /// DOM id of the card heading, referenced by `aria-labelledby`.
    #[must_use]
    pub fn title_id(&self) -> String {
        format!("meme-title-{}", self.id)
    }
}

pub const MEMES: [Meme; 3] = [
    Meme {
        id: 1,
        src: "https://conteudo.imguol.com.br/3f/2020/11/17/kid-bengala-via-instagram-1605617856164_v2_900x506.jpg",
        alt: "Meme do Kid Bengala - imagem humorística viral das redes sociais",
        title: "Kid Bengala Meme",
    },
    Meme {
        id: 2,
        src: "https://placehold.co/400x400?text=Meme+Engracado+2",
        alt: "Segundo meme da coleção - conteúdo humorístico com design moderno e divertido",
        title: "Meme Engraçado #2",
    },
    Meme {
        id: 3,
        src: "https://placehold.co/400x400?text=Meme+Viral+3",
        alt: "Terceiro meme viral - imagem cômica popular nas redes sociais com estilo contemporâneo",
        title: "Meme Viral #3",
    },
];
