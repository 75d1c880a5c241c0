//! Relevance screen: is this article about an actual road accident?
//!
//! Keyword searches on a local news site pull in plenty of noise: articles
//! about financial "investimenti", political "scontri", rail accidents,
//! anniversaries of old crashes, car rental advertising. The screen runs on
//! [`normalize`]d text and rejects an article when
//!
//! 1. a pattern of one of the off-topic families matches,
//! 2. it explicitly reports that nothing happened,
//! 3. it talks about accidents only in general (a season's roundup),
//! 4. it only says when the previous accident happened,
//! 5. it only commemorates an accident from a past year,
//! 6. it only announces a traffic regulation (one-way streets),
//! 7. it has no vehicle/road indicator, or
//! 8. it has no accident indicator.
//!
//! Checks 3 to 6 are lifted when the text also describes a specific, recent
//! accident.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use strum_macros::{AsRefStr, Display};

use crate::normalize::normalize;

/// Why an article was rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    /// Matched an off-topic pattern (finance, politics, rail, ...)
    OffTopic,
    /// Explicitly says no accident happened
    NoAccidentReported,
    /// Mentions accidents only in general
    GenericMention,
    /// Only says when the previous accident happened
    PreviousIncidentOnly,
    /// Only mentions an accident from a past year
    PastIncidentOnly,
    /// Only announces a traffic regulation
    TrafficRegulationOnly,
    /// No vehicle or road indicator
    MissingVehicle,
    /// No accident indicator
    MissingAccident,
}

impl RejectReason {
    /// Returns all variants in check order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OffTopic,
            Self::NoAccidentReported,
            Self::GenericMention,
            Self::PreviousIncidentOnly,
            Self::PastIncidentOnly,
            Self::TrafficRegulationOnly,
            Self::MissingVehicle,
            Self::MissingAccident,
        ]
    }
}

/// Outcome of [`screen_article`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum ScreenVerdict {
    /// The article reads as a road accident report.
    Kept,
    /// The article was rejected.
    #[serde(rename_all = "camelCase")]
    Rejected {
        /// Which check rejected it.
        reason: RejectReason,
        /// Name of the off-topic rule that matched, for [`RejectReason::OffTopic`].
        rule: Option<&'static str>,
    },
}

impl ScreenVerdict {
    /// Whether the article passed the screen.
    #[must_use]
    pub const fn is_kept(&self) -> bool {
        matches!(self, Self::Kept)
    }

    const fn rejected(reason: RejectReason) -> Self {
        Self::Rejected { reason, rule: None }
    }
}

/// A named family of off-topic patterns. Patterns see normalized text.
struct OffTopicRule {
    name: &'static str,
    patterns: &'static [&'static str],
}

/// Checked in order; the first family with a matching pattern names the
/// rejection.
const OFF_TOPIC_RULES: &[OffTopicRule] = &[
    OffTopicRule {
        name: "financial_investment",
        patterns: &[
            r"\binvestiment[io]\s+(?:finanziari?|immobiliari?|pubblic[io]|privati?|europei?|nazionali?)",
            r"\binvestiment[io]\s+(?:in|per|da|di)\s+",
            r"\b(?:piano|programma|progetto)\s+di\s+investiment[io]",
            r"\b(?:milioni?|miliardi?)\s+(?:di\s+)?euro\s+(?:di\s+)?investiment[io]",
            r"\binvestiment[io]\s+(?:da|di)\s+\d+",
            r"\b(?:finanziamento|finanziare|finanziari?)\s+(?:pubblic[io]|privati?|europei?)",
            r"\b(?:borsa|mercato|azionari?|titoli?)\s+(?:di\s+)?investiment[io]",
            r"\b(?:fondo|fondi)\s+(?:di\s+)?investiment[io]",
            r"\b(?:rendimento|dividendo|capitale)\s+(?:di\s+)?investiment[io]",
            r"\b(?:investire|investito|investono)\s+(?:in|su|per)\s+(?:progetti?|infrastrutture|edilizia)",
            r"\b(?:investimento|investimenti)\s+(?:pubblic[io]|privati?)\s+(?:in|per|su)",
        ],
    },
    OffTopicRule {
        name: "non_road_incident",
        patterns: &[
            r"\bincidente\s+(?:diplomatic[io]|politic[io]|amministrativ[io])",
        ],
    },
    OffTopicRule {
        name: "gender_violence",
        patterns: &[
            r"\b(?:violenza|maltrattamenti?)\s+(?:di\s+)?genere",
            r"\b(?:vittime?|percorso|assistenza)\s+(?:di\s+)?violenza",
            r"\b(?:centro|centri)\s+(?:antiviolenza|anti-violenza)",
            r"\b(?:codice\s+rosso)\s+(?:violenza|genere)",
            r"\b(?:giornata|giornata internazionale)\s+(?:per|contro)\s+(?:l['’]?eliminazione\s+della\s+)?violenza",
            r"\b(?:percorso|percorsi)\s+(?:assistenzial[ie]|dedicat[io])\s+(?:alle\s+)?vittime",
            r"\b(?:violenza|abuso|maltrattamento)\s+(?:domestica|familiare|sulle\s+donne)",
        ],
    },
    OffTopicRule {
        name: "sport",
        patterns: &[
            r"\b(?:basket|calcio|sport|partita|gara)\s+",
        ],
    },
    OffTopicRule {
        name: "elections",
        patterns: &[
            r"\b(?:elezioni?|votazioni?|referendum|ballottaggio)",
        ],
    },
    OffTopicRule {
        name: "public_event",
        patterns: &[
            r"\b(?:festival|evento|manifestazione|sagra)",
        ],
    },
    OffTopicRule {
        name: "hospital_project",
        patterns: &[
            r"\b(?:progetto|progetti)\s+(?:ospedal[ie]|sanitari?|edilizi?)",
        ],
    },
    OffTopicRule {
        name: "resident_complaints",
        patterns: &[
            r"\b(?:invivibile|insopportabile|esasperazione)\s+(?:per|a causa di|dovuto a)\s+(?:traffico|mezzi pesanti|rumore)",
            r"\b(?:residenti?|abitanti?)\s+(?:lamentano|scrivono|protestano|denunciano)",
            r"\b(?:tangenziale|strada)\s+(?:sotto casa|invivibile|insopportabile)",
        ],
    },
    OffTopicRule {
        name: "road_safety_works",
        patterns: &[
            r"\b(?:interventi?|miglioramenti?|lavori?)\s+(?:sulla|sulle|per)\s+(?:segnaletica|sicurezza stradale|illuminazione)",
            r"\b(?:migliorare|miglioramento)\s+(?:la\s+)?sicurezza\s+stradale",
            r"\b(?:piano|piani)\s+(?:di|per)\s+(?:sicurezza|prevenzione)",
        ],
    },
    OffTopicRule {
        name: "scam",
        patterns: &[
            r"\b(?:si\s+finge|finge\s+di|fals[io])\s+(?:carabiniere|poliziotto|avvocato)",
            r"\b(?:truffa|truffatore|truffatric[ie]|estorcere|estorsione)",
            r"\b(?:presunti|falsi)\s+(?:incidenti?|sinistri?)\s+(?:che\s+coinvolgono|che\s+coinvolgerebbero)",
        ],
    },
    OffTopicRule {
        name: "littering",
        patterns: &[
            r"\b(?:rifiuti?|abbandono)\s+(?:sulle|sulla|sugli)\s+strade",
            r"\b(?:piano|piani)\s+(?:straordinari?|di\s+contrasto)\s+(?:all['’]?|al)\s+abbandono",
            r"\b(?:citta\s+metropolitana|comune)\s+(?:contro|piano)\s+(?:rifiuti|abbandono)",
        ],
    },
    OffTopicRule {
        name: "procession",
        patterns: &[
            r"\b(?:busto|reliquie?|effigi?|simulacro|patrono)\s+(?:argenteo|sfilato|processione)",
            r"\b(?:processione|sfilata)\s+(?:religiosa|storica|tradizionale)",
            r"\b(?:festa|feste)\s+(?:patronale|religiosa)",
        ],
    },
    OffTopicRule {
        name: "firefighter_roundup",
        patterns: &[
            r"\b(?:vigili\s+del\s+fuoco|vigile)\s+(?:in\s+prima\s+linea|attivita\s+di\s+soccorso|sempre\s+operativi)",
            r"\b(?:estate|periodo)\s+(?:di\s+fuoco|intensa\s+attivita)",
            r"\b(?:non\s+solo\s+fiamme|incendi\s+e\s+incidenti)\s+(?:ma|ma\s+anche)",
        ],
    },
    OffTopicRule {
        name: "victim_interview",
        patterns: &[
            r"\b(?:contro|sdegno|ricordo|incubo)\s+(?:i\s+video|quello\s+che|quello\s+che\s+ho)",
            r"\b(?:video|foto)\s+(?:che\s+riprendono|del\s+dolore|condiviso)",
            r"\b(?:e\s+accaduto\s+anche\s+a\s+me|ho\s+vissuto|prov[ao]\s+sdegno)",
            r"\b(?:parlare|parla|intervista)\s+(?:e|di|su)\s+(?:un|una)\s+(?:ferit[io]|vittima)",
        ],
    },
    OffTopicRule {
        name: "generic_roundup",
        patterns: &[
            r"\b(?:tra\s+incendi?|incidenti?\s+e\s+salvataggi?|incidenti?\s+in\s+generale)",
            r"\b(?:numerosi\s+gli\s+episodi|episodi\s+che\s+si\s+sono\s+verificati)",
        ],
    },
    OffTopicRule {
        name: "prevention_only",
        patterns: &[
            r"\b(?:sicurezza\s+stradale|prevenzione)\s+(?:senza|non)\s+(?:incidente|sinistro)",
        ],
    },
    OffTopicRule {
        name: "rail_accident",
        patterns: &[
            r"\b(?:incidente|disastro|tragedia)\s+ferroviari[io]",
            r"\b(?:ferroviari[io]|treno|stazione)\s+(?:incidente|disastro|tragedia)",
            r"\b(?:tratta|linea)\s+(?:corato|andria|bari).*?(?:incidente|disastro)",
            r"\b(?:ferrotramviaria|stazione\s+centrale).*?(?:incidente|disastro)",
        ],
    },
    OffTopicRule {
        name: "commemoration",
        patterns: &[
            r"\b(?:ricordo|memoria|anniversario|commemorazione)\s+(?:del|dell['’]|dello|di)\s+(?:incidente|disastro|tragedia)",
            r"\b(?:corona\s+di\s+fiori|momento\s+di\s+raccoglimento)\s+(?:in\s+ricordo|per)",
            r"\b(?:nono|ottavo|settimo|sesto)\s+anniversario\s+(?:del|dell['’]|dello)\s+(?:incidente|disastro)",
            r"\b(?:familiari\s+delle\s+vittime|vittime\s+del)\s+(?:incidente|disastro)",
            r"\b(?:fa\s+memoria|fare\s+memoria|custodia\s+della\s+memoria)",
        ],
    },
    OffTopicRule {
        name: "car_advertising",
        patterns: &[
            r"\b(?:noleggio|noleggiare)\s+(?:a\s+lungo\s+termine|auto|veicoli)",
            r"\b(?:migliori\s+offerte|offerte\s+di|soluzione\s+del\s+noleggio)",
            r"\b(?:alla\s+scoperta\s+delle|innovazione\s+tecnologica)\s+auto",
            r"\b(?:mercato\s+auto|autovetture|veicoli\s+moderni)\s+(?:smart|sicure)",
            r"\b(?:sistemi\s+di\s+infotainment|dispositivi\s+adas|assistenza\s+alla\s+guida)",
            r"\b(?:costo\s+fisso|bilancio.*?veicolo|mobilita\s+senza\s+pensieri)",
        ],
    },
    OffTopicRule {
        name: "sport_championship",
        patterns: &[
            r"\b(?:flying\s+disc|squadra.*?qualificazione|serie\s+[abc])\s+",
            r"\b(?:campionato\s+italiano|storica\s+qualificazione)",
        ],
    },
    OffTopicRule {
        name: "homicide_investigation",
        patterns: &[
            r"\b(?:tentat[io]|tentato)\s+omicidi[io]",
            r"\b(?:omicidi[io]|agguato|in\s+carcere)\s+(?:in|a)",
            r"\b(?:ordinanza\s+di\s+custodia|indagat[ie]|procura)\s+",
            r"\b(?:marito\s+e\s+moglie|indagate.*?persone)",
        ],
    },
    OffTopicRule {
        name: "domestic_accident",
        patterns: &[
            r"\b(?:incidenti?\s+domestici?|ambiente\s+domestico)",
            r"\b(?:istat.*?incidenti?\s+domestici?|dati\s+istat.*?incidenti?)",
        ],
    },
    OffTopicRule {
        name: "natural_death",
        patterns: &[
            r"\b(?:papa|pontefice)\s+(?:francesco|ha\s+lasciat[io]|funerali)",
            r"\b(?:corteo\s+funebre|spoglie\s+mortali|sepolt[io])\s+",
            r"\b(?:santa\s+maria\s+maggiore|vescovo.*?dopo\s+la\s+morte)",
        ],
    },
    OffTopicRule {
        name: "political_clash",
        patterns: &[
            r"\b(?:scontro|contesa)\s+(?:politic[io]|elettoral[ie]|campagna\s+elettorale)",
            r"\b(?:campagna\s+elettorale|manifesto\s+elettorale|consigliere\s+comunale)",
            r"\b(?:candidat[io]\s+(?:regionale|comunale)|gruppo\s+politico|polis\s+contro)",
        ],
    },
    OffTopicRule {
        name: "roundabout_works",
        patterns: &[
            r"\b(?:nuova\s+rotatoria|rotatoria\s+sulla|realizzazione\s+di\s+una\s+rotatoria)",
            r"\b(?:consiglio\s+metropolitano|decreto\s+d['’]urgenza|disciplinare\s+di\s+finanziamento)",
            r"\b(?:all['’]incrocio.*?non\s+dove\s+si\s+verificano|dove\s+si\s+verificano\s+gli\s+incidenti)",
        ],
    },
    OffTopicRule {
        name: "traffic_ordinance",
        patterns: &[
            r"\b(?:nuovi\s+sensi\s+unici|divieti\s+di\s+fermata|variazioni\s+alla\s+viabilita)",
            r"\b(?:ordinanza.*?polizia\s+locale|comandante.*?polizia\s+locale.*?ordinanza)",
            r"\b(?:stalli\s+di\s+sosta|senso\s+unico\s+di\s+marcia|viabilita\s+cittadina)",
        ],
    },
    OffTopicRule {
        name: "historical_event",
        patterns: &[
            r"\b(?:disfida\s+di\s+barletta|anni\s+dalla\s+disfida|cavalieri\s+italiani)",
            r"\b(?:campo\s+di\s+battaglia|sfida\s+passata\s+alla\s+storia|evento\s+storico)",
        ],
    },
    OffTopicRule {
        name: "wildlife_regulation",
        patterns: &[
            r"\b(?:norma\s+anti|piano\s+straordinario.*?gestione|contenimento.*?fauna)",
            r"\b(?:coldiretti.*?strumento|approvata.*?norma|regolamento.*?approvato)",
            r"\b(?:emergenza.*?cinghiali|fauna\s+selvatica.*?puglia)",
        ],
    },
    OffTopicRule {
        name: "theatre",
        patterns: &[
            r"\b(?:alunni.*?portano.*?teatro|spettacolo.*?teatro|messo\s+in\s+scena)",
            r"\b(?:liceo.*?teatro|antigone.*?sofocle|teatro\s+comunale)",
        ],
    },
    OffTopicRule {
        name: "places_and_buildings",
        patterns: &[
            r"\b(?:masseria|masseria.*?resist.*?degrado|biciclette.*?bosco)",
            r"\b(?:gallerie.*?alberate|bosco.*?scoparella|macchia\s+boschiva)",
        ],
    },
    OffTopicRule {
        name: "personal_commemoration",
        patterns: &[
            r"\b(?:generosita.*?ricordo|ricordo\s+di.*?anni\s+fa|amici.*?colleghi.*?ricordare)",
            r"\b(?:sogni.*?irrimediabilmente\s+spezzati|perso\s+la\s+vita.*?anni\s+fa)",
            r"\b(?:donazione\s+degli\s+organi|hanno\s+vinto\s+tutti.*?piccoli\s+e\s+grandi)",
        ],
    },
    OffTopicRule {
        name: "structural_inspection",
        patterns: &[
            r"\b(?:test|verifica|verifiche)\s+(?:per|sulla|della)\s+(?:staticita|stabilita)",
            r"\b(?:staticita|stabilita)\s+(?:del|della|dello)\s+(?:cavalcavia|ponte|struttura)",
            r"\b(?:cavalcavia|ponte|struttura)\s+(?:della|del|dello)\s+(?:ex\s+\d+|strada)",
            r"\b(?:ingegner|esperto|dipartimento)\s+(?:.*?staticita|.*?verifica)",
            r"\b(?:relazione\s+sullo\s+stato|stato\s+effettivo)\s+(?:del|della|dello)\s+(?:cavalcavia|ponte)",
        ],
    },
    OffTopicRule {
        name: "gossip",
        patterns: &[
            r"\b(?:conquista|conquistato|conquista\s+un)\s+(?:calciatore|calciatrice)",
            r"\b(?:grande\s+fratello|reality|gossip)",
            r"\b(?:pizzicat[ao]|dolce\s+compagnia|affascinante)\s+(?:calciatore|calciatrice)",
            r"\b(?:serata\s+milanese|galeotta)",
        ],
    },
    OffTopicRule {
        name: "one_way_ordinance",
        patterns: &[
            r"\b(?:senso\s+unico|sensi\s+unici)\s+(?:per|di|sulla)\s+(?:via|strada)",
            r"\b(?:parte\s+(?:oggi|ufficialmente|ieri))\s+(?:il|la)\s+(?:senso\s+unico|sperimentazione)",
            r"\b(?:sperimentazione|ordinanza)\s+(?:che\s+vedra|che\s+prevede)\s+(?:via|strada)",
            r"\b(?:modifica\s+dei\s+sensi\s+di\s+marcia|sensi\s+di\s+marcia)",
            r"\b(?:ordinanza.*?prevede.*?modifica|ordinanza.*?senso\s+unico)",
            r"\b(?:primo\s+giorno\s+con\s+il\s+senso\s+unico|scattata.*?ordinanza)",
            r"\b(?:percorribile\s+esclusivamente|direzione\s+che\s+conduce)",
            r"\b(?:intersezione\s+con\s+viale|variazioni\s+alla\s+segnaletica)",
        ],
    },
    OffTopicRule {
        name: "memorial_scholarship",
        patterns: &[
            r"\b(?:borsa\s+di\s+studio|consegna.*?borsa)\s+(?:in\s+memoria|memoria\s+di)",
            r"\b(?:scomparsi|scompars[ao])\s+(?:in\s+un\s+incidente|in\s+un\s+sinistro)\s+(?:stradale\s+)?(?:nel|nel\s+\d{4})",
            r"\b(?:cerimonia\s+di\s+consegna|consegna.*?borsa)\s+(?:alla\s+studentes?|studente)",
        ],
    },
    OffTopicRule {
        name: "brawl",
        patterns: &[
            r"\b(?:rissa|risse)\s+(?:sullo|sulla|tra|tra\s+due)",
            r"\b(?:morso|morsi)\s+(?:stacca|staccato)\s+(?:il\s+)?lobo",
            r"\b(?:lobo\s+(?:sinistro|destro|dell['’]orecchio))\s+(?:staccato|staccat[ao])",
            r"\b(?:contendenti?|rivale)\s+(?:con\s+il\s+lobo|violenta\s+rissa)",
            r"\b(?:scioccante\s+epilogo|violenta\s+rissa)",
        ],
    },
    OffTopicRule {
        name: "abandoned_tyres",
        patterns: &[
            r"\b(?:rifiuti\s+speciali|pneumatici\s+abbandonati|centinaia\s+di\s+pneumatici)",
            r"\b(?:abbandonat[io]\s+(?:in\s+fretta|di\s+notte|sulla|sulle))\s+(?:strade?|corato)",
            r"\b(?:pneumatici\s+usati|facilmente\s+recuperabili)",
            r"\b(?:testo\s+unico.*?materia\s+ambientale|dlgs.*?n\.\s+\d+)",
        ],
    },
    OffTopicRule {
        name: "popular_theatre",
        patterns: &[
            r"\b(?:mistero\s+buffo|dario\s+fo|giullare|teatro\s+medievale)",
            r"\b(?:arte\s+di\s+fo|tradizione\s+istituzionale\s+del\s+teatro)",
            r"\b(?:joculatores|homo\s+ludens|homo\s+cogitans)",
            r"\b(?:commedia\s+dell['’]arte|eduardo\s+de\s+filippo)",
        ],
    },
    OffTopicRule {
        name: "opinion_letter",
        patterns: &[
            r"\b(?:caro\s+professore|compito\s+di\s+classe)",
            r"\b(?:ventina\s+di\s+anni\s+fa.*?alunno|alunno.*?anni\s+fa)",
            r"\b(?:lettera|articolo\s+di\s+opinione|opinione)",
        ],
    },
    OffTopicRule {
        name: "hit_by_train",
        patterns: &[
            r"\b(?:travolto|travolta)\s+(?:da\s+un\s+treno|da\s+un\s+convoglio)",
            r"\b(?:inseguit[ao]\s+sulle\s+rotaie|sulle\s+rotaie.*?inseguit[ao])",
            r"\b(?:finanziere|poliziotto|carabiniere)\s+(?:travolto|travolta)\s+(?:da\s+un\s+treno)",
        ],
    },
    OffTopicRule {
        name: "election_campaign",
        patterns: &[
            r"\b(?:udc|presenta.*?campagna\s+elettorale|campagna\s+di\s+comunicazione)",
            r"\b(?:candidato\s+(?:alla\s+)?(?:provincia|comune|regione))",
            r"\b(?:marketing\s+elettorale|responsabile.*?marketing|portale.*?udc)",
            r"\b(?:sub\s+commissario\s+sezionale|tavolo\s+dei\s+relatori)",
        ],
    },
    OffTopicRule {
        name: "local_sport",
        patterns: &[
            r"\b(?:basket.*?arriva|arriva.*?massafra|lotteria\s+play-off)",
            r"\b(?:campionato.*?tregua|pausa\s+pasquale.*?campionato)",
            r"\b(?:granoro\s+corato|appuntamento\s+con\s+la\s+storia)",
            r"\b(?:visione\s+dei\s+film|pubblicita\s+concede\s+fiato)",
        ],
    },
    OffTopicRule {
        name: "past_event_context",
        patterns: &[
            r"\b(?:ho\s+letto\s+della\s+morte|ho\s+letto.*?morte)\s+(?:di|del|della)",
            r"\b(?:nei\s+giorni\s+appena\s+trascorsi|giorni\s+appena\s+trascorsi)",
            r"\b(?:legittima\s+difesa|difesa\s+legittima)",
            r"\b(?:eventi\s+che\s+hanno\s+caratterizzato|caratterizzato.*?cronaca)",
        ],
    },
    OffTopicRule {
        name: "road_education",
        patterns: &[
            r"\b(?:a\s+lezione\s+di|lezione\s+di)\s+educazione\s+stradale",
            r"\b(?:educazione\s+stradale|sicurezza\s+stradale)\s+(?:nelle\s+scuole|scuola|progetto)",
            r"\b(?:progetto.*?educazione\s+stradale|capofila.*?progetto.*?scuole)",
            r"\b(?:scuola\s+media|scuole\s+(?:elementari|superiori))\s+.*?(?:educazione|sicurezza)\s+stradale",
        ],
    },
    OffTopicRule {
        name: "sick_child",
        patterns: &[
            r"\b(?:bambino\s+malato|bambini\s+malati|diritti\s+negati)",
            r"\b(?:storia\s+dolorosa|percorso\s+duro)\s+(?:di\s+un\s+bambino|bambino)",
            r"\b(?:padre.*?chiede.*?rispetto|sopravvivenza\s+del\s+bambino)",
            r"\b(?:momento\s+difficile.*?famiglia|diritti.*?bambino)",
        ],
    },
    OffTopicRule {
        name: "highway_code",
        patterns: &[
            r"\b(?:nuovo\s+)?codice\s+della\s+strada",
            r"\b(?:legge.*?n\.\s*\d+.*?modificat[ao]|articoli.*?codice)",
            r"\b(?:comandante.*?vigili\s+urbani|vigili\s+urbani.*?parla)",
            r"\b(?:confisca.*?motocicli|circolazione\s+di\s+motocicli)",
            r"\b(?:giro\s+di\s+vite.*?ministero|ministero.*?interno.*?circolazione)",
        ],
    },
    OffTopicRule {
        name: "chernobyl",
        patterns: &[
            r"\b(?:ragazzi\s+di\s+chernobyl|chernobyl|centrale\s+nucleare\s+di\s+chernobyl)",
            r"\b(?:orfani.*?chernobyl|incidente.*?centrale\s+nucleare)",
            r"\b(?:catastrofico\s+incidente.*?1986|26\s+aprile\s+1986)",
            r"\b(?:orfanotrofi.*?russia|kaluga|veronish)",
        ],
    },
    OffTopicRule {
        name: "local_economy",
        patterns: &[
            r"\b(?:disoccupazione.*?citta|disoccupazione\s+in\s+citta)",
            r"\b(?:fotografia.*?situazione\s+economica|situazione\s+economica\s+coratina)",
            r"\b(?:sociologo.*?palmisano|assessore.*?servizi\s+sociali)",
            r"\b(?:bilancio\s+comunale|camera\s+del\s+lavoro.*?cgil)",
            r"\b(?:guadagna\s+meno\s+di.*?euro|coratino.*?guadagna)",
        ],
    },
    OffTopicRule {
        name: "natural_death_memorial",
        patterns: &[
            r"\b(?:in\s+memoria\s+del|ricordo\s+dell['’])\s+(?:senatore|onorevole|deputato)",
            r"\b(?:anniversario\s+della\s+scomparsa|scomparsa\s+del)",
            r"\b(?:stroncat[ao]\s+da\s+un\s+infarto|mort[ao]\s+per\s+infarto)",
            r"\b(?:infarto.*?anni|mort[ao].*?studio.*?roma)",
            r"\b(?:lezioni\s+di\s+democrazia|azione\s+politica\s+e\s+parlamentare)",
        ],
    },
    OffTopicRule {
        name: "pedestrian_area",
        patterns: &[
            r"\b(?:area\s+pedonale|aree\s+pedonali)\s+(?:rialzat[ao]|restituisce)",
            r"\b(?:riqualificazione.*?piazza|lavori\s+di\s+riqualificazione)",
            r"\b(?:pedonalizzazione.*?piazza|piazza.*?pedonalizzazione)",
            r"\b(?:consiglieri\s+comunali.*?contestato|vespaio\s+di\s+polemiche)",
            r"\b(?:stravolgimento.*?piazza|funzione\s+di\s+luogo\s+del\s+passeggio)",
            r"\b(?:caritas.*?area\s+pedonale|restituisce.*?piazza.*?funzione)",
        ],
    },
    OffTopicRule {
        name: "covid",
        patterns: &[
            r"\b(?:tamponi?|tampone)\s+(?:e\s+festivita|nelle\s+farmacie|nei\s+centri\s+analisi)",
            r"\b(?:ondata\s+di\s+contagi|contagi.*?travolto|nuovi\s+positivi)",
            r"\b(?:terza\s+ondata|farmacie.*?centri\s+analisi)",
            r"\b(?:tamponi.*?molecolari|tamponi.*?antigenici)",
            r"\b(?:asl.*?comune.*?positivi|positivi.*?superato)",
        ],
    },
    OffTopicRule {
        name: "financial_markets",
        patterns: &[
            r"\b(?:borsa\s+e\s+investimenti|investimenti.*?mercati)",
            r"\b(?:mercati\s+finanziari|banche\s+centrali|inflazione)",
            r"\b(?:volatilita.*?mercati|risk\s+on|banchieri\s+centrali)",
            r"\b(?:mercato\s+criptovalutario|criptovalute|bitcoin|ethereum)",
            r"\b(?:monete\s+digitali|comparto.*?criptovalute)",
            r"\b(?:investimenti\s+online|trading\s+online|broker)",
            r"\b(?:strategie.*?investire|operare\s+sui\s+mercati)",
            r"\b(?:piattaforme.*?trading|piattaforme\s+internazionali)",
            r"\b(?:mercato\s+azionario|indici\s+azionari|rally\s+rialzista)",
            r"\b(?:correzione.*?mercato|terzo\s+trimestre.*?mercato)",
            r"\b(?:tendenza.*?caratterizzato.*?anno|binari\s+della\s+tendenza)",
        ],
    },
    OffTopicRule {
        name: "resistance_history",
        patterns: &[
            r"\b(?:donne\s+e\s+uomini.*?resistenza|resistenza.*?corato)",
            r"\b(?:storia\s+cittadina.*?resistenza|trilogia.*?fascismo)",
            r"\b(?:fascismo.*?citta|resistenza.*?storia)",
            r"\b(?:lotta.*?popolo\s+italiano|concittadini.*?storia)",
            r"\b(?:ultimo\s+lavoro.*?storia|volume.*?resistenza)",
        ],
    },
    OffTopicRule {
        name: "figurative_overrun",
        patterns: &[
            r"\b(?:ondata|contagi|eventi?)\s+(?:ha\s+travolto|hanno\s+travolto)",
            r"\b(?:travolto|travolta)\s+(?:le\s+festivita|dalle\s+ondate|dai\s+contagi)",
        ],
    },
    OffTopicRule {
        name: "cold_war_history",
        patterns: &[
            r"\b(?:pezzo\s+di\s+guerra\s+fredda|guerra\s+fredda.*?quadranti)",
            r"\b(?:base\s+missilistica|basi\s+missilistiche)",
            r"\b(?:murgia\s+del\s+ceraso|pedalate\s+murgiane)",
            r"\b(?:storia\s+contemporanea.*?base|protagonisti.*?storia\s+contemporanea)",
            r"\b(?:luoghi\s+strani.*?storia|destinati\s+all['’]oblio.*?storia)",
        ],
    },
    OffTopicRule {
        name: "parking_brawl",
        patterns: &[
            r"\b(?:stacc[ao]\s+a\s+morsi|morsi.*?orecchio|morso.*?lobo)",
            r"\b(?:lite\s+(?:per|a\s+causa\s+di)\s+(?:un\s+)?parcheggio|parcheggio.*?lite)",
        ],
    },
    OffTopicRule {
        name: "court_sentencing",
        patterns: &[
            r"\b(?:condannat[ao]\s+(?:a|alla)\s+(?:quasi\s+)?\d+\s+anni|pena.*?reclusione)",
            r"\b(?:rit[io]\s+abbreviato|gup\s+del\s+tribunale|tribunale\s+di\s+trani)",
            r"\b(?:pena\s+complessiva.*?anni|condannat[ao].*?reclusione)",
        ],
    },
    OffTopicRule {
        name: "council_clash",
        patterns: &[
            r"\b(?:scontro\s+in\s+consiglio|scontri\s+in\s+consiglio)",
            r"\b(?:scontro\s+verbale.*?consiglio|consiglio\s+comunale.*?scontro)",
            r"\b(?:presidente\s+del\s+consiglio\s+comunale|consigliere.*?consigliera)",
            r"\b(?:gestire.*?spegnere.*?scontro|stigmatizzare.*?parole.*?consigliere)",
            r"\b(?:ruolo\s+istituzionale.*?consiglio|prerogative.*?consiglio\s+comunale)",
        ],
    },
    OffTopicRule {
        name: "level_crossing_protest",
        patterns: &[
            r"\b(?:ostaggi\s+del\s+passaggio\s+a\s+livello|passaggio\s+a\s+livello.*?chiuso)",
            r"\b(?:protesta.*?passaggio\s+a\s+livello|passaggio\s+a\s+livello.*?protesta)",
            r"\b(?:chiusura\s+prolungata.*?passaggio|passaggio.*?chiusura\s+prolungata)",
            r"\b(?:residenti.*?confinati.*?sbarre|sbarre.*?impossibilitati)",
            r"\b(?:disagi.*?passaggio\s+a\s+livello|passaggio.*?disagi)",
            r"\b(?:via\s+bagnatoio.*?passaggio|passaggio.*?via\s+bagnatoio)",
        ],
    },
];

const NO_ACCIDENT_PATTERNS: &[&str] = &[
    r"\bnessun\s+(?:incidente|sinistro)",
    r"\bpoche\s+code",
    r"\btranquill[ao]\s+(?:sulle\s+strade|dal\s+punto\s+di\s+vista)",
    r"\b(?:giornata|giorno)\s+tranquill[ao]",
    r"\b(?:pasquetta\s+tranquilla|tranquilla.*?strade)",
    r"\b(?:task-force.*?polizia\s+municipale|polizia\s+municipale.*?task-force)",
    r"\b(?:temperatura.*?rigida|veicoli.*?percorso.*?strade.*?campagna)",
];

const GENERIC_MENTION_PATTERNS: &[&str] = &[
    r"\b(?:tra|fra)\s+(?:incendi?|incidenti?|salvataggi?)\s+(?:e|ed)\s+(?:incidenti?|incendi?)",
    r"\b(?:numerosi|molti|diversi)\s+(?:gli\s+)?(?:episodi?|incidenti?)\s+(?:che\s+si\s+sono\s+verificati|avvenuti)",
    r"\b(?:incidenti?\s+in\s+generale|attivita\s+di\s+soccorso)",
];

/// Lets a generic mention through when one specific accident is described.
const SPECIFIC_INCIDENT_PATTERNS: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un['’]?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|ieri|poco\s+fa)\s+.*?\s+(?:incidente|sinistro)",
];

const PREVIOUS_INCIDENT_PATTERN: &str = r"\b(?:ultim[ao]|precedent[ie]|passat[ao])\s+incidente\s+(?:risale|e\s+risalito|avvenut[io])\s+(?:a|al|alla)\b";

/// Lets a "last accident dates back to" article through when it also
/// reports a new one.
const NEW_INCIDENT_PATTERNS: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un['’]?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])\s+(?:questa|oggi|ieri)",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa)\s+.*?\s+(?:incidente|sinistro)",
];

const PAST_INCIDENT_PATTERN: &str = r"\b(?:scompars[aio]|mort[aio]|decedut[aio])\s+(?:in\s+un\s+)?(?:incidente|sinistro)\s+(?:stradale\s+)?nel\s+(?:19|20)\d{2}";

const CURRENT_INCIDENT_PATTERNS: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un['’]?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])\s+(?:questa|oggi|ieri|poco\s+fa)",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa|ieri)\s+.*?\s+(?:incidente|sinistro)",
    r"\b(?:incidente|sinistro)\s+(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa|ieri)",
];

const TRAFFIC_REGULATION_PATTERNS: &[&str] = &[
    r"\b(?:senso\s+unico|sensi\s+unici|ordinanza.*?viabilita|modifica.*?sensi\s+di\s+marcia)",
    r"\b(?:sperimentazione|parte\s+(?:oggi|ufficialmente))\s+(?:il|la)\s+senso\s+unico",
];

/// Lets a traffic-regulation article through when it describes a crash.
const SPECIFIC_ACCIDENT_PATTERNS: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un['’]?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa|ieri)\s+.*?\s+(?:incidente|sinistro)",
    r"\b(?:feriti?|mort[io]|decedut[io])\s+(?:in\s+seguito\s+a\s+|nell['’]\s*|nell[ao]\s+)(?:un\s+)?(?:incidente|sinistro)",
    r"\b(?:scontro|tamponamento|schianto|ribaltamento|collisione)\s+(?:tra|fra|sulla|sulle)\b",
];

const VEHICLE_INDICATORS: &[&str] = &[
    r"\b(?:auto|automobile|veicolo|macchina|vettura|motociclo|moto|bicicletta|bici|tir|camion|furgone|scooter)",
    r"\b(?:strada|via|piazza|strada\s+provinciale|strada\s+statale|sp\s*\d+|ss\s*\d+|ex\s*\d+)",
    r"\b(?:guid[ao]|conducent[ie]|autista|pilota)",
];

const ACCIDENT_INDICATORS: &[&str] = &[
    r"\b(?:incidente|sinistro|scontro|tamponamento|schianto|ribaltamento|collisione)",
    r"\b(?:travolto|investito|sbalzato|sbandato|perduto\s+il\s+controllo|uscito\s+di\s+strada)",
    r"\b(?:feriti?|mort[io]|decedut[io])\s+(?:nell['’]?\s*|nell[ao]\s+|in\s+seguito\s+a\s+un\s+)?(?:incidente|sinistro|scontro)",
];

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
}

static OFF_TOPIC: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    OFF_TOPIC_RULES
        .iter()
        .map(|rule| (rule.name, compile_all(rule.patterns)))
        .collect()
});
static NO_ACCIDENT: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(NO_ACCIDENT_PATTERNS));
static GENERIC_MENTION: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(GENERIC_MENTION_PATTERNS));
static SPECIFIC_INCIDENT: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(SPECIFIC_INCIDENT_PATTERNS));
static PREVIOUS_INCIDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PREVIOUS_INCIDENT_PATTERN).expect("valid regex"));
static NEW_INCIDENT: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(NEW_INCIDENT_PATTERNS));
static PAST_INCIDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAST_INCIDENT_PATTERN).expect("valid regex"));
static CURRENT_INCIDENT: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(CURRENT_INCIDENT_PATTERNS));
static TRAFFIC_REGULATION: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(TRAFFIC_REGULATION_PATTERNS));
static SPECIFIC_ACCIDENT: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(SPECIFIC_ACCIDENT_PATTERNS));
static VEHICLES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(VEHICLE_INDICATORS));
static ACCIDENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(ACCIDENT_INDICATORS));

fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|re| re.is_match(text))
}

/// Screens an article's full text (title, excerpt and body).
#[must_use]
pub fn screen_article(text: &str) -> ScreenVerdict {
    let normalized = normalize(text);

    if let Some((name, _)) = OFF_TOPIC
        .iter()
        .find(|(_, patterns)| any_match(patterns, &normalized))
    {
        log::debug!("Off-topic rule {name} matched");
        return ScreenVerdict::Rejected {
            reason: RejectReason::OffTopic,
            rule: Some(*name),
        };
    }

    if any_match(&NO_ACCIDENT, &normalized) {
        return ScreenVerdict::rejected(RejectReason::NoAccidentReported);
    }

    if any_match(&GENERIC_MENTION, &normalized) && !any_match(&SPECIFIC_INCIDENT, &normalized) {
        return ScreenVerdict::rejected(RejectReason::GenericMention);
    }

    if PREVIOUS_INCIDENT.is_match(&normalized) && !any_match(&NEW_INCIDENT, &normalized) {
        return ScreenVerdict::rejected(RejectReason::PreviousIncidentOnly);
    }

    if PAST_INCIDENT.is_match(&normalized) && !any_match(&CURRENT_INCIDENT, &normalized) {
        return ScreenVerdict::rejected(RejectReason::PastIncidentOnly);
    }

    if any_match(&TRAFFIC_REGULATION, &normalized) && !any_match(&SPECIFIC_ACCIDENT, &normalized)
    {
        return ScreenVerdict::rejected(RejectReason::TrafficRegulationOnly);
    }

    if !any_match(&VEHICLES, &normalized) {
        return ScreenVerdict::rejected(RejectReason::MissingVehicle);
    }

    if !any_match(&ACCIDENTS, &normalized) {
        return ScreenVerdict::rejected(RejectReason::MissingAccident);
    }

    ScreenVerdict::Kept
}
